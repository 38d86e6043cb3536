//! Unit conversion between metric (kg, cm) and US customary (lb, in).
//!
//! Conversions are applied only at input/output boundaries; stored values
//! keep the unit they were recorded in. The kg/lb pair is not bit-exact
//! under round-trip (2.20462 and 0.453592 are truncated constants); the
//! accepted error is well under 0.1 for bodyweight-range values, and
//! display rounds to one decimal place anyway.

/// Kilograms to pounds
pub fn kg_to_lb(kg: f64) -> f64 {
    kg * 2.20462
}

/// Pounds to kilograms
pub fn lb_to_kg(lb: f64) -> f64 {
    lb * 0.453592
}

/// Centimetres to inches
pub fn cm_to_in(cm: f64) -> f64 {
    cm * 0.393701
}

/// Inches to centimetres
pub fn in_to_cm(inches: f64) -> f64 {
    inches * 2.54
}

/// Feet and inches to total inches (US height entry)
pub fn feet_to_in(feet: f64, inches: f64) -> f64 {
    feet * 12.0 + inches
}

/// Round to one decimal place for display
///
/// Applied at the presentation boundary only, never to stored values.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kg_lb_round_trip_within_tolerance() {
        for x in [30.0, 55.5, 70.0, 102.3, 150.0, 200.0] {
            let back = kg_to_lb(lb_to_kg(x));
            assert!(
                (back - x).abs() < 0.1,
                "round trip drifted too far: {} -> {}",
                x,
                back
            );
        }
    }

    #[test]
    fn test_known_conversions() {
        assert!((kg_to_lb(100.0) - 220.462).abs() < 1e-9);
        assert!((lb_to_kg(100.0) - 45.3592).abs() < 1e-9);
        assert!((cm_to_in(100.0) - 39.3701).abs() < 1e-9);
        assert!((in_to_cm(10.0) - 25.4).abs() < 1e-9);
    }

    #[test]
    fn test_feet_to_inches() {
        assert_eq!(feet_to_in(5.0, 10.0), 70.0);
        assert_eq!(feet_to_in(6.0, 0.0), 72.0);
    }

    #[test]
    fn test_round_tenth() {
        assert_eq!(round_tenth(154.32345), 154.3);
        assert_eq!(round_tenth(2.25), 2.3); // f64::round ties away from zero
        assert_eq!(round_tenth(70.0), 70.0);
    }
}
