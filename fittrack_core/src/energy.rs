//! Energy-expenditure estimates: BMR, TDEE, and calorie recommendations.
//!
//! Internal arithmetic is always metric; a profile recorded in US units is
//! converted through `units` first. Formulas:
//! - Mifflin-St Jeor BMR when body fat is unknown
//! - Katch-McArdle BMR when body fat is supplied
//! - TDEE = BMR x activity multiplier
//! - Goal adjustment from a weekly rate of change at 7700 kcal per kg

use crate::units;
use serde::{Deserialize, Serialize};

use crate::types::UnitSystem;

/// Energy density of body fat (kcal per kg)
const KCAL_PER_KG: f64 = 7700.0;

/// Default rate of change when the profile doesn't specify one (kg/week)
const DEFAULT_WEEKLY_RATE_KG: f64 = 0.5;

/// Biological sex for the Mifflin-St Jeor constant
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Activity level multiplier buckets
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    /// TDEE multiplier for this activity level
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }
}

/// Weight-change goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

/// Cadence the user expressed their rate of change in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RatePeriod {
    #[default]
    Week,
    Month,
}

/// Calculator input, form-local and never persisted
///
/// `weight` and `height` are in the profile's `unit` system (kg/cm or
/// lb/in); `rate` follows the same weight unit per `rate_period`.
#[derive(Clone, Debug)]
pub struct UserProfile {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub body_fat_percent: Option<f64>,
    pub rate: Option<f64>,
    pub rate_period: RatePeriod,
    pub unit: UnitSystem,
}

impl UserProfile {
    fn weight_kg(&self) -> f64 {
        match self.unit {
            UnitSystem::Metric => self.weight,
            UnitSystem::Us => units::lb_to_kg(self.weight),
        }
    }

    fn height_cm(&self) -> f64 {
        match self.unit {
            UnitSystem::Metric => self.height,
            UnitSystem::Us => units::in_to_cm(self.height),
        }
    }
}

/// Derived energy estimates for a profile
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalorieEstimate {
    pub bmr: f64,
    pub tdee: i64,
    pub recommended: i64,
}

/// Basal metabolic rate in kcal/day
///
/// Katch-McArdle when body fat is supplied, Mifflin-St Jeor otherwise.
pub fn bmr(profile: &UserProfile) -> f64 {
    let weight_kg = profile.weight_kg();
    let height_cm = profile.height_cm();

    if let Some(body_fat) = profile.body_fat_percent {
        let lean_body_mass = weight_kg * (1.0 - body_fat / 100.0);
        return 370.0 + 21.6 * lean_body_mass;
    }

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * profile.age as f64;
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Total daily energy expenditure, rounded to whole kcal
pub fn tdee(profile: &UserProfile) -> i64 {
    (bmr(profile) * profile.activity_level.multiplier()).round() as i64
}

/// Daily calorie target for the profile's goal
///
/// Maintain returns TDEE unchanged. Lose/gain derive a weekly rate in kg
/// (monthly rates are divided by 4, US rates converted from lb, default
/// 0.5 kg/week) and apply `rate * 7700 / 7` kcal/day below or above TDEE.
pub fn recommend_calories(profile: &UserProfile) -> CalorieEstimate {
    let bmr = bmr(profile);
    let tdee = (bmr * profile.activity_level.multiplier()).round() as i64;

    let recommended = match profile.goal {
        Goal::Maintain => tdee,
        Goal::Lose | Goal::Gain => {
            let weekly_rate_kg = match profile.rate {
                Some(rate) => {
                    // Monthly rates approximate to weekly by dividing by 4
                    let weekly = match profile.rate_period {
                        RatePeriod::Month => rate / 4.0,
                        RatePeriod::Week => rate,
                    };
                    match profile.unit {
                        UnitSystem::Metric => weekly,
                        UnitSystem::Us => units::lb_to_kg(weekly),
                    }
                }
                None => DEFAULT_WEEKLY_RATE_KG,
            };

            let adjustment = (weekly_rate_kg * KCAL_PER_KG / 7.0).round() as i64;
            if profile.goal == Goal::Lose {
                tdee - adjustment
            } else {
                tdee + adjustment
            }
        }
    };

    CalorieEstimate {
        bmr,
        tdee,
        recommended,
    }
}
