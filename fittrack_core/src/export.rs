//! CSV export of measurement history and the calorie log.
//!
//! Exports append to their target file (creating it with headers when
//! empty) and fsync before returning, so a partially-written export is
//! never mistaken for a complete one.

use crate::calories::CalorieLog;
use crate::types::ActivityLedger;
use crate::Result;
use std::fs::OpenOptions;
use std::path::Path;

/// A measurement row in the CSV output
#[derive(Debug, serde::Serialize)]
struct MeasurementRow {
    date: String,
    weight: f64,
    height: Option<f64>,
    body_fat_percent: Option<f64>,
    unit: String,
}

/// A calorie-log row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CalorieRow {
    id: String,
    date: String,
    food: String,
    calories: u32,
    protein_g: u32,
    carbs_g: u32,
    fats_g: u32,
}

/// Export the ledger's measurement history to a CSV file
///
/// Values are written in their recorded unit; the unit column makes the
/// rows self-describing. Returns the number of rows written.
pub fn export_measurements(ledger: &ActivityLedger, csv_path: &Path) -> Result<usize> {
    let rows: Vec<MeasurementRow> = ledger
        .measurement_history()
        .into_iter()
        .map(|(date, m)| MeasurementRow {
            date: date.to_string(),
            weight: m.weight,
            height: m.height,
            body_fat_percent: m.body_fat_percent,
            unit: m.unit.weight_label().into(),
        })
        .collect();

    write_rows(csv_path, &rows)
}

/// Export the calorie log to a CSV file
pub fn export_calorie_log(log: &CalorieLog, csv_path: &Path) -> Result<usize> {
    let rows: Vec<CalorieRow> = log
        .entries
        .iter()
        .map(|e| CalorieRow {
            id: e.id.to_string(),
            date: e.date.to_string(),
            food: e.food.clone(),
            calories: e.calories,
            protein_g: e.protein_g,
            carbs_g: e.carbs_g,
            fats_g: e.fats_g,
        })
        .collect();

    write_rows(csv_path, &rows)
}

fn write_rows<T: serde::Serialize>(csv_path: &Path, rows: &[T]) -> Result<usize> {
    if rows.is_empty() {
        tracing::info!("Nothing to export to {:?}", csv_path);
        return Ok(0);
    }

    // Ensure parent directory exists
    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(csv_path)?;

    // Write headers only when the file is empty
    let needs_headers = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_headers)
        .from_writer(file);

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Wrote {} rows to {:?}", rows.len(), csv_path);
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calories::CalorieEntry;
    use crate::types::{Measurement, UnitSystem};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_export_measurements() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("measurements.csv");

        let mut ledger = ActivityLedger::default();
        ledger.upsert_measurement(
            date("2024-01-01"),
            Measurement {
                weight: 72.5,
                height: Some(175.0),
                body_fat_percent: None,
                unit: UnitSystem::Metric,
            },
        );
        ledger.upsert_measurement(
            date("2024-01-08"),
            Measurement {
                weight: 72.1,
                height: None,
                body_fat_percent: Some(17.5),
                unit: UnitSystem::Metric,
            },
        );

        let count = export_measurements(&ledger, &csv_path).unwrap();
        assert_eq!(count, 2);

        let contents = std::fs::read_to_string(&csv_path).unwrap();
        assert!(contents.starts_with("date,weight,height,body_fat_percent,unit"));
        assert!(contents.contains("2024-01-01,72.5,175.0,,kg"));
    }

    #[test]
    fn test_export_appends_without_duplicate_headers() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("calories.csv");

        let mut log = CalorieLog::default();
        log.add(CalorieEntry {
            id: Uuid::new_v4(),
            date: date("2024-05-01"),
            food: "Oatmeal".into(),
            calories: 350,
            protein_g: 12,
            carbs_g: 60,
            fats_g: 6,
        });

        export_calorie_log(&log, &csv_path).unwrap();
        export_calorie_log(&log, &csv_path).unwrap();

        let contents = std::fs::read_to_string(&csv_path).unwrap();
        let header_count = contents.lines().filter(|l| l.starts_with("id,date")).count();
        assert_eq!(header_count, 1);
        assert_eq!(contents.lines().count(), 3); // header + two data rows
    }

    #[test]
    fn test_empty_export_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("empty.csv");

        let count = export_measurements(&ActivityLedger::default(), &csv_path).unwrap();
        assert_eq!(count, 0);
        assert!(!csv_path.exists());
    }
}
