//! Calorie intake log.
//!
//! An independent, date-stamped list of food entries. Append and delete
//! only; the only derived figure is a per-day total used for display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged food item
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalorieEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub food: String,
    pub calories: u32,
    #[serde(default)]
    pub protein_g: u32,
    #[serde(default)]
    pub carbs_g: u32,
    #[serde(default)]
    pub fats_g: u32,
}

/// The persisted calorie log
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CalorieLog {
    #[serde(default)]
    pub entries: Vec<CalorieEntry>,
}

impl CalorieLog {
    /// Append an entry
    ///
    /// Declines when the food name is blank or calories is zero.
    pub fn add(&mut self, entry: CalorieEntry) -> bool {
        if entry.food.trim().is_empty() || entry.calories == 0 {
            tracing::warn!("Declining calorie entry: missing food or calories");
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Delete an entry by id
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Entries for one date, in insertion order
    pub fn entries_for(&self, date: NaiveDate) -> Vec<&CalorieEntry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    /// Total calories logged for one date
    pub fn total_for(&self, date: NaiveDate) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.date == date)
            .map(|e| e.calories)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(food: &str, calories: u32, date: &str) -> CalorieEntry {
        CalorieEntry {
            id: Uuid::new_v4(),
            date: date.parse().unwrap(),
            food: food.into(),
            calories,
            protein_g: 0,
            carbs_g: 0,
            fats_g: 0,
        }
    }

    #[test]
    fn test_add_and_total() {
        let mut log = CalorieLog::default();
        assert!(log.add(entry("Oatmeal", 350, "2024-05-01")));
        assert!(log.add(entry("Chicken", 520, "2024-05-01")));
        assert!(log.add(entry("Toast", 200, "2024-05-02")));

        assert_eq!(log.total_for("2024-05-01".parse().unwrap()), 870);
        assert_eq!(log.entries_for("2024-05-02".parse().unwrap()).len(), 1);
    }

    #[test]
    fn test_invalid_entry_is_declined() {
        let mut log = CalorieLog::default();
        assert!(!log.add(entry("  ", 350, "2024-05-01")));
        assert!(!log.add(entry("Rice", 0, "2024-05-01")));
        assert!(log.entries.is_empty());
    }

    #[test]
    fn test_delete_by_id() {
        let mut log = CalorieLog::default();
        let e = entry("Eggs", 180, "2024-05-01");
        let id = e.id;
        log.add(e);

        assert!(log.delete(id));
        assert!(!log.delete(id));
        assert!(log.entries.is_empty());
    }
}
