//! Weekly split table.
//!
//! Maps a days-per-week count to the muscle groups trained on each day.
//! Only 3 to 6 days have rows; other counts are clamped into that range.

use crate::catalog::Catalog;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Fewest training days with a split row
pub const MIN_SPLIT_DAYS: u8 = 3;

/// Most training days with a split row
pub const MAX_SPLIT_DAYS: u8 = 6;

/// Day labels in the order training days are assigned
pub const DAY_NAMES: &[&str] = &[
    "Monday",
    "Wednesday",
    "Friday",
    "Saturday",
    "Sunday",
    "Tuesday",
    "Thursday",
];

/// Per-day muscle groups keyed by days per week
#[derive(Clone, Debug, Default)]
pub struct SplitTable {
    pub rows: BTreeMap<u8, Vec<Vec<String>>>,
}

static DEFAULT_SPLITS: Lazy<SplitTable> = Lazy::new(build_default_split_table);

/// Get a reference to the cached default split table
pub fn get_default_split_table() -> &'static SplitTable {
    &DEFAULT_SPLITS
}

fn day(groups: &[&str]) -> Vec<String> {
    groups.iter().map(|g| g.to_string()).collect()
}

/// Builds the default split table
pub fn build_default_split_table() -> SplitTable {
    let mut rows = BTreeMap::new();

    rows.insert(
        3,
        vec![
            day(&["Chest", "Shoulders", "Arms"]),
            day(&["Back", "Core"]),
            day(&["Legs", "Cardio"]),
        ],
    );

    rows.insert(
        4,
        vec![
            day(&["Chest", "Arms"]),
            day(&["Back", "Core"]),
            day(&["Legs", "Cardio"]),
            day(&["Shoulders", "Flexibility"]),
        ],
    );

    rows.insert(
        5,
        vec![
            day(&["Chest", "Arms"]),
            day(&["Back"]),
            day(&["Legs"]),
            day(&["Shoulders", "Core"]),
            day(&["Cardio", "Flexibility"]),
        ],
    );

    rows.insert(
        6,
        vec![
            day(&["Chest"]),
            day(&["Back"]),
            day(&["Legs"]),
            day(&["Shoulders", "Arms"]),
            day(&["Core", "Cardio"]),
            day(&["Full Body", "Flexibility"]),
        ],
    );

    SplitTable { rows }
}

/// Clamp a requested days-per-week count into the split table's range
pub fn clamp_days(days_per_week: u8) -> u8 {
    days_per_week.clamp(MIN_SPLIT_DAYS, MAX_SPLIT_DAYS)
}

impl SplitTable {
    /// Split row for a requested days-per-week count, after clamping
    pub fn row_for(&self, days_per_week: u8) -> Option<&[Vec<String>]> {
        self.rows
            .get(&clamp_days(days_per_week))
            .map(Vec::as_slice)
    }

    /// Validate the table, optionally against the catalog it draws from
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self, catalog: Option<&Catalog>) -> Vec<String> {
        let mut errors = Vec::new();

        for days in MIN_SPLIT_DAYS..=MAX_SPLIT_DAYS {
            if !self.rows.contains_key(&days) {
                errors.push(format!("Split table has no row for {} days", days));
            }
        }

        for (days, row) in &self.rows {
            if !(MIN_SPLIT_DAYS..=MAX_SPLIT_DAYS).contains(days) {
                errors.push(format!(
                    "Split row for {} days is unreachable after clamping",
                    days
                ));
            }
            if row.is_empty() {
                errors.push(format!("Split row for {} days has no training days", days));
            }
            if row.len() > DAY_NAMES.len() {
                errors.push(format!(
                    "Split row for {} days has {} entries but only {} day names exist",
                    days,
                    row.len(),
                    DAY_NAMES.len()
                ));
            }

            for groups in row {
                if groups.is_empty() {
                    errors.push(format!("Split row for {} days has an empty day", days));
                }
                if let Some(catalog) = catalog {
                    for group in groups {
                        if !catalog.contains_group(group) {
                            errors.push(format!(
                                "Split row for {} days references unknown muscle group '{}'",
                                days, group
                            ));
                        }
                    }
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_default_catalog;

    #[test]
    fn test_clamp_days() {
        assert_eq!(clamp_days(0), 3);
        assert_eq!(clamp_days(1), 3);
        assert_eq!(clamp_days(4), 4);
        assert_eq!(clamp_days(7), 6);
        assert_eq!(clamp_days(u8::MAX), 6);
    }

    #[test]
    fn test_row_lengths_match_day_count() {
        let table = build_default_split_table();
        for days in MIN_SPLIT_DAYS..=MAX_SPLIT_DAYS {
            assert_eq!(table.row_for(days).unwrap().len(), days as usize);
        }
    }

    #[test]
    fn test_out_of_range_requests_share_edge_rows() {
        let table = get_default_split_table();
        assert_eq!(table.row_for(1), table.row_for(3));
        assert_eq!(table.row_for(7), table.row_for(6));
    }

    #[test]
    fn test_default_table_validates_against_catalog() {
        let catalog = build_default_catalog();
        let errors = build_default_split_table().validate(Some(&catalog));
        assert!(errors.is_empty(), "Split table errors: {:?}", errors);
    }

    #[test]
    fn test_validate_flags_missing_and_oversized_rows() {
        let mut table = SplitTable::default();
        table.rows.insert(3, vec![day(&["Chest"]); DAY_NAMES.len() + 1]);
        table.rows.insert(4, vec![day(&["Neck"])]);

        let catalog = build_default_catalog();
        let errors = table.validate(Some(&catalog));

        assert!(errors.iter().any(|e| e.contains("no row for 5 days")));
        assert!(errors.iter().any(|e| e.contains("only 7 day names")));
        assert!(errors.iter().any(|e| e.contains("unknown muscle group 'Neck'")));
    }
}
