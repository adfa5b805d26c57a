//! Query result model structs for the unified indicator table.
//!
//! All structs derive `Serialize` so they can be exported as CSV or JSON.

use std::collections::BTreeSet;

use hcr_types::Indicator;
use serde::{Deserialize, Serialize};

/// One joined record per (region, year).
///
/// A `None` value means the family did not report that key. It is never
/// replaced by zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnifiedRow {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Health_Workers")]
    pub workforce_count: Option<f64>,
    #[serde(rename = "Healthcare_Institutions")]
    pub institution_count: Option<f64>,
    #[serde(rename = "Healthcare_Services")]
    pub service_level: Option<f64>,
}

impl UnifiedRow {
    /// The value reported for `indicator`, if any.
    pub fn value(&self, indicator: Indicator) -> Option<f64> {
        match indicator {
            Indicator::WorkforceCount => self.workforce_count,
            Indicator::InstitutionCount => self.institution_count,
            Indicator::ServiceLevel => self.service_level,
        }
    }
}

/// The merged dataset, built once at startup and read-only afterwards.
///
/// Row order carries no meaning; consumers that need an order sort
/// for themselves.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct UnifiedTable {
    rows: Vec<UnifiedRow>,
}

impl UnifiedTable {
    /// Wrap already-joined rows. Keys are expected to be unique; use
    /// [`merge`](crate::merge) to build a table from indicator records.
    pub fn new(rows: Vec<UnifiedRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[UnifiedRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UnifiedRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up the row for one key.
    pub fn get(&self, region: &str, year: i32) -> Option<&UnifiedRow> {
        self.rows
            .iter()
            .find(|row| row.region == region && row.year == year)
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.rows.iter().map(|row| row.year).collect();
        years.into_iter().collect()
    }

    /// Distinct region names, sorted.
    pub fn regions(&self) -> Vec<String> {
        let regions: BTreeSet<&str> = self.rows.iter().map(|row| row.region.as_str()).collect();
        regions.into_iter().map(str::to_string).collect()
    }

    /// The most recent year present anywhere in the table.
    pub fn latest_year(&self) -> Option<i32> {
        self.rows.iter().map(|row| row.year).max()
    }
}

impl<'a> IntoIterator for &'a UnifiedTable {
    type Item = &'a UnifiedRow;
    type IntoIter = std::slice::Iter<'a, UnifiedRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(region: &str, year: i32, w: Option<f64>, i: Option<f64>, s: Option<f64>) -> UnifiedRow {
        UnifiedRow {
            region: region.to_string(),
            year,
            workforce_count: w,
            institution_count: i,
            service_level: s,
        }
    }

    #[test]
    fn value_selects_the_family() {
        let r = row("Beijing", 2023, Some(1.0), None, Some(3.0));
        assert_eq!(r.value(Indicator::WorkforceCount), Some(1.0));
        assert_eq!(r.value(Indicator::InstitutionCount), None);
        assert_eq!(r.value(Indicator::ServiceLevel), Some(3.0));
    }

    #[test]
    fn years_and_regions_are_sorted_and_distinct() {
        let table = UnifiedTable::new(vec![
            row("Tianjin", 2023, None, None, None),
            row("Beijing", 2021, None, None, None),
            row("Beijing", 2023, None, None, None),
            row("Hebei", 2022, None, None, None),
        ]);
        assert_eq!(table.years(), vec![2021, 2022, 2023]);
        assert_eq!(table.regions(), vec!["Beijing", "Hebei", "Tianjin"]);
        assert_eq!(table.latest_year(), Some(2023));
    }

    #[test]
    fn empty_table_has_no_latest_year() {
        let table = UnifiedTable::default();
        assert!(table.is_empty());
        assert_eq!(table.latest_year(), None);
        assert!(table.years().is_empty());
    }

    #[test]
    fn get_finds_exact_key() {
        let table = UnifiedTable::new(vec![
            row("Beijing", 2022, Some(2.0), None, None),
            row("Beijing", 2023, Some(3.0), None, None),
        ]);
        assert_eq!(table.get("Beijing", 2023).unwrap().workforce_count, Some(3.0));
        assert!(table.get("Beijing", 2021).is_none());
        assert!(table.get("Tianjin", 2023).is_none());
    }
}
