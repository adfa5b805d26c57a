//! Loading functions for populating the indicator tables.
//!
//! Records are inserted with a plain `INSERT`, so a second record for the
//! same `(region, year)` within one family trips the primary key and is
//! reported as [`SchemaError::DuplicateKey`]. Records that are skipped for a
//! non-finite value never reach the table, so their keys are also tracked
//! on the Rust side.
//!
//! # CSV Format
//!
//! All three families share the same layout (with headers):
//! `Region,Year,<indicator key>`

use std::collections::BTreeSet;

use crate::schema::table_name;
use crate::{Database, Result};
use hcr_types::{Indicator, IndicatorTable, SchemaError};
use rusqlite::{params, ErrorCode};

impl Database {
    /// Load every record of one indicator family.
    ///
    /// Values that are not finite carry no information and are skipped, the
    /// same as unreported values in CSV input.
    pub fn load_indicator_table(&self, table: &IndicatorTable) -> Result<()> {
        let indicator = table.indicator();
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "INSERT INTO {} (region, year, value) VALUES (?1, ?2, ?3)",
            table_name(indicator)
        ))?;

        let mut seen: BTreeSet<(&str, i32)> = BTreeSet::new();
        let mut count = 0u32;
        let mut skipped = 0u32;
        for (index, record) in table.records().iter().enumerate() {
            if record.region.trim().is_empty() {
                return Err(SchemaError::MissingRegion {
                    indicator,
                    record: index + 1,
                }
                .into());
            }
            if !seen.insert((record.region.as_str(), record.year)) {
                return Err(SchemaError::DuplicateKey {
                    indicator,
                    region: record.region.clone(),
                    year: record.year,
                }
                .into());
            }
            if !record.value.is_finite() {
                skipped += 1;
                continue;
            }

            match stmt.execute(params![record.region, record.year, record.value]) {
                Ok(_) => count += 1,
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == ErrorCode::ConstraintViolation =>
                {
                    return Err(SchemaError::DuplicateKey {
                        indicator,
                        region: record.region.clone(),
                        year: record.year,
                    }
                    .into());
                }
                Err(e) => return Err(e.into()),
            }
        }
        log::info!(
            "loader: Loaded {} {} records, skipped {} non-finite",
            count,
            indicator,
            skipped
        );
        Ok(())
    }

    /// Parse and load one indicator family from a CSV string.
    ///
    /// Expected format (with headers): `Region,Year,<indicator key>`
    ///
    /// # Example CSV
    /// ```text
    /// Region,Year,Healthcare_Institutions
    /// Beijing,2023,12518
    /// Tianjin,2023,6801
    /// ```
    pub fn load_indicator_csv(&self, indicator: Indicator, csv_data: &str) -> Result<()> {
        let table = IndicatorTable::from_csv(indicator, csv_data)?;
        self.load_indicator_table(&table)
    }
}
