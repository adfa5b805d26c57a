use std::collections::BTreeSet;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::{Indicator, SchemaError};

/// A single indicator value reported for a region in a given year.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct IndicatorRecord {
    /// Region name (e.g. "Beijing", or "National" for the country total)
    pub region: String,
    /// Calendar year of the report
    pub year: i32,
    /// Reported value; its unit depends on the indicator family
    pub value: f64,
}

impl IndicatorRecord {
    pub fn new(region: impl Into<String>, year: i32, value: f64) -> Self {
        Self {
            region: region.into(),
            year,
            value,
        }
    }
}

/// All records of one indicator family.
#[derive(Debug, PartialEq, Clone)]
pub struct IndicatorTable {
    indicator: Indicator,
    records: Vec<IndicatorRecord>,
}

impl IndicatorTable {
    pub fn new(indicator: Indicator, records: Vec<IndicatorRecord>) -> Self {
        Self { indicator, records }
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn records(&self) -> &[IndicatorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parse a CSV string of indicator records.
    ///
    /// Expected format (with headers): `Region,Year,<indicator key>`
    ///
    /// A header other than the one above, a blank region or year, or a
    /// repeated (region, year) fails with [`SchemaError`]. Rows whose value
    /// is blank or non-numeric were not reported for that (region, year) and
    /// are skipped, so the key shows up as absent after the join. A skipped
    /// row still claims its key.
    ///
    /// # Example CSV
    /// ```text
    /// Region,Year,Health_Workers
    /// Beijing,2023,348066
    /// ```
    pub fn from_csv(indicator: Indicator, csv_data: &str) -> Result<Self, SchemaError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers = rdr
            .headers()
            .map_err(|source| SchemaError::Csv { indicator, source })?;
        let expected = ["Region", "Year", indicator.key()];
        let matches = headers.len() >= expected.len()
            && expected
                .iter()
                .zip(headers.iter())
                .all(|(want, got)| got.trim() == *want);
        if !matches {
            return Err(SchemaError::UnexpectedHeader {
                indicator,
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let mut records = Vec::new();
        let mut seen = BTreeSet::new();
        let mut skipped = 0u32;
        for (index, result) in rdr.records().enumerate() {
            let record_no = index + 1;
            let r = result.map_err(|source| SchemaError::Csv { indicator, source })?;
            let region = r.get(0).unwrap_or("").trim();
            let year_str = r.get(1).unwrap_or("").trim();
            let value_str = r.get(2).unwrap_or("").trim();

            if region.is_empty() {
                return Err(SchemaError::MissingRegion {
                    indicator,
                    record: record_no,
                });
            }
            if year_str.is_empty() {
                return Err(SchemaError::MissingYear {
                    indicator,
                    record: record_no,
                });
            }
            let year: i32 = year_str.parse().map_err(|_| SchemaError::InvalidYear {
                indicator,
                record: record_no,
                value: year_str.to_string(),
            })?;

            if !seen.insert((region.to_string(), year)) {
                return Err(SchemaError::DuplicateKey {
                    indicator,
                    region: region.to_string(),
                    year,
                });
            }

            let value = match value_str.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            records.push(IndicatorRecord::new(region, year, value));
        }
        if skipped > 0 {
            log::warn!(
                "record: skipped {} unreported {} values",
                skipped,
                indicator
            );
        }
        log::info!("record: parsed {} {} records", records.len(), indicator);
        Ok(Self::new(indicator, records))
    }
}
