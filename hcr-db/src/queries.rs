//! Typed query methods for retrieving the joined indicator data.
//!
//! # Join Convention
//!
//! The unified table is a full outer join on `(region, year)`: the key set
//! is the union of the three family key sets, and every family is attached
//! with a `LEFT JOIN`, so a key a family did not report comes back as
//! `NULL` and maps to `None`.

use crate::models::UnifiedRow;
use crate::schema::table_name;
use crate::{Database, Result};
use hcr_types::Indicator;

impl Database {
    /// Get the unified rows, one per (region, year) reported by any family.
    ///
    /// Ordered by region then year. The order is only there to keep output
    /// stable; it has no meaning.
    pub fn query_unified(&self) -> Result<Vec<UnifiedRow>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "WITH keys AS (
                 SELECT region, year FROM health_workers
                 UNION
                 SELECT region, year FROM healthcare_institutions
                 UNION
                 SELECT region, year FROM healthcare_services
             )
             SELECT k.region, k.year, w.value, i.value, s.value
             FROM keys k
             LEFT JOIN health_workers w ON w.region = k.region AND w.year = k.year
             LEFT JOIN healthcare_institutions i ON i.region = k.region AND i.year = k.year
             LEFT JOIN healthcare_services s ON s.region = k.region AND s.year = k.year
             ORDER BY k.region, k.year",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(UnifiedRow {
                    region: row.get(0)?,
                    year: row.get(1)?,
                    workforce_count: row.get(2)?,
                    institution_count: row.get(3)?,
                    service_level: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::info!("query: query_unified returned {} records", rows.len());
        Ok(rows)
    }

    /// Number of records loaded for one indicator family.
    pub fn query_record_count(&self, indicator: Indicator) -> Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", table_name(indicator)),
            [],
            |row| row.get(0),
        )?;
        log::debug!("query: {} holds {} records", indicator, count);
        Ok(count as usize)
    }
}
