//! SQL schema definitions for the in-memory SQLite database.
//!
//! One table per indicator family, each keyed by `(region, year)`. The
//! primary key is what rejects duplicate keys within a family.

use hcr_types::Indicator;

/// Table holding the records of one indicator family.
pub fn table_name(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::WorkforceCount => "health_workers",
        Indicator::InstitutionCount => "healthcare_institutions",
        Indicator::ServiceLevel => "healthcare_services",
    }
}

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
/// - `health_workers` - healthcare worker counts
/// - `healthcare_institutions` - healthcare institution counts
/// - `healthcare_services` - healthcare service levels
///
/// The unified table is never stored; it is derived on the fly by
/// [`Database::query_unified`](crate::Database::query_unified).
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS health_workers (
        region TEXT NOT NULL,
        year INTEGER NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (region, year)
    );
    CREATE INDEX IF NOT EXISTS idx_workers_year ON health_workers(year);

    CREATE TABLE IF NOT EXISTS healthcare_institutions (
        region TEXT NOT NULL,
        year INTEGER NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (region, year)
    );
    CREATE INDEX IF NOT EXISTS idx_institutions_year ON healthcare_institutions(year);

    CREATE TABLE IF NOT EXISTS healthcare_services (
        region TEXT NOT NULL,
        year INTEGER NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (region, year)
    );
    CREATE INDEX IF NOT EXISTS idx_services_year ON healthcare_services(year);
    "#
}
