//! In-memory SQLite layer joining the healthcare indicator tables.
//!
//! Each indicator family is loaded into its own table keyed by
//! `(region, year)`, and the unified table is derived with a single full
//! outer join over the union of the three key sets.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability, single-threaded
//! - In-memory SQLite via `rusqlite`
//! - CSV data parsed by `hcr-types` and embedded by the consuming binary
//! - Typed query methods returning serializable structs
//!
//! # Usage
//!
//! ```rust
//! use hcr_db::Database;
//! use hcr_types::Indicator;
//!
//! let db = Database::new().unwrap();
//! db.load_indicator_csv(Indicator::WorkforceCount, "Region,Year,Health_Workers\nBeijing,2023,348066\n").unwrap();
//! db.load_indicator_csv(Indicator::ServiceLevel, "Region,Year,Healthcare_Services\nTianjin,2023,1.1\n").unwrap();
//!
//! let unified = db.unified_table().unwrap();
//! assert_eq!(unified.len(), 2);
//! ```
//!
//! Callers that just want the joined rows use [`merge`], which builds a
//! throwaway database, loads every table and returns the [`UnifiedTable`].

mod error;
mod loader;
pub mod models;
mod queries;
pub mod schema;

pub use error::{DbError, Result};
pub use models::{UnifiedRow, UnifiedTable};

use hcr_types::{IndicatorTable, SchemaError};
use rusqlite::Connection;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// In-memory SQLite database holding the indicator tables.
///
/// Cheaply cloneable (via `Rc`); clones share the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it.
    pub fn new() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Materialize the joined rows into an owned [`UnifiedTable`].
    pub fn unified_table(&self) -> Result<UnifiedTable> {
        Ok(UnifiedTable::new(self.query_unified()?))
    }
}

/// Full outer join of the given indicator tables on `(region, year)`.
///
/// The order in which the families are supplied does not matter. Each family
/// may appear at most once; a family left out contributes no values, so its
/// column is absent on every row. Fails with a [`SchemaError`] on a repeated
/// family, a blank region or a duplicate key within one family; nothing
/// partial is returned.
pub fn merge(tables: &[IndicatorTable]) -> Result<UnifiedTable> {
    let mut families = BTreeSet::new();
    for table in tables {
        if !families.insert(table.indicator()) {
            return Err(SchemaError::DuplicateFamily {
                indicator: table.indicator(),
            }
            .into());
        }
    }

    let db = Database::new()?;
    for table in tables {
        db.load_indicator_table(table)?;
        log::info!(
            "merge: {} holds {} records",
            table.indicator(),
            db.query_record_count(table.indicator())?
        );
    }
    let unified = db.unified_table()?;
    log::info!(
        "merge: joined {} tables into {} unified rows",
        tables.len(),
        unified.len()
    );
    Ok(unified)
}
