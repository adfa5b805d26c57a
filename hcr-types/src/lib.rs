//! Core types for the healthcare resource dashboard.
//!
//! Three indicator families are reported per (region, year):
//! healthcare workers, healthcare institutions and healthcare services.
//! Each family arrives as its own [`IndicatorTable`] and is joined into a
//! single unified table by the `hcr-db` crate.

pub mod error;
pub mod indicator;
pub mod record;

pub use error::{SchemaError, UnknownIndicator};
pub use indicator::Indicator;
pub use record::{IndicatorRecord, IndicatorTable};
