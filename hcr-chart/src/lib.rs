//! Panel projections for the healthcare dashboard.
//!
//! This crate provides:
//! - `model`: the declarative [`ChartDescription`] handed to the renderer
//! - `projection`: pure functions deriving each panel from the unified table
//! - `contract`: the versioned JSON form of a chart description

pub mod contract;
mod error;
pub mod model;
pub mod projection;

pub use error::{ChartError, ChartResult};
pub use model::{AxisLabels, ChartDescription, ChartKind, Mark};
pub use projection::{project_comparison, project_map, project_trend};
