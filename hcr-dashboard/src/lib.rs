//! Selection state and panel dispatch for the healthcare dashboard.
//!
//! A [`Dashboard`] owns the unified table (built once, read-only) and the
//! [`SelectionState`], the only mutable piece of core state. The render
//! boundary feeds it [`SelectionEvent`]s one at a time; each accepted event
//! replaces one field of the state and recomputes only the panel that
//! depends on it.

pub mod config;
pub mod dashboard;
pub mod options;
pub mod selection;

pub use config::{ComparisonYear, DashboardConfig};
pub use dashboard::{Dashboard, DashboardError, DashboardView, PanelUpdate};
pub use options::{IndicatorOption, SelectionOptions};
pub use selection::{InvalidSelectionError, Panel, SelectionEvent, SelectionState};
