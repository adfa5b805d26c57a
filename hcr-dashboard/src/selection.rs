//! The selection state machine.
//!
//! States are every combination of (map indicator, trend year, comparison
//! regions). Each [`SelectionEvent`] replaces exactly one of those fields.
//! An invalid event is rejected before anything changes.

use std::collections::BTreeSet;

use hcr_types::{Indicator, UnknownIndicator};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A selection the dashboard refuses to enter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSelectionError {
    #[error(transparent)]
    UnknownIndicator(#[from] UnknownIndicator),

    #[error("comparison needs at least one region")]
    EmptyRegions,

    #[error("comparison region names cannot be blank")]
    BlankRegion,
}

/// The three dashboard panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Map,
    Trend,
    Comparison,
}

/// A dropdown change raised by the render boundary.
///
/// Serialized as `{"kind": "...", "payload": ...}`. Payloads are raw
/// widget values and are validated when applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload")]
pub enum SelectionEvent {
    /// New map indicator key, e.g. `"Healthcare_Services"`.
    IndicatorChanged(String),
    /// New trend year.
    YearChanged(i32),
    /// New set of comparison regions.
    RegionsChanged(Vec<String>),
}

impl SelectionEvent {
    /// The only panel this event affects.
    pub fn panel(&self) -> Panel {
        match self {
            SelectionEvent::IndicatorChanged(_) => Panel::Map,
            SelectionEvent::YearChanged(_) => Panel::Trend,
            SelectionEvent::RegionsChanged(_) => Panel::Comparison,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    map_indicator: Indicator,
    trend_year: i32,
    comparison_regions: BTreeSet<String>,
}

impl SelectionState {
    pub fn new<I, S>(
        map_indicator: Indicator,
        trend_year: i32,
        comparison_regions: I,
    ) -> Result<Self, InvalidSelectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            map_indicator,
            trend_year,
            comparison_regions: validate_regions(comparison_regions)?,
        })
    }

    pub fn map_indicator(&self) -> Indicator {
        self.map_indicator
    }

    pub fn trend_year(&self) -> i32 {
        self.trend_year
    }

    pub fn comparison_regions(&self) -> &BTreeSet<String> {
        &self.comparison_regions
    }

    /// Apply one event and report which panel needs recomputing.
    ///
    /// On error the state is left exactly as it was.
    pub fn apply(&mut self, event: &SelectionEvent) -> Result<Panel, InvalidSelectionError> {
        match event {
            SelectionEvent::IndicatorChanged(key) => {
                self.map_indicator = key.parse()?;
            }
            SelectionEvent::YearChanged(year) => {
                self.trend_year = *year;
            }
            SelectionEvent::RegionsChanged(regions) => {
                self.comparison_regions = validate_regions(regions.iter().map(String::as_str))?;
            }
        }
        Ok(event.panel())
    }
}

fn validate_regions<I, S>(regions: I) -> Result<BTreeSet<String>, InvalidSelectionError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut set = BTreeSet::new();
    for region in regions {
        let region: String = region.into();
        if region.trim().is_empty() {
            return Err(InvalidSelectionError::BlankRegion);
        }
        set.insert(region);
    }
    if set.is_empty() {
        return Err(InvalidSelectionError::EmptyRegions);
    }
    Ok(set)
}
