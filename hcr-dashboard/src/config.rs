//! Startup configuration for a [`Dashboard`](crate::Dashboard).

use std::fmt;
use std::str::FromStr;

use hcr_db::UnifiedTable;
use hcr_types::Indicator;
use serde::{Deserialize, Serialize};

/// Which year the comparison panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonYear {
    /// The most recent year in the dataset.
    #[default]
    Latest,
    Fixed(i32),
}

impl ComparisonYear {
    /// `None` only when `Latest` meets an empty table.
    pub fn resolve(&self, table: &UnifiedTable) -> Option<i32> {
        match self {
            ComparisonYear::Latest => table.latest_year(),
            ComparisonYear::Fixed(year) => Some(*year),
        }
    }
}

impl FromStr for ComparisonYear {
    type Err = String;

    /// `"latest"` or a year such as `"2022"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("latest") {
            return Ok(ComparisonYear::Latest);
        }
        s.parse::<i32>()
            .map(ComparisonYear::Fixed)
            .map_err(|_| format!("expected \"latest\" or a year, got {s:?}"))
    }
}

impl fmt::Display for ComparisonYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonYear::Latest => f.write_str("latest"),
            ComparisonYear::Fixed(year) => write!(f, "{year}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Indicator shown on the map at startup.
    pub default_indicator: Indicator,
    /// Trend year at startup; `None` picks the most recent year.
    pub default_year: Option<i32>,
    /// Comparison regions at startup; empty picks the first two regions.
    pub default_regions: Vec<String>,
    pub comparison_year: ComparisonYear,
    /// Indicator plotted by the trend panel.
    pub trend_indicator: Indicator,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_indicator: Indicator::WorkforceCount,
            default_year: None,
            default_regions: vec!["Beijing".to_string(), "Tianjin".to_string()],
            comparison_year: ComparisonYear::Latest,
            trend_indicator: Indicator::InstitutionCount,
        }
    }
}
