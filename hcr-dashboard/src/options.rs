//! Values offered by the dashboard dropdowns.

use hcr_db::UnifiedTable;
use hcr_types::Indicator;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorOption {
    pub value: String,
    pub label: String,
}

/// Dropdown contents derived from the unified table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionOptions {
    pub indicators: Vec<IndicatorOption>,
    pub years: Vec<i32>,
    pub regions: Vec<String>,
}

impl SelectionOptions {
    pub fn from_table(table: &UnifiedTable) -> Self {
        Self {
            indicators: Indicator::ALL
                .into_iter()
                .map(|indicator| IndicatorOption {
                    value: indicator.key().to_string(),
                    label: indicator.label().to_string(),
                })
                .collect(),
            years: table.years(),
            regions: table.regions(),
        }
    }
}
