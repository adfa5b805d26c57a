//! The top-level application object.

use hcr_chart::{project_comparison, project_map, project_trend, ChartDescription};
use hcr_db::{merge, DbError, UnifiedTable};
use hcr_types::IndicatorTable;
use serde::Serialize;
use thiserror::Error;

use crate::{
    DashboardConfig, InvalidSelectionError, Panel, SelectionEvent, SelectionOptions,
    SelectionState,
};

/// Startup failures. Any of these means no dashboard is served.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("failed to build dataset: {0}")]
    Dataset(#[from] DbError),

    #[error("invalid default selection: {0}")]
    Selection(#[from] InvalidSelectionError),

    #[error("dataset has no rows to pick a default year from")]
    EmptyDataset,
}

/// New chart for the one panel an event touched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelUpdate {
    pub panel: Panel,
    pub chart: ChartDescription,
}

/// All three panels, for the initial render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub map: ChartDescription,
    pub trend: ChartDescription,
    pub comparison: ChartDescription,
}

#[derive(Debug)]
pub struct Dashboard {
    table: UnifiedTable,
    config: DashboardConfig,
    comparison_year: i32,
    state: SelectionState,
}

impl Dashboard {
    /// Build the dashboard around an already merged table.
    ///
    /// The initial selection comes from `config`; a missing default year
    /// becomes the most recent year in the table, and empty default regions
    /// become the first two regions of the table.
    pub fn new(table: UnifiedTable, config: DashboardConfig) -> Result<Self, DashboardError> {
        let latest = table.latest_year();
        let trend_year = config
            .default_year
            .or(latest)
            .ok_or(DashboardError::EmptyDataset)?;
        let comparison_year = config
            .comparison_year
            .resolve(&table)
            .ok_or(DashboardError::EmptyDataset)?;

        let regions: Vec<String> = if config.default_regions.is_empty() {
            table.regions().into_iter().take(2).collect()
        } else {
            config.default_regions.clone()
        };
        let known = table.regions();
        for region in regions.iter().filter(|r| !known.contains(*r)) {
            log::warn!("dashboard: default region {} has no rows", region);
        }
        let state = SelectionState::new(config.default_indicator, trend_year, regions)?;

        log::info!(
            "dashboard: ready with {} rows, trend year {}, comparison year {}",
            table.len(),
            trend_year,
            comparison_year
        );
        Ok(Self {
            table,
            config,
            comparison_year,
            state,
        })
    }

    /// Merge the indicator tables once and build the dashboard on the result.
    pub fn from_tables(
        tables: &[IndicatorTable],
        config: DashboardConfig,
    ) -> Result<Self, DashboardError> {
        let table = merge(tables)?;
        Self::new(table, config)
    }

    pub fn table(&self) -> &UnifiedTable {
        &self.table
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn comparison_year(&self) -> i32 {
        self.comparison_year
    }

    pub fn options(&self) -> SelectionOptions {
        SelectionOptions::from_table(&self.table)
    }

    /// Project one panel from the current state.
    pub fn render(&self, panel: Panel) -> ChartDescription {
        match panel {
            Panel::Map => project_map(&self.table, self.state.map_indicator()),
            Panel::Trend => project_trend(
                &self.table,
                self.state.trend_year(),
                self.config.trend_indicator,
            ),
            Panel::Comparison => project_comparison(
                &self.table,
                self.comparison_year,
                self.state.comparison_regions(),
            ),
        }
    }

    pub fn render_all(&self) -> DashboardView {
        DashboardView {
            map: self.render(Panel::Map),
            trend: self.render(Panel::Trend),
            comparison: self.render(Panel::Comparison),
        }
    }

    /// Apply one selection event and recompute the panel it affects.
    ///
    /// A rejected event leaves the state untouched and recomputes nothing.
    pub fn dispatch(
        &mut self,
        event: &SelectionEvent,
    ) -> Result<PanelUpdate, InvalidSelectionError> {
        let panel = match self.state.apply(event) {
            Ok(panel) => panel,
            Err(e) => {
                log::warn!("dashboard: rejected {:?}: {}", event, e);
                return Err(e);
            }
        };
        log::debug!("dashboard: {:?} -> recompute {:?}", event, panel);
        Ok(PanelUpdate {
            panel,
            chart: self.render(panel),
        })
    }
}
