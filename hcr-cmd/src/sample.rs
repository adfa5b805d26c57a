//! The sample dataset, embedded at build time.
//!
//! Five regions (the national total plus four provinces) reported for
//! 2021 through 2023 in every indicator family.

use hcr_dashboard::{Dashboard, DashboardConfig};
use hcr_types::{Indicator, IndicatorTable, SchemaError};

/// Healthcare worker counts.
const HEALTH_WORKERS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/health_workers.csv"));
/// Healthcare institution counts.
const HEALTHCARE_INSTITUTIONS_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/healthcare_institutions.csv"));
/// Healthcare service levels.
const HEALTHCARE_SERVICES_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/healthcare_services.csv"));

/// Parse the three embedded indicator tables.
pub fn sample_tables() -> Result<Vec<IndicatorTable>, SchemaError> {
    Ok(vec![
        IndicatorTable::from_csv(Indicator::WorkforceCount, HEALTH_WORKERS_CSV)?,
        IndicatorTable::from_csv(Indicator::InstitutionCount, HEALTHCARE_INSTITUTIONS_CSV)?,
        IndicatorTable::from_csv(Indicator::ServiceLevel, HEALTHCARE_SERVICES_CSV)?,
    ])
}

/// Merge the sample tables and build a dashboard on them.
pub fn sample_dashboard(config: DashboardConfig) -> anyhow::Result<Dashboard> {
    let tables = sample_tables()?;
    Ok(Dashboard::from_tables(&tables, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_tables_cover_every_family() {
        let tables = sample_tables().unwrap();
        assert_eq!(tables.len(), 3);
        for table in &tables {
            assert_eq!(table.len(), 15, "{} should have 15 records", table.indicator());
        }
    }

    #[test]
    fn sample_dashboard_starts_on_defaults() {
        let dashboard = sample_dashboard(DashboardConfig::default()).unwrap();
        assert_eq!(dashboard.table().len(), 15);
        assert_eq!(dashboard.table().years(), vec![2021, 2022, 2023]);
        assert_eq!(dashboard.state().trend_year(), 2023);
        assert_eq!(dashboard.comparison_year(), 2023);
        assert_eq!(
            dashboard
                .state()
                .comparison_regions()
                .iter()
                .collect::<Vec<_>>(),
            vec!["Beijing", "Tianjin"]
        );
    }
}
