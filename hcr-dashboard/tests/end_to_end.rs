use std::collections::BTreeSet;

use hcr_chart::{project_comparison, project_map, project_trend, Mark};
use hcr_dashboard::{Dashboard, DashboardConfig, DashboardError, Panel, SelectionEvent};
use hcr_db::{merge, DbError};
use hcr_types::{Indicator, IndicatorRecord, IndicatorTable, SchemaError};

fn table(indicator: Indicator, rows: &[(&str, i32, f64)]) -> IndicatorTable {
    IndicatorTable::new(
        indicator,
        rows.iter()
            .map(|(region, year, value)| IndicatorRecord::new(*region, *year, *value))
            .collect(),
    )
}

fn ab_tables() -> Vec<IndicatorTable> {
    vec![
        table(Indicator::WorkforceCount, &[("A", 2023, 100.0), ("B", 2023, 200.0)]),
        table(Indicator::InstitutionCount, &[("A", 2023, 10.0), ("B", 2023, 20.0)]),
        table(Indicator::ServiceLevel, &[("A", 2023, 1.0), ("B", 2023, 2.0)]),
    ]
}

fn ab_config() -> DashboardConfig {
    DashboardConfig {
        default_regions: vec!["A".to_string(), "B".to_string()],
        ..DashboardConfig::default()
    }
}

#[test]
fn two_regions_flow_through_every_panel() {
    let unified = merge(&ab_tables()).unwrap();
    assert_eq!(unified.len(), 2);

    let both: BTreeSet<String> = ["A", "B"].iter().map(|s| s.to_string()).collect();
    assert_eq!(project_comparison(&unified, 2023, &both).series.len(), 2);
    assert_eq!(
        project_trend(&unified, 2023, Indicator::InstitutionCount)
            .series
            .len(),
        2
    );

    let map = project_map(&unified, Indicator::WorkforceCount);
    let values: Vec<(&str, Option<f64>)> = map
        .series
        .iter()
        .map(|mark| match mark {
            Mark::Area { region, value, .. } => (region.as_str(), *value),
            other => panic!("unexpected mark on map: {other:?}"),
        })
        .collect();
    assert_eq!(values, vec![("A", Some(100.0)), ("B", Some(200.0))]);
}

#[test]
fn delta_without_service_level_is_left_out_of_comparison() {
    let unified = merge(&[
        table(
            Indicator::WorkforceCount,
            &[("Delta", 2023, 5000.0), ("Echo", 2023, 7000.0)],
        ),
        table(
            Indicator::InstitutionCount,
            &[("Delta", 2023, 40.0), ("Echo", 2023, 70.0)],
        ),
        table(Indicator::ServiceLevel, &[("Echo", 2023, 0.7)]),
    ])
    .unwrap();

    let selected: BTreeSet<String> = ["Delta", "Echo"].iter().map(|s| s.to_string()).collect();
    let chart = project_comparison(&unified, 2023, &selected);
    assert_eq!(chart.regions(), vec!["Echo"]);

    // The partial row still shows on the other panels.
    let trend = project_trend(&unified, 2023, Indicator::InstitutionCount);
    assert_eq!(trend.regions(), vec!["Delta", "Echo"]);
    let map = project_map(&unified, Indicator::ServiceLevel);
    assert_eq!(map.regions(), vec!["Delta", "Echo"]);
}

#[test]
fn indicator_change_only_touches_the_map() {
    let mut dashboard = Dashboard::from_tables(&ab_tables(), ab_config()).unwrap();
    let before = dashboard.render_all();

    let update = dashboard
        .dispatch(&SelectionEvent::IndicatorChanged(
            "Healthcare_Services".to_string(),
        ))
        .unwrap();
    assert_eq!(update.panel, Panel::Map);
    assert_ne!(update.chart, before.map);
    assert_eq!(update.chart.title, "Healthcare Services Distribution by Region");

    let after = dashboard.render_all();
    assert_eq!(after.map, update.chart);
    assert_eq!(after.trend, before.trend);
    assert_eq!(after.comparison, before.comparison);
}

#[test]
fn year_without_rows_renders_empty_trend() {
    let mut dashboard = Dashboard::from_tables(&ab_tables(), ab_config()).unwrap();
    let update = dashboard
        .dispatch(&SelectionEvent::YearChanged(2019))
        .unwrap();
    assert_eq!(update.panel, Panel::Trend);
    assert!(update.chart.is_empty());
    assert_eq!(dashboard.state().trend_year(), 2019);
}

#[test]
fn invalid_events_are_rejected_and_state_retained() {
    let mut dashboard = Dashboard::from_tables(&ab_tables(), ab_config()).unwrap();
    let before = dashboard.state().clone();

    assert!(dashboard
        .dispatch(&SelectionEvent::IndicatorChanged("Beds".to_string()))
        .is_err());
    assert!(dashboard
        .dispatch(&SelectionEvent::RegionsChanged(Vec::new()))
        .is_err());
    assert_eq!(dashboard.state(), &before);

    let update = dashboard
        .dispatch(&SelectionEvent::RegionsChanged(vec!["B".to_string()]))
        .unwrap();
    assert_eq!(update.panel, Panel::Comparison);
    assert_eq!(update.chart.regions(), vec!["B"]);
}

#[test]
fn duplicate_key_is_fatal_at_startup() {
    let mut tables = ab_tables();
    tables[2] = table(
        Indicator::ServiceLevel,
        &[("A", 2023, 1.0), ("B", 2023, f64::NAN), ("B", 2023, 2.0)],
    );
    let err = Dashboard::from_tables(&tables, ab_config()).unwrap_err();
    assert!(matches!(
        err,
        DashboardError::Dataset(DbError::Schema(SchemaError::DuplicateKey { .. }))
    ));
}

#[test]
fn family_supplied_twice_is_fatal_at_startup() {
    let mut tables = ab_tables();
    tables.push(table(Indicator::ServiceLevel, &[("C", 2023, 9.0)]));
    let err = Dashboard::from_tables(&tables, ab_config()).unwrap_err();
    assert!(matches!(
        err,
        DashboardError::Dataset(DbError::Schema(SchemaError::DuplicateFamily { .. }))
    ));
}
