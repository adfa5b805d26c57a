//! Pure projections from the unified table to one panel's chart description.
//!
//! None of these functions look at the row order of the [`UnifiedTable`]:
//! marks are always emitted sorted by region, so equal inputs give equal
//! charts no matter how the table was built.

use std::collections::{BTreeMap, BTreeSet};

use hcr_db::{UnifiedRow, UnifiedTable};
use hcr_types::Indicator;

use crate::{AxisLabels, ChartDescription, ChartKind, Mark};

/// Color scale for the choropleth panel.
pub const MAP_COLOR_SCALE: &str = "Viridis";

/// Choropleth of one indicator, one area per region.
///
/// Each region is shown with the row of its most recent year. If that row
/// has no value for `indicator`, the area is still emitted with
/// `value: None` so the map keeps the full region set. Years are never
/// averaged together.
pub fn project_map(unified: &UnifiedTable, indicator: Indicator) -> ChartDescription {
    let mut latest: BTreeMap<&str, &UnifiedRow> = BTreeMap::new();
    for row in unified {
        latest
            .entry(row.region.as_str())
            .and_modify(|current| {
                if row.year > current.year {
                    *current = row;
                }
            })
            .or_insert(row);
    }

    let series: Vec<Mark> = latest
        .into_values()
        .map(|row| Mark::Area {
            region: row.region.clone(),
            year: row.year,
            value: row.value(indicator),
        })
        .collect();
    log::debug!(
        "projection: map of {} has {} regions",
        indicator,
        series.len()
    );

    ChartDescription::new(
        ChartKind::Choropleth,
        format!("{} Distribution by Region", indicator.label()),
        AxisLabels {
            color: Some(indicator.label().to_string()),
            ..AxisLabels::default()
        },
    )
    .with_color_scale(MAP_COLOR_SCALE)
    .with_series(series, "No data available")
}

/// Bar chart of one indicator across regions for a single year.
///
/// A year with no rows yields an empty chart, not an error.
pub fn project_trend(unified: &UnifiedTable, year: i32, indicator: Indicator) -> ChartDescription {
    let bars: BTreeMap<&str, Option<f64>> = unified
        .iter()
        .filter(|row| row.year == year)
        .map(|row| (row.region.as_str(), row.value(indicator)))
        .collect();

    let series: Vec<Mark> = bars
        .into_iter()
        .map(|(region, value)| Mark::Bar {
            region: region.to_string(),
            value,
        })
        .collect();
    log::debug!(
        "projection: trend of {} in {} has {} bars",
        indicator,
        year,
        series.len()
    );

    ChartDescription::new(
        ChartKind::Bar,
        format!("{} in {}", indicator.label(), year),
        AxisLabels {
            x: Some("Region".to_string()),
            y: Some(indicator.label().to_string()),
            ..AxisLabels::default()
        },
    )
    .with_series(series, format!("No data for {year}"))
}

/// Scatter of workers (x) against institutions (y), sized by service level.
///
/// Only rows of `year` whose region is in `regions` are considered, and a
/// row missing any of the three values is left out of this panel.
pub fn project_comparison(
    unified: &UnifiedTable,
    year: i32,
    regions: &BTreeSet<String>,
) -> ChartDescription {
    let mut points: BTreeMap<&str, Mark> = BTreeMap::new();
    let mut incomplete = 0usize;
    for row in unified
        .iter()
        .filter(|row| row.year == year && regions.contains(&row.region))
    {
        match (row.workforce_count, row.institution_count, row.service_level) {
            (Some(x), Some(y), Some(size)) => {
                points.insert(
                    row.region.as_str(),
                    Mark::Point {
                        region: row.region.clone(),
                        x,
                        y,
                        size,
                    },
                );
            }
            _ => incomplete += 1,
        }
    }
    let series: Vec<Mark> = points.into_values().collect();
    log::debug!(
        "projection: comparison in {} has {} points, {} incomplete rows left out",
        year,
        series.len(),
        incomplete
    );

    ChartDescription::new(
        ChartKind::Scatter,
        format!("Comparison of Healthcare Resources by Region ({year})"),
        AxisLabels {
            x: Some(Indicator::WorkforceCount.label().to_string()),
            y: Some(Indicator::InstitutionCount.label().to_string()),
            color: Some("Region".to_string()),
            size: Some(Indicator::ServiceLevel.label().to_string()),
        },
    )
    .with_series(
        series,
        format!("No complete data for the selected regions in {year}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(region: &str, year: i32, w: Option<f64>, i: Option<f64>, s: Option<f64>) -> UnifiedRow {
        UnifiedRow {
            region: region.to_string(),
            year,
            workforce_count: w,
            institution_count: i,
            service_level: s,
        }
    }

    fn regions(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    /// Two regions, one year, every value present.
    fn ab_table() -> UnifiedTable {
        UnifiedTable::new(vec![
            row("A", 2023, Some(100.0), Some(10.0), Some(1.0)),
            row("B", 2023, Some(200.0), Some(20.0), Some(2.0)),
        ])
    }

    /// Three years for Beijing, and a Delta row lacking its service level.
    fn mixed_table() -> UnifiedTable {
        UnifiedTable::new(vec![
            row("Beijing", 2021, Some(368629.0), Some(10699.0), Some(8.2)),
            row("Beijing", 2023, Some(348066.0), Some(12518.0), Some(5.6)),
            row("Beijing", 2022, Some(361004.0), Some(10897.0), Some(7.1)),
            row("Delta", 2023, Some(5000.0), Some(40.0), None),
            row("Tianjin", 2022, None, Some(6282.0), Some(2.5)),
            row("Tianjin", 2023, Some(143185.0), Some(6801.0), Some(1.1)),
        ])
    }

    // ───────────────────── Map ─────────────────────

    #[test]
    fn map_values_for_two_regions() {
        let chart = project_map(&ab_table(), Indicator::WorkforceCount);
        assert_eq!(chart.kind, ChartKind::Choropleth);
        assert_eq!(
            chart.series,
            vec![
                Mark::Area {
                    region: "A".to_string(),
                    year: 2023,
                    value: Some(100.0)
                },
                Mark::Area {
                    region: "B".to_string(),
                    year: 2023,
                    value: Some(200.0)
                },
            ]
        );
        assert_eq!(chart.color_scale.as_deref(), Some(MAP_COLOR_SCALE));
        assert_eq!(chart.title, "Healthcare Workers Distribution by Region");
    }

    #[test]
    fn map_uses_most_recent_year_per_region() {
        let chart = project_map(&mixed_table(), Indicator::InstitutionCount);
        let beijing = chart
            .series
            .iter()
            .find(|m| m.region() == "Beijing")
            .unwrap();
        // 2023 value, not the 2021..2023 average
        assert_eq!(
            beijing,
            &Mark::Area {
                region: "Beijing".to_string(),
                year: 2023,
                value: Some(12518.0)
            }
        );
    }

    #[test]
    fn map_keeps_regions_without_data() {
        let chart = project_map(&mixed_table(), Indicator::ServiceLevel);
        assert_eq!(chart.regions(), vec!["Beijing", "Delta", "Tianjin"]);
        let delta = chart.series.iter().find(|m| m.region() == "Delta").unwrap();
        assert_eq!(
            delta,
            &Mark::Area {
                region: "Delta".to_string(),
                year: 2023,
                value: None
            }
        );
    }

    #[test]
    fn map_of_empty_table_is_empty_chart() {
        let chart = project_map(&UnifiedTable::default(), Indicator::WorkforceCount);
        assert!(chart.is_empty());
        assert!(chart.note.is_some());
    }

    // ───────────────────── Trend ─────────────────────

    #[test]
    fn trend_has_one_bar_per_region() {
        let chart = project_trend(&ab_table(), 2023, Indicator::InstitutionCount);
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.title, "Healthcare Institutions in 2023");
        assert_eq!(
            chart.series[1],
            Mark::Bar {
                region: "B".to_string(),
                value: Some(20.0)
            }
        );
    }

    #[test]
    fn trend_filters_to_selected_year() {
        let chart = project_trend(&mixed_table(), 2022, Indicator::WorkforceCount);
        assert_eq!(
            chart.series,
            vec![
                Mark::Bar {
                    region: "Beijing".to_string(),
                    value: Some(361004.0)
                },
                Mark::Bar {
                    region: "Tianjin".to_string(),
                    value: None
                },
            ]
        );
    }

    #[test]
    fn trend_for_year_without_rows_is_empty_chart() {
        let chart = project_trend(&mixed_table(), 1999, Indicator::InstitutionCount);
        assert!(chart.is_empty());
        assert_eq!(chart.note.as_deref(), Some("No data for 1999"));
        assert_eq!(chart.title, "Healthcare Institutions in 1999");
    }

    // ───────────────────── Comparison ─────────────────────

    #[test]
    fn comparison_has_point_per_complete_region() {
        let chart = project_comparison(&ab_table(), 2023, &regions(&["A", "B"]));
        assert_eq!(chart.kind, ChartKind::Scatter);
        assert_eq!(
            chart.series,
            vec![
                Mark::Point {
                    region: "A".to_string(),
                    x: 100.0,
                    y: 10.0,
                    size: 1.0
                },
                Mark::Point {
                    region: "B".to_string(),
                    x: 200.0,
                    y: 20.0,
                    size: 2.0
                },
            ]
        );
    }

    #[test]
    fn comparison_excludes_region_missing_a_metric() {
        let chart = project_comparison(
            &mixed_table(),
            2023,
            &regions(&["Beijing", "Delta", "Tianjin"]),
        );
        assert_eq!(chart.regions(), vec!["Beijing", "Tianjin"]);
    }

    #[test]
    fn comparison_only_includes_selected_regions() {
        let chart = project_comparison(&mixed_table(), 2023, &regions(&["Tianjin"]));
        assert_eq!(chart.regions(), vec!["Tianjin"]);
    }

    #[test]
    fn comparison_without_matches_is_empty_chart() {
        let chart = project_comparison(&mixed_table(), 2023, &regions(&["Atlantis"]));
        assert!(chart.is_empty());
        assert!(chart.note.is_some());

        let chart = project_comparison(&mixed_table(), 2022, &regions(&["Tianjin"]));
        assert!(chart.is_empty(), "Tianjin 2022 lacks workers, so no point");
    }

    // ───────────────────── Purity ─────────────────────

    #[test]
    fn projections_ignore_row_order() {
        let table = mixed_table();
        let mut reversed_rows = table.rows().to_vec();
        reversed_rows.reverse();
        let reversed = UnifiedTable::new(reversed_rows);
        let selected = regions(&["Beijing", "Tianjin"]);

        assert_eq!(
            project_map(&table, Indicator::WorkforceCount),
            project_map(&reversed, Indicator::WorkforceCount)
        );
        assert_eq!(
            project_trend(&table, 2023, Indicator::InstitutionCount),
            project_trend(&reversed, 2023, Indicator::InstitutionCount)
        );
        assert_eq!(
            project_comparison(&table, 2023, &selected),
            project_comparison(&reversed, 2023, &selected)
        );
    }

    #[test]
    fn projections_are_repeatable() {
        let table = mixed_table();
        let selected = regions(&["Beijing", "Delta"]);
        assert_eq!(
            project_map(&table, Indicator::ServiceLevel),
            project_map(&table, Indicator::ServiceLevel)
        );
        assert_eq!(
            project_comparison(&table, 2023, &selected),
            project_comparison(&table, 2023, &selected)
        );
    }
}
