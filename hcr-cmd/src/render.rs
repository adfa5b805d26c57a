//! One-shot commands: merged table, dropdown options, panel rendering and
//! chart checking.

use std::fs;
use std::io::{self, Read, Write};

use anyhow::Context;
use hcr_chart::ChartDescription;
use hcr_dashboard::{DashboardConfig, Panel, SelectionEvent};
use log::info;

use crate::sample::{sample_dashboard, sample_tables};

/// Selection flags given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub indicator: Option<String>,
    pub year: Option<i32>,
    pub regions: Vec<String>,
}

impl Selection {
    /// The events these flags stand for, in dropdown order.
    pub fn events(&self) -> Vec<SelectionEvent> {
        let mut events = Vec::new();
        if let Some(indicator) = &self.indicator {
            events.push(SelectionEvent::IndicatorChanged(indicator.clone()));
        }
        if let Some(year) = self.year {
            events.push(SelectionEvent::YearChanged(year));
        }
        if !self.regions.is_empty() {
            events.push(SelectionEvent::RegionsChanged(self.regions.clone()));
        }
        events
    }
}

/// Write the unified table as CSV. Absent values are empty cells.
pub fn run_merge<W: Write>(out: &mut W) -> anyhow::Result<()> {
    let unified = hcr_db::merge(&sample_tables()?)?;
    let mut wtr = csv::Writer::from_writer(out);
    for row in unified.iter() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    info!("Wrote {} unified rows", unified.len());
    Ok(())
}

pub fn run_options<W: Write>(config: &DashboardConfig, out: &mut W) -> anyhow::Result<()> {
    let dashboard = sample_dashboard(config.clone())?;
    serde_json::to_writer_pretty(&mut *out, &dashboard.options())?;
    writeln!(out)?;
    Ok(())
}

/// Apply the selection through the dashboard's event handler, then print
/// either one panel or all three.
pub fn run_render<W: Write>(
    config: &DashboardConfig,
    selection: &Selection,
    panel: Option<Panel>,
    contract: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut dashboard = sample_dashboard(config.clone())?;
    for event in selection.events() {
        dashboard
            .dispatch(&event)
            .with_context(|| format!("invalid selection {event:?}"))?;
    }

    match panel {
        Some(panel) => {
            let chart = dashboard.render(panel);
            let json = if contract {
                chart.to_json_contract_v1_pretty()?
            } else {
                chart.to_json_pretty()?
            };
            writeln!(out, "{json}")?;
        }
        None => {
            serde_json::to_writer_pretty(&mut *out, &dashboard.render_all())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Read a chart description, bare or wrapped in the versioned contract, and
/// print it back as a bare chart.
pub fn run_check<W: Write>(chart_path: &str, out: &mut W) -> anyhow::Result<()> {
    let input = if chart_path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(chart_path)
            .with_context(|| format!("Failed to read {chart_path}"))?
    };
    check_chart(&input, out)
}

pub fn check_chart<W: Write>(input: &str, out: &mut W) -> anyhow::Result<()> {
    let chart = ChartDescription::from_json_compat_str(input)?;
    info!("Chart {:?} has {} marks", chart.title, chart.series.len());
    writeln!(out, "{}", chart.to_json_pretty()?)?;
    Ok(())
}
