//! Replay a stream of selection events against the sample dashboard.
//!
//! Input is JSON lines, one event per line:
//!
//! ```text
//! {"kind": "IndicatorChanged", "payload": "Healthcare_Services"}
//! {"kind": "YearChanged", "payload": 2021}
//! {"kind": "RegionsChanged", "payload": ["Beijing", "Hebei"]}
//! ```
//!
//! Each accepted event prints the [`PanelUpdate`](hcr_dashboard::PanelUpdate)
//! for the one panel it touched. A rejected event prints an error line and
//! the previous selection stays in place. Blank lines and `#` comments are
//! ignored.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use hcr_dashboard::{Dashboard, DashboardConfig, SelectionEvent};
use log::{info, warn};
use serde_json::json;

use crate::sample::sample_dashboard;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
}

pub fn run_replay<W: Write>(
    config: &DashboardConfig,
    events_path: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut dashboard = sample_dashboard(config.clone())?;
    let summary = if events_path == "-" {
        let stdin = io::stdin();
        replay_events(&mut dashboard, stdin.lock(), out)?
    } else {
        let file = File::open(events_path)
            .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", events_path, e))?;
        replay_events(&mut dashboard, BufReader::new(file), out)?
    };
    info!(
        "Replay complete: {} applied, {} rejected",
        summary.applied, summary.rejected
    );
    Ok(())
}

/// Feed every event line to the dashboard in order.
pub fn replay_events<R: BufRead, W: Write>(
    dashboard: &mut Dashboard,
    reader: R,
    out: &mut W,
) -> anyhow::Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let outcome = serde_json::from_str::<SelectionEvent>(line)
            .map_err(|e| format!("malformed event: {e}"))
            .and_then(|event| dashboard.dispatch(&event).map_err(|e| e.to_string()));

        match outcome {
            Ok(update) => {
                summary.applied += 1;
                serde_json::to_writer(&mut *out, &update)?;
            }
            Err(error) => {
                summary.rejected += 1;
                warn!("line {}: {}", line_no, error);
                serde_json::to_writer(&mut *out, &json!({ "line": line_no, "error": error }))?;
            }
        }
        writeln!(out)?;
    }
    Ok(summary)
}
