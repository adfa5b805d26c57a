//! Command implementations for the HCR CLI.
//!
//! Every command works on the embedded sample dataset; the render
//! boundary is stdout, where chart descriptions are written as JSON.

use std::io;

use clap::{Args, Subcommand, ValueEnum};
use hcr_dashboard::{ComparisonYear, DashboardConfig, Panel};

pub mod render;
pub mod replay;
pub mod sample;

/// Startup selection shared by the dashboard commands.
#[derive(Args, Debug, Clone)]
pub struct DashboardArgs {
    /// Year shown by the comparison panel: "latest" or a year
    #[arg(long, default_value = "latest")]
    pub comparison_year: ComparisonYear,

    /// Comparison regions selected at startup (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub default_regions: Vec<String>,

    /// Trend year selected at startup (defaults to the most recent year)
    #[arg(long)]
    pub default_year: Option<i32>,
}

impl DashboardArgs {
    pub fn to_config(&self) -> DashboardConfig {
        let mut config = DashboardConfig {
            comparison_year: self.comparison_year,
            default_year: self.default_year,
            ..DashboardConfig::default()
        };
        if !self.default_regions.is_empty() {
            config.default_regions = self.default_regions.clone();
        }
        config
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelArg {
    Map,
    Trend,
    Comparison,
}

impl From<PanelArg> for Panel {
    fn from(arg: PanelArg) -> Self {
        match arg {
            PanelArg::Map => Panel::Map,
            PanelArg::Trend => Panel::Trend,
            PanelArg::Comparison => Panel::Comparison,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the merged indicator table as CSV
    Merge,

    /// Print the dropdown options as JSON
    Options {
        #[command(flatten)]
        dashboard: DashboardArgs,
    },

    /// Apply a selection and print the chart descriptions as JSON
    Render {
        #[command(flatten)]
        dashboard: DashboardArgs,

        /// Map indicator key (e.g. Healthcare_Services)
        #[arg(short = 'i', long)]
        indicator: Option<String>,

        /// Trend year
        #[arg(short = 'y', long)]
        year: Option<i32>,

        /// Comparison regions (comma separated)
        #[arg(short = 'r', long, value_delimiter = ',')]
        regions: Vec<String>,

        /// Only print this panel
        #[arg(short = 'p', long, value_enum)]
        panel: Option<PanelArg>,

        /// Wrap a single panel in the versioned JSON contract
        #[arg(long, requires = "panel")]
        contract: bool,
    },

    /// Validate a chart description (bare or contract-wrapped) and print it bare
    Check {
        /// Chart JSON file, or "-" for stdin
        #[arg(default_value = "-")]
        chart: String,
    },

    /// Replay JSON-lines selection events and print one panel update per event
    Replay {
        #[command(flatten)]
        dashboard: DashboardArgs,

        /// Events file, or "-" for stdin
        #[arg(short = 'e', long, default_value = "-")]
        events: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Merge => render::run_merge(&mut out),
        Command::Options { dashboard } => render::run_options(&dashboard.to_config(), &mut out),
        Command::Render {
            dashboard,
            indicator,
            year,
            regions,
            panel,
            contract,
        } => {
            let selection = render::Selection {
                indicator,
                year,
                regions,
            };
            render::run_render(
                &dashboard.to_config(),
                &selection,
                panel.map(Panel::from),
                contract,
                &mut out,
            )
        }
        Command::Check { chart } => render::run_check(&chart, &mut out),
        Command::Replay { dashboard, events } => {
            replay::run_replay(&dashboard.to_config(), &events, &mut out)
        }
    }
}
