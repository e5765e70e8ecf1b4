use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sprs",
    version,
    about = "SPRS compliance scoring and report data CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the SPRS breakdown for an assessment snapshot
    Score(ScoreCommand),
    /// Emit badge data JSON for README dashboards
    Badge(BadgeCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Assessment JSON file (default: latest snapshot in --history-dir)
    pub assessment: Option<PathBuf>,

    /// Directory of date-stamped assessment snapshots
    #[arg(long, default_value = "data/assessment_history")]
    pub history_dir: PathBuf,

    /// Control weight table (TOML)
    #[arg(long)]
    pub weights: Option<PathBuf>,

    /// POA&M snapshot used for SPRS credit (TOML)
    #[arg(long)]
    pub poam: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BadgeCommand {
    /// Assessment JSON file (default: latest snapshot in --history-dir)
    pub assessment: Option<PathBuf>,

    /// Directory of date-stamped assessment snapshots
    #[arg(long, default_value = "data/assessment_history")]
    pub history_dir: PathBuf,

    /// Control weight table (TOML)
    #[arg(long)]
    pub weights: Option<PathBuf>,

    /// POA&M snapshot used for SPRS credit (TOML)
    #[arg(long)]
    pub poam: Option<PathBuf>,

    /// Write badge JSON to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Csv,
}
