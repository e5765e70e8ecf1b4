mod badge;
mod cli;
mod config;
mod error;
mod history;
mod report;
mod scoring;
mod types;

use crate::error::SprsError;
use crate::scoring::credit::CreditSet;
use crate::scoring::Scorer;
use chrono::Utc;
use clap::Parser;
use std::path::{Path, PathBuf};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const DEDUCTIONS: i32 = 1;
    pub const NO_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_assessment(
    explicit: Option<&Path>,
    history_dir: &Path,
) -> Result<PathBuf, SprsError> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(SprsError::AssessmentNotFound(path.display().to_string()));
        }
        return Ok(path.to_path_buf());
    }
    history::latest_assessment(history_dir)
        .ok_or_else(|| SprsError::EmptyHistory(history_dir.display().to_string()))
}

fn build_scorer(weights: Option<&Path>, poam: Option<&Path>) -> Scorer {
    let weight_table = config::load_weight_table(weights);
    let poam_data = config::load_poam(poam);
    Scorer::new(weight_table, CreditSet::from_poam(&poam_data))
}

fn run() -> Result<i32, SprsError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let input = resolve_assessment(cmd.assessment.as_deref(), &cmd.history_dir)?;
            let assessment = history::load_assessment(&input)?;
            let scorer = build_scorer(cmd.weights.as_deref(), cmd.poam.as_deref());
            let breakdown = scorer.compute_breakdown(&assessment);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Csv => report::OutputFormat::Csv,
            };
            let rendered = report::render(&breakdown, output_format)?;
            println!("{rendered}");

            if breakdown.deductions.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::DEDUCTIONS)
            }
        }
        cli::Commands::Badge(cmd) => {
            let input = resolve_assessment(cmd.assessment.as_deref(), &cmd.history_dir)?;
            let assessment = history::load_assessment(&input)?;
            let scorer = build_scorer(cmd.weights.as_deref(), cmd.poam.as_deref());
            let badge_data = badge::build_badge_data(
                &assessment,
                scorer.score(&assessment),
                Some(&input),
                Utc::now(),
            );
            let rendered = serde_json::to_string_pretty(&badge_data)?;

            match cmd.output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        if !parent.as_os_str().is_empty() {
                            std::fs::create_dir_all(parent)?;
                        }
                    }
                    std::fs::write(&path, format!("{rendered}\n"))?;
                    println!("wrote badge data: {}", path.display());
                }
                None => println!("{rendered}"),
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                SprsError::AssessmentNotFound(_) | SprsError::EmptyHistory(_) => {
                    exit_code::NO_INPUT
                }
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
