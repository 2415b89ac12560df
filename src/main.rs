mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use sched_core::config::{GlobalConfig, expand_path};
use sched_core::Schedule;

#[derive(Parser)]
#[command(name = "sched")]
#[command(about = "Expand a plain-text schedule into dated agenda entries")]
struct Cli {
    /// Schedule file (defaults to schedule_file from config)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Year that dates resolve against (defaults to year from config, then this year)
    #[arg(long, global = true)]
    year: Option<i32>,

    /// Log parsing details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the whole schedule file and report the first error
    Check,
    /// Show upcoming events grouped by day
    Agenda {
        /// First day to show (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        from: Option<String>,

        /// Number of days to show (defaults to agenda_days from config)
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Show the events of a single day
    Day {
        /// Day to show (YYYY-MM-DD, defaults to today)
        date: Option<String>,
    },
    /// Print the dates a date expression expands to (e.g. "August -- September M-F")
    Dates { expression: String },
    /// Print the time pairs a time expression expands to (e.g. "7pm-8:30pm, 9-10pm")
    Times { expression: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GlobalConfig::load()?;
    let year = cli.year.unwrap_or_else(|| config.year());
    let path = cli
        .file
        .as_deref()
        .map(expand_path)
        .unwrap_or_else(|| config.schedule_path());

    match cli.command {
        Commands::Check => commands::check::run(&path, year),
        Commands::Agenda { from, days } => {
            let schedule = load_schedule(&path, year)?;
            let from = parse_day_arg(from.as_deref())?;
            commands::agenda::run(&schedule, from, days.unwrap_or(config.agenda_days))
        }
        Commands::Day { date } => {
            let schedule = load_schedule(&path, year)?;
            commands::day::run(&schedule, parse_day_arg(date.as_deref())?)
        }
        Commands::Dates { expression } => commands::expand::dates(&expression, year),
        Commands::Times { expression } => commands::expand::times(&expression),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn load_schedule(path: &std::path::Path, year: i32) -> Result<Schedule> {
    Schedule::load(path, year).with_context(|| format!("Failed to load schedule {}", path.display()))
}

/// Parse YYYY-MM-DD, defaulting to today.
fn parse_day_arg(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}
