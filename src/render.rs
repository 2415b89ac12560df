//! Terminal rendering for sched-core types.
//!
//! Extension traits that add colored output using owo_colors.

use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;
use sched_core::format::{event_text, long_date};
use sched_core::schedule::DayEvents;
use sched_core::token::describe_kinds;
use sched_core::SchedError;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for SchedError {
    fn render(&self) -> String {
        match self {
            SchedError::Line { number, line, source } => {
                format!(
                    "{}\n{}\n\t{}",
                    format!("Error on line {}:", number).red().bold(),
                    source.render(),
                    line.dimmed()
                )
            }
            SchedError::Scan(err) => format!(
                "Could not scan schedule text.\n  Recognized so far:\n\t{}\n  Could not understand:\n\t{}",
                err.consumed().green(),
                err.remainder().red()
            ),
            SchedError::Parse(err) => format!(
                "Could not parse schedule text.\n  Expected something in:\n\t{}\n  But found this instead:\n\t{}",
                describe_kinds(&err.expected).green(),
                err.found.to_string().red()
            ),
            other => other.to_string().red().to_string(),
        }
    }
}

/// Day heading, e.g. "Today · Monday, September 1st".
pub fn render_day_heading(date: NaiveDate) -> String {
    let today = Local::now().date_naive();
    let label = long_date(date);

    match (date - today).num_days() {
        0 => format!("{} {}", "Today ·".dimmed(), label.bold()),
        1 => format!("{} {}", "Tomorrow ·".dimmed(), label.bold()),
        _ => label.bold().to_string(),
    }
}

/// One line per event, indented under a day heading.
pub fn render_day_events(events: &DayEvents) -> Vec<String> {
    events
        .iter()
        .map(|(pair, description)| {
            let text = event_text(pair, description);
            if pair.is_overnight() {
                format!("  {} {}", text, "(overnight)".dimmed())
            } else {
                format!("  {}", text)
            }
        })
        .collect()
}
