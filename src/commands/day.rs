use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use sched_core::Schedule;

use crate::render::{render_day_events, render_day_heading};

pub fn run(schedule: &Schedule, date: NaiveDate) -> Result<()> {
    println!("{}", render_day_heading(date));

    match schedule.day(date) {
        Some(events) if !events.is_empty() => {
            for line in render_day_events(events) {
                println!("{}", line);
            }
        }
        _ => println!("  {}", "Nothing scheduled".dimmed()),
    }

    Ok(())
}
