use anyhow::Result;
use chrono::{Duration, NaiveDate};
use owo_colors::OwoColorize;
use sched_core::Schedule;

use crate::render::{render_day_events, render_day_heading};

pub fn run(schedule: &Schedule, from: NaiveDate, days: u32) -> Result<()> {
    let to = from + Duration::days(i64::from(days.max(1)) - 1);

    let mut printed_any = false;
    for (date, events) in schedule.range(from..=to) {
        if printed_any {
            println!();
        }
        println!("{}", render_day_heading(date));
        for line in render_day_events(events) {
            println!("{}", line);
        }
        printed_any = true;
    }

    if !printed_any {
        println!("{}", "No events found".dimmed());
    }

    Ok(())
}
