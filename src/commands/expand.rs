//! Expand a single date or time expression, for trying out syntax.

use anyhow::Result;
use owo_colors::OwoColorize;
use sched_core::format::{long_date, time_12h};
use sched_core::{DateExpression, TimeExpression};

use crate::render::Render;

pub fn dates(expression: &str, year: i32) -> Result<()> {
    let parsed = DateExpression::parse(expression, year).map_err(|e| anyhow::anyhow!(e.render()))?;

    let mut count = 0;
    for date in parsed.dates() {
        println!("{}  {}", date, long_date(date).dimmed());
        count += 1;
    }
    println!("{}", format!("{} dates from {}", count, parsed).dimmed());

    Ok(())
}

pub fn times(expression: &str) -> Result<()> {
    let parsed = TimeExpression::parse(expression).map_err(|e| anyhow::anyhow!(e.render()))?;

    for pair in parsed.pairs() {
        println!("{}  {}", pair, format!("{} -- {}", time_12h(pair.start), time_12h(pair.end)).dimmed());
    }

    Ok(())
}
