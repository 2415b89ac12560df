use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use sched_core::{Schedule, SchedError};

use crate::render::Render;

pub fn run(path: &Path, year: i32) -> Result<()> {
    match Schedule::load(path, year) {
        Ok(schedule) => {
            println!(
                "{} {}: {} entries on {} days ({})",
                "✓".green(),
                path.display(),
                schedule.len(),
                schedule.days().count(),
                year
            );
            Ok(())
        }
        Err(SchedError::Io(e)) => {
            anyhow::bail!("Could not read schedule file {}: {}", path.display(), e)
        }
        Err(e) => {
            eprintln!("{}", e.render());
            anyhow::bail!("{} has errors", path.display())
        }
    }
}
