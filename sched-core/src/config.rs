//! Global sched configuration.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use serde::Deserialize;

use crate::error::{SchedError, SchedResult};

static DEFAULT_SCHEDULE_FILE: &str = "~/schedule.txt";
const DEFAULT_AGENDA_DAYS: u32 = 7;

fn default_schedule_file() -> PathBuf {
    PathBuf::from(DEFAULT_SCHEDULE_FILE)
}

fn default_agenda_days() -> u32 {
    DEFAULT_AGENDA_DAYS
}

/// Configuration at ~/.config/sched/config.toml
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Schedule file to read. A leading `~/` is expanded.
    #[serde(default = "default_schedule_file")]
    pub schedule_file: PathBuf,

    /// Year that month/day expressions resolve against. Defaults to the
    /// current local year.
    pub year: Option<i32>,

    /// Days shown by `sched agenda` when `--days` is not given.
    #[serde(default = "default_agenda_days")]
    pub agenda_days: u32,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            schedule_file: default_schedule_file(),
            year: None,
            agenda_days: DEFAULT_AGENDA_DAYS,
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> SchedResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SchedError::Config("Could not determine config directory".into()))?
            .join("sched");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file gives the defaults.
    pub fn load() -> SchedResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> SchedResult<Self> {
        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            SchedError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml(&contents)
            .map_err(|e| SchedError::Config(format!("{} in {}", e, path.display())))
    }

    pub fn from_toml(contents: &str) -> SchedResult<Self> {
        toml::from_str(contents).map_err(|e| SchedError::Config(format!("Invalid config: {}", e)))
    }

    /// Session year: the configured override, or this year.
    pub fn year(&self) -> i32 {
        self.year.unwrap_or_else(|| Local::now().year())
    }

    /// Schedule file path with `~` expanded.
    pub fn schedule_path(&self) -> PathBuf {
        expand_path(&self.schedule_file)
    }
}

/// Expand a leading `~/` to the home directory.
pub fn expand_path(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GlobalConfig::from_toml("").expect("Should parse");
        assert_eq!(config, GlobalConfig::default());
        assert_eq!(config.agenda_days, 7);
        assert_eq!(config.schedule_file, PathBuf::from("~/schedule.txt"));
    }

    #[test]
    fn test_config_overrides() {
        let config = GlobalConfig::from_toml(
            r#"
schedule_file = "/tmp/fall.txt"
year = 2014
agenda_days = 14
"#,
        )
        .expect("Should parse");
        assert_eq!(config.schedule_path(), PathBuf::from("/tmp/fall.txt"));
        assert_eq!(config.year(), 2014);
        assert_eq!(config.agenda_days, 14);
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let err = GlobalConfig::from_toml("year = \"soon\"").unwrap_err();
        assert!(matches!(err, SchedError::Config(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = GlobalConfig::load_from(Path::new("/nonexistent/sched/config.toml"))
            .expect("Should default");
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_expand_path_leaves_absolute_paths() {
        assert_eq!(expand_path(Path::new("/etc/x")), PathBuf::from("/etc/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path(Path::new("~/schedule.txt")), home.join("schedule.txt"));
        }
    }
}
