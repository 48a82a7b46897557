use crate::form::FormOptions;
use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reject due dates that are not `YYYY-MM-DD`.
    pub validate_due_dates: bool,
    /// Offer the calendar dialog on the Create tab.
    pub date_picker: bool,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            validate_due_dates: true,
            date_picker: true,
            log_level: "info".into(),
            log_file: None,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub loose_dates: bool,
    pub no_picker: bool,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl Config {
    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            validate_due_dates: self.validate_due_dates,
        }
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if overrides.loose_dates {
            self.validate_due_dates = false;
        }
        if overrides.no_picker {
            self.date_picker = false;
        }
        if let Some(path) = &overrides.log_file {
            self.log_file = Some(path.clone());
        }
    }
}

/// Reads `explicit` if given (it must exist), else the per-user config file
/// if present, else falls back to defaults.
pub fn load(explicit: Option<&Path>) -> Result<(Config, ConfigSource)> {
    let path = match explicit {
        Some(p) => {
            if !p.exists() {
                bail!("config file {:?} does not exist", p);
            }
            p.to_path_buf()
        }
        None => match default_config_path() {
            Ok(p) if p.exists() => p,
            _ => return Ok((Config::default(), ConfigSource::Defaults)),
        },
    };
    let data = fs::read_to_string(&path).with_context(|| format!("reading {:?}", path))?;
    let config = parse(&data).with_context(|| format!("parsing {:?}", path))?;
    Ok((config, ConfigSource::File(path)))
}

pub fn parse(data: &str) -> Result<Config> {
    if data.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(data).context("invalid config")?;
    Ok(config)
}

pub fn to_yaml(config: &Config) -> Result<String> {
    serde_yaml::to_string(config).context("serializing config")
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.yml"))
}

pub fn default_log_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().join("tasktabs.log"))
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "tasktabs").context("locating user directories")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_strict_dates_and_picker() {
        let config = Config::default();
        assert!(config.validate_due_dates);
        assert!(config.date_picker);
        assert!(config.form_options().validate_due_dates);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse("date_picker: false\n").expect("valid yaml");
        assert!(!config.date_picker);
        assert!(config.validate_due_dates);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(parse("  \n").expect("empty ok"), Config::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(parse("validate_due_dates: [nope").is_err());
    }

    #[test]
    fn overrides_win_over_file_values() {
        let mut config = parse("validate_due_dates: true\nlog_file: /tmp/a.log\n").expect("yaml");
        config.apply(&Overrides {
            loose_dates: true,
            no_picker: true,
            log_file: Some(PathBuf::from("/tmp/b.log")),
        });
        assert!(!config.validate_due_dates);
        assert!(!config.date_picker);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/b.log")));
    }

    #[test]
    fn missing_explicit_file_fails() {
        let path = Path::new("/definitely/not/here/tasktabs.yml");
        assert!(load(Some(path)).is_err());
    }

    #[test]
    fn yaml_round_trips_through_print() {
        let config = Config {
            log_level: "debug".into(),
            ..Config::default()
        };
        let text = to_yaml(&config).expect("serialize");
        assert_eq!(parse(&text).expect("parse"), config);
    }
}
