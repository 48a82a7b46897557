use crate::config::{default_log_path, Config};
use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::{self, File};
use std::path::Path;

/// Sets up `env_logger`. `RUST_LOG` wins over the configured level.
///
/// The TUI owns the terminal, so interactive sessions write to a log file
/// instead of stderr. The file holds the latest session only.
pub fn init(config: &Config, interactive: bool) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()));
    if interactive {
        let path = match &config.log_file {
            Some(p) => p.clone(),
            None => default_log_path()?,
        };
        let file = open_session_log(&path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("installing logger")?;
    Ok(())
}

/// Creates the log file, truncating whatever an earlier session left.
fn open_session_log(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {:?}", parent))?;
    }
    File::create(path).with_context(|| format!("opening log file {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn session_log_starts_empty() {
        let dir = env::temp_dir().join(format!("tasktabs-log-{}", std::process::id()));
        let path = dir.join("nested").join("tasktabs.log");
        fs::create_dir_all(path.parent().expect("has parent")).expect("create dir");
        fs::write(&path, "previous session\n").expect("seed log");

        open_session_log(&path).expect("open log");
        assert_eq!(fs::read_to_string(&path).expect("read log"), "");

        fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn session_log_creates_missing_directories() {
        let dir = env::temp_dir().join(format!("tasktabs-newdir-{}", std::process::id()));
        let path = dir.join("a").join("b").join("tasktabs.log");
        open_session_log(&path).expect("open log");
        assert!(path.exists());
        fs::remove_dir_all(&dir).expect("cleanup");
    }
}
