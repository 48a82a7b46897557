use crate::config::Overrides;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tasktabs", version, about = "Terminal task tracker with active and completed tabs")]
pub struct Cli {
    /// Config file (defaults to the per-user config.yml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Accept any text as a due date
    #[arg(long, global = true)]
    pub loose_dates: bool,
    /// Disable the calendar date picker
    #[arg(long, global = true)]
    pub no_picker: bool,
    /// Write TUI logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Launch the interactive TUI
    Tui,
    /// Print a month grid (Monday first)
    Calendar {
        /// Year to show (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Month to show, 1-12 (defaults to the current month)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// Print the effective configuration
    Config,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            loose_dates: self.loose_dates,
            no_picker: self.no_picker,
            log_file: self.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["tasktabs"]).expect("parses");
        assert!(cli.command.is_none());
        assert!(!cli.overrides().loose_dates);
    }

    #[test]
    fn flags_after_subcommand_are_accepted() {
        let cli = Cli::try_parse_from(["tasktabs", "tui", "--loose-dates", "--no-picker"])
            .expect("parses");
        assert!(matches!(cli.command, Some(Command::Tui)));
        let overrides = cli.overrides();
        assert!(overrides.loose_dates);
        assert!(overrides.no_picker);
    }

    #[test]
    fn calendar_month_is_range_checked() {
        assert!(Cli::try_parse_from(["tasktabs", "calendar", "--month", "13"]).is_err());
        let cli = Cli::try_parse_from(["tasktabs", "calendar", "--year", "2024", "--month", "3"])
            .expect("parses");
        match cli.command {
            Some(Command::Calendar { year, month }) => {
                assert_eq!(year, Some(2024));
                assert_eq!(month, Some(3));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
