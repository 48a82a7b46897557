use crate::calendar::{month_title, CalendarError, CalendarPicker, WEEKDAY_HEADINGS};
use crate::config::{to_yaml, Config, ConfigSource};
use crate::ui;
use anyhow::Result;
use chrono::{Datelike, Local};

pub fn tui(config: &Config) -> Result<()> {
    log::info!(
        "starting tui (validate_due_dates={}, date_picker={})",
        config.validate_due_dates,
        config.date_picker
    );
    ui::run(config, Local::now().date_naive())
}

pub fn calendar(year: Option<i32>, month: Option<u32>) -> Result<()> {
    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());
    for line in render_month(year, month)? {
        println!("{}", line);
    }
    Ok(())
}

pub fn show_config(config: &Config, source: &ConfigSource) -> Result<()> {
    match source {
        ConfigSource::File(path) => println!("# loaded from {}", path.display()),
        ConfigSource::Defaults => println!("# no config file, using defaults"),
    }
    print!("{}", to_yaml(config)?);
    Ok(())
}

fn render_month(year: i32, month: u32) -> Result<Vec<String>, CalendarError> {
    let weeks = CalendarPicker::starting_at(year, month)?.weeks();
    let mut lines = vec![
        format!("{:^20}", month_title(year, month)),
        WEEKDAY_HEADINGS.join(" "),
    ];
    for week in weeks {
        let cells: Vec<String> = week
            .iter()
            .map(|day| match day {
                0 => "  ".to_string(),
                d => format!("{:>2}", d),
            })
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_march_2024() {
        let lines = render_month(2024, 3).expect("valid month");
        assert_eq!(lines[0].trim(), "March 2024");
        assert_eq!(lines[1], "Mo Tu We Th Fr Sa Su");
        assert_eq!(lines[2], "             1  2  3");
        assert_eq!(lines[6], "25 26 27 28 29 30 31");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn rejects_bad_month() {
        assert_eq!(
            render_month(2024, 0).err(),
            Some(CalendarError::InvalidMonth(0))
        );
    }

    #[test]
    fn rejects_year_without_a_grid() {
        assert_eq!(
            render_month(300_000, 3).err(),
            Some(CalendarError::YearOutOfRange(300_000))
        );
    }
}
