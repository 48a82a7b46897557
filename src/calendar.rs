//! Month-grid date picker.
//!
//! The picker shows one `(year, month)` at a time, moves between months with
//! wrap-around at the year boundary, and emits a `YYYY-MM-DD` string when a
//! day is picked. After a pick (or a cancel) it is closed for good.

use chrono::{Datelike, NaiveDate};

pub const WEEKDAY_HEADINGS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// One calendar row, Monday first. `0` marks a cell outside the month.
pub type Week = [u32; 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Displaying { year: i32, month: u32 },
    Closed,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
    #[error("day {day} does not exist in {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    #[error("calendar is closed")]
    Closed,
}

#[derive(Debug, Clone)]
pub struct CalendarPicker {
    state: PickerState,
}

impl CalendarPicker {
    pub fn new(today: NaiveDate) -> Self {
        CalendarPicker {
            state: PickerState::Displaying {
                year: today.year(),
                month: today.month(),
            },
        }
    }

    pub fn starting_at(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(CalendarError::YearOutOfRange(year));
        }
        Ok(CalendarPicker {
            state: PickerState::Displaying { year, month },
        })
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn displayed(&self) -> Option<(i32, u32)> {
        match self.state {
            PickerState::Displaying { year, month } => Some((year, month)),
            PickerState::Closed => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.state == PickerState::Closed
    }

    /// Stays put when the previous month is outside chrono's range.
    pub fn prev_month(&mut self) {
        if let PickerState::Displaying { year, month } = self.state {
            let (year, month) = match month {
                1 => (year - 1, 12),
                m => (year, m - 1),
            };
            self.show(year, month);
        }
    }

    pub fn next_month(&mut self) {
        if let PickerState::Displaying { year, month } = self.state {
            let (year, month) = match month {
                12 => (year + 1, 1),
                m => (year, m + 1),
            };
            self.show(year, month);
        }
    }

    fn show(&mut self, year: i32, month: u32) {
        if NaiveDate::from_ymd_opt(year, month, 1).is_some() {
            self.state = PickerState::Displaying { year, month };
        }
    }

    /// Weeks of the displayed month, empty once closed.
    pub fn weeks(&self) -> Vec<Week> {
        self.displayed()
            .map(|(year, month)| month_weeks(year, month))
            .unwrap_or_default()
    }

    /// Picks `day` of the displayed month and closes the picker.
    ///
    /// Placeholder cells are never pickable, so a day outside the month is
    /// an error and the picker stays open on the same month.
    pub fn pick(&mut self, day: u32) -> Result<String, CalendarError> {
        let (year, month) = self.displayed().ok_or(CalendarError::Closed)?;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::InvalidDay { year, month, day })?;
        self.state = PickerState::Closed;
        Ok(format_date(date))
    }

    pub fn close(&mut self) {
        self.state = PickerState::Closed;
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    if !(1..=12).contains(&month) {
        return 0;
    }
    let next = if month == 12 {
        year
            .checked_add(1)
            .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(0)
}

pub fn month_weeks(year: i32, month: u32) -> Vec<Week> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return Vec::new(),
    };
    let days = days_in_month(year, month);
    let offset = first.weekday().num_days_from_monday();
    let mut weeks = Vec::new();
    let mut week: Week = [0; 7];
    for day in 1..=days {
        let slot = ((offset + day - 1) % 7) as usize;
        week[slot] = day;
        if slot == 6 {
            weeks.push(week);
            week = [0; 7];
        }
    }
    if week.iter().any(|d| *d != 0) {
        weeks.push(week);
    }
    weeks
}

pub fn month_title(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| format!("{} {}", d.format("%B"), year))
        .unwrap_or_else(|| format!("{:02}-{}", month, year))
}
