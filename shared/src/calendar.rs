//! Calendar grid utilities.
//!
//! Everything here is pure: month arithmetic, the padded month grid that both
//! calendar pages render, and the canonical `YYYY-MM-DD` key used to join grid
//! cells against backend records.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Day the calendar rows start on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column index (0..=6) of `date` in a row starting on this day
    pub fn offset(&self, date: NaiveDate) -> u32 {
        match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        }
    }

    /// Short column headers in display order
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }

    /// Full column headers in display order
    pub fn weekday_names(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => [
                "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
            ],
            WeekStart::Monday => [
                "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
            ],
        }
    }
}

/// A displayed month. Immutable; navigation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// `None` for a month outside 1..=12 or a year chrono cannot represent
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(self.first)
    }

    pub fn day_count(&self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Previous month, rolling the year over in January
    pub fn previous(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// Next month, rolling the year over in December
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// Header text, e.g. "March 2024"
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month()), self.year())
    }
}

/// One slot of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// False for padding days borrowed from the adjacent months
    pub in_month: bool,
}

/// A grid slot that may deliberately show nothing
pub type CellDate = Option<NaiveDate>;

/// Row-major cells for `month`, padded with real dates from the adjacent
/// months so that every row is complete.
///
/// The result always has a length that is a multiple of 7, row 0 starts on
/// `week_start`, and every date of the month appears exactly once.
pub fn days_in_grid(month: CalendarMonth, week_start: WeekStart) -> Vec<GridCell> {
    let first = month.first_day();
    let last = month.last_day();

    let leading = week_start.offset(first);
    let trailing = (6 - week_start.offset(last)) % 7;
    let total = (leading + month.day_count() + trailing) as usize;

    let Some(start) = first.checked_sub_days(Days::new(u64::from(leading))) else {
        // Only reachable at the very edge of chrono's supported range
        return first
            .iter_days()
            .take(month.day_count() as usize)
            .map(|date| GridCell { date, in_month: true })
            .collect();
    };

    start
        .iter_days()
        .take(total)
        .map(|date| GridCell {
            date,
            in_month: month.contains(date),
        })
        .collect()
}

/// Same shape as [`days_in_grid`] with the padding slots left empty.
///
/// The attendance calendar renders out-of-month slots as blank boxes.
pub fn blank_padded_grid(month: CalendarMonth, week_start: WeekStart) -> Vec<CellDate> {
    days_in_grid(month, week_start)
        .into_iter()
        .map(|cell| cell.in_month.then_some(cell.date))
        .collect()
}

/// Canonical join key between grid cells and backend records.
///
/// Built from the calendar fields only, so it never depends on the browser's
/// locale or timezone offset.
pub fn format_date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Inverse of [`format_date_key`]
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d").ok()
}

/// Mondays are non-teaching days
pub fn is_holiday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}
