//! Joins month grids against fetched records.
//!
//! The output is a flat, row-major list of view cells. Components only decide
//! markup; every "what goes in this box" decision is made here.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::attendance::AttendanceBand;
use crate::calendar::{blank_padded_grid, days_in_grid, format_date_key, is_holiday, CalendarMonth, WeekStart};
use crate::catalog::subject_name;
use crate::models::{AttendanceRecord, Dated, DayRecord};

/// Records indexed by [`format_date_key`]. The first record for a date wins.
pub struct RecordIndex<'a, T> {
    by_key: HashMap<String, &'a T>,
}

impl<'a, T: Dated> RecordIndex<'a, T> {
    pub fn new(records: &'a [T]) -> Self {
        let mut by_key = HashMap::with_capacity(records.len());
        for record in records {
            by_key.entry(format_date_key(record.date())).or_insert(record);
        }
        Self { by_key }
    }

    pub fn get(&self, date: NaiveDate) -> Option<&'a T> {
        self.by_key.get(&format_date_key(date)).copied()
    }
}

/// One box of the timetable calendar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimetableCell<'a> {
    pub date: NaiveDate,
    pub in_month: bool,
    pub holiday: bool,
    pub record: Option<&'a DayRecord>,
}

impl<'a> TimetableCell<'a> {
    /// Whether the cell shows its subject slot (assigned or drop hint)
    pub fn shows_subject_slot(&self) -> bool {
        self.record.is_some() && !self.holiday && self.in_month
    }

    pub fn subject_name(&self) -> Option<&'static str> {
        self.record
            .and_then(|r| r.subject)
            .map(subject_name)
    }

    /// Drops are only accepted on teaching days the backend knows about
    pub fn accepts_drop(&self) -> bool {
        !self.holiday && self.record.is_some()
    }

    pub fn css_class(&self) -> &'static str {
        if !self.in_month {
            "timetable-day outside"
        } else if self.holiday {
            "timetable-day holiday"
        } else {
            "timetable-day"
        }
    }
}

pub fn render_timetable<'a>(
    month: CalendarMonth,
    week_start: WeekStart,
    records: &'a [DayRecord],
) -> Vec<TimetableCell<'a>> {
    let index = RecordIndex::new(records);
    days_in_grid(month, week_start)
        .into_iter()
        .map(|cell| TimetableCell {
            date: cell.date,
            in_month: cell.in_month,
            holiday: is_holiday(cell.date),
            record: index.get(cell.date),
        })
        .collect()
}

/// One box of the attendance calendar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendanceCell<'a> {
    /// `None` for the blank slots around the month
    pub date: Option<NaiveDate>,
    pub record: Option<&'a AttendanceRecord>,
    pub band: AttendanceBand,
    pub is_today: bool,
}

impl<'a> AttendanceCell<'a> {
    /// "present/booked", only when somebody was booked
    pub fn ratio_label(&self) -> Option<String> {
        self.record
            .filter(|r| r.booked_count > 0)
            .map(|r| format!("{}/{}", r.present_count, r.booked_count))
    }

    pub fn subject_label(&self) -> Option<&'a str> {
        self.record
            .filter(|r| r.booked_count > 0)
            .and_then(|r| r.subject_info.as_ref())
            .map(|s| s.subject_name.as_str())
    }
}

pub fn render_attendance<'a>(
    month: CalendarMonth,
    week_start: WeekStart,
    records: &'a [AttendanceRecord],
    today: NaiveDate,
) -> Vec<AttendanceCell<'a>> {
    let index = RecordIndex::new(records);
    blank_padded_grid(month, week_start)
        .into_iter()
        .map(|slot| match slot {
            Some(date) => {
                let record = index.get(date);
                AttendanceCell {
                    date: Some(date),
                    record,
                    band: AttendanceBand::for_record(record),
                    is_today: date == today,
                }
            }
            None => AttendanceCell {
                date: None,
                record: None,
                band: AttendanceBand::NoBookings,
                is_today: false,
            },
        })
        .collect()
}
