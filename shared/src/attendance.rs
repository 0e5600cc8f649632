//! Attendance banding and monthly totals.

use crate::calendar::CalendarMonth;
use crate::models::AttendanceRecord;

/// Colour band of one attendance day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceBand {
    /// 80% and above, 100% included
    High,
    /// [60%, 80%)
    Moderate,
    /// [40%, 60%)
    Low,
    /// Below 40%
    Critical,
    /// Nobody was booked, or there is no record for the day
    NoBookings,
}

impl AttendanceBand {
    /// Band for `present` out of `booked`.
    ///
    /// Compared in integer space so that e.g. 8/20 lands exactly on 40%.
    pub fn classify(present: u32, booked: u32) -> Self {
        if booked == 0 {
            return AttendanceBand::NoBookings;
        }
        let scaled = u64::from(present) * 100;
        let booked = u64::from(booked);
        if scaled >= 80 * booked {
            AttendanceBand::High
        } else if scaled >= 60 * booked {
            AttendanceBand::Moderate
        } else if scaled >= 40 * booked {
            AttendanceBand::Low
        } else {
            AttendanceBand::Critical
        }
    }

    pub fn for_record(record: Option<&AttendanceRecord>) -> Self {
        match record {
            Some(r) => Self::classify(r.present_count, r.booked_count),
            None => AttendanceBand::NoBookings,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AttendanceBand::High => "attendance-high",
            AttendanceBand::Moderate => "attendance-moderate",
            AttendanceBand::Low => "attendance-low",
            AttendanceBand::Critical => "attendance-critical",
            AttendanceBand::NoBookings => "attendance-none",
        }
    }

    pub fn legend(&self) -> &'static str {
        match self {
            AttendanceBand::High => "80%+",
            AttendanceBand::Moderate => "60-79%",
            AttendanceBand::Low => "40-59%",
            AttendanceBand::Critical => "Below 40%",
            AttendanceBand::NoBookings => "No bookings",
        }
    }

    /// Bands shown in the legend, best first
    pub fn legend_bands() -> [AttendanceBand; 4] {
        [
            AttendanceBand::High,
            AttendanceBand::Moderate,
            AttendanceBand::Low,
            AttendanceBand::Critical,
        ]
    }
}

/// Totals shown under the attendance calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthSummary {
    /// Days in the month with at least one booking
    pub classes: u32,
    pub present: u32,
    pub booked: u32,
    /// Rounded percentage, 0 when nobody was booked
    pub average_percent: u32,
}

impl MonthSummary {
    pub fn for_month(records: &[AttendanceRecord], month: CalendarMonth) -> Self {
        let in_month = records.iter().filter(|r| month.contains(r.date));

        let mut summary = MonthSummary::default();
        for record in in_month {
            if record.booked_count > 0 {
                summary.classes += 1;
            }
            summary.present += record.present_count;
            summary.booked += record.booked_count;
        }

        if summary.booked > 0 {
            let present = u64::from(summary.present);
            let booked = u64::from(summary.booked);
            // round half up
            summary.average_percent = ((present * 200 + booked) / (booked * 2)) as u32;
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, d: u32, present: u32, booked: u32) -> AttendanceRecord {
        AttendanceRecord {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            booked_count: booked,
            present_count: present,
            subject_info: None,
        }
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(AttendanceBand::classify(8, 10), AttendanceBand::High);
        assert_eq!(AttendanceBand::classify(10, 10), AttendanceBand::High);
        assert_eq!(AttendanceBand::classify(79, 100), AttendanceBand::Moderate);
        assert_eq!(AttendanceBand::classify(6, 10), AttendanceBand::Moderate);
        assert_eq!(AttendanceBand::classify(8, 20), AttendanceBand::Low);
        assert_eq!(AttendanceBand::classify(39, 100), AttendanceBand::Critical);
        assert_eq!(AttendanceBand::classify(0, 5), AttendanceBand::Critical);
        assert_eq!(AttendanceBand::classify(0, 0), AttendanceBand::NoBookings);
        assert_eq!(AttendanceBand::for_record(None), AttendanceBand::NoBookings);
    }

    #[test]
    fn test_month_summary_only_counts_the_month() {
        let records = vec![
            record(2024, 4, 2, 8, 10),
            record(2024, 4, 3, 1, 3),
            record(2024, 4, 4, 0, 0),
            record(2024, 5, 1, 9, 9),
        ];
        let april = CalendarMonth::new(2024, 4).unwrap();
        let summary = MonthSummary::for_month(&records, april);

        assert_eq!(summary.classes, 2);
        assert_eq!(summary.present, 9);
        assert_eq!(summary.booked, 13);
        // 9 / 13 = 69.2%
        assert_eq!(summary.average_percent, 69);
    }

    #[test]
    fn test_month_summary_without_bookings() {
        let june = CalendarMonth::new(2024, 6).unwrap();
        assert_eq!(MonthSummary::for_month(&[], june), MonthSummary::default());
    }

    #[test]
    fn test_month_summary_rounds_half_up() {
        let records = vec![record(2024, 4, 2, 1, 8)];
        let april = CalendarMonth::new(2024, 4).unwrap();
        // 12.5% rounds to 13
        assert_eq!(MonthSummary::for_month(&records, april).average_percent, 13);
    }
}
