use std::cell::RefCell;

use chrono::NaiveDate;

use crate::attendance::MonthSummary;
use crate::calendar::{CalendarMonth, WeekStart};
use crate::controller::{fetch_into, FetchOutcome, ViewController};
use crate::gateway::DashboardGateway;
use crate::models::AttendanceRecord;

pub type AttendanceController = ViewController<CalendarMonth, Vec<AttendanceRecord>>;

pub struct AttendancePage {
    pub view: RefCell<AttendanceController>,
    initial_month: CalendarMonth,
    week_start: WeekStart,
}

impl AttendancePage {
    pub fn new(initial_month: CalendarMonth, week_start: WeekStart) -> Self {
        Self {
            view: RefCell::new(ViewController::new()),
            initial_month,
            week_start,
        }
    }

    /// Opens on the month containing `today`
    pub fn for_today(today: NaiveDate, week_start: WeekStart) -> Self {
        Self::new(CalendarMonth::containing(today), week_start)
    }

    pub fn month(&self) -> CalendarMonth {
        self.view.borrow().query().copied().unwrap_or(self.initial_month)
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn records(&self) -> Option<Vec<AttendanceRecord>> {
        self.view.borrow().current_snapshot().cloned()
    }

    pub fn summary(&self) -> Option<MonthSummary> {
        let month = self.month();
        self.view
            .borrow()
            .current_snapshot()
            .map(|records| MonthSummary::for_month(records, month))
    }
}

pub async fn load<G>(gateway: &G, page: &AttendancePage, month: CalendarMonth, notify: &dyn Fn()) -> FetchOutcome
where
    G: DashboardGateway + ?Sized,
{
    log::info!("📊 Loading attendance for {}", month.title());
    fetch_into(&page.view, month, notify, |_| gateway.get_attendance()).await
}

pub async fn previous_month<G>(gateway: &G, page: &AttendancePage, notify: &dyn Fn()) -> FetchOutcome
where
    G: DashboardGateway + ?Sized,
{
    load(gateway, page, page.month().previous(), notify).await
}

pub async fn next_month<G>(gateway: &G, page: &AttendancePage, notify: &dyn Fn()) -> FetchOutcome
where
    G: DashboardGateway + ?Sized,
{
    load(gateway, page, page.month().next(), notify).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Phase;
    use crate::error::Operation;
    use crate::gateway::mock::MockGateway;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(d: NaiveDate, present: u32, booked: u32) -> AttendanceRecord {
        AttendanceRecord {
            date: d,
            booked_count: booked,
            present_count: present,
            subject_info: None,
        }
    }

    #[tokio::test]
    async fn test_summary_follows_displayed_month() {
        let gateway = MockGateway::default();
        *gateway.attendance.borrow_mut() = vec![
            record(date(2024, 4, 2), 8, 10),
            record(date(2024, 5, 7), 3, 4),
        ];
        let page = AttendancePage::for_today(date(2024, 4, 15), WeekStart::Sunday);
        assert_eq!(page.summary(), None);

        load(&gateway, &page, page.month(), &|| {}).await;
        assert_eq!(page.summary().map(|s| s.average_percent), Some(80));

        next_month(&gateway, &page, &|| {}).await;
        assert_eq!(page.month(), CalendarMonth::new(2024, 5).unwrap());
        assert_eq!(page.summary().map(|s| (s.present, s.booked)), Some((3, 4)));
    }

    #[tokio::test]
    async fn test_first_load_failure_is_surfaced() {
        let gateway = MockGateway::default();
        gateway.fail(Operation::GetAttendance);
        let page = AttendancePage::for_today(date(2024, 4, 15), WeekStart::Sunday);

        load(&gateway, &page, page.month(), &|| {}).await;
        assert_eq!(page.view.borrow().phase(), Phase::Failed);
        assert_eq!(
            page.view.borrow().error().map(ToString::to_string).as_deref(),
            Some("Failed to fetch attendance data")
        );
    }
}
