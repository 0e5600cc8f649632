use std::cell::RefCell;

use chrono::NaiveDate;

use crate::calendar::{CalendarMonth, WeekStart};
use crate::controller::{fetch_into, run_mutation, FetchOutcome, MutationRun, ViewController};
use crate::edit::{SubjectCommit, TimetableInteraction};
use crate::gateway::DashboardGateway;
use crate::models::DayRecord;
use crate::render::render_timetable;

pub type TimetableController = ViewController<CalendarMonth, Vec<DayRecord>>;

pub struct TimetablePage {
    pub view: RefCell<TimetableController>,
    pub interaction: RefCell<TimetableInteraction>,
    initial_month: CalendarMonth,
    week_start: WeekStart,
}

impl TimetablePage {
    pub fn new(initial_month: CalendarMonth, week_start: WeekStart) -> Self {
        Self {
            view: RefCell::new(ViewController::new()),
            interaction: RefCell::new(TimetableInteraction::default()),
            initial_month,
            week_start,
        }
    }

    /// Month on screen
    pub fn month(&self) -> CalendarMonth {
        self.view.borrow().query().copied().unwrap_or(self.initial_month)
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Records for the month on screen, once loaded
    pub fn records(&self) -> Option<Vec<DayRecord>> {
        self.view.borrow().current_snapshot().cloned()
    }

    fn commit_for_drop(&self, date: NaiveDate) -> Option<SubjectCommit> {
        let view = self.view.borrow();
        let records = view.current_snapshot()?;
        let cells = render_timetable(self.month(), self.week_start, records);
        let cell = cells.iter().find(|c| c.date == date)?;
        let dropped = self.interaction.borrow_mut().drag.drop_on(cell);
        dropped
    }
}

pub async fn load<G>(gateway: &G, page: &TimetablePage, month: CalendarMonth, notify: &dyn Fn()) -> FetchOutcome
where
    G: DashboardGateway + ?Sized,
{
    log::info!("📅 Loading timetable for {}", month.title());
    fetch_into(&page.view, month, notify, |_| gateway.get_timetable()).await
}

pub async fn previous_month<G>(gateway: &G, page: &TimetablePage, notify: &dyn Fn()) -> FetchOutcome
where
    G: DashboardGateway + ?Sized,
{
    load(gateway, page, page.month().previous(), notify).await
}

pub async fn next_month<G>(gateway: &G, page: &TimetablePage, notify: &dyn Fn()) -> FetchOutcome
where
    G: DashboardGateway + ?Sized,
{
    load(gateway, page, page.month().next(), notify).await
}

/// Send `change`, then re-fetch. Closes the matching edit session on success.
pub async fn commit<G>(gateway: &G, page: &TimetablePage, change: SubjectCommit, notify: &dyn Fn()) -> MutationRun
where
    G: DashboardGateway + ?Sized,
{
    let run = run_mutation(
        &page.view,
        notify,
        gateway.set_day_subject(&change.day_id, change.subject),
        |_| gateway.get_timetable(),
    )
    .await;

    if let MutationRun::Completed(_) = run {
        log::info!("✅ Updated subject for day {}", change.day_id);
        page.interaction.borrow_mut().commit_succeeded(&change.day_id);
        notify();
    }
    run
}

/// Save the open edit session. A validation error stays on the page and no
/// request is made.
pub async fn save_edit<G>(gateway: &G, page: &TimetablePage, notify: &dyn Fn()) -> Option<MutationRun>
where
    G: DashboardGateway + ?Sized,
{
    let pending = page.interaction.borrow_mut().save_edit();
    match pending {
        Some(pending) => Some(commit(gateway, page, pending, notify).await),
        None => {
            notify();
            None
        }
    }
}

/// Clear the subject of one day
pub async fn clear_day<G>(gateway: &G, page: &TimetablePage, day_id: &str, notify: &dyn Fn()) -> MutationRun
where
    G: DashboardGateway + ?Sized,
{
    let pending = SubjectCommit {
        day_id: day_id.to_string(),
        subject: None,
    };
    commit(gateway, page, pending, notify).await
}

/// Drop the dragged subject onto `date`. Rejected drops do nothing.
pub async fn drop_subject<G>(gateway: &G, page: &TimetablePage, date: NaiveDate, notify: &dyn Fn()) -> Option<MutationRun>
where
    G: DashboardGateway + ?Sized,
{
    let pending = page.commit_for_drop(date)?;
    notify();
    Some(commit(gateway, page, pending, notify).await)
}
