use chrono::NaiveDate;
use shared::pages::attendance::{self, AttendancePage};
use shared::{AttendanceRecord, CalendarMonth, MonthSummary, Phase, WeekStart};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::notifier;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct AttendanceState {
    pub month: CalendarMonth,
    pub week_start: WeekStart,
    pub today: NaiveDate,
    pub records: Option<Vec<AttendanceRecord>>,
    pub summary: Option<MonthSummary>,
    pub phase: Phase,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseAttendanceActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub dismiss_error: Callback<()>,
}

pub struct UseAttendanceResult {
    pub state: AttendanceState,
    pub actions: UseAttendanceActions,
}

#[hook]
pub fn use_attendance(api_client: &ApiClient, today: NaiveDate, week_start: WeekStart) -> UseAttendanceResult {
    let page = use_memo((), move |_| AttendancePage::for_today(today, week_start));
    let update = use_force_update();

    {
        let api_client = api_client.clone();
        let page = page.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let notify = notifier(&update);
                attendance::load(&api_client, &page, page.month(), &notify).await;
            });
            || ()
        });
    }

    let prev_month = {
        let api_client = api_client.clone();
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |_: MouseEvent, _| {
            let api_client = api_client.clone();
            let page = page.clone();
            let notify = notifier(&update);
            spawn_local(async move {
                attendance::previous_month(&api_client, &page, &notify).await;
            });
        })
    };

    let next_month = {
        let api_client = api_client.clone();
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |_: MouseEvent, _| {
            let api_client = api_client.clone();
            let page = page.clone();
            let notify = notifier(&update);
            spawn_local(async move {
                attendance::next_month(&api_client, &page, &notify).await;
            });
        })
    };

    let dismiss_error = {
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |_: (), _| {
            page.view.borrow_mut().dismiss_error();
            update.force_update();
        })
    };

    let state = {
        let view = page.view.borrow();
        AttendanceState {
            month: page.month(),
            week_start: page.week_start(),
            today,
            records: view.current_snapshot().cloned(),
            summary: page.summary(),
            phase: view.phase(),
            error: view.error().map(ToString::to_string),
        }
    };

    UseAttendanceResult {
        state,
        actions: UseAttendanceActions {
            prev_month,
            next_month,
            dismiss_error,
        },
    }
}
