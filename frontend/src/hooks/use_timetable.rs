use chrono::NaiveDate;
use shared::pages::timetable::{self, TimetablePage};
use shared::{CalendarMonth, DayRecord, Phase, TimetableInteraction, WeekStart};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::notifier;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct TimetableState {
    pub month: CalendarMonth,
    pub week_start: WeekStart,
    pub records: Option<Vec<DayRecord>>,
    pub phase: Phase,
    pub error: Option<String>,
    pub interaction: TimetableInteraction,
}

#[derive(Clone, PartialEq)]
pub struct UseTimetableActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub start_edit: Callback<DayRecord>,
    pub set_week_text: Callback<String>,
    pub set_number_text: Callback<String>,
    pub save_edit: Callback<()>,
    pub cancel_edit: Callback<()>,
    pub clear_day: Callback<String>,
    pub drag_start: Callback<(u32, u32)>,
    pub drag_end: Callback<()>,
    pub drop_on: Callback<NaiveDate>,
    pub dismiss_error: Callback<()>,
}

pub struct UseTimetableResult {
    pub state: TimetableState,
    pub actions: UseTimetableActions,
}

#[hook]
pub fn use_timetable(api_client: &ApiClient, initial_month: CalendarMonth, week_start: WeekStart) -> UseTimetableResult {
    let page = use_memo((), move |_| TimetablePage::new(initial_month, week_start));
    let update = use_force_update();

    // Load the opening month once
    {
        let api_client = api_client.clone();
        let page = page.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let notify = notifier(&update);
                timetable::load(&api_client, &page, page.month(), &notify).await;
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
                timetable::previous_month(&api_client, &page, &notify).await;
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
                timetable::next_month(&api_client, &page, &notify).await;
            });
        })
    };

    let start_edit = {
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |record: DayRecord, _| {
            page.interaction.borrow_mut().start_edit(&record);
            update.force_update();
        })
    };

    let set_week_text = {
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |text: String, _| {
            page.interaction.borrow_mut().set_week_text(text);
            update.force_update();
        })
    };

    let set_number_text = {
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |text: String, _| {
            page.interaction.borrow_mut().set_number_text(text);
            update.force_update();
        })
    };

    let save_edit = {
        let api_client = api_client.clone();
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let page = page.clone();
            let notify = notifier(&update);
            spawn_local(async move {
                timetable::save_edit(&api_client, &page, &notify).await;
            });
        })
    };

    let cancel_edit = {
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |_: (), _| {
            page.interaction.borrow_mut().cancel_edit();
            update.force_update();
        })
    };

    let clear_day = {
        let api_client = api_client.clone();
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |day_id: String, _| {
            let api_client = api_client.clone();
            let page = page.clone();
            let notify = notifier(&update);
            spawn_local(async move {
                timetable::clear_day(&api_client, &page, &day_id, &notify).await;
            });
        })
    };

    let drag_start = {
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |(week, number): (u32, u32), _| {
            page.interaction.borrow_mut().drag.drag_start(week, number);
            update.force_update();
        })
    };

    let drag_end = {
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |_: (), _| {
            page.interaction.borrow_mut().drag.drag_end();
            update.force_update();
        })
    };

    let drop_on = {
        let api_client = api_client.clone();
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |date: NaiveDate, _| {
            let api_client = api_client.clone();
            let page = page.clone();
            let notify = notifier(&update);
            spawn_local(async move {
                timetable::drop_subject(&api_client, &page, date, &notify).await;
            });
        })
    };

    let dismiss_error = {
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |_: (), _| {
            page.view.borrow_mut().dismiss_error();
            page.interaction.borrow_mut().dismiss_validation_error();
            update.force_update();
        })
    };

    let state = {
        let view = page.view.borrow();
        TimetableState {
            month: page.month(),
            week_start: page.week_start(),
            records: view.current_snapshot().cloned(),
            phase: view.phase(),
            error: view.error().map(ToString::to_string),
            interaction: page.interaction.borrow().clone(),
        }
    };

    let actions = UseTimetableActions {
        prev_month,
        next_month,
        start_edit,
        set_week_text,
        set_number_text,
        save_edit,
        cancel_edit,
        clear_day,
        drag_start,
        drag_end,
        drop_on,
        dismiss_error,
    };

    UseTimetableResult { state, actions }
}
