use shared::pages::home::{self, HomePage};
use shared::{Phase, TodayRoster};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::notifier;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct TodayRosterState {
    pub roster: Option<TodayRoster>,
    pub phase: Phase,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseTodayRosterActions {
    /// Takes the student id
    pub mark_present: Callback<String>,
    pub dismiss_error: Callback<()>,
}

pub struct UseTodayRosterResult {
    pub state: TodayRosterState,
    pub actions: UseTodayRosterActions,
}

#[hook]
pub fn use_today_roster(api_client: &ApiClient) -> UseTodayRosterResult {
    let page = use_memo((), |_| HomePage::default());
    let update = use_force_update();

    {
        let api_client = api_client.clone();
        let page = page.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let notify = notifier(&update);
                home::load(&api_client, &page, &notify).await;
            });
            || ()
        });
    }

    let mark_present = {
        let api_client = api_client.clone();
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |student_id: String, _| {
            let api_client = api_client.clone();
            let page = page.clone();
            let notify = notifier(&update);
            spawn_local(async move {
                home::mark_present(&api_client, &page, &student_id, &notify).await;
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
        TodayRosterState {
            roster: view.current_snapshot().cloned(),
            phase: view.phase(),
            error: view.error().map(ToString::to_string),
        }
    };

    UseTodayRosterResult {
        state,
        actions: UseTodayRosterActions {
            mark_present,
            dismiss_error,
        },
    }
}
