use shared::pages::students::{self, DeleteStudentsPage, StudentsPage};
use shared::{Phase, StudentFilter, StudentRecord};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::notifier;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct StudentsState {
    pub filter: StudentFilter,
    pub students: Option<Vec<StudentRecord>>,
    pub phase: Phase,
    pub error: Option<String>,
}

pub struct UseStudentsResult {
    pub state: StudentsState,
    pub toggle_filter: Callback<MouseEvent>,
}

#[hook]
pub fn use_students(api_client: &ApiClient) -> UseStudentsResult {
    let page = use_memo((), |_| StudentsPage::default());
    let update = use_force_update();

    {
        let api_client = api_client.clone();
        let page = page.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let notify = notifier(&update);
                students::load(&api_client, &page, StudentFilter::default(), &notify).await;
            });
            || ()
        });
    }

    let toggle_filter = {
        let api_client = api_client.clone();
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |_: MouseEvent, _| {
            let api_client = api_client.clone();
            let page = page.clone();
            let notify = notifier(&update);
            spawn_local(async move {
                students::toggle_filter(&api_client, &page, &notify).await;
            });
        })
    };

    let state = {
        let view = page.view.borrow();
        StudentsState {
            filter: page.filter(),
            students: view.current_snapshot().cloned(),
            phase: view.phase(),
            error: view.error().map(ToString::to_string),
        }
    };

    UseStudentsResult { state, toggle_filter }
}

#[derive(Clone, PartialEq)]
pub struct DeleteStudentsState {
    pub students: Option<Vec<StudentRecord>>,
    pub phase: Phase,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseDeleteStudentsActions {
    /// Takes the student id; the caller has already confirmed
    pub delete: Callback<String>,
    pub dismiss_error: Callback<()>,
}

pub struct UseDeleteStudentsResult {
    pub state: DeleteStudentsState,
    pub actions: UseDeleteStudentsActions,
}

#[hook]
pub fn use_delete_students(api_client: &ApiClient) -> UseDeleteStudentsResult {
    let page = use_memo((), |_| DeleteStudentsPage::default());
    let update = use_force_update();

    {
        let api_client = api_client.clone();
        let page = page.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let notify = notifier(&update);
                students::load_deletable(&api_client, &page, &notify).await;
            });
            || ()
        });
    }

    let delete = {
        let api_client = api_client.clone();
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |student_id: String, _| {
            let api_client = api_client.clone();
            let page = page.clone();
            let notify = notifier(&update);
            spawn_local(async move {
                students::delete_student(&api_client, &page, &student_id, &notify).await;
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
        DeleteStudentsState {
            students: view.current_snapshot().cloned(),
            phase: view.phase(),
            error: view.error().map(ToString::to_string),
        }
    };

    UseDeleteStudentsResult {
        state,
        actions: UseDeleteStudentsActions { delete, dismiss_error },
    }
}
