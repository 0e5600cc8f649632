use std::cell::RefCell;

use shared::registration::{self, Field, Notice, RegistrationForm, Stage};
use shared::NewStudent;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::notifier;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct RegistrationState {
    pub draft: NewStudent,
    pub stage: Stage,
    pub notice: Option<Notice>,
}

#[derive(Clone, PartialEq)]
pub struct UseRegistrationActions {
    pub set_field: Callback<(Field, String)>,
    pub submit: Callback<()>,
    pub cancel_confirmation: Callback<()>,
    pub confirm: Callback<()>,
}

pub struct UseRegistrationResult {
    pub state: RegistrationState,
    pub actions: UseRegistrationActions,
}

#[hook]
pub fn use_registration(api_client: &ApiClient) -> UseRegistrationResult {
    let form = use_memo((), |_| RefCell::new(RegistrationForm::default()));
    let update = use_force_update();

    let set_field = {
        let form = form.clone();
        let update = update.clone();
        use_callback((), move |(field, value): (Field, String), _| {
            form.borrow_mut().set_field(field, &value);
            update.force_update();
        })
    };

    let submit = {
        let form = form.clone();
        let update = update.clone();
        use_callback((), move |_: (), _| {
            // a rejected form keeps its message on the notice
            let _ = form.borrow_mut().request_submit();
            update.force_update();
        })
    };

    let cancel_confirmation = {
        let form = form.clone();
        let update = update.clone();
        use_callback((), move |_: (), _| {
            form.borrow_mut().cancel_confirmation();
            update.force_update();
        })
    };

    let confirm = {
        let api_client = api_client.clone();
        let form = form.clone();
        let update = update.clone();
        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let form = form.clone();
            let notify = notifier(&update);
            spawn_local(async move {
                registration::submit(&api_client, &form, &notify).await;
            });
        })
    };

    let state = {
        let form = form.borrow();
        RegistrationState {
            draft: form.draft().clone(),
            stage: form.stage(),
            notice: form.notice().cloned(),
        }
    };

    UseRegistrationResult {
        state,
        actions: UseRegistrationActions {
            set_field,
            submit,
            cancel_confirmation,
            confirm,
        },
    }
}
