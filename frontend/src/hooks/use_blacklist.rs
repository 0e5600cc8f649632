use shared::pages::blacklist::{self, BlacklistPage};
use shared::{BlacklistEntry, Phase};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::notifier;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct BlacklistState {
    pub entries: Option<Vec<BlacklistEntry>>,
    pub phase: Phase,
    pub error: Option<String>,
}

#[hook]
pub fn use_blacklist(api_client: &ApiClient) -> BlacklistState {
    let page = use_memo((), |_| BlacklistPage::default());
    let update = use_force_update();

    {
        let api_client = api_client.clone();
        let page = page.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let notify = notifier(&update);
                blacklist::load(&api_client, &page, &notify).await;
            });
            || ()
        });
    }

    let view = page.view.borrow();
    BlacklistState {
        entries: view.current_snapshot().cloned(),
        phase: view.phase(),
        error: view.error().map(ToString::to_string),
    }
}
