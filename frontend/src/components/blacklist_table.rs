use shared::BlacklistEntry;
use yew::prelude::*;

use super::status_banner::StatusBanner;
use crate::hooks::use_blacklist::use_blacklist;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct BlacklistTableProps {
    pub api_client: ApiClient,
}

#[function_component(BlacklistTable)]
pub fn blacklist_table(props: &BlacklistTableProps) -> Html {
    let state = use_blacklist(&props.api_client);

    let body = match &state.entries {
        Some(entries) if entries.is_empty() => html! {
            <p class="empty-state">{"No absent students found today."}</p>
        },
        Some(entries) => html! {
            <table class="blacklist-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Phone"}</th>
                        <th>{"Missed Count"}</th>
                        <th>{"Cancelled Count"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for entries.iter().map(entry_row)}
                </tbody>
            </table>
        },
        None => html! {},
    };

    html! {
        <div class="blacklist-page">
            <h1>{"Blacklist"}</h1>
            <StatusBanner phase={state.phase} error={state.error.clone()} />
            {body}
        </div>
    }
}

fn entry_row(entry: &BlacklistEntry) -> Html {
    html! {
        <tr key={entry.id.clone()}>
            <td>{entry.display_name()}</td>
            <td>{entry.display_email()}</td>
            <td>{entry.display_phone()}</td>
            <td>{entry.missed_count}</td>
            <td>{entry.cancelled_count}</td>
        </tr>
    }
}
