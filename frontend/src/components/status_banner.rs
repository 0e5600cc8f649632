use shared::Phase;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub phase: Phase,
    pub error: Option<String>,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

/// Loading indicator and page error, shared by every data page
#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let loading = match props.phase {
        Phase::Loading => html! { <div class="loading-indicator">{"Loading..."}</div> },
        Phase::Mutating => html! { <div class="loading-indicator">{"Saving..."}</div> },
        _ => html! {},
    };

    let error = match (&props.error, &props.on_dismiss) {
        (Some(message), Some(on_dismiss)) => {
            let on_dismiss = on_dismiss.clone();
            html! {
                <div class="error-message">
                    <span>{message}</span>
                    <button class="dismiss" onclick={Callback::from(move |_: MouseEvent| on_dismiss.emit(()))}>
                        {"✕"}
                    </button>
                </div>
            }
        }
        (Some(message), None) => html! { <div class="error-message">{message}</div> },
        (None, _) => html! {},
    };

    html! {
        <>
            {loading}
            {error}
        </>
    }
}
