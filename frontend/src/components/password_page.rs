use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PasswordPageProps {
    pub on_submit: Callback<String>,
    pub error: Option<String>,
}

#[function_component(PasswordPage)]
pub fn password_page(props: &PasswordPageProps) -> Html {
    let password = use_state(String::new);

    let oninput = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let password = password.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*password).clone());
        })
    };

    html! {
        <div class="password-page">
            <form class="password-form" {onsubmit}>
                <h2>{"Admin Access"}</h2>
                <input
                    type="password"
                    placeholder="Enter password"
                    value={(*password).clone()}
                    {oninput}
                />
                if let Some(error) = &props.error {
                    <div class="error-message">{error}</div>
                }
                <button type="submit">{"Enter"}</button>
            </form>
        </div>
    }
}
