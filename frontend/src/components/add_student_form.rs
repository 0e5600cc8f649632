use shared::registration::{Field, Stage, GENDERS};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_registration::{use_registration, RegistrationState};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct AddStudentFormProps {
    pub api_client: ApiClient,
}

#[function_component(AddStudentForm)]
pub fn add_student_form(props: &AddStudentFormProps) -> Html {
    let registration = use_registration(&props.api_client);
    let state = &registration.state;
    let actions = &registration.actions;
    let submitting = state.stage == Stage::Submitting;

    let text_input = |field: Field, input_type: &'static str, placeholder: &'static str| {
        let set_field = actions.set_field.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_field.emit((field, input.value()));
        });
        html! {
            <div class="form-group">
                <label>{field.label()}</label>
                <input
                    type={input_type}
                    placeholder={placeholder}
                    value={field.value(&state.draft).to_string()}
                    required=true
                    {oninput}
                />
            </div>
        }
    };

    let on_gender = {
        let set_field = actions.set_field.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_field.emit((Field::Gender, select.value()));
        })
    };

    let onsubmit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let notice = match &state.notice {
        Some(notice) => {
            let class = if notice.is_success() { "form-notice success" } else { "form-notice failure" };
            html! { <div class={class}>{notice.text()}</div> }
        }
        None => html! {},
    };

    html! {
        <div class="add-student-page">
            if state.stage == Stage::Confirming {
                {confirmation_dialog(state, actions.cancel_confirmation.clone(), actions.confirm.clone())}
            }
            <form class="add-student-form" {onsubmit}>
                <h1>{"Student Registration"}</h1>
                {text_input(Field::Name, "text", "Enter your name")}
                {text_input(Field::Phone, "tel", "Enter phone number")}
                {text_input(Field::Email, "email", "Enter your email")}
                <div class="form-group">
                    <label>{Field::Gender.label()}</label>
                    <select onchange={on_gender} required=true>
                        <option value="" selected={state.draft.gender.is_empty()}>{"Choose an option"}</option>
                        {for GENDERS.iter().map(|&gender| html! {
                            <option value={gender} selected={state.draft.gender == gender}>{gender}</option>
                        })}
                    </select>
                </div>
                {text_input(Field::LastQualification, "text", "e.g., Bachelor's Degree")}
                {text_input(Field::Location, "text", "City, State")}
                {text_input(Field::JoiningDate, "date", "")}
                {notice}
                <button type="submit" disabled={submitting}>
                    {if submitting { "Registering..." } else { "Register" }}
                </button>
            </form>
        </div>
    }
}

fn confirmation_dialog(state: &RegistrationState, on_cancel: Callback<()>, on_confirm: Callback<()>) -> Html {
    html! {
        <div class="modal-overlay">
            <div class="modal confirm-email">
                <span class="modal-icon">{"📧"}</span>
                <h3>{"Confirm Email Address"}</h3>
                <p>{"Please verify your email address:"}</p>
                <div class="confirm-email-value">{&state.draft.email}</div>
                <p class="hint">{"This email will be used for all communication regarding your registration."}</p>
                <div class="modal-buttons">
                    <button class="secondary" onclick={Callback::from(move |_: MouseEvent| on_cancel.emit(()))}>
                        {"Edit Email"}
                    </button>
                    <button class="primary" onclick={Callback::from(move |_: MouseEvent| on_confirm.emit(()))}>
                        {"Confirm & Register"}
                    </button>
                </div>
            </div>
        </div>
    }
}
