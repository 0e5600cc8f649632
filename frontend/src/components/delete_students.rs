use shared::{Phase, StudentRecord};
use yew::prelude::*;

use super::status_banner::StatusBanner;
use crate::hooks::use_students::use_delete_students;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DeleteStudentsProps {
    pub api_client: ApiClient,
}

#[function_component(DeleteStudents)]
pub fn delete_students(props: &DeleteStudentsProps) -> Html {
    let deletion = use_delete_students(&props.api_client);
    let state = &deletion.state;
    let busy = state.phase == Phase::Mutating;

    let on_delete = {
        let delete = deletion.actions.delete.clone();
        Callback::from(move |student_id: String| {
            if gloo::dialogs::confirm("Are you sure you want to delete this student?") {
                delete.emit(student_id);
            }
        })
    };

    let body = match &state.students {
        Some(list) if list.is_empty() => html! { <p class="empty-state">{"No students found."}</p> },
        Some(list) => html! {
            <table class="students-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Phone"}</th>
                        <th>{"Location"}</th>
                        <th>{"Joining Date"}</th>
                        <th>{"Ending Date"}</th>
                        <th>{"Gender"}</th>
                        <th>{"Qualification"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for list.iter().map(|student| student_row(student, busy, &on_delete))}
                </tbody>
            </table>
        },
        None => html! {},
    };

    html! {
        <div class="delete-students-page">
            <h1>{"Delete Student"}</h1>
            <StatusBanner
                phase={state.phase}
                error={state.error.clone()}
                on_dismiss={deletion.actions.dismiss_error.clone()}
            />
            {body}
        </div>
    }
}

fn student_row(student: &StudentRecord, busy: bool, on_delete: &Callback<String>) -> Html {
    let onclick = {
        let on_delete = on_delete.clone();
        let student_id = student.id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(student_id.clone()))
    };
    html! {
        <tr key={student.id.clone()}>
            <td>{&student.name}</td>
            <td>{&student.email}</td>
            <td>{&student.phone}</td>
            <td>{&student.location}</td>
            <td>{&student.joining_date}</td>
            <td>{student.ending_date.clone().unwrap_or_default()}</td>
            <td>{&student.gender}</td>
            <td>{&student.last_qualification}</td>
            <td>
                <button class="delete-button" disabled={busy} {onclick}>{"Delete"}</button>
            </td>
        </tr>
    }
}
