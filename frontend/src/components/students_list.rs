use chrono::{Local, NaiveDate};
use shared::{StudentFilter, StudentRecord};
use yew::prelude::*;

use super::status_banner::StatusBanner;
use crate::hooks::use_students::use_students;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct StudentsListProps {
    pub api_client: ApiClient,
}

#[function_component(StudentsList)]
pub fn students_list(props: &StudentsListProps) -> Html {
    let students = use_students(&props.api_client);
    let state = &students.state;

    let filter_button = |filter: StudentFilter| {
        let class = if state.filter == filter { "filter-button active" } else { "filter-button" };
        // the toggle flips, so only the inactive button does anything
        let onclick = (state.filter != filter).then(|| students.toggle_filter.clone());
        html! {
            <button class={class} {onclick}>{filter.label()}</button>
        }
    };

    let today = Local::now().date_naive();
    let body = match &state.students {
        Some(list) if list.is_empty() => html! { <p class="empty-state">{"No students found."}</p> },
        Some(list) => html! {
            <ul class="student-list">
                {for list.iter().map(|student| student_row(student, today))}
            </ul>
        },
        None => html! {},
    };

    html! {
        <div class="students-page">
            <h1>{"List of Students"}</h1>
            <div class="filter-toggle">
                {filter_button(StudentFilter::ActiveCourses)}
                {filter_button(StudentFilter::AllStudents)}
            </div>
            <StatusBanner phase={state.phase} error={state.error.clone()} />
            {body}
        </div>
    }
}

fn student_row(student: &StudentRecord, today: NaiveDate) -> Html {
    let avatar = match &student.profile_img {
        Some(src) => html! { <img class="avatar" src={src.clone()} alt={student.name.clone()} /> },
        None => html! { <div class="avatar placeholder"></div> },
    };
    html! {
        <li class="student-row" key={student.id.clone()}>
            {avatar}
            <div class="student-details">
                <strong>
                    {&student.name}
                    if student.is_expired(today) {
                        <span class="badge expired">{"Expired"}</span>
                    }
                </strong>
                <small>{&student.email}</small>
                <small>
                    {format!(
                        "Joined: {} | Ends: {}",
                        student.joining_date,
                        student.ending_date.as_deref().unwrap_or("N/A")
                    )}
                </small>
                <small>{format!("{} | {} | {}", student.location, student.gender, student.last_qualification)}</small>
                <small>{format!("Phone: {}", student.phone)}</small>
            </div>
        </li>
    }
}
