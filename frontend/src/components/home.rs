use shared::{Phase, Route, RosterStudent};
use yew::prelude::*;

use super::status_banner::StatusBanner;
use crate::hooks::use_today_roster::use_today_roster;
use crate::services::api::ApiClient;

const TILES: [(Route, &str, &str); 5] = [
    (Route::AddStudent, "👥", "Add new students to the classroom"),
    (Route::Timetable, "📅", "Manage class schedules and timings"),
    (Route::Students, "📋", "View and manage student records"),
    (Route::Blacklist, "⚠️", "Manage blacklisted students"),
    (Route::Attendance, "📊", "Track student attendance"),
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub api_client: ApiClient,
    pub on_navigate: Callback<Route>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let roster = use_today_roster(&props.api_client);
    let busy = roster.state.phase == Phase::Mutating;

    let roster_body = match &roster.state.roster {
        Some(today) if today.students.is_empty() => html! {
            <div class="empty-state">{"No students scheduled for today"}</div>
        },
        Some(today) => html! {
            <>
                <p class="roster-meta">{format!("Day ID: {}", today.day_id)}</p>
                <div class="roster-list">
                    {for today.students.iter().map(|entry| roster_row(entry, busy, &roster.actions.mark_present))}
                </div>
            </>
        },
        None => html! {},
    };

    let tiles = TILES.iter().map(|&(route, icon, description)| {
        let on_navigate = props.on_navigate.clone();
        html! {
            <div class="widget-tile" onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(route))}>
                <span class="widget-icon">{icon}</span>
                <h2>{route.title()}</h2>
                <p>{description}</p>
            </div>
        }
    });

    html! {
        <div class="home-page">
            <h1>{"Welcome to Limca Classroom"}</h1>
            <section class="today-students">
                <h2>{"Today's Students"}</h2>
                <StatusBanner
                    phase={roster.state.phase}
                    error={roster.state.error.clone()}
                    on_dismiss={roster.actions.dismiss_error.clone()}
                />
                {roster_body}
            </section>
            <section class="widget-grid">
                {for tiles}
            </section>
        </div>
    }
}

fn roster_row(entry: &RosterStudent, busy: bool, mark_present: &Callback<String>) -> Html {
    let student = &entry.student;
    let onclick = {
        let mark_present = mark_present.clone();
        let student_id = student.id.clone();
        Callback::from(move |_: MouseEvent| mark_present.emit(student_id.clone()))
    };
    let avatar = match &student.profile_img {
        Some(src) => html! { <img class="avatar" src={src.clone()} alt={student.name.clone()} /> },
        None => html! { <div class="avatar placeholder">{"👤"}</div> },
    };

    html! {
        <div class="roster-row" key={student.id.clone()}>
            {avatar}
            <div class="roster-details">
                <h3>{&student.name}</h3>
                <p>{&student.email}</p>
                <p>{format!("{} | {} | {}", student.location, student.gender, student.last_qualification)}</p>
            </div>
            if entry.present {
                <button class="present-button marked" disabled=true>{"Present ✓"}</button>
            } else {
                <button class="present-button" disabled={busy} {onclick}>{"Mark Present"}</button>
            }
        </div>
    }
}
