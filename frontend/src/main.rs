mod components;
mod hooks;
mod services;

use chrono::Local;
use shared::{CalendarMonth, DashboardConfig, Route};
use wasm_bindgen::JsValue;
use yew::prelude::*;

use components::add_student_form::AddStudentForm;
use components::attendance_calendar::AttendanceCalendar;
use components::blacklist_table::BlacklistTable;
use components::delete_students::DeleteStudents;
use components::home::Home;
use components::navbar::Navbar;
use components::password_page::PasswordPage;
use components::students_list::StudentsList;
use components::timetable_calendar::TimetableCalendar;
use hooks::use_session::use_session;
use services::api::ApiClient;
use services::logging::ConsoleLogger;

/// Defaults, overridden at build time through the environment
fn dashboard_config() -> DashboardConfig {
    DashboardConfig::with_overrides(option_env!("DASHBOARD_API_URL"), option_env!("DASHBOARD_ADMIN_PASSWORD"))
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_path(path: &str) {
    if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            log::warn!("⚠️ Could not update the address bar: {:?}", e);
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| dashboard_config());
    let api_client = {
        let base_url = config.api_base_url.clone();
        use_memo((), move |_| ApiClient::with_base_url(base_url))
    };
    let route = use_state(|| Route::from_path(&current_path()));
    let session = use_session(&config);
    let shown = session.guard(&config, *route);

    // keep the address bar in step with navigation and redirects
    use_effect_with(shown, |shown| {
        if current_path() != shown.path() {
            push_path(shown.path());
        }
        || ()
    });

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            log::info!("🧭 Navigating to {}", next.path());
            route.set(next);
        })
    };

    let today = Local::now().date_naive();
    let api_client = (*api_client).clone();
    let page = match shown {
        Route::Password => html! {
            <PasswordPage
                on_submit={session.actions.login.clone()}
                error={session.state.login_error.clone()}
            />
        },
        Route::Home => html! { <Home api_client={api_client} on_navigate={on_navigate.clone()} /> },
        Route::AddStudent => html! { <AddStudentForm api_client={api_client} /> },
        Route::Timetable => html! {
            <TimetableCalendar
                api_client={api_client}
                initial_month={CalendarMonth::containing(today)}
                week_start={config.week_start}
            />
        },
        Route::Students => html! { <StudentsList api_client={api_client} /> },
        Route::DeleteStudent => html! { <DeleteStudents api_client={api_client} /> },
        Route::Blacklist => html! { <BlacklistTable api_client={api_client} /> },
        Route::Attendance => html! {
            <AttendanceCalendar api_client={api_client} today={today} week_start={config.week_start} />
        },
    };

    html! {
        <>
            if shown != Route::Password {
                <Navbar current={shown} on_navigate={on_navigate} on_logout={session.actions.logout.clone()} />
            }
            <main class="page">{page}</main>
        </>
    }
}

fn main() {
    if let Err(e) = ConsoleLogger::init(log::LevelFilter::Info) {
        gloo::console::warn!(format!("Logger already installed: {}", e));
    }
    log::info!("🚀 Starting classroom dashboard");
    yew::Renderer::<App>::new().render();
}
