use chrono::{Datelike, NaiveDate};
use shared::render::{render_attendance, AttendanceCell};
use shared::{AttendanceBand, MonthSummary, WeekStart};
use yew::prelude::*;

use super::status_banner::StatusBanner;
use crate::hooks::use_attendance::use_attendance;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct AttendanceCalendarProps {
    pub api_client: ApiClient,
    pub today: NaiveDate,
    pub week_start: WeekStart,
}

#[function_component(AttendanceCalendar)]
pub fn attendance_calendar(props: &AttendanceCalendarProps) -> Html {
    let attendance = use_attendance(&props.api_client, props.today, props.week_start);
    let state = &attendance.state;

    let records = state.records.clone().unwrap_or_default();
    let cells = render_attendance(state.month, state.week_start, &records, state.today);
    let weekday_names = state.week_start.weekday_names();
    let legend = AttendanceBand::legend_bands();

    html! {
        <div class="attendance-page">
            <div class="calendar-header">
                <button class="nav-button" onclick={attendance.actions.prev_month.clone()}>{"‹"}</button>
                <h1>{state.month.title()}</h1>
                <button class="nav-button" onclick={attendance.actions.next_month.clone()}>{"›"}</button>
            </div>
            <StatusBanner
                phase={state.phase}
                error={state.error.clone()}
                on_dismiss={attendance.actions.dismiss_error.clone()}
            />
            <div class="attendance-legend">
                {for legend.iter().map(|band| html! {
                    <div class="legend-item">
                        <span class={classes!("swatch", band.css_class())}></span>
                        {band.legend()}
                    </div>
                })}
            </div>
            <div class="calendar">
                <div class="calendar-weekdays">
                    {for weekday_names.iter().map(|name| html! { <div class="weekday">{*name}</div> })}
                </div>
                <div class="calendar-grid">
                    {for cells.iter().map(attendance_cell)}
                </div>
            </div>
            if let Some(summary) = state.summary {
                {summary_panel(summary)}
            }
        </div>
    }
}

fn attendance_cell(cell: &AttendanceCell<'_>) -> Html {
    let Some(date) = cell.date else {
        return html! { <div class="attendance-day blank"></div> };
    };

    html! {
        <div class={classes!("attendance-day", cell.band.css_class(), cell.is_today.then_some("today"))}>
            <div class="day-number">{date.day()}</div>
            if let Some(ratio) = cell.ratio_label() {
                <div class="attendance-ratio">{ratio}</div>
            }
            if let Some(subject) = cell.subject_label() {
                <div class="attendance-subject">{subject.to_string()}</div>
            }
        </div>
    }
}

fn summary_panel(summary: MonthSummary) -> Html {
    let stats = [
        (summary.classes.to_string(), "Classes"),
        (summary.present.to_string(), "Present"),
        (summary.booked.to_string(), "Booked"),
        (format!("{}%", summary.average_percent), "Average"),
    ];
    html! {
        <div class="attendance-summary">
            {for stats.into_iter().map(|(value, label)| html! {
                <div class="summary-stat">
                    <div class="summary-value">{value}</div>
                    <div class="summary-label">{label}</div>
                </div>
            })}
        </div>
    }
}
