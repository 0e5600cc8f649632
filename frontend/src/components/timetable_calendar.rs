use chrono::Datelike;
use shared::render::{render_timetable, TimetableCell};
use shared::{CalendarMonth, DayRecord, Phase, WeekStart};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::status_banner::StatusBanner;
use super::subject_reference::SubjectReference;
use crate::hooks::use_timetable::{use_timetable, TimetableState, UseTimetableActions};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct TimetableCalendarProps {
    pub api_client: ApiClient,
    pub initial_month: CalendarMonth,
    pub week_start: WeekStart,
}

#[function_component(TimetableCalendar)]
pub fn timetable_calendar(props: &TimetableCalendarProps) -> Html {
    let timetable = use_timetable(&props.api_client, props.initial_month, props.week_start);
    let state = &timetable.state;
    let actions = &timetable.actions;

    let records = state.records.clone().unwrap_or_default();
    let cells = render_timetable(state.month, state.week_start, &records);
    let weekday_labels = state.week_start.weekday_labels();

    let validation = match state.interaction.validation_error() {
        Some(err) => html! { <div class="validation-error">{err.to_string()}</div> },
        None => html! {},
    };

    html! {
        <div class="timetable-page">
            <div class="calendar-header">
                <button class="nav-button" onclick={actions.prev_month.clone()}>{"‹ Previous"}</button>
                <h1>{state.month.title()}</h1>
                <button class="nav-button" onclick={actions.next_month.clone()}>{"Next ›"}</button>
            </div>
            <StatusBanner
                phase={state.phase}
                error={state.error.clone()}
                on_dismiss={actions.dismiss_error.clone()}
            />
            {validation}
            <div class="timetable-layout">
                <SubjectReference
                    on_drag_start={actions.drag_start.clone()}
                    on_drag_end={actions.drag_end.clone()}
                />
                <div class="calendar">
                    <div class="calendar-weekdays">
                        {for weekday_labels.iter().map(|label| html! {
                            <div class="weekday">{*label}</div>
                        })}
                    </div>
                    <div class="calendar-grid">
                        {for cells.iter().map(|cell| day_cell(cell, state, actions))}
                    </div>
                </div>
            </div>
            <div class="calendar-legend">
                <div class="legend-item"><span class="swatch holiday"></span>{"Holiday (Monday)"}</div>
                <div class="legend-item"><span class="swatch outside"></span>{"Previous/Next Month"}</div>
            </div>
        </div>
    }
}

fn day_cell(cell: &TimetableCell<'_>, state: &TimetableState, actions: &UseTimetableActions) -> Html {
    let date = cell.date;
    let accepts_drop = state.interaction.drag.drag_over(cell);

    let ondragover = Callback::from(move |e: DragEvent| {
        if accepts_drop {
            // allows the drop event to fire
            e.prevent_default();
        }
    });
    let ondrop = {
        let drop_on = actions.drop_on.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drop_on.emit(date);
        })
    };

    let slot = match cell.record {
        Some(record) if cell.shows_subject_slot() => {
            if state.interaction.is_editing(&record.id) {
                edit_form(state, actions)
            } else {
                subject_slot(cell, record.clone(), state.phase == Phase::Mutating, actions)
            }
        }
        _ => html! {},
    };

    html! {
        <div class={cell.css_class()} {ondragover} {ondrop}>
            <div class="day-number">
                {date.day()}
                if cell.holiday && cell.in_month {
                    <span class="holiday-label">{"Holiday"}</span>
                }
            </div>
            {slot}
        </div>
    }
}

fn subject_slot(cell: &TimetableCell<'_>, record: DayRecord, busy: bool, actions: &UseTimetableActions) -> Html {
    let day_id = record.id.clone();
    let onclick = {
        let start_edit = actions.start_edit.clone();
        Callback::from(move |_: MouseEvent| start_edit.emit(record.clone()))
    };

    match cell.subject_name() {
        Some(name) => {
            let onclear = {
                let clear_day = actions.clear_day.clone();
                Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    clear_day.emit(day_id.clone());
                })
            };
            html! {
                <div class="subject-assigned" {onclick}>
                    <span class="subject-name">{name}</span>
                    <button class="clear-subject" disabled={busy} onclick={onclear}>{"✕"}</button>
                </div>
            }
        }
        None => html! {
            <div class="subject-empty" {onclick}>{"Drop subject here"}</div>
        },
    }
}

fn edit_form(state: &TimetableState, actions: &UseTimetableActions) -> Html {
    let Some(edit) = state.interaction.editing() else {
        return html! {};
    };
    let busy = state.phase == Phase::Mutating;

    let on_week = {
        let set_week_text = actions.set_week_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_week_text.emit(input.value());
        })
    };
    let on_number = {
        let set_number_text = actions.set_number_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_number_text.emit(input.value());
        })
    };
    let on_save = {
        let save_edit = actions.save_edit.clone();
        Callback::from(move |_: MouseEvent| save_edit.emit(()))
    };
    let on_cancel = {
        let cancel_edit = actions.cancel_edit.clone();
        Callback::from(move |_: MouseEvent| cancel_edit.emit(()))
    };

    html! {
        <div class="subject-edit">
            <div class="edit-label">{"Edit Subject:"}</div>
            <input type="number" min="1" max="4" placeholder="Week (1-4)" value={edit.week.clone()} oninput={on_week} />
            <input type="number" min="1" max="6" placeholder="Subject (1-6)" value={edit.number.clone()} oninput={on_number} />
            <div class="edit-buttons">
                <button class="save" disabled={busy} onclick={on_save}>
                    {if busy { "..." } else { "Save" }}
                </button>
                <button class="cancel" onclick={on_cancel}>{"Cancel"}</button>
            </div>
        </div>
    }
}
