use shared::catalog::subjects_for_week;
use shared::models::WEEK_RANGE;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SubjectReferenceProps {
    pub on_drag_start: Callback<(u32, u32)>,
    pub on_drag_end: Callback<()>,
}

/// Catalog sidebar; every subject can be dragged onto a timetable day
#[function_component(SubjectReference)]
pub fn subject_reference(props: &SubjectReferenceProps) -> Html {
    let weeks = WEEK_RANGE.map(|week| {
        let subjects = subjects_for_week(week).map(|subject| {
            let pair = (subject.week, subject.number);
            let ondragstart = {
                let on_drag_start = props.on_drag_start.clone();
                Callback::from(move |e: DragEvent| {
                    // browsers only start a drag with some payload set
                    if let Some(transfer) = e.data_transfer() {
                        if let Err(e) = transfer.set_data("text/plain", &format!("{},{}", pair.0, pair.1)) {
                            log::warn!("⚠️ Could not set drag data: {:?}", e);
                        }
                    }
                    on_drag_start.emit(pair);
                })
            };
            let ondragend = {
                let on_drag_end = props.on_drag_end.clone();
                Callback::from(move |_: DragEvent| on_drag_end.emit(()))
            };
            html! {
                <div class="subject-item" draggable="true" {ondragstart} {ondragend}>
                    <span class="subject-number">{format!("{}.", subject.number)}</span>
                    <span class="subject-name">{subject.name}</span>
                </div>
            }
        });
        html! {
            <div class="subject-week" key={week}>
                <h3>{format!("Week {}", week)}</h3>
                {for subjects}
            </div>
        }
    });

    html! {
        <aside class="subject-reference">
            <div class="subject-reference-header">
                <h2>{"Subject Reference"}</h2>
                <p>{"Drag and drop subjects to assign them"}</p>
            </div>
            {for weeks}
        </aside>
    }
}
