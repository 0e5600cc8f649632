pub mod use_attendance;
pub mod use_blacklist;
pub mod use_registration;
pub mod use_session;
pub mod use_students;
pub mod use_timetable;
pub mod use_today_roster;

use yew::functional::UseForceUpdateHandle;

/// Re-render trigger handed to the page flows in `shared::pages`
pub(crate) fn notifier(update: &UseForceUpdateHandle) -> impl Fn() + 'static {
    let update = update.clone();
    move || update.force_update()
}
