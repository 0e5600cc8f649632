//! Page flows: one state holder per page plus the async operations that move
//! it through the gateway.
//!
//! Each page keeps its pieces behind `RefCell`s so a UI component can share it
//! through an `Rc` while requests are pending. `notify` is called after every
//! state change that should be rendered.

pub mod attendance;
pub mod blacklist;
pub mod home;
pub mod students;
pub mod timetable;

pub use attendance::AttendancePage;
pub use blacklist::BlacklistPage;
pub use home::HomePage;
pub use students::{DeleteStudentsPage, StudentsPage};
pub use timetable::TimetablePage;
