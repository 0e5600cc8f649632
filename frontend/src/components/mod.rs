pub mod add_student_form;
pub mod attendance_calendar;
pub mod blacklist_table;
pub mod delete_students;
pub mod home;
pub mod navbar;
pub mod password_page;
pub mod status_banner;
pub mod students_list;
pub mod subject_reference;
pub mod timetable_calendar;
