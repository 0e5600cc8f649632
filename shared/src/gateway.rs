//! The remote data gateway.
//!
//! [`DashboardGateway`] is the only way pages reach the backend. The browser
//! implementation lives in the frontend crate; tests use an in-memory one.
//! Every call is independent: no retries, no caching, no shared state.

use async_trait::async_trait;

use crate::error::DashboardError;
use crate::models::{
    AttendanceRecord, BlacklistEntry, DayRecord, NewStudent, StudentFilter, StudentRecord,
    SubjectPair, TodayRoster,
};

#[async_trait(?Send)]
pub trait DashboardGateway {
    async fn list_students(&self, filter: StudentFilter) -> Result<Vec<StudentRecord>, DashboardError>;

    /// Returns the new student's id when the backend reports one
    async fn add_student(&self, student: &NewStudent) -> Result<Option<String>, DashboardError>;

    async fn delete_student(&self, student_id: &str) -> Result<(), DashboardError>;

    async fn get_timetable(&self) -> Result<Vec<DayRecord>, DashboardError>;

    /// `None` clears the day's subject
    async fn set_day_subject(&self, day_id: &str, subject: Option<SubjectPair>) -> Result<(), DashboardError>;

    async fn get_attendance(&self) -> Result<Vec<AttendanceRecord>, DashboardError>;

    async fn get_blacklist(&self) -> Result<Vec<BlacklistEntry>, DashboardError>;

    async fn mark_attendance(&self, student_id: &str, day_id: &str) -> Result<(), DashboardError>;

    async fn get_today_roster(&self) -> Result<TodayRoster, DashboardError>;
}

/// Request paths, relative to the API base URL
pub mod paths {
    use crate::models::StudentFilter;

    pub fn students(filter: StudentFilter) -> String {
        format!("/students?expired={}", filter.expired_flag())
    }

    pub const ADD_STUDENT: &str = "/students";

    pub fn student(student_id: &str) -> String {
        format!("/students/{}", urlencoding::encode(student_id))
    }

    pub const TIMETABLE: &str = "/timetable";

    pub fn timetable_day(day_id: &str) -> String {
        format!("/timetable/{}", urlencoding::encode(day_id))
    }

    pub const ATTENDANCE: &str = "/attendance";
    pub const BLACKLIST: &str = "/blacklist";
    pub const MARK_ATTENDANCE: &str = "/attendance/mark";
    pub const TODAY_ROSTER: &str = "/students/today";

    /// Join a base URL and a path without doubling or dropping the slash
    pub fn join(base_url: &str, path: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_student_paths() {
            assert_eq!(students(StudentFilter::ActiveCourses), "/students?expired=true");
            assert_eq!(students(StudentFilter::AllStudents), "/students?expired=false");
            assert_eq!(student("65f1a2"), "/students/65f1a2");
        }

        #[test]
        fn test_ids_are_encoded() {
            assert_eq!(timetable_day("a/b c"), "/timetable/a%2Fb%20c");
            assert_eq!(student("x?y=1&z"), "/students/x%3Fy%3D1%26z");
        }

        #[test]
        fn test_join() {
            assert_eq!(join("http://localhost:5000/", "/timetable"), "http://localhost:5000/timetable");
            assert_eq!(join("http://localhost:5000", "timetable"), "http://localhost:5000/timetable");
        }
    }
}

/// In-memory gateway recording every call, for page flow tests
#[cfg(test)]
pub(crate) mod mock {
    use std::cell::RefCell;

    use super::*;
    use crate::error::Operation;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        ListStudents(StudentFilter),
        AddStudent(NewStudent),
        DeleteStudent(String),
        GetTimetable,
        SetDaySubject(String, Option<SubjectPair>),
        GetAttendance,
        GetBlacklist,
        MarkAttendance(String, String),
        GetTodayRoster,
    }

    #[derive(Default)]
    pub struct MockGateway {
        pub calls: RefCell<Vec<Call>>,
        pub students: RefCell<Vec<StudentRecord>>,
        pub timetable: RefCell<Vec<DayRecord>>,
        pub attendance: RefCell<Vec<AttendanceRecord>>,
        pub blacklist: RefCell<Vec<BlacklistEntry>>,
        pub roster: RefCell<Option<TodayRoster>>,
        /// Operations that answer with a 500
        pub failing: RefCell<Vec<Operation>>,
    }

    impl MockGateway {
        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        pub fn fail(&self, operation: Operation) {
            self.failing.borrow_mut().push(operation);
        }

        fn record(&self, call: Call, operation: Operation) -> Result<(), DashboardError> {
            self.calls.borrow_mut().push(call);
            if self.failing.borrow().contains(&operation) {
                return Err(DashboardError::remote(operation, 500, None));
            }
            Ok(())
        }
    }

    #[async_trait(?Send)]
    impl DashboardGateway for MockGateway {
        async fn list_students(&self, filter: StudentFilter) -> Result<Vec<StudentRecord>, DashboardError> {
            self.record(Call::ListStudents(filter), Operation::ListStudents)?;
            Ok(self.students.borrow().clone())
        }

        async fn add_student(&self, student: &NewStudent) -> Result<Option<String>, DashboardError> {
            self.record(Call::AddStudent(student.clone()), Operation::AddStudent)?;
            Ok(Some(format!("s{}", self.students.borrow().len() + 1)))
        }

        async fn delete_student(&self, student_id: &str) -> Result<(), DashboardError> {
            self.record(Call::DeleteStudent(student_id.to_string()), Operation::DeleteStudent)?;
            self.students.borrow_mut().retain(|s| s.id != student_id);
            Ok(())
        }

        async fn get_timetable(&self) -> Result<Vec<DayRecord>, DashboardError> {
            self.record(Call::GetTimetable, Operation::GetTimetable)?;
            Ok(self.timetable.borrow().clone())
        }

        async fn set_day_subject(&self, day_id: &str, subject: Option<SubjectPair>) -> Result<(), DashboardError> {
            self.record(Call::SetDaySubject(day_id.to_string(), subject), Operation::SetDaySubject)?;
            for day in self.timetable.borrow_mut().iter_mut().filter(|d| d.id == day_id) {
                day.subject = subject;
            }
            Ok(())
        }

        async fn get_attendance(&self) -> Result<Vec<AttendanceRecord>, DashboardError> {
            self.record(Call::GetAttendance, Operation::GetAttendance)?;
            Ok(self.attendance.borrow().clone())
        }

        async fn get_blacklist(&self) -> Result<Vec<BlacklistEntry>, DashboardError> {
            self.record(Call::GetBlacklist, Operation::GetBlacklist)?;
            Ok(self.blacklist.borrow().clone())
        }

        async fn mark_attendance(&self, student_id: &str, day_id: &str) -> Result<(), DashboardError> {
            self.record(
                Call::MarkAttendance(student_id.to_string(), day_id.to_string()),
                Operation::MarkAttendance,
            )?;
            if let Some(roster) = self.roster.borrow_mut().as_mut() {
                for entry in roster.students.iter_mut().filter(|s| s.student.id == student_id) {
                    entry.present = true;
                }
            }
            Ok(())
        }

        async fn get_today_roster(&self) -> Result<TodayRoster, DashboardError> {
            self.record(Call::GetTodayRoster, Operation::GetTodayRoster)?;
            self.roster
                .borrow()
                .clone()
                .ok_or_else(|| DashboardError::remote(Operation::GetTodayRoster, 404, Some("No lesson today".into())))
        }
    }
}
