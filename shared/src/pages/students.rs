//! Student listing and deletion.

use std::cell::RefCell;

use crate::controller::{fetch_into, run_mutation, FetchOutcome, MutationRun, ViewController};
use crate::gateway::DashboardGateway;
use crate::models::{StudentFilter, StudentRecord};

pub type StudentsController = ViewController<StudentFilter, Vec<StudentRecord>>;

/// Read-only list with the expired filter toggle
#[derive(Default)]
pub struct StudentsPage {
    pub view: RefCell<StudentsController>,
}

impl StudentsPage {
    pub fn filter(&self) -> StudentFilter {
        self.view.borrow().query().copied().unwrap_or_default()
    }

    pub fn students(&self) -> Option<Vec<StudentRecord>> {
        self.view.borrow().current_snapshot().cloned()
    }
}

pub async fn load<G>(gateway: &G, page: &StudentsPage, filter: StudentFilter, notify: &dyn Fn()) -> FetchOutcome
where
    G: DashboardGateway + ?Sized,
{
    log::info!("👥 Loading students: {}", filter.label());
    fetch_into(&page.view, filter, notify, |filter| gateway.list_students(filter)).await
}

/// Flip between active courses and all students
pub async fn toggle_filter<G>(gateway: &G, page: &StudentsPage, notify: &dyn Fn()) -> FetchOutcome
where
    G: DashboardGateway + ?Sized,
{
    let next = match page.filter() {
        StudentFilter::ActiveCourses => StudentFilter::AllStudents,
        StudentFilter::AllStudents => StudentFilter::ActiveCourses,
    };
    load(gateway, page, next, notify).await
}

/// Every student, each with a delete action
#[derive(Default)]
pub struct DeleteStudentsPage {
    pub view: RefCell<StudentsController>,
}

impl DeleteStudentsPage {
    pub const FILTER: StudentFilter = StudentFilter::AllStudents;

    pub fn students(&self) -> Option<Vec<StudentRecord>> {
        self.view.borrow().current_snapshot().cloned()
    }
}

pub async fn load_deletable<G>(gateway: &G, page: &DeleteStudentsPage, notify: &dyn Fn()) -> FetchOutcome
where
    G: DashboardGateway + ?Sized,
{
    fetch_into(&page.view, DeleteStudentsPage::FILTER, notify, |filter| gateway.list_students(filter)).await
}

/// Delete one student and refresh the list. Confirmation is the caller's job.
pub async fn delete_student<G>(gateway: &G, page: &DeleteStudentsPage, student_id: &str, notify: &dyn Fn()) -> MutationRun
where
    G: DashboardGateway + ?Sized,
{
    let run = run_mutation(
        &page.view,
        notify,
        gateway.delete_student(student_id),
        |filter| gateway.list_students(filter),
    )
    .await;
    if let MutationRun::Completed(_) = run {
        log::info!("🗑️ Deleted student {}", student_id);
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Phase;
    use crate::error::Operation;
    use crate::gateway::mock::{Call, MockGateway};
    use serde_json::json;
    use tokio::sync::oneshot;

    fn student(id: &str, name: &str) -> StudentRecord {
        serde_json::from_value(json!({ "_id": id, "name": name })).unwrap()
    }

    fn gateway() -> MockGateway {
        let gateway = MockGateway::default();
        *gateway.students.borrow_mut() = vec![student("s1", "Asha"), student("s2", "Ravi")];
        gateway
    }

    #[tokio::test]
    async fn test_filter_toggle_requests_both_flags() {
        let gateway = gateway();
        let page = StudentsPage::default();

        load(&gateway, &page, StudentFilter::default(), &|| {}).await;
        toggle_filter(&gateway, &page, &|| {}).await;
        assert_eq!(page.filter(), StudentFilter::AllStudents);
        assert_eq!(
            *gateway.calls.borrow(),
            vec![
                Call::ListStudents(StudentFilter::ActiveCourses),
                Call::ListStudents(StudentFilter::AllStudents),
            ]
        );
    }

    #[tokio::test]
    async fn test_late_response_for_old_filter_is_dropped() {
        let page = StudentsPage::default();
        let (active_tx, active_rx) = oneshot::channel::<Vec<StudentRecord>>();

        let (active, all, _) = tokio::join!(
            fetch_into(&page.view, StudentFilter::ActiveCourses, &|| {}, |_| async move {
                Ok(active_rx.await.unwrap_or_default())
            }),
            fetch_into(&page.view, StudentFilter::AllStudents, &|| {}, |_| async {
                Ok(vec![student("s1", "Asha"), student("s2", "Ravi")])
            }),
            async {
                tokio::task::yield_now().await;
                active_tx.send(vec![student("s9", "Old")]).unwrap();
            }
        );

        assert_eq!(all, FetchOutcome::Applied);
        assert_eq!(active, FetchOutcome::Discarded);
        assert_eq!(page.filter(), StudentFilter::AllStudents);
        assert_eq!(page.students().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_refetches() {
        let gateway = gateway();
        let page = DeleteStudentsPage::default();
        load_deletable(&gateway, &page, &|| {}).await;

        let run = delete_student(&gateway, &page, "s1", &|| {}).await;
        assert_eq!(run, MutationRun::Completed(FetchOutcome::Applied));
        let names: Vec<String> = page.students().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Ravi".to_string()]);
        assert_eq!(gateway.calls.borrow()[1], Call::DeleteStudent("s1".into()));
        assert_eq!(gateway.calls.borrow()[2], Call::ListStudents(StudentFilter::AllStudents));
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_list() {
        let gateway = gateway();
        let page = DeleteStudentsPage::default();
        load_deletable(&gateway, &page, &|| {}).await;
        gateway.fail(Operation::DeleteStudent);

        assert_eq!(delete_student(&gateway, &page, "s1", &|| {}).await, MutationRun::Failed);
        assert_eq!(page.students().unwrap().len(), 2);
        assert_eq!(page.view.borrow().phase(), Phase::Ready);
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_second_delete_while_first_in_flight_is_refused() {
        let gateway = gateway();
        let page = DeleteStudentsPage::default();
        load_deletable(&gateway, &page, &|| {}).await;

        let (release_tx, release_rx) = oneshot::channel::<()>();
        let (first, second) = tokio::join!(
            run_mutation(
                &page.view,
                &|| {},
                async {
                    let _ = release_rx.await;
                    gateway.delete_student("s1").await
                },
                |filter| gateway.list_students(filter),
            ),
            async {
                let second = delete_student(&gateway, &page, "s2", &|| {}).await;
                let _ = release_tx.send(());
                second
            }
        );

        assert_eq!(second, MutationRun::Refused);
        assert_eq!(first, MutationRun::Completed(FetchOutcome::Applied));
        assert!(!gateway.calls.borrow().contains(&Call::DeleteStudent("s2".into())));
    }
}
