//! Home page: today's roster with a "mark present" action per student.

use std::cell::RefCell;

use crate::controller::{fetch_into, run_mutation, FetchOutcome, MutationRun, ViewController};
use crate::gateway::DashboardGateway;
use crate::models::TodayRoster;

#[derive(Default)]
pub struct HomePage {
    pub view: RefCell<ViewController<(), TodayRoster>>,
}

impl HomePage {
    pub fn roster(&self) -> Option<TodayRoster> {
        self.view.borrow().current_snapshot().cloned()
    }
}

pub async fn load<G>(gateway: &G, page: &HomePage, notify: &dyn Fn()) -> FetchOutcome
where
    G: DashboardGateway + ?Sized,
{
    fetch_into(&page.view, (), notify, |_| gateway.get_today_roster()).await
}

/// Mark a student present for the roster's lesson, then reload the roster
pub async fn mark_present<G>(gateway: &G, page: &HomePage, student_id: &str, notify: &dyn Fn()) -> MutationRun
where
    G: DashboardGateway + ?Sized,
{
    let Some(day_id) = page.roster().map(|r| r.day_id) else {
        return MutationRun::Refused;
    };
    run_mutation(
        &page.view,
        notify,
        gateway.mark_attendance(student_id, &day_id),
        |_| gateway.get_today_roster(),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::mock::{Call, MockGateway};
    use crate::models::RosterStudent;
    use serde_json::json;

    #[tokio::test]
    async fn test_mark_present_uses_roster_day() {
        let gateway = MockGateway::default();
        *gateway.roster.borrow_mut() = Some(TodayRoster {
            day_id: "d42".into(),
            students: vec![RosterStudent {
                student: serde_json::from_value(json!({ "_id": "s1", "name": "Asha" })).unwrap(),
                present: false,
            }],
        });
        let page = HomePage::default();
        load(&gateway, &page, &|| {}).await;

        let run = mark_present(&gateway, &page, "s1", &|| {}).await;
        assert_eq!(run, MutationRun::Completed(FetchOutcome::Applied));
        assert!(gateway.calls.borrow().contains(&Call::MarkAttendance("s1".into(), "d42".into())));
        assert!(page.roster().unwrap().students[0].present);
    }

    #[tokio::test]
    async fn test_mark_present_without_roster_is_refused() {
        let gateway = MockGateway::default();
        let page = HomePage::default();
        load(&gateway, &page, &|| {}).await;

        assert_eq!(mark_present(&gateway, &page, "s1", &|| {}).await, MutationRun::Refused);
        assert_eq!(gateway.call_count(), 1);
        assert_eq!(
            page.view.borrow().error().map(ToString::to_string).as_deref(),
            Some("No lesson today")
        );
    }
}
