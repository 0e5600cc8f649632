use std::cell::RefCell;

use crate::controller::{fetch_into, FetchOutcome, ViewController};
use crate::gateway::DashboardGateway;
use crate::models::BlacklistEntry;

#[derive(Default)]
pub struct BlacklistPage {
    pub view: RefCell<ViewController<(), Vec<BlacklistEntry>>>,
}

impl BlacklistPage {
    pub fn entries(&self) -> Option<Vec<BlacklistEntry>> {
        self.view.borrow().current_snapshot().cloned()
    }
}

pub async fn load<G>(gateway: &G, page: &BlacklistPage, notify: &dyn Fn()) -> FetchOutcome
where
    G: DashboardGateway + ?Sized,
{
    fetch_into(&page.view, (), notify, |_| gateway.get_blacklist()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::mock::MockGateway;

    #[tokio::test]
    async fn test_load() {
        let gateway = MockGateway::default();
        *gateway.blacklist.borrow_mut() = vec![BlacklistEntry {
            id: "s1".into(),
            name: None,
            email: Some("a@b.c".into()),
            phone: None,
            missed_count: 4,
            cancelled_count: 1,
        }];
        let page = BlacklistPage::default();

        assert_eq!(load(&gateway, &page, &|| {}).await, FetchOutcome::Applied);
        let entries = page.entries().unwrap();
        assert_eq!(entries[0].display_name(), "Unknown");
        assert_eq!(entries[0].display_phone(), "N/A");
    }
}
