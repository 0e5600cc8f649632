//! # View-State Controller
//!
//! One controller per page. It owns the query currently on screen (a month or
//! a student filter), the last snapshot fetched for it, the page error and the
//! in-flight request bookkeeping.
//!
//! ## Ordering
//! Every fetch gets a [`FetchTicket`]. Only the ticket of the most recent
//! fetch can be applied; a response for a superseded month or filter is
//! dropped when it arrives. There is no cancellation, the stale request simply
//! finishes into the void.
//!
//! ## Mutations
//! A mutation is only started from a displayed snapshot and only one runs at a
//! time. Success leads straight into a re-fetch of the current query; failure
//! leaves the snapshot alone and surfaces the error.
//!
//! The controller itself never awaits. [`fetch_into`] and [`run_mutation`]
//! drive it around an async call while only borrowing it between suspension
//! points, which is what lets a `Rc<RefCell<_>>` owned by a UI component
//! stay usable while requests are pending.

use std::cell::RefCell;
use std::future::Future;

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Proof that a fetch was started, needed to apply its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket<Q> {
    token: RequestToken,
    query: Q,
}

impl<Q> FetchTicket<Q> {
    pub fn query(&self) -> &Q {
        &self.query
    }
}

/// Proof that a mutation was started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationTicket {
    token: RequestToken,
}

/// Where the page currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet
    Idle,
    /// A fetch for the current query is pending
    Loading,
    /// The current query's snapshot is displayed
    Ready,
    /// The current query has no snapshot and its last fetch failed
    Failed,
    /// A mutation is in flight over the displayed snapshot
    Mutating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// The result belonged to a superseded request
    Discarded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<Q> {
    /// Mutation succeeded; apply the re-fetch through this ticket
    Refetch(FetchTicket<Q>),
    /// Mutation failed; the snapshot is untouched and the error is surfaced
    Failed,
    /// The ticket did not belong to the running mutation
    Ignored,
}

/// Which kind of call raised the page error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorOrigin {
    Fetch,
    Mutation,
}

#[derive(Debug, Clone)]
pub struct ViewController<Q, S> {
    query: Option<Q>,
    snapshot: Option<(Q, S)>,
    error: Option<(ErrorOrigin, DashboardError)>,
    pending_fetch: Option<RequestToken>,
    pending_mutation: Option<RequestToken>,
    next_token: u64,
}

impl<Q, S> Default for ViewController<Q, S> {
    fn default() -> Self {
        Self {
            query: None,
            snapshot: None,
            error: None,
            pending_fetch: None,
            pending_mutation: None,
            next_token: 0,
        }
    }
}

impl<Q: Clone + PartialEq, S> ViewController<Q, S> {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue_token(&mut self) -> RequestToken {
        self.next_token += 1;
        RequestToken(self.next_token)
    }

    pub fn phase(&self) -> Phase {
        if self.pending_mutation.is_some() {
            Phase::Mutating
        } else if self.pending_fetch.is_some() {
            Phase::Loading
        } else if self.current_snapshot().is_some() {
            Phase::Ready
        } else if self.error.is_some() {
            Phase::Failed
        } else {
            Phase::Idle
        }
    }

    /// Month or filter currently on screen
    pub fn query(&self) -> Option<&Q> {
        self.query.as_ref()
    }

    /// Snapshot fetched for the query currently on screen.
    ///
    /// Data fetched for an earlier month or filter is never returned here.
    pub fn current_snapshot(&self) -> Option<&S> {
        match (&self.snapshot, &self.query) {
            (Some((fetched_for, snapshot)), Some(query)) if fetched_for == query => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DashboardError> {
        self.error.as_ref().map(|(_, error)| error)
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Mount, navigation, filter change or re-fetch. Supersedes any fetch
    /// still pending.
    pub fn begin_fetch(&mut self, query: Q) -> FetchTicket<Q> {
        let token = self.issue_token();
        if self.query.as_ref() != Some(&query) {
            // errors belong to the query that produced them
            self.error = None;
        }
        self.query = Some(query.clone());
        self.pending_fetch = Some(token);
        FetchTicket { token, query }
    }

    /// Apply a fetch result if it is still the latest request
    pub fn apply_fetch(&mut self, ticket: FetchTicket<Q>, result: Result<S, DashboardError>) -> FetchOutcome {
        if self.pending_fetch != Some(ticket.token) {
            log::debug!("🗑️ Discarding stale response for request {:?}", ticket.token);
            return FetchOutcome::Discarded;
        }
        self.pending_fetch = None;

        match result {
            Ok(snapshot) => {
                self.snapshot = Some((ticket.query, snapshot));
                // a mutation failure stays up until dismissed
                if matches!(self.error, Some((ErrorOrigin::Fetch, _))) {
                    self.error = None;
                }
            }
            Err(error) => {
                log::warn!("⚠️ Fetch failed: {}", error);
                self.error = Some((ErrorOrigin::Fetch, error));
            }
        }
        FetchOutcome::Applied
    }

    /// Start a mutation over the displayed snapshot.
    ///
    /// Refused while another mutation runs or when nothing is displayed.
    pub fn begin_mutation(&mut self) -> Option<MutationTicket> {
        if self.pending_mutation.is_some() || self.current_snapshot().is_none() {
            return None;
        }
        let token = self.issue_token();
        self.pending_mutation = Some(token);
        self.error = None;
        Some(MutationTicket { token })
    }

    pub fn finish_mutation<T>(
        &mut self,
        ticket: MutationTicket,
        result: Result<T, DashboardError>,
    ) -> MutationOutcome<Q> {
        if self.pending_mutation != Some(ticket.token) {
            return MutationOutcome::Ignored;
        }
        self.pending_mutation = None;

        match result {
            Ok(_) => match self.query.clone() {
                Some(query) => MutationOutcome::Refetch(self.begin_fetch(query)),
                None => MutationOutcome::Failed,
            },
            Err(error) => {
                log::warn!("⚠️ Mutation failed: {}", error);
                self.error = Some((ErrorOrigin::Mutation, error));
                MutationOutcome::Failed
            }
        }
    }
}

/// Result of [`run_mutation`]
#[derive(Debug, Clone, PartialEq)]
pub enum MutationRun {
    /// Another mutation was running or nothing was displayed; no call was made
    Refused,
    /// The mutation failed and the error is on the controller
    Failed,
    /// The mutation succeeded and the re-fetch finished
    Completed(FetchOutcome),
}

/// Fetch `query` into the controller, notifying after each state change
pub async fn fetch_into<Q, S, F, Fut>(
    controller: &RefCell<ViewController<Q, S>>,
    query: Q,
    notify: &dyn Fn(),
    fetch: F,
) -> FetchOutcome
where
    Q: Clone + PartialEq,
    F: FnOnce(Q) -> Fut,
    Fut: Future<Output = Result<S, DashboardError>>,
{
    let ticket = controller.borrow_mut().begin_fetch(query.clone());
    notify();

    let result = fetch(query).await;

    let outcome = controller.borrow_mut().apply_fetch(ticket, result);
    if outcome == FetchOutcome::Applied {
        notify();
    }
    outcome
}

/// Run `mutation`, then re-fetch the current query through `refetch`.
///
/// `mutation` is only polled once the controller has accepted it, so a refused
/// mutation never reaches the network.
pub async fn run_mutation<Q, S, T, M, F, Fut>(
    controller: &RefCell<ViewController<Q, S>>,
    notify: &dyn Fn(),
    mutation: M,
    refetch: F,
) -> MutationRun
where
    Q: Clone + PartialEq,
    M: Future<Output = Result<T, DashboardError>>,
    F: FnOnce(Q) -> Fut,
    Fut: Future<Output = Result<S, DashboardError>>,
{
    let Some(ticket) = controller.borrow_mut().begin_mutation() else {
        log::debug!("⏳ Mutation refused, another one is in flight");
        return MutationRun::Refused;
    };
    notify();

    let result = mutation.await;

    let outcome = controller.borrow_mut().finish_mutation(ticket, result);
    notify();

    match outcome {
        MutationOutcome::Refetch(fetch_ticket) => {
            let query = fetch_ticket.query().clone();
            let result = refetch(query).await;
            let applied = controller.borrow_mut().apply_fetch(fetch_ticket, result);
            if applied == FetchOutcome::Applied {
                notify();
            }
            MutationRun::Completed(applied)
        }
        MutationOutcome::Failed | MutationOutcome::Ignored => MutationRun::Failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operation;
    use std::cell::Cell;
    use tokio::sync::oneshot;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Month {
        April,
        May,
    }

    type Controller = ViewController<Month, Vec<&'static str>>;

    fn remote_error() -> DashboardError {
        DashboardError::remote(Operation::GetTimetable, 500, None)
    }

    #[test]
    fn test_idle_loading_ready() {
        let mut c = Controller::new();
        assert_eq!(c.phase(), Phase::Idle);

        let ticket = c.begin_fetch(Month::April);
        assert_eq!(c.phase(), Phase::Loading);
        assert_eq!(c.current_snapshot(), None);

        assert_eq!(c.apply_fetch(ticket, Ok(vec!["a"])), FetchOutcome::Applied);
        assert_eq!(c.phase(), Phase::Ready);
        assert_eq!(c.current_snapshot(), Some(&vec!["a"]));
    }

    #[test]
    fn test_first_load_failure() {
        let mut c = Controller::new();
        let ticket = c.begin_fetch(Month::April);
        c.apply_fetch(ticket, Err(remote_error()));
        assert_eq!(c.phase(), Phase::Failed);
        assert_eq!(c.error().map(ToString::to_string).as_deref(), Some("Failed to fetch timetable"));
    }

    #[test]
    fn test_stale_month_response_is_discarded() {
        let mut c = Controller::new();
        let april = c.begin_fetch(Month::April);
        let may = c.begin_fetch(Month::May);

        assert_eq!(c.apply_fetch(april, Ok(vec!["april"])), FetchOutcome::Discarded);
        assert_eq!(c.query(), Some(&Month::May));
        assert_eq!(c.phase(), Phase::Loading);
        assert_eq!(c.current_snapshot(), None);

        assert_eq!(c.apply_fetch(may, Ok(vec!["may"])), FetchOutcome::Applied);
        assert_eq!(c.current_snapshot(), Some(&vec!["may"]));
    }

    #[test]
    fn test_stale_response_after_newer_one_is_discarded() {
        let mut c = Controller::new();
        let april = c.begin_fetch(Month::April);
        let may = c.begin_fetch(Month::May);

        c.apply_fetch(may, Ok(vec!["may"]));
        assert_eq!(c.apply_fetch(april, Err(remote_error())), FetchOutcome::Discarded);
        assert_eq!(c.phase(), Phase::Ready);
        assert!(c.error().is_none());
    }

    #[test]
    fn test_snapshot_of_previous_month_is_not_shown() {
        let mut c = Controller::new();
        let april = c.begin_fetch(Month::April);
        c.apply_fetch(april, Ok(vec!["april"]));

        let _may = c.begin_fetch(Month::May);
        assert_eq!(c.current_snapshot(), None);
        assert_eq!(c.phase(), Phase::Loading);
    }

    #[test]
    fn test_refetch_failure_keeps_snapshot() {
        let mut c = Controller::new();
        let first = c.begin_fetch(Month::April);
        c.apply_fetch(first, Ok(vec!["a"]));

        let again = c.begin_fetch(Month::April);
        c.apply_fetch(again, Err(remote_error()));
        assert_eq!(c.phase(), Phase::Ready);
        assert_eq!(c.current_snapshot(), Some(&vec!["a"]));
        assert!(c.error().is_some());

        c.dismiss_error();
        assert!(c.error().is_none());
    }

    #[test]
    fn test_mutation_requires_snapshot_and_is_exclusive() {
        let mut c = Controller::new();
        assert!(c.begin_mutation().is_none());

        let ticket = c.begin_fetch(Month::April);
        c.apply_fetch(ticket, Ok(vec!["a"]));

        let first = c.begin_mutation().unwrap();
        assert_eq!(c.phase(), Phase::Mutating);
        assert!(c.begin_mutation().is_none());

        match c.finish_mutation(first, Ok(())) {
            MutationOutcome::Refetch(ticket) => {
                assert_eq!(c.phase(), Phase::Loading);
                assert_eq!(ticket.query(), &Month::April);
                // snapshot stays visible while re-fetching
                assert_eq!(c.current_snapshot(), Some(&vec!["a"]));
                c.apply_fetch(ticket, Ok(vec!["a", "b"]));
            }
            other => panic!("expected refetch, got {:?}", other),
        }
        assert_eq!(c.phase(), Phase::Ready);
        assert_eq!(c.current_snapshot(), Some(&vec!["a", "b"]));
    }

    #[test]
    fn test_failed_mutation_keeps_snapshot() {
        let mut c = Controller::new();
        let ticket = c.begin_fetch(Month::April);
        c.apply_fetch(ticket, Ok(vec!["a"]));

        let m = c.begin_mutation().unwrap();
        let outcome = c.finish_mutation::<()>(m, Err(remote_error()));
        assert_eq!(outcome, MutationOutcome::Failed);
        assert_eq!(c.phase(), Phase::Ready);
        assert_eq!(c.current_snapshot(), Some(&vec!["a"]));
        assert!(c.error().is_some());

        // the spent ticket cannot be replayed
        assert_eq!(c.finish_mutation(m, Ok(())), MutationOutcome::Ignored);
    }

    #[test]
    fn test_mutation_error_survives_later_fetch() {
        let mut c = Controller::new();
        let april = c.begin_fetch(Month::April);
        c.apply_fetch(april, Ok(vec!["april"]));

        let m = c.begin_mutation().unwrap();
        let may = c.begin_fetch(Month::May);
        let failure = DashboardError::remote(Operation::SetDaySubject, 500, None);
        assert_eq!(c.finish_mutation::<()>(m, Err(failure)), MutationOutcome::Failed);

        assert_eq!(c.apply_fetch(may, Ok(vec!["may"])), FetchOutcome::Applied);
        assert_eq!(c.phase(), Phase::Ready);
        assert_eq!(c.current_snapshot(), Some(&vec!["may"]));
        assert_eq!(c.error().map(ToString::to_string).as_deref(), Some("Failed to update subject"));

        c.dismiss_error();
        assert!(c.error().is_none());
    }

    #[test]
    fn test_fetch_error_cleared_by_next_success() {
        let mut c = Controller::new();
        let first = c.begin_fetch(Month::April);
        c.apply_fetch(first, Err(remote_error()));
        assert_eq!(c.phase(), Phase::Failed);

        let retry = c.begin_fetch(Month::April);
        c.apply_fetch(retry, Ok(vec!["a"]));
        assert_eq!(c.phase(), Phase::Ready);
        assert!(c.error().is_none());
    }

    #[tokio::test]
    async fn test_fetch_into_discards_late_april_response() {
        let controller = RefCell::new(Controller::new());
        let renders = Cell::new(0);
        let notify = || renders.set(renders.get() + 1);

        let (april_tx, april_rx) = oneshot::channel::<Vec<&'static str>>();
        let (may_tx, may_rx) = oneshot::channel::<Vec<&'static str>>();

        let (april, may, _) = tokio::join!(
            fetch_into(&controller, Month::April, &notify, |_| async move {
                april_rx.await.map_err(|_| remote_error())
            }),
            fetch_into(&controller, Month::May, &notify, |_| async move {
                may_rx.await.map_err(|_| remote_error())
            }),
            async {
                // May answers first, the slow April response lands afterwards
                may_tx.send(vec!["may"]).unwrap();
                tokio::task::yield_now().await;
                april_tx.send(vec!["april"]).unwrap();
            }
        );

        assert_eq!(may, FetchOutcome::Applied);
        assert_eq!(april, FetchOutcome::Discarded);

        let c = controller.borrow();
        assert_eq!(c.query(), Some(&Month::May));
        assert_eq!(c.current_snapshot(), Some(&vec!["may"]));
        assert_eq!(c.phase(), Phase::Ready);
    }

    #[tokio::test]
    async fn test_run_mutation_refetches_on_success() {
        let controller = RefCell::new(Controller::new());
        let notify = || {};
        fetch_into(&controller, Month::April, &notify, |_| async { Ok(vec!["a"]) }).await;

        let run = run_mutation(
            &controller,
            &notify,
            async { Ok::<_, DashboardError>(()) },
            |month| async move {
                assert_eq!(month, Month::April);
                Ok(vec!["a", "b"])
            },
        )
        .await;

        assert_eq!(run, MutationRun::Completed(FetchOutcome::Applied));
        assert_eq!(controller.borrow().current_snapshot(), Some(&vec!["a", "b"]));
    }

    #[tokio::test]
    async fn test_run_mutation_failure_skips_refetch() {
        let controller = RefCell::new(Controller::new());
        let notify = || {};
        fetch_into(&controller, Month::April, &notify, |_| async { Ok(vec!["a"]) }).await;

        let refetched = Cell::new(false);
        let run = run_mutation(
            &controller,
            &notify,
            async { Err::<(), _>(remote_error()) },
            |_| {
                refetched.set(true);
                async { Ok(vec![]) }
            },
        )
        .await;

        assert_eq!(run, MutationRun::Failed);
        assert!(!refetched.get());
        assert_eq!(controller.borrow().current_snapshot(), Some(&vec!["a"]));
    }

    #[tokio::test]
    async fn test_refused_mutation_is_never_polled() {
        let controller = RefCell::new(Controller::new());
        let polled = Cell::new(false);

        let run = run_mutation(
            &controller,
            &|| {},
            async {
                polled.set(true);
                Ok::<_, DashboardError>(())
            },
            |_| async { Ok(vec![]) },
        )
        .await;

        assert_eq!(run, MutationRun::Refused);
        assert!(!polled.get());
    }
}
