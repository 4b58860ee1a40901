use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use log::{debug, error, info};
use yew::Reducible;

use super::client::SubmissionFailed;
use super::form::{FormField, FormState};
use super::status::SubmissionStatus;
use super::timer::{BrowserScheduler, ResetTimer, Scheduler};
use crate::config::CONTACT_RESET_DELAY_MS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Edit(FormField, String),
    Sending { attempt: u64 },
    Delivered { attempt: u64 },
    Failed { attempt: u64 },
    ResetElapsed { attempt: u64 },
}

/// Field values plus submission lifecycle for one contact form.
///
/// Outcomes carry the attempt they belong to; anything addressed to an
/// attempt other than the latest one is dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: FormState,
    pub status: SubmissionStatus,
    attempt: u64,
}

impl ContactForm {
    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit(field, value) => self.fields.set(field, value),
            ContactAction::Sending { attempt } => {
                self.attempt = attempt;
                self.status = SubmissionStatus::Loading;
            }
            ContactAction::Delivered { attempt } if self.settles(attempt) => {
                self.status = SubmissionStatus::Success;
                self.fields.clear();
            }
            ContactAction::Failed { attempt } if self.settles(attempt) => {
                self.status = SubmissionStatus::Error;
            }
            ContactAction::ResetElapsed { attempt }
                if attempt == self.attempt && self.status == SubmissionStatus::Success =>
            {
                self.status = SubmissionStatus::Idle;
            }
            stale => debug!("Dropping stale contact form action {:?}", stale),
        }
    }

    fn settles(&self, attempt: u64) -> bool {
        attempt == self.attempt && self.status == SubmissionStatus::Loading
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Bookkeeping that has to be read synchronously from event handlers, so it
/// lives beside the reducer rather than inside it.
pub struct Lifecycle<S: Scheduler = BrowserScheduler> {
    attempts: u64,
    reset: ResetTimer<S>,
}

impl<S: Scheduler> Lifecycle<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            attempts: 0,
            reset: ResetTimer::new(scheduler),
        }
    }

    /// Starts a new attempt, cancelling any auto-reset left over from the last one.
    pub fn begin(&mut self) -> u64 {
        self.reset.cancel();
        self.attempts += 1;
        self.attempts
    }

    /// Arms the auto-reset for `attempt` if it is still the latest one.
    pub fn delivered<F>(&mut self, attempt: u64, on_elapsed: F)
    where
        F: FnOnce() + 'static,
    {
        if attempt == self.attempts {
            self.reset.arm(CONTACT_RESET_DELAY_MS, on_elapsed);
        }
    }

    pub fn teardown(&mut self) {
        self.reset.cancel();
    }
}

impl Default for Lifecycle<BrowserScheduler> {
    fn default() -> Self {
        Self::new(BrowserScheduler)
    }
}

/// Runs one submission end to end: starts a new attempt, moves the form to
/// `loading`, settles it once `send` resolves and, on success, arms the
/// auto-reset back to idle.
///
/// Everything up to calling `send` happens before this returns, so the
/// loading state is visible before any request goes out.
pub fn run_submission<S, D, F, Fut>(
    lifecycle: Rc<RefCell<Lifecycle<S>>>,
    fields: FormState,
    dispatch: D,
    send: F,
) -> impl Future<Output = Result<(), SubmissionFailed>>
where
    S: Scheduler,
    D: Fn(ContactAction) + Clone + 'static,
    F: FnOnce(FormState) -> Fut,
    Fut: Future<Output = Result<(), SubmissionFailed>>,
{
    let attempt = lifecycle.borrow_mut().begin();
    info!("Submitting contact message {}", attempt);
    dispatch(ContactAction::Sending { attempt });
    let request = send(fields);
    async move {
        match request.await {
            Ok(()) => {
                info!("Contact message {} delivered", attempt);
                dispatch(ContactAction::Delivered { attempt });
                let on_elapsed = dispatch.clone();
                lifecycle.borrow_mut().delivered(attempt, move || {
                    on_elapsed(ContactAction::ResetElapsed { attempt })
                });
                Ok(())
            }
            Err(e) => {
                error!("Error sending contact message: {}", e);
                dispatch(ContactAction::Failed { attempt });
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use futures::executor::block_on;

    use super::*;
    use crate::contact::client::check_status;
    use crate::contact::timer::manual::ManualClock;

    use crate::contact::status::SubmissionStatus::*;

    fn filled() -> FormState {
        FormState {
            name: "Kayleen".to_string(),
            email: "k@example.com".to_string(),
            message: "Interested in a wedding package".to_string(),
        }
    }

    /// A form wired up the way the contact section wires it, on a virtual clock.
    struct Harness {
        form: Rc<RefCell<ContactForm>>,
        history: Rc<RefCell<Vec<SubmissionStatus>>>,
        lifecycle: Rc<RefCell<Lifecycle<ManualClock>>>,
        clock: ManualClock,
    }

    impl Harness {
        fn new() -> Self {
            let clock = ManualClock::default();
            Self {
                form: Rc::new(RefCell::new(ContactForm::default())),
                history: Rc::new(RefCell::new(vec![Idle])),
                lifecycle: Rc::new(RefCell::new(Lifecycle::new(clock.clone()))),
                clock,
            }
        }

        fn dispatcher(&self) -> impl Fn(ContactAction) + Clone + 'static {
            let form = self.form.clone();
            let history = self.history.clone();
            move |action| {
                let mut form = form.borrow_mut();
                let before = form.status;
                form.apply(action);
                if form.status != before {
                    history.borrow_mut().push(form.status);
                }
            }
        }

        fn edit(&self, field: FormField, value: &str) {
            (self.dispatcher())(ContactAction::Edit(field, value.to_string()));
        }

        fn fill(&self) {
            let fields = filled();
            for field in FormField::ALL {
                self.edit(field, fields.get(field));
            }
        }

        /// Submits and lets the endpoint answer with `status`.
        fn submit_with_status(&self, status: u16) -> Result<(), SubmissionFailed> {
            self.submit_with(move |_| ready(check_status(status)))
        }

        fn submit_with<F, Fut>(&self, send: F) -> Result<(), SubmissionFailed>
        where
            F: FnOnce(FormState) -> Fut,
            Fut: Future<Output = Result<(), SubmissionFailed>>,
        {
            let fields = self.form.borrow().fields.clone();
            block_on(run_submission(
                self.lifecycle.clone(),
                fields,
                self.dispatcher(),
                send,
            ))
        }

        fn status(&self) -> SubmissionStatus {
            self.form.borrow().status
        }

        fn fields(&self) -> FormState {
            self.form.borrow().fields.clone()
        }

        fn history(&self) -> Vec<SubmissionStatus> {
            self.history.borrow().clone()
        }
    }

    #[test]
    fn edits_only_touch_their_field() {
        let harness = Harness::new();
        harness.edit(FormField::Email, "a@b.com");
        harness.edit(FormField::Email, "c@d.com");

        let fields = harness.fields();
        assert_eq!(fields.email, "c@d.com");
        assert_eq!(fields.name, "");
        assert_eq!(fields.message, "");
        assert_eq!(harness.status(), Idle);
    }

    #[test]
    fn successful_submission_clears_form_then_returns_to_idle() {
        let harness = Harness::new();
        harness.fill();

        assert_eq!(harness.submit_with_status(200), Ok(()));
        assert_eq!(harness.history(), vec![Idle, Loading, Success]);
        assert_eq!(harness.fields(), FormState::default());

        harness.clock.advance(4999);
        assert_eq!(harness.status(), Success);

        harness.clock.advance(1);
        assert_eq!(harness.status(), Idle);
        assert_eq!(harness.history(), vec![Idle, Loading, Success, Idle]);
    }

    #[test]
    fn only_a_successful_submission_schedules_the_reset() {
        let harness = Harness::new();
        harness.fill();

        let _ = harness.submit_with_status(500);
        assert_eq!(harness.clock.pending(), 0);

        harness.submit_with_status(200).unwrap();
        assert_eq!(harness.clock.pending(), 1);
    }

    #[test]
    fn failed_submission_keeps_fields() {
        let harness = Harness::new();
        harness.fill();

        assert_eq!(
            harness.submit_with_status(500),
            Err(SubmissionFailed("endpoint answered with status 500".to_string()))
        );
        assert_eq!(harness.history(), vec![Idle, Loading, Error]);
        assert_eq!(harness.fields(), filled());
    }

    #[test]
    fn error_does_not_reset_on_its_own() {
        let harness = Harness::new();
        harness.fill();
        let _ = harness.submit_with_status(503);

        harness.clock.advance(60_000);
        assert_eq!(harness.status(), Error);
        assert_eq!(harness.clock.pending(), 0);
    }

    #[test]
    fn transport_failure_is_an_error_too() {
        let harness = Harness::new();
        harness.fill();

        let result = harness.submit_with(|_| {
            ready(Err(SubmissionFailed("connection refused".to_string())))
        });

        assert!(result.is_err());
        assert_eq!(harness.status(), Error);
        assert_eq!(harness.fields(), filled());
    }

    #[test]
    fn retry_from_error_can_succeed() {
        let harness = Harness::new();
        harness.fill();

        let _ = harness.submit_with_status(500);
        assert_eq!(harness.submit_with_status(201), Ok(()));

        assert_eq!(harness.history(), vec![Idle, Loading, Error, Loading, Success]);
        assert_eq!(harness.fields(), FormState::default());
    }

    #[test]
    fn loading_is_visible_before_request_is_built() {
        let harness = Harness::new();
        harness.fill();
        let form = harness.form.clone();

        let _ = harness.submit_with(move |fields| {
            assert_eq!(form.borrow().status, Loading);
            assert_eq!(fields, filled());
            ready(Ok(()))
        });
    }

    #[test]
    fn request_carries_the_fields_at_submit_time() {
        let harness = Harness::new();
        harness.fill();
        let sent = Rc::new(RefCell::new(None));
        let seen = sent.clone();

        let _ = harness.submit_with(move |fields| {
            *seen.borrow_mut() = Some(fields);
            ready(Ok(()))
        });

        assert_eq!(sent.borrow().clone(), Some(filled()));
    }

    #[test]
    fn second_success_restarts_the_reset_window() {
        let harness = Harness::new();
        harness.fill();
        harness.submit_with_status(200).unwrap();

        harness.clock.advance(3000);
        harness.fill();
        harness.submit_with_status(200).unwrap();
        assert_eq!(harness.clock.pending(), 1);

        // The first success would have reset here.
        harness.clock.advance(2000);
        assert_eq!(harness.status(), Success);

        harness.clock.advance(3000);
        assert_eq!(harness.status(), Idle);
    }

    #[test]
    fn failure_after_success_is_not_reset_by_old_timer() {
        let harness = Harness::new();
        harness.fill();
        harness.submit_with_status(200).unwrap();

        harness.clock.advance(1000);
        harness.fill();
        let _ = harness.submit_with_status(500);

        harness.clock.advance(10_000);
        assert_eq!(harness.status(), Error);
        assert_eq!(harness.fields(), filled());
    }

    #[test]
    fn teardown_releases_pending_reset() {
        let harness = Harness::new();
        harness.fill();
        harness.submit_with_status(200).unwrap();

        harness.lifecycle.borrow_mut().teardown();
        harness.clock.advance(5000);

        assert_eq!(harness.clock.pending(), 0);
        assert_eq!(harness.status(), Success);
    }

    #[test]
    fn edits_during_flight_survive_failure() {
        let harness = Harness::new();
        harness.fill();
        let dispatch = harness.dispatcher();

        let _ = harness.submit_with(move |_| {
            dispatch(ContactAction::Edit(FormField::Message, "Actually, a mitzvah".to_string()));
            ready(Err(SubmissionFailed("bad gateway".to_string())))
        });

        assert_eq!(harness.status(), Error);
        assert_eq!(harness.fields().message, "Actually, a mitzvah");
        assert_eq!(harness.fields().name, "Kayleen");
    }

    #[test]
    fn stale_outcomes_are_ignored() {
        let mut form = ContactForm::default();
        form.apply(ContactAction::Sending { attempt: 1 });
        form.apply(ContactAction::Sending { attempt: 2 });
        form.apply(ContactAction::Delivered { attempt: 1 });
        assert_eq!(form.status, Loading);

        form.apply(ContactAction::Failed { attempt: 2 });
        assert_eq!(form.status, Error);

        form.apply(ContactAction::ResetElapsed { attempt: 2 });
        assert_eq!(form.status, Error);
    }

    #[test]
    fn outcome_without_pending_request_is_ignored() {
        let mut form = ContactForm::default();
        form.apply(ContactAction::Delivered { attempt: 0 });
        assert_eq!(form.status, Idle);
    }

    #[test]
    fn reducer_returns_updated_copy() {
        let form = Rc::new(ContactForm::default());
        let next = form
            .clone()
            .reduce(ContactAction::Edit(FormField::Name, "Kayleen".to_string()));

        assert_eq!(form.fields.name, "");
        assert_eq!(next.fields.name, "Kayleen");
        assert_eq!(next.status, Idle);
    }
}
