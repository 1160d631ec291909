use super::decide;
use super::Decision;
use super::Notification;
use super::Notifier;
use super::Outcome;
use super::Rejection;
use super::SaveEmailAction;
use crate::persistence::SaveEmailResult;

/// `Idle -> Validating -> Submitting -> Idle`. Nothing survives a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    /// Input and submit button are disabled; the button shows a spinner
    Submitting,
}

/// What `begin_submit` decided
#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    /// Already waiting on the server; the click is swallowed
    Busy,
    Rejected(Rejection),
    /// The caller now owes exactly one `finish_submit`
    Pending(String),
}

/// The "notify me" form: one text field and a submit button.
///
/// Split into `begin_submit`/`finish_submit` so that a UI can render the
/// disabled state while the call is in flight; `on_submit` strings the two
/// together for callers that just want to await the whole thing.
#[derive(Debug, Default)]
pub struct CaptureForm {
    input: String,
    state: FormState,
}

impl CaptureForm {
    pub fn new() -> Self { Self::default() }

    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            state: FormState::Idle,
        }
    }

    pub fn input(&self) -> &str { &self.input }

    pub fn state(&self) -> FormState { self.state }

    pub fn is_submitting(&self) -> bool { self.state == FormState::Submitting }

    /// Keystrokes are dropped while submitting (the field is disabled).
    /// Returns whether the input was taken.
    pub fn set_input(
        &mut self,
        input: impl Into<String>,
    ) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.input = input.into();
        true
    }

    pub fn begin_submit(&mut self) -> Submission {
        if self.is_submitting() {
            return Submission::Busy;
        }
        self.state = FormState::Validating;
        match decide(&self.input) {
            Decision::Reject(rejection) => {
                self.state = FormState::Idle;
                Submission::Rejected(rejection)
            }
            Decision::Submit(email) => {
                let email = email.to_owned();
                self.state = FormState::Submitting;
                Submission::Pending(email)
            }
        }
    }

    /// Back to `Idle`. The input is cleared on confirmed success only, so a
    /// failed attempt can be retried without retyping.
    pub fn finish_submit(
        &mut self,
        result: Result<SaveEmailResult, anyhow::Error>,
    ) -> Outcome {
        self.state = FormState::Idle;
        match result {
            Ok(SaveEmailResult { success: true, .. }) => {
                self.input.clear();
                Outcome::Saved
            }
            Ok(SaveEmailResult { error, .. }) => Outcome::Failed(error),
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "save-email call failed"
                );
                Outcome::Unexpected
            }
        }
    }

    /// One submit click. Exactly one notification per attempt, except when
    /// the form is busy, which yields `None` and no notification at all.
    #[tracing::instrument(name = "Submitting capture form", skip_all)]
    pub async fn on_submit<A, N>(
        &mut self,
        action: &A,
        notifier: &N,
    ) -> Option<Outcome>
    where
        A: SaveEmailAction + ?Sized,
        N: Notifier + ?Sized,
    {
        let email = match self.begin_submit() {
            Submission::Busy => return None,
            Submission::Rejected(rejection) => {
                let outcome = Outcome::Rejected(rejection);
                notifier.notify(Notification::from(&outcome));
                return Some(outcome);
            }
            Submission::Pending(email) => email,
        };

        let result = action.save_email(&email).await;
        let outcome = self.finish_submit(result);
        notifier.notify(Notification::from(&outcome));
        Some(outcome)
    }
}
