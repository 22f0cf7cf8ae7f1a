//! src/form.rs

use crate::domain::WaitlistEmail;
use crate::waitlist_client::{SubmissionOutcome, WaitlistClient};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    /// Terminal: the form is replaced by a confirmation.
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    EmailChanged(String),
    Focus,
    Submit,
    OutcomeReceived(SubmissionOutcome),
}

/// Side effect requested by the reducer, executed by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Submit(WaitlistEmail),
}

/// View-model of the waitlist form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    email: String,
    state: FormState,
    error_visible: bool,
}

impl WaitlistForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The failure reason currently on display, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FormState::Failed(message) if self.error_visible => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.state == FormState::Succeeded
    }

    pub fn update(&mut self, event: FormEvent) -> Option<FormCommand> {
        if self.is_submitted() {
            return None;
        }
        match event {
            FormEvent::EmailChanged(value) => {
                // typing never validates
                self.email = value;
                None
            }
            FormEvent::Focus => {
                self.error_visible = false;
                None
            }
            FormEvent::Submit => {
                if self.is_loading() {
                    return None;
                }
                match WaitlistEmail::parse(self.email.clone()) {
                    Ok(email) => {
                        self.state = FormState::Submitting;
                        self.error_visible = false;
                        Some(FormCommand::Submit(email))
                    }
                    Err(e) => {
                        self.fail(e.to_string());
                        None
                    }
                }
            }
            FormEvent::OutcomeReceived(outcome) => {
                // outcomes only make sense for the submission in flight
                if !self.is_loading() {
                    return None;
                }
                match outcome {
                    SubmissionOutcome::Success => {
                        self.state = FormState::Succeeded;
                        self.email.clear();
                        self.error_visible = false;
                    }
                    SubmissionOutcome::Failure(message) => self.fail(message),
                }
                None
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.state = FormState::Failed(message);
        self.error_visible = true;
    }
}

/// Run one submit cycle: validate, deliver through `client` if valid, record the outcome.
#[tracing::instrument(
    name = "Submitting the waitlist form",
    skip(form, client),
    fields(waitlist_email = %form.email())
)]
pub async fn submit_form(form: &mut WaitlistForm, client: &WaitlistClient) {
    if let Some(FormCommand::Submit(email)) = form.update(FormEvent::Submit) {
        let outcome = client.submit(&email).await;
        form.update(FormEvent::OutcomeReceived(outcome));
    }
    if let FormState::Failed(reason) = form.state() {
        tracing::info!(reason = %reason, "Waitlist form ended in an error state.");
    }
}
