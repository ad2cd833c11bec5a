//! Mock contact-form submission: Idle -> Pending -> Succeeded -> Idle.
//!
//! Nothing is delivered anywhere. The two delays stand in for the round trip
//! and for how long the confirmation stays on screen.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use shared::domain::{ContactField, SubmissionState};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// A submission is already in flight or being confirmed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct SubmissionLifecycle {
    state: SubmissionState,
    form: ContactForm,
    focused: Option<ContactField>,
    pending_delay: Duration,
    reset_delay: Duration,
    deadline: Option<Duration>,
}

impl SubmissionLifecycle {
    pub fn new(pending_delay: Duration, reset_delay: Duration) -> Self {
        Self {
            state: SubmissionState::Idle,
            form: ContactForm::default(),
            focused: None,
            pending_delay,
            reset_delay,
            deadline: None,
        }
    }

    /// Starts a submission of `payload` at `now`. Only accepted when idle;
    /// otherwise nothing changes.
    pub fn submit(&mut self, now: Duration, payload: ContactForm) -> SubmitOutcome {
        if self.state != SubmissionState::Idle {
            debug!(state = ?self.state, "submission: ignored while busy");
            return SubmitOutcome::Ignored;
        }
        self.form = payload;
        self.state = SubmissionState::Pending;
        self.deadline = Some(now + self.pending_delay);
        info!("submission: pending");
        SubmitOutcome::Accepted
    }

    /// Submits whatever is currently typed into the form.
    pub fn submit_current(&mut self, now: Duration) -> SubmitOutcome {
        let payload = self.form.clone();
        self.submit(now, payload)
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.form.field_mut(field) = value.into();
    }

    pub fn focus(&mut self, field: ContactField) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Applies the scheduled transition if due at `now`, returning the new state.
    pub fn fire_due(&mut self, now: Duration) -> Option<SubmissionState> {
        let due = self.deadline.filter(|deadline| *deadline <= now)?;
        match self.state {
            SubmissionState::Pending => {
                self.state = SubmissionState::Succeeded;
                self.form = ContactForm::default();
                self.deadline = Some(due + self.reset_delay);
                info!("submission: succeeded");
            }
            SubmissionState::Succeeded => {
                self.state = SubmissionState::Idle;
                self.deadline = None;
                debug!("submission: reset to idle");
            }
            SubmissionState::Idle => {
                self.deadline = None;
                return None;
            }
        }
        Some(self.state)
    }

    /// Drops any scheduled transition, freezing the current state.
    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            debug!(state = ?self.state, "submission: pending transition cancelled");
        }
    }

    /// Back to a blank, idle form. Used when the contact section is mounted
    /// again after a teardown froze it mid-flight.
    pub fn reset(&mut self) {
        if self.state != SubmissionState::Idle || self.deadline.is_some() {
            debug!(state = ?self.state, "submission: reset on mount");
        }
        self.state = SubmissionState::Idle;
        self.form = ContactForm::default();
        self.focused = None;
        self.deadline = None;
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn focused(&self) -> Option<ContactField> {
        self.focused
    }
}

#[cfg(test)]
#[path = "tests/submission_tests.rs"]
mod tests;
