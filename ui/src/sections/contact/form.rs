//! Contact form state and the submission simulator.
//!
//! There is no backend: a submission is a fixed delay that always succeeds.
//! Transitions:
//!
//! ```text
//! Idle --begin_submit--> Submitting --(SUBMIT_DELAY_MS)--> Submitted --dismiss--> Idle
//! ```
//!
//! `begin_submit` is refused unless the form is idle and every field is filled in.
//! Completing a submission clears the three text fields.

use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use futures_util::{Stream, StreamExt};

use crate::core::timing;

/// Stand-in network round trip.
pub const SUBMIT_DELAY_MS: u64 = 1_500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// User intents sent to the section's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    Submit,
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Presence check only; the browser handles the email format.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    /// Idle → Submitting. Returns `false` (and changes nothing) otherwise.
    pub fn begin_submit(&mut self) -> bool {
        if self.status != SubmitStatus::Idle || !self.is_complete() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        true
    }

    /// Submitting → Submitted, clearing the fields. No-op in any other state.
    pub fn finish_submit(&mut self) {
        if self.status == SubmitStatus::Submitting {
            self.name.clear();
            self.email.clear();
            self.message.clear();
            self.status = SubmitStatus::Submitted;
        }
    }

    /// Submitted → Idle ("send another message").
    pub fn dismiss(&mut self) {
        if self.status == SubmitStatus::Submitted {
            self.status = SubmitStatus::Idle;
        }
    }
}

/// Something that hands out short-lived mutable access to a `ContactForm`.
///
/// Lets the simulator drive a component signal and a plain value alike without
/// holding a borrow across the delay.
pub trait FormCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R;
}

impl FormCell for ContactForm {
    fn update<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        f(self)
    }
}

impl FormCell for Signal<ContactForm> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        self.with_mut(f)
    }
}

/// Run one simulated submission: flips to `Submitting` immediately, waits
/// `SUBMIT_DELAY_MS`, then completes. Returns `false` if the form refused to submit.
pub async fn simulate_submission(form: &mut impl FormCell) -> bool {
    if !form.update(ContactForm::begin_submit) {
        return false;
    }
    timing::sleep_ms(SUBMIT_DELAY_MS).await;
    form.update(ContactForm::finish_submit);
    info!("contact message accepted by submission simulator");
    true
}

/// Apply `events` to `form` one at a time until the stream ends.
///
/// A submit holds the loop for the whole delay, so a dismiss sent meanwhile
/// lands on the submitted form rather than racing it.
pub async fn process_events<S>(form: &mut impl FormCell, mut events: S)
where
    S: Stream<Item = ContactEvent> + Unpin,
{
    while let Some(event) = events.next().await {
        match event {
            ContactEvent::Submit => {
                if !simulate_submission(&mut *form).await {
                    debug!("contact submit ignored (incomplete or already sent)");
                }
            }
            ContactEvent::Dismiss => form.update(ContactForm::dismiss),
        }
    }
}
