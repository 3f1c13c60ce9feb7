//! Contact form submission.
//!
//! [`ContactForm`] drives one submission cycle against two seams:
//! a [`FormSurface`] (the form and its submit button) and a
//! [`FormTransport`] (the HTTP client). Network errors and non-ok responses
//! both end in [`ButtonState::Failed`]; only the logs tell them apart.
//!
//! Restoring the button is the caller's job: it schedules
//! [`ContactForm::restore`] after [`crate::config::Timings::form_reset`]
//! from the moment of submission, independently of when the request settles.
//! An outcome that arrives after the restore leaves the button alone, so a
//! slow or hung request can never keep it disabled.

use std::cell::Cell;

use crate::error::{FolioError, FolioResult};

/// Submit button presentation during one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Original label, enabled
    Idle,
    Sending,
    Sent,
    Failed,
}

impl ButtonState {
    /// Inner markup for the button, `None` for the page's original label.
    pub fn markup(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Sending => Some(r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#),
            Self::Sent => Some(r#"<i class="fas fa-check"></i> Message Sent!"#),
            Self::Failed => Some(r#"<i class="fas fa-times"></i> Error! Try again"#),
        }
    }

    /// Background override, `None` to clear it.
    pub fn background(self) -> Option<&'static str> {
        match self {
            Self::Sent => Some("var(--success)"),
            Self::Failed => Some("var(--error)"),
            Self::Idle | Self::Sending => None,
        }
    }

    pub fn is_disabled(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Encoded form contents and where to send them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The form's `action` URL
    pub action: String,
    /// Named text fields in document order. File inputs are not included;
    /// a transport that must send them reads the form directly.
    pub fields: Vec<(String, String)>,
}

/// Status line of the endpoint's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub ok: bool,
}

/// Sends a submission. Errors mean no response was received.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post(&self, submission: &Submission) -> FolioResult<TransportResponse>;
}

/// The form as seen by the controller.
pub trait FormSurface {
    fn action(&self) -> String;
    fn fields(&self) -> Vec<(String, String)>;
    fn set_button(&self, state: ButtonState);
    /// Clear every field back to its initial value.
    fn reset_fields(&self);
}

/// Final state of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

/// Submission controller, one per form.
#[derive(Debug)]
pub struct ContactForm<T> {
    transport: T,
    button: Cell<ButtonState>,
    cycle: Cell<u64>,
}

impl<T: FormTransport> ContactForm<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            button: Cell::new(ButtonState::Idle),
            cycle: Cell::new(0),
        }
    }

    /// Run one submission: sending indicator, single POST, result indicator.
    ///
    /// The result indicator is only shown while this cycle's sending
    /// indicator is still up. Clearing the fields on success happens either way.
    pub async fn submit<S: FormSurface>(&self, surface: &S) -> SubmitOutcome {
        let cycle = self.cycle.get().wrapping_add(1);
        self.cycle.set(cycle);
        self.show(surface, ButtonState::Sending);

        let submission = Submission {
            action: surface.action(),
            fields: surface.fields(),
        };
        tracing::debug!(
            action = %submission.action,
            fields = submission.fields.len(),
            "submitting contact form"
        );

        match self.send(&submission).await {
            Ok(()) => {
                tracing::info!("contact form sent");
                self.settle(surface, cycle, ButtonState::Sent);
                surface.reset_fields();
                SubmitOutcome::Sent
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact form submission failed");
                self.settle(surface, cycle, ButtonState::Failed);
                SubmitOutcome::Failed
            }
        }
    }

    async fn send(&self, submission: &Submission) -> FolioResult<()> {
        let response = self.transport.post(submission).await?;
        if response.ok {
            Ok(())
        } else {
            Err(FolioError::Submission {
                status: response.status,
            })
        }
    }

    fn settle<S: FormSurface>(&self, surface: &S, cycle: u64, state: ButtonState) {
        if self.cycle.get() == cycle && self.button.get() == ButtonState::Sending {
            self.show(surface, state);
        } else {
            tracing::debug!(?state, "contact outcome arrived after restore");
        }
    }

    fn show<S: FormSurface>(&self, surface: &S, state: ButtonState) {
        self.button.set(state);
        surface.set_button(state);
    }

    /// Put the button back to its original label and enable it.
    pub fn restore<S: FormSurface>(&self, surface: &S) {
        self.show(surface, ButtonState::Idle);
    }

    /// State last shown on the submit button.
    pub fn button(&self) -> ButtonState {
        self.button.get()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// Border feedback for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIndicator {
    Valid,
    Invalid,
}

impl FieldIndicator {
    pub fn border_color(self) -> &'static str {
        match self {
            Self::Valid => "var(--success)",
            Self::Invalid => "var(--error)",
        }
    }
}

/// Indicator to show when a field loses focus.
///
/// `constraint_valid` is the browser's built-in validity for the field. A
/// blank field that passes validation keeps whatever it showed before.
pub fn blur_indicator(value: &str, constraint_valid: bool) -> Option<FieldIndicator> {
    if !constraint_valid {
        Some(FieldIndicator::Invalid)
    } else if !value.trim().is_empty() {
        Some(FieldIndicator::Valid)
    } else {
        None
    }
}
