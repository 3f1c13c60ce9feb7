//! Contact form submission cycles against simulated endpoints.

use std::cell::{Cell, RefCell};

use tokio::sync::oneshot;

use folio_core::{
    ButtonState, ContactForm, FolioError, FolioResult, FormSurface, FormTransport, Submission,
    SubmitOutcome, TransportResponse,
};

// ============================================================================
// Test Doubles
// ============================================================================

/// Endpoint that answers every POST the same way and remembers what it got.
struct FakeEndpoint {
    answer: Result<TransportResponse, String>,
    received: RefCell<Vec<Submission>>,
}

impl FakeEndpoint {
    fn status(status: u16) -> Self {
        Self {
            answer: Ok(TransportResponse {
                status,
                ok: (200..300).contains(&status),
            }),
            received: RefCell::new(Vec::new()),
        }
    }

    fn unreachable() -> Self {
        Self {
            answer: Err("connection refused".to_string()),
            received: RefCell::new(Vec::new()),
        }
    }
}

impl FormTransport for FakeEndpoint {
    async fn post(&self, submission: &Submission) -> FolioResult<TransportResponse> {
        self.received.borrow_mut().push(submission.clone());
        self.answer.clone().map_err(FolioError::Network)
    }
}

/// Endpoint that answers only when the test releases the response.
struct GatedEndpoint {
    gate: RefCell<Option<oneshot::Receiver<TransportResponse>>>,
}

impl GatedEndpoint {
    fn new(gate: oneshot::Receiver<TransportResponse>) -> Self {
        Self {
            gate: RefCell::new(Some(gate)),
        }
    }
}

impl FormTransport for GatedEndpoint {
    async fn post(&self, _submission: &Submission) -> FolioResult<TransportResponse> {
        let gate = self
            .gate
            .borrow_mut()
            .take()
            .ok_or_else(|| FolioError::Network("gate already used".to_string()))?;
        gate.await.map_err(|e| FolioError::Network(e.to_string()))
    }
}

/// Endpoint whose request never settles.
struct HungEndpoint;

impl FormTransport for HungEndpoint {
    async fn post(&self, _submission: &Submission) -> FolioResult<TransportResponse> {
        std::future::pending().await
    }
}

/// In-memory form with a button history.
struct FakeForm {
    fields: RefCell<Vec<(String, String)>>,
    buttons: RefCell<Vec<ButtonState>>,
    resets: Cell<usize>,
}

impl FakeForm {
    fn filled() -> Self {
        Self {
            fields: RefCell::new(vec![
                ("name".to_string(), "Ada".to_string()),
                ("email".to_string(), "ada@example.com".to_string()),
                ("message".to_string(), "Hello!".to_string()),
            ]),
            buttons: RefCell::new(Vec::new()),
            resets: Cell::new(0),
        }
    }

    fn button(&self) -> Option<ButtonState> {
        self.buttons.borrow().last().copied()
    }

    fn values(&self) -> Vec<String> {
        self.fields.borrow().iter().map(|(_, v)| v.clone()).collect()
    }
}

impl FormSurface for FakeForm {
    fn action(&self) -> String {
        "https://forms.example.com/f/abc".to_string()
    }

    fn fields(&self) -> Vec<(String, String)> {
        self.fields.borrow().clone()
    }

    fn set_button(&self, state: ButtonState) {
        self.buttons.borrow_mut().push(state);
    }

    fn reset_fields(&self) {
        self.resets.set(self.resets.get() + 1);
        for (_, value) in self.fields.borrow_mut().iter_mut() {
            value.clear();
        }
    }
}

// ============================================================================
// Submission Outcomes
// ============================================================================

#[tokio::test]
async fn test_ok_response_clears_fields_and_shows_success() {
    let form = FakeForm::filled();
    let contact = ContactForm::new(FakeEndpoint::status(200));

    let outcome = contact.submit(&form).await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(
        *form.buttons.borrow(),
        vec![ButtonState::Sending, ButtonState::Sent]
    );
    assert_eq!(form.resets.get(), 1);
    assert!(form.values().iter().all(String::is_empty));
}

#[tokio::test]
async fn test_rejected_response_keeps_fields() {
    let form = FakeForm::filled();
    let contact = ContactForm::new(FakeEndpoint::status(422));

    let outcome = contact.submit(&form).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(form.button(), Some(ButtonState::Failed));
    assert_eq!(form.resets.get(), 0);
    assert_eq!(form.values(), vec!["Ada", "ada@example.com", "Hello!"]);
}

#[tokio::test]
async fn test_network_error_shows_same_failure() {
    let form = FakeForm::filled();
    let contact = ContactForm::new(FakeEndpoint::unreachable());

    let outcome = contact.submit(&form).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(form.button(), Some(ButtonState::Failed));
    assert_eq!(form.values()[0], "Ada");
}

#[tokio::test]
async fn test_single_attempt_with_form_contents() {
    let form = FakeForm::filled();
    let contact = ContactForm::new(FakeEndpoint::status(503));

    contact.submit(&form).await;

    let received = contact.transport().received.borrow();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].action, "https://forms.example.com/f/abc");
    assert_eq!(received[0].fields[1], ("email".to_string(), "ada@example.com".to_string()));
}

// ============================================================================
// Restore
// ============================================================================

#[tokio::test]
async fn test_restore_returns_to_idle_after_either_outcome() {
    for endpoint in [FakeEndpoint::status(200), FakeEndpoint::unreachable()] {
        let form = FakeForm::filled();
        let contact = ContactForm::new(endpoint);

        contact.submit(&form).await;
        assert!(form.button().unwrap().is_disabled());

        contact.restore(&form);
        assert_eq!(form.button(), Some(ButtonState::Idle));
        assert!(!ButtonState::Idle.is_disabled());
    }
}

#[tokio::test]
async fn test_restore_while_request_hangs_reenables_button() {
    let form = FakeForm::filled();
    let contact = ContactForm::new(HungEndpoint);

    tokio::select! {
        biased;
        _ = contact.submit(&form) => panic!("hung request settled"),
        _ = async { contact.restore(&form) } => {}
    }

    assert_eq!(
        *form.buttons.borrow(),
        vec![ButtonState::Sending, ButtonState::Idle]
    );
    assert_eq!(contact.button(), ButtonState::Idle);
    assert_eq!(form.values()[0], "Ada");
}

#[tokio::test]
async fn test_late_response_does_not_override_restore() {
    let (release, gate) = oneshot::channel();
    let form = FakeForm::filled();
    let contact = ContactForm::new(GatedEndpoint::new(gate));

    let (outcome, ()) = tokio::join!(contact.submit(&form), async {
        contact.restore(&form);
        release
            .send(TransportResponse { status: 200, ok: true })
            .unwrap();
    });

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(
        *form.buttons.borrow(),
        vec![ButtonState::Sending, ButtonState::Idle]
    );
    assert!(!contact.button().is_disabled());
    // The message did go out, so the form is still cleared
    assert_eq!(form.resets.get(), 1);
}

#[tokio::test]
async fn test_outcome_shown_when_response_beats_restore() {
    let form = FakeForm::filled();
    let contact = ContactForm::new(FakeEndpoint::unreachable());

    contact.submit(&form).await;
    assert_eq!(contact.button(), ButtonState::Failed);

    contact.restore(&form);
    assert_eq!(
        *form.buttons.borrow(),
        vec![ButtonState::Sending, ButtonState::Failed, ButtonState::Idle]
    );
}
