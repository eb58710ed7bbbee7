//! Reservation and order form submission.
//!
//! A submission runs in three steps so that two submissions of the same form
//! can be in flight together:
//!
//! 1. [`FormSubmitter::begin`] shows "Submitting..." and snapshots the form.
//! 2. [`FormSubmitter::send`] posts the snapshot and decides the outcome.
//!    It touches no page state.
//! 3. [`SubmissionOutcome::apply`] writes the outcome to the feedback region
//!    and clears the form on success.
//!
//! Whichever outcome is applied last owns the feedback text.
//! [`FormSubmitter::submit_form`] runs all three back to back.

use serde_json::Value;

use crate::content::scalar_text;
use crate::form::{Form, FormPayload};
use crate::transport::Transport;
use crate::types::{RawResponse, SubmissionError, SubmissionResult};
use crate::view::{PageView, Tone};

pub const SUBMITTING_MESSAGE: &str = "Submitting...";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you! We will be in touch shortly.";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Posts forms to the site API.
pub struct FormSubmitter<T> {
    transport: T,
}

/// A submission that has been announced on the page but not yet sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    endpoint: String,
    feedback_id: String,
    payload: FormPayload,
}

/// The decided result of a sent submission, waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    feedback_id: String,
    result: SubmissionResult<String>,
}

impl SubmissionOutcome {
    /// Reflect the outcome on the page.
    ///
    /// Success clears `form` and shows the server's message; failure shows
    /// the error message and leaves `form` as it was.
    pub fn apply<V: PageView + ?Sized>(
        self,
        form: &mut Form,
        page: &mut V,
    ) -> SubmissionResult<String> {
        match &self.result {
            Ok(message) => {
                form.reset();
                show(page, &self.feedback_id, message, Tone::Success);
            }
            Err(error) => {
                show(page, &self.feedback_id, &error.to_string(), Tone::Error);
            }
        }
        self.result
    }
}

impl<T: Transport> FormSubmitter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Submit `form` to `endpoint` and reflect the outcome in `feedback_id`.
    pub async fn submit_form<V: PageView + ?Sized>(
        &self,
        form: &mut Form,
        endpoint: &str,
        feedback_id: &str,
        page: &mut V,
    ) -> SubmissionResult<String> {
        let pending = self.begin(form, endpoint, feedback_id, page);
        let outcome = self.send(pending).await;
        outcome.apply(form, page)
    }

    /// Announce the submission and snapshot the form's values.
    pub fn begin<V: PageView + ?Sized>(
        &self,
        form: &Form,
        endpoint: &str,
        feedback_id: &str,
        page: &mut V,
    ) -> PendingSubmission {
        show(page, feedback_id, SUBMITTING_MESSAGE, Tone::Success);
        PendingSubmission {
            endpoint: endpoint.to_string(),
            feedback_id: feedback_id.to_string(),
            payload: form.payload(),
        }
    }

    /// Post the snapshot and decide the outcome.
    pub async fn send(&self, pending: PendingSubmission) -> SubmissionOutcome {
        let result = match self
            .transport
            .post_json(&pending.endpoint, &pending.payload.to_json())
            .await
        {
            Ok(response) => decide(&response),
            Err(error) => Err(SubmissionError::from(error)),
        };

        match &result {
            Ok(_) => tracing::info!(endpoint = %pending.endpoint, "submission accepted"),
            Err(error) => tracing::warn!(endpoint = %pending.endpoint, %error, "submission failed"),
        }

        SubmissionOutcome {
            feedback_id: pending.feedback_id,
            result,
        }
    }
}

/// Success needs a 2xx status and a truthy `ok` in the body.
fn decide(response: &RawResponse) -> SubmissionResult<String> {
    let body: Value = serde_json::from_str(&response.body).map_err(|e| {
        SubmissionError::MalformedResponse(format!("Invalid response from server: {e}"))
    })?;

    let message = body.get("message").and_then(scalar_text);

    let ok = body.get("ok").is_some_and(is_truthy);
    if response.is_success() && ok {
        Ok(message.unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()))
    } else {
        Err(SubmissionError::Rejected {
            status: response.status,
            message: message.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
        })
    }
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn show<V: PageView + ?Sized>(page: &mut V, feedback_id: &str, message: &str, tone: Tone) {
    page.set_text(feedback_id, message);
    page.set_tone(feedback_id, tone);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormKind;
    use crate::ids;
    use crate::layout::default_page;
    use crate::types::TransportError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Replies with a fixed response and records every posted body.
    struct RecordingTransport {
        reply: Result<RawResponse, TransportError>,
        posted: Mutex<Vec<(String, Value)>>,
    }

    impl RecordingTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(RawResponse::new(status, body)),
                posted: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn get(&self, _path: &str) -> Result<RawResponse, TransportError> {
            unreachable!("submission never reads content")
        }

        async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse, TransportError> {
            self.posted
                .lock()
                .unwrap()
                .push((path.to_string(), body.clone()));
            self.reply.clone()
        }
    }

    fn booking_form() -> Form {
        Form::new()
            .field("name", "Ada")
            .field("date", "2026-11-02")
            .field("guests", "4")
    }

    async fn submit(
        status: u16,
        body: &str,
    ) -> (Form, crate::view::MemoryPage, SubmissionResult<String>) {
        let submitter = FormSubmitter::new(RecordingTransport::replying(status, body));
        let mut page = default_page();
        let mut form = booking_form();
        let kind = FormKind::Reservation;
        let result = submitter
            .submit_form(&mut form, kind.endpoint(), kind.feedback_id(), &mut page)
            .await;
        (form, page, result)
    }

    #[tokio::test]
    async fn test_accepted_clears_form_and_shows_message() {
        let (form, page, result) = submit(200, r#"{"ok": true, "message": "Table booked"}"#).await;
        assert_eq!(result, Ok("Table booked".to_string()));
        assert!(form.fields().iter().all(|f| f.value.is_empty()));
        let feedback = page.element(ids::RESERVATION_FEEDBACK).unwrap();
        assert_eq!(feedback.text, "Table booked");
        assert_eq!(feedback.tone, Some(Tone::Success));
    }

    #[tokio::test]
    async fn test_rejected_keeps_form_and_shows_error() {
        let (form, page, result) =
            submit(400, r#"{"ok": false, "message": "Time slot full"}"#).await;
        assert!(matches!(
            result,
            Err(SubmissionError::Rejected { status: 400, .. })
        ));
        assert_eq!(form, booking_form());
        let feedback = page.element(ids::RESERVATION_FEEDBACK).unwrap();
        assert_eq!(feedback.text, "Time slot full");
        assert_eq!(feedback.tone, Some(Tone::Error));
        assert_eq!(feedback.attribute("class"), Some("error"));
    }

    #[tokio::test]
    async fn test_success_without_message_uses_default() {
        let (_, page, _) = submit(200, r#"{"ok": 1}"#).await;
        assert_eq!(page.text(ids::RESERVATION_FEEDBACK), Some(DEFAULT_SUCCESS_MESSAGE));
    }

    #[tokio::test]
    async fn test_ok_status_with_falsy_ok_is_failure() {
        for body in [r#"{"ok": false}"#, r#"{"ok": 0}"#, r#"{"ok": ""}"#, r#"{}"#, "[]"] {
            let (form, page, result) = submit(200, body).await;
            assert!(result.is_err(), "{body} should fail");
            assert_eq!(form, booking_form());
            assert_eq!(page.text(ids::RESERVATION_FEEDBACK), Some(DEFAULT_FAILURE_MESSAGE));
        }
    }

    #[tokio::test]
    async fn test_numeric_message_is_shown() {
        let (_, page, result) = submit(400, r#"{"ok": false, "message": 42}"#).await;
        assert_eq!(
            result,
            Err(SubmissionError::Rejected {
                status: 400,
                message: "42".to_string(),
            })
        );
        assert_eq!(page.text(ids::RESERVATION_FEEDBACK), Some("42"));
    }

    #[tokio::test]
    async fn test_blank_or_structured_message_uses_default() {
        for body in [
            r#"{"ok": true, "message": ""}"#,
            r#"{"ok": true, "message": null}"#,
            r#"{"ok": true, "message": {"text": "Booked"}}"#,
        ] {
            let (_, page, _) = submit(200, body).await;
            assert_eq!(page.text(ids::RESERVATION_FEEDBACK), Some(DEFAULT_SUCCESS_MESSAGE));
        }
    }

    #[tokio::test]
    async fn test_error_status_with_ok_true_is_failure() {
        let (_, page, result) = submit(500, r#"{"ok": true, "message": "Saved"}"#).await;
        assert!(matches!(result, Err(SubmissionError::Rejected { status: 500, .. })));
        let feedback = page.element(ids::RESERVATION_FEEDBACK).unwrap();
        assert_eq!(feedback.text, "Saved");
        assert_eq!(feedback.tone, Some(Tone::Error));
    }

    #[tokio::test]
    async fn test_malformed_body_is_failure() {
        let (form, page, result) = submit(200, "<h1>Bad gateway</h1>").await;
        assert!(matches!(result, Err(SubmissionError::MalformedResponse(_))));
        assert_eq!(form, booking_form());
        let feedback = page.element(ids::RESERVATION_FEEDBACK).unwrap();
        assert!(feedback.text.starts_with("Invalid response from server"));
        assert_eq!(feedback.tone, Some(Tone::Error));
    }

    #[tokio::test]
    async fn test_transport_failure_shows_error() {
        let submitter = FormSubmitter::new(RecordingTransport {
            reply: Err(TransportError::Network("connection refused".to_string())),
            posted: Mutex::new(Vec::new()),
        });
        let mut page = default_page();
        let mut form = booking_form();
        let result = submitter
            .submit_form(&mut form, "/api/reservations", ids::RESERVATION_FEEDBACK, &mut page)
            .await;
        assert!(matches!(result, Err(SubmissionError::Transport(_))));
        assert_eq!(page.text(ids::RESERVATION_FEEDBACK), Some("connection refused"));
        assert_eq!(form, booking_form());
    }

    #[tokio::test]
    async fn test_posts_flat_payload_to_endpoint() {
        let transport = RecordingTransport::replying(200, r#"{"ok": true}"#);
        let submitter = FormSubmitter::new(transport);
        let mut page = default_page();
        let mut form = Form::new().field("dish", "Lamb").field("dish", "Oysters");
        submitter
            .submit_form(&mut form, "/api/orders", ids::ORDER_FEEDBACK, &mut page)
            .await
            .unwrap();
        let posted = submitter.transport.posted.lock().unwrap();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].0, "/api/orders");
        assert_eq!(posted[0].1, json!({ "dish": "Oysters" }));
    }

    #[test]
    fn test_begin_announces_submission() {
        let submitter = FormSubmitter::new(RecordingTransport::replying(200, "{}"));
        let mut page = default_page();
        let pending = submitter.begin(
            &booking_form(),
            "/api/reservations",
            ids::RESERVATION_FEEDBACK,
            &mut page,
        );
        let feedback = page.element(ids::RESERVATION_FEEDBACK).unwrap();
        assert_eq!(feedback.text, SUBMITTING_MESSAGE);
        assert_eq!(feedback.tone, Some(Tone::Success));
        assert_eq!(pending.payload.get("guests"), Some("4"));
        assert_eq!(pending.endpoint, "/api/reservations");
    }

    #[tokio::test]
    async fn test_overlapping_submissions_last_applied_wins() {
        let accepted = FormSubmitter::new(RecordingTransport::replying(
            200,
            r#"{"ok": true, "message": "Table booked"}"#,
        ));
        let rejected = FormSubmitter::new(RecordingTransport::replying(
            409,
            r#"{"ok": false, "message": "Already booked"}"#,
        ));
        let mut page = default_page();
        let mut form = booking_form();

        let endpoint = "/api/reservations";
        let first = accepted.begin(&form, endpoint, ids::RESERVATION_FEEDBACK, &mut page);
        let second = rejected.begin(&form, endpoint, ids::RESERVATION_FEEDBACK, &mut page);

        let (first, second) = tokio::join!(accepted.send(first), rejected.send(second));

        // The second submission resolves first; the first resolves last.
        second.apply(&mut form, &mut page).unwrap_err();
        assert_eq!(page.text(ids::RESERVATION_FEEDBACK), Some("Already booked"));
        first.apply(&mut form, &mut page).unwrap();
        let feedback = page.element(ids::RESERVATION_FEEDBACK).unwrap();
        assert_eq!(feedback.text, "Table booked");
        assert_eq!(feedback.tone, Some(Tone::Success));
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(2)));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
    }
}
