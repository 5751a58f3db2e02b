use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use super::draft::EnquiryDraft;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The intake endpoint answered with a non-success status.
    #[error("intake endpoint rejected the enquiry with status {status}")]
    Rejected { status: u16 },
    /// The request never completed (offline, DNS, refused connection...).
    #[error("network error: {0}")]
    Network(String),
}

// Formspree's error body. Only read for the log line.
#[derive(Debug, Deserialize)]
struct IntakeErrorBody {
    #[serde(default)]
    errors: Vec<IntakeErrorItem>,
}

#[derive(Debug, Deserialize)]
struct IntakeErrorItem {
    message: String,
}

pub(crate) fn rejection_reason(body: &str) -> Option<String> {
    let parsed: IntakeErrorBody = serde_json::from_str(body).ok()?;
    if parsed.errors.is_empty() {
        return None;
    }
    Some(
        parsed
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; "),
    )
}

/// Posts the draft to the intake endpoint. Success is decided by the status
/// class alone.
pub async fn submit_enquiry(endpoint: &str, draft: &EnquiryDraft) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(draft.to_form_body())
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        info!("Enquiry accepted with status {}", response.status());
        return Ok(());
    }

    let status = response.status();
    match response.text().await.ok().as_deref().and_then(rejection_reason) {
        Some(reason) => warn!("Enquiry rejected with status {}: {}", status, reason),
        None => warn!("Enquiry rejected with status {}", status),
    }
    Err(SubmitError::Rejected { status })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_formspree_error_messages() {
        let body = r#"{"error":"Validation errors","errors":[{"code":"TYPE_EMAIL","field":"email","message":"should be an email"},{"message":"form not found"}]}"#;
        assert_eq!(
            rejection_reason(body).as_deref(),
            Some("should be an email; form not found")
        );
    }

    #[test]
    fn ignores_unparseable_or_empty_bodies() {
        assert_eq!(rejection_reason("<html>502</html>"), None);
        assert_eq!(rejection_reason(r#"{"errors":[]}"#), None);
        assert_eq!(rejection_reason(r#"{"ok":false}"#), None);
    }

    #[test]
    fn errors_render_for_logs() {
        assert_eq!(
            SubmitError::Rejected { status: 422 }.to_string(),
            "intake endpoint rejected the enquiry with status 422"
        );
        assert_eq!(
            SubmitError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
    }
}
