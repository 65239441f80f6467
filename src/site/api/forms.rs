// Form endpoints - newsletter and contact posts, per-visitor status

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::ApiError;
use crate::catalog::{FailureCause, FormSpec, GuardedSubmission, SubmissionState, SubmitOutcome};
use crate::forms::{ContactInput, NewsletterInput};
use crate::site::state::visitor_id;
use crate::site::SiteState;

const BUSY: &str = "A submission is already in progress.";
const AT_CAPACITY: &str = "Too many submissions in progress. Please try again shortly.";

/// Body of every form post response
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    /// succeeded, failed or busy
    pub status: &'static str,
    pub message: String,
}

/// Outcome mapped onto a status code
#[derive(Debug)]
pub struct SubmissionReply(SubmitOutcome);

impl IntoResponse for SubmissionReply {
    fn into_response(self) -> Response {
        let (code, status, message) = match self.0 {
            SubmitOutcome::Succeeded(message) => (StatusCode::OK, "succeeded", message),
            SubmitOutcome::Failed {
                message,
                cause: FailureCause::Validation,
            } => (StatusCode::UNPROCESSABLE_ENTITY, "failed", message),
            SubmitOutcome::Failed {
                message,
                cause: FailureCause::Effect,
            } => (StatusCode::BAD_GATEWAY, "failed", message),
            SubmitOutcome::Ignored => (StatusCode::CONFLICT, "busy", BUSY.to_string()),
        };

        (code, Json(SubmissionResponse { status, message })).into_response()
    }
}

/// Admit now, then run the effect on its own task.
///
/// The task settles the shared state even if the client hangs up mid-request.
async fn run<F: FormSpec>(
    handle: Option<GuardedSubmission<F>>,
    input: F::Input,
) -> Result<SubmissionReply, ApiError> {
    let handle = handle.ok_or_else(|| ApiError::Unavailable(AT_CAPACITY.to_string()))?;
    let attempt = handle.submit(input);
    tokio::spawn(attempt)
        .await
        .map(SubmissionReply)
        .map_err(|e| ApiError::Internal(format!("Submission task failed: {}", e)))
}

/// POST /api/newsletter - `{ "email": ... }`
pub async fn post_newsletter(
    State(state): State<SiteState>,
    headers: HeaderMap,
    Json(input): Json<NewsletterInput>,
) -> Result<SubmissionReply, ApiError> {
    let visitor = visitor_id(&headers);
    run(state.newsletter.handle(&visitor), input).await
}

/// POST /api/contact - `{ "name", "email", "phone"?, "message" }`
pub async fn post_contact(
    State(state): State<SiteState>,
    headers: HeaderMap,
    Json(input): Json<ContactInput>,
) -> Result<SubmissionReply, ApiError> {
    let visitor = visitor_id(&headers);
    run(state.contact.handle(&visitor), input).await
}

/// GET /api/forms/:form/status - Current submission state for the visitor
pub async fn get_form_status(
    State(state): State<SiteState>,
    Path(form): Path<String>,
    headers: HeaderMap,
) -> Result<Json<SubmissionState>, ApiError> {
    let visitor = visitor_id(&headers);

    let status = match form.as_str() {
        "newsletter" => state.newsletter.get(&visitor).map(|h| h.state()),
        "contact" => state.contact.get(&visitor).map(|h| h.state()),
        _ => return Err(ApiError::NotFound(format!("Unknown form '{}'", form))),
    };

    Ok(Json(status.unwrap_or_default()))
}
