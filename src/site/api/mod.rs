// Endpoint handlers
//
// All endpoints return JSON. Content endpoints are read-only views over the
// immutable SchoolContent; form endpoints drive per-visitor submissions.

mod content;
mod forms;
mod theme;

use axum::http::Uri;

use super::ApiError;

pub use content::{get_catalog, get_page, get_site};
pub use forms::{get_form_status, post_contact, post_newsletter};
pub use theme::get_theme;

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
