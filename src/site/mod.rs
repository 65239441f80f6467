// HTTP front end - serves the school content and forms as JSON
//
// Web clients get the same explorer semantics as the terminal: a catalog
// request runs a TaxonomySelector and a DetailInspector per call, and form
// posts go through the same GuardedSubmission, one per (form, visitor).
//
// Security: binds to 127.0.0.1 by default (localhost only).

mod api;
mod error;
mod server;
mod state;

#[cfg(test)]
mod tests;

use axum::{
    routing::{get, post},
    Router,
};

pub use error::ApiError;
pub use server::start_server;
pub use state::{SiteState, VISITOR_HEADER};

/// Build the router over a prepared state
pub fn router(state: SiteState) -> Router {
    Router::new()
        // Content
        .route("/api/site", get(api::get_site))
        .route("/api/pages/:id", get(api::get_page))
        .route("/api/catalogs/:id", get(api::get_catalog))
        // Presentation
        .route("/api/theme", get(api::get_theme))
        // Forms
        .route("/api/newsletter", post(api::post_newsletter))
        .route("/api/contact", post(api::post_contact))
        .route("/api/forms/:form/status", get(api::get_form_status))
        .fallback(api::not_found)
        .with_state(state)
}
