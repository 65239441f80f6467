//! Shared state for the HTTP front end

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use axum::http::HeaderMap;

use crate::catalog::{FormSpec, GuardedSubmission};
use crate::config::SubmissionConfig;
use crate::content::SchoolContent;
use crate::forms::{self, ContactSubmission, NewsletterSubmission};
use crate::theme::ThemeMode;

/// Request header naming the visitor a submission belongs to
pub const VISITOR_HEADER: &str = "x-visitor-id";

const ANONYMOUS: &str = "anonymous";
const MAX_VISITOR_ID_LEN: usize = 64;

/// Upper bound on tracked visitors per form. Settled entries are dropped
/// when it is reached; new visitors are turned away if none are settled.
pub(super) const MAX_VISITORS: usize = 1024;

#[derive(Clone)]
pub struct SiteState {
    pub(super) content: Arc<SchoolContent>,
    /// Mode served when a request doesn't ask for one
    pub(super) default_theme: ThemeMode,
    pub(super) newsletter: Arc<VisitorForms<NewsletterSubmission>>,
    pub(super) contact: Arc<VisitorForms<ContactSubmission>>,
}

impl SiteState {
    pub fn new(content: Arc<SchoolContent>, theme: ThemeMode, submission: SubmissionConfig) -> Self {
        let newsletter_config = submission.clone();
        let contact_config = submission;
        Self {
            content,
            default_theme: theme,
            newsletter: Arc::new(VisitorForms::new(move || {
                forms::newsletter(&newsletter_config)
            })),
            contact: Arc::new(VisitorForms::new(move || forms::contact(&contact_config))),
        }
    }
}

/// Visitor id from the request headers, `anonymous` when absent or unusable
pub(super) fn visitor_id(headers: &HeaderMap) -> String {
    headers
        .get(VISITOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty() && v.len() <= MAX_VISITOR_ID_LEN)
        .unwrap_or(ANONYMOUS)
        .to_string()
}

/// One submission handle per visitor for a single form
pub(super) struct VisitorForms<S> {
    make: Box<dyn Fn() -> S + Send + Sync>,
    handles: Mutex<HashMap<String, S>>,
}

impl<F: FormSpec> VisitorForms<GuardedSubmission<F>> {
    fn new(make: impl Fn() -> GuardedSubmission<F> + Send + Sync + 'static) -> Self {
        Self {
            make: Box::new(make),
            handles: Mutex::new(HashMap::new()),
        }
    }

    /// Handle for `visitor`, created on first use.
    ///
    /// `None` when the map is full of in-flight attempts.
    pub(super) fn handle(&self, visitor: &str) -> Option<GuardedSubmission<F>> {
        let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);

        if !handles.contains_key(visitor) && handles.len() >= MAX_VISITORS {
            let before = handles.len();
            handles.retain(|_, handle| handle.is_submitting());
            tracing::debug!(
                dropped = before - handles.len(),
                "pruned settled visitor submissions"
            );
            if handles.len() >= MAX_VISITORS {
                tracing::warn!(limit = MAX_VISITORS, "visitor submissions at capacity");
                return None;
            }
        }

        Some(
            handles
                .entry(visitor.to_string())
                .or_insert_with(|| (self.make)())
                .clone(),
        )
    }

    /// Existing handle for `visitor`, without creating one
    pub(super) fn get(&self, visitor: &str) -> Option<GuardedSubmission<F>> {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(visitor)
            .cloned()
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
