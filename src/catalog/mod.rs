//! Catalog explorer primitives
//!
//! The content pages of the site share one interaction pattern: pick a
//! category from a fixed taxonomy, list its items, optionally inspect one
//! item in a modal. Forms on the same pages share a second pattern: a
//! guarded async submission with a terminal, human-readable result.
//!
//! ```text
//! ┌──────────────────┐   select(id)   ┌───────────────────┐
//! │ TaxonomySelector │ ─────────────▶ │ current_items()   │
//! └──────────────────┘                └─────────┬─────────┘
//!                                               │ open(item)
//!                                               ▼
//!                                     ┌───────────────────┐
//!                                     │  DetailInspector  │
//!                                     └───────────────────┘
//!
//! GuardedSubmission:
//!   Idle ─submit─▶ Validating ─ok─▶ Submitting ─▶ Succeeded | Failed
//!                      └────invalid────────────────────────▶ Failed
//! ```
//!
//! Nothing in this module knows about terminals, HTTP or colors.

mod error;
pub mod inspector;
pub mod submission;
pub mod taxonomy;

pub use error::{CatalogError, EffectError, ValidationError};
pub use inspector::{ClickTarget, DetailInspector};
pub use submission::{
    FailureCause, FormSpec, GuardedSubmission, SubmissionEffect, SubmissionState, SubmitOutcome,
};
pub use taxonomy::{CatalogItem, Category, Taxonomy, TaxonomySelector};
