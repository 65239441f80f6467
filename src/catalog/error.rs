//! Error types for the catalog primitives

use thiserror::Error;

/// A taxonomy that cannot back a selector.
///
/// Raised at construction time only. A page holding one of these must not
/// render its explorer at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("taxonomy has no categories")]
    EmptyTaxonomy,

    #[error("duplicate category id '{0}'")]
    DuplicateCategory(String),

    #[error("duplicate item id '{item}' in category '{category}'")]
    DuplicateItem { category: String, item: String },

    #[error("default category '{0}' is not in the taxonomy")]
    UnknownDefault(String),
}

/// Local input rejection. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure reported by an injected submission effect.
///
/// The text is for logs; users only ever see the form's generic failure
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct EffectError(pub String);

impl EffectError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}
