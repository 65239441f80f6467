// Site forms - newsletter box and admissions contact form
//
// Each form is a FormSpec (validation rules plus user-facing copy) that the
// front ends wrap in a GuardedSubmission. The only effect wired today is
// SimulatedEffect: the site has no backend, so "sending" is a delay that
// can be configured to fail for demos and tests.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::{
    EffectError, FormSpec, GuardedSubmission, SubmissionEffect, ValidationError,
};
use crate::config::SubmissionConfig;

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MISSING_FIELDS: &str = "Please fill in all required fields.";
pub const SUBSCRIBED: &str = "Thank you for subscribing!";
pub const MESSAGE_SENT: &str = "Thank you for your message! We will get back to you soon.";
pub const TRY_AGAIN: &str = "Something went wrong. Please try again.";

/// Upper bound on the free-text message, in characters
const MAX_MESSAGE_LEN: usize = 2000;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Loose shape check: something@something.tld, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

// ─────────────────────────────────────────────────────────────────────────────
// Newsletter
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterInput {
    pub email: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NewsletterForm;

impl FormSpec for NewsletterForm {
    type Input = NewsletterInput;

    fn name(&self) -> &'static str {
        "newsletter"
    }

    fn validate(&self, input: &NewsletterInput) -> Result<(), ValidationError> {
        if is_valid_email(&input.email) {
            Ok(())
        } else {
            Err(ValidationError::new(INVALID_EMAIL))
        }
    }

    fn success_message(&self) -> &str {
        SUBSCRIBED
    }

    fn failure_message(&self) -> &str {
        TRY_AGAIN
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Admissions contact
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactForm;

impl FormSpec for ContactForm {
    type Input = ContactInput;

    fn name(&self) -> &'static str {
        "contact"
    }

    fn validate(&self, input: &ContactInput) -> Result<(), ValidationError> {
        if input.name.trim().is_empty()
            || input.email.trim().is_empty()
            || input.message.trim().is_empty()
        {
            return Err(ValidationError::new(MISSING_FIELDS));
        }
        if !is_valid_email(&input.email) {
            return Err(ValidationError::new(INVALID_EMAIL));
        }
        if input.message.chars().count() > MAX_MESSAGE_LEN {
            return Err(ValidationError::new(format!(
                "Please keep your message under {} characters.",
                MAX_MESSAGE_LEN
            )));
        }
        Ok(())
    }

    fn success_message(&self) -> &str {
        MESSAGE_SENT
    }

    fn failure_message(&self) -> &str {
        TRY_AGAIN
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Effects
// ─────────────────────────────────────────────────────────────────────────────

/// Stand-in for a network call: waits, then succeeds (or fails on request)
#[derive(Debug, Clone)]
pub struct SimulatedEffect {
    pub delay: Duration,
    pub fail: bool,
}

impl SimulatedEffect {
    pub fn from_config(config: &SubmissionConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.delay_ms),
            fail: config.simulate_failure,
        }
    }
}

#[async_trait]
impl<I: Send + Sync> SubmissionEffect<I> for SimulatedEffect {
    async fn perform(&self, _input: &I) -> Result<(), EffectError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            Err(EffectError::new("simulated network failure"))
        } else {
            Ok(())
        }
    }
}

pub type NewsletterSubmission = GuardedSubmission<NewsletterForm>;
pub type ContactSubmission = GuardedSubmission<ContactForm>;

/// Newsletter submission backed by the configured simulated effect
pub fn newsletter(config: &SubmissionConfig) -> NewsletterSubmission {
    GuardedSubmission::new(NewsletterForm, Arc::new(SimulatedEffect::from_config(config)))
}

/// Contact submission backed by the configured simulated effect
pub fn contact(config: &SubmissionConfig) -> ContactSubmission {
    GuardedSubmission::new(ContactForm, Arc::new(SimulatedEffect::from_config(config)))
}
