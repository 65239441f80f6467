//! Guarded async submission
//!
//! Wraps one logical async action ("subscribe", "send message") so that at
//! most one attempt is in flight per instance. Admission happens eagerly
//! when `submit` is called, under the state lock, so a second call issued
//! before the first future is ever polled is still rejected.
//!
//! The effect runs exactly once per accepted call. Validation failures never
//! reach the effect. An accepted attempt always settles: if its future is
//! dropped or the effect panics, the state falls back to `Failed`.

use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde::Serialize;

use super::{EffectError, ValidationError};

/// Local rules and user-facing copy for one form
pub trait FormSpec: Send + Sync + 'static {
    type Input: Send + Sync + 'static;

    /// Short name used in logs ("newsletter", "contact")
    fn name(&self) -> &'static str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    fn success_message(&self) -> &str;

    /// Shown for any effect failure
    fn failure_message(&self) -> &str;
}

/// The injected side effect (network call, simulated delay, ...)
#[async_trait]
pub trait SubmissionEffect<I>: Send + Sync {
    async fn perform(&self, input: &I) -> Result<(), EffectError>;
}

/// Why a submission ended in `Failed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCause {
    /// Input rejected locally; the effect never ran
    Validation,
    /// The effect ran and failed
    Effect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded {
        message: String,
    },
    Failed {
        message: String,
        cause: FailureCause,
    },
}

impl SubmissionState {
    /// User-facing message for settled states
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionState::Succeeded { message } | SubmissionState::Failed { message, .. } => {
                Some(message)
            }
            _ => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded { .. } | SubmissionState::Failed { .. }
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded { .. } => "succeeded",
            SubmissionState::Failed { .. } => "failed",
        }
    }
}

/// Result of one `submit` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another attempt was already in flight; nothing happened
    Ignored,
    Succeeded(String),
    Failed { message: String, cause: FailureCause },
}

/// What admission decided, before any await point
enum Admission<F: FormSpec> {
    Busy,
    Invalid(String),
    Accepted(Settle<F>),
}

/// Owns the `Submitting` state of one accepted attempt until it settles
struct Settle<F: FormSpec> {
    form: Arc<F>,
    state: Arc<Mutex<SubmissionState>>,
    done: bool,
}

impl<F: FormSpec> Settle<F> {
    fn finish(mut self, next: SubmissionState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
        self.done = true;
    }
}

impl<F: FormSpec> Drop for Settle<F> {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        tracing::warn!(form = self.form.name(), "submission abandoned before settling");
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = SubmissionState::Failed {
            message: self.form.failure_message().to_string(),
            cause: FailureCause::Effect,
        };
    }
}

/// Cloneable handle; clones share one state machine
pub struct GuardedSubmission<F: FormSpec> {
    form: Arc<F>,
    effect: Arc<dyn SubmissionEffect<F::Input>>,
    state: Arc<Mutex<SubmissionState>>,
}

impl<F: FormSpec> Clone for GuardedSubmission<F> {
    fn clone(&self) -> Self {
        Self {
            form: self.form.clone(),
            effect: self.effect.clone(),
            state: self.state.clone(),
        }
    }
}

impl<F: FormSpec> fmt::Debug for GuardedSubmission<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardedSubmission")
            .field("form", &self.form.name())
            .field("state", &*self.lock())
            .finish()
    }
}

impl<F: FormSpec> GuardedSubmission<F> {
    pub fn new(form: F, effect: Arc<dyn SubmissionEffect<F::Input>>) -> Self {
        Self {
            form: Arc::new(form),
            effect,
            state: Arc::new(Mutex::new(SubmissionState::Idle)),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SubmissionState {
        self.lock().clone()
    }

    pub fn is_submitting(&self) -> bool {
        *self.lock() == SubmissionState::Submitting
    }

    /// Back to `Idle`, dropping any message.
    ///
    /// No-op while an attempt is in flight: the attempt keeps the guard and
    /// settles the state itself.
    pub fn reset(&self) {
        let mut state = self.lock();
        if *state == SubmissionState::Submitting {
            tracing::debug!(form = self.form.name(), "reset ignored: attempt in flight");
            return;
        }
        *state = SubmissionState::Idle;
    }

    /// Start an attempt.
    ///
    /// Admission (busy check, validation, transition to `Submitting`) runs
    /// now; the returned future only runs the effect and settles the state.
    /// The future is `'static` so callers may spawn it.
    pub fn submit(&self, input: F::Input) -> impl Future<Output = SubmitOutcome> + Send + 'static {
        let admission = self.admit(&input);

        let form = self.form.clone();
        let effect = self.effect.clone();

        async move {
            match admission {
                Admission::Busy => SubmitOutcome::Ignored,
                Admission::Invalid(message) => SubmitOutcome::Failed {
                    message,
                    cause: FailureCause::Validation,
                },
                Admission::Accepted(settle) => {
                    let result = effect.perform(&input).await;
                    let (next, outcome) = match result {
                        Ok(()) => {
                            let message = form.success_message().to_string();
                            tracing::info!(form = form.name(), "submission succeeded");
                            (
                                SubmissionState::Succeeded {
                                    message: message.clone(),
                                },
                                SubmitOutcome::Succeeded(message),
                            )
                        }
                        Err(e) => {
                            let message = form.failure_message().to_string();
                            tracing::warn!(form = form.name(), error = %e, "submission effect failed");
                            (
                                SubmissionState::Failed {
                                    message: message.clone(),
                                    cause: FailureCause::Effect,
                                },
                                SubmitOutcome::Failed {
                                    message,
                                    cause: FailureCause::Effect,
                                },
                            )
                        }
                    };
                    settle.finish(next);
                    outcome
                }
            }
        }
    }

    fn admit(&self, input: &F::Input) -> Admission<F> {
        let mut state = self.lock();

        if *state == SubmissionState::Submitting {
            tracing::debug!(
                form = self.form.name(),
                "submit ignored: attempt already in flight"
            );
            return Admission::Busy;
        }

        *state = SubmissionState::Validating;
        match self.form.validate(input) {
            Ok(()) => {
                *state = SubmissionState::Submitting;
                tracing::debug!(form = self.form.name(), "submission accepted");
                Admission::Accepted(Settle {
                    form: self.form.clone(),
                    state: self.state.clone(),
                    done: false,
                })
            }
            Err(e) => {
                tracing::debug!(form = self.form.name(), reason = %e, "submission rejected");
                *state = SubmissionState::Failed {
                    message: e.message.clone(),
                    cause: FailureCause::Validation,
                };
                Admission::Invalid(e.message)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, SubmissionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
