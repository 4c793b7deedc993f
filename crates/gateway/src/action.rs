//! Reusable async-action wrapper.
//!
//! An [`ActionTracker`] runs one simulated operation at a time:
//!
//! 1. `idle`/`success`/`error` -> `loading`. A submission while `loading` is
//!    rejected with [`GatewayError::Busy`].
//! 2. Wait out the latency.
//! 3. Forced failure -> `error` (the action is not applied). Otherwise run
//!    the action -> `success` or `error`.
//! 4. `success` falls back to `idle` after the dismiss delay.
//!
//! Cancelling the tracker's token stops pending dismiss timers. An action
//! that has started loading always runs to completion, even if the caller
//! stops waiting for it.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::error::GatewayError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionState {
    Idle,
    Loading,
    Success,
    Error { error: String },
}

impl ActionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

pub struct ActionTracker {
    name: &'static str,
    state: Arc<watch::Sender<ActionState>>,
    /// Bumped on every start so stale dismiss timers are ignored.
    epoch: Arc<AtomicU64>,
    dismiss_after: Duration,
    cancel: CancellationToken,
}

impl ActionTracker {
    pub fn new(name: &'static str, dismiss_after: Duration, cancel: CancellationToken) -> Self {
        let (state, _) = watch::channel(ActionState::Idle);
        Self {
            name,
            state: Arc::new(state),
            epoch: Arc::new(AtomicU64::new(0)),
            dismiss_after,
            cancel,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> ActionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ActionState> {
        self.state.subscribe()
    }

    /// Clear a `success` or `error` state. A loading action is left alone.
    pub fn reset(&self) {
        self.state.send_if_modified(|state| {
            if matches!(state, ActionState::Idle | ActionState::Loading) {
                return false;
            }
            *state = ActionState::Idle;
            true
        });
    }

    /// Stop pending dismiss timers.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    /// Run `action` after `latency`, or fail with `failure` instead.
    ///
    /// The latency and the action run on their own task, so dropping the
    /// returned future does not cancel a submission that is already loading.
    pub async fn run<T, F, Fut>(
        &self,
        latency: Duration,
        failure: Option<String>,
        action: F,
    ) -> Result<T, GatewayError>
    where
        T: Send + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, GatewayError>> + Send + 'static,
    {
        let started = self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = ActionState::Loading;
            true
        });
        if !started {
            tracing::debug!(action = self.name, "Duplicate submission rejected");
            return Err(GatewayError::Busy(self.name));
        }
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::debug!(
            action = self.name,
            latency_ms = latency.as_millis() as u64,
            "Action loading"
        );
        let finisher = Finisher {
            name: self.name,
            state: Arc::clone(&self.state),
            epoch: Arc::clone(&self.epoch),
            dismiss_after: self.dismiss_after,
            cancel: self.cancel.clone(),
        };
        let task = tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            let result = match failure {
                Some(message) => Err(GatewayError::Failed(message)),
                None => action().await,
            };
            finisher.finish(epoch, &result);
            result
        });

        match task.await {
            Ok(result) => result,
            Err(e) => {
                let error = GatewayError::Failed(format!("'{}' stopped unexpectedly", self.name));
                self.state.send_replace(ActionState::Error {
                    error: error.to_string(),
                });
                tracing::error!(action = self.name, error = %e, "Action task aborted");
                Err(error)
            }
        }
    }
}

/// Settles a finished action: records the outcome and schedules the
/// dismiss timer on success.
struct Finisher {
    name: &'static str,
    state: Arc<watch::Sender<ActionState>>,
    epoch: Arc<AtomicU64>,
    dismiss_after: Duration,
    cancel: CancellationToken,
}

impl Finisher {
    fn finish<T>(self, epoch: u64, result: &Result<T, GatewayError>) {
        match result {
            Ok(_) => {
                self.state.send_replace(ActionState::Success);
                tracing::debug!(action = self.name, "Action succeeded");
                self.schedule_dismiss(epoch);
            }
            Err(e) => {
                self.state.send_replace(ActionState::Error {
                    error: e.to_string(),
                });
                tracing::warn!(action = self.name, error = %e, "Action failed");
            }
        }
    }

    fn schedule_dismiss(self, epoch: u64) {
        tokio::spawn(async move {
            tokio::select! {
                _ = self.cancel.cancelled() => {}
                _ = tokio::time::sleep(self.dismiss_after) => {
                    if self.epoch.load(Ordering::SeqCst) == epoch {
                        self.state.send_if_modified(|s| {
                            if *s != ActionState::Success {
                                return false;
                            }
                            *s = ActionState::Idle;
                            true
                        });
                    }
                }
            }
        });
    }
}
