//! Onboarding wizard flow.

use castline_core::onboarding::OnboardingState;
use castline_events::{types, MarketEvent};
use castline_store::OnboardingRepo;
use tokio_util::sync::CancellationToken;

use crate::action::ActionTracker;
use crate::error::GatewayError;
use crate::gateway::Context;

pub struct OnboardingDesk {
    context: Context,
    steps: ActionTracker,
}

impl OnboardingDesk {
    pub fn new(context: &Context, cancel: &CancellationToken) -> Self {
        Self {
            context: context.clone(),
            steps: context.tracker("onboarding_step", cancel),
        }
    }

    pub fn tracker(&self) -> &ActionTracker {
        &self.steps
    }

    pub async fn state(&self) -> Result<OnboardingState, GatewayError> {
        Ok(OnboardingRepo::load(&self.context.store).await?)
    }

    /// Validate `step_data` for the current step and move forward.
    ///
    /// Validation runs before the latency, so bad data is rejected at once
    /// and the stored step is unchanged.
    pub async fn advance(
        &self,
        step_data: serde_json::Value,
    ) -> Result<OnboardingState, GatewayError> {
        let mut next = self.state().await?;
        let from = next.step;
        next.advance(&step_data)?;

        let store = self.context.store.clone();
        let bus = self.context.bus.clone();
        self.steps
            .run(self.context.latency.onboarding_step, None, move || async move {
                OnboardingRepo::save(&store, &next).await?;
                tracing::info!(from, to = next.step, "Onboarding advanced");
                bus.publish(step_changed(from, next.step));
                Ok(next)
            })
            .await
    }

    /// Go back one step. Collected data is kept.
    pub async fn back(&self) -> Result<OnboardingState, GatewayError> {
        let mut state = self.state().await?;
        let from = state.step;
        state.back()?;
        OnboardingRepo::save(&self.context.store, &state).await?;
        self.context.bus.publish(step_changed(from, state.step));
        Ok(state)
    }

    pub async fn complete(&self) -> Result<OnboardingState, GatewayError> {
        let mut state = self.state().await?;
        state.complete()?;
        OnboardingRepo::save(&self.context.store, &state).await?;
        tracing::info!(role = ?state.role(), "Onboarding completed");
        self.context.bus.publish(
            MarketEvent::new(types::ONBOARDING_COMPLETED)
                .with_payload(serde_json::json!({ "role": state.role() })),
        );
        Ok(state)
    }

    /// Start over from the first step.
    pub async fn reset(&self) -> Result<OnboardingState, GatewayError> {
        OnboardingRepo::reset(&self.context.store).await?;
        Ok(OnboardingState::default())
    }
}

fn step_changed(from: u8, to: u8) -> MarketEvent {
    MarketEvent::new(types::ONBOARDING_STEP_CHANGED)
        .with_payload(serde_json::json!({ "from": from, "to": to }))
}
