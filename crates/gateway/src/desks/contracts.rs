//! Simulated contract review.

use castline_core::contract::{self, ContractReview};
use castline_events::{types, MarketEvent};
use tokio_util::sync::CancellationToken;

use crate::action::ActionTracker;
use crate::error::GatewayError;
use crate::gateway::Context;
use crate::trigger::forced_failure;

pub struct ContractDesk {
    context: Context,
    reviews: ActionTracker,
}

impl ContractDesk {
    pub fn new(context: &Context, cancel: &CancellationToken) -> Self {
        Self {
            context: context.clone(),
            reviews: context.tracker("contract_review", cancel),
        }
    }

    pub fn tracker(&self) -> &ActionTracker {
        &self.reviews
    }

    pub async fn review(&self, text: &str) -> Result<ContractReview, GatewayError> {
        let review = contract::review(text)?;
        let failure = forced_failure("the contract review", text);
        let bus = self.context.bus.clone();
        self.reviews
            .run(self.context.latency.contract_review, failure, move || async move {
                tracing::info!(
                    verdict = ?review.verdict,
                    flags = review.flags.len(),
                    "Contract reviewed"
                );
                bus.publish(
                    MarketEvent::new(types::CONTRACT_REVIEWED).with_payload(serde_json::json!({
                        "verdict": review.verdict,
                        "flags": review.flags.len(),
                    })),
                );
                Ok(review)
            })
            .await
    }
}
