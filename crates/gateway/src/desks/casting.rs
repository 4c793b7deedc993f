//! Casting-call applications.

use castline_core::catalog::CastingCall;
use castline_core::error::CoreError;
use castline_core::types::DbId;
use castline_events::{types, MarketEvent};
use castline_store::CastingRepo;
use tokio_util::sync::CancellationToken;

use crate::action::ActionTracker;
use crate::error::GatewayError;
use crate::gateway::Context;

pub struct CastingDesk {
    context: Context,
    applications: ActionTracker,
}

impl CastingDesk {
    pub fn new(context: &Context, cancel: &CancellationToken) -> Self {
        Self {
            context: context.clone(),
            applications: context.tracker("casting_application", cancel),
        }
    }

    pub fn tracker(&self) -> &ActionTracker {
        &self.applications
    }

    /// Every casting call with its `applied` flag.
    pub async fn list(&self) -> Result<Vec<CastingCall>, GatewayError> {
        Ok(CastingRepo::overlay(&self.context.store, &self.context.catalog.casting_calls).await?)
    }

    pub async fn get(&self, id: DbId) -> Result<CastingCall, GatewayError> {
        let call = self.context.catalog.casting_call(id)?;
        let mut calls =
            CastingRepo::overlay(&self.context.store, std::slice::from_ref(call)).await?;
        calls.pop().ok_or_else(|| {
            CoreError::Internal(format!("casting call {id} vanished during overlay")).into()
        })
    }

    /// Apply to a casting call. Applying twice is a conflict.
    pub async fn apply(&self, id: DbId) -> Result<CastingCall, GatewayError> {
        let mut call = self.get(id).await?;
        if call.applied {
            return Err(CoreError::Conflict(format!("Already applied to casting call {id}")).into());
        }

        let store = self.context.store.clone();
        let bus = self.context.bus.clone();
        self.applications
            .run(self.context.latency.casting_application, None, move || async move {
                CastingRepo::set_applied(&store, id, true).await?;
                call.applied = true;
                tracing::info!(casting_call_id = id, "Applied to casting call");
                bus.publish(
                    MarketEvent::new(types::CASTING_APPLIED)
                        .with_source("casting_call", id)
                        .with_payload(serde_json::json!({ "title": call.title })),
                );
                Ok(call)
            })
            .await
    }

    /// Withdraw an application. Returns `false` if there was none.
    pub async fn withdraw(&self, id: DbId) -> Result<bool, GatewayError> {
        self.context.catalog.casting_call(id)?;
        let changed = CastingRepo::set_applied(&self.context.store, id, false).await?;
        if changed {
            tracing::info!(casting_call_id = id, "Casting application withdrawn");
            self.context.bus.publish(
                MarketEvent::new(types::CASTING_WITHDRAWN).with_source("casting_call", id),
            );
        }
        Ok(changed)
    }
}
