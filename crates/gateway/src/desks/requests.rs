//! License, access, collaboration and intro request flows.

use std::marker::PhantomData;

use castline_core::error::CoreError;
use castline_core::lifecycle::Transition;
use castline_core::precheck::precheck;
use castline_core::requests::{Request, RequestDraft, RequestLifecycle};
use castline_core::types::RecordId;
use castline_events::{types, MarketEvent};
use castline_store::RequestRepo;
use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::action::{ActionState, ActionTracker};
use crate::error::GatewayError;
use crate::gateway::Context;
use crate::trigger::forced_failure;

/// Requests of one kind, selected by the status type `S`.
pub struct RequestDesk<S> {
    context: Context,
    submissions: ActionTracker,
    _status: PhantomData<S>,
}

impl<S: RequestLifecycle> RequestDesk<S> {
    pub fn new(context: &Context, cancel: &CancellationToken) -> Self {
        Self {
            context: context.clone(),
            submissions: context.tracker(S::KIND.as_str(), cancel),
            _status: PhantomData,
        }
    }

    pub fn tracker(&self) -> &ActionTracker {
        &self.submissions
    }

    pub fn state(&self) -> ActionState {
        self.submissions.state()
    }

    /// The caller's requests, newest first.
    pub async fn list(&self) -> Result<Vec<Request<S>>, GatewayError> {
        Ok(RequestRepo::list::<S>(&self.context.store).await?.into_vec())
    }

    pub async fn get(&self, id: RecordId) -> Result<Request<S>, GatewayError> {
        RequestRepo::get::<S>(&self.context.store, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Pre-check `draft` against the subject's policy, then submit it.
    ///
    /// A draft that fails pre-check is rejected immediately. A project name
    /// containing the failure trigger fails after the latency. In both cases
    /// the stored list is unchanged.
    pub async fn submit(&self, draft: RequestDraft) -> Result<Request<S>, GatewayError> {
        let policy = self.context.catalog.policy_for(draft.subject)?;
        precheck(S::KIND, &draft, policy).inspect_err(|e| {
            tracing::debug!(kind = S::KIND.as_str(), reason = %e, "Request rejected by pre-check");
        })?;

        let failure = forced_failure("your request", &draft.project_name);
        let store = self.context.store.clone();
        let bus = self.context.bus.clone();
        self.submissions
            .run(self.context.latency.request_submit, failure, move || async move {
                let request = Request::<S>::from_draft(draft, Utc::now());
                RequestRepo::insert(&store, request.clone()).await?;

                tracing::info!(
                    kind = S::KIND.as_str(),
                    request_id = %request.id,
                    project = %request.project_name,
                    "Request submitted"
                );
                bus.publish(
                    MarketEvent::new(types::REQUEST_SUBMITTED)
                        .with_source(S::KIND.as_str(), request.id)
                        .with_payload(serde_json::json!({
                            "project_name": request.project_name,
                            "subject": request.subject,
                            "status": request.status.as_str(),
                        })),
                );
                Ok(request)
            })
            .await
    }

    /// Move a request one status forward. Terminal requests are unchanged.
    pub async fn advance(&self, id: RecordId) -> Result<Transition<S>, GatewayError> {
        let transition = RequestRepo::advance::<S>(&self.context.store, id).await?;
        if let Transition::Advanced { from, to } = transition {
            tracing::info!(
                kind = S::KIND.as_str(),
                request_id = %id,
                from = from.as_str(),
                to = to.as_str(),
                "Request advanced"
            );
            self.context.bus.publish(
                MarketEvent::new(types::REQUEST_ADVANCED)
                    .with_source(S::KIND.as_str(), id)
                    .with_payload(serde_json::json!({
                        "from": from.as_str(),
                        "to": to.as_str(),
                    })),
            );
        }
        Ok(transition)
    }

    /// Remove a request. Withdrawing an absent request returns `None`.
    pub async fn withdraw(&self, id: RecordId) -> Result<Option<Request<S>>, GatewayError> {
        let removed = RequestRepo::withdraw::<S>(&self.context.store, id).await?;
        if removed.is_some() {
            tracing::info!(kind = S::KIND.as_str(), request_id = %id, "Request withdrawn");
            self.context.bus.publish(
                MarketEvent::new(types::REQUEST_WITHDRAWN).with_source(S::KIND.as_str(), id),
            );
        }
        Ok(removed)
    }
}

fn not_found(id: RecordId) -> GatewayError {
    CoreError::RecordNotFound {
        entity: "request",
        id,
    }
    .into()
}
