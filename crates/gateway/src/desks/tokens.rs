//! Usage-token authorisation for approved licenses.

use castline_core::error::CoreError;
use castline_core::requests::LicenseStatus;
use castline_core::types::RecordId;
use castline_core::usage_token::{self, UsageToken};
use castline_events::{types, MarketEvent};
use castline_store::RequestRepo;
use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::action::ActionTracker;
use crate::error::GatewayError;
use crate::gateway::Context;

pub struct TokenDesk {
    context: Context,
    authorizations: ActionTracker,
}

impl TokenDesk {
    pub fn new(context: &Context, cancel: &CancellationToken) -> Self {
        Self {
            context: context.clone(),
            authorizations: context.tracker("usage_token", cancel),
        }
    }

    pub fn tracker(&self) -> &ActionTracker {
        &self.authorizations
    }

    /// Authorise an approved license and hand out a mock token.
    pub async fn authorize(&self, request_id: RecordId) -> Result<UsageToken, GatewayError> {
        let request = RequestRepo::get::<LicenseStatus>(&self.context.store, request_id)
            .await?
            .ok_or(CoreError::RecordNotFound {
                entity: "request",
                id: request_id,
            })?;
        let token = usage_token::issue(&request, Utc::now())?;

        let bus = self.context.bus.clone();
        self.authorizations
            .run(self.context.latency.request_submit, None, move || async move {
                tracing::info!(request_id = %request_id, "Usage token issued");
                bus.publish(
                    MarketEvent::new(types::USAGE_TOKEN_ISSUED).with_source("license", request_id),
                );
                Ok(token)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use castline_core::catalog::SubjectRef;
    use castline_core::requests::{Request, RequestDraft};
    use castline_core::usage_token::is_well_formed;

    use super::*;
    use crate::desks::testing;

    async fn stored_license(context: &Context) -> RecordId {
        let request: Request<LicenseStatus> = Request::from_draft(
            RequestDraft {
                subject: SubjectRef::actor(3),
                requester: "Harbor Lane".into(),
                project_name: "Summer Spot".into(),
                note: "Two cuts".into(),
                terms: None,
            },
            Utc::now(),
        );
        let id = request.id;
        RequestRepo::insert(&context.store, request).await.unwrap();
        id
    }

    #[tokio::test(start_paused = true)]
    async fn approved_license_is_authorised() {
        let context = testing::context();
        let desk = TokenDesk::new(&context, &CancellationToken::new());
        let id = stored_license(&context).await;
        RequestRepo::advance::<LicenseStatus>(&context.store, id).await.unwrap();

        let token = desk.authorize(id).await.unwrap();
        assert_eq!(token.request_id, id);
        assert!(is_well_formed(&token.token));
    }

    #[tokio::test(start_paused = true)]
    async fn requested_license_is_refused() {
        let context = testing::context();
        let desk = TokenDesk::new(&context, &CancellationToken::new());
        let id = stored_license(&context).await;
        assert_matches!(
            desk.authorize(id).await,
            Err(GatewayError::Rejected(CoreError::Conflict(_)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_license_is_not_found() {
        let context = testing::context();
        let desk = TokenDesk::new(&context, &CancellationToken::new());
        assert_matches!(
            desk.authorize(RecordId::from_u128(1)).await,
            Err(GatewayError::Rejected(CoreError::RecordNotFound { .. }))
        );
    }
}
