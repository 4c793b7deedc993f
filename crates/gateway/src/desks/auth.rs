//! Mock sign-in and sign-out.

use castline_core::session::{validate_credentials, Credentials, User};
use castline_core::types::DbId;
use castline_events::{types, MarketEvent};
use castline_store::SessionRepo;
use tokio_util::sync::CancellationToken;

use crate::action::ActionTracker;
use crate::error::GatewayError;
use crate::gateway::Context;
use crate::trigger::forced_failure;

/// Id given to every signed-in mock user.
pub const MOCK_USER_ID: DbId = 1;

pub struct AuthDesk {
    context: Context,
    sign_ins: ActionTracker,
}

impl AuthDesk {
    pub fn new(context: &Context, cancel: &CancellationToken) -> Self {
        Self {
            context: context.clone(),
            sign_ins: context.tracker("sign_in", cancel),
        }
    }

    pub fn tracker(&self) -> &ActionTracker {
        &self.sign_ins
    }

    pub async fn current(&self) -> Result<Option<User>, GatewayError> {
        Ok(SessionRepo::current(&self.context.store).await?)
    }

    /// Validate credentials and store the mock user as current.
    pub async fn sign_in(&self, credentials: Credentials) -> Result<User, GatewayError> {
        let email = validate_credentials(&credentials)?;
        let failure = forced_failure("sign-in", &email);
        let store = self.context.store.clone();
        let bus = self.context.bus.clone();
        self.sign_ins
            .run(self.context.latency.sign_in, failure, move || async move {
                let user = User::for_email(MOCK_USER_ID, &email, credentials.role);
                SessionRepo::set_current(&store, &user).await?;
                tracing::info!(role = user.role.as_str(), "User signed in");
                bus.publish(
                    MarketEvent::new(types::SESSION_SIGNED_IN)
                        .with_source("user", user.id)
                        .with_payload(serde_json::json!({ "role": user.role.as_str() })),
                );
                Ok(user)
            })
            .await
    }

    /// Clear the current user. Returns `false` if nobody was signed in.
    pub async fn sign_out(&self) -> Result<bool, GatewayError> {
        let signed_out = SessionRepo::clear(&self.context.store).await?;
        if signed_out {
            tracing::info!("User signed out");
            self.context
                .bus
                .publish(MarketEvent::new(types::SESSION_SIGNED_OUT));
        }
        Ok(signed_out)
    }
}
