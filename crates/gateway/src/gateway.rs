//! The assembled gateway: shared context plus one desk per flow.

use std::sync::Arc;

use castline_core::catalog::Catalog;
use castline_core::requests::{
    AccessStatus, CollaborationStatus, IntroStatus, LicenseStatus, RequestLifecycle,
};
use castline_events::EventBus;
use castline_store::Store;
use tokio_util::sync::CancellationToken;

use crate::action::{ActionState, ActionTracker};
use crate::desks::{
    AuthDesk, CastingDesk, ChatDesk, ContractDesk, OnboardingDesk, RequestDesk, TokenDesk,
    VaultDesk,
};
use crate::latency::LatencyProfile;

/// Dependencies shared by every desk. Injected explicitly, never global.
#[derive(Clone)]
pub struct Context {
    pub store: Store,
    pub bus: Arc<EventBus>,
    pub catalog: Arc<Catalog>,
    pub latency: LatencyProfile,
}

impl Context {
    pub fn new(
        store: Store,
        bus: Arc<EventBus>,
        catalog: Arc<Catalog>,
        latency: LatencyProfile,
    ) -> Self {
        Self {
            store,
            bus,
            catalog,
            latency,
        }
    }

    pub(crate) fn tracker(&self, name: &'static str, cancel: &CancellationToken) -> ActionTracker {
        ActionTracker::new(name, self.latency.success_dismiss, cancel.child_token())
    }
}

pub struct Gateway {
    pub licenses: RequestDesk<LicenseStatus>,
    pub access: RequestDesk<AccessStatus>,
    pub collaborations: RequestDesk<CollaborationStatus>,
    pub intros: RequestDesk<IntroStatus>,
    pub tokens: TokenDesk,
    pub auth: AuthDesk,
    pub casting: CastingDesk,
    pub chat: ChatDesk,
    pub vault: VaultDesk,
    pub onboarding: OnboardingDesk,
    pub contracts: ContractDesk,
    context: Context,
    cancel: CancellationToken,
}

impl Gateway {
    pub fn new(context: Context) -> Self {
        let cancel = CancellationToken::new();
        Self {
            licenses: RequestDesk::new(&context, &cancel),
            access: RequestDesk::new(&context, &cancel),
            collaborations: RequestDesk::new(&context, &cancel),
            intros: RequestDesk::new(&context, &cancel),
            tokens: TokenDesk::new(&context, &cancel),
            auth: AuthDesk::new(&context, &cancel),
            casting: CastingDesk::new(&context, &cancel),
            chat: ChatDesk::new(&context, &cancel),
            vault: VaultDesk::new(&context, &cancel),
            onboarding: OnboardingDesk::new(&context, &cancel),
            contracts: ContractDesk::new(&context, &cancel),
            context,
            cancel,
        }
    }

    pub fn requests<S: RequestDeskKind>(&self) -> &RequestDesk<S> {
        S::desk(self)
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    fn trackers(&self) -> [&ActionTracker; 11] {
        [
            self.licenses.tracker(),
            self.access.tracker(),
            self.collaborations.tracker(),
            self.intros.tracker(),
            self.tokens.tracker(),
            self.auth.tracker(),
            self.casting.tracker(),
            self.chat.tracker(),
            self.vault.tracker(),
            self.onboarding.tracker(),
            self.contracts.tracker(),
        ]
    }

    /// Current state of every tracked action, keyed by action name.
    pub fn action_states(&self) -> Vec<(&'static str, ActionState)> {
        self.trackers()
            .into_iter()
            .map(|t| (t.name(), t.state()))
            .collect()
    }

    /// Look up an action tracker by name.
    pub fn tracker(&self, name: &str) -> Option<&ActionTracker> {
        self.trackers().into_iter().find(|t| t.name() == name)
    }

    /// Cancel every pending timer (success dismissals, chat auto-replies).
    pub fn teardown(&self) {
        tracing::info!("Gateway teardown");
        self.cancel.cancel();
    }
}

/// Selects the [`RequestDesk`] of a request kind by its status type.
pub trait RequestDeskKind: RequestLifecycle {
    fn desk(gateway: &Gateway) -> &RequestDesk<Self>;
}

impl RequestDeskKind for LicenseStatus {
    fn desk(gateway: &Gateway) -> &RequestDesk<Self> {
        &gateway.licenses
    }
}

impl RequestDeskKind for AccessStatus {
    fn desk(gateway: &Gateway) -> &RequestDesk<Self> {
        &gateway.access
    }
}

impl RequestDeskKind for CollaborationStatus {
    fn desk(gateway: &Gateway) -> &RequestDesk<Self> {
        &gateway.collaborations
    }
}

impl RequestDeskKind for IntroStatus {
    fn desk(gateway: &Gateway) -> &RequestDesk<Self> {
        &gateway.intros
    }
}

impl Drop for Gateway {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
