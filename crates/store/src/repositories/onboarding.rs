//! Repository for onboarding progress.

use castline_core::onboarding::OnboardingState;

use crate::error::StoreError;
use crate::keys;
use crate::store::Store;

pub struct OnboardingRepo;

impl OnboardingRepo {
    /// Current progress, starting at step 1 when nothing is stored.
    pub async fn load(store: &Store) -> Result<OnboardingState, StoreError> {
        store.get_or_default(keys::ONBOARDING_STEP).await
    }

    pub async fn save(store: &Store, state: &OnboardingState) -> Result<(), StoreError> {
        store.set(keys::ONBOARDING_STEP, state).await
    }

    pub async fn reset(store: &Store) -> Result<(), StoreError> {
        store.remove(keys::ONBOARDING_STEP).await.map(|_| ())
    }
}
