//! Repository for the locally-toggled `applied` flag on casting calls.

use std::collections::BTreeSet;

use castline_core::catalog::CastingCall;
use castline_core::types::DbId;

use crate::error::StoreError;
use crate::keys;
use crate::store::Store;

pub struct CastingRepo;

impl CastingRepo {
    pub async fn applied_ids(store: &Store) -> Result<BTreeSet<DbId>, StoreError> {
        store.get_or_default(keys::APPLIED_CASTING_CALLS).await
    }

    /// Set or clear the applied flag. Returns `true` if the flag changed.
    pub async fn set_applied(store: &Store, id: DbId, applied: bool) -> Result<bool, StoreError> {
        store
            .update(keys::APPLIED_CASTING_CALLS, |ids: &mut BTreeSet<DbId>| {
                Ok(if applied { ids.insert(id) } else { ids.remove(&id) })
            })
            .await
    }

    /// Copy casting calls with their applied flag filled in.
    pub async fn overlay(
        store: &Store,
        calls: &[CastingCall],
    ) -> Result<Vec<CastingCall>, StoreError> {
        let applied = Self::applied_ids(store).await?;
        Ok(calls
            .iter()
            .cloned()
            .map(|mut call| {
                call.applied = applied.contains(&call.id);
                call
            })
            .collect())
    }
}
