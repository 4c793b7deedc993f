//! Repository for the current-user key.

use castline_core::session::User;

use crate::error::StoreError;
use crate::keys;
use crate::store::Store;

pub struct SessionRepo;

impl SessionRepo {
    pub async fn current(store: &Store) -> Result<Option<User>, StoreError> {
        store.get(keys::CURRENT_USER).await
    }

    pub async fn set_current(store: &Store, user: &User) -> Result<(), StoreError> {
        store.set(keys::CURRENT_USER, user).await
    }

    /// Sign out. Returns `true` if a user was signed in.
    pub async fn clear(store: &Store) -> Result<bool, StoreError> {
        store.remove(keys::CURRENT_USER).await
    }
}
