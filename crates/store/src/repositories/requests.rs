//! Repository for the per-kind request lists.

use castline_core::lifecycle::Transition;
use castline_core::requests::{Request, RequestLifecycle, RequestList};
use castline_core::types::RecordId;

use crate::error::StoreError;
use crate::keys;
use crate::store::Store;

pub struct RequestRepo;

impl RequestRepo {
    /// The stored list for status type `S`, newest first.
    pub async fn list<S: RequestLifecycle>(store: &Store) -> Result<RequestList<S>, StoreError> {
        store.get_or_default(keys::requests(S::KIND)).await
    }

    pub async fn get<S: RequestLifecycle>(
        store: &Store,
        id: RecordId,
    ) -> Result<Option<Request<S>>, StoreError> {
        Ok(Self::list::<S>(store).await?.get(id).cloned())
    }

    /// Insert a new request at the front of its list.
    pub async fn insert<S: RequestLifecycle>(
        store: &Store,
        request: Request<S>,
    ) -> Result<(), StoreError> {
        store
            .update(keys::requests(S::KIND), |list: &mut RequestList<S>| {
                list.push_front(request);
                Ok(())
            })
            .await
    }

    /// Advance a request one status. Terminal requests are left unchanged.
    pub async fn advance<S: RequestLifecycle>(
        store: &Store,
        id: RecordId,
    ) -> Result<Transition<S>, StoreError> {
        store
            .update(keys::requests(S::KIND), |list: &mut RequestList<S>| {
                list.advance(id).map_err(StoreError::from)
            })
            .await
    }

    /// Remove a request. Returns `None` if it was already gone.
    pub async fn withdraw<S: RequestLifecycle>(
        store: &Store,
        id: RecordId,
    ) -> Result<Option<Request<S>>, StoreError> {
        store
            .update(keys::requests(S::KIND), |list: &mut RequestList<S>| {
                Ok(list.withdraw(id))
            })
            .await
    }
}
