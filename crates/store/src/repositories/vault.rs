//! Repository for vault assets.

use castline_core::types::RecordId;
use castline_core::vault::VaultAsset;

use crate::error::StoreError;
use crate::keys;
use crate::store::Store;

pub struct VaultRepo;

impl VaultRepo {
    /// All assets in upload order.
    pub async fn list(store: &Store) -> Result<Vec<VaultAsset>, StoreError> {
        store.get_or_default(keys::VAULT_ASSETS).await
    }

    /// Append an asset to the list.
    pub async fn add(store: &Store, asset: VaultAsset) -> Result<(), StoreError> {
        store
            .update(keys::VAULT_ASSETS, |assets: &mut Vec<VaultAsset>| {
                assets.push(asset);
                Ok(())
            })
            .await
    }

    /// Delete an asset. Returns `false` if it was not present.
    pub async fn delete(store: &Store, id: RecordId) -> Result<bool, StoreError> {
        store
            .update(keys::VAULT_ASSETS, |assets: &mut Vec<VaultAsset>| {
                let before = assets.len();
                assets.retain(|a| a.id != id);
                Ok(assets.len() != before)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use castline_core::vault::{AssetKind, AssetUpload};
    use chrono::Utc;

    use super::*;

    fn asset(name: &str) -> VaultAsset {
        VaultAsset::from_upload(
            AssetUpload {
                name: name.into(),
                kind: AssetKind::Headshot,
                size_bytes: 2048,
                protected: false,
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn add_appends_in_order() {
        let store = Store::in_memory();
        let a = asset("a.png");
        let b = asset("b.png");
        VaultRepo::add(&store, a.clone()).await.unwrap();
        VaultRepo::add(&store, b.clone()).await.unwrap();
        assert_eq!(VaultRepo::list(&store).await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = Store::in_memory();
        let a = asset("a.png");
        VaultRepo::add(&store, a.clone()).await.unwrap();
        assert!(VaultRepo::delete(&store, a.id).await.unwrap());
        assert!(!VaultRepo::delete(&store, a.id).await.unwrap());
        assert!(VaultRepo::list(&store).await.unwrap().is_empty());
    }
}
