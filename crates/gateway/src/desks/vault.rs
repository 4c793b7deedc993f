//! Vault uploads and deletions.

use castline_core::types::RecordId;
use castline_core::vault::{validate_upload, AssetUpload, VaultAsset};
use castline_events::{types, MarketEvent};
use castline_store::VaultRepo;
use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::action::ActionTracker;
use crate::error::GatewayError;
use crate::gateway::Context;
use crate::trigger::forced_failure;

pub struct VaultDesk {
    context: Context,
    uploads: ActionTracker,
}

impl VaultDesk {
    pub fn new(context: &Context, cancel: &CancellationToken) -> Self {
        Self {
            context: context.clone(),
            uploads: context.tracker("vault_upload", cancel),
        }
    }

    pub fn tracker(&self) -> &ActionTracker {
        &self.uploads
    }

    pub async fn list(&self) -> Result<Vec<VaultAsset>, GatewayError> {
        Ok(VaultRepo::list(&self.context.store).await?)
    }

    /// Validate and upload an asset. The name is checked for the failure
    /// trigger.
    pub async fn upload(&self, upload: AssetUpload) -> Result<VaultAsset, GatewayError> {
        validate_upload(&upload)?;
        let failure = forced_failure("the upload", &upload.name);
        let store = self.context.store.clone();
        let bus = self.context.bus.clone();
        self.uploads
            .run(self.context.latency.vault_upload, failure, move || async move {
                let asset = VaultAsset::from_upload(upload, Utc::now());
                VaultRepo::add(&store, asset.clone()).await?;
                tracing::info!(
                    asset_id = %asset.id,
                    size_bytes = asset.size_bytes,
                    "Vault asset uploaded"
                );
                bus.publish(
                    MarketEvent::new(types::VAULT_ASSET_UPLOADED)
                        .with_source("vault_asset", asset.id)
                        .with_payload(serde_json::json!({
                            "name": asset.name,
                            "kind": asset.kind,
                        })),
                );
                Ok(asset)
            })
            .await
    }

    /// Delete an asset. Returns `false` if it was already gone.
    pub async fn delete(&self, id: RecordId) -> Result<bool, GatewayError> {
        let deleted = VaultRepo::delete(&self.context.store, id).await?;
        if deleted {
            tracing::info!(asset_id = %id, "Vault asset deleted");
            self.context.bus.publish(
                MarketEvent::new(types::VAULT_ASSET_DELETED).with_source("vault_asset", id),
            );
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use castline_core::error::CoreError;
    use castline_core::vault::AssetKind;

    use super::*;
    use crate::desks::testing;

    fn desk() -> VaultDesk {
        VaultDesk::new(&testing::context(), &CancellationToken::new())
    }

    fn upload(name: &str, size_bytes: u64) -> AssetUpload {
        AssetUpload {
            name: name.into(),
            kind: AssetKind::Voice,
            size_bytes,
            protected: true,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn upload_then_delete() {
        let desk = desk();
        let asset = desk.upload(upload("reel.wav", 4_096)).await.unwrap();
        assert_eq!(desk.list().await.unwrap(), vec![asset.clone()]);
        assert!(desk.delete(asset.id).await.unwrap());
        assert!(!desk.delete(asset.id).await.unwrap());
        assert!(desk.list().await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_file_is_rejected_up_front() {
        assert_matches!(
            desk().upload(upload("reel.wav", 0)).await,
            Err(GatewayError::Rejected(CoreError::Validation(_)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn trigger_in_name_fails_after_latency() {
        let desk = desk();
        let started = tokio::time::Instant::now();
        assert_matches!(
            desk.upload(upload("error-take.wav", 10)).await,
            Err(GatewayError::Failed(_))
        );
        assert!(started.elapsed() >= desk.context.latency.vault_upload);
        assert!(desk.list().await.unwrap().is_empty());
    }
}
