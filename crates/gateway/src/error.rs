use castline_core::error::CoreError;
use castline_core::precheck::PrecheckError;
use castline_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The action is already loading; duplicate submissions are rejected.
    #[error("'{0}' is already in progress")]
    Busy(&'static str),

    /// Synchronous validation failed; nothing was submitted.
    #[error(transparent)]
    Rejected(#[from] CoreError),

    /// Scripted transport failure after the simulated latency.
    #[error("{0}")]
    Failed(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<PrecheckError> for GatewayError {
    fn from(err: PrecheckError) -> Self {
        GatewayError::Rejected(err.into())
    }
}

/// Domain errors raised inside a store update surface as `Rejected`.
impl From<StoreError> for GatewayError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(core) => GatewayError::Rejected(core),
            other => GatewayError::Store(other),
        }
    }
}
