use std::sync::Arc;

use castline_gateway::Gateway;

use crate::config::ServerConfig;

/// Shared application state available to all handlers via axum's `State` extractor.
///
/// Must be `Clone` because axum clones it for each request. All inner
/// fields are behind `Arc` or are cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (read-only after startup).
    pub config: Arc<ServerConfig>,
    /// The simulated gateway and everything it owns (store, event bus, catalog).
    pub gateway: Arc<Gateway>,
}
