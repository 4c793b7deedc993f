//! Castline marketplace event bus.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`MarketEvent`]: the domain event envelope published by the gateway.
//! - [`EventJournal`]: background subscriber that records every event in
//!   the activity journal of the store.

pub mod bus;
pub mod journal;
pub mod types;

pub use bus::{EventBus, MarketEvent};
pub use journal::EventJournal;
