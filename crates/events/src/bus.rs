//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is shared via `Arc<EventBus>` between the gateway desks and
//! any subscribers.

use castline_core::types::Timestamp;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// MarketEvent
// ---------------------------------------------------------------------------

/// Something that happened in the marketplace client.
///
/// Built with [`MarketEvent::new`] and the `with_*` builder methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketEvent {
    /// Dot-separated event name, see [`crate::types`].
    pub event_type: String,

    /// Source entity kind, e.g. `"license"` or `"vault_asset"`.
    pub source_entity_type: Option<String>,

    /// Source entity id. Catalog ids are numeric and records are UUIDs,
    /// so the id is carried as text.
    pub source_entity_id: Option<String>,

    pub payload: serde_json::Value,

    pub timestamp: Timestamp,
}

impl MarketEvent {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            source_entity_type: None,
            source_entity_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    pub fn with_source(mut self, entity_type: impl Into<String>, entity_id: impl ToString) -> Self {
        self.source_entity_type = Some(entity_type.into());
        self.source_entity_id = Some(entity_id.to_string());
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out event bus.
///
/// ```rust
/// use castline_events::bus::{EventBus, MarketEvent};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
/// bus.publish(MarketEvent::new("request.submitted"));
/// assert_eq!(rx.try_recv().unwrap().event_type, "request.submitted");
/// ```
pub struct EventBus {
    sender: broadcast::Sender<MarketEvent>,
}

impl EventBus {
    /// Slow receivers observe `RecvError::Lagged` once `capacity` events
    /// are buffered.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish to all current subscribers. Dropped if there are none.
    pub fn publish(&self, event: MarketEvent) {
        tracing::trace!(event_type = %event.event_type, "Publishing event");
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MarketEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscriber_receives_enriched_event() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(
            MarketEvent::new("request.submitted")
                .with_source("license", 42)
                .with_payload(serde_json::json!({"project_name": "Tidewater"})),
        );

        let received = rx.recv().await.unwrap();
        assert_eq!(received.event_type, "request.submitted");
        assert_eq!(received.source_entity_type.as_deref(), Some("license"));
        assert_eq!(received.source_entity_id.as_deref(), Some("42"));
        assert_eq!(received.payload["project_name"], "Tidewater");
    }

    #[tokio::test]
    async fn every_subscriber_gets_a_copy() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();
        bus.publish(MarketEvent::new("vault.asset_uploaded"));
        assert_eq!(rx1.recv().await.unwrap().event_type, "vault.asset_uploaded");
        assert_eq!(rx2.recv().await.unwrap().event_type, "vault.asset_uploaded");
    }

    #[test]
    fn publish_without_subscribers_is_dropped() {
        let bus = EventBus::default();
        bus.publish(MarketEvent::new("orphan"));
    }
}
