//! Activity journal subscriber.
//!
//! [`EventJournal`] writes every [`MarketEvent`] it receives into the
//! store's activity journal. It stops when the bus is dropped or the
//! cancellation token fires.

use castline_store::{ActivityEntry, ActivityRepo, Store};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::bus::MarketEvent;

pub struct EventJournal;

impl EventJournal {
    pub async fn run(
        store: Store,
        mut receiver: broadcast::Receiver<MarketEvent>,
        cancel: CancellationToken,
    ) {
        tracing::info!("Event journal started");
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Event journal cancelled");
                    break;
                }
                received = receiver.recv() => match received {
                    Ok(event) => {
                        let event_type = event.event_type.clone();
                        if let Err(e) = ActivityRepo::record(&store, Self::entry(event)).await {
                            tracing::error!(error = %e, %event_type, "Failed to journal event");
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(
                            skipped = n,
                            "Event journal lagged, some events were not recorded"
                        );
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::info!("Event bus closed, journal shutting down");
                        break;
                    }
                }
            }
        }
    }

    fn entry(event: MarketEvent) -> ActivityEntry {
        ActivityEntry {
            event_type: event.event_type,
            source_entity_type: event.source_entity_type,
            source_entity_id: event.source_entity_id,
            payload: event.payload,
            timestamp: event.timestamp,
        }
    }
}
