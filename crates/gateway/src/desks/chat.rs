//! Realtime chat simulation.
//!
//! Conversations live in memory for the lifetime of the gateway. Every sent
//! message schedules one canned auto-reply from the participant; pending
//! auto-replies are dropped on teardown.

use std::sync::Arc;

use castline_core::catalog::fixtures;
use castline_core::catalog::SubjectRef;
use castline_core::messaging::{Attachment, Conversation, Inbox, Message, Participant, AUTO_REPLIES};
use castline_core::types::DbId;
use castline_events::{types, EventBus, MarketEvent};
use chrono::Utc;
use rand::seq::IndexedRandom;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::action::ActionTracker;
use crate::error::GatewayError;
use crate::gateway::Context;

pub struct ChatDesk {
    context: Context,
    inbox: Arc<Mutex<Inbox>>,
    connections: ActionTracker,
    cancel: CancellationToken,
}

impl ChatDesk {
    /// Start with the seed inbox.
    pub fn new(context: &Context, cancel: &CancellationToken) -> Self {
        let inbox = fixtures::seed_inbox(&context.catalog, Utc::now());
        Self::with_inbox(context, cancel, inbox)
    }

    pub fn with_inbox(context: &Context, cancel: &CancellationToken, inbox: Inbox) -> Self {
        Self {
            context: context.clone(),
            inbox: Arc::new(Mutex::new(inbox)),
            connections: context.tracker("chat_connect", cancel),
            cancel: cancel.child_token(),
        }
    }

    pub fn tracker(&self) -> &ActionTracker {
        &self.connections
    }

    pub async fn list(&self, include_archived: bool) -> Vec<Conversation> {
        self.inbox
            .lock()
            .await
            .list(include_archived)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn conversation(&self, id: DbId) -> Result<Conversation, GatewayError> {
        Ok(self.inbox.lock().await.conversation(id)?.clone())
    }

    pub async fn messages(&self, conversation_id: DbId) -> Result<Vec<Message>, GatewayError> {
        Ok(self.inbox.lock().await.messages(conversation_id)?.to_vec())
    }

    pub async fn unread_total(&self) -> u32 {
        self.inbox.lock().await.unread_total()
    }

    /// Open (or reuse) a conversation with a catalog subject.
    pub async fn start(&self, subject: SubjectRef) -> Result<(Conversation, bool), GatewayError> {
        let name = self.context.catalog.subject_name(subject)?.to_string();
        let mut inbox = self.inbox.lock().await;
        let (id, created) = inbox.start_conversation(Participant { subject, name }, Utc::now());
        if created {
            tracing::info!(
                conversation_id = id,
                subject = subject.kind.as_str(),
                "Conversation started"
            );
        }
        Ok((inbox.conversation(id)?.clone(), created))
    }

    /// Simulate connecting to the participant; marks them online.
    pub async fn connect(&self, conversation_id: DbId) -> Result<Conversation, GatewayError> {
        self.conversation(conversation_id).await?;
        let inbox = Arc::clone(&self.inbox);
        self.connections
            .run(self.context.latency.chat_connect, None, move || async move {
                let mut inbox = inbox.lock().await;
                inbox.set_online(conversation_id, true)?;
                tracing::debug!(conversation_id, "Chat connected");
                Ok(inbox.conversation(conversation_id)?.clone())
            })
            .await
    }

    /// Send a message and schedule the participant's auto-reply.
    pub async fn send(
        &self,
        conversation_id: DbId,
        content: &str,
        attachment: Option<Attachment>,
    ) -> Result<Message, GatewayError> {
        let message = self
            .inbox
            .lock()
            .await
            .send(conversation_id, content, attachment, Utc::now())?;

        tracing::debug!(conversation_id, message_id = message.id, "Message sent");
        self.context.bus.publish(
            MarketEvent::new(types::MESSAGE_SENT).with_source("conversation", conversation_id),
        );
        self.schedule_auto_reply(conversation_id);
        Ok(message)
    }

    /// Mark a conversation read. Returns how many messages changed.
    pub async fn mark_read(&self, conversation_id: DbId) -> Result<usize, GatewayError> {
        Ok(self.inbox.lock().await.mark_read(conversation_id)?)
    }

    /// Flip the archived flag. Returns the new value.
    pub async fn toggle_archive(&self, conversation_id: DbId) -> Result<bool, GatewayError> {
        Ok(self.inbox.lock().await.toggle_archive(conversation_id)?)
    }

    fn schedule_auto_reply(&self, conversation_id: DbId) {
        let reply = AUTO_REPLIES
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or("Thanks!");
        let inbox = Arc::clone(&self.inbox);
        let bus = Arc::clone(&self.context.bus);
        let cancel = self.cancel.clone();
        let delay = self.context.latency.auto_reply;
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(conversation_id, "Auto-reply cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    deliver_reply(&inbox, &bus, conversation_id, reply).await;
                }
            }
        });
    }
}

async fn deliver_reply(inbox: &Mutex<Inbox>, bus: &EventBus, conversation_id: DbId, reply: &str) {
    let received = inbox.lock().await.receive(conversation_id, reply, Utc::now());
    match received {
        Ok(message) => {
            tracing::debug!(conversation_id, message_id = message.id, "Auto-reply delivered");
            bus.publish(
                MarketEvent::new(types::MESSAGE_RECEIVED)
                    .with_source("conversation", conversation_id)
                    .with_payload(serde_json::json!({ "content": message.content })),
            );
        }
        Err(e) => {
            tracing::warn!(conversation_id, error = %e, "Auto-reply dropped");
        }
    }
}
