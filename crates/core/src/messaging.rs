//! Conversations and messages.
//!
//! [`Inbox`] owns every conversation and its message list. A conversation
//! always has a message list (possibly empty); the two are created together
//! and never removed, only archived.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::SubjectRef;
use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Maximum length of a single message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4_000;

/// Canned replies used by the simulated counterpart.
pub const AUTO_REPLIES: &[&str] = &[
    "Thanks for reaching out! I'll take a look and get back to you shortly.",
    "Sounds interesting. Could you share more details about the project timeline?",
    "Got it, let me check availability with my agent.",
    "Appreciate the message. Happy to set up a call this week.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Participant,
}

/// The other side of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub subject: SubjectRef,
    pub name: String,
}

/// Optional attachment or cross-reference carried by a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    /// Free-form reference, e.g. a request or vault asset id.
    #[serde(default)]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: DbId,
    pub participant: Participant,
    pub last_message: Option<String>,
    pub unread_count: u32,
    pub updated_at: Timestamp,
    pub online: bool,
    pub archived: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: DbId,
    pub conversation_id: DbId,
    pub sender: Sender,
    pub content: String,
    pub read: bool,
    pub attachment: Option<Attachment>,
    pub sent_at: Timestamp,
}

/// Validate message content. Returns the trimmed content.
pub fn validate_content(content: &str) -> Result<&str, CoreError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Message content must not be empty".into()));
    }
    let chars = trimmed.chars().count();
    if chars > MAX_MESSAGE_CHARS {
        return Err(CoreError::Validation(format!(
            "Message must be at most {MAX_MESSAGE_CHARS} characters, got {chars}"
        )));
    }
    Ok(trimmed)
}

// ---------------------------------------------------------------------------
// Inbox
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Inbox {
    conversations: Vec<Conversation>,
    messages: HashMap<DbId, Vec<Message>>,
    next_conversation_id: DbId,
    next_message_id: DbId,
}

impl Inbox {
    pub fn new() -> Self {
        Self {
            next_conversation_id: 1,
            next_message_id: 1,
            ..Default::default()
        }
    }

    /// Conversations ordered by most recent activity. Archived conversations
    /// are only included when asked for.
    pub fn list(&self, include_archived: bool) -> Vec<&Conversation> {
        let mut list: Vec<&Conversation> = self
            .conversations
            .iter()
            .filter(|c| include_archived || !c.archived)
            .collect();
        list.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        list
    }

    pub fn conversation(&self, id: DbId) -> Result<&Conversation, CoreError> {
        self.conversations
            .iter()
            .find(|c| c.id == id)
            .ok_or(CoreError::NotFound {
                entity: "conversation",
                id,
            })
    }

    fn conversation_mut(&mut self, id: DbId) -> Result<&mut Conversation, CoreError> {
        self.conversations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CoreError::NotFound {
                entity: "conversation",
                id,
            })
    }

    pub fn messages(&self, conversation_id: DbId) -> Result<&[Message], CoreError> {
        self.conversation(conversation_id)?;
        Ok(self
            .messages
            .get(&conversation_id)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Open a conversation with `participant`.
    ///
    /// Reuses an existing non-archived conversation with the same subject.
    /// Returns the conversation id and whether it was newly created.
    pub fn start_conversation(&mut self, participant: Participant, now: Timestamp) -> (DbId, bool) {
        if let Some(existing) = self
            .conversations
            .iter()
            .find(|c| !c.archived && c.participant.subject == participant.subject)
        {
            return (existing.id, false);
        }

        let id = self.next_conversation_id;
        self.next_conversation_id += 1;
        self.conversations.push(Conversation {
            id,
            participant,
            last_message: None,
            unread_count: 0,
            updated_at: now,
            online: false,
            archived: false,
        });
        self.messages.insert(id, Vec::new());
        (id, true)
    }

    fn append(
        &mut self,
        conversation_id: DbId,
        sender: Sender,
        content: &str,
        attachment: Option<Attachment>,
        now: Timestamp,
    ) -> Result<Message, CoreError> {
        let content = validate_content(content)?.to_string();
        let message_id = self.next_message_id;

        let conversation = self.conversation_mut(conversation_id)?;
        conversation.last_message = Some(content.clone());
        conversation.updated_at = now;
        if sender == Sender::Participant {
            conversation.unread_count += 1;
        }

        let message = Message {
            id: message_id,
            conversation_id,
            sender,
            content,
            read: sender == Sender::User,
            attachment,
            sent_at: now,
        };
        self.next_message_id += 1;
        self.messages
            .entry(conversation_id)
            .or_default()
            .push(message.clone());
        Ok(message)
    }

    /// Append a message sent by the current user.
    pub fn send(
        &mut self,
        conversation_id: DbId,
        content: &str,
        attachment: Option<Attachment>,
        now: Timestamp,
    ) -> Result<Message, CoreError> {
        self.append(conversation_id, Sender::User, content, attachment, now)
    }

    /// Append a message from the participant; counts as unread.
    pub fn receive(
        &mut self,
        conversation_id: DbId,
        content: &str,
        now: Timestamp,
    ) -> Result<Message, CoreError> {
        self.append(conversation_id, Sender::Participant, content, None, now)
    }

    /// Mark every message in a conversation read. Returns how many changed.
    pub fn mark_read(&mut self, conversation_id: DbId) -> Result<usize, CoreError> {
        self.conversation_mut(conversation_id)?.unread_count = 0;
        let mut changed = 0;
        if let Some(messages) = self.messages.get_mut(&conversation_id) {
            for message in messages.iter_mut().filter(|m| !m.read) {
                message.read = true;
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Flip the archived flag. Returns the new value.
    pub fn toggle_archive(&mut self, conversation_id: DbId) -> Result<bool, CoreError> {
        let conversation = self.conversation_mut(conversation_id)?;
        conversation.archived = !conversation.archived;
        Ok(conversation.archived)
    }

    pub fn set_online(&mut self, conversation_id: DbId, online: bool) -> Result<(), CoreError> {
        self.conversation_mut(conversation_id)?.online = online;
        Ok(())
    }

    /// Total unread messages across non-archived conversations.
    pub fn unread_total(&self) -> u32 {
        self.conversations
            .iter()
            .filter(|c| !c.archived)
            .map(|c| c.unread_count)
            .sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
