//! Conversation storage.
//!
//! The store is an injected capability: binaries construct one at startup and share it via
//! `Arc<dyn ConversationStore>` with the services that need it. Nothing in the classifier path
//! touches a store.
//!
//! [`MemoryStore`] is the only implementation. It keeps everything in process memory behind a
//! single `RwLock` and makes no durability promises.

use crate::message::TranscriptEntry;
use crate::{CoreError, CoreResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::RwLock;
use triage_types::{Language, NonEmptyText, Role};
use triage_uuid::SessionId;

pub type ConversationId = u64;
pub type MessageId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: ConversationId,
    pub session_id: SessionId,
    pub language: Language,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMessage {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry for StoredMessage {
    fn role(&self) -> Role {
        self.role
    }

    fn content(&self) -> &str {
        &self.content
    }
}

/// Persistence seam for conversations and their transcripts.
pub trait ConversationStore: Send + Sync {
    /// Returns the conversation bound to `session_id`, creating it in `language` if none
    /// exists. The boolean is `true` when a new conversation was created.
    fn get_or_create_conversation(
        &self,
        session_id: SessionId,
        language: Language,
    ) -> CoreResult<(Conversation, bool)>;

    fn get_conversation(&self, id: ConversationId) -> CoreResult<Option<Conversation>>;

    /// Appends a message to a conversation's transcript.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ConversationNotFound` if the conversation does not exist.
    fn add_message(
        &self,
        conversation_id: ConversationId,
        role: Role,
        content: NonEmptyText,
    ) -> CoreResult<StoredMessage>;

    /// Returns the transcript ordered by timestamp, then by insertion.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ConversationNotFound` if the conversation does not exist.
    fn messages(&self, conversation_id: ConversationId) -> CoreResult<Vec<StoredMessage>>;
}

#[derive(Default)]
struct MemoryInner {
    conversations: HashMap<ConversationId, Conversation>,
    sessions: HashMap<SessionId, ConversationId>,
    messages: HashMap<ConversationId, Vec<StoredMessage>>,
    last_conversation_id: ConversationId,
    last_message_id: MessageId,
}

/// In-memory conversation store.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConversationStore for MemoryStore {
    fn get_or_create_conversation(
        &self,
        session_id: SessionId,
        language: Language,
    ) -> CoreResult<(Conversation, bool)> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| CoreError::StoreUnavailable)?;

        if let Some(existing) = inner
            .sessions
            .get(&session_id)
            .and_then(|id| inner.conversations.get(id))
        {
            return Ok((existing.clone(), false));
        }

        inner.last_conversation_id += 1;
        let conversation = Conversation {
            id: inner.last_conversation_id,
            session_id,
            language,
            created_at: Utc::now(),
        };
        inner.sessions.insert(session_id, conversation.id);
        inner.messages.insert(conversation.id, Vec::new());
        inner
            .conversations
            .insert(conversation.id, conversation.clone());

        tracing::debug!(
            conversation_id = conversation.id,
            session_id = %session_id,
            language = %language,
            "created conversation"
        );

        Ok((conversation, true))
    }

    fn get_conversation(&self, id: ConversationId) -> CoreResult<Option<Conversation>> {
        let inner = self.inner.read().map_err(|_| CoreError::StoreUnavailable)?;
        Ok(inner.conversations.get(&id).cloned())
    }

    fn add_message(
        &self,
        conversation_id: ConversationId,
        role: Role,
        content: NonEmptyText,
    ) -> CoreResult<StoredMessage> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| CoreError::StoreUnavailable)?;

        if !inner.conversations.contains_key(&conversation_id) {
            return Err(CoreError::ConversationNotFound(conversation_id));
        }

        inner.last_message_id += 1;
        let message = StoredMessage {
            id: inner.last_message_id,
            conversation_id,
            role,
            content: content.into_string(),
            timestamp: Utc::now(),
        };
        inner
            .messages
            .entry(conversation_id)
            .or_default()
            .push(message.clone());

        Ok(message)
    }

    fn messages(&self, conversation_id: ConversationId) -> CoreResult<Vec<StoredMessage>> {
        let inner = self.inner.read().map_err(|_| CoreError::StoreUnavailable)?;
        if !inner.conversations.contains_key(&conversation_id) {
            return Err(CoreError::ConversationNotFound(conversation_id));
        }

        let mut messages = inner
            .messages
            .get(&conversation_id)
            .cloned()
            .unwrap_or_default();
        messages.sort_by_key(|m| (m.timestamp, m.id));
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> NonEmptyText {
        NonEmptyText::new(s).unwrap()
    }

    #[test]
    fn get_or_create_is_idempotent_per_session() {
        let store = MemoryStore::new();
        let session = SessionId::new();

        let (first, created) = store
            .get_or_create_conversation(session, Language::Sw)
            .unwrap();
        assert!(created);
        assert_eq!(first.language, Language::Sw);

        let (second, created) = store
            .get_or_create_conversation(session, Language::En)
            .unwrap();
        assert!(!created);
        assert_eq!(second, first);
    }

    #[test]
    fn conversation_ids_are_sequential() {
        let store = MemoryStore::new();
        let (a, _) = store
            .get_or_create_conversation(SessionId::new(), Language::En)
            .unwrap();
        let (b, _) = store
            .get_or_create_conversation(SessionId::new(), Language::En)
            .unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn get_conversation_by_id() {
        let store = MemoryStore::new();
        let (conversation, _) = store
            .get_or_create_conversation(SessionId::new(), Language::Lg)
            .unwrap();
        assert_eq!(
            store.get_conversation(conversation.id).unwrap(),
            Some(conversation)
        );
        assert!(store.get_conversation(99).unwrap().is_none());
    }

    #[test]
    fn messages_keep_insertion_order() {
        let store = MemoryStore::new();
        let (conversation, _) = store
            .get_or_create_conversation(SessionId::new(), Language::En)
            .unwrap();

        for content in ["first", "second", "third"] {
            store
                .add_message(conversation.id, Role::User, text(content))
                .unwrap();
        }

        let contents: Vec<String> = store
            .messages(conversation.id)
            .unwrap()
            .into_iter()
            .map(|m| m.content)
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn messages_are_scoped_to_their_conversation() {
        let store = MemoryStore::new();
        let (a, _) = store
            .get_or_create_conversation(SessionId::new(), Language::En)
            .unwrap();
        let (b, _) = store
            .get_or_create_conversation(SessionId::new(), Language::En)
            .unwrap();

        store.add_message(a.id, Role::User, text("for a")).unwrap();
        store.add_message(b.id, Role::User, text("for b")).unwrap();

        let in_a = store.messages(a.id).unwrap();
        assert_eq!(in_a.len(), 1);
        assert_eq!(in_a[0].content, "for a");
        assert_eq!(in_a[0].conversation_id, a.id);
    }

    #[test]
    fn unknown_conversation_is_reported() {
        let store = MemoryStore::new();
        let err = store
            .add_message(7, Role::User, text("hello"))
            .expect_err("no conversation 7");
        assert!(matches!(err, CoreError::ConversationNotFound(7)));
        assert!(matches!(
            store.messages(7),
            Err(CoreError::ConversationNotFound(7))
        ));
    }
}
