//! Conversation service.
//!
//! Drives one chat turn: a message is validated and appended, the whole transcript is
//! re-classified, and the localized replies are appended behind it. The service owns no state
//! of its own; everything lives in the injected [`ConversationStore`].

use crate::categorize::categorize;
use crate::classifier::{classify, TriageLevel, TriageVerdict};
use crate::config::CoreConfig;
use crate::facilities::requests_facilities;
use crate::follow_up::{lead_follow_up, FollowUp};
use crate::i18n::translations;
use crate::storage::{Conversation, ConversationId, ConversationStore, StoredMessage};
use crate::validation::validate_message_content;
use crate::{CoreError, CoreResult};
use std::sync::Arc;
use triage_types::{Language, NonEmptyText, Role};
use triage_uuid::SessionId;

/// Result of [`ConversationService::start`].
#[derive(Debug, Clone)]
pub struct StartedConversation {
    pub conversation: Conversation,
    pub messages: Vec<StoredMessage>,
    /// `true` when the conversation was created by this call rather than resumed.
    pub created: bool,
}

impl StartedConversation {
    pub fn session_id(&self) -> SessionId {
        self.conversation.session_id
    }
}

/// Result of [`ConversationService::send_message`].
#[derive(Debug, Clone)]
pub struct MessageOutcome {
    pub user_message: StoredMessage,
    /// Replies appended after the message, in transcript order. Empty for non-user messages.
    pub system_responses: Vec<StoredMessage>,
    pub verdict: Option<TriageVerdict>,
    pub follow_up: Option<FollowUp>,
    /// The message asked to see nearby facilities.
    pub show_facilities: bool,
}

#[derive(Clone)]
pub struct ConversationService {
    store: Arc<dyn ConversationStore>,
    cfg: Arc<CoreConfig>,
}

impl ConversationService {
    pub fn new(store: Arc<dyn ConversationStore>, cfg: Arc<CoreConfig>) -> Self {
        Self { store, cfg }
    }

    /// Resumes the conversation for `session_id`, or creates one.
    ///
    /// A missing session id gets a fresh one; a missing language uses the configured default.
    /// A newly created conversation is seeded with the localized welcome message. The language
    /// of an existing conversation is never changed.
    pub fn start(
        &self,
        session_id: Option<SessionId>,
        language: Option<Language>,
    ) -> CoreResult<StartedConversation> {
        let session_id = session_id.unwrap_or_default();
        let language = language.unwrap_or(self.cfg.default_language());

        let (conversation, created) = self
            .store
            .get_or_create_conversation(session_id, language)?;

        if created {
            let welcome = NonEmptyText::new(translations(conversation.language).welcome)?;
            self.store
                .add_message(conversation.id, Role::System, welcome)?;
            tracing::info!(
                conversation_id = conversation.id,
                language = %conversation.language,
                "started conversation"
            );
        } else {
            tracing::debug!(conversation_id = conversation.id, "resumed conversation");
        }

        let messages = self.store.messages(conversation.id)?;
        Ok(StartedConversation {
            conversation,
            messages,
            created,
        })
    }

    /// Appends a message and, for user messages, the triage replies.
    ///
    /// # Errors
    ///
    /// - `CoreError::Types` / `CoreError::InvalidInput` if the content fails validation
    /// - `CoreError::ConversationNotFound` if the conversation does not exist
    pub fn send_message(
        &self,
        conversation_id: ConversationId,
        role: Role,
        content: &str,
    ) -> CoreResult<MessageOutcome> {
        let content = validate_message_content(content)?;
        let conversation = self.conversation(conversation_id)?;

        let show_facilities = role == Role::User && requests_facilities(content.as_str());
        let user_message = self.store.add_message(conversation.id, role, content)?;

        if role != Role::User {
            return Ok(MessageOutcome {
                user_message,
                system_responses: Vec::new(),
                verdict: None,
                follow_up: None,
                show_facilities,
            });
        }

        let transcript = self.store.messages(conversation.id)?;
        let verdict = classify(&transcript);
        let texts = translations(conversation.language).triage;

        let follow_up = self.follow_up_for(&verdict, &user_message, conversation.language);
        let replies = [
            texts.for_level(verdict.level),
            follow_up.map_or(texts.follow_up, |f| f.question),
        ];

        let mut system_responses = Vec::with_capacity(replies.len());
        for reply in replies {
            let text = NonEmptyText::new(reply)?;
            system_responses.push(self.store.add_message(conversation.id, Role::System, text)?);
        }

        tracing::info!(
            conversation_id = conversation.id,
            level = %verdict.level,
            rule = ?verdict.rule,
            follow_up = follow_up.is_some(),
            show_facilities,
            "classified transcript"
        );

        Ok(MessageOutcome {
            user_message,
            system_responses,
            verdict: Some(verdict),
            follow_up,
            show_facilities,
        })
    }

    /// Returns the ordered transcript of a conversation.
    pub fn transcript(&self, conversation_id: ConversationId) -> CoreResult<Vec<StoredMessage>> {
        self.conversation(conversation_id)?;
        self.store.messages(conversation_id)
    }

    fn conversation(&self, conversation_id: ConversationId) -> CoreResult<Conversation> {
        self.store
            .get_conversation(conversation_id)?
            .ok_or(CoreError::ConversationNotFound(conversation_id))
    }

    // Emergencies always get the facility prompt.
    fn follow_up_for(
        &self,
        verdict: &TriageVerdict,
        message: &StoredMessage,
        language: Language,
    ) -> Option<FollowUp> {
        if !self.cfg.follow_up_questions() || verdict.level == TriageLevel::Emergency {
            return None;
        }
        lead_follow_up(categorize(&message.content), language)
    }
}
