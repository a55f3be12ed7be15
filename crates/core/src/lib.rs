//! # Triage Core
//!
//! Core business logic for the symptom triage assistant.
//!
//! This crate contains the pure triage pipeline and the conversation lifecycle around it:
//! - Language-tagged keyword lexicon, symptom categorizer and triage classifier
//! - Follow-up question catalogue, health facility directory and UI string tables
//! - Conversation storage behind the [`ConversationStore`] trait, with an in-memory store
//! - [`ConversationService`], which appends messages and replies with localized guidance
//!
//! **No API concerns**: HTTP servers, request parsing and wire DTOs belong in `api-rest` or
//! `api-shared`.

pub mod catalogue;
pub mod categorize;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod error;
pub mod facilities;
pub mod follow_up;
pub mod i18n;
pub mod lexicon;
pub mod message;
pub mod storage;
pub mod validation;

pub use catalogue::{all_categories, category_info, CategoryInfo, FollowUpQuestion, Localized};
pub use categorize::{categorize, SymptomCategory};
pub use classifier::{classify, classify_utterances, TriageLevel, TriageRule, TriageVerdict};
pub use config::CoreConfig;
pub use conversation::{ConversationService, MessageOutcome, StartedConversation};
pub use error::{CoreError, CoreResult};
pub use facilities::{all_facilities, facilities_for, requests_facilities, HealthFacility};
pub use follow_up::FALLBACK_QUESTION;
pub use follow_up::{follow_up_for_key, get_follow_up, FollowUp};
pub use i18n::{translations, Translations};
pub use message::{Message, TranscriptEntry};
pub use storage::{
    Conversation, ConversationId, ConversationStore, MemoryStore, MessageId, StoredMessage,
};

pub use triage_types::{Language, NonEmptyText, Role, TypesError};
pub use triage_uuid::{SessionId, UuidError};
