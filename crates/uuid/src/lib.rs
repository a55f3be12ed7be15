//! Session identifier utilities.
//!
//! A conversation is resumed by the session identifier the client holds. To keep lookups
//! deterministic, every session identifier is stored in a *canonical* UUID representation:
//! **32 lowercase hexadecimal characters** (no hyphens).
//!
//! This crate provides [`SessionId`], a wrapper that *guarantees* the canonical format once
//! constructed.
//!
//! ## Canonical form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! Browsers usually generate hyphenated v4 identifiers, so [`SessionId::parse`] accepts any
//! RFC 4122 textual form and normalises it. Two spellings of the same UUID therefore resolve to
//! the same conversation.

mod session;

pub use session::SessionId;

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
