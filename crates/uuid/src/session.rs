//! Implementation of the session identifier.

use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Canonical session identifier (32 lowercase hex characters, no hyphens).
///
/// # Construction
/// - [`SessionId::new`] generates a new random identifier for a fresh conversation.
/// - [`SessionId::parse`] validates and normalises an externally supplied identifier.
///
/// # Display format
/// Always the canonical 32-character lowercase hex form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionId {
    /// Generates a new random (v4) session identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a session identifier supplied by a client.
    ///
    /// Accepts the canonical form as well as hyphenated, braced, URN and uppercase spellings.
    /// The result is always stored canonically.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` is not a UUID in any textual form.
    pub fn parse(input: &str) -> UuidResult<Self> {
        let trimmed = input.trim();
        Uuid::parse_str(trimmed).map(Self).map_err(|_| {
            UuidError::InvalidInput(format!(
                "session id must be a UUID (hyphenated or 32 hex characters), got: '{}'",
                input
            ))
        })
    }

    /// Returns true if `input` is already in canonical form.
    ///
    /// This is a purely syntactic check: exactly 32 bytes, lowercase hex only.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for SessionId {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionId::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SessionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SessionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SessionId::parse(&s).map_err(serde::de::Error::custom)
    }
}
