//! Input validation utilities.
//!
//! Validation happens at the storage boundary. The classifier itself accepts any text.

use crate::constants::MAX_MESSAGE_CHARS;
use crate::{CoreError, CoreResult};
use triage_types::NonEmptyText;

/// Validates message content before it is appended to a transcript.
///
/// - Rejects empty or whitespace-only content
/// - Bounds the length to avoid pathological inputs
/// - Rejects control characters other than newline, carriage return and tab
///
/// # Errors
///
/// Returns `CoreError::Types` for empty content and `CoreError::InvalidInput` otherwise.
pub fn validate_message_content(content: &str) -> CoreResult<NonEmptyText> {
    let text = NonEmptyText::new(content)?;

    let chars = text.as_str().chars().count();
    if chars > MAX_MESSAGE_CHARS {
        return Err(CoreError::InvalidInput(format!(
            "message exceeds maximum length of {} characters",
            MAX_MESSAGE_CHARS
        )));
    }

    if text
        .as_str()
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
    {
        return Err(CoreError::InvalidInput(
            "message contains control characters".into(),
        ));
    }

    Ok(text)
}
