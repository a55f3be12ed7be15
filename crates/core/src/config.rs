//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handling never reads process-wide environment variables;
//! binaries read them, hand the raw values to the parsers below, and share the resulting
//! [`CoreConfig`] behind an `Arc`.

use crate::constants::DEFAULT_LANGUAGE;
use crate::{CoreError, CoreResult};
use triage_types::Language;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    default_language: Language,
    follow_up_questions: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, true)
    }
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Arguments
    ///
    /// * `default_language` - Language for conversations started without one.
    /// * `follow_up_questions` - Whether replies to user messages include a category-specific
    ///   clarifying question instead of always offering the facility list.
    pub fn new(default_language: Language, follow_up_questions: bool) -> Self {
        Self {
            default_language,
            follow_up_questions,
        }
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn follow_up_questions(&self) -> bool {
        self.follow_up_questions
    }
}

/// Parse the default language from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_LANGUAGE`].
///
/// # Errors
///
/// Returns `CoreError::Types` if the value is set but is not a supported language code.
pub fn language_from_env_value(value: Option<String>) -> CoreResult<Language> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| Language::parse(&v)).transpose()?;

    Ok(parsed.unwrap_or(DEFAULT_LANGUAGE))
}

/// Parse a boolean flag from an optional environment value.
///
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off` in any case. Unset or blank values yield
/// `default`.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` for any other value.
pub fn flag_from_env_value(value: Option<String>, default: bool) -> CoreResult<bool> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(CoreError::InvalidInput(format!(
            "expected a boolean flag, got '{}'",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_types::TypesError;

    #[test]
    fn language_defaults_when_unset_or_blank() {
        assert_eq!(language_from_env_value(None).unwrap(), Language::En);
        assert_eq!(
            language_from_env_value(Some("  ".into())).unwrap(),
            Language::En
        );
    }

    #[test]
    fn language_parses_configured_code() {
        assert_eq!(
            language_from_env_value(Some("sw".into())).unwrap(),
            Language::Sw
        );
    }

    #[test]
    fn language_rejects_unknown_code() {
        let err = language_from_env_value(Some("fr".into())).expect_err("fr is unsupported");
        assert!(matches!(err, CoreError::Types(TypesError::UnknownLanguage(code)) if code == "fr"));
    }

    #[test]
    fn flag_parsing() {
        assert!(flag_from_env_value(None, true).unwrap());
        assert!(!flag_from_env_value(Some("off".into()), true).unwrap());
        assert!(flag_from_env_value(Some("YES".into()), false).unwrap());
        assert!(!flag_from_env_value(Some(" ".into()), false).unwrap());
        let err = flag_from_env_value(Some("maybe".into()), true).expect_err("not a flag");
        assert!(matches!(err, CoreError::InvalidInput(msg) if msg.contains("maybe")));
    }

    #[test]
    fn default_config() {
        let cfg = CoreConfig::default();
        assert_eq!(cfg.default_language(), Language::En);
        assert!(cfg.follow_up_questions());
    }
}
