use crate::TypesError;
use std::{fmt, str::FromStr};

/// A conversation language.
///
/// The set is deliberately closed: every static table in the workspace carries one entry per
/// variant, so adding a language is a compile-time change rather than a missing lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English
    #[default]
    En,
    /// Luganda
    Lg,
    /// Kiswahili
    Sw,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Language; 3] = [Language::En, Language::Lg, Language::Sw];

    /// Returns the two-letter code used on the wire (`en`, `lg`, `sw`).
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Lg => "lg",
            Language::Sw => "sw",
        }
    }

    /// Returns the language's own name for itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Lg => "Luganda",
            Language::Sw => "Kiswahili",
        }
    }

    /// Parses a language code, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::UnknownLanguage`] if the code is not supported.
    pub fn parse(code: &str) -> Result<Self, TypesError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "lg" => Ok(Language::Lg),
            "sw" => Ok(Language::Sw),
            _ => Err(TypesError::UnknownLanguage(code.to_string())),
        }
    }

    /// Parses a language code, falling back to English for anything unrecognised.
    pub fn from_code_or_default(code: &str) -> Self {
        Self::parse(code).unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s)
    }
}

impl serde::Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> serde::Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Language::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_codes_case_insensitively() {
        assert_eq!(Language::parse("en").unwrap(), Language::En);
        assert_eq!(Language::parse(" LG ").unwrap(), Language::Lg);
        assert_eq!(Language::parse("Sw").unwrap(), Language::Sw);
    }

    #[test]
    fn parse_rejects_unknown_code() {
        let err = Language::parse("fr").expect_err("fr is not supported");
        assert_eq!(err, TypesError::UnknownLanguage("fr".into()));
    }

    #[test]
    fn unknown_code_falls_back_to_english() {
        assert_eq!(Language::from_code_or_default("xx"), Language::En);
        assert_eq!(Language::from_code_or_default("sw"), Language::Sw);
    }

    #[test]
    fn serde_uses_wire_codes() {
        let json = serde_json::to_string(&Language::Lg).unwrap();
        assert_eq!(json, "\"lg\"");
        let parsed: Language = serde_json::from_str("\"sw\"").unwrap();
        assert_eq!(parsed, Language::Sw);
        assert!(serde_json::from_str::<Language>("\"de\"").is_err());
    }

    #[test]
    fn codes_round_trip_through_display() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn native_names() {
        assert_eq!(Language::Lg.native_name(), "Luganda");
        assert_eq!(Language::Sw.native_name(), "Kiswahili");
    }
}
