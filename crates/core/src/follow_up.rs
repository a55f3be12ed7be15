//! Follow-up question resolution.
//!
//! Given a symptom category and a language, returns the clarifying question (and its answer
//! options) the conversation should ask next. The typed lookup is total; the string boundary
//! maps unknown category keys and unknown language codes to the same generic prompt.

use crate::catalogue::category_info;
use crate::categorize::SymptomCategory;
use serde::Serialize;
use triage_types::Language;

/// Prompt used when no category-specific question applies.
pub const FALLBACK_QUESTION: &str = "Please describe your symptoms in more detail";

/// A localized question and its answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FollowUp {
    pub question: &'static str,
    pub options: &'static [&'static str],
}

impl FollowUp {
    pub const FALLBACK: FollowUp = FollowUp {
        question: FALLBACK_QUESTION,
        options: &[],
    };

    pub fn is_fallback(&self) -> bool {
        *self == Self::FALLBACK
    }
}

/// Returns the category's lead question in `language`, if the category has one.
pub fn lead_follow_up(category: SymptomCategory, language: Language) -> Option<FollowUp> {
    category_info(category).lead().map(|q| FollowUp {
        question: *q.translations.get(language),
        options: *q.options.get(language),
    })
}

/// Returns the follow-up for `category` in `language`, or the generic fallback.
pub fn get_follow_up(category: SymptomCategory, language: Language) -> FollowUp {
    lead_follow_up(category, language).unwrap_or(FollowUp::FALLBACK)
}

/// String-keyed variant of [`get_follow_up`] for callers holding raw request values.
///
/// An unknown category key or an unknown language code yields [`FollowUp::FALLBACK`]; this
/// function never fails.
pub fn follow_up_for_key(category_key: &str, language_code: &str) -> FollowUp {
    let Some(category) = SymptomCategory::from_key(category_key) else {
        return FollowUp::FALLBACK;
    };
    match Language::parse(language_code) {
        Ok(language) => get_follow_up(category, language),
        Err(_) => FollowUp::FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swahili_fever_duration_question() {
        let follow_up = follow_up_for_key("fever", "sw");
        assert_eq!(follow_up.question, "Umeugua homa kwa muda gani?");
        assert_eq!(
            follow_up.options,
            &["Chini ya saa 24", "Siku 1-3", "Zaidi ya siku 3"]
        );
        assert_eq!(follow_up.options.len(), 3);
    }

    #[test]
    fn unknown_category_falls_back() {
        let follow_up = follow_up_for_key("nonexistent", "en");
        assert_eq!(follow_up.question, FALLBACK_QUESTION);
        assert!(follow_up.options.is_empty());
        assert!(follow_up.is_fallback());
    }

    #[test]
    fn unknown_language_falls_back() {
        assert!(follow_up_for_key("fever", "fr").is_fallback());
    }

    #[test]
    fn breathing_asks_about_severity() {
        let follow_up = get_follow_up(SymptomCategory::Breathing, Language::En);
        assert_eq!(follow_up.question, "How severe is your breathing difficulty?");
        assert_eq!(follow_up.options.len(), 3);
    }

    #[test]
    fn other_category_uses_generic_prompt() {
        for language in Language::ALL {
            assert!(get_follow_up(SymptomCategory::Other, language).is_fallback());
            assert!(lead_follow_up(SymptomCategory::Other, language).is_none());
        }
    }

    #[test]
    fn pain_injury_and_child_use_generic_prompt() {
        for key in ["pain", "injury", "child"] {
            for code in ["en", "lg", "sw"] {
                let follow_up = follow_up_for_key(key, code);
                assert!(follow_up.is_fallback(), "{key}/{code}");
                assert!(follow_up.options.is_empty());
            }
        }
    }

    #[test]
    fn luganda_fever_question() {
        let follow_up = get_follow_up(SymptomCategory::Fever, Language::Lg);
        assert_eq!(follow_up.question, "Omaze bbanga ki n'omusujja?");
        assert_eq!(follow_up.options.len(), 3);
    }
}
