//! Symptom categorization of a single utterance.

use crate::lexicon::{self, Trigger};
use serde::{Deserialize, Serialize};

/// Coarse symptom category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomCategory {
    Fever,
    Breathing,
    Pain,
    Injury,
    Child,
    Other,
}

impl SymptomCategory {
    /// All categories, in scan priority order (`Other` last).
    pub const ALL: [SymptomCategory; 6] = [
        SymptomCategory::Fever,
        SymptomCategory::Breathing,
        SymptomCategory::Pain,
        SymptomCategory::Injury,
        SymptomCategory::Child,
        SymptomCategory::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SymptomCategory::Fever => "fever",
            SymptomCategory::Breathing => "breathing",
            SymptomCategory::Pain => "pain",
            SymptomCategory::Injury => "injury",
            SymptomCategory::Child => "child",
            SymptomCategory::Other => "other",
        }
    }

    /// Looks up a category by key. Returns `None` for unknown keys.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key.trim()))
    }

    /// Keyword triggers for this category. `Other` has none.
    pub fn triggers(&self) -> &'static [Trigger] {
        match self {
            SymptomCategory::Fever => lexicon::FEVER,
            SymptomCategory::Breathing => lexicon::BREATHING,
            SymptomCategory::Pain => lexicon::PAIN,
            SymptomCategory::Injury => lexicon::INJURY,
            SymptomCategory::Child => lexicon::CHILD,
            SymptomCategory::Other => &[],
        }
    }
}

impl std::fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Maps one utterance to a symptom category.
///
/// Categories are scanned in priority order (fever, breathing, pain, injury, child); the first
/// one with a keyword occurring in the lower-cased text wins. Text matching nothing is
/// [`SymptomCategory::Other`].
pub fn categorize(text: &str) -> SymptomCategory {
    let lowered = text.to_lowercase();
    SymptomCategory::ALL
        .into_iter()
        .find(|c| lexicon::contains_any(&lowered, c.triggers()))
        .unwrap_or(SymptomCategory::Other)
}
