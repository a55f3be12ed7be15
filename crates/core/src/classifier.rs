//! Triage classification.
//!
//! The classifier concatenates every user-authored message of a transcript (transcript order,
//! lower-cased, space-joined) and evaluates an ordered rule cascade over that single buffer.
//! The first rule that matches decides the verdict:
//!
//! 1. no user messages: `nonUrgent`, ask for more information
//! 2. any emergency trigger: `emergency`
//! 3. a chronic condition together with a concerning symptom: `urgent`
//! 4. any urgent trigger: `urgent`
//! 5. a chronic condition alone: `nonUrgent` with monitoring advice
//! 6. otherwise: `nonUrgent`, manage at home
//!
//! Priority is strictly by rule, never by where a keyword appears in the text. The
//! classifier is a pure function of the user message contents: no state, no I/O, no errors.

use crate::lexicon::{self, Tier};
use crate::message::TranscriptEntry;
use serde::Serialize;
use triage_types::Role;

/// Urgency of a symptom report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriageLevel {
    Emergency,
    Urgent,
    NonUrgent,
}

impl TriageLevel {
    /// Wire name (`emergency`, `urgent`, `nonUrgent`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TriageLevel::Emergency => "emergency",
            TriageLevel::Urgent => "urgent",
            TriageLevel::NonUrgent => "nonUrgent",
        }
    }
}

impl std::fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The cascade rule that produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TriageRule {
    NoInformation,
    Emergency,
    ChronicWithConcerningSymptom,
    Urgent,
    ChronicMonitoring,
    Default,
}

impl TriageRule {
    pub fn level(&self) -> TriageLevel {
        match self {
            TriageRule::Emergency => TriageLevel::Emergency,
            TriageRule::ChronicWithConcerningSymptom | TriageRule::Urgent => TriageLevel::Urgent,
            TriageRule::NoInformation | TriageRule::ChronicMonitoring | TriageRule::Default => {
                TriageLevel::NonUrgent
            }
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            TriageRule::NoInformation => "Please provide more information about your symptoms.",
            TriageRule::Emergency => {
                "Based on your symptoms, you should seek emergency care immediately."
            }
            TriageRule::ChronicWithConcerningSymptom => {
                "With your condition, these symptoms require medical attention. Please see a healthcare provider within 24 hours."
            }
            TriageRule::Urgent => {
                "Your symptoms suggest you should see a healthcare provider within 24 hours."
            }
            TriageRule::ChronicMonitoring => {
                "Monitor your condition closely. If symptoms worsen or you develop dizziness, confusion, or other new symptoms, please seek medical care promptly."
            }
            TriageRule::Default => {
                "Your symptoms can likely be managed at home. Rest and monitor your condition."
            }
        }
    }
}

/// Outcome of classifying a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageVerdict {
    pub level: TriageLevel,
    pub recommendation: &'static str,
    pub rule: TriageRule,
}

impl From<TriageRule> for TriageVerdict {
    fn from(rule: TriageRule) -> Self {
        Self {
            level: rule.level(),
            recommendation: rule.recommendation(),
            rule,
        }
    }
}

/// Classifies a transcript.
///
/// Only messages with [`Role::User`] are considered, in the order given. An empty transcript,
/// or one without user messages, is valid input and yields the "need more information"
/// verdict.
pub fn classify<M: TranscriptEntry>(messages: &[M]) -> TriageVerdict {
    classify_utterances(
        messages
            .iter()
            .filter(|m| m.role() == Role::User)
            .map(|m| m.content()),
    )
}

/// Classifies already-extracted user utterances, in conversation order.
pub fn classify_utterances<'a, I>(utterances: I) -> TriageVerdict
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buffer = String::new();
    let mut any = false;
    for utterance in utterances {
        if any {
            buffer.push(' ');
        }
        buffer.push_str(&utterance.to_lowercase());
        any = true;
    }

    if !any {
        return TriageRule::NoInformation.into();
    }

    evaluate(&buffer).into()
}

fn evaluate(buffer: &str) -> TriageRule {
    if lexicon::contains_any(buffer, Tier::Emergency.triggers()) {
        return TriageRule::Emergency;
    }

    let has_chronic_condition = lexicon::contains_any(buffer, Tier::ChronicCondition.triggers());

    if has_chronic_condition && lexicon::contains_any(buffer, Tier::ConcerningSymptom.triggers())
    {
        return TriageRule::ChronicWithConcerningSymptom;
    }

    if lexicon::contains_any(buffer, Tier::Urgent.triggers()) {
        return TriageRule::Urgent;
    }

    if has_chronic_condition {
        return TriageRule::ChronicMonitoring;
    }

    TriageRule::Default
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;

    fn users(texts: &[&str]) -> Vec<Message> {
        texts.iter().map(|t| Message::user(*t)).collect()
    }

    #[test]
    fn empty_transcript_needs_more_information() {
        let verdict = classify::<Message>(&[]);
        assert_eq!(verdict.level, TriageLevel::NonUrgent);
        assert_eq!(verdict.rule, TriageRule::NoInformation);
        assert_eq!(
            verdict.recommendation,
            "Please provide more information about your symptoms."
        );
    }

    #[test]
    fn transcript_without_user_messages_needs_more_information() {
        let transcript = vec![
            Message::system("Hello! What symptoms are you experiencing today?"),
            Message::assistant("I can help with chest pain and stroke questions."),
        ];
        let verdict = classify(&transcript);
        assert_eq!(verdict.rule, TriageRule::NoInformation);
    }

    #[test]
    fn classification_is_deterministic() {
        let transcript = users(&["I have diabetes", "and I feel dizzy today"]);
        let first = classify(&transcript);
        for _ in 0..10 {
            assert_eq!(classify(&transcript), first);
        }
    }

    #[test]
    fn emergency_outranks_urgent() {
        let transcript = users(&["I have vomiting and high fever", "now there is chest pain"]);
        let verdict = classify(&transcript);
        assert_eq!(verdict.level, TriageLevel::Emergency);
        assert_eq!(
            verdict.recommendation,
            "Based on your symptoms, you should seek emergency care immediately."
        );
    }

    #[test]
    fn emergency_outranks_chronic_escalation() {
        let verdict = classify(&users(&["I am diabetic and dizzy", "he is unconscious"]));
        assert_eq!(verdict.rule, TriageRule::Emergency);
    }

    #[test]
    fn chronic_condition_escalates_concerning_symptom_across_messages() {
        let verdict = classify(&users(&["I have diabetes", "today I have dizziness"]));
        assert_eq!(verdict.level, TriageLevel::Urgent);
        assert_eq!(verdict.rule, TriageRule::ChronicWithConcerningSymptom);
        assert!(verdict.recommendation.contains("With your condition"));
    }

    #[test]
    fn concerning_symptom_alone_is_not_urgent() {
        let verdict = classify(&users(&["today I have dizziness"]));
        assert_eq!(verdict.level, TriageLevel::NonUrgent);
        assert_eq!(verdict.rule, TriageRule::Default);
    }

    #[test]
    fn chronic_escalation_outranks_plain_urgent() {
        let verdict = classify(&users(&["asthma patient", "vomiting and feeling weak"]));
        assert_eq!(verdict.rule, TriageRule::ChronicWithConcerningSymptom);
    }

    #[test]
    fn plain_urgent_keyword() {
        let verdict = classify(&users(&["My arm might have a fracture"]));
        assert_eq!(verdict.level, TriageLevel::Urgent);
        assert_eq!(
            verdict.recommendation,
            "Your symptoms suggest you should see a healthcare provider within 24 hours."
        );
    }

    #[test]
    fn chronic_condition_alone_gets_monitoring_advice() {
        let verdict = classify(&users(&["I was told I have hypertension"]));
        assert_eq!(verdict.level, TriageLevel::NonUrgent);
        assert_eq!(verdict.rule, TriageRule::ChronicMonitoring);
        assert_ne!(
            verdict.recommendation,
            TriageRule::Default.recommendation()
        );
        assert!(verdict.recommendation.starts_with("Monitor your condition closely"));
    }

    #[test]
    fn default_is_home_care() {
        let verdict = classify(&users(&["I have a runny nose"]));
        assert_eq!(verdict.level, TriageLevel::NonUrgent);
        assert_eq!(verdict.rule, TriageRule::Default);
        assert_eq!(
            verdict.recommendation,
            "Your symptoms can likely be managed at home. Rest and monitor your condition."
        );
    }

    #[test]
    fn swahili_and_english_breathing_emergencies_match() {
        let sw = classify(&users(&["siwezi kupumua"]));
        let en = classify(&users(&["I can't breathe"]));
        assert_eq!(sw.level, TriageLevel::Emergency);
        assert_eq!(sw, en);
    }

    #[test]
    fn luganda_urgent_trigger() {
        let verdict = classify(&users(&["Nnina okusesema"]));
        assert_eq!(verdict.level, TriageLevel::Urgent);
    }

    #[test]
    fn matching_ignores_case() {
        let verdict = classify(&users(&["SEVERE Bleeding"]));
        assert_eq!(verdict.level, TriageLevel::Emergency);
    }

    #[test]
    fn only_user_messages_are_scanned() {
        let transcript = vec![
            Message::system("Call an ambulance in an emergency."),
            Message::user("I have a runny nose"),
        ];
        assert_eq!(classify(&transcript).rule, TriageRule::Default);
    }

    #[test]
    fn empty_user_content_is_still_a_user_message() {
        let verdict = classify(&users(&[""]));
        assert_eq!(verdict.rule, TriageRule::Default);
    }

    #[test]
    fn level_serialises_with_wire_names() {
        assert_eq!(
            serde_json::to_string(&TriageLevel::NonUrgent).unwrap(),
            "\"nonUrgent\""
        );
        let json = serde_json::to_value(TriageVerdict::from(TriageRule::Urgent)).unwrap();
        assert_eq!(json["level"], "urgent");
        assert_eq!(json["rule"], "urgent");
    }
}
