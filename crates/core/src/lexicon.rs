//! Keyword lexicon.
//!
//! Static, language-tagged trigger phrases used by the classifier, the symptom categorizer
//! and facility-request detection. Every phrase is stored lower-case and is matched as a plain
//! substring of lower-cased input, so a single scan covers English, Luganda and Kiswahili text
//! without detecting the language first.
//!
//! Some entries are broad (`pressure`, `moyo`, `ini`) and also match unrelated text.

use triage_types::Language;

/// A single trigger phrase and the language it was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub phrase: &'static str,
    pub language: Language,
}

const fn en(phrase: &'static str) -> Trigger {
    Trigger {
        phrase,
        language: Language::En,
    }
}

const fn lg(phrase: &'static str) -> Trigger {
    Trigger {
        phrase,
        language: Language::Lg,
    }
}

const fn sw(phrase: &'static str) -> Trigger {
    Trigger {
        phrase,
        language: Language::Sw,
    }
}

/// Severity tiers scanned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Emergency,
    Urgent,
    ChronicCondition,
    ConcerningSymptom,
}

impl Tier {
    pub fn triggers(&self) -> &'static [Trigger] {
        match self {
            Tier::Emergency => EMERGENCY,
            Tier::Urgent => URGENT,
            Tier::ChronicCondition => CHRONIC_CONDITIONS,
            Tier::ConcerningSymptom => CONCERNING_SYMPTOMS,
        }
    }
}

pub static EMERGENCY: &[Trigger] = &[
    en("emergency"),
    en("ambulance"),
    en("severe"),
    en("can't breathe"),
    en("heart attack"),
    en("stroke"),
    en("unconscious"),
    en("convulsion"),
    en("seizure"),
    en("bleeding"),
    en("badly injured"),
    en("suicide"),
    en("not breathing"),
    en("chest pain"),
    en("choking"),
    en("accident"),
    en("bleeding heavily"),
    lg("embeggeza"),
    lg("ambulansi"),
    lg("ssisobola kusa"),
    lg("kuzirika"),
    lg("munnyo obutayingira"),
    sw("dharura"),
    sw("ambulensi"),
    sw("siwezi kupumua"),
    sw("mshtuko wa moyo"),
    sw("kiharusi"),
];

pub static URGENT: &[Trigger] = &[
    en("high fever"),
    en("intense pain"),
    en("broken bone"),
    en("fracture"),
    en("infection"),
    en("dehydration"),
    en("migraine"),
    en("vomiting"),
    en("diarrhea"),
    en("moderate pain"),
    lg("omusujja mungi"),
    lg("okuvuna"),
    lg("emiwogo"),
    lg("okusesema"),
    lg("ekidukudu"),
    sw("homa kali"),
    sw("maumivu makali"),
    sw("mfupa uliovunjika"),
    sw("kuumwa sana"),
    sw("kutapika"),
];

pub static CHRONIC_CONDITIONS: &[Trigger] = &[
    en("diabetes"),
    en("diabetic"),
    en("heart disease"),
    en("hypertension"),
    en("high blood pressure"),
    en("asthma"),
    en("epilepsy"),
    en("kidney disease"),
    en("liver disease"),
    en("cancer"),
    lg("sukari"),
    lg("pressure"),
    sw("kisukari"),
    sw("moyo"),
    sw("figo"),
    sw("ini"),
    sw("kifua kikuu"),
];

pub static CONCERNING_SYMPTOMS: &[Trigger] = &[
    en("dizzy"),
    en("dizziness"),
    en("fainting"),
    en("fainted"),
    en("passed out"),
    en("confused"),
    en("confusion"),
    en("blurry vision"),
    en("numbness"),
    en("tingling"),
    en("sweating"),
    en("shaking"),
    en("weak"),
    en("weakness"),
    en("headache"),
    en("severe headache"),
    en("trouble speaking"),
    en("slurred speech"),
    lg("okulimbibwa"),
    lg("ebizindaro"),
    lg("obutategera bulungi"),
    lg("okuvaamu amaanyi"),
    sw("kizunguzungu"),
    sw("kupoteza fahamu"),
    sw("kuanguka"),
    sw("kutokwa na jasho"),
    sw("kutetemeka"),
];

// Symptom category keywords, scanned in the categorizer's priority order.

pub static FEVER: &[Trigger] = &[
    en("fever"),
    en("temperature"),
    en("hot"),
    lg("omusujja"),
    lg("ebugumu"),
    sw("homa"),
    sw("joto"),
];

pub static BREATHING: &[Trigger] = &[
    en("breath"),
    en("breathing"),
    en("shortness"),
    en("asthma"),
    lg("okussa"),
    sw("kupumua"),
];

pub static PAIN: &[Trigger] = &[
    en("pain"),
    en("hurts"),
    en("ache"),
    en("headache"),
    lg("obulumi"),
    lg("omutwe"),
    lg("ennyone"),
    sw("maumivu"),
];

pub static INJURY: &[Trigger] = &[
    en("injury"),
    en("wound"),
    en("cut"),
    en("broken"),
    en("fracture"),
    en("bleeding"),
    en("fell"),
    lg("ekiwundu"),
    lg("ebisago"),
    sw("jeraha"),
];

pub static CHILD: &[Trigger] = &[
    en("child"),
    en("baby"),
    en("infant"),
    lg("omwana"),
    sw("mtoto"),
];

/// Phrases that signal the user wants to see nearby facilities, typically in reply to the
/// facility prompt.
pub static FACILITY_REQUEST: &[Trigger] = &[
    en("yes"),
    lg("ye"),
    sw("ndio"),
    en("facility"),
    en("facilities"),
    en("hospital"),
    en("clinic"),
];

/// Returns the first trigger (in list order) whose phrase occurs in `haystack`.
///
/// `haystack` must already be lower-cased. List order, not position in the text, decides which
/// trigger is reported when several match.
pub fn find_trigger(haystack: &str, triggers: &'static [Trigger]) -> Option<&'static Trigger> {
    triggers.iter().find(|t| haystack.contains(t.phrase))
}

/// Returns true if any trigger phrase occurs in the lower-cased `haystack`.
pub fn contains_any(haystack: &str, triggers: &'static [Trigger]) -> bool {
    find_trigger(haystack, triggers).is_some()
}
