//! Symptom category catalogue.
//!
//! Static reference data: a localized label per category and an ordered list of localized
//! follow-up questions. Every localized value is a [`Localized`], which has one field per
//! [`Language`], so a missing translation fails to compile.

use crate::categorize::SymptomCategory;
use serde::Serialize;
use triage_types::Language;

/// One value per supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Localized<T> {
    pub en: T,
    pub lg: T,
    pub sw: T,
}

impl<T> Localized<T> {
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::En => &self.en,
            Language::Lg => &self.lg,
            Language::Sw => &self.sw,
        }
    }
}

/// A clarifying question with localized prompt and answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpQuestion {
    pub id: &'static str,
    pub translations: Localized<&'static str>,
    pub options: Localized<&'static [&'static str]>,
}

/// Catalogue entry for one symptom category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub key: SymptomCategory,
    pub translations: Localized<&'static str>,
    pub follow_up_questions: &'static [FollowUpQuestion],
    /// Id of the question asked first when the conversation wants clarification. `None` means
    /// the generic prompt is used instead.
    #[serde(skip)]
    pub lead_question: Option<&'static str>,
}

impl CategoryInfo {
    pub fn question(&self, id: &str) -> Option<&'static FollowUpQuestion> {
        self.follow_up_questions.iter().find(|q| q.id == id)
    }

    pub fn lead(&self) -> Option<&'static FollowUpQuestion> {
        self.lead_question.and_then(|id| self.question(id))
    }
}

/// Returns the catalogue entry for `category`.
pub fn category_info(category: SymptomCategory) -> &'static CategoryInfo {
    match category {
        SymptomCategory::Fever => &CATALOGUE[0],
        SymptomCategory::Breathing => &CATALOGUE[1],
        SymptomCategory::Pain => &CATALOGUE[2],
        SymptomCategory::Injury => &CATALOGUE[3],
        SymptomCategory::Child => &CATALOGUE[4],
        SymptomCategory::Other => &CATALOGUE[5],
    }
}

/// Every category, in display order.
pub fn all_categories() -> &'static [CategoryInfo] {
    &CATALOGUE
}

static CATALOGUE: [CategoryInfo; 6] = [
    CategoryInfo {
        key: SymptomCategory::Fever,
        translations: Localized {
            en: "Fever or high temperature",
            lg: "Omusujja oba ebugumu bw'omubiri",
            sw: "Homa au joto la juu",
        },
        follow_up_questions: &[
            FollowUpQuestion {
                id: "duration",
                translations: Localized {
                    en: "How long have you had the fever?",
                    lg: "Omaze bbanga ki n'omusujja?",
                    sw: "Umeugua homa kwa muda gani?",
                },
                options: Localized {
                    en: &["Less than 24 hours", "1-3 days", "More than 3 days"],
                    lg: &["Okusinga essawa 24", "Ennaku 1-3", "Okusinga ennaku 3"],
                    sw: &["Chini ya saa 24", "Siku 1-3", "Zaidi ya siku 3"],
                },
            },
            FollowUpQuestion {
                id: "temperature",
                translations: Localized {
                    en: "What is your temperature, if you know?",
                    lg: "Ebugumu bw'omubiri bwo buli ki, bw'oba okimanyi?",
                    sw: "Joto lako ni kiasi gani, ikiwa unajua?",
                },
                options: Localized {
                    en: &["Below 38°C", "38°C - 39°C", "Above 39°C", "I don't know"],
                    lg: &["Wansi wa 38°C", "38°C - 39°C", "Waggulu wa 39°C", "Simanyi"],
                    sw: &["Chini ya 38°C", "38°C - 39°C", "Zaidi ya 39°C", "Sijui"],
                },
            },
        ],
        lead_question: Some("duration"),
    },
    CategoryInfo {
        key: SymptomCategory::Breathing,
        translations: Localized {
            en: "Breathing difficulty",
            lg: "Obuzibu bw'okussa",
            sw: "Ugumu wa kupumua",
        },
        follow_up_questions: &[
            FollowUpQuestion {
                id: "duration",
                translations: Localized {
                    en: "How long have you had difficulty breathing?",
                    lg: "Omaze bbanga ki nga olina obuzibu mu kussa?",
                    sw: "Umekuwa na ugumu wa kupumua kwa muda gani?",
                },
                options: Localized {
                    en: &["Just started", "Several hours", "Days"],
                    lg: &["Nakatandika", "Essaawa eziziddako", "Enaku"],
                    sw: &["Nimeanza tu", "Saa kadhaa", "Siku"],
                },
            },
            FollowUpQuestion {
                id: "severity",
                translations: Localized {
                    en: "How severe is your breathing difficulty?",
                    lg: "Obuzibu bwo mu kussa bukali butya?",
                    sw: "Ugumu wako wa kupumua ni mkali kiasi gani?",
                },
                options: Localized {
                    en: &[
                        "Mild - can speak in full sentences",
                        "Moderate - need to pause when speaking",
                        "Severe - can only say a few words at a time",
                    ],
                    lg: &[
                        "Kitono - osobola okwogera mu mboozi enzijjuvu",
                        "Wakati - weetaaga okuwummulako nga oyogera",
                        "Nyo - osobola okwogera ebigambo bitono mu kiseera",
                    ],
                    sw: &[
                        "Kidogo - naweza kuongea sentensi kamili",
                        "Wastani - nahitaji kupumzika ninapoongea",
                        "Kali - naweza kusema maneno machache tu kwa wakati mmoja",
                    ],
                },
            },
        ],
        lead_question: Some("severity"),
    },
    CategoryInfo {
        key: SymptomCategory::Pain,
        translations: Localized {
            en: "Pain (head, chest, abdomen)",
            lg: "Obulumi (omutwe, ekifuba, olubuto)",
            sw: "Maumivu (kichwa, kifua, tumbo)",
        },
        follow_up_questions: &[
            FollowUpQuestion {
                id: "location",
                translations: Localized {
                    en: "Where is the pain located?",
                    lg: "Obulumi buli wa?",
                    sw: "Maumivu yako ni wapi?",
                },
                options: Localized {
                    en: &["Head", "Chest", "Abdomen/Stomach", "Other"],
                    lg: &["Omutwe", "Ekifuba", "Olubuto", "Ewalala"],
                    sw: &["Kichwa", "Kifua", "Tumbo", "Nyingine"],
                },
            },
            FollowUpQuestion {
                id: "severity",
                translations: Localized {
                    en: "How severe is the pain from 1 (mild) to 10 (severe)?",
                    lg: "Obulumi bukali butya okuva ku 1 (kitono) okutuuka ku 10 (bungi nnyo)?",
                    sw: "Maumivu ni makali kiasi gani kutoka 1 (kidogo) hadi 10 (makali sana)?",
                },
                options: Localized {
                    en: &["1-3 (Mild)", "4-6 (Moderate)", "7-10 (Severe)"],
                    lg: &["1-3 (Kitono)", "4-6 (Wakati)", "7-10 (Bungi nnyo)"],
                    sw: &["1-3 (Kidogo)", "4-6 (Wastani)", "7-10 (Makali sana)"],
                },
            },
        ],
        lead_question: None,
    },
    CategoryInfo {
        key: SymptomCategory::Injury,
        translations: Localized {
            en: "Injury or wound",
            lg: "Ebisago oba ekiwundu",
            sw: "Jeraha au kidonda",
        },
        follow_up_questions: &[
            FollowUpQuestion {
                id: "bleeding",
                translations: Localized {
                    en: "Is there bleeding?",
                    lg: "Waliwo okulukusa omusaayi?",
                    sw: "Je, kuna kutokwa damu?",
                },
                options: Localized {
                    en: &["Yes, heavy bleeding", "Yes, slight bleeding", "No bleeding"],
                    lg: &[
                        "Yee, okulukusa omusaayi omungi",
                        "Yee, okulukusa omusaayi mutono",
                        "Tewali kulukusa musaayi",
                    ],
                    sw: &[
                        "Ndio, kutokwa damu nyingi",
                        "Ndio, kutokwa damu kidogo",
                        "Hakuna kutokwa damu",
                    ],
                },
            },
            FollowUpQuestion {
                id: "cause",
                translations: Localized {
                    en: "What caused the injury?",
                    lg: "Kiki ekyaleeta ekisago?",
                    sw: "Ni nini kilisababisha jeraha?",
                },
                options: Localized {
                    en: &["Fall", "Cut", "Burn", "Traffic accident", "Other"],
                    lg: &["Okugwa", "Okusala", "Okwokya", "Akabenje k'emotoka", "Ekirala"],
                    sw: &["Kuanguka", "Kukatwa", "Kuchomwa", "Ajali ya barabarani", "Nyingine"],
                },
            },
        ],
        lead_question: None,
    },
    CategoryInfo {
        key: SymptomCategory::Child,
        translations: Localized {
            en: "Child illness",
            lg: "Obulwadde bw'abaana",
            sw: "Ugonjwa wa mtoto",
        },
        follow_up_questions: &[
            FollowUpQuestion {
                id: "age",
                translations: Localized {
                    en: "How old is the child?",
                    lg: "Omwana alina emyaka emeka?",
                    sw: "Mtoto ana umri gani?",
                },
                options: Localized {
                    en: &["Under 1 year", "1-5 years", "6-12 years", "13-17 years"],
                    lg: &["Wansi w'omwaka 1", "Emyaka 1-5", "Emyaka 6-12", "Emyaka 13-17"],
                    sw: &["Chini ya mwaka 1", "Miaka 1-5", "Miaka 6-12", "Miaka 13-17"],
                },
            },
            FollowUpQuestion {
                id: "symptoms",
                translations: Localized {
                    en: "What symptoms does the child have?",
                    lg: "Omwana alina bubonero ki?",
                    sw: "Mtoto ana dalili gani?",
                },
                options: Localized {
                    en: &["Fever", "Vomiting", "Diarrhea", "Rash", "Cough", "Other"],
                    lg: &[
                        "Omusujja",
                        "Okusesema",
                        "Ekudukudu",
                        "Amabala",
                        "Okukolola",
                        "Ebirala",
                    ],
                    sw: &["Homa", "Kutapika", "Kuhara", "Upele", "Kikohozi", "Nyingine"],
                },
            },
        ],
        lead_question: None,
    },
    CategoryInfo {
        key: SymptomCategory::Other,
        translations: Localized {
            en: "Other symptoms",
            lg: "Obubonero obulala",
            sw: "Dalili nyingine",
        },
        follow_up_questions: &[
            FollowUpQuestion {
                id: "description",
                translations: Localized {
                    en: "Please describe your symptoms briefly",
                    lg: "Nsaba onnyonnyole mu bufunze obubonero bwo",
                    sw: "Tafadhali eleza dalili zako kwa ufupi",
                },
                options: Localized {
                    en: &[],
                    lg: &[],
                    sw: &[],
                },
            },
            FollowUpQuestion {
                id: "duration",
                translations: Localized {
                    en: "How long have you had these symptoms?",
                    lg: "Obubonero buno obumaze bbanga ki?",
                    sw: "Umekuwa na dalili hizi kwa muda gani?",
                },
                options: Localized {
                    en: &["Less than 24 hours", "1-3 days", "4-7 days", "More than a week"],
                    lg: &[
                        "Wansi wa ssaawa 24",
                        "Ennaku 1-3",
                        "Ennaku 4-7",
                        "Okusukka wiiki emu",
                    ],
                    sw: &["Chini ya saa 24", "Siku 1-3", "Siku 4-7", "Zaidi ya wiki moja"],
                },
            },
        ],
        lead_question: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_info_matches_requested_category() {
        for category in SymptomCategory::ALL {
            assert_eq!(category_info(category).key, category);
        }
    }

    #[test]
    fn every_question_has_matching_option_counts_across_languages() {
        for info in all_categories() {
            assert_eq!(info.follow_up_questions.len(), 2, "{}", info.key);
            for q in info.follow_up_questions {
                let n = q.options.en.len();
                assert_eq!(q.options.lg.len(), n, "{}/{}", info.key, q.id);
                assert_eq!(q.options.sw.len(), n, "{}/{}", info.key, q.id);
            }
        }
    }

    #[test]
    fn only_fever_and_breathing_have_lead_questions() {
        for info in all_categories() {
            match info.key {
                SymptomCategory::Fever | SymptomCategory::Breathing => {
                    assert!(info.lead().is_some(), "{} has no lead question", info.key)
                }
                _ => assert!(info.lead().is_none(), "{} has a lead question", info.key),
            }
        }
    }

    #[test]
    fn serialises_with_wire_shape() {
        let json = serde_json::to_value(category_info(SymptomCategory::Fever)).unwrap();
        assert_eq!(json["key"], "fever");
        assert_eq!(json["translations"]["sw"], "Homa au joto la juu");
        assert_eq!(json["followUpQuestions"][0]["id"], "duration");
        assert_eq!(
            json["followUpQuestions"][0]["options"]["en"]
                .as_array()
                .unwrap()
                .len(),
            3
        );
        assert!(json.get("leadQuestion").is_none());
    }
}
