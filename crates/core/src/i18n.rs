//! User-facing string tables.
//!
//! One [`Translations`] table per [`Language`]. Lookups are total: the match in
//! [`translations`] has an arm per language, so there is no missing-table case at runtime.

use crate::classifier::TriageLevel;
use serde::Serialize;
use triage_types::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLabels {
    pub fever: &'static str,
    pub breathing: &'static str,
    pub pain: &'static str,
    pub injury: &'static str,
    pub child: &'static str,
    pub other: &'static str,
}

/// Reply templates keyed by triage level, plus the facility prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageTexts {
    pub emergency: &'static str,
    pub urgent: &'static str,
    pub non_urgent: &'static str,
    pub follow_up: &'static str,
}

impl TriageTexts {
    pub fn for_level(&self, level: TriageLevel) -> &'static str {
        match level {
            TriageLevel::Emergency => self.emergency,
            TriageLevel::Urgent => self.urgent,
            TriageLevel::NonUrgent => self.non_urgent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityTypeLabels {
    pub public: &'static str,
    pub private: &'static str,
    pub clinic: &'static str,
    pub emergency: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    pub title: &'static str,
    pub welcome: &'static str,
    pub typing: &'static str,
    pub privacy_notice: &'static str,
    pub symptom_prompt: &'static str,
    pub nearby_facilities: &'static str,
    pub categories: CategoryLabels,
    pub triage: TriageTexts,
    pub yes: &'static str,
    pub no: &'static str,
    pub show_more: &'static str,
    pub ask_another: &'static str,
    pub goodbye: &'static str,
    pub language_selector: &'static str,
    pub continue_in: &'static str,
    pub back_button: &'static str,
    pub type_placeholder: &'static str,
    pub send_button: &'static str,
    pub facility_type: FacilityTypeLabels,
    pub close: &'static str,
}

pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::En => &EN,
        Language::Lg => &LG,
        Language::Sw => &SW,
    }
}

static EN: Translations = Translations {
    title: "Health Companion",
    welcome: "Hello! I'm your health companion. I can help assess your symptoms and guide you on what to do next. What symptoms are you experiencing today?",
    typing: "Typing...",
    privacy_notice: "This service provides initial guidance only and is not a substitute for professional medical advice.",
    symptom_prompt: "Please describe your symptoms or select a category:",
    nearby_facilities: "Nearby Health Facilities",
    categories: CategoryLabels {
        fever: "Fever or high temperature",
        breathing: "Breathing difficulty",
        pain: "Pain (head, chest, abdomen)",
        injury: "Injury or wound",
        child: "Child illness",
        other: "Other symptoms",
    },
    triage: TriageTexts {
        emergency: "Based on your symptoms, you should seek emergency care immediately. Please go to the nearest emergency room or call an ambulance.",
        urgent: "Your symptoms suggest you should see a healthcare provider within 24 hours. Here are some nearby clinics.",
        non_urgent: "Your symptoms can likely be managed at home. Rest, drink fluids, and monitor your condition. If symptoms worsen or persist for more than 3 days, please visit a clinic.",
        follow_up: "Would you like to see a list of nearby healthcare facilities?",
    },
    yes: "Yes",
    no: "No",
    show_more: "Show nearby facilities",
    ask_another: "Ask another question",
    goodbye: "Thank you for using Health Companion. Take care of your health!",
    language_selector: "Please select your language",
    continue_in: "Continue in English",
    back_button: "Back",
    type_placeholder: "Type your symptoms or concerns...",
    send_button: "Send",
    facility_type: FacilityTypeLabels {
        public: "Public Hospital",
        private: "Private Hospital",
        clinic: "Clinic",
        emergency: "Emergency Services",
    },
    close: "Close",
};

static LG: Translations = Translations {
    title: "Omubeezi w'Obulamu",
    welcome: "Oli otya! Nze mubeezi wo ow'obulamu. Nsobola okukuyamba okulamula obubonero bwo era nkuwe amagezi ku ki ekigwanidde okukolebwa. Obubonero ki b'olina leero?",
    typing: "Mpandika...",
    privacy_notice: "Empeereza eno ewa okuluŋŋamizibwa okusookerwako kwokka era si ky'okuzzaamu kifo okuwa amagezi ag'obulamu ag'obwanakyewa.",
    symptom_prompt: "Nsaba onnyonyole obubonero bwo oba londa ekika:",
    nearby_facilities: "Ebifo by'Obulamu ebiri okumpi",
    categories: CategoryLabels {
        fever: "Omusujja oba ebugumu bw'omubiri",
        breathing: "Obuzibu bw'okussa",
        pain: "Obulumi (omutwe, ekifuba, olubuto)",
        injury: "Ebisago oba ekiwundu",
        child: "Obulwadde bw'abaana",
        other: "Obubonero obulala",
    },
    triage: TriageTexts {
        emergency: "Okusinziira ku bubonero bwo, oteekwa okunoonya obujjanjabi bw'embagga amangu ddala. Nsaba ogende mu ddwaliro erya okumpi oba oyite ambulance.",
        urgent: "Obubonero bwo bulaga nti olina okulaba omujjanjabi w'ebyobulamu mu ssawa 24. Bino bye bifo ebimu ebiri okumpi.",
        non_urgent: "Obubonero bwo busobola okulabirirwa awaka. Wummula, nywa amazzi, era weekenneenye. Singa obubonero bweyongera oba busigalawo okusukka ennaku 3, nsaba okyalire ekiddwaaliiro.",
        follow_up: "Oyagala okulaba olukalala lw'ebifo by'obulamu ebiri okumpi?",
    },
    yes: "Ye",
    no: "Nedda",
    show_more: "Laga ebifo ebiri okumpi",
    ask_another: "Buuza ekibuuzo ekirala",
    goodbye: "Webale okukozesa Omubeezi w'Obulamu. Wekekkume!",
    language_selector: "Nsaba olonde olulimi lwo",
    continue_in: "Weyongere mu Luganda",
    back_button: "Ddayo",
    type_placeholder: "Wandika obubonero bwo oba by'olowozaako...",
    send_button: "Wereza",
    facility_type: FacilityTypeLabels {
        public: "Eddwaliro Lya Gavumenti",
        private: "Eddwaliro Ly'obwananyini",
        clinic: "Kiliniki",
        emergency: "Obujjanjabi Obw'embagga",
    },
    close: "Ggalawo",
};

static SW: Translations = Translations {
    title: "Msaidizi wa Afya",
    welcome: "Habari! Mimi ni msaidizi wako wa afya. Naweza kukusaidia kutathmini dalili zako na kukuelekeza kufanya nini kifuatacho. Unazoumwa dalili gani leo?",
    typing: "Anaandika...",
    privacy_notice: "Huduma hii inatoa mwongozo wa awali pekee na sio badala ya ushauri wa kitaalamu wa matibabu.",
    symptom_prompt: "Tafadhali eleza dalili zako au chagua jamii:",
    nearby_facilities: "Vituo vya Afya vya Karibu",
    categories: CategoryLabels {
        fever: "Homa au joto la juu",
        breathing: "Ugumu wa kupumua",
        pain: "Maumivu (kichwa, kifua, tumbo)",
        injury: "Jeraha au kidonda",
        child: "Ugonjwa wa mtoto",
        other: "Dalili nyingine",
    },
    triage: TriageTexts {
        emergency: "Kulingana na dalili zako, unapaswa kutafuta huduma ya dharura mara moja. Tafadhali nenda kwenye chumba cha dharura cha karibu au piga simu kwa ambulensi.",
        urgent: "Dalili zako zinaonyesha unapaswa kuona mtoa huduma ya afya ndani ya saa 24. Hapa kuna kliniki kadhaa za karibu.",
        non_urgent: "Dalili zako zinaweza kudhibitiwa nyumbani. Pumzika, kunywa maji mengi, na fuatilia hali yako. Ikiwa dalili zinazidi au zinaendelea kwa zaidi ya siku 3, tafadhali tembelea kliniki.",
        follow_up: "Ungependa kuona orodha ya vituo vya afya vya karibu?",
    },
    yes: "Ndio",
    no: "Hapana",
    show_more: "Onyesha vituo vya karibu",
    ask_another: "Uliza swali lingine",
    goodbye: "Asante kwa kutumia Msaidizi wa Afya. Tunza afya yako!",
    language_selector: "Tafadhali chagua lugha yako",
    continue_in: "Endelea kwa Kiswahili",
    back_button: "Rudi",
    type_placeholder: "Andika dalili zako au wasiwasi...",
    send_button: "Tuma",
    facility_type: FacilityTypeLabels {
        public: "Hospitali ya Umma",
        private: "Hospitali ya Binafsi",
        clinic: "Kliniki",
        emergency: "Huduma za Dharura",
    },
    close: "Funga",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::category_info;
    use crate::categorize::SymptomCategory;

    #[test]
    fn category_labels_agree_with_catalogue() {
        for language in Language::ALL {
            let labels = translations(language).categories;
            let pairs = [
                (SymptomCategory::Fever, labels.fever),
                (SymptomCategory::Breathing, labels.breathing),
                (SymptomCategory::Pain, labels.pain),
                (SymptomCategory::Injury, labels.injury),
                (SymptomCategory::Child, labels.child),
                (SymptomCategory::Other, labels.other),
            ];
            for (category, label) in pairs {
                assert_eq!(*category_info(category).translations.get(language), label);
            }
        }
    }

    #[test]
    fn triage_templates_differ_per_level() {
        for language in Language::ALL {
            let t = translations(language).triage;
            assert_ne!(t.for_level(TriageLevel::Emergency), t.for_level(TriageLevel::Urgent));
            assert_ne!(t.for_level(TriageLevel::Urgent), t.for_level(TriageLevel::NonUrgent));
        }
    }

    #[test]
    fn serialises_with_camel_case_keys() {
        let json = serde_json::to_value(translations(Language::Sw)).unwrap();
        let non_urgent = json["triage"]["nonUrgent"].as_str().unwrap();
        assert!(non_urgent.starts_with("Dalili "));
        assert_eq!(json["sendButton"], "Tuma");
        assert_eq!(json["facilityType"]["clinic"], "Kliniki");
    }
}
