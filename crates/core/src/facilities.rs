//! Health facility directory.

use crate::classifier::TriageLevel;
use crate::lexicon::{self, FACILITY_REQUEST};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthFacility {
    pub id: u32,
    pub name: &'static str,
    pub address: &'static str,
    pub phone: Option<&'static str>,
    pub hours: Option<&'static str>,
    #[serde(rename = "type")]
    pub facility_type: &'static str,
    pub services: &'static [&'static str],
    pub coordinates: Option<Coordinates>,
    /// Whether the facility runs emergency services.
    pub emergency: bool,
}

pub fn all_facilities() -> &'static [HealthFacility] {
    &FACILITIES
}

pub fn emergency_facilities() -> impl Iterator<Item = &'static HealthFacility> {
    FACILITIES.iter().filter(|f| f.emergency)
}

/// Facilities to suggest for a verdict: emergency-capable ones for an emergency, all
/// otherwise.
pub fn facilities_for(level: TriageLevel) -> Vec<&'static HealthFacility> {
    match level {
        TriageLevel::Emergency => emergency_facilities().collect(),
        TriageLevel::Urgent | TriageLevel::NonUrgent => FACILITIES.iter().collect(),
    }
}

/// Returns true if the utterance asks to see facilities (or answers yes to the prompt).
///
/// Plain substring match like the rest of the lexicon, so short words such as `ye` also match
/// inside longer words.
pub fn requests_facilities(text: &str) -> bool {
    lexicon::contains_any(&text.to_lowercase(), FACILITY_REQUEST)
}

const FULL_SERVICES: &[&str] = &[
    "Emergency Services",
    "General Healthcare",
    "Specialized Care",
];

static FACILITIES: [HealthFacility; 5] = [
    HealthFacility {
        id: 1,
        name: "Mulago National Referral Hospital",
        address: "Upper Mulago Hill, Kampala",
        phone: Some("+256-414-541-133"),
        hours: Some("Open 24 hours"),
        facility_type: "Public Hospital",
        services: FULL_SERVICES,
        coordinates: Some(Coordinates {
            lat: 0.3476,
            lng: 32.5825,
        }),
        emergency: true,
    },
    HealthFacility {
        id: 2,
        name: "Kampala International Hospital",
        address: "Namuwongo, Kampala",
        phone: Some("+256-312-188-800"),
        hours: Some("Open 24 hours"),
        facility_type: "Private Hospital",
        services: FULL_SERVICES,
        coordinates: Some(Coordinates {
            lat: 0.3157,
            lng: 32.6078,
        }),
        emergency: true,
    },
    HealthFacility {
        id: 3,
        name: "Kiswa Health Center",
        address: "Bugolobi, Kampala",
        phone: Some("+256-414-220-889"),
        hours: Some("8:00 AM - 5:00 PM"),
        facility_type: "Public Clinic",
        services: &["Primary Care", "Maternal Health", "Vaccinations"],
        coordinates: Some(Coordinates {
            lat: 0.3198,
            lng: 32.6135,
        }),
        emergency: false,
    },
    HealthFacility {
        id: 4,
        name: "Naguru General Hospital",
        address: "Naguru, Kampala",
        phone: Some("+256-414-510-096"),
        hours: Some("Open 24 hours"),
        facility_type: "Public Hospital",
        services: &[
            "Emergency Services",
            "General Healthcare",
            "HIV/AIDS Treatment",
        ],
        coordinates: Some(Coordinates {
            lat: 0.3341,
            lng: 32.6069,
        }),
        emergency: true,
    },
    HealthFacility {
        id: 5,
        name: "Case Medical Center",
        address: "Kampala Road, Kampala",
        phone: Some("+256-312-250-700"),
        hours: Some("Open 24 hours"),
        facility_type: "Private Hospital",
        services: FULL_SERVICES,
        coordinates: Some(Coordinates {
            lat: 0.3172,
            lng: 32.5872,
        }),
        emergency: true,
    },
];
