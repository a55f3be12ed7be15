//! Wire types for the REST API.
//!
//! Field names are camelCase on the wire. Requests carry raw strings for roles, languages and
//! session ids so that handlers can answer malformed values with a 400 rather than a body
//! rejection. Responses carry core types and only override their schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use triage_core::facilities::Coordinates;
use triage_core::{
    Conversation, FollowUp, HealthFacility, Language, Role, SessionId, StoredMessage,
    SymptomCategory, TriageLevel, TriageRule, TriageVerdict,
};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartConversationReq {
    /// Client-held session id. Any UUID spelling; omitted means start a new session.
    #[serde(default)]
    pub session_id: Option<String>,
    /// `en`, `lg` or `sw`. Only used when a conversation is created.
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDto {
    pub id: u64,
    #[schema(value_type = String, example = "550e8400e29b41d4a716446655440000")]
    pub session_id: SessionId,
    #[schema(value_type = String, example = "sw")]
    pub language: Language,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl From<Conversation> for ConversationDto {
    fn from(c: Conversation) -> Self {
        Self {
            id: c.id,
            session_id: c.session_id,
            language: c.language,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: u64,
    pub conversation_id: u64,
    #[schema(value_type = String, example = "user")]
    pub role: Role,
    pub content: String,
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: DateTime<Utc>,
}

impl From<StoredMessage> for MessageDto {
    fn from(m: StoredMessage) -> Self {
        Self {
            id: m.id,
            conversation_id: m.conversation_id,
            role: m.role,
            content: m.content,
            timestamp: m.timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartConversationRes {
    pub conversation: ConversationDto,
    pub messages: Vec<MessageDto>,
    /// `false` when an existing conversation was resumed.
    pub created: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SendMessageReq {
    /// `system`, `user` or `assistant`.
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct VerdictDto {
    #[schema(value_type = String, example = "urgent")]
    pub level: TriageLevel,
    #[schema(value_type = String)]
    pub recommendation: &'static str,
    #[schema(value_type = String, example = "chronicWithConcerningSymptom")]
    pub rule: TriageRule,
}

impl From<TriageVerdict> for VerdictDto {
    fn from(v: TriageVerdict) -> Self {
        Self {
            level: v.level,
            recommendation: v.recommendation,
            rule: v.rule,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FollowUpDto {
    pub question: String,
    pub options: Vec<String>,
}

impl From<FollowUp> for FollowUpDto {
    fn from(f: FollowUp) -> Self {
        Self {
            question: f.question.to_string(),
            options: f.options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRes {
    pub user_message: MessageDto,
    pub system_responses: Vec<MessageDto>,
    /// Present for user messages only.
    pub verdict: Option<VerdictDto>,
    pub follow_up: Option<FollowUpDto>,
    pub show_facilities: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TranscriptMessageReq {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TriageReq {
    pub messages: Vec<TranscriptMessageReq>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategorizeReq {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategorizeRes {
    #[schema(value_type = String, example = "fever")]
    pub category: SymptomCategory,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FacilitiesQuery {
    /// Only list facilities that run emergency services.
    #[serde(default)]
    pub emergency: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct CoordinatesDto {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinates> for CoordinatesDto {
    fn from(c: Coordinates) -> Self {
        Self { lat: c.lat, lng: c.lng }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FacilityDto {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub hours: Option<String>,
    #[serde(rename = "type")]
    pub facility_type: String,
    pub services: Vec<String>,
    pub coordinates: Option<CoordinatesDto>,
    pub emergency: bool,
}

impl From<&HealthFacility> for FacilityDto {
    fn from(f: &HealthFacility) -> Self {
        Self {
            id: f.id,
            name: f.name.to_string(),
            address: f.address.to_string(),
            phone: f.phone.map(str::to_string),
            hours: f.hours.map(str::to_string),
            facility_type: f.facility_type.to_string(),
            services: f.services.iter().map(|s| s.to_string()).collect(),
            coordinates: f.coordinates.map(CoordinatesDto::from),
            emergency: f.emergency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::{all_facilities, classify_utterances, get_follow_up};

    #[test]
    fn verdict_uses_wire_names() {
        let dto = VerdictDto::from(classify_utterances(["I have diabetes and feel dizzy"]));
        let json = serde_json::to_value(dto).unwrap();
        assert_eq!(json["level"], "urgent");
        assert_eq!(json["rule"], "chronicWithConcerningSymptom");
    }

    #[test]
    fn start_request_fields_are_optional() {
        let req: StartConversationReq = serde_json::from_str("{}").unwrap();
        assert!(req.session_id.is_none());
        assert!(req.language.is_none());

        let req: StartConversationReq =
            serde_json::from_str(r#"{"sessionId":"abc","language":"lg"}"#).unwrap();
        assert_eq!(req.session_id.as_deref(), Some("abc"));
    }

    #[test]
    fn facility_keeps_type_field_name() {
        let dto = FacilityDto::from(&all_facilities()[0]);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["type"], "Public Hospital");
        assert!(json["coordinates"]["lng"].is_number());
    }

    #[test]
    fn follow_up_copies_options() {
        let dto = FollowUpDto::from(get_follow_up(SymptomCategory::Fever, Language::Sw));
        assert_eq!(dto.options.len(), 3);
    }
}
