use crate::error::{ApiResult, JsonBody};
use crate::AppState;
use api_shared::{
    CategorizeReq, CategorizeRes, ErrorRes, FacilitiesQuery, FacilityDto, FollowUpDto,
    HealthRes, HealthService, MessageDto, SendMessageReq, SendMessageRes, StartConversationReq,
    StartConversationRes, TriageReq, VerdictDto,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use triage_core::facilities::{all_facilities, emergency_facilities};
use triage_core::{
    all_categories, categorize, classify, follow_up_for_key, translations, CategoryInfo,
    ConversationId, Language, Message, Role, SessionId, Translations,
};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
#[axum::debug_handler]
pub async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/symptom-categories",
    responses(
        (status = 200, description = "Symptom categories with localized labels and follow-up questions")
    )
)]
/// List the symptom category catalogue
#[axum::debug_handler]
pub async fn symptom_categories() -> Json<&'static [CategoryInfo]> {
    Json(all_categories())
}

#[utoipa::path(
    get,
    path = "/api/health-facilities",
    params(FacilitiesQuery),
    responses(
        (status = 200, description = "Health facilities", body = [FacilityDto])
    )
)]
/// List health facilities, optionally only those with emergency services
#[axum::debug_handler]
pub async fn health_facilities(Query(query): Query<FacilitiesQuery>) -> Json<Vec<FacilityDto>> {
    let facilities = if query.emergency.unwrap_or(false) {
        emergency_facilities().map(FacilityDto::from).collect()
    } else {
        all_facilities().iter().map(FacilityDto::from).collect()
    };
    Json(facilities)
}

#[utoipa::path(
    post,
    path = "/api/conversations",
    request_body = StartConversationReq,
    responses(
        (status = 201, description = "Conversation created", body = StartConversationRes),
        (status = 200, description = "Existing conversation resumed", body = StartConversationRes),
        (status = 400, description = "Invalid session id or language", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Create a conversation, or resume the one bound to the session id
///
/// A new conversation is seeded with the welcome message in its language. Resuming never
/// changes the language of an existing conversation.
#[axum::debug_handler]
pub async fn start_conversation(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<StartConversationReq>,
) -> ApiResult<(StatusCode, Json<StartConversationRes>)> {
    let session_id = req
        .session_id
        .as_deref()
        .map(SessionId::parse)
        .transpose()?;
    let language = req.language.as_deref().map(Language::parse).transpose()?;

    let started = state.conversations.start(session_id, language)?;
    let status = if started.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(StartConversationRes {
            conversation: started.conversation.into(),
            messages: started.messages.into_iter().map(MessageDto::from).collect(),
            created: started.created,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/conversations/{id}/messages",
    request_body = SendMessageReq,
    params(
        ("id" = u64, Path, description = "Conversation id")
    ),
    responses(
        (status = 200, description = "Message appended and answered", body = SendMessageRes),
        (status = 400, description = "Empty content or unknown role", body = ErrorRes),
        (status = 404, description = "Conversation not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Append a message to a conversation
///
/// User messages trigger classification of the whole transcript. The localized triage reply
/// and a follow-up question (or the facility prompt) are appended and returned.
#[axum::debug_handler]
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<ConversationId>,
    JsonBody(req): JsonBody<SendMessageReq>,
) -> ApiResult<Json<SendMessageRes>> {
    let role = Role::parse(&req.role)?;
    let outcome = state.conversations.send_message(id, role, &req.content)?;

    Ok(Json(SendMessageRes {
        user_message: outcome.user_message.into(),
        system_responses: outcome
            .system_responses
            .into_iter()
            .map(MessageDto::from)
            .collect(),
        verdict: outcome.verdict.map(VerdictDto::from),
        follow_up: outcome.follow_up.map(FollowUpDto::from),
        show_facilities: outcome.show_facilities,
    }))
}

#[utoipa::path(
    get,
    path = "/api/conversations/{id}/messages",
    params(
        ("id" = u64, Path, description = "Conversation id")
    ),
    responses(
        (status = 200, description = "Ordered transcript", body = [MessageDto]),
        (status = 404, description = "Conversation not found", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn list_messages(
    State(state): State<AppState>,
    Path(id): Path<ConversationId>,
) -> ApiResult<Json<Vec<MessageDto>>> {
    let transcript = state.conversations.transcript(id)?;
    Ok(Json(transcript.into_iter().map(MessageDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/triage",
    request_body = TriageReq,
    responses(
        (status = 200, description = "Triage verdict", body = VerdictDto),
        (status = 400, description = "Unknown message role", body = ErrorRes)
    )
)]
/// Classify a transcript without storing it
#[axum::debug_handler]
pub async fn triage(JsonBody(req): JsonBody<TriageReq>) -> ApiResult<Json<VerdictDto>> {
    let messages = req
        .messages
        .into_iter()
        .map(|m| -> ApiResult<Message> { Ok(Message::new(Role::parse(&m.role)?, m.content)) })
        .collect::<ApiResult<Vec<_>>>()?;

    Ok(Json(classify(&messages).into()))
}

#[utoipa::path(
    post,
    path = "/api/categorize",
    request_body = CategorizeReq,
    responses(
        (status = 200, description = "Symptom category", body = CategorizeRes)
    )
)]
#[axum::debug_handler]
pub async fn categorize_text(JsonBody(req): JsonBody<CategorizeReq>) -> Json<CategorizeRes> {
    Json(CategorizeRes {
        category: categorize(&req.text),
    })
}

#[utoipa::path(
    get,
    path = "/api/follow-up/{category}/{language}",
    params(
        ("category" = String, Path, description = "Symptom category key"),
        ("language" = String, Path, description = "Language code")
    ),
    responses(
        (status = 200, description = "Follow-up question, or the generic prompt for unknown inputs", body = FollowUpDto)
    )
)]
#[axum::debug_handler]
pub async fn follow_up(Path((category, language)): Path<(String, String)>) -> Json<FollowUpDto> {
    Json(follow_up_for_key(&category, &language).into())
}

#[utoipa::path(
    get,
    path = "/api/translations/{language}",
    params(
        ("language" = String, Path, description = "Language code; unknown codes get English")
    ),
    responses(
        (status = 200, description = "UI string table")
    )
)]
#[axum::debug_handler]
pub async fn ui_translations(Path(language): Path<String>) -> Json<&'static Translations> {
    Json(translations(Language::from_code_or_default(&language)))
}
