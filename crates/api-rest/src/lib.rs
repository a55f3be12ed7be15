//! # API REST
//!
//! REST API implementation for the triage assistant.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `api-shared` for wire types and `triage-core` for everything else.

#![warn(rust_2018_idioms)]

pub mod error;
mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use triage_core::ConversationService;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::{ApiError, ApiResult};

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub conversations: ConversationService,
}

impl AppState {
    pub fn new(conversations: ConversationService) -> Self {
        Self { conversations }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::symptom_categories,
        handlers::health_facilities,
        handlers::start_conversation,
        handlers::send_message,
        handlers::list_messages,
        handlers::triage,
        handlers::categorize_text,
        handlers::follow_up,
        handlers::ui_translations,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::ErrorRes,
        api_shared::StartConversationReq,
        api_shared::StartConversationRes,
        api_shared::ConversationDto,
        api_shared::MessageDto,
        api_shared::SendMessageReq,
        api_shared::SendMessageRes,
        api_shared::VerdictDto,
        api_shared::FollowUpDto,
        api_shared::TriageReq,
        api_shared::TranscriptMessageReq,
        api_shared::CategorizeReq,
        api_shared::CategorizeRes,
        api_shared::FacilityDto,
        api_shared::CoordinatesDto,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/symptom-categories", get(handlers::symptom_categories))
        .route("/api/health-facilities", get(handlers::health_facilities))
        .route("/api/conversations", post(handlers::start_conversation))
        .route(
            "/api/conversations/:id/messages",
            get(handlers::list_messages).post(handlers::send_message),
        )
        .route("/api/triage", post(handlers::triage))
        .route("/api/categorize", post(handlers::categorize_text))
        .route(
            "/api/follow-up/:category/:language",
            get(handlers::follow_up),
        )
        .route("/api/translations/:language", get(handlers::ui_translations))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;
    use triage_core::{CoreConfig, MemoryStore};

    fn app() -> Router {
        let service = ConversationService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(CoreConfig::default()),
        );
        router(AppState::new(service))
    }

    async fn call(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = call(&app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn conversation_round_trip() {
        let app = app();

        let (status, started) = call(
            &app,
            "POST",
            "/api/conversations",
            Some(json!({ "language": "sw" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(started["conversation"]["language"], "sw");
        assert_eq!(started["messages"].as_array().unwrap().len(), 1);
        let id = started["conversation"]["id"].as_u64().unwrap();

        let (status, outcome) = call(
            &app,
            "POST",
            &format!("/api/conversations/{id}/messages"),
            Some(json!({ "role": "user", "content": "Nina homa" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(outcome["userMessage"]["content"], "Nina homa");
        assert_eq!(outcome["verdict"]["level"], "nonUrgent");
        assert_eq!(outcome["followUp"]["question"], "Umeugua homa kwa muda gani?");
        assert_eq!(outcome["systemResponses"].as_array().unwrap().len(), 2);
        assert_eq!(outcome["showFacilities"], false);

        let (status, transcript) = call(
            &app,
            "GET",
            &format!("/api/conversations/{id}/messages"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let roles: Vec<&str> = transcript
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["role"].as_str().unwrap())
            .collect();
        assert_eq!(roles, vec!["system", "user", "system", "system"]);
    }

    #[tokio::test]
    async fn resuming_a_session_returns_200() {
        let app = app();
        let (_, started) = call(&app, "POST", "/api/conversations", Some(json!({}))).await;
        let session = started["conversation"]["sessionId"].as_str().unwrap().to_string();

        let (status, resumed) = call(
            &app,
            "POST",
            "/api/conversations",
            Some(json!({ "sessionId": session })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resumed["created"], false);
        assert_eq!(resumed["conversation"]["id"], started["conversation"]["id"]);
    }

    #[tokio::test]
    async fn invalid_start_parameters_are_rejected() {
        let app = app();
        let (status, body) = call(
            &app,
            "POST",
            "/api/conversations",
            Some(json!({ "sessionId": "nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("nope"));

        let (status, _) = call(
            &app,
            "POST",
            "/api/conversations",
            Some(json!({ "language": "fr" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn messages_for_unknown_conversation_are_404() {
        let app = app();
        let (status, _) = call(
            &app,
            "POST",
            "/api/conversations/77/messages",
            Some(json!({ "role": "user", "content": "fever" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = call(&app, "GET", "/api/conversations/77/messages", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "conversation not found: 77");
    }

    #[tokio::test]
    async fn bad_message_input_is_400() {
        let app = app();
        let (_, started) = call(&app, "POST", "/api/conversations", Some(json!({}))).await;
        let id = started["conversation"]["id"].as_u64().unwrap();
        let uri = format!("/api/conversations/{id}/messages");

        let blank = json!({ "role": "user", "content": "  " });
        let (status, _) = call(&app, "POST", &uri, Some(blank)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let unknown_role = json!({ "role": "doctor", "content": "hi" });
        let (status, _) = call(&app, "POST", &uri, Some(unknown_role)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = call(&app, "POST", &uri, Some(json!({ "content": "fever" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("role"));
    }

    #[tokio::test]
    async fn malformed_json_bodies_are_400_with_message() {
        let app = app();
        let (status, body) = call(
            &app,
            "POST",
            "/api/conversations",
            Some(json!({ "sessionId": 5 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());

        let request = Request::builder()
            .method("POST")
            .uri("/api/triage")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn stateless_triage() {
        let (status, body) = call(
            &app(),
            "POST",
            "/api/triage",
            Some(json!({
                "messages": [
                    { "role": "system", "content": "Hello" },
                    { "role": "user", "content": "I can't breathe" }
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["level"], "emergency");
        assert_eq!(
            body["recommendation"],
            "Based on your symptoms, you should seek emergency care immediately."
        );

        let empty = json!({ "messages": [] });
        let (status, body) = call(&app(), "POST", "/api/triage", Some(empty)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rule"], "noInformation");
    }

    #[tokio::test]
    async fn categorize_and_follow_up() {
        let app = app();
        let (_, body) = call(
            &app,
            "POST",
            "/api/categorize",
            Some(json!({ "text": "I fell and my leg is bleeding" })),
        )
        .await;
        assert_eq!(body["category"], "injury");

        let (status, body) = call(&app, "GET", "/api/follow-up/nonexistent/en", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"], "Please describe your symptoms in more detail");
        assert_eq!(body["options"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn reference_data_endpoints() {
        let app = app();

        let (_, categories) = call(&app, "GET", "/api/symptom-categories", None).await;
        assert_eq!(categories.as_array().unwrap().len(), 6);

        let (_, all) = call(&app, "GET", "/api/health-facilities", None).await;
        let emergency_uri = "/api/health-facilities?emergency=true";
        let (_, emergency) = call(&app, "GET", emergency_uri, None).await;
        assert_eq!(all.as_array().unwrap().len(), 5);
        assert_eq!(emergency.as_array().unwrap().len(), 4);

        let (_, strings) = call(&app, "GET", "/api/translations/lg", None).await;
        assert_eq!(strings["sendButton"], "Wereza");
        let (_, fallback) = call(&app, "GET", "/api/translations/xx", None).await;
        assert_eq!(fallback["sendButton"], "Send");
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let (status, doc) = call(&app(), "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"]["/api/triage"].is_object());
    }
}
