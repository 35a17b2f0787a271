use actix_web::{post, web, HttpResponse};
use dailytalk_llm::DialogueSession;
use tracing::info;
use uuid::Uuid;

use crate::state::AppState;
use crate::types::{GenerateApiRequest, GenerateApiResponse};

/// POST /api/generate - Run one dialogue generation for the supplied key
///
/// A fresh session is built per request. The call blocks until the
/// Gemini API answers or fails; every outcome becomes a 200 with a
/// status field, because no failure here is fatal and the user simply
/// retriggers the action.
#[post("/api/generate")]
pub async fn generate(
    req: web::Json<GenerateApiRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let request_id = Uuid::new_v4();
    info!("Generate request received - id: {}", request_id);

    let mut session = DialogueSession::new(state.gemini_settings());
    session.set_credential(req.into_inner().api_key);

    let result = session.generate().await;
    let response = GenerateApiResponse::from_result(result);

    info!("Generate request finished - id: {}, status: {}", request_id, response.status);

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use dailytalk_common::AppConfig;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_empty_key_returns_warning_without_network() {
        let state = Arc::new(AppState::new(AppConfig::default()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(generate),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(serde_json::json!({ "api_key": "" }))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "warning");
        assert_eq!(body["message"], dailytalk_llm::EMPTY_KEY_WARNING);
        assert!(body.get("text").is_none());
    }

    #[actix_web::test]
    async fn test_missing_body_is_rejected() {
        let state = Arc::new(AppState::new(AppConfig::default()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(generate),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/generate").to_request();
        let response = test::call_service(&app, req).await;
        assert!(response.status().is_client_error());
    }
}
