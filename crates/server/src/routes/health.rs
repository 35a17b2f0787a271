use actix_web::{get, HttpResponse};

use crate::types::HealthResponse;

/// GET /api/health - Liveness probe
#[get("/api/health")]
pub async fn health() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
