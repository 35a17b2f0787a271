//! DailyTalk HTTP Server
//!
//! Actix-web 기반 단일 페이지 + REST API 서버

mod routes;
mod state;
mod types;

pub use state::AppState;
pub use types::{GenerateApiRequest, GenerateApiResponse, RESULT_HEADING, STUDY_TIP};

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dailytalk_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Start the HTTP server and block until it shuts down
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_address = config.server_bind_address();
    let static_dir = config.static_dir.clone();
    let state = Arc::new(AppState::new(config));

    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .service(routes::generate::generate)
            .service(routes::health::health)
            .service(actix_files::Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind(&bind_address)
    .map_err(|e| {
        dailytalk_common::DailyTalkError::config(format!(
            "Failed to bind {}: {}",
            bind_address, e
        ))
    })?
    .run()
    .await?;

    Ok(())
}
