use std::{collections::HashMap, sync::Arc};

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use chrono::{SecondsFormat, Utc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    config::Config,
    error::DecodeError,
    models::{
        health::{HealthCheckResponse, HealthStatus, ServiceHealth},
        notification::Notification,
        response::ApiResponse,
    },
    parser::NotificationParser,
};

pub struct AppState {
    parser: NotificationParser,
}

pub fn router(parser: NotificationParser) -> Router {
    let state = Arc::new(AppState { parser });

    Router::new()
        .route("/health", get(health_check))
        .route("/notifications", post(receive_notification))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(listener: TcpListener, parser: NotificationParser) -> std::io::Result<()> {
    axum::serve(listener, router(parser)).await
}

pub async fn run_api_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let parser = NotificationParser::new().with_body_limit(config.max_body_bytes);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, body_limit = config.max_body_bytes, "Notification receiver started");

    serve(listener, parser).await?;

    Ok(())
}

async fn receive_notification(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<ApiResponse<Notification>>, DecodeError> {
    let notification = state.parser.parse_request(request).await?;

    info!(
        message_id = %notification.message_id,
        topic_arn = %notification.topic_arn,
        kind = %notification.kind,
        "Notification received"
    );

    Ok(Json(ApiResponse::success(
        notification,
        "Notification received".to_string(),
    )))
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut checks = HashMap::new();
    checks.insert(
        "receiver".to_string(),
        ServiceHealth::healthy().with_body_limit(state.parser.body_limit()),
    );

    let health = HealthCheckResponse {
        status: HealthStatus::Healthy,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        checks,
    };

    (StatusCode::OK, Json(health))
}
