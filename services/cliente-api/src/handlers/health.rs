use axum::{extract::State, Json};
use serde_json::json;

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let database = match cadastro_database::postgres_health_check(&state.pool).await {
        Ok(()) => "up",
        Err(_) => "down",
    };

    Json(json!({
        "status": "healthy",
        "service": "cadastro-cliente-api",
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
