//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_readiness_checks};
use database::mongodb::{Database, check_health};
use serde_json::Value;

/// `/ready`: 200 once MongoDB answers a ping, 503 otherwise
pub fn router(db: Database) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(db)
}

async fn readiness_check(State(db): State<Database>) -> (StatusCode, Json<Value>) {
    let mongodb: HealthCheckFuture<'_> = Box::pin(async {
        let status = check_health(&db).await;
        if status.healthy {
            Ok(())
        } else {
            Err(status.message.unwrap_or_default())
        }
    });

    run_readiness_checks(vec![("mongodb", mongodb)]).await
}
