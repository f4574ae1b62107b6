use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::Html,
    routing::get,
};
use log::{debug, error};
use tower_http::services::ServeDir;

use crate::db::VoteStore;
use crate::error::AppError;
use crate::models::ResultsSummary;
use crate::voting::fetch_results;

// Page shell only; the browser script fetches /results itself
const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VoteStore>,
}

pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/results", get(results_handler))
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn results_handler(
    State(state): State<AppState>,
) -> Result<Json<ResultsSummary>, AppError> {
    match fetch_results(state.store.as_ref()).await {
        Ok(results) => {
            debug!("Sending results data: {:?}", results);
            Ok(Json(results))
        }
        Err(e) => {
            error!("Error querying database: {}", e);
            Err(e.into())
        }
    }
}

pub async fn health_handler() -> &'static str {
    "ok"
}
