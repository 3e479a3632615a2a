use crate::core::directory::Directory;
use crate::core::SearchRequest;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::format::describe_search;
use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::future::Future;
use std::time::Instant;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct AppState {
    directory: Directory,
}

/// Routes:
/// - `POST /api/advocates` search with a JSON [`SearchRequest`] body
/// - `GET /api/advocates` every advocate, unfiltered
/// - `GET /health`
pub fn router(directory: Directory) -> Router {
    Router::new()
        .route("/api/advocates", get(list_advocates).post(search_advocates))
        .route("/health", get(health))
        .layer(middleware::from_fn(log_request))
        .with_state(AppState { directory })
}

/// Serve until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, directory: Directory, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("🚀 Listening on http://{}", addr);

    axum::serve(listener, router(directory))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

pub struct ApiError(DirectoryError);

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            DirectoryError::InvalidRequestBody { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.user_friendly_message() }))).into_response()
    }
}

async fn search_advocates(State(state): State<AppState>, body: Bytes) -> std::result::Result<Response, ApiError> {
    // 格式錯誤時直接回 400，不進入搜尋
    let request = SearchRequest::from_json(&body).map_err(|e| {
        tracing::warn!("Rejected search request: {}", e);
        e
    })?;

    let query = request.normalize();
    let page = state.directory.search(&query);
    tracing::debug!(
        "🔍 {} (term: {:?}) -> {} of {} matches, page {}/{}",
        describe_search(&query),
        query.search_term,
        page.data.len(),
        page.pagination.total_count,
        page.pagination.current_page,
        page.pagination.total_pages
    );

    Ok(Json(page).into_response())
}

async fn list_advocates(State(state): State<AppState>) -> Response {
    Json(json!({ "data": state.directory.advocates() })).into_response()
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "advocates": state.directory.len() }))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        "{} {} -> {} ({:?})",
        method,
        path,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}
