//! Axum router for the cookbook HTTP API
//!
//! - `POST /parse` - Normalize a handwritten recipe name
//! - `POST /entry` - Add an ingredient or recipe
//! - `GET /summary?name=` - Expanded ingredients and total cook time
//! - `GET /health` - Health check

use crate::core::cookbook::Cookbook;
use crate::domain::model::RecipeSummary;
use crate::utils::error::CookbookError;
use crate::utils::text::normalize_name;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub type SharedCookbook = Arc<Cookbook>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

/// Error response wrapper; client mistakes are 400, everything else 500.
pub struct ApiError(CookbookError);

impl From<CookbookError> for ApiError {
    fn from(err: CookbookError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!("Request failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = ErrorBody {
            kind: self.0.kind().to_string(),
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResponse {
    pub msg: String,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub name: Option<String>,
}

pub fn create_router(cookbook: SharedCookbook) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/parse", post(parse))
        .route("/entry", post(create_entry))
        .route("/summary", get(summary))
        .layer(TraceLayer::new_for_http())
        .with_state(cookbook)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Body rejections (bad JSON, wrong content type) become `InvalidPayloadError`.
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ApiError(CookbookError::InvalidPayloadError)
    })
}

async fn parse(body: Result<Json<ParseRequest>, JsonRejection>) -> ApiResult<Json<ParseResponse>> {
    let request = json_body(body)?;
    let msg = normalize_name(&request.input).ok_or_else(|| CookbookError::InvalidRecipeNameError {
        input: request.input.clone(),
    })?;
    Ok(Json(ParseResponse { msg }))
}

async fn create_entry(
    State(cookbook): State<SharedCookbook>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let payload = json_body(body)?;
    cookbook.create_entry(&payload).await.map_err(|e| {
        tracing::debug!("Rejected entry: {}", e);
        e
    })?;
    Ok(Json(Value::Object(Default::default())))
}

async fn summary(
    State(cookbook): State<SharedCookbook>,
    Query(query): Query<SummaryQuery>,
) -> ApiResult<Json<RecipeSummary>> {
    let name = query.name.unwrap_or_default();
    let summary = cookbook.summarize(&name).await?;
    Ok(Json(summary))
}
