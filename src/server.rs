//! HTTP adapter for the formula library
//!
//! Every failure, whether a malformed body or a domain error, is reported as
//! 400 with a `{"detail": ...}` body.

use crate::api::{
    BasicOpRequest, CurrenciesResponse, ErrorResponse, FxRequest, ResultResponse, TrigRequest,
};
use crate::currency::RateTable;
use crate::error::CalcError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub rates: Arc<RateTable>,
}

impl AppState {
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RateTable::builtin())
    }
}

/// Failure surfaced to HTTP clients
#[derive(Debug)]
pub struct ApiError {
    detail: String,
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        Self {
            detail: ErrorResponse::from(&err).detail,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("  Request failed: {}", self.detail);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

/// Build the router with permissive CORS
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/basic", post(basic_op))
        .route("/api/trig", post(trig_op))
        .route("/api/fx", post(fx_op))
        .route("/api/currencies", get(currencies))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

async fn basic_op(
    payload: std::result::Result<Json<BasicOpRequest>, JsonRejection>,
) -> ApiResult<ResultResponse> {
    let Json(req) = payload?;
    info!("  basic: {} {} {}", req.a, req.op, req.b);
    let result = req.evaluate()?;
    Ok(Json(ResultResponse { result }))
}

async fn trig_op(
    payload: std::result::Result<Json<TrigRequest>, JsonRejection>,
) -> ApiResult<ResultResponse> {
    let Json(req) = payload?;
    info!("  trig: {}({})", req.func, req.angle);
    let result = req.evaluate()?;
    Ok(Json(ResultResponse { result }))
}

async fn fx_op(
    State(state): State<AppState>,
    payload: std::result::Result<Json<FxRequest>, JsonRejection>,
) -> ApiResult<ResultResponse> {
    let Json(req) = payload?;
    info!(
        "  fx: {} {} -> {}",
        req.amount, req.from_currency, req.to_currency
    );
    let result = req.evaluate(&state.rates)?;
    Ok(Json(ResultResponse { result }))
}

async fn currencies(State(state): State<AppState>) -> Json<CurrenciesResponse> {
    Json(CurrenciesResponse::from_table(&state.rates))
}

/// Bind and serve until the process is stopped
pub async fn run(addr: &str, state: AppState) -> std::io::Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("  Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await
}
