use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use super::battery::BatteryForm;
use super::comparison::ComparisonForm;
use super::customization::CustomizationForm;
use super::firmware::FirmwareForm;
use super::trade_in::TradeInForm;
use super::updates::UpdateQuery;
use super::upgrade::UpgradeForm;
use super::{ToolError, ToolKind, ToolRequest, ToolService};
use crate::catalog::phones;
use crate::directory::{search_tools, DirectoryQuery};
use crate::notifications::NotificationSink;

/// Router exposing the tool directory, phone catalog, calculators and update feed.
pub fn tool_router<N>(service: Arc<ToolService<N>>) -> Router
where
    N: NotificationSink + 'static,
{
    Router::new()
        .route("/api/v1/tools", get(directory_handler))
        .route("/api/v1/tools/trade-in", post(trade_in_handler::<N>))
        .route("/api/v1/tools/battery", post(battery_handler::<N>))
        .route("/api/v1/tools/comparison", post(comparison_handler::<N>))
        .route("/api/v1/tools/firmware", post(firmware_handler::<N>))
        .route("/api/v1/tools/customization", post(customization_handler::<N>))
        .route("/api/v1/tools/upgrade", post(upgrade_handler::<N>))
        .route("/api/v1/phones", get(phones_handler))
        .route("/api/v1/phones/:id", get(phone_handler))
        .route("/api/v1/updates", get(updates_handler::<N>))
        .route("/api/v1/updates/stats", get(update_stats_handler::<N>))
        .route("/api/v1/updates/:id", get(update_handler::<N>))
        .with_state(service)
}

async fn directory_handler(Query(query): Query<DirectoryQuery>) -> Response {
    Json(search_tools(&query)).into_response()
}

async fn phones_handler() -> Response {
    Json(phones::phone_models()).into_response()
}

async fn phone_handler(Path(id): Path<u32>) -> Response {
    match phones::find_by_id(id) {
        Some(model) => Json(model).into_response(),
        None => error_body(StatusCode::NOT_FOUND, format!("phone model {id} not found")),
    }
}

pub(crate) async fn trade_in_handler<N>(
    State(service): State<Arc<ToolService<N>>>,
    payload: Result<Json<TradeInForm>, JsonRejection>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let request = payload.map(|Json(form)| ToolRequest::TradeIn(form));
    submit(&service, ToolKind::TradeIn, request).await
}

pub(crate) async fn battery_handler<N>(
    State(service): State<Arc<ToolService<N>>>,
    payload: Result<Json<BatteryForm>, JsonRejection>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let request = payload.map(|Json(form)| ToolRequest::BatteryHealth(form));
    submit(&service, ToolKind::BatteryHealth, request).await
}

pub(crate) async fn comparison_handler<N>(
    State(service): State<Arc<ToolService<N>>>,
    payload: Result<Json<ComparisonForm>, JsonRejection>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let request = payload.map(|Json(form)| ToolRequest::PhoneComparison(form));
    submit(&service, ToolKind::PhoneComparison, request).await
}

pub(crate) async fn firmware_handler<N>(
    State(service): State<Arc<ToolService<N>>>,
    payload: Result<Json<FirmwareForm>, JsonRejection>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let request = payload.map(|Json(form)| ToolRequest::FirmwareChecker(form));
    submit(&service, ToolKind::FirmwareChecker, request).await
}

pub(crate) async fn customization_handler<N>(
    State(service): State<Arc<ToolService<N>>>,
    payload: Result<Json<CustomizationForm>, JsonRejection>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let request = payload.map(|Json(form)| ToolRequest::CustomizationGenerator(form));
    submit(&service, ToolKind::CustomizationGenerator, request).await
}

pub(crate) async fn upgrade_handler<N>(
    State(service): State<Arc<ToolService<N>>>,
    payload: Result<Json<UpgradeForm>, JsonRejection>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let request = payload.map(|Json(form)| ToolRequest::UpgradeAdvisor(form));
    submit(&service, ToolKind::UpgradeAdvisor, request).await
}

async fn updates_handler<N>(
    State(service): State<Arc<ToolService<N>>>,
    Query(query): Query<UpdateQuery>,
) -> Response
where
    N: NotificationSink + 'static,
{
    submit(&service, ToolKind::UpdateTracker, Ok(ToolRequest::UpdateTracker(query))).await
}

async fn update_stats_handler<N>(State(service): State<Arc<ToolService<N>>>) -> Response
where
    N: NotificationSink + 'static,
{
    Json(service.updates().stats()).into_response()
}

async fn update_handler<N>(
    State(service): State<Arc<ToolService<N>>>,
    Path(id): Path<u32>,
) -> Response
where
    N: NotificationSink + 'static,
{
    match service.update(id) {
        Ok(update) => Json(update).into_response(),
        Err(error) => tool_error_response(ToolKind::UpdateTracker, error),
    }
}

async fn submit<N>(
    service: &ToolService<N>,
    kind: ToolKind,
    request: Result<ToolRequest, JsonRejection>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let request = match request {
        Ok(request) => request,
        Err(rejection) => {
            tracing::info!(tool = kind.label(), %rejection, "malformed tool payload");
            return error_body(rejection.status(), rejection.body_text());
        }
    };

    match service.submit(request).await {
        Ok(issued) => (StatusCode::OK, Json(issued)).into_response(),
        Err(error) => tool_error_response(kind, error),
    }
}

fn tool_error_response(kind: ToolKind, error: ToolError) -> Response {
    match error {
        ToolError::Validation(error) => error_body(StatusCode::UNPROCESSABLE_ENTITY, error.to_string()),
        error if error.is_lookup_failure() => {
            let payload = json!({
                "error": kind.retry_message(),
                "detail": error.to_string(),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        other => error_body(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

fn error_body(status: StatusCode, message: String) -> Response {
    let payload = json!({
        "error": message,
    });
    (status, Json(payload)).into_response()
}
