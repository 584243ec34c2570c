use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::widget::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Widgets",
    operation_id = "listWidgets",
    summary = "List all widgets",
    description = "Returns every widget in the store. An empty store yields an empty array.",
    responses(
        (status = 200, description = "List of widgets", body = [WidgetResponse]),
    ),
)]
#[instrument(skip(state))]
pub async fn list_widgets(
    State(state): State<AppState>,
) -> Result<Json<Vec<WidgetResponse>>, AppError> {
    let widgets = state.widgets.list().await?;
    Ok(Json(widgets.into_iter().map(WidgetResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Widgets",
    operation_id = "createWidget",
    summary = "Create a new widget",
    description = "Creates a widget with a server-assigned id. `created_date` and `updated_date` are both set to the moment of creation.",
    request_body = WidgetPayload,
    responses(
        (status = 201, description = "Widget created", body = WidgetResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_widget(
    State(state): State<AppState>,
    AppJson(payload): AppJson<WidgetPayload>,
) -> Result<impl IntoResponse, AppError> {
    validate_widget_payload(&payload)?;

    let model = state.widgets.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(WidgetResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Widgets",
    operation_id = "getWidget",
    summary = "Retrieve a widget by ID",
    params(("id" = i32, Path, description = "Widget ID")),
    responses(
        (status = 200, description = "Widget details", body = WidgetResponse),
        (status = 404, description = "Widget not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_widget(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<WidgetResponse>, AppError> {
    let model = state
        .widgets
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Widget not found".into()))?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Widgets",
    operation_id = "updateWidget",
    summary = "Update an existing widget",
    description = "Replaces `name` and `number_of_parts` and stamps a fresh `updated_date`. `created_date` is preserved.",
    params(("id" = i32, Path, description = "Widget ID")),
    request_body = WidgetPayload,
    responses(
        (status = 200, description = "Widget updated", body = WidgetResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 404, description = "Widget not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_widget(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<WidgetPayload>,
) -> Result<Json<WidgetResponse>, AppError> {
    validate_widget_payload(&payload)?;

    let model = state
        .widgets
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Widget not found".into()))?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Widgets",
    operation_id = "deleteWidget",
    summary = "Delete a widget by ID",
    params(("id" = i32, Path, description = "Widget ID")),
    responses(
        (status = 200, description = "Widget deleted", body = DeleteWidgetResponse),
        (status = 404, description = "Widget not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_widget(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteWidgetResponse>, AppError> {
    let deleted = state.widgets.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Widget not found".into()));
    }

    Ok(Json(DeleteWidgetResponse {
        message: format!("Widget {id} deleted"),
    }))
}
