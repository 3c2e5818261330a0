use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use edunav_core::AppError;
use edunav_models::{
    CreateSessionDto, NavigateDto, NavigationResponse, SelectEntityDto, SelectionLevel,
    SessionView,
};

use crate::modules::sessions::service::SessionService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = CreateSessionDto,
    responses(
        (status = 201, description = "Session started", body = SessionView),
        (status = 400, description = "Malformed request body"),
        (status = 503, description = "Session limit reached")
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn create_session(
    State(state): State<AppState>,
    Json(dto): Json<CreateSessionDto>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let view = SessionService::create_session(
        &state.sessions,
        state.access.clone(),
        state.navigation.clone(),
        dto,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(view)))
}

#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Current session state", body = SessionView),
        (status = 404, description = "Session not found")
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = SessionService::get_session(&state.sessions, id).await?;
    Ok(Json(view))
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 204, description = "Session logged out and removed"),
        (status = 404, description = "Session not found")
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    SessionService::end_session(&state.sessions, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/sessions/{id}/navigate",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    request_body = NavigateDto,
    responses(
        (status = 200, description = "Requested and rendered page", body = NavigationResponse),
        (status = 404, description = "Session not found")
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn navigate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<NavigateDto>,
) -> Result<Json<NavigationResponse>, AppError> {
    let response = SessionService::navigate(&state.sessions, id, dto).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/api/sessions/{id}/selection/{level}",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("level" = String, Path, description = "institute, class or subject")
    ),
    request_body(content = SelectEntityDto, description = "Entity to select, or null to clear the level"),
    responses(
        (status = 200, description = "Updated session state", body = SessionView),
        (status = 400, description = "Invalid entity or level"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Ancestor level not selected")
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn select(
    State(state): State<AppState>,
    Path((id, level)): Path<(Uuid, SelectionLevel)>,
    Json(dto): Json<Option<SelectEntityDto>>,
) -> Result<Json<SessionView>, AppError> {
    let view = SessionService::select(&state.sessions, id, level, dto).await?;
    Ok(Json(view))
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{id}/selection",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Selection cleared", body = SessionView),
        (status = 404, description = "Session not found")
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn clear_selection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = SessionService::clear_selection(&state.sessions, id).await?;
    Ok(Json(view))
}
