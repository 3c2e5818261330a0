use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use edunav_models::{PermissionDecision, PermissionSummary, Role};

use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/permissions/{role}",
    params(
        ("role" = String, Path, description = "Role slug, e.g. teacher")
    ),
    responses(
        (status = 200, description = "Permissions granted to the role", body = PermissionSummary)
    ),
    tag = "Permissions"
)]
#[instrument(skip(state))]
pub async fn get_role_permissions(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Json<PermissionSummary> {
    let role = Role::parse(&role);
    Json(state.access.summary(&role))
}

#[utoipa::path(
    get,
    path = "/api/permissions/{role}/{action}",
    params(
        ("role" = String, Path, description = "Role slug, e.g. teacher"),
        ("action" = String, Path, description = "Action key, e.g. create-class")
    ),
    responses(
        (status = 200, description = "Whether the role may perform the action", body = PermissionDecision)
    ),
    tag = "Permissions"
)]
#[instrument(skip(state))]
pub async fn check_permission(
    State(state): State<AppState>,
    Path((role, action)): Path<(String, String)>,
) -> Json<PermissionDecision> {
    let role = Role::parse(&role);
    Json(state.access.decision(&role, &action))
}
