use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{check_permission, get_role_permissions};

pub fn init_permissions_router() -> Router<AppState> {
    Router::new()
        .route("/{role}", get(get_role_permissions))
        .route("/{role}/{action}", get(check_permission))
}
