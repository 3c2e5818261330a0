use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

use super::controller::{
    clear_selection, create_session, end_session, get_session, navigate, select,
};

pub fn init_sessions_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_session))
        .route("/{id}", get(get_session).delete(end_session))
        .route("/{id}/navigate", post(navigate))
        .route("/{id}/selection", delete(clear_selection))
        .route("/{id}/selection/{level}", put(select))
}
