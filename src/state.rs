use std::sync::Arc;
use tracing::info;

use edunav_config::{AccessConfig, CorsConfig, SessionConfig};

use crate::modules::access::{AccessEvaluator, PermissionTable};
use crate::modules::navigation::NavigationResolver;
use crate::modules::sessions::SessionStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub access: Arc<AccessEvaluator>,
    pub navigation: Arc<NavigationResolver>,
    pub sessions: SessionStore,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        table: PermissionTable,
        navigation: NavigationResolver,
        session_config: SessionConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            access: Arc::new(AccessEvaluator::new(Arc::new(table))),
            navigation: Arc::new(navigation),
            sessions: SessionStore::with_config(session_config),
            cors_config,
        }
    }
}

/// Build the shared state from the environment.
///
/// Fails when the configured permission table cannot be loaded or the
/// navigation rules are inconsistent.
pub fn init_app_state() -> anyhow::Result<AppState> {
    let table = PermissionTable::load(&AccessConfig::from_env())?;

    let navigation = NavigationResolver::builtin();
    navigation.validate()?;
    info!("Navigation rules validated");

    let session_config = SessionConfig::from_env();
    info!(
        idle_timeout_secs = session_config.idle_timeout.as_secs(),
        max_sessions = session_config.max_sessions,
        "Session registry configured"
    );

    Ok(AppState::new(
        table,
        navigation,
        session_config,
        CorsConfig::from_env(),
    ))
}
