//! In-memory session registry.
//!
//! Each session's shell sits behind its own `tokio::sync::Mutex`, which
//! serializes every mutation and re-resolution for that session. The
//! registry lock is only held long enough to clone the session handle.
//!
//! Sessions idle for longer than the configured timeout are evicted lazily
//! on the next lookup or insert, and the registry refuses new sessions once
//! it holds `max_sessions` live ones.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use edunav_config::SessionConfig;
use edunav_core::AppError;
use edunav_models::{
    Class, ClassId, CreateSessionDto, Institute, InstituteId, NavigateDto, NavigationResponse,
    SelectEntityDto, SelectionLevel, SessionId, SessionView, Subject, SubjectId,
};

use crate::modules::access::AccessEvaluator;
use crate::modules::navigation::NavigationResolver;
use crate::modules::shell::AppShell;

#[derive(Debug)]
pub struct SessionEntry {
    pub id: SessionId,
    pub started_at: DateTime<Utc>,
    pub shell: AppShell,
}

impl SessionEntry {
    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            role: self.shell.role().clone(),
            user_id: self.shell.user_id(),
            started_at: self.started_at,
            selection: self.shell.selection(),
            current_page: self.shell.current_page().clone(),
            breadcrumbs: self.shell.breadcrumbs(),
            menu: self.shell.menu(),
        }
    }
}

pub type SharedSession = Arc<Mutex<SessionEntry>>;

#[derive(Debug)]
struct Slot {
    session: SharedSession,
    last_seen: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Slot>>>,
    config: SessionConfig,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            sessions: Arc::default(),
            config,
        }
    }

    /// Register `entry`, evicting idle sessions first.
    ///
    /// Fails with 503 when the registry is still full after eviction.
    pub async fn insert(&self, entry: SessionEntry) -> Result<SharedSession, AppError> {
        self.insert_at(entry, Instant::now()).await
    }

    async fn insert_at(
        &self,
        entry: SessionEntry,
        now: Instant,
    ) -> Result<SharedSession, AppError> {
        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, now);
        if sessions.len() >= self.config.max_sessions {
            warn!(max_sessions = self.config.max_sessions, "Session registry full");
            return Err(AppError::new(
                StatusCode::SERVICE_UNAVAILABLE,
                anyhow::anyhow!("Session limit of {} reached", self.config.max_sessions),
            ));
        }

        let id = entry.id;
        let session = Arc::new(Mutex::new(entry));
        sessions.insert(
            id,
            Slot {
                session: Arc::clone(&session),
                last_seen: now,
            },
        );
        Ok(session)
    }

    /// Look up a live session and mark it as used. An idle session is
    /// evicted and reported as missing.
    pub async fn get(&self, id: SessionId) -> Option<SharedSession> {
        self.get_at(id, Instant::now()).await
    }

    async fn get_at(&self, id: SessionId, now: Instant) -> Option<SharedSession> {
        let mut sessions = self.sessions.write().await;
        let slot = sessions.get_mut(&id)?;
        if now.saturating_duration_since(slot.last_seen) > self.config.idle_timeout {
            sessions.remove(&id);
            info!(session_id = %id, "Session expired");
            return None;
        }
        slot.last_seen = now;
        Some(Arc::clone(&slot.session))
    }

    pub async fn remove(&self, id: SessionId) -> Option<SharedSession> {
        self.sessions.write().await.remove(&id).map(|slot| slot.session)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn evict_idle(&self, sessions: &mut HashMap<SessionId, Slot>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, slot| {
            now.saturating_duration_since(slot.last_seen) <= self.config.idle_timeout
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, remaining = sessions.len(), "Evicted idle sessions");
        }
    }
}

pub struct SessionService;

impl SessionService {
    #[instrument(skip(store, access, resolver))]
    pub async fn create_session(
        store: &SessionStore,
        access: Arc<AccessEvaluator>,
        resolver: Arc<NavigationResolver>,
        dto: CreateSessionDto,
    ) -> Result<SessionView, AppError> {
        let entry = SessionEntry {
            id: SessionId::new(),
            started_at: Utc::now(),
            shell: AppShell::new(dto.role, dto.user_id, access, resolver),
        };
        let view = entry.view();
        store.insert(entry).await?;

        info!(
            session_id = %view.id,
            role = %view.role,
            user_id = %view.user_id,
            landing = %view.current_page,
            "Session started"
        );
        Ok(view)
    }

    #[instrument(skip(store))]
    pub async fn get_session(store: &SessionStore, id: Uuid) -> Result<SessionView, AppError> {
        let session = Self::find(store, id).await?;
        let entry = session.lock().await;
        Ok(entry.view())
    }

    /// Log the shell out and drop the session.
    #[instrument(skip(store))]
    pub async fn end_session(store: &SessionStore, id: Uuid) -> Result<(), AppError> {
        let session = store
            .remove(SessionId::from_uuid(id))
            .await
            .ok_or_else(|| Self::not_found(id))?;

        let mut entry = session.lock().await;
        entry.shell.logout();
        info!(session_id = %entry.id, "Session ended");
        Ok(())
    }

    #[instrument(skip(store))]
    pub async fn navigate(
        store: &SessionStore,
        id: Uuid,
        dto: NavigateDto,
    ) -> Result<NavigationResponse, AppError> {
        let session = Self::find(store, id).await?;
        let mut entry = session.lock().await;

        let resolved = entry.shell.navigate(dto.page.clone());
        Ok(NavigationResponse {
            redirected: resolved != dto.page,
            requested: dto.page,
            resolved,
        })
    }

    /// Pick (`Some`) or clear (`None`) one level of the session's selection.
    #[instrument(skip(store))]
    pub async fn select(
        store: &SessionStore,
        id: Uuid,
        level: SelectionLevel,
        dto: Option<SelectEntityDto>,
    ) -> Result<SessionView, AppError> {
        if let Some(dto) = &dto {
            dto.validate().map_err(AppError::bad_request)?;
        }

        let session = Self::find(store, id).await?;
        let mut entry = session.lock().await;

        match level {
            SelectionLevel::Institute => entry.shell.select_institute(
                dto.map(|dto| Institute::new(InstituteId::from_uuid(dto.id), dto.name)),
            ),
            SelectionLevel::Class => entry
                .shell
                .select_class(dto.map(|dto| Class::new(ClassId::from_uuid(dto.id), dto.name)))
                .map_err(AppError::conflict)?,
            SelectionLevel::Subject => entry
                .shell
                .select_subject(
                    dto.map(|dto| Subject::new(SubjectId::from_uuid(dto.id), dto.name)),
                )
                .map_err(AppError::conflict)?,
        }

        Ok(entry.view())
    }

    #[instrument(skip(store))]
    pub async fn clear_selection(store: &SessionStore, id: Uuid) -> Result<SessionView, AppError> {
        let session = Self::find(store, id).await?;
        let mut entry = session.lock().await;
        entry.shell.clear_selection();
        Ok(entry.view())
    }

    async fn find(store: &SessionStore, id: Uuid) -> Result<SharedSession, AppError> {
        store
            .get(SessionId::from_uuid(id))
            .await
            .ok_or_else(|| Self::not_found(id))
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::not_found(anyhow::anyhow!("Session {} not found", id))
    }
}
