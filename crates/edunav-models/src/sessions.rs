//! Request and response DTOs of the console API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::ids::{SessionId, UserId};
use crate::pages::{PageId, SelectionLevel};
use crate::roles::Role;
use crate::selection::Selection;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSessionDto {
    /// Role slug supplied by the auth layer, e.g. `teacher`
    #[schema(value_type = String, example = "teacher")]
    pub role: Role,
    pub user_id: UserId,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NavigateDto {
    /// Requested page id, e.g. `grading`
    #[schema(value_type = String, example = "grading")]
    pub page: PageId,
}

/// Picker payload for an institute, class or subject.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SelectEntityDto {
    pub id: Uuid,
    #[validate(length(
        min = 1,
        max = 200,
        message = "Name must be between 1 and 200 characters"
    ))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MenuEntry {
    #[schema(value_type = String)]
    pub page: PageId,
    pub label: String,
    /// Action key that must be granted for the entry to be listed
    pub action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Breadcrumb {
    #[schema(value_type = String)]
    pub level: SelectionLevel,
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionView {
    pub id: SessionId,
    #[schema(value_type = String)]
    pub role: Role,
    pub user_id: UserId,
    pub started_at: DateTime<Utc>,
    pub selection: Selection,
    #[schema(value_type = String)]
    pub current_page: PageId,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub menu: Vec<MenuEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NavigationResponse {
    #[schema(value_type = String)]
    pub requested: PageId,
    #[schema(value_type = String)]
    pub resolved: PageId,
    /// True when the resolver sent the user somewhere else
    pub redirected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PermissionSummary {
    #[schema(value_type = String)]
    pub role: Role,
    pub display_name: String,
    /// Every granted action key, sorted
    pub actions: Vec<String>,
    /// Granted action keys grouped by the resource they affect
    pub by_resource: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PermissionDecision {
    #[schema(value_type = String)]
    pub role: Role,
    pub action: String,
    pub allowed: bool,
}
