//! The role → action-key permission table.
//!
//! The table is built once at startup, either from the built-in grants or
//! from a JSON file, and is read-only afterwards. Lookups are total: a role
//! with no entry has the empty [`PermissionSet`].
//!
//! # File format
//!
//! ```json
//! {
//!   "roles": {
//!     "teacher": ["view-classes", "create-grade"],
//!     "librarian": ["view-students"]
//!   }
//! }
//! ```

use anyhow::{Context, bail};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use tracing::info;

use edunav_config::AccessConfig;
use edunav_core::permissions::*;
use edunav_models::Role;

/// Action keys granted to one role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, action: &str) -> bool {
        self.0.contains(action)
    }

    /// Action keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Deserialize)]
struct TableFile {
    roles: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct PermissionTable {
    grants: HashMap<Role, PermissionSet>,
    empty: PermissionSet,
}

impl PermissionTable {
    /// Table with no grants at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add (or replace) the grants for one role.
    pub fn with_role<I, S>(mut self, role: Role, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grants.insert(role, actions.into_iter().collect());
        self
    }

    /// The grants the console ships with.
    pub fn builtin() -> Self {
        Self::empty()
            .with_role(
                Role::SystemAdmin,
                [
                    INSTITUTES_CREATE,
                    INSTITUTES_VIEW,
                    INSTITUTES_EDIT,
                    INSTITUTES_DELETE,
                    CLASSES_CREATE,
                    CLASSES_VIEW,
                    CLASSES_EDIT,
                    CLASSES_DELETE,
                    SUBJECTS_CREATE,
                    SUBJECTS_VIEW,
                    SUBJECTS_EDIT,
                    SUBJECTS_DELETE,
                    STUDENTS_CREATE,
                    STUDENTS_VIEW,
                    STUDENTS_EDIT,
                    STUDENTS_DELETE,
                    TEACHERS_CREATE,
                    TEACHERS_VIEW,
                    TEACHERS_DELETE,
                    USERS_CREATE,
                    USERS_VIEW,
                    USERS_DELETE,
                    ATTENDANCE_VIEW,
                    GRADES_VIEW,
                    GRADES_DELETE,
                    LECTURES_VIEW,
                    HOMEWORK_VIEW,
                    RESULTS_VIEW,
                    PERMISSIONS_VIEW,
                ],
            )
            .with_role(
                Role::InstituteAdmin,
                [
                    INSTITUTES_VIEW,
                    INSTITUTES_EDIT,
                    CLASSES_CREATE,
                    CLASSES_VIEW,
                    CLASSES_EDIT,
                    CLASSES_DELETE,
                    SUBJECTS_CREATE,
                    SUBJECTS_VIEW,
                    SUBJECTS_EDIT,
                    SUBJECTS_DELETE,
                    STUDENTS_CREATE,
                    STUDENTS_VIEW,
                    STUDENTS_EDIT,
                    STUDENTS_DELETE,
                    TEACHERS_CREATE,
                    TEACHERS_VIEW,
                    TEACHERS_DELETE,
                    USERS_CREATE,
                    USERS_VIEW,
                    ATTENDANCE_MARK,
                    ATTENDANCE_VIEW,
                    GRADES_VIEW,
                    GRADES_EDIT,
                    GRADES_DELETE,
                    LECTURES_VIEW,
                    HOMEWORK_VIEW,
                    RESULTS_VIEW,
                    RESULTS_PUBLISH,
                    PERMISSIONS_VIEW,
                ],
            )
            .with_role(
                Role::Teacher,
                [
                    CLASSES_VIEW,
                    SUBJECTS_VIEW,
                    STUDENTS_VIEW,
                    ATTENDANCE_MARK,
                    ATTENDANCE_VIEW,
                    GRADES_CREATE,
                    GRADES_VIEW,
                    GRADES_EDIT,
                    LECTURES_CREATE,
                    LECTURES_VIEW,
                    LECTURES_DELETE,
                    HOMEWORK_CREATE,
                    HOMEWORK_VIEW,
                    RESULTS_VIEW,
                    PERMISSIONS_VIEW,
                ],
            )
            .with_role(
                Role::Student,
                [
                    ATTENDANCE_VIEW,
                    LECTURES_VIEW,
                    HOMEWORK_VIEW,
                    HOMEWORK_SUBMIT,
                    RESULTS_VIEW,
                ],
            )
            .with_role(
                Role::AttendanceMarker,
                [ATTENDANCE_MARK, ATTENDANCE_VIEW, STUDENTS_VIEW],
            )
    }

    /// Parse a table from its JSON representation.
    ///
    /// Blank action keys are rejected. Role slugs are normalized the same
    /// way session roles are, so `"Teacher"` and `"teacher"` are one role.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let file: TableFile =
            serde_json::from_str(json).context("Malformed permission table")?;

        let mut table = Self::empty();
        for (slug, actions) in file.roles {
            let role = Role::parse(&slug);
            let mut set = BTreeSet::new();
            for action in actions {
                let action = action.trim();
                if action.is_empty() {
                    bail!("Permission table grants a blank action key to role '{}'", role);
                }
                set.insert(action.to_string());
            }
            table.grants.entry(role).or_default().0.extend(set);
        }

        Ok(table)
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read permission table {}", path.display()))?;
        Self::from_json_str(&contents)
            .with_context(|| format!("Invalid permission table {}", path.display()))
    }

    /// Load the table named by the configuration, or the built-in one.
    pub fn load(config: &AccessConfig) -> anyhow::Result<Self> {
        let table = match &config.permission_table_path {
            Some(path) => {
                let table = Self::from_json_file(path)?;
                info!(path = %path.display(), roles = table.grants.len(), "Loaded permission table");
                table
            }
            None => {
                let table = Self::builtin();
                info!(roles = table.grants.len(), "Using built-in permission table");
                table
            }
        };
        Ok(table)
    }

    /// Grants for `role`; the empty set when the table has no entry.
    pub fn permissions_for(&self, role: &Role) -> &PermissionSet {
        self.grants.get(role).unwrap_or(&self.empty)
    }

    /// Roles with an entry in the table, sorted.
    pub fn roles(&self) -> Vec<&Role> {
        let mut roles: Vec<&Role> = self.grants.keys().collect();
        roles.sort();
        roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_known_role() {
        let table = PermissionTable::builtin();
        for role in Role::KNOWN {
            assert!(
                !table.permissions_for(&role).is_empty(),
                "{} has no grants",
                role
            );
        }
    }

    #[test]
    fn test_unknown_role_gets_empty_set() {
        let table = PermissionTable::builtin();
        let set = table.permissions_for(&Role::parse("librarian"));
        assert!(set.is_empty());
        assert!(!set.contains(CLASSES_VIEW));
    }

    #[test]
    fn test_same_key_in_several_roles() {
        let table = PermissionTable::builtin();
        assert!(table.permissions_for(&Role::Teacher).contains(ATTENDANCE_MARK));
        assert!(
            table
                .permissions_for(&Role::AttendanceMarker)
                .contains(ATTENDANCE_MARK)
        );
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{"roles": {"Teacher": ["view-classes", " create-grade "], "librarian": []}}"#;
        let table = PermissionTable::from_json_str(json).unwrap();

        let teacher = table.permissions_for(&Role::Teacher);
        assert_eq!(teacher.len(), 2);
        assert!(teacher.contains("create-grade"));

        let librarian = Role::parse("librarian");
        assert!(table.permissions_for(&librarian).is_empty());
        assert_eq!(table.roles().len(), 2);

        // Absent from the file means no grants, even for known roles.
        assert!(table.permissions_for(&Role::SystemAdmin).is_empty());
    }

    #[test]
    fn test_from_json_str_rejects_blank_keys() {
        let json = r#"{"roles": {"teacher": ["view-classes", "  "]}}"#;
        let err = PermissionTable::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("blank action key"));
    }

    #[test]
    fn test_from_json_str_rejects_malformed() {
        assert!(PermissionTable::from_json_str("{\"roles\": [1, 2]}").is_err());
        assert!(PermissionTable::from_json_str("not json").is_err());
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        let table = PermissionTable::load(&AccessConfig::default()).unwrap();
        assert!(table.permissions_for(&Role::Teacher).contains(GRADES_CREATE));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let config = AccessConfig::with_table_path("/nonexistent/edunav/permissions.json");
        let err = PermissionTable::load(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to read permission table"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "edunav-permissions-{}.json",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, r#"{"roles": {"student": ["view-results"]}}"#).unwrap();

        let table = PermissionTable::load(&AccessConfig::with_table_path(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(table.permissions_for(&Role::Student).contains(RESULTS_VIEW));
        assert!(!table.permissions_for(&Role::Student).contains(HOMEWORK_SUBMIT));
    }
}
