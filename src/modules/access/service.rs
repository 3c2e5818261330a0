use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use edunav_core::permissions::resource_of;
use edunav_models::{PermissionDecision, PermissionSummary, Role};

use super::table::{PermissionSet, PermissionTable};

/// Single entry point for every permission check in the console.
///
/// Absence of a grant is denial; there is no error path.
#[derive(Debug, Clone)]
pub struct AccessEvaluator {
    table: Arc<PermissionTable>,
}

impl AccessEvaluator {
    pub fn new(table: Arc<PermissionTable>) -> Self {
        Self { table }
    }

    pub fn builtin() -> Self {
        Self::new(Arc::new(PermissionTable::builtin()))
    }

    pub fn table(&self) -> &PermissionTable {
        &self.table
    }

    pub fn permissions_for(&self, role: &Role) -> &PermissionSet {
        self.table.permissions_for(role)
    }

    pub fn is_allowed(&self, role: &Role, action: &str) -> bool {
        let allowed = self.permissions_for(role).contains(action);
        if !allowed {
            debug!(role = %role, action, "Action denied");
        }
        allowed
    }

    pub fn decision(&self, role: &Role, action: &str) -> PermissionDecision {
        PermissionDecision {
            role: role.clone(),
            action: action.to_string(),
            allowed: self.is_allowed(role, action),
        }
    }

    /// Grants of `role`, flat and grouped by resource.
    pub fn summary(&self, role: &Role) -> PermissionSummary {
        let set = self.permissions_for(role);

        let mut by_resource: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for action in set.iter() {
            by_resource
                .entry(resource_of(action).to_string())
                .or_default()
                .push(action.to_string());
        }

        PermissionSummary {
            role: role.clone(),
            display_name: role.display_name().to_string(),
            actions: set.iter().map(str::to_string).collect(),
            by_resource,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edunav_core::permissions::*;

    #[test]
    fn test_is_allowed_matches_permission_set() {
        let evaluator = AccessEvaluator::builtin();
        for role in Role::KNOWN {
            for action in [CLASSES_CREATE, GRADES_DELETE, ATTENDANCE_MARK, "unknown-action"] {
                assert_eq!(
                    evaluator.is_allowed(&role, action),
                    evaluator.permissions_for(&role).contains(action)
                );
            }
        }
    }

    #[test]
    fn test_unknown_role_is_denied_everything() {
        let evaluator = AccessEvaluator::builtin();
        let role = Role::parse("guest");
        assert!(evaluator.permissions_for(&role).is_empty());
        assert!(!evaluator.is_allowed(&role, CLASSES_VIEW));
        assert!(!evaluator.is_allowed(&role, ""));
    }

    #[test]
    fn test_role_grants() {
        let evaluator = AccessEvaluator::builtin();
        assert!(evaluator.is_allowed(&Role::SystemAdmin, INSTITUTES_CREATE));
        assert!(!evaluator.is_allowed(&Role::InstituteAdmin, INSTITUTES_CREATE));
        assert!(evaluator.is_allowed(&Role::InstituteAdmin, GRADES_DELETE));
        assert!(!evaluator.is_allowed(&Role::Teacher, GRADES_DELETE));
        assert!(evaluator.is_allowed(&Role::Teacher, GRADES_CREATE));
        assert!(evaluator.is_allowed(&Role::Student, HOMEWORK_SUBMIT));
        assert!(!evaluator.is_allowed(&Role::Student, STUDENTS_VIEW));
        assert!(evaluator.is_allowed(&Role::AttendanceMarker, ATTENDANCE_MARK));
        assert!(!evaluator.is_allowed(&Role::AttendanceMarker, GRADES_VIEW));
    }

    #[test]
    fn test_summary_groups_by_resource() {
        let evaluator = AccessEvaluator::builtin();
        let summary = evaluator.summary(&Role::AttendanceMarker);

        assert_eq!(summary.display_name, "Attendance Marker");
        assert_eq!(
            summary.actions,
            vec![
                "mark-attendance".to_string(),
                "view-attendance".to_string(),
                "view-students".to_string(),
            ]
        );
        assert_eq!(summary.by_resource.len(), 2);
        assert_eq!(summary.by_resource["attendance"].len(), 2);
        assert_eq!(summary.by_resource["student"], vec!["view-students".to_string()]);
    }

    #[test]
    fn test_summary_for_unknown_role_is_empty() {
        let evaluator = AccessEvaluator::builtin();
        let summary = evaluator.summary(&Role::parse("guest"));
        assert!(summary.actions.is_empty());
        assert!(summary.by_resource.is_empty());
    }

    #[test]
    fn test_decision() {
        let evaluator = AccessEvaluator::builtin();
        let decision = evaluator.decision(&Role::Teacher, LECTURES_CREATE);
        assert!(decision.allowed);
        assert_eq!(decision.action, "create-lecture");
    }
}
