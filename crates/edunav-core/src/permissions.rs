//! Action key constants for the EduNav console.
//!
//! Every guardable UI operation is named by one of these keys. Keys follow
//! the `<verb>-<resource>` convention; the resource part is only used to
//! group keys in permission summaries.
//!
//! # Example
//!
//! ```ignore
//! use edunav_core::permissions;
//!
//! if shell.can(permissions::STUDENTS_CREATE) {
//!     // Render the "add student" control
//! }
//! ```

// =============================================================================
// Institutes
// =============================================================================

/// Create an institute
pub const INSTITUTES_CREATE: &str = "create-institute";
/// List and open institutes
pub const INSTITUTES_VIEW: &str = "view-institutes";
/// Edit institute details
pub const INSTITUTES_EDIT: &str = "edit-institute";
/// Delete an institute
pub const INSTITUTES_DELETE: &str = "delete-institute";

// =============================================================================
// Classes
// =============================================================================

/// Create a class
pub const CLASSES_CREATE: &str = "create-class";
/// List and open classes
pub const CLASSES_VIEW: &str = "view-classes";
/// Edit class details
pub const CLASSES_EDIT: &str = "edit-class";
/// Delete a class
pub const CLASSES_DELETE: &str = "delete-class";

// =============================================================================
// Subjects
// =============================================================================

/// Create a subject
pub const SUBJECTS_CREATE: &str = "create-subject";
/// List and open subjects
pub const SUBJECTS_VIEW: &str = "view-subjects";
/// Edit subject details
pub const SUBJECTS_EDIT: &str = "edit-subject";
/// Delete a subject
pub const SUBJECTS_DELETE: &str = "delete-subject";

// =============================================================================
// People
// =============================================================================

/// Enroll a student
pub const STUDENTS_CREATE: &str = "create-student";
/// List students
pub const STUDENTS_VIEW: &str = "view-students";
/// Edit a student record
pub const STUDENTS_EDIT: &str = "edit-student";
/// Remove a student
pub const STUDENTS_DELETE: &str = "delete-student";

/// Add a teacher
pub const TEACHERS_CREATE: &str = "create-teacher";
/// List teachers
pub const TEACHERS_VIEW: &str = "view-teachers";
/// Remove a teacher
pub const TEACHERS_DELETE: &str = "delete-teacher";

/// Create a console user
pub const USERS_CREATE: &str = "create-user";
/// List console users
pub const USERS_VIEW: &str = "view-users";
/// Remove a console user
pub const USERS_DELETE: &str = "delete-user";

// =============================================================================
// Teaching
// =============================================================================

/// Record attendance for a class
pub const ATTENDANCE_MARK: &str = "mark-attendance";
/// View attendance records
pub const ATTENDANCE_VIEW: &str = "view-attendance";

/// Record a grade
pub const GRADES_CREATE: &str = "create-grade";
/// View grades
pub const GRADES_VIEW: &str = "view-grades";
/// Change a recorded grade
pub const GRADES_EDIT: &str = "edit-grade";
/// Delete a recorded grade
pub const GRADES_DELETE: &str = "delete-grade";

/// Publish a lecture
pub const LECTURES_CREATE: &str = "create-lecture";
/// View lectures
pub const LECTURES_VIEW: &str = "view-lectures";
/// Delete a lecture
pub const LECTURES_DELETE: &str = "delete-lecture";

/// Assign homework
pub const HOMEWORK_CREATE: &str = "create-homework";
/// View homework
pub const HOMEWORK_VIEW: &str = "view-homework";
/// Submit homework
pub const HOMEWORK_SUBMIT: &str = "submit-homework";

/// View published results
pub const RESULTS_VIEW: &str = "view-results";
/// Publish results
pub const RESULTS_PUBLISH: &str = "publish-results";

// =============================================================================
// Console
// =============================================================================

/// Open the permissions summary page
pub const PERMISSIONS_VIEW: &str = "view-permissions";

/// Split an action key into its `(verb, resource)` parts.
///
/// Keys without a `-` are treated as a verb with an empty resource.
pub fn split_action(action: &str) -> (&str, &str) {
    action.split_once('-').unwrap_or((action, ""))
}

/// Resource an action key applies to, with plurals folded to the singular
/// so `view-classes` and `create-class` land in the same group.
pub fn resource_of(action: &str) -> &str {
    let (_, resource) = split_action(action);
    if resource.ends_with("ss") {
        return resource;
    }
    // "classes", "boxes", "batches": the plural adds "es".
    for suffix in ["sses", "xes", "ches", "shes"] {
        if resource.ends_with(suffix) {
            return &resource[..resource.len() - 2];
        }
    }
    resource.strip_suffix('s').unwrap_or(resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_action() {
        assert_eq!(split_action(CLASSES_CREATE), ("create", "class"));
        assert_eq!(split_action(ATTENDANCE_MARK), ("mark", "attendance"));
        assert_eq!(split_action("audit"), ("audit", ""));
    }

    #[test]
    fn test_resource_of_folds_plurals() {
        assert_eq!(resource_of(CLASSES_VIEW), "class");
        assert_eq!(resource_of(CLASSES_CREATE), "class");
        assert_eq!(resource_of(STUDENTS_VIEW), "student");
        assert_eq!(resource_of(RESULTS_PUBLISH), "result");
        assert_eq!(resource_of(ATTENDANCE_MARK), "attendance");
        assert_eq!(resource_of(HOMEWORK_SUBMIT), "homework");
        assert_eq!(resource_of("audit"), "");
    }

    #[test]
    fn test_resource_of_keeps_e_stems() {
        assert_eq!(resource_of("view-courses"), "course");
        assert_eq!(resource_of("create-course"), "course");
        assert_eq!(resource_of("view-licenses"), "license");
        assert_eq!(resource_of("view-responses"), "response");
        assert_eq!(resource_of("view-batches"), "batch");
        assert_eq!(resource_of("view-boxes"), "box");
        assert_eq!(resource_of("view-progress"), "progress");
    }
}
