use edunav_core::permissions::*;
use edunav_models::{MenuEntry, PageId, Role};

use crate::modules::access::AccessEvaluator;
use crate::modules::navigation::NavigationRules;

/// The console's menu in display order, each page with its gating action key.
/// Entries without an action key are listed whenever the page is reachable.
const MENU: [(PageId, Option<&str>); 15] = [
    (PageId::Dashboard, None),
    (PageId::Institutes, Some(INSTITUTES_VIEW)),
    (PageId::Classes, Some(CLASSES_VIEW)),
    (PageId::Subjects, Some(SUBJECTS_VIEW)),
    (PageId::Students, Some(STUDENTS_VIEW)),
    (PageId::Teachers, Some(TEACHERS_VIEW)),
    (PageId::Users, Some(USERS_VIEW)),
    (PageId::Attendance, Some(ATTENDANCE_VIEW)),
    (PageId::AttendanceMarking, Some(ATTENDANCE_MARK)),
    (PageId::Grading, Some(GRADES_VIEW)),
    (PageId::Lectures, Some(LECTURES_VIEW)),
    (PageId::Homework, Some(HOMEWORK_VIEW)),
    (PageId::Results, Some(RESULTS_VIEW)),
    (PageId::Permissions, Some(PERMISSIONS_VIEW)),
    (PageId::Profile, None),
];

/// Menu entries `role` is both allowed to use and able to reach, labelled
/// with the page title.
pub fn build_menu(access: &AccessEvaluator, rules: &NavigationRules, role: &Role) -> Vec<MenuEntry> {
    MENU.into_iter()
        .filter(|(page, _)| rules.can_reach(page))
        .filter(|(_, action)| action.is_none_or(|action| access.is_allowed(role, action)))
        .map(|(page, action)| MenuEntry {
            label: page.title().to_string(),
            page,
            action: action.map(str::to_string),
        })
        .collect()
}
