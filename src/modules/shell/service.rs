//! Per-session glue between selection, navigation and permissions.
//!
//! After every selection change the shell resolves the page currently on
//! screen again against the new selection, so a cascade-clear that
//! invalidates it sends the user to the right picker.

use std::sync::Arc;
use tracing::{debug, info};

use edunav_core::SelectionError;
use edunav_models::{
    Breadcrumb, Class, Institute, MenuEntry, PageId, Role, Selection, SelectionLevel, Subject,
    UserId,
};

use super::menu::build_menu;
use crate::modules::access::AccessEvaluator;
use crate::modules::navigation::NavigationResolver;
use crate::modules::selection::{SelectionContext, SubscriptionId};

#[derive(Debug)]
pub struct AppShell {
    role: Role,
    user_id: UserId,
    selection: SelectionContext,
    access: Arc<AccessEvaluator>,
    resolver: Arc<NavigationResolver>,
    current: PageId,
}

impl AppShell {
    pub fn new(
        role: Role,
        user_id: UserId,
        access: Arc<AccessEvaluator>,
        resolver: Arc<NavigationResolver>,
    ) -> Self {
        let selection = SelectionContext::new();
        let current = resolver.resolve(&role, selection.current(), &PageId::Dashboard);
        Self {
            role,
            user_id,
            selection,
            access,
            resolver,
            current,
        }
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// The page currently rendered.
    pub fn current_page(&self) -> &PageId {
        &self.current
    }

    pub fn selection(&self) -> Selection {
        self.selection.snapshot()
    }

    /// Resolve `requested` and render the result.
    pub fn navigate(&mut self, requested: PageId) -> PageId {
        self.current = self
            .resolver
            .resolve(&self.role, self.selection.current(), &requested);
        debug!(
            role = %self.role,
            requested = %requested,
            resolved = %self.current,
            "Navigated"
        );
        self.current.clone()
    }

    pub fn select_institute(&mut self, institute: Option<Institute>) {
        self.selection.set_institute(institute);
        self.rerender();
    }

    pub fn select_class(&mut self, class: Option<Class>) -> Result<(), SelectionError> {
        self.selection.set_class(class)?;
        self.rerender();
        Ok(())
    }

    pub fn select_subject(&mut self, subject: Option<Subject>) -> Result<(), SelectionError> {
        self.selection.set_subject(subject)?;
        self.rerender();
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear_all();
        self.rerender();
    }

    /// Clear the selection and return to the role's default page.
    pub fn logout(&mut self) {
        info!(role = %self.role, user_id = %self.user_id, "Shell logged out");
        self.selection.clear_all();
        let default_page = self.resolver.rules_for(&self.role).default_page().clone();
        self.navigate(default_page);
    }

    pub fn can(&self, action: &str) -> bool {
        self.access.is_allowed(&self.role, action)
    }

    pub fn menu(&self) -> Vec<MenuEntry> {
        build_menu(&self.access, self.resolver.rules_for(&self.role), &self.role)
    }

    /// Selected levels, outermost first.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let selection = self.selection.current();
        let mut crumbs = Vec::with_capacity(3);
        if let Some(institute) = selection.institute() {
            crumbs.push(Breadcrumb {
                level: SelectionLevel::Institute,
                id: institute.id.into_inner(),
                name: institute.name.clone(),
            });
        }
        if let Some(class) = selection.class() {
            crumbs.push(Breadcrumb {
                level: SelectionLevel::Class,
                id: class.id.into_inner(),
                name: class.name.clone(),
            });
        }
        if let Some(subject) = selection.subject() {
            crumbs.push(Breadcrumb {
                level: SelectionLevel::Subject,
                id: subject.id.into_inner(),
                name: subject.name.clone(),
            });
        }
        crumbs
    }

    /// Observe selection changes of this session.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&Selection) + Send + 'static,
    {
        self.selection.subscribe(subscriber)
    }

    /// Resolve the page on screen again after a selection change.
    fn rerender(&mut self) {
        let shown = self.current.clone();
        self.current = self
            .resolver
            .resolve(&self.role, self.selection.current(), &shown);
        if self.current != shown {
            debug!(role = %self.role, from = %shown, to = %self.current, "Page invalidated by selection change");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edunav_core::permissions::{GRADES_CREATE, GRADES_DELETE};
    use edunav_models::{ClassId, InstituteId, SubjectId};
    use std::sync::Mutex;

    fn shell(role: Role) -> AppShell {
        AppShell::new(
            role,
            UserId::new(),
            Arc::new(AccessEvaluator::builtin()),
            Arc::new(NavigationResolver::builtin()),
        )
    }

    fn institute(n: u128) -> Institute {
        Institute::new(InstituteId::from_u128(n), format!("Institute {}", n))
    }

    fn class(n: u128) -> Class {
        Class::new(ClassId::from_u128(n), format!("Class {}", n))
    }

    fn subject(n: u128) -> Subject {
        Subject::new(SubjectId::from_u128(n), format!("Subject {}", n))
    }

    #[test]
    fn test_starts_on_resolved_dashboard() {
        assert_eq!(shell(Role::Teacher).current_page(), &PageId::Dashboard);
        assert_eq!(
            shell(Role::AttendanceMarker).current_page(),
            &PageId::AttendanceMarking
        );
    }

    #[test]
    fn test_navigate_renders_resolved_page() {
        let mut shell = shell(Role::Teacher);
        let page = shell.navigate(PageId::Grading);
        assert_eq!(page, PageId::SelectInstitute);
        assert_eq!(shell.current_page(), &PageId::SelectInstitute);
    }

    #[test]
    fn test_selection_change_rerenders_page_on_screen() {
        let resolver = NavigationResolver::builtin();
        let mut shell = shell(Role::Teacher);
        shell.navigate(PageId::Grading);

        let shown = shell.current_page().clone();
        shell.select_institute(Some(institute(1)));
        assert_eq!(
            shell.current_page(),
            &resolver.resolve(&Role::Teacher, &shell.selection(), &shown)
        );
        assert_eq!(shell.current_page(), &PageId::SelectInstitute);

        let shown = shell.current_page().clone();
        shell.select_class(Some(class(1))).unwrap();
        assert_eq!(
            shell.current_page(),
            &resolver.resolve(&Role::Teacher, &shell.selection(), &shown)
        );
    }

    #[test]
    fn test_drill_down_then_navigate() {
        let mut shell = shell(Role::Teacher);
        assert_eq!(shell.navigate(PageId::Grading), PageId::SelectInstitute);

        shell.select_institute(Some(institute(1)));
        assert_eq!(shell.navigate(PageId::Grading), PageId::SelectClass);
        shell.select_class(Some(class(1))).unwrap();
        assert_eq!(shell.navigate(PageId::Grading), PageId::SelectSubject);
        shell.select_subject(Some(subject(1))).unwrap();
        assert_eq!(shell.current_page(), &PageId::SelectSubject);
        assert_eq!(shell.navigate(PageId::Grading), PageId::Grading);
    }

    #[test]
    fn test_cascade_clear_rerenders_page() {
        let mut shell = shell(Role::Teacher);
        shell.select_institute(Some(institute(1)));
        shell.select_class(Some(class(1))).unwrap();
        shell.select_subject(Some(subject(1))).unwrap();
        assert_eq!(shell.navigate(PageId::Lectures), PageId::Lectures);

        shell.select_institute(Some(institute(2)));
        assert_eq!(shell.current_page(), &PageId::SelectClass);
        assert!(shell.selection().class().is_none());
    }

    #[test]
    fn test_rejected_selection_keeps_page() {
        let mut shell = shell(Role::Teacher);
        shell.navigate(PageId::Profile);

        let err = shell.select_class(Some(class(1))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid selection state: cannot select a class without a selected institute"
        );
        assert_eq!(shell.current_page(), &PageId::Profile);
        assert!(shell.selection().is_empty());
    }

    #[test]
    fn test_clear_selection() {
        let mut shell = shell(Role::Student);
        shell.select_institute(Some(institute(1)));
        shell.select_class(Some(class(1))).unwrap();
        assert_eq!(shell.navigate(PageId::Results), PageId::Results);

        shell.clear_selection();
        assert_eq!(shell.current_page(), &PageId::SelectInstitute);
        assert!(shell.breadcrumbs().is_empty());
    }

    #[test]
    fn test_logout_returns_to_default_page() {
        let mut shell = shell(Role::Teacher);
        shell.select_institute(Some(institute(1)));
        shell.navigate(PageId::Classes);

        shell.logout();
        assert!(shell.selection().is_empty());
        assert_eq!(shell.current_page(), &PageId::Dashboard);
    }

    #[test]
    fn test_breadcrumbs_in_order() {
        let mut shell = shell(Role::SystemAdmin);
        shell.select_institute(Some(institute(1)));
        shell.select_class(Some(class(2))).unwrap();

        let crumbs = shell.breadcrumbs();
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].level, SelectionLevel::Institute);
        assert_eq!(crumbs[0].name, "Institute 1");
        assert_eq!(crumbs[1].level, SelectionLevel::Class);
        assert_eq!(crumbs[1].id, ClassId::from_u128(2).into_inner());
    }

    #[test]
    fn test_can_uses_role_grants() {
        let teacher = shell(Role::Teacher);
        assert!(teacher.can(GRADES_CREATE));
        assert!(!teacher.can(GRADES_DELETE));
        assert!(!shell(Role::parse("guest")).can(GRADES_CREATE));
    }

    #[test]
    fn test_subscribers_observe_shell_mutations() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut shell = shell(Role::Teacher);
        {
            let seen = Arc::clone(&seen);
            shell.subscribe(move |selection| seen.lock().unwrap().push(selection.depth()));
        }

        shell.select_institute(Some(institute(1)));
        let _ = shell.select_subject(Some(subject(1)));
        shell.clear_selection();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Some(SelectionLevel::Institute), None]
        );
    }
}
