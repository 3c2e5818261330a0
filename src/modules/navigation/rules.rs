//! Per-role navigation configuration.
//!
//! Each role declares the page it falls back to and the selection depth each
//! page needs. A role with a fixed landing page is additionally confined to a
//! set of pages; requests outside it land on the default page. Requirements
//! are nested by construction: a page that needs a subject also needs a class
//! and an institute.

use anyhow::bail;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use edunav_models::{PageId, Role, SelectionLevel};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Reach {
    /// Every known page.
    All,
    /// Fixed landing: only the listed pages, anything else lands on the
    /// default page.
    FixedLanding(BTreeSet<PageId>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRules {
    default_page: PageId,
    reach: Reach,
    requirements: BTreeMap<PageId, SelectionLevel>,
}

impl NavigationRules {
    /// Rules reaching every known page, with no selection requirements.
    pub fn new(default_page: PageId) -> Self {
        Self {
            default_page,
            reach: Reach::All,
            requirements: BTreeMap::new(),
        }
    }

    /// Make the default page a fixed landing page, confining the role to it
    /// and `pages`.
    pub fn fixed_landing(mut self, pages: impl IntoIterator<Item = PageId>) -> Self {
        let mut allowed: BTreeSet<PageId> = pages.into_iter().collect();
        allowed.insert(self.default_page.clone());
        self.reach = Reach::FixedLanding(allowed);
        self
    }

    /// Require at least `level` to be selected before `pages` render.
    pub fn require(
        mut self,
        level: SelectionLevel,
        pages: impl IntoIterator<Item = PageId>,
    ) -> Self {
        for page in pages {
            self.requirements.insert(page, level);
        }
        self
    }

    pub fn default_page(&self) -> &PageId {
        &self.default_page
    }

    /// Whether out-of-set requests are forced onto a fixed landing page.
    pub fn has_fixed_landing(&self) -> bool {
        matches!(self.reach, Reach::FixedLanding(_))
    }

    /// Unrecognized page ids are never reachable.
    pub fn can_reach(&self, page: &PageId) -> bool {
        if !page.is_known() {
            return false;
        }
        match &self.reach {
            Reach::All => true,
            Reach::FixedLanding(pages) => pages.contains(page),
        }
    }

    /// Deepest selection level `page` needs, if any.
    pub fn requirement(&self, page: &PageId) -> Option<SelectionLevel> {
        self.requirements.get(page).copied()
    }

    /// Pages that need at least `level` selected.
    pub fn pages_requiring(&self, level: SelectionLevel) -> BTreeSet<&PageId> {
        self.requirements
            .iter()
            .filter(|(_, required)| **required >= level)
            .map(|(page, _)| page)
            .collect()
    }

    /// Check that the rules cannot strand a user.
    ///
    /// The default page must be known and free of requirements, picker pages
    /// must be free of requirements, and every page with a requirement must
    /// be reachable together with the pickers it may redirect to.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.default_page.is_known() {
            bail!("default page '{}' is not a known page", self.default_page);
        }
        if let Some(level) = self.requirement(&self.default_page) {
            bail!(
                "default page '{}' requires a selected {}",
                self.default_page,
                level
            );
        }

        for (page, level) in &self.requirements {
            if page.is_picker() {
                bail!("picker page '{}' must not require a selected {}", page, level);
            }
            if !self.can_reach(page) {
                bail!("page '{}' has a requirement but is not reachable", page);
            }
            for needed in [
                SelectionLevel::Institute,
                SelectionLevel::Class,
                SelectionLevel::Subject,
            ] {
                if needed <= *level && !self.can_reach(&needed.picker()) {
                    bail!(
                        "page '{}' requires a selected {} but '{}' is not reachable",
                        page,
                        needed,
                        needed.picker()
                    );
                }
            }
        }

        Ok(())
    }
}

/// Hierarchy requirements shared by every role without special rules.
fn hierarchy_rules(default_page: PageId) -> NavigationRules {
    use PageId::*;
    use SelectionLevel::{Class, Institute, Subject};

    NavigationRules::new(default_page)
        .require(Institute, [Classes, Teachers, Users])
        .require(Class, [Subjects, Students, Attendance, Results])
        .require(Subject, [Grading, Lectures, Homework])
}

/// Rules for roles without a configured entry: no fixed landing page, the
/// standard hierarchy requirements. Their permission set is still empty.
pub fn fallback_rules() -> NavigationRules {
    hierarchy_rules(PageId::Dashboard)
}

/// The rules the console ships with.
pub fn builtin_rules() -> HashMap<Role, NavigationRules> {
    use PageId::*;
    use SelectionLevel::{Class, Institute, Subject};

    let mut rules = HashMap::new();

    rules.insert(Role::SystemAdmin, hierarchy_rules(Dashboard));

    // Institute admins grade per class; teachers grade per subject.
    rules.insert(
        Role::InstituteAdmin,
        NavigationRules::new(Dashboard)
            .require(Institute, [Classes, Teachers, Users])
            .require(Class, [Subjects, Students, Attendance, Grading, Results])
            .require(Subject, [Lectures, Homework]),
    );

    rules.insert(Role::Teacher, hierarchy_rules(Dashboard));

    rules.insert(
        Role::Student,
        NavigationRules::new(Dashboard)
            .require(Class, [Attendance, Results])
            .require(Subject, [Lectures, Homework]),
    );

    rules.insert(
        Role::AttendanceMarker,
        NavigationRules::new(AttendanceMarking).fixed_landing([
            SelectInstitute,
            SelectClass,
            Profile,
        ]),
    );

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rules_are_valid() {
        for (role, rules) in builtin_rules() {
            if let Err(err) = rules.validate() {
                panic!("rules for {} are invalid: {}", role, err);
            }
        }
        fallback_rules().validate().unwrap();
    }

    #[test]
    fn test_builtin_rules_cover_known_roles() {
        let rules = builtin_rules();
        for role in Role::KNOWN {
            assert!(rules.contains_key(&role), "{} has no rules", role);
        }
    }

    #[test]
    fn test_requirement_sets_are_nested() {
        let rules = builtin_rules();
        let teacher = &rules[&Role::Teacher];

        let institute = teacher.pages_requiring(SelectionLevel::Institute);
        let class = teacher.pages_requiring(SelectionLevel::Class);
        let subject = teacher.pages_requiring(SelectionLevel::Subject);

        assert!(subject.is_subset(&class));
        assert!(class.is_subset(&institute));
        assert!(subject.contains(&PageId::Lectures));
        assert!(class.contains(&PageId::Grading));
        assert!(institute.contains(&PageId::Classes));
        assert!(!class.contains(&PageId::Classes));
    }

    #[test]
    fn test_attendance_marker_has_fixed_landing() {
        let rules = builtin_rules();
        let marker = &rules[&Role::AttendanceMarker];
        assert!(marker.has_fixed_landing());
        assert_eq!(marker.default_page(), &PageId::AttendanceMarking);
        assert!(marker.can_reach(&PageId::AttendanceMarking));
        assert!(!marker.can_reach(&PageId::Dashboard));

        assert!(!rules[&Role::SystemAdmin].has_fixed_landing());
        assert!(!rules[&Role::Teacher].has_fixed_landing());
        assert!(!rules[&Role::Student].has_fixed_landing());
        assert!(!fallback_rules().has_fixed_landing());
    }

    #[test]
    fn test_roles_without_fixed_landing_reach_every_known_page() {
        let rules = builtin_rules();
        for role in [Role::Teacher, Role::Student, Role::InstituteAdmin] {
            for page in PageId::KNOWN {
                assert!(rules[&role].can_reach(&page), "{} cannot reach {}", role, page);
            }
        }
    }

    #[test]
    fn test_unknown_pages_are_unreachable() {
        let admin = NavigationRules::new(PageId::Dashboard);
        assert!(admin.can_reach(&PageId::Users));
        assert!(!admin.can_reach(&PageId::parse("billing")));
    }

    #[test]
    fn test_fixed_landing_always_reaches_default() {
        let rules = NavigationRules::new(PageId::Profile).fixed_landing([PageId::Dashboard]);
        assert!(rules.can_reach(&PageId::Profile));
        assert!(rules.can_reach(&PageId::Dashboard));
        assert!(!rules.can_reach(&PageId::Users));
    }

    #[test]
    fn test_validate_rejects_default_with_requirement() {
        let rules = NavigationRules::new(PageId::Grading)
            .require(SelectionLevel::Class, [PageId::Grading]);
        let err = rules.validate().unwrap_err();
        assert!(err.to_string().contains("default page 'grading'"));
    }

    #[test]
    fn test_validate_rejects_unreachable_picker() {
        let rules = NavigationRules::new(PageId::Dashboard)
            .fixed_landing([PageId::Grading, PageId::SelectInstitute])
            .require(SelectionLevel::Class, [PageId::Grading]);
        let err = rules.validate().unwrap_err();
        assert!(err.to_string().contains("'select-class' is not reachable"));
    }

    #[test]
    fn test_validate_rejects_picker_requirement() {
        let rules = NavigationRules::new(PageId::Dashboard)
            .require(SelectionLevel::Institute, [PageId::SelectClass]);
        assert!(rules.validate().is_err());
    }
}
