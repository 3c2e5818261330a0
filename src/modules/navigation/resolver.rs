//! Decides which page is actually rendered for a navigation request.
//!
//! [`NavigationResolver::resolve`] is a pure function of the role, a
//! selection snapshot and the requested page. The guards run in priority
//! order and the first one that matches decides:
//!
//! 1. unknown page id, or a page outside a fixed-landing role's set →
//!    default page
//! 2. explicit class/subject picker request → honored as-is
//! 3. institute needed but missing → institute picker
//! 4. class needed but missing → class picker
//! 5. subject needed but missing → subject picker
//! 6. otherwise → the requested page

use std::collections::HashMap;
use tracing::debug;

use edunav_models::{PageId, Role, Selection, SelectionLevel};

use super::rules::{NavigationRules, builtin_rules, fallback_rules};

#[derive(Debug, Clone)]
pub struct NavigationResolver {
    rules: HashMap<Role, NavigationRules>,
    fallback: NavigationRules,
}

impl NavigationResolver {
    pub fn new(rules: HashMap<Role, NavigationRules>, fallback: NavigationRules) -> Self {
        Self { rules, fallback }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_rules(), fallback_rules())
    }

    /// Rules for `role`, or the fallback rules when none are configured.
    pub fn rules_for(&self, role: &Role) -> &NavigationRules {
        self.rules.get(role).unwrap_or(&self.fallback)
    }

    /// Validate every configured rule set, naming the role that fails.
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut roles: Vec<&Role> = self.rules.keys().collect();
        roles.sort();
        for role in roles {
            self.rules[role]
                .validate()
                .map_err(|err| anyhow::anyhow!("navigation rules for '{}': {}", role, err))?;
        }
        self.fallback
            .validate()
            .map_err(|err| anyhow::anyhow!("fallback navigation rules: {}", err))
    }

    pub fn resolve(&self, role: &Role, selection: &Selection, requested: &PageId) -> PageId {
        let rules = self.rules_for(role);

        if !rules.can_reach(requested) {
            debug!(role = %role, requested = %requested, default = %rules.default_page(), "Page out of reach");
            return rules.default_page().clone();
        }

        if matches!(requested, PageId::SelectClass | PageId::SelectSubject) {
            return requested.clone();
        }

        if let Some(required) = rules.requirement(requested) {
            for level in [
                SelectionLevel::Institute,
                SelectionLevel::Class,
                SelectionLevel::Subject,
            ] {
                if level <= required && !selection.has(level) {
                    debug!(role = %role, requested = %requested, missing = %level, "Selection incomplete");
                    return level.picker();
                }
            }
        }

        requested.clone()
    }
}

impl Default for NavigationResolver {
    fn default() -> Self {
        Self::builtin()
    }
}
