//! `edunav-cli`: inspect permission tables and navigation rules offline.

use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::PathBuf;

use edunav_config::AccessConfig;
use edunav_core::SelectionError;
use edunav_models::{
    Class, ClassId, Institute, InstituteId, PageId, Role, Selection, Subject, SubjectId,
};

use crate::modules::access::{AccessEvaluator, PermissionTable};
use crate::modules::navigation::NavigationResolver;

#[derive(Debug, Parser)]
#[command(name = "edunav-cli")]
#[command(about = "EduNav CLI - Inspect permissions and navigation rules", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the actions granted to a role
    Permissions {
        /// Role slug, e.g. teacher
        role: String,

        /// Only report whether this action key is granted
        #[arg(short = 'a', long)]
        action: Option<String>,

        /// Permission table file (built-in table when omitted)
        #[arg(short = 't', long, env = "PERMISSION_TABLE_PATH")]
        table: Option<PathBuf>,
    },
    /// Print the page rendered for a role, selection and requested page
    Resolve {
        #[arg(short = 'r', long)]
        role: String,

        #[arg(short = 'p', long)]
        page: String,

        /// Numeric id of a selected institute
        #[arg(long)]
        institute: Option<u128>,

        /// Numeric id of a selected class
        #[arg(long)]
        class: Option<u128>,

        /// Numeric id of a selected subject
        #[arg(long)]
        subject: Option<u128>,
    },
    /// Load the permission table and validate every navigation rule set
    Check {
        #[arg(short = 't', long, env = "PERMISSION_TABLE_PATH")]
        table: Option<PathBuf>,
    },
}

/// Execute `command`, returning the text to print.
pub fn run(command: Commands) -> anyhow::Result<String> {
    match command {
        Commands::Permissions {
            role,
            action,
            table,
        } => {
            let table = load_table(table)?;
            let access = AccessEvaluator::new(table.into());
            Ok(permissions_report(&access, &Role::parse(&role), action.as_deref()))
        }
        Commands::Resolve {
            role,
            page,
            institute,
            class,
            subject,
        } => {
            let selection = synthetic_selection(institute, class, subject)?;
            let resolved = NavigationResolver::builtin().resolve(
                &Role::parse(&role),
                &selection,
                &PageId::parse(&page),
            );
            Ok(resolved.to_string())
        }
        Commands::Check { table } => check(table),
    }
}

fn load_table(path: Option<PathBuf>) -> anyhow::Result<PermissionTable> {
    let config = match path {
        Some(path) => AccessConfig::with_table_path(path),
        None => AccessConfig::default(),
    };
    PermissionTable::load(&config)
}

pub fn permissions_report(access: &AccessEvaluator, role: &Role, action: Option<&str>) -> String {
    if let Some(action) = action {
        let verdict = if access.is_allowed(role, action) {
            "allowed"
        } else {
            "denied"
        };
        return format!("{} {} {}", role, action, verdict);
    }

    let summary = access.summary(role);
    if summary.actions.is_empty() {
        return format!("{} ({}) has no permissions", summary.display_name, role);
    }

    let mut out = format!("{} ({})\n", summary.display_name, role);
    for (resource, actions) in &summary.by_resource {
        let _ = writeln!(out, "  {}: {}", resource, actions.join(", "));
    }
    out.trim_end().to_string()
}

/// Selection with placeholder names for the given numeric ids.
pub fn synthetic_selection(
    institute: Option<u128>,
    class: Option<u128>,
    subject: Option<u128>,
) -> Result<Selection, SelectionError> {
    Selection::new(
        institute.map(|n| Institute::new(InstituteId::from_u128(n), format!("Institute {}", n))),
        class.map(|n| Class::new(ClassId::from_u128(n), format!("Class {}", n))),
        subject.map(|n| Subject::new(SubjectId::from_u128(n), format!("Subject {}", n))),
    )
}

pub fn check(table: Option<PathBuf>) -> anyhow::Result<String> {
    let table = load_table(table)?;
    let resolver = NavigationResolver::builtin();
    resolver.validate()?;

    let mut out = String::new();
    for role in table.roles() {
        let rules = resolver.rules_for(role);
        let _ = writeln!(
            out,
            "{}: {} actions, lands on {}",
            role,
            table.permissions_for(role).len(),
            rules.default_page()
        );
    }
    out.push_str("Navigation rules OK");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve_command() {
        let cli = Cli::try_parse_from([
            "edunav-cli",
            "resolve",
            "--role",
            "teacher",
            "--page",
            "grading",
            "--institute",
            "1",
        ])
        .unwrap();
        match cli.command {
            Commands::Resolve {
                role,
                institute,
                class,
                ..
            } => {
                assert_eq!(role, "teacher");
                assert_eq!(institute, Some(1));
                assert_eq!(class, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_resolve_scenario() {
        let out = run(Commands::Resolve {
            role: "teacher".into(),
            page: "grading".into(),
            institute: Some(1),
            class: None,
            subject: None,
        })
        .unwrap();
        assert_eq!(out, "select-class");
    }

    #[test]
    fn test_resolve_rejects_broken_hierarchy() {
        let err = run(Commands::Resolve {
            role: "teacher".into(),
            page: "grading".into(),
            institute: None,
            class: Some(1),
            subject: None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("without a selected institute"));
    }

    #[test]
    fn test_permissions_report() {
        let access = AccessEvaluator::builtin();
        assert_eq!(
            permissions_report(&access, &Role::Student, Some("submit-homework")),
            "student submit-homework allowed"
        );
        assert_eq!(
            permissions_report(&access, &Role::Student, Some("delete-grade")),
            "student delete-grade denied"
        );

        let report = permissions_report(&access, &Role::AttendanceMarker, None);
        assert!(report.starts_with("Attendance Marker (attendance_marker)"));
        assert!(report.contains("attendance: mark-attendance, view-attendance"));

        let report = permissions_report(&access, &Role::parse("guest"), None);
        assert!(report.ends_with("has no permissions"));
    }

    #[test]
    fn test_check_builtin() {
        let out = check(None).unwrap();
        assert!(out.contains("attendance_marker: 3 actions, lands on attendance-marking"));
        assert!(out.ends_with("Navigation rules OK"));
    }

    #[test]
    fn test_check_missing_table_fails() {
        assert!(check(Some(PathBuf::from("/nonexistent/edunav.json"))).is_err());
    }
}
