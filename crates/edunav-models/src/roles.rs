//! Session roles.
//!
//! The role is supplied by the auth layer at session start and never changes
//! for the lifetime of the session. Roles this build does not know about are
//! kept as [`Role::Other`] so the permission table and navigation rules can
//! treat them fail-closed instead of rejecting the session.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Role slugs as they appear on the wire and in permission table files.
pub mod slugs {
    pub const SYSTEM_ADMIN: &str = "system_admin";
    pub const INSTITUTE_ADMIN: &str = "institute_admin";
    pub const TEACHER: &str = "teacher";
    pub const STUDENT: &str = "student";
    pub const ATTENDANCE_MARKER: &str = "attendance_marker";
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Manages every institute.
    SystemAdmin,
    /// Manages a single institute's classes, people and subjects.
    InstituteAdmin,
    Teacher,
    Student,
    /// Confined to attendance marking.
    AttendanceMarker,
    /// A role slug this build has no variant for.
    Other(String),
}

impl Role {
    /// All roles with a dedicated variant.
    pub const KNOWN: [Role; 5] = [
        Role::SystemAdmin,
        Role::InstituteAdmin,
        Role::Teacher,
        Role::Student,
        Role::AttendanceMarker,
    ];

    pub fn slug(&self) -> &str {
        match self {
            Role::SystemAdmin => slugs::SYSTEM_ADMIN,
            Role::InstituteAdmin => slugs::INSTITUTE_ADMIN,
            Role::Teacher => slugs::TEACHER,
            Role::Student => slugs::STUDENT,
            Role::AttendanceMarker => slugs::ATTENDANCE_MARKER,
            Role::Other(slug) => slug,
        }
    }

    /// Human-readable name for menus and summaries.
    pub fn display_name(&self) -> &str {
        match self {
            Role::SystemAdmin => "System Admin",
            Role::InstituteAdmin => "Institute Admin",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::AttendanceMarker => "Attendance Marker",
            Role::Other(slug) => slug,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Other(_))
    }

    /// Parse a role slug. Case, surrounding whitespace and `-`/`_` are
    /// normalized; anything unrecognized becomes [`Role::Other`].
    pub fn parse(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            slugs::SYSTEM_ADMIN => Role::SystemAdmin,
            slugs::INSTITUTE_ADMIN => Role::InstituteAdmin,
            slugs::TEACHER => Role::Teacher,
            slugs::STUDENT => Role::Student,
            slugs::ATTENDANCE_MARKER => Role::AttendanceMarker,
            _ => Role::Other(normalized),
        }
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Role::parse(s))
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::parse(&value)
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role::parse(value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> String {
        role.slug().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
