//! Page identifiers and selection levels.
//!
//! Page ids are kebab-case slugs. Any slug without a dedicated variant parses
//! to [`PageId::Other`]; the navigation resolver sends those to the role's
//! default page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Depth of the Institute → Class → Subject hierarchy a page depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionLevel {
    Institute,
    Class,
    Subject,
}

impl SelectionLevel {
    pub fn name(&self) -> &'static str {
        match self {
            SelectionLevel::Institute => "institute",
            SelectionLevel::Class => "class",
            SelectionLevel::Subject => "subject",
        }
    }

    /// The picker page that satisfies this level.
    pub fn picker(&self) -> PageId {
        match self {
            SelectionLevel::Institute => PageId::SelectInstitute,
            SelectionLevel::Class => PageId::SelectClass,
            SelectionLevel::Subject => PageId::SelectSubject,
        }
    }
}

impl fmt::Display for SelectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PageId {
    Dashboard,
    SelectInstitute,
    SelectClass,
    SelectSubject,
    Institutes,
    Classes,
    Subjects,
    Students,
    Teachers,
    Users,
    Attendance,
    AttendanceMarking,
    Grading,
    Lectures,
    Homework,
    Results,
    Permissions,
    Profile,
    /// Unrecognized page id, kept verbatim.
    Other(String),
}

impl PageId {
    /// Every page with a dedicated variant.
    pub const KNOWN: [PageId; 18] = [
        PageId::Dashboard,
        PageId::SelectInstitute,
        PageId::SelectClass,
        PageId::SelectSubject,
        PageId::Institutes,
        PageId::Classes,
        PageId::Subjects,
        PageId::Students,
        PageId::Teachers,
        PageId::Users,
        PageId::Attendance,
        PageId::AttendanceMarking,
        PageId::Grading,
        PageId::Lectures,
        PageId::Homework,
        PageId::Results,
        PageId::Permissions,
        PageId::Profile,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::SelectInstitute => "select-institute",
            PageId::SelectClass => "select-class",
            PageId::SelectSubject => "select-subject",
            PageId::Institutes => "institutes",
            PageId::Classes => "classes",
            PageId::Subjects => "subjects",
            PageId::Students => "students",
            PageId::Teachers => "teachers",
            PageId::Users => "users",
            PageId::Attendance => "attendance",
            PageId::AttendanceMarking => "attendance-marking",
            PageId::Grading => "grading",
            PageId::Lectures => "lectures",
            PageId::Homework => "homework",
            PageId::Results => "results",
            PageId::Permissions => "permissions",
            PageId::Profile => "profile",
            PageId::Other(id) => id,
        }
    }

    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        Self::KNOWN
            .into_iter()
            .find(|page| page.as_str() == trimmed)
            .unwrap_or_else(|| PageId::Other(trimmed.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PageId::Other(_))
    }

    /// One of the institute/class/subject picker pages.
    pub fn is_picker(&self) -> bool {
        matches!(
            self,
            PageId::SelectInstitute | PageId::SelectClass | PageId::SelectSubject
        )
    }

    pub fn title(&self) -> &str {
        match self {
            PageId::Dashboard => "Dashboard",
            PageId::SelectInstitute => "Select Institute",
            PageId::SelectClass => "Select Class",
            PageId::SelectSubject => "Select Subject",
            PageId::Institutes => "Institutes",
            PageId::Classes => "Classes",
            PageId::Subjects => "Subjects",
            PageId::Students => "Students",
            PageId::Teachers => "Teachers",
            PageId::Users => "Users",
            PageId::Attendance => "Attendance",
            PageId::AttendanceMarking => "Mark Attendance",
            PageId::Grading => "Grading",
            PageId::Lectures => "Lectures",
            PageId::Homework => "Homework",
            PageId::Results => "Results",
            PageId::Permissions => "Permissions",
            PageId::Profile => "Profile",
            PageId::Other(id) => id,
        }
    }
}

impl From<String> for PageId {
    fn from(value: String) -> Self {
        PageId::parse(&value)
    }
}

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        PageId::parse(value)
    }
}

impl From<PageId> for String {
    fn from(page: PageId) -> String {
        page.as_str().to_string()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
