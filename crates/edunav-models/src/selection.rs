//! Institute / class / subject entities and the selection snapshot.
//!
//! Entities carry only what navigation needs: an id and a display name.
//! [`Selection`] is an immutable snapshot of a session's selection; it can
//! only be built in a state where `class ⇒ institute` and
//! `subject ⇒ class` hold.

use edunav_core::SelectionError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{ClassId, InstituteId, SubjectId};
use crate::pages::SelectionLevel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Institute {
    pub id: InstituteId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Class {
    pub id: ClassId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
}

impl Institute {
    pub fn new(id: InstituteId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Class {
    pub fn new(id: ClassId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Subject {
    pub fn new(id: SubjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Read-only copy of a session's selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Selection {
    institute: Option<Institute>,
    class: Option<Class>,
    subject: Option<Subject>,
}

impl Selection {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot, rejecting any level selected without its ancestor.
    pub fn new(
        institute: Option<Institute>,
        class: Option<Class>,
        subject: Option<Subject>,
    ) -> Result<Self, SelectionError> {
        if class.is_some() && institute.is_none() {
            return Err(SelectionError::InvalidState {
                level: SelectionLevel::Class.name(),
                missing: SelectionLevel::Institute.name(),
            });
        }
        if subject.is_some() && class.is_none() {
            return Err(SelectionError::InvalidState {
                level: SelectionLevel::Subject.name(),
                missing: SelectionLevel::Class.name(),
            });
        }

        Ok(Self {
            institute,
            class,
            subject,
        })
    }

    pub fn institute(&self) -> Option<&Institute> {
        self.institute.as_ref()
    }

    pub fn class(&self) -> Option<&Class> {
        self.class.as_ref()
    }

    pub fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    /// Whether `level` (and therefore every level above it) is selected.
    pub fn has(&self, level: SelectionLevel) -> bool {
        match level {
            SelectionLevel::Institute => self.institute.is_some(),
            SelectionLevel::Class => self.class.is_some(),
            SelectionLevel::Subject => self.subject.is_some(),
        }
    }

    /// Deepest selected level, `None` when nothing is selected.
    pub fn depth(&self) -> Option<SelectionLevel> {
        if self.subject.is_some() {
            Some(SelectionLevel::Subject)
        } else if self.class.is_some() {
            Some(SelectionLevel::Class)
        } else if self.institute.is_some() {
            Some(SelectionLevel::Institute)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.depth().is_none()
    }

    /// Selection after picking (or clearing) the institute.
    ///
    /// Clearing, or switching to a different institute, drops class and
    /// subject. Re-picking the current institute keeps them.
    pub fn with_institute(&self, institute: Option<Institute>) -> Selection {
        let Some(institute) = institute else {
            return Selection::empty();
        };

        let unchanged = self
            .institute
            .as_ref()
            .is_some_and(|current| current.id == institute.id);
        if unchanged {
            Selection {
                institute: Some(institute),
                ..self.clone()
            }
        } else {
            Selection {
                institute: Some(institute),
                class: None,
                subject: None,
            }
        }
    }

    /// Selection after picking (or clearing) the class.
    pub fn with_class(&self, class: Option<Class>) -> Result<Selection, SelectionError> {
        let Some(class) = class else {
            return Ok(Selection {
                institute: self.institute.clone(),
                class: None,
                subject: None,
            });
        };

        if self.institute.is_none() {
            return Err(SelectionError::InvalidState {
                level: SelectionLevel::Class.name(),
                missing: SelectionLevel::Institute.name(),
            });
        }

        let unchanged = self
            .class
            .as_ref()
            .is_some_and(|current| current.id == class.id);
        Ok(Selection {
            institute: self.institute.clone(),
            subject: if unchanged { self.subject.clone() } else { None },
            class: Some(class),
        })
    }

    /// Selection after picking (or clearing) the subject.
    pub fn with_subject(&self, subject: Option<Subject>) -> Result<Selection, SelectionError> {
        if subject.is_some() && self.class.is_none() {
            return Err(SelectionError::InvalidState {
                level: SelectionLevel::Subject.name(),
                missing: SelectionLevel::Class.name(),
            });
        }

        Ok(Selection {
            subject,
            ..self.clone()
        })
    }
}
