//! # EduNav Models
//!
//! Domain models and DTOs for the EduNav console.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed UUID newtypes
//! - [`pages`]: Page identifiers and selection levels
//! - [`roles`]: Session roles
//! - [`selection`]: Institute / class / subject entities and the selection snapshot
//! - [`sessions`]: Request and response DTOs of the console API
//!
//! # Example
//!
//! ```ignore
//! use edunav_models::{PageId, Role, Selection};
//!
//! let role: Role = "teacher".parse().unwrap();
//! let page = PageId::from("grading");
//! let selection = Selection::empty();
//! ```

pub mod ids;
pub mod pages;
pub mod roles;
pub mod selection;
pub mod sessions;

// Re-export commonly used types at crate root for convenience
pub use ids::{ClassId, InstituteId, SessionId, SubjectId, UserId};
pub use pages::{PageId, SelectionLevel};
pub use roles::Role;
pub use selection::{Class, Institute, Selection, Subject};
pub use sessions::{
    Breadcrumb, CreateSessionDto, MenuEntry, NavigateDto, NavigationResponse, PermissionDecision,
    PermissionSummary, SelectEntityDto, SessionView,
};
