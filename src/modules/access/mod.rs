pub mod controller;
pub mod router;
pub mod service;
pub mod table;

pub use router::init_permissions_router;
pub use service::AccessEvaluator;
pub use table::{PermissionSet, PermissionTable};
