pub mod menu;
pub mod service;

pub use service::AppShell;
