pub mod access;
pub mod navigation;
pub mod selection;
pub mod sessions;
pub mod shell;
