//! # EduNav Core
//!
//! Core types, errors, and action keys shared by every EduNav crate.
//!
//! - [`errors`]: HTTP-facing [`AppError`] and the selection contract error
//! - [`permissions`]: Action key constants gated by the permission table
//!
//! # Example
//!
//! ```ignore
//! use edunav_core::errors::{AppError, SelectionError};
//! use edunav_core::permissions;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Session not found"));
//!
//! if evaluator.is_allowed(&role, permissions::CLASSES_CREATE) {
//!     // Offer the "new class" button
//! }
//! ```

pub mod errors;
pub mod permissions;

// Re-export commonly used types at crate root
pub use errors::{AppError, SelectionError};
