//! EduNav Observability
//!
//! Console logging for the server and the CLI inspector. Every crate logs
//! through `tracing` macros; this crate installs the subscriber that prints
//! them.
//!
//! # Examples
//!
//! ```no_run
//! use edunav_config::LoggingConfig;
//! use edunav_observability::init_logging;
//!
//! init_logging(&LoggingConfig::from_env());
//! tracing::info!("ready");
//! ```

pub mod basic_logging;

pub use basic_logging::{build_env_filter, init_logging};
