//! # EduNav Config
//!
//! Configuration types for the EduNav console, loaded from environment
//! variables:
//!
//! - [`access`]: Where the permission table is loaded from
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`logging`]: Log level and output format
//! - [`server`]: Bind address for the console API
//! - [`session`]: Idle timeout and capacity of the session registry
//!
//! # Example
//!
//! ```ignore
//! use edunav_config::{AccessConfig, CorsConfig, LoggingConfig, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let access = AccessConfig::from_env();
//! println!("listening on {}", server.bind_address());
//! ```

pub mod access;
pub mod cors;
pub mod logging;
pub mod server;
pub mod session;

// Re-export commonly used types at crate root
pub use access::AccessConfig;
pub use cors::CorsConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use session::SessionConfig;
