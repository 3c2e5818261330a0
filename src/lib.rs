//! # EduNav Console
//!
//! Role-aware navigation for a school-management admin console.
//!
//! Every page request passes through three pieces of per-session logic:
//!
//! - the **permission table**, mapping each role to the action keys it is
//!   granted ([`modules::access`]);
//! - the **selection context**, holding the Institute → Class → Subject
//!   drill-down and enforcing its hierarchy ([`modules::selection`]);
//! - the **navigation resolver**, deciding which page is rendered given the
//!   role, the selection and the requested page ([`modules::navigation`]).
//!
//! [`modules::shell::AppShell`] ties them together for one session, and the
//! HTTP API in [`modules::sessions`] exposes shells over axum.
//!
//! ## Layout
//!
//! ```text
//! src/
//! ├── cli/              # edunav-cli inspector commands
//! ├── modules/
//! │   ├── access/      # permission table, evaluator, /api/permissions
//! │   ├── selection/   # SelectionContext
//! │   ├── navigation/  # per-role rules and the resolver
//! │   ├── shell/       # AppShell and menu
//! │   └── sessions/    # session registry, /api/sessions
//! ├── docs.rs          # OpenAPI document
//! ├── logging.rs       # request logging middleware
//! ├── router.rs        # main router
//! └── state.rs         # shared application state
//! ```
//!
//! ## Configuration
//!
//! ```bash
//! HOST=0.0.0.0
//! PORT=3000
//! ALLOWED_ORIGINS=http://localhost:5173
//! PERMISSION_TABLE_PATH=./permissions.json   # built-in table when unset
//! LOG_LEVEL=info
//! LOG_FORMAT=compact                          # or json
//! ```
//!
//! Swagger UI is served at `/swagger-ui` while the server runs.

pub mod cli;
pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;

pub use edunav_config;
pub use edunav_core;
pub use edunav_models;
