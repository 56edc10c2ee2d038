//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)            defaults.rs (built-in dashboard table)
//!     → loader.rs (parse & deserialize)      │
//!     → validation.rs (semantic checks)  ◀───┘
//!     → RouterConfig (validated)
//!     → RouteTable (compiled, immutable, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload
//! - All fields except routes have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ComponentRef;
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::ResolverConfig;
pub use schema::RouteConfig;
pub use schema::RouterConfig;
