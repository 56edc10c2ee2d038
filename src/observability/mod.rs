//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / config produce:
//!     → structured `tracing` events (path, canonical_path, hops)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr: pretty, compact or JSON)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; the binary installs the subscriber
//! - `RUST_LOG` overrides the configured level

pub mod logging;
