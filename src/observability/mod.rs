//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / config
//!     → tracing events (insert, conflict, compile, miss)
//!     → logging.rs (subscriber with env filter)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; installing a subscriber is the binary's job
//! - `RUST_LOG` overrides the configured filter

pub mod logging;

pub use logging::init_logging;
