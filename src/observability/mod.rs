//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! transport / client / CLI
//!     → tracing events (structured fields, never header values)
//!     → logging.rs (subscriber: env filter + fmt layer)
//!     → stderr
//! ```

pub mod logging;

pub use logging::init_logging;
