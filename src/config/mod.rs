//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize; header names/values parsed by serde)
//!     → validation.rs (semantic checks)
//!     → HeaderModConfig (validated, immutable)
//!     → Transport / DefaultSender construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ClientConfig, HeaderModConfig, HeadersConfig, ObservabilityConfig};
pub use validation::{validate_config, ValidationError};
