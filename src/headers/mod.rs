//! Header collections and the set/add merge.
//!
//! # Data Flow
//! ```text
//! config file / CLI / caller code
//!     → set.rs (HeaderSet: canonical name → ordered values)
//!     → merge.rs (apply "set" then "add" to a request's HeaderMap)
//! ```
//!
//! # Design Decisions
//! - Key canonicalization is the `http` crate's `HeaderName`
//! - Value order within a key is always preserved
//! - Repeated values are kept; nothing is deduplicated

pub mod merge;
pub mod set;

pub use merge::{merge_headers, modify_headers};
pub use set::{parse_header_line, HeaderError, HeaderSet};
