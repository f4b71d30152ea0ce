//! Outbound HTTP sending subsystem.
//!
//! # Data Flow
//! ```text
//! caller
//!     → transport.rs (no-op check)
//!     → clone.rs (private copy of the request, only when modifying)
//!     → headers::merge (set, then add)
//!     → sender.rs (base Sender: client.rs, a tower service, another Transport)
//!     → response or error returned unchanged
//! ```

pub mod client;
pub mod clone;
pub mod sender;
pub mod transport;

pub use client::DefaultSender;
pub use clone::{clone_request, take_request};
pub use sender::{SendFuture, Sender, ServiceSender, SharedRequest};
pub use transport::{Transport, TransportConfig, TransportLayer};
