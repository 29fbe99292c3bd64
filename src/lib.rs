//! # ptp-mgmt
//!
//! Builds PTP (IEEE 1588) management requests from command-line options
//! and hands them to a client engine.
//!
//! ## Example
//!
//! ```rust
//! use ptp_mgmt::cli::Invocation;
//! use ptp_mgmt::protocol::ptp::{ActionType, ManagementId};
//! use ptp_mgmt::types::ClientConfig;
//!
//! let invocation = Invocation::parse(
//!     ["--address", "10.0.0.5", "--action", "get", "--message", "PRIORITY1"],
//!     ClientConfig::default(),
//! );
//!
//! assert_eq!(invocation.request.address(), "10.0.0.5");
//! assert_eq!(invocation.request.action(), Some(ActionType::Get));
//! assert_eq!(invocation.request.management_id(), Some(ManagementId(0x2005)));
//! assert!(invocation.diagnostics.is_empty());
//! ```
//!
//! # Architecture
//!
//! - [`cli`]: option table, [`cli::ArgumentScanner`], dispatch loop
//! - [`request`]: the [`Request`] and its [`RequestBuilder`]
//! - [`protocol::ptp`]: action and management-id resolution
//! - [`client`]: the [`ClientEngine`] hand-off boundary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types
pub mod error;
/// Core types
pub mod types;

pub mod cli;
pub mod client;
pub mod protocol;
pub mod request;

/// Testing utilities
pub mod testing;

// Re-exports
pub use cli::Invocation;
pub use client::{ClientEngine, ReportEngine};
pub use error::MgmtError;
pub use request::{Request, RequestBuilder};
pub use types::{ClientConfig, OutputFormat, Verbosity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
