//! Precision Time Protocol (PTP, IEEE 1588) management vocabulary.
//!
//! Management messages query or change the state of a running PTP
//! daemon. Each message names one management id and one action:
//!
//! ```text
//! action     management id           payload
//! GET        PRIORITY1 (0x2005)      -
//! SET        PRIORITY1 (0x2005)      new value
//! COMMAND    INITIALIZE (0x0005)     -
//! ```
//!
//! This module only resolves the textual forms users type into these
//! identifiers. Encoding the message onto the wire is left to the client
//! engine behind [`crate::client::ClientEngine`].

pub mod action;
pub mod management_id;


// Re-exports for convenient access.
pub use action::{ACTION_KEYWORDS, ActionType};
pub use management_id::{MANAGEMENT_IDS, ManagementId, ManagementIdEntry, catalog};
