//! Management request accumulated from command-line options.
//!
//! A [`RequestBuilder`] is created empty at startup, receives one call per
//! scanned option, and is turned into a [`Request`] exactly once when the
//! scan is complete. Setters never fail the whole run: the ones that can
//! reject their input return an error and leave the field unchanged.

mod bounded;
mod value;


use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::error::{MgmtError, Result};
use crate::protocol::ptp::{ActionType, ManagementId};

pub use bounded::BoundedString;
pub use value::PtpText;

/// Maximum length of the target address (textual IPv6 address).
pub const MAX_ADDRESS_LEN: usize = 45;

/// Maximum length of the target port.
pub const MAX_PORT_LEN: usize = 5;

/// Keyword for `--message` that asks for the catalog instead of a message.
pub const PRINT_CATALOG_KEYWORD: &str = "print";

/// Target address field.
pub type Address = BoundedString<MAX_ADDRESS_LEN>;

/// Target port field.
pub type Port = BoundedString<MAX_PORT_LEN>;

/// What `--message` selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSelection {
    /// Send the management message with this id.
    Id(ManagementId),
    /// List all known management ids instead of sending anything.
    PrintCatalog,
}

/// A fully scanned management request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Request {
    address: Address,
    port: Port,
    interface: Option<String>,
    action: Option<ActionType>,
    message: Option<MessageSelection>,
    timeout: u32,
    value: Option<PtpText>,
    help_requested: bool,
}

impl Request {
    /// Target daemon host; empty if not given.
    #[must_use]
    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    /// Target daemon port; empty if not given.
    #[must_use]
    pub fn port(&self) -> &str {
        self.port.as_str()
    }

    /// Network interface name, if given.
    #[must_use]
    pub fn interface(&self) -> Option<&str> {
        self.interface.as_deref()
    }

    /// Whether `--interface` was given.
    #[must_use]
    pub fn interface_set(&self) -> bool {
        self.interface.is_some()
    }

    /// Resolved action; `None` while unset.
    #[must_use]
    pub fn action(&self) -> Option<ActionType> {
        self.action
    }

    /// What `--message` selected, if anything.
    #[must_use]
    pub fn message(&self) -> Option<MessageSelection> {
        self.message
    }

    /// Management id to send, unless unset or the catalog was requested.
    #[must_use]
    pub fn management_id(&self) -> Option<ManagementId> {
        match self.message {
            Some(MessageSelection::Id(id)) => Some(id),
            _ => None,
        }
    }

    /// Whether the catalog was requested instead of a message.
    #[must_use]
    pub fn print_catalog(&self) -> bool {
        self.message == Some(MessageSelection::PrintCatalog)
    }

    /// Timeout in seconds; 0 means the client engine's default.
    #[must_use]
    pub fn timeout(&self) -> u32 {
        self.timeout
    }

    /// Timeout to apply, falling back to `default` when none was given.
    #[must_use]
    pub fn effective_timeout(&self, default: Duration) -> Duration {
        if self.timeout == 0 {
            default
        } else {
            Duration::from_secs(u64::from(self.timeout))
        }
    }

    /// SET payload, if given.
    #[must_use]
    pub fn value(&self) -> Option<&PtpText> {
        self.value.as_ref()
    }

    /// Whether `--value` was given.
    #[must_use]
    pub fn value_set(&self) -> bool {
        self.value.is_some()
    }

    /// Whether `--help` was given.
    #[must_use]
    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    /// Check that the request describes exactly one sendable operation.
    ///
    /// A catalog request is always valid. Otherwise a management id and an
    /// action are required, SET needs a value, a value is only accepted
    /// with SET, and a named id must allow the chosen action.
    ///
    /// # Errors
    /// Returns [`MgmtError::IncompleteRequest`] or
    /// [`MgmtError::ActionNotSupported`] describing the first violated rule.
    pub fn validate(&self) -> Result<()> {
        let id = match self.message {
            Some(MessageSelection::PrintCatalog) => return Ok(()),
            Some(MessageSelection::Id(id)) => id,
            None => return Err(incomplete("no management id given (use --message)")),
        };

        let Some(action) = self.action else {
            return Err(incomplete("no action given (use --action)"));
        };

        match (action, self.value.is_some()) {
            (ActionType::Set, false) => {
                return Err(incomplete("SET requires a value (use --value)"));
            }
            (ActionType::Get | ActionType::Command, true) => {
                return Err(incomplete("a value is only allowed with SET"));
            }
            _ => {}
        }

        if id.allows(action) == Some(false) {
            return Err(MgmtError::ActionNotSupported {
                action: action.to_string(),
                management_id: id.to_string(),
            });
        }

        Ok(())
    }
}

fn incomplete(reason: &str) -> MgmtError {
    MgmtError::IncompleteRequest {
        reason: reason.to_string(),
    }
}

/// Accumulates a [`Request`], one option at a time.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    /// Create a builder holding an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target address, truncating to [`MAX_ADDRESS_LEN`] bytes.
    pub fn set_address(&mut self, address: &str) {
        if self.request.address.set(address) {
            debug!(
                max = MAX_ADDRESS_LEN,
                stored = %self.request.address,
                "address truncated"
            );
        }
    }

    /// Set the target port, truncating to [`MAX_PORT_LEN`] bytes.
    pub fn set_port(&mut self, port: &str) {
        if self.request.port.set(port) {
            debug!(max = MAX_PORT_LEN, stored = %self.request.port, "port truncated");
        }
    }

    /// Set the network interface name.
    pub fn set_interface(&mut self, interface: &str) {
        self.request.interface = Some(interface.to_owned());
    }

    /// Parse and set the timeout in seconds.
    ///
    /// # Errors
    /// Returns [`MgmtError::MalformedTimeout`] if `timeout` is not an unsigned
    /// decimal integer; the previous timeout is kept.
    pub fn set_timeout(&mut self, timeout: &str) -> Result<()> {
        // `u32::from_str` tolerates a leading '+', plain digits only here.
        if timeout.is_empty() || !timeout.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MgmtError::MalformedTimeout {
                input: timeout.to_string(),
            });
        }
        let seconds = timeout
            .parse::<u32>()
            .map_err(|_| MgmtError::MalformedTimeout {
                input: timeout.to_string(),
            })?;
        self.request.timeout = seconds;
        Ok(())
    }

    /// Resolve and set the action.
    ///
    /// # Errors
    /// Returns [`MgmtError::UnresolvedActionKeyword`]; the previous action is
    /// kept.
    pub fn set_action(&mut self, keyword: &str) -> Result<()> {
        self.request.action = Some(ActionType::resolve(keyword)?);
        Ok(())
    }

    /// Select the catalog (for [`PRINT_CATALOG_KEYWORD`]) or resolve and set
    /// the management id.
    ///
    /// # Errors
    /// Returns [`MgmtError::UnresolvedManagementId`]; the previous selection
    /// is kept.
    pub fn set_message(&mut self, message: &str) -> Result<()> {
        let selection = if message == PRINT_CATALOG_KEYWORD {
            MessageSelection::PrintCatalog
        } else {
            MessageSelection::Id(ManagementId::resolve(message)?)
        };
        self.request.message = Some(selection);
        Ok(())
    }

    /// Capture the SET payload.
    pub fn set_value(&mut self, value: &str) {
        self.request.value = Some(PtpText::from_text(value));
    }

    /// Mark help as requested.
    pub fn set_help(&mut self) {
        self.request.help_requested = true;
    }

    /// The request as accumulated so far.
    #[must_use]
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Finish scanning and take the request.
    #[must_use]
    pub fn build(self) -> Request {
        self.request
    }
}
