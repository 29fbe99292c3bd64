//! Management ids (IEEE 1588-2008 Table 40) and keyword resolution.
//!
//! A management id is accepted either by its standard name
//! (`PRIORITY1`) or as a decimal number (`8197`). Numbers outside the
//! table are accepted as-is so that ids added by later revisions of the
//! standard or by a daemon's vendor range can still be requested.

use serde::Serialize;

use super::action::ActionType;
use crate::error::{MgmtError, Result};

const GET: &[ActionType] = &[ActionType::Get];
const GET_SET: &[ActionType] = &[ActionType::Get, ActionType::Set];
const COMMAND: &[ActionType] = &[ActionType::Command];
const ANY: &[ActionType] = &[ActionType::Get, ActionType::Set, ActionType::Command];

/// 16-bit management id carried in the management TLV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ManagementId(pub u16);

/// One named entry of the management-id table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManagementIdEntry {
    /// Standard name, used as the keyword.
    pub name: &'static str,
    /// Numeric id.
    pub id: ManagementId,
    /// Actions the standard allows for this id.
    pub actions: &'static [ActionType],
}

const fn entry(
    name: &'static str,
    id: u16,
    actions: &'static [ActionType],
) -> ManagementIdEntry {
    ManagementIdEntry {
        name,
        id: ManagementId(id),
        actions,
    }
}

/// Every named management id, in ascending id order.
pub const MANAGEMENT_IDS: &[ManagementIdEntry] = &[
    // Applicable to all node types
    entry("NULL_MANAGEMENT", 0x0000, ANY),
    entry("CLOCK_DESCRIPTION", 0x0001, GET),
    entry("USER_DESCRIPTION", 0x0002, GET_SET),
    entry("SAVE_IN_NON_VOLATILE_STORAGE", 0x0003, COMMAND),
    entry("RESET_NON_VOLATILE_STORAGE", 0x0004, COMMAND),
    entry("INITIALIZE", 0x0005, COMMAND),
    entry("FAULT_LOG", 0x0006, GET),
    entry("FAULT_LOG_RESET", 0x0007, COMMAND),
    // Ordinary and boundary clocks
    entry("DEFAULT_DATA_SET", 0x2000, GET),
    entry("CURRENT_DATA_SET", 0x2001, GET),
    entry("PARENT_DATA_SET", 0x2002, GET),
    entry("TIME_PROPERTIES_DATA_SET", 0x2003, GET),
    entry("PORT_DATA_SET", 0x2004, GET),
    entry("PRIORITY1", 0x2005, GET_SET),
    entry("PRIORITY2", 0x2006, GET_SET),
    entry("DOMAIN", 0x2007, GET_SET),
    entry("SLAVE_ONLY", 0x2008, GET_SET),
    entry("LOG_ANNOUNCE_INTERVAL", 0x2009, GET_SET),
    entry("ANNOUNCE_RECEIPT_TIMEOUT", 0x200A, GET_SET),
    entry("LOG_SYNC_INTERVAL", 0x200B, GET_SET),
    entry("VERSION_NUMBER", 0x200C, GET_SET),
    entry("ENABLE_PORT", 0x200D, COMMAND),
    entry("DISABLE_PORT", 0x200E, COMMAND),
    entry("TIME", 0x200F, GET_SET),
    entry("CLOCK_ACCURACY", 0x2010, GET_SET),
    entry("UTC_PROPERTIES", 0x2011, GET_SET),
    entry("TRACEABILITY_PROPERTIES", 0x2012, GET_SET),
    entry("TIMESCALE_PROPERTIES", 0x2013, GET_SET),
    entry("UNICAST_NEGOTIATION_ENABLE", 0x2014, GET_SET),
    entry("PATH_TRACE_LIST", 0x2015, GET),
    entry("PATH_TRACE_ENABLE", 0x2016, GET_SET),
    entry("GRANDMASTER_CLUSTER_TABLE", 0x2017, GET_SET),
    entry("UNICAST_MASTER_TABLE", 0x2018, GET_SET),
    entry("UNICAST_MASTER_MAX_TABLE_SIZE", 0x2019, GET),
    entry("ACCEPTABLE_MASTER_TABLE", 0x201A, GET_SET),
    entry("ACCEPTABLE_MASTER_TABLE_ENABLED", 0x201B, GET_SET),
    entry("ACCEPTABLE_MASTER_MAX_TABLE_SIZE", 0x201C, GET),
    entry("ALTERNATE_MASTER", 0x201D, GET_SET),
    entry("ALTERNATE_TIME_OFFSET_ENABLE", 0x201E, GET_SET),
    entry("ALTERNATE_TIME_OFFSET_NAME", 0x201F, GET_SET),
    entry("ALTERNATE_TIME_OFFSET_MAX_KEY", 0x2020, GET),
    entry("ALTERNATE_TIME_OFFSET_PROPERTIES", 0x2021, GET_SET),
    // Transparent clocks
    entry("TRANSPARENT_CLOCK_DEFAULT_DATA_SET", 0x4000, GET),
    entry("TRANSPARENT_CLOCK_PORT_DATA_SET", 0x4001, GET),
    entry("PRIMARY_DOMAIN", 0x4002, GET_SET),
    // Ordinary, boundary and transparent clocks
    entry("DELAY_MECHANISM", 0x6000, GET_SET),
    entry("LOG_MIN_PDELAY_REQ_INTERVAL", 0x6001, GET_SET),
];

impl ManagementId {
    /// Resolve a management id from a keyword or a decimal string.
    ///
    /// # Errors
    /// Returns [`MgmtError::UnresolvedManagementId`] if `input` is neither
    /// a name in [`MANAGEMENT_IDS`] nor a decimal number that fits in 16 bits.
    pub fn resolve(input: &str) -> Result<Self> {
        if let Some(entry) = MANAGEMENT_IDS.iter().find(|e| e.name == input) {
            return Ok(entry.id);
        }

        // `u16::from_str` tolerates a leading '+', plain digits only here.
        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = input.parse::<u16>() {
                return Ok(Self(id));
            }
        }

        Err(MgmtError::UnresolvedManagementId {
            input: input.to_string(),
        })
    }

    /// Table entry for this id, if it is a named one.
    #[must_use]
    pub fn entry(self) -> Option<&'static ManagementIdEntry> {
        MANAGEMENT_IDS.iter().find(|e| e.id == self)
    }

    /// Standard name for this id, if it is a named one.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        self.entry().map(|e| e.name)
    }

    /// Whether `action` is allowed for this id.
    ///
    /// Returns `None` for ids outside the table, whose rules are unknown.
    #[must_use]
    pub fn allows(self, action: ActionType) -> Option<bool> {
        self.entry().map(|e| e.actions.contains(&action))
    }

    /// The raw 16-bit value.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ManagementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "0x{:04X}", self.0),
        }
    }
}

impl From<u16> for ManagementId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// The full catalog of named management ids.
#[must_use]
pub fn catalog() -> &'static [ManagementIdEntry] {
    MANAGEMENT_IDS
}
