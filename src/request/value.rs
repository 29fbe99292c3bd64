//! Length-tagged payload for SET requests.

use bytes::Bytes;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Payload of a SET request, modeled on the PTP `PTPText` type.
///
/// The length is the length of the option text in bytes. No terminator is
/// stored, so the payload may contain any bytes including zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PtpText {
    data: Bytes,
}

impl PtpText {
    /// Capture `text` as a payload sized exactly to its length.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Capture raw bytes as a payload.
    #[must_use]
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            data: Bytes::copy_from_slice(data),
        }
    }

    /// Length field: number of payload bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload is zero-length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Payload bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Cheap shared handle to the payload, for engines that encode it.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        self.data.clone()
    }

    /// Payload as text, replacing invalid UTF-8.
    #[must_use]
    pub fn to_text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

impl From<&str> for PtpText {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl Serialize for PtpText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PtpText", 2)?;
        state.serialize_field("length", &self.len())?;
        state.serialize_field("text", &self.to_text_lossy())?;
        state.end()
    }
}
