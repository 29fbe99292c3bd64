//! Test doubles for code that hands requests to a [`ClientEngine`].
//!
//! [`ClientEngine`]: crate::client::ClientEngine

mod recording;

pub use recording::RecordingEngine;
