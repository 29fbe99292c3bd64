//! Engine that records what it is handed.

use std::process::ExitCode;

use crate::client::ClientEngine;
use crate::request::Request;
use crate::types::ClientConfig;

/// A client engine that stores every submission instead of acting on it.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    submissions: Vec<(Request, ClientConfig)>,
    fail: bool,
}

impl RecordingEngine {
    /// Engine that reports success for every submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that reports failure for every submission.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            submissions: Vec::new(),
            fail: true,
        }
    }

    /// Everything submitted so far, oldest first.
    #[must_use]
    pub fn submissions(&self) -> &[(Request, ClientConfig)] {
        &self.submissions
    }

    /// The only submission, if exactly one was made.
    #[must_use]
    pub fn single(&self) -> Option<&Request> {
        match self.submissions.as_slice() {
            [(request, _)] => Some(request),
            _ => None,
        }
    }
}

impl ClientEngine for RecordingEngine {
    fn submit(&mut self, request: Request, config: &ClientConfig) -> ExitCode {
        self.submissions.push((request, config.clone()));
        if self.fail {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}
