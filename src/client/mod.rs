//! Hand-off boundary to the client engine.
//!
//! Once scanning is finished the request is passed, by value, to exactly
//! one [`ClientEngine`]. The engine owns everything after that point:
//! checking the request, talking to the daemon, interpreting the answer
//! and choosing the exit code. The request is dropped when `submit`
//! returns.

mod report;

#[cfg(test)]
mod tests;

use std::process::ExitCode;

use crate::request::Request;
use crate::types::ClientConfig;

pub use report::ReportEngine;

/// Consumer of a completed management request
pub trait ClientEngine {
    /// Take the request and carry it out.
    ///
    /// The returned exit code is passed through to the process unchanged.
    fn submit(&mut self, request: Request, config: &ClientConfig) -> ExitCode;
}

impl<E: ClientEngine + ?Sized> ClientEngine for &mut E {
    fn submit(&mut self, request: Request, config: &ClientConfig) -> ExitCode {
        (**self).submit(request, config)
    }
}

impl<E: ClientEngine + ?Sized> ClientEngine for Box<E> {
    fn submit(&mut self, request: Request, config: &ClientConfig) -> ExitCode {
        (**self).submit(request, config)
    }
}
