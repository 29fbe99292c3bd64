//! Command-line front end.
//!
//! [`Invocation::parse`] drives an [`ArgumentScanner`] over the process
//! arguments and dispatches every recognized option to a
//! [`RequestBuilder`]. Bad input never stops the scan; it is collected in
//! [`Invocation::diagnostics`] and the request is handed off regardless.

pub mod options;
pub mod scanner;

#[cfg(test)]
mod tests;

use std::io::Write;
use std::process::ExitCode;

use tracing::debug;

use crate::client::ClientEngine;
use crate::error::{MgmtError, Result};
use crate::request::{Request, RequestBuilder};
use crate::types::{ClientConfig, Verbosity};

pub use options::{Arity, OPTIONS, OptionCode, OptionSpec, OptionTarget};
pub use scanner::{ArgumentScanner, Scanned};

/// Result of scanning one command line.
#[derive(Debug)]
pub struct Invocation {
    /// The accumulated request.
    pub request: Request,
    /// Configuration, with `--verbose` / `--brief` applied.
    pub config: ClientConfig,
    /// Arguments that were not options, in order.
    pub operands: Vec<String>,
    /// Recoverable problems met while scanning, in order.
    pub diagnostics: Vec<MgmtError>,
}

impl Invocation {
    /// Scan `args` (without the program name) into a request.
    pub fn parse<I, S>(args: I, config: ClientConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = RequestBuilder::new();
        let mut config = config;
        let mut diagnostics = Vec::new();

        let mut scanner = ArgumentScanner::new(OPTIONS, args.into_iter().map(Into::into));
        for item in scanner.by_ref() {
            let result = match item {
                Ok(Scanned::Flag(verbosity)) => {
                    config.verbosity = verbosity;
                    Ok(())
                }
                Ok(Scanned::Option { code, argument }) => dispatch(&mut builder, code, argument),
                Err(err) => Err(err),
            };

            match result {
                Ok(()) => {}
                Err(err @ MgmtError::MalformedTimeout { .. }) => {
                    debug!(error = %err, "ignoring timeout");
                }
                Err(err) => {
                    debug!(error = %err, "option ignored");
                    diagnostics.push(err);
                }
            }
        }

        if config.verbosity == Verbosity::Verbose {
            debug!("verbose flag is set");
        }

        Self {
            request: builder.build(),
            config,
            operands: scanner.into_operands(),
            diagnostics,
        }
    }

    /// The informational line listing operands, if there were any.
    #[must_use]
    pub fn operands_line(&self) -> Option<String> {
        if self.operands.is_empty() {
            return None;
        }
        Some(format!(
            "non-option ARGV-elements: {}",
            self.operands.join(" ")
        ))
    }

    /// Print usage if help was requested, otherwise hand the request off.
    ///
    /// The request is consumed on both paths.
    ///
    /// # Errors
    /// Returns [`MgmtError::Io`] if the usage text cannot be written.
    pub fn finish<E, W>(self, program: &str, engine: &mut E, out: &mut W) -> Result<ExitCode>
    where
        E: ClientEngine + ?Sized,
        W: Write,
    {
        if self.request.help_requested() {
            out.write_all(usage(program).as_bytes())?;
            return Ok(ExitCode::SUCCESS);
        }
        debug!(request = ?self.request, "handing off request");
        Ok(engine.submit(self.request, &self.config))
    }
}

/// The verbosity `args` ask for, without touching a request.
///
/// Lets the caller set up logging before [`Invocation::parse`] runs, so the
/// per-option trace is not filtered out. The last `--verbose` or `--brief`
/// wins; everything else is skipped.
pub fn requested_verbosity<I, S>(args: I, default: Verbosity) -> Verbosity
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ArgumentScanner::new(OPTIONS, args.into_iter().map(Into::into))
        .filter_map(|item| match item {
            Ok(Scanned::Flag(verbosity)) => Some(verbosity),
            _ => None,
        })
        .last()
        .unwrap_or(default)
}

/// Apply one option to the builder.
///
/// # Panics
/// If the scanner yields an argument shape the option table rules out.
/// That is a defect in this module, not bad input.
fn dispatch(builder: &mut RequestBuilder, code: OptionCode, argument: Option<String>) -> Result<()> {
    debug!(option = ?code, argument = argument.as_deref(), "option");
    match (code, argument) {
        (OptionCode::Help, None) => builder.set_help(),
        (OptionCode::Address, Some(address)) => builder.set_address(&address),
        (OptionCode::Port, Some(port)) => builder.set_port(&port),
        (OptionCode::Interface, Some(interface)) => builder.set_interface(&interface),
        (OptionCode::Timeout, Some(timeout)) => builder.set_timeout(&timeout)?,
        (OptionCode::Action, Some(action)) => builder.set_action(&action)?,
        (OptionCode::Message, Some(message)) => builder.set_message(&message)?,
        (OptionCode::Value, Some(value)) => builder.set_value(&value),
        (code, argument) => {
            unreachable!("option table does not allow {code:?} with argument {argument:?}")
        }
    }
    Ok(())
}

/// Usage text generated from [`OPTIONS`].
#[must_use]
pub fn usage(program: &str) -> String {
    let rows: Vec<(String, &str)> = OPTIONS
        .iter()
        .map(|spec| {
            let short = spec
                .short
                .map_or_else(|| "    ".to_string(), |c| format!("-{c}, "));
            let value = spec.value_name.map(|v| format!(" {v}")).unwrap_or_default();
            (format!("{short}--{}{value}", spec.long), spec.help)
        })
        .collect();
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);

    let mut text = format!(
        "Usage: {program} [OPTIONS]\n\n\
         Build a PTP management request and hand it to the client engine.\n\n\
         Options:\n"
    );
    for (left, help) in rows {
        text.push_str(&format!("  {left:<width$}  {help}\n"));
    }
    text
}
