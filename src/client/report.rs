//! Engine that validates a request and reports what it would send.

use std::io::{self, Stderr, Stdout, Write};
use std::process::ExitCode;

use serde::Serialize;
use tracing::{debug, error, info};

use super::ClientEngine;
use crate::error::Result;
use crate::protocol::ptp::{ActionType, ManagementIdEntry, catalog};
use crate::request::{MessageSelection, Request};
use crate::types::{ClientConfig, OutputFormat, Verbosity};

/// Client engine that applies [`Request::validate`] and renders either the
/// management-id catalog or a description of the request.
///
/// Transport engines plug in behind the same [`ClientEngine`] trait.
#[derive(Debug)]
pub struct ReportEngine<O: Write, E: Write> {
    out: O,
    err: E,
}

impl ReportEngine<Stdout, Stderr> {
    /// Engine writing to the process's stdout and stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ReportEngine<O, E> {
    /// Engine writing reports to `out` and problems to `err`.
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Validate and render `request`.
    ///
    /// # Errors
    /// Returns a validation error from [`Request::validate`], or an I/O or
    /// serialization error if the report cannot be written.
    pub fn report(&mut self, request: &Request, config: &ClientConfig) -> Result<()> {
        request.validate()?;

        if request.print_catalog() {
            debug!(entries = catalog().len(), "printing management id catalog");
            return match config.output {
                OutputFormat::Text => write_catalog_text(&mut self.out),
                OutputFormat::Json => write_json(&mut self.out, &catalog()),
            };
        }

        if config.verbosity == Verbosity::Verbose {
            info!(
                address = request.address(),
                port = request.port(),
                action = ?request.action(),
                management_id = ?request.management_id(),
                "request ready"
            );
        }

        match config.output {
            OutputFormat::Text => write_request_text(&mut self.out, request, config),
            OutputFormat::Json => write_json(
                &mut self.out,
                &RequestReport {
                    request,
                    effective_timeout_secs: request
                        .effective_timeout(config.default_timeout)
                        .as_secs(),
                },
            ),
        }
    }

    /// Give back the writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> ClientEngine for ReportEngine<O, E> {
    fn submit(&mut self, request: Request, config: &ClientConfig) -> ExitCode {
        match self.report(&request, config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "request rejected");
                if let Err(write_err) = writeln!(self.err, "error: {e}") {
                    debug!(error = %write_err, "could not write rejection");
                }
                ExitCode::FAILURE
            }
        }
    }
}

#[derive(Serialize)]
struct RequestReport<'a> {
    #[serde(flatten)]
    request: &'a Request,
    effective_timeout_secs: u64,
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn actions_text(actions: &[ActionType]) -> String {
    actions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_catalog_text<W: Write>(out: &mut W) -> Result<()> {
    let entries: &[ManagementIdEntry] = catalog();
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);

    writeln!(out, "{:<6}  {:<width$}  ACTIONS", "ID", "NAME")?;
    for entry in entries {
        writeln!(
            out,
            "0x{:04X}  {:<width$}  {}",
            entry.id.value(),
            entry.name,
            actions_text(entry.actions)
        )?;
    }
    Ok(())
}

fn or_default(field: &str) -> &str {
    if field.is_empty() { "(default)" } else { field }
}

fn write_request_text<W: Write>(out: &mut W, request: &Request, config: &ClientConfig) -> Result<()> {
    writeln!(
        out,
        "target:    {}:{}",
        or_default(request.address()),
        or_default(request.port())
    )?;
    if let Some(interface) = request.interface() {
        writeln!(out, "interface: {interface}")?;
    }
    if let Some(action) = request.action() {
        writeln!(out, "action:    {action} ({})", action.code())?;
    }
    if let Some(MessageSelection::Id(id)) = request.message() {
        writeln!(out, "message:   {id} (0x{:04X})", id.value())?;
    }
    writeln!(
        out,
        "timeout:   {}s",
        request.effective_timeout(config.default_timeout).as_secs()
    )?;
    if let Some(value) = request.value() {
        writeln!(
            out,
            "value:     {} bytes {:?}",
            value.len(),
            value.to_text_lossy()
        )?;
    }
    Ok(())
}
