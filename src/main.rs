//! `ptp-mgmt` - build a PTP management request from the command line and
//! hand it to the client engine.

use std::io;
use std::process::ExitCode;

use ptp_mgmt::cli::requested_verbosity;
use ptp_mgmt::{ClientConfig, Invocation, ReportEngine, Verbosity};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

fn main() -> ExitCode {
    // Warnings only until the command line says otherwise.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let (filter, log_level) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let mut args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let program = if args.is_empty() {
        "ptp-mgmt".to_string()
    } else {
        args.remove(0)
    };

    let config = ClientConfig::from_env();
    if requested_verbosity(args.iter().cloned(), config.verbosity) == Verbosity::Verbose {
        if let Err(e) = log_level.modify(|filter| *filter = EnvFilter::new("debug")) {
            error!(error = %e, "failed to raise log level");
        }
    }

    let invocation = Invocation::parse(args, config);
    debug!(request = ?invocation.request, "parsed request");

    for diagnostic in &invocation.diagnostics {
        eprintln!("{program}: {diagnostic}");
    }
    if let Some(line) = invocation.operands_line() {
        println!("{line}");
    }

    let mut engine = ReportEngine::stdio();
    match invocation.finish(&program, &mut engine, &mut io::stdout()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{program}: {e}");
            ExitCode::FAILURE
        }
    }
}
