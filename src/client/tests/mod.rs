use std::io;
use std::process::ExitCode;
use std::time::Duration;

use super::*;
use crate::error::MgmtError;
use crate::protocol::ptp::MANAGEMENT_IDS;
use crate::request::RequestBuilder;
use crate::types::{OutputFormat, Verbosity};

fn engine() -> ReportEngine<Vec<u8>, Vec<u8>> {
    ReportEngine::new(Vec::new(), Vec::new())
}

fn request(f: impl FnOnce(&mut RequestBuilder)) -> Request {
    let mut builder = RequestBuilder::new();
    f(&mut builder);
    builder.build()
}

fn json_config() -> ClientConfig {
    ClientConfig::builder().output(OutputFormat::Json).build()
}

fn get_priority1() -> Request {
    request(|b| {
        b.set_address("10.0.0.5");
        b.set_port("320");
        b.set_action("get").unwrap();
        b.set_message("PRIORITY1").unwrap();
    })
}

// ===== Catalog =====

#[test]
fn test_catalog_text_lists_every_entry() {
    let mut engine = engine();
    let catalog_request = request(|b| b.set_message("print").unwrap());
    engine
        .report(&catalog_request, &ClientConfig::default())
        .unwrap();

    let (out, err) = engine.into_inner();
    let text = String::from_utf8(out).unwrap();
    assert!(err.is_empty());
    assert!(text.starts_with("ID"));
    assert_eq!(text.lines().count(), MANAGEMENT_IDS.len() + 1);
    assert!(
        text.lines()
            .any(|l| l.starts_with("0x2005") && l.contains("PRIORITY1") && l.ends_with("GET SET"))
    );
    assert!(
        text.lines()
            .any(|l| l.starts_with("0x0005") && l.contains("INITIALIZE") && l.ends_with("COMMAND"))
    );
}

#[test]
fn test_catalog_json() {
    let mut engine = engine();
    let catalog_request = request(|b| b.set_message("print").unwrap());
    engine.report(&catalog_request, &json_config()).unwrap();

    let (out, _) = engine.into_inner();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), MANAGEMENT_IDS.len());
    assert_eq!(entries[0]["name"], "NULL_MANAGEMENT");
    assert_eq!(entries[0]["id"], 0);
    assert_eq!(entries[0]["actions"][2], "COMMAND");
}

// ===== Request report =====

#[test]
fn test_request_text() {
    let mut engine = engine();
    engine
        .report(&get_priority1(), &ClientConfig::default())
        .unwrap();

    let (out, _) = engine.into_inner();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("target:    10.0.0.5:320"));
    assert!(text.contains("action:    GET (0)"));
    assert!(text.contains("message:   PRIORITY1 (0x2005)"));
    assert!(text.contains("timeout:   5s"));
    assert!(!text.contains("value:"));
    assert!(!text.contains("interface:"));
}

#[test]
fn test_request_text_defaults_and_value() {
    let mut engine = engine();
    let set = request(|b| {
        b.set_interface("eth1");
        b.set_timeout("9").unwrap();
        b.set_action("set").unwrap();
        b.set_message("PRIORITY2").unwrap();
        b.set_value("127");
    });
    engine.report(&set, &ClientConfig::default()).unwrap();

    let (out, _) = engine.into_inner();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("target:    (default):(default)"));
    assert!(text.contains("interface: eth1"));
    assert!(text.contains("timeout:   9s"));
    assert!(text.contains("value:     3 bytes \"127\""));
}

#[test]
fn test_request_json() {
    let mut engine = engine();
    let config = ClientConfig::builder()
        .output(OutputFormat::Json)
        .default_timeout(Duration::from_secs(2))
        .verbosity(Verbosity::Verbose)
        .build();
    engine.report(&get_priority1(), &config).unwrap();

    let (out, _) = engine.into_inner();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["address"], "10.0.0.5");
    assert_eq!(json["action"], "GET");
    assert_eq!(json["message"]["id"], 0x2005);
    assert_eq!(json["timeout"], 0);
    assert_eq!(json["effective_timeout_secs"], 2);
}

// ===== Validation at the boundary =====

#[test]
fn test_report_rejects_incomplete_request() {
    let mut engine = engine();
    let err = engine
        .report(&Request::default(), &ClientConfig::default())
        .unwrap_err();
    assert!(matches!(err, MgmtError::IncompleteRequest { .. }));

    let (out, _) = engine.into_inner();
    assert!(out.is_empty());
}

#[test]
fn test_submit_writes_error_on_rejection() {
    let mut engine = engine();
    let set_without_value = request(|b| {
        b.set_action("set").unwrap();
        b.set_message("PRIORITY1").unwrap();
    });
    let _ = engine.submit(set_without_value, &ClientConfig::default());

    let (out, err) = engine.into_inner();
    assert!(out.is_empty());
    let err = String::from_utf8(err).unwrap();
    assert!(err.starts_with("error: incomplete request"));
}

#[test]
fn test_submit_through_boxed_engine() {
    let mut boxed: Box<dyn ClientEngine> = Box::new(engine());
    let _ = boxed.submit(get_priority1(), &ClientConfig::default());
}

struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_submit_fails_quietly_when_stderr_is_gone() {
    let mut engine = ReportEngine::new(Vec::<u8>::new(), BrokenPipe);
    let code = engine.submit(Request::default(), &ClientConfig::default());
    assert_eq!(code, ExitCode::FAILURE);

    let (out, _) = engine.into_inner();
    assert!(out.is_empty());
}
