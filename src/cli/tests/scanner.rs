use crate::cli::options::{OPTIONS, OptionCode};
use crate::cli::scanner::*;
use crate::error::MgmtError;
use crate::types::Verbosity;

fn scan(args: &[&str]) -> (Vec<Result<Scanned, MgmtError>>, Vec<String>) {
    let mut scanner = ArgumentScanner::new(OPTIONS, args.iter().map(|s| (*s).to_string()));
    let items: Vec<_> = scanner.by_ref().collect();
    (items, scanner.into_operands())
}

fn opt(code: OptionCode, argument: Option<&str>) -> Scanned {
    Scanned::Option {
        code,
        argument: argument.map(str::to_string),
    }
}

fn ok_items(args: &[&str]) -> Vec<Scanned> {
    let (items, _) = scan(args);
    items.into_iter().map(Result::unwrap).collect()
}

// ===== Long options =====

#[test]
fn test_long_with_separate_argument() {
    assert_eq!(
        ok_items(&["--address", "10.0.0.5"]),
        [opt(OptionCode::Address, Some("10.0.0.5"))]
    );
}

#[test]
fn test_long_with_inline_argument() {
    assert_eq!(
        ok_items(&["--port=320"]),
        [opt(OptionCode::Port, Some("320"))]
    );
}

#[test]
fn test_long_inline_empty_argument() {
    assert_eq!(ok_items(&["--value="]), [opt(OptionCode::Value, Some(""))]);
}

#[test]
fn test_long_inline_argument_keeps_later_equals() {
    assert_eq!(
        ok_items(&["--value=a=b"]),
        [opt(OptionCode::Value, Some("a=b"))]
    );
}

#[test]
fn test_long_argument_may_start_with_dash() {
    assert_eq!(
        ok_items(&["--value", "-5"]),
        [opt(OptionCode::Value, Some("-5"))]
    );
}

#[test]
fn test_long_prefix() {
    assert_eq!(
        ok_items(&["--mess", "print"]),
        [opt(OptionCode::Message, Some("print"))]
    );
}

#[test]
fn test_long_switch() {
    assert_eq!(ok_items(&["--help"]), [opt(OptionCode::Help, None)]);
}

#[test]
fn test_flags() {
    assert_eq!(
        ok_items(&["--verbose", "--brief"]),
        [
            Scanned::Flag(Verbosity::Verbose),
            Scanned::Flag(Verbosity::Brief)
        ]
    );
}

// ===== Short options =====

#[test]
fn test_short_with_separate_argument() {
    assert_eq!(
        ok_items(&["-c", "get"]),
        [opt(OptionCode::Action, Some("get"))]
    );
}

#[test]
fn test_short_with_attached_argument() {
    assert_eq!(ok_items(&["-t5"]), [opt(OptionCode::Timeout, Some("5"))]);
}

#[test]
fn test_short_cluster() {
    assert_eq!(
        ok_items(&["-hcget"]),
        [
            opt(OptionCode::Help, None),
            opt(OptionCode::Action, Some("get"))
        ]
    );
}

#[test]
fn test_short_cluster_argument_from_next() {
    assert_eq!(
        ok_items(&["-hm", "2"]),
        [
            opt(OptionCode::Help, None),
            opt(OptionCode::Message, Some("2"))
        ]
    );
}

// ===== Diagnostics =====

#[test]
fn test_unrecognized_short_is_reported_and_scan_continues() {
    let (items, _) = scan(&["-x", "-c", "get"]);
    assert_eq!(items.len(), 2);
    assert!(matches!(
        &items[0],
        Err(MgmtError::UnrecognizedOption { option }) if option == "-x"
    ));
    assert_eq!(
        items[1].as_ref().unwrap(),
        &opt(OptionCode::Action, Some("get"))
    );
}

#[test]
fn test_unrecognized_in_cluster_continues_cluster() {
    let (items, _) = scan(&["-xh"]);
    assert!(items[0].is_err());
    assert_eq!(items[1].as_ref().unwrap(), &opt(OptionCode::Help, None));
}

#[test]
fn test_unrecognized_long() {
    let (items, _) = scan(&["--bogus=1", "--help"]);
    assert!(matches!(
        &items[0],
        Err(MgmtError::UnrecognizedOption { option }) if option == "--bogus"
    ));
    assert!(items[1].is_ok());
}

#[test]
fn test_ambiguous_long() {
    let (items, _) = scan(&["--a", "x"]);
    assert!(matches!(
        &items[0],
        Err(MgmtError::AmbiguousOption { candidates, .. }) if candidates == "--action --address"
    ));
}

#[test]
fn test_missing_argument_short() {
    let (items, _) = scan(&["-p"]);
    assert!(matches!(
        &items[0],
        Err(MgmtError::MissingArgument { option }) if option == "-p"
    ));
}

#[test]
fn test_missing_argument_long() {
    let (items, _) = scan(&["--timeout"]);
    assert!(matches!(
        &items[0],
        Err(MgmtError::MissingArgument { option }) if option == "--timeout"
    ));
}

#[test]
fn test_argument_to_switch_rejected() {
    let (items, _) = scan(&["--help=yes"]);
    assert!(matches!(
        &items[0],
        Err(MgmtError::UnexpectedArgument { option }) if option == "--help"
    ));
}

// ===== Operands =====

#[test]
fn test_operands_are_collected_and_scanning_continues() {
    let (items, operands) = scan(&["one", "-h", "two"]);
    assert_eq!(items.len(), 1);
    assert_eq!(operands, ["one", "two"]);
}

#[test]
fn test_double_dash_ends_options() {
    let (items, operands) = scan(&["-h", "--", "-c", "get"]);
    assert_eq!(items.len(), 1);
    assert_eq!(operands, ["-c", "get"]);
}

#[test]
fn test_lone_dash_is_operand() {
    let (items, operands) = scan(&["-"]);
    assert!(items.is_empty());
    assert_eq!(operands, ["-"]);
}

#[test]
fn test_empty_args() {
    let (items, operands) = scan(&[]);
    assert!(items.is_empty());
    assert!(operands.is_empty());
}

#[test]
fn test_scanner_is_fused() {
    let mut scanner = ArgumentScanner::new(OPTIONS, vec!["-h".to_string()].into_iter());
    assert!(scanner.next().is_some());
    assert!(scanner.next().is_none());
    assert!(scanner.next().is_none());
}

#[test]
fn test_scanner_is_lazy() {
    let mut consumed = 0;
    let args = ["-h", "-h", "-h"].iter().map(|s| {
        consumed += 1;
        (*s).to_string()
    });
    let mut scanner = ArgumentScanner::new(OPTIONS, args);
    assert!(scanner.next().is_some());
    drop(scanner);
    assert_eq!(consumed, 1);
}
