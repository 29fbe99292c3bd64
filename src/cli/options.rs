//! Table of recognized command-line options.

use crate::types::Verbosity;

/// Whether an option takes an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// `--help`
    None,
    /// `--port 320`, `--port=320`, `-p320`
    Required,
}

/// Options that are dispatched to the request builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionCode {
    /// `--action` / `-c`
    Action,
    /// `--address` / `-a`
    Address,
    /// `--help` / `-h`
    Help,
    /// `--interface` / `-i`
    Interface,
    /// `--message` / `-m`
    Message,
    /// `--port` / `-p`
    Port,
    /// `--timeout` / `-t`
    Timeout,
    /// `--value` / `-v`
    Value,
}

/// What recognizing an option does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionTarget {
    /// Dispatch to the request builder.
    Code(OptionCode),
    /// Set the verbosity directly; never reaches the dispatcher.
    Flag(Verbosity),
}

/// One entry of the option table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Long name without the leading `--`.
    pub long: &'static str,
    /// Short name, if the option has one.
    pub short: Option<char>,
    /// Argument requirement.
    pub arity: Arity,
    /// Effect of the option.
    pub target: OptionTarget,
    /// Argument placeholder for the usage text.
    pub value_name: Option<&'static str>,
    /// One-line description for the usage text.
    pub help: &'static str,
}

const fn flag(long: &'static str, verbosity: Verbosity, help: &'static str) -> OptionSpec {
    OptionSpec {
        long,
        short: None,
        arity: Arity::None,
        target: OptionTarget::Flag(verbosity),
        value_name: None,
        help,
    }
}

const fn switch(long: &'static str, short: char, code: OptionCode, help: &'static str) -> OptionSpec {
    OptionSpec {
        long,
        short: Some(short),
        arity: Arity::None,
        target: OptionTarget::Code(code),
        value_name: None,
        help,
    }
}

const fn with_arg(
    long: &'static str,
    short: char,
    code: OptionCode,
    value_name: &'static str,
    help: &'static str,
) -> OptionSpec {
    OptionSpec {
        long,
        short: Some(short),
        arity: Arity::Required,
        target: OptionTarget::Code(code),
        value_name: Some(value_name),
        help,
    }
}

/// The options understood by `ptp-mgmt`.
pub const OPTIONS: &[OptionSpec] = &[
    flag("verbose", Verbosity::Verbose, "log every option and the final request"),
    flag("brief", Verbosity::Brief, "only log warnings (default)"),
    with_arg("action", 'c', OptionCode::Action, "ACTION", "action type: get, set or command"),
    with_arg("address", 'a', OptionCode::Address, "ADDRESS", "address of the PTP daemon"),
    switch("help", 'h', OptionCode::Help, "print this help and exit"),
    with_arg("interface", 'i', OptionCode::Interface, "IFACE", "network interface to send from"),
    with_arg(
        "message",
        'm',
        OptionCode::Message,
        "ID",
        "management id (name or number), or 'print' to list them",
    ),
    with_arg("port", 'p', OptionCode::Port, "PORT", "port of the PTP daemon"),
    with_arg("timeout", 't', OptionCode::Timeout, "SECONDS", "response timeout in seconds"),
    with_arg("value", 'v', OptionCode::Value, "VALUE", "payload for a set action"),
];

/// Look up an option by its short name.
#[must_use]
pub fn find_short(table: &[OptionSpec], short: char) -> Option<&OptionSpec> {
    table.iter().find(|spec| spec.short == Some(short))
}

/// Outcome of a long-name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LongMatch<'t> {
    /// Exact name, or a prefix of exactly one name.
    Found(&'t OptionSpec),
    /// Prefix of several names.
    Ambiguous(Vec<&'t OptionSpec>),
    /// No name starts with it.
    NotFound,
}

/// Look up an option by its long name or an unambiguous prefix of it.
#[must_use]
pub fn find_long<'t>(table: &'t [OptionSpec], name: &str) -> LongMatch<'t> {
    if let Some(spec) = table.iter().find(|spec| spec.long == name) {
        return LongMatch::Found(spec);
    }
    if name.is_empty() {
        return LongMatch::NotFound;
    }

    let mut candidates: Vec<&OptionSpec> = table
        .iter()
        .filter(|spec| spec.long.starts_with(name))
        .collect();
    match candidates.len() {
        0 => LongMatch::NotFound,
        1 => LongMatch::Found(candidates.remove(0)),
        _ => LongMatch::Ambiguous(candidates),
    }
}
