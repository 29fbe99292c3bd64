//! Table-driven scanner over process arguments.
//!
//! Follows the conventions of `getopt_long`:
//!
//! - `--name value`, `--name=value`, and any unambiguous prefix of `name`
//! - `-c value`, `-cvalue`, and clusters of switches (`-hcget`)
//! - `--` ends option scanning; everything after it is an operand
//! - a lone `-` and anything not starting with `-` is an operand, and
//!   scanning continues past it
//!
//! Problems with individual options are yielded as errors and scanning
//! carries on with the next argument.

use std::iter::{Fuse, FusedIterator};

use super::options::{Arity, LongMatch, OptionCode, OptionSpec, OptionTarget, find_long, find_short};
use crate::error::{MgmtError, Result};
use crate::types::Verbosity;

/// One recognized option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scanned {
    /// `--verbose` or `--brief`.
    Flag(Verbosity),
    /// An option for the request builder.
    Option {
        /// Which option.
        code: OptionCode,
        /// Its argument; present exactly when the table says it is required.
        argument: Option<String>,
    },
}

/// Lazy scanner yielding one recognized option at a time.
///
/// Operands are collected on the side and available through
/// [`ArgumentScanner::operands`] once the scan is done.
#[derive(Debug)]
pub struct ArgumentScanner<'t, I: Iterator<Item = String>> {
    table: &'t [OptionSpec],
    args: Fuse<I>,
    /// Unprocessed characters of a short-option cluster, without the `-`.
    cluster: Option<String>,
    options_ended: bool,
    operands: Vec<String>,
}

impl<'t, I: Iterator<Item = String>> ArgumentScanner<'t, I> {
    /// Create a scanner over `args`, which must not include the program name.
    pub fn new(table: &'t [OptionSpec], args: I) -> Self {
        Self {
            table,
            args: args.fuse(),
            cluster: None,
            options_ended: false,
            operands: Vec::new(),
        }
    }

    /// Operands seen so far.
    #[must_use]
    pub fn operands(&self) -> &[String] {
        &self.operands
    }

    /// Take the operands.
    #[must_use]
    pub fn into_operands(self) -> Vec<String> {
        self.operands
    }

    fn next_in_cluster(&mut self) -> Option<Result<Scanned>> {
        let cluster = self.cluster.take()?;
        let mut chars = cluster.chars();
        let short = chars.next()?;
        let rest = chars.as_str();

        let Some(spec) = find_short(self.table, short) else {
            self.keep_cluster(rest);
            return Some(Err(MgmtError::UnrecognizedOption {
                option: format!("-{short}"),
            }));
        };

        let item = match spec.arity {
            Arity::None => {
                self.keep_cluster(rest);
                Ok(scanned(spec, None))
            }
            Arity::Required if !rest.is_empty() => Ok(scanned(spec, Some(rest.to_string()))),
            Arity::Required => match self.args.next() {
                Some(argument) => Ok(scanned(spec, Some(argument))),
                None => Err(MgmtError::MissingArgument {
                    option: format!("-{short}"),
                }),
            },
        };
        Some(item)
    }

    fn keep_cluster(&mut self, rest: &str) {
        if !rest.is_empty() {
            self.cluster = Some(rest.to_string());
        }
    }

    fn scan_long(&mut self, body: &str) -> Result<Scanned> {
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (body, None),
        };

        let spec = match find_long(self.table, name) {
            LongMatch::Found(spec) => spec,
            LongMatch::Ambiguous(candidates) => {
                return Err(MgmtError::AmbiguousOption {
                    option: format!("--{name}"),
                    candidates: candidates
                        .iter()
                        .map(|spec| format!("--{}", spec.long))
                        .collect::<Vec<_>>()
                        .join(" "),
                });
            }
            LongMatch::NotFound => {
                return Err(MgmtError::UnrecognizedOption {
                    option: format!("--{name}"),
                });
            }
        };

        match (spec.arity, inline) {
            (Arity::None, None) => Ok(scanned(spec, None)),
            (Arity::None, Some(_)) => Err(MgmtError::UnexpectedArgument {
                option: format!("--{}", spec.long),
            }),
            (Arity::Required, Some(argument)) => Ok(scanned(spec, Some(argument))),
            (Arity::Required, None) => match self.args.next() {
                Some(argument) => Ok(scanned(spec, Some(argument))),
                None => Err(MgmtError::MissingArgument {
                    option: format!("--{}", spec.long),
                }),
            },
        }
    }
}

fn scanned(spec: &OptionSpec, argument: Option<String>) -> Scanned {
    match spec.target {
        OptionTarget::Flag(verbosity) => Scanned::Flag(verbosity),
        OptionTarget::Code(code) => Scanned::Option { code, argument },
    }
}

impl<I: Iterator<Item = String>> Iterator for ArgumentScanner<'_, I> {
    type Item = Result<Scanned>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.next_in_cluster() {
                return Some(item);
            }

            let arg = self.args.next()?;
            if self.options_ended {
                self.operands.push(arg);
                continue;
            }
            if arg == "--" {
                self.options_ended = true;
                continue;
            }
            if let Some(body) = arg.strip_prefix("--") {
                return Some(self.scan_long(body));
            }
            if let Some(cluster) = arg.strip_prefix('-').filter(|c| !c.is_empty()) {
                self.cluster = Some(cluster.to_string());
                continue;
            }
            self.operands.push(arg);
        }
    }
}

impl<I: Iterator<Item = String>> FusedIterator for ArgumentScanner<'_, I> {}
