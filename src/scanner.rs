// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Short option scanning in the style of `getopt(3)`.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::settings::Settings;

const OPT_PREFIX: char = '-';

/// Marks an option letter in an optstring as requiring a value.
pub(crate) const VALUE_MARKER: char = ':';

/// Special argument that is silently consumed and used to denote the end of
/// all options; all arguments that follow are considered to be positional
/// arguments (even if they start with `-`!)
///
/// See: `getopt(3)`.
const END_OF_OPTIONS: &str = "--";
const LONG_OPT_PREFIX: &str = END_OF_OPTIONS;

/// Used to specify whether an option is a "stand-alone" flag option
/// (needs no value), or whether it requires an option argument.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Need {
    /// Option is stand-alone (no argument required).
    Nothing,
    /// Option needs an argument.
    Argument,
}

/// The parsed form of an optstring such as `"it:v"`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct OptSpec {
    entries: HashMap<char, Need>,
}

impl OptSpec {
    pub(crate) fn parse(optstring: &str) -> Result<Self> {
        let mut entries = HashMap::new();
        let mut chars = optstring.chars().peekable();

        while let Some(option) = chars.next() {
            if option == VALUE_MARKER || option == OPT_PREFIX || !option.is_ascii_graphic() {
                return Err(Error::InvalidOptName(option));
            }

            let need = if chars.peek() == Some(&VALUE_MARKER) {
                chars.next();
                Need::Argument
            } else {
                Need::Nothing
            };

            entries.insert(option, need);
        }

        Ok(OptSpec { entries })
    }

    fn need(&self, option: char) -> Option<Need> {
        self.entries.get(&option).copied()
    }
}

/// A recognised option and, if it requires one, its value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Found<'s> {
    pub option: char,
    pub value: Option<&'s str>,
}

/// The order in which the scanned arguments should be presented once
/// scanning has finished: options first, then operands.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Permutation {
    order: Vec<usize>,
    optind: usize,
}

/// Iterates over the options in an argument vector.
///
/// Once the iterator is exhausted, call [Scanner::finish()] to find out
/// where the operands are.
#[derive(Debug)]
pub(crate) struct Scanner<'s> {
    spec: OptSpec,
    args: &'s [String],
    settings: Settings,

    /// Next argument to examine.
    index: usize,

    /// Argument index and byte offset of the next option character in an
    /// option group such as `-vt5`.
    group: Option<(usize, usize)>,

    /// Operands passed over while permuting.
    skipped: Vec<usize>,

    /// Index of the first argument not scanned, once scanning has stopped.
    stop: Option<usize>,
}

impl<'s> Scanner<'s> {
    pub(crate) fn new(spec: OptSpec, args: &'s [String], settings: Settings) -> Self {
        Scanner {
            spec,
            args,
            settings,
            index: 0,
            group: None,
            skipped: Vec::new(),
            stop: None,
        }
    }

    fn halt(&mut self, at: usize) {
        self.stop = Some(at);
        self.group = None;
    }

    fn found(&mut self, option: char) -> Result<Found<'s>> {
        let result = self.resolve(option);

        if result.is_err() {
            let at = self.index;
            self.halt(at);
        }

        result
    }

    fn resolve(&mut self, option: char) -> Result<Found<'s>> {
        let args = self.args;

        let need = self.spec.need(option).ok_or(Error::UnknownOpt(option))?;

        if need == Need::Nothing {
            return Ok(Found {
                option,
                value: None,
            });
        }

        // The rest of the group is the value ("-t5").
        if let Some((current, offset)) = self.group.take() {
            return Ok(Found {
                option,
                value: Some(&args[current][offset..]),
            });
        }

        let value = args.get(self.index).ok_or(Error::MissingOptArg(option))?;

        if self.settings.no_strict_options && value.starts_with(OPT_PREFIX) {
            return Err(Error::MissingOptArg(option));
        }

        self.index += 1;

        Ok(Found {
            option,
            value: Some(value.as_str()),
        })
    }

    /// Consume the scanner, returning the final argument order.
    pub(crate) fn finish(self) -> Permutation {
        let stop = self.stop.unwrap_or(self.index);

        let mut order: Vec<usize> = (0..stop).filter(|i| !self.skipped.contains(i)).collect();

        let optind = order.len();

        order.extend(self.skipped.iter().copied());
        order.extend(stop..self.args.len());

        Permutation { order, optind }
    }
}

impl<'s> Iterator for Scanner<'s> {
    type Item = Result<Found<'s>>;

    fn next(&mut self) -> Option<Self::Item> {
        let args = self.args;

        loop {
            if self.stop.is_some() {
                return None;
            }

            if let Some((current, offset)) = self.group {
                let arg = args[current].as_str();

                if let Some(option) = arg[offset..].chars().next() {
                    let next = offset + option.len_utf8();

                    self.group = if next < arg.len() {
                        Some((current, next))
                    } else {
                        None
                    };

                    return Some(self.found(option));
                }

                self.group = None;
            }

            let arg = match args.get(self.index) {
                Some(arg) => arg.as_str(),
                None => {
                    let at = self.index;
                    self.halt(at);
                    return None;
                }
            };

            if arg == END_OF_OPTIONS {
                self.index += 1;

                let at = self.index;
                self.halt(at);
                return None;
            }

            if arg.starts_with(LONG_OPT_PREFIX) {
                let at = self.index;
                self.halt(at);
                return Some(Err(Error::NoLongOpts(arg.into())));
            }

            if arg.len() > 1 && arg.starts_with(OPT_PREFIX) {
                // Skip the dash
                self.group = Some((self.index, OPT_PREFIX.len_utf8()));
                self.index += 1;
                continue;
            }

            // Positional argument (operand)
            if self.settings.posixly_correct {
                let at = self.index;
                self.halt(at);
                return None;
            }

            self.skipped.push(self.index);
            self.index += 1;
        }
    }
}

/// The state of the argument vector after parsing.
///
/// This is the equivalent of `getopt(3)`'s `optind` together with the
/// (possibly permuted) `argv`: all options (and their values) come first,
/// followed by the positional arguments ("operands") starting at
/// [Cursor::optind()].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cursor {
    args: Vec<String>,
    optind: usize,
}

impl Cursor {
    pub(crate) fn new(args: Vec<String>, permutation: Permutation) -> Self {
        let mut slots: Vec<Option<String>> = args.into_iter().map(Some).collect();

        let args = permutation
            .order
            .iter()
            .filter_map(|i| slots.get_mut(*i).and_then(Option::take))
            .collect();

        Cursor {
            args,
            optind: permutation.optind,
        }
    }

    /// Index of the first positional argument in [Cursor::args()].
    pub fn optind(&self) -> usize {
        self.optind
    }

    /// The full argument vector, options first.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The positional arguments that follow the options.
    pub fn operands(&self) -> &[String] {
        &self.args[self.optind..]
    }

    /// Consume the cursor, returning the positional arguments.
    pub fn into_operands(mut self) -> Vec<String> {
        self.args.split_off(self.optind)
    }
}
