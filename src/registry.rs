// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::ffi::OsString;
use std::fmt;

use crate::error::{Error, Result};
use crate::scanner::{Cursor, Found, OptSpec, Scanner, VALUE_MARKER};
use crate::settings::Settings;
use crate::slot::{self, SLOT_COUNT};

const OPT_PREFIX: char = '-';

/// The type of an option.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum Kind {
    /// Stand-alone option (no value), for example `-v`.
    Flag,
    /// Option with an integer value, for example `-t 5`.
    Integer,
    /// Option with a string value, for example `-i data.txt`.
    String,
}

impl Kind {
    /// Returns `true` if the option requires a value on the command line.
    pub fn needs_value(self) -> bool {
        self != Kind::Flag
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Kind::Flag => "flag",
            Kind::Integer => "integer",
            Kind::String => "string",
        };

        write!(f, "{}", name)
    }
}

/// The caller-owned variable an option writes its value to.
#[derive(Debug)]
pub enum Target<'a> {
    /// Set to `true` when the flag is given.
    Flag(&'a mut bool),
    /// Set to the option value, converted as `atoi(3)` would.
    Integer(&'a mut i64),
    /// Set to a newly allocated copy of the option value.
    String(&'a mut Option<String>),
}

impl<'a> Target<'a> {
    /// The [Kind] of option this target accepts.
    pub fn kind(&self) -> Kind {
        match self {
            Target::Flag(_) => Kind::Flag,
            Target::Integer(_) => Kind::Integer,
            Target::String(_) => Kind::String,
        }
    }
}

/// A value converted from the command line, not yet written to its target.
#[derive(Debug, Eq, PartialEq)]
enum Value {
    Flag,
    Integer(i64),
    String(String),
}

/// An option declaration.
///
/// Binds a single lowercase letter to a caller-owned variable and,
/// optionally, to a "presence indicator" which is set to `true` if the
/// option is given on the command line.
#[derive(Debug)]
pub struct Opt<'a> {
    letter: char,
    target: Target<'a>,
    present: Option<&'a mut bool>,
}

impl<'a> Opt<'a> {
    /// Create an option declaration for an arbitrary [Target].
    pub fn new(letter: char, target: Target<'a>) -> Self {
        Opt {
            letter,
            target,
            present: None,
        }
    }

    /// Declare a flag option (`-v`).
    pub fn flag(letter: char, dest: &'a mut bool) -> Self {
        Opt::new(letter, Target::Flag(dest))
    }

    /// Declare an option with an integer value (`-t 5`).
    pub fn integer(letter: char, dest: &'a mut i64) -> Self {
        Opt::new(letter, Target::Integer(dest))
    }

    /// Declare an option with a string value (`-i data.txt`).
    ///
    /// The parsed value is a new allocation which belongs to the caller:
    /// the registry never refers to it again.
    pub fn string(letter: char, dest: &'a mut Option<String>) -> Self {
        Opt::new(letter, Target::String(dest))
    }

    /// Specify a presence indicator for the option.
    pub fn present(self, indicator: &'a mut bool) -> Self {
        Opt {
            present: Some(indicator),
            ..self
        }
    }

    /// The option name.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// The type of the option.
    pub fn kind(&self) -> Kind {
        self.target.kind()
    }

    fn convert(&self, text: Option<&str>) -> Result<Value> {
        let kind = self.kind();

        if !kind.needs_value() {
            return Ok(Value::Flag);
        }

        let text = text.ok_or(Error::MissingOptArg(self.letter))?;

        let value = match kind {
            Kind::Integer => Value::Integer(parse_integer(text)),
            _ => Value::String(own_value(self.letter, text)?),
        };

        Ok(value)
    }

    fn store(&mut self, value: Value) {
        match (&mut self.target, value) {
            (Target::Flag(dest), Value::Flag) => **dest = true,
            (Target::Integer(dest), Value::Integer(n)) => **dest = n,
            (Target::String(dest), Value::String(s)) => **dest = Some(s),
            (target, value) => unreachable!("{:?} cannot store {:?}", target, value),
        }

        if let Some(indicator) = self.present.as_mut() {
            **indicator = true;
        }
    }
}

impl<'a> fmt::Display for Opt<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", OPT_PREFIX, self.letter)?;

        if self.kind().needs_value() {
            write!(f, " <{}>", self.kind())?;
        }

        Ok(())
    }
}

/// Convert text to an integer the way `atoi(3)` does: leading whitespace
/// and a sign are accepted, conversion stops at the first non-digit and
/// text without any digits gives zero. Out of range values saturate.
fn parse_integer(text: &str) -> i64 {
    let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\u{0b}');

    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;

    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');

        value = value.saturating_mul(10);

        // Accumulate negative values directly so that i64::MIN is reachable.
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }

    value
}

/// Copy an option value into storage owned by the caller.
fn own_value(letter: char, text: &str) -> Result<String> {
    let mut value = String::new();

    value
        .try_reserve_exact(text.len())
        .map_err(|_| Error::AllocFailure(letter))?;

    value.push_str(text);

    Ok(value)
}

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Errors
///
/// [Error::InvalidArg] if an argument is not valid UTF-8.
///
/// # Note
///
/// Used with [Registry::parse_with_args()]. However, this isn't usually
/// required: just call [Registry::parse()].
pub fn get_args() -> Result<Vec<String>> {
    utf8_args(env::args_os().skip(1))
}

/// Convert raw arguments to strings, failing on the first one that is not
/// valid UTF-8.
fn utf8_args<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| Error::InvalidArg(arg.to_string_lossy().into_owned()))
        })
        .collect()
}

/// The lifecycle stage of a [Registry].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    /// Options may be declared.
    Declaring,
    /// The command line has been parsed; [Registry::reset()] must be
    /// called before the registry can be used again.
    Parsed,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Declaring
    }
}

/// A set of option declarations, keyed by letter.
///
/// The registry borrows the variables bound by each [Opt] for its whole
/// lifetime, so drop it (or let it go out of scope) before reading them.
///
/// # Note
///
/// There is no internal locking: every operation takes `&mut self`, so a
/// registry is only ever used by one thread at a time. Create one registry
/// per set of arguments to parse.
#[derive(Debug, Default)]
pub struct Registry<'a> {
    slots: [Option<Opt<'a>>; SLOT_COUNT],
    count: usize,
    phase: Phase,
    settings: Settings,
}

impl<'a> Registry<'a> {
    /// Create a new, empty registry ready for declarations.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Specify any settings for the scanner.
    pub fn settings(self, settings: Settings) -> Self {
        Registry { settings, ..self }
    }

    /// Forget all declarations, making the registry ready for a new round.
    ///
    /// The variables bound by previous declarations are left as they are.
    /// [Settings] are kept.
    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }

        self.count = 0;
        self.phase = Phase::Declaring;

        log::debug!("registry reset");
    }

    /// Declare an option.
    ///
    /// # Errors
    ///
    /// - [Error::NotDeclaring] if the registry has been parsed since the
    ///   last reset.
    /// - [Error::InvalidOptName] if the letter is not in `'a'..='z'`.
    /// - [Error::Duplicate] if the letter has already been declared.
    pub fn add(&mut self, opt: Opt<'a>) -> Result<()> {
        if self.phase != Phase::Declaring {
            return Err(Error::NotDeclaring(opt.letter));
        }

        let index = slot::index(opt.letter)?;

        if self.slots[index].is_some() {
            return Err(Error::Duplicate(opt.letter));
        }

        log::debug!("declared option {}", opt);

        self.slots[index] = Some(opt);
        self.count += 1;

        Ok(())
    }

    /// Returns the number of declared options.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if no options have been declared.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Determine if an option with the specified letter has been declared.
    pub fn exists(&self, letter: char) -> bool {
        self.kind(letter).is_some()
    }

    /// Returns the type of the option declared for `letter`.
    pub fn kind(&self, letter: char) -> Option<Kind> {
        let index = slot::index(letter).ok()?;

        self.slots[index].as_ref().map(Opt::kind)
    }

    /// Returns the current lifecycle stage.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Build the `getopt(3)` option string for the declared options.
    ///
    /// Letters appear in alphabetical order, each followed by a `:` if the
    /// option requires a value. For example, declaring `-v` (flag), `-t`
    /// (integer) and `-i` (string) gives `"i:t:v"`.
    pub fn optstring(&self) -> String {
        let mut optstring = String::with_capacity(self.count * 2);

        for (index, opt) in self.slots.iter().enumerate() {
            let opt = match opt {
                Some(opt) => opt,
                None => continue,
            };

            optstring.push(slot::letter(index));

            if opt.kind().needs_value() {
                optstring.push(VALUE_MARKER);
            }
        }

        optstring
    }

    /// Parse a set of command line arguments (without the program name).
    ///
    /// Every option given is checked and converted before any bound
    /// variable is written: if an error is returned, no variable or
    /// presence indicator has been modified.
    ///
    /// If an option is given more than once, the last value wins.
    ///
    /// # Return value
    ///
    /// A [Cursor] giving access to the positional arguments.
    ///
    /// # Notes
    ///
    /// - The registry is consumed by the parse, even if it fails: call
    ///   [Registry::reset()] before using it again.
    /// - The `cli_args` vector must _not_ specify the command name. Use
    ///   [get_args()] as this handles this for you.
    pub fn parse_with_args(&mut self, cli_args: Vec<String>) -> Result<Cursor> {
        if self.phase != Phase::Declaring {
            return Err(Error::AlreadyParsed);
        }

        self.phase = Phase::Parsed;

        let optstring = self.optstring();

        log::debug!(
            "parsing {} arguments with optstring {:?}",
            cli_args.len(),
            optstring
        );

        let spec = OptSpec::parse(&optstring)?;

        let mut pending = Vec::<(usize, Value)>::new();

        let permutation = {
            let mut scanner = Scanner::new(spec, &cli_args, self.settings);

            for found in scanner.by_ref() {
                let Found { option, value } = found?;

                log::trace!("found option '{}' (value: {:?})", option, value);

                let index = slot::index(option)?;

                let opt = self.slots[index]
                    .as_ref()
                    .ok_or(Error::UnknownOpt(option))?;

                pending.push((index, opt.convert(value)?));
            }

            scanner.finish()
        };

        let options = pending.len();

        for (index, value) in pending {
            if let Some(opt) = self.slots[index].as_mut() {
                opt.store(value);
            }
        }

        let cursor = Cursor::new(cli_args, permutation);

        log::debug!(
            "parsed {} options, {} operands",
            options,
            cursor.operands().len()
        );

        Ok(cursor)
    }

    /// Simplest interface to the parser: parse the program's own
    /// command line.
    ///
    /// # Notes
    ///
    /// - The `POSIXLY_CORRECT` environment variable is not read
    ///   automatically: pass [Settings::from_env()] to
    ///   [Registry::settings()] to honour it.
    /// - Fails with [Error::InvalidArg] if any argument is not valid
    ///   UTF-8. The registry is left in the [Phase::Declaring] phase.
    pub fn parse(&mut self) -> Result<Cursor> {
        let args = get_args()?;

        self.parse_with_args(args)
    }
}
