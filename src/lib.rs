// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Declare single-letter command-line options, bind each one to one of your
//! variables and parse the command line `getopt(3)`-style.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Details](#details)
//! * [Errors](#errors)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! Rather than building a hash of results to query, or calling a handler
//! for each option, this crate writes each option's value straight into a
//! variable you own. An option is one of three [Kind]s:
//!
//! - A flag (`-v`), bound to a `bool`.
//! - An integer option (`-t 5`), bound to an `i64`.
//! - A string option (`-i data.txt`), bound to an `Option<String>`.
//!
//! Any option can also be bound to a "presence indicator": a `bool` that
//! is set if the option appeared on the command line. This distinguishes
//! "not given" from "given with a value equal to the default".
//!
//! # Quickstart
//!
//! 1. Create the variables that will hold the option values.
//!
//!    ```rust
//!    let mut verbose = false;
//!    let mut ttl: i64 = 0;
//!    let mut input: Option<String> = None;
//!    let mut has_ttl = false;
//!    ```
//!
//! 1. Create a [Registry] and declare an [Opt] for each option.
//!
//!    ```rust
//!    # use optreg::{Opt, Registry};
//!    #
//!    # fn main() -> optreg::Result<()> {
//!    # let mut verbose = false;
//!    # let mut ttl: i64 = 0;
//!    # let mut input: Option<String> = None;
//!    # let mut has_ttl = false;
//!    #
//!    let mut registry = Registry::new();
//!
//!    registry.add(Opt::flag('v', &mut verbose))?;
//!    registry.add(Opt::integer('t', &mut ttl).present(&mut has_ttl))?;
//!    registry.add(Opt::string('i', &mut input))?;
//!    # Ok(())
//!    # }
//!    ```
//!
//! 1. Parse the command line, then drop the registry so that the variables
//!    can be read.
//!
//!    ```rust
//!    # use optreg::{Opt, Registry};
//!    #
//!    # fn main() -> optreg::Result<()> {
//!    # let mut verbose = false;
//!    # let mut ttl: i64 = 0;
//!    # let mut input: Option<String> = None;
//!    # let mut has_ttl = false;
//!    #
//!    # let mut registry = Registry::new();
//!    #
//!    # registry.add(Opt::flag('v', &mut verbose))?;
//!    # registry.add(Opt::integer('t', &mut ttl).present(&mut has_ttl))?;
//!    # registry.add(Opt::string('i', &mut input))?;
//!    #
//!    let args = vec!["-v", "-t", "5", "-i", "data.txt", "extra"];
//!    let args = args.into_iter().map(String::from).collect();
//!
//!    // Or call `registry.parse()` to parse the program's own arguments.
//!    let cursor = registry.parse_with_args(args)?;
//!
//!    drop(registry);
//!
//!    assert!(verbose);
//!    assert_eq!(ttl, 5);
//!    assert!(has_ttl);
//!    assert_eq!(input.as_deref(), Some("data.txt"));
//!    assert_eq!(cursor.operands(), &["extra".to_string()]);
//!    # Ok(())
//!    # }
//!    ```
//!
//! To parse another set of arguments with the same registry, call
//! [Registry::reset()] and declare the options again. For a runnable
//! version, see `demos/simple.rs`:
//!
//! ```bash
//! $ cargo run --example simple -- -v -t 5 -i data.txt
//! $ RUST_LOG=debug cargo run --example operands -- one -v two -- -t three
//! ```
//!
//! # Details
//!
//! Arguments are handled as `getopt(3)` handles them, given an option
//! string built from the declarations (see [Registry::optstring()]):
//!
//! - Flags may be grouped: `-vq` is the same as `-v -q`.
//! - A value may be attached (`-t5`) or be the next argument (`-t 5`).
//!   A separate value is taken verbatim even if it starts with a dash,
//!   so `-t -7` sets `-7`. See [Settings::no_strict_options()] to
//!   change this.
//! - Integer values are converted like `atoi(3)`: the longest leading
//!   numeric prefix is used and text with no digits converts to zero.
//! - If an option is given more than once, the last value wins.
//! - A lone `-` is a positional argument ("operand").
//! - `--` ends option processing: everything after it is an operand.
//! - By default, options and operands may be intermingled; the operands
//!   are available from the returned [Cursor]. To stop at the first
//!   operand instead, use [Settings::posixly_correct()] or
//!   [Settings::from_env()] with `POSIXLY_CORRECT` set.
//!
//! # Errors
//!
//! Nothing terminates the process: every failure is an [Error] value.
//!
//! - Declaring a letter outside `a` to `z`, declaring a letter twice, or
//!   declaring after parsing (without a [Registry::reset()]) fails the
//!   [Registry::add()] call.
//! - An unknown option or a missing value fails the parse. The whole
//!   command line is checked before anything is written, so after a
//!   failed parse none of the bound variables have been modified.
//!
//! # Limitations
//!
//! - Only lowercase ASCII letters can be option names.
//! - Long options are not supported
//!
//!   **Example:** `-v` is valid, but `--verbose` is invalid.
//!
//! - Options with optional arguments are not supported.
//! - No help or usage text is generated.

mod error;
mod registry;
mod scanner;
mod settings;
mod slot;

pub use error::{Error, Result};

pub use registry::{get_args, Kind, Opt, Phase, Registry, Target};
pub use scanner::Cursor;
pub use settings::{Settings, POSIXLY_CORRECT_ENV};
pub use slot::SLOT_COUNT;
