// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Incorrect API usage errors (programmer error)
    //------------------------------
    /// An option was declared after the registry had been parsed.
    ///
    /// Call `Registry::reset()` before declaring a new round of options.
    #[error("cannot declare option '-{0}': registry already parsed (reset it first)")]
    NotDeclaring(char),

    /// The registry was parsed a second time without an intervening reset.
    #[error("registry already parsed (reset it first)")]
    AlreadyParsed,

    /// Option names must be a lowercase ASCII letter.
    #[error("invalid option name {0:?}: only 'a' to 'z' are supported")]
    InvalidOptName(char),

    /// The same letter was declared twice in one round.
    #[error("duplicate declaration -- '{0}'")]
    Duplicate(char),

    //------------------------------
    // Runtime errors (user error)
    //------------------------------
    /// User specified an option that was never declared.
    #[error("invalid option -- '{0}'")]
    UnknownOpt(char),

    /// Option argument was not specified.
    #[error("option requires an argument -- '{0}'")]
    MissingOptArg(char),

    /// A command-line argument is not valid UTF-8 (shown lossily).
    #[error("invalid argument {0:?}: not valid UTF-8")]
    InvalidArg(String),

    //------------------------------
    // Limitations
    //------------------------------
    /// Option names can only be a single character long
    /// (`-v` rather than, say, `--verbose`).
    #[error("long options not supported: {0:?}")]
    NoLongOpts(String),

    //------------------------------
    // Resource errors
    //------------------------------
    /// Storage for a string option value could not be reserved.
    #[error("cannot allocate value for option '-{0}'")]
    AllocFailure(char),
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
