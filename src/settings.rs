// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;

/// Environment variable which, when set, selects POSIX ordering
/// (see [Settings::from_env()]).
pub const POSIXLY_CORRECT_ENV: &str = "POSIXLY_CORRECT";

/// Settings used to control the scanners behaviour.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, Default, PartialEq)]
pub struct Settings {
    /// If set, stop scanning at the first positional argument (operand)
    /// rather than permuting operands to the end of the argument vector.
    pub(crate) posixly_correct: bool,

    /// Don't automatically consume the argument immediately _after_
    /// a value-taking option if it starts with a dash.
    pub(crate) no_strict_options: bool,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Create settings from the environment.
    ///
    /// Like GNU `getopt(3)`, POSIX ordering is enabled if the
    /// `POSIXLY_CORRECT` environment variable is set (to any value).
    pub fn from_env() -> Self {
        let settings = Settings::new();

        if env::var_os(POSIXLY_CORRECT_ENV).is_some() {
            log::debug!("{} set: using POSIX ordering", POSIXLY_CORRECT_ENV);
            settings.posixly_correct()
        } else {
            settings
        }
    }

    /// Stop option scanning at the first positional argument.
    ///
    /// By default, options and positional arguments may be intermingled:
    /// positional arguments are moved to the end of the argument vector
    /// returned in the [Cursor](crate::Cursor) and scanning continues.
    ///
    /// # Example
    ///
    /// With flags `-a` and `-b` declared, the command line
    /// `-a foo -b` is handled as follows:
    ///
    /// - By default, both `-a` and `-b` are parsed and the only
    ///   operand is `foo`.
    /// - With this setting, only `-a` is parsed and the operands are
    ///   `foo` and `-b`.
    pub fn posixly_correct(self) -> Self {
        Settings {
            posixly_correct: true,
            ..self
        }
    }

    /// By default, an option which requires a value consumes the next
    /// argument as its value whether it starts with a dash or not
    /// (so `-t -7` gives `-t` the value `-7`), as `getopt(3)` does.
    ///
    /// When this setting is enabled, a separate value cannot start with a
    /// dash: `-t -7` fails with [Error::MissingOptArg](crate::Error::MissingOptArg).
    /// Attached values (`-t-7`) are unaffected.
    pub fn no_strict_options(self) -> Self {
        Settings {
            no_strict_options: true,
            ..self
        }
    }
}
