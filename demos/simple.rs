// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example declaring a flag, an integer option and a string option.
use optreg::{Opt, Registry, Result, Settings};

fn main() -> Result<()> {
    env_logger::init();

    let mut verbose = false;
    let mut time_to_live = 0;
    let mut input_filename = None;

    let mut has_time_to_live = false;
    let mut has_input_filename = false;

    let mut registry = Registry::new().settings(Settings::from_env());

    // Support "-v" flag option.
    registry.add(Opt::flag('v', &mut verbose))?;

    // Support "-t <value>" option.
    registry.add(Opt::integer('t', &mut time_to_live).present(&mut has_time_to_live))?;

    // Support "-i <value>" option.
    registry.add(Opt::string('i', &mut input_filename).present(&mut has_input_filename))?;

    // Parse the command-line
    let result = registry.parse();

    // XXX: essential!
    drop(registry);

    if let Err(e) = result {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }

    println!("Verbose: {}", verbose);

    if has_time_to_live {
        println!("Time To Live: {}", time_to_live);
    }

    if let Some(name) = input_filename {
        println!("Input Filename: {}", name);
    }

    Ok(())
}
