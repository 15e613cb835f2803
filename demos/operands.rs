// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to find the positional arguments (operands)
/// that follow the options, and how to reuse a registry.
use optreg::{Opt, Registry, Result, Settings};

fn main() -> Result<()> {
    env_logger::init();

    let mut debug = false;
    let mut count = 0;
    let mut name = None;

    let mut registry = Registry::new().settings(Settings::from_env());

    registry.add(Opt::flag('d', &mut debug))?;
    registry.add(Opt::integer('n', &mut count))?;

    let cursor = registry.parse()?;

    println!("INFO: optind: {}", cursor.optind());

    for (i, operand) in cursor.operands().iter().enumerate() {
        println!("INFO: operand {}: {:?}", i, operand);
    }

    // A second round: the operands are parsed for a "-s <name>" option.
    registry.reset();
    registry.add(Opt::string('s', &mut name))?;

    let result = registry.parse_with_args(cursor.into_operands());

    drop(registry);

    println!("INFO: debug: {}, count: {}", debug, count);

    match result {
        Ok(cursor) => println!("INFO: name: {:?}, rest: {:?}", name, cursor.operands()),
        Err(e) => println!("INFO: second round failed: {}", e),
    }

    Ok(())
}
