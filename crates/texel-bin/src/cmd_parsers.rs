/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;

pub mod global_options;
pub mod operations;

/// Flags that were given on the command line, in the order
/// they were specified
pub fn fill_args(options: &ArgMatches, flags: &[&'static str]) -> Vec<&'static str> {
    let mut positions = Vec::with_capacity(flags.len());

    for flag in flags {
        if !options.get_flag(flag) {
            continue;
        }
        if let Some(index) = options.index_of(flag) {
            positions.push((index, *flag));
        }
    }
    positions.sort_unstable_by_key(|(index, _)| *index);
    positions.into_iter().map(|(_, flag)| flag).collect()
}
