/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use texel_core::options::IoOptions;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub root:       PathBuf,
    pub max_width:  usize,
    pub max_height: usize,
    pub probe:      bool,
    pub dump_table: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            root:       PathBuf::from("."),
            max_width:  0,
            max_height: 0,
            probe:      false,
            dump_table: false
        }
    }

    /// Options used when loading and saving textures
    pub fn io_options(&self) -> IoOptions {
        IoOptions::default()
            .set_root_path(&self.root)
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(root) = options.get_one::<String>("root") {
        cmd_options.root = PathBuf::from(root);
    }
    cmd_options.max_width = *options.get_one::<usize>("max-width").unwrap();
    cmd_options.max_height = *options.get_one::<usize>("max-height").unwrap();

    if options.value_source("probe") == Some(ValueSource::CommandLine) {
        info!("Probing input files");
        cmd_options.probe = true;
    }
    if options.value_source("dump-srgb-table") == Some(ValueSource::CommandLine) {
        cmd_options.dump_table = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    simple_logger::init_with_level(log_level).unwrap();

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
