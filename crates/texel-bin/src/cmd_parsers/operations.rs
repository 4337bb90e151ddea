/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::debug;
use texel_image::filters::luma::GrayToLuma;
use texel_image::filters::srgb::LinearToSrgb;
use texel_image::filters::yuv::RgbToYuv;
use texel_image::traits::OperationsTrait;

use crate::cmd_parsers::fill_args;

/// Flags that map to an image operation
pub const OPERATIONS: [&str; 3] = ["srgb", "yuv", "luma"];

/// Build operations in the order their flags were given
pub fn parse_operations(options: &ArgMatches) -> Vec<Box<dyn OperationsTrait>> {
    let mut operations: Vec<Box<dyn OperationsTrait>> = vec![];

    for flag in fill_args(options, &OPERATIONS) {
        let operation: Box<dyn OperationsTrait> = match flag {
            "srgb" => {
                let ignore_alpha = options.get_flag("ignore-alpha");
                Box::new(LinearToSrgb::new().set_ignore_alpha(ignore_alpha))
            }
            "yuv" => Box::new(RgbToYuv::new()),
            "luma" => Box::new(GrayToLuma::new()),
            _ => continue
        };
        debug!("Added operation {}", operation.name());
        operations.push(operation);
    }
    operations
}
