/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("texel")
        .about("Load, convert and save 8 bit PNG textures")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input texture to read, relative to --root")
            .required_unless_present("dump-srgb-table"))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output file to write the processed texture to, relative to --root"))
        .arg(Arg::new("root")
            .long("root")
            .help("Directory input and output paths are resolved against")
            .default_value("."))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of textures accepted")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of textures accepted")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the processing steps"))
        .arg(Arg::new("srgb")
            .long("srgb")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Encode the texture with the sRGB transfer curve")
            .long_help("Encode every byte of the texture with the sRGB transfer curve.\nAlpha is encoded too unless --ignore-alpha is given."))
        .arg(Arg::new("ignore-alpha")
            .long("ignore-alpha")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .requires("srgb")
            .help("Keep alpha linear when encoding to sRGB"))
        .arg(Arg::new("yuv")
            .long("yuv")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Convert RGB samples to video range BT.709 YUV"))
        .arg(Arg::new("luma")
            .long("luma")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Compress full range values to video range luma"))
        .arg(Arg::new("dump-srgb-table")
            .long("dump-srgb-table")
            .action(ArgAction::SetTrue)
            .help_heading("MISC")
            .help("Print the linear to sRGB lookup table"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help_heading("MISC")
            .help("Print texture metadata as JSON"))
}
