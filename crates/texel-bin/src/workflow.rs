/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use texel_core::diagnostics::{AnsiColor, Diagnostics};
use texel_core::options::IoContext;
use texel_image::errors::ImageErrors;
use texel_image::workflow::WorkFlow;
use texel_imageprocs::srgb::{create_srgb_table, format_srgb_table};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::operations::parse_operations;
use crate::console::StdoutConsole;
use crate::probe_files::probe_input_file;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ImageErrors> {
    let diagnostics = Diagnostics::with_console(StdoutConsole);

    if cmd_opts.dump_table {
        let table = format_srgb_table(&create_srgb_table());
        diagnostics.printf_ansi(AnsiColor::Cyan, Level::Info, format_args!("{table}"));
    }

    // -i may only be left out when dumping the table
    let Some(in_file) = args.get_one::<String>("in") else {
        return Ok(());
    };

    if cmd_opts.probe {
        return probe_input_file(in_file, cmd_opts);
    }
    info!("Creating workflow from input");

    let context = IoContext::new(cmd_opts.io_options(), diagnostics);
    let mut workflow = WorkFlow::new(context);

    workflow.add_input(in_file);

    for operation in parse_operations(args) {
        workflow.add_operation(operation);
    }
    if let Some(out_file) = args.get_one::<String>("out") {
        workflow.add_output(out_file);
    }
    workflow.advance_to_end()?;

    let (width, height) = workflow.image().dimensions();
    info!("Processed {in_file}: {width}x{height}");

    Ok(())
}
