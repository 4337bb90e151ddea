/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use texel_core::diagnostics::Diagnostics;
use texel_core::options::{IoContext, IoOptions};
use texel_core::pixel_format::PixelFormat;
use texel_image::errors::ImageErrors;
use texel_image::filters::luma::GrayToLuma;
use texel_image::filters::yuv::RgbToYuv;
use texel_image::image::Image;
use texel_image::workflow::WorkFlow;

fn context(name: &str) -> IoContext {
    let root = std::env::temp_dir().join(format!("texel-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&root).unwrap();

    IoContext::new(
        IoOptions::default().set_root_path(root),
        Diagnostics::default()
    )
}

#[test]
fn operations_run_in_order() {
    let ctx = context("workflow-order");
    let source = Image::from_u8(vec![0, 0, 0, 255, 255, 255], 2, 1, PixelFormat::RGB).unwrap();
    source.save("in.png", &ctx).unwrap();

    let mut workflow = WorkFlow::new(ctx);
    workflow.add_input("in.png");
    workflow.add_operation(Box::new(RgbToYuv::new()));
    workflow.add_operation(Box::new(GrayToLuma::new()));
    workflow.add_output("out.png");
    workflow.advance_to_end().unwrap();

    // black becomes (16, 128, 128), then every byte is compressed to video range
    assert_eq!(&workflow.image().pixels()[..3], &[29, 125, 125]);
}

#[test]
fn load_failure_stops_workflow() {
    let mut workflow = WorkFlow::new(context("workflow-missing"));
    workflow.add_input("missing.png");
    workflow.add_output("never.png");

    assert!(matches!(
        workflow.advance_to_end(),
        Err(ImageErrors::IoErrors(_))
    ));
    assert!(workflow.into_image().is_empty());
}
