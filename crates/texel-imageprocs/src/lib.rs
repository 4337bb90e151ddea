/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel processing routines for `texel-image`
//!
//! Routines here work on interleaved 8 bit buffers and never fail,
//! any buffer whose length is a multiple of the pixel size is valid input.
//! Trailing bytes that do not make up a whole pixel are left untouched.
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::panic
)]
#![allow(
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

pub mod luma;
pub mod premul_alpha;
pub mod srgb;
pub mod yuv;
