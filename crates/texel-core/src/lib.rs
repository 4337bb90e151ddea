/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all texel crates
//!
//! It currently contains
//!
//! - The pixel formats an image can be stored in, and their on-disk color types
//! - A diagnostics sink that receives human readable messages
//! - I/O options, i.e the root path that file names are resolved against
//!
//! # Features
//!  - `serde`: Enables serializing of pixel formats
#![warn(clippy::correctness, clippy::perf)]

pub mod diagnostics;
pub mod options;
pub mod pixel_format;
#[cfg(feature = "serde")]
mod serde;
