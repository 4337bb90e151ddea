/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An image library for loading, saving and manipulating 8 bit PNG textures
//!
//! Images are kept as a single interleaved buffer with the bottom row first,
//! which is what texture uploads with a bottom-left origin expect.
//! Images with alpha are pre-multiplied on load.
//!
//! # Example
//! ```no_run
//! use texel_core::options::IoContext;
//! use texel_image::image::Image;
//! use texel_image::filters::srgb::LinearToSrgb;
//! use texel_image::traits::OperationsTrait;
//!
//! let ctx = IoContext::default();
//! let mut image = Image::default();
//! image.load("texture/input.png", &ctx)?;
//! LinearToSrgb::new().execute(&mut image)?;
//! image.save("texture/output.png", &ctx)?;
//! # Ok::<(), texel_image::errors::ImageErrors>(())
//! ```
pub mod codecs;
pub mod errors;
pub mod filters;
pub mod image;
pub mod traits;
pub mod view;
pub mod workflow;
