/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pre-multiply color channels by alpha
use log::warn;
use texel_imageprocs::premul_alpha::{premultiply_u8, unpremultiply_u8};

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::OperationsTrait;

/// Carry out alpha pre-multiply and un-premultiply
///
/// Images don't track whether they were already pre-multiplied,
/// running this twice multiplies twice.
#[derive(Copy, Clone, Default)]
pub struct PremultiplyAlpha {
    reverse: bool
}

impl PremultiplyAlpha {
    /// Create an operation that pre-multiplies alpha
    pub fn new() -> PremultiplyAlpha {
        PremultiplyAlpha::default()
    }

    /// Create an operation that divides color channels by alpha
    ///
    /// Lossy, fully transparent pixels become black.
    pub fn reverse() -> PremultiplyAlpha {
        PremultiplyAlpha { reverse: true }
    }
}

impl OperationsTrait for PremultiplyAlpha {
    fn name(&self) -> &'static str {
        if self.reverse {
            "un-premultiply alpha"
        } else {
            "pre-multiply alpha"
        }
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let format = image.pixel_format();

        if !format.has_alpha() {
            warn!("Image pixel format indicates no alpha channel, this operation is a no-op");
            return Ok(());
        }
        if self.reverse {
            unpremultiply_u8(image.pixels_mut(), format);
        } else {
            premultiply_u8(image.pixels_mut(), format);
        }
        Ok(())
    }
}
