/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encode linear images with the sRGB transfer function
use texel_imageprocs::srgb::{linear_to_srgb_u8, linear_to_srgb_u8_strided};

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::OperationsTrait;

/// Apply the sRGB transfer curve to an image
///
/// By default every byte, alpha included, goes through the curve.
/// Use [`LinearToSrgb::set_ignore_alpha`] to keep alpha linear.
#[derive(Copy, Clone, Default)]
pub struct LinearToSrgb {
    ignore_alpha: bool
}

impl LinearToSrgb {
    pub fn new() -> LinearToSrgb {
        LinearToSrgb::default()
    }

    /// Leave the alpha channel untouched
    #[must_use]
    pub const fn set_ignore_alpha(mut self, yes: bool) -> Self {
        self.ignore_alpha = yes;
        self
    }

    pub const fn get_ignore_alpha(&self) -> bool {
        self.ignore_alpha
    }
}

impl OperationsTrait for LinearToSrgb {
    fn name(&self) -> &'static str {
        "linear to sRGB"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let format = image.pixel_format();

        if self.ignore_alpha && format.has_alpha() {
            let components = format.num_components();
            linear_to_srgb_u8_strided(image.pixels_mut(), components, components - 1);
        } else {
            linear_to_srgb_u8(image.pixels_mut());
        }
        Ok(())
    }
}
