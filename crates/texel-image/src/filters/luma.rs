/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Compress or expand gray levels to and from video range
use texel_imageprocs::luma::{gray_to_luma_u8, luma_to_gray_u8};

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::OperationsTrait;

/// Map full range values to video range luma, or back with [`GrayToLuma::reverse`]
///
/// Applies to every byte of the image.
#[derive(Copy, Clone, Default)]
pub struct GrayToLuma {
    reverse: bool
}

impl GrayToLuma {
    pub fn new() -> GrayToLuma {
        GrayToLuma::default()
    }

    pub fn reverse() -> GrayToLuma {
        GrayToLuma { reverse: true }
    }
}

impl OperationsTrait for GrayToLuma {
    fn name(&self) -> &'static str {
        if self.reverse {
            "luma to gray"
        } else {
            "gray to luma"
        }
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if self.reverse {
            luma_to_gray_u8(image.pixels_mut());
        } else {
            gray_to_luma_u8(image.pixels_mut());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use texel_core::pixel_format::PixelFormat;

    use super::GrayToLuma;
    use crate::image::Image;
    use crate::traits::OperationsTrait;

    #[test]
    fn full_range_to_video_range() {
        let mut image = Image::from_u8(vec![0, 255], 2, 1, PixelFormat::Gray).unwrap();

        GrayToLuma::new().execute(&mut image).unwrap();

        assert_eq!(image.pixels(), &[16, 235]);
    }

    #[test]
    fn round_trip_within_two() {
        let mut image = Image::from_u8((0..=255).collect(), 16, 16, PixelFormat::Gray).unwrap();

        GrayToLuma::new().execute(&mut image).unwrap();
        GrayToLuma::reverse().execute(&mut image).unwrap();

        for (i, v) in image.pixels().iter().enumerate() {
            assert!((i as i32 - i32::from(*v)).abs() <= 2, "{i} -> {v}");
        }
    }
}
