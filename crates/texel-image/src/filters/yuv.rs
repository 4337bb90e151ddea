/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert RGB images to video range YUV
use log::warn;
use texel_imageprocs::yuv::rgb_to_yuv_u8;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::OperationsTrait;

/// Replace R, G and B with BT.709 Y, U and V
///
/// The pixel format is kept, an RGB image holds YUV samples afterwards.
#[derive(Copy, Clone, Default)]
pub struct RgbToYuv;

impl RgbToYuv {
    pub fn new() -> RgbToYuv {
        Self::default()
    }
}

impl OperationsTrait for RgbToYuv {
    fn name(&self) -> &'static str {
        "RGB to YUV"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let format = image.pixel_format();

        if format.is_grayscale() {
            warn!("{format:?} image has no chroma, skipping YUV conversion");
            return Ok(());
        }
        rgb_to_yuv_u8(image.pixels_mut(), format);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use texel_core::pixel_format::PixelFormat;

    use super::RgbToYuv;
    use crate::image::Image;
    use crate::traits::OperationsTrait;

    #[test]
    fn black_pixel() {
        let mut image = Image::from_u8(vec![0, 0, 0, 77], 1, 1, PixelFormat::RGBA).unwrap();

        RgbToYuv::new().execute(&mut image).unwrap();

        assert_eq!(image.pixels(), &[16, 128, 128, 77]);
    }

    #[test]
    fn gray_untouched() {
        let mut image = Image::from_u8(vec![0, 255], 2, 1, PixelFormat::Gray).unwrap();

        RgbToYuv::new().execute(&mut image).unwrap();

        assert_eq!(image.pixels(), &[0, 255]);
    }
}
