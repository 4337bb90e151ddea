/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Linear RGB to video range YUV conversion with BT.709 coefficients
//!
//! Y lands in `16..=235` and U,V in `16..=240` for inputs in `0..=255`.
//! Output replaces the R, G and B bytes of a pixel with Y, U and V in that order.
use texel_core::pixel_format::PixelFormat;

/// Convert a single pixel
#[must_use]
pub fn rgb_to_yuv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));

    let y = 16.0 + 0.062_007_1 * b + 0.614_231 * g + 0.182_586 * r;
    let u = 128.0 + 0.439_216 * b - 0.338_572 * g - 0.100_644 * r;
    let v = 128.0 - 0.040_273_5 * b - 0.398_942 * g + 0.439_216 * r;

    [to_u8(y), to_u8(u), to_u8(v)]
}

#[inline]
fn to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Convert every pixel of an RGB or RGBA buffer in place
///
/// Alpha is left untouched, grayscale formats are not converted.
pub fn rgb_to_yuv_u8(pixels: &mut [u8], format: PixelFormat) {
    if format.is_grayscale() {
        return;
    }

    for pixel in pixels.chunks_exact_mut(format.num_components()) {
        let [y, u, v] = rgb_to_yuv(pixel[0], pixel[1], pixel[2]);

        pixel[0] = y;
        pixel[1] = u;
        pixel[2] = v;
    }
}

#[cfg(test)]
mod tests {
    use texel_core::pixel_format::PixelFormat;

    use super::{rgb_to_yuv, rgb_to_yuv_u8};

    fn close(a: u8, b: u8) -> bool {
        (i32::from(a) - i32::from(b)).abs() <= 2
    }

    #[test]
    fn white_and_black() {
        let [y, u, v] = rgb_to_yuv(255, 255, 255);
        assert!(close(y, 235) && close(u, 128) && close(v, 128), "{y} {u} {v}");

        let [y, u, v] = rgb_to_yuv(0, 0, 0);
        assert_eq!([y, u, v], [16, 128, 128]);
    }

    #[test]
    fn primaries_stay_in_video_range() {
        for rgb in [(255, 0, 0), (0, 255, 0), (0, 0, 255)] {
            let yuv = rgb_to_yuv(rgb.0, rgb.1, rgb.2);
            assert!(yuv.iter().all(|c| (16..=240).contains(c)), "{rgb:?} -> {yuv:?}");
        }
    }

    #[test]
    fn rgba_keeps_alpha() {
        let mut pixels = [255, 255, 255, 9, 0, 0, 0, 200];
        rgb_to_yuv_u8(&mut pixels, PixelFormat::RGBA);

        assert_eq!(pixels[3], 9);
        assert_eq!(pixels[7], 200);
        assert_eq!(&pixels[4..7], &[16, 128, 128]);
    }

    #[test]
    fn grayscale_untouched() {
        let mut pixels = [1, 2, 3, 4];
        rgb_to_yuv_u8(&mut pixels, PixelFormat::GrayAlpha);
        assert_eq!(pixels, [1, 2, 3, 4]);
    }
}
