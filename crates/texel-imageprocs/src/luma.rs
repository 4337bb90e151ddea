/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversion between full range gray and video range luma.
//!
//! Video range luma maps black to `16` and white to `235` (`16 + 0.859 * 255`)

/// Full range gray (`0..=255`) to video range luma
#[must_use]
pub fn gray_to_luma(gray: f32) -> f32 {
    0.859 * gray + 16.0
}

/// Video range luma back to full range gray
#[must_use]
pub fn luma_to_gray(luma: f32) -> f32 {
    (luma - 16.0) / 0.859
}

/// Compress every byte in `pixels` to video range
pub fn gray_to_luma_u8(pixels: &mut [u8]) {
    for px in pixels {
        *px = gray_to_luma(f32::from(*px)).clamp(0.0, 255.0) as u8;
    }
}

/// Expand every byte in `pixels` from video range to full range
pub fn luma_to_gray_u8(pixels: &mut [u8]) {
    for px in pixels {
        *px = luma_to_gray(f32::from(*px)).clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_within_tolerance() {
        for x in 0..=255 {
            let x = x as f32;
            let back = luma_to_gray(gray_to_luma(x));
            assert!((back - x).abs() < 1e-3, "{x} -> {back}");
        }
    }

    #[test]
    fn range_end_points() {
        assert_eq!(gray_to_luma(0.0), 16.0);
        assert!((gray_to_luma(255.0) - 235.045).abs() < 1e-3);
        assert_eq!(luma_to_gray(16.0), 0.0);
    }

    #[test]
    fn byte_variants_clamp() {
        let mut pixels = [0, 255, 0, 255];

        gray_to_luma_u8(&mut pixels[..2]);
        assert_eq!(&pixels[..2], &[16, 235]);

        // values below 16 would go negative
        luma_to_gray_u8(&mut pixels[2..]);
        assert_eq!(&pixels[2..], &[0, 255]);
    }
}
