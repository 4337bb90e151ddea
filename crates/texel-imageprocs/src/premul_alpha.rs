/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Alpha pre-multiplication routines
//!
//! # Algorithm
//! Color and alpha are normalized to `0.0..=1.0`, multiplied, scaled back by `255`
//! and truncated, i.e `color' = trunc(color/255 * alpha/255 * 255)`.
//!
//! Truncation means the operation is lossy and not idempotent, applying it twice
//! darkens any pixel whose alpha is not `0` or `255` a second time.
use texel_core::pixel_format::PixelFormat;

/// Pre-multiply the color channels of every pixel with that pixel's alpha
///
/// # Arguments
///
/// * `pixels`: Interleaved pixels in `format`, modified in place
/// * `format`: Layout of `pixels`, formats without alpha are left untouched
pub fn premultiply_u8(pixels: &mut [u8], format: PixelFormat) {
    let Some(alpha_position) = format.alpha_position() else {
        return;
    };

    for pixel in pixels.chunks_exact_mut(format.num_components()) {
        let (colors, alpha) = pixel.split_at_mut(alpha_position);
        let alpha = f32::from(alpha[0]) / 255.0;

        for color in colors {
            let normalized = f32::from(*color) / 255.0;
            *color = ((normalized * alpha) * 255.0) as u8;
        }
    }
}

/// Remove effects of pre-multiplied alpha
///
/// This is not an exact inverse of [`premultiply_u8`], information lost to
/// truncation can't be recovered.
///
/// # Behaviour
/// - When alpha is zero, color becomes zero
/// - Results are clamped to `255`
pub fn unpremultiply_u8(pixels: &mut [u8], format: PixelFormat) {
    let Some(alpha_position) = format.alpha_position() else {
        return;
    };

    for pixel in pixels.chunks_exact_mut(format.num_components()) {
        let (colors, alpha) = pixel.split_at_mut(alpha_position);
        let alpha = alpha[0];

        for color in colors {
            if alpha == 0 {
                *color = 0;
            } else {
                let value = (f32::from(*color) * 255.0 / f32::from(alpha)).round();
                *color = value.min(255.0) as u8;
            }
        }
    }
}
