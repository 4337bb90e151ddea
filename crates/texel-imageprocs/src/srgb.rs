/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Linear to sRGB transfer function
//!
//! Values are in the `0.0..=255.0` range on both sides, the curve is
//! the piecewise sRGB encoding with a linear toe below `0.0031308`.
use std::fmt::Write;

/// Upper bound of the linear segment, in normalized units
pub const SRGB_LINEAR_THRESHOLD: f32 = 0.003_130_8;

/// Encode a linear value in `0.0..=255.0` with the sRGB transfer function
///
/// The result is clamped to `0.0..=255.0`
#[must_use]
pub fn linear_to_srgb(value: f32) -> f32 {
    let l = value / 255.0;

    let s = if l <= SRGB_LINEAR_THRESHOLD {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    };
    (s * 255.0).clamp(0.0, 255.0)
}

/// Create a lookup table mapping every linear byte to its sRGB byte
///
/// Entries are truncated, not rounded.
#[must_use]
#[allow(clippy::needless_range_loop)]
pub fn create_srgb_table() -> [u8; 256] {
    let mut table = [0; 256];

    for i in 0..256 {
        table[i] = linear_to_srgb(i as f32) as u8;
    }
    table
}

/// Encode every byte of `pixels` to sRGB in place
///
/// Every byte is treated as a color sample, callers wanting to
/// preserve alpha should use [`linear_to_srgb_u8_strided`]
pub fn linear_to_srgb_u8(pixels: &mut [u8]) {
    let table = create_srgb_table();

    for px in pixels {
        *px = table[usize::from(*px)];
    }
}

/// Encode the first `colors` bytes of each `components` sized pixel to sRGB
///
/// Remaining bytes of a pixel, e.g alpha, are left as is.
pub fn linear_to_srgb_u8_strided(pixels: &mut [u8], components: usize, colors: usize) {
    let table = create_srgb_table();

    for pixel in pixels.chunks_exact_mut(components) {
        for px in pixel.iter_mut().take(colors) {
            *px = table[usize::from(*px)];
        }
    }
}

/// Render the table as a Rust array, eight entries per line
#[must_use]
pub fn format_srgb_table(table: &[u8; 256]) -> String {
    let mut out = String::with_capacity(2048);

    out.push_str("static SRGB_TABLE: [u8; 256] = [\n");

    for row in table.chunks_exact(8) {
        out.push_str("   ");
        for value in row {
            // writing to a string never fails
            let _ = write!(out, " {value},");
        }
        out.push('\n');
    }
    out.push_str("];\n");
    out
}
