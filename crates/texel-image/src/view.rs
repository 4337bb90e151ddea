/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Typed, bounds checked access to interleaved pixel buffers
//!
//! A view addresses bytes by `(x, y, channel)` where `y` is the in-memory
//! row index, so for an [`Image`](crate::image::Image) row `0` is the bottom of the picture.
use std::slice::{ChunksExact, ChunksExactMut};

use texel_core::pixel_format::PixelFormat;

/// A read only view into pixels
#[derive(Copy, Clone, Debug)]
pub struct PixelView<'a> {
    pixels:     &'a [u8],
    width:      usize,
    height:     usize,
    components: usize
}

/// A mutable view into pixels
#[derive(Debug)]
pub struct PixelViewMut<'a> {
    pixels:     &'a mut [u8],
    width:      usize,
    height:     usize,
    components: usize
}

/// Offset of a byte, or `None` when out of bounds
const fn offset(
    x: usize, y: usize, channel: usize, width: usize, height: usize, components: usize
) -> Option<usize> {
    if x >= width || y >= height || channel >= components {
        return None;
    }
    Some((y * width + x) * components + channel)
}

impl<'a> PixelView<'a> {
    /// Create a view, `pixels` must hold exactly `width*height` pixels in `format`
    ///
    /// # Panics
    /// If the buffer length doesn't match
    pub fn new(pixels: &'a [u8], width: usize, height: usize, format: PixelFormat) -> Self {
        let components = format.num_components();
        assert_eq!(pixels.len(), width * height * components);

        PixelView {
            pixels,
            width,
            height,
            components
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Bytes in a single row
    pub const fn row_bytes(&self) -> usize {
        self.width * self.components
    }

    /// Iterate over rows in memory order
    pub fn rows(&self) -> ChunksExact<'a, u8> {
        // a zero sized chunk panics, an empty buffer yields no rows anyway
        self.pixels.chunks_exact(self.row_bytes().max(1))
    }

    /// Iterate over single pixels in memory order
    pub fn pixels(&self) -> ChunksExact<'a, u8> {
        self.pixels.chunks_exact(self.components)
    }

    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.row_bytes();
        self.pixels.get(start..start + self.row_bytes())
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<&'a [u8]> {
        let start = offset(x, y, 0, self.width, self.height, self.components)?;
        self.pixels.get(start..start + self.components)
    }

    pub fn get(&self, x: usize, y: usize, channel: usize) -> Option<u8> {
        let index = offset(x, y, channel, self.width, self.height, self.components)?;
        self.pixels.get(index).copied()
    }
}

impl<'a> PixelViewMut<'a> {
    /// Create a mutable view, `pixels` must hold exactly `width*height` pixels in `format`
    ///
    /// # Panics
    /// If the buffer length doesn't match
    pub fn new(pixels: &'a mut [u8], width: usize, height: usize, format: PixelFormat) -> Self {
        let components = format.num_components();
        assert_eq!(pixels.len(), width * height * components);

        PixelViewMut {
            pixels,
            width,
            height,
            components
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn row_bytes(&self) -> usize {
        self.width * self.components
    }

    /// Reborrow as a read only view
    pub fn as_view(&self) -> PixelView<'_> {
        PixelView {
            pixels:     &*self.pixels,
            width:      self.width,
            height:     self.height,
            components: self.components
        }
    }

    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, u8> {
        let row_bytes = self.row_bytes().max(1);
        self.pixels.chunks_exact_mut(row_bytes)
    }

    pub fn pixels_mut(&mut self) -> ChunksExactMut<'_, u8> {
        self.pixels.chunks_exact_mut(self.components)
    }

    pub fn row_mut(&mut self, y: usize) -> Option<&mut [u8]> {
        if y >= self.height {
            return None;
        }
        let row_bytes = self.row_bytes();
        let start = y * row_bytes;
        self.pixels.get_mut(start..start + row_bytes)
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut [u8]> {
        let start = offset(x, y, 0, self.width, self.height, self.components)?;
        self.pixels.get_mut(start..start + self.components)
    }

    pub fn get_mut(&mut self, x: usize, y: usize, channel: usize) -> Option<&mut u8> {
        let index = offset(x, y, channel, self.width, self.height, self.components)?;
        self.pixels.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use texel_core::pixel_format::PixelFormat;

    use super::{PixelView, PixelViewMut};

    #[test]
    fn strided_access() {
        // 2x2 RGB, value encodes (x, y, channel)
        let pixels: Vec<u8> = (0..2_u8)
            .flat_map(|y| (0..2_u8).flat_map(move |x| (0..3_u8).map(move |c| y * 100 + x * 10 + c)))
            .collect();
        let view = PixelView::new(&pixels, 2, 2, PixelFormat::RGB);

        assert_eq!(view.get(1, 1, 2), Some(112));
        assert_eq!(view.get(0, 1, 0), Some(100));
        assert_eq!(view.pixel(1, 0), Some(&[10, 11, 12][..]));
        assert_eq!(view.row(1), Some(&[100, 101, 102, 110, 111, 112][..]));
        assert_eq!(view.rows().count(), 2);
        assert_eq!(view.pixels().count(), 4);
    }

    #[test]
    fn out_of_bounds_is_none() {
        let pixels = [0_u8; 2 * 3 * 2];
        let view = PixelView::new(&pixels, 3, 2, PixelFormat::GrayAlpha);

        assert_eq!(view.get(3, 0, 0), None);
        assert_eq!(view.get(0, 2, 0), None);
        assert_eq!(view.get(0, 0, 2), None);
        assert_eq!(view.row(2), None);
        assert_eq!(view.pixel(0, 2), None);
    }

    #[test]
    fn empty_view_has_no_rows() {
        let view = PixelView::new(&[], 0, 0, PixelFormat::RGBA);

        assert_eq!(view.rows().count(), 0);
        assert_eq!(view.pixels().count(), 0);
        assert_eq!(view.get(0, 0, 0), None);
    }

    #[test]
    fn mutable_access() {
        let mut pixels = [0_u8; 4 * 2];
        let mut view = PixelViewMut::new(&mut pixels, 2, 1, PixelFormat::RGBA);

        *view.get_mut(1, 0, 3).unwrap() = 9;
        view.pixel_mut(0, 0).unwrap().copy_from_slice(&[1, 2, 3, 4]);
        assert!(view.get_mut(2, 0, 0).is_none());
        assert_eq!(view.as_view().get(1, 0, 3), Some(9));

        for px in view.pixels_mut() {
            px[0] = 7;
        }
        view.row_mut(0).unwrap()[1] = 8;

        assert_eq!(pixels, [7, 8, 3, 4, 7, 0, 0, 9]);
    }
}
