/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is represented as
//!
//! - one interleaved buffer
//!     - of 8 bit samples
//!         - laid out in a pixel format
//!             - with rows stored bottom to top
//!
//! The bottom-first row order matches texture uploads with a bottom-left
//! origin, the codec still sees files top to bottom. [`Image::read`] flips on
//! the way in and [`Image::write`] flips back on the way out.
//!
//! # Alpha
//! Images with an alpha channel are pre-multiplied once on every load.
//! Saving writes the pre-multiplied values as is and doesn't undo it,
//! so a load -> save -> load cycle pre-multiplies twice. Consumers that
//! re-save textures should be aware of this.
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::{info, Level};
use texel_core::diagnostics::Diagnostics;
use texel_core::options::{IoContext, IoOptions};
use texel_core::pixel_format::PixelFormat;
use texel_imageprocs::premul_alpha::premultiply_u8;

use crate::codecs::png;
use crate::errors::{ImageErrors, UnsupportedFormat};
use crate::view::{PixelView, PixelViewMut};

/// Maximum supported color channels
pub const MAX_CHANNELS: usize = 4;

/// Represents a single image
///
/// An image is either empty (`0x0`, no pixels) or fully populated,
/// the pixel buffer always holds exactly `width*height*components` bytes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Image {
    width:  usize,
    height: usize,
    format: PixelFormat,
    pixels: Vec<u8>
}

impl Image {
    /// Create a zero filled image
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Image {
        let size = checked_len(width, height, format).unwrap_or(0);

        if size == 0 {
            return Image::default();
        }
        Image {
            width,
            height,
            format,
            pixels: vec![0; size]
        }
    }

    /// Create a new image from raw pixels
    ///
    /// Pixels are expected to be interleaved according to the format and stored
    /// bottom row first.
    ///
    /// # Errors
    /// If the length of pixels doesn't match `width*height*components`
    pub fn from_u8(
        pixels: Vec<u8>, width: usize, height: usize, format: PixelFormat
    ) -> Result<Image, ImageErrors> {
        let expected =
            checked_len(width, height, format).ok_or(ImageErrors::LimitExceeded { width, height })?;

        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        if expected == 0 {
            return Ok(Image::default());
        }
        Ok(Image {
            width,
            height,
            format,
            pixels
        })
    }

    /// Create an image from a function
    ///
    /// The function receives the x offset and the in-memory row and returns
    /// [`MAX_CHANNELS`] values, of which only the format's components are used.
    pub fn from_fn<F>(width: usize, height: usize, format: PixelFormat, func: F) -> Image
    where
        F: Fn(usize, usize) -> [u8; MAX_CHANNELS]
    {
        let mut image = Image::new(width, height, format);
        let components = format.num_components();
        let mut view = image.view_mut();

        for (y, row) in view.rows_mut().enumerate() {
            for (x, pixel) in row.chunks_exact_mut(components).enumerate() {
                pixel.copy_from_slice(&func(x, y)[..components]);
            }
        }
        image
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// The layout of the pixels, only meaningful when the image isn't empty
    pub const fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    /// Return true if nothing has been loaded into this image
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Raw interleaved pixels, bottom row first
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable raw pixels, the length can't change
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    pub fn view(&self) -> PixelView<'_> {
        PixelView::new(&self.pixels, self.width, self.height, self.format)
    }

    pub fn view_mut(&mut self) -> PixelViewMut<'_> {
        PixelViewMut::new(&mut self.pixels, self.width, self.height, self.format)
    }

    /// Pre-multiply color channels by alpha
    ///
    /// A no-op for formats without alpha. Not idempotent, see the module docs.
    pub fn multiply_alpha(&mut self) {
        premultiply_u8(&mut self.pixels, self.format);
    }
}

// I/O
impl Image {
    /// Decode a PNG stream into a new image
    ///
    /// Rows are flipped so that the last row in the file becomes row 0,
    /// then alpha is pre-multiplied.
    pub fn read<R: Read>(reader: R, options: &IoOptions) -> Result<Image, ImageErrors> {
        let decoded = png::decode(reader, options)?;

        let (width, height, format) = (decoded.width(), decoded.height(), decoded.format());
        let mut image = Image::new(width, height, format);

        if image.is_empty() {
            return Err(ImageErrors::FormatError("image has no pixels".to_string()));
        }
        for (dst, src) in image.view_mut().rows_mut().zip(decoded.rows().rev()) {
            dst.copy_from_slice(src);
        }
        image.multiply_alpha();

        Ok(image)
    }

    /// Encode this image as PNG into `writer`
    ///
    /// Rows are written in reverse memory order, undoing the flip done by [`Image::read`].
    /// Alpha is written as stored, i.e pre-multiplied.
    pub fn write<W: Write>(&self, writer: W) -> Result<(), ImageErrors> {
        if self.is_empty() {
            return Err(ImageErrors::EncodeErrors("no image to encode".to_string()));
        }
        let rows: Vec<&[u8]> = self.view().rows().rev().collect();

        png::encode(writer, self.width, self.height, self.format, &rows)
    }

    /// Load `file`, resolved against the configured root path
    ///
    /// On failure the image is left untouched and the reason is reported
    /// through the diagnostics sink.
    pub fn load<P: AsRef<Path>>(&mut self, file: P, ctx: &IoContext) -> Result<(), ImageErrors> {
        let path = ctx.options.resolve(file);

        let result = File::open(&path)
            .map_err(ImageErrors::from)
            .and_then(|fd| Image::read(BufReader::new(fd), &ctx.options));

        match result {
            Ok(image) => {
                info!(
                    "Loaded {:?}: {}x{} {:?}",
                    path, image.width, image.height, image.format
                );
                *self = image;
                Ok(())
            }
            Err(err) => {
                report_load_error(&ctx.diagnostics, &path, &err);
                Err(err)
            }
        }
    }

    /// Save to `file`, resolved against the configured root path
    ///
    /// The image itself is never modified.
    pub fn save<P: AsRef<Path>>(&self, file: P, ctx: &IoContext) -> Result<(), ImageErrors> {
        let path = ctx.options.resolve(file);

        let result = self.save_to(&path);

        match &result {
            Ok(()) => info!("Saved {:?}", path),
            Err(ImageErrors::IoErrors(err)) => {
                ctx.diagnostics.printf(
                    Level::Error,
                    format_args!("Error: Failed to write texture {:?}: {err}\n", path)
                );
            }
            Err(err) => {
                ctx.diagnostics.printf(
                    Level::Error,
                    format_args!("Error: Failed to encode texture {:?}: {}\n", path, reason(err))
                );
            }
        }
        result
    }

    fn save_to(&self, path: &Path) -> Result<(), ImageErrors> {
        // check before touching the destination
        if self.is_empty() {
            return Err(ImageErrors::EncodeErrors("no image to encode".to_string()));
        }
        let mut writer = BufWriter::new(File::create(path)?);

        self.write(&mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

fn report_load_error(diagnostics: &Diagnostics, path: &Path, err: &ImageErrors) {
    match err {
        ImageErrors::IoErrors(reason) => diagnostics.printf(
            Level::Error,
            format_args!("Error: Failed to load texture {path:?}: {reason}\n")
        ),
        ImageErrors::FormatError(reason) => diagnostics.printf(
            Level::Error,
            format_args!("Error: Texture {path:?} is not a valid PNG file ({reason})\n")
        ),
        ImageErrors::UnsupportedFormat(UnsupportedFormat::BitDepth(depth)) => diagnostics.printf(
            Level::Error,
            format_args!("Error: bad bit depth {depth} for texture {path:?}\n")
        ),
        ImageErrors::UnsupportedFormat(UnsupportedFormat::ColorType(tag)) => diagnostics.printf(
            Level::Error,
            format_args!("Error: unsupported pixel format {tag} for texture {path:?}\n")
        ),
        err => diagnostics.printf(
            Level::Error,
            format_args!("Error: Failed to load texture {path:?}: {}\n", reason(err))
        )
    };
}

/// Error text without the trailing newline `Display` adds
fn reason(err: &ImageErrors) -> String {
    err.to_string().trim_end().to_string()
}

fn checked_len(width: usize, height: usize, format: PixelFormat) -> Option<usize> {
    width
        .checked_mul(height)?
        .checked_mul(format.num_components())
}
