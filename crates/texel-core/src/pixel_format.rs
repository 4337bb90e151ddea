/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel formats understood by the library and their on-disk representation.
//!
//! Only 8 bit per channel images are supported, so a pixel format
//! fully describes the memory layout of a pixel.

/// All pixel layouts an image can be stored in.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PixelFormat {
    /// Intensity
    #[default]
    Gray,
    /// Intensity, Alpha
    GrayAlpha,
    /// Red, Green, Blue
    RGB,
    /// Red, Green, Blue, Alpha
    RGBA
}

/// Encapsulates all pixel formats supported by the library
pub static ALL_PIXEL_FORMATS: [PixelFormat; 4] = [
    PixelFormat::Gray,
    PixelFormat::GrayAlpha,
    PixelFormat::RGB,
    PixelFormat::RGBA
];

/// Color type tag as stored in a PNG `IHDR` chunk.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PngColorType {
    Gray = 0,
    RGB = 2,
    Indexed = 3,
    GrayAlpha = 4,
    RGBA = 6
}

impl PngColorType {
    /// Map a raw `IHDR` color type byte to a known tag
    pub const fn from_u8(tag: u8) -> Option<PngColorType> {
        match tag {
            0 => Some(Self::Gray),
            2 => Some(Self::RGB),
            3 => Some(Self::Indexed),
            4 => Some(Self::GrayAlpha),
            6 => Some(Self::RGBA),
            _ => None
        }
    }

    /// The raw tag byte
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Everything a codec needs to know about a pixel format
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FormatInfo {
    /// Number of interleaved bytes per pixel
    pub components: usize,
    /// Tag written to and expected from the on-disk header
    pub color_type: PngColorType
}

impl PixelFormat {
    /// Channel count and on-disk tag for this format.
    pub const fn info(&self) -> FormatInfo {
        match self {
            Self::Gray => FormatInfo {
                components: 1,
                color_type: PngColorType::Gray
            },
            Self::GrayAlpha => FormatInfo {
                components: 2,
                color_type: PngColorType::GrayAlpha
            },
            Self::RGB => FormatInfo {
                components: 3,
                color_type: PngColorType::RGB
            },
            Self::RGBA => FormatInfo {
                components: 4,
                color_type: PngColorType::RGBA
            }
        }
    }

    /// Number of color channels present for a certain pixel format
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        self.info().components
    }

    /// The color type used when writing this format to disk
    pub const fn color_type(&self) -> PngColorType {
        self.info().color_type
    }

    /// Find the pixel format that is stored on disk with `color_type`
    ///
    /// Returns `None` for palette images, which are not supported
    pub const fn from_color_type(color_type: PngColorType) -> Option<PixelFormat> {
        match color_type {
            PngColorType::Gray => Some(Self::Gray),
            PngColorType::GrayAlpha => Some(Self::GrayAlpha),
            PngColorType::RGB => Some(Self::RGB),
            PngColorType::RGBA => Some(Self::RGBA),
            PngColorType::Indexed => None
        }
    }

    /// Find the pixel format with `components` interleaved channels
    pub const fn from_components(components: usize) -> Option<PixelFormat> {
        match components {
            1 => Some(Self::Gray),
            2 => Some(Self::GrayAlpha),
            3 => Some(Self::RGB),
            4 => Some(Self::RGBA),
            _ => None
        }
    }

    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::GrayAlpha | Self::RGBA)
    }

    pub const fn is_grayscale(&self) -> bool {
        matches!(self, Self::Gray | Self::GrayAlpha)
    }

    /// Returns the position of the alpha byte in a pixel
    ///
    /// If the format doesn't have an alpha channel returns `None`
    pub const fn alpha_position(&self) -> Option<usize> {
        match self {
            Self::GrayAlpha => Some(1),
            Self::RGBA => Some(3),
            _ => None
        }
    }
}
