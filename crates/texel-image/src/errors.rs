/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image loading, saving and processing
use std::fmt::{Debug, Display, Formatter};

/// Reasons an otherwise valid file can't be represented
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UnsupportedFormat {
    /// Only 8 bits per channel are supported, contains the found depth
    BitDepth(u8),
    /// Palette or unknown color type, contains the raw header tag
    ColorType(u8)
}

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    /// A file couldn't be opened, read or written
    IoErrors(std::io::Error),
    /// The data isn't a valid PNG stream
    FormatError(String),
    /// The file is a valid PNG but uses a layout we don't support
    UnsupportedFormat(UnsupportedFormat),
    /// Image dimensions are larger than the configured limits
    LimitExceeded {
        width:  usize,
        height: usize
    },
    /// Expected buffer length, found buffer length
    DimensionsMisMatch(usize, usize),
    EncodeErrors(String)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            Self::FormatError(reason) => writeln!(f, "Not a valid image file: {reason}"),
            Self::UnsupportedFormat(UnsupportedFormat::BitDepth(depth)) => {
                writeln!(f, "Unsupported bit depth {depth}, only 8 bit images are supported")
            }
            Self::UnsupportedFormat(UnsupportedFormat::ColorType(tag)) => {
                writeln!(f, "Unsupported pixel format {tag}")
            }
            Self::LimitExceeded { width, height } => {
                writeln!(
                    f,
                    "Image dimensions {width}x{height} exceed the configured limits"
                )
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} but found {found}"
                )
            }
            Self::EncodeErrors(reason) => writeln!(f, "Encoding failed: {reason}")
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for ImageErrors {}

impl From<std::io::Error> for ImageErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}

impl From<UnsupportedFormat> for ImageErrors {
    fn from(value: UnsupportedFormat) -> Self {
        Self::UnsupportedFormat(value)
    }
}
