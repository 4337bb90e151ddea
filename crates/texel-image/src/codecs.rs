/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for all supported codecs the library understands
//!
//! PNG is the only on-disk format, the codec works on plain rows
//! and knows nothing about the in-memory row order of [`Image`](crate::image::Image).
pub mod png;

/// All supported image formats
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    /// Portable Network Graphics
    PNG,
    /// Any unknown format
    Unknown
}

impl ImageFormat {
    /// Guess the format of `bytes` from its magic bytes
    pub fn guess_format(bytes: &[u8]) -> ImageFormat {
        if bytes.starts_with(&png::PNG_SIGNATURE) {
            ImageFormat::PNG
        } else {
            ImageFormat::Unknown
        }
    }
}
