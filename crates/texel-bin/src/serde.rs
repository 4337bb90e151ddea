/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use texel_core::pixel_format::PixelFormat;

/// Texture metadata printed by `--probe`
pub struct Metadata<'a> {
    file:   &'a Path,
    size:   u64,
    width:  usize,
    height: usize,
    format: PixelFormat
}

impl<'a> Metadata<'a> {
    pub fn new(
        file: &'a Path, size: u64, width: usize, height: usize, format: PixelFormat
    ) -> Metadata<'a> {
        Metadata {
            file,
            size,
            width,
            height,
            format
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 6)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("file_size", &self.size)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("format", &self.format)?;
        state.serialize_field("components", &self.format.num_components())?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use texel_core::pixel_format::PixelFormat;

    use super::Metadata;

    #[test]
    fn serializes_header_fields() {
        let metadata = Metadata::new(Path::new("a.png"), 99, 3, 2, PixelFormat::RGBA);

        let json: serde_json::Value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["file"], "a.png");
        assert_eq!(json["file_size"], 99);
        assert_eq!(json["width"], 3);
        assert_eq!(json["height"], 2);
        assert_eq!(json["format"], "RGBA");
        assert_eq!(json["components"], 4);
    }
}
