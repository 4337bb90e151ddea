/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use texel_image::codecs::png::read_header;
use texel_image::errors::ImageErrors;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::serde::Metadata;

/// Describe a file as pretty printed JSON
///
/// Only the PNG header is read, the pixels are never decoded,
/// so dimension limits don't apply here.
pub fn probe_file(path: &Path) -> Result<String, ImageErrors> {
    let fd = File::open(path)?;
    let size = fd.metadata()?.len();

    let (header, _) = read_header(&mut BufReader::new(fd))?;
    let format = header.pixel_format()?;

    let metadata = Metadata::new(path, size, header.width, header.height, format);

    serde_json::to_string_pretty(&metadata)
        .map_err(|err| ImageErrors::EncodeErrors(err.to_string()))
}

/// Read an input file header and print its metadata to standard output.
pub fn probe_input_file(in_file: &str, options: &CmdOptions) -> Result<(), ImageErrors> {
    let path = options.io_options().resolve(in_file);

    let json = probe_file(&path)?;
    println!("{json}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use texel_image::errors::{ImageErrors, UnsupportedFormat};

    use super::probe_file;

    fn header_file(name: &str, width: u32, height: u32, depth: u8) -> std::path::PathBuf {
        let mut file = vec![137, 80, 78, 71, 13, 10, 26, 10];
        file.extend_from_slice(&13_u32.to_be_bytes());
        file.extend_from_slice(b"IHDR");
        file.extend_from_slice(&width.to_be_bytes());
        file.extend_from_slice(&height.to_be_bytes());
        file.extend_from_slice(&[depth, 6, 0, 0, 0]);
        file.extend_from_slice(&[0; 4]);

        let path = std::env::temp_dir().join(format!("texel-{}-{name}", std::process::id()));
        std::fs::write(&path, file).unwrap();
        path
    }

    #[test]
    fn huge_header_is_described_not_decoded() {
        let path = header_file("probe-huge.png", 0x7fff_ffff, 0x7fff_ffff, 8);

        let json: serde_json::Value = serde_json::from_str(&probe_file(&path).unwrap()).unwrap();

        assert_eq!(json["width"], 0x7fff_ffff_u32);
        assert_eq!(json["height"], 0x7fff_ffff_u32);
        assert_eq!(json["format"], "RGBA");
        assert_eq!(json["file_size"], 33);
    }

    #[test]
    fn unsupported_depth_is_reported() {
        let path = header_file("probe-deep.png", 4, 4, 16);

        assert!(matches!(
            probe_file(&path),
            Err(ImageErrors::UnsupportedFormat(UnsupportedFormat::BitDepth(16)))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("texel-probe-does-not-exist.png");

        assert!(matches!(probe_file(&path), Err(ImageErrors::IoErrors(_))));
    }
}
