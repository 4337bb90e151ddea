/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG decoding and encoding on top of the `png` crate
//!
//! Decoding uses identity transformations, so the bit depth and color type
//! seen here are exactly what the file stores. Only 8 bit gray, gray+alpha,
//! RGB and RGBA images are accepted.
use std::io::{Cursor, ErrorKind, Read, Write};
use std::slice::ChunksExact;

use log::{debug, trace};
use texel_core::options::IoOptions;
use texel_core::pixel_format::{PixelFormat, PngColorType};

use crate::errors::{ImageErrors, UnsupportedFormat};

/// Magic bytes every PNG stream starts with
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// A decoded PNG with rows in on-disk order, i.e the first row is the top of the picture
#[derive(Clone, Debug)]
pub struct PngImage {
    width:  usize,
    height: usize,
    format: PixelFormat,
    data:   Vec<u8>
}

impl PngImage {
    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn format(&self) -> PixelFormat {
        self.format
    }

    /// Number of bytes in a single row
    pub const fn row_bytes(&self) -> usize {
        self.width * self.format.num_components()
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(self.row_bytes().max(1))
    }

    /// Return the raw, row major pixel bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Read and confirm the PNG signature
///
/// Streams shorter than the signature are reported as invalid files.
///
/// # Returns
/// The signature bytes, so that they can be chained back in front of the stream
pub fn check_signature<R: Read>(reader: &mut R) -> Result<[u8; 8], ImageErrors> {
    let mut header = [0; 8];

    match reader.read_exact(&mut header) {
        Ok(()) => (),
        Err(err) if err.kind() == ErrorKind::UnexpectedEof => {
            return Err(ImageErrors::FormatError(
                "stream is shorter than the PNG signature".to_string()
            ));
        }
        Err(err) => return Err(ImageErrors::IoErrors(err))
    }
    if header != PNG_SIGNATURE {
        return Err(ImageErrors::FormatError("bad PNG signature".to_string()));
    }
    Ok(header)
}

/// The fields of the IHDR chunk this library cares about
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PngHeader {
    pub width:      usize,
    pub height:     usize,
    pub depth:      u8,
    pub color_type: u8
}

impl PngHeader {
    /// The pixel format, if the header describes an 8 bit non palette image
    ///
    /// # Errors
    /// [`ImageErrors::UnsupportedFormat`] for other depths and color types
    pub fn pixel_format(&self) -> Result<PixelFormat, ImageErrors> {
        if self.depth != 8 {
            return Err(UnsupportedFormat::BitDepth(self.depth).into());
        }
        PngColorType::from_u8(self.color_type)
            .and_then(PixelFormat::from_color_type)
            .ok_or_else(|| UnsupportedFormat::ColorType(self.color_type).into())
    }

    /// Check dimensions against `options` and against what a single buffer can hold
    pub fn check_limits(&self, options: &IoOptions) -> Result<(), ImageErrors> {
        let (width, height) = (self.width, self.height);

        if width > options.get_max_width() || height > options.get_max_height() {
            return Err(ImageErrors::LimitExceeded { width, height });
        }
        let size = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(4))
            .filter(|size| *size <= isize::MAX as usize);

        if size.is_none() {
            return Err(ImageErrors::LimitExceeded { width, height });
        }
        Ok(())
    }
}

/// Read the signature and the IHDR chunk that must follow it
///
/// Nothing besides the header is read and no pixel memory is allocated.
///
/// # Returns
/// The header and every byte consumed, so that they can be chained back in front of the stream
pub fn read_header<R: Read>(reader: &mut R) -> Result<(PngHeader, Vec<u8>), ImageErrors> {
    let signature = check_signature(reader)?;

    // length, chunk type, width, height, depth, color type
    let mut chunk = [0_u8; 18];
    reader.read_exact(&mut chunk).map_err(|err| match err.kind() {
        ErrorKind::UnexpectedEof => ImageErrors::FormatError("truncated PNG header".to_string()),
        _ => ImageErrors::IoErrors(err)
    })?;

    if &chunk[4..8] != b"IHDR" {
        return Err(ImageErrors::FormatError("first chunk is not IHDR".to_string()));
    }
    let width = u32::from_be_bytes([chunk[8], chunk[9], chunk[10], chunk[11]]);
    let height = u32::from_be_bytes([chunk[12], chunk[13], chunk[14], chunk[15]]);

    let header = PngHeader {
        width:      width as usize,
        height:     height as usize,
        depth:      chunk[16],
        color_type: chunk[17]
    };
    let mut consumed = signature.to_vec();
    consumed.extend_from_slice(&chunk);

    Ok((header, consumed))
}

/// Decode a complete PNG stream
///
/// The header is validated before the pixel buffer is allocated.
///
/// # Errors
/// - [`ImageErrors::FormatError`]: Bad signature or corrupt stream
/// - [`ImageErrors::UnsupportedFormat`]: Bit depth other than 8, or a palette image
/// - [`ImageErrors::LimitExceeded`]: Dimensions larger than `options` allow
/// - [`ImageErrors::IoErrors`]: The underlying reader failed
pub fn decode<R: Read>(mut reader: R, options: &IoOptions) -> Result<PngImage, ImageErrors> {
    let (header, consumed) = read_header(&mut reader)?;
    let (width, height) = (header.width, header.height);

    trace!(
        "PNG header: {width}x{height}, depth {}, color type {}",
        header.depth,
        header.color_type
    );
    header.check_limits(options)?;
    let format = header.pixel_format()?;

    // room for the output buffer plus the decoder's own row buffers
    let limits = png::Limits {
        bytes: (width * height * format.num_components())
            .saturating_add(width.saturating_mul(16))
            .saturating_add(1 << 20)
    };
    let mut decoder = png::Decoder::new_with_limits(Cursor::new(consumed).chain(reader), limits);
    decoder.set_transformations(png::Transformations::IDENTITY);

    let to_error = |err: png::DecodingError| decode_error(err, width, height);
    let mut png_reader = decoder.read_info().map_err(to_error)?;

    let mut data = vec![0; png_reader.output_buffer_size()];
    let frame = png_reader.next_frame(&mut data).map_err(to_error)?;
    data.truncate(frame.buffer_size());

    let expected = width * height * format.num_components();
    if frame.line_size != width * format.num_components() || data.len() != expected {
        return Err(ImageErrors::DimensionsMisMatch(expected, data.len()));
    }
    debug!("Decoded {width}x{height} {format:?} PNG");

    Ok(PngImage {
        width,
        height,
        format,
        data
    })
}

/// Encode rows into a PNG stream
///
/// The image is written as 8 bit, non interlaced, with default compression
/// and filtering. `rows` must be in on-disk order and every row is validated
/// before anything is written.
pub fn encode<W: Write>(
    writer: W, width: usize, height: usize, format: PixelFormat, rows: &[&[u8]]
) -> Result<(), ImageErrors> {
    let row_bytes = width * format.num_components();

    if rows.len() != height {
        return Err(ImageErrors::DimensionsMisMatch(height, rows.len()));
    }
    if let Some(row) = rows.iter().find(|row| row.len() != row_bytes) {
        return Err(ImageErrors::DimensionsMisMatch(row_bytes, row.len()));
    }
    let (Ok(png_width), Ok(png_height)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(ImageErrors::LimitExceeded { width, height });
    };
    let data = rows.concat();

    let mut encoder = png::Encoder::new(writer, png_width, png_height);
    encoder.set_color(png_color_type(format));
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    let mut png_writer = encoder.write_header().map_err(encode_error)?;
    png_writer.write_image_data(&data).map_err(encode_error)?;
    png_writer.finish().map_err(encode_error)?;

    debug!("Encoded {width}x{height} {format:?} PNG");

    Ok(())
}

fn png_color_type(format: PixelFormat) -> png::ColorType {
    match format.color_type() {
        PngColorType::Gray => png::ColorType::Grayscale,
        PngColorType::GrayAlpha => png::ColorType::GrayscaleAlpha,
        PngColorType::RGB => png::ColorType::Rgb,
        PngColorType::RGBA => png::ColorType::Rgba,
        PngColorType::Indexed => png::ColorType::Indexed
    }
}

fn decode_error(err: png::DecodingError, width: usize, height: usize) -> ImageErrors {
    match err {
        png::DecodingError::LimitsExceeded => ImageErrors::LimitExceeded { width, height },
        // a stream that ends early is a broken file, not a broken disk
        png::DecodingError::IoError(err) if err.kind() == ErrorKind::UnexpectedEof => {
            ImageErrors::FormatError("unexpected end of PNG stream".to_string())
        }
        png::DecodingError::IoError(err) => ImageErrors::IoErrors(err),
        err => ImageErrors::FormatError(err.to_string())
    }
}

fn encode_error(err: png::EncodingError) -> ImageErrors {
    match err {
        png::EncodingError::IoError(err) => ImageErrors::IoErrors(err),
        err => ImageErrors::EncodeErrors(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use texel_core::options::IoOptions;
    use texel_core::pixel_format::PixelFormat;

    use super::{check_signature, decode, encode, read_header, PngHeader, PNG_SIGNATURE};
    use crate::errors::{ImageErrors, UnsupportedFormat};

    fn encode_raw(
        width: u32, height: u32, color: png::ColorType, depth: png::BitDepth, data: &[u8]
    ) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            if color == png::ColorType::Indexed {
                encoder.set_palette(vec![0, 0, 0, 255, 255, 255]);
            }
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn signature_is_checked() {
        assert!(check_signature(&mut &PNG_SIGNATURE[..]).is_ok());
        assert!(matches!(
            check_signature(&mut &b"notapng!"[..]),
            Err(ImageErrors::FormatError(_))
        ));
        assert!(matches!(
            check_signature(&mut &b""[..]),
            Err(ImageErrors::FormatError(_))
        ));
    }

    #[test]
    fn rows_keep_disk_order() {
        let data = [1, 1, 2, 2, 3, 3];
        let file = encode_raw(2, 3, png::ColorType::Grayscale, png::BitDepth::Eight, &data);

        let image = decode(&file[..], &IoOptions::default()).unwrap();

        assert_eq!(image.format(), PixelFormat::Gray);
        assert_eq!((image.width(), image.height()), (2, 3));
        let rows: Vec<&[u8]> = image.rows().collect();
        let expected: [&[u8]; 3] = [&[1, 1], &[2, 2], &[3, 3]];
        assert_eq!(rows, expected);
    }

    #[test]
    fn sixteen_bit_is_unsupported() {
        let data = [0_u8; 2 * 2 * 2];
        let file = encode_raw(2, 2, png::ColorType::Grayscale, png::BitDepth::Sixteen, &data);

        match decode(&file[..], &IoOptions::default()) {
            Err(ImageErrors::UnsupportedFormat(UnsupportedFormat::BitDepth(16))) => (),
            other => panic!("expected 16 bit rejection, got {other:?}")
        }
    }

    #[test]
    fn low_bit_depth_is_not_expanded() {
        // 1 bit gray, one byte per row
        let data = [0b1010_0000, 0b0101_0000];
        let file = encode_raw(4, 2, png::ColorType::Grayscale, png::BitDepth::One, &data);

        match decode(&file[..], &IoOptions::default()) {
            Err(ImageErrors::UnsupportedFormat(UnsupportedFormat::BitDepth(1))) => (),
            other => panic!("expected 1 bit rejection, got {other:?}")
        }
    }

    #[test]
    fn palette_is_unsupported() {
        let data = [0, 1, 1, 0];
        let file = encode_raw(2, 2, png::ColorType::Indexed, png::BitDepth::Eight, &data);

        match decode(&file[..], &IoOptions::default()) {
            Err(ImageErrors::UnsupportedFormat(UnsupportedFormat::ColorType(3))) => (),
            other => panic!("expected palette rejection, got {other:?}")
        }
    }

    #[test]
    fn limits_are_respected() {
        let data = [0_u8; 4 * 4];
        let file = encode_raw(4, 4, png::ColorType::Grayscale, png::BitDepth::Eight, &data);
        let options = IoOptions::default().set_max_width(2);

        assert!(matches!(
            decode(&file[..], &options),
            Err(ImageErrors::LimitExceeded {
                width:  4,
                height: 4
            })
        ));
    }

    /// A signature and IHDR chunk with no image data, the CRC is not filled in
    fn bare_header(width: u32, height: u32, depth: u8, color_type: u8) -> Vec<u8> {
        let mut file = PNG_SIGNATURE.to_vec();
        file.extend_from_slice(&13_u32.to_be_bytes());
        file.extend_from_slice(b"IHDR");
        file.extend_from_slice(&width.to_be_bytes());
        file.extend_from_slice(&height.to_be_bytes());
        file.extend_from_slice(&[depth, color_type, 0, 0, 0]);
        file.extend_from_slice(&[0; 4]);
        file
    }

    #[test]
    fn header_is_read_without_pixels() {
        let file = bare_header(0x7fff_ffff, 0x7fff_ffff, 8, 6);

        let (header, consumed) = read_header(&mut &file[..]).unwrap();

        assert_eq!(
            header,
            PngHeader {
                width:      0x7fff_ffff,
                height:     0x7fff_ffff,
                depth:      8,
                color_type: 6
            }
        );
        assert_eq!(consumed, &file[..26]);
        assert_eq!(header.pixel_format().unwrap(), PixelFormat::RGBA);
    }

    #[test]
    fn huge_header_exceeds_limits() {
        let file = bare_header(0x7fff_ffff, 0x7fff_ffff, 8, 6);

        let result = decode(&file[..], &IoOptions::default());
        assert!(
            matches!(
                result,
                Err(ImageErrors::LimitExceeded {
                    width:  0x7fff_ffff,
                    height: 0x7fff_ffff
                })
            ),
            "{result:?}"
        );

        // even without configured limits the buffer can't be allocated
        let unlimited = IoOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX);
        let result = decode(&file[..], &unlimited);
        assert!(matches!(result, Err(ImageErrors::LimitExceeded { .. })), "{result:?}");
    }

    #[test]
    fn wide_image_within_limits_decodes() {
        let data = vec![9_u8; 3 * 4000];
        let file = encode_raw(4000, 1, png::ColorType::Rgb, png::BitDepth::Eight, &data);

        let image = decode(&file[..], &IoOptions::default()).unwrap();

        assert_eq!(image.into_raw(), data);
    }

    #[test]
    fn missing_ihdr_is_a_format_error() {
        let mut file = bare_header(1, 1, 8, 0);
        file[12..16].copy_from_slice(b"IDAT");

        assert!(matches!(
            decode(&file[..], &IoOptions::default()),
            Err(ImageErrors::FormatError(_))
        ));
        assert!(matches!(
            decode(&PNG_SIGNATURE[..], &IoOptions::default()),
            Err(ImageErrors::FormatError(_))
        ));
    }

    #[test]
    fn truncated_stream_is_a_format_error() {
        let data = [7_u8; 3 * 8 * 8];
        let file = encode_raw(8, 8, png::ColorType::Rgb, png::BitDepth::Eight, &data);

        let result = decode(&file[..file.len() / 2], &IoOptions::default());
        assert!(matches!(result, Err(ImageErrors::FormatError(_))), "{result:?}");
    }

    #[test]
    fn encode_validates_rows_first() {
        let mut out = Vec::new();
        let rows: [&[u8]; 2] = [&[1, 2, 3], &[1, 2]];

        let result = encode(&mut out, 1, 2, PixelFormat::RGB, &rows);

        assert!(matches!(result, Err(ImageErrors::DimensionsMisMatch(3, 2))));
        assert!(out.is_empty());

        let result = encode(&mut out, 1, 3, PixelFormat::RGB, &rows);
        assert!(matches!(result, Err(ImageErrors::DimensionsMisMatch(3, 2))));
        assert!(out.is_empty());
    }

    #[test]
    fn encode_then_decode() {
        let rows: [&[u8]; 2] = [&[10, 20, 30, 40], &[50, 60, 70, 80]];
        let mut out = Vec::new();

        encode(&mut out, 2, 2, PixelFormat::GrayAlpha, &rows).unwrap();
        assert!(out.starts_with(&PNG_SIGNATURE));

        let image = decode(&out[..], &IoOptions::default()).unwrap();
        assert_eq!(image.format(), PixelFormat::GrayAlpha);
        assert_eq!(image.into_raw(), vec![10, 20, 30, 40, 50, 60, 70, 80]);
    }
}
