//! JPEG image format support
//!
//! Reads 8-bit grayscale and 24-bit RGB JPEG images with `jpeg-decoder`
//! and writes them with `jpeg-encoder` at a fixed quality.

use crate::{IoError, IoResult};
use grainscan_core::Pix;
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use std::io::{Read, Write};

/// Quality used for every JPEG written by this crate.
pub const JPEG_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// # Returns
/// A 1-channel `Pix` for grayscale, 3-channel for RGB.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG header".to_string()))?;

    let channels = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::RGB24 => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };
    Ok(Pix::from_vec(
        u32::from(info.width),
        u32::from(info.height),
        channels,
        data,
    )?)
}

/// Write a 1- or 3-channel image as JPEG.
pub fn write_jpeg<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let color_type = match pix.channels() {
        1 => ColorType::Luma,
        3 => ColorType::Rgb,
        n => {
            return Err(IoError::UnsupportedFormat(format!(
                "cannot write {} channels as JPEG",
                n
            )));
        }
    };
    let too_large = || {
        IoError::InvalidData(format!(
            "{}x{} exceeds the JPEG size limit",
            pix.width(),
            pix.height()
        ))
    };
    let width = u16::try_from(pix.width()).map_err(|_| too_large())?;
    let height = u16::try_from(pix.height()).map_err(|_| too_large())?;

    Encoder::new(writer, JPEG_QUALITY)
        .encode(pix.data(), width, height, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
