//! PNG image format support
//!
//! Every PNG color type is decoded to 8-bit samples: palettes and low bit
//! depths are expanded, 16-bit samples keep their high byte, and the
//! alpha of gray-alpha images is dropped. RGBA keeps its alpha channel.

use crate::{IoError, IoResult};
use grainscan_core::Pix;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;
    buf.truncate(output_info.buffer_size());

    let width = output_info.width;
    let height = output_info.height;
    let pix = match color_type {
        ColorType::Grayscale => Pix::from_vec(width, height, 1, buf)?,
        ColorType::Rgb => Pix::from_vec(width, height, 3, buf)?,
        ColorType::Rgba => Pix::from_vec(width, height, 4, buf)?,
        ColorType::GrayscaleAlpha => {
            let gray = buf.chunks_exact(2).map(|ga| ga[0]).collect();
            Pix::from_vec(width, height, 1, gray)?
        }
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };
    Ok(pix)
}

/// Write a PNG image with 8-bit samples.
///
/// 1, 2, 3 and 4 channels are written as gray, gray-alpha, RGB and RGBA.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let color_type = match pix.channels() {
        1 => ColorType::Grayscale,
        2 => ColorType::GrayscaleAlpha,
        3 => ColorType::Rgb,
        4 => ColorType::Rgba,
        n => {
            return Err(IoError::UnsupportedFormat(format!(
                "cannot write {} channels as PNG",
                n
            )));
        }
    };

    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(pix.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn roundtrip(pix: &Pix) -> Pix {
        let mut buffer = Vec::new();
        write_png(pix, &mut buffer).unwrap();
        read_png(Cursor::new(buffer)).unwrap()
    }

    #[test]
    fn test_png_roundtrip_grayscale() {
        let data = (0..100u32).map(|i| ((i % 10 + i / 10) * 10) as u8).collect();
        let pix = Pix::from_vec(10, 10, 1, data).unwrap();
        assert_eq!(roundtrip(&pix), pix);
    }

    #[test]
    fn test_png_roundtrip_rgb_and_rgba() {
        let rgb = Pix::from_vec(2, 1, 3, vec![255, 0, 0, 0, 0, 255]).unwrap();
        assert_eq!(roundtrip(&rgb), rgb);
        let rgba = Pix::from_vec(1, 2, 4, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(roundtrip(&rgba), rgba);
    }

    #[test]
    fn test_gray_alpha_drops_alpha() {
        let ga = Pix::from_vec(2, 1, 2, vec![10, 255, 20, 0]).unwrap();
        let back = roundtrip(&ga);
        assert_eq!(back.channels(), 1);
        assert_eq!(back.data(), &[10, 20]);
    }

    #[test]
    fn test_sixteen_bit_stripped() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Sixteen);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0x12, 0x34, 0xAB, 0xCD]).unwrap();
            writer.finish().unwrap();
        }
        let pix = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(pix.data(), &[0x12, 0xAB]);
    }

    #[test]
    fn test_indexed_expanded() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 3, 1);
            encoder.set_color(ColorType::Indexed);
            encoder.set_depth(BitDepth::Eight);
            encoder.set_palette(vec![0, 0, 0, 255, 0, 0, 0, 0, 255]);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[2, 1, 0]).unwrap();
            writer.finish().unwrap();
        }
        let pix = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(pix.channels(), 3);
        assert_eq!(pix.data(), &[0, 0, 255, 255, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(read_png(Cursor::new(vec![1u8, 2, 3])).is_err());
    }
}
