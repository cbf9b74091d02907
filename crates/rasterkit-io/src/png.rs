//! PNG image format support
//!
//! Decoding expands palettes, low bit depths and `tRNS` transparency and
//! strips 16-bit samples, so only 8-bit gray, gray+alpha, RGB and RGBA
//! reach the pixel conversion. Encoding always writes 8-bit RGBA.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use rasterkit_core::color::{self, compose_rgb, compose_rgba};
use rasterkit_core::{RasterImage, RasterImageMut};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<RasterImage> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    if width == 0 || height == 0 {
        return Err(IoError::DecodeError(format!(
            "PNG has empty size {width}x{height}"
        )));
    }

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::DecodeError(format!(
            "unsupported PNG output: {:?} {:?}",
            color_type, bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::DecodeError(format!(
                "unexpanded PNG color type {:?}",
                other
            )));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut out = RasterImageMut::new(width, height)?;

    for y in 0..height {
        let row = &data[y as usize * bytes_per_row..];
        let dst = out.row_data_mut(y);
        for (x, px) in row.chunks_exact(samples).take(width as usize).enumerate() {
            dst[x] = match *px {
                [g] => compose_rgb(g, g, g),
                [g, a] => compose_rgba(g, g, g, a),
                [r, g, b] => compose_rgb(r, g, b),
                [r, g, b, a] => compose_rgba(r, g, b, a),
                _ => unreachable!(),
            };
        }
    }

    Ok(out.into())
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(image: &RasterImage, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let bytes: Vec<u8> = image
        .data()
        .iter()
        .flat_map(|&v| {
            let (r, g, b, a) = color::extract_rgba(v);
            [r, g, b, a]
        })
        .collect();

    writer
        .write_image_data(&bytes)
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

    #[test]
    fn test_png_roundtrip_keeps_alpha() {
        let data = vec![
            compose_rgba(255, 0, 0, 255),
            compose_rgba(0, 255, 0, 128),
            compose_rgba(0, 0, 255, 0),
            compose_rgba(1, 2, 3, 4),
            color::WHITE,
            color::BLACK,
        ];
        let img = RasterImage::from_pixels(3, 2, data).unwrap();

        let mut buf = Vec::new();
        write_png(&img, &mut buf).unwrap();
        let back = read_png(Cursor::new(buf)).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn test_read_gray_png() {
        let mut buf = Vec::new();
        {
            let mut enc = Encoder::new(&mut buf, 2, 1);
            enc.set_color(ColorType::Grayscale);
            enc.set_depth(BitDepth::Eight);
            let mut w = enc.write_header().unwrap();
            w.write_image_data(&[0, 200]).unwrap();
        }
        let img = read_png(Cursor::new(buf)).unwrap();
        assert_eq!(img.data(), &[color::BLACK, compose_rgb(200, 200, 200)]);
    }

    #[test]
    fn test_read_garbage() {
        let err = read_png(Cursor::new(b"not a png".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
