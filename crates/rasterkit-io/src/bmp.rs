use std::path::Path;

use rasterkit_image::{ChannelOrder, ImageSize, PixelBuffer};

use crate::{
    error::{CodecError, IoError},
    format::ImageFormat,
    functional::{read_with, write_with},
};

/// Byte length of the file header plus the BITMAPINFOHEADER.
pub const HEADER_LEN: usize = 54;

const INFO_HEADER_LEN: u32 = 40;

/// Channel order of a 24 bpp pixel on disk.
const WIRE_ORDER: ChannelOrder = ChannelOrder::BGR;

fn read_u16_le(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn read_i32_le(bytes: &[u8], offset: usize) -> i32 {
    read_u32_le(bytes, offset) as i32
}

// rows are padded to a multiple of 4 bytes
fn row_stride(row_len: usize) -> Option<usize> {
    Some(row_len.checked_add(3)? & !3)
}

/// Decode an uncompressed 8 or 24 bits per pixel BMP.
///
/// Rows are stored bottom-up unless the header height is negative. An 8 bpp palette index
/// is taken as the gray value of the pixel and the palette itself is ignored.
///
/// The header is fully validated before the image is allocated.
///
/// # Errors
///
/// Returns a [`CodecError`] naming the first header field that cannot be decoded, or
/// [`CodecError::TruncatedData`] if the data is shorter than the header or the declared
/// payload.
pub fn decode_bmp(bytes: &[u8]) -> Result<PixelBuffer, CodecError> {
    if bytes.len() < HEADER_LEN {
        return Err(CodecError::TruncatedData {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }

    if &bytes[0..2] != b"BM" {
        return Err(CodecError::BmpSignature);
    }

    let data_offset = read_u32_le(bytes, 10) as usize;
    let (width, height) = (read_i32_le(bytes, 18), read_i32_le(bytes, 22));

    let bits_per_pixel = read_u16_le(bytes, 28);
    if bits_per_pixel != 8 && bits_per_pixel != 24 {
        return Err(CodecError::BmpBitsPerPixel(bits_per_pixel));
    }

    let compression = read_u32_le(bytes, 30);
    if compression != 0 {
        return Err(CodecError::BmpCompression(compression));
    }

    if width < 0 {
        return Err(CodecError::BmpDimensions(width, height));
    }
    let top_down = height < 0;
    let size = ImageSize {
        width: width as usize,
        height: height.unsigned_abs() as usize,
    };

    let bytes_per_pixel = bits_per_pixel as usize / 8;
    let row_len = size
        .width
        .checked_mul(bytes_per_pixel)
        .ok_or(CodecError::BmpDimensions(width, height))?;
    let stride = row_stride(row_len).ok_or(CodecError::BmpDimensions(width, height))?;
    let payload_end = stride
        .checked_mul(size.height)
        .and_then(|len| len.checked_add(data_offset))
        .ok_or(CodecError::BmpDimensions(width, height))?;

    if payload_end > bytes.len() {
        return Err(CodecError::TruncatedData {
            expected: payload_end,
            actual: bytes.len(),
        });
    }

    let mut image = PixelBuffer::new(size)?;
    if image.is_empty() {
        return Ok(image);
    }

    let payload = &bytes[data_offset..payload_end];
    let mut view = image.unchecked_mut();
    for (i, row) in payload.chunks_exact(stride).enumerate() {
        let y = if top_down { i } else { size.height - 1 - i };
        let row = &row[..row_len];
        if bytes_per_pixel == 1 {
            for (x, &index) in row.iter().enumerate() {
                view.set_gray(x, y, index);
            }
        } else {
            for (x, px) in row.chunks_exact(3).enumerate() {
                view.set_color(x, y, WIRE_ORDER.decode([px[0], px[1], px[2]]));
            }
        }
    }

    Ok(image)
}

/// Encode an image as an uncompressed 24 bits per pixel BMP.
///
/// The output is a 54 byte header followed by the rows bottom-up, each padded with zero
/// bytes to a multiple of 4.
///
/// # Errors
///
/// Returns [`CodecError::BmpTooLarge`] if the dimensions or the file size overflow the
/// header fields.
pub fn encode_bmp(image: &PixelBuffer) -> Result<Vec<u8>, CodecError> {
    let (width, height) = (image.width(), image.height());
    let too_large = || CodecError::BmpTooLarge(width, height);

    let row_len = width.checked_mul(3).ok_or_else(too_large)?;
    let stride = row_stride(row_len).ok_or_else(too_large)?;
    let file_len = stride
        .checked_mul(height)
        .and_then(|len| len.checked_add(HEADER_LEN))
        .ok_or_else(too_large)?;

    let file_len_field = u32::try_from(file_len).map_err(|_| too_large())?;
    let width_field = i32::try_from(width).map_err(|_| too_large())?;
    let height_field = i32::try_from(height).map_err(|_| too_large())?;

    let mut bytes = Vec::with_capacity(file_len);

    // file header
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&file_len_field.to_le_bytes());
    bytes.extend_from_slice(&[0u8; 4]);
    bytes.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes());

    // info header
    bytes.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    bytes.extend_from_slice(&width_field.to_le_bytes());
    bytes.extend_from_slice(&height_field.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    // compression, payload size, resolution and palette fields
    bytes.extend_from_slice(&[0u8; 24]);

    let view = image.unchecked();
    for y in (0..height).rev() {
        for x in 0..width {
            bytes.extend_from_slice(&WIRE_ORDER.encode(view.get_color(x, y)));
        }
        bytes.resize(bytes.len() + stride - row_len, 0);
    }

    Ok(bytes)
}

/// Read a BMP image from a file.
///
/// # Arguments
///
/// * `file_path` - The path to the BMP file.
pub fn read_image_bmp(file_path: impl AsRef<Path>) -> Result<PixelBuffer, IoError> {
    read_with(file_path.as_ref(), ImageFormat::Bmp, decode_bmp)
}

/// Write an image to a file as a 24 bits per pixel BMP.
///
/// # Arguments
///
/// * `file_path` - The path of the BMP file to write.
/// * `image` - The image to write.
pub fn write_image_bmp(file_path: impl AsRef<Path>, image: &PixelBuffer) -> Result<(), IoError> {
    write_with(file_path.as_ref(), ImageFormat::Bmp, image, encode_bmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_image::Rgb8;

    fn header(width: i32, height: i32, bits_per_pixel: u16, payload_len: usize) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"BM");
        bytes.extend_from_slice(&((HEADER_LEN + payload_len) as u32).to_le_bytes());
        bytes.extend_from_slice(&[0u8; 4]);
        bytes.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes());
        bytes.extend_from_slice(&40u32.to_le_bytes());
        bytes.extend_from_slice(&width.to_le_bytes());
        bytes.extend_from_slice(&height.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&bits_per_pixel.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 24]);
        bytes
    }

    #[test]
    fn decode_2x2_24bpp() -> Result<(), CodecError> {
        let mut bytes = header(2, 2, 24, 16);
        #[rustfmt::skip]
        bytes.extend_from_slice(&[
            // bottom row: blue, white
            255, 0, 0,   255, 255, 255,   0, 0,
            // top row: red, green
            0, 0, 255,   0, 255, 0,       0, 0,
        ]);

        let image = decode_bmp(&bytes)?;
        assert_eq!(image.size(), ImageSize { width: 2, height: 2 });
        assert_eq!(image.get_pixel(0, 0)?, Rgb8::new(255, 0, 0));
        assert_eq!(image.get_pixel(1, 0)?, Rgb8::new(0, 255, 0));
        assert_eq!(image.get_pixel(0, 1)?, Rgb8::new(0, 0, 255));
        assert_eq!(image.get_pixel(1, 1)?, Rgb8::WHITE);
        Ok(())
    }

    #[test]
    fn decode_top_down() -> Result<(), CodecError> {
        let mut bytes = header(1, -2, 24, 8);
        bytes.extend_from_slice(&[1, 2, 3, 0, 4, 5, 6, 0]);

        let image = decode_bmp(&bytes)?;
        assert_eq!(image.get_pixel(0, 0)?, Rgb8::new(3, 2, 1));
        assert_eq!(image.get_pixel(0, 1)?, Rgb8::new(6, 5, 4));
        Ok(())
    }

    #[test]
    fn decode_8bpp_as_gray() -> Result<(), CodecError> {
        let mut bytes = header(3, 2, 8, 8);
        bytes.extend_from_slice(&[10, 20, 30, 0, 40, 50, 60, 0]);

        let image = decode_bmp(&bytes)?;
        let grays = image.pixels().map(|px| px.r).collect::<Vec<_>>();
        assert_eq!(grays, vec![40, 50, 60, 10, 20, 30]);
        assert!(image.pixels().all(|px| px.r == px.g && px.g == px.b));
        Ok(())
    }

    #[test]
    fn decode_honours_data_offset() -> Result<(), CodecError> {
        let mut bytes = header(1, 1, 24, 4);
        // a palette-sized gap between the header and the pixels
        bytes[10..14].copy_from_slice(&((HEADER_LEN + 8) as u32).to_le_bytes());
        bytes.extend_from_slice(&[0u8; 8]);
        bytes.extend_from_slice(&[7, 8, 9, 0]);

        let image = decode_bmp(&bytes)?;
        assert_eq!(image.get_pixel(0, 0)?, Rgb8::new(9, 8, 7));
        Ok(())
    }

    #[test]
    fn decode_rejects_invalid_headers() {
        assert_eq!(
            decode_bmp(b"BM"),
            Err(CodecError::TruncatedData {
                expected: HEADER_LEN,
                actual: 2
            })
        );

        let mut bytes = header(1, 1, 24, 4);
        bytes.extend_from_slice(&[0u8; 4]);

        let mut signature = bytes.clone();
        signature[0] = b'X';
        assert_eq!(decode_bmp(&signature), Err(CodecError::BmpSignature));

        let mut bpp = bytes.clone();
        bpp[28..30].copy_from_slice(&32u16.to_le_bytes());
        assert_eq!(decode_bmp(&bpp), Err(CodecError::BmpBitsPerPixel(32)));

        let mut compression = bytes.clone();
        compression[30..34].copy_from_slice(&1u32.to_le_bytes());
        assert_eq!(decode_bmp(&compression), Err(CodecError::BmpCompression(1)));

        let mut width = bytes.clone();
        width[18..22].copy_from_slice(&(-1i32).to_le_bytes());
        assert_eq!(decode_bmp(&width), Err(CodecError::BmpDimensions(-1, 1)));

        let truncated = &bytes[..bytes.len() - 1];
        assert_eq!(
            decode_bmp(truncated),
            Err(CodecError::TruncatedData {
                expected: HEADER_LEN + 4,
                actual: HEADER_LEN + 3
            })
        );
    }

    #[test]
    fn encode_pads_rows() -> Result<(), CodecError> {
        let image = PixelBuffer::from_fn(ImageSize { width: 3, height: 2 }, |x, y| {
            Rgb8::new(x as u8, y as u8, 100)
        })?;

        let bytes = encode_bmp(&image)?;
        // 9 bytes per row padded to 12
        assert_eq!(bytes.len(), HEADER_LEN + 24);
        assert_eq!(read_u32_le(&bytes, 2) as usize, bytes.len());
        assert_eq!(read_u32_le(&bytes, 10) as usize, HEADER_LEN);
        assert_eq!(read_u32_le(&bytes, 14), 40);
        assert_eq!(read_i32_le(&bytes, 18), 3);
        assert_eq!(read_i32_le(&bytes, 22), 2);
        assert_eq!(read_u16_le(&bytes, 26), 1);
        assert_eq!(read_u16_le(&bytes, 28), 24);
        assert_eq!(read_u32_le(&bytes, 30), 0);

        // the first stored row is the bottom one
        assert_eq!(&bytes[HEADER_LEN..HEADER_LEN + 3], &[100, 1, 0]);
        assert_eq!(&bytes[HEADER_LEN + 9..HEADER_LEN + 12], &[0, 0, 0]);

        assert_eq!(decode_bmp(&bytes)?, image);
        Ok(())
    }

    #[test]
    fn read_write_bmp() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.bmp");

        let image = PixelBuffer::from_fn(ImageSize { width: 5, height: 3 }, |x, y| {
            Rgb8::new((50 * x) as u8, (80 * y) as u8, 7)
        })?;
        write_image_bmp(&file_path, &image)?;

        let decoded = read_image_bmp(&file_path)?;
        assert_eq!(decoded, image);
        Ok(())
    }
}
