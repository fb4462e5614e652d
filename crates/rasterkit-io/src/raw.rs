use std::path::Path;

use rasterkit_image::{ImageError, ImageSize, PixelBuffer, Rgb8};

use crate::{
    error::{CodecError, IoError},
    format::ImageFormat,
    functional::{read_with, write_with},
};

// floor(sqrt(n)) without trusting the float result at the boundaries
fn integer_sqrt(n: usize) -> usize {
    let mut side = (n as f64).sqrt() as usize;
    while side.checked_mul(side).map_or(true, |sq| sq > n) {
        side -= 1;
    }
    while (side + 1).checked_mul(side + 1).is_some_and(|sq| sq <= n) {
        side += 1;
    }
    side
}

/// Decode headerless gray bytes, one per pixel, top row first.
///
/// # Arguments
///
/// * `bytes` - The gray bytes.
/// * `size` - The image size. If `None` the image is assumed to be square.
///
/// # Errors
///
/// Without a size, returns [`CodecError::RawNotSquare`] if the byte count is not a perfect
/// square. With a size, returns [`CodecError::TruncatedData`] if there are fewer bytes than
/// pixels. Extra bytes are ignored.
///
/// # Example
///
/// ```
/// use rasterkit_image::ImageSize;
/// use rasterkit_io::raw::decode_raw;
///
/// let image = decode_raw(&[0u8; 100], None).unwrap();
/// assert_eq!(image.size(), ImageSize { width: 10, height: 10 });
///
/// assert!(decode_raw(&[0u8; 99], None).is_err());
/// ```
pub fn decode_raw(bytes: &[u8], size: Option<ImageSize>) -> Result<PixelBuffer, CodecError> {
    let size = match size {
        Some(size) => size,
        None => {
            let side = integer_sqrt(bytes.len());
            if side * side != bytes.len() {
                return Err(CodecError::RawNotSquare(bytes.len()));
            }
            ImageSize {
                width: side,
                height: side,
            }
        }
    };

    let num_pixels = size
        .width
        .checked_mul(size.height)
        .ok_or(ImageError::ImageSizeOverflow(size.width, size.height))?;
    if num_pixels > bytes.len() {
        return Err(CodecError::TruncatedData {
            expected: num_pixels,
            actual: bytes.len(),
        });
    }

    let width = size.width;
    Ok(PixelBuffer::from_fn(size, |x, y| {
        Rgb8::splat(bytes[y * width + x])
    })?)
}

/// Encode an image as headerless gray bytes, one per pixel.
pub fn encode_raw(image: &PixelBuffer) -> Vec<u8> {
    image.pixels().map(|px| px.gray()).collect()
}

/// Read a headerless gray image from a file.
///
/// # Arguments
///
/// * `file_path` - The path to the file.
/// * `size` - The image size. If `None` the image is assumed to be square.
pub fn read_image_raw(
    file_path: impl AsRef<Path>,
    size: Option<ImageSize>,
) -> Result<PixelBuffer, IoError> {
    read_with(file_path.as_ref(), ImageFormat::Raw, |bytes| {
        decode_raw(bytes, size)
    })
}

/// Write the gray values of an image to a file, without any header.
pub fn write_image_raw(file_path: impl AsRef<Path>, image: &PixelBuffer) -> Result<(), IoError> {
    write_with(file_path.as_ref(), ImageFormat::Raw, image, |image| {
        Ok(encode_raw(image))
    })
}
