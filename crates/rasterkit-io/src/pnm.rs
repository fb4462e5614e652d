use std::path::Path;

use rasterkit_image::{ChannelOrder, ImageError, ImageSize, PixelBuffer, Rgb8};

use crate::{
    error::{CodecError, IoError},
    format::ImageFormat,
    functional::{read_with, write_with},
};

/// The only maximum sample value supported.
pub const MAX_VALUE: u64 = 255;

/// Channel order of a P6 pixel on disk.
const PPM_ORDER: ChannelOrder = ChannelOrder::RGB;

/// The parsed header of a binary PNM file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PnmHeader {
    size: ImageSize,
    // byte length of the header including the single whitespace after the max value
    len: usize,
}

// Walks the ASCII header: whitespace separated tokens with `#` comments running to the end
// of the line.
struct HeaderReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip_separators(&mut self) {
        while let Some(&byte) = self.data.get(self.pos) {
            if byte.is_ascii_whitespace() {
                self.pos += 1;
            } else if byte == b'#' {
                while self.data.get(self.pos).is_some_and(|&b| b != b'\n') {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> &'a [u8] {
        self.skip_separators();
        let start = self.pos;
        while self
            .data
            .get(self.pos)
            .is_some_and(|&b| !b.is_ascii_whitespace() && b != b'#')
        {
            self.pos += 1;
        }
        &self.data[start..self.pos]
    }

    fn number(&mut self, field: &'static str) -> Result<u64, CodecError> {
        let token = self.token();
        if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
            return Err(CodecError::PnmHeader(field));
        }
        token.iter().try_fold(0u64, |acc, &digit| {
            acc.checked_mul(10)
                .and_then(|acc| acc.checked_add((digit - b'0') as u64))
                .ok_or(CodecError::PnmHeader(field))
        })
    }
}

fn parse_header(bytes: &[u8], magic: &'static str) -> Result<PnmHeader, CodecError> {
    let mut reader = HeaderReader::new(bytes);

    let found = reader.token();
    if found != magic.as_bytes() {
        return Err(CodecError::PnmMagic {
            expected: magic,
            found: String::from_utf8_lossy(found).into_owned(),
        });
    }

    let width = reader.number("width")?;
    let height = reader.number("height")?;
    let max_value = reader.number("max value")?;
    if max_value != MAX_VALUE {
        return Err(CodecError::PnmMaxValue(max_value));
    }

    let (width, height) = match (usize::try_from(width), usize::try_from(height)) {
        (Ok(width), Ok(height)) => (width, height),
        _ => return Err(CodecError::PnmHeader("dimensions")),
    };

    Ok(PnmHeader {
        size: ImageSize { width, height },
        len: reader.pos + 1,
    })
}

// The payload is the trailing `channels * width * height` bytes of the file, which must not
// reach into the header.
fn payload(bytes: &[u8], header: PnmHeader, channels: usize) -> Result<&[u8], CodecError> {
    let ImageSize { width, height } = header.size;
    let payload_len = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(ImageError::ImageSizeOverflow(width, height))?;

    let available = bytes.len().saturating_sub(header.len);
    if available < payload_len {
        return Err(CodecError::TruncatedData {
            expected: header.len.saturating_add(payload_len),
            actual: bytes.len(),
        });
    }

    Ok(&bytes[bytes.len() - payload_len..])
}

/// Decode a binary PPM (P6) image with a max value of 255.
///
/// The header tokens may be separated by any ASCII whitespace and interleaved with `#`
/// comments.
///
/// # Example
///
/// ```
/// use rasterkit_image::Rgb8;
/// use rasterkit_io::pnm::decode_ppm;
///
/// let image = decode_ppm(b"P6 # one pixel\n1\t1\r\n255\n\x0a\x14\x1e").unwrap();
///
/// assert_eq!(image.get_pixel(0, 0).unwrap(), Rgb8::new(10, 20, 30));
/// ```
pub fn decode_ppm(bytes: &[u8]) -> Result<PixelBuffer, CodecError> {
    let header = parse_header(bytes, "P6")?;
    let data = payload(bytes, header, 3)?;
    let width = header.size.width;

    Ok(PixelBuffer::from_fn(header.size, |x, y| {
        let i = 3 * (y * width + x);
        PPM_ORDER.decode([data[i], data[i + 1], data[i + 2]])
    })?)
}

/// Decode a binary PGM (P5) image with a max value of 255.
///
/// Every pixel gets its gray byte in all three channels.
pub fn decode_pgm(bytes: &[u8]) -> Result<PixelBuffer, CodecError> {
    let header = parse_header(bytes, "P5")?;
    let data = payload(bytes, header, 1)?;
    let width = header.size.width;

    Ok(PixelBuffer::from_fn(header.size, |x, y| {
        Rgb8::splat(data[y * width + x])
    })?)
}

/// Encode an image as a binary PPM (P6).
pub fn encode_ppm(image: &PixelBuffer) -> Vec<u8> {
    let mut bytes = format!("P6\n{} {}\n{}\n", image.width(), image.height(), MAX_VALUE)
        .into_bytes();
    bytes.reserve(image.as_slice().len());
    for px in image.pixels() {
        bytes.extend_from_slice(&PPM_ORDER.encode(px));
    }
    bytes
}

/// Encode an image as a binary PGM (P5), storing the gray value of each pixel.
pub fn encode_pgm(image: &PixelBuffer) -> Vec<u8> {
    let mut bytes = format!("P5\n{} {}\n{}\n", image.width(), image.height(), MAX_VALUE)
        .into_bytes();
    bytes.extend(image.pixels().map(|px| px.gray()));
    bytes
}

/// Read a PPM image from a file.
pub fn read_image_ppm(file_path: impl AsRef<Path>) -> Result<PixelBuffer, IoError> {
    read_with(file_path.as_ref(), ImageFormat::Ppm, decode_ppm)
}

/// Read a PGM image from a file.
pub fn read_image_pgm(file_path: impl AsRef<Path>) -> Result<PixelBuffer, IoError> {
    read_with(file_path.as_ref(), ImageFormat::Pgm, decode_pgm)
}

/// Write an image to a file as a PPM.
pub fn write_image_ppm(file_path: impl AsRef<Path>, image: &PixelBuffer) -> Result<(), IoError> {
    write_with(file_path.as_ref(), ImageFormat::Ppm, image, |image| {
        Ok(encode_ppm(image))
    })
}

/// Write an image to a file as a PGM.
pub fn write_image_pgm(file_path: impl AsRef<Path>, image: &PixelBuffer) -> Result<(), IoError> {
    write_with(file_path.as_ref(), ImageFormat::Pgm, image, |image| {
        Ok(encode_pgm(image))
    })
}
