use std::path::Path;

use rasterkit_image::PixelBuffer;

use crate::{bmp, error::CodecError, error::IoError, format::ImageFormat, pnm, raw};

/// Reads an image from the given file path.
///
/// The format is inferred from the file extension, see [`ImageFormat::from_path`]. RAW files
/// are assumed to be square.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the decoded pixels.
///
/// # Errors
///
/// Returns [`IoError::InvalidFileExtension`] before touching the file if the extension is not
/// supported, otherwise any error of the format reader.
pub fn read_image(file_path: impl AsRef<Path>) -> Result<PixelBuffer, IoError> {
    let file_path = file_path.as_ref();
    let format = ImageFormat::from_path(file_path).inspect_err(|err| {
        log::warn!("Error loading image {}: {err}", file_path.display());
    })?;
    read_image_with_format(file_path, format)
}

/// Reads an image from the given file path in an explicit format, ignoring the extension.
///
/// # Arguments
///
/// * `file_path` - The path to the image file.
/// * `format` - The format to decode the file with.
pub fn read_image_with_format(
    file_path: impl AsRef<Path>,
    format: ImageFormat,
) -> Result<PixelBuffer, IoError> {
    let file_path = file_path.as_ref();
    match format {
        ImageFormat::Bmp => bmp::read_image_bmp(file_path),
        ImageFormat::Ppm => pnm::read_image_ppm(file_path),
        ImageFormat::Pgm => pnm::read_image_pgm(file_path),
        ImageFormat::Raw => raw::read_image_raw(file_path, None),
    }
}

/// Loads an image into an existing buffer.
///
/// The buffer is replaced only if the whole file was decoded, on error it is left unchanged.
///
/// # Example
///
/// ```no_run
/// use rasterkit_image::PixelBuffer;
/// use rasterkit_io::functional as F;
///
/// let mut image = PixelBuffer::default();
/// F::load_image("dog.ppm", &mut image).unwrap();
/// ```
pub fn load_image(file_path: impl AsRef<Path>, image: &mut PixelBuffer) -> Result<(), IoError> {
    *image = read_image(file_path)?;
    Ok(())
}

/// Writes an image to the given file path.
///
/// The format is inferred from the file extension. PGM and RAW store the gray value of each
/// pixel only.
///
/// # Arguments
///
/// * `file_path` - The path of the file to write.
/// * `image` - The image to write.
///
/// # Errors
///
/// Returns [`IoError::InvalidFileExtension`] before creating the file if the extension is
/// not supported.
pub fn write_image(file_path: impl AsRef<Path>, image: &PixelBuffer) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let format = ImageFormat::from_path(file_path).inspect_err(|err| {
        log::warn!("Error saving image to {}: {err}", file_path.display());
    })?;
    write_image_with_format(file_path, image, format)
}

/// Writes an image to the given file path in an explicit format, ignoring the extension.
pub fn write_image_with_format(
    file_path: impl AsRef<Path>,
    image: &PixelBuffer,
    format: ImageFormat,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    match format {
        ImageFormat::Bmp => bmp::write_image_bmp(file_path, image),
        ImageFormat::Ppm => pnm::write_image_ppm(file_path, image),
        ImageFormat::Pgm => pnm::write_image_pgm(file_path, image),
        ImageFormat::Raw => raw::write_image_raw(file_path, image),
    }
}

// Read a whole file and decode it, logging the outcome.
pub(crate) fn read_with<F>(
    file_path: &Path,
    format: ImageFormat,
    decode: F,
) -> Result<PixelBuffer, IoError>
where
    F: FnOnce(&[u8]) -> Result<PixelBuffer, CodecError>,
{
    let result = read_file(file_path).and_then(|bytes| {
        decode(&bytes).map_err(|err| IoError::Decode(file_path.to_path_buf(), err))
    });

    match &result {
        Ok(image) => log::debug!(
            "Loaded {format} image {} of size {}",
            file_path.display(),
            image.size()
        ),
        Err(err) => log::warn!("Error loading image {}: {err}", file_path.display()),
    }

    result
}

// Encode an image and write it to a file, logging the outcome.
pub(crate) fn write_with<F>(
    file_path: &Path,
    format: ImageFormat,
    image: &PixelBuffer,
    encode: F,
) -> Result<(), IoError>
where
    F: FnOnce(&PixelBuffer) -> Result<Vec<u8>, CodecError>,
{
    let result = encode(image)
        .map_err(|err| IoError::Encode(file_path.to_path_buf(), err))
        .and_then(|bytes| Ok(std::fs::write(file_path, bytes)?));

    match &result {
        Ok(()) => log::debug!(
            "Saved {format} image {} of size {}",
            file_path.display(),
            image.size()
        ),
        Err(err) => log::warn!("Error saving image to {}: {err}", file_path.display()),
    }

    result
}

fn read_file(file_path: &Path) -> Result<Vec<u8>, IoError> {
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }
    Ok(std::fs::read(file_path)?)
}
