use rasterkit_image::{ImageError, PixelBuffer};

const CHANNELS: usize = 3;

/// Flip the input image horizontally.
///
/// The flipped pixels are written to a new buffer that then replaces the old storage.
///
/// # Arguments
///
/// * `image` - The image to flip.
///
/// # Errors
///
/// Returns an error if the new buffer cannot be allocated, the image is then unchanged.
///
/// # Example
///
/// ```
/// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
/// use rasterkit_imgproc::flip::horizontal_flip;
///
/// let mut image = PixelBuffer::from_fn(ImageSize { width: 2, height: 3 }, |x, _| {
///     Rgb8::splat(x as u8)
/// })
/// .unwrap();
///
/// horizontal_flip(&mut image).unwrap();
///
/// assert_eq!(image.get_pixel(0, 2).unwrap(), Rgb8::splat(1));
/// ```
pub fn horizontal_flip(image: &mut PixelBuffer) -> Result<(), ImageError> {
    let mut dst = PixelBuffer::new(image.size())?;
    let row_len = image.cols() * CHANNELS;

    if row_len > 0 {
        dst.as_slice_mut()
            .chunks_exact_mut(row_len)
            .zip(image.as_slice().chunks_exact(row_len))
            .for_each(|(dst_row, src_row)| {
                dst_row
                    .chunks_exact_mut(CHANNELS)
                    .zip(src_row.chunks_exact(CHANNELS).rev())
                    .for_each(|(dst_pixel, src_pixel)| dst_pixel.copy_from_slice(src_pixel));
            });
    }

    *image = dst;

    Ok(())
}

/// Flip the input image vertically.
///
/// The flipped rows are written to a new buffer that then replaces the old storage.
///
/// # Arguments
///
/// * `image` - The image to flip.
///
/// # Errors
///
/// Returns an error if the new buffer cannot be allocated, the image is then unchanged.
///
/// # Example
///
/// ```
/// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
/// use rasterkit_imgproc::flip::vertical_flip;
///
/// let mut image = PixelBuffer::from_fn(ImageSize { width: 2, height: 3 }, |_, y| {
///     Rgb8::splat(y as u8)
/// })
/// .unwrap();
///
/// vertical_flip(&mut image).unwrap();
///
/// assert_eq!(image.get_pixel(1, 0).unwrap(), Rgb8::splat(2));
/// ```
pub fn vertical_flip(image: &mut PixelBuffer) -> Result<(), ImageError> {
    let mut dst = PixelBuffer::new(image.size())?;
    let row_len = image.cols() * CHANNELS;

    if row_len > 0 {
        dst.as_slice_mut()
            .chunks_exact_mut(row_len)
            .zip(image.as_slice().chunks_exact(row_len).rev())
            .for_each(|(dst_row, src_row)| dst_row.copy_from_slice(src_row));
    }

    *image = dst;

    Ok(())
}
