use rasterkit_image::{ImageError, PixelBuffer};

/// Compute the mean gray value of an image.
///
/// The gray values of all pixels are summed as integers and divided by the number of
/// pixels, truncating the result.
///
/// # Arguments
///
/// * `image` - The input image.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if the image has no pixels.
///
/// # Example
///
/// ```
/// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
/// use rasterkit_imgproc::core::mean_gray;
///
/// let image = PixelBuffer::from_fn(ImageSize { width: 2, height: 1 }, |x, _| {
///     Rgb8::splat(if x == 0 { 10 } else { 21 })
/// })
/// .unwrap();
///
/// assert_eq!(mean_gray(&image).unwrap(), 15);
/// ```
pub fn mean_gray(image: &PixelBuffer) -> Result<u8, ImageError> {
    let n = image.size().num_pixels();
    if n == 0 {
        return Err(ImageError::EmptyImage);
    }

    let sum = image.pixels().map(|px| px.gray() as u64).sum::<u64>();

    Ok((sum / n as u64) as u8)
}
