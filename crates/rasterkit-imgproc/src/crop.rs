use rasterkit_image::{ImageError, ImageSize, PixelBuffer};

/// Crop an image to a specified region.
///
/// The output pixel `(j, i)` is the source pixel `(x + j, y + i)`. The window is not
/// validated against the source dimensions: a window running past the end of a row reads
/// into the following row, one running past the end of the image panics.
///
/// # Arguments
///
/// * `src` - The source image to crop.
/// * `x` - The x-coordinate of the top-left corner of the region to crop.
/// * `y` - The y-coordinate of the top-left corner of the region to crop.
/// * `size` - The size of the region to crop.
///
/// # Panics
///
/// Panics if the window extends past the end of the source storage.
///
/// # Examples
///
/// ```rust
/// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
/// use rasterkit_imgproc::crop::crop_image;
///
/// let image = PixelBuffer::from_fn(ImageSize { width: 4, height: 4 }, |x, y| {
///     Rgb8::splat((y * 4 + x) as u8)
/// })
/// .unwrap();
///
/// let cropped = crop_image(&image, 1, 1, ImageSize { width: 2, height: 2 }).unwrap();
///
/// let grays = cropped.pixels().map(|px| px.gray()).collect::<Vec<_>>();
/// assert_eq!(grays, vec![5u8, 6, 9, 10]);
/// ```
pub fn crop_image(
    src: &PixelBuffer,
    x: usize,
    y: usize,
    size: ImageSize,
) -> Result<PixelBuffer, ImageError> {
    let mut dst = PixelBuffer::new(size)?;

    let src_view = src.unchecked();
    let mut dst_view = dst.unchecked_mut();
    for i in 0..size.height {
        for j in 0..size.width {
            dst_view.set_color(j, i, src_view.get_color(x + j, y + i));
        }
    }

    Ok(dst)
}
