use rasterkit_image::{PixelBuffer, Rgb8};

/// Binarize an image in place.
///
/// Pixels whose gray value is strictly greater than `threshold` become white, all others
/// become black.
///
/// # Arguments
///
/// * `image` - The image to binarize.
/// * `threshold` - The threshold on the gray value.
///
/// # Examples
///
/// ```
/// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
/// use rasterkit_imgproc::threshold::binarize;
///
/// let mut image = PixelBuffer::from_fn(ImageSize { width: 2, height: 1 }, |x, _| {
///     Rgb8::splat(if x == 0 { 100 } else { 101 })
/// })
/// .unwrap();
///
/// binarize(&mut image, 100);
/// assert_eq!(image.get_pixel(0, 0).unwrap(), Rgb8::BLACK);
/// assert_eq!(image.get_pixel(1, 0).unwrap(), Rgb8::WHITE);
/// ```
pub fn binarize(image: &mut PixelBuffer, threshold: u8) {
    let (width, height) = (image.width(), image.height());
    let mut view = image.unchecked_mut();
    for y in 0..height {
        for x in 0..width {
            let value = if view.get_gray(x, y) > threshold {
                Rgb8::WHITE
            } else {
                Rgb8::BLACK
            };
            view.set_color(x, y, value);
        }
    }
}
