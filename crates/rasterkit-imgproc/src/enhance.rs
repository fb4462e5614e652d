use rasterkit_image::PixelBuffer;

/// Invert the colors of an image in place.
///
/// Every stored byte `v` becomes `255 - v`, which inverts red, green and blue independently.
///
/// # Example
///
/// ```
/// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
/// use rasterkit_imgproc::enhance::invert;
///
/// let mut image = PixelBuffer::from_color(ImageSize { width: 1, height: 1 }, Rgb8::new(0, 55, 255))
///     .unwrap();
///
/// invert(&mut image);
/// assert_eq!(image.get_pixel(0, 0).unwrap(), Rgb8::new(255, 200, 0));
/// ```
pub fn invert(image: &mut PixelBuffer) {
    image.as_slice_mut().iter_mut().for_each(|v| *v = 255 - *v);
}
