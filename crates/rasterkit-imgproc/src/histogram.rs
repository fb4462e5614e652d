use rasterkit_image::PixelBuffer;

/// Number of bins of a gray value histogram.
pub const GRAY_LEVELS: usize = 256;

/// Compute the gray value histogram of an image.
///
/// The histogram is reset and then bin `i` receives the number of pixels whose gray value
/// `floor((r + g + b) / 3)` equals `i`.
///
/// # Arguments
///
/// * `src` - The input image to compute the histogram.
/// * `hist` - The output histogram.
///
/// # Example
///
/// ```
/// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
/// use rasterkit_imgproc::histogram::compute_histogram_gray;
///
/// let image = PixelBuffer::from_color(ImageSize { width: 3, height: 3 }, Rgb8::new(10, 20, 30))
///     .unwrap();
///
/// let mut histogram = [0; 256];
///
/// compute_histogram_gray(&image, &mut histogram);
/// assert_eq!(histogram[20], 9);
/// ```
pub fn compute_histogram_gray(src: &PixelBuffer, hist: &mut [usize; GRAY_LEVELS]) {
    hist.fill(0);
    for px in src.pixels() {
        hist[px.gray() as usize] += 1;
    }
}

/// Compute the gray value histogram of an image into a new array.
///
/// See [`compute_histogram_gray`].
pub fn histogram_gray(src: &PixelBuffer) -> [usize; GRAY_LEVELS] {
    let mut hist = [0; GRAY_LEVELS];
    compute_histogram_gray(src, &mut hist);
    hist
}
