use rasterkit_image::{saturate_u8, ImageError, PixelBuffer, Rgb8};

use super::kernels::{box_kernel_2d, gaussian_kernel_2d, gaussian_mask_size, Kernel};

/// Convolve an image with a 2D kernel.
///
/// Every output pixel is `Σ k[ky][kx] * src[clamp(y + ky - ch)][clamp(x + kx - cw)]`, computed
/// per channel, where `(cw, ch)` is the kernel center and out-of-range coordinates are clamped
/// to the nearest edge. Sums are rounded half up and saturated to `0..=255`.
///
/// The source is left unchanged.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `kernel` - The convolution kernel.
///
/// # Errors
///
/// Returns an error if the output buffer cannot be allocated.
///
/// # Example
///
/// ```
/// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
/// use rasterkit_imgproc::filter::{filter2d, Kernel};
///
/// let image = PixelBuffer::from_color(ImageSize { width: 4, height: 4 }, Rgb8::splat(80))
///     .unwrap();
/// let kernel = Kernel::new(3, 1, vec![0.25, 0.5, 0.25]).unwrap();
///
/// let filtered = filter2d(&image, &kernel).unwrap();
///
/// assert_eq!(filtered, image);
/// ```
pub fn filter2d(src: &PixelBuffer, kernel: &Kernel) -> Result<PixelBuffer, ImageError> {
    let mut dst = PixelBuffer::new(src.size())?;

    if src.is_empty() {
        return Ok(dst);
    }

    let (cols, rows) = (src.cols(), src.rows());
    let (kw, kh) = (kernel.width(), kernel.height());
    let (cw, ch) = kernel.center();
    let coeffs = kernel.as_slice();

    let src_view = src.unchecked();
    let mut dst_view = dst.unchecked_mut();

    for y in 0..rows {
        for x in 0..cols {
            let mut acc = [0f32; 3];

            for ky in 0..kh {
                let sy = (y + ky).saturating_sub(ch).min(rows - 1);
                for kx in 0..kw {
                    let sx = (x + kx).saturating_sub(cw).min(cols - 1);
                    let k = coeffs[ky * kw + kx];
                    let px = src_view.get_color(sx, sy);
                    acc[0] += px.r as f32 * k;
                    acc[1] += px.g as f32 * k;
                    acc[2] += px.b as f32 * k;
                }
            }

            dst_view.set_color(
                x,
                y,
                Rgb8::new(saturate_u8(acc[0]), saturate_u8(acc[1]), saturate_u8(acc[2])),
            );
        }
    }

    Ok(dst)
}

/// Blur an image with a gaussian kernel.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `sigma` - The standard deviation of the gaussian.
/// * `mask_size` - The kernel size. `None` or `Some(0)` uses `4 * round(sigma) + 1`.
///
/// # Errors
///
/// Returns [`ImageError::InvalidSigma`] if `sigma` is not positive and finite, and
/// [`ImageError::InvalidKernelSize`] if an explicit mask size is even.
///
/// # Example
///
/// ```
/// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
/// use rasterkit_imgproc::filter::gaussian_blur;
///
/// let image = PixelBuffer::from_color(ImageSize { width: 8, height: 8 }, Rgb8::splat(100))
///     .unwrap();
///
/// let blurred = gaussian_blur(&image, 1.0, None).unwrap();
///
/// assert_eq!(blurred.get_pixel(3, 3).unwrap(), Rgb8::splat(100));
/// ```
pub fn gaussian_blur(
    src: &PixelBuffer,
    sigma: f32,
    mask_size: Option<usize>,
) -> Result<PixelBuffer, ImageError> {
    let mask_size = match mask_size {
        Some(size) if size > 0 => size,
        _ => gaussian_mask_size(sigma),
    };
    let kernel = gaussian_kernel_2d(sigma, mask_size)?;
    filter2d(src, &kernel)
}

/// Blur an image with a `size x size` box kernel.
///
/// # Errors
///
/// Returns [`ImageError::InvalidKernelSize`] if `size` is zero or even.
pub fn box_blur(src: &PixelBuffer, size: usize) -> Result<PixelBuffer, ImageError> {
    let kernel = box_kernel_2d(size)?;
    filter2d(src, &kernel)
}
