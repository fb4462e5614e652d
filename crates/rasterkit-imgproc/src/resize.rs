use rasterkit_image::{saturate_u8, ImageError, ImageSize, PixelBuffer, Rgb8};

/// Downscale an image by an integer factor.
///
/// The output has size `(width / factor, height / factor)`. Each output pixel is the
/// per-channel mean of the `factor x factor` block of source pixels it covers, rounded half
/// up. Source rows and columns past the last whole block are dropped.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `factor` - The downscale factor.
///
/// # Errors
///
/// Returns [`ImageError::InvalidResizeFactor`] if `factor` is zero.
///
/// # Example
///
/// ```
/// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
/// use rasterkit_imgproc::resize::downscale;
///
/// let image = PixelBuffer::from_color(ImageSize { width: 5, height: 4 }, Rgb8::new(1, 2, 3))
///     .unwrap();
///
/// let small = downscale(&image, 2).unwrap();
///
/// assert_eq!(small.size(), ImageSize { width: 2, height: 2 });
/// assert_eq!(small.get_pixel(1, 1).unwrap(), Rgb8::new(1, 2, 3));
/// ```
pub fn downscale(src: &PixelBuffer, factor: usize) -> Result<PixelBuffer, ImageError> {
    if factor == 0 {
        return Err(ImageError::InvalidResizeFactor(factor));
    }

    let dst_size = ImageSize {
        width: src.width() / factor,
        height: src.height() / factor,
    };
    let mut dst = PixelBuffer::new(dst_size)?;

    // a factor larger than the source leaves no whole block
    if dst.is_empty() {
        return Ok(dst);
    }

    let block = factor as f32 * factor as f32;
    let src_view = src.unchecked();
    let mut dst_view = dst.unchecked_mut();

    for i in 0..dst_size.height {
        for j in 0..dst_size.width {
            let (min_x, min_y) = (j * factor, i * factor);

            let mut sum = [0u64; 3];
            for y in min_y..min_y + factor {
                for x in min_x..min_x + factor {
                    let px = src_view.get_color(x, y);
                    sum[0] += px.r as u64;
                    sum[1] += px.g as u64;
                    sum[2] += px.b as u64;
                }
            }

            let mean = Rgb8 {
                r: saturate_u8(sum[0] as f32 / block),
                g: saturate_u8(sum[1] as f32 / block),
                b: saturate_u8(sum[2] as f32 / block),
            };
            dst_view.set_color(j, i, mean);
        }
    }

    Ok(dst)
}
