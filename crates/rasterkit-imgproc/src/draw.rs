use rasterkit_image::{PixelBuffer, Rgb8};

/// Paint every pixel of the image with `color`.
///
/// # Arguments
///
/// * `img` - The image to paint.
/// * `color` - The fill color.
pub fn clear(img: &mut PixelBuffer, color: Rgb8) {
    for y in 0..img.rows() as i64 {
        for x in 0..img.cols() as i64 {
            img.set_pixel_color(x, y, color);
        }
    }
}

/// Draws a line on an image inplace.
///
/// The line is scanned along its dominant axis, the one with the larger extent. One pixel is
/// set per integer step on that axis and the other coordinate is linearly interpolated and
/// truncated toward zero. Lines close to, but not exactly at, 45 degrees can therefore leave
/// gaps on the minor axis. Pixels falling outside the image are skipped.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p0` - The start point of the line as a tuple of (x, y).
/// * `p1` - The end point of the line as a tuple of (x, y).
/// * `color` - The color of the line.
///
/// # Example
///
/// ```
/// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
/// use rasterkit_imgproc::draw::draw_line;
///
/// let mut img = PixelBuffer::new(ImageSize { width: 5, height: 5 }).unwrap();
/// draw_line(&mut img, (0, 0), (4, 2), Rgb8::WHITE);
///
/// assert_eq!(img.get_pixel(2, 1).unwrap(), Rgb8::WHITE);
/// assert_eq!(img.get_pixel(3, 1).unwrap(), Rgb8::WHITE);
/// ```
pub fn draw_line(img: &mut PixelBuffer, p0: (i64, i64), p1: (i64, i64), color: Rgb8) {
    let (x1, y1) = p0;
    let (x2, y2) = p1;

    // a single point has no dominant axis to interpolate along
    if p0 == p1 {
        img.set_pixel_color(x1, y1, color);
        return;
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();

    // scan from the lower end of the dominant axis
    if dx > dy {
        let ((xa, ya), (xb, yb)) = if x2 > x1 { (p0, p1) } else { (p1, p0) };
        let slope = (yb as f32 - ya as f32) / (xb - xa) as f32;
        for x in xa..=xb {
            let y = (slope * (x - xa) as f32 + ya as f32) as i64;
            img.set_pixel_color(x, y, color);
        }
    } else {
        let ((xa, ya), (xb, yb)) = if y2 > y1 { (p0, p1) } else { (p1, p0) };
        let slope = (xb as f32 - xa as f32) / (yb - ya) as f32;
        for y in ya..=yb {
            let x = (slope * (y - ya) as f32 + xa as f32) as i64;
            img.set_pixel_color(x, y, color);
        }
    }
}

/// Draws the outline of a closed polygon on an image inplace.
///
/// The vertices are truncated toward zero to integer coordinates and consecutive vertices are
/// connected with [`draw_line`], including the edge from the last vertex back to the first.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `points` - The polygon vertices as (x, y) tuples.
/// * `color` - The color of the outline.
pub fn draw_polygon(img: &mut PixelBuffer, points: &[(f32, f32)], color: Rgb8) {
    let n = points.len();
    for i in 0..n {
        let (x0, y0) = points[i];
        let (x1, y1) = points[(i + 1) % n];
        draw_line(
            img,
            (x0 as i64, y0 as i64),
            (x1 as i64, y1 as i64),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_image::{ImageError, ImageSize};

    fn canvas(width: usize, height: usize) -> Result<PixelBuffer, ImageError> {
        PixelBuffer::new(ImageSize { width, height })
    }

    // 1 where the pixel is white, 0 otherwise
    fn mask(img: &PixelBuffer) -> Vec<u8> {
        img.pixels().map(|px| (px == Rgb8::WHITE) as u8).collect()
    }

    #[test]
    fn test_clear() -> Result<(), ImageError> {
        let mut img = canvas(3, 2)?;
        clear(&mut img, Rgb8::new(1, 2, 3));
        assert!(img.pixels().all(|px| px == Rgb8::new(1, 2, 3)));
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_draw_line_diagonal() -> Result<(), ImageError> {
        let mut img = canvas(5, 5)?;
        draw_line(&mut img, (0, 0), (4, 4), Rgb8::WHITE);
        assert_eq!(
            mask(&img),
            vec![
                1, 0, 0, 0, 0,
                0, 1, 0, 0, 0,
                0, 0, 1, 0, 0,
                0, 0, 0, 1, 0,
                0, 0, 0, 0, 1,
            ]
        );
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_draw_line_shallow() -> Result<(), ImageError> {
        let mut img = canvas(5, 3)?;
        draw_line(&mut img, (0, 0), (4, 2), Rgb8::WHITE);
        assert_eq!(
            mask(&img),
            vec![
                1, 1, 0, 0, 0,
                0, 0, 1, 1, 0,
                0, 0, 0, 0, 1,
            ]
        );
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_draw_line_steep() -> Result<(), ImageError> {
        let mut img = canvas(2, 4)?;
        draw_line(&mut img, (1, 3), (0, 0), Rgb8::WHITE);
        assert_eq!(
            mask(&img),
            vec![
                1, 0,
                1, 0,
                1, 0,
                0, 1,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_draw_line_direction_independent() -> Result<(), ImageError> {
        let mut forward = canvas(8, 8)?;
        let mut backward = canvas(8, 8)?;
        draw_line(&mut forward, (1, 6), (7, 2), Rgb8::WHITE);
        draw_line(&mut backward, (7, 2), (1, 6), Rgb8::WHITE);
        assert_eq!(forward, backward);
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_draw_line_clips() -> Result<(), ImageError> {
        let mut img = canvas(3, 3)?;
        draw_line(&mut img, (-5, 1), (10, 1), Rgb8::WHITE);
        assert_eq!(
            mask(&img),
            vec![
                0, 0, 0,
                1, 1, 1,
                0, 0, 0,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_draw_line_single_point() -> Result<(), ImageError> {
        let mut img = canvas(3, 3)?;
        draw_line(&mut img, (2, 1), (2, 1), Rgb8::WHITE);
        assert_eq!(img.get_pixel(2, 1)?, Rgb8::WHITE);
        assert_eq!(mask(&img).iter().filter(|&&m| m == 1).count(), 1);
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_draw_polygon_closes_outline() -> Result<(), ImageError> {
        let mut img = canvas(5, 5)?;
        draw_polygon(
            &mut img,
            &[(1.0, 1.0), (3.9, 1.2), (3.0, 3.0), (1.0, 3.0)],
            Rgb8::WHITE,
        );
        assert_eq!(
            mask(&img),
            vec![
                0, 0, 0, 0, 0,
                0, 1, 1, 1, 0,
                0, 1, 0, 1, 0,
                0, 1, 1, 1, 0,
                0, 0, 0, 0, 0,
            ]
        );
        Ok(())
    }
}
