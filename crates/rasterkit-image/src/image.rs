use crate::error::ImageError;
use crate::pixel::{round_half_up, Rgb8};
use crate::view::{PixelView, PixelViewMut, CHANNELS, MEMORY_ORDER};

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use rasterkit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by the size.
    pub fn num_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

// number of storage bytes for an image of the given size
fn byte_len(size: ImageSize) -> Result<usize, ImageError> {
    size.width
        .checked_mul(size.height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(ImageError::ImageSizeOverflow(size.width, size.height))
}

// allocate zeroed storage, reporting failure instead of aborting
fn alloc_zeroed(size: ImageSize) -> Result<Vec<u8>, ImageError> {
    let len = byte_len(size)?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| ImageError::AllocationFailed(len))?;
    data.resize(len, 0);
    Ok(data)
}

/// An 8-bit RGB image stored as a flat byte array.
///
/// Every pixel occupies three consecutive bytes in **blue, green, red** order, rows are stored
/// top to bottom without padding. The storage length is always `3 * width * height`.
///
/// Two levels of pixel access are provided:
///
/// * [`PixelBuffer::unchecked`] / [`PixelBuffer::unchecked_mut`] return views that index the
///   storage without validating coordinates against the image dimensions.
/// * [`PixelBuffer::set_pixel_color`] and [`PixelBuffer::get_pixel`] check the coordinates.
///
/// # Examples
///
/// ```
/// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
///
/// let mut image = PixelBuffer::new(ImageSize { width: 4, height: 4 }).unwrap();
/// image.set_pixel_color(1, 1, Rgb8::new(10, 20, 30));
/// image.set_pixel_color(-1, 7, Rgb8::WHITE); // ignored
///
/// assert_eq!(image.get_pixel(1, 1).unwrap(), Rgb8::new(10, 20, 30));
/// assert_eq!(image.as_slice().len(), 3 * 4 * 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new black image of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::AllocationFailed`] if the storage cannot be allocated and
    /// [`ImageError::ImageSizeOverflow`] if its byte count does not fit in `usize`.
    pub fn new(size: ImageSize) -> Result<Self, ImageError> {
        Ok(Self {
            width: size.width,
            height: size.height,
            data: alloc_zeroed(size)?,
        })
    }

    /// Create a new image with every pixel set to `color`.
    pub fn from_color(size: ImageSize, color: Rgb8) -> Result<Self, ImageError> {
        let mut image = Self::new(size)?;
        let bytes = MEMORY_ORDER.encode(color);
        image
            .data
            .chunks_exact_mut(CHANNELS)
            .for_each(|px| px.copy_from_slice(&bytes));
        Ok(image)
    }

    /// Create an image from bytes already laid out in blue, green, red order.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match `3 * width * height`, an error is returned.
    pub fn from_bgr_vec(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = byte_len(size)?;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }
        Ok(Self {
            width: size.width,
            height: size.height,
            data,
        })
    }

    /// Create an image by evaluating `f(x, y)` for every pixel, row by row.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
    ///
    /// let image = PixelBuffer::from_fn(ImageSize { width: 3, height: 2 }, |x, y| {
    ///     Rgb8::splat((x + 10 * y) as u8)
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(image.get_pixel(2, 1).unwrap(), Rgb8::splat(12));
    /// ```
    pub fn from_fn<F>(size: ImageSize, mut f: F) -> Result<Self, ImageError>
    where
        F: FnMut(usize, usize) -> Rgb8,
    {
        let mut image = Self::new(size)?;
        {
            let mut view = image.unchecked_mut();
            for y in 0..size.height {
                for x in 0..size.width {
                    view.set_color(x, y, f(x, y));
                }
            }
        }
        Ok(image)
    }

    /// Reinitialize the image to a new size, all pixels black.
    ///
    /// The previous storage is released. On error the image is left unchanged.
    pub fn init(&mut self, size: ImageSize) -> Result<(), ImageError> {
        *self = Self::new(size)?;
        Ok(())
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height
    }

    /// Whether the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw storage in blue, green, red order.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The raw storage in blue, green, red order.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return its storage.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Iterate over the pixels, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| MEMORY_ORDER.decode([px[0], px[1], px[2]]))
    }

    /// Read-only access without coordinate validation.
    pub fn unchecked(&self) -> PixelView<'_> {
        PixelView::new(&self.data, self.width)
    }

    /// Mutable access without coordinate validation.
    pub fn unchecked_mut(&mut self) -> PixelViewMut<'_> {
        PixelViewMut::new(&mut self.data, self.width)
    }

    /// Get the color of a pixel, checking the coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if `(x, y)` is outside the image.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Rgb8, ImageError> {
        if x >= self.width || y >= self.height {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width,
                self.height,
            ));
        }
        Ok(self.unchecked().get_color(x, y))
    }

    /// Set the color of a pixel.
    ///
    /// Writes outside `[0, width) x [0, height)` are silently discarded, which lets drawing
    /// routines pass coordinates that fall off the image.
    #[inline]
    pub fn set_pixel_color(&mut self, x: i64, y: i64, color: Rgb8) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.unchecked_mut()
            .set_color(x as usize, y as usize, color);
    }

    /// Sample the image at real coordinates using bilinear interpolation.
    ///
    /// Returns black when `x` or `y` is outside `[0, width - 1]` or `[0, height - 1]`.
    /// Each channel is interpolated independently and rounded half up.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
    ///
    /// let image = PixelBuffer::from_fn(ImageSize { width: 2, height: 1 }, |x, _| {
    ///     Rgb8::splat(if x == 0 { 0 } else { 100 })
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(image.get_pixel_bilinear(0.5, 0.0), Rgb8::splat(50));
    /// assert_eq!(image.get_pixel_bilinear(1.5, 0.0), Rgb8::BLACK);
    /// ```
    pub fn get_pixel_bilinear(&self, x: f32, y: f32) -> Rgb8 {
        let max_x = self.width as f32 - 1.0;
        let max_y = self.height as f32 - 1.0;
        // written so that NaN coordinates also fall outside
        if !(x >= 0.0 && y >= 0.0 && x <= max_x && y <= max_y) {
            return Rgb8::BLACK;
        }

        let x0 = x.floor() as usize;
        let y0 = y.floor() as usize;
        let dx = x - x0 as f32;
        let dy = y - y0 as f32;

        // the far neighbour only exists when its weight is non-zero
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let view = self.unchecked();
        let c1 = view.get_color(x0, y0);
        let c2 = view.get_color(x1, y0);
        let c3 = view.get_color(x0, y1);
        let c4 = view.get_color(x1, y1);

        let lerp = |a: u8, b: u8, c: u8, d: u8| -> u8 {
            let top = b as f32 * dx + a as f32 * (1.0 - dx);
            let bottom = d as f32 * dx + c as f32 * (1.0 - dx);
            round_half_up(bottom * dy + top * (1.0 - dy)).clamp(0.0, 255.0) as u8
        };

        Rgb8 {
            r: lerp(c1.r, c2.r, c3.r, c4.r),
            g: lerp(c1.g, c2.g, c3.g, c4.g),
            b: lerp(c1.b, c2.b, c3.b, c4.b),
        }
    }
}
