use crate::pixel::{Channel, ChannelOrder, Rgb8};

/// Byte order of every pixel stored in a [`crate::PixelBuffer`].
pub(crate) const MEMORY_ORDER: ChannelOrder = ChannelOrder::BGR;

/// Bytes per pixel of a [`crate::PixelBuffer`].
pub(crate) const CHANNELS: usize = 3;

#[inline]
fn pixel_index(width: usize, x: usize, y: usize) -> usize {
    CHANNELS * (y * width + x)
}

/// Read-only pixel access without coordinate validation.
///
/// The accessors compute `3 * (y * width + x)` and index the storage directly. They do not
/// check `x < width` or `y < height`: a coordinate past the end of a row reads a pixel of the
/// next row, and an index past the end of the storage panics. Callers are expected to have
/// clamped or validated coordinates beforehand.
///
/// # Examples
///
/// ```
/// use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
///
/// let mut image = PixelBuffer::new(ImageSize { width: 4, height: 4 }).unwrap();
/// image.set_pixel_color(1, 1, Rgb8::new(10, 20, 30));
///
/// let view = image.unchecked();
/// assert_eq!(view.get_gray(1, 1), 20);
/// assert_eq!(view.get_red(1, 1), 10);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PixelView<'a> {
    data: &'a [u8],
    width: usize,
}

impl<'a> PixelView<'a> {
    pub(crate) fn new(data: &'a [u8], width: usize) -> Self {
        Self { data, width }
    }

    #[inline]
    fn channel(&self, x: usize, y: usize, channel: Channel) -> u8 {
        self.data[pixel_index(self.width, x, y) + MEMORY_ORDER.offset(channel)]
    }

    /// Get the gray value `floor((r + g + b) / 3)` of a pixel.
    #[inline]
    pub fn get_gray(&self, x: usize, y: usize) -> u8 {
        self.get_color(x, y).gray()
    }

    /// Get the red channel of a pixel.
    #[inline]
    pub fn get_red(&self, x: usize, y: usize) -> u8 {
        self.channel(x, y, Channel::Red)
    }

    /// Get the green channel of a pixel.
    #[inline]
    pub fn get_green(&self, x: usize, y: usize) -> u8 {
        self.channel(x, y, Channel::Green)
    }

    /// Get the blue channel of a pixel.
    #[inline]
    pub fn get_blue(&self, x: usize, y: usize) -> u8 {
        self.channel(x, y, Channel::Blue)
    }

    /// Get the full color of a pixel.
    #[inline]
    pub fn get_color(&self, x: usize, y: usize) -> Rgb8 {
        let i = pixel_index(self.width, x, y);
        MEMORY_ORDER.decode([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}

/// Mutable pixel access without coordinate validation.
///
/// Same contract as [`PixelView`]: no check against the image dimensions, a panic if the
/// computed index leaves the storage.
#[derive(Debug)]
pub struct PixelViewMut<'a> {
    data: &'a mut [u8],
    width: usize,
}

impl<'a> PixelViewMut<'a> {
    pub(crate) fn new(data: &'a mut [u8], width: usize) -> Self {
        Self { data, width }
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> PixelView<'_> {
        PixelView::new(&*self.data, self.width)
    }

    #[inline]
    fn set_channel(&mut self, x: usize, y: usize, channel: Channel, value: u8) {
        self.data[pixel_index(self.width, x, y) + MEMORY_ORDER.offset(channel)] = value;
    }

    /// Get the gray value of a pixel.
    #[inline]
    pub fn get_gray(&self, x: usize, y: usize) -> u8 {
        self.as_view().get_gray(x, y)
    }

    /// Get the red channel of a pixel.
    #[inline]
    pub fn get_red(&self, x: usize, y: usize) -> u8 {
        self.as_view().get_red(x, y)
    }

    /// Get the green channel of a pixel.
    #[inline]
    pub fn get_green(&self, x: usize, y: usize) -> u8 {
        self.as_view().get_green(x, y)
    }

    /// Get the blue channel of a pixel.
    #[inline]
    pub fn get_blue(&self, x: usize, y: usize) -> u8 {
        self.as_view().get_blue(x, y)
    }

    /// Get the full color of a pixel.
    #[inline]
    pub fn get_color(&self, x: usize, y: usize) -> Rgb8 {
        self.as_view().get_color(x, y)
    }

    /// Set all three channels of a pixel to `value`.
    #[inline]
    pub fn set_gray(&mut self, x: usize, y: usize, value: u8) {
        let i = pixel_index(self.width, x, y);
        self.data[i..i + CHANNELS].fill(value);
    }

    /// Set the red channel of a pixel.
    #[inline]
    pub fn set_red(&mut self, x: usize, y: usize, value: u8) {
        self.set_channel(x, y, Channel::Red, value);
    }

    /// Set the green channel of a pixel.
    #[inline]
    pub fn set_green(&mut self, x: usize, y: usize, value: u8) {
        self.set_channel(x, y, Channel::Green, value);
    }

    /// Set the blue channel of a pixel.
    #[inline]
    pub fn set_blue(&mut self, x: usize, y: usize, value: u8) {
        self.set_channel(x, y, Channel::Blue, value);
    }

    /// Set the full color of a pixel.
    #[inline]
    pub fn set_color(&mut self, x: usize, y: usize, color: Rgb8) {
        let i = pixel_index(self.width, x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&MEMORY_ORDER.encode(color));
    }
}
