/// A single color channel of an RGB pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

/// An 8-bit RGB pixel value.
///
/// The struct is independent of how the bytes are laid out in memory or on disk,
/// use [`ChannelOrder`] to translate between the two.
///
/// # Examples
///
/// ```
/// use rasterkit_image::Rgb8;
///
/// let px = Rgb8::new(10, 20, 30);
/// assert_eq!(px.gray(), 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red intensity.
    pub r: u8,
    /// Green intensity.
    pub g: u8,
    /// Blue intensity.
    pub b: u8,
}

impl Rgb8 {
    /// Opaque black, the value of a freshly allocated pixel.
    pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };

    /// Pure white.
    pub const WHITE: Rgb8 = Rgb8 {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a pixel from its red, green and blue intensities.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a gray pixel with all three channels set to `value`.
    pub const fn splat(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// The gray value of the pixel, `floor((r + g + b) / 3)`.
    pub fn gray(&self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }

    /// Get the intensity of a single channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Set the intensity of a single channel.
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
    }
}

/// The byte order of the three channels of a pixel.
///
/// Each entry names the channel stored at that byte offset. The in-memory order of a
/// [`crate::PixelBuffer`] is [`ChannelOrder::BGR`]; codecs declare their own wire order
/// and translate through [`ChannelOrder::encode`] and [`ChannelOrder::decode`].
///
/// # Examples
///
/// ```
/// use rasterkit_image::{ChannelOrder, Rgb8};
///
/// let px = Rgb8::new(1, 2, 3);
/// assert_eq!(ChannelOrder::BGR.encode(px), [3, 2, 1]);
/// assert_eq!(ChannelOrder::RGB.decode([1, 2, 3]), px);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelOrder([Channel; 3]);

impl ChannelOrder {
    /// Red first, blue last.
    pub const RGB: ChannelOrder = ChannelOrder([Channel::Red, Channel::Green, Channel::Blue]);

    /// Blue first, red last.
    pub const BGR: ChannelOrder = ChannelOrder([Channel::Blue, Channel::Green, Channel::Red]);

    /// Create an order from the channel stored at each byte offset.
    ///
    /// Returns `None` unless every channel appears exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterkit_image::{Channel, ChannelOrder};
    ///
    /// let grb = ChannelOrder::new([Channel::Green, Channel::Red, Channel::Blue]);
    /// assert!(grb.is_some());
    /// assert!(ChannelOrder::new([Channel::Red; 3]).is_none());
    /// ```
    pub const fn new(channels: [Channel; 3]) -> Option<Self> {
        let (a, b, c) = (
            channels[0] as usize,
            channels[1] as usize,
            channels[2] as usize,
        );
        if a == b || b == c || a == c {
            return None;
        }
        Some(Self(channels))
    }

    /// The channel stored at each byte offset.
    pub const fn channels(&self) -> [Channel; 3] {
        self.0
    }

    /// Byte offset of `channel` inside a pixel stored in this order.
    pub const fn offset(&self, channel: Channel) -> usize {
        let mut i = 0;
        while i < 3 {
            if self.0[i] as usize == channel as usize {
                return i;
            }
            i += 1;
        }
        // unreachable, every order is a permutation of the three channels
        0
    }

    /// Lay out a pixel as bytes in this order.
    pub fn encode(&self, pixel: Rgb8) -> [u8; 3] {
        let mut bytes = [0u8; 3];
        for (byte, &channel) in bytes.iter_mut().zip(self.0.iter()) {
            *byte = pixel.channel(channel);
        }
        bytes
    }

    /// Read a pixel from bytes laid out in this order.
    pub fn decode(&self, bytes: [u8; 3]) -> Rgb8 {
        let mut pixel = Rgb8::BLACK;
        for (&byte, &channel) in bytes.iter().zip(self.0.iter()) {
            pixel.set_channel(channel, byte);
        }
        pixel
    }
}

/// Round to the nearest integer, ties go up.
///
/// Unlike [`f32::round`], `-0.5` rounds to `0.0` and `2.5` rounds to `3.0`.
pub fn round_half_up(x: f32) -> f32 {
    let floor = x.floor();
    if x - floor < 0.5 {
        floor
    } else {
        x.ceil()
    }
}

/// Round half up and clamp to the `u8` range.
pub fn saturate_u8(x: f32) -> u8 {
    round_half_up(x).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_truncates() {
        assert_eq!(Rgb8::new(10, 20, 30).gray(), 20);
        assert_eq!(Rgb8::new(1, 1, 0).gray(), 0);
        assert_eq!(Rgb8::new(255, 255, 254).gray(), 254);
        assert_eq!(Rgb8::WHITE.gray(), 255);
    }

    #[test]
    fn channel_order_offsets() {
        assert_eq!(ChannelOrder::BGR.offset(Channel::Blue), 0);
        assert_eq!(ChannelOrder::BGR.offset(Channel::Green), 1);
        assert_eq!(ChannelOrder::BGR.offset(Channel::Red), 2);
        assert_eq!(ChannelOrder::RGB.offset(Channel::Red), 0);
    }

    #[test]
    fn channel_order_must_be_permutation() {
        assert_eq!(
            ChannelOrder::new([Channel::Blue, Channel::Green, Channel::Red]),
            Some(ChannelOrder::BGR)
        );
        assert_eq!(
            ChannelOrder::new([Channel::Red, Channel::Red, Channel::Blue]),
            None
        );
        assert_eq!(
            ChannelOrder::new([Channel::Green, Channel::Blue, Channel::Green]),
            None
        );

        let brg = ChannelOrder::new([Channel::Blue, Channel::Red, Channel::Green])
            .expect("blue, red, green is a permutation");
        assert_eq!(brg.offset(Channel::Green), 2);
        assert_eq!(brg.encode(Rgb8::new(1, 2, 3)), [3, 1, 2]);
        assert_eq!(brg.decode([3, 1, 2]), Rgb8::new(1, 2, 3));
    }

    #[test]
    fn channel_order_swaps() {
        let px = Rgb8::new(10, 20, 30);
        let wire = ChannelOrder::RGB.encode(px);
        assert_eq!(wire, [10, 20, 30]);
        let mem = ChannelOrder::BGR.encode(px);
        assert_eq!(mem, [30, 20, 10]);
        assert_eq!(ChannelOrder::BGR.decode(mem), px);
    }

    #[test]
    fn rounding_ties_go_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.6), -2.0);
        assert_eq!(saturate_u8(300.0), 255);
        assert_eq!(saturate_u8(-3.0), 0);
        assert_eq!(saturate_u8(127.5), 128);
    }
}
