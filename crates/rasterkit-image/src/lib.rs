#![deny(missing_docs)]
//! Pixel buffer type and accessors for 8-bit RGB images

/// Error types for the image module.
pub mod error;

/// in-memory pixel buffer representation.
pub mod image;

/// pixel values and channel order tables.
pub mod pixel;

/// unchecked pixel access views.
pub mod view;

pub use crate::error::ImageError;
pub use crate::image::{ImageSize, PixelBuffer};
pub use crate::pixel::{round_half_up, saturate_u8, Channel, ChannelOrder, Rgb8};
pub use crate::view::{PixelView, PixelViewMut};
