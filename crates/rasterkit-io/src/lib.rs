#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// BMP image encoding and decoding.
pub mod bmp;

/// Error types for the io module.
pub mod error;

/// Image format detection from file names.
pub mod format;

/// High level read and write functions dispatching on the image format.
pub mod functional;

/// PPM and PGM image encoding and decoding.
pub mod pnm;

/// Headerless gray image encoding and decoding.
pub mod raw;

pub use crate::error::{CodecError, IoError};
pub use crate::format::ImageFormat;
