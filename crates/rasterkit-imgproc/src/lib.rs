#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image basic statistics module.
pub mod core;

/// image cropping module.
pub mod crop;

/// utilities to draw on images.
pub mod draw;

/// image enhancement module.
pub mod enhance;

/// image filtering module.
pub mod filter;

/// image flipping module.
pub mod flip;

/// compute image histogram module.
pub mod histogram;

/// utility functions for resizing images.
pub mod resize;

/// operations to threshold images.
pub mod threshold;
