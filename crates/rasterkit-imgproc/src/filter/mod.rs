//! Filter operations
//!
//! This module provides 2D convolution with clamp-to-edge borders and the kernels built on it.

/// Filter kernels
pub mod kernels;

/// Filter operations
mod ops;
pub use ops::*;

pub use kernels::Kernel;
