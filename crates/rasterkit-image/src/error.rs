/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the pixel storage cannot be allocated.
    #[error("Failed to allocate {0} bytes of pixel storage")]
    AllocationFailed(usize),

    /// Error when the byte count of an image does not fit in memory.
    #[error("Image size {0}x{1} overflows the addressable byte count")]
    ImageSizeOverflow(usize, usize),

    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when an operation needs at least one pixel.
    #[error("Image has no pixels")]
    EmptyImage,

    /// Error when the downscale factor is zero.
    #[error("Invalid resize factor {0}, must be at least 1")]
    InvalidResizeFactor(usize),

    /// Error when the kernel coefficients do not match the kernel shape.
    #[error("Kernel shape {0}x{1} does not match {2} coefficients")]
    InvalidKernelShape(usize, usize, usize),

    /// Error when the kernel size is not a positive odd number.
    #[error("Invalid kernel size {0}, must be odd and positive")]
    InvalidKernelSize(usize),

    /// Error when the gaussian sigma is not a positive finite number.
    #[error("Invalid sigma {0}, must be positive and finite")]
    InvalidSigma(f32),
}
