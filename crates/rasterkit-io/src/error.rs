use rasterkit_image::ImageError;

/// An error raised while decoding or encoding image bytes.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CodecError {
    /// The BMP signature is not `BM`.
    #[error("Invalid BMP signature, expected 'BM'")]
    BmpSignature,

    /// The BMP bit depth is neither 8 nor 24.
    #[error("Unsupported BMP bit depth {0}, only 8 and 24 bits per pixel are supported")]
    BmpBitsPerPixel(u16),

    /// The BMP payload is compressed.
    #[error("Unsupported BMP compression {0}, only uncompressed files are supported")]
    BmpCompression(u32),

    /// The BMP header declares dimensions that cannot be decoded.
    #[error("Invalid BMP dimensions {0}x{1}")]
    BmpDimensions(i32, i32),

    /// The image is too large for the BMP header fields.
    #[error("Image size {0}x{1} does not fit in a BMP header")]
    BmpTooLarge(usize, usize),

    /// The PNM magic number is not the expected one.
    #[error("Invalid PNM magic number '{found}', expected '{expected}'")]
    PnmMagic {
        /// The magic number of the format being decoded.
        expected: &'static str,
        /// The magic number found in the data.
        found: String,
    },

    /// A PNM header field is missing or not a decimal number.
    #[error("Invalid PNM header field: {0}")]
    PnmHeader(&'static str),

    /// The PNM maximum sample value is not 255.
    #[error("Unsupported PNM max value {0}, only 255 is supported")]
    PnmMaxValue(u64),

    /// The data is shorter than its header requires.
    #[error("Truncated image data, expected {expected} bytes but got {actual}")]
    TruncatedData {
        /// The number of bytes required.
        expected: usize,
        /// The number of bytes available.
        actual: usize,
    },

    /// A headerless gray image without explicit size is not square.
    #[error("Cannot infer the size of a {0} byte raw image, the length is not a perfect square")]
    RawNotSquare(usize),

    /// Error creating the decoded image.
    #[error("Failed to create image. {0}")]
    Image(#[from] ImageError),
}

/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// The file extension does not name a supported format.
    #[error("File does not have a supported extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open, read or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error decoding the file contents.
    #[error("Failed to decode {0}. {1}")]
    Decode(std::path::PathBuf, #[source] CodecError),

    /// Error encoding an image for the file.
    #[error("Failed to encode {0}. {1}")]
    Encode(std::path::PathBuf, #[source] CodecError),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] ImageError),
}
