use std::path::Path;

use crate::error::IoError;

/// The image file formats supported by the codec layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Windows bitmap, 8 or 24 bits per pixel, uncompressed.
    Bmp,
    /// Binary portable pixmap (P6).
    Ppm,
    /// Binary portable graymap (P5).
    Pgm,
    /// Headerless single channel gray bytes.
    Raw,
}

impl ImageFormat {
    /// All the supported formats.
    pub const ALL: [ImageFormat; 4] = [Self::Bmp, Self::Ppm, Self::Pgm, Self::Raw];

    /// The canonical lower case file extension of the format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
            Self::Ppm => "ppm",
            Self::Pgm => "pgm",
            Self::Raw => "raw",
        }
    }

    /// Match a file extension against the supported formats, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterkit_io::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_extension("PGM"), Some(ImageFormat::Pgm));
    /// assert_eq!(ImageFormat::from_extension("png"), None);
    /// ```
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
    }

    /// Infer the format of a file from its name.
    ///
    /// Only the name is inspected, the file is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidFileExtension`] if the extension is not supported.
    pub fn from_path(file_path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file_path = file_path.as_ref();
        let name = file_path.to_string_lossy();
        Self::from_extension(file_extension(&name))
            .ok_or_else(|| IoError::InvalidFileExtension(file_path.to_path_buf()))
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Bmp => "BMP",
            Self::Ppm => "PPM",
            Self::Pgm => "PGM",
            Self::Raw => "RAW",
        })
    }
}

/// The extension of a file name.
///
/// This is the text after the last `.` of the final path component, where components are
/// separated by `/` or `\`. A name without a dot has an empty extension.
///
/// # Examples
///
/// ```
/// use rasterkit_io::format::file_extension;
///
/// assert_eq!(file_extension("dir.d/image.ppm"), "ppm");
/// assert_eq!(file_extension("C:\\images.d\\photo"), "");
/// ```
pub fn file_extension(file_name: &str) -> &str {
    let name = file_name
        .rfind(|c| c == '/' || c == '\\')
        .map_or(file_name, |i| &file_name[i + 1..]);
    name.rfind('.').map_or("", |i| &name[i + 1..])
}
