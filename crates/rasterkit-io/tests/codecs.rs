use rasterkit_image::{ImageSize, PixelBuffer, Rgb8};
use rasterkit_io::{functional as F, CodecError, ImageFormat, IoError};

fn pattern(width: usize, height: usize) -> Result<PixelBuffer, IoError> {
    Ok(PixelBuffer::from_fn(ImageSize { width, height }, |x, y| {
        Rgb8::new((x * 37 + y) as u8, (y * 11) as u8, (x ^ y) as u8)
    })?)
}

#[test]
fn hand_built_bmp_file() -> Result<(), IoError> {
    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("hand.BMP");

    let mut bytes = vec![b'B', b'M'];
    bytes.extend_from_slice(&70u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&54u32.to_le_bytes());
    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&2i32.to_le_bytes());
    bytes.extend_from_slice(&2i32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&[0u8; 24]);
    #[rustfmt::skip]
    bytes.extend_from_slice(&[
        // bottom row
        1, 2, 3,      4, 5, 6,      0, 0,
        // top row
        7, 8, 9,      10, 11, 12,   0, 0,
    ]);
    std::fs::write(&file_path, &bytes)?;

    let image = F::read_image(&file_path)?;
    assert_eq!(image.get_pixel(0, 0)?, Rgb8::new(9, 8, 7));
    assert_eq!(image.get_pixel(1, 0)?, Rgb8::new(12, 11, 10));
    assert_eq!(image.get_pixel(0, 1)?, Rgb8::new(3, 2, 1));
    assert_eq!(image.get_pixel(1, 1)?, Rgb8::new(6, 5, 4));

    Ok(())
}

#[test]
fn ppm_is_lossless() -> Result<(), IoError> {
    let tmp_dir = tempfile::tempdir()?;

    for (width, height) in [(1, 1), (3, 7), (16, 5)] {
        let image = pattern(width, height)?;
        let file_path = tmp_dir.path().join(format!("pattern_{width}x{height}.ppm"));
        F::write_image(&file_path, &image)?;
        assert_eq!(F::read_image(&file_path)?, image);
    }

    Ok(())
}

#[test]
fn bmp_is_lossless_with_padding() -> Result<(), IoError> {
    let tmp_dir = tempfile::tempdir()?;

    // row lengths of 3, 6, 9 and 12 bytes cover every padding amount
    for width in 1..=4 {
        let image = pattern(width, 3)?;
        let file_path = tmp_dir.path().join(format!("pattern_{width}.bmp"));
        F::write_image(&file_path, &image)?;
        assert_eq!(F::read_image(&file_path)?, image);
    }

    Ok(())
}

#[test]
fn raw_square_inference() -> Result<(), IoError> {
    let tmp_dir = tempfile::tempdir()?;

    let square = tmp_dir.path().join("square.raw");
    std::fs::write(&square, vec![128u8; 100])?;
    let image = F::read_image(&square)?;
    assert_eq!(
        image.size(),
        ImageSize {
            width: 10,
            height: 10
        }
    );
    assert!(image.pixels().all(|px| px == Rgb8::splat(128)));

    let not_square = tmp_dir.path().join("not_square.raw");
    std::fs::write(&not_square, vec![128u8; 99])?;
    assert!(matches!(
        F::read_image(&not_square),
        Err(IoError::Decode(_, CodecError::RawNotSquare(99)))
    ));

    Ok(())
}

#[test]
fn unsupported_bmp_leaves_buffer() -> Result<(), IoError> {
    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("deep.bmp");

    let mut bytes = rasterkit_io::bmp::encode_bmp(&pattern(2, 2)?)
        .map_err(|err| IoError::Encode(file_path.clone(), err))?;
    bytes[28..30].copy_from_slice(&32u16.to_le_bytes());
    std::fs::write(&file_path, &bytes)?;

    let mut image = pattern(5, 5)?;
    let before = image.clone();
    assert!(matches!(
        F::load_image(&file_path, &mut image),
        Err(IoError::Decode(_, CodecError::BmpBitsPerPixel(32)))
    ));
    assert_eq!(image, before);

    Ok(())
}

#[test]
fn forced_format() -> Result<(), IoError> {
    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("gray.bin");

    let image = pattern(4, 2)?;
    F::write_image_with_format(&file_path, &image, ImageFormat::Pgm)?;

    let decoded = F::read_image_with_format(&file_path, ImageFormat::Pgm)?;
    assert_eq!(decoded.size(), image.size());
    for (original, gray) in image.pixels().zip(decoded.pixels()) {
        assert_eq!(gray, Rgb8::splat(original.gray()));
    }

    let raw = rasterkit_io::raw::read_image_raw(&file_path, Some(ImageSize { width: 4, height: 2 }))?;
    // the raw reader sees the header as pixels, the size is still honoured
    assert_eq!(raw.size(), image.size());

    Ok(())
}
