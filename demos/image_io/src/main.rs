use argh::FromArgs;
use std::path::PathBuf;

use rasterkit::{
    image::ImageSize,
    io::{functional as F, raw, ImageFormat},
};

#[derive(FromArgs)]
/// Convert an image between the BMP, PPM, PGM and RAW formats
struct Args {
    /// path to the input image
    #[argh(option, short = 'i')]
    input_path: PathBuf,

    /// path to the output image, the format is taken from its extension
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// width of a RAW input, inferred as a square if omitted
    #[argh(option)]
    width: Option<usize>,

    /// height of a RAW input, inferred as a square if omitted
    #[argh(option)]
    height: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let size = match (args.width, args.height) {
        (Some(width), Some(height)) => Some(ImageSize { width, height }),
        (None, None) => None,
        _ => return Err("both --width and --height must be given".into()),
    };

    // read the image, RAW files may carry an explicit size
    let image = match ImageFormat::from_path(&args.input_path)? {
        ImageFormat::Raw => raw::read_image_raw(&args.input_path, size)?,
        _ => F::read_image(&args.input_path)?,
    };
    log::info!(
        "Read {} with size {}",
        args.input_path.display(),
        image.size()
    );

    F::write_image(&args.output_path, &image)?;
    log::info!("Wrote {}", args.output_path.display());

    Ok(())
}
