use argh::FromArgs;
use std::path::PathBuf;

use rasterkit::{imgproc, io::functional as F};

#[derive(FromArgs)]
/// Apply a filter to an image
struct Args {
    /// path to the input image
    #[argh(option, short = 'i')]
    input_path: PathBuf,

    /// path to the output image
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// the filter to apply: gaussian, box, binarize, invert or downscale
    #[argh(option, default = "String::from(\"gaussian\")")]
    filter: String,

    /// the sigma for the gaussian filter
    #[argh(option, default = "1.0")]
    sigma: f32,

    /// the kernel size, the downscale factor or the threshold depending on the filter
    #[argh(option)]
    size: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut image = F::read_image(&args.input_path)?;

    let output = match args.filter.as_str() {
        "gaussian" => imgproc::filter::gaussian_blur(&image, args.sigma, args.size)?,
        "box" => imgproc::filter::box_blur(&image, args.size.unwrap_or(3))?,
        "downscale" => imgproc::resize::downscale(&image, args.size.unwrap_or(2))?,
        "binarize" => {
            let threshold = match args.size {
                Some(t) => u8::try_from(t)?,
                None => imgproc::core::mean_gray(&image)?,
            };
            log::info!("Binarizing with threshold {threshold}");
            imgproc::threshold::binarize(&mut image, threshold);
            image
        }
        "invert" => {
            imgproc::enhance::invert(&mut image);
            image
        }
        other => return Err(format!("unknown filter: {other}").into()),
    };

    log::info!(
        "Applied {} to {}, output size {}",
        args.filter,
        args.input_path.display(),
        output.size()
    );

    F::write_image(&args.output_path, &output)?;

    Ok(())
}
