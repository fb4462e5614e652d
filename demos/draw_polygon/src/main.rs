use argh::FromArgs;
use std::path::PathBuf;

use rasterkit::{
    image::{ImageSize, PixelBuffer, Rgb8},
    imgproc,
    io::functional as F,
};

#[derive(FromArgs)]
/// Draw a regular polygon outline and save it
struct Args {
    /// path to the output image
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// the number of vertices
    #[argh(option, default = "6")]
    vertices: usize,

    /// the width and height of the canvas
    #[argh(option, default = "256")]
    canvas: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let size = ImageSize {
        width: args.canvas,
        height: args.canvas,
    };
    let mut image = PixelBuffer::new(size)?;
    imgproc::draw::clear(&mut image, Rgb8::new(32, 32, 48));

    let center = args.canvas as f32 / 2.0;
    let radius = center * 0.8;
    let points = (0..args.vertices)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / args.vertices as f32;
            (center + radius * angle.cos(), center + radius * angle.sin())
        })
        .collect::<Vec<_>>();

    imgproc::draw::draw_polygon(&mut image, &points, Rgb8::new(255, 200, 0));
    log::info!("Drew a polygon with {} vertices", points.len());

    F::write_image(&args.output_path, &image)?;

    Ok(())
}
