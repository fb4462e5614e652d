use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rasterkit_image::PixelBuffer;
use rasterkit_imgproc::flip;

// per-pixel copy through the unchecked views, for comparison with the slice based flip
fn loop_unchecked(src: &PixelBuffer, dst: &mut PixelBuffer) {
    let cols = src.cols();
    let src_view = src.unchecked();
    let mut dst_view = dst.unchecked_mut();
    for y in 0..src.rows() {
        for x in 0..cols {
            dst_view.set_color(cols - 1 - x, y, src_view.get_color(x, y));
        }
    }
}

fn bench_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("Flip");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = [*width, *height].into();
        let image = PixelBuffer::new(image_size).unwrap();

        group.bench_with_input(
            BenchmarkId::new("loop_unchecked", &parameter_string),
            &image,
            |b, src| {
                let mut dst = src.clone();
                b.iter(|| {
                    loop_unchecked(black_box(src), black_box(&mut dst));
                    black_box(())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("horizontal_flip", &parameter_string),
            &image,
            |b, src| {
                let mut img = src.clone();
                b.iter(|| black_box(flip::horizontal_flip(black_box(&mut img))))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("vertical_flip", &parameter_string),
            &image,
            |b, src| {
                let mut img = src.clone();
                b.iter(|| black_box(flip::vertical_flip(black_box(&mut img))))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_flip);
criterion_main!(benches);
