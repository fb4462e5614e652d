use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rasterkit_image::{PixelBuffer, Rgb8};
use rasterkit_imgproc::resize;

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Downscale");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for factor in [2, 4].iter() {
            group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

            let parameter_string = format!("{}x{}x{}", width, height, factor);

            // input image
            let image_size = [*width, *height].into();
            let image = PixelBuffer::from_color(image_size, Rgb8::new(10, 20, 30)).unwrap();

            group.bench_with_input(
                BenchmarkId::new("downscale", &parameter_string),
                &image,
                |b, src| b.iter(|| black_box(resize::downscale(src, *factor))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
