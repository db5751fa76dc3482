use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use imgsim_image::Image;
use imgsim_imgproc::metrics;

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input images
        let image_size = [*width, *height].into();
        let data = (0..width * height).map(|i| (i % 251) as u8).collect();
        let gray1 = Image::<u8, 1>::new(image_size, data).unwrap();
        let gray2 = Image::<u8, 1>::from_size_val(image_size, 127).unwrap();
        let rgb1 = Image::<u8, 3>::from_size_val(image_size, 10).unwrap();
        let rgb2 = Image::<u8, 3>::from_size_val(image_size, 200).unwrap();

        group.bench_with_input(
            BenchmarkId::new("mse", &parameter_string),
            &(&rgb1, &rgb2),
            |b, (i1, i2)| b.iter(|| metrics::mse(black_box(*i1), black_box(*i2))),
        );

        group.bench_with_input(
            BenchmarkId::new("ssim", &parameter_string),
            &(&gray1, &gray2),
            |b, (i1, i2)| b.iter(|| metrics::ssim(black_box(*i1), black_box(*i2))),
        );

        group.bench_with_input(
            BenchmarkId::new("evaluate", &parameter_string),
            &(&rgb1, &rgb2),
            |b, (i1, i2)| b.iter(|| metrics::evaluate(black_box(*i1), black_box(*i2))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_metrics);
criterion_main!(benches);
