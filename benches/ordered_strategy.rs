use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use monodither::{
    dithering::threshold::{ThresholdType, ordered_transform::OrderedStrategy},
    texture::{Texture, TextureRef},
    transform::traits::TextureTransform,
};

mod bench_utils;
use bench_utils::*;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_strategy");

    macro_rules! benchmark_by_param {
        ($sizes:expr, $strategy:expr) => {
            for size in $sizes {
                let input = gen_random_luma(size);
                let mut output = Texture::<u8>::new(size, size, 1);
                let mut transform = ThresholdType::Bayer8x8.to_transform($strategy);
                transform.prepare(input.shape(), output.shape());

                let id = BenchmarkId::new($strategy.to_string(), size);
                group.bench_with_input(id, &size, |b, _| {
                    b.iter(|| {
                        let res = transform
                            .apply(input.as_texture_slice(), output.as_texture_mut_slice());
                        black_box(res);
                    });
                });
            }
        };
    }

    let sizes = [BENCH_IMAGE_SIZE, 1024, 2048];
    benchmark_by_param!(sizes, OrderedStrategy::Scalar);
    benchmark_by_param!(sizes, OrderedStrategy::ScalarPar);

    group.finish();
}

criterion_group!(ordered_strategy, criterion_benchmark);
criterion_main!(ordered_strategy);
