use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gf2m_field::mul::{
    mul_comb_ltr, mul_comb_rtl, mul_comb_windowed, mul_interleaved, mul_shift_and_add,
};
use gf2m_field::ops::Square;
use gf2m_field::sec2_fields::{B163Field, B233Field, B283Field, B571Field};
use gf2m_field::types::{BinaryField, Sample};
use tynm::type_name;

pub(crate) fn bench_field<F: BinaryField>(c: &mut Criterion) {
    c.bench_function(&format!("mul-throughput<{}>", type_name::<F>()), |b| {
        b.iter_batched(
            || (F::rand(), F::rand(), F::rand(), F::rand()),
            |(mut x, mut y, mut z, mut w)| {
                for _ in 0..25 {
                    (x, y, z, w) = (x * y, y * z, z * w, w * x);
                }
                (x, y, z, w)
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function(&format!("sqr-latency<{}>", type_name::<F>()), |b| {
        b.iter_batched(
            || F::rand(),
            |mut x| {
                for _ in 0..100 {
                    x = x.square();
                }
                x
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function(&format!("add-latency<{}>", type_name::<F>()), |b| {
        b.iter_batched(
            || F::rand(),
            |mut x| {
                for _ in 0..100 {
                    x = x + x;
                }
                x
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function(&format!("try_inverse<{}>", type_name::<F>()), |b| {
        b.iter_batched(|| F::rand(), |x| x.try_inverse(), BatchSize::SmallInput)
    });

    c.bench_function(
        &format!("batch_multiplicative_inverse<{}>", type_name::<F>()),
        |b| {
            b.iter_batched(
                || (0..256).map(|_| F::rand()).collect::<Vec<_>>(),
                |x| F::batch_multiplicative_inverse(&x),
                BatchSize::LargeInput,
            )
        },
    );
}

/// The named multiplication strategies side by side; this is what justifies
/// the windowed comb as the default.
fn bench_mul_variants<F: BinaryField>(c: &mut Criterion) {
    let variants: [(&str, fn(&F, &F) -> F); 5] = [
        ("shift_and_add", mul_shift_and_add),
        ("comb_rtl", mul_comb_rtl),
        ("comb_ltr", mul_comb_ltr),
        ("comb_windowed", mul_comb_windowed),
        ("interleaved", mul_interleaved),
    ];
    let mut group = c.benchmark_group(format!("mul-variants<{}>", type_name::<F>()));
    for (name, f) in variants {
        group.bench_function(name, |b| {
            b.iter_batched(
                || (F::rand(), F::rand()),
                |(x, y)| f(&x, &y),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_field::<B163Field>(c);
    bench_field::<B233Field>(c);
    bench_field::<B283Field>(c);
    bench_field::<B571Field>(c);
    bench_mul_variants::<B163Field>(c);
    bench_mul_variants::<B571Field>(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
