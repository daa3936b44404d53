use criterion::{Criterion, black_box, criterion_group, criterion_main};
use small_option::{Array, Slice};

fn bench_containers(c: &mut Criterion) {
    let n = 256usize;
    let data: Vec<u64> = (0..n as u64).collect();
    let array = Array::new([7u64; 64]);

    {
        let mut group = c.benchmark_group("Slice get vs Slice::get_ref (256)");
        group.bench_function("[u64]::get", |b| {
            b.iter(|| {
                let view = black_box(&data[..]);
                let mut sum = 0u64;
                for i in 0..n + 16 {
                    sum += view.get(i).copied().unwrap_or(0);
                }
                sum
            })
        });

        group.bench_function("Slice<u64>::get_ref", |b| {
            b.iter(|| {
                let view = Slice::from(black_box(&data));
                let mut sum = 0u64;
                for i in 0..n + 16 {
                    sum += view.get_ref(i).copied().unwrap_or(0);
                }
                sum
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Array at vs get_ref (64)");
        group.bench_function("Array::at", |b| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..80 {
                    sum += black_box(&array).at(i).map_or(0, |x| *x);
                }
                sum
            })
        });

        group.bench_function("Array::get_ref", |b| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..80 {
                    sum += black_box(&array).get_ref(i).copied().unwrap_or(0);
                }
                sum
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_containers);
criterion_main!(benches);
