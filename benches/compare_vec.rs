#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use advec::{GrowExact, Vector};

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: usize = 100;
    const LARGE_COUNT: usize = 1000;

    for count in [SMALL_COUNT, LARGE_COUNT] {
        c.bench_function(&format!("vector push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vector::<usize>::new();
                for value in 0..count {
                    buf.push_back(black_box(value));
                }
            });
        });

        c.bench_function(&format!("vector exact push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vector::<usize, GrowExact>::new();
                for value in 0..count {
                    buf.push_back(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("vector with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = Vector::<usize>::with_capacity(count);
                    for value in 0..count {
                        buf.push_back(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("stdvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(&format!("vector insert front {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vector::<usize>::new();
                for value in 0..count {
                    buf.insert(0, black_box(value));
                }
            });
        });

        c.bench_function(&format!("stdvec insert front {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.insert(0, black_box(value));
                }
            });
        });

        c.bench_function(&format!("vector extend {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vector::<usize>::new();
                buf.extend(black_box(0..count));
            });
        });

        c.bench_function(&format!("stdvec extend {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                buf.extend(black_box(0..count));
            });
        });

        c.bench_function(&format!("vector clone {} strings", count), |b| {
            let data: Vector<String> = (0..count).map(|i| i.to_string()).collect();
            b.iter(|| black_box(&data).clone());
        });

        c.bench_function(&format!("stdvec clone {} strings", count), |b| {
            let data: Vec<String> = (0..count).map(|i| i.to_string()).collect();
            b.iter(|| black_box(&data).clone());
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
