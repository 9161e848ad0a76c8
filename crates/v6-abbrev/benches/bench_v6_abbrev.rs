use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use v6_abbrev::{abbreviate, compare, expand, Abbreviator, Strategy, SAMPLE_ADDRESSES};

fn generate_addresses(n: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| {
            (0..8)
                .map(|_| {
                    if rng.gen_bool(0.5) {
                        "0000".to_string()
                    } else {
                        format!("{:04x}", rng.gen_range(0..=0xffffu32))
                    }
                })
                .collect::<Vec<_>>()
                .join(":")
        })
        .collect()
}

fn bench_abbreviate(c: &mut Criterion) {
    let addresses = generate_addresses(1000);

    for strategy in Strategy::ALL {
        let abbreviator = Abbreviator::new(strategy);
        c.bench_function(&format!("abbreviate_{strategy}_1000"), |b| {
            b.iter(|| {
                for addr in &addresses {
                    black_box(abbreviator.abbreviate(black_box(addr)).ok());
                }
            })
        });
    }

    c.bench_function("abbreviate_samples_with_prefix", |b| {
        b.iter(|| {
            for input in SAMPLE_ADDRESSES {
                black_box(abbreviate(black_box(input), Strategy::Rightmost).ok());
            }
        })
    });
}

fn bench_compare_and_expand(c: &mut Criterion) {
    let addresses = generate_addresses(1000);
    let short: Vec<String> = addresses
        .iter()
        .filter_map(|a| abbreviate(a, Strategy::Rightmost).ok())
        .collect();

    c.bench_function("compare_1000", |b| {
        b.iter(|| {
            for addr in &addresses {
                black_box(compare(black_box(addr)).ok());
            }
        })
    });

    c.bench_function("expand_1000", |b| {
        b.iter(|| {
            for addr in &short {
                black_box(expand(black_box(addr)).ok());
            }
        })
    });
}

criterion_group!(benches, bench_abbreviate, bench_compare_and_expand);
criterion_main!(benches);
