use std::hint::black_box;

use bc_rand::SecureRandomNumberGenerator;
use criterion::{Criterion, criterion_group, criterion_main};
use prime_shamir::{FixedSharer, Preset, find_modulus};

fn split_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("shamir");
    let mut rng = SecureRandomNumberGenerator;

    for preset in [Preset::Mersenne521, Preset::Mersenne4423] {
        let sharer = FixedSharer::new(preset);
        let secret = vec![0x5au8; preset.max_secret_len()];

        group.bench_function(format!("split/{}-bit/9-of-10", preset.bits()), |b| {
            b.iter(|| sharer.split(9, 10, black_box(&secret), &mut rng).unwrap())
        });

        let tokens = sharer.split(9, 10, &secret, &mut rng).unwrap();
        group.bench_function(format!("combine/{}-bit/9-of-10", preset.bits()), |b| {
            b.iter(|| sharer.combine(black_box(&tokens[..9])).unwrap())
        });
    }

    group.sample_size(10);
    group.bench_function("find_modulus/128-bit", |b| {
        b.iter(|| find_modulus(black_box(&[0x5au8; 16]), &mut rng).unwrap())
    });

    group.finish();
}

criterion_group!(benches, split_combine);
criterion_main!(benches);
