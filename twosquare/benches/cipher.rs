use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use twosquare::{decrypt, encrypt, DecryptOptions, Key, Table, TwoSquare};

const PLAINTEXT: &str = "The quick brown fox jumps over the lazy dog while the cat sleeps";

pub fn table_benchmark(c: &mut Criterion) {
    let key = Key::new("algorithm").unwrap();

    c.bench_function("key_validate", |b| {
        b.iter(|| Key::new(black_box("algorithm")).unwrap())
    });

    c.bench_function("table_build", |b| b.iter(|| Table::new(black_box(&key))));
}

pub fn cipher_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cipher");

    for repeat in [1usize, 16, 256] {
        let plaintext = PLAINTEXT.repeat(repeat);
        let ciphertext = encrypt(&plaintext, "falcon", "osprey").unwrap();
        group.throughput(Throughput::Bytes(plaintext.len() as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", repeat), &plaintext, |b, text| {
            b.iter(|| encrypt(black_box(text), "falcon", "osprey").unwrap())
        });

        group.bench_with_input(BenchmarkId::new("decrypt", repeat), &ciphertext, |b, text| {
            b.iter(|| {
                decrypt(black_box(text), "falcon", "osprey", DecryptOptions::default()).unwrap()
            })
        });

        let cipher = TwoSquare::from_keys("falcon", "osprey").unwrap();
        group.bench_with_input(
            BenchmarkId::new("prebuilt_encrypt", repeat),
            &plaintext,
            |b, text| b.iter(|| cipher.encrypt(black_box(text)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, table_benchmark, cipher_benchmark);
criterion_main!(benches);
