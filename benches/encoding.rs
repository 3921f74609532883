use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use utf64::{decode, encode, Alphabet};

/// Builds a sample with 1-, 2-, 3- and 4-byte UTF-8 characters interleaved.
fn sample_text(chars: usize) -> String {
    "aé€𝔘".chars().cycle().take(chars).collect()
}

fn bench_encode(c: &mut Criterion) {
    let alphabet = Alphabet::standard();
    let mut group = c.benchmark_group("encode_text");

    for size in [64, 256, 1024, 4096, 16384].iter() {
        let text = sample_text(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| encode(black_box(text), black_box(&alphabet)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let alphabet = Alphabet::standard();
    let mut group = c.benchmark_group("decode_text");

    for size in [64, 256, 1024, 4096, 16384].iter() {
        let text = sample_text(*size);
        let encoded = encode(&text, &alphabet);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded), black_box(&alphabet)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
