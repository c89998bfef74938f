use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huffpack::Codec;

fn sample_text() -> String {
    "the quick brown fox jumps over the lazy dog. \
     pack my box with five dozen liquor jugs.\n"
        .repeat(200)
}

fn bench_encode(c: &mut Criterion) {
    let codec = Codec::default();
    let text = sample_text();
    c.bench_function("encode_prose_8k", |b| {
        b.iter(|| codec.encode(black_box(&text)).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let codec = Codec::default();
    let container = codec.encode(&sample_text()).unwrap().into_container();
    c.bench_function("decode_prose_8k", |b| {
        b.iter(|| codec.decode(black_box(&container)).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
