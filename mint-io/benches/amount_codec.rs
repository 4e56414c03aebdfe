//! Amount encode/decode benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mint_io::{decode_amount, encode_amount, Deserializer, OverflowPolicy, Serializer, AMOUNT_LEN};
use mint_primitives::{BigDecimal, DecimalText};
use rust_decimal::Decimal;

const SAMPLES: [&str; 3] = [
    "0.5",
    "1234567890.123456789123456789",
    "-987654321.102030405060708090",
];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("amount_encode");
    group.throughput(Throughput::Bytes(AMOUNT_LEN as u64));

    for text in SAMPLES {
        let big = BigDecimal::parse_decimal(text).unwrap();
        group.bench_with_input(BenchmarkId::new("big_decimal", text), &big, |b, value| {
            b.iter(|| encode_amount(black_box(value), OverflowPolicy::Reject).unwrap())
        });

        let small = Decimal::parse_decimal(text).unwrap();
        group.bench_with_input(BenchmarkId::new("rust_decimal", text), &small, |b, value| {
            b.iter(|| encode_amount(black_box(value), OverflowPolicy::Reject).unwrap())
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("amount_decode");
    group.throughput(Throughput::Bytes(AMOUNT_LEN as u64));

    for text in SAMPLES {
        let value = BigDecimal::parse_decimal(text).unwrap();
        let bytes = encode_amount(&value, OverflowPolicy::Reject).unwrap();
        group.bench_with_input(BenchmarkId::new("big_decimal", text), &bytes, |b, bytes| {
            b.iter(|| decode_amount::<BigDecimal>(black_box(bytes)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("rust_decimal", text), &bytes, |b, bytes| {
            b.iter(|| decode_amount::<Decimal>(black_box(bytes)).unwrap())
        });
    }

    group.finish();
}

fn bench_record(c: &mut Criterion) {
    let amounts: Vec<BigDecimal> = SAMPLES
        .iter()
        .map(|text| BigDecimal::parse_decimal(text).unwrap())
        .collect();

    c.bench_function("record_roundtrip", |b| {
        b.iter(|| {
            let mut ser = Serializer::new();
            ser.put_u64(black_box(0xDEADBEEF1337C0DE));
            ser.put_string64(black_box("961D2014E3E93AC701A6A5F25824DB66"))
                .unwrap();
            for amount in &amounts {
                ser.put_amount(amount).unwrap();
            }
            let bytes = ser.into_bytes();

            let mut des = Deserializer::new(&bytes);
            des.get_u64();
            des.get_string64();
            for _ in &amounts {
                black_box(des.get_amount::<BigDecimal>());
            }
            des.finish().unwrap()
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_record);
criterion_main!(benches);
