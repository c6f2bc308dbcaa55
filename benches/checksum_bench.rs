//! Benchmarks for adlerrs.
//!
//! Run with:
//!     cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use adlerrs::{ChecksumConfig, INIT, SegmentedBuffer, block_checksum, combine, stream_checksum};
use bytes::Bytes;

fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("block");

    // Different data sizes
    for size in [16, 4 * 1024, 64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        // Deterministic pseudo-random data
        let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("slice", size), &data, |b, data| {
            b.iter(|| block_checksum(INIT, black_box(data)));
        });
    }

    // One byte at a time
    group.throughput(Throughput::Bytes(4096));
    group.bench_function("byte_at_a_time_4k", |b| {
        let data: Vec<u8> = (0..4096).map(|i| (i * 7 + 13) as u8).collect();
        b.iter(|| {
            let mut adler = INIT;
            for byte in black_box(&data).chunks(1) {
                adler = block_checksum(adler, byte);
            }
            adler
        });
    });

    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

    group.throughput(Throughput::Bytes(size as u64));
    for segment in [512, 4 * 1024, 64 * 1024] {
        let mut buffer = SegmentedBuffer::new();
        for piece in data.chunks(segment) {
            buffer.push(Bytes::copy_from_slice(piece));
        }

        group.bench_function(BenchmarkId::new("segmented", segment), |b| {
            b.iter(|| stream_checksum(INIT, black_box(&mut buffer), size));
        });
    }

    group.finish();
}

fn bench_combine(c: &mut Criterion) {
    let a = block_checksum(INIT, b"some prefix data");
    let b = block_checksum(INIT, b"some suffix data");

    c.bench_function("combine", |bench| {
        bench.iter(|| combine(black_box(a), black_box(b), black_box(1 << 30)));
    });
}

fn bench_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("cursor", |b| {
        let config = ChecksumConfig::default();
        b.iter(|| {
            let cursor = std::io::Cursor::new(black_box(&data));
            adlerrs::checksum_reader(cursor, &config).unwrap()
        });
    });

    #[cfg(feature = "parallel")]
    group.bench_function("parallel", |b| {
        let config = ChecksumConfig::default().with_segment_size(64 * 1024);
        b.iter(|| adlerrs::checksum_parallel(black_box(&data), &config).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_block, bench_stream, bench_combine, bench_reader);
criterion_main!(benches);
