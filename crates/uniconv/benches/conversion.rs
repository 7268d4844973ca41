//! Benchmark – size and copy passes for common conversion pairs
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use uniconv::{
    Codepage, ConversionOptions, Converter, Format, Source, Strictness, utf8_string,
    utf16_string,
};

/// A deterministic mix of one-, two-, three- and four-byte UTF-8 sequences,
/// truncated to at most `target_len` bytes on a character boundary.
fn make_text(target_len: usize) -> String {
    let pattern = "plain ascii, ünïcödé, 世界, 😀 ";
    let mut text = String::with_capacity(target_len);
    'fill: loop {
        for c in pattern.chars() {
            if text.len() + c.len_utf8() > target_len {
                break 'fill;
            }
            text.push(c);
        }
    }
    text
}

fn bench_utf8_to_utf16(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8_to_utf16");
    for &len in &[1_000usize, 100_000] {
        let text = make_text(len);
        let mut buffer = vec![0u16; len];
        group.bench_with_input(BenchmarkId::new("size", len), &text, |b, text| {
            b.iter(|| {
                utf16_string::size_from_utf8(black_box(text.as_bytes()), Strictness::Strict)
                    .unwrap()
            });
        });
        group.bench_with_input(BenchmarkId::new("copy", len), &text, |b, text| {
            b.iter(|| {
                utf16_string::copy_from_utf8(
                    &mut buffer,
                    black_box(text.as_bytes()),
                    Strictness::Strict,
                )
                .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_codepage_to_utf8(c: &mut Criterion) {
    let bytes: Vec<u8> = (1..=u8::MAX).cycle().take(100_000).collect();
    let mut group = c.benchmark_group("codepage_to_utf8");
    for codepage in [Codepage::Windows1252, Codepage::Koi8R, Codepage::Iso8859_8] {
        let mut buffer = vec![0u8; 3 * bytes.len() + 1];
        group.bench_with_input(
            BenchmarkId::from_parameter(codepage),
            &codepage,
            |b, &codepage| {
                b.iter(|| {
                    utf8_string::copy_from_byte_stream(&mut buffer, black_box(&bytes), codepage)
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

fn bench_converter(c: &mut Criterion) {
    let text = make_text(100_000);
    let mut group = c.benchmark_group("converter");
    for format in [Format::Utf16Stream, Format::Utf32, Format::ByteStream(Codepage::Windows1250)] {
        group.bench_with_input(BenchmarkId::from_parameter(format), &format, |b, &format| {
            let mut converter = Converter::new(ConversionOptions::lenient());
            b.iter(|| {
                converter
                    .convert(Source::Utf8(black_box(text.as_bytes())), format)
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c.warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10)
    } else {
        c.warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5))
    }
}

criterion_group! {
    name = benches;
    config = criterion();
    targets = bench_utf8_to_utf16, bench_codepage_to_utf8, bench_converter
}
criterion_main!(benches);
