#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use uniconv::{Codepage, ConversionOptions, Converter, Destination, Format, Source};

const HEADER: usize = 8;

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Sequences that exercise framing and the malformed-input paths.
static SPLICE_TABLE: &[&[u8]] = &[
    b"\xEF\xBB\xBF",
    b"\xFF\xFE",
    b"\xFE\xFF",
    b"\xFF\xFE\x00\x00",
    b"\x00\x00\xFE\xFF",
    b"\xED\xA0\x80",
    b"\xC0\x80",
    b"\xF4\x90\x80\x80",
    b"\x3D\xD8",
    b"\xD8\x3D\xDE\x00",
    b"\x00\xDC",
    b"\x00\x00\x11\x00",
    b"\x00",
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        with_rng(|rng| rng.fill_bytes(&mut data[..HEADER]));
        HEADER
    } else if seed % 10 < 4 {
        splice(data, size, max_size)
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Inserts one entry of `SPLICE_TABLE` at a random payload offset.
fn splice(data: &mut [u8], size: usize, max_size: usize) -> usize {
    with_rng(|rng| {
        let insert = SPLICE_TABLE[rng.random_range(0..SPLICE_TABLE.len())];
        if size + insert.len() > max_size {
            return size;
        }
        let at = rng.random_range(HEADER..=size);
        data.copy_within(at..size, at + insert.len());
        data[at..at + insert.len()].copy_from_slice(insert);
        size + insert.len()
    })
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
enum SourceKind {
    Utf8,
    Utf16,
    Utf32,
    ByteStream(Codepage),
    Utf8Stream,
    Utf16Stream,
    Utf32Stream,
}

#[derive(Debug, Arbitrary)]
struct Plan {
    options: ConversionOptions,
    source: SourceKind,
    format: Format,
}

fn copy_with_len(
    converter: &mut Converter,
    source: Source<'_>,
    format: Format,
    len: usize,
) -> uniconv::Result<usize> {
    let mut bytes = vec![0u8; len];
    let destination = match format {
        Format::Utf16 => return converter.copy(source, Destination::Utf16(&mut vec![0; len])),
        Format::Utf32 => return converter.copy(source, Destination::Utf32(&mut vec![0; len])),
        Format::Utf8 => Destination::Utf8(&mut bytes),
        Format::ByteStream(codepage) => Destination::ByteStream(&mut bytes, codepage),
        Format::Utf8Stream => Destination::Utf8Stream(&mut bytes),
        Format::Utf16Stream => Destination::Utf16Stream(&mut bytes),
        Format::Utf32Stream => Destination::Utf32Stream(&mut bytes),
    };
    converter.copy(source, destination)
}

fn conversion(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let Ok(plan) = Plan::arbitrary(&mut Unstructured::new(&data[..HEADER])) else {
        return;
    };
    let payload = &data[HEADER..];

    let utf16: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let utf32: Vec<u32> = payload
        .chunks_exact(4)
        .map(|quad| u32::from_le_bytes([quad[0], quad[1], quad[2], quad[3]]))
        .collect();
    let source = match plan.source {
        SourceKind::Utf8 => Source::Utf8(payload),
        SourceKind::Utf16 => Source::Utf16(&utf16),
        SourceKind::Utf32 => Source::Utf32(&utf32),
        SourceKind::ByteStream(codepage) => Source::ByteStream(payload, codepage),
        SourceKind::Utf8Stream => Source::Utf8Stream(payload),
        SourceKind::Utf16Stream => Source::Utf16Stream(payload),
        SourceKind::Utf32Stream => Source::Utf32Stream(payload),
    };

    let mut converter = Converter::new(plan.options);
    match converter.size(source, plan.format) {
        Ok(needed) => {
            assert_eq!(
                copy_with_len(&mut converter, source, plan.format, needed),
                Ok(needed),
                "{plan:?}"
            );
            if needed > 0 {
                let short = copy_with_len(&mut converter, source, plan.format, needed - 1);
                assert_eq!(
                    short.map_err(|error| error.kind()),
                    Err(uniconv::ErrorKind::ArgumentTooSmall),
                    "{plan:?}"
                );
            }
        }
        Err(error) => {
            let copied = copy_with_len(&mut converter, source, plan.format, 8 * payload.len() + 8);
            assert_eq!(copied.map_err(|error| error.kind()), Err(error.kind()), "{plan:?}");
        }
    }
}

fuzz_target!(|data: &[u8]| conversion(data));
