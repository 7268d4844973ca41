#![expect(missing_docs)]

use core::fmt::Write;

use uniconv::{Codepage, Strictness, byte_stream, codepage, utf8_string};

fn render_upper_half(codepage: Codepage) -> String {
    let mut out = String::new();
    for row in (0x80..=0xFFu8).step_by(16) {
        write!(out, "{row:02X}:").unwrap();
        for byte in row..=row + 15 {
            write!(out, " {:04X}", codepage::byte_to_codepoint(codepage, byte)).unwrap();
        }
        out.push('\n');
    }
    out.trim_end().to_owned()
}

fn render_encoded(text: &str, codepages: &[Codepage]) -> String {
    let mut out = String::new();
    for &codepage in codepages {
        let source = text.as_bytes();
        let needed = byte_stream::size_from_utf8(source, codepage, Strictness::Strict).unwrap();
        let mut bytes = vec![0u8; needed];
        byte_stream::copy_from_utf8(&mut bytes, source, codepage, Strictness::Strict).unwrap();
        write!(out, "{codepage}:").unwrap();
        for byte in bytes {
            write!(out, " {byte:02X}").unwrap();
        }
        out.push('\n');
    }
    out.trim_end().to_owned()
}

#[test]
fn snapshot_windows_1255() {
    insta::assert_snapshot!(render_upper_half(Codepage::Windows1255), @r"
    80: 20AC FFFD 201A 0192 201E 2026 2020 2021 02C6 2030 FFFD 2039 FFFD FFFD FFFD FFFD
    90: FFFD 2018 2019 201C 201D 2022 2013 2014 02DC 2122 FFFD 203A FFFD FFFD FFFD FFFD
    A0: 00A0 00A1 00A2 00A3 20AA 00A5 00A6 00A7 00A8 00A9 00D7 00AB 00AC 00AD 00AE 00AF
    B0: 00B0 00B1 00B2 00B3 00B4 00B5 00B6 00B7 00B8 00B9 00F7 00BB 00BC 00BD 00BE 00BF
    C0: 05B0 05B1 05B2 05B3 05B4 05B5 05B6 05B7 05B8 05B9 FFFD 05BB 05BC 05BD 05BE 05BF
    D0: 05C0 05C1 05C2 05C3 05F0 05F1 05F2 05F3 05F4 FFFD FFFD FFFD FFFD FFFD FFFD FFFD
    E0: 05D0 05D1 05D2 05D3 05D4 05D5 05D6 05D7 05D8 05D9 05DA 05DB 05DC 05DD 05DE 05DF
    F0: 05E0 05E1 05E2 05E3 05E4 05E5 05E6 05E7 05E8 05E9 05EA FFFD FFFD 200E 200F FFFD
    ");
}

#[test]
fn snapshot_koi8_u() {
    insta::assert_snapshot!(render_upper_half(Codepage::Koi8U), @r"
    80: 2500 2502 250C 2510 2514 2518 251C 2524 252C 2534 253C 2580 2584 2588 258C 2590
    90: 2591 2592 2593 2320 25A0 2219 221A 2248 2264 2265 00A0 2321 00B0 00B2 00B7 00F7
    A0: 2550 2551 2552 0451 0454 2554 0456 0457 2557 2558 2559 255A 255B 0491 255D 255E
    B0: 255F 2560 2561 0401 0404 2563 0406 0407 2566 2567 2568 2569 256A 0490 256C 00A9
    C0: 044E 0430 0431 0446 0434 0435 0444 0433 0445 0438 0439 043A 043B 043C 043D 043E
    D0: 043F 044F 0440 0441 0442 0443 0436 0432 044C 044B 0437 0448 044D 0449 0447 044A
    E0: 042E 0410 0411 0426 0414 0415 0424 0413 0425 0418 0419 041A 041B 041C 041D 041E
    F0: 041F 042F 0420 0421 0422 0423 0416 0412 042C 042B 0417 0428 042D 0429 0427 042A
    ");
}

#[test]
fn snapshot_unmapped_become_substitute() {
    let codepages = [
        Codepage::Windows1252,
        Codepage::Iso8859_5,
        Codepage::Koi8U,
        Codepage::Windows1255,
    ];
    insta::assert_snapshot!(render_encoded("Aé€Ωш", &codepages), @r"
    windows-1252: 41 E9 80 1A 1A
    iso-8859-5: 41 1A 1A 1A E8
    koi8-u: 41 1A 1A 1A DB
    windows-1255: 41 1A 80 1A 1A
    ");
}

#[test]
fn snapshot_error_chain() {
    let mut destination = [0u8; 1];
    let error =
        utf8_string::copy_from_utf16(&mut destination, &[0x41, 0xE9], Strictness::Strict)
            .unwrap_err();
    insta::assert_snapshot!(format!("{error:#}"), @r"
    UTF-8 destination too small: 2 units needed at 1
    unable to copy Unicode character to UTF-8 string at offset 1
    unable to copy UTF-8 string
    ");
    assert_eq!(destination, [0x41]);
}
