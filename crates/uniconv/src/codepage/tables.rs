//! Single-byte codepage tables.
//!
//! Generated from the vendor mapping files published by the Unicode
//! Consortium. Do not edit by hand.

use super::table::{CodepageTable, EncodeRange};

pub(super) static ASCII: CodepageTable = CodepageTable {
    base: 0x80,
    to_unicode: &[
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
    ],
    from_unicode: &[],
};

pub(super) static ISO_8859_1: CodepageTable = CodepageTable {
    base: 0x100,
    to_unicode: &[],
    from_unicode: &[],
};

pub(super) static ISO_8859_2: CodepageTable = CodepageTable {
    base: 0xA0,
    to_unicode: &[
        0x00A0, 0x0104, 0x02D8, 0x0141, 0x00A4, 0x013D, 0x015A, 0x00A7,
        0x00A8, 0x0160, 0x015E, 0x0164, 0x0179, 0x00AD, 0x017D, 0x017B,
        0x00B0, 0x0105, 0x02DB, 0x0142, 0x00B4, 0x013E, 0x015B, 0x02C7,
        0x00B8, 0x0161, 0x015F, 0x0165, 0x017A, 0x02DD, 0x017E, 0x017C,
        0x0154, 0x00C1, 0x00C2, 0x0102, 0x00C4, 0x0139, 0x0106, 0x00C7,
        0x010C, 0x00C9, 0x0118, 0x00CB, 0x011A, 0x00CD, 0x00CE, 0x010E,
        0x0110, 0x0143, 0x0147, 0x00D3, 0x00D4, 0x0150, 0x00D6, 0x00D7,
        0x0158, 0x016E, 0x00DA, 0x0170, 0x00DC, 0x00DD, 0x0162, 0x00DF,
        0x0155, 0x00E1, 0x00E2, 0x0103, 0x00E4, 0x013A, 0x0107, 0x00E7,
        0x010D, 0x00E9, 0x0119, 0x00EB, 0x011B, 0x00ED, 0x00EE, 0x010F,
        0x0111, 0x0144, 0x0148, 0x00F3, 0x00F4, 0x0151, 0x00F6, 0x00F7,
        0x0159, 0x016F, 0x00FA, 0x0171, 0x00FC, 0x00FD, 0x0163, 0x02D9,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0x1A, 0x1A, 0xA4, 0x1A, 0x1A, 0xA7, 0xA8, 0x1A, 0x1A, 0x1A,
                0x1A, 0xAD, 0x1A, 0x1A, 0xB0, 0x1A, 0x1A, 0x1A, 0xB4, 0x1A, 0x1A, 0x1A,
                0xB8, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xC1, 0xC2, 0x1A,
                0xC4, 0x1A, 0x1A, 0xC7, 0x1A, 0xC9, 0x1A, 0xCB, 0x1A, 0xCD, 0xCE, 0x1A,
                0x1A, 0x1A, 0x1A, 0xD3, 0xD4, 0x1A, 0xD6, 0xD7, 0x1A, 0x1A, 0xDA, 0x1A,
                0xDC, 0xDD, 0x1A, 0xDF, 0x1A, 0xE1, 0xE2, 0x1A, 0xE4, 0x1A, 0x1A, 0xE7,
                0x1A, 0xE9, 0x1A, 0xEB, 0x1A, 0xED, 0xEE, 0x1A, 0x1A, 0x1A, 0x1A, 0xF3,
                0xF4, 0x1A, 0xF6, 0xF7, 0x1A, 0x1A, 0xFA, 0x1A, 0xFC, 0xFD, 0x1A, 0x1A,
                0x1A, 0x1A, 0xC3, 0xE3, 0xA1, 0xB1, 0xC6, 0xE6, 0x1A, 0x1A, 0x1A, 0x1A,
                0xC8, 0xE8, 0xCF, 0xEF, 0xD0, 0xF0, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0xCA, 0xEA, 0xCC, 0xEC,
            ],
        },
        EncodeRange {
            first: 0x0139,
            bytes: &[
                0xC5, 0xE5, 0x1A, 0x1A, 0xA5, 0xB5, 0x1A, 0x1A, 0xA3, 0xB3, 0xD1, 0xF1,
                0x1A, 0x1A, 0xD2, 0xF2, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD5,
                0xF5, 0x1A, 0x1A, 0xC0, 0xE0, 0x1A, 0x1A, 0xD8, 0xF8, 0xA6, 0xB6, 0x1A,
                0x1A, 0xAA, 0xBA, 0xA9, 0xB9, 0xDE, 0xFE, 0xAB, 0xBB, 0x1A, 0x1A, 0x1A,
                0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD9, 0xF9, 0xDB, 0xFB, 0x1A, 0x1A, 0x1A,
                0x1A, 0x1A, 0x1A, 0x1A, 0xAC, 0xBC, 0xAF, 0xBF, 0xAE, 0xBE,
            ],
        },
        EncodeRange { first: 0x02C7, bytes: &[0xB7] },
        EncodeRange { first: 0x02D8, bytes: &[0xA2, 0xFF, 0x1A, 0xB2, 0x1A, 0xBD] },
    ],
};

pub(super) static ISO_8859_3: CodepageTable = CodepageTable {
    base: 0xA0,
    to_unicode: &[
        0x00A0, 0x0126, 0x02D8, 0x00A3, 0x00A4, 0xFFFD, 0x0124, 0x00A7,
        0x00A8, 0x0130, 0x015E, 0x011E, 0x0134, 0x00AD, 0xFFFD, 0x017B,
        0x00B0, 0x0127, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x0125, 0x00B7,
        0x00B8, 0x0131, 0x015F, 0x011F, 0x0135, 0x00BD, 0xFFFD, 0x017C,
        0x00C0, 0x00C1, 0x00C2, 0xFFFD, 0x00C4, 0x010A, 0x0108, 0x00C7,
        0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
        0xFFFD, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x0120, 0x00D6, 0x00D7,
        0x011C, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x016C, 0x015C, 0x00DF,
        0x00E0, 0x00E1, 0x00E2, 0xFFFD, 0x00E4, 0x010B, 0x0109, 0x00E7,
        0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
        0xFFFD, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x0121, 0x00F6, 0x00F7,
        0x011D, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x016D, 0x015D, 0x02D9,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0x1A, 0xA3, 0xA4, 0x1A, 0x1A, 0xA7, 0xA8, 0x1A, 0x1A, 0x1A,
                0x1A, 0xAD, 0x1A, 0x1A, 0xB0, 0x1A, 0xB2, 0xB3, 0xB4, 0xB5, 0x1A, 0xB7,
                0xB8, 0x1A, 0x1A, 0x1A, 0x1A, 0xBD, 0x1A, 0x1A, 0xC0, 0xC1, 0xC2, 0x1A,
                0xC4, 0x1A, 0x1A, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF,
                0x1A, 0xD1, 0xD2, 0xD3, 0xD4, 0x1A, 0xD6, 0xD7, 0x1A, 0xD9, 0xDA, 0xDB,
                0xDC, 0x1A, 0x1A, 0xDF, 0xE0, 0xE1, 0xE2, 0x1A, 0xE4, 0x1A, 0x1A, 0xE7,
                0xE8, 0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF, 0x1A, 0xF1, 0xF2, 0xF3,
                0xF4, 0x1A, 0xF6, 0xF7, 0x1A, 0xF9, 0xFA, 0xFB, 0xFC,
            ],
        },
        EncodeRange { first: 0x0108, bytes: &[0xC6, 0xE6, 0xC5, 0xE5] },
        EncodeRange {
            first: 0x011C,
            bytes: &[
                0xD8, 0xF8, 0xAB, 0xBB, 0xD5, 0xF5, 0x1A, 0x1A, 0xA6, 0xB6, 0xA1, 0xB1,
                0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xA9, 0xB9, 0x1A, 0x1A,
                0xAC, 0xBC,
            ],
        },
        EncodeRange { first: 0x015C, bytes: &[0xDE, 0xFE, 0xAA, 0xBA] },
        EncodeRange { first: 0x016C, bytes: &[0xDD, 0xFD] },
        EncodeRange { first: 0x017B, bytes: &[0xAF, 0xBF] },
        EncodeRange { first: 0x02D8, bytes: &[0xA2, 0xFF] },
    ],
};

pub(super) static ISO_8859_4: CodepageTable = CodepageTable {
    base: 0xA0,
    to_unicode: &[
        0x00A0, 0x0104, 0x0138, 0x0156, 0x00A4, 0x0128, 0x013B, 0x00A7,
        0x00A8, 0x0160, 0x0112, 0x0122, 0x0166, 0x00AD, 0x017D, 0x00AF,
        0x00B0, 0x0105, 0x02DB, 0x0157, 0x00B4, 0x0129, 0x013C, 0x02C7,
        0x00B8, 0x0161, 0x0113, 0x0123, 0x0167, 0x014A, 0x017E, 0x014B,
        0x0100, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x012E,
        0x010C, 0x00C9, 0x0118, 0x00CB, 0x0116, 0x00CD, 0x00CE, 0x012A,
        0x0110, 0x0145, 0x014C, 0x0136, 0x00D4, 0x00D5, 0x00D6, 0x00D7,
        0x00D8, 0x0172, 0x00DA, 0x00DB, 0x00DC, 0x0168, 0x016A, 0x00DF,
        0x0101, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x012F,
        0x010D, 0x00E9, 0x0119, 0x00EB, 0x0117, 0x00ED, 0x00EE, 0x012B,
        0x0111, 0x0146, 0x014D, 0x0137, 0x00F4, 0x00F5, 0x00F6, 0x00F7,
        0x00F8, 0x0173, 0x00FA, 0x00FB, 0x00FC, 0x0169, 0x016B, 0x02D9,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0x1A, 0x1A, 0xA4, 0x1A, 0x1A, 0xA7, 0xA8, 0x1A, 0x1A, 0x1A,
                0x1A, 0xAD, 0x1A, 0xAF, 0xB0, 0x1A, 0x1A, 0x1A, 0xB4, 0x1A, 0x1A, 0x1A,
                0xB8, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xC1, 0xC2, 0xC3,
                0xC4, 0xC5, 0xC6, 0x1A, 0x1A, 0xC9, 0x1A, 0xCB, 0x1A, 0xCD, 0xCE, 0x1A,
                0x1A, 0x1A, 0x1A, 0x1A, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0x1A, 0xDA, 0xDB,
                0xDC, 0x1A, 0x1A, 0xDF, 0x1A, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0x1A,
                0x1A, 0xE9, 0x1A, 0xEB, 0x1A, 0xED, 0xEE, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0x1A, 0xFA, 0xFB, 0xFC, 0x1A, 0x1A, 0x1A,
                0xC0, 0xE0, 0x1A, 0x1A, 0xA1, 0xB1, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0xC8, 0xE8, 0x1A, 0x1A, 0xD0, 0xF0, 0xAA, 0xBA, 0x1A, 0x1A, 0xCC, 0xEC,
                0xCA, 0xEA, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xAB, 0xBB,
                0x1A, 0x1A, 0x1A, 0x1A, 0xA5, 0xB5, 0xCF, 0xEF, 0x1A, 0x1A, 0xC7, 0xE7,
                0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD3, 0xF3, 0xA2, 0x1A, 0x1A, 0xA6,
                0xB6, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD1, 0xF1, 0x1A,
                0x1A, 0x1A, 0xBD, 0xBF, 0xD2, 0xF2, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0x1A, 0x1A, 0xA3, 0xB3, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0xA9, 0xB9, 0x1A, 0x1A, 0x1A, 0x1A, 0xAC, 0xBC, 0xDD, 0xFD, 0xDE, 0xFE,
                0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD9, 0xF9,
            ],
        },
        EncodeRange { first: 0x017D, bytes: &[0xAE, 0xBE] },
        EncodeRange { first: 0x02C7, bytes: &[0xB7] },
        EncodeRange { first: 0x02D9, bytes: &[0xFF, 0x1A, 0xB2] },
    ],
};

pub(super) static ISO_8859_5: CodepageTable = CodepageTable {
    base: 0xA0,
    to_unicode: &[
        0x00A0, 0x0401, 0x0402, 0x0403, 0x0404, 0x0405, 0x0406, 0x0407,
        0x0408, 0x0409, 0x040A, 0x040B, 0x040C, 0x00AD, 0x040E, 0x040F,
        0x0410, 0x0411, 0x0412, 0x0413, 0x0414, 0x0415, 0x0416, 0x0417,
        0x0418, 0x0419, 0x041A, 0x041B, 0x041C, 0x041D, 0x041E, 0x041F,
        0x0420, 0x0421, 0x0422, 0x0423, 0x0424, 0x0425, 0x0426, 0x0427,
        0x0428, 0x0429, 0x042A, 0x042B, 0x042C, 0x042D, 0x042E, 0x042F,
        0x0430, 0x0431, 0x0432, 0x0433, 0x0434, 0x0435, 0x0436, 0x0437,
        0x0438, 0x0439, 0x043A, 0x043B, 0x043C, 0x043D, 0x043E, 0x043F,
        0x0440, 0x0441, 0x0442, 0x0443, 0x0444, 0x0445, 0x0446, 0x0447,
        0x0448, 0x0449, 0x044A, 0x044B, 0x044C, 0x044D, 0x044E, 0x044F,
        0x2116, 0x0451, 0x0452, 0x0453, 0x0454, 0x0455, 0x0456, 0x0457,
        0x0458, 0x0459, 0x045A, 0x045B, 0x045C, 0x00A7, 0x045E, 0x045F,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xFD, 0x1A, 0x1A, 0x1A, 0x1A,
                0x1A, 0xAD,
            ],
        },
        EncodeRange {
            first: 0x0401,
            bytes: &[
                0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xAB, 0xAC,
                0x1A, 0xAE, 0xAF, 0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8,
                0xB9, 0xBA, 0xBB, 0xBC, 0xBD, 0xBE, 0xBF, 0xC0, 0xC1, 0xC2, 0xC3, 0xC4,
                0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0,
                0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xDB, 0xDC,
                0xDD, 0xDE, 0xDF, 0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8,
                0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF, 0x1A, 0xF1, 0xF2, 0xF3, 0xF4,
                0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0xFA, 0xFB, 0xFC, 0x1A, 0xFE, 0xFF,
            ],
        },
        EncodeRange { first: 0x2116, bytes: &[0xF0] },
    ],
};

pub(super) static ISO_8859_6: CodepageTable = CodepageTable {
    base: 0xA0,
    to_unicode: &[
        0x00A0, 0xFFFD, 0xFFFD, 0xFFFD, 0x00A4, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0x060C, 0x00AD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0x061B, 0xFFFD, 0xFFFD, 0xFFFD, 0x061F,
        0xFFFD, 0x0621, 0x0622, 0x0623, 0x0624, 0x0625, 0x0626, 0x0627,
        0x0628, 0x0629, 0x062A, 0x062B, 0x062C, 0x062D, 0x062E, 0x062F,
        0x0630, 0x0631, 0x0632, 0x0633, 0x0634, 0x0635, 0x0636, 0x0637,
        0x0638, 0x0639, 0x063A, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0x0640, 0x0641, 0x0642, 0x0643, 0x0644, 0x0645, 0x0646, 0x0647,
        0x0648, 0x0649, 0x064A, 0x064B, 0x064C, 0x064D, 0x064E, 0x064F,
        0x0650, 0x0651, 0x0652, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0x1A, 0x1A, 0xA4, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0x1A, 0xAD,
            ],
        },
        EncodeRange { first: 0x060C, bytes: &[0xAC] },
        EncodeRange {
            first: 0x061B,
            bytes: &[
                0xBB, 0x1A, 0x1A, 0x1A, 0xBF, 0x1A, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6,
                0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2,
                0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0x1A, 0x1A, 0x1A, 0x1A,
                0x1A, 0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA,
                0xEB, 0xEC, 0xED, 0xEE, 0xEF, 0xF0, 0xF1, 0xF2,
            ],
        },
    ],
};

pub(super) static ISO_8859_7: CodepageTable = CodepageTable {
    base: 0xA0,
    to_unicode: &[
        0x00A0, 0x2018, 0x2019, 0x00A3, 0x20AC, 0x20AF, 0x00A6, 0x00A7,
        0x00A8, 0x00A9, 0x037A, 0x00AB, 0x00AC, 0x00AD, 0xFFFD, 0x2015,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x0384, 0x0385, 0x0386, 0x00B7,
        0x0388, 0x0389, 0x038A, 0x00BB, 0x038C, 0x00BD, 0x038E, 0x038F,
        0x0390, 0x0391, 0x0392, 0x0393, 0x0394, 0x0395, 0x0396, 0x0397,
        0x0398, 0x0399, 0x039A, 0x039B, 0x039C, 0x039D, 0x039E, 0x039F,
        0x03A0, 0x03A1, 0xFFFD, 0x03A3, 0x03A4, 0x03A5, 0x03A6, 0x03A7,
        0x03A8, 0x03A9, 0x03AA, 0x03AB, 0x03AC, 0x03AD, 0x03AE, 0x03AF,
        0x03B0, 0x03B1, 0x03B2, 0x03B3, 0x03B4, 0x03B5, 0x03B6, 0x03B7,
        0x03B8, 0x03B9, 0x03BA, 0x03BB, 0x03BC, 0x03BD, 0x03BE, 0x03BF,
        0x03C0, 0x03C1, 0x03C2, 0x03C3, 0x03C4, 0x03C5, 0x03C6, 0x03C7,
        0x03C8, 0x03C9, 0x03CA, 0x03CB, 0x03CC, 0x03CD, 0x03CE, 0xFFFD,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0x1A, 0xA3, 0x1A, 0x1A, 0xA6, 0xA7, 0xA8, 0xA9, 0x1A, 0xAB,
                0xAC, 0xAD, 0x1A, 0x1A, 0xB0, 0xB1, 0xB2, 0xB3, 0x1A, 0x1A, 0x1A, 0xB7,
                0x1A, 0x1A, 0x1A, 0xBB, 0x1A, 0xBD,
            ],
        },
        EncodeRange { first: 0x037A, bytes: &[0xAA] },
        EncodeRange {
            first: 0x0384,
            bytes: &[
                0xB4, 0xB5, 0xB6, 0x1A, 0xB8, 0xB9, 0xBA, 0x1A, 0xBC, 0x1A, 0xBE, 0xBF,
                0xC0, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB,
                0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0x1A, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7,
                0xD8, 0xD9, 0xDA, 0xDB, 0xDC, 0xDD, 0xDE, 0xDF, 0xE0, 0xE1, 0xE2, 0xE3,
                0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF,
                0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0xFA, 0xFB,
                0xFC, 0xFD, 0xFE,
            ],
        },
        EncodeRange { first: 0x2015, bytes: &[0xAF, 0x1A, 0x1A, 0xA1, 0xA2] },
        EncodeRange { first: 0x20AC, bytes: &[0xA4, 0x1A, 0x1A, 0xA5] },
    ],
};

pub(super) static ISO_8859_8: CodepageTable = CodepageTable {
    base: 0xA0,
    to_unicode: &[
        0x00A0, 0xFFFD, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7,
        0x00A8, 0x00A9, 0x00D7, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
        0x00B8, 0x00B9, 0x00F7, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0x2017,
        0x05D0, 0x05D1, 0x05D2, 0x05D3, 0x05D4, 0x05D5, 0x05D6, 0x05D7,
        0x05D8, 0x05D9, 0x05DA, 0x05DB, 0x05DC, 0x05DD, 0x05DE, 0x05DF,
        0x05E0, 0x05E1, 0x05E2, 0x05E3, 0x05E4, 0x05E5, 0x05E6, 0x05E7,
        0x05E8, 0x05E9, 0x05EA, 0xFFFD, 0xFFFD, 0x200E, 0x200F, 0xFFFD,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0x1A, 0xAB,
                0xAC, 0xAD, 0xAE, 0xAF, 0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7,
                0xB8, 0xB9, 0x1A, 0xBB, 0xBC, 0xBD, 0xBE,
            ],
        },
        EncodeRange { first: 0x00D7, bytes: &[0xAA] },
        EncodeRange { first: 0x00F7, bytes: &[0xBA] },
        EncodeRange {
            first: 0x05D0,
            bytes: &[
                0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB,
                0xEC, 0xED, 0xEE, 0xEF, 0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7,
                0xF8, 0xF9, 0xFA,
            ],
        },
        EncodeRange {
            first: 0x200E,
            bytes: &[
                0xFD, 0xFE, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xDF,
            ],
        },
    ],
};

pub(super) static ISO_8859_9: CodepageTable = CodepageTable {
    base: 0xA0,
    to_unicode: &[
        0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7,
        0x00A8, 0x00A9, 0x00AA, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
        0x00B8, 0x00B9, 0x00BA, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00BF,
        0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x00C7,
        0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
        0x011E, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x00D7,
        0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x0130, 0x015E, 0x00DF,
        0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x00E7,
        0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
        0x011F, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x00F7,
        0x00F8, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x0131, 0x015F, 0x00FF,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xAB,
                0xAC, 0xAD, 0xAE, 0xAF, 0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7,
                0xB8, 0xB9, 0xBA, 0xBB, 0xBC, 0xBD, 0xBE, 0xBF, 0xC0, 0xC1, 0xC2, 0xC3,
                0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF,
                0x1A, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xDB,
                0xDC, 0x1A, 0x1A, 0xDF, 0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7,
                0xE8, 0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF, 0x1A, 0xF1, 0xF2, 0xF3,
                0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0xFA, 0xFB, 0xFC, 0x1A, 0x1A, 0xFF,
            ],
        },
        EncodeRange { first: 0x011E, bytes: &[0xD0, 0xF0] },
        EncodeRange { first: 0x0130, bytes: &[0xDD, 0xFD] },
        EncodeRange { first: 0x015E, bytes: &[0xDE, 0xFE] },
    ],
};

pub(super) static ISO_8859_10: CodepageTable = CodepageTable {
    base: 0xA0,
    to_unicode: &[
        0x00A0, 0x0104, 0x0112, 0x0122, 0x012A, 0x0128, 0x0136, 0x00A7,
        0x013B, 0x0110, 0x0160, 0x0166, 0x017D, 0x00AD, 0x016A, 0x014A,
        0x00B0, 0x0105, 0x0113, 0x0123, 0x012B, 0x0129, 0x0137, 0x00B7,
        0x013C, 0x0111, 0x0161, 0x0167, 0x017E, 0x2015, 0x016B, 0x014B,
        0x0100, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x012E,
        0x010C, 0x00C9, 0x0118, 0x00CB, 0x0116, 0x00CD, 0x00CE, 0x00CF,
        0x00D0, 0x0145, 0x014C, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x0168,
        0x00D8, 0x0172, 0x00DA, 0x00DB, 0x00DC, 0x00DD, 0x00DE, 0x00DF,
        0x0101, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x012F,
        0x010D, 0x00E9, 0x0119, 0x00EB, 0x0117, 0x00ED, 0x00EE, 0x00EF,
        0x00F0, 0x0146, 0x014D, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x0169,
        0x00F8, 0x0173, 0x00FA, 0x00FB, 0x00FC, 0x00FD, 0x00FE, 0x0138,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xA7, 0x1A, 0x1A, 0x1A, 0x1A,
                0x1A, 0xAD, 0x1A, 0x1A, 0xB0, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xB7,
            ],
        },
        EncodeRange {
            first: 0x00C1,
            bytes: &[
                0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0x1A, 0x1A, 0xC9, 0x1A, 0xCB, 0x1A,
                0xCD, 0xCE, 0xCF, 0xD0, 0x1A, 0x1A, 0xD3, 0xD4, 0xD5, 0xD6, 0x1A, 0xD8,
                0x1A, 0xDA, 0xDB, 0xDC, 0xDD, 0xDE, 0xDF, 0x1A, 0xE1, 0xE2, 0xE3, 0xE4,
                0xE5, 0xE6, 0x1A, 0x1A, 0xE9, 0x1A, 0xEB, 0x1A, 0xED, 0xEE, 0xEF, 0xF0,
                0x1A, 0x1A, 0xF3, 0xF4, 0xF5, 0xF6, 0x1A, 0xF8, 0x1A, 0xFA, 0xFB, 0xFC,
                0xFD, 0xFE, 0x1A, 0xC0, 0xE0, 0x1A, 0x1A, 0xA1, 0xB1, 0x1A, 0x1A, 0x1A,
                0x1A, 0x1A, 0x1A, 0xC8, 0xE8, 0x1A, 0x1A, 0xA9, 0xB9, 0xA2, 0xB2, 0x1A,
                0x1A, 0xCC, 0xEC, 0xCA, 0xEA, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0x1A, 0xA3, 0xB3, 0x1A, 0x1A, 0x1A, 0x1A, 0xA5, 0xB5, 0xA4, 0xB4, 0x1A,
                0x1A, 0xC7, 0xE7, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xA6, 0xB6, 0xFF,
                0x1A, 0x1A, 0xA8, 0xB8, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0xD1, 0xF1, 0x1A, 0x1A, 0x1A, 0xAF, 0xBF, 0xD2, 0xF2,
            ],
        },
        EncodeRange {
            first: 0x0160,
            bytes: &[
                0xAA, 0xBA, 0x1A, 0x1A, 0x1A, 0x1A, 0xAB, 0xBB, 0xD7, 0xF7, 0xAE, 0xBE,
                0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD9, 0xF9,
            ],
        },
        EncodeRange { first: 0x017D, bytes: &[0xAC, 0xBC] },
        EncodeRange { first: 0x2015, bytes: &[0xBD] },
    ],
};

pub(super) static ISO_8859_11: CodepageTable = CodepageTable {
    base: 0xA0,
    to_unicode: &[
        0x00A0, 0x0E01, 0x0E02, 0x0E03, 0x0E04, 0x0E05, 0x0E06, 0x0E07,
        0x0E08, 0x0E09, 0x0E0A, 0x0E0B, 0x0E0C, 0x0E0D, 0x0E0E, 0x0E0F,
        0x0E10, 0x0E11, 0x0E12, 0x0E13, 0x0E14, 0x0E15, 0x0E16, 0x0E17,
        0x0E18, 0x0E19, 0x0E1A, 0x0E1B, 0x0E1C, 0x0E1D, 0x0E1E, 0x0E1F,
        0x0E20, 0x0E21, 0x0E22, 0x0E23, 0x0E24, 0x0E25, 0x0E26, 0x0E27,
        0x0E28, 0x0E29, 0x0E2A, 0x0E2B, 0x0E2C, 0x0E2D, 0x0E2E, 0x0E2F,
        0x0E30, 0x0E31, 0x0E32, 0x0E33, 0x0E34, 0x0E35, 0x0E36, 0x0E37,
        0x0E38, 0x0E39, 0x0E3A, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0x0E3F,
        0x0E40, 0x0E41, 0x0E42, 0x0E43, 0x0E44, 0x0E45, 0x0E46, 0x0E47,
        0x0E48, 0x0E49, 0x0E4A, 0x0E4B, 0x0E4C, 0x0E4D, 0x0E4E, 0x0E4F,
        0x0E50, 0x0E51, 0x0E52, 0x0E53, 0x0E54, 0x0E55, 0x0E56, 0x0E57,
        0x0E58, 0x0E59, 0x0E5A, 0x0E5B, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
    ],
    from_unicode: &[
        EncodeRange { first: 0x00A0, bytes: &[0xA0] },
        EncodeRange {
            first: 0x0E01,
            bytes: &[
                0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xAB, 0xAC,
                0xAD, 0xAE, 0xAF, 0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8,
                0xB9, 0xBA, 0xBB, 0xBC, 0xBD, 0xBE, 0xBF, 0xC0, 0xC1, 0xC2, 0xC3, 0xC4,
                0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0,
                0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0x1A, 0x1A,
                0x1A, 0x1A, 0xDF, 0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8,
                0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF, 0xF0, 0xF1, 0xF2, 0xF3, 0xF4,
                0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0xFA, 0xFB,
            ],
        },
    ],
};

pub(super) static ISO_8859_13: CodepageTable = CodepageTable {
    base: 0xA0,
    to_unicode: &[
        0x00A0, 0x201D, 0x00A2, 0x00A3, 0x00A4, 0x201E, 0x00A6, 0x00A7,
        0x00D8, 0x00A9, 0x0156, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00C6,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x201C, 0x00B5, 0x00B6, 0x00B7,
        0x00F8, 0x00B9, 0x0157, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00E6,
        0x0104, 0x012E, 0x0100, 0x0106, 0x00C4, 0x00C5, 0x0118, 0x0112,
        0x010C, 0x00C9, 0x0179, 0x0116, 0x0122, 0x0136, 0x012A, 0x013B,
        0x0160, 0x0143, 0x0145, 0x00D3, 0x014C, 0x00D5, 0x00D6, 0x00D7,
        0x0172, 0x0141, 0x015A, 0x016A, 0x00DC, 0x017B, 0x017D, 0x00DF,
        0x0105, 0x012F, 0x0101, 0x0107, 0x00E4, 0x00E5, 0x0119, 0x0113,
        0x010D, 0x00E9, 0x017A, 0x0117, 0x0123, 0x0137, 0x012B, 0x013C,
        0x0161, 0x0144, 0x0146, 0x00F3, 0x014D, 0x00F5, 0x00F6, 0x00F7,
        0x0173, 0x0142, 0x015B, 0x016B, 0x00FC, 0x017C, 0x017E, 0x2019,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0xA2, 0xA3, 0xA4, 0x1A, 0xA6, 0xA7, 0x1A, 0xA9, 0x1A, 0xAB,
                0xAC, 0xAD, 0xAE, 0x1A, 0xB0, 0xB1, 0xB2, 0xB3, 0x1A, 0xB5, 0xB6, 0xB7,
                0x1A, 0xB9, 0x1A, 0xBB, 0xBC, 0xBD, 0xBE, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0xC4, 0xC5, 0xAF, 0x1A, 0x1A, 0xC9,
            ],
        },
        EncodeRange {
            first: 0x00D3,
            bytes: &[
                0xD3, 0x1A, 0xD5, 0xD6, 0xD7, 0xA8, 0x1A, 0x1A, 0x1A, 0xDC, 0x1A, 0x1A,
                0xDF, 0x1A, 0x1A, 0x1A, 0x1A, 0xE4, 0xE5, 0xBF, 0x1A, 0x1A, 0xE9,
            ],
        },
        EncodeRange {
            first: 0x00F3,
            bytes: &[
                0xF3, 0x1A, 0xF5, 0xF6, 0xF7, 0xB8, 0x1A, 0x1A, 0x1A, 0xFC, 0x1A, 0x1A,
                0x1A, 0xC2, 0xE2, 0x1A, 0x1A, 0xC0, 0xE0, 0xC3, 0xE3, 0x1A, 0x1A, 0x1A,
                0x1A, 0xC8, 0xE8, 0x1A, 0x1A, 0x1A, 0x1A, 0xC7, 0xE7, 0x1A, 0x1A, 0xCB,
                0xEB, 0xC6, 0xE6, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xCC,
                0xEC, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xCE, 0xEE, 0x1A, 0x1A, 0xC1,
                0xE1, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xCD, 0xED, 0x1A, 0x1A, 0x1A,
                0xCF, 0xEF, 0x1A, 0x1A, 0x1A, 0x1A, 0xD9, 0xF9, 0xD1, 0xF1, 0xD2, 0xF2,
                0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD4, 0xF4, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0x1A, 0x1A, 0x1A, 0xAA, 0xBA, 0x1A, 0x1A, 0xDA, 0xFA, 0x1A, 0x1A, 0x1A,
                0x1A, 0xD0, 0xF0, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xDB,
                0xFB, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD8, 0xF8, 0x1A, 0x1A, 0x1A,
                0x1A, 0x1A, 0xCA, 0xEA, 0xDD, 0xFD, 0xDE, 0xFE,
            ],
        },
        EncodeRange { first: 0x2019, bytes: &[0xFF, 0x1A, 0x1A, 0xB4, 0xA1, 0xA5] },
    ],
};

pub(super) static ISO_8859_14: CodepageTable = CodepageTable {
    base: 0xA0,
    to_unicode: &[
        0x00A0, 0x1E02, 0x1E03, 0x00A3, 0x010A, 0x010B, 0x1E0A, 0x00A7,
        0x1E80, 0x00A9, 0x1E82, 0x1E0B, 0x1EF2, 0x00AD, 0x00AE, 0x0178,
        0x1E1E, 0x1E1F, 0x0120, 0x0121, 0x1E40, 0x1E41, 0x00B6, 0x1E56,
        0x1E81, 0x1E57, 0x1E83, 0x1E60, 0x1EF3, 0x1E84, 0x1E85, 0x1E61,
        0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x00C7,
        0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
        0x0174, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x1E6A,
        0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x00DD, 0x0176, 0x00DF,
        0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x00E7,
        0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
        0x0175, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x1E6B,
        0x00F8, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x00FD, 0x0177, 0x00FF,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0x1A, 0xA3, 0x1A, 0x1A, 0x1A, 0xA7, 0x1A, 0xA9, 0x1A, 0x1A,
                0x1A, 0xAD, 0xAE, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xB6,
            ],
        },
        EncodeRange {
            first: 0x00C0,
            bytes: &[
                0xC0, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB,
                0xCC, 0xCD, 0xCE, 0xCF, 0x1A, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0x1A,
                0xD8, 0xD9, 0xDA, 0xDB, 0xDC, 0xDD, 0x1A, 0xDF, 0xE0, 0xE1, 0xE2, 0xE3,
                0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF,
                0x1A, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0x1A, 0xF8, 0xF9, 0xFA, 0xFB,
                0xFC, 0xFD, 0x1A, 0xFF,
            ],
        },
        EncodeRange { first: 0x010A, bytes: &[0xA4, 0xA5] },
        EncodeRange { first: 0x0120, bytes: &[0xB2, 0xB3] },
        EncodeRange { first: 0x0174, bytes: &[0xD0, 0xF0, 0xDE, 0xFE, 0xAF] },
        EncodeRange {
            first: 0x1E02,
            bytes: &[
                0xA1, 0xA2, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xA6, 0xAB,
            ],
        },
        EncodeRange { first: 0x1E1E, bytes: &[0xB0, 0xB1] },
        EncodeRange { first: 0x1E40, bytes: &[0xB4, 0xB5] },
        EncodeRange {
            first: 0x1E56,
            bytes: &[
                0xB7, 0xB9, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xBB, 0xBF,
                0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD7, 0xF7,
            ],
        },
        EncodeRange { first: 0x1E80, bytes: &[0xA8, 0xB8, 0xAA, 0xBA, 0xBD, 0xBE] },
        EncodeRange { first: 0x1EF2, bytes: &[0xAC, 0xBC] },
    ],
};

pub(super) static ISO_8859_15: CodepageTable = CodepageTable {
    base: 0xA0,
    to_unicode: &[
        0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x20AC, 0x00A5, 0x0160, 0x00A7,
        0x0161, 0x00A9, 0x00AA, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x017D, 0x00B5, 0x00B6, 0x00B7,
        0x017E, 0x00B9, 0x00BA, 0x00BB, 0x0152, 0x0153, 0x0178, 0x00BF,
        0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x00C7,
        0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
        0x00D0, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x00D7,
        0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x00DD, 0x00DE, 0x00DF,
        0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x00E7,
        0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
        0x00F0, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x00F7,
        0x00F8, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x00FD, 0x00FE, 0x00FF,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0xA1, 0xA2, 0xA3, 0x1A, 0xA5, 0x1A, 0xA7, 0x1A, 0xA9, 0xAA, 0xAB,
                0xAC, 0xAD, 0xAE, 0xAF, 0xB0, 0xB1, 0xB2, 0xB3, 0x1A, 0xB5, 0xB6, 0xB7,
                0x1A, 0xB9, 0xBA, 0xBB, 0x1A, 0x1A, 0x1A, 0xBF, 0xC0, 0xC1, 0xC2, 0xC3,
                0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF,
                0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xDB,
                0xDC, 0xDD, 0xDE, 0xDF, 0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7,
                0xE8, 0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF, 0xF0, 0xF1, 0xF2, 0xF3,
                0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0xFA, 0xFB, 0xFC, 0xFD, 0xFE, 0xFF,
            ],
        },
        EncodeRange { first: 0x0152, bytes: &[0xBC, 0xBD] },
        EncodeRange { first: 0x0160, bytes: &[0xA6, 0xA8] },
        EncodeRange { first: 0x0178, bytes: &[0xBE, 0x1A, 0x1A, 0x1A, 0x1A, 0xB4, 0xB8] },
        EncodeRange { first: 0x20AC, bytes: &[0xA4] },
    ],
};

pub(super) static ISO_8859_16: CodepageTable = CodepageTable {
    base: 0xA0,
    to_unicode: &[
        0x00A0, 0x0104, 0x0105, 0x0141, 0x20AC, 0x201E, 0x0160, 0x00A7,
        0x0161, 0x00A9, 0x0218, 0x00AB, 0x0179, 0x00AD, 0x017A, 0x017B,
        0x00B0, 0x00B1, 0x010C, 0x0142, 0x017D, 0x201D, 0x00B6, 0x00B7,
        0x017E, 0x010D, 0x0219, 0x00BB, 0x0152, 0x0153, 0x0178, 0x017C,
        0x00C0, 0x00C1, 0x00C2, 0x0102, 0x00C4, 0x0106, 0x00C6, 0x00C7,
        0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
        0x0110, 0x0143, 0x00D2, 0x00D3, 0x00D4, 0x0150, 0x00D6, 0x015A,
        0x0170, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x0118, 0x021A, 0x00DF,
        0x00E0, 0x00E1, 0x00E2, 0x0103, 0x00E4, 0x0107, 0x00E6, 0x00E7,
        0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
        0x0111, 0x0144, 0x00F2, 0x00F3, 0x00F4, 0x0151, 0x00F6, 0x015B,
        0x0171, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x0119, 0x021B, 0x00FF,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xA7, 0x1A, 0xA9, 0x1A, 0xAB,
                0x1A, 0xAD, 0x1A, 0x1A, 0xB0, 0xB1, 0x1A, 0x1A, 0x1A, 0x1A, 0xB6, 0xB7,
                0x1A, 0x1A, 0x1A, 0xBB, 0x1A, 0x1A, 0x1A, 0x1A, 0xC0, 0xC1, 0xC2, 0x1A,
                0xC4, 0x1A, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF,
                0x1A, 0x1A, 0xD2, 0xD3, 0xD4, 0x1A, 0xD6, 0x1A, 0x1A, 0xD9, 0xDA, 0xDB,
                0xDC, 0x1A, 0x1A, 0xDF, 0xE0, 0xE1, 0xE2, 0x1A, 0xE4, 0x1A, 0xE6, 0xE7,
                0xE8, 0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF, 0x1A, 0x1A, 0xF2, 0xF3,
                0xF4, 0x1A, 0xF6, 0x1A, 0x1A, 0xF9, 0xFA, 0xFB, 0xFC, 0x1A, 0x1A, 0xFF,
                0x1A, 0x1A, 0xC3, 0xE3, 0xA1, 0xA2, 0xC5, 0xE5, 0x1A, 0x1A, 0x1A, 0x1A,
                0xB2, 0xB9, 0x1A, 0x1A, 0xD0, 0xF0, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0xDD, 0xFD,
            ],
        },
        EncodeRange { first: 0x0141, bytes: &[0xA3, 0xB3, 0xD1, 0xF1] },
        EncodeRange {
            first: 0x0150,
            bytes: &[
                0xD5, 0xF5, 0xBC, 0xBD, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD7, 0xF7,
                0x1A, 0x1A, 0x1A, 0x1A, 0xA6, 0xA8,
            ],
        },
        EncodeRange {
            first: 0x0170,
            bytes: &[
                0xD8, 0xF8, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xBE, 0xAC, 0xAE, 0xAF,
                0xBF, 0xB4, 0xB8,
            ],
        },
        EncodeRange { first: 0x0218, bytes: &[0xAA, 0xBA, 0xDE, 0xFE] },
        EncodeRange { first: 0x201D, bytes: &[0xB5, 0xA5] },
        EncodeRange { first: 0x20AC, bytes: &[0xA4] },
    ],
};

pub(super) static KOI8_R: CodepageTable = CodepageTable {
    base: 0x80,
    to_unicode: &[
        0x2500, 0x2502, 0x250C, 0x2510, 0x2514, 0x2518, 0x251C, 0x2524,
        0x252C, 0x2534, 0x253C, 0x2580, 0x2584, 0x2588, 0x258C, 0x2590,
        0x2591, 0x2592, 0x2593, 0x2320, 0x25A0, 0x2219, 0x221A, 0x2248,
        0x2264, 0x2265, 0x00A0, 0x2321, 0x00B0, 0x00B2, 0x00B7, 0x00F7,
        0x2550, 0x2551, 0x2552, 0x0451, 0x2553, 0x2554, 0x2555, 0x2556,
        0x2557, 0x2558, 0x2559, 0x255A, 0x255B, 0x255C, 0x255D, 0x255E,
        0x255F, 0x2560, 0x2561, 0x0401, 0x2562, 0x2563, 0x2564, 0x2565,
        0x2566, 0x2567, 0x2568, 0x2569, 0x256A, 0x256B, 0x256C, 0x00A9,
        0x044E, 0x0430, 0x0431, 0x0446, 0x0434, 0x0435, 0x0444, 0x0433,
        0x0445, 0x0438, 0x0439, 0x043A, 0x043B, 0x043C, 0x043D, 0x043E,
        0x043F, 0x044F, 0x0440, 0x0441, 0x0442, 0x0443, 0x0436, 0x0432,
        0x044C, 0x044B, 0x0437, 0x0448, 0x044D, 0x0449, 0x0447, 0x044A,
        0x042E, 0x0410, 0x0411, 0x0426, 0x0414, 0x0415, 0x0424, 0x0413,
        0x0425, 0x0418, 0x0419, 0x041A, 0x041B, 0x041C, 0x041D, 0x041E,
        0x041F, 0x042F, 0x0420, 0x0421, 0x0422, 0x0423, 0x0416, 0x0412,
        0x042C, 0x042B, 0x0417, 0x0428, 0x042D, 0x0429, 0x0427, 0x042A,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0x9A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xBF, 0x1A, 0x1A,
                0x1A, 0x1A, 0x1A, 0x1A, 0x9C, 0x1A, 0x9D, 0x1A, 0x1A, 0x1A, 0x1A, 0x9E,
            ],
        },
        EncodeRange { first: 0x00F7, bytes: &[0x9F] },
        EncodeRange { first: 0x0401, bytes: &[0xB3] },
        EncodeRange {
            first: 0x0410,
            bytes: &[
                0xE1, 0xE2, 0xF7, 0xE7, 0xE4, 0xE5, 0xF6, 0xFA, 0xE9, 0xEA, 0xEB, 0xEC,
                0xED, 0xEE, 0xEF, 0xF0, 0xF2, 0xF3, 0xF4, 0xF5, 0xE6, 0xE8, 0xE3, 0xFE,
                0xFB, 0xFD, 0xFF, 0xF9, 0xF8, 0xFC, 0xE0, 0xF1, 0xC1, 0xC2, 0xD7, 0xC7,
                0xC4, 0xC5, 0xD6, 0xDA, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0,
                0xD2, 0xD3, 0xD4, 0xD5, 0xC6, 0xC8, 0xC3, 0xDE, 0xDB, 0xDD, 0xDF, 0xD9,
                0xD8, 0xDC, 0xC0, 0xD1, 0x1A, 0xA3,
            ],
        },
        EncodeRange { first: 0x2219, bytes: &[0x95, 0x96] },
        EncodeRange { first: 0x2248, bytes: &[0x97] },
        EncodeRange { first: 0x2264, bytes: &[0x98, 0x99] },
        EncodeRange { first: 0x2320, bytes: &[0x93, 0x9B] },
        EncodeRange { first: 0x2500, bytes: &[0x80, 0x1A, 0x81] },
        EncodeRange {
            first: 0x250C,
            bytes: &[
                0x82, 0x1A, 0x1A, 0x1A, 0x83, 0x1A, 0x1A, 0x1A, 0x84, 0x1A, 0x1A, 0x1A,
                0x85, 0x1A, 0x1A, 0x1A, 0x86, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0x87, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x88, 0x1A, 0x1A, 0x1A,
                0x1A, 0x1A, 0x1A, 0x1A, 0x89, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0x8A,
            ],
        },
        EncodeRange {
            first: 0x2550,
            bytes: &[
                0xA0, 0xA1, 0xA2, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xAB, 0xAC,
                0xAD, 0xAE, 0xAF, 0xB0, 0xB1, 0xB2, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9,
                0xBA, 0xBB, 0xBC, 0xBD, 0xBE,
            ],
        },
        EncodeRange {
            first: 0x2580,
            bytes: &[
                0x8B, 0x1A, 0x1A, 0x1A, 0x8C, 0x1A, 0x1A, 0x1A, 0x8D, 0x1A, 0x1A, 0x1A,
                0x8E, 0x1A, 0x1A, 0x1A, 0x8F, 0x90, 0x91, 0x92,
            ],
        },
        EncodeRange { first: 0x25A0, bytes: &[0x94] },
    ],
};

pub(super) static KOI8_U: CodepageTable = CodepageTable {
    base: 0x80,
    to_unicode: &[
        0x2500, 0x2502, 0x250C, 0x2510, 0x2514, 0x2518, 0x251C, 0x2524,
        0x252C, 0x2534, 0x253C, 0x2580, 0x2584, 0x2588, 0x258C, 0x2590,
        0x2591, 0x2592, 0x2593, 0x2320, 0x25A0, 0x2219, 0x221A, 0x2248,
        0x2264, 0x2265, 0x00A0, 0x2321, 0x00B0, 0x00B2, 0x00B7, 0x00F7,
        0x2550, 0x2551, 0x2552, 0x0451, 0x0454, 0x2554, 0x0456, 0x0457,
        0x2557, 0x2558, 0x2559, 0x255A, 0x255B, 0x0491, 0x255D, 0x255E,
        0x255F, 0x2560, 0x2561, 0x0401, 0x0404, 0x2563, 0x0406, 0x0407,
        0x2566, 0x2567, 0x2568, 0x2569, 0x256A, 0x0490, 0x256C, 0x00A9,
        0x044E, 0x0430, 0x0431, 0x0446, 0x0434, 0x0435, 0x0444, 0x0433,
        0x0445, 0x0438, 0x0439, 0x043A, 0x043B, 0x043C, 0x043D, 0x043E,
        0x043F, 0x044F, 0x0440, 0x0441, 0x0442, 0x0443, 0x0436, 0x0432,
        0x044C, 0x044B, 0x0437, 0x0448, 0x044D, 0x0449, 0x0447, 0x044A,
        0x042E, 0x0410, 0x0411, 0x0426, 0x0414, 0x0415, 0x0424, 0x0413,
        0x0425, 0x0418, 0x0419, 0x041A, 0x041B, 0x041C, 0x041D, 0x041E,
        0x041F, 0x042F, 0x0420, 0x0421, 0x0422, 0x0423, 0x0416, 0x0412,
        0x042C, 0x042B, 0x0417, 0x0428, 0x042D, 0x0429, 0x0427, 0x042A,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0x9A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xBF, 0x1A, 0x1A,
                0x1A, 0x1A, 0x1A, 0x1A, 0x9C, 0x1A, 0x9D, 0x1A, 0x1A, 0x1A, 0x1A, 0x9E,
            ],
        },
        EncodeRange { first: 0x00F7, bytes: &[0x9F] },
        EncodeRange {
            first: 0x0401,
            bytes: &[
                0xB3, 0x1A, 0x1A, 0xB4, 0x1A, 0xB6, 0xB7, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0x1A, 0x1A, 0x1A, 0xE1, 0xE2, 0xF7, 0xE7, 0xE4, 0xE5, 0xF6, 0xFA, 0xE9,
                0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF, 0xF0, 0xF2, 0xF3, 0xF4, 0xF5, 0xE6,
                0xE8, 0xE3, 0xFE, 0xFB, 0xFD, 0xFF, 0xF9, 0xF8, 0xFC, 0xE0, 0xF1, 0xC1,
                0xC2, 0xD7, 0xC7, 0xC4, 0xC5, 0xD6, 0xDA, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD,
                0xCE, 0xCF, 0xD0, 0xD2, 0xD3, 0xD4, 0xD5, 0xC6, 0xC8, 0xC3, 0xDE, 0xDB,
                0xDD, 0xDF, 0xD9, 0xD8, 0xDC, 0xC0, 0xD1, 0x1A, 0xA3, 0x1A, 0x1A, 0xA4,
                0x1A, 0xA6, 0xA7,
            ],
        },
        EncodeRange { first: 0x0490, bytes: &[0xBD, 0xAD] },
        EncodeRange { first: 0x2219, bytes: &[0x95, 0x96] },
        EncodeRange { first: 0x2248, bytes: &[0x97] },
        EncodeRange { first: 0x2264, bytes: &[0x98, 0x99] },
        EncodeRange { first: 0x2320, bytes: &[0x93, 0x9B] },
        EncodeRange { first: 0x2500, bytes: &[0x80, 0x1A, 0x81] },
        EncodeRange {
            first: 0x250C,
            bytes: &[
                0x82, 0x1A, 0x1A, 0x1A, 0x83, 0x1A, 0x1A, 0x1A, 0x84, 0x1A, 0x1A, 0x1A,
                0x85, 0x1A, 0x1A, 0x1A, 0x86, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0x87, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x88, 0x1A, 0x1A, 0x1A,
                0x1A, 0x1A, 0x1A, 0x1A, 0x89, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0x8A,
            ],
        },
        EncodeRange {
            first: 0x2550,
            bytes: &[
                0xA0, 0xA1, 0xA2, 0x1A, 0xA5, 0x1A, 0x1A, 0xA8, 0xA9, 0xAA, 0xAB, 0xAC,
                0x1A, 0xAE, 0xAF, 0xB0, 0xB1, 0xB2, 0x1A, 0xB5, 0x1A, 0x1A, 0xB8, 0xB9,
                0xBA, 0xBB, 0xBC, 0x1A, 0xBE,
            ],
        },
        EncodeRange {
            first: 0x2580,
            bytes: &[
                0x8B, 0x1A, 0x1A, 0x1A, 0x8C, 0x1A, 0x1A, 0x1A, 0x8D, 0x1A, 0x1A, 0x1A,
                0x8E, 0x1A, 0x1A, 0x1A, 0x8F, 0x90, 0x91, 0x92,
            ],
        },
        EncodeRange { first: 0x25A0, bytes: &[0x94] },
    ],
};

pub(super) static WINDOWS_874: CodepageTable = CodepageTable {
    base: 0x80,
    to_unicode: &[
        0x20AC, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0x2026, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0x00A0, 0x0E01, 0x0E02, 0x0E03, 0x0E04, 0x0E05, 0x0E06, 0x0E07,
        0x0E08, 0x0E09, 0x0E0A, 0x0E0B, 0x0E0C, 0x0E0D, 0x0E0E, 0x0E0F,
        0x0E10, 0x0E11, 0x0E12, 0x0E13, 0x0E14, 0x0E15, 0x0E16, 0x0E17,
        0x0E18, 0x0E19, 0x0E1A, 0x0E1B, 0x0E1C, 0x0E1D, 0x0E1E, 0x0E1F,
        0x0E20, 0x0E21, 0x0E22, 0x0E23, 0x0E24, 0x0E25, 0x0E26, 0x0E27,
        0x0E28, 0x0E29, 0x0E2A, 0x0E2B, 0x0E2C, 0x0E2D, 0x0E2E, 0x0E2F,
        0x0E30, 0x0E31, 0x0E32, 0x0E33, 0x0E34, 0x0E35, 0x0E36, 0x0E37,
        0x0E38, 0x0E39, 0x0E3A, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0x0E3F,
        0x0E40, 0x0E41, 0x0E42, 0x0E43, 0x0E44, 0x0E45, 0x0E46, 0x0E47,
        0x0E48, 0x0E49, 0x0E4A, 0x0E4B, 0x0E4C, 0x0E4D, 0x0E4E, 0x0E4F,
        0x0E50, 0x0E51, 0x0E52, 0x0E53, 0x0E54, 0x0E55, 0x0E56, 0x0E57,
        0x0E58, 0x0E59, 0x0E5A, 0x0E5B, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
    ],
    from_unicode: &[
        EncodeRange { first: 0x00A0, bytes: &[0xA0] },
        EncodeRange {
            first: 0x0E01,
            bytes: &[
                0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xAB, 0xAC,
                0xAD, 0xAE, 0xAF, 0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8,
                0xB9, 0xBA, 0xBB, 0xBC, 0xBD, 0xBE, 0xBF, 0xC0, 0xC1, 0xC2, 0xC3, 0xC4,
                0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0,
                0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0x1A, 0x1A,
                0x1A, 0x1A, 0xDF, 0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8,
                0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF, 0xF0, 0xF1, 0xF2, 0xF3, 0xF4,
                0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0xFA, 0xFB,
            ],
        },
        EncodeRange {
            first: 0x2013,
            bytes: &[
                0x96, 0x97, 0x1A, 0x1A, 0x1A, 0x91, 0x92, 0x1A, 0x1A, 0x93, 0x94, 0x1A,
                0x1A, 0x1A, 0x1A, 0x95, 0x1A, 0x1A, 0x1A, 0x85,
            ],
        },
        EncodeRange { first: 0x20AC, bytes: &[0x80] },
    ],
};

pub(super) static WINDOWS_1250: CodepageTable = CodepageTable {
    base: 0x80,
    to_unicode: &[
        0x20AC, 0xFFFD, 0x201A, 0xFFFD, 0x201E, 0x2026, 0x2020, 0x2021,
        0xFFFD, 0x2030, 0x0160, 0x2039, 0x015A, 0x0164, 0x017D, 0x0179,
        0xFFFD, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
        0xFFFD, 0x2122, 0x0161, 0x203A, 0x015B, 0x0165, 0x017E, 0x017A,
        0x00A0, 0x02C7, 0x02D8, 0x0141, 0x00A4, 0x0104, 0x00A6, 0x00A7,
        0x00A8, 0x00A9, 0x015E, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x017B,
        0x00B0, 0x00B1, 0x02DB, 0x0142, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
        0x00B8, 0x0105, 0x015F, 0x00BB, 0x013D, 0x02DD, 0x013E, 0x017C,
        0x0154, 0x00C1, 0x00C2, 0x0102, 0x00C4, 0x0139, 0x0106, 0x00C7,
        0x010C, 0x00C9, 0x0118, 0x00CB, 0x011A, 0x00CD, 0x00CE, 0x010E,
        0x0110, 0x0143, 0x0147, 0x00D3, 0x00D4, 0x0150, 0x00D6, 0x00D7,
        0x0158, 0x016E, 0x00DA, 0x0170, 0x00DC, 0x00DD, 0x0162, 0x00DF,
        0x0155, 0x00E1, 0x00E2, 0x0103, 0x00E4, 0x013A, 0x0107, 0x00E7,
        0x010D, 0x00E9, 0x0119, 0x00EB, 0x011B, 0x00ED, 0x00EE, 0x010F,
        0x0111, 0x0144, 0x0148, 0x00F3, 0x00F4, 0x0151, 0x00F6, 0x00F7,
        0x0159, 0x016F, 0x00FA, 0x0171, 0x00FC, 0x00FD, 0x0163, 0x02D9,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0x1A, 0x1A, 0xA4, 0x1A, 0xA6, 0xA7, 0xA8, 0xA9, 0x1A, 0xAB,
                0xAC, 0xAD, 0xAE, 0x1A, 0xB0, 0xB1, 0x1A, 0x1A, 0xB4, 0xB5, 0xB6, 0xB7,
                0xB8, 0x1A, 0x1A, 0xBB, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xC1, 0xC2, 0x1A,
                0xC4, 0x1A, 0x1A, 0xC7, 0x1A, 0xC9, 0x1A, 0xCB, 0x1A, 0xCD, 0xCE, 0x1A,
                0x1A, 0x1A, 0x1A, 0xD3, 0xD4, 0x1A, 0xD6, 0xD7, 0x1A, 0x1A, 0xDA, 0x1A,
                0xDC, 0xDD, 0x1A, 0xDF, 0x1A, 0xE1, 0xE2, 0x1A, 0xE4, 0x1A, 0x1A, 0xE7,
                0x1A, 0xE9, 0x1A, 0xEB, 0x1A, 0xED, 0xEE, 0x1A, 0x1A, 0x1A, 0x1A, 0xF3,
                0xF4, 0x1A, 0xF6, 0xF7, 0x1A, 0x1A, 0xFA, 0x1A, 0xFC, 0xFD, 0x1A, 0x1A,
                0x1A, 0x1A, 0xC3, 0xE3, 0xA5, 0xB9, 0xC6, 0xE6, 0x1A, 0x1A, 0x1A, 0x1A,
                0xC8, 0xE8, 0xCF, 0xEF, 0xD0, 0xF0, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0xCA, 0xEA, 0xCC, 0xEC,
            ],
        },
        EncodeRange {
            first: 0x0139,
            bytes: &[
                0xC5, 0xE5, 0x1A, 0x1A, 0xBC, 0xBE, 0x1A, 0x1A, 0xA3, 0xB3, 0xD1, 0xF1,
                0x1A, 0x1A, 0xD2, 0xF2, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD5,
                0xF5, 0x1A, 0x1A, 0xC0, 0xE0, 0x1A, 0x1A, 0xD8, 0xF8, 0x8C, 0x9C, 0x1A,
                0x1A, 0xAA, 0xBA, 0x8A, 0x9A, 0xDE, 0xFE, 0x8D, 0x9D, 0x1A, 0x1A, 0x1A,
                0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD9, 0xF9, 0xDB, 0xFB, 0x1A, 0x1A, 0x1A,
                0x1A, 0x1A, 0x1A, 0x1A, 0x8F, 0x9F, 0xAF, 0xBF, 0x8E, 0x9E,
            ],
        },
        EncodeRange { first: 0x02C7, bytes: &[0xA1] },
        EncodeRange { first: 0x02D8, bytes: &[0xA2, 0xFF, 0x1A, 0xB2, 0x1A, 0xBD] },
        EncodeRange {
            first: 0x2013,
            bytes: &[
                0x96, 0x97, 0x1A, 0x1A, 0x1A, 0x91, 0x92, 0x82, 0x1A, 0x93, 0x94, 0x84,
                0x1A, 0x86, 0x87, 0x95, 0x1A, 0x1A, 0x1A, 0x85,
            ],
        },
        EncodeRange {
            first: 0x2030,
            bytes: &[
                0x89, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x8B, 0x9B,
            ],
        },
        EncodeRange { first: 0x20AC, bytes: &[0x80] },
        EncodeRange { first: 0x2122, bytes: &[0x99] },
    ],
};

pub(super) static WINDOWS_1251: CodepageTable = CodepageTable {
    base: 0x80,
    to_unicode: &[
        0x0402, 0x0403, 0x201A, 0x0453, 0x201E, 0x2026, 0x2020, 0x2021,
        0x20AC, 0x2030, 0x0409, 0x2039, 0x040A, 0x040C, 0x040B, 0x040F,
        0x0452, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
        0xFFFD, 0x2122, 0x0459, 0x203A, 0x045A, 0x045C, 0x045B, 0x045F,
        0x00A0, 0x040E, 0x045E, 0x0408, 0x00A4, 0x0490, 0x00A6, 0x00A7,
        0x0401, 0x00A9, 0x0404, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x0407,
        0x00B0, 0x00B1, 0x0406, 0x0456, 0x0491, 0x00B5, 0x00B6, 0x00B7,
        0x0451, 0x2116, 0x0454, 0x00BB, 0x0458, 0x0405, 0x0455, 0x0457,
        0x0410, 0x0411, 0x0412, 0x0413, 0x0414, 0x0415, 0x0416, 0x0417,
        0x0418, 0x0419, 0x041A, 0x041B, 0x041C, 0x041D, 0x041E, 0x041F,
        0x0420, 0x0421, 0x0422, 0x0423, 0x0424, 0x0425, 0x0426, 0x0427,
        0x0428, 0x0429, 0x042A, 0x042B, 0x042C, 0x042D, 0x042E, 0x042F,
        0x0430, 0x0431, 0x0432, 0x0433, 0x0434, 0x0435, 0x0436, 0x0437,
        0x0438, 0x0439, 0x043A, 0x043B, 0x043C, 0x043D, 0x043E, 0x043F,
        0x0440, 0x0441, 0x0442, 0x0443, 0x0444, 0x0445, 0x0446, 0x0447,
        0x0448, 0x0449, 0x044A, 0x044B, 0x044C, 0x044D, 0x044E, 0x044F,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0x1A, 0x1A, 0xA4, 0x1A, 0xA6, 0xA7, 0x1A, 0xA9, 0x1A, 0xAB,
                0xAC, 0xAD, 0xAE, 0x1A, 0xB0, 0xB1, 0x1A, 0x1A, 0x1A, 0xB5, 0xB6, 0xB7,
                0x1A, 0x1A, 0x1A, 0xBB,
            ],
        },
        EncodeRange {
            first: 0x0401,
            bytes: &[
                0xA8, 0x80, 0x81, 0xAA, 0xBD, 0xB2, 0xAF, 0xA3, 0x8A, 0x8C, 0x8E, 0x8D,
                0x1A, 0xA1, 0x8F, 0xC0, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7, 0xC8,
                0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4,
                0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xDB, 0xDC, 0xDD, 0xDE, 0xDF, 0xE0,
                0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB, 0xEC,
                0xED, 0xEE, 0xEF, 0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8,
                0xF9, 0xFA, 0xFB, 0xFC, 0xFD, 0xFE, 0xFF, 0x1A, 0xB8, 0x90, 0x83, 0xBA,
                0xBE, 0xB3, 0xBF, 0xBC, 0x9A, 0x9C, 0x9E, 0x9D, 0x1A, 0xA2, 0x9F,
            ],
        },
        EncodeRange { first: 0x0490, bytes: &[0xA5, 0xB4] },
        EncodeRange {
            first: 0x2013,
            bytes: &[
                0x96, 0x97, 0x1A, 0x1A, 0x1A, 0x91, 0x92, 0x82, 0x1A, 0x93, 0x94, 0x84,
                0x1A, 0x86, 0x87, 0x95, 0x1A, 0x1A, 0x1A, 0x85,
            ],
        },
        EncodeRange {
            first: 0x2030,
            bytes: &[
                0x89, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x8B, 0x9B,
            ],
        },
        EncodeRange { first: 0x20AC, bytes: &[0x88] },
        EncodeRange { first: 0x2116, bytes: &[0xB9] },
        EncodeRange { first: 0x2122, bytes: &[0x99] },
    ],
};

pub(super) static WINDOWS_1252: CodepageTable = CodepageTable {
    base: 0x80,
    to_unicode: &[
        0x20AC, 0xFFFD, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021,
        0x02C6, 0x2030, 0x0160, 0x2039, 0x0152, 0xFFFD, 0x017D, 0xFFFD,
        0xFFFD, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
        0x02DC, 0x2122, 0x0161, 0x203A, 0x0153, 0xFFFD, 0x017E, 0x0178,
        0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7,
        0x00A8, 0x00A9, 0x00AA, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
        0x00B8, 0x00B9, 0x00BA, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00BF,
        0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x00C7,
        0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
        0x00D0, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x00D7,
        0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x00DD, 0x00DE, 0x00DF,
        0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x00E7,
        0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
        0x00F0, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x00F7,
        0x00F8, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x00FD, 0x00FE, 0x00FF,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xAB,
                0xAC, 0xAD, 0xAE, 0xAF, 0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7,
                0xB8, 0xB9, 0xBA, 0xBB, 0xBC, 0xBD, 0xBE, 0xBF, 0xC0, 0xC1, 0xC2, 0xC3,
                0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF,
                0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xDB,
                0xDC, 0xDD, 0xDE, 0xDF, 0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7,
                0xE8, 0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF, 0xF0, 0xF1, 0xF2, 0xF3,
                0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0xFA, 0xFB, 0xFC, 0xFD, 0xFE, 0xFF,
            ],
        },
        EncodeRange { first: 0x0152, bytes: &[0x8C, 0x9C] },
        EncodeRange { first: 0x0160, bytes: &[0x8A, 0x9A] },
        EncodeRange { first: 0x0178, bytes: &[0x9F, 0x1A, 0x1A, 0x1A, 0x1A, 0x8E, 0x9E] },
        EncodeRange { first: 0x0192, bytes: &[0x83] },
        EncodeRange { first: 0x02C6, bytes: &[0x88] },
        EncodeRange { first: 0x02DC, bytes: &[0x98] },
        EncodeRange {
            first: 0x2013,
            bytes: &[
                0x96, 0x97, 0x1A, 0x1A, 0x1A, 0x91, 0x92, 0x82, 0x1A, 0x93, 0x94, 0x84,
                0x1A, 0x86, 0x87, 0x95, 0x1A, 0x1A, 0x1A, 0x85,
            ],
        },
        EncodeRange {
            first: 0x2030,
            bytes: &[
                0x89, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x8B, 0x9B,
            ],
        },
        EncodeRange { first: 0x20AC, bytes: &[0x80] },
        EncodeRange { first: 0x2122, bytes: &[0x99] },
    ],
};

pub(super) static WINDOWS_1253: CodepageTable = CodepageTable {
    base: 0x80,
    to_unicode: &[
        0x20AC, 0xFFFD, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021,
        0xFFFD, 0x2030, 0xFFFD, 0x2039, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
        0xFFFD, 0x2122, 0xFFFD, 0x203A, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0x00A0, 0x0385, 0x0386, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7,
        0x00A8, 0x00A9, 0xFFFD, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x2015,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x0384, 0x00B5, 0x00B6, 0x00B7,
        0x0388, 0x0389, 0x038A, 0x00BB, 0x038C, 0x00BD, 0x038E, 0x038F,
        0x0390, 0x0391, 0x0392, 0x0393, 0x0394, 0x0395, 0x0396, 0x0397,
        0x0398, 0x0399, 0x039A, 0x039B, 0x039C, 0x039D, 0x039E, 0x039F,
        0x03A0, 0x03A1, 0xFFFD, 0x03A3, 0x03A4, 0x03A5, 0x03A6, 0x03A7,
        0x03A8, 0x03A9, 0x03AA, 0x03AB, 0x03AC, 0x03AD, 0x03AE, 0x03AF,
        0x03B0, 0x03B1, 0x03B2, 0x03B3, 0x03B4, 0x03B5, 0x03B6, 0x03B7,
        0x03B8, 0x03B9, 0x03BA, 0x03BB, 0x03BC, 0x03BD, 0x03BE, 0x03BF,
        0x03C0, 0x03C1, 0x03C2, 0x03C3, 0x03C4, 0x03C5, 0x03C6, 0x03C7,
        0x03C8, 0x03C9, 0x03CA, 0x03CB, 0x03CC, 0x03CD, 0x03CE, 0xFFFD,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0x1A, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0x1A, 0xAB,
                0xAC, 0xAD, 0xAE, 0x1A, 0xB0, 0xB1, 0xB2, 0xB3, 0x1A, 0xB5, 0xB6, 0xB7,
                0x1A, 0x1A, 0x1A, 0xBB, 0x1A, 0xBD,
            ],
        },
        EncodeRange { first: 0x0192, bytes: &[0x83] },
        EncodeRange {
            first: 0x0384,
            bytes: &[
                0xB4, 0xA1, 0xA2, 0x1A, 0xB8, 0xB9, 0xBA, 0x1A, 0xBC, 0x1A, 0xBE, 0xBF,
                0xC0, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB,
                0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0x1A, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7,
                0xD8, 0xD9, 0xDA, 0xDB, 0xDC, 0xDD, 0xDE, 0xDF, 0xE0, 0xE1, 0xE2, 0xE3,
                0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF,
                0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0xFA, 0xFB,
                0xFC, 0xFD, 0xFE,
            ],
        },
        EncodeRange {
            first: 0x2013,
            bytes: &[
                0x96, 0x97, 0xAF, 0x1A, 0x1A, 0x91, 0x92, 0x82, 0x1A, 0x93, 0x94, 0x84,
                0x1A, 0x86, 0x87, 0x95, 0x1A, 0x1A, 0x1A, 0x85,
            ],
        },
        EncodeRange {
            first: 0x2030,
            bytes: &[
                0x89, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x8B, 0x9B,
            ],
        },
        EncodeRange { first: 0x20AC, bytes: &[0x80] },
        EncodeRange { first: 0x2122, bytes: &[0x99] },
    ],
};

pub(super) static WINDOWS_1254: CodepageTable = CodepageTable {
    base: 0x80,
    to_unicode: &[
        0x20AC, 0xFFFD, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021,
        0x02C6, 0x2030, 0x0160, 0x2039, 0x0152, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
        0x02DC, 0x2122, 0x0161, 0x203A, 0x0153, 0xFFFD, 0xFFFD, 0x0178,
        0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7,
        0x00A8, 0x00A9, 0x00AA, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
        0x00B8, 0x00B9, 0x00BA, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00BF,
        0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x00C7,
        0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
        0x011E, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x00D7,
        0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x0130, 0x015E, 0x00DF,
        0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x00E7,
        0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
        0x011F, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x00F7,
        0x00F8, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x0131, 0x015F, 0x00FF,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xAB,
                0xAC, 0xAD, 0xAE, 0xAF, 0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7,
                0xB8, 0xB9, 0xBA, 0xBB, 0xBC, 0xBD, 0xBE, 0xBF, 0xC0, 0xC1, 0xC2, 0xC3,
                0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF,
                0x1A, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xDB,
                0xDC, 0x1A, 0x1A, 0xDF, 0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7,
                0xE8, 0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF, 0x1A, 0xF1, 0xF2, 0xF3,
                0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0xFA, 0xFB, 0xFC, 0x1A, 0x1A, 0xFF,
            ],
        },
        EncodeRange { first: 0x011E, bytes: &[0xD0, 0xF0] },
        EncodeRange { first: 0x0130, bytes: &[0xDD, 0xFD] },
        EncodeRange { first: 0x0152, bytes: &[0x8C, 0x9C] },
        EncodeRange { first: 0x015E, bytes: &[0xDE, 0xFE, 0x8A, 0x9A] },
        EncodeRange { first: 0x0178, bytes: &[0x9F] },
        EncodeRange { first: 0x0192, bytes: &[0x83] },
        EncodeRange { first: 0x02C6, bytes: &[0x88] },
        EncodeRange { first: 0x02DC, bytes: &[0x98] },
        EncodeRange {
            first: 0x2013,
            bytes: &[
                0x96, 0x97, 0x1A, 0x1A, 0x1A, 0x91, 0x92, 0x82, 0x1A, 0x93, 0x94, 0x84,
                0x1A, 0x86, 0x87, 0x95, 0x1A, 0x1A, 0x1A, 0x85,
            ],
        },
        EncodeRange {
            first: 0x2030,
            bytes: &[
                0x89, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x8B, 0x9B,
            ],
        },
        EncodeRange { first: 0x20AC, bytes: &[0x80] },
        EncodeRange { first: 0x2122, bytes: &[0x99] },
    ],
};

pub(super) static WINDOWS_1255: CodepageTable = CodepageTable {
    base: 0x80,
    to_unicode: &[
        0x20AC, 0xFFFD, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021,
        0x02C6, 0x2030, 0xFFFD, 0x2039, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
        0x02DC, 0x2122, 0xFFFD, 0x203A, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x20AA, 0x00A5, 0x00A6, 0x00A7,
        0x00A8, 0x00A9, 0x00D7, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
        0x00B8, 0x00B9, 0x00F7, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00BF,
        0x05B0, 0x05B1, 0x05B2, 0x05B3, 0x05B4, 0x05B5, 0x05B6, 0x05B7,
        0x05B8, 0x05B9, 0xFFFD, 0x05BB, 0x05BC, 0x05BD, 0x05BE, 0x05BF,
        0x05C0, 0x05C1, 0x05C2, 0x05C3, 0x05F0, 0x05F1, 0x05F2, 0x05F3,
        0x05F4, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0x05D0, 0x05D1, 0x05D2, 0x05D3, 0x05D4, 0x05D5, 0x05D6, 0x05D7,
        0x05D8, 0x05D9, 0x05DA, 0x05DB, 0x05DC, 0x05DD, 0x05DE, 0x05DF,
        0x05E0, 0x05E1, 0x05E2, 0x05E3, 0x05E4, 0x05E5, 0x05E6, 0x05E7,
        0x05E8, 0x05E9, 0x05EA, 0xFFFD, 0xFFFD, 0x200E, 0x200F, 0xFFFD,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0xA1, 0xA2, 0xA3, 0x1A, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0x1A, 0xAB,
                0xAC, 0xAD, 0xAE, 0xAF, 0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7,
                0xB8, 0xB9, 0x1A, 0xBB, 0xBC, 0xBD, 0xBE, 0xBF,
            ],
        },
        EncodeRange { first: 0x00D7, bytes: &[0xAA] },
        EncodeRange { first: 0x00F7, bytes: &[0xBA] },
        EncodeRange { first: 0x0192, bytes: &[0x83] },
        EncodeRange { first: 0x02C6, bytes: &[0x88] },
        EncodeRange { first: 0x02DC, bytes: &[0x98] },
        EncodeRange {
            first: 0x05B0,
            bytes: &[
                0xC0, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0x1A, 0xCB,
                0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3,
            ],
        },
        EncodeRange {
            first: 0x05D0,
            bytes: &[
                0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB,
                0xEC, 0xED, 0xEE, 0xEF, 0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7,
                0xF8, 0xF9, 0xFA, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD4, 0xD5, 0xD6, 0xD7,
                0xD8,
            ],
        },
        EncodeRange {
            first: 0x200E,
            bytes: &[
                0xFD, 0xFE, 0x1A, 0x1A, 0x1A, 0x96, 0x97, 0x1A, 0x1A, 0x1A, 0x91, 0x92,
                0x82, 0x1A, 0x93, 0x94, 0x84, 0x1A, 0x86, 0x87, 0x95, 0x1A, 0x1A, 0x1A,
                0x85,
            ],
        },
        EncodeRange {
            first: 0x2030,
            bytes: &[
                0x89, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x8B, 0x9B,
            ],
        },
        EncodeRange { first: 0x20AA, bytes: &[0xA4, 0x1A, 0x80] },
        EncodeRange { first: 0x2122, bytes: &[0x99] },
    ],
};

pub(super) static WINDOWS_1256: CodepageTable = CodepageTable {
    base: 0x80,
    to_unicode: &[
        0x20AC, 0x067E, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021,
        0x02C6, 0x2030, 0x0679, 0x2039, 0x0152, 0x0686, 0x0698, 0x0688,
        0x06AF, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
        0x06A9, 0x2122, 0x0691, 0x203A, 0x0153, 0x200C, 0x200D, 0x06BA,
        0x00A0, 0x060C, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7,
        0x00A8, 0x00A9, 0x06BE, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
        0x00B8, 0x00B9, 0x061B, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x061F,
        0x06C1, 0x0621, 0x0622, 0x0623, 0x0624, 0x0625, 0x0626, 0x0627,
        0x0628, 0x0629, 0x062A, 0x062B, 0x062C, 0x062D, 0x062E, 0x062F,
        0x0630, 0x0631, 0x0632, 0x0633, 0x0634, 0x0635, 0x0636, 0x00D7,
        0x0637, 0x0638, 0x0639, 0x063A, 0x0640, 0x0641, 0x0642, 0x0643,
        0x00E0, 0x0644, 0x00E2, 0x0645, 0x0646, 0x0647, 0x0648, 0x00E7,
        0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x0649, 0x064A, 0x00EE, 0x00EF,
        0x064B, 0x064C, 0x064D, 0x064E, 0x00F4, 0x064F, 0x0650, 0x00F7,
        0x0651, 0x00F9, 0x0652, 0x00FB, 0x00FC, 0x200E, 0x200F, 0x06D2,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0x1A, 0xAB,
                0xAC, 0xAD, 0xAE, 0xAF, 0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7,
                0xB8, 0xB9, 0x1A, 0xBB, 0xBC, 0xBD, 0xBE,
            ],
        },
        EncodeRange {
            first: 0x00D7,
            bytes: &[
                0xD7, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xE0, 0x1A, 0xE2,
                0x1A, 0x1A, 0x1A, 0x1A, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB, 0x1A, 0x1A, 0xEE,
                0xEF, 0x1A, 0x1A, 0x1A, 0x1A, 0xF4, 0x1A, 0x1A, 0xF7, 0x1A, 0xF9, 0x1A,
                0xFB, 0xFC,
            ],
        },
        EncodeRange { first: 0x0152, bytes: &[0x8C, 0x9C] },
        EncodeRange { first: 0x0192, bytes: &[0x83] },
        EncodeRange { first: 0x02C6, bytes: &[0x88] },
        EncodeRange { first: 0x060C, bytes: &[0xA1] },
        EncodeRange {
            first: 0x061B,
            bytes: &[
                0xBA, 0x1A, 0x1A, 0x1A, 0xBF, 0x1A, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6,
                0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2,
                0xD3, 0xD4, 0xD5, 0xD6, 0xD8, 0xD9, 0xDA, 0xDB, 0x1A, 0x1A, 0x1A, 0x1A,
                0x1A, 0xDC, 0xDD, 0xDE, 0xDF, 0xE1, 0xE3, 0xE4, 0xE5, 0xE6, 0xEC, 0xED,
                0xF0, 0xF1, 0xF2, 0xF3, 0xF5, 0xF6, 0xF8, 0xFA,
            ],
        },
        EncodeRange {
            first: 0x0679,
            bytes: &[
                0x8A, 0x1A, 0x1A, 0x1A, 0x1A, 0x81, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0x1A, 0x8D, 0x1A, 0x8F, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0x9A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x8E,
            ],
        },
        EncodeRange { first: 0x06A9, bytes: &[0x98, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x90] },
        EncodeRange { first: 0x06BA, bytes: &[0x9F, 0x1A, 0x1A, 0x1A, 0xAA, 0x1A, 0x1A, 0xC0] },
        EncodeRange { first: 0x06D2, bytes: &[0xFF] },
        EncodeRange {
            first: 0x200C,
            bytes: &[
                0x9D, 0x9E, 0xFD, 0xFE, 0x1A, 0x1A, 0x1A, 0x96, 0x97, 0x1A, 0x1A, 0x1A,
                0x91, 0x92, 0x82, 0x1A, 0x93, 0x94, 0x84, 0x1A, 0x86, 0x87, 0x95, 0x1A,
                0x1A, 0x1A, 0x85,
            ],
        },
        EncodeRange {
            first: 0x2030,
            bytes: &[
                0x89, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x8B, 0x9B,
            ],
        },
        EncodeRange { first: 0x20AC, bytes: &[0x80] },
        EncodeRange { first: 0x2122, bytes: &[0x99] },
    ],
};

pub(super) static WINDOWS_1257: CodepageTable = CodepageTable {
    base: 0x80,
    to_unicode: &[
        0x20AC, 0xFFFD, 0x201A, 0xFFFD, 0x201E, 0x2026, 0x2020, 0x2021,
        0xFFFD, 0x2030, 0xFFFD, 0x2039, 0xFFFD, 0x00A8, 0x02C7, 0x00B8,
        0xFFFD, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
        0xFFFD, 0x2122, 0xFFFD, 0x203A, 0xFFFD, 0x00AF, 0x02DB, 0xFFFD,
        0x00A0, 0xFFFD, 0x00A2, 0x00A3, 0x00A4, 0xFFFD, 0x00A6, 0x00A7,
        0x00D8, 0x00A9, 0x0156, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00C6,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
        0x00F8, 0x00B9, 0x0157, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00E6,
        0x0104, 0x012E, 0x0100, 0x0106, 0x00C4, 0x00C5, 0x0118, 0x0112,
        0x010C, 0x00C9, 0x0179, 0x0116, 0x0122, 0x0136, 0x012A, 0x013B,
        0x0160, 0x0143, 0x0145, 0x00D3, 0x014C, 0x00D5, 0x00D6, 0x00D7,
        0x0172, 0x0141, 0x015A, 0x016A, 0x00DC, 0x017B, 0x017D, 0x00DF,
        0x0105, 0x012F, 0x0101, 0x0107, 0x00E4, 0x00E5, 0x0119, 0x0113,
        0x010D, 0x00E9, 0x017A, 0x0117, 0x0123, 0x0137, 0x012B, 0x013C,
        0x0161, 0x0144, 0x0146, 0x00F3, 0x014D, 0x00F5, 0x00F6, 0x00F7,
        0x0173, 0x0142, 0x015B, 0x016B, 0x00FC, 0x017C, 0x017E, 0x02D9,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0x1A, 0xA2, 0xA3, 0xA4, 0x1A, 0xA6, 0xA7, 0x8D, 0xA9, 0x1A, 0xAB,
                0xAC, 0xAD, 0xAE, 0x9D, 0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7,
                0x8F, 0xB9, 0x1A, 0xBB, 0xBC, 0xBD, 0xBE, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0xC4, 0xC5, 0xAF, 0x1A, 0x1A, 0xC9,
            ],
        },
        EncodeRange {
            first: 0x00D3,
            bytes: &[
                0xD3, 0x1A, 0xD5, 0xD6, 0xD7, 0xA8, 0x1A, 0x1A, 0x1A, 0xDC, 0x1A, 0x1A,
                0xDF, 0x1A, 0x1A, 0x1A, 0x1A, 0xE4, 0xE5, 0xBF, 0x1A, 0x1A, 0xE9,
            ],
        },
        EncodeRange {
            first: 0x00F3,
            bytes: &[
                0xF3, 0x1A, 0xF5, 0xF6, 0xF7, 0xB8, 0x1A, 0x1A, 0x1A, 0xFC, 0x1A, 0x1A,
                0x1A, 0xC2, 0xE2, 0x1A, 0x1A, 0xC0, 0xE0, 0xC3, 0xE3, 0x1A, 0x1A, 0x1A,
                0x1A, 0xC8, 0xE8, 0x1A, 0x1A, 0x1A, 0x1A, 0xC7, 0xE7, 0x1A, 0x1A, 0xCB,
                0xEB, 0xC6, 0xE6, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xCC,
                0xEC, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xCE, 0xEE, 0x1A, 0x1A, 0xC1,
                0xE1, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xCD, 0xED, 0x1A, 0x1A, 0x1A,
                0xCF, 0xEF, 0x1A, 0x1A, 0x1A, 0x1A, 0xD9, 0xF9, 0xD1, 0xF1, 0xD2, 0xF2,
                0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD4, 0xF4, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A,
                0x1A, 0x1A, 0x1A, 0xAA, 0xBA, 0x1A, 0x1A, 0xDA, 0xFA, 0x1A, 0x1A, 0x1A,
                0x1A, 0xD0, 0xF0, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xDB,
                0xFB, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD8, 0xF8, 0x1A, 0x1A, 0x1A,
                0x1A, 0x1A, 0xCA, 0xEA, 0xDD, 0xFD, 0xDE, 0xFE,
            ],
        },
        EncodeRange { first: 0x02C7, bytes: &[0x8E] },
        EncodeRange { first: 0x02D9, bytes: &[0xFF, 0x1A, 0x9E] },
        EncodeRange {
            first: 0x2013,
            bytes: &[
                0x96, 0x97, 0x1A, 0x1A, 0x1A, 0x91, 0x92, 0x82, 0x1A, 0x93, 0x94, 0x84,
                0x1A, 0x86, 0x87, 0x95, 0x1A, 0x1A, 0x1A, 0x85,
            ],
        },
        EncodeRange {
            first: 0x2030,
            bytes: &[
                0x89, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x8B, 0x9B,
            ],
        },
        EncodeRange { first: 0x20AC, bytes: &[0x80] },
        EncodeRange { first: 0x2122, bytes: &[0x99] },
    ],
};

pub(super) static WINDOWS_1258: CodepageTable = CodepageTable {
    base: 0x80,
    to_unicode: &[
        0x20AC, 0xFFFD, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021,
        0x02C6, 0x2030, 0xFFFD, 0x2039, 0x0152, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
        0x02DC, 0x2122, 0xFFFD, 0x203A, 0x0153, 0xFFFD, 0xFFFD, 0x0178,
        0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7,
        0x00A8, 0x00A9, 0x00AA, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
        0x00B8, 0x00B9, 0x00BA, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00BF,
        0x00C0, 0x00C1, 0x00C2, 0x0102, 0x00C4, 0x00C5, 0x00C6, 0x00C7,
        0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x0300, 0x00CD, 0x00CE, 0x00CF,
        0x0110, 0x00D1, 0x0309, 0x00D3, 0x00D4, 0x01A0, 0x00D6, 0x00D7,
        0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x01AF, 0x0303, 0x00DF,
        0x00E0, 0x00E1, 0x00E2, 0x0103, 0x00E4, 0x00E5, 0x00E6, 0x00E7,
        0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x0301, 0x00ED, 0x00EE, 0x00EF,
        0x0111, 0x00F1, 0x0323, 0x00F3, 0x00F4, 0x01A1, 0x00F6, 0x00F7,
        0x00F8, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x01B0, 0x20AB, 0x00FF,
    ],
    from_unicode: &[
        EncodeRange {
            first: 0x00A0,
            bytes: &[
                0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xAB,
                0xAC, 0xAD, 0xAE, 0xAF, 0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7,
                0xB8, 0xB9, 0xBA, 0xBB, 0xBC, 0xBD, 0xBE, 0xBF, 0xC0, 0xC1, 0xC2, 0x1A,
                0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0x1A, 0xCD, 0xCE, 0xCF,
                0x1A, 0xD1, 0x1A, 0xD3, 0xD4, 0x1A, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xDB,
                0xDC, 0x1A, 0x1A, 0xDF, 0xE0, 0xE1, 0xE2, 0x1A, 0xE4, 0xE5, 0xE6, 0xE7,
                0xE8, 0xE9, 0xEA, 0xEB, 0x1A, 0xED, 0xEE, 0xEF, 0x1A, 0xF1, 0x1A, 0xF3,
                0xF4, 0x1A, 0xF6, 0xF7, 0xF8, 0xF9, 0xFA, 0xFB, 0xFC, 0x1A, 0x1A, 0xFF,
                0x1A, 0x1A, 0xC3, 0xE3,
            ],
        },
        EncodeRange { first: 0x0110, bytes: &[0xD0, 0xF0] },
        EncodeRange { first: 0x0152, bytes: &[0x8C, 0x9C] },
        EncodeRange { first: 0x0178, bytes: &[0x9F] },
        EncodeRange { first: 0x0192, bytes: &[0x83] },
        EncodeRange { first: 0x01A0, bytes: &[0xD5, 0xF5] },
        EncodeRange { first: 0x01AF, bytes: &[0xDD, 0xFD] },
        EncodeRange { first: 0x02C6, bytes: &[0x88] },
        EncodeRange { first: 0x02DC, bytes: &[0x98] },
        EncodeRange {
            first: 0x0300,
            bytes: &[
                0xCC, 0xEC, 0x1A, 0xDE, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0xD2,
            ],
        },
        EncodeRange { first: 0x0323, bytes: &[0xF2] },
        EncodeRange {
            first: 0x2013,
            bytes: &[
                0x96, 0x97, 0x1A, 0x1A, 0x1A, 0x91, 0x92, 0x82, 0x1A, 0x93, 0x94, 0x84,
                0x1A, 0x86, 0x87, 0x95, 0x1A, 0x1A, 0x1A, 0x85,
            ],
        },
        EncodeRange {
            first: 0x2030,
            bytes: &[
                0x89, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x1A, 0x8B, 0x9B,
            ],
        },
        EncodeRange { first: 0x20AB, bytes: &[0xFE, 0x80] },
        EncodeRange { first: 0x2122, bytes: &[0x99] },
    ],
};
