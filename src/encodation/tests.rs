//! Integration tests driving the full dispatcher end to end, one target
//! scheme at a time. Expected codeword sequences are taken from known-good
//! Data Matrix encodations; alternative legal encodings are noted where the
//! standard allows more than one correct answer.
use super::{encode_single_scheme, EncodationType};
use crate::symbol_size::SymbolList;

fn enc(data: &[u8], target: EncodationType) -> Vec<u8> {
    encode_single_scheme(data, target, SymbolList::default())
        .unwrap()
        .0
}

#[test]
fn test_ascii_encodation_two_digits() {
    assert_eq!(enc(b"123456", EncodationType::Ascii), vec![142, 164, 186]);
}

#[test]
fn test_ascii_encodation_two_digits_with_upper() {
    assert_eq!(
        enc(b"123456\xa3", EncodationType::Ascii),
        vec![142, 164, 186, 235, 36]
    );
}

#[test]
fn test_ascii_encodation_example1() {
    assert_eq!(
        enc(b"30Q324343430794<OQQ", EncodationType::Ascii),
        vec![160, 82, 162, 173, 173, 173, 137, 224, 61, 80, 82, 82]
    );
}

#[test]
fn test_hello_world_ascii() {
    // exactly 12 ASCII codewords, which is Square16's full data capacity,
    // so there is no padding to account for
    assert_eq!(
        enc(b"Hello World!", EncodationType::Ascii),
        vec![73, 102, 109, 109, 112, 33, 88, 112, 115, 109, 101, 34]
    );
}

#[test]
fn test_c40_basic2_3() {
    assert_eq!(
        enc(b"AIMAIMAIM\xcb", EncodationType::C40),
        vec![230, 91, 11, 91, 11, 91, 11, 11, 9, 254],
    );
}

#[test]
fn test_c40_spec_example() {
    assert_eq!(
        enc(b"A_2_D_5_G7H_9J_1L2", EncodationType::C40),
        vec![230, 87, 195, 37, 195, 106, 131, 56, 131, 126, 206, 10, 94, 144, 3, 35, 47, 254],
    );
}

#[test]
fn test_c40_special_case_a() {
    // case "a": unlatch is not required, the pad itself closes the symbol
    assert_eq!(
        enc(b"lvzvlv", EncodationType::C40),
        vec![239, 161, 224, 222, 204]
    );
}

#[test]
fn test_c40_special_case_b() {
    // case "b": trailing Shift1 pad value, no unlatch
    assert_eq!(
        enc(b"\x83)nnnnnnnn\xb8", EncodationType::C40),
        vec![235, 4, 42, 239, 173, 20, 173, 20, 172, 250, 189, 97]
    );
}

#[test]
fn test_c40_special_case_c() {
    // case "c": unlatch, then the last character in ASCII
    assert_eq!(
        enc(b"?      T        \xda  \x10", EncodationType::C40),
        vec![64, 230, 19, 60, 19, 60, 206, 188, 19, 60, 19, 60, 11, 24, 19, 57, 254, 17],
    );
}

#[test]
fn test_c40_special_case_d() {
    // case "d": skip the unlatch, write the last character in ASCII
    assert_eq!(
        enc(b"    \x1d    ", EncodationType::C40),
        vec![230, 19, 60, 18, 222, 19, 60, 33]
    );
}

#[test]
fn test_c40_special_cases2() {
    // more than 2 codewords of room left, exactly 2 pending values:
    // unlatch and encode the tail as ASCII
    assert_eq!(
        enc(b"AIMAIMAIMAIMAIMAIMAI", EncodationType::C40),
        vec![230, 91, 11, 91, 11, 91, 11, 91, 11, 91, 11, 91, 11, 254, 66, 74]
    );
}

#[test]
fn test_c40_lowercase_via_shift3() {
    // lowercase letters stay in C40 (the target scheme is fixed) and go
    // through Shift 3 rather than switching schemes like an optimizer
    // would; the run packs into whole triplets with nothing left over.
    let words = enc(b"AIMAIMAIMAIMaimaimaim", EncodationType::C40);
    let prefix = vec![
        230, 91, 11, 91, 11, 91, 11, 91, 11, 12, 171, 56, 158, 12, 171, 56, 158, 12, 171, 56, 158,
        254,
    ];
    assert_eq!(&words[..prefix.len()], &prefix[..]);
}

#[test]
fn test_text_encoding_1() {
    assert_eq!(
        enc(b"aimaimaim", EncodationType::Text),
        vec![239, 91, 11, 91, 11, 91, 11, 254]
    );
}

#[test]
fn test_text_encoding_2() {
    assert_eq!(
        enc(b"aimaimaim'", EncodationType::Text),
        vec![239, 91, 11, 91, 11, 91, 11, 254, 40, 129]
    );
}

#[test]
fn test_text_encoding_3() {
    assert_eq!(
        enc(b"aimaimaIm", EncodationType::Text),
        vec![239, 91, 11, 91, 11, 87, 218, 110]
    );
}

#[test]
fn test_text_encoding_4() {
    assert_eq!(
        enc(b"aimaimaimB", EncodationType::Text),
        vec![239, 91, 11, 91, 11, 91, 11, 254, 67, 129]
    );
}

#[test]
fn test_x12_1() {
    assert_eq!(
        enc(b"AB\x0d>ABC123>AB", EncodationType::X12),
        vec![238, 89, 217, 14, 192, 100, 207, 44, 31, 67]
    );
}

#[test]
fn test_x12_2a() {
    assert_eq!(
        enc(b"AB\x0d>ABC123>ABC", EncodationType::X12),
        // BC is left as an incomplete triple, the end rule doesn't apply
        vec![238, 89, 217, 14, 192, 100, 207, 44, 31, 254, 67, 68]
    );
}

#[test]
fn test_x12_2b() {
    assert_eq!(
        enc(b"AB\x0d>ABC123>A00", EncodationType::X12),
        // 00 is an incomplete triple, but the end rule applies here and it
        // fits as a single ASCII codeword (130)
        vec![238, 89, 217, 14, 192, 100, 207, 44, 31, 130]
    );
}

#[test]
fn test_x12_3() {
    assert_eq!(
        enc(b"AB\x0d>ABC123>ABCD", EncodationType::X12),
        vec![238, 89, 217, 14, 192, 100, 207, 44, 31, 96, 82, 254]
    );
}

#[test]
fn test_x12_unlatch_ascii() {
    assert_eq!(
        enc(b"*\x0d*******00", EncodationType::X12),
        vec![238, 6, 66, 6, 106, 6, 106, 130]
    );
}

#[test]
fn test_x12_unlatch_2() {
    assert_eq!(
        enc(b"*\x0dTCP0", EncodationType::X12),
        vec![238, 6, 98, 104, 141]
    );
}

#[test]
fn test_edifact_1() {
    assert_eq!(
        enc(b".A.C1.3.DATA.123DATA.123DATA", EncodationType::Edifact),
        vec![
            240, 184, 27, 131, 198, 236, 238, 16, 21, 1, 187, 28, 179, 16, 21, 1, 187, 28, 179, 16,
            21, 1
        ]
    );
}

#[test]
fn test_edifact_2() {
    assert_eq!(
        enc(b".A.C1.3.X.X2..", EncodationType::Edifact),
        vec![240, 184, 27, 131, 198, 236, 238, 98, 230, 50, 47, 47]
    );
}

#[test]
fn test_edifact_6() {
    assert_eq!(
        enc(b".A.C1.3.X.", EncodationType::Edifact),
        // 240 LATCH, ".A.C" 184 27 131, "1.3." 198 236 238, "X." 98 231 192
        vec![240, 184, 27, 131, 198, 236, 238, 98, 231, 192]
    );
}

#[test]
fn test_edifact_7() {
    assert_eq!(
        enc(b".A.C1.3.X", EncodationType::Edifact),
        vec![240, 184, 27, 131, 198, 236, 238, 89]
    );
}

#[test]
fn test_edifact_8() {
    // an out-of-range byte arriving off the 4-value chain boundary: there is
    // no scheme search here to replan around it, so encoding the requested
    // scheme fails outright rather than detouring through ASCII and back
    use super::{EncodeError, InvalidReason};
    let err = encode_single_scheme(
        b".XXX.XXX.XXX.XXX.XXX.XXX.\xFCXX.XXX.XXX.XXX.XXX.XXX.XXX",
        EncodationType::Edifact,
        SymbolList::default(),
    )
    .unwrap_err();
    assert_eq!(err, EncodeError::Invalid(InvalidReason::UnsupportedChar));
}

#[test]
fn test_edifact_short() {
    assert_eq!(
        enc(b"CR%X-----", EncodationType::Edifact),
        vec![240, 13, 41, 88, 182, 219, 109, 46]
    );
}

fn create_binary_test_message(len: usize) -> Vec<u8> {
    let mut vec = vec![171, 228, 246, 252, 233, 224, 225, 45];
    vec.resize(len - 1, b'\xB7');
    vec.push(b'\xBB');
    vec
}

#[test]
fn test_base256_1() {
    assert_eq!(
        enc(b"\xab\xe4\xf6\xfc\xe9\xbb", EncodationType::Base256),
        vec![231, 44, 108, 59, 226, 126, 1, 104]
    );
}

#[test]
fn test_base256_2() {
    assert_eq!(
        enc(b"\xab\xe4\xf6\xfc\xe9\xe0\xbb", EncodationType::Base256),
        vec![231, 51, 108, 59, 226, 126, 1, 141, 254, 129]
    );
}

#[test]
fn test_base256_3() {
    assert_eq!(
        enc(b"\xab\xe4\xf6\xfc\xe9\xe0\xe1\xbb", EncodationType::Base256),
        vec![231, 44, 108, 59, 226, 126, 1, 141, 36, 147]
    );
}

#[test]
fn test_base256_padding_at_end() {
    assert_eq!(
        enc(&create_binary_test_message(20), EncodationType::Base256),
        vec![
            231, 44, 108, 59, 226, 126, 1, 141, 36, 5, 37, 187, 80, 230, 123, 17, 166, 60, 210,
            103, 253, 150
        ]
    );
}

#[test]
fn test_base256_8() {
    assert_eq!(
        enc(&create_binary_test_message(19), EncodationType::Base256),
        vec![
            231, 63, 108, 59, 226, 126, 1, 141, 36, 5, 37, 187, 80, 230, 123, 17, 166, 60, 210,
            103, 1, 129
        ],
    );
}

#[test]
fn test_base256_two_byte_header() {
    let words = encode_single_scheme(
        &create_binary_test_message(276),
        EncodationType::Base256,
        SymbolList::all(),
    )
    .unwrap()
    .0;
    let start = vec![231, 38, 219, 2, 208, 120, 20, 150, 35];
    assert_eq!(&words[..start.len()], &start);
    let end = vec![146, 40, 194, 129];
    assert_eq!(&words[words.len() - end.len()..], &end);
}

#[test]
fn test_only_base256_short() {
    assert_eq!(
        enc(b"01", EncodationType::Base256),
        vec![231, 46, 241, 136, 129],
    );
}

#[test]
fn test_only_edifact_short() {
    assert_eq!(enc(b"01", EncodationType::Edifact), vec![240, 131, 129],);
}

#[test]
fn test_x12_rejects_lowercase() {
    use super::{EncodeError, InvalidReason};
    let err =
        encode_single_scheme(b"ab", EncodationType::X12, SymbolList::default()).unwrap_err();
    assert_eq!(err, EncodeError::Invalid(InvalidReason::UnsupportedChar));
}

#[test]
fn test_edifact_rejects_out_of_range_byte() {
    use super::{EncodeError, InvalidReason};
    let err = encode_single_scheme(b"\x7f", EncodationType::Edifact, SymbolList::default())
        .unwrap_err();
    assert_eq!(err, EncodeError::Invalid(InvalidReason::UnsupportedChar));
}
