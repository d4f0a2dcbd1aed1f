//! X12 encodation: the CTX triplet machinery over a tiny fixed alphabet
//! (spec.md §4.4, "X12"). Unlike C40/Text, every encodable byte maps to
//! exactly one value, so there is no Shift2/Shift3 expansion to worry
//! about when rolling back at end of symbol.
use arrayvec::ArrayVec;

use super::{c40, encodation_type::EncodationType, EncodeError, EncodeStream, FatalReason, InvalidReason};

fn map(ch: u8) -> Result<u8, EncodeError> {
    match ch {
        13 => Ok(0),
        42 => Ok(1),
        62 => Ok(2),
        b' ' => Ok(3),
        ch @ b'0'..=b'9' => Ok(ch - b'0' + 4),
        ch @ b'A'..=b'Z' => Ok(ch - b'A' + 14),
        _ => Err(EncodeError::Invalid(InvalidReason::UnsupportedChar)),
    }
}

pub(super) fn encode_all(stream: &mut EncodeStream) -> Result<(), EncodeError> {
    while stream.chars_left() >= 3 {
        let c1 = map(stream.eat().unwrap())?;
        let c2 = map(stream.eat().unwrap())?;
        let c3 = map(stream.eat().unwrap())?;
        c40::write_triplet(stream, c1, c2, c3)?;
    }

    // ISO/IEC 16022 5.2.7.2: a single character left with exactly one
    // codeword of room left switches straight to ASCII, unlike the
    // general CTX rollback path.
    if stream.chars_left() == 1 {
        let remaining = stream
            .symbol_size_left(1)
            .ok_or(EncodeError::Fatal(FatalReason::SizeUndefined))?;
        if remaining == 0 {
            stream.set_scheme_no_latch(EncodationType::Ascii);
            stream.reset_chain();
            stream.lock_ascii();
            return Ok(());
        }
    }

    let mut buf: ArrayVec<u8, 6> = ArrayVec::new();
    while let Some(ch) = stream.eat() {
        buf.push(map(ch)?);
    }
    c40::finish(stream, &mut buf, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_native_set() {
        assert_eq!(map(13).unwrap(), 0);
        assert_eq!(map(b'*').unwrap(), 1);
        assert_eq!(map(b'>').unwrap(), 2);
        assert_eq!(map(b' ').unwrap(), 3);
        assert_eq!(map(b'0').unwrap(), 4);
        assert_eq!(map(b'A').unwrap(), 14);
    }

    #[test]
    fn test_map_rejects_out_of_set() {
        assert_eq!(
            map(b'a'),
            Err(EncodeError::Invalid(InvalidReason::UnsupportedChar))
        );
        assert_eq!(
            map(200),
            Err(EncodeError::Invalid(InvalidReason::UnsupportedChar))
        );
    }
}
