//! C40 encodation, and the shared triplet machinery Text and X12 build on
//! (spec.md §4.4, the "CTX family").
use arrayvec::ArrayVec;

use super::{ascii, encodation_type::EncodationType, EncodeError, EncodeStream, FatalReason, UNLATCH};

pub(super) const SHIFT1: u8 = 0;
pub(super) const SHIFT2: u8 = 1;
pub(super) const SHIFT3: u8 = 2;
pub(super) const UPPER_SHIFT: u8 = 30;

/// The C40 character-to-value table (ISO/IEC 16022 table 6).
#[inline(always)]
pub(super) fn low_ascii_to_c40_values(buf: &mut ArrayVec<u8, 6>, ch: u8) {
    match ch {
        b' ' => buf.push(3),
        ch @ b'0'..=b'9' => buf.push(ch - b'0' + 4),
        ch @ b'A'..=b'Z' => buf.push(ch - b'A' + 14),
        ch @ 0..=31 => {
            buf.push(SHIFT1);
            buf.push(ch);
        }
        ch @ 33..=47 => {
            buf.push(SHIFT2);
            buf.push(ch - 33);
        }
        ch @ 58..=64 => {
            buf.push(SHIFT2);
            buf.push(ch - 58 + 15);
        }
        ch @ 91..=95 => {
            buf.push(SHIFT2);
            buf.push(ch - 91 + 22);
        }
        ch @ 96..=127 => {
            buf.push(SHIFT3);
            buf.push(ch - 96);
        }
        _ => unreachable!("byte > 127 handled by the caller"),
    }
}

/// Encode three packed CTX values into two codewords (spec.md §4.4).
pub(super) fn write_triplet(
    stream: &mut EncodeStream,
    c1: u8,
    c2: u8,
    c3: u8,
) -> Result<(), EncodeError> {
    let enc = 1600u16 * c1 as u16 + 40 * c2 as u16 + c3 as u16 + 1;
    stream.push_word((enc >> 8) as u8)?;
    stream.push_word((enc & 0xFF) as u8)?;
    stream.bump_values(3);
    Ok(())
}

fn push_values_for_byte<F>(buf: &mut ArrayVec<u8, 6>, ch: u8, table: F) -> usize
where
    F: Fn(&mut ArrayVec<u8, 6>, u8),
{
    let before = buf.len();
    if ch > 127 {
        buf.push(SHIFT2);
        buf.push(UPPER_SHIFT);
        table(buf, ch - 128);
    } else {
        table(buf, ch);
    }
    buf.len() - before
}

/// Consume all of `stream`'s remaining input in one CTX scheme (C40 or
/// Text, selected by `table`), draining triplets as they fill up and
/// handling whatever is left over at end of input.
pub(super) fn encode_all<F>(stream: &mut EncodeStream, table: F) -> Result<(), EncodeError>
where
    F: Fn(&mut ArrayVec<u8, 6>, u8) + Copy,
{
    let mut buf: ArrayVec<u8, 6> = ArrayVec::new();
    let mut last_byte_value_count = 0usize;
    while let Some(ch) = stream.eat() {
        last_byte_value_count = push_values_for_byte(&mut buf, ch, table);
        while buf.len() >= 3 {
            let (c1, c2, c3) = (buf[0], buf[1], buf[2]);
            write_triplet(stream, c1, c2, c3)?;
            buf.drain(0..3);
        }
    }
    finish(stream, &mut buf, last_byte_value_count)
}

/// Handle whatever 0, 1, or 2 CTX values are still pending once input runs
/// out (spec.md §4.4's end-of-symbol cases a-d). Shared by C40, Text, and
/// X12 (which always passes `last_byte_value_count == 1`, since X12 bytes
/// never expand into more than one value).
pub(super) fn finish(
    stream: &mut EncodeStream,
    buf: &mut ArrayVec<u8, 6>,
    last_byte_value_count: usize,
) -> Result<(), EncodeError> {
    debug_assert!(buf.len() <= 2);

    if buf.is_empty() {
        let remaining = stream
            .symbol_size_left(0)
            .ok_or(EncodeError::Fatal(FatalReason::SizeUndefined))?;
        if remaining == 0 {
            let size = stream.resolve_symbol_size()?;
            stream.mark_complete(size);
            return Ok(());
        }
        // case a): clean boundary, room left over. Unlatch and let ASCII
        // pad the rest.
        stream.push_word(UNLATCH)?;
        stream.set_scheme_no_latch(EncodationType::Ascii);
        stream.reset_chain();
        let size = stream.resolve_symbol_size()?;
        ascii::pad_remaining(stream, size)?;
        stream.mark_complete(size);
        return Ok(());
    }

    if buf.len() == 2 {
        let remaining = stream
            .symbol_size_left(2)
            .ok_or(EncodeError::Fatal(FatalReason::SizeUndefined))?;
        if remaining == 0 {
            // case b): two values, exactly two codewords of room: pad the
            // triplet with a Shift 1 and finish without an unlatch.
            let (c1, c2) = (buf[0], buf[1]);
            write_triplet(stream, c1, c2, SHIFT1)?;
            let size = stream.resolve_symbol_size()?;
            stream.mark_complete(size);
            return Ok(());
        }
    }

    // cases c) and d): roll back the input byte(s) the pending values came
    // from and let ASCII re-encode the tail.
    let rollback = if buf.len() == 2 && last_byte_value_count <= 1 {
        2
    } else {
        1
    };
    stream.backup(rollback);
    buf.clear();

    let tail_len = ascii::encoding_size(stream.rest());
    let remaining_after_tail = stream
        .symbol_size_left(tail_len)
        .ok_or(EncodeError::Fatal(FatalReason::SizeUndefined))?;
    if tail_len == 1 && remaining_after_tail == 0 {
        // case d): implicit unlatch, the lone ASCII codeword fills the symbol.
        stream.set_scheme_no_latch(EncodationType::Ascii);
        stream.reset_chain();
    } else {
        // case c): explicit unlatch, then ASCII finishes the tail.
        stream.push_word(UNLATCH)?;
        stream.set_scheme_no_latch(EncodationType::Ascii);
        stream.reset_chain();
    }
    stream.lock_ascii();
    Ok(())
}
