//! Base 256 encodation (spec.md §4.6): a length header followed by raw
//! bytes. The header and payload are kept unrandomized while the segment
//! is open, since the header can still grow from one byte to two — which
//! would shift every payload byte's position and invalidate any
//! randomization already applied to it. Randomization happens once, over
//! the whole finished segment, right before handing control back.
use super::randomize::randomize_255;
use super::{ascii, encodation_type::EncodationType, EncodeError, EncodeStream, FatalReason};

/// Push the length-header placeholder byte that opens a Base 256 segment.
pub(super) fn enter(stream: &mut EncodeStream) -> Result<(), EncodeError> {
    stream.push_word(0)
}

pub(super) fn encode_all(stream: &mut EncodeStream) -> Result<(), EncodeError> {
    while let Some(ch) = stream.eat() {
        stream.push_value(ch)?;
    }
    finish_at_eof(stream)
}

fn finish_at_eof(stream: &mut EncodeStream) -> Result<(), EncodeError> {
    let header_index = stream.output_len() - stream.chain_words();
    let payload_len = stream.chain_values();
    let space_left = stream
        .symbol_size_left(0)
        .ok_or(EncodeError::Fatal(FatalReason::SizeUndefined))?;

    let mut header_bytes = 1;
    if space_left > 0 {
        // the segment doesn't end exactly at the symbol boundary, so the
        // decoder needs an explicit length rather than "to end of symbol".
        if payload_len <= 249 {
            stream.replace(header_index, payload_len as u8);
        } else if payload_len <= 1749 {
            stream.replace(header_index, (payload_len / 250 + 249) as u8);
            stream.insert_header_byte(header_index + 1, (payload_len % 250) as u8)?;
            header_bytes = 2;
        } else {
            return Err(EncodeError::Fatal(FatalReason::HeaderArithmetic));
        }
    }

    for i in 0..(header_bytes + payload_len) {
        let idx = header_index + i;
        let raw = stream.byte_at(idx);
        let randomized = randomize_255(raw, idx + 1);
        stream.replace(idx, randomized);
    }

    if space_left > 0 {
        stream.set_scheme_no_latch(EncodationType::Ascii);
        stream.reset_chain();
        let size = stream.resolve_symbol_size()?;
        ascii::pad_remaining(stream, size)?;
        stream.mark_complete(size);
    } else {
        let size = stream.resolve_symbol_size()?;
        stream.mark_complete(size);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol_size::SymbolList;
    use crate::SymbolSize;

    #[test]
    fn test_short_segment_header_is_one_byte() {
        let input = b"hi";
        let (cw, _size) = super::super::encode_single_scheme(
            input,
            super::super::EncodationType::Base256,
            SymbolList::from(SymbolSize::Square10),
        )
        .unwrap();
        // latch(231), header, 'h', 'i', pad...
        assert_eq!(cw[0], 231);
        assert!(cw.len() > 4);
    }

    #[test]
    fn test_long_segment_grows_header_to_two_bytes() {
        let input = vec![b'x'; 300];
        let (cw, size) = super::super::encode_single_scheme(
            &input,
            super::super::EncodationType::Base256,
            SymbolList::all(),
        )
        .unwrap();
        assert_eq!(cw.len(), size.num_data_codewords());
    }
}
