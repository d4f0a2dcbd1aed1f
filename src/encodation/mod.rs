//! Data Matrix encodation core: ASCII/C40/Text/X12/EDIFACT/Base 256 codeword
//! encoding for a single, caller-chosen target scheme.
//!
//! There is no built-in scheme search here: callers pick the scheme the
//! data goes in (see [`encode_single_scheme`]), and this module takes care
//! of latching into it, emitting codewords, and unlatching back to ASCII
//! wherever the scheme's own end-of-symbol rules require it.
pub(crate) mod ascii;
mod base256;
mod byte_list;
mod c40;
pub(crate) mod edifact;
mod encodation_type;
mod randomize;
mod text;
mod x12;

#[cfg(test)]
mod tests;

pub use encodation_type::EncodationType;

use byte_list::ByteList;

use crate::symbol_size::{SymbolList, SymbolSize};

pub(crate) const UNLATCH: u8 = 254;

/// Why encoding stopped before producing a symbol.
///
/// `Invalid` means the *input* could not be encoded in the requested
/// scheme (unsupported byte, or explicit unlatch requested off a triplet
/// boundary); `Fatal` means an internal invariant was violated, which
/// indicates a bug in this crate rather than bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    Invalid(InvalidReason),
    Fatal(FatalReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// A byte outside the scheme's encodable range (e.g. > 127 in X12, or
    /// outside 31..=94 in EDIFACT).
    UnsupportedChar,
    /// An explicit unlatch was requested while the CTX chain's value count
    /// was not a multiple of three.
    UnlatchOffBoundary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalReason {
    /// The bounded output buffer ran out of room.
    BufferFull,
    /// Base 256 header length arithmetic produced an impossible case.
    HeaderArithmetic,
    /// No symbol size in the requested list is big enough for the data.
    SizeUndefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Encoding,
    Complete,
}

/// Drives a single encodation scheme over an input slice, tracking chain
/// counters, the current scheme, and the bounded output buffer.
///
/// This is spec.md §3's `EncodeStream`. The `Invalid`/`Fatal` status
/// branches are modeled as `Result` returns instead of a polled field:
/// once any method here returns `Err`, the stream must not be driven
/// further.
pub(crate) struct EncodeStream<'a> {
    input: &'a [u8],
    cursor: usize,
    output: ByteList,
    current_scheme: EncodationType,
    chain_words: usize,
    chain_values: usize,
    status: Status,
    resolved_size: Option<SymbolSize>,
    symbol_list: SymbolList,
    /// Set once end-of-symbol handling in a non-ASCII scheme has decided to
    /// fall back to ASCII for the remainder of the input. Once set, the
    /// dispatcher ignores the caller's originally requested target scheme.
    ascii_locked: bool,
}

impl<'a> EncodeStream<'a> {
    pub(crate) fn new(input: &'a [u8], symbol_list: SymbolList) -> Self {
        let capacity = symbol_list.max_capacity().max(input.len() + 3);
        Self {
            input,
            cursor: 0,
            output: ByteList::with_capacity(capacity),
            current_scheme: EncodationType::Ascii,
            chain_words: 0,
            chain_values: 0,
            status: Status::Encoding,
            resolved_size: None,
            symbol_list,
            ascii_locked: false,
        }
    }

    // --- input cursor -----------------------------------------------------

    pub(crate) fn eat(&mut self) -> Option<u8> {
        let ch = *self.input.get(self.cursor)?;
        self.cursor += 1;
        Some(ch)
    }

    pub(crate) fn backup(&mut self, steps: usize) {
        self.cursor -= steps;
    }

    pub(crate) fn rest(&self) -> &[u8] {
        &self.input[self.cursor..]
    }

    pub(crate) fn peek(&self, n: usize) -> Option<u8> {
        self.rest().get(n).copied()
    }

    pub(crate) fn chars_left(&self) -> usize {
        self.input.len() - self.cursor
    }

    pub(crate) fn has_more_input(&self) -> bool {
        self.cursor < self.input.len()
    }

    // --- scheme state -------------------------------------------------

    pub(crate) fn current_scheme(&self) -> EncodationType {
        self.current_scheme
    }

    fn set_scheme_no_latch(&mut self, scheme: EncodationType) {
        self.current_scheme = scheme;
    }

    pub(crate) fn reset_chain(&mut self) {
        self.chain_words = 0;
        self.chain_values = 0;
    }

    pub(crate) fn chain_words(&self) -> usize {
        self.chain_words
    }

    pub(crate) fn chain_values(&self) -> usize {
        self.chain_values
    }

    pub(crate) fn bump_values(&mut self, n: usize) {
        self.chain_values += n;
    }

    pub(crate) fn lock_ascii(&mut self) {
        self.ascii_locked = true;
    }

    fn ascii_locked(&self) -> bool {
        self.ascii_locked
    }

    // --- output buffer ------------------------------------------------

    pub(crate) fn output_len(&self) -> usize {
        self.output.len()
    }

    /// Append a raw codeword. Counts toward the chain's word count but not
    /// its value count (used for latch/unlatch codewords and Base 256
    /// header bytes).
    pub(crate) fn push_word(&mut self, byte: u8) -> Result<(), EncodeError> {
        self.output.push(byte)?;
        self.chain_words += 1;
        Ok(())
    }

    /// Append a codeword that is also a scheme value (the common case:
    /// one ASCII codeword in, one value out).
    pub(crate) fn push_value(&mut self, byte: u8) -> Result<(), EncodeError> {
        self.push_word(byte)?;
        self.chain_values += 1;
        Ok(())
    }

    pub(crate) fn insert_header_byte(&mut self, index: usize, byte: u8) -> Result<(), EncodeError> {
        self.output.insert_at(index, byte)?;
        self.chain_words += 1;
        Ok(())
    }

    pub(crate) fn remove_last_word(&mut self) -> u8 {
        self.chain_words -= 1;
        self.output
            .remove_last()
            .expect("chain word count out of sync with output buffer")
    }

    pub(crate) fn remove_word_at(&mut self, index: usize) -> u8 {
        self.chain_words -= 1;
        self.output.remove_at(index)
    }

    pub(crate) fn replace(&mut self, index: usize, byte: u8) {
        self.output.set_at(index, byte);
    }

    pub(crate) fn byte_at(&self, index: usize) -> u8 {
        self.output.as_slice()[index]
    }

    // --- symbol size collaborator --------------------------------------

    pub(crate) fn find_symbol_size(&self, data_len: usize) -> Option<SymbolSize> {
        self.symbol_list.find_symbol_size(data_len)
    }

    pub(crate) fn resolve_symbol_size(&self) -> Result<SymbolSize, EncodeError> {
        self.find_symbol_size(self.output_len())
            .ok_or(EncodeError::Fatal(FatalReason::SizeUndefined))
    }

    /// Space that would be left in the smallest symbol holding the current
    /// output plus `extra_codewords` more, not counting those
    /// `extra_codewords` themselves. `None` if no symbol in the requested
    /// list is big enough.
    pub(crate) fn symbol_size_left(&self, extra_codewords: usize) -> Option<usize> {
        let size_used = self.output_len() + extra_codewords;
        let symbol = self.find_symbol_size(size_used)?;
        Some(symbol.num_data_codewords() - size_used)
    }

    pub(crate) fn mark_complete(&mut self, size: SymbolSize) {
        self.status = Status::Complete;
        self.resolved_size = Some(size);
    }

    pub(crate) fn is_complete(&self) -> bool {
        matches!(self.status, Status::Complete)
    }

    /// Emit an ECI designator codeword sequence (codeword 241 plus a 1-3
    /// byte value encoding). Must be called before any data is encoded.
    pub(crate) fn write_eci(&mut self, mut c: u32) -> Result<(), EncodeError> {
        const ECI: u8 = 241;
        self.push_word(ECI)?;
        match c {
            0..=126 => self.push_word(c as u8 + 1)?,
            127..=16382 => {
                c -= 127;
                self.push_word((c / 254 + 128) as u8)?;
                self.push_word((c % 254 + 1) as u8)?;
            }
            16383..=999999 => {
                c -= 16383;
                self.push_word((c / 64516 + 192) as u8)?;
                self.push_word(((c / 254) % 254 + 1) as u8)?;
                self.push_word((c % 254 + 1) as u8)?;
            }
            _ => panic!("illegal ECI designator, bigger than 999999"),
        }
        Ok(())
    }
}

/// Whether a scheme change should emit the scheme's explicit unlatch
/// codeword, or leave the reader to infer the switch implicitly (e.g.
/// because the symbol simply ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnlatchMode {
    Explicit,
    Implicit,
}

/// Transition the stream from its current scheme into `target`, writing
/// whatever unlatch/latch codewords that requires (spec.md §4.2).
pub(crate) fn change_scheme(
    stream: &mut EncodeStream,
    target: EncodationType,
    unlatch: UnlatchMode,
) -> Result<(), EncodeError> {
    if stream.current_scheme() == target {
        return Ok(());
    }
    match stream.current_scheme() {
        EncodationType::C40 | EncodationType::Text | EncodationType::X12 => {
            if unlatch == UnlatchMode::Explicit {
                if stream.chain_values() % 3 != 0 {
                    return Err(EncodeError::Invalid(InvalidReason::UnlatchOffBoundary));
                }
                stream.push_word(UNLATCH)?;
            }
        }
        EncodationType::Edifact => {
            if unlatch == UnlatchMode::Explicit {
                edifact::write_unlatch(stream)?;
            }
        }
        EncodationType::Ascii | EncodationType::Base256 => {}
    }
    stream.set_scheme_no_latch(EncodationType::Ascii);
    if target != EncodationType::Ascii {
        // The latch codeword is accounted to the scheme being left, not the
        // one being entered (spec.md §3 invariant 4): push it before
        // resetting the chain counters, so the new scheme's counters start
        // at zero right at its first real codeword (the Base 256 header
        // placeholder, or the first CTX/EDIFACT value).
        stream.push_word(target.latch_codeword())?;
        stream.reset_chain();
        stream.set_scheme_no_latch(target);
        if target == EncodationType::Base256 {
            base256::enter(stream)?;
        }
    } else {
        stream.reset_chain();
    }
    Ok(())
}

/// Process the next unit of work toward encoding `stream` in `target`
/// (spec.md §4.1's `encode_next_chunk`). Each scheme's own encoder may
/// consume all the remaining input it is responsible for in a single
/// call; callers should keep invoking this until [`EncodeStream::is_complete`]
/// holds or an error is returned.
pub(crate) fn encode_next_chunk(
    stream: &mut EncodeStream,
    target: EncodationType,
) -> Result<(), EncodeError> {
    let target = if stream.ascii_locked() {
        EncodationType::Ascii
    } else {
        target
    };
    if stream.current_scheme() != target {
        change_scheme(stream, target, UnlatchMode::Explicit)?;
        if stream.is_complete() {
            return Ok(());
        }
    }
    match stream.current_scheme() {
        EncodationType::Ascii => {
            ascii::encode_next_chunk(stream)?;
            if !stream.is_complete() {
                ascii::complete_if_done(stream)?;
            }
        }
        EncodationType::C40 => c40::encode_all(stream, c40::low_ascii_to_c40_values)?,
        EncodationType::Text => c40::encode_all(stream, text::low_ascii_to_text_values)?,
        EncodationType::X12 => x12::encode_all(stream)?,
        EncodationType::Edifact => edifact::encode_all(stream)?,
        EncodationType::Base256 => base256::encode_all(stream)?,
    }
    Ok(())
}

/// Encode the whole of `input` in a single target scheme, against the
/// given candidate symbol sizes (spec.md §4.1's driver). Succeeds iff the
/// stream reaches `Complete` with no input left over.
pub(crate) fn encode_single_scheme(
    input: &[u8],
    target: EncodationType,
    symbol_list: SymbolList,
) -> Result<(Vec<u8>, SymbolSize), EncodeError> {
    let mut stream = EncodeStream::new(input, symbol_list);
    while !stream.is_complete() {
        encode_next_chunk(&mut stream, target)?;
    }
    debug_assert!(!stream.has_more_input());
    let size = stream
        .resolved_size
        .expect("Complete status implies a resolved symbol size");
    Ok((stream.output.into_vec(), size))
}

#[test]
fn test_empty_input_is_all_padding() {
    let (cw, _size) =
        encode_single_scheme(&[], EncodationType::Ascii, crate::SymbolSize::Square10.into()).unwrap();
    assert_eq!(cw, vec![ascii::PAD, 175, 70]);
}
