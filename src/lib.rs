//! Data Matrix (ECC 200) encodation core: the ASCII/C40/Text/X12/EDIFACT/
//! Base 256 codeword encoder described by ISO/IEC 16022.
//!
//! # Usage example
//!
//! ```rust
//! # use datamatrix_encodation_core::{encode, EncodationType, SymbolList};
//! let (codewords, size) = encode(
//!     b"Hello, World!",
//!     EncodationType::Ascii,
//!     SymbolList::default(),
//! ).unwrap();
//! assert_eq!(size.num_data_codewords(), codewords.len());
//! ```
//!
//! # Scope
//!
//! This crate is only the encoding core: given a byte string and a single
//! target encodation scheme, it produces the codeword sequence ISO/IEC
//! 16022 would place into the symbol's modules, resolved against a
//! [`SymbolList`] of candidate sizes. It does not choose the best scheme for
//! you (callers pick one and retry with another on [`EncodeError::Invalid`]
//! if it doesn't fit), compute Reed-Solomon error correction, lay out
//! modules, render an image, or decode. Those are separate collaborators;
//! this crate only calls into the symbol-size catalog it carries
//! ([`SymbolList::find_symbol_size`]).
mod encodation;
mod symbol_size;

pub use encodation::{EncodationType, EncodeError, FatalReason, InvalidReason};
pub use symbol_size::{SymbolList, SymbolSize};

/// Encode `data` as Data Matrix codewords in a single target scheme.
///
/// `symbol_list` is the set of candidate symbol sizes to resolve against;
/// the smallest one that fits the encoded output is chosen. Returns the
/// codeword sequence and the symbol size it was resolved against.
pub fn encode(
    data: &[u8],
    target: EncodationType,
    symbol_list: SymbolList,
) -> Result<(Vec<u8>, SymbolSize), EncodeError> {
    encodation::encode_single_scheme(data, target, symbol_list)
}
