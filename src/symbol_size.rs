//! The symbol-size catalog the encoding core queries as an external
//! collaborator.
//!
//! This module does not place modules or compute error correction; it only
//! answers two questions the encoder asks repeatedly while it writes
//! codewords: "how many data codewords does this size hold" and "what is the
//! smallest allowed size that holds `n` codewords". Module placement and
//! Reed-Solomon block layout live outside this crate.
use core::cmp::{Ordering, PartialOrd};
use core::fmt::Debug;
use core::iter::{Extend, FromIterator, IntoIterator};
use core::ops::RangeBounds;

use std::collections::BTreeSet;

#[cfg(test)]
use enum_iterator::IntoEnumIterator;

#[cfg(test)]
use pretty_assertions::assert_eq;

type SymbolCollection = BTreeSet<SymbolSize>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Set of [symbol sizes](SymbolSize) the encoder is allowed to use.
///
/// Specifies a list of symbol sizes the encoder will pick from. The smallest
/// symbol which can hold the data is chosen.
///
/// By [default](SymbolList::default) all standard sizes defined in
/// ISO 16022 are used. The selection can be restricted to square or rectangular
/// symbols, symbols within a size range, or by giving an explicit list.
///
/// ## Examples
///
/// To get all rectangles with maximum height 20, including the rectangle extensions you can write
///
/// ```rust
/// # use datamatrix_encodation_core::SymbolList;
/// let sizes = SymbolList::with_extended_rectangles()
///     .enforce_rectangular()
///     .enforce_height_in(..=20);
/// ```
///
/// Because [SymbolSize] and `[SymbolSize; N]` implement `Into<SymbolList>` you can write
///
/// ```rust
/// # use datamatrix_encodation_core::SymbolSize;
/// # use datamatrix_encodation_core::SymbolList;
/// // a) use one specific symbol size
/// let sizes: SymbolList = SymbolSize::Square22.into();
///
/// // b) custom list of allowed symbol sizes
/// let sizes: SymbolList = [SymbolSize::Square22, SymbolSize::Square26].into();
/// ```
pub struct SymbolList {
    symbols: SymbolCollection,
}

impl SymbolList {
    /// Get standard symbol sizes extended by all [DMRE rectangles](https://e-d-c.info/projekte/dmre.html).
    ///
    /// In ISO 21471 additional rectangular sizes are defined. Be aware that
    /// your decoder might not recognize these.
    ///
    /// DMRE stands for Data Matrix Rectangular Extensions.
    pub fn with_extended_rectangles() -> Self {
        Self::with_whitelist(SYMBOL_SIZES.iter().cloned())
    }

    /// Remove all non-square symbols from the current selection.
    pub fn enforce_square(mut self) -> Self {
        self.symbols.retain(|s| s.is_square());
        self
    }

    /// Remove all square symbols from the current selection.
    pub fn enforce_rectangular(mut self) -> Self {
        self.symbols.retain(|s| !s.is_square());
        self
    }

    /// Only keep symbols with a width in the given range.
    pub fn enforce_width_in<R: RangeBounds<usize>>(mut self, bounds: R) -> Self {
        self.symbols.retain(|s| bounds.contains(&s.dimensions().0));
        self
    }

    /// Only keep symbols with a height in the given range.
    pub fn enforce_height_in<R: RangeBounds<usize>>(mut self, bounds: R) -> Self {
        self.symbols.retain(|s| bounds.contains(&s.dimensions().1));
        self
    }

    /// Create a symbol list containing only the given symbols.
    ///
    /// The list does not need to be sorted.
    pub fn with_whitelist<I>(whitelist: I) -> Self
    where
        I: IntoIterator<Item = SymbolSize>,
    {
        Self::from_iter(whitelist.into_iter())
    }

    pub fn iter(&self) -> impl Iterator<Item = SymbolSize> + '_ {
        self.symbols.iter().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get a list with all supported symbol sizes.
    pub fn all() -> Self {
        Self::with_extended_rectangles()
    }

    /// Check if a symbol size is in this symbol list.
    pub fn contains(&self, symbol_size: &SymbolSize) -> bool {
        self.iter().any(|s| s == *symbol_size)
    }

    /// `data_words_for` analogue: data-codeword capacity of the biggest
    /// symbol in this list, used to size scratch buffers up front.
    pub fn max_capacity(&self) -> usize {
        self.symbols
            .iter()
            .map(|s| s.num_data_codewords())
            .max()
            .unwrap_or(0)
    }

    /// `find_symbol_size(current_length, requested)`: the smallest symbol in
    /// this list whose data-codeword capacity is at least `size_needed`, or
    /// `None` ("Undefined") if none fits.
    pub fn find_symbol_size(&self, size_needed: usize) -> Option<SymbolSize> {
        self.symbols
            .iter()
            .find(|s| s.num_data_codewords() >= size_needed)
            .cloned()
    }
}

impl IntoIterator for SymbolList {
    type Item = SymbolSize;
    type IntoIter = <SymbolCollection as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.into_iter()
    }
}

impl FromIterator<SymbolSize> for SymbolList {
    fn from_iter<T: IntoIterator<Item = SymbolSize>>(iter: T) -> Self {
        Self {
            symbols: SymbolCollection::from_iter(iter),
        }
    }
}

impl Extend<SymbolSize> for SymbolList {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = SymbolSize>,
    {
        self.symbols.extend(iter);
    }
}

impl Default for SymbolList {
    fn default() -> Self {
        let symbols = SYMBOL_SIZES.iter().cloned().filter(|s| !s.is_dmre());
        Self::with_whitelist(symbols)
    }
}

impl From<SymbolSize> for SymbolList {
    fn from(size: SymbolSize) -> SymbolList {
        SymbolList::with_whitelist([size])
    }
}

impl<const N: usize> From<[SymbolSize; N]> for SymbolList {
    fn from(other: [SymbolSize; N]) -> SymbolList {
        SymbolList::with_whitelist(other)
    }
}

/// The symbol sizes supported by Data Matrix.
///
/// The number behind a variant, e.g., [Square10](SymbolSize::Square10),
/// describes the number of modules (the tiny black squares) the symbol is
/// tall/wide. Module geometry itself (alignment patterns, quiet zones, ...)
/// is a placement concern and is not modeled here; only the dimensions
/// needed to filter a [SymbolList] and the data-codeword capacity the
/// encoding core needs are kept.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(test, derive(IntoEnumIterator))]
pub enum SymbolSize {
    Square10,
    Square12,
    Square14,
    Square16,
    Square18,
    Square20,
    Square22,
    Square24,
    Square26,
    Square32,
    Square36,
    Square40,
    Square44,
    Square48,
    Square52,
    Square64,
    Square72,
    Square80,
    Square88,
    Square96,
    Square104,
    Square120,
    Square132,
    Square144,
    Rect8x18,
    Rect8x32,
    Rect12x26,
    Rect12x36,
    Rect16x36,
    Rect16x48,

    /// DMRE 8x48 variant
    Rect8x48,
    /// DMRE 8x64 variant
    Rect8x64,
    /// DMRE 8x80 variant
    Rect8x80,
    /// DMRE 8x96 variant
    Rect8x96,
    /// DMRE 8x120 variant
    Rect8x120,
    /// DMRE 8x144 variant
    Rect8x144,
    /// DMRE 12x64 variant
    Rect12x64,
    /// DMRE 12x88 variant
    Rect12x88,
    /// DMRE 16x64 variant
    Rect16x64,
    /// DMRE 20x36 variant
    Rect20x36,
    /// DMRE 20x44 variant
    Rect20x44,
    /// DMRE 20x64 variant
    Rect20x64,
    /// DMRE 22x48 variant
    Rect22x48,
    /// DMRE 24x48 variant
    Rect24x48,
    /// DMRE 24x64 variant
    Rect24x64,
    /// DMRE 26x40 variant
    Rect26x40,
    /// DMRE 26x48 variant
    Rect26x48,
    /// DMRE 26x64 variant
    Rect26x64,
}

#[rustfmt::skip]
const SYMBOL_SIZES: &[SymbolSize] = &[
    SymbolSize::Square10, SymbolSize::Square12, SymbolSize::Rect8x18, SymbolSize::Square14,
    SymbolSize::Rect8x32, SymbolSize::Square16, SymbolSize::Rect12x26, SymbolSize::Square18,
    SymbolSize::Rect8x48, SymbolSize::Square20, SymbolSize::Rect12x36, SymbolSize::Rect8x64,
    SymbolSize::Square22, SymbolSize::Rect16x36, SymbolSize::Rect8x80, SymbolSize::Square24,
    SymbolSize::Rect8x96, SymbolSize::Rect12x64, SymbolSize::Square26, SymbolSize::Rect20x36,
    SymbolSize::Rect16x48, SymbolSize::Rect8x120, SymbolSize::Rect20x44, SymbolSize::Square32,
    SymbolSize::Rect16x64, SymbolSize::Rect8x144, SymbolSize::Rect12x88, SymbolSize::Rect26x40,
    SymbolSize::Rect22x48, SymbolSize::Rect24x48, SymbolSize::Rect20x64, SymbolSize::Square36,
    SymbolSize::Rect26x48, SymbolSize::Rect24x64, SymbolSize::Square40, SymbolSize::Rect26x64,
    SymbolSize::Square44, SymbolSize::Square48, SymbolSize::Square52, SymbolSize::Square64,
    SymbolSize::Square72, SymbolSize::Square80, SymbolSize::Square88, SymbolSize::Square96,
    SymbolSize::Square104, SymbolSize::Square120, SymbolSize::Square132, SymbolSize::Square144,
];

impl SymbolSize {
    /// `data_words_for(size_idx)`: number of data codewords (ECC excluded)
    /// this symbol size holds.
    pub fn num_data_codewords(&self) -> usize {
        match self {
            Self::Square10 => 3,
            Self::Square12 => 5,
            Self::Square14 => 8,
            Self::Square16 => 12,
            Self::Square18 => 18,
            Self::Square20 => 22,
            Self::Square22 => 30,
            Self::Square24 => 36,
            Self::Square26 => 44,
            Self::Square32 => 62,
            Self::Square36 => 86,
            Self::Square40 => 114,
            Self::Square44 => 144,
            Self::Square48 => 174,
            Self::Square52 => 204,
            Self::Square64 => 280,
            Self::Square72 => 368,
            Self::Square80 => 456,
            Self::Square88 => 576,
            Self::Square96 => 696,
            Self::Square104 => 816,
            Self::Square120 => 1050,
            Self::Square132 => 1304,
            Self::Square144 => 1558,
            Self::Rect8x18 => 5,
            Self::Rect8x32 => 10,
            Self::Rect12x26 => 16,
            Self::Rect12x36 => 22,
            Self::Rect16x36 => 32,
            Self::Rect16x48 => 49,
            // DMRE
            Self::Rect8x48 => 18,
            Self::Rect8x64 => 24,
            Self::Rect8x80 => 32,
            Self::Rect8x96 => 38,
            Self::Rect8x120 => 49,
            Self::Rect8x144 => 63,
            Self::Rect12x64 => 43,
            Self::Rect12x88 => 64,
            Self::Rect16x64 => 62,
            Self::Rect20x36 => 44,
            Self::Rect20x44 => 56,
            Self::Rect20x64 => 84,
            Self::Rect22x48 => 72,
            Self::Rect24x48 => 80,
            Self::Rect24x64 => 108,
            Self::Rect26x40 => 70,
            Self::Rect26x48 => 90,
            Self::Rect26x64 => 118,
        }
    }

    pub fn is_square(&self) -> bool {
        matches!(
            self,
            Self::Square10
                | Self::Square12
                | Self::Square14
                | Self::Square16
                | Self::Square18
                | Self::Square20
                | Self::Square22
                | Self::Square24
                | Self::Square26
                | Self::Square32
                | Self::Square36
                | Self::Square40
                | Self::Square44
                | Self::Square48
                | Self::Square52
                | Self::Square64
                | Self::Square72
                | Self::Square80
                | Self::Square88
                | Self::Square96
                | Self::Square104
                | Self::Square120
                | Self::Square132
                | Self::Square144
        )
    }

    /// Symbol is part of the rectangular extension spec (ISO 21471 DMRE).
    pub fn is_dmre(&self) -> bool {
        matches!(
            self,
            Self::Rect8x48
                | Self::Rect8x64
                | Self::Rect8x80
                | Self::Rect8x96
                | Self::Rect8x120
                | Self::Rect8x144
                | Self::Rect12x64
                | Self::Rect12x88
                | Self::Rect16x64
                | Self::Rect20x36
                | Self::Rect20x44
                | Self::Rect20x64
                | Self::Rect22x48
                | Self::Rect24x48
                | Self::Rect24x64
                | Self::Rect26x40
                | Self::Rect26x48
                | Self::Rect26x64
        )
    }

    /// (width, height) in modules. Exposed only so [SymbolList] can filter by
    /// size; actual module placement lives outside this crate.
    fn dimensions(&self) -> (usize, usize) {
        match self {
            Self::Square10 => (10, 10),
            Self::Square12 => (12, 12),
            Self::Square14 => (14, 14),
            Self::Square16 => (16, 16),
            Self::Square18 => (18, 18),
            Self::Square20 => (20, 20),
            Self::Square22 => (22, 22),
            Self::Square24 => (24, 24),
            Self::Square26 => (26, 26),
            Self::Square32 => (32, 32),
            Self::Square36 => (36, 36),
            Self::Square40 => (40, 40),
            Self::Square44 => (44, 44),
            Self::Square48 => (48, 48),
            Self::Square52 => (52, 52),
            Self::Square64 => (64, 64),
            Self::Square72 => (72, 72),
            Self::Square80 => (80, 80),
            Self::Square88 => (88, 88),
            Self::Square96 => (96, 96),
            Self::Square104 => (104, 104),
            Self::Square120 => (120, 120),
            Self::Square132 => (132, 132),
            Self::Square144 => (144, 144),
            Self::Rect8x18 => (18, 8),
            Self::Rect8x32 => (32, 8),
            Self::Rect12x26 => (26, 12),
            Self::Rect12x36 => (36, 12),
            Self::Rect16x36 => (36, 16),
            Self::Rect16x48 => (48, 16),
            Self::Rect8x48 => (48, 8),
            Self::Rect8x64 => (64, 8),
            Self::Rect8x80 => (80, 8),
            Self::Rect8x96 => (96, 8),
            Self::Rect8x120 => (120, 8),
            Self::Rect8x144 => (144, 8),
            Self::Rect12x64 => (64, 12),
            Self::Rect12x88 => (88, 12),
            Self::Rect16x64 => (64, 16),
            Self::Rect20x36 => (36, 20),
            Self::Rect20x44 => (44, 20),
            Self::Rect20x64 => (64, 20),
            Self::Rect22x48 => (48, 22),
            Self::Rect24x48 => (48, 24),
            Self::Rect24x64 => (64, 24),
            Self::Rect26x40 => (40, 26),
            Self::Rect26x48 => (48, 26),
            Self::Rect26x64 => (64, 26),
        }
    }

    /// Position in the ISO preference table, smallest/most-preferred first.
    /// Used only to break ties in [Ord] between sizes with equal capacity.
    fn preference_index(&self) -> usize {
        SYMBOL_SIZES.iter().position(|s| s == self).unwrap()
    }
}

impl PartialOrd for SymbolSize {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SymbolSize {
    fn cmp(&self, other: &Self) -> Ordering {
        fn key(obj: &SymbolSize) -> (usize, usize) {
            (obj.num_data_codewords(), obj.preference_index())
        }
        key(self).cmp(&key(other))
    }
}

#[test]
fn test_partial_ord_symbol_size() {
    for a in SYMBOL_SIZES {
        for b in SYMBOL_SIZES {
            assert_eq!(
                a.partial_cmp(b) == Some(core::cmp::Ordering::Equal),
                a == b,
                "a = {:?}, b = {:?}",
                a,
                b,
            );
        }
    }
}

#[test]
fn test_symbol_size_order() {
    let mut all: Vec<SymbolSize> = SYMBOL_SIZES.into();
    all.sort_unstable();
    let all2: Vec<SymbolSize> = SymbolList::all().iter().collect();
    assert_eq!(&all, &all2,);
}

#[test]
fn test_iter_all_symbols() {
    let mut all: Vec<SymbolSize> = SymbolSize::into_enum_iter().collect();
    all.sort_unstable();
    assert_eq!(&all, SYMBOL_SIZES,);
}

#[test]
fn test_size_candidates_for_non_auto() {
    let list: SymbolList = SymbolSize::Square10.into();
    let symbols: Vec<SymbolSize> = list.iter().collect();
    assert_eq!(symbols, vec![SymbolSize::Square10]);
}

#[test]
fn test_size_candidates_auto() {
    let all: Vec<SymbolSize> = SymbolList::default().iter().collect();
    let mut expected: Vec<SymbolSize> = SYMBOL_SIZES
        .iter()
        .filter(|s| !s.is_dmre())
        .cloned()
        .collect();
    expected.sort_unstable_by_key(|s| s.num_data_codewords());
    assert_eq!(all, expected);
}

#[test]
fn test_size_candidates_auto_rect() {
    let all: Vec<SymbolSize> = SymbolList::default().enforce_rectangular().iter().collect();
    let expected = vec![
        SymbolSize::Rect8x18,
        SymbolSize::Rect8x32,
        SymbolSize::Rect12x26,
        SymbolSize::Rect12x36,
        SymbolSize::Rect16x36,
        SymbolSize::Rect16x48,
    ];
    assert_eq!(all, expected);
}

#[test]
fn test_size_candidates_auto_square() {
    let all: Vec<SymbolSize> = SymbolList::default().enforce_square().iter().collect();
    let expected = vec![
        SymbolSize::Square10,
        SymbolSize::Square12,
        SymbolSize::Square14,
        SymbolSize::Square16,
        SymbolSize::Square18,
        SymbolSize::Square20,
        SymbolSize::Square22,
        SymbolSize::Square24,
        SymbolSize::Square26,
        SymbolSize::Square32,
        SymbolSize::Square36,
        SymbolSize::Square40,
        SymbolSize::Square44,
        SymbolSize::Square48,
        SymbolSize::Square52,
        SymbolSize::Square64,
        SymbolSize::Square72,
        SymbolSize::Square80,
        SymbolSize::Square88,
        SymbolSize::Square96,
        SymbolSize::Square104,
        SymbolSize::Square120,
        SymbolSize::Square132,
        SymbolSize::Square144,
    ];
    assert_eq!(all, expected);
}

#[test]
fn symbol_size_order() {
    let mut last = 0;
    for size in SymbolList::default().symbols.iter() {
        let new = size.num_data_codewords();
        assert!(new >= last);
        last = new;
    }
}

#[test]
fn test_height_range() {
    let symbols = SymbolList::with_extended_rectangles()
        .enforce_height_in(0..21)
        .symbols;
    for sym in symbols {
        assert!(sym.dimensions().1 <= 20);
    }
}

#[test]
fn test_width_range() {
    let symbols = SymbolList::with_extended_rectangles()
        .enforce_width_in(9..=10)
        .symbols;
    for sym in symbols {
        assert!(sym.dimensions().0 <= 10);
        assert!(sym.dimensions().0 >= 9);
    }
}

#[test]
fn test_find_symbol_size_picks_smallest_fit() {
    let list = SymbolList::default();
    let size = list.find_symbol_size(4).unwrap();
    assert_eq!(size, SymbolSize::Square12);
}

#[test]
fn test_distinguishable_by_size() {
    let sizes: Vec<_> = SYMBOL_SIZES.iter().map(|s| s.dimensions()).collect();
    let n = sizes.len();
    assert_eq!(n, BTreeSet::from_iter(sizes).len());
}

#[test]
fn test_list_all() {
    assert_eq!(SymbolList::all().iter().count(), SYMBOL_SIZES.len());

    for size in SymbolList::all() {
        assert!(SYMBOL_SIZES.iter().any(|s| *s == size));
    }
}
