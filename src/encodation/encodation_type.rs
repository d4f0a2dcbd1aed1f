use flagset::{flags, FlagSet};

flags! {
    /// The six Data Matrix encodation schemes (spec.md GLOSSARY, "Scheme").
    pub enum EncodationType: u8 {
        Ascii   = 0b000001,
        C40     = 0b000010,
        Text    = 0b000100,
        X12     = 0b001000,
        Edifact = 0b010000,
        Base256 = 0b100000,
    }
}

impl EncodationType {
    /// Get flag set with all encodation types activated.
    pub fn all() -> FlagSet<Self> {
        FlagSet::full()
    }

    /// The codeword that latches the reader into this scheme from ASCII.
    /// Panics on `Ascii`, which has no latch codeword of its own.
    pub(crate) fn latch_codeword(&self) -> u8 {
        match self {
            Self::Ascii => unreachable!("ascii has no latch codeword"),
            Self::C40 => 230,
            Self::Base256 => 231,
            Self::X12 => 238,
            Self::Text => 239,
            Self::Edifact => 240,
        }
    }
}
