use bitflags::bitflags;

bitflags! {
    /// Presence flags of a compressed header record.
    ///
    /// Bits 0-2 hold the version selector and are not flags; bits 6-7 are
    /// reserved. Both are dropped by `from_bits_truncate`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RecordFlags: u8 {
        const PREV_BLOCK_HASH = 0b0000_1000;
        const TIMESTAMP_FULL  = 0b0001_0000;
        const NBITS_NEW       = 0b0010_0000;
    }
}

const SELECTOR_MASK: u8 = 0b0000_0111;

/// The leading byte of every compressed header record
///
/// | bits | meaning |
/// |------|---------|
/// | 0-2  | `0`: literal version follows, `1..=7`: version table index + 1 |
/// | 3    | previous block hash included |
/// | 4    | full 4 byte timestamp, otherwise a signed 2 byte offset |
/// | 5    | bits (difficulty target) included |
/// | 6-7  | reserved |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitfield {
    selector: u8,
    flags: RecordFlags,
}

impl Bitfield {
    /// The bitfield of a record that carries every field literally
    pub fn explicit() -> Bitfield {
        Bitfield {
            selector: 0,
            flags: RecordFlags::all(),
        }
    }

    pub fn new(selector: u8, flags: RecordFlags) -> Bitfield {
        debug_assert!(selector <= SELECTOR_MASK);
        Bitfield {
            selector: selector & SELECTOR_MASK,
            flags: flags,
        }
    }

    /// Reserved bits are ignored rather than rejected
    pub fn from_byte(byte: u8) -> Bitfield {
        Bitfield {
            selector: byte & SELECTOR_MASK,
            flags: RecordFlags::from_bits_truncate(byte),
        }
    }

    pub fn to_byte(&self) -> u8 {
        self.selector | self.flags.bits()
    }

    /// `0` for a literal version, otherwise table index + 1
    #[inline]
    pub fn version_selector(&self) -> u8 {
        self.selector
    }

    #[inline]
    pub fn has_literal_version(&self) -> bool {
        self.selector == 0
    }

    #[inline]
    pub fn has_prev_block_hash(&self) -> bool {
        self.flags.contains(RecordFlags::PREV_BLOCK_HASH)
    }

    #[inline]
    pub fn has_full_timestamp(&self) -> bool {
        self.flags.contains(RecordFlags::TIMESTAMP_FULL)
    }

    #[inline]
    pub fn has_bits(&self) -> bool {
        self.flags.contains(RecordFlags::NBITS_NEW)
    }

    #[inline]
    pub fn is_explicit(&self) -> bool {
        *self == Bitfield::explicit()
    }

    /// Size of the record this bitfield describes, the bitfield included
    pub fn record_len(&self) -> usize {
        // bitfield, merkle root and nonce are always there
        let mut len = 1 + 32 + 4;
        if self.has_literal_version() {
            len += 4;
        }
        if self.has_prev_block_hash() {
            len += 32;
        }
        len += if self.has_full_timestamp() { 4 } else { 2 };
        if self.has_bits() {
            len += 4;
        }
        len
    }
}
