/// A unique handle for an interned identifier.
///
/// `StringId`s are created by the `StringInterner` and should not be
/// constructed manually. Comparing two ids is handle equality, never text
/// comparison, which makes them cheap keys for attribute tables, static slot
/// names, and instruction operands.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StringId(u32);

impl StringId {
    /// The empty string, pre-interned by every `StringInterner`.
    pub const EMPTY: StringId = StringId(0);

    /// Creates an id from a raw index.
    ///
    /// Intended for the `StringInterner` only. Ids fabricated from arbitrary
    /// indices panic when resolved.
    #[inline]
    pub(crate) fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this id.
    ///
    /// Useful for debugging output and for encoding ids as operands.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}
