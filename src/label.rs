use std::fmt::Debug;

/// A label type for use as trie keys.
///
/// Children are stored and enumerated by `Ord`, which must agree with
/// ascending [`code`](Label::code) order.
pub trait Label: Copy + Ord + Debug {
    /// The numeric code of this label.
    fn code(self) -> u32;
}

impl Label for u8 {
    #[inline]
    fn code(self) -> u32 {
        self.into()
    }
}

impl Label for char {
    #[inline]
    fn code(self) -> u32 {
        self.into()
    }
}
