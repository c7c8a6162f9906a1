// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Strongly Typed Indices
//!
//! `TypedIndex<T>` wraps a `usize` position into one of the model's flat
//! vectors and carries a tag type that names the vector it belongs to. A
//! `StudentIndex` and a `RoomIndex` are both plain `usize` at runtime
//! (`#[repr(transparent)]`), but the compiler refuses to mix them.
//!
//! ```rust
//! use seatwise_core::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct DeskTag;
//! impl TypedIndexTag for DeskTag { const NAME: &'static str = "DeskIndex"; }
//!
//! type DeskIndex = TypedIndex<DeskTag>;
//! let desk = DeskIndex::new(4);
//! assert_eq!(desk.get(), 4);
//! assert_eq!(format!("{}", desk), "DeskIndex(4)");
//! ```

/// Names an index space for `Debug` and `Display` output.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A `usize` index tagged with the index space `T` it belongs to.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the raw position.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Returns an iterator over the first `len` indices of this space.
    ///
    /// ```rust
    /// use seatwise_core::index::{TypedIndex, TypedIndexTag};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// struct DeskTag;
    /// impl TypedIndexTag for DeskTag { const NAME: &'static str = "DeskIndex"; }
    ///
    /// let all: Vec<usize> = TypedIndex::<DeskTag>::range(3).map(|i| i.get()).collect();
    /// assert_eq!(all, vec![0, 1, 2]);
    /// ```
    #[inline]
    pub fn range(len: usize) -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..len).map(Self::new)
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    #[inline]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    #[inline]
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct SeatTag;

    impl TypedIndexTag for SeatTag {
        const NAME: &'static str = "SeatIdx";
    }

    type SeatIdx = TypedIndex<SeatTag>;

    #[test]
    fn test_new_and_get() {
        let idx = SeatIdx::new(10);
        assert_eq!(idx.get(), 10);
    }

    #[test]
    fn test_conversions_round_through_usize() {
        let idx: SeatIdx = 42.into();
        let raw: usize = idx.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_debug_and_display_use_tag_name() {
        let idx = SeatIdx::new(7);
        assert_eq!(format!("{}", idx), "SeatIdx(7)");
        assert_eq!(format!("{:?}", idx), "SeatIdx(7)");
    }

    #[test]
    fn test_range_yields_consecutive_indices() {
        let collected: Vec<SeatIdx> = SeatIdx::range(4).collect();
        assert_eq!(collected.len(), 4);
        assert_eq!(collected[0], SeatIdx::new(0));
        assert_eq!(collected[3], SeatIdx::new(3));
        assert_eq!(SeatIdx::range(0).count(), 0);
    }

    #[test]
    fn test_ordering_follows_raw_index() {
        assert!(SeatIdx::new(1) < SeatIdx::new(2));
        assert_eq!(SeatIdx::new(3).max(SeatIdx::new(1)), SeatIdx::new(3));
    }
}
