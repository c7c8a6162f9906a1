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

//! The candidate pool of one allocation attempt.
//!
//! The pool holds the students not yet seated, in the order the attempt
//! considers them. It is shuffled once at the start of an attempt; after
//! that, seating a student removes it while keeping the relative order of
//! everyone else, so "first fit" always means "first in shuffled order".

use rand::{Rng, seq::SliceRandom};
use seatwise_model::{ids::StudentIndex, model::Model};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidatePool {
    candidates: Vec<StudentIndex>,
}

impl CandidatePool {
    /// Creates a pool with every student of `model`, in model order.
    pub fn from_model(model: &Model) -> Self {
        Self {
            candidates: StudentIndex::range(model.num_students()).collect(),
        }
    }

    #[inline]
    pub fn from_indices(candidates: Vec<StudentIndex>) -> Self {
        Self { candidates }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            candidates: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[StudentIndex] {
        &self.candidates
    }

    /// Keeps the first `len` candidates and returns how many were dropped.
    #[inline]
    pub fn truncate(&mut self, len: usize) -> usize {
        let dropped = self.candidates.len().saturating_sub(len);
        self.candidates.truncate(len);
        dropped
    }

    /// Shuffles the pool uniformly.
    #[inline]
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.candidates.shuffle(rng);
    }

    /// Removes and returns the first candidate accepted by `fits`.
    ///
    /// The remaining candidates keep their relative order. Returns `None`
    /// and leaves the pool untouched if nobody fits.
    #[inline]
    pub fn take_first_fit<F>(&mut self, mut fits: F) -> Option<StudentIndex>
    where
        F: FnMut(StudentIndex) -> bool,
    {
        let position = self.candidates.iter().position(|&candidate| fits(candidate))?;
        Some(self.candidates.remove(position))
    }

    /// Replaces the content of this pool with the content of `other`,
    /// reusing the allocation.
    #[inline]
    pub fn reset_from(&mut self, other: &CandidatePool) {
        self.candidates.clone_from(&other.candidates);
    }
}

impl std::fmt::Display for CandidatePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CandidatePool(len: {})", self.candidates.len())
    }
}
