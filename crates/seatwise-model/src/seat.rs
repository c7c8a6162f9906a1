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

//! Seat positions and seat assignments.
//!
//! Seats are numbered from `(1, 1)` at the front-left of a room. Within a
//! room the allocator walks seats row-major: left to right along a row, rows
//! from front to back. The only neighbors that matter to the adjacency rule
//! are the seat to the left and the seat in front ("up").

use crate::ids::{RoomId, StudentId};
use serde::{Deserialize, Serialize};

/// A 1-indexed `(row, column)` position inside a room.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct SeatPosition {
    pub row: usize,
    pub column: usize,
}

impl SeatPosition {
    #[inline(always)]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The seat directly to the left, if this is not the first column.
    #[inline]
    pub const fn left(&self) -> Option<SeatPosition> {
        if self.column > 1 {
            Some(SeatPosition::new(self.row, self.column - 1))
        } else {
            None
        }
    }

    /// The seat directly in front, if this is not the first row.
    #[inline]
    pub const fn up(&self) -> Option<SeatPosition> {
        if self.row > 1 {
            Some(SeatPosition::new(self.row - 1, self.column))
        } else {
            None
        }
    }
}

impl std::fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// One occupied seat of a plan: the record handed to a persistence sink.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub room: RoomId,
    pub row: usize,
    pub column: usize,
    pub student: StudentId,
}

impl SeatAssignment {
    #[inline]
    pub const fn new(room: RoomId, position: SeatPosition, student: StudentId) -> Self {
        Self {
            room,
            row: position.row,
            column: position.column,
            student,
        }
    }

    #[inline]
    pub const fn position(&self) -> SeatPosition {
        SeatPosition::new(self.row, self.column)
    }
}

impl std::fmt::Display for SeatAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "room {} seat {} -> student {}",
            self.room,
            self.position(),
            self.student
        )
    }
}
