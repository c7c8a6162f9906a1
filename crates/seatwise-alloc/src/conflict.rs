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

//! The adjacency conflict rule.
//!
//! Two students conflict when they would sit side by side (one directly to
//! the left of the other) or one behind the other (one directly in front)
//! in the same room while sharing an attribute that makes copying easy: the
//! same department or the same semester. Diagonal neighbors, seats in other
//! rooms and empty seats never conflict.
//!
//! The greedy pass fills seats row-major, so when a seat is considered only
//! its left and up neighbors can already be occupied. Checking those two is
//! therefore enough to keep every horizontal and vertical pair of the final
//! plan conflict-free.
//!
//! `ConflictPredicate` is the single extension point for the rule. The rest
//! of the allocator only ever asks it "may this student sit here?".

use seatwise_core::grid::Grid;
use seatwise_model::{ids::StudentIndex, model::Model, seat::SeatPosition, student::Student};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Decides whether seating a candidate at a position clashes with the
/// students already seated in the same room.
///
/// Implementations must be pure: the same arguments always give the same
/// answer and nothing is mutated.
pub trait ConflictPredicate {
    /// Returns the name of the predicate.
    fn name(&self) -> &str;

    /// Returns `true` if `candidate` may **not** sit at `position` of `room`.
    fn conflicts(
        &self,
        model: &Model,
        room: &Grid<StudentIndex>,
        position: SeatPosition,
        candidate: StudentIndex,
    ) -> bool;
}

impl std::fmt::Debug for dyn ConflictPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConflictPredicate({})", self.name())
    }
}

impl std::fmt::Display for dyn ConflictPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConflictPredicate({})", self.name())
    }
}

impl<P> ConflictPredicate for &P
where
    P: ConflictPredicate + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn conflicts(
        &self,
        model: &Model,
        room: &Grid<StudentIndex>,
        position: SeatPosition,
        candidate: StudentIndex,
    ) -> bool {
        (**self).conflicts(model, room, position, candidate)
    }
}

impl<P> ConflictPredicate for Box<P>
where
    P: ConflictPredicate + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn conflicts(
        &self,
        model: &Model,
        room: &Grid<StudentIndex>,
        position: SeatPosition,
        candidate: StudentIndex,
    ) -> bool {
        (**self).conflicts(model, room, position, candidate)
    }
}

/// Which shared attributes make two neighbors conflict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ConflictAttributes {
    pub department: bool,
    pub semester: bool,
}

impl Default for ConflictAttributes {
    fn default() -> Self {
        Self::all()
    }
}

impl ConflictAttributes {
    /// Department and semester both count.
    #[inline]
    pub const fn all() -> Self {
        Self {
            department: true,
            semester: true,
        }
    }

    /// Nothing counts; every seating is allowed.
    #[inline]
    pub const fn none() -> Self {
        Self {
            department: false,
            semester: false,
        }
    }

    #[inline]
    pub const fn department_only() -> Self {
        Self {
            department: true,
            semester: false,
        }
    }

    #[inline]
    pub const fn semester_only() -> Self {
        Self {
            department: false,
            semester: true,
        }
    }

    /// Returns `true` if `a` and `b` share any enabled attribute.
    #[inline]
    pub fn clash(&self, a: &Student, b: &Student) -> bool {
        (self.department && a.shares_department(b)) || (self.semester && a.shares_semester(b))
    }
}

impl std::fmt::Display for ConflictAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.department, self.semester) {
            (true, true) => write!(f, "department|semester"),
            (true, false) => write!(f, "department"),
            (false, true) => write!(f, "semester"),
            (false, false) => write!(f, "none"),
        }
    }
}

/// Returns the students seated directly left of and directly in front of
/// `position`, in that order. Missing and empty seats are skipped.
#[inline]
pub fn occupied_neighbors(
    room: &Grid<StudentIndex>,
    position: SeatPosition,
) -> SmallVec<[StudentIndex; 2]> {
    [position.left(), position.up()]
        .into_iter()
        .flatten()
        .filter_map(|neighbor| room.get(neighbor.row, neighbor.column).copied())
        .collect()
}

/// The default rule: a candidate conflicts with its left and up neighbors
/// when they share any of the configured attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyConflict {
    attributes: ConflictAttributes,
}

impl AdjacencyConflict {
    #[inline]
    pub const fn new(attributes: ConflictAttributes) -> Self {
        Self { attributes }
    }

    #[inline]
    pub const fn attributes(&self) -> ConflictAttributes {
        self.attributes
    }
}

impl ConflictPredicate for AdjacencyConflict {
    fn name(&self) -> &str {
        "AdjacencyConflict"
    }

    #[inline]
    fn conflicts(
        &self,
        model: &Model,
        room: &Grid<StudentIndex>,
        position: SeatPosition,
        candidate: StudentIndex,
    ) -> bool {
        let student = model.student(candidate);
        occupied_neighbors(room, position)
            .iter()
            .any(|&neighbor| self.attributes.clash(student, model.student(neighbor)))
    }
}

impl std::fmt::Display for AdjacencyConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AdjacencyConflict({})", self.attributes)
    }
}
