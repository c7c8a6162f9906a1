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

//! Seat-filling passes.
//!
//! A pass takes a freshly shuffled candidate pool and an empty assignment
//! and seats as many candidates as its rule allows. The driver in
//! `allocator` repeats passes with new shuffles; a pass itself never
//! retries or backtracks.

use crate::{assignment::Assignment, conflict::ConflictPredicate, pool::CandidatePool};
use seatwise_model::{ids::RoomIndex, model::Model, seat::SeatPosition};

/// Fills an assignment from a candidate pool.
pub trait PlacementPass {
    /// Returns the name of the pass.
    fn name(&self) -> &str;

    /// Seats candidates from `pool` into `assignment`, removing every seated
    /// candidate from the pool. Returns the number of students placed.
    fn fill(&mut self, model: &Model, pool: &mut CandidatePool, assignment: &mut Assignment)
    -> usize;
}

impl std::fmt::Debug for dyn PlacementPass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlacementPass({})", self.name())
    }
}

impl std::fmt::Display for dyn PlacementPass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlacementPass({})", self.name())
    }
}

/// Walks the rooms in model order and their seats row-major, giving each
/// seat to the first candidate in pool order that the predicate accepts.
///
/// A seat nobody fits stays empty and the walk moves on. The pass stops as
/// soon as the pool runs dry.
#[derive(Clone, Debug, Default)]
pub struct GreedyPass<P> {
    predicate: P,
}

impl<P> GreedyPass<P>
where
    P: ConflictPredicate,
{
    #[inline]
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }

    #[inline]
    pub fn predicate(&self) -> &P {
        &self.predicate
    }
}

impl<P> PlacementPass for GreedyPass<P>
where
    P: ConflictPredicate,
{
    fn name(&self) -> &str {
        "GreedyPass"
    }

    fn fill(
        &mut self,
        model: &Model,
        pool: &mut CandidatePool,
        assignment: &mut Assignment,
    ) -> usize {
        let before = assignment.placed();

        for room_index in RoomIndex::range(model.num_rooms()) {
            if pool.is_empty() {
                break;
            }

            let room = model.room(room_index);
            for row in 1..=room.rows {
                for column in 1..=room.columns {
                    if pool.is_empty() {
                        return assignment.placed() - before;
                    }

                    let position = SeatPosition::new(row, column);
                    let grid = assignment.room(room_index);
                    let chosen = pool.take_first_fit(|candidate| {
                        !self.predicate.conflicts(model, grid, position, candidate)
                    });

                    if let Some(student) = chosen {
                        assignment.place(room_index, position, student);
                    }
                }
            }
        }

        assignment.placed() - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::{AdjacencyConflict, ConflictAttributes};
    use crate::fixtures::model_with;
    use seatwise_model::ids::StudentIndex;

    fn run(model: &Model, order: &[usize], predicate: AdjacencyConflict) -> (Assignment, CandidatePool) {
        let mut pool =
            CandidatePool::from_indices(order.iter().copied().map(StudentIndex::new).collect());
        let mut assignment = Assignment::new(model);
        let mut pass = GreedyPass::new(predicate);
        let placed = pass.fill(model, &mut pool, &mut assignment);
        assert_eq!(placed, assignment.placed());
        (assignment, pool)
    }

    fn at(assignment: &Assignment, room: usize, row: usize, column: usize) -> Option<usize> {
        assignment
            .room(RoomIndex::new(room))
            .get(row, column)
            .map(|s| s.get())
    }

    #[test]
    fn test_no_conflicts_fills_in_pool_order() {
        let model = model_with(&[(1, 3)], &[(1, 1), (2, 2), (3, 3)]);
        let (assignment, pool) = run(&model, &[2, 0, 1], AdjacencyConflict::default());
        assert_eq!(at(&assignment, 0, 1, 1), Some(2));
        assert_eq!(at(&assignment, 0, 1, 2), Some(0));
        assert_eq!(at(&assignment, 0, 1, 3), Some(1));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_single_group_fills_checkerboard_diagonal() {
        // Everybody shares semester and department: only diagonal seats work.
        let model = model_with(&[(2, 2)], &[(1, 1), (1, 1), (1, 1), (1, 1)]);
        let (assignment, pool) = run(&model, &[0, 1, 2, 3], AdjacencyConflict::default());
        assert_eq!(assignment.placed(), 2);
        assert_eq!(at(&assignment, 0, 1, 1), Some(0));
        assert_eq!(at(&assignment, 0, 1, 2), None);
        assert_eq!(at(&assignment, 0, 2, 1), None);
        assert_eq!(at(&assignment, 0, 2, 2), Some(1));
        assert_eq!(pool.as_slice(), &[StudentIndex::new(2), StudentIndex::new(3)]);
    }

    #[test]
    fn test_first_fit_skips_conflicting_candidates() {
        // 0 and 1 share a semester, 2 is unrelated.
        let model = model_with(&[(1, 2)], &[(1, 1), (1, 1), (2, 2)]);
        let (assignment, pool) = run(&model, &[0, 1, 2], AdjacencyConflict::default());
        assert_eq!(at(&assignment, 0, 1, 1), Some(0));
        assert_eq!(at(&assignment, 0, 1, 2), Some(2));
        assert_eq!(pool.as_slice(), &[StudentIndex::new(1)]);
    }

    #[test]
    fn test_rooms_are_filled_in_order_and_pass_stops_when_pool_empty() {
        let model = model_with(&[(1, 2), (1, 2)], &[(1, 1), (2, 2), (3, 3)]);
        let (assignment, _) = run(&model, &[0, 1, 2], AdjacencyConflict::default());
        assert_eq!(at(&assignment, 0, 1, 1), Some(0));
        assert_eq!(at(&assignment, 0, 1, 2), Some(1));
        assert_eq!(at(&assignment, 1, 1, 1), Some(2));
        assert_eq!(at(&assignment, 1, 1, 2), None);
    }

    #[test]
    fn test_rooms_do_not_conflict_across_boundaries() {
        let model = model_with(&[(1, 1), (1, 1)], &[(1, 1), (1, 1)]);
        let (assignment, pool) = run(&model, &[0, 1], AdjacencyConflict::default());
        assert_eq!(assignment.placed(), 2);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_disabled_attributes_seat_everyone() {
        let model = model_with(&[(2, 2)], &[(1, 1), (1, 1), (1, 1), (1, 1)]);
        let (assignment, _) = run(
            &model,
            &[0, 1, 2, 3],
            AdjacencyConflict::new(ConflictAttributes::none()),
        );
        assert_eq!(assignment.placed(), 4);
    }

    #[test]
    fn test_empty_pool_places_nothing() {
        let model = model_with(&[(2, 2)], &[(1, 1)]);
        let (assignment, _) = run(&model, &[], AdjacencyConflict::default());
        assert_eq!(assignment.placed(), 0);
    }
}
