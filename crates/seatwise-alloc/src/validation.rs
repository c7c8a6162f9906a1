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

//! Independent checks of a finished seat plan.
//!
//! `validate_plan` does not trust the allocator: it rebuilds the room grids
//! from the plan's flat seat list and checks every seat against the model
//! and a conflict predicate. It is meant for tests and for plans that come
//! from somewhere else, such as a plan edited by hand and loaded back.
//!
//! Capacity is checked against the total over all rooms. A single room may
//! hold more students than its explicit capacity as long as they fit its
//! grid, because explicit capacities only limit how many students are
//! admitted overall.

use crate::conflict::ConflictPredicate;
use fixedbitset::FixedBitSet;
use seatwise_core::grid::Grid;
use seatwise_model::{
    ids::{RoomId, StudentId, StudentIndex},
    model::Model,
    plan::SeatPlan,
    seat::SeatPosition,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanViolation {
    #[error("plan references unknown room {room}")]
    UnknownRoom { room: RoomId },
    #[error("plan references unknown student {student}")]
    UnknownStudent { student: StudentId },
    #[error("seat {position} lies outside room {room}")]
    SeatOutOfRange { room: RoomId, position: SeatPosition },
    #[error("student {student} is seated more than once")]
    DuplicateStudent { student: StudentId },
    #[error("seat {position} of room {room} is occupied twice")]
    SeatOccupiedTwice { room: RoomId, position: SeatPosition },
    #[error("student {student} at seat {position} of room {room} conflicts with a neighbor")]
    AdjacencyConflict {
        room: RoomId,
        position: SeatPosition,
        student: StudentId,
    },
    #[error("{placed} students placed but the rooms hold only {capacity}")]
    CapacityExceeded { placed: usize, capacity: usize },
}

/// Checks `plan` against `model` and `predicate`.
///
/// Structural problems (unknown ids, out-of-range or doubly used seats,
/// students seated twice) are reported first, in seat order, followed by
/// the capacity check and finally adjacency conflicts in room order and
/// row-major order.
///
/// # Errors
///
/// Returns the first `PlanViolation` found.
pub fn validate_plan<P>(model: &Model, plan: &SeatPlan, predicate: &P) -> Result<(), PlanViolation>
where
    P: ConflictPredicate + ?Sized,
{
    let mut grids: Vec<Grid<StudentIndex>> = model
        .rooms()
        .iter()
        .map(|room| Grid::new(room.rows, room.columns))
        .collect();
    let mut seated = FixedBitSet::with_capacity(model.num_students());

    for seat in plan.seats() {
        let room_index = model
            .room_index(seat.room)
            .ok_or(PlanViolation::UnknownRoom { room: seat.room })?;
        let student_index = model
            .student_index(seat.student)
            .ok_or(PlanViolation::UnknownStudent {
                student: seat.student,
            })?;

        let grid = &mut grids[room_index.get()];
        let position = seat.position();
        if !grid.contains(position.row, position.column) {
            return Err(PlanViolation::SeatOutOfRange {
                room: seat.room,
                position,
            });
        }

        if seated.put(student_index.get()) {
            return Err(PlanViolation::DuplicateStudent {
                student: seat.student,
            });
        }

        if grid.set(position.row, position.column, student_index).is_some() {
            return Err(PlanViolation::SeatOccupiedTwice {
                room: seat.room,
                position,
            });
        }
    }

    let capacity = model.total_capacity();
    if plan.len() > capacity {
        return Err(PlanViolation::CapacityExceeded {
            placed: plan.len(),
            capacity,
        });
    }

    for (room, grid) in model.rooms().iter().zip(grids.iter_mut()) {
        for (row, column) in grid.positions() {
            let Some(student) = grid.take(row, column) else {
                continue;
            };
            let position = SeatPosition::new(row, column);
            let conflict = predicate.conflicts(model, grid, position, student);
            grid.set(row, column, student);

            if conflict {
                return Err(PlanViolation::AdjacencyConflict {
                    room: room.id,
                    position,
                    student: model.student(student).id(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::{AdjacencyConflict, ConflictAttributes};
    use crate::fixtures::{model_with, model_with_rooms};
    use seatwise_model::{room::Room, seat::SeatAssignment};

    fn seat(room: u64, row: usize, column: usize, student: u64) -> SeatAssignment {
        SeatAssignment::new(
            RoomId::new(room),
            SeatPosition::new(row, column),
            StudentId::new(student),
        )
    }

    fn plan(seats: Vec<SeatAssignment>) -> SeatPlan {
        SeatPlan::new(vec![RoomId::new(1)], seats)
    }

    fn check(model: &Model, seats: Vec<SeatAssignment>) -> Result<(), PlanViolation> {
        validate_plan(model, &plan(seats), &AdjacencyConflict::default())
    }

    // 1 and 2 share a semester, 3 is unrelated.
    fn model() -> Model {
        model_with(&[(2, 2)], &[(1, 1), (1, 1), (2, 2)])
    }

    #[test]
    fn test_valid_plans() {
        let model = model();
        assert_eq!(check(&model, vec![]), Ok(()));
        assert_eq!(check(&model, vec![seat(1, 1, 1, 1), seat(1, 2, 2, 2)]), Ok(()));
        assert_eq!(
            check(&model, vec![seat(1, 1, 1, 1), seat(1, 1, 2, 3), seat(1, 2, 2, 2)]),
            Ok(())
        );
    }

    #[test]
    fn test_horizontal_conflict() {
        let model = model();
        assert_eq!(
            check(&model, vec![seat(1, 1, 1, 1), seat(1, 1, 2, 2)]),
            Err(PlanViolation::AdjacencyConflict {
                room: RoomId::new(1),
                position: SeatPosition::new(1, 2),
                student: StudentId::new(2),
            })
        );
    }

    #[test]
    fn test_vertical_conflict() {
        let model = model();
        assert_eq!(
            check(&model, vec![seat(1, 2, 1, 1), seat(1, 1, 1, 2)]),
            Err(PlanViolation::AdjacencyConflict {
                room: RoomId::new(1),
                position: SeatPosition::new(2, 1),
                student: StudentId::new(1),
            })
        );
    }

    #[test]
    fn test_predicate_decides_conflicts() {
        let model = model();
        let plan = plan(vec![seat(1, 1, 1, 1), seat(1, 1, 2, 2)]);
        let lenient = AdjacencyConflict::new(ConflictAttributes::none());
        assert_eq!(validate_plan(&model, &plan, &lenient), Ok(()));
        let dynamic: &dyn ConflictPredicate = &AdjacencyConflict::default();
        assert!(validate_plan(&model, &plan, dynamic).is_err());
    }

    #[test]
    fn test_cross_room_neighbors_are_fine() {
        let model = model_with(&[(1, 1), (1, 1)], &[(1, 1), (1, 1)]);
        let plan = SeatPlan::new(
            vec![RoomId::new(1), RoomId::new(2)],
            vec![seat(1, 1, 1, 1), seat(2, 1, 1, 2)],
        );
        assert_eq!(
            validate_plan(&model, &plan, &AdjacencyConflict::default()),
            Ok(())
        );
    }

    #[test]
    fn test_structural_violations() {
        let model = model();
        assert_eq!(
            check(&model, vec![seat(9, 1, 1, 1)]),
            Err(PlanViolation::UnknownRoom { room: RoomId::new(9) })
        );
        assert_eq!(
            check(&model, vec![seat(1, 1, 1, 9)]),
            Err(PlanViolation::UnknownStudent {
                student: StudentId::new(9)
            })
        );
        assert_eq!(
            check(&model, vec![seat(1, 3, 1, 1)]),
            Err(PlanViolation::SeatOutOfRange {
                room: RoomId::new(1),
                position: SeatPosition::new(3, 1)
            })
        );
        assert_eq!(
            check(&model, vec![seat(1, 0, 1, 1)]),
            Err(PlanViolation::SeatOutOfRange {
                room: RoomId::new(1),
                position: SeatPosition::new(0, 1)
            })
        );
        assert_eq!(
            check(&model, vec![seat(1, 1, 1, 1), seat(1, 2, 2, 1)]),
            Err(PlanViolation::DuplicateStudent {
                student: StudentId::new(1)
            })
        );
        assert_eq!(
            check(&model, vec![seat(1, 1, 1, 1), seat(1, 1, 1, 3)]),
            Err(PlanViolation::SeatOccupiedTwice {
                room: RoomId::new(1),
                position: SeatPosition::new(1, 1)
            })
        );
    }

    #[test]
    fn test_capacity_is_checked_in_total() {
        let students: Vec<(u64, u64)> = (1..=3).map(|i| (i, i)).collect();
        let room = Room::new(RoomId::new(1), "R1", "Lab", 2, 2).with_capacity(2);
        let model = model_with_rooms(vec![room], &students);
        assert_eq!(
            check(&model, vec![seat(1, 1, 1, 1), seat(1, 1, 2, 2), seat(1, 2, 1, 3)]),
            Err(PlanViolation::CapacityExceeded {
                placed: 3,
                capacity: 2
            })
        );

        let rooms = vec![
            Room::new(RoomId::new(1), "R1", "Lab", 2, 2).with_capacity(1),
            Room::new(RoomId::new(2), "R2", "Hall", 2, 2),
        ];
        let model = model_with_rooms(rooms, &students);
        // room 1 is over its own capacity but the total of 5 is respected
        let plan = SeatPlan::new(
            vec![RoomId::new(1), RoomId::new(2)],
            vec![seat(1, 1, 1, 1), seat(1, 1, 2, 2), seat(1, 2, 1, 3)],
        );
        assert_eq!(
            validate_plan(&model, &plan, &AdjacencyConflict::default()),
            Ok(())
        );
    }

    #[test]
    fn test_violation_messages() {
        let violation = PlanViolation::AdjacencyConflict {
            room: RoomId::new(1),
            position: SeatPosition::new(1, 2),
            student: StudentId::new(4),
        };
        assert_eq!(
            violation.to_string(),
            "student 4 at seat (1, 2) of room 1 conflicts with a neighbor"
        );
    }
}
