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

//! The seat grids of one allocation attempt.

use seatwise_core::grid::Grid;
use seatwise_model::{
    ids::{RoomIndex, StudentIndex},
    model::Model,
    plan::SeatPlan,
    seat::{SeatAssignment, SeatPosition},
};

/// One `rows x columns` grid per room of the model, indexed by `RoomIndex`,
/// plus the number of students placed so far.
#[derive(Clone, Debug)]
pub struct Assignment {
    rooms: Vec<Grid<StudentIndex>>,
    placed: usize,
}

impl Assignment {
    /// Creates empty grids for every room of `model`.
    pub fn new(model: &Model) -> Self {
        Self {
            rooms: model
                .rooms()
                .iter()
                .map(|room| Grid::new(room.rows, room.columns))
                .collect(),
            placed: 0,
        }
    }

    #[inline]
    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }

    /// Empties every seat, keeping the grids' allocations.
    #[inline]
    pub fn clear(&mut self) {
        self.rooms.iter_mut().for_each(Grid::clear);
        self.placed = 0;
    }

    /// Returns the grid of the room at `room_index`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `room_index` is out of bounds.
    #[inline]
    pub fn room(&self, room_index: RoomIndex) -> &Grid<StudentIndex> {
        let index = room_index.get();
        debug_assert!(
            index < self.rooms.len(),
            "called `Assignment::room` with room index out of bounds: the len is {} but the index is {}",
            self.rooms.len(),
            index
        );
        &self.rooms[index]
    }

    /// Seats `student` at `position` of the room at `room_index`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the room or is already occupied.
    #[inline]
    pub fn place(&mut self, room_index: RoomIndex, position: SeatPosition, student: StudentIndex) {
        let index = room_index.get();
        debug_assert!(
            index < self.rooms.len(),
            "called `Assignment::place` with room index out of bounds: the len is {} but the index is {}",
            self.rooms.len(),
            index
        );
        let previous = self.rooms[index].set(position.row, position.column, student);
        assert!(
            previous.is_none(),
            "called `Assignment::place` on occupied seat {} of {}",
            position,
            room_index
        );
        self.placed += 1;
    }

    /// Number of students seated in this attempt.
    #[inline]
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Number of seats across all rooms that are still empty.
    #[inline]
    pub fn empty_seats(&self) -> usize {
        self.rooms.iter().map(Grid::len).sum::<usize>() - self.placed
    }

    /// Flattens the grids into a plan: rooms in model order, seats
    /// row-major inside each room. Empty seats are omitted.
    pub fn to_plan(&self, model: &Model) -> SeatPlan {
        let mut seats = Vec::with_capacity(self.placed);
        for (room, grid) in model.rooms().iter().zip(&self.rooms) {
            for (row, column, &student) in grid.occupied() {
                seats.push(SeatAssignment::new(
                    room.id,
                    SeatPosition::new(row, column),
                    model.student(student).id(),
                ));
            }
        }
        let rooms = model.rooms().iter().map(|room| room.id).collect();
        SeatPlan::new(rooms, seats)
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Assignment(rooms: {}, placed: {})",
            self.rooms.len(),
            self.placed
        )
    }
}
