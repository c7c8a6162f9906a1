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

//! Seat plans: the flattened output of an allocation.
//!
//! A `SeatPlan` lists occupied seats only, grouped by room in the order the
//! rooms were filled and row-major inside each room. Empty seats are implied
//! by their absence. `PlanView` renders a plan against its `Model` as one
//! text grid per room, with `Empty` in every seat nobody occupies.

use crate::{
    ids::{RoomId, StudentId},
    model::Model,
    seat::{SeatAssignment, SeatPosition},
};
use serde::{Deserialize, Serialize};

/// The final seat assignment of an allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPlan {
    /// Rooms that took part in the allocation, in fill order.
    rooms: Vec<RoomId>,
    /// Occupied seats, grouped by room, row-major within a room.
    seats: Vec<SeatAssignment>,
}

impl SeatPlan {
    /// Constructs a new `SeatPlan`.
    #[inline]
    pub fn new(rooms: Vec<RoomId>, seats: Vec<SeatAssignment>) -> Self {
        Self { rooms, seats }
    }

    #[inline]
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    #[inline]
    pub fn seats(&self) -> &[SeatAssignment] {
        &self.seats
    }

    /// Returns the number of occupied seats.
    #[inline]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Iterates over the occupied seats of one room.
    pub fn seats_in_room(&self, room: RoomId) -> impl Iterator<Item = &SeatAssignment> {
        self.seats.iter().filter(move |seat| seat.room == room)
    }

    /// Returns the seat a student was placed on, if any.
    pub fn seat_of(&self, student: StudentId) -> Option<&SeatAssignment> {
        self.seats.iter().find(|seat| seat.student == student)
    }

    /// Returns the student sitting at `position` in `room`, if any.
    pub fn student_at(&self, room: RoomId, position: SeatPosition) -> Option<StudentId> {
        self.seats
            .iter()
            .find(|seat| seat.room == room && seat.position() == position)
            .map(|seat| seat.student)
    }

    /// Consumes the plan and returns its seats.
    #[inline]
    pub fn into_seats(self) -> Vec<SeatAssignment> {
        self.seats
    }
}

impl std::fmt::Display for SeatPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Seat Plan Summary")?;
        writeln!(f, "   Rooms: {}", self.rooms.len())?;
        writeln!(f, "   Seats Assigned: {}", self.seats.len())?;
        writeln!(f)?;

        if self.seats.is_empty() {
            writeln!(f, "   (No seats assigned)")?;
            return Ok(());
        }

        writeln!(
            f,
            "   {:<8} | {:<5} | {:<6} | {:<10}",
            "Room", "Row", "Column", "Student"
        )?;
        writeln!(f, "   {:-<8}-+-{:-<5}-+-{:-<6}-+-{:-<10}", "", "", "", "")?;
        for seat in &self.seats {
            writeln!(
                f,
                "   {:<8} | {:<5} | {:<6} | {:<10}",
                seat.room.get(),
                seat.row,
                seat.column,
                seat.student.get()
            )?;
        }

        Ok(())
    }
}

const EMPTY_CELL: &str = "Empty";
const UNKNOWN_CELL: &str = "?";

/// Renders a `SeatPlan` as one seat grid per room.
///
/// Rooms are printed in plan order. Occupied seats show the student's roll
/// number; seats referencing a student the model does not know show `?`.
/// Rooms missing from the model are skipped.
#[derive(Clone, Copy, Debug)]
pub struct PlanView<'a> {
    model: &'a Model,
    plan: &'a SeatPlan,
}

impl<'a> PlanView<'a> {
    #[inline]
    pub fn new(model: &'a Model, plan: &'a SeatPlan) -> Self {
        Self { model, plan }
    }

    fn cell_label(&self, room: RoomId, position: SeatPosition) -> &'a str {
        match self.plan.student_at(room, position) {
            None => EMPTY_CELL,
            Some(id) => self
                .model
                .student_by_id(id)
                .map_or(UNKNOWN_CELL, |student| student.roll_no()),
        }
    }
}

impl std::fmt::Display for PlanView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &room_id in self.plan.rooms() {
            let Some(room) = self.model.room_by_id(room_id) else {
                continue;
            };

            writeln!(f, "Room: {}", room)?;

            let width = (1..=room.rows)
                .flat_map(|row| (1..=room.columns).map(move |column| (row, column)))
                .map(|(row, column)| self.cell_label(room_id, SeatPosition::new(row, column)).len())
                .max()
                .unwrap_or(0);

            for row in 1..=room.rows {
                let mut line = String::new();
                for column in 1..=room.columns {
                    if column > 1 {
                        line.push_str(" | ");
                    }
                    let label = self.cell_label(room_id, SeatPosition::new(row, column));
                    line.push_str(&format!("{:<width$}", label, width = width));
                }
                writeln!(f, "{}", line.trim_end())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        academic::{Department, Semester},
        ids::{DepartmentId, SemesterId},
        model::ModelBuilder,
        room::Room,
        student::StudentRecord,
    };

    fn seat(room: u64, row: usize, column: usize, student: u64) -> SeatAssignment {
        SeatAssignment::new(
            RoomId::new(room),
            SeatPosition::new(row, column),
            StudentId::new(student),
        )
    }

    fn sample_model() -> Model {
        let mut builder = ModelBuilder::new();
        builder
            .add_department(Department::new(DepartmentId::new(1), "CS", "CS"))
            .add_semester(Semester::new(SemesterId::new(1), "S1", "S1", DepartmentId::new(1)))
            .add_room(Room::new(RoomId::new(1), "R1", "Hall", 2, 2))
            .add_student(StudentRecord::new(StudentId::new(1), "CS-01", "Ada", SemesterId::new(1)))
            .add_student(StudentRecord::new(StudentId::new(2), "CS-02", "Bob", SemesterId::new(1)));
        builder.build().unwrap()
    }

    #[test]
    fn test_queries() {
        let plan = SeatPlan::new(
            vec![RoomId::new(1), RoomId::new(2)],
            vec![seat(1, 1, 1, 10), seat(1, 2, 2, 11), seat(2, 1, 1, 12)],
        );

        assert_eq!(plan.len(), 3);
        assert!(!plan.is_empty());
        assert_eq!(plan.seats_in_room(RoomId::new(1)).count(), 2);
        assert_eq!(plan.seat_of(StudentId::new(12)), Some(&seat(2, 1, 1, 12)));
        assert_eq!(plan.seat_of(StudentId::new(99)), None);
        assert_eq!(
            plan.student_at(RoomId::new(1), SeatPosition::new(2, 2)),
            Some(StudentId::new(11))
        );
        assert_eq!(plan.student_at(RoomId::new(1), SeatPosition::new(1, 2)), None);
    }

    #[test]
    fn test_empty_plan_display() {
        let plan = SeatPlan::default();
        let rendered = format!("{}", plan);
        assert!(rendered.contains("Seats Assigned: 0"));
        assert!(rendered.contains("(No seats assigned)"));
    }

    #[test]
    fn test_display_lists_seats() {
        let plan = SeatPlan::new(vec![RoomId::new(1)], vec![seat(1, 1, 2, 7)]);

        let mut expected = String::new();
        expected.push_str("Seat Plan Summary\n");
        expected.push_str("   Rooms: 1\n");
        expected.push_str("   Seats Assigned: 1\n");
        expected.push('\n');
        expected.push_str("   Room     | Row   | Column | Student   \n");
        expected.push_str("   ---------+-------+--------+-----------\n");
        expected.push_str("   1        | 1     | 2      | 7         \n");

        assert_eq!(format!("{}", plan), expected);
    }

    #[test]
    fn test_plan_view_renders_grid_with_empty_cells() {
        let model = sample_model();
        let plan = SeatPlan::new(vec![RoomId::new(1)], vec![seat(1, 1, 1, 1), seat(1, 2, 2, 2)]);

        let rendered = format!("{}", PlanView::new(&model, &plan));
        let expected = "Room: R1 - Hall (2 x 2)\nCS-01 | Empty\nEmpty | CS-02\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_plan_view_marks_unknown_students_and_skips_unknown_rooms() {
        let model = sample_model();
        let plan = SeatPlan::new(
            vec![RoomId::new(9), RoomId::new(1)],
            vec![seat(1, 1, 2, 42)],
        );

        let rendered = format!("{}", PlanView::new(&model, &plan));
        assert_eq!(rendered, "Room: R1 - Hall (2 x 2)\nEmpty | ?\nEmpty | Empty\n");
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let plan = SeatPlan::new(vec![RoomId::new(2)], vec![seat(2, 1, 1, 3), seat(2, 1, 2, 4)]);
        let json = serde_json::to_string(&plan).unwrap();
        let back: SeatPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
