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

//! Small model builders shared by the unit tests of this crate.

use rustc_hash::FxHashSet;
use seatwise_model::{
    academic::{Department, Semester},
    ids::{DepartmentId, RoomId, SemesterId, StudentId},
    model::{Model, ModelBuilder},
    room::Room,
    student::StudentRecord,
};

/// Builds a model from room shapes `(rows, columns)` and students given as
/// `(semester, department)` pairs.
///
/// Rooms get ids `1..`, students get ids `1..` and roll numbers `S<id>`.
/// Semesters and departments are registered on first use; a semester id must
/// always be paired with the same department.
pub(crate) fn model_with(rooms: &[(usize, usize)], students: &[(u64, u64)]) -> Model {
    let rooms: Vec<Room> = rooms
        .iter()
        .enumerate()
        .map(|(i, &(rows, columns))| {
            let id = i as u64 + 1;
            Room::new(RoomId::new(id), format!("R{id}"), format!("Room {id}"), rows, columns)
        })
        .collect();
    model_with_rooms(rooms, students)
}

pub(crate) fn model_with_rooms(rooms: Vec<Room>, students: &[(u64, u64)]) -> Model {
    let mut builder = ModelBuilder::new();
    let mut departments = FxHashSet::default();
    let mut semesters = FxHashSet::default();

    for &(semester, department) in students {
        if departments.insert(department) {
            builder.add_department(Department::new(
                DepartmentId::new(department),
                format!("D{department}"),
                format!("Department {department}"),
            ));
        }
        if semesters.insert(semester) {
            builder.add_semester(Semester::new(
                SemesterId::new(semester),
                format!("S{semester}"),
                format!("Semester {semester}"),
                DepartmentId::new(department),
            ));
        }
    }

    for room in rooms {
        builder.add_room(room);
    }

    for (i, &(semester, _)) in students.iter().enumerate() {
        let id = i as u64 + 1;
        builder.add_student(StudentRecord::new(
            StudentId::new(id),
            format!("S{id}"),
            format!("Student {id}"),
            SemesterId::new(semester),
        ));
    }

    builder.build().expect("fixture model must be valid")
}
