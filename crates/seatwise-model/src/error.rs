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

use crate::ids::{DepartmentId, RoomId, SemesterId, StudentId};
use thiserror::Error;

/// Reasons `ModelBuilder::build` rejects its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("department {0} was added more than once")]
    DuplicateDepartment(DepartmentId),

    #[error("semester {0} was added more than once")]
    DuplicateSemester(SemesterId),

    #[error("room {0} was added more than once")]
    DuplicateRoom(RoomId),

    #[error("student {0} was added more than once")]
    DuplicateStudent(StudentId),

    #[error("semester {semester} references unknown department {department}")]
    UnknownDepartment {
        semester: SemesterId,
        department: DepartmentId,
    },

    #[error("room {room} has {rows} x {columns} seats, more than one room may hold")]
    RoomTooLarge {
        room: RoomId,
        rows: usize,
        columns: usize,
    },

    #[error("student {student} references unknown semester {semester}")]
    UnknownSemester {
        student: StudentId,
        semester: SemesterId,
    },
}

/// Errors raised while loading an instance document.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed instance document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid instance: {0}")]
    Model(#[from] ModelError),
}
