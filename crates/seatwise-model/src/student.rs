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

use crate::ids::{DepartmentId, SemesterId, StudentId};
use serde::{Deserialize, Serialize};

/// A student as supplied to the model builder.
///
/// The department is not part of the record: it is resolved from the
/// semester when the model is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub roll_no: String,
    pub full_name: String,
    pub semester: SemesterId,
}

impl StudentRecord {
    pub fn new(
        id: StudentId,
        roll_no: impl Into<String>,
        full_name: impl Into<String>,
        semester: SemesterId,
    ) -> Self {
        Self {
            id,
            roll_no: roll_no.into(),
            full_name: full_name.into(),
            semester,
        }
    }
}

/// A student inside a built `Model`, with its department resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    roll_no: String,
    full_name: String,
    semester: SemesterId,
    department: DepartmentId,
}

impl Student {
    pub(crate) fn from_record(record: StudentRecord, department: DepartmentId) -> Self {
        Self {
            id: record.id,
            roll_no: record.roll_no,
            full_name: record.full_name,
            semester: record.semester,
            department,
        }
    }

    #[inline]
    pub fn id(&self) -> StudentId {
        self.id
    }

    #[inline]
    pub fn roll_no(&self) -> &str {
        &self.roll_no
    }

    #[inline]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[inline]
    pub fn semester(&self) -> SemesterId {
        self.semester
    }

    #[inline]
    pub fn department(&self) -> DepartmentId {
        self.department
    }

    /// Returns `true` if both students belong to the same department.
    #[inline]
    pub fn shares_department(&self, other: &Student) -> bool {
        self.department == other.department
    }

    /// Returns `true` if both students belong to the same semester.
    #[inline]
    pub fn shares_semester(&self, other: &Student) -> bool {
        self.semester == other.semester
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.roll_no, self.full_name)
    }
}
