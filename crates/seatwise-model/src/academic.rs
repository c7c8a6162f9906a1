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

//! Departments and semesters.
//!
//! A semester belongs to exactly one department; students belong to a
//! semester and inherit its department. Both attributes take part in the
//! allocator's adjacency rule.

use crate::ids::{DepartmentId, SemesterId};
use serde::{Deserialize, Serialize};

/// An academic department, e.g. `CS - Computer Science`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub code: String,
    pub name: String,
}

impl Department {
    pub fn new(id: DepartmentId, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

/// A semester cohort sitting an exam, owned by a department.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub id: SemesterId,
    pub code: String,
    pub title: String,
    /// Exam date as stored upstream; the allocator does not interpret it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<String>,
    pub department: DepartmentId,
}

impl Semester {
    pub fn new(
        id: SemesterId,
        code: impl Into<String>,
        title: impl Into<String>,
        department: DepartmentId,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            title: title.into(),
            exam_date: None,
            department,
        }
    }

    /// Sets the exam date.
    pub fn with_exam_date(mut self, exam_date: impl Into<String>) -> Self {
        self.exam_date = Some(exam_date.into());
        self
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code, self.title)
    }
}
