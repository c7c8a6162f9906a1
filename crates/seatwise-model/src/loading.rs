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

//! Instance loader for seat allocation requests.
//!
//! An instance is a JSON document holding the catalog an allocation draws
//! from (departments, semesters, rooms, students) and, optionally, the
//! request-level selection on top of it: which semesters sit the exam and
//! which rooms are used, in fill order.
//!
//! ```json
//! {
//!   "departments": [{ "id": 1, "code": "CS", "name": "Computer Science" }],
//!   "semesters":   [{ "id": 1, "code": "CS-5", "title": "Fifth", "department": 1 }],
//!   "rooms":       [{ "id": 1, "code": "R1", "name": "Hall", "rows": 4, "columns": 6 }],
//!   "students":    [{ "id": 1, "roll_no": "CS-001", "full_name": "Ada", "semester": 1 }],
//!   "semester_filter": [1],
//!   "room_selection": [1]
//! }
//! ```
//!
//! The loader accepts a string slice, any `Read`, or a file path. Selections
//! configured on the loader itself take precedence over the ones in the
//! document, so a stored catalog can be reused for many requests.

use crate::{
    academic::{Department, Semester},
    error::LoadError,
    ids::{RoomId, SemesterId},
    model::{Model, ModelBuilder},
    room::Room,
    student::StudentRecord,
};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// The on-disk shape of an instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceDocument {
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub semesters: Vec<Semester>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub students: Vec<StudentRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester_filter: Option<Vec<SemesterId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_selection: Option<Vec<RoomId>>,
}

impl InstanceDocument {
    /// Feeds the document into a fresh `ModelBuilder`.
    pub fn into_builder(self) -> ModelBuilder {
        let mut builder = ModelBuilder::new();
        for department in self.departments {
            builder.add_department(department);
        }
        for semester in self.semesters {
            builder.add_semester(semester);
        }
        for room in self.rooms {
            builder.add_room(room);
        }
        for student in self.students {
            builder.add_student(student);
        }
        if let Some(filter) = self.semester_filter {
            builder.restrict_to_semesters(filter);
        }
        if let Some(selection) = self.room_selection {
            builder.select_rooms(selection);
        }
        builder
    }
}

/// A configurable loader for instance documents.
///
/// # Configuration
/// * `semester_filter`: overrides the document's `semester_filter`.
/// * `room_selection`: overrides the document's `room_selection`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstanceLoader {
    semester_filter: Option<Vec<SemesterId>>,
    room_selection: Option<Vec<RoomId>>,
}

impl InstanceLoader {
    /// Creates a loader that uses the document's own selections.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only students of these semesters enter the model.
    #[inline]
    pub fn semester_filter<I>(mut self, semesters: I) -> Self
    where
        I: IntoIterator<Item = SemesterId>,
    {
        self.semester_filter = Some(semesters.into_iter().collect());
        self
    }

    /// Only these rooms enter the model, in this order.
    #[inline]
    pub fn room_selection<I>(mut self, rooms: I) -> Self
    where
        I: IntoIterator<Item = RoomId>,
    {
        self.room_selection = Some(rooms.into_iter().collect());
        self
    }

    /// Builds a model from an already parsed document.
    pub fn load_document(&self, mut document: InstanceDocument) -> Result<Model, LoadError> {
        if let Some(filter) = &self.semester_filter {
            document.semester_filter = Some(filter.clone());
        }
        if let Some(selection) = &self.room_selection {
            document.room_selection = Some(selection.clone());
        }
        Ok(document.into_builder().build()?)
    }

    /// Parses and loads an instance from a string slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatwise_model::loading::InstanceLoader;
    /// let json = r#"{
    ///     "departments": [{ "id": 1, "code": "CS", "name": "Computer Science" }],
    ///     "semesters": [{ "id": 1, "code": "CS-1", "title": "First", "department": 1 }],
    ///     "rooms": [{ "id": 1, "code": "R1", "name": "Hall", "rows": 2, "columns": 3 }],
    ///     "students": [{ "id": 1, "roll_no": "CS-001", "full_name": "Ada", "semester": 1 }]
    /// }"#;
    /// let model = InstanceLoader::new().from_str(json).unwrap();
    /// assert_eq!(model.num_students(), 1);
    /// assert_eq!(model.total_capacity(), 6);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(&self, s: &str) -> Result<Model, LoadError> {
        let document: InstanceDocument = serde_json::from_str(s)?;
        self.load_document(document)
    }

    /// Parses and loads an instance from a reader.
    pub fn from_reader<R>(&self, reader: R) -> Result<Model, LoadError>
    where
        R: Read,
    {
        let document: InstanceDocument = serde_json::from_reader(BufReader::new(reader))?;
        self.load_document(document)
    }

    /// Parses and loads an instance from a file.
    pub fn from_path<P>(&self, path: P) -> Result<Model, LoadError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.from_reader(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ModelError, ids::StudentId};
    use std::io::Write;

    const INSTANCE: &str = r#"{
        "departments": [
            { "id": 1, "code": "CS", "name": "Computer Science" },
            { "id": 2, "code": "EE", "name": "Electrical" }
        ],
        "semesters": [
            { "id": 10, "code": "CS-1", "title": "CS First", "department": 1, "exam_date": "2025-12-31" },
            { "id": 20, "code": "EE-1", "title": "EE First", "department": 2 }
        ],
        "rooms": [
            { "id": 1, "code": "R1", "name": "Hall", "rows": 2, "columns": 2 },
            { "id": 2, "code": "R2", "name": "Lab", "rows": 3, "columns": 3, "capacity": 5 }
        ],
        "students": [
            { "id": 1, "roll_no": "C1", "full_name": "A", "semester": 10 },
            { "id": 2, "roll_no": "E1", "full_name": "B", "semester": 20 },
            { "id": 3, "roll_no": "C2", "full_name": "C", "semester": 10 }
        ]
    }"#;

    #[test]
    fn test_load_from_str() {
        let model = InstanceLoader::new().from_str(INSTANCE).unwrap();
        assert_eq!(model.num_students(), 3);
        assert_eq!(model.num_rooms(), 2);
        assert_eq!(model.total_capacity(), 9);
        assert_eq!(
            model.semester(SemesterId::new(10)).unwrap().exam_date.as_deref(),
            Some("2025-12-31")
        );
    }

    #[test]
    fn test_loader_selection_overrides_document() {
        let model = InstanceLoader::new()
            .semester_filter([SemesterId::new(20)])
            .room_selection([RoomId::new(2)])
            .from_str(INSTANCE)
            .unwrap();
        assert_eq!(model.num_students(), 1);
        assert_eq!(model.students()[0].id(), StudentId::new(2));
        assert_eq!(model.num_rooms(), 1);
        assert_eq!(model.rooms()[0].code, "R2");
    }

    #[test]
    fn test_document_selection_is_applied() {
        let mut document: InstanceDocument = serde_json::from_str(INSTANCE).unwrap();
        document.semester_filter = Some(vec![SemesterId::new(10)]);
        document.room_selection = Some(vec![RoomId::new(2), RoomId::new(1)]);

        let model = InstanceLoader::new().load_document(document).unwrap();
        assert_eq!(model.num_students(), 2);
        assert_eq!(model.rooms()[0].id, RoomId::new(2));
        assert_eq!(model.rooms()[1].id, RoomId::new(1));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let model = InstanceLoader::new().from_str("{}").unwrap();
        assert_eq!(model.num_students(), 0);
        assert_eq!(model.num_rooms(), 0);
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let err = InstanceLoader::new().from_str("{ \"rooms\": [").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_invalid_reference_is_a_model_error() {
        let json = r#"{ "students": [{ "id": 1, "roll_no": "X", "full_name": "X", "semester": 5 }] }"#;
        let err = InstanceLoader::new().from_str(json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Model(ModelError::UnknownSemester { .. })
        ));
    }

    #[test]
    fn test_oversized_room_is_a_model_error() {
        let json = r#"{ "rooms": [{ "id": 1, "code": "R", "name": "R", "rows": 4294967296, "columns": 4294967296 }] }"#;
        let err = InstanceLoader::new().from_str(json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Model(ModelError::RoomTooLarge { .. })
        ));
    }

    #[test]
    fn test_zero_capacity_room_uses_its_grid() {
        let json = r#"{ "rooms": [{ "id": 1, "code": "R", "name": "R", "rows": 2, "columns": 2, "capacity": 0 }] }"#;
        let model = InstanceLoader::new().from_str(json).unwrap();
        assert_eq!(model.total_capacity(), 4);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(INSTANCE.as_bytes()).unwrap();
        let model = InstanceLoader::new().from_path(file.path()).unwrap();
        assert_eq!(model.num_students(), 3);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = InstanceLoader::new()
            .from_path("/definitely/not/here/instance.json")
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
