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

use crate::{
    academic::{Department, Semester},
    error::ModelError,
    ids::{DepartmentId, RoomId, RoomIndex, SemesterId, StudentId, StudentIndex},
    room::Room,
    student::{Student, StudentRecord},
};
use rustc_hash::{FxHashMap, FxHashSet};

/// The immutable, validated input of an allocation.
///
/// - `rooms[room]`: rooms in request order. This order is the seat-fill
///   priority and is never changed.
/// - `students[student]`: students in insertion order, each with its
///   department resolved from its semester.
/// - `departments` / `semesters`: the catalog students were resolved against.
///
/// Construction:
/// - Use `ModelBuilder` and call `ModelBuilder::build` to obtain a validated `Model`.
#[derive(Clone)]
pub struct Model {
    departments: Vec<Department>,
    semesters: Vec<Semester>,
    rooms: Vec<Room>,
    students: Vec<Student>,
    department_lookup: FxHashMap<DepartmentId, usize>,
    semester_lookup: FxHashMap<SemesterId, usize>,
    room_lookup: FxHashMap<RoomId, RoomIndex>,
    student_lookup: FxHashMap<StudentId, StudentIndex>,
}

impl Model {
    /// Returns the number of students in the model.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatwise_model::model::ModelBuilder;
    /// let model = ModelBuilder::new().build().unwrap();
    /// assert_eq!(model.num_students(), 0);
    /// ```
    #[inline]
    pub fn num_students(&self) -> usize {
        self.students.len()
    }

    /// Returns the number of rooms in the model.
    #[inline]
    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[inline]
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    #[inline]
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// Returns the student at `student_index`.
    ///
    /// # Panics
    ///
    /// Panics if `student_index` is not in `0..num_students()`.
    #[inline]
    pub fn student(&self, student_index: StudentIndex) -> &Student {
        let index = student_index.get();
        debug_assert!(
            index < self.num_students(),
            "called `Model::student` with student index out of bounds: the len is {} but the index is {}",
            self.num_students(),
            index
        );

        &self.students[index]
    }

    /// Returns the room at `room_index`.
    ///
    /// # Panics
    ///
    /// Panics if `room_index` is not in `0..num_rooms()`.
    #[inline]
    pub fn room(&self, room_index: RoomIndex) -> &Room {
        let index = room_index.get();
        debug_assert!(
            index < self.num_rooms(),
            "called `Model::room` with room index out of bounds: the len is {} but the index is {}",
            self.num_rooms(),
            index
        );

        &self.rooms[index]
    }

    /// Looks up a student by its external id.
    #[inline]
    pub fn student_index(&self, id: StudentId) -> Option<StudentIndex> {
        self.student_lookup.get(&id).copied()
    }

    /// Looks up a room by its external id.
    #[inline]
    pub fn room_index(&self, id: RoomId) -> Option<RoomIndex> {
        self.room_lookup.get(&id).copied()
    }

    #[inline]
    pub fn student_by_id(&self, id: StudentId) -> Option<&Student> {
        self.student_index(id).map(|index| self.student(index))
    }

    #[inline]
    pub fn room_by_id(&self, id: RoomId) -> Option<&Room> {
        self.room_index(id).map(|index| self.room(index))
    }

    #[inline]
    pub fn semester(&self, id: SemesterId) -> Option<&Semester> {
        self.semester_lookup.get(&id).map(|&i| &self.semesters[i])
    }

    #[inline]
    pub fn department(&self, id: DepartmentId) -> Option<&Department> {
        self.department_lookup.get(&id).map(|&i| &self.departments[i])
    }

    /// Sum of every room's capacity (explicit, or `rows * columns`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatwise_model::{ids::RoomId, model::ModelBuilder, room::Room};
    /// let mut builder = ModelBuilder::new();
    /// builder
    ///     .add_room(Room::new(RoomId::new(1), "A", "A", 2, 3))
    ///     .add_room(Room::new(RoomId::new(2), "B", "B", 4, 4).with_capacity(10));
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.total_capacity(), 16);
    /// assert_eq!(model.total_seats(), 22);
    /// ```
    #[inline]
    pub fn total_capacity(&self) -> usize {
        self.rooms
            .iter()
            .map(Room::capacity)
            .fold(0, usize::saturating_add)
    }

    /// Sum of every room's physical seat count.
    #[inline]
    pub fn total_seats(&self) -> usize {
        self.rooms
            .iter()
            .map(Room::num_seats)
            .fold(0, usize::saturating_add)
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("departments", &self.departments.len())
            .field("semesters", &self.semesters.len())
            .field("rooms", &self.rooms)
            .field("students", &self.students.len())
            .finish()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Model(num_students: {}, num_rooms: {}, total_capacity: {})",
            self.num_students(),
            self.num_rooms(),
            self.total_capacity()
        )
    }
}

/// Collects departments, semesters, rooms and students, then validates them
/// into a `Model`.
///
/// Nothing is checked until `build`; the builder only records. `build`
/// rejects duplicate ids and dangling references, and applies the optional
/// semester filter.
#[derive(Clone, Debug, Default)]
pub struct ModelBuilder {
    departments: Vec<Department>,
    semesters: Vec<Semester>,
    rooms: Vec<Room>,
    students: Vec<StudentRecord>,
    semester_filter: Option<FxHashSet<SemesterId>>,
    room_selection: Option<Vec<RoomId>>,
}

impl ModelBuilder {
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_department(&mut self, department: Department) -> &mut Self {
        self.departments.push(department);
        self
    }

    #[inline]
    pub fn add_semester(&mut self, semester: Semester) -> &mut Self {
        self.semesters.push(semester);
        self
    }

    /// Appends a room. Rooms are filled in the order they are added.
    #[inline]
    pub fn add_room(&mut self, room: Room) -> &mut Self {
        self.rooms.push(room);
        self
    }

    #[inline]
    pub fn add_student(&mut self, student: StudentRecord) -> &mut Self {
        self.students.push(student);
        self
    }

    /// Keeps only students of the given semesters in the built model.
    ///
    /// An empty iterator leaves the filter off, i.e. every student is kept.
    /// Students outside the filter are still validated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatwise_model::{academic::*, ids::*, model::ModelBuilder, student::StudentRecord};
    /// let mut builder = ModelBuilder::new();
    /// builder
    ///     .add_department(Department::new(DepartmentId::new(1), "CS", "Computer Science"))
    ///     .add_semester(Semester::new(SemesterId::new(1), "CS-1", "First", DepartmentId::new(1)))
    ///     .add_semester(Semester::new(SemesterId::new(2), "CS-2", "Second", DepartmentId::new(1)))
    ///     .add_student(StudentRecord::new(StudentId::new(1), "A1", "Ada", SemesterId::new(1)))
    ///     .add_student(StudentRecord::new(StudentId::new(2), "B1", "Bob", SemesterId::new(2)))
    ///     .restrict_to_semesters([SemesterId::new(2)]);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.num_students(), 1);
    /// assert_eq!(model.students()[0].roll_no(), "B1");
    /// ```
    pub fn restrict_to_semesters<I>(&mut self, semesters: I) -> &mut Self
    where
        I: IntoIterator<Item = SemesterId>,
    {
        let filter: FxHashSet<SemesterId> = semesters.into_iter().collect();
        self.semester_filter = if filter.is_empty() { None } else { Some(filter) };
        self
    }

    /// Keeps only the listed rooms, in the listed order.
    ///
    /// The selection replaces insertion order as the fill priority. Ids that
    /// match no added room are ignored, as are repeated ids after their first
    /// occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatwise_model::{ids::RoomId, model::ModelBuilder, room::Room};
    /// let mut builder = ModelBuilder::new();
    /// builder
    ///     .add_room(Room::new(RoomId::new(1), "A", "A", 1, 1))
    ///     .add_room(Room::new(RoomId::new(2), "B", "B", 1, 1))
    ///     .add_room(Room::new(RoomId::new(3), "C", "C", 1, 1))
    ///     .select_rooms([RoomId::new(3), RoomId::new(1), RoomId::new(8)]);
    /// let model = builder.build().unwrap();
    /// let codes: Vec<&str> = model.rooms().iter().map(|r| r.code.as_str()).collect();
    /// assert_eq!(codes, vec!["C", "A"]);
    /// ```
    pub fn select_rooms<I>(&mut self, rooms: I) -> &mut Self
    where
        I: IntoIterator<Item = RoomId>,
    {
        self.room_selection = Some(rooms.into_iter().collect());
        self
    }

    #[inline]
    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn num_students(&self) -> usize {
        self.students.len()
    }

    /// Validates the collected records and builds the `Model`.
    pub fn build(self) -> Result<Model, ModelError> {
        let mut department_lookup =
            FxHashMap::with_capacity_and_hasher(self.departments.len(), Default::default());
        for (i, department) in self.departments.iter().enumerate() {
            if department_lookup.insert(department.id, i).is_some() {
                return Err(ModelError::DuplicateDepartment(department.id));
            }
        }

        let mut semester_lookup =
            FxHashMap::with_capacity_and_hasher(self.semesters.len(), Default::default());
        for (i, semester) in self.semesters.iter().enumerate() {
            if !department_lookup.contains_key(&semester.department) {
                return Err(ModelError::UnknownDepartment {
                    semester: semester.id,
                    department: semester.department,
                });
            }
            if semester_lookup.insert(semester.id, i).is_some() {
                return Err(ModelError::DuplicateSemester(semester.id));
            }
        }

        let mut room_lookup =
            FxHashMap::with_capacity_and_hasher(self.rooms.len(), Default::default());
        for (i, room) in self.rooms.iter().enumerate() {
            if room_lookup.insert(room.id, RoomIndex::new(i)).is_some() {
                return Err(ModelError::DuplicateRoom(room.id));
            }
            if !room.has_valid_dimensions() {
                return Err(ModelError::RoomTooLarge {
                    room: room.id,
                    rows: room.rows,
                    columns: room.columns,
                });
            }
        }

        let rooms = match self.room_selection {
            None => self.rooms,
            Some(selection) => {
                let mut slots: Vec<Option<Room>> = self.rooms.into_iter().map(Some).collect();
                let selected: Vec<Room> = selection
                    .iter()
                    .filter_map(|id| room_lookup.get(id))
                    .filter_map(|index| slots[index.get()].take())
                    .collect();
                room_lookup = selected
                    .iter()
                    .enumerate()
                    .map(|(i, room)| (room.id, RoomIndex::new(i)))
                    .collect();
                selected
            }
        };

        let mut seen_students =
            FxHashSet::with_capacity_and_hasher(self.students.len(), Default::default());
        let mut students = Vec::with_capacity(self.students.len());
        for record in self.students {
            if !seen_students.insert(record.id) {
                return Err(ModelError::DuplicateStudent(record.id));
            }
            let Some(&semester_index) = semester_lookup.get(&record.semester) else {
                return Err(ModelError::UnknownSemester {
                    student: record.id,
                    semester: record.semester,
                });
            };
            let keep = self
                .semester_filter
                .as_ref()
                .is_none_or(|filter| filter.contains(&record.semester));
            if keep {
                let department = self.semesters[semester_index].department;
                students.push(Student::from_record(record, department));
            }
        }

        let student_lookup = students
            .iter()
            .enumerate()
            .map(|(i, student)| (student.id(), StudentIndex::new(i)))
            .collect();

        Ok(Model {
            departments: self.departments,
            semesters: self.semesters,
            rooms,
            students,
            department_lookup,
            semester_lookup,
            room_lookup,
            student_lookup,
        })
    }
}

impl std::fmt::Display for ModelBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ModelBuilder(num_students: {}, num_rooms: {})",
            self.students.len(),
            self.rooms.len()
        )
    }
}
