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

//! # Seatwise Alloc
//!
//! A bounded-retry, randomized greedy seat allocator for exam rooms.
//!
//! Given a `Model` (rooms in fill order, students with department and
//! semester), the allocator shuffles the students, walks every room
//! row-major and seats the first student in the shuffled pool that does not
//! clash with the occupant to the left or in front. An attempt that seats
//! at least one student is accepted; otherwise a new shuffle is drawn, up to
//! a fixed number of attempts.
//!
//! ## Modules
//!
//! - `conflict`: The adjacency predicate (`ConflictPredicate`,
//!   `AdjacencyConflict`) and the attributes it compares.
//! - `pool`: The shuffled candidate pool with first-fit removal.
//! - `assignment`: Per-attempt seat grids and their flattening into a
//!   `SeatPlan`.
//! - `pass`: One greedy seat-filling pass over all rooms (`GreedyPass`).
//! - `allocator`: The retry driver (`Allocator`) and its builder.
//! - `config`: Serializable allocator configuration.
//! - `monitor`: Observers of the allocation lifecycle, including a
//!   `tracing` based progress logger.
//! - `result` / `stats`: Outcome, error and statistics types.
//! - `validation`: Independent checks of a plan against the adjacency rule,
//!   seat uniqueness and capacity.
//!
//! ## Example
//!
//! ```rust
//! use seatwise_alloc::allocator::AllocatorBuilder;
//! use seatwise_model::{academic::*, ids::*, model::ModelBuilder, room::Room, student::StudentRecord};
//!
//! let mut builder = ModelBuilder::new();
//! builder
//!     .add_department(Department::new(DepartmentId::new(1), "CS", "Computer Science"))
//!     .add_semester(Semester::new(SemesterId::new(1), "CS-1", "First", DepartmentId::new(1)))
//!     .add_room(Room::new(RoomId::new(1), "R1", "Hall", 1, 1))
//!     .add_student(StudentRecord::new(StudentId::new(1), "CS-001", "Ada", SemesterId::new(1)));
//! let model = builder.build().unwrap();
//!
//! let mut allocator = AllocatorBuilder::new().with_seed(7).build();
//! let outcome = allocator.allocate(&model).unwrap();
//! assert_eq!(outcome.plan().len(), 1);
//! ```

pub mod allocator;
pub mod assignment;
pub mod config;
pub mod conflict;
pub mod monitor;
pub mod pass;
pub mod pool;
pub mod result;
pub mod stats;
pub mod validation;

#[cfg(test)]
pub(crate) mod fixtures;
