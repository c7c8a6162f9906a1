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

//! # Seatwise Model
//!
//! **The domain model for exam seat allocation.**
//!
//! This crate defines the data the allocator consumes and produces. It is the
//! interchange layer between whatever stores departments, semesters,
//! students and rooms (a database, a JSON file, a test fixture) and the
//! allocation engine in `seatwise_alloc`.
//!
//! ## Architecture
//!
//! * **`ids`**: Identifier newtypes (`StudentId`, `RoomId`, ...) as they come
//!   from the outside world, and typed indices (`StudentIndex`, `RoomIndex`)
//!   into the model's flat vectors.
//! * **`academic`**: Departments and the semesters they own.
//! * **`student`** / **`room`** / **`seat`**: The entities seats are built from.
//! * **`model`**: The immutable `Model` and the validating `ModelBuilder`.
//! * **`plan`**: The `SeatPlan` result and its textual `PlanView`.
//! * **`loading`**: Reads a JSON instance document into a `Model`.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: External ids and internal indices are distinct types.
//! 2.  **Fail-Fast**: The builder resolves every reference (student to
//!     semester, semester to department) eagerly, so the allocator never
//!     sees a dangling id.
//! 3.  **Order Matters**: Rooms keep the order they were added in; that order
//!     is the seat-fill priority.

pub mod academic;
pub mod error;
pub mod ids;
pub mod loading;
pub mod model;
pub mod plan;
pub mod room;
pub mod seat;
pub mod student;
