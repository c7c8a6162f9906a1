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

use seatwise_core::index::{TypedIndex, TypedIndexTag};
use serde::{Deserialize, Serialize};

macro_rules! external_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            #[inline(always)]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            #[inline(always)]
            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", $label, self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

external_id!(
    /// Identifier of a department as assigned by the data store.
    DepartmentId,
    "DepartmentId"
);
external_id!(
    /// Identifier of a semester as assigned by the data store.
    SemesterId,
    "SemesterId"
);
external_id!(
    /// Identifier of a student as assigned by the data store.
    StudentId,
    "StudentId"
);
external_id!(
    /// Identifier of a room as assigned by the data store.
    RoomId,
    "RoomId"
);

/// A tag type for student indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StudentIndexTag;

impl TypedIndexTag for StudentIndexTag {
    const NAME: &'static str = "StudentIndex";
}

/// Position of a student in `Model::students()`.
pub type StudentIndex = TypedIndex<StudentIndexTag>;

/// A tag type for room indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RoomIndexTag;

impl TypedIndexTag for RoomIndexTag {
    const NAME: &'static str = "RoomIndex";
}

/// Position of a room in `Model::rooms()`.
pub type RoomIndex = TypedIndex<RoomIndexTag>;
