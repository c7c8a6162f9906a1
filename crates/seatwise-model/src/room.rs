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

use crate::ids::RoomId;
use serde::{Deserialize, Serialize};

/// Upper bound on `rows * columns` for a single room.
pub const MAX_ROOM_SEATS: usize = 1 << 20;

/// An exam room with a rectangular seat grid.
///
/// `capacity` is the number of students the room may receive. When it is
/// not set explicitly it equals the size of the grid. The grid itself is
/// always `rows x columns`: an explicit capacity limits how many students
/// are admitted to an allocation, not which seats exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub code: String,
    pub name: String,
    pub rows: usize,
    pub columns: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
}

impl Room {
    /// Creates a room whose capacity is its grid size.
    ///
    /// ```rust
    /// # use seatwise_model::{ids::RoomId, room::Room};
    /// let room = Room::new(RoomId::new(1), "R1", "Main Hall", 4, 6);
    /// assert_eq!(room.capacity(), 24);
    /// assert_eq!(room.num_seats(), 24);
    /// ```
    pub fn new(
        id: RoomId,
        code: impl Into<String>,
        name: impl Into<String>,
        rows: usize,
        columns: usize,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            rows,
            columns,
            capacity: None,
        }
    }

    /// Overrides the room's capacity.
    ///
    /// ```rust
    /// # use seatwise_model::{ids::RoomId, room::Room};
    /// let room = Room::new(RoomId::new(1), "R1", "Lab", 3, 3).with_capacity(5);
    /// assert_eq!(room.capacity(), 5);
    /// assert_eq!(room.num_seats(), 9);
    /// ```
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Returns the explicit capacity, or `rows * columns` if none was set.
    /// An explicit capacity of 0 counts as unset.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
            .filter(|&capacity| capacity > 0)
            .unwrap_or_else(|| self.num_seats())
    }

    /// Returns the number of physical seats, `rows * columns`, saturating at
    /// `usize::MAX`. `ModelBuilder::build` rejects rooms above `MAX_ROOM_SEATS`.
    #[inline]
    pub fn num_seats(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Returns `true` if the grid fits within `MAX_ROOM_SEATS`.
    #[inline]
    pub fn has_valid_dimensions(&self) -> bool {
        self.rows
            .checked_mul(self.columns)
            .is_some_and(|seats| seats <= MAX_ROOM_SEATS)
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ({} x {})",
            self.code, self.name, self.rows, self.columns
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_defaults_to_grid() {
        let room = Room::new(RoomId::new(1), "A", "Alpha", 2, 5);
        assert_eq!(room.capacity, None);
        assert_eq!(room.capacity(), 10);
    }

    #[test]
    fn test_zero_dimension_room_has_no_seats() {
        let room = Room::new(RoomId::new(1), "Z", "Zero", 0, 5);
        assert_eq!(room.num_seats(), 0);
        assert_eq!(room.capacity(), 0);
    }

    #[test]
    fn test_zero_capacity_falls_back_to_grid() {
        let room = Room::new(RoomId::new(1), "A", "Alpha", 2, 2).with_capacity(0);
        assert_eq!(room.capacity(), 4);

        let room: Room = serde_json::from_str(
            r#"{"id": 3, "code": "C", "name": "Hall", "rows": 2, "columns": 2, "capacity": 0}"#,
        )
        .unwrap();
        assert_eq!(room.capacity(), 4);
    }

    #[test]
    fn test_oversized_dimensions() {
        let huge = Room::new(RoomId::new(1), "H", "Huge", 1 << 40, 1 << 40);
        assert_eq!(huge.num_seats(), usize::MAX);
        assert_eq!(huge.capacity(), usize::MAX);
        assert!(!huge.has_valid_dimensions());

        assert!(!Room::new(RoomId::new(2), "L", "Large", 100_000, 100_000).has_valid_dimensions());
        assert!(Room::new(RoomId::new(3), "M", "Max", 1024, 1024).has_valid_dimensions());
        assert!(Room::new(RoomId::new(4), "Z", "Zero", 0, 0).has_valid_dimensions());
    }

    #[test]
    fn test_display() {
        let room = Room::new(RoomId::new(7), "B2", "Block B", 3, 4);
        assert_eq!(format!("{}", room), "B2 - Block B (3 x 4)");
    }

    #[test]
    fn test_json_capacity_is_optional() {
        let room: Room = serde_json::from_str(
            r#"{"id": 3, "code": "C", "name": "Hall", "rows": 2, "columns": 2}"#,
        )
        .unwrap();
        assert_eq!(room.capacity(), 4);

        let room: Room = serde_json::from_str(
            r#"{"id": 3, "code": "C", "name": "Hall", "rows": 2, "columns": 2, "capacity": 3}"#,
        )
        .unwrap();
        assert_eq!(room.capacity(), 3);
    }
}
