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

/// Statistics collected during one allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationStatistics {
    /// Number of attempts run, including the accepted one.
    pub attempts: usize,
    /// Number of students in the model before capacity truncation.
    pub students_considered: usize,
    /// Number of students cut off because they exceed total capacity.
    pub students_dropped: usize,
    /// Number of students seated by the accepted attempt.
    pub students_placed: usize,
    /// Number of admitted students the accepted attempt could not seat.
    pub students_unplaced: usize,
    /// Number of physical seats left empty by the accepted attempt.
    pub seats_left_empty: usize,
    /// Sum of all room capacities.
    pub total_capacity: usize,
    /// Wall-clock time of the whole allocation.
    pub duration: std::time::Duration,
}

impl std::fmt::Display for AllocationStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Allocation Statistics:")?;
        writeln!(f, "  Attempts: {}", self.attempts)?;
        writeln!(f, "  Students Considered: {}", self.students_considered)?;
        writeln!(f, "  Students Dropped: {}", self.students_dropped)?;
        writeln!(f, "  Students Placed: {}", self.students_placed)?;
        writeln!(f, "  Students Unplaced: {}", self.students_unplaced)?;
        writeln!(f, "  Seats Left Empty: {}", self.seats_left_empty)?;
        writeln!(f, "  Total Capacity: {}", self.total_capacity)?;
        writeln!(
            f,
            "  Duration (secs): {:.3}",
            self.duration.as_secs_f64()
        )
    }
}

/// Builder for `AllocationStatistics`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationStatisticsBuilder {
    statistics: AllocationStatistics,
}

impl AllocationStatisticsBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn attempts(mut self, attempts: usize) -> Self {
        self.statistics.attempts = attempts;
        self
    }

    #[inline]
    pub fn students_considered(mut self, students_considered: usize) -> Self {
        self.statistics.students_considered = students_considered;
        self
    }

    #[inline]
    pub fn students_dropped(mut self, students_dropped: usize) -> Self {
        self.statistics.students_dropped = students_dropped;
        self
    }

    #[inline]
    pub fn students_placed(mut self, students_placed: usize) -> Self {
        self.statistics.students_placed = students_placed;
        self
    }

    #[inline]
    pub fn students_unplaced(mut self, students_unplaced: usize) -> Self {
        self.statistics.students_unplaced = students_unplaced;
        self
    }

    #[inline]
    pub fn seats_left_empty(mut self, seats_left_empty: usize) -> Self {
        self.statistics.seats_left_empty = seats_left_empty;
        self
    }

    #[inline]
    pub fn total_capacity(mut self, total_capacity: usize) -> Self {
        self.statistics.total_capacity = total_capacity;
        self
    }

    #[inline]
    pub fn duration(mut self, duration: std::time::Duration) -> Self {
        self.statistics.duration = duration;
        self
    }

    #[inline]
    pub fn build(self) -> AllocationStatistics {
        self.statistics
    }
}
