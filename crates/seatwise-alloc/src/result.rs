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

use crate::stats::AllocationStatistics;
use seatwise_model::plan::SeatPlan;

/// Why an allocation produced no plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("no rooms to allocate into")]
    NoRooms,
    #[error("the selected rooms have zero total capacity")]
    ZeroCapacity,
    #[error("no students to allocate")]
    NoStudents,
    #[error("no student could be seated in {attempts} attempts")]
    Exhausted { attempts: usize },
}

impl AllocationError {
    /// Returns `true` for errors caused by the input rather than by the
    /// search running out of attempts.
    #[inline]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, AllocationError::Exhausted { .. })
    }
}

/// The accepted plan of an allocation and how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationOutcome {
    plan: SeatPlan,
    statistics: AllocationStatistics,
}

impl AllocationOutcome {
    #[inline]
    pub fn new(plan: SeatPlan, statistics: AllocationStatistics) -> Self {
        Self { plan, statistics }
    }

    #[inline]
    pub fn plan(&self) -> &SeatPlan {
        &self.plan
    }

    #[inline]
    pub fn statistics(&self) -> &AllocationStatistics {
        &self.statistics
    }

    #[inline]
    pub fn into_plan(self) -> SeatPlan {
        self.plan
    }

    #[inline]
    pub fn into_parts(self) -> (SeatPlan, AllocationStatistics) {
        (self.plan, self.statistics)
    }

    /// Returns `true` if some admitted student was left without a seat.
    ///
    /// Students dropped by capacity truncation do not count; see
    /// `AllocationStatistics::students_dropped`.
    #[inline]
    pub fn is_partial(&self) -> bool {
        self.statistics.students_unplaced > 0
    }

    /// Returns `true` if every admitted student got a seat.
    #[inline]
    pub fn is_complete(&self) -> bool {
        !self.is_partial()
    }
}

impl std::fmt::Display for AllocationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AllocationOutcome(placed: {}, unplaced: {}, attempts: {})",
            self.statistics.students_placed,
            self.statistics.students_unplaced,
            self.statistics.attempts
        )
    }
}
