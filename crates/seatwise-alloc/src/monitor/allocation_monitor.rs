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
use seatwise_model::model::Model;

/// Receives lifecycle events from an `Allocator`.
///
/// Attempts are numbered from 1.
pub trait AllocationMonitor {
    fn name(&self) -> &str;

    /// Called once before the first attempt, after capacity truncation.
    fn on_enter_allocation(&mut self, model: &Model, candidates: usize, capacity: usize);

    fn on_attempt_start(&mut self, attempt: usize);

    /// Called after every attempt with the number of students it placed.
    fn on_attempt_finished(&mut self, attempt: usize, placed: usize);

    /// Called once at the end. `accepted` is `false` if every attempt
    /// placed nobody.
    fn on_exit_allocation(&mut self, statistics: &AllocationStatistics, accepted: bool);
}

impl std::fmt::Debug for dyn AllocationMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AllocationMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn AllocationMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AllocationMonitor({})", self.name())
    }
}
