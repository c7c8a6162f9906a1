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

//! The retry driver.
//!
//! `Allocator::allocate` checks the input, cuts the candidate list down to
//! the total room capacity and then runs up to `max_attempts` independent
//! greedy passes, each over a fresh uniform shuffle of the candidates. The
//! first attempt that seats at least one student is accepted as-is; a
//! partial fill is a valid outcome, not an error.

use crate::{
    assignment::Assignment,
    config::{AllocatorConfig, DEFAULT_MAX_ATTEMPTS},
    conflict::{AdjacencyConflict, ConflictPredicate},
    monitor::{
        allocation_monitor::AllocationMonitor, composite::CompositeMonitor, log::LogMonitor,
        no_op::NoOpMonitor,
    },
    pass::{GreedyPass, PlacementPass},
    pool::CandidatePool,
    result::{AllocationError, AllocationOutcome},
    stats::AllocationStatisticsBuilder,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use seatwise_model::model::Model;
use std::time::Instant;
use tracing::{debug, info, warn};

/// A randomized greedy seat allocator.
///
/// Owns its random source and monitor; an allocator can be reused for any
/// number of models and keeps advancing the same random stream.
pub struct Allocator<'a, R = StdRng, P = AdjacencyConflict> {
    rng: R,
    pass: GreedyPass<P>,
    monitor: Box<dyn AllocationMonitor + 'a>,
    max_attempts: usize,
}

impl<R, P> std::fmt::Debug for Allocator<'_, R, P>
where
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Allocator")
            .field("pass", &self.pass)
            .field("monitor", &self.monitor.name())
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}

impl<'a, R, P> Allocator<'a, R, P>
where
    R: Rng,
    P: ConflictPredicate,
{
    #[inline]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    pub fn predicate(&self) -> &P {
        self.pass.predicate()
    }

    /// Allocates the students of `model` to the seats of its rooms.
    ///
    /// # Errors
    ///
    /// Returns `NoRooms`, `ZeroCapacity` or `NoStudents` (checked in that
    /// order) before any attempt if the input cannot be allocated at all, and
    /// `Exhausted` if every attempt placed nobody.
    pub fn allocate(&mut self, model: &Model) -> Result<AllocationOutcome, AllocationError> {
        let start = Instant::now();

        if model.num_rooms() == 0 {
            return Err(AllocationError::NoRooms);
        }
        let total_capacity = model.total_capacity();
        if total_capacity == 0 {
            return Err(AllocationError::ZeroCapacity);
        }
        if model.num_students() == 0 {
            return Err(AllocationError::NoStudents);
        }

        let mut candidates = CandidatePool::from_model(model);
        let students_dropped = candidates.truncate(total_capacity);
        if students_dropped > 0 {
            warn!(
                students = model.num_students(),
                capacity = total_capacity,
                dropped = students_dropped,
                "more students than seats, dropping the excess"
            );
        }

        info!(
            students = candidates.len(),
            rooms = model.num_rooms(),
            capacity = total_capacity,
            max_attempts = self.max_attempts,
            "allocating seats"
        );
        self.monitor
            .on_enter_allocation(model, candidates.len(), total_capacity);

        let mut pool = CandidatePool::with_capacity(candidates.len());
        let mut assignment = Assignment::new(model);

        let statistics = AllocationStatisticsBuilder::new()
            .students_considered(model.num_students())
            .students_dropped(students_dropped)
            .total_capacity(total_capacity);

        for attempt in 1..=self.max_attempts {
            self.monitor.on_attempt_start(attempt);

            pool.reset_from(&candidates);
            pool.shuffle(&mut self.rng);
            assignment.clear();

            let placed = self.pass.fill(model, &mut pool, &mut assignment);
            self.monitor.on_attempt_finished(attempt, placed);
            debug!(attempt, placed, "attempt finished");

            if placed > 0 {
                let statistics = statistics
                    .attempts(attempt)
                    .students_placed(placed)
                    .students_unplaced(pool.len())
                    .seats_left_empty(assignment.empty_seats())
                    .duration(start.elapsed())
                    .build();
                self.monitor.on_exit_allocation(&statistics, true);
                info!(
                    attempt,
                    placed,
                    unplaced = statistics.students_unplaced,
                    "seat plan accepted"
                );
                return Ok(AllocationOutcome::new(assignment.to_plan(model), statistics));
            }
        }

        let statistics = statistics
            .attempts(self.max_attempts)
            .students_unplaced(candidates.len())
            .seats_left_empty(assignment.empty_seats())
            .duration(start.elapsed())
            .build();
        self.monitor.on_exit_allocation(&statistics, false);
        warn!(
            attempts = self.max_attempts,
            "no attempt placed any student"
        );
        Err(AllocationError::Exhausted {
            attempts: self.max_attempts,
        })
    }
}

/// Builder for `Allocator`.
///
/// Defaults: an OS-seeded `StdRng`, the department-or-semester
/// `AdjacencyConflict`, 400 attempts and no monitor.
pub struct AllocatorBuilder<'a, R = StdRng, P = AdjacencyConflict> {
    rng: R,
    predicate: P,
    monitor: Option<Box<dyn AllocationMonitor + 'a>>,
    max_attempts: usize,
}

impl Default for AllocatorBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> AllocatorBuilder<'a> {
    #[inline]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            predicate: AdjacencyConflict::default(),
            monitor: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Builds an allocator from `config`, with a `LogMonitor` at the
    /// configured interval.
    pub fn from_config(config: &AllocatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            predicate: AdjacencyConflict::new(config.conflict),
            monitor: Some(Box::new(LogMonitor::new(config.log_interval))),
            max_attempts: config.max_attempts,
        }
    }

    /// Seeds the `StdRng` for reproducible plans.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl<'a, R, P> AllocatorBuilder<'a, R, P> {
    /// Replaces the random source.
    #[inline]
    pub fn with_rng<R2>(self, rng: R2) -> AllocatorBuilder<'a, R2, P>
    where
        R2: Rng,
    {
        AllocatorBuilder {
            rng,
            predicate: self.predicate,
            monitor: self.monitor,
            max_attempts: self.max_attempts,
        }
    }

    /// Replaces the conflict predicate.
    #[inline]
    pub fn with_predicate<P2>(self, predicate: P2) -> AllocatorBuilder<'a, R, P2>
    where
        P2: ConflictPredicate,
    {
        AllocatorBuilder {
            rng: self.rng,
            predicate,
            monitor: self.monitor,
            max_attempts: self.max_attempts,
        }
    }

    #[inline]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Adds a monitor. Monitors added earlier keep receiving events.
    pub fn with_monitor<M>(mut self, monitor: M) -> Self
    where
        M: AllocationMonitor + 'a,
    {
        self.monitor = Some(match self.monitor.take() {
            None => Box::new(monitor),
            Some(existing) => {
                let mut composite = CompositeMonitor::with_capacity(2);
                composite.add_monitor_boxed(existing);
                composite.add_monitor(monitor);
                Box::new(composite)
            }
        });
        self
    }

    pub fn build(self) -> Allocator<'a, R, P>
    where
        R: Rng,
        P: ConflictPredicate,
    {
        Allocator {
            rng: self.rng,
            pass: GreedyPass::new(self.predicate),
            monitor: self.monitor.unwrap_or_else(|| Box::new(NoOpMonitor::new())),
            max_attempts: self.max_attempts,
        }
    }
}
