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

//! Progress logging through `tracing`.

use crate::{monitor::allocation_monitor::AllocationMonitor, stats::AllocationStatistics};
use seatwise_model::model::Model;
use std::time::Instant;

/// Number of attempts between two progress lines.
pub const DEFAULT_LOG_INTERVAL: usize = 50;

/// Logs a line for the first attempt and every `log_interval` attempts
/// after it, plus a summary at the end.
///
/// A `log_interval` of 0 disables the progress lines; the summary is
/// always logged.
#[derive(Clone, Debug)]
pub struct LogMonitor {
    log_interval: usize,
    start_time: Instant,
    best_placed: usize,
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_INTERVAL)
    }
}

impl LogMonitor {
    #[inline]
    pub fn new(log_interval: usize) -> Self {
        Self {
            log_interval,
            start_time: Instant::now(),
            best_placed: 0,
        }
    }

    #[inline]
    pub fn log_interval(&self) -> usize {
        self.log_interval
    }

    #[inline]
    fn should_log(&self, attempt: usize) -> bool {
        self.log_interval != 0 && (attempt == 1 || attempt % self.log_interval == 0)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(interval: {})", self.log_interval)
    }
}

impl AllocationMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_allocation(&mut self, model: &Model, candidates: usize, capacity: usize) {
        self.start_time = Instant::now();
        self.best_placed = 0;
        tracing::info!(
            rooms = model.num_rooms(),
            candidates,
            capacity,
            "seat allocation started"
        );
    }

    #[inline]
    fn on_attempt_start(&mut self, _attempt: usize) {}

    fn on_attempt_finished(&mut self, attempt: usize, placed: usize) {
        self.best_placed = self.best_placed.max(placed);
        if self.should_log(attempt) {
            tracing::info!(
                attempt,
                placed,
                best = self.best_placed,
                elapsed_ms = self.start_time.elapsed().as_millis() as u64,
                "allocation attempt"
            );
        }
    }

    fn on_exit_allocation(&mut self, statistics: &AllocationStatistics, accepted: bool) {
        if accepted {
            tracing::info!(
                attempts = statistics.attempts,
                placed = statistics.students_placed,
                unplaced = statistics.students_unplaced,
                empty_seats = statistics.seats_left_empty,
                elapsed_ms = statistics.duration.as_millis() as u64,
                "seat allocation finished"
            );
        } else {
            tracing::warn!(
                attempts = statistics.attempts,
                elapsed_ms = statistics.duration.as_millis() as u64,
                "seat allocation exhausted without placing anyone"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::model_with;

    #[test]
    fn test_log_interval_cadence() {
        let monitor = LogMonitor::new(50);
        assert!(monitor.should_log(1));
        assert!(!monitor.should_log(2));
        assert!(!monitor.should_log(49));
        assert!(monitor.should_log(50));
        assert!(monitor.should_log(400));
        assert!(!LogMonitor::new(0).should_log(50));
        assert!(!LogMonitor::new(0).should_log(1));
        assert_eq!(LogMonitor::default().log_interval(), DEFAULT_LOG_INTERVAL);
    }

    #[test]
    fn test_tracks_best_placement() {
        let model = model_with(&[(1, 2)], &[(1, 1), (2, 2)]);
        let mut monitor = LogMonitor::new(1);
        monitor.on_enter_allocation(&model, 2, 2);
        monitor.on_attempt_finished(1, 0);
        monitor.on_attempt_finished(2, 2);
        monitor.on_attempt_finished(3, 1);
        assert_eq!(monitor.best_placed, 2);
    }

    #[test]
    fn test_logs_with_subscriber_installed() {
        let subscriber = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let model = model_with(&[(1, 1)], &[(1, 1)]);
            let mut monitor = LogMonitor::new(1);
            monitor.on_enter_allocation(&model, 1, 1);
            monitor.on_attempt_start(1);
            monitor.on_attempt_finished(1, 1);
            let stats = AllocationStatistics::default();
            monitor.on_exit_allocation(&stats, true);
            monitor.on_exit_allocation(&stats, false);
        });
        assert_eq!(format!("{}", LogMonitor::new(5)), "LogMonitor(interval: 5)");
    }
}
