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

//! Serializable allocator settings.
//!
//! Every field has a default, so a configuration file only needs to name
//! what it changes:
//!
//! ```rust
//! # use seatwise_alloc::config::AllocatorConfig;
//! let config: AllocatorConfig = serde_json::from_str(r#"{ "seed": 42 }"#).unwrap();
//! assert_eq!(config.max_attempts, 400);
//! assert_eq!(config.seed, Some(42));
//! ```

use crate::{conflict::ConflictAttributes, monitor::log::DEFAULT_LOG_INTERVAL};
use serde::{Deserialize, Serialize};

/// Default bound on the number of allocation attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 400;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    /// Number of shuffles tried before giving up.
    pub max_attempts: usize,
    /// Seed of the random source; `None` seeds from the operating system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Attributes that make two neighbors conflict.
    pub conflict: ConflictAttributes,
    /// Attempts between two progress log lines; 0 disables progress logging.
    pub log_interval: usize,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            conflict: ConflictAttributes::default(),
            log_interval: DEFAULT_LOG_INTERVAL,
        }
    }
}

impl std::fmt::Display for AllocatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AllocatorConfig(max_attempts: {}, seed: {}, conflict: {}, log_interval: {})",
            self.max_attempts,
            self.seed
                .map_or_else(|| "os".to_string(), |seed| seed.to_string()),
            self.conflict,
            self.log_interval
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AllocatorConfig::default();
        assert_eq!(config.max_attempts, 400);
        assert_eq!(config.seed, None);
        assert_eq!(config.conflict, ConflictAttributes::all());
        assert_eq!(config.log_interval, 50);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AllocatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AllocatorConfig::default());
    }

    #[test]
    fn test_partial_document_overrides() {
        let config: AllocatorConfig = serde_json::from_str(
            r#"{ "max_attempts": 10, "conflict": { "department": false }, "log_interval": 0 }"#,
        )
        .unwrap();
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.conflict, ConflictAttributes::semester_only());
        assert_eq!(config.log_interval, 0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_serializes_without_seed() {
        let json = serde_json::to_string(&AllocatorConfig::default()).unwrap();
        assert!(!json.contains("seed"));
        assert_eq!(
            format!("{}", AllocatorConfig::default()),
            "AllocatorConfig(max_attempts: 400, seed: os, conflict: department|semester, log_interval: 50)"
        );
    }
}
