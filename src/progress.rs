//! Run outcomes and the best-runs ledger
//!
//! The core only produces plain data here; deciding rewards is up to the
//! game that reads it.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Maximum number of best runs to keep
pub const MAX_BEST_RUNS: usize = 10;

/// Aggregate outcome of one level attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Successful cuts or blasts that touched a target
    pub hits: u32,
    /// Sum of per-cut precision (divide by `hits` for the mean)
    pub precision_sum: f32,
    /// Targets destroyed
    pub destroyed: u32,
    /// Seconds since the level started
    pub elapsed: f32,
    /// Seconds it took to destroy every target (set once)
    pub clear_time: Option<f32>,
}

impl RunStats {
    pub fn record_hit(&mut self, precision: f32) {
        self.hits += 1;
        self.precision_sum += precision;
    }

    /// Mean precision over all hits (0 when nothing was hit)
    pub fn mean_precision(&self) -> f32 {
        if self.hits == 0 {
            0.0
        } else {
            self.precision_sum / self.hits as f32
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.clear_time.is_some()
    }

    /// Score: 100 per target, scaled up to 2x by precision, plus a clear bonus
    pub fn score(&self) -> u64 {
        let base = self.destroyed as f32 * 100.0 * (1.0 + self.mean_precision());
        let clear_bonus = match self.clear_time {
            Some(t) if t > 0.0 => (3000.0 / t).min(1000.0),
            Some(_) => 1000.0,
            None => 0.0,
        };
        (base + clear_bonus).round() as u64
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub score: u64,
    pub destroyed: u32,
    pub mean_precision: f32,
    pub clear_time: Option<f32>,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// Best runs (sorted descending by score) plus lifetime totals
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    pub best_runs: Vec<RunRecord>,
    pub total_destroyed: u64,
    pub best_precision: f32,
    pub fastest_clear: Option<f32>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the ledger
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.best_runs.len() < MAX_BEST_RUNS {
            return true;
        }
        self.best_runs.last().map(|r| score > r.score).unwrap_or(true)
    }

    /// Rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.best_runs.iter().position(|r| score > r.score);
        Some(rank.unwrap_or(self.best_runs.len()) + 1)
    }

    /// Fold a finished run into the totals and the ledger
    ///
    /// Returns the ledger rank achieved (1-indexed) or None if the run
    /// didn't place.
    pub fn record_run(&mut self, stats: &RunStats, timestamp: f64) -> Option<usize> {
        self.total_destroyed += stats.destroyed as u64;
        if stats.hits > 0 {
            self.best_precision = self.best_precision.max(stats.mean_precision());
        }
        if let Some(t) = stats.clear_time {
            self.fastest_clear = Some(self.fastest_clear.map_or(t, |best| best.min(t)));
        }

        let score = stats.score();
        if !self.qualifies(score) {
            return None;
        }

        let record = RunRecord {
            score,
            destroyed: stats.destroyed,
            mean_precision: stats.mean_precision(),
            clear_time: stats.clear_time,
            timestamp,
        };

        let rank = match self.best_runs.iter().position(|r| score > r.score) {
            Some(i) => {
                self.best_runs.insert(i, record);
                i + 1
            }
            None => {
                self.best_runs.push(record);
                self.best_runs.len()
            }
        };
        self.best_runs.truncate(MAX_BEST_RUNS);

        log::info!("Run scored {} (rank {})", score, rank);
        Some(rank)
    }

    pub fn top_score(&self) -> Option<u64> {
        self.best_runs.first().map(|r| r.score)
    }
}

/// Everything a game persists between sessions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub progress: Progress,
    pub settings: Settings,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(destroyed: u32, precision: f32, clear_time: Option<f32>) -> RunStats {
        RunStats {
            hits: destroyed,
            precision_sum: precision * destroyed as f32,
            destroyed,
            elapsed: clear_time.unwrap_or(30.0),
            clear_time,
        }
    }

    #[test]
    fn test_score() {
        assert_eq!(RunStats::default().score(), 0);
        // 5 targets at perfect precision = 1000, cleared in 10s = +300
        assert_eq!(stats(5, 1.0, Some(10.0)).score(), 1300);
        assert_eq!(stats(2, 0.5, None).score(), 300);
    }

    #[test]
    fn test_mean_precision() {
        let mut s = RunStats::default();
        assert_eq!(s.mean_precision(), 0.0);
        s.record_hit(1.0);
        s.record_hit(0.5);
        assert!((s.mean_precision() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_record_run_ranks() {
        let mut progress = Progress::new();
        assert_eq!(progress.record_run(&stats(2, 0.5, None), 1.0), Some(1));
        assert_eq!(progress.record_run(&stats(5, 1.0, Some(10.0)), 2.0), Some(1));
        assert_eq!(progress.record_run(&stats(1, 0.0, None), 3.0), Some(3));
        assert_eq!(progress.top_score(), Some(1300));
        assert_eq!(progress.total_destroyed, 8);
        assert_eq!(progress.best_precision, 1.0);
        assert_eq!(progress.fastest_clear, Some(10.0));
    }

    #[test]
    fn test_zero_score_never_placed() {
        let mut progress = Progress::new();
        assert_eq!(progress.record_run(&RunStats::default(), 0.0), None);
        assert!(progress.best_runs.is_empty());
    }

    #[test]
    fn test_ledger_truncates() {
        let mut progress = Progress::new();
        for i in 1..=12 {
            progress.record_run(&stats(i, 0.0, None), i as f64);
        }
        assert_eq!(progress.best_runs.len(), MAX_BEST_RUNS);
        assert_eq!(progress.top_score(), Some(1200));
        assert!(!progress.qualifies(300));
        assert_eq!(progress.potential_rank(5000), Some(1));
    }
}
