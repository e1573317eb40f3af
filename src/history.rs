//! history.rs — in-memory, session-scoped log of assessment results.
//!
//! Most-recent-first, capped; the oldest entry is evicted on overflow.
//! Nothing is persisted across restarts.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::assessment::RiskResult;

/// Default retention, matching the browser shell's 20-entry list.
pub const DEFAULT_CAPACITY: usize = 20;

#[derive(Debug)]
pub struct AssessmentHistory {
    inner: Mutex<VecDeque<RiskResult>>,
    cap: usize,
}

impl AssessmentHistory {
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            inner: Mutex::new(VecDeque::with_capacity(cap)),
            cap,
        }
    }

    /// Record a result as the most recent entry, evicting the oldest when full.
    pub fn push(&self, result: RiskResult) {
        let mut v = self.inner.lock().expect("history mutex poisoned");
        v.push_front(result);
        while v.len() > self.cap {
            v.pop_back();
        }
    }

    /// Up to `n` entries, most recent first.
    pub fn snapshot_last_n(&self, n: usize) -> Vec<RiskResult> {
        let v = self.inner.lock().expect("history mutex poisoned");
        v.iter().take(n).cloned().collect()
    }

    pub fn latest(&self) -> Option<RiskResult> {
        let v = self.inner.lock().expect("history mutex poisoned");
        v.front().cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("history mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AssessmentHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{RiskInput, RiskLevel, RiskResult};
    use chrono::Utc;

    fn result_with_probability(p: f32) -> RiskResult {
        RiskResult {
            probability: p,
            risk_level: RiskLevel::Low,
            timestamp: Utc::now(),
            input: RiskInput::default(),
        }
    }

    #[test]
    fn overflow_keeps_the_20_most_recent_in_order() {
        let h = AssessmentHistory::default();
        for i in 0..25 {
            h.push(result_with_probability(i as f32 / 100.0));
        }

        assert_eq!(h.len(), 20);
        let snap = h.snapshot_last_n(20);
        assert_eq!(snap.len(), 20);
        // Most recent first: probabilities 0.24 down to 0.05.
        assert!((snap[0].probability - 0.24).abs() < 1e-6);
        assert!((snap[19].probability - 0.05).abs() < 1e-6);
        for w in snap.windows(2) {
            assert!(w[0].probability > w[1].probability);
        }
    }

    #[test]
    fn latest_tracks_the_newest_entry() {
        let h = AssessmentHistory::default();
        assert!(h.latest().is_none());
        h.push(result_with_probability(0.10));
        h.push(result_with_probability(0.42));
        let last = h.latest().unwrap();
        assert!((last.probability - 0.42).abs() < 1e-6);
    }

    #[test]
    fn snapshot_shorter_than_history_takes_the_newest() {
        let h = AssessmentHistory::default();
        for i in 0..5 {
            h.push(result_with_probability(i as f32 / 10.0));
        }
        let snap = h.snapshot_last_n(2);
        assert_eq!(snap.len(), 2);
        assert!((snap[0].probability - 0.4).abs() < 1e-6);
        assert!((snap[1].probability - 0.3).abs() < 1e-6);
    }
}
