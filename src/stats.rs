use crate::util::mean;
use chrono::{DateTime, Local};

/// Final metrics for one finished test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    pub wpm: u32,
    pub accuracy: u32,
}

/// One history entry, labeled in finish order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedResult {
    pub label: String,
    pub result: SessionResult,
    pub recorded_at: DateTime<Local>,
}

/// Append-only record of finished tests. Lives in memory for the lifetime
/// of the process and feeds the trend chart on the results screen.
#[derive(Debug, Default)]
pub struct ProgressHistory {
    entries: Vec<RecordedResult>,
}

impl ProgressHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one finished result. Labels are 1-based: "Test 1", "Test 2", ...
    pub fn record(&mut self, result: SessionResult) {
        let label = format!("Test {}", self.entries.len() + 1);
        self.entries.push(RecordedResult {
            label,
            result,
            recorded_at: Local::now(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RecordedResult] {
        &self.entries
    }

    pub fn last(&self) -> Option<&RecordedResult> {
        self.entries.last()
    }

    /// (test index, wpm) pairs for the chart's first series.
    pub fn wpm_series(&self) -> Vec<(f64, f64)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| ((i + 1) as f64, f64::from(e.result.wpm)))
            .collect()
    }

    /// (test index, accuracy) pairs for the chart's second series.
    pub fn accuracy_series(&self) -> Vec<(f64, f64)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| ((i + 1) as f64, f64::from(e.result.accuracy)))
            .collect()
    }

    pub fn mean_wpm(&self) -> Option<f64> {
        let wpms: Vec<f64> = self
            .entries
            .iter()
            .map(|e| f64::from(e.result.wpm))
            .collect();
        mean(&wpms)
    }
}
