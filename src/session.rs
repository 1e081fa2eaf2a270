use crate::stats::SessionResult;
use std::time::SystemTime;

/// Length of a test window, in seconds.
pub const DEFAULT_DURATION_SECS: u32 = 60;

/// Per-position classification of the typed buffer against the reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Judgment {
    Unjudged,
    Correct,
    Incorrect,
}

/// Lifecycle of a single test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running,
    Finished,
}

/// Summary handed back to the host after each input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputUpdate {
    pub live_accuracy: u32,
    pub finished: bool,
}

/// represents a single test being typed against a fixed reference text
#[derive(Debug, Clone)]
pub struct Session {
    pub reference: String,
    typed: Vec<char>,
    pub judgments: Vec<Judgment>,
    pub status: Status,
    pub started_at: Option<SystemTime>,
    pub duration_secs: u32,
    pub seconds_remaining: u32,
    pub live_accuracy: u32,
    pub cursor_pos: usize,
    result: Option<SessionResult>,
}

impl Session {
    pub fn new(reference: String) -> Self {
        Self::with_duration(reference, DEFAULT_DURATION_SECS)
    }

    pub fn with_duration(reference: String, duration_secs: u32) -> Self {
        let positions = reference.chars().count();
        Self {
            reference,
            typed: Vec::new(),
            judgments: vec![Judgment::Unjudged; positions],
            status: Status::Idle,
            started_at: None,
            duration_secs,
            seconds_remaining: duration_secs,
            live_accuracy: 100,
            cursor_pos: 0,
            result: None,
        }
    }

    pub fn typed(&self) -> &[char] {
        &self.typed
    }

    pub fn typed_len(&self) -> usize {
        self.typed.len()
    }

    /// The final metrics, available once the session has finished.
    pub fn result(&self) -> Option<SessionResult> {
        self.result
    }

    pub fn expected_char(&self, idx: usize) -> Option<char> {
        self.reference.chars().nth(idx)
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn has_finished(&self) -> bool {
        self.status == Status::Finished
    }

    /// Append one keystroke to the typed buffer and re-judge it.
    pub fn write(&mut self, c: char) -> InputUpdate {
        if self.has_finished() {
            return self.snapshot();
        }
        self.typed.push(c);
        self.after_edit()
    }

    /// Erase the last keystroke and re-judge the remaining buffer.
    pub fn backspace(&mut self) -> InputUpdate {
        if self.has_finished() {
            return self.snapshot();
        }
        self.typed.pop();
        self.after_edit()
    }

    /// Replace the whole typed buffer, as a paste-capable input surface
    /// would, and re-judge it.
    pub fn handle_input(&mut self, typed: &str) -> InputUpdate {
        if self.has_finished() {
            return self.snapshot();
        }
        self.typed = typed.chars().collect();
        self.after_edit()
    }

    /// Advance the countdown by one second. Only a running session reacts,
    /// so a stale tick from a previous session never fires against a new
    /// session's state.
    pub fn on_tick(&mut self) {
        if self.status != Status::Running {
            return;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.finish();
        }
    }

    fn after_edit(&mut self) -> InputUpdate {
        if self.status == Status::Idle && !self.typed.is_empty() {
            self.status = Status::Running;
            self.started_at = Some(SystemTime::now());
        }

        self.rejudge();

        if self.status == Status::Running && self.typed.len() >= self.judgments.len() {
            self.finish();
        }

        self.snapshot()
    }

    fn rejudge(&mut self) {
        let mut correct = 0usize;
        for (idx, expected) in self.reference.chars().enumerate() {
            self.judgments[idx] = match self.typed.get(idx) {
                None => Judgment::Unjudged,
                Some(&c) if c == expected => {
                    correct += 1;
                    Judgment::Correct
                }
                Some(_) => Judgment::Incorrect,
            };
        }

        self.live_accuracy = if self.typed.is_empty() {
            100
        } else {
            ((correct as f64 / self.typed.len() as f64) * 100.0).round() as u32
        };
        self.cursor_pos = self.typed.len().min(self.judgments.len());
    }

    // Runs at most once per session; the guard makes both finish paths
    // (completion and timeout) collapse into a single finalization.
    fn finish(&mut self) {
        if self.has_finished() {
            return;
        }
        self.status = Status::Finished;

        let elapsed_minutes = f64::from(self.duration_secs - self.seconds_remaining) / 60.0;
        let total_typed = self.typed.len();
        let correct = self
            .judgments
            .iter()
            .filter(|j| **j == Judgment::Correct)
            .count();

        let words = total_typed as f64 / 5.0;
        let wpm = if elapsed_minutes > 0.0 {
            (words / elapsed_minutes).round() as u32
        } else {
            0
        };
        let accuracy = if total_typed > 0 {
            ((correct as f64 / total_typed as f64) * 100.0).round() as u32
        } else {
            100
        };

        self.result = Some(SessionResult { wpm, accuracy });
    }

    fn snapshot(&self) -> InputUpdate {
        InputUpdate {
            live_accuracy: self.live_accuracy,
            finished: self.has_finished(),
        }
    }
}
