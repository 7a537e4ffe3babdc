//! # Interaction History
//! In-memory, non-persistent list of analyzed inputs for the sidebar display.
//!
//! The update rule is a pure function over a caller-owned list ([`record`]);
//! [`History`] is the thread-safe wrapper the API holds behind an `Arc`.

use std::sync::Mutex;

/// Pure history update: append `input` (trimmed) unless it is empty or already
/// present. Ownership flows through, so callers can keep their own lists.
pub fn record(mut history: Vec<String>, input: &str) -> Vec<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || history.iter().any(|h| h == trimmed) {
        return history;
    }
    history.push(trimmed.to_string());
    history
}

/// Thread-safe, capacity-bounded history shared across request handlers.
#[derive(Debug)]
pub struct History {
    inner: Mutex<Vec<String>>,
    cap: usize,
}

impl History {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
            cap: cap.min(10_000),
        }
    }

    /// Record one input, dropping the oldest entries past capacity.
    pub fn push(&self, input: &str) {
        let mut v = self.inner.lock().expect("history mutex poisoned");
        let updated = record(std::mem::take(&mut *v), input);
        *v = updated;
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }

    /// Last `n` entries in chronological order.
    pub fn snapshot_last_n(&self, n: usize) -> Vec<String> {
        let v = self.inner.lock().expect("history mutex poisoned");
        let start = v.len().saturating_sub(n);
        v[start..].to_vec()
    }
}
