//! Stale-view tracking.
//!
//! Successful mutations mark the logical view paths that depend on the
//! changed rows. A consumer drains the set with [`ViewInvalidator::take_stale`]
//! and refetches. Only the session owning the service sees its own marks.

use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
struct State {
    stale: BTreeSet<String>,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct ViewInvalidator {
    state: Mutex<State>,
}

impl ViewInvalidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a view path stale and bump the generation.
    pub fn invalidate(&self, path: &str) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.stale.insert(path.to_string());
        state.generation += 1;
        tracing::debug!(path, generation = state.generation, "view invalidated");
    }

    pub fn invalidate_all(&self, paths: &[&str]) {
        for path in paths {
            self.invalidate(path);
        }
    }

    /// Number of invalidations since creation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .generation
    }

    #[must_use]
    pub fn is_stale(&self, path: &str) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .stale
            .contains(path)
    }

    /// Drain and return the stale paths in sorted order.
    pub fn take_stale(&self) -> Vec<String> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut state.stale).into_iter().collect()
    }
}
