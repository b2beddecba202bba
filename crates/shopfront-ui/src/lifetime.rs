//! Component lifetime guard for async work.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that flips once when a component is disposed.
///
/// Clone it into timers and spawned futures; check [`is_alive`](Self::is_alive)
/// before touching component state.
#[derive(Debug, Clone)]
pub struct InstanceGuard {
    alive: Arc<AtomicBool>,
}

impl Default for InstanceGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl InstanceGuard {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Mark the owning instance as gone. Idempotent.
    pub fn dispose(&self) {
        self.alive.store(false, Ordering::Release);
    }

    /// Run `f` only while the instance is alive.
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        self.is_alive().then(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_shared_between_clones() {
        let guard = InstanceGuard::new();
        let task_copy = guard.clone();
        assert!(task_copy.is_alive());

        guard.dispose();
        assert!(!task_copy.is_alive());
        guard.dispose();
        assert!(!guard.is_alive());
    }

    #[test]
    fn test_run_skips_after_dispose() {
        let guard = InstanceGuard::new();
        assert_eq!(guard.run(|| 7), Some(7));

        guard.dispose();
        let mut touched = false;
        assert_eq!(guard.run(|| touched = true), None);
        assert!(!touched);
    }
}
