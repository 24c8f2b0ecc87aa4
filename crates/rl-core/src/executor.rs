// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Bounded-concurrency task execution
//!
//! The executor throttles whole detail-fetch pipelines against each other;
//! the sequential sub-calls inside one pipeline are never throttled
//! individually. It is an explicitly constructed value, owned by whoever
//! composes the service, so tests can create independent instances with
//! independent limits.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;

/// Runs submitted tasks with at most `limit` in flight.
///
/// Tasks that arrive while a slot is free start immediately; the rest wait
/// and are started in admission order (the semaphore queues waiters FIFO).
/// A task's own output, value or error, is returned unchanged: the executor
/// only delays the start, never alters the outcome. Slot release and
/// promotion of the next waiter happen together when the permit drops, so a
/// failing task releases its slot exactly like a succeeding one.
///
/// Cloning is cheap and every clone shares the same limit.
#[derive(Debug, Clone)]
pub struct TaskExecutor {
    semaphore: Arc<Semaphore>,
    limit: usize,
}

impl TaskExecutor {
    /// Create an executor with a fixed, positive concurrency limit.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero; a zero-slot executor could never run
    /// anything and is always a configuration mistake.
    pub fn new(limit: usize) -> Self {
        assert!(limit > 0, "concurrency limit must be positive");
        Self {
            semaphore: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    /// The configured concurrency limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of tasks that could start right now without waiting.
    pub fn available_slots(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Runs `task` once a slot is free and returns its output unchanged.
    pub async fn execute<F>(&self, task: F) -> F::Output
    where
        F: Future,
    {
        // The semaphore is never closed, so acquire can only fail if this
        // invariant is broken elsewhere.
        let _permit = self
            .semaphore
            .acquire()
            .await
            .expect("executor semaphore unexpectedly closed");
        task.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn task_value_passes_through_unchanged() {
        let executor = TaskExecutor::new(2);
        assert_eq!(executor.execute(async { 42 }).await, 42);
    }

    #[tokio::test]
    async fn task_failure_passes_through_unchanged() {
        let executor = TaskExecutor::new(2);
        let result: Result<(), &str> = executor.execute(async { Err("X") }).await;
        assert_eq!(result, Err("X"));
        // The failed task must have released its slot.
        assert_eq!(executor.available_slots(), 2);
    }

    #[tokio::test]
    async fn free_slot_starts_immediately() {
        let executor = TaskExecutor::new(1);
        assert_eq!(executor.available_slots(), 1);
        executor.execute(async {}).await;
        assert_eq!(executor.available_slots(), 1);
    }

    #[test]
    #[should_panic(expected = "concurrency limit must be positive")]
    fn zero_limit_is_rejected() {
        let _ = TaskExecutor::new(0);
    }
}
