// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Concurrency behavior of the task executor under contention.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rl_core::TaskExecutor;
use tokio::sync::oneshot;
use tokio::task::yield_now;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn in_flight_tasks_never_exceed_the_limit() {
    const LIMIT: usize = 3;
    const TASKS: usize = 20;

    let executor = TaskExecutor::new(LIMIT);
    let in_flight = Arc::new(AtomicUsize::new(0));
    let observed_max = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..TASKS)
        .map(|i| {
            let executor = executor.clone();
            let in_flight = Arc::clone(&in_flight);
            let observed_max = Arc::clone(&observed_max);
            tokio::spawn(async move {
                executor
                    .execute(async move {
                        let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                        observed_max.fetch_max(now, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(10)).await;
                        in_flight.fetch_sub(1, Ordering::SeqCst);
                        i
                    })
                    .await
            })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    results.sort_unstable();

    // Every task ran exactly once and produced its own value.
    assert_eq!(results, (0..TASKS).collect::<Vec<_>>());
    assert!(observed_max.load(Ordering::SeqCst) <= LIMIT);
    // Contention actually happened, otherwise the bound was not exercised.
    assert!(observed_max.load(Ordering::SeqCst) > 1);
    assert_eq!(executor.available_slots(), LIMIT);
}

// Runs on the current-thread flavor so that spawn plus yield_now gives a
// deterministic order in which the waiters reach the semaphore.
#[tokio::test]
async fn queued_tasks_start_in_admission_order() {
    const WAITERS: usize = 5;

    let executor = TaskExecutor::new(1);
    let started: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let (release, gate) = oneshot::channel::<()>();

    // Occupy the only slot until the gate opens.
    let blocker = {
        let executor = executor.clone();
        tokio::spawn(async move {
            executor
                .execute(async move {
                    let _ = gate.await;
                })
                .await;
        })
    };
    yield_now().await;
    assert_eq!(executor.available_slots(), 0);

    let mut waiters = Vec::new();
    for i in 0..WAITERS {
        let executor = executor.clone();
        let started = Arc::clone(&started);
        waiters.push(tokio::spawn(async move {
            executor
                .execute(async move {
                    started.lock().unwrap().push(i);
                })
                .await;
        }));
        // Let the waiter enqueue before the next one is spawned.
        yield_now().await;
    }

    assert!(started.lock().unwrap().is_empty());

    release.send(()).unwrap();
    blocker.await.unwrap();
    for waiter in waiters {
        waiter.await.unwrap();
    }

    assert_eq!(*started.lock().unwrap(), (0..WAITERS).collect::<Vec<_>>());
    assert_eq!(executor.available_slots(), 1);
}
