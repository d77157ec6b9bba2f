//! Concurrent picking from a shared chooser.

use chooser::Chooser;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const PICKS_PER_THREAD: usize = 20_000;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_chooser_is_send_and_sync() {
    assert_send_sync::<Chooser<String>>();
    assert_send_sync::<Chooser<u64>>();
}

#[test]
fn test_scoped_threads_share_one_chooser() {
    let chooser = Chooser::new(vec!["A", "B", "C", "D"]).unwrap();

    let per_thread: Vec<HashMap<&str, usize>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let chooser = &chooser;
                scope.spawn(move || {
                    let mut counts: HashMap<&str, usize> = HashMap::new();
                    for _ in 0..PICKS_PER_THREAD {
                        *counts.entry(chooser.pick()).or_insert(0) += 1;
                    }
                    counts
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let mut totals: HashMap<&str, usize> = HashMap::new();
    for counts in &per_thread {
        for (key, count) in counts {
            assert!(chooser.choices().contains(key));
            *totals.entry(*key).or_insert(0) += count;
        }
    }

    let expected = (THREADS * PICKS_PER_THREAD) as f64 / 4.0;
    for key in ["A", "B", "C", "D"] {
        let count = totals[key] as f64;
        assert!(
            (count - expected).abs() / expected <= 0.05,
            "{} picked {} times across threads",
            key,
            count
        );
    }
    assert_eq!(chooser.choices(), &["A", "B", "C", "D"]);
}

#[test]
fn test_arc_shared_across_spawned_threads() {
    let chooser = Arc::new(Chooser::new((0..64u32).collect::<Vec<_>>()).unwrap());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let chooser = Arc::clone(&chooser);
            thread::spawn(move || (0..1_000).map(|_| chooser.pick()).collect::<Vec<u32>>())
        })
        .collect();

    for handle in handles {
        let picks = handle.join().unwrap();
        assert_eq!(picks.len(), 1_000);
        assert!(picks.iter().all(|value| *value < 64));
    }
    assert_eq!(chooser.len(), 64);
}

#[test]
fn test_threads_do_not_share_a_stream() {
    let chooser = Chooser::new(0..1_000_000u64).unwrap();

    let streams: Vec<Vec<u64>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let chooser = &chooser;
                scope.spawn(move || chooser.sample(16))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for i in 0..streams.len() {
        for j in (i + 1)..streams.len() {
            assert_ne!(streams[i], streams[j], "threads {} and {} drew identical streams", i, j);
        }
    }
}
