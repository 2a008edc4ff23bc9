//! Stress tests that push the queue through large operation patterns
//! to catch carry-cascade and relink edge cases under load.

use pri_queue::PriQueue;

#[test]
fn massive_ascending_insert_then_drain() {
    let mut pq = PriQueue::new();
    for i in 0..5000 {
        pq.insert(i);
    }
    assert_eq!(pq.len(), 5000);
    assert!(pq.is_valid());

    for i in 0..5000 {
        assert_eq!(pq.pop_min(), Some(i));
    }
    assert!(pq.is_empty());
}

#[test]
fn massive_descending_insert_then_drain() {
    let mut pq = PriQueue::new();
    for i in (0..5000).rev() {
        pq.insert(i);
    }
    assert!(pq.is_valid());

    for i in 0..5000 {
        assert_eq!(pq.pop_min(), Some(i));
    }
    assert!(pq.is_empty());
}

#[test]
fn alternating_insert_and_pop() {
    let mut pq = PriQueue::new();
    for i in 0..1000 {
        pq.insert(i * 2);
        pq.insert(i * 2 + 1);
        assert!(pq.pop_min().is_some());
    }
    assert_eq!(pq.len(), 1000);
    assert!(pq.is_valid());

    let mut last = i32::MIN;
    while let Some(v) = pq.pop_min() {
        assert!(v >= last);
        last = v;
    }
}

#[test]
fn large_meld() {
    let mut a = PriQueue::new();
    let mut b = PriQueue::new();
    for i in 0..2000 {
        a.insert(i * 2);
        b.insert(i * 2 + 1);
    }

    a.meld(b);
    assert_eq!(a.len(), 4000);
    assert!(a.is_valid());

    for i in 0..4000 {
        assert_eq!(a.pop_min(), Some(i));
    }
}

#[test]
fn repeated_melds_of_small_queues() {
    let mut acc = PriQueue::new();
    for chunk in 0..100 {
        let mut q = PriQueue::new();
        for i in 0..17 {
            q.insert(chunk * 1000 + i);
        }
        acc.meld(q);
        assert!(acc.is_valid());
    }
    assert_eq!(acc.len(), 1700);

    let mut last = i32::MIN;
    while let Some(v) = acc.pop_min() {
        assert!(v >= last);
        last = v;
    }
}

#[test]
fn mass_decrease_then_drain() {
    let mut pq = PriQueue::new();
    let mut handles = Vec::new();
    for i in 0..1500 {
        handles.push(pq.insert(10_000 + i));
    }

    // Reverse every priority; each update takes the decrease path.
    for (i, h) in handles.iter().enumerate() {
        pq.update_with(h, |v| *v = 1500 - i as i32).unwrap();
    }
    assert!(pq.is_valid());

    for i in 1..=1500 {
        assert_eq!(pq.pop_min(), Some(i));
    }
}

#[test]
fn mass_increase_then_drain() {
    let mut pq = PriQueue::new();
    let mut handles = Vec::new();
    for i in 0..1500 {
        handles.push(pq.insert(i));
    }

    // Push everything upward; updates that did not move take the
    // increase path.
    for h in &handles {
        pq.update_with(h, |v| *v += 100_000).unwrap();
    }
    assert!(pq.is_valid());

    for i in 0..1500 {
        assert_eq!(pq.pop_min(), Some(i + 100_000));
    }
}

#[test]
fn mass_removal_interleaved_with_pops() {
    let mut pq = PriQueue::new();
    let mut handles = Vec::new();
    for i in 0..2000 {
        handles.push(pq.insert(i));
    }

    // Remove every third element by handle.
    for h in handles.iter().step_by(3) {
        assert!(pq.remove(h).is_ok());
    }
    assert!(pq.is_valid());
    assert_eq!(pq.len(), 2000 - 667);

    let mut last = i32::MIN;
    let mut count = 0;
    while let Some(v) = pq.pop_min() {
        assert!(v > last);
        assert_ne!(v % 3, 0);
        last = v;
        count += 1;
    }
    assert_eq!(count, 1333);
}

#[test]
fn churn_keeps_handles_accurate() {
    let mut pq = PriQueue::new();
    let mut handles = Vec::new();

    for round in 0u32..50 {
        for i in 0..40 {
            handles.push(pq.insert((round * 40 + i) as i64));
        }
        for _ in 0..20 {
            pq.pop_min();
        }
    }
    assert_eq!(pq.len(), 50 * 40 - 50 * 20);
    assert!(pq.is_valid());

    let linked = handles.iter().filter(|h| h.is_linked()).count();
    assert_eq!(linked, pq.len());
}
