use crate::{Flavor, Probe};
use reloop::{
    loop_iter, loop_iter_filtered, loop_iter_filtered_indexed, loop_iter_indexed, loop_range,
    loop_range_filtered, loop_slice, loop_slice_filtered, loop_without_trampoline, total_iter,
    total_range,
};
use std::collections::{BTreeMap, VecDeque};

pub async fn iterator_loops(flavor: Flavor) {
    // Vec
    let probe = Probe::new();
    let mut seen = Vec::new();
    loop_iter(vec![5, 3, 8, 1], |v| {
        seen.push(v);
        probe.step(flavor, v)
    })
    .await
    .expect("Failed to loop over a Vec");
    assert_eq!(seen, [5, 3, 8, 1]);
    assert_eq!(probe.invoked(), 4);
    assert_eq!(probe.completed(), 4);
    probe.assert_sequential();

    // Any iterator
    let probe = Probe::new();
    let mut seen = Vec::new();
    loop_iter("reloop".chars().rev(), |c| {
        seen.push(c);
        probe.step(flavor, ())
    })
    .await
    .expect("Failed to loop over an iterator");
    assert_eq!(seen.into_iter().collect::<String>(), "pooler");
    probe.assert_sequential();

    // Iterable by reference
    let queue = VecDeque::from(["alpha", "bravo", "charlie"]);
    let probe = Probe::new();
    let mut seen = Vec::new();
    loop_iter(&queue, |v| {
        seen.push(*v);
        probe.step(flavor, ())
    })
    .await
    .expect("Failed to loop over a VecDeque");
    assert_eq!(seen, ["alpha", "bravo", "charlie"]);

    // Filtered
    let map = BTreeMap::from([(1, "one"), (2, "two"), (3, "three"), (4, "four")]);
    let probe = Probe::new();
    let mut seen = Vec::new();
    loop_iter_filtered(
        &map,
        |(k, _)| Ok(*k % 2 == 0),
        |(_, v)| {
            seen.push(*v);
            probe.step(flavor, ())
        },
    )
    .await
    .expect("Failed to loop over a filtered map");
    assert_eq!(seen, ["two", "four"]);
    assert_eq!(probe.invoked(), 2);
    probe.assert_sequential();

    // Indexed
    let probe = Probe::new();
    let mut seen = Vec::new();
    loop_iter_indexed(["a", "b", "c"], |v, i| {
        seen.push((i, v));
        probe.step(flavor, ())
    })
    .await
    .expect("Failed to loop with indexes");
    assert_eq!(seen, [(0, "a"), (1, "b"), (2, "c")]);

    // Filter rejecting everything
    let probe = Probe::new();
    let mut tested = 0;
    loop_iter_filtered(
        1..=50,
        |_| {
            tested += 1;
            Ok(false)
        },
        |v| probe.step(flavor, v),
    )
    .await
    .expect("Failed to loop with a filter rejecting everything");
    assert_eq!(tested, 50);
    assert_eq!(probe.invoked(), 0);

    // Baseline without trampoline
    let probe = Probe::new();
    let seen = std::sync::Mutex::new(Vec::new());
    loop_without_trampoline(0..100, |v| {
        seen.lock().unwrap().push(v);
        probe.step(flavor, ())
    })
    .await
    .expect("Failed to loop without trampoline");
    assert_eq!(seen.into_inner().unwrap(), (0..100).collect::<Vec<_>>());
    probe.assert_sequential();
}

pub async fn slice_loops(flavor: Flavor) {
    let names = ["queue", "reloop", "cursor", "step"];

    let probe = Probe::new();
    let mut seen = Vec::new();
    loop_slice(&names, |v| {
        seen.push(*v);
        probe.step(flavor, v.len())
    })
    .await
    .expect("Failed to loop over a slice");
    assert_eq!(seen, names);
    probe.assert_sequential();

    let probe = Probe::new();
    let mut tested = Vec::new();
    let mut seen = Vec::new();
    loop_slice_filtered(
        &names,
        |i| {
            tested.push(i);
            Ok(i != 1)
        },
        |v, i| {
            seen.push((i, *v));
            probe.step(flavor, ())
        },
    )
    .await
    .expect("Failed to loop over a filtered slice");
    assert_eq!(tested, [0, 1, 2, 3]);
    assert_eq!(seen, [(0, "queue"), (2, "cursor"), (3, "step")]);
    probe.assert_sequential();
}

pub async fn range_loops(flavor: Flavor) {
    let probe = Probe::new();
    let mut seen = Vec::new();
    loop_range(-3, 4, |i| {
        seen.push(i);
        probe.step(flavor, ())
    })
    .await
    .expect("Failed to loop over a range");
    assert_eq!(seen, [-3, -2, -1, 0, 1, 2, 3]);
    assert_eq!(probe.completed(), 7);
    probe.assert_sequential();

    let probe = Probe::new();
    let mut seen = Vec::new();
    loop_range_filtered(
        0,
        20,
        |i| Ok(i % 5 == 0),
        |i| {
            seen.push(i);
            probe.step(flavor, ())
        },
    )
    .await
    .expect("Failed to loop over a filtered range");
    assert_eq!(seen, [0, 5, 10, 15]);
    probe.assert_sequential();

    let probe = Probe::new();
    loop_range_filtered(0, 1_000, |_| Ok(false), |i| probe.step(flavor, i))
        .await
        .expect("Failed to loop over a range with a filter rejecting everything");
    assert_eq!(probe.invoked(), 0);

    let probe = Probe::new();
    let mut seen = Vec::new();
    loop_range(i32::MAX - 2, i32::MAX, |i| {
        seen.push(i);
        probe.step(flavor, ())
    })
    .await
    .expect("Failed to loop at the end of the integer range");
    assert_eq!(seen, [i32::MAX - 2, i32::MAX - 1]);
}

pub async fn empty_sources(flavor: Flavor) {
    let probe = Probe::new();
    loop_range(0, 0, |i| probe.step(flavor, i))
        .await
        .expect("Empty range should succeed");
    loop_range(10, -10, |i| probe.step(flavor, i))
        .await
        .expect("Reversed range should succeed");
    loop_slice(&[] as &[u8], |v| probe.step(flavor, *v))
        .await
        .expect("Empty slice should succeed");
    loop_iter(Vec::<String>::new(), |v| probe.step(flavor, v))
        .await
        .expect("Empty vector should succeed");
    loop_iter_filtered_indexed(
        std::iter::empty::<u8>(),
        |_, _| panic!("The filter must not be called on an empty source"),
        |v, _| probe.step(flavor, v),
    )
    .await
    .expect("Empty iterator should succeed");
    let total = total_range(5, 5, |i| probe.step(flavor, i))
        .await
        .expect("Empty total should succeed");
    assert_eq!(total, 0);
    let total = total_iter(None::<i32>, |i| probe.step(flavor, i))
        .await
        .expect("Empty total should succeed");
    assert_eq!(total, 0);
    assert_eq!(probe.invoked(), 0);
}

/// Indexes are scan positions: rejected elements keep their position, so the step can observe
/// gaps.
pub async fn index_policy(flavor: Flavor) {
    // Without a filter the index is exactly the position
    let probe = Probe::new();
    let mut indexes = Vec::new();
    loop_iter_indexed('a'..='e', |_, i| {
        indexes.push(i);
        probe.step(flavor, ())
    })
    .await
    .expect("Failed to loop with indexes");
    assert_eq!(indexes, [0, 1, 2, 3, 4]);

    // Filtered out elements are not compacted away from the indexes
    let probe = Probe::new();
    let mut tested = Vec::new();
    let mut visited = Vec::new();
    loop_iter_filtered_indexed(
        ['a', 'b', 'c', 'd', 'e', 'f'],
        |c, i| {
            tested.push(i);
            Ok(*c != 'b' && *c != 'c')
        },
        |c, i| {
            visited.push((i, c));
            probe.step(flavor, ())
        },
    )
    .await
    .expect("Failed to loop with filtered indexes");
    assert_eq!(tested, [0, 1, 2, 3, 4, 5]);
    assert_eq!(visited, [(0, 'a'), (3, 'd'), (4, 'e'), (5, 'f')]);

    // The filter sees the same scan position as the step
    let probe = Probe::new();
    let mut visited = Vec::new();
    loop_iter_filtered_indexed(
        [10, 20, 30, 40, 50],
        |_, i| Ok(i % 2 == 1),
        |v, i| {
            visited.push((i, v));
            probe.step(flavor, ())
        },
    )
    .await
    .expect("Failed to loop with an index based filter");
    assert_eq!(visited, [(1, 20), (3, 40)]);
}
