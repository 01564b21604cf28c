use crate::{Flavor, Probe};
use reloop::{total_iter, total_range, total_slice};

pub async fn totals(flavor: Flavor) {
    let probe = Probe::new();
    let total = total_iter([1, 2, 3, 4], |v| probe.step(flavor, v))
        .await
        .expect("Failed to total an array");
    assert_eq!(total, 10);
    assert_eq!(probe.invoked(), 4);
    probe.assert_sequential();

    // Each step sees the elements in order
    let probe = Probe::new();
    let mut seen = Vec::new();
    let total = total_range(1, 101, |i| {
        seen.push(i);
        probe.step(flavor, i)
    })
    .await
    .expect("Failed to total a range");
    assert_eq!(total, 5050);
    assert_eq!(seen, (1..101).collect::<Vec<_>>());
    probe.assert_sequential();

    let prices = [("apple", 3), ("pear", 4), ("fig", -2)];
    let probe = Probe::new();
    let total = total_slice(&prices, |(_, price)| probe.step(flavor, *price))
        .await
        .expect("Failed to total a slice");
    assert_eq!(total, 5);

    // The accumulator has 32 bits and wraps around
    let probe = Probe::new();
    let total = total_iter([i32::MAX, 1], |v| probe.step(flavor, v))
        .await
        .expect("Failed to total past the maximum");
    assert_eq!(total, i32::MIN);
    let probe = Probe::new();
    let total = total_range(0, 4, |_| probe.step(flavor, i32::MIN))
        .await
        .expect("Failed to total past the minimum");
    assert_eq!(total, 0);
}
