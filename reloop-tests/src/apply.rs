use crate::{Flavor, Probe};
use reloop::{VOID, apply_to_all, loop_slice};
use std::fmt::Debug;

pub async fn apply(flavor: Flavor) {
    // No elements
    let probe = Probe::new();
    let nothing: [&dyn Debug; 0] = [];
    apply_to_all(|_| probe.step(flavor, ()), &nothing)
        .await
        .expect("Failed to apply to nothing");
    assert_eq!(probe.invoked(), 0);

    // Single element
    let probe = Probe::new();
    let mut seen = Vec::new();
    let single: [&dyn Debug; 1] = [&"single"];
    apply_to_all(
        |v| {
            seen.push(format!("{:?}", v));
            probe.step(flavor, 42)
        },
        &single,
    )
    .await
    .expect("Failed to apply to a single element");
    assert_eq!(seen, ["\"single\""]);
    assert_eq!(probe.invoked(), 1);
    assert_eq!(probe.completed(), 1);

    // Several heterogeneous elements, same as the loop
    let several: [&dyn Debug; 4] = [&1, &"two", &3.5, &Some('4')];
    let probe = Probe::new();
    let mut applied = Vec::new();
    apply_to_all(
        |v| {
            applied.push(format!("{:?}", v));
            probe.step(flavor, ())
        },
        &several,
    )
    .await
    .expect("Failed to apply to several elements");
    let probe = Probe::new();
    let mut looped = Vec::new();
    loop_slice(&several, |v| {
        looped.push(format!("{:?}", v));
        probe.step(flavor, ())
    })
    .await
    .expect("Failed to loop over several elements");
    assert_eq!(applied, looped);
    assert_eq!(applied, ["1", "\"two\"", "3.5", "Some('4')"]);
    probe.assert_sequential();

    assert_eq!(reloop::void_future(), VOID);
}
