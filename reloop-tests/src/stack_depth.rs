use crate::{Flavor, Probe};
use reloop::{Error, async_while, future, loop_iter, loop_range, total_range};

pub async fn stack_depth(flavor: Flavor) {
    // Suspending steps go back to the scheduler each time, a shorter run covers them
    let length = match flavor {
        Flavor::Completed => 1_000_000,
        Flavor::Suspending => 20_000,
    };

    let mut remaining = length;
    async_while(|| {
        remaining -= 1;
        future::ok::<_, Error>(remaining > 0)
    })
    .await
    .expect("Failed to run the long async while");
    assert_eq!(remaining, 0);

    let probe = Probe::new();
    loop_range(0, length, |i| probe.step(flavor, i))
        .await
        .expect("Failed to run the long range loop");
    assert_eq!(probe.completed(), length as usize);

    let probe = Probe::new();
    loop_iter(std::iter::repeat_n('x', length as usize), |c| {
        probe.step(flavor, c)
    })
    .await
    .expect("Failed to run the long iterator loop");
    assert_eq!(probe.completed(), length as usize);

    let total = total_range(0, length, |_| Probe::new().step(flavor, 1))
        .await
        .expect("Failed to run the long total");
    assert_eq!(total, length);
}
