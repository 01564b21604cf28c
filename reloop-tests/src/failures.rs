use crate::{Flavor, Probe, StepFailure, silent_logs};
use reloop::{
    Error, LogStatementError, apply_to_all, loop_iter, loop_iter_filtered, loop_range,
    loop_range_filtered, loop_slice, total_iter, total_range,
};

fn failure_of(error: &Error) -> Option<StepFailure> {
    error.downcast_ref::<StepFailure>().copied()
}

pub async fn step_failures(flavor: Flavor) {
    // The failing step is the last one invoked
    let probe = Probe::new();
    let mut seen = Vec::new();
    let error = loop_range(0, 10, |i| {
        seen.push(i);
        if i == 3 {
            probe.failing(flavor, StepFailure(i.into()))
        } else {
            probe.step(flavor, ())
        }
    })
    .await
    .expect_err("Expected the range loop to fail");
    assert_eq!(failure_of(&error), Some(StepFailure(3)));
    assert_eq!(seen, [0, 1, 2, 3]);
    probe.assert_sequential();

    // First failure wins
    let probe = Probe::new();
    let error = loop_iter(1..100, |i: i64| {
        if i % 7 == 0 {
            probe.failing(flavor, StepFailure(i))
        } else {
            probe.step(flavor, ())
        }
    })
    .await
    .expect_err("Expected the iterator loop to fail");
    assert_eq!(failure_of(&error), Some(StepFailure(7)));
    assert_eq!(probe.invoked(), 7);

    // Failing on the first element
    let probe = Probe::new();
    let error = loop_slice(&[10, 20, 30], |v| probe.failing::<()>(flavor, StepFailure(*v)))
        .await
        .expect_err("Expected the slice loop to fail");
    assert_eq!(failure_of(&error), Some(StepFailure(10)));
    assert_eq!(probe.invoked(), 1);

    // Totals
    let probe = Probe::new();
    let error = total_iter([1, 2, 3, 4], |v| {
        if v == 4 {
            probe.failing(flavor, StepFailure(v.into()))
        } else {
            probe.step(flavor, v)
        }
    })
    .await
    .expect_err("Expected the total to fail");
    assert_eq!(failure_of(&error), Some(StepFailure(4)));
    let probe = Probe::new();
    let error = total_range(0, 5, |i| probe.failing::<i32>(flavor, StepFailure(i.into())))
        .await
        .expect_err("Expected the range total to fail");
    assert_eq!(failure_of(&error), Some(StepFailure(0)));
    assert_eq!(probe.invoked(), 1);

    // Single element application
    let probe = Probe::new();
    let error = apply_to_all(|v| probe.failing::<()>(flavor, StepFailure(*v)), &[99])
        .await
        .expect_err("Expected the single application to fail");
    assert_eq!(failure_of(&error), Some(StepFailure(99)));
    let probe = Probe::new();
    let error = apply_to_all(
        |v: &i64| {
            if *v == 2 {
                probe.failing(flavor, StepFailure(*v))
            } else {
                probe.step(flavor, ())
            }
        },
        &[1, 2, 3],
    )
    .await
    .expect_err("Expected the application to fail");
    assert_eq!(failure_of(&error), Some(StepFailure(2)));
    assert_eq!(probe.invoked(), 2);

    // Logging the failed statement does not change the outcome
    silent_logs! {
        let probe = Probe::new();
        let error = loop_range(0, 3, |i| {
            if i == 1 {
                probe.failing(flavor, StepFailure(i.into()))
            } else {
                probe.step(flavor, ())
            }
        })
        .log_statement_error(|| "Failed to delete the rows".into(), "DELETE FROM t WHERE id = ?")
        .await
        .expect_err("Expected the logged loop to fail");
        assert_eq!(failure_of(&error), Some(StepFailure(1)));
        assert_eq!(probe.invoked(), 2);
    };
}

pub async fn filter_failures(flavor: Flavor) {
    let probe = Probe::new();
    let mut seen = Vec::new();
    let error = loop_iter_filtered(
        ["a", "b", "", "c"],
        |v| {
            if v.is_empty() {
                Err(Error::msg("Cannot filter an empty name"))
            } else {
                Ok(true)
            }
        },
        |v| {
            seen.push(v);
            probe.step(flavor, ())
        },
    )
    .await
    .expect_err("Expected the filter to fail");
    assert_eq!(error.to_string(), "Cannot filter an empty name");
    assert_eq!(seen, ["a", "b"]);
    probe.assert_sequential();

    let probe = Probe::new();
    let error = loop_range_filtered(
        0,
        100,
        |i| match i {
            50 => Err(Error::new(StepFailure(50))),
            _ => Ok(i % 10 == 0),
        },
        |i| probe.step(flavor, i),
    )
    .await
    .expect_err("Expected the range filter to fail");
    assert_eq!(failure_of(&error), Some(StepFailure(50)));
    assert_eq!(probe.invoked(), 5);
}
