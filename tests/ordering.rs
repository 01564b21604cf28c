#[cfg(test)]
mod tests {
    use futures::{
        FutureExt,
        channel::oneshot::{self, Receiver, Sender},
        task::noop_waker_ref,
    };
    use reloop::{Error, Result, apply_to_all, loop_iter, loop_range, total_range};
    use reloop_tests::StepFailure;
    use std::{
        cell::RefCell,
        future::Future,
        task::{Context, Poll},
    };

    /// Steps that stay pending until completed from the outside, one channel per element.
    struct Steps {
        receivers: RefCell<Vec<Option<Receiver<Result<i32>>>>>,
        requested: RefCell<Vec<usize>>,
    }

    impl Steps {
        fn step(&self, index: usize) -> impl Future<Output = Result<i32>> + use<> {
            self.requested.borrow_mut().push(index);
            let receiver = self.receivers.borrow_mut()[index]
                .take()
                .expect("Step requested twice");
            receiver.map(|v| v.map_err(Error::new).and_then(|v| v))
        }

        fn requested(&self) -> Vec<usize> {
            self.requested.borrow().clone()
        }
    }

    fn pending_steps(len: usize) -> (Vec<Sender<Result<i32>>>, Steps) {
        let (senders, receivers): (Vec<_>, Vec<_>) = (0..len)
            .map(|_| {
                let (tx, rx) = oneshot::channel();
                (tx, Some(rx))
            })
            .unzip();
        let steps = Steps {
            receivers: RefCell::new(receivers),
            requested: Default::default(),
        };
        (senders, steps)
    }

    fn poll<F: Future + Unpin>(future: &mut F) -> Poll<F::Output> {
        future.poll_unpin(&mut Context::from_waker(noop_waker_ref()))
    }

    #[test]
    fn next_step_waits_for_the_previous_one() {
        let (senders, steps) = pending_steps(3);
        let mut senders = senders.into_iter();
        let mut looping = Box::pin(loop_range(0, 3, |i| steps.step(i as usize)));

        assert!(poll(&mut looping).is_pending());
        assert_eq!(steps.requested(), [0]);
        assert!(poll(&mut looping).is_pending());
        assert_eq!(steps.requested(), [0]);

        senders.next().unwrap().send(Ok(0)).unwrap();
        assert!(poll(&mut looping).is_pending());
        assert_eq!(steps.requested(), [0, 1]);

        senders.next().unwrap().send(Ok(0)).unwrap();
        assert!(poll(&mut looping).is_pending());
        assert_eq!(steps.requested(), [0, 1, 2]);

        // Completes only once the last step did
        assert!(poll(&mut looping).is_pending());
        senders.next().unwrap().send(Ok(0)).unwrap();
        assert!(matches!(poll(&mut looping), Poll::Ready(Ok(()))));
        assert_eq!(steps.requested(), [0, 1, 2]);
    }

    #[test]
    fn pending_failure_stops_the_loop() {
        let (senders, steps) = pending_steps(4);
        let mut senders = senders.into_iter();
        let mut looping = Box::pin(loop_iter(0..4, |i| steps.step(i)));

        assert!(poll(&mut looping).is_pending());
        senders.next().unwrap().send(Ok(0)).unwrap();
        assert!(poll(&mut looping).is_pending());
        senders
            .next()
            .unwrap()
            .send(Err(Error::new(StepFailure(1))))
            .unwrap();
        let Poll::Ready(Err(error)) = poll(&mut looping) else {
            panic!("Expected the loop to fail");
        };
        assert_eq!(error.downcast_ref::<StepFailure>(), Some(&StepFailure(1)));
        assert_eq!(steps.requested(), [0, 1]);
    }

    #[test]
    fn pending_total() {
        let (senders, steps) = pending_steps(3);
        let mut total = Box::pin(total_range(0, 3, |i| steps.step(i as usize)));
        for (i, sender) in senders.into_iter().enumerate() {
            assert!(poll(&mut total).is_pending());
            assert_eq!(steps.requested().len(), i + 1);
            sender.send(Ok(10 * (i as i32 + 1))).unwrap();
        }
        assert!(matches!(poll(&mut total), Poll::Ready(Ok(60))));
    }

    #[test]
    fn pending_single_application() {
        let (senders, steps) = pending_steps(1);
        let mut applied = Box::pin(apply_to_all(|i: &usize| steps.step(*i), &[0]));
        assert!(poll(&mut applied).is_pending());
        assert_eq!(steps.requested(), [0]);
        senders.into_iter().next().unwrap().send(Ok(5)).unwrap();
        assert!(matches!(poll(&mut applied), Poll::Ready(Ok(()))));
        assert_eq!(steps.requested(), [0]);
    }

    #[test]
    fn dropped_step_is_a_failure() {
        let (senders, steps) = pending_steps(2);
        let mut looping = Box::pin(loop_iter([0, 1], |i| steps.step(i)));
        assert!(poll(&mut looping).is_pending());
        drop(senders);
        let Poll::Ready(Err(error)) = poll(&mut looping) else {
            panic!("Expected the loop to fail");
        };
        assert!(error.downcast_ref::<oneshot::Canceled>().is_some());
        assert_eq!(steps.requested(), [0]);
    }
}
