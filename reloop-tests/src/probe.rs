use crate::StepFailure;
use futures::{
    FutureExt,
    future::{self, BoxFuture},
};
use reloop::{Error, Result};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// How the steps handed to the loops behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Steps are already complete when the loop requests them.
    Completed,
    /// Steps yield to the scheduler once before completing.
    Suspending,
}

#[derive(Default)]
struct ProbeState {
    invoked: AtomicUsize,
    completed: AtomicUsize,
    in_flight: AtomicUsize,
    overlapping: AtomicUsize,
}

/// Produces steps and keeps track of how they were driven.
#[derive(Default, Clone)]
pub struct Probe {
    state: Arc<ProbeState>,
}

impl Probe {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn step<T: Send + 'static>(&self, flavor: Flavor, value: T) -> BoxFuture<'static, Result<T>> {
        self.run(flavor, Ok(value))
    }

    pub fn failing<T: Send + 'static>(
        &self,
        flavor: Flavor,
        failure: StepFailure,
    ) -> BoxFuture<'static, Result<T>> {
        self.run(flavor, Err(Error::new(failure)))
    }

    fn run<T: Send + 'static>(&self, flavor: Flavor, outcome: Result<T>) -> BoxFuture<'static, Result<T>> {
        let state = self.state.clone();
        state.invoked.fetch_add(1, Ordering::SeqCst);
        if state.in_flight.fetch_add(1, Ordering::SeqCst) > 0 {
            state.overlapping.fetch_add(1, Ordering::SeqCst);
        }
        match flavor {
            Flavor::Completed => {
                state.in_flight.fetch_sub(1, Ordering::SeqCst);
                state.completed.fetch_add(1, Ordering::SeqCst);
                future::ready(outcome).boxed()
            }
            Flavor::Suspending => async move {
                tokio::task::yield_now().await;
                state.in_flight.fetch_sub(1, Ordering::SeqCst);
                state.completed.fetch_add(1, Ordering::SeqCst);
                outcome
            }
            .boxed(),
        }
    }

    pub fn invoked(&self) -> usize {
        self.state.invoked.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.state.completed.load(Ordering::SeqCst)
    }

    /// Every step completed before the next one was requested.
    pub fn assert_sequential(&self) {
        assert_eq!(
            self.state.overlapping.load(Ordering::SeqCst),
            0,
            "A step was requested while another one was still running"
        );
        assert_eq!(
            self.state.in_flight.load(Ordering::SeqCst),
            0,
            "A step was still running when the loop completed"
        );
    }
}
