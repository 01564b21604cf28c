use crate::{Result, future::Either, loop_iter, loop_range, zero_future};
use futures::TryFutureExt;
use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicI32, Ordering},
    },
};

/// Running sum shared between the steps of a fold and its final result.
///
/// Wraps on overflow, the way 32 bits two's complement addition does.
#[derive(Default, Clone)]
struct Accumulator(Arc<AtomicI32>);

impl Accumulator {
    fn add(&self, value: i32) {
        self.0.fetch_add(value, Ordering::Relaxed);
    }

    fn get(&self) -> i32 {
        self.0.load(Ordering::Relaxed)
    }

    fn adding<F>(&self, step: F) -> impl Future<Output = Result<()>> + use<F>
    where
        F: Future<Output = Result<i32>>,
    {
        let total = self.clone();
        step.map_ok(move |value| total.add(value))
    }
}

/// Equivalent to:
/// ```text
/// let mut total = 0;
/// for i in start..end {
///     total += consumer(i).await?;
/// }
/// ```
pub fn total_range<G, F>(start: i32, end: i32, mut consumer: G) -> impl Future<Output = Result<i32>>
where
    G: FnMut(i32) -> F,
    F: Future<Output = Result<i32>>,
{
    if start >= end {
        return Either::Left(zero_future());
    }
    let total = Accumulator::default();
    let accumulator = total.clone();
    Either::Right(
        loop_range(start, end, move |i| accumulator.adding(consumer(i)))
            .map_ok(move |()| total.get()),
    )
}

/// Equivalent to:
/// ```text
/// let mut total = 0;
/// for value in iterable {
///     total += consumer(value).await?;
/// }
/// ```
pub fn total_iter<It, G, F>(iterable: It, mut consumer: G) -> impl Future<Output = Result<i32>>
where
    It: IntoIterator,
    G: FnMut(It::Item) -> F,
    F: Future<Output = Result<i32>>,
{
    let mut iterator = iterable.into_iter().peekable();
    if iterator.peek().is_none() {
        return Either::Left(zero_future());
    }
    let total = Accumulator::default();
    let accumulator = total.clone();
    Either::Right(
        loop_iter(iterator, move |value| accumulator.adding(consumer(value)))
            .map_ok(move |()| total.get()),
    )
}

/// Equivalent to:
/// ```text
/// let mut total = 0;
/// for value in slice {
///     total += consumer(value).await?;
/// }
/// ```
pub fn total_slice<'a, T, G, F>(slice: &'a [T], consumer: G) -> impl Future<Output = Result<i32>>
where
    G: FnMut(&'a T) -> F,
    F: Future<Output = Result<i32>>,
{
    total_iter(slice, consumer)
}
