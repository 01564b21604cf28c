use crate::{Result, driver::always_continue};
use futures::{
    TryFutureExt,
    future::{self, Either, MapOk, Ready},
};
use std::future::Future;

/// Next step requested by the driver: either the consumer's future mapped to "continue", or an
/// already completed decision (source exhausted, or the filter failed).
pub(crate) type Advance<F, R> = Either<MapOk<F, fn(R) -> bool>, Ready<Result<bool>>>;

fn visit<F, R>(step: F) -> Advance<F, R>
where
    F: Future<Output = Result<R>>,
{
    Either::Left(step.map_ok(always_continue::<R> as fn(R) -> bool))
}

fn exhausted<F, R>() -> Advance<F, R> {
    Either::Right(future::ok(false))
}

/// Position of a loop over an iterator.
///
/// The index is the scan position: it advances for every element pulled from the iterator,
/// including the ones rejected by the filter.
pub(crate) struct IteratorCursor<I, P, G> {
    iterator: I,
    filter: P,
    consumer: G,
    index: usize,
}

impl<I, P, G, F, R> IteratorCursor<I, P, G>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> Result<bool>,
    G: FnMut(I::Item, usize) -> F,
    F: Future<Output = Result<R>>,
{
    pub(crate) fn new(iterator: I, filter: P, consumer: G) -> Self {
        Self {
            iterator,
            filter,
            consumer,
            index: 0,
        }
    }

    pub(crate) fn next(&mut self) -> Advance<F, R> {
        while let Some(entry) = self.iterator.next() {
            let index = self.index;
            self.index += 1;
            match (self.filter)(&entry, index) {
                Ok(true) => return visit((self.consumer)(entry, index)),
                Ok(false) => continue,
                Err(e) => return Either::Right(future::err(e)),
            }
        }
        exhausted()
    }
}

/// Position of a loop over the half open range `[current, end)`.
pub(crate) struct RangeCursor<P, G> {
    current: i32,
    end: i32,
    filter: P,
    consumer: G,
}

impl<P, G, F, R> RangeCursor<P, G>
where
    P: FnMut(i32) -> Result<bool>,
    G: FnMut(i32) -> F,
    F: Future<Output = Result<R>>,
{
    pub(crate) fn new(start: i32, end: i32, filter: P, consumer: G) -> Self {
        Self {
            current: start,
            end,
            filter,
            consumer,
        }
    }

    pub(crate) fn next(&mut self) -> Advance<F, R> {
        while self.current < self.end {
            let index = self.current;
            self.current += 1;
            match (self.filter)(index) {
                Ok(true) => return visit((self.consumer)(index)),
                Ok(false) => continue,
                Err(e) => return Either::Right(future::err(e)),
            }
        }
        exhausted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use futures::FutureExt;

    #[test]
    fn range_cursor_skips_lazily() {
        let mut tested = Vec::new();
        let mut visited = Vec::new();
        let mut cursor = RangeCursor::new(
            0,
            6,
            |i| {
                tested.push(i);
                Ok(i % 3 == 0)
            },
            |i| {
                visited.push(i);
                future::ok::<_, Error>(())
            },
        );
        assert!(cursor.next().now_or_never().unwrap().unwrap());
        assert!(cursor.next().now_or_never().unwrap().unwrap());
        assert!(!cursor.next().now_or_never().unwrap().unwrap());
        drop(cursor);
        assert_eq!(tested, [0, 1, 2, 3, 4, 5]);
        assert_eq!(visited, [0, 3]);
    }

    #[test]
    fn iterator_cursor_reports_filter_failure() {
        let mut cursor = IteratorCursor::new(
            ["a", "b", "c"].into_iter(),
            |v: &&str, _| match *v {
                "b" => Err(Error::msg("cannot decide on b")),
                _ => Ok(true),
            },
            |_, _| future::ok::<_, Error>(()),
        );
        assert!(cursor.next().now_or_never().unwrap().unwrap());
        let error = cursor.next().now_or_never().unwrap().unwrap_err();
        assert_eq!(error.to_string(), "cannot decide on b");
    }
}
