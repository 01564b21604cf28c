use crate::{Result, future::Either, loop_slice, void_future, void_future_ignoring};
use futures::TryFutureExt;
use std::future::Future;

/// Apply `op` to each one of `elements`, in order.
///
/// The common cases of no elements and a single element skip the loop machinery entirely.
///
/// ```rust
/// # use reloop_core::{apply_to_all, future};
/// # use std::fmt::Display;
/// # futures::executor::block_on(async {
/// let elements: [&dyn Display; 2] = [&1, &"two"];
/// let mut printed = Vec::new();
/// apply_to_all(
///     |value| {
///         printed.push(value.to_string());
///         future::ok::<_, reloop_core::Error>(())
///     },
///     &elements,
/// )
/// .await
/// .unwrap();
/// assert_eq!(printed, ["1", "two"]);
/// # });
/// ```
pub fn apply_to_all<'a, T, G, F, R>(mut op: G, elements: &'a [T]) -> impl Future<Output = Result<()>>
where
    G: FnMut(&'a T) -> F,
    F: Future<Output = Result<R>>,
{
    match elements {
        [] => Either::Left(void_future()),
        [single] => Either::Right(Either::Left(op(single).and_then(void_future_ignoring))),
        _ => Either::Right(Either::Right(loop_slice(elements, op))),
    }
}
