use crate::{
    IteratorCursor, RangeCursor, Result, async_while, void_future,
    future::{Either, LocalBoxFuture},
};
use futures::{FutureExt, TryFutureExt};
use std::{future::Future, rc::Rc};

fn always_true<T>(_value: &T, _index: usize) -> Result<bool> {
    Ok(true)
}

fn always_true_range(_index: i32) -> Result<bool> {
    Ok(true)
}

/// Equivalent to:
/// ```text
/// for value in iterable {
///     consumer(value).await?;
/// }
/// ```
pub fn loop_iter<It, G, F, R>(iterable: It, mut consumer: G) -> impl Future<Output = Result<()>>
where
    It: IntoIterator,
    G: FnMut(It::Item) -> F,
    F: Future<Output = Result<R>>,
{
    loop_iter_filtered_indexed(iterable, always_true::<It::Item>, move |value, _| {
        consumer(value)
    })
}

/// Equivalent to:
/// ```text
/// for value in iterable {
///     if filter(&value)? {
///         consumer(value).await?;
///     }
/// }
/// ```
pub fn loop_iter_filtered<It, P, G, F, R>(
    iterable: It,
    mut filter: P,
    mut consumer: G,
) -> impl Future<Output = Result<()>>
where
    It: IntoIterator,
    P: FnMut(&It::Item) -> Result<bool>,
    G: FnMut(It::Item) -> F,
    F: Future<Output = Result<R>>,
{
    loop_iter_filtered_indexed(
        iterable,
        move |value: &It::Item, _| filter(value),
        move |value, _| consumer(value),
    )
}

/// Equivalent to:
/// ```text
/// for (index, value) in iterable.into_iter().enumerate() {
///     consumer(value, index).await?;
/// }
/// ```
pub fn loop_iter_indexed<It, G, F, R>(iterable: It, consumer: G) -> impl Future<Output = Result<()>>
where
    It: IntoIterator,
    G: FnMut(It::Item, usize) -> F,
    F: Future<Output = Result<R>>,
{
    loop_iter_filtered_indexed(iterable, always_true::<It::Item>, consumer)
}

/// Equivalent to:
/// ```text
/// for (index, value) in iterable.into_iter().enumerate() {
///     if filter(&value, index)? {
///         consumer(value, index).await?;
///     }
/// }
/// ```
///
/// The index is the position of the element in the source, elements rejected by the filter
/// still consume theirs. With a filter the consumer can therefore observe gaps in the indexes.
pub fn loop_iter_filtered_indexed<It, P, G, F, R>(
    iterable: It,
    filter: P,
    consumer: G,
) -> impl Future<Output = Result<()>>
where
    It: IntoIterator,
    P: FnMut(&It::Item, usize) -> Result<bool>,
    G: FnMut(It::Item, usize) -> F,
    F: Future<Output = Result<R>>,
{
    let mut iterator = iterable.into_iter().peekable();
    if iterator.peek().is_none() {
        return Either::Left(void_future());
    }
    let mut cursor = IteratorCursor::new(iterator, filter, consumer);
    Either::Right(async_while(move || cursor.next()))
}

/// Equivalent to:
/// ```text
/// for value in slice {
///     consumer(value).await?;
/// }
/// ```
pub fn loop_slice<'a, T, G, F, R>(slice: &'a [T], consumer: G) -> impl Future<Output = Result<()>>
where
    G: FnMut(&'a T) -> F,
    F: Future<Output = Result<R>>,
{
    loop_iter(slice, consumer)
}

/// Equivalent to:
/// ```text
/// for index in 0..slice.len() {
///     if filter(index)? {
///         consumer(&slice[index], index).await?;
///     }
/// }
/// ```
pub fn loop_slice_filtered<'a, T, P, G, F, R>(
    slice: &'a [T],
    mut filter: P,
    consumer: G,
) -> impl Future<Output = Result<()>>
where
    P: FnMut(usize) -> Result<bool>,
    G: FnMut(&'a T, usize) -> F,
    F: Future<Output = Result<R>>,
{
    loop_iter_filtered_indexed(slice, move |_: &&'a T, index| filter(index), consumer)
}

/// Equivalent to:
/// ```text
/// for i in start..end {
///     consumer(i).await?;
/// }
/// ```
pub fn loop_range<G, F, R>(start: i32, end: i32, consumer: G) -> impl Future<Output = Result<()>>
where
    G: FnMut(i32) -> F,
    F: Future<Output = Result<R>>,
{
    loop_range_filtered(start, end, always_true_range, consumer)
}

/// Equivalent to:
/// ```text
/// for i in start..end {
///     if filter(i)? {
///         consumer(i).await?;
///     }
/// }
/// ```
pub fn loop_range_filtered<P, G, F, R>(
    start: i32,
    end: i32,
    filter: P,
    consumer: G,
) -> impl Future<Output = Result<()>>
where
    P: FnMut(i32) -> Result<bool>,
    G: FnMut(i32) -> F,
    F: Future<Output = Result<R>>,
{
    if start >= end {
        return Either::Left(void_future());
    }
    let mut cursor = RangeCursor::new(start, end, filter, consumer);
    Either::Right(async_while(move || cursor.next()))
}

/// Same as [`loop_iter`] but chains one continuation per element instead of using the
/// trampolined driver.
///
/// The whole chain is built upfront and polling it descends through every link that is not
/// complete yet. That is fine for short sequences but the stack grows with the number of
/// elements, long sequences of already complete steps can overflow it.
pub fn loop_without_trampoline<'a, It, G, F, R>(
    iterable: It,
    consumer: G,
) -> LocalBoxFuture<'a, Result<()>>
where
    It: IntoIterator,
    It::Item: 'a,
    G: Fn(It::Item) -> F + 'a,
    F: Future<Output = Result<R>> + 'a,
    R: 'a,
{
    let consumer = Rc::new(consumer);
    let mut stage: LocalBoxFuture<'a, Result<()>> = void_future().boxed_local();
    for next in iterable {
        let consumer = consumer.clone();
        stage = stage
            .and_then(move |()| consumer(next).map_ok(drop))
            .boxed_local();
    }
    stage
}
