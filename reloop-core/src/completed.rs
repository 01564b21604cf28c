use crate::{Error, Result};
use futures::future::{self, FusedFuture, Ready};
use std::{
    fmt::{self, Debug},
    future::Future,
    marker::PhantomData,
    pin::Pin,
    task::{Context, Poll},
};

/// A future that is already complete with `value`.
///
/// Polling never consumes the value: it resolves to a clone of it every time, which is what
/// allows the shared instances below to be handed out as plain copies.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Completed<T>(T);

impl<T> Completed<T> {
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Clone> Future for Completed<T> {
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        Poll::Ready(Ok(self.0.clone()))
    }
}

impl<T: Clone> FusedFuture for Completed<T> {
    fn is_terminated(&self) -> bool {
        false
    }
}

/// Completed with no value.
pub static VOID: Completed<()> = Completed::new(());
/// Completed with `0`.
pub static ZERO: Completed<i32> = Completed::new(0);
/// Completed with `true`.
pub static TRUE: Completed<bool> = Completed::new(true);
/// Completed with `false`.
pub static FALSE: Completed<bool> = Completed::new(false);

pub fn void_future() -> Completed<()> {
    VOID
}

/// Continuation adapter: discards whatever it receives and continues with [`VOID`].
pub fn void_future_ignoring<T>(_ignore: T) -> Completed<()> {
    VOID
}

pub fn zero_future() -> Completed<i32> {
    ZERO
}

pub fn true_future() -> Completed<bool> {
    TRUE
}

pub fn false_future() -> Completed<bool> {
    FALSE
}

pub fn completed_future<T>(value: T) -> Completed<T> {
    Completed::new(value)
}

pub fn failed_future<T>(error: impl Into<Error>) -> Ready<Result<T>> {
    future::err(error.into())
}

/// Typed "null": a zero sized future resolving to `Ok(None)` for any `T`.
pub struct Null<T>(PhantomData<fn() -> T>);

pub fn null_future<T>() -> Null<T> {
    Null(PhantomData)
}

impl<T> Future for Null<T> {
    type Output = Result<Option<T>>;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        Poll::Ready(Ok(None))
    }
}

impl<T> Clone for Null<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Null<T> {}

impl<T> Default for Null<T> {
    fn default() -> Self {
        null_future()
    }
}

impl<T> PartialEq for Null<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Null<T> {}

impl<T> Debug for Null<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Null<{}>", std::any::type_name::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[test]
    fn completed_polls_repeatedly() {
        let mut future = completed_future(7);
        assert_eq!((&mut future).now_or_never().unwrap().unwrap(), 7);
        assert_eq!((&mut future).now_or_never().unwrap().unwrap(), 7);
    }

    #[test]
    fn null_is_zero_sized() {
        assert_eq!(std::mem::size_of::<Null<String>>(), 0);
        assert_eq!(std::mem::size_of::<Completed<()>>(), 0);
        assert_eq!(null_future::<String>().now_or_never().unwrap().unwrap(), None);
    }
}
