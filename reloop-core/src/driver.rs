use crate::{Result, Trampoline};
use futures::future::FusedFuture;
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

/// Repeatedly runs `step` until it resolves to `false`.
///
/// `step` is only invoked once the future it returned previously has resolved to `Ok(true)`.
/// The first `Err` terminates the loop with that error.
///
/// Polling goes through a [`Trampoline`]: a step that is already complete when polled does not
/// nest another `poll` call on the native stack, so an arbitrary long run of synchronously
/// completed steps executes in constant stack space.
pub fn async_while<S, F>(step: S) -> AsyncWhile<S, F>
where
    S: FnMut() -> F,
    F: Future<Output = Result<bool>>,
{
    AsyncWhile {
        step,
        current: None,
        finished: false,
    }
}

/// Future returned by [`async_while`].
pub struct AsyncWhile<S, F> {
    step: S,
    current: Option<Pin<Box<F>>>,
    finished: bool,
}

// The step future is boxed, nothing is pinned in place.
impl<S, F> Unpin for AsyncWhile<S, F> {}

impl<S, F> AsyncWhile<S, F>
where
    S: FnMut() -> F,
    F: Future<Output = Result<bool>>,
{
    fn advance<'a>(&'a mut self, cx: &'a mut Context<'_>) -> Trampoline<'a, Poll<Result<()>>> {
        let current = self.current.get_or_insert_with(|| Box::pin((self.step)()));
        match current.as_mut().poll(cx) {
            Poll::Pending => Trampoline::done(Poll::Pending),
            Poll::Ready(Ok(true)) => {
                self.current = None;
                Trampoline::more(move || self.advance(cx))
            }
            Poll::Ready(result) => {
                self.current = None;
                self.finished = true;
                Trampoline::done(Poll::Ready(result.map(|_| ())))
            }
        }
    }
}

impl<S, F> Future for AsyncWhile<S, F>
where
    S: FnMut() -> F,
    F: Future<Output = Result<bool>>,
{
    type Output = Result<()>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if this.finished {
            panic!("`AsyncWhile` polled after completion");
        }
        this.advance(cx).result()
    }
}

impl<S, F> FusedFuture for AsyncWhile<S, F>
where
    S: FnMut() -> F,
    F: Future<Output = Result<bool>>,
{
    fn is_terminated(&self) -> bool {
        self.finished
    }
}

/// Continuation adapter mapping any successful step into "keep going".
pub(crate) fn always_continue<R>(_ignored: R) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use futures::{FutureExt, future, task::noop_waker_ref};
    use std::task::Context;

    #[test]
    fn stops_on_false() {
        let mut calls = 0;
        let result = async_while(|| {
            calls += 1;
            future::ok::<_, Error>(calls < 5)
        })
        .now_or_never()
        .expect("Expected the loop to complete synchronously");
        assert!(result.is_ok());
        assert_eq!(calls, 5);
    }

    #[test]
    fn stops_on_error() {
        let mut calls = 0;
        let result = async_while(|| {
            calls += 1;
            if calls == 3 {
                future::err(Error::msg("third step failed"))
            } else {
                future::ok(true)
            }
        })
        .now_or_never()
        .expect("Expected the loop to complete synchronously");
        assert_eq!(result.unwrap_err().to_string(), "third step failed");
        assert_eq!(calls, 3);
    }

    #[test]
    fn terminated_after_completion() {
        let mut looping = async_while(|| future::ok::<_, Error>(false));
        assert!(!looping.is_terminated());
        let mut cx = Context::from_waker(noop_waker_ref());
        assert!(matches!(looping.poll_unpin(&mut cx), Poll::Ready(Ok(()))));
        assert!(looping.is_terminated());
    }

    #[test]
    fn pending_step_is_not_requested_again() {
        let (tx, rx) = futures::channel::oneshot::channel::<bool>();
        let mut rx = Some(rx);
        let mut calls = 0;
        let mut looping = async_while(|| {
            calls += 1;
            match rx.take() {
                Some(rx) => future::Either::Left(rx.map(|v| v.map_err(Error::new))),
                None => future::Either::Right(future::ok(false)),
            }
        });
        let mut cx = Context::from_waker(noop_waker_ref());
        assert!(looping.poll_unpin(&mut cx).is_pending());
        assert!(looping.poll_unpin(&mut cx).is_pending());
        tx.send(true).unwrap();
        assert!(matches!(looping.poll_unpin(&mut cx), Poll::Ready(Ok(()))));
        drop(looping);
        assert_eq!(calls, 2);
    }
}
