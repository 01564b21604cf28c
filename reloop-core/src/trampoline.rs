/// Deferred recursion.
///
/// A computation that would naturally recurse ("compute something, then call
/// yourself on a smaller problem") returns `More` with the recursive call
/// wrapped in a closure instead of performing it. [`Trampoline::result`] then
/// evaluates the chain with a plain loop, so the native stack depth does not
/// depend on the logical recursion depth.
///
/// ```rust
/// use reloop_core::Trampoline;
///
/// fn count_down(n: u64, acc: u64) -> Trampoline<'static, u64> {
///     if n == 0 {
///         Trampoline::done(acc)
///     } else {
///         Trampoline::more(move || count_down(n - 1, acc + n))
///     }
/// }
/// assert_eq!(count_down(1_000_000, 0).result(), 500_000_500_000);
/// ```
pub enum Trampoline<'a, T> {
    /// Final value.
    Done(T),
    /// More work: evaluate the closure to get the next node.
    More(Box<dyn FnOnce() -> Trampoline<'a, T> + 'a>),
    /// Evaluate the first trampoline, then feed its value to the continuation.
    AndThen(
        Box<Trampoline<'a, T>>,
        Box<dyn FnOnce(T) -> Trampoline<'a, T> + 'a>,
    ),
}

impl<'a, T> Trampoline<'a, T> {
    pub fn done(value: T) -> Self {
        Self::Done(value)
    }

    pub fn more(next: impl FnOnce() -> Trampoline<'a, T> + 'a) -> Self {
        Self::More(Box::new(next))
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Done(..))
    }

    /// Evaluate a single step, a completed node jumps to itself.
    pub fn jump(self) -> Self
    where
        T: 'a,
    {
        match self {
            Self::More(next) => next(),
            Self::AndThen(first, then) => match *first {
                Self::Done(value) => then(value),
                Self::More(next) => Self::AndThen(Box::new(next()), then),
                // Reassociate so the nesting never grows on the left
                Self::AndThen(inner, inner_then) => Self::AndThen(
                    inner,
                    Box::new(move |value| Self::AndThen(Box::new(inner_then(value)), then)),
                ),
            },
            done => done,
        }
    }

    /// Drive the trampoline to completion and return the final value.
    ///
    /// Pending continuations are kept on the heap, nested [`Trampoline::and_then`] and
    /// [`Trampoline::map`] calls do not consume native stack either.
    pub fn result(self) -> T {
        let mut current = self;
        let mut continuations: Vec<Box<dyn FnOnce(T) -> Trampoline<'a, T> + 'a>> = Vec::new();
        loop {
            match current {
                Self::Done(value) => match continuations.pop() {
                    Some(then) => current = then(value),
                    None => return value,
                },
                Self::More(next) => current = next(),
                Self::AndThen(first, then) => {
                    continuations.push(then);
                    current = *first;
                }
            }
        }
    }

    /// Continue with another trampoline built from the final value.
    pub fn and_then<F>(self, f: F) -> Self
    where
        T: 'a,
        F: FnOnce(T) -> Trampoline<'a, T> + 'a,
    {
        match self {
            Self::Done(value) => Self::more(move || f(value)),
            other => Self::AndThen(Box::new(other), Box::new(f)),
        }
    }

    pub fn map<F>(self, f: F) -> Self
    where
        T: 'a,
        F: FnOnce(T) -> T + 'a,
    {
        match self {
            Self::Done(value) => Self::Done(f(value)),
            other => other.and_then(move |value| Self::Done(f(value))),
        }
    }
}

impl<'a, T: std::fmt::Debug> std::fmt::Debug for Trampoline<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done(value) => f.debug_tuple("Done").field(value).finish(),
            Self::More(..) => f.write_str("More(..)"),
            Self::AndThen(..) => f.write_str("AndThen(..)"),
        }
    }
}
