//! # reloop
//!
//! Sequential iteration over asynchronous steps that does not grow the native stack.
//!
//! Every combinator returns a single future that drives the source one element at a time:
//! the step for the next element is requested only once the previous one has completed
//! successfully, the first failure (of a step or of a filter) stops the iteration and becomes
//! the result.
//!
//! ```rust
//! use reloop::{future, loop_range, total_iter};
//!
//! # futures::executor::block_on(async {
//! let mut seen = Vec::new();
//! loop_range(0, 3, |i| {
//!     seen.push(i);
//!     future::ok::<_, reloop::Error>(())
//! })
//! .await
//! .unwrap();
//! assert_eq!(seen, [0, 1, 2]);
//!
//! let total = total_iter([1, 2, 3, 4], |v| future::ok::<_, reloop::Error>(v)).await.unwrap();
//! assert_eq!(total, 10);
//! # });
//! ```
pub use reloop_core::*;
