mod apply;
mod failures;
mod loops;
mod probe;
#[cfg(not(feature = "disable-stack-depth"))]
mod stack_depth;
mod totals;

pub use probe::*;

use crate::{
    apply::apply,
    failures::{filter_failures, step_failures},
    loops::{empty_sources, index_policy, iterator_loops, range_loops, slice_loops},
    totals::totals,
};
use log::LevelFilter;
use std::{env, error, fmt};

#[cfg(not(feature = "disable-stack-depth"))]
use stack_depth::stack_depth;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Runs the whole suite with steps of the given flavor.
pub async fn execute_tests(flavor: Flavor) {
    iterator_loops(flavor).await;
    slice_loops(flavor).await;
    range_loops(flavor).await;
    empty_sources(flavor).await;
    index_policy(flavor).await;
    totals(flavor).await;
    apply(flavor).await;
    step_failures(flavor).await;
    filter_failures(flavor).await;
    #[cfg(not(feature = "disable-stack-depth"))]
    stack_depth(flavor).await;
}

/// Error produced by the steps that are told to fail, carries the value of the failing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepFailure(pub i64);

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} failed", self.0)
    }
}

impl error::Error for StepFailure {}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}
