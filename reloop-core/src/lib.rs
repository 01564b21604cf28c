mod apply;
mod completed;
mod cursor;
mod driver;
mod loops;
mod rethrow;
mod total;
mod trampoline;
mod util;

pub use ::anyhow::Context;
pub use apply::*;
pub use completed::*;
use cursor::*;
pub use driver::*;
pub use loops::*;
pub use rethrow::*;
pub use total::*;
pub use trampoline::*;
pub use util::*;
pub use ::futures::future;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
