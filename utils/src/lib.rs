//! The inevitable catchall "utils" crate. Generally only add
//! things here that only depend on the standard library and
//! "core" crates.
//!
mod bounded;
pub use bounded::*;
mod tracing_util;
pub use tracing_util::*;
