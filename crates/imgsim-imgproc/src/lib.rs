#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image filtering module.
pub mod filter;

/// image similarity metrics module.
pub mod metrics;

/// module containing parallization utilities.
pub mod parallel;
