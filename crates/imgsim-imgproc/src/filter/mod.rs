//! Filter operations
//!
//! This module provides the window filters used by the structural similarity metric.

/// Filter kernels
pub mod kernels;

/// Separable filter operations
mod separable_filter;
pub use separable_filter::*;
