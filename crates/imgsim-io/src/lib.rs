#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`](error::IoError) variants for file access and
/// decoding/encoding failures.
pub mod error;

/// High-level image reading functions.
///
/// Reads any format supported by the `image` crate.
/// See [`functional::read_image_any_rgb8`] for automatic format detection.
pub mod functional;

/// PNG image encoding and decoding.
///
/// Read and write 8 bit PNG images with the `png` crate.
pub mod png;

pub use error::IoError;
