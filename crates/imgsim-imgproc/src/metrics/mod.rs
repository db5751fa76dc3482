//! Image quality and similarity metrics.
//!
//! This module provides functions for quantitatively comparing a rendered or
//! reconstructed image against its reference.
//!
//! # Available Metrics
//!
//! - **MSE** (Mean Squared Error): Average squared difference between samples
//! - **RMSE** (Root Mean Squared Error): Square root of the MSE, in sample units
//! - **PSNR** (Peak Signal-to-Noise Ratio): Quality metric in dB scale
//! - **SSIM** (Structural Similarity Index): Windowed comparison of luminance,
//!   contrast and structure on grayscale images
//!
//! All metrics fail with [`imgsim_image::ImageError::ShapeMismatch`] when the
//! two images differ in size. Channel counts are checked at compile time.
//!
//! # Examples
//!
//! ```
//! use imgsim_image::Image;
//! use imgsim_imgproc::metrics;
//!
//! let reference = Image::<u8, 3>::from_size_val([32, 32].into(), 120).unwrap();
//! let rendered = Image::<u8, 3>::from_size_val([32, 32].into(), 125).unwrap();
//!
//! let report = metrics::evaluate(&reference, &rendered).unwrap();
//! assert_eq!(report.mse, 25.0);
//! assert!(report.psnr > 34.0);
//! ```

mod mse;
mod report;
mod ssim;

pub use mse::{mse, psnr, psnr_with_range, rmse};
pub use report::{evaluate, evaluate_with_options, QualityReport};
pub use ssim::{ssim, ssim_map, ssim_with_options, SsimOptions, SsimWindow, K1, K2};
