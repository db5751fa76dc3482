use crate::color::gray_from_rgb_u8;
use imgsim_image::{ensure_same_size, Image, ImageError};

use super::{mse, psnr, rmse, ssim_with_options, SsimOptions};

/// The similarity metrics between a rendered image and its reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityReport {
    /// Peak signal-to-noise ratio of the color images, in dB.
    pub psnr: f64,
    /// Mean structural similarity of the grayscale images.
    pub ssim: f64,
    /// Mean squared error of the color images.
    pub mse: f64,
    /// Root mean squared error of the grayscale images.
    pub rmse: f64,
}

/// Evaluate two RGB8 images with the default SSIM parameters.
///
/// See [`evaluate_with_options`].
///
/// # Example
///
/// ```
/// use imgsim_image::Image;
/// use imgsim_imgproc::metrics::evaluate;
///
/// let image = Image::<u8, 3>::from_size_val([16, 16].into(), 128).unwrap();
/// let report = evaluate(&image, &image).unwrap();
///
/// assert_eq!(report.psnr, f64::INFINITY);
/// assert_eq!(report.ssim, 1.0);
/// assert_eq!(report.rmse, 0.0);
/// ```
pub fn evaluate(image1: &Image<u8, 3>, image2: &Image<u8, 3>) -> Result<QualityReport, ImageError> {
    evaluate_with_options(image1, image2, &SsimOptions::default())
}

/// Evaluate two RGB8 images.
///
/// PSNR and MSE are measured on the color images. Both images are then
/// converted to grayscale and SSIM and RMSE are measured on the luminance.
///
/// # Errors
///
/// Returns [`ImageError::ShapeMismatch`] before any work is done if the
/// images differ in size, and [`ImageError::InvalidWindowSize`] if they are
/// too small for the SSIM window.
pub fn evaluate_with_options(
    image1: &Image<u8, 3>,
    image2: &Image<u8, 3>,
    ssim_options: &SsimOptions,
) -> Result<QualityReport, ImageError> {
    ensure_same_size(image1, image2)?;

    let psnr = psnr(image1, image2)?;
    let mse = mse(image1, image2)?;

    let mut gray1 = Image::<u8, 1>::from_size_val(image1.size(), 0)?;
    let mut gray2 = Image::<u8, 1>::from_size_val(image2.size(), 0)?;
    gray_from_rgb_u8(image1, &mut gray1)?;
    gray_from_rgb_u8(image2, &mut gray2)?;

    let ssim = ssim_with_options(&gray1, &gray2, ssim_options)?;
    let rmse = rmse(&gray1, &gray2)?;

    log::debug!(
        "evaluated {} images: psnr {}, ssim {}, mse {}, rmse {}",
        image1.size(),
        psnr,
        ssim,
        mse,
        rmse
    );

    Ok(QualityReport {
        psnr,
        ssim,
        mse,
        rmse,
    })
}
