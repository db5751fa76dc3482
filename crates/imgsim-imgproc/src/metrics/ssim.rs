use rayon::prelude::*;

use crate::filter::{kernels, separable_filter, BorderMode};
use crate::parallel;
use imgsim_image::{ensure_same_size, Image, ImageError, PixelDtype};

/// Default luminance stabilization factor.
pub const K1: f64 = 0.01;

/// Default contrast stabilization factor.
pub const K2: f64 = 0.03;

// number of standard deviations kept on each side of a gaussian window
const GAUSSIAN_TRUNCATE: f64 = 3.5;

/// The sliding window used to gather local statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SsimWindow {
    /// A square window of the given side where every pixel has the same weight.
    Uniform(usize),
    /// A gaussian weighted window truncated at 3.5 standard deviations.
    Gaussian {
        /// Standard deviation of the gaussian in pixels.
        sigma: f64,
    },
}

impl SsimWindow {
    /// Side of the window in pixels.
    ///
    /// A gaussian with a non positive or non finite sigma, or one too wide to
    /// be addressed, has size zero.
    pub fn size(&self) -> usize {
        match *self {
            SsimWindow::Uniform(size) => size,
            SsimWindow::Gaussian { sigma } if sigma.is_finite() && sigma > 0.0 => {
                kernels::gaussian_kernel_size(sigma, GAUSSIAN_TRUNCATE).unwrap_or(0)
            }
            SsimWindow::Gaussian { .. } => 0,
        }
    }

    fn kernel(&self) -> Vec<f64> {
        match *self {
            SsimWindow::Uniform(size) => kernels::box_kernel_1d(size),
            SsimWindow::Gaussian { sigma } => kernels::gaussian_kernel_1d(self.size(), sigma),
        }
    }
}

/// Parameters of the structural similarity index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SsimOptions {
    /// The sliding window.
    pub window: SsimWindow,
    /// Luminance stabilization factor, `C1 = (k1 * L)^2`.
    pub k1: f64,
    /// Contrast stabilization factor, `C2 = (k2 * L)^2`.
    pub k2: f64,
    /// Dynamic range `L` of the samples. `None` uses the range of the sample type.
    pub data_range: Option<f64>,
    /// Normalize variances and covariance by `N - 1` instead of `N`.
    pub sample_covariance: bool,
}

impl Default for SsimOptions {
    /// A 7x7 uniform window with sample covariance.
    fn default() -> Self {
        Self {
            window: SsimWindow::Uniform(7),
            k1: K1,
            k2: K2,
            data_range: None,
            sample_covariance: true,
        }
    }
}

impl SsimOptions {
    /// The formulation of Wang et al.: an 11x11 gaussian window with sigma 1.5
    /// and population covariance.
    pub fn gaussian() -> Self {
        Self {
            window: SsimWindow::Gaussian { sigma: 1.5 },
            sample_covariance: false,
            ..Default::default()
        }
    }
}

/// Compute the structural similarity index (SSIM) between two grayscale images.
///
/// Uses [`SsimOptions::default`]. See [`ssim_map`] for the definition.
///
/// # Example
///
/// ```
/// use imgsim_image::Image;
/// use imgsim_imgproc::metrics::ssim;
///
/// let image = Image::<u8, 1>::from_size_val([16, 16].into(), 0).unwrap();
///
/// assert_eq!(ssim(&image, &image).unwrap(), 1.0);
/// ```
pub fn ssim<T>(image1: &Image<T, 1>, image2: &Image<T, 1>) -> Result<f64, ImageError>
where
    T: PixelDtype,
{
    ssim_with_options(image1, image2, &SsimOptions::default())
}

/// Compute the structural similarity index (SSIM) with explicit parameters.
///
/// See [`ssim_map`] for the definition.
pub fn ssim_with_options<T>(
    image1: &Image<T, 1>,
    image2: &Image<T, 1>,
    options: &SsimOptions,
) -> Result<f64, ImageError>
where
    T: PixelDtype,
{
    Ok(ssim_map(image1, image2, options)?.0)
}

/// Compute the mean structural similarity index and the per pixel SSIM map.
///
/// For every pixel the local means `ux`, `uy`, variances `vx`, `vy` and
/// covariance `vxy` are gathered over the window and combined as
///
/// $ S = \frac{(2 u_x u_y + C_1)(2 v_{xy} + C_2)}{(u_x^2 + u_y^2 + C_1)(v_x + v_y + C_2)} $
///
/// Windows near the border are completed by reflecting the image. The mean
/// only covers pixels whose window lies fully inside the image, i.e. a border
/// of `(size - 1) / 2` pixels is left out.
///
/// # Arguments
///
/// * `image1` - The first grayscale image.
/// * `image2` - The second grayscale image.
/// * `options` - The window and stabilization parameters.
///
/// # Returns
///
/// The mean SSIM in `[-1, 1]` (`1` for identical images) and the full map.
///
/// # Errors
///
/// * [`ImageError::ShapeMismatch`] if the images differ in size.
/// * [`ImageError::InvalidWindowSize`] if the window is even, smaller than 3
///   or larger than the image in either dimension.
///
/// # References
///
/// Wang, Z., Bovik, A. C., Sheikh, H. R., & Simoncelli, E. P. (2004).
/// Image quality assessment: From error visibility to structural similarity.
pub fn ssim_map<T>(
    image1: &Image<T, 1>,
    image2: &Image<T, 1>,
    options: &SsimOptions,
) -> Result<(f64, Image<f64, 1>), ImageError>
where
    T: PixelDtype,
{
    ensure_same_size(image1, image2)?;

    let size = image1.size();
    let win = options.window.size();
    if win < 3 || win % 2 == 0 || win > size.width || win > size.height {
        return Err(ImageError::InvalidWindowSize(win, size.width, size.height));
    }

    let x = to_f64(image1)?;
    let y = to_f64(image2)?;

    let mut xx = Image::from_size_val(size, 0.0)?;
    let mut yy = Image::from_size_val(size, 0.0)?;
    let mut xy = Image::from_size_val(size, 0.0)?;
    parallel::par_iter_rows_val_two(&x, &x, &mut xx, |a, b, out| *out = a * b);
    parallel::par_iter_rows_val_two(&y, &y, &mut yy, |a, b, out| *out = a * b);
    parallel::par_iter_rows_val_two(&x, &y, &mut xy, |a, b, out| *out = a * b);

    let kernel = options.window.kernel();
    let local_mean = |src: &Image<f64, 1>| -> Result<Image<f64, 1>, ImageError> {
        let mut dst = Image::from_size_val(size, 0.0)?;
        separable_filter(src, &mut dst, &kernel, &kernel, BorderMode::Reflect)?;
        Ok(dst)
    };

    let ux = local_mean(&x)?;
    let uy = local_mean(&y)?;
    let uxx = local_mean(&xx)?;
    let uyy = local_mean(&yy)?;
    let uxy = local_mean(&xy)?;

    let np = (win * win) as f64;
    let cov_norm = if options.sample_covariance {
        np / (np - 1.0)
    } else {
        1.0
    };

    let data_range = options.data_range.unwrap_or(T::DATA_RANGE);
    let c1 = (options.k1 * data_range).powi(2);
    let c2 = (options.k2 * data_range).powi(2);

    log::debug!(
        "ssim: {} image, {}x{} window, range {}, c1 {}, c2 {}",
        size,
        win,
        win,
        data_range,
        c1,
        c2
    );

    let (ux, uy) = (ux.as_slice(), uy.as_slice());
    let (uxx, uyy, uxy) = (uxx.as_slice(), uyy.as_slice(), uxy.as_slice());

    let mut map = vec![0.0f64; x.numel()];
    map.par_iter_mut().enumerate().for_each(|(i, s)| {
        let vx = cov_norm * (uxx[i] - ux[i] * ux[i]);
        let vy = cov_norm * (uyy[i] - uy[i] * uy[i]);
        let vxy = cov_norm * (uxy[i] - ux[i] * uy[i]);

        let a1 = 2.0 * ux[i] * uy[i] + c1;
        let a2 = 2.0 * vxy + c2;
        let b1 = ux[i] * ux[i] + uy[i] * uy[i] + c1;
        let b2 = vx + vy + c2;

        *s = (a1 * a2) / (b1 * b2);
    });

    let pad = (win - 1) / 2;
    let (w, h) = (size.width, size.height);
    let sum = (pad..h - pad)
        .map(|r| map[r * w + pad..r * w + w - pad].iter().sum::<f64>())
        .sum::<f64>();
    let mean = sum / ((h - 2 * pad) * (w - 2 * pad)) as f64;

    Ok((mean, Image::new(size, map)?))
}

fn to_f64<T: PixelDtype>(image: &Image<T, 1>) -> Result<Image<f64, 1>, ImageError> {
    let data = image
        .as_slice()
        .iter()
        .map(|&v| Into::<f64>::into(v))
        .collect();
    Image::new(image.size(), data)
}
