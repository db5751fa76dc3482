/// Create a box (uniform) kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
///
/// # Returns
///
/// A vector of the kernel, every tap equal to `1 / kernel_size`.
pub fn box_kernel_1d(kernel_size: usize) -> Vec<f64> {
    vec![1.0 / kernel_size as f64; kernel_size]
}

/// Create a gaussian kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Returns
///
/// A vector of the kernel, normalized to sum to one.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f64) -> Vec<f64> {
    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = (kernel_size as f64 - 1.0) / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f64 - mean;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f64>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}

/// Size of a gaussian kernel that keeps `truncate` standard deviations on each side.
///
/// The radius is `truncate * sigma` rounded to the nearest integer, so
/// `sigma = 1.5` with `truncate = 3.5` gives an 11 tap kernel.
///
/// Returns `None` when the size does not fit in a `usize`.
pub fn gaussian_kernel_size(sigma: f64, truncate: f64) -> Option<usize> {
    let radius = (truncate * sigma + 0.5).floor();
    if !(radius >= 0.0 && radius < usize::MAX as f64) {
        return None;
    }
    (radius as usize).checked_mul(2)?.checked_add(1)
}
