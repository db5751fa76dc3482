use imgsim_image::{ensure_same_size, Image, ImageError};
use rayon::prelude::*;

/// How samples outside the image are produced while filtering.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BorderMode {
    /// Mirror the image about its edge, repeating the edge sample (`d c b a | a b c d | d c b a`).
    #[default]
    Reflect,
    /// Treat every sample outside the image as the given value.
    Constant(f64),
}

impl BorderMode {
    // read the sample at `idx` of a line of `len` samples, resolving out of range indices
    #[inline]
    fn sample(&self, len: usize, idx: isize, get: impl Fn(usize) -> f64) -> f64 {
        if (0..len as isize).contains(&idx) {
            return get(idx as usize);
        }
        match *self {
            BorderMode::Reflect => get(reflect_index(idx, len as isize)),
            BorderMode::Constant(val) => val,
        }
    }
}

#[inline]
fn reflect_index(idx: isize, len: isize) -> usize {
    let period = 2 * len;
    let m = idx.rem_euclid(period);
    if m >= len {
        (period - 1 - m) as usize
    } else {
        m as usize
    }
}

fn check_kernel(kernel: &[f64]) -> Result<(), ImageError> {
    if kernel.is_empty() || kernel.len() % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(kernel.len()));
    }
    Ok(())
}

/// Apply a separable filter to a single channel image.
///
/// The image is first convolved along rows with `kernel_x` and the result is
/// then convolved along columns with `kernel_y`. Both kernels are centered on
/// the output pixel, so they must have an odd number of taps.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image, same size as `src`.
/// * `kernel_x` - The horizontal kernel.
/// * `kernel_y` - The vertical kernel.
/// * `border` - How to sample beyond the image edges.
///
/// # Example
///
/// ```
/// use imgsim_image::Image;
/// use imgsim_imgproc::filter::{kernels, separable_filter, BorderMode};
///
/// let src = Image::<f64, 1>::new([3, 1].into(), vec![0.0, 3.0, 6.0]).unwrap();
/// let mut dst = Image::<f64, 1>::from_size_val(src.size(), 0.0).unwrap();
///
/// let kernel = kernels::box_kernel_1d(3);
/// separable_filter(&src, &mut dst, &kernel, &[1.0], BorderMode::Reflect).unwrap();
///
/// assert!((dst.as_slice()[1] - 3.0).abs() < 1e-12);
/// ```
pub fn separable_filter(
    src: &Image<f64, 1>,
    dst: &mut Image<f64, 1>,
    kernel_x: &[f64],
    kernel_y: &[f64],
    border: BorderMode,
) -> Result<(), ImageError> {
    ensure_same_size(src, dst)?;
    check_kernel(kernel_x)?;
    check_kernel(kernel_y)?;

    let cols = src.cols();
    let rows = src.rows();
    if cols == 0 || rows == 0 {
        return Ok(());
    }

    let half_x = (kernel_x.len() / 2) as isize;
    let half_y = (kernel_y.len() / 2) as isize;

    // horizontal pass
    let mut temp = vec![0.0f64; src.numel()];
    temp.par_chunks_exact_mut(cols)
        .zip(src.as_slice().par_chunks_exact(cols))
        .for_each(|(out_row, src_row)| {
            for (c, out) in out_row.iter_mut().enumerate() {
                *out = kernel_x
                    .iter()
                    .enumerate()
                    .map(|(i, k)| {
                        let x = c as isize + i as isize - half_x;
                        k * border.sample(cols, x, |j| src_row[j])
                    })
                    .sum();
            }
        });

    // vertical pass
    let temp = &temp;
    dst.as_slice_mut()
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(r, out_row)| {
            for (c, out) in out_row.iter_mut().enumerate() {
                *out = kernel_y
                    .iter()
                    .enumerate()
                    .map(|(i, k)| {
                        let y = r as isize + i as isize - half_y;
                        k * border.sample(rows, y, |j| temp[j * cols + c])
                    })
                    .sum();
            }
        });

    Ok(())
}
