use crate::parallel;
use imgsim_image::{ensure_same_size, Image, ImageError};

/// Define the RGB weights for the grayscale conversion.
const RW: f64 = 0.299;
const GW: f64 = 0.587;
const BW: f64 = 0.114;

/// The same weights in 14-bit fixed point. They sum to `1 << GRAY_SHIFT`.
const GRAY_SHIFT: u32 = 14;
const RW_FIXED: u32 = 4899;
const GW_FIXED: u32 = 9617;
const BW_FIXED: u32 = 1868;

/// Convert an RGB image to grayscale using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output grayscale image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use imgsim_image::{Image, ImageSize};
/// use imgsim_imgproc::color::gray_from_rgb;
///
/// let image = Image::<f32, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut gray = Image::<f32, 1>::from_size_val(image.size(), 0.0).unwrap();
///
/// gray_from_rgb(&image, &mut gray).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert_eq!(gray.size().width, 4);
/// assert_eq!(gray.size().height, 5);
/// ```
pub fn gray_from_rgb<T>(src: &Image<T, 3>, dst: &mut Image<T, 1>) -> Result<(), ImageError>
where
    T: Send + Sync + num_traits::Float,
{
    ensure_same_size(src, dst)?;

    let cast_err = || ImageError::CastError(std::any::type_name::<T>().into());
    let rw = T::from(RW).ok_or_else(cast_err)?;
    let gw = T::from(GW).ok_or_else(cast_err)?;
    let bw = T::from(BW).ok_or_else(cast_err)?;

    // parallelize the grayscale conversion by rows
    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let r = src_pixel[0];
        let g = src_pixel[1];
        let b = src_pixel[2];
        dst_pixel[0] = rw * r + gw * g + bw * b;
    });

    Ok(())
}

/// Convert an RGB8 image to grayscale.
///
/// Uses the weights of [`gray_from_rgb`] in 14-bit fixed point with the result
/// rounded half up, so a pure red pixel `(255, 0, 0)` maps to `76`.
///
/// # Arguments
///
/// * `src` - The input RGB8 image.
/// * `dst` - The output grayscale image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use imgsim_image::Image;
/// use imgsim_imgproc::color::gray_from_rgb_u8;
///
/// let red = Image::<u8, 3>::new([1, 1].into(), vec![255, 0, 0]).unwrap();
/// let mut gray = Image::<u8, 1>::from_size_val(red.size(), 0).unwrap();
///
/// gray_from_rgb_u8(&red, &mut gray).unwrap();
/// assert_eq!(gray.as_slice(), &[76]);
/// ```
pub fn gray_from_rgb_u8(src: &Image<u8, 3>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    ensure_same_size(src, dst)?;

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = luma_u8(src_pixel[0], src_pixel[1], src_pixel[2]);
    });

    Ok(())
}

/// Convert an RGBA8 image to grayscale, ignoring the alpha channel.
///
/// # Arguments
///
/// * `src` - The input RGBA8 image.
/// * `dst` - The output grayscale image.
pub fn gray_from_rgba_u8(src: &Image<u8, 4>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    ensure_same_size(src, dst)?;

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = luma_u8(src_pixel[0], src_pixel[1], src_pixel[2]);
    });

    Ok(())
}

#[inline]
fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let acc = r as u32 * RW_FIXED + g as u32 * GW_FIXED + b as u32 * BW_FIXED;
    ((acc + (1 << (GRAY_SHIFT - 1))) >> GRAY_SHIFT) as u8
}
