use imgsim_image::{ensure_same_size, Image, ImageError, PixelDtype};

/// Compute the mean squared error (MSE) between two images.
///
/// The MSE is defined as:
///
/// $ MSE = \frac{1}{n} \sum_{i=1}^{n} (I_1 - I_2)^2 $
///
/// where `I_1` and `I_2` are the two images and `n` is the number of samples
/// (pixels times channels). Samples are widened to `f64` before subtracting,
/// so 8 and 16 bit images never overflow.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
///
/// # Returns
///
/// The mean squared error between the two images. Two empty images have an
/// error of zero.
///
/// # Errors
///
/// Returns [`ImageError::ShapeMismatch`] if the images differ in size.
///
/// # Example
///
/// ```
/// use imgsim_image::{Image, ImageSize};
/// use imgsim_imgproc::metrics::mse;
///
/// let image1 = Image::<u8, 1>::new(
///    ImageSize {
///      width: 2,
///      height: 2,
///    },
///    vec![0, 1, 2, 3],
/// )
/// .unwrap();
///
/// let image2 = Image::<u8, 1>::new(
///    ImageSize {
///      width: 2,
///      height: 2,
///    },
///    vec![0, 3, 2, 3],
/// )
/// .unwrap();
///
/// let mse = mse(&image1, &image2).unwrap();
/// assert_eq!(mse, 1.0);
/// ```
pub fn mse<T, const C: usize>(image1: &Image<T, C>, image2: &Image<T, C>) -> Result<f64, ImageError>
where
    T: PixelDtype,
{
    ensure_same_size(image1, image2)?;

    if image1.numel() == 0 {
        return Ok(0.0);
    }

    let sum = image1
        .as_slice()
        .iter()
        .zip(image2.as_slice().iter())
        .map(|(&a, &b)| {
            let (a, b): (f64, f64) = (a.into(), b.into());
            (a - b) * (a - b)
        })
        .sum::<f64>();

    Ok(sum / image1.numel() as f64)
}

/// Compute the root mean squared error (RMSE) between two images.
///
/// This is the square root of [`mse`] and is expressed in the units of the
/// samples.
///
/// # Errors
///
/// Returns [`ImageError::ShapeMismatch`] if the images differ in size.
pub fn rmse<T, const C: usize>(image1: &Image<T, C>, image2: &Image<T, C>) -> Result<f64, ImageError>
where
    T: PixelDtype,
{
    Ok(mse(image1, image2)?.sqrt())
}

/// Compute the peak signal-to-noise ratio (PSNR) between two images.
///
/// The peak value is the dynamic range of the sample type, e.g. `255` for
/// `u8` images. See [`psnr_with_range`] for the formula.
///
/// # Example
///
/// ```
/// use imgsim_image::Image;
/// use imgsim_imgproc::metrics::psnr;
///
/// let black = Image::<u8, 3>::from_size_val([4, 4].into(), 0).unwrap();
/// let white = Image::<u8, 3>::from_size_val([4, 4].into(), 255).unwrap();
///
/// assert_eq!(psnr(&black, &white).unwrap(), 0.0);
/// assert_eq!(psnr(&black, &black).unwrap(), f64::INFINITY);
/// ```
pub fn psnr<T, const C: usize>(image1: &Image<T, C>, image2: &Image<T, C>) -> Result<f64, ImageError>
where
    T: PixelDtype,
{
    psnr_with_range(image1, image2, T::DATA_RANGE)
}

/// Compute the peak signal-to-noise ratio (PSNR) between two images.
///
/// The PSNR is defined as:
///
/// $ PSNR = 10 \log_{10} \left( \frac{MAX^2}{MSE} \right) $
///
/// where `MAX` is the maximum possible sample value and `MSE` is the mean squared error.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
/// * `max_value` - The maximum possible sample value.
///
/// # Returns
///
/// The peak signal-to-noise ratio in decibels, or `f64::INFINITY` when the
/// images are identical.
///
/// # Note
///
/// The higher the PSNR, the closer the reconstruction is to the reference.
/// Underneath, the PSNR is based on the mean squared error [mse].
pub fn psnr_with_range<T, const C: usize>(
    image1: &Image<T, C>,
    image2: &Image<T, C>,
    max_value: f64,
) -> Result<f64, ImageError>
where
    T: PixelDtype,
{
    let mse = mse(image1, image2)?;

    if mse == 0.0 {
        return Ok(f64::INFINITY);
    }

    Ok(10.0 * (max_value * max_value / mse).log10())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use imgsim_image::{Image, ImageError, ImageSize};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_image<const C: usize>(rng: &mut StdRng, size: ImageSize) -> Result<Image<u8, C>, ImageError> {
        let data = (0..size.width * size.height * C).map(|_| rng.random::<u8>()).collect();
        Image::new(size, data)
    }

    #[test]
    fn test_equal() -> Result<(), ImageError> {
        let image1 = Image::<_, 1>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0f32, 1f32, 2f32, 3f32, 4f32, 5f32],
        )?;
        let image2 = image1.clone();

        assert_eq!(super::mse(&image1, &image2)?, 0.0);
        assert_eq!(super::rmse(&image1, &image2)?, 0.0);
        assert_eq!(super::psnr(&image1, &image2)?, f64::INFINITY);

        Ok(())
    }

    #[test]
    fn test_not_equal() -> Result<(), ImageError> {
        let image1 = Image::<_, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8, 1, 2, 3],
        )?;
        let image2 = Image::<_, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8, 3, 2, 3],
        )?;
        assert_eq!(super::mse(&image1, &image2)?, 1.0);
        assert_eq!(super::rmse(&image1, &image2)?, 1.0);

        Ok(())
    }

    #[test]
    fn test_black_vs_white() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 100,
            height: 100,
        };
        let black = Image::<u8, 3>::from_size_val(size, 0)?;
        let white = Image::<u8, 3>::from_size_val(size, 255)?;

        assert_eq!(super::mse(&black, &white)?, 65025.0);
        assert_eq!(super::psnr(&black, &white)?, 0.0);
        assert_eq!(super::rmse(&black, &white)?, 255.0);

        Ok(())
    }

    #[test]
    fn test_u8_does_not_wrap() -> Result<(), ImageError> {
        // 0 - 255 must not wrap around in the sample type
        let image1 = Image::<u8, 1>::new([2, 1].into(), vec![0, 255])?;
        let image2 = Image::<u8, 1>::new([2, 1].into(), vec![255, 0])?;
        assert_eq!(super::mse(&image1, &image2)?, 65025.0);
        Ok(())
    }

    #[test]
    fn test_psnr() -> Result<(), ImageError> {
        let image1 = Image::<_, 3>::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            vec![0f32, 1f32, 2f32, 3f32, 4f32, 5f32],
        )?;
        let image2 = Image::<_, 3>::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            vec![1f32, 3f32, 2f32, 4f32, 5f32, 6f32],
        )?;
        // mse = 8 / 6, psnr = 10 * log10(100 / mse) = 10 * log10(75)
        let psnr = super::psnr_with_range(&image1, &image2, 10.0)?;
        assert_relative_eq!(psnr, 10.0 * (100.0f64 * 3.0 / 4.0).log10(), epsilon = 1e-12);
        assert_relative_eq!(psnr, 18.750612633917, epsilon = 1e-9);

        Ok(())
    }

    #[test]
    fn test_psnr_u16_range() -> Result<(), ImageError> {
        let image1 = Image::<u16, 1>::from_size_val([3, 3].into(), 0)?;
        let image2 = Image::<u16, 1>::from_size_val([3, 3].into(), 65535)?;
        assert_eq!(super::psnr(&image1, &image2)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_shape_mismatch() -> Result<(), ImageError> {
        let image1 = Image::<u8, 3>::from_size_val([100, 100].into(), 0)?;
        let image2 = Image::<u8, 3>::from_size_val([50, 50].into(), 0)?;
        let expected = ImageError::ShapeMismatch([100, 100].into(), [50, 50].into());

        assert_eq!(super::mse(&image1, &image2), Err(expected.clone()));
        assert_eq!(super::rmse(&image1, &image2), Err(expected.clone()));
        assert_eq!(super::psnr(&image1, &image2), Err(expected));

        Ok(())
    }

    #[test]
    fn test_empty_images() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([0, 0].into(), vec![])?;
        assert_eq!(super::mse(&image, &image)?, 0.0);
        assert_eq!(super::psnr(&image, &image)?, f64::INFINITY);
        Ok(())
    }

    #[test]
    fn test_symmetry_and_identity() -> Result<(), ImageError> {
        let mut rng = StdRng::seed_from_u64(42);
        let size = ImageSize {
            width: 17,
            height: 9,
        };

        for _ in 0..10 {
            let a = random_image::<3>(&mut rng, size)?;
            let b = random_image::<3>(&mut rng, size)?;

            let mse_ab = super::mse(&a, &b)?;
            assert_eq!(mse_ab, super::mse(&b, &a)?);
            assert_eq!(super::rmse(&a, &b)?, super::rmse(&b, &a)?);
            assert_eq!(super::rmse(&a, &b)?, mse_ab.sqrt());
            assert!(mse_ab >= 0.0);
        }

        Ok(())
    }

    #[test]
    fn test_psnr_decreases_with_error() -> Result<(), ImageError> {
        let reference = Image::<u8, 1>::from_size_val([8, 8].into(), 100)?;

        let mut last = f64::INFINITY;
        for offset in [1u8, 2, 5, 20, 80, 155] {
            let noisy = Image::<u8, 1>::from_size_val([8, 8].into(), 100 + offset)?;
            let psnr = super::psnr(&reference, &noisy)?;
            assert!(psnr <= last, "psnr {psnr} should not exceed {last}");
            last = psnr;
        }

        Ok(())
    }
}
