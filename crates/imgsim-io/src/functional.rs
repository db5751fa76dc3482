use std::path::Path;

use imgsim_image::{Image, ImageSize};

use crate::error::IoError;

fn open_any(file_path: &Path) -> Result<image::DynamicImage, IoError> {
    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // detect the format from the content rather than the extension
    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    log::debug!(
        "decoded {} ({}x{}, {:?})",
        file_path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img)
}

/// Reads an image from the given file path as RGB8.
///
/// The method tries to read from any image format supported by the image crate.
/// Alpha channels are dropped and grayscale images are replicated across the
/// three channels.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGB8 image containing the image data.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let img = open_any(file_path.as_ref())?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}

/// Reads an image from the given file path as a single channel (mono8) image.
///
/// Color images are reduced to luma by the image crate, which uses the
/// Rec. 709 weights. Use [`read_image_any_rgb8`] together with
/// `imgsim_imgproc::color::gray_from_rgb_u8` for the Rec. 601 luminance used by
/// the metrics pipeline.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
pub fn read_image_any_mono8(file_path: impl AsRef<Path>) -> Result<Image<u8, 1>, IoError> {
    let img = open_any(file_path.as_ref())?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_luma8().into_raw())?)
}
