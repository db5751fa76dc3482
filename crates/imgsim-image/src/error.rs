use crate::image::ImageSize;

/// An error type for the image module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images that must share a size do not.
    #[error("Image size mismatch: {0} vs {1}")]
    ShapeMismatch(ImageSize, ImageSize),

    /// Error when a sliding window does not fit the image.
    #[error("Invalid window size {0} for an image of {1}x{2}: must be odd, at least 3 and no larger than the image")]
    InvalidWindowSize(usize, usize, usize),

    /// Error when a filter kernel is empty or has an even length.
    #[error("Invalid kernel size {0}: must be odd and non-zero")]
    InvalidKernelSize(usize),

    /// Error when a pixel index is outside the image.
    #[error("Pixel index ({0}, {1}) out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when a numeric cast fails.
    #[error("Failed to cast image data to {0}")]
    CastError(String),
}
