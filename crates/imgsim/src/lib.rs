#![doc = include_str!("../README.md")]

#[doc(inline)]
pub use imgsim_image as image;

#[doc(inline)]
pub use imgsim_imgproc as imgproc;

#[doc(inline)]
pub use imgsim_io as io;
