//! Rendition geometry: size clamping and auto-cropping.
//!
//! Both operations work in integer pixels and round half away from zero.
//!
//! # Order of operations
//!
//! When building an image path:
//! 1. The requested size is clamped to the server limit ([`clamp`])
//! 2. A crop comes either from the caller or from [`centered_crop`] against
//!    the web rendition
//! 3. The crop is sent with its unclamped rectangle; only `wid`/`hei` carry
//!    the clamped size

mod autocrop;
mod clamp;

pub use autocrop::{
    auto_crop_dimension, auto_crop_dimensions, centered_crop, web_rendition_for_cropping,
};
pub use clamp::{clamp, clamp_to};
