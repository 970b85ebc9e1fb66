//! Dynmedia Core - rendition paths and geometry for dynamic media
//!
//! This crate computes the server-relative URL paths used to render asset
//! renditions through a dynamic media image serving API, including size
//! clamping, auto-cropping and smart-crop preset resolution, and classifies
//! renditions generated by the DAM by their names.
//!
//! Everything here is a pure function over immutable values: no I/O, no
//! shared state. Asset metadata is passed in as already-fetched snapshots.

pub mod asset;
pub mod config;
pub mod format_options;
pub mod geometry;
pub mod path;
pub mod rendition;
pub mod types;

pub use asset::{AssetContext, ImageProfile, MediaFormat, Rendition};
pub use config::DynamicMediaConfig;
pub use format_options::{parse_media_format_options, unresolved_media_formats, MediaFormatOption};
pub use geometry::{auto_crop_dimensions, centered_crop, clamp};
pub use path::{
    build_content_path, build_image_path, build_image_path_sized, build_image_path_with_size,
    encode_object,
};
pub use rendition::{classify, RenditionKind};
pub use types::{ratio, CropDimension, Dimension, MediaError, NamedDimension};
