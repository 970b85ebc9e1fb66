//! Dynmedia WASM - WebAssembly bindings for dynmedia
//!
//! This crate exposes dynmedia-core path building and crop geometry to
//! JavaScript/TypeScript, so the browser can compute image server URLs
//! without a round trip.
//!
//! # Module Structure
//!
//! - `path` - Image and content path building
//! - `geometry` - Size clamping and auto-cropping
//! - `rendition` - Rendition classification and media format options
//! - `types` - WASM-compatible wrapper types for dimensions and crops
//!
//! # Usage
//!
//! ```typescript
//! import init, { build_image_path, classify_rendition } from '@dynmedia/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const path = build_image_path('folder/my image.jpg');
//! // "/is/image/folder/my%20image.jpg"
//! ```

use wasm_bindgen::prelude::*;

mod geometry;
mod path;
mod rendition;
mod types;

// Re-export public types
pub use geometry::{auto_crop_dimensions, centered_crop, clamp_dimension};
pub use path::{
    build_content_path, build_image_path, build_image_path_cropped, build_image_path_sized,
    is_valid_rotation,
};
pub use rendition::{classify_rendition, classify_renditions, parse_media_format_options};
pub use types::{JsCropDimension, JsDimension};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
