//! Dynamic media path WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { build_image_path_cropped, JsCropDimension } from '@dynmedia/wasm';
//!
//! const context = {
//!   dynamicMediaObject: 'shop/red shoe.jpg',
//!   imageSizeLimit: { width: 2000, height: 2000 },
//!   imageProfile: { smartCropDefinitions: [{ name: 'landscape', width: 800, height: 600 }] },
//! };
//! const crop = new JsCropDimension(0, 120, 1280, 720, true);
//! const path = build_image_path_cropped(context, 800, 600, crop, undefined);
//! // "/is/image/shop/red%20shoe.jpg%3Alandscape"
//!
//! // the crop is borrowed, so it can be reused for further sizes
//! const small = build_image_path_cropped(context, 400, 300, crop, undefined);
//! ```

use crate::types::JsCropDimension;
use dynmedia_core::{path, AssetContext, DynamicMediaConfig};
use wasm_bindgen::prelude::*;

fn context_for(object: &str) -> AssetContext {
    AssetContext::new(object, &DynamicMediaConfig::default())
}

/// Path for serving `object` as static content.
///
/// Appends `?cdh=attachment` when `download` is set.
#[wasm_bindgen]
pub fn build_content_path(object: &str, download: bool) -> String {
    path::build_content_path(&context_for(object), download)
}

/// Path for rendering `object` at its default size.
#[wasm_bindgen]
pub fn build_image_path(object: &str) -> String {
    path::build_image_path(&context_for(object))
}

/// Path for rendering an image at `width`x`height` with optional rotation.
///
/// # Arguments
///
/// * `context` - Asset context object: `{ dynamicMediaObject, imageSizeLimit, imageProfile? }`
/// * `width` / `height` - Requested size before clamping
/// * `rotation` - Optional rotation in degrees
///
/// # Errors
///
/// Returns an error if `context` cannot be deserialized.
#[wasm_bindgen]
pub fn build_image_path_sized(
    context: JsValue,
    width: u32,
    height: u32,
    rotation: Option<i32>,
) -> Result<String, JsValue> {
    let context = asset_context_from_js(context)?;
    Ok(sized_path(&context, width, height, None, rotation))
}

/// Path for rendering a cropped image at `width`x`height`.
///
/// The crop is only borrowed; the same `JsCropDimension` can be passed to
/// any number of calls, e.g. one per entry of a `srcset`.
///
/// # Arguments
///
/// * `context` - Asset context object: `{ dynamicMediaObject, imageSizeLimit, imageProfile? }`
/// * `width` / `height` - Requested size before clamping
/// * `crop` - Crop rectangle; auto-crop rectangles may resolve to a smart-crop preset
/// * `rotation` - Optional rotation in degrees
///
/// # Errors
///
/// Returns an error if `context` cannot be deserialized.
#[wasm_bindgen]
pub fn build_image_path_cropped(
    context: JsValue,
    width: u32,
    height: u32,
    crop: &JsCropDimension,
    rotation: Option<i32>,
) -> Result<String, JsValue> {
    let context = asset_context_from_js(context)?;
    Ok(sized_path(&context, width, height, Some(crop), rotation))
}

fn asset_context_from_js(context: JsValue) -> Result<AssetContext, JsValue> {
    serde_wasm_bindgen::from_value(context)
        .map_err(|e| JsValue::from_str(&format!("Invalid asset context: {}", e)))
}

fn sized_path(
    context: &AssetContext,
    width: u32,
    height: u32,
    crop: Option<&JsCropDimension>,
    rotation: Option<i32>,
) -> String {
    path::build_image_path_sized(
        context,
        width,
        height,
        crop.map(JsCropDimension::as_core),
        rotation,
    )
}

/// Whether the image server supports `degrees` as rendition rotation.
#[wasm_bindgen]
pub fn is_valid_rotation(degrees: i32) -> bool {
    path::is_valid_rotation(degrees)
}
