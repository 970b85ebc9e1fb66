//! WASM bindings for size clamping and auto-cropping.

use crate::types::{JsCropDimension, JsDimension};
use dynmedia_core::{geometry, MediaFormat, Rendition};
use wasm_bindgen::prelude::*;

/// Scale `width`x`height` down so neither side exceeds its maximum,
/// preserving the aspect ratio.
#[wasm_bindgen]
pub fn clamp_dimension(width: u32, height: u32, max_width: u32, max_height: u32) -> JsDimension {
    geometry::clamp(width, height, max_width, max_height).into()
}

/// Largest centered crop with aspect ratio `ratio` inside the source.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const crop = centered_crop(1000, 500, 1.0);
/// // crop.left === 250, crop.width === 500
/// ```
#[wasm_bindgen]
pub fn centered_crop(source_width: u32, source_height: u32, ratio: f64) -> JsCropDimension {
    geometry::centered_crop(source_width, source_height, ratio).into()
}

/// Auto-crop rectangles for each media format against the asset's web
/// rendition.
///
/// # Arguments
///
/// * `renditions` - Array of `{ name, width, height }`
/// * `formats` - Array of `{ name, ratio }`
///
/// # Returns
///
/// Array of `{ left, top, width, height, autoCrop }` for the formats that
/// could be cropped.
///
/// # Errors
///
/// Returns an error if either argument cannot be deserialized.
#[wasm_bindgen]
pub fn auto_crop_dimensions(renditions: JsValue, formats: JsValue) -> Result<JsValue, JsValue> {
    let renditions: Vec<Rendition> = serde_wasm_bindgen::from_value(renditions)
        .map_err(|e| JsValue::from_str(&format!("Invalid renditions: {}", e)))?;
    let formats: Vec<MediaFormat> = serde_wasm_bindgen::from_value(formats)
        .map_err(|e| JsValue::from_str(&format!("Invalid media formats: {}", e)))?;

    let crops = geometry::auto_crop_dimensions(&renditions, &formats);
    serde_wasm_bindgen::to_value(&crops).map_err(|e| JsValue::from_str(&e.to_string()))
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use dynmedia_core::CropDimension;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_auto_crop_dimensions() {
        let renditions = vec![Rendition::new("cq5dam.web.1280.1280.jpeg", 1280, 960)];
        let formats = vec![MediaFormat::new("square", 1.0), MediaFormat::new("free", 0.0)];
        let result = auto_crop_dimensions(
            serde_wasm_bindgen::to_value(&renditions).unwrap(),
            serde_wasm_bindgen::to_value(&formats).unwrap(),
        )
        .unwrap();
        let crops: Vec<CropDimension> = serde_wasm_bindgen::from_value(result).unwrap();
        assert_eq!(crops, vec![CropDimension::new(160, 0, 960, 960).with_auto_crop(true)]);
    }

    #[wasm_bindgen_test]
    fn test_auto_crop_dimensions_invalid_input() {
        let invalid = serde_wasm_bindgen::to_value(&"not an array").unwrap();
        let formats = serde_wasm_bindgen::to_value(&Vec::<MediaFormat>::new()).unwrap();
        assert!(auto_crop_dimensions(invalid, formats).is_err());
    }
}
