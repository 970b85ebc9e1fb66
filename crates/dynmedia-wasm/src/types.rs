//! WASM-compatible wrapper types for dimensions and crop rectangles.

use dynmedia_core::{CropDimension, Dimension};
use wasm_bindgen::prelude::*;

/// A width/height pair for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsDimension {
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl JsDimension {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> JsDimension {
        JsDimension { width, height }
    }

    /// Width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl From<Dimension> for JsDimension {
    fn from(dimension: Dimension) -> Self {
        Self::new(dimension.width, dimension.height)
    }
}

/// A crop rectangle for JavaScript.
///
/// `autoCrop` is set for rectangles computed by auto-cropping; passing such
/// a crop to `build_image_path_cropped` enables smart-crop preset lookup.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsCropDimension {
    inner: CropDimension,
}

#[wasm_bindgen]
impl JsCropDimension {
    #[wasm_bindgen(constructor)]
    pub fn new(left: u32, top: u32, width: u32, height: u32, auto_crop: bool) -> JsCropDimension {
        JsCropDimension {
            inner: CropDimension::new(left, top, width, height).with_auto_crop(auto_crop),
        }
    }

    /// Parse a `left,top,width,height` crop string.
    pub fn parse(value: &str, auto_crop: bool) -> Result<JsCropDimension, JsValue> {
        CropDimension::parse(value)
            .map(|crop| JsCropDimension {
                inner: crop.with_auto_crop(auto_crop),
            })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Left offset in pixels.
    #[wasm_bindgen(getter)]
    pub fn left(&self) -> u32 {
        self.inner.left
    }

    /// Top offset in pixels.
    #[wasm_bindgen(getter)]
    pub fn top(&self) -> u32 {
        self.inner.top
    }

    /// Crop width in pixels.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Crop height in pixels.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Whether the rectangle came from auto-cropping.
    #[wasm_bindgen(getter, js_name = autoCrop)]
    pub fn auto_crop(&self) -> bool {
        self.inner.auto_crop
    }

    /// `left,top,width,height` as sent in the `crop` query parameter.
    #[wasm_bindgen(js_name = toCropString)]
    pub fn to_crop_string(&self) -> String {
        self.inner.crop_string_width_height()
    }
}

impl JsCropDimension {
    pub(crate) fn as_core(&self) -> &CropDimension {
        &self.inner
    }
}

impl From<CropDimension> for JsCropDimension {
    fn from(inner: CropDimension) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_dimension_from_core() {
        let dim = JsDimension::from(Dimension::new(300, 150));
        assert_eq!(dim.width(), 300);
        assert_eq!(dim.height(), 150);
    }

    #[test]
    fn test_js_crop_dimension() {
        let crop = JsCropDimension::new(10, 20, 300, 200, true);
        assert_eq!(crop.left(), 10);
        assert_eq!(crop.top(), 20);
        assert_eq!(crop.width(), 300);
        assert_eq!(crop.height(), 200);
        assert!(crop.auto_crop());
        assert_eq!(crop.to_crop_string(), "10,20,300,200");
        assert!(crop.as_core().is_auto_crop());
    }

    #[test]
    fn test_js_crop_parse() {
        let crop = JsCropDimension::parse("0, 120,1280,720", true).unwrap();
        assert_eq!(crop.left(), 0);
        assert_eq!(crop.top(), 120);
        assert_eq!(crop.width(), 1280);
        assert_eq!(crop.height(), 720);
        assert!(crop.auto_crop());

        let crop = JsCropDimension::parse("1,2,3,4", false).unwrap();
        assert!(!crop.auto_crop());
        assert_eq!(crop.to_crop_string(), "1,2,3,4");
    }

    #[test]
    fn test_js_crop_from_core() {
        let crop = JsCropDimension::from(CropDimension::new(1, 2, 3, 4));
        assert!(!crop.auto_crop());
        assert_eq!(crop.to_crop_string(), "1,2,3,4");
    }
}
