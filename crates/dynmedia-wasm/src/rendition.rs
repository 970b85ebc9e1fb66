//! Rendition classification WASM bindings.

use dynmedia_core::{format_options, rendition};
use wasm_bindgen::prelude::*;

/// Kind of an automatically generated rendition: `"thumbnail"`, `"web"`,
/// `"video"` or `"other"`; `undefined` for any other rendition name.
#[wasm_bindgen]
pub fn classify_rendition(name: &str) -> Option<String> {
    rendition::classify(name).map(|kind| kind.as_str().to_string())
}

/// Classify many rendition names at once.
///
/// Returns an array of the same length with a kind label or `null` per name.
#[wasm_bindgen]
pub fn classify_renditions(names: Vec<String>) -> js_sys::Array {
    names
        .iter()
        .map(|name| match classify_rendition(name) {
            Some(kind) => JsValue::from_str(&kind),
            None => JsValue::NULL,
        })
        .collect()
}

/// Parse comma-separated media format names and mandatory flags.
///
/// Returns an array of `{ name, mandatory }`.
///
/// # Errors
///
/// Returns an error if no format name is given.
#[wasm_bindgen]
pub fn parse_media_format_options(
    formats: &str,
    mandatory: Option<String>,
) -> Result<JsValue, JsValue> {
    let options = format_options::parse_media_format_options(formats, mandatory.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&options).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rendition() {
        assert_eq!(classify_rendition("cq5dam.web.960.640.jpg").as_deref(), Some("web"));
        assert_eq!(
            classify_rendition("cq5dam.thumbnail.48.48.png").as_deref(),
            Some("thumbnail")
        );
        assert_eq!(classify_rendition("cqdam.text.txt").as_deref(), Some("other"));
        assert_eq!(classify_rendition("original"), None);
    }
}

/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use dynmedia_core::MediaFormatOption;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_classify_renditions() {
        let result = classify_renditions(vec![
            "original".to_string(),
            "cq5dam.video.hq.m4v".to_string(),
        ]);
        assert_eq!(result.length(), 2);
        assert!(result.get(0).is_null());
        assert_eq!(result.get(1).as_string().as_deref(), Some("video"));
    }

    #[wasm_bindgen_test]
    fn test_parse_media_format_options() {
        let result = parse_media_format_options("wide,square", Some("true".to_string())).unwrap();
        let options: Vec<MediaFormatOption> = serde_wasm_bindgen::from_value(result).unwrap();
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|option| option.mandatory));
    }

    #[wasm_bindgen_test]
    fn test_parse_media_format_options_empty() {
        assert!(parse_media_format_options("", None).is_err());
    }
}
