//! Auto-cropping: largest centered rectangle of a given aspect ratio.
//!
//! Crops are computed against the asset's web rendition, the same rendition
//! the image editor shows when a user crops manually, so automatic and
//! manual crop rectangles share one coordinate space.

use tracing::debug;

use crate::asset::{MediaFormat, Rendition};
use crate::types::CropDimension;

/// Largest rectangle with `target_ratio` (width / height) that fits inside
/// the source, centered along the axis that gets trimmed.
///
/// A source wider than the target keeps its full height and is trimmed
/// left and right; otherwise it keeps its full width and is trimmed top and
/// bottom. The returned crop is flagged as auto-crop.
///
/// # Example
///
/// ```
/// use dynmedia_core::geometry::centered_crop;
///
/// let crop = centered_crop(1000, 500, 1.0);
/// assert_eq!((crop.left, crop.top, crop.width, crop.height), (250, 0, 500, 500));
/// ```
pub fn centered_crop(source_width: u32, source_height: u32, target_ratio: f64) -> CropDimension {
    let source_w = source_width as f64;
    let source_h = source_height as f64;
    let source_ratio = source_w / source_h;

    let crop = if source_ratio > target_ratio {
        let width = (source_h * target_ratio).round() as u32;
        let left = ((source_w - width as f64) / 2.0).round() as u32;
        CropDimension::new(left, 0, width, source_height)
    } else {
        let height = (source_w / target_ratio).round() as u32;
        let top = ((source_h - height as f64) / 2.0).round() as u32;
        CropDimension::new(0, top, source_width, height)
    };
    crop.with_auto_crop(true)
}

/// First web rendition of an asset, the one used as cropping reference.
pub fn web_rendition_for_cropping(renditions: &[Rendition]) -> Option<&Rendition> {
    renditions.iter().find(|rendition| rendition.is_web_rendition())
}

/// Auto-crop rectangle for `format` against the asset's web rendition.
///
/// `None` when the format has no ratio, or the asset has no web rendition
/// with known dimensions.
pub fn auto_crop_dimension(renditions: &[Rendition], format: &MediaFormat) -> Option<CropDimension> {
    if !format.has_ratio() {
        debug!(format = %format.name, "skipping auto-crop: format has no ratio");
        return None;
    }
    let Some(rendition) = web_rendition_for_cropping(renditions) else {
        debug!(format = %format.name, "skipping auto-crop: no web rendition");
        return None;
    };
    if !rendition.has_dimensions() {
        debug!(
            format = %format.name,
            rendition = %rendition.name,
            "skipping auto-crop: web rendition has no dimensions"
        );
        return None;
    }
    Some(centered_crop(rendition.width, rendition.height, format.ratio))
}

/// Auto-crop rectangles for every requested format that can be cropped,
/// in request order. Formats that can't be cropped are left out.
pub fn auto_crop_dimensions(renditions: &[Rendition], formats: &[MediaFormat]) -> Vec<CropDimension> {
    formats
        .iter()
        .filter_map(|format| auto_crop_dimension(renditions, format))
        .collect()
}


// ============================================================================
// Property-Based Tests
// ============================================================================
