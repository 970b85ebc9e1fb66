//! Core value types shared by path building and crop geometry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance used when comparing aspect ratios.
pub const RATIO_TOLERANCE: f64 = 0.001;

/// Error types for parsing media request values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediaError {
    /// The crop string is not four comma-separated non-negative integers.
    #[error("Invalid crop string: {0}")]
    InvalidCrop(String),

    /// A crop or dimension with a zero-sized side was supplied.
    #[error("Invalid dimension: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// No media format names were supplied.
    #[error("No media formats given")]
    NoMediaFormats,
}

/// Width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

impl Dimension {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Aspect ratio (width / height).
    pub fn ratio(&self) -> f64 {
        ratio(self.width, self.height)
    }
}

/// A dimension registered under a name, e.g. a smart-crop preset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedDimension {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl NamedDimension {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// The preset size without its name.
    pub fn dimension(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }
}

/// Rectangle within a source image.
///
/// Bounds against the source are not checked here: a crop derived from a
/// rendition is only meaningful relative to that rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropDimension {
    /// Left offset in pixels.
    pub left: u32,
    /// Top offset in pixels.
    pub top: u32,
    /// Crop width in pixels.
    pub width: u32,
    /// Crop height in pixels.
    pub height: u32,
    /// Set when the rectangle was computed by auto-cropping instead of
    /// chosen by an editor.
    #[serde(default)]
    pub auto_crop: bool,
}

impl CropDimension {
    pub const fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
            auto_crop: false,
        }
    }

    pub fn with_auto_crop(mut self, auto_crop: bool) -> Self {
        self.auto_crop = auto_crop;
        self
    }

    pub fn is_auto_crop(&self) -> bool {
        self.auto_crop
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> u32 {
        self.left.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }

    /// Width/height of the rectangle.
    pub fn rect_dimension(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }

    /// `left,top,width,height` as used by the `crop` query parameter.
    pub fn crop_string_width_height(&self) -> String {
        format!("{},{},{},{}", self.left, self.top, self.width, self.height)
    }

    /// `left,top,right,bottom` coordinates form.
    pub fn crop_string_coordinates(&self) -> String {
        format!(
            "{},{},{},{}",
            self.left,
            self.top,
            self.right(),
            self.bottom()
        )
    }

    /// Parse a `left,top,width,height` crop string.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::InvalidCrop` for anything other than four
    /// non-negative integers, and `MediaError::InvalidDimension` when width
    /// or height is zero.
    pub fn parse(value: &str) -> Result<Self, MediaError> {
        let [left, top, width, height] = parse_four(value)?;
        if width == 0 || height == 0 {
            return Err(MediaError::InvalidDimension { width, height });
        }
        Ok(Self::new(left, top, width, height))
    }

    /// Parse a `x1,y1,x2,y2` coordinates crop string.
    ///
    /// # Errors
    ///
    /// Same as [`CropDimension::parse`]; the second corner must lie right of
    /// and below the first.
    pub fn parse_coordinates(value: &str) -> Result<Self, MediaError> {
        let [x1, y1, x2, y2] = parse_four(value)?;
        if x2 <= x1 || y2 <= y1 {
            return Err(MediaError::InvalidDimension {
                width: x2.saturating_sub(x1),
                height: y2.saturating_sub(y1),
            });
        }
        Ok(Self::new(x1, y1, x2 - x1, y2 - y1))
    }
}

fn parse_four(value: &str) -> Result<[u32; 4], MediaError> {
    let invalid = || MediaError::InvalidCrop(value.to_string());
    let mut parts = [0u32; 4];
    let mut tokens = value.split(',');
    for slot in parts.iter_mut() {
        let token = tokens.next().ok_or_else(invalid)?;
        *slot = token.trim().parse().map_err(|_| invalid())?;
    }
    if tokens.next().is_some() {
        return Err(invalid());
    }
    Ok(parts)
}

/// Aspect ratio of a width/height pair.
///
/// Returns 0.0 when either side is zero so callers can treat the value as
/// "no ratio" instead of propagating infinities.
pub fn ratio(width: u32, height: u32) -> f64 {
    if width == 0 || height == 0 {
        return 0.0;
    }
    width as f64 / height as f64
}

/// Compare two ratios within [`RATIO_TOLERANCE`].
pub fn ratio_matches(a: f64, b: f64) -> bool {
    (a - b).abs() < RATIO_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_dimension() {
        let preset = NamedDimension::new("square", 500, 500);
        assert_eq!(preset.dimension(), Dimension::new(500, 500));
    }

    #[test]
    fn test_crop_string_width_height() {
        let crop = CropDimension::new(10, 20, 300, 200);
        assert_eq!(crop.crop_string_width_height(), "10,20,300,200");
        assert_eq!(crop.crop_string_coordinates(), "10,20,310,220");
    }

    #[test]
    fn test_crop_parse() {
        let crop = CropDimension::parse("5, 6,100,50").unwrap();
        assert_eq!(crop, CropDimension::new(5, 6, 100, 50));
        assert!(!crop.is_auto_crop());
    }

    #[test]
    fn test_crop_parse_rejects_garbage() {
        assert_eq!(
            CropDimension::parse("1,2,3"),
            Err(MediaError::InvalidCrop("1,2,3".to_string()))
        );
        assert!(CropDimension::parse("1,2,3,4,5").is_err());
        assert!(CropDimension::parse("a,b,c,d").is_err());
        assert!(CropDimension::parse("-1,0,10,10").is_err());
        assert_eq!(
            CropDimension::parse("0,0,0,10"),
            Err(MediaError::InvalidDimension {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_crop_parse_coordinates() {
        let crop = CropDimension::parse_coordinates("10,20,110,70").unwrap();
        assert_eq!(crop, CropDimension::new(10, 20, 100, 50));
        assert!(CropDimension::parse_coordinates("10,20,5,70").is_err());
    }

    #[test]
    fn test_auto_crop_flag() {
        let crop = CropDimension::new(0, 0, 10, 10).with_auto_crop(true);
        assert!(crop.is_auto_crop());
        assert_eq!(crop.rect_dimension(), Dimension::new(10, 10));
    }

    #[test]
    fn test_ratio() {
        assert!(ratio_matches(ratio(1600, 900), 16.0 / 9.0));
        assert_eq!(ratio(100, 0), 0.0);
        assert!(ratio_matches(Dimension::new(4, 3).ratio(), 1.3333));
    }

    #[test]
    fn test_media_error_display() {
        let err = MediaError::InvalidCrop("x".to_string());
        assert_eq!(err.to_string(), "Invalid crop string: x");
        assert_eq!(MediaError::NoMediaFormats.to_string(), "No media formats given");
    }
}
