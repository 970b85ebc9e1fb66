//! Dynamic media settings supplied by the hosting environment.

use serde::{Deserialize, Serialize};

use crate::types::Dimension;

/// Default width/height limit of the image serving backend.
pub const DEFAULT_IMAGE_SIZE_LIMIT: Dimension = Dimension::new(2000, 2000);

/// Settings for building dynamic media paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DynamicMediaConfig {
    /// Largest width/height the image server renders. Requests beyond it
    /// are scaled down proportionally.
    pub image_size_limit: Dimension,
}

impl Default for DynamicMediaConfig {
    fn default() -> Self {
        Self {
            image_size_limit: DEFAULT_IMAGE_SIZE_LIMIT,
        }
    }
}

impl DynamicMediaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_size_limit(mut self, width: u32, height: u32) -> Self {
        self.image_size_limit = Dimension::new(width, height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        let config = DynamicMediaConfig::new();
        assert_eq!(config.image_size_limit, Dimension::new(2000, 2000));
    }

    #[test]
    fn test_with_image_size_limit() {
        let config = DynamicMediaConfig::new().with_image_size_limit(3000, 1500);
        assert_eq!(config.image_size_limit, Dimension::new(3000, 1500));
    }
}
