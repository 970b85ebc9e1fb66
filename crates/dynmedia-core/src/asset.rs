//! Read-only snapshots of asset metadata consumed by path and crop logic.
//!
//! These are filled in by the caller from whatever asset repository it
//! talks to; nothing here performs lookups of its own.

use serde::{Deserialize, Serialize};

use crate::config::DynamicMediaConfig;
use crate::rendition::{self, RenditionKind};
use crate::types::{Dimension, NamedDimension};

/// Image profile attached to an asset folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProfile {
    /// Smart-crop presets in declared order.
    #[serde(default)]
    pub smart_crop_definitions: Vec<NamedDimension>,
}

impl ImageProfile {
    pub fn new(smart_crop_definitions: Vec<NamedDimension>) -> Self {
        Self {
            smart_crop_definitions,
        }
    }

    /// First smart-crop preset whose size equals `width`x`height` exactly.
    pub fn smart_crop_for(&self, width: u32, height: u32) -> Option<&NamedDimension> {
        self.smart_crop_definitions
            .iter()
            .find(|def| def.dimension() == Dimension::new(width, height))
    }
}

/// Everything path building needs to know about one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetContext {
    /// Slash-delimited object identifier on the image server.
    pub dynamic_media_object: String,
    /// Largest width/height the image server renders.
    pub image_size_limit: Dimension,
    #[serde(default)]
    pub image_profile: Option<ImageProfile>,
}

impl AssetContext {
    pub fn new(dynamic_media_object: impl Into<String>, config: &DynamicMediaConfig) -> Self {
        Self {
            dynamic_media_object: dynamic_media_object.into(),
            image_size_limit: config.image_size_limit,
            image_profile: None,
        }
    }

    pub fn with_image_profile(mut self, profile: ImageProfile) -> Self {
        self.image_profile = Some(profile);
        self
    }

    /// Smart-crop preset of the attached profile matching the given size.
    pub fn smart_crop_for(&self, width: u32, height: u32) -> Option<&NamedDimension> {
        self.image_profile
            .as_ref()
            .and_then(|profile| profile.smart_crop_for(width, height))
    }
}

/// One rendition of an asset as reported by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendition {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Rendition {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    pub fn kind(&self) -> Option<RenditionKind> {
        rendition::classify(&self.name)
    }

    pub fn is_web_rendition(&self) -> bool {
        RenditionKind::Web.matches(&self.name)
    }

    pub fn has_dimensions(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Output format requested for a media reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFormat {
    pub name: String,
    /// Required aspect ratio; zero or negative when the format has none.
    #[serde(default)]
    pub ratio: f64,
}

impl MediaFormat {
    pub fn new(name: impl Into<String>, ratio: f64) -> Self {
        Self {
            name: name.into(),
            ratio,
        }
    }

    /// Format whose ratio is given as a width/height pair, e.g. 16:9.
    pub fn with_ratio_dimensions(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self::new(name, crate::types::ratio(width, height))
    }

    pub fn has_ratio(&self) -> bool {
        self.ratio > 0.0
    }
}
