//! Classification of renditions generated automatically by the DAM.
//!
//! Generated renditions follow fixed naming conventions, e.g.
//! `cq5dam.thumbnail.48.48.png` or `cq5dam.web.1280.1280.jpeg`. Each
//! [`RenditionKind`] owns one anchored name pattern; [`classify`] tests them
//! in declaration order because [`RenditionKind::Other`] matches every name
//! the more specific kinds match.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Name prefix of thumbnail renditions.
pub const PREFIX_THUMBNAIL: &str = "cq5dam.thumbnail";

/// Name prefix of web renditions (used by the image editor for cropping).
pub const PREFIX_WEB: &str = "cq5dam.web";

/// Kinds of automatically generated renditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenditionKind {
    /// `cq5dam.thumbnail.*`
    Thumbnail,
    /// `cq5dam.web.*`
    Web,
    /// `cq5dam.video.*`
    Video,
    /// Any other `cq5dam.*` or `cqdam.*` rendition.
    Other,
}

struct KindPattern {
    kind: RenditionKind,
    pattern: Regex,
}

static PATTERNS: LazyLock<[KindPattern; 4]> = LazyLock::new(|| {
    let compile = |kind, pattern: &str| KindPattern {
        kind,
        pattern: Regex::new(pattern).expect("rendition name pattern is a valid regex"),
    };
    [
        compile(
            RenditionKind::Thumbnail,
            &format!(r"^{}\..*$", regex::escape(PREFIX_THUMBNAIL)),
        ),
        compile(
            RenditionKind::Web,
            &format!(r"^{}\..*$", regex::escape(PREFIX_WEB)),
        ),
        compile(RenditionKind::Video, r"^cq5dam\.video\..*$"),
        compile(RenditionKind::Other, r"^(cq5dam|cqdam)\..*$"),
    ]
});

impl RenditionKind {
    /// All kinds in matching priority order.
    pub const ALL: [RenditionKind; 4] = [
        RenditionKind::Thumbnail,
        RenditionKind::Web,
        RenditionKind::Video,
        RenditionKind::Other,
    ];

    /// Whether `name` follows this kind's naming convention.
    pub fn matches(self, name: &str) -> bool {
        PATTERNS
            .iter()
            .find(|entry| entry.kind == self)
            .is_some_and(|entry| entry.pattern.is_match(name))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RenditionKind::Thumbnail => "thumbnail",
            RenditionKind::Web => "web",
            RenditionKind::Video => "video",
            RenditionKind::Other => "other",
        }
    }
}

impl std::fmt::Display for RenditionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of the rendition called `name`, or `None` for renditions that were
/// not generated automatically (e.g. `original`).
pub fn classify(name: &str) -> Option<RenditionKind> {
    PATTERNS
        .iter()
        .find(|entry| entry.pattern.is_match(name))
        .map(|entry| entry.kind)
}
