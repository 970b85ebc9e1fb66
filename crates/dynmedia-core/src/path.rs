//! Server-relative paths for the dynamic media image serving API.
//!
//! Two serving modes exist:
//! - **Image**: `/is/image/<object>` renders an image, optionally resized,
//!   cropped and rotated via query parameters or a smart-crop preset
//! - **Content**: `/is/content/<object>` serves the stored file as is
//!
//! Paths never include scheme or host; prefixing the server URL is up to
//! the caller.

use tracing::debug;

use crate::asset::AssetContext;
use crate::geometry::clamp_to;
use crate::types::CropDimension;

/// Path prefix for rendering images.
pub const IMAGE_SERVER_PATH: &str = "/is/image/";

/// Path prefix for serving static content.
pub const CONTENT_SERVER_PATH: &str = "/is/content/";

/// Suffix for static content that should be served with
/// `Content-Disposition: attachment`. The server maps it to the header
/// through a ruleset.
pub const DOWNLOAD_SUFFIX: &str = "?cdh=attachment";

/// Encoded `:` between object path and smart-crop preset name.
pub const SMART_CROP_SEPARATOR: &str = "%3A";

/// Rotations the image server supports for renditions.
pub const SUPPORTED_ROTATIONS: [i32; 3] = [90, 180, 270];

/// Path for serving the asset as static content.
pub fn build_content_path(ctx: &AssetContext, download_attachment: bool) -> String {
    let mut result = format!(
        "{}{}",
        CONTENT_SERVER_PATH,
        encode_object(&ctx.dynamic_media_object)
    );
    if download_attachment {
        result.push_str(DOWNLOAD_SUFFIX);
    }
    result
}

/// Path for rendering the asset image at its default size.
pub fn build_image_path(ctx: &AssetContext) -> String {
    format!("{}{}", IMAGE_SERVER_PATH, encode_object(&ctx.dynamic_media_object))
}

/// Path for rendering the asset image at `width`x`height`.
pub fn build_image_path_with_size(ctx: &AssetContext, width: u32, height: u32) -> String {
    build_image_path_sized(ctx, width, height, None, None)
}

/// Path for rendering the asset image at `width`x`height` with optional
/// crop and rotation.
///
/// An auto-crop request without rotation whose unclamped size matches a
/// smart-crop preset of the asset's image profile resolves to
/// `<object>%3A<preset>`; the server applies the preset itself.
///
/// Otherwise the size is clamped to the server limit and the query string
/// is `crop=..&rotate=..&wid=..&hei=..&fit=stretch`, with `crop` and
/// `rotate` only when given. `fit=stretch` is always sent: width/height
/// already match the cropped ratio, and letting the server fit them again
/// can leave 1px background lines.
pub fn build_image_path_sized(
    ctx: &AssetContext,
    width: u32,
    height: u32,
    crop: Option<&CropDimension>,
    rotation: Option<i32>,
) -> String {
    let object = encode_object(&ctx.dynamic_media_object);

    let auto_crop = crop.is_some_and(CropDimension::is_auto_crop);
    if auto_crop && rotation.is_none() {
        if let Some(preset) = ctx.smart_crop_for(width, height) {
            debug!(preset = %preset.name, width, height, "using smart-crop preset");
            return format!(
                "{}{}{}{}",
                IMAGE_SERVER_PATH, object, SMART_CROP_SEPARATOR, preset.name
            );
        }
    }

    let size = clamp_to(width, height, ctx.image_size_limit);

    let mut result = format!("{}{}?", IMAGE_SERVER_PATH, object);
    if let Some(crop) = crop {
        result.push_str(&format!("crop={}&", crop.crop_string_width_height()));
    }
    if let Some(rotation) = rotation {
        result.push_str(&format!("rotate={}&", rotation));
    }
    result.push_str(&format!(
        "wid={}&hei={}&fit=stretch",
        size.width, size.height
    ));
    result
}

/// URL-encode a slash-separated dynamic media object.
///
/// Each segment is encoded on its own so folder separators survive while
/// spaces and special characters inside folder and file names do not.
/// Empty segments are dropped.
///
/// Only RFC 3986 unreserved characters pass unencoded: space becomes `%20`,
/// `~` is kept and `*` becomes `%2A`. Form encoders (`+` for space, `*`
/// kept, `~` encoded) produce different paths for the same object.
pub fn encode_object(object: &str) -> String {
    object
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Whether the image server supports `degrees` as rendition rotation.
///
/// Path building passes any rotation through; this is for callers that
/// validate user input first.
pub fn is_valid_rotation(degrees: i32) -> bool {
    SUPPORTED_ROTATIONS.contains(&degrees)
}
