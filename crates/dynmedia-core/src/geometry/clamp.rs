//! Proportional clamping of requested sizes to the image server limit.
//!
//! Width is checked first. Reducing an overly wide request can still leave
//! the height above its limit for extreme aspect ratios, so the width step
//! re-runs the check on its result. The height step can't push width back
//! over the limit and returns directly.
//!
//! The two steps are kept separate rather than folded into one
//! min-scale-factor computation; the results differ by a pixel at rounding
//! boundaries and callers depend on the exact values.

use tracing::debug;

use crate::types::Dimension;

/// Scale `width`x`height` down so neither side exceeds its maximum.
///
/// Sizes already within bounds are returned unchanged. Rounding is half
/// away from zero.
///
/// `height` must be positive; for zero height the result is unspecified
/// (it does not panic).
///
/// # Example
///
/// ```
/// use dynmedia_core::geometry::clamp;
/// use dynmedia_core::Dimension;
///
/// assert_eq!(clamp(4000, 2000, 3000, 3000), Dimension::new(3000, 1500));
/// assert_eq!(clamp(800, 600, 3000, 3000), Dimension::new(800, 600));
/// ```
pub fn clamp(width: u32, height: u32, max_width: u32, max_height: u32) -> Dimension {
    if width > max_width {
        let ratio = width as f64 / height as f64;
        let new_width = max_width;
        let new_height = (new_width as f64 / ratio).round() as u32;
        debug!(width, height, new_width, new_height, "clamped to max width");
        return clamp(new_width, new_height, max_width, max_height);
    }
    if height > max_height {
        let ratio = width as f64 / height as f64;
        let new_height = max_height;
        let new_width = (new_height as f64 * ratio).round() as u32;
        debug!(width, height, new_width, new_height, "clamped to max height");
        return Dimension::new(new_width, new_height);
    }
    Dimension::new(width, height)
}

/// [`clamp`] against a limit given as a [`Dimension`].
pub fn clamp_to(width: u32, height: u32, limit: Dimension) -> Dimension {
    clamp(width, height, limit.width, limit.height)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
