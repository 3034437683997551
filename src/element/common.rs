// Common constants for all element kinds
pub const MIN_STROKE_WIDTH: f32 = 1.0;
pub const MAX_STROKE_WIDTH: f32 = 32.0;
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;
pub const DEFAULT_COLOR: &str = "#000000";

/// Clamp a stroke width into the supported range.
///
/// NaN and non-positive widths fall back to the minimum.
pub(crate) fn clamp_stroke_width(width: f32) -> f32 {
    if width.is_nan() {
        return MIN_STROKE_WIDTH;
    }
    width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
}
