//! Wheel geometry.
//!
//! Angles are in radians, canvas orientation (clockwise, y down). The pointer
//! sits at `-π/2`; segment 0 starts there when the rotation is zero.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Fixed pointer angle (top of the wheel).
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;

/// Width of the decorative rim outside the wedges.
pub const RIM_WIDTH: f64 = 12.0;
/// Gap between the wedges and the rim's inner ring.
pub const RIM_GAP: f64 = 4.0;
/// Below this radius nothing is drawn.
pub const MIN_RENDER_RADIUS: f64 = 10.0;
/// Labels sit at this fraction of the radius.
pub const LABEL_RADIUS_FRACTION: f64 = 0.65;

pub const MIN_FONT_PX: f64 = 10.0;
pub const MAX_FONT_PX: f64 = 28.0;

const ELLIPSIS: char = '…';

pub fn segment_angle(n: usize) -> f64 {
    TAU / n.max(1) as f64
}

/// `[start, end)` of segment `i` at the given rotation.
pub fn segment_span(i: usize, n: usize, rotation: f64) -> (f64, f64) {
    let theta = segment_angle(n);
    let start = i as f64 * theta + rotation + POINTER_ANGLE;
    (start, start + theta)
}

/// Angle halfway through segment `i`.
pub fn segment_mid_angle(i: usize, n: usize, rotation: f64) -> f64 {
    let (start, end) = segment_span(i, n, rotation);
    (start + end) / 2.0
}

/// Maps any angle into `[0, 2π)`. Non-finite input maps to 0.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Index of the segment under the pointer for a wheel turned by `rotation`.
pub fn decode_winner(rotation: f64, n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let index = (normalize_angle(-rotation) / segment_angle(n)).floor() as usize;
    Some(index % n)
}

pub fn wheel_radius(size: f64) -> f64 {
    size / 2.0 - RIM_WIDTH - RIM_GAP
}

pub fn is_drawable(radius: f64) -> bool {
    radius.is_finite() && radius >= MIN_RENDER_RADIUS
}

/// Longest label, in characters, drawn without elision.
pub fn label_max_chars(n: usize) -> usize {
    if n > 12 {
        8
    } else if n > 8 {
        10
    } else {
        12
    }
}

pub fn elide_label(label: &str, n: usize) -> String {
    let max = label_max_chars(n);
    if label.chars().count() <= max {
        return label.to_string();
    }
    let mut out: String = label.chars().take(max).collect();
    out.push(ELLIPSIS);
    out
}

/// Label font size: proportional to the radius, shrinking as segments
/// narrow.
pub fn label_font_px(radius: f64, n: usize) -> f64 {
    let count_factor = if n > 12 {
        0.7
    } else if n > 8 {
        0.85
    } else {
        1.0
    };
    (radius / 9.0 * count_factor).clamp(MIN_FONT_PX, MAX_FONT_PX)
}
