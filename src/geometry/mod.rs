//! Shape vertex helpers.
//!
//! Pure functions producing flat `f32` coordinate sequences
//! (`[x0, y0, x1, y1, ...]`) for polygon shapes the host draws on a canvas:
//! circles approximated from fixed templates, and rectangles with beveled or
//! rounded corners.
//!
//! None of these validate their input. Inverted bounds or oversized insets
//! yield a geometrically malformed polygon, never a failure — bounds checking
//! is the caller's business.

// =============================================================================
// Circle Templates
// =============================================================================

/// Normalized circle offsets, coarse: 8 points for small bounding boxes.
///
/// Offsets are scaled to a radius of 100 and interleaved x, y around the
/// box center.
pub const CIRCLE_COARSE: [f32; 16] = [
    92.0, 38.0, 38.0, 92.0, -38.0, 92.0, -92.0, 38.0, -92.0, -38.0, -38.0, -92.0, 38.0, -92.0,
    92.0, -38.0,
];

/// Normalized circle offsets, fine: 16 points for everything else.
pub const CIRCLE_FINE: [f32; 32] = [
    98.0, 20.0, 83.0, 56.0, 56.0, 83.0, 20.0, 98.0, -20.0, 98.0, -56.0, 83.0, -83.0, 56.0, -98.0,
    20.0, -98.0, -20.0, -83.0, -56.0, -56.0, -83.0, -20.0, -98.0, 20.0, -98.0, 56.0, -83.0, 83.0,
    -56.0, 98.0, -20.0,
];

/// Bounding-box width at which circle vertices switch to the fine template.
pub const FINE_WIDTH_MIN: f32 = 12.0;

// =============================================================================
// Vertex Builders
// =============================================================================

/// Circle vertices from a square bounding box: left, top and width.
///
/// Selects the coarse template below [`FINE_WIDTH_MIN`], fine otherwise,
/// then scales the normalized offsets by `w / 200` and translates them to the
/// box center. Output length is 16 or 32 numbers accordingly.
pub fn circle_vertices(x: f32, y: f32, w: f32) -> Vec<f32> {
    let r = w / 2.0;
    let (cx, cy) = (x + r, y + r);
    let scale = r / 100.0;
    let template: &[f32] = if w < FINE_WIDTH_MIN {
        &CIRCLE_COARSE
    } else {
        &CIRCLE_FINE
    };
    template
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let c = if i & 1 == 0 { cx } else { cy };
            c + v * scale
        })
        .collect()
}

/// Vertices for checkbox-like shapes: a rectangle with beveled corners.
///
/// 4 beveled corners = 8 corners defined by the 0 and `p` insetting
/// combinations for x and y. Always 16 numbers.
pub fn beveled_rect_vertices(x: f32, y: f32, x2: f32, y2: f32, p: f32) -> [f32; 16] {
    [
        x,
        y + p,
        x + p,
        y,
        x2 - p,
        y,
        x2,
        y + p,
        x2,
        y2 - p,
        x2 - p,
        y2,
        x + p,
        y2,
        x,
        y2 - p,
    ]
}

/// Vertices for button-like shapes: a rectangle with rounded corners.
///
/// 12 corners (4 x 3) defined by the 0, `p` and `q` insetting combinations
/// for x and y; `p` is the outer inset, `q` the diagonal one. Always
/// 24 numbers.
pub fn rounded_rect_vertices(x: f32, y: f32, x2: f32, y2: f32, p: f32, q: f32) -> [f32; 24] {
    [
        x,
        y + p,
        x + q,
        y + q,
        x + p,
        y,
        x2 - p,
        y,
        x2 - q,
        y + q,
        x2,
        y + p,
        x2,
        y2 - p,
        x2 - q,
        y2 - q,
        x2 - p,
        y2,
        x + p,
        y2,
        x + q,
        y2 - q,
        x,
        y2 - p,
    ]
}
