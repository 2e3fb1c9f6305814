//! Shared geometry calculations for rendering
//!
//! Path construction shared by every drawing surface.

use crate::domain::{Point2, vec2};

/// Stroke defaults matching a plain 2D canvas context
pub mod stroke {
    /// Default stroke width in surface pixels
    pub const WIDTH: f32 = 1.0;

    /// Circle bezier approximation constant: 4/3 * (sqrt(2) - 1)
    pub const BEZIER_K: f32 = 0.552_284_8;
}

/// Outline of a rectangle stored as two opposite corners.
///
/// Width and height are signed, so a rectangle dragged up-left walks the same
/// four corners as the equivalent rectangle anchored at the other corner.
pub fn rectangle_outline(top_left: Point2, bottom_right: Point2) -> [Point2; 4] {
    let w = bottom_right.x - top_left.x;
    let h = bottom_right.y - top_left.y;
    [
        top_left,
        vec2(top_left.x + w, top_left.y),
        vec2(top_left.x + w, top_left.y + h),
        vec2(top_left.x, top_left.y + h),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut corners: Vec<Point2>) -> Vec<Point2> {
        corners.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        corners
    }

    #[test]
    fn test_rectangle_outline() {
        let corners = rectangle_outline(vec2(1.0, 2.0), vec2(4.0, 6.0));
        assert_eq!(
            corners,
            [vec2(1.0, 2.0), vec2(4.0, 2.0), vec2(4.0, 6.0), vec2(1.0, 6.0)]
        );
    }

    #[test]
    fn test_negative_extent_covers_same_corners() {
        let forward = rectangle_outline(vec2(1.0, 2.0), vec2(4.0, 6.0));
        let backward = rectangle_outline(vec2(4.0, 6.0), vec2(1.0, 2.0));
        assert_eq!(sorted(forward.to_vec()), sorted(backward.to_vec()));
    }
}
