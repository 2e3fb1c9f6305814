//! Global transforms over the committed shape list
//!
//! Geometry is rewritten in place, so repeated transforms compound and the
//! original coordinates cannot be recovered except by applying an inverse.

use crate::domain::{AffineMatrix3, Shape};

/// Offset applied by the translate trigger
pub const TRANSLATE_STEP: (f64, f64) = (20.0, 20.0);
/// Factors applied by the scale trigger
pub const SCALE_STEP: (f64, f64) = (1.2, 1.2);
/// Counter-clockwise angle in degrees applied by the rotate trigger
pub const ROTATE_STEP_DEGREES: f64 = 15.0;

/// Fixed-delta global transform bound to a command trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStep {
    Translate,
    Scale,
    Rotate,
}

impl TransformStep {
    pub fn matrix(self) -> AffineMatrix3 {
        match self {
            TransformStep::Translate => {
                AffineMatrix3::translation(TRANSLATE_STEP.0, TRANSLATE_STEP.1)
            }
            TransformStep::Scale => AffineMatrix3::scale(SCALE_STEP.0, SCALE_STEP.1),
            TransformStep::Rotate => AffineMatrix3::rotation(ROTATE_STEP_DEGREES),
        }
    }
}

/// Map every defining point of every shape through `matrix`.
///
/// The homogeneous coordinate of the result is discarded without
/// renormalisation; only affine matrices give meaningful results.
pub fn apply_transform(shapes: &mut [Shape], matrix: &AffineMatrix3) {
    for shape in shapes.iter_mut() {
        shape.map_points(|p| matrix.transform_point(p));
    }
}
