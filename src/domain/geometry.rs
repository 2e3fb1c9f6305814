//! Homogeneous 2D vectors and 3x3 affine matrices

use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// A point in surface-local coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: Point2) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Lift into homogeneous coordinates with `w = 1`
    pub fn to_homogeneous(self) -> Vec3 {
        vec3(self.x, self.y, 1.0)
    }
}

/// Homogeneous point (x, y, w)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub w: f64,
}

impl Vec3 {
    /// Drop the homogeneous coordinate. No renormalisation by `w` is done.
    pub fn xy(self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

pub fn vec2(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

pub fn vec3(x: f64, y: f64, w: f64) -> Vec3 {
    Vec3 { x, y, w }
}

/// Row-major 3x3 matrix for 2D affine maps in homogeneous coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineMatrix3 {
    m: [[f64; 3]; 3],
}

impl AffineMatrix3 {
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Build a matrix from its rows
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self {
            m: [[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]],
        }
    }

    /// Scale about the origin. Zero or negative factors are accepted as-is.
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self {
            m: [[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Counter-clockwise rotation about the origin, angle in degrees
    pub fn rotation(angle_degrees: f64) -> Self {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Self {
            m: [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Map a point through this matrix with `w = 1`, keeping only (x, y)
    #[inline]
    pub fn transform_point(&self, p: Point2) -> Point2 {
        (*self * p.to_homogeneous()).xy()
    }
}

impl Default for AffineMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Matrix-vector product `matrix * v`
pub fn multiply(matrix: &AffineMatrix3, v: Vec3) -> Vec3 {
    let m = &matrix.m;
    Vec3 {
        x: m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.w,
        y: m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.w,
        w: m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.w,
    }
}

impl Mul<Vec3> for AffineMatrix3 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        multiply(&self, v)
    }
}

/// `a * b` applies `b` first, then `a`
impl Mul for AffineMatrix3 {
    type Output = AffineMatrix3;

    fn mul(self, rhs: AffineMatrix3) -> AffineMatrix3 {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        AffineMatrix3 { m: out }
    }
}
