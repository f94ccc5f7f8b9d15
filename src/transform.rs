//! Affine transformations
//!
//! 3x3 homogeneous matrices under the row-vector convention: a point is
//! transformed as `p' = p * M`, so "apply A then B" composes as `A * B`.
//! The third column stays (0, 0, 1), only translation, rotation, scale
//! and shear are representable.

use crate::point::Point;
use crate::polygon::Polygon;

use std::ops::Mul;

/// 3x3 affine matrix
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Matrix33 {
    pub m: [[f64; 3]; 3],
}

impl Default for Matrix33 {
    fn default() -> Matrix33 {
        Matrix33::identity()
    }
}

impl Matrix33 {
    pub fn identity() -> Self {
        Self { m: [[1.0, 0.0, 0.0],
                   [0.0, 1.0, 0.0],
                   [0.0, 0.0, 1.0]] }
    }
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self { m: [[1.0, 0.0, 0.0],
                   [0.0, 1.0, 0.0],
                   [ dx,  dy, 1.0]] }
    }
    /// Rotation by theta degrees, counter-clockwise for y up
    pub fn rotation(theta: f64) -> Self {
        let rad = theta.to_radians();
        let cos = rad.cos();
        let sin = rad.sin();
        Self { m: [[ cos, sin, 0.0],
                   [-sin, cos, 0.0],
                   [ 0.0, 0.0, 1.0]] }
    }
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self { m: [[ sx, 0.0, 0.0],
                   [0.0,  sy, 0.0],
                   [0.0, 0.0, 1.0]] }
    }
    /// Shear by h horizontally and v vertically
    pub fn shearing(h: f64, v: f64) -> Self {
        Self { m: [[1.0,   v, 0.0],
                   [  h, 1.0, 0.0],
                   [0.0, 0.0, 1.0]] }
    }
    /// Apply self about an arbitrary pivot:
    /// translate(-pivot) * self * translate(pivot)
    pub fn about(self, pivot: Point) -> Self {
        let (px, py) = (pivot.x as f64, pivot.y as f64);
        Matrix33::translation(-px, -py) * self * Matrix33::translation(px, py)
    }
    /// Transform one point, rounding to nearest with ties away from zero
    pub fn transform_point(&self, p: Point) -> Point {
        let (x, y) = (p.x as f64, p.y as f64);
        let m = &self.m;
        Point::new((x * m[0][0] + y * m[1][0] + m[2][0]).round() as i64,
                   (x * m[0][1] + y * m[1][1] + m[2][1]).round() as i64)
    }
    /// Transform every vertex in place
    ///
    /// Does not rebuild any span cache; the caller must do that explicitly.
    pub fn transform_polygon(&self, poly: &mut Polygon) {
        for p in poly.points.iter_mut() {
            *p = self.transform_point(*p);
        }
    }
}

impl Mul<Matrix33> for Matrix33 {
    type Output = Matrix33;
    fn mul(self, rhs: Matrix33) -> Matrix33 {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *v += self.m[i][k] * rhs.m[k][j];
                }
            }
        }
        Matrix33 { m: out }
    }
}
