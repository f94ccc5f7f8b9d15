//! Line segments between integer points

use crate::point::Point;

/// Ordered pair of points
///
/// Never owned independently, always derived from two polygon vertices
/// or held as a transient edge record.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { p1: Point::new(x1, y1), p2: Point::new(x2, y2) }
    }
    pub fn from_points(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
    pub fn start(&self) -> Point {
        self.p1
    }
    pub fn end(&self) -> Point {
        self.p2
    }
    pub fn delta(&self) -> Point {
        self.p1.to(self.p2)
    }
    pub fn delta_abs(&self) -> Point {
        self.p1.to_abs(self.p2)
    }
    pub fn left_normal(&self) -> Point {
        let d = self.delta();
        Point::new(-d.y, d.x)
    }
    pub fn right_normal(&self) -> Point {
        let d = self.delta();
        Point::new(d.y, -d.x)
    }
    /// Cross product of the two delta vectors, sign gives relative turn
    pub fn pseudocross(&self, l: &Line) -> i64 {
        let v1 = self.delta();
        let v2 = l.delta();
        v1.x * v2.y - v1.y * v2.x
    }
    pub fn swap_points(&mut self) {
        std::mem::swap(&mut self.p1, &mut self.p2);
    }
}
