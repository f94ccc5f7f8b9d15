//! Integer 2D points

use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;

/// Integer 2D point with value equality
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    /// Vector from self to p
    pub fn to(&self, p: Point) -> Point {
        Point::new(p.x - self.x, p.y - self.y)
    }
    /// Component-wise absolute vector from self to p
    pub fn to_abs(&self, p: Point) -> Point {
        Point::new((p.x - self.x).abs(), (p.y - self.y).abs())
    }
    pub fn dot(&self, p: Point) -> i64 {
        self.x * p.x + self.y * p.y
    }
    pub fn abs(&self) -> Point {
        Point::new(self.x.abs(), self.y.abs())
    }
    /// Negate both components in place
    pub fn invert(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, p: Point) -> Point {
        Point::new(self.x + p.x, self.y + p.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, p: Point) {
        self.x += p.x;
        self.y += p.y;
    }
}

impl Mul<i64> for Point {
    type Output = Point;
    fn mul(self, s: i64) -> Point {
        Point::new(self.x * s, self.y * s)
    }
}

impl MulAssign<i64> for Point {
    fn mul_assign(&mut self, s: i64) {
        self.x *= s;
        self.y *= s;
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}
