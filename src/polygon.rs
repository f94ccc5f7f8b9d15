//! Closed polygons over integer points

use crate::line::Line;
use crate::point::Point;
use crate::RasterError;

/// Ordered vertex list, implicitly closed
///
/// The edge from the last vertex back to the first is part of the
/// boundary. Vertex order and winding determine the shape; no fixed
/// winding direction is assumed.
#[derive(Debug,Default,Clone,PartialEq,Eq)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new() -> Self {
        Self { points: vec![] }
    }
    pub fn from_points(points: &[Point]) -> Self {
        Self { points: points.to_vec() }
    }
    /// Build from a flat x,y coordinate list
    pub fn from_list(coords: &[i64]) -> Result<Self, RasterError> {
        if coords.is_empty() || coords.len() % 2 != 0 {
            return Err(RasterError::BadPointList(coords.len()));
        }
        let points = coords.chunks(2)
            .map(|c| Point::new(c[0], c[1]))
            .collect();
        Ok(Self { points })
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn get_point(&self, idx: usize) -> Option<Point> {
        self.points.get(idx).copied()
    }
    /// Edge starting at vertex idx, wrapping back to the first vertex
    pub fn get_line(&self, idx: usize) -> Option<Line> {
        let n = self.points.len();
        if idx >= n {
            return None;
        }
        Some(Line::from_points(self.points[idx], self.points[(idx + 1) % n]))
    }
    pub fn points_iter(&self) -> std::slice::Iter<Point> {
        self.points.iter()
    }
    /// Lazy edge iterator, n edges for n vertices including the wraparound
    pub fn lines_iter(&self) -> LineIter {
        LineIter { poly: self, idx: 0 }
    }
    /// Sign of the cross product of the first two edges
    pub fn is_clockwise(&self) -> Result<bool, RasterError> {
        if self.points.len() < 3 {
            return Err(RasterError::TooFewPoints(self.points.len()));
        }
        let v1 = self.points[0].to(self.points[1]);
        let v2 = self.points[1].to(self.points[2]);
        Ok(v1.x * v2.y - v1.y * v2.x < 0)
    }
    /// True when every consecutive edge pair turns the same way,
    /// including the wraparound pair. Collinear edge pairs fail.
    pub fn is_convex(&self) -> Result<bool, RasterError> {
        let n = self.points.len();
        if n < 3 {
            return Err(RasterError::TooFewPoints(n));
        }
        let lines: Vec<Line> = self.lines_iter().collect();
        let mut pos = 0;
        let mut neg = 0;
        for i in 0..n {
            let c = lines[i].pseudocross(&lines[(i + 1) % n]);
            if c > 0 {
                pos += 1;
            } else if c < 0 {
                neg += 1;
            } else {
                return Ok(false);
            }
        }
        Ok(pos == 0 || neg == 0)
    }
}

/// Restartable edge iterator over a polygon
#[derive(Debug)]
pub struct LineIter<'a> {
    poly: &'a Polygon,
    idx: usize,
}

impl<'a> Iterator for LineIter<'a> {
    type Item = Line;
    fn next(&mut self) -> Option<Line> {
        let line = self.poly.get_line(self.idx)?;
        self.idx += 1;
        Some(line)
    }
}
