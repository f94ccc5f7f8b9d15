//! Cached rasterization per polygon

use crate::color::Rgba8;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::raster::EdgeTable;
use crate::raster::RasterSweep;
use crate::transform::Matrix33;
use crate::RasterError;

/// One horizontal run of interior pixels: fills x1..x2 on row y
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub y: i64,
    pub x1: i64,
    pub x2: i64,
}

/// Polygon with a cached span list and display attributes
///
/// Every vertex mutation marks the cache stale. Nothing rebuilds it
/// automatically: `spans` keeps returning the last built list until
/// `rebuild_cache` is called again, and `cache_valid` reports whether
/// that list still matches the vertices.
#[derive(Debug,Default,Clone)]
pub struct ScanPolygon {
    poly: Polygon,
    pub name: String,
    pub fill_color: Rgba8,
    pub outline_color: Rgba8,
    pub outline_thickness: i64,
    spans: Vec<Span>,
    has_cache: bool,
    valid: bool,
}

impl ScanPolygon {
    pub fn new(poly: Polygon) -> Self {
        Self { poly, ..Default::default() }
    }
    pub fn with_name(poly: Polygon, name: &str) -> Self {
        Self { poly, name: name.to_string(), ..Default::default() }
    }
    pub fn polygon(&self) -> &Polygon {
        &self.poly
    }
    pub fn points(&self) -> &[Point] {
        &self.poly.points
    }
    pub fn len(&self) -> usize {
        self.poly.len()
    }
    pub fn is_empty(&self) -> bool {
        self.poly.is_empty()
    }
    pub fn is_clockwise(&self) -> Result<bool, RasterError> {
        self.poly.is_clockwise()
    }
    pub fn is_convex(&self) -> Result<bool, RasterError> {
        self.poly.is_convex()
    }

    // -- vertex mutation; each call leaves the cache stale

    pub fn add_point(&mut self, x: i64, y: i64) {
        self.poly.points.push(Point::new(x, y));
        self.valid = false;
    }
    pub fn insert_point(&mut self, idx: usize, x: i64, y: i64) -> bool {
        if idx > self.poly.points.len() {
            return false;
        }
        self.poly.points.insert(idx, Point::new(x, y));
        self.valid = false;
        true
    }
    pub fn update_point(&mut self, idx: usize, x: i64, y: i64) -> bool {
        match self.poly.points.get_mut(idx) {
            Some(p) => {
                p.x = x;
                p.y = y;
                self.valid = false;
                true
            }
            None => false,
        }
    }
    /// Overwrite a leading run of vertices; fails if given more points
    /// than the polygon holds
    pub fn update_points(&mut self, points: &[(i64, i64)]) -> bool {
        if points.len() > self.poly.points.len() {
            return false;
        }
        for (p, &(x, y)) in self.poly.points.iter_mut().zip(points) {
            p.x = x;
            p.y = y;
        }
        self.valid = false;
        true
    }
    /// Overwrite existing vertices and append whatever remains
    pub fn replace_points(&mut self, points: &[(i64, i64)]) {
        let n = self.poly.points.len();
        for (idx, &(x, y)) in points.iter().enumerate() {
            if idx < n {
                self.poly.points[idx] = Point::new(x, y);
            } else {
                self.poly.points.push(Point::new(x, y));
            }
        }
        self.valid = false;
    }
    /// Apply an affine transform to every vertex in place
    ///
    /// Like any other mutation this only marks the cache stale; the
    /// caller decides when to rebuild.
    pub fn transform(&mut self, m: &Matrix33) {
        m.transform_polygon(&mut self.poly);
        self.valid = false;
    }
    pub fn remove_point(&mut self, idx: usize) -> bool {
        if idx >= self.poly.points.len() {
            return false;
        }
        self.poly.points.remove(idx);
        self.valid = false;
        true
    }

    // -- cache

    /// Run the bucket builder and the sweep, pair crossings into spans
    ///
    /// Returns Ok(false) when any row produced degenerate output; the
    /// cache then holds the spans of the well-formed rows only. Err is
    /// reserved for the under-3-vertices precondition.
    pub fn rebuild_cache(&mut self) -> Result<bool, RasterError> {
        let table = EdgeTable::build(&self.poly)?;
        let mut sweep = RasterSweep::new(table);
        let mut spans = vec![];
        let mut ok = true;
        let mut row_y = 0;
        let mut row_x: Vec<i64> = vec![];
        for (x, y) in &mut sweep {
            if !row_x.is_empty() && y != row_y {
                ok &= flush_row(&mut spans, row_y, &mut row_x);
            }
            row_y = y;
            row_x.push(x);
        }
        if !row_x.is_empty() {
            ok &= flush_row(&mut spans, row_y, &mut row_x);
        }
        let crossed = sweep.crossed_rows();
        if !crossed.is_empty() {
            ok = false;
            spans.retain(|s| !crossed.contains(&s.y));
        }
        self.spans = spans;
        self.has_cache = true;
        self.valid = true;
        Ok(ok)
    }
    /// Last built span list
    ///
    /// Stale after any mutation until the next rebuild; consulting it
    /// before the first build is an error.
    pub fn spans(&self) -> Result<&[Span], RasterError> {
        if !self.has_cache {
            return Err(RasterError::NoCache);
        }
        Ok(&self.spans)
    }
    /// False whenever the vertex list changed after the last rebuild
    pub fn cache_valid(&self) -> bool {
        self.valid
    }
}

/// Pair one row's crossings into spans. An odd count is a malformed-
/// geometry condition; the whole row is withheld and false returned.
/// Zero-width pairs (shared apex markers) fill nothing and are dropped.
fn flush_row(spans: &mut Vec<Span>, y: i64, xs: &mut Vec<i64>) -> bool {
    let even = xs.len() % 2 == 0;
    if even {
        for pair in xs.chunks(2) {
            if pair[1] > pair[0] {
                spans.push(Span { y, x1: pair[0], x2: pair[1] });
            }
        }
    }
    xs.clear();
    even
}
