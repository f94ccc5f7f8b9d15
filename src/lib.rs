
/// How does this work
///    poly  = Polygon( points )        -- ordered integer vertices, implicitly closed
///  Rasterize
///    table = EdgeTable::build(&poly)  -- bucket edges by starting scanline
///      skip horizontal edges
///      normalize to run upward, record ymin, ymax, x, dx, dy
///    sweep = RasterSweep::new(table)  -- (x, y) crossings, row by row
///      cleanup shared-vertex events
///      admit buckets, emit crossings, expire edges
///      DDA step, insertion re-sort
///  Cache
///    ScanPolygon::rebuild_cache       -- pair crossings into (y, x1, x2) spans
///    ScanPolygon::spans               -- last built list, stale after mutation
///  Present
///    Surface::draw_store              -- fill cached spans, PNG via to_file
///  Transforms run the other way: Matrix33 mutates the vertex list in place
///  and the caller rebuilds the cache explicitly.

pub mod point;
pub mod line;
pub mod polygon;
pub mod transform;
pub mod raster;
pub mod cache;
pub mod store;
pub mod color;
pub mod surface;

pub use crate::point::*;
pub use crate::line::*;
pub use crate::polygon::*;
pub use crate::transform::*;
pub use crate::raster::*;
pub use crate::cache::*;
pub use crate::store::*;
pub use crate::color::*;
pub use crate::surface::*;

use std::fmt;

/// Rasterizer failures, always local to one polygon
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum RasterError {
    /// Bucket building and the orientation tests need at least 3 vertices
    TooFewPoints(usize),
    /// A flat coordinate list must hold an even, nonzero number of values
    BadPointList(usize),
    /// The span cache was consulted before any successful rebuild
    NoCache,
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RasterError::TooFewPoints(n) =>
                write!(f, "polygon must be comprised of at least 3 points, got {}", n),
            RasterError::BadPointList(n) =>
                write!(f, "coordinate list must be a nonzero multiple of two, got {}", n),
            RasterError::NoCache =>
                write!(f, "no cached spans, call rebuild_cache first"),
        }
    }
}

impl std::error::Error for RasterError {}
