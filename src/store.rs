//! Owning polygon collection
//!
//! Polygons are owned here and addressed by identifier; deletion is
//! "remove by id from the store" rather than a back-pointer from the
//! polygon to its container. Iteration order is insertion order, which
//! doubles as draw order.

use crate::cache::ScanPolygon;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::RasterError;

/// Identifier for a polygon owned by a `PolygonStore`
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub struct PolygonId(u64);

#[derive(Debug,Default)]
pub struct PolygonStore {
    entries: Vec<(PolygonId, ScanPolygon)>,
    next_id: u64,
}

impl PolygonStore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn create(&mut self, points: &[Point], name: &str) -> PolygonId {
        self.insert(ScanPolygon::with_name(Polygon::from_points(points), name))
    }
    pub fn insert(&mut self, poly: ScanPolygon) -> PolygonId {
        let id = PolygonId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, poly));
        id
    }
    pub fn get(&self, id: PolygonId) -> Option<&ScanPolygon> {
        self.entries.iter().find(|(i, _)| *i == id).map(|(_, p)| p)
    }
    pub fn get_mut(&mut self, id: PolygonId) -> Option<&mut ScanPolygon> {
        self.entries.iter_mut().find(|(i, _)| *i == id).map(|(_, p)| p)
    }
    pub fn remove(&mut self, id: PolygonId) -> bool {
        match self.entries.iter().position(|(i, _)| *i == id) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (PolygonId, &ScanPolygon)> {
        self.entries.iter().map(|(id, p)| (*id, p))
    }
    /// Rebuild every polygon's cache
    ///
    /// Failures are collected per polygon and never abort the rest; one
    /// malformed polygon must not halt the render pipeline.
    pub fn rebuild_all(&mut self) -> Vec<(PolygonId, RasterError)> {
        let mut errors = vec![];
        for (id, p) in self.entries.iter_mut() {
            if let Err(e) = p.rebuild_cache() {
                errors.push((*id, e));
            }
        }
        errors
    }
}
