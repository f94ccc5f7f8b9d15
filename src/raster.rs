//! Edge bucketing and the scanline sweep
//!
//! `EdgeTable::build` groups a polygon's non-horizontal edges into buckets
//! keyed by the scanline where each edge first becomes active. `RasterSweep`
//! consumes the buckets top to bottom, keeps the active edge set sorted by
//! x, and yields one (x, y) crossing per active edge per row. An edge is
//! active while the sweep row is in [ymin, ymax); shared-vertex events are
//! resolved before emission so every row of a simple polygon has an even
//! crossing count. Consumers pair crossings two at a time into fill spans.

use crate::line::Line;
use crate::polygon::Polygon;
use crate::RasterError;

/// One active edge of the sweep
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct EdgeState {
    /// Source edge, normalized so p1 is the lower endpoint
    pub edge: Line,
    /// Row at which the edge stops contributing crossings, exclusive
    pub y_max: i64,
    /// Current x crossing
    pub x: i64,
    /// x delta over the full edge
    pub dx: i64,
    /// y delta, always positive after normalization
    pub dy: i64,
    /// Fixed-point error accumulator for the stepper
    pub remainder: i64,
}

impl EdgeState {
    pub fn new(edge: Line, y_max: i64, x: i64, dx: i64, dy: i64) -> Self {
        Self { edge, y_max, x, dx, dy, remainder: 0 }
    }
    /// Advance x by one scanline
    ///
    /// Symmetric Bresenham-style stepper: the remainder accumulates dx
    /// and transfers whole pixels while 2*|remainder| reaches dy, which
    /// avoids floating-point drift over long edges and rounds half steps
    /// toward the direction of travel.
    pub fn step(&mut self) {
        self.remainder += self.dx;
        if self.dx >= 0 {
            while 2 * self.remainder >= self.dy {
                self.x += 1;
                self.remainder -= self.dy;
            }
        } else {
            while -2 * self.remainder >= self.dy {
                self.x -= 1;
                self.remainder += self.dy;
            }
        }
    }
}

/// Edges bucketed by the scanline where they first become active
///
/// Keys are kept sorted ascending; `buckets` is parallel to `keys`.
/// Insertion order within one bucket is unspecified.
#[derive(Debug,Default,Clone)]
pub struct EdgeTable {
    pub keys: Vec<i64>,
    pub buckets: Vec<Vec<EdgeState>>,
}

impl EdgeTable {
    pub fn build(poly: &Polygon) -> Result<EdgeTable, RasterError> {
        if poly.len() < 3 {
            return Err(RasterError::TooFewPoints(poly.len()));
        }
        let mut table = EdgeTable::default();
        for mut e in poly.lines_iter() {
            let mut dt = e.delta();
            if dt.y == 0 {
                // horizontal edges never cross a scanline
                continue;
            }
            if dt.y < 0 {
                e.swap_points();
                dt.invert();
            }
            let ymin = e.p1.y;
            let ymax = e.p2.y;
            let x = e.p1.x;
            table.push(ymin, EdgeState::new(e, ymax, x, dt.x, dt.y));
        }
        Ok(table)
    }
    fn push(&mut self, key: i64, st: EdgeState) {
        match self.keys.binary_search(&key) {
            Ok(i) => self.buckets[i].push(st),
            Err(i) => {
                self.keys.insert(i, key);
                self.buckets.insert(i, vec![st]);
            }
        }
    }
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Scanline sweep over a bucketed edge table
///
/// Iterates (x, y) crossings row by row, ascending x within a row.
/// The sweep owns the table; its state lives for one invocation only.
#[derive(Debug)]
pub struct RasterSweep {
    keys: Vec<i64>,
    buckets: Vec<Vec<EdgeState>>,
    next_bucket: usize,
    active: Vec<EdgeState>,
    y: i64,
    row: Vec<(i64, i64)>,
    row_pos: usize,
    crossed: Vec<i64>,
}

impl Iterator for RasterSweep {
    type Item = (i64, i64);
    fn next(&mut self) -> Option<(i64, i64)> {
        while self.row_pos >= self.row.len() {
            if !self.advance() {
                return None;
            }
        }
        let c = self.row[self.row_pos];
        self.row_pos += 1;
        Some(c)
    }
}

impl RasterSweep {
    pub fn new(table: EdgeTable) -> Self {
        let y = table.keys.first().copied().unwrap_or(0);
        Self { keys: table.keys,
               buckets: table.buckets,
               next_bucket: 0,
               active: vec![],
               y,
               row: vec![],
               row_pos: 0,
               crossed: vec![],
        }
    }
    /// Rows where active edges strictly swapped x order between scanlines
    ///
    /// Two edges of a simple polygon may touch at a shared vertex but
    /// never cross mid-span, so an order inversion marks the row where a
    /// self-intersecting boundary crossed itself. Complete once the sweep
    /// is exhausted.
    pub fn crossed_rows(&self) -> &[i64] {
        &self.crossed
    }

    /// Process scanlines until a row emits crossings or the sweep ends
    fn advance(&mut self) -> bool {
        self.row.clear();
        self.row_pos = 0;
        while self.row.is_empty() {
            if self.active.is_empty() {
                if self.next_bucket >= self.keys.len() {
                    return false;
                }
                self.y = self.keys[self.next_bucket];
            }
            let y = self.y;
            self.cleanup(y);
            self.admit_row(y);
            for st in &self.active {
                self.row.push((st.x, y));
            }
            self.row.sort_by_key(|c| c.0);
            self.active.retain(|st| st.y_max > y);
            for st in self.active.iter_mut() {
                st.step();
            }
            self.resort(y + 1);
            self.y = y + 1;
            if self.row.is_empty()
                && self.active.is_empty()
                && self.next_bucket >= self.keys.len()
            {
                return false;
            }
        }
        true
    }

    /// Resolve edges expiring at this row before they can emit
    ///
    /// An expiring edge (y_max == y) is classified by its upper endpoint:
    /// no other active edge shares it (pass-through vertex, or the vertex
    /// continues into a horizontal or not-yet-admitted edge), so the edge
    /// is dropped; or an adjacent-by-x expiring edge shares it (local
    /// maximum), so both are dropped after marking the apex with a doubled
    /// crossing that pairs into an empty span. A shared apex between
    /// non-neighboring edges only happens on a self-intersecting boundary;
    /// both are left to emit and expire normally. Edges admitted this row
    /// (local minima) are never touched, cleanup runs before admission.
    fn cleanup(&mut self, y: i64) {
        let n = self.active.len();
        if n == 0 {
            return;
        }
        let mut dead = vec![false; n];
        for i in 0..n {
            if dead[i] || self.active[i].y_max != y {
                continue;
            }
            let top = self.active[i].edge.p2;
            let partner = (0..n).find(|&j| {
                j != i && !dead[j]
                    && self.active[j].y_max == y
                    && self.active[j].edge.p2 == top
            });
            match partner {
                None => {
                    dead[i] = true;
                }
                Some(j) if (i + 1) % n == j || (j + 1) % n == i => {
                    self.row.push((self.active[i].x, y));
                    self.row.push((self.active[i].x, y));
                    dead[i] = true;
                    dead[j] = true;
                }
                Some(_) => {}
            }
        }
        let mut idx = 0;
        self.active.retain(|_| {
            let d = dead[idx];
            idx += 1;
            !d
        });
    }

    fn admit_row(&mut self, y: i64) {
        while self.next_bucket < self.keys.len() && self.keys[self.next_bucket] == y {
            let bucket = std::mem::take(&mut self.buckets[self.next_bucket]);
            self.next_bucket += 1;
            for st in bucket {
                self.admit(st);
            }
        }
    }

    /// Insert keeping the set sorted by x; ties order by slope so edges
    /// leaving a shared vertex stay sorted as they diverge
    fn admit(&mut self, st: EdgeState) {
        let mut i = 0;
        while i < self.active.len() {
            let a = &self.active[i];
            if a.x < st.x || (a.x == st.x && a.dx * st.dy <= st.dx * a.dy) {
                i += 1;
            } else {
                break;
            }
        }
        self.active.insert(i, st);
    }

    /// Stable insertion sort by x; order changes little between rows.
    /// Any swap is a strict inversion and flags the upcoming row.
    fn resort(&mut self, next_y: i64) {
        let mut inverted = false;
        for i in 1..self.active.len() {
            let mut j = i;
            while j > 0 && self.active[j - 1].x > self.active[j].x {
                self.active.swap(j - 1, j);
                inverted = true;
                j -= 1;
            }
        }
        if inverted {
            self.crossed.push(next_y);
        }
    }
}
