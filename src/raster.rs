//! Triangle scan conversion
//!
//! Triangles are filled with incremental edge stepping (DDA), not barycentric
//! weights. Every interpolant is first snapped to the next integer of the
//! stepped dimension, then advanced one whole unit at a time, so an edge from
//! `a` to `b` covers the half-open range `[ceil(a), b)`. Shared edges between
//! triangles are therefore never drawn twice.

use crate::vertex::{Vertex, VX, VY};

use log::trace;

use std::cmp::Ordering;

/// Digital differential analyzer along one dimension
///
/// Starting at the first integer value of dimension `d` at or after `a`,
/// `p` advances by `s` where `s[d] == 1`, stopping before `b[d]`. The
/// number of samples is fixed up front as `ceil(b[d]) - ceil(a[d])`.
#[derive(Debug,Copy,Clone)]
pub struct Dda {
    /// Current sample
    pub p: Vertex,
    /// Per unit step of dimension `d`
    pub s: Vertex,
    start: f64,
    i: usize,
    n: usize,
    d: usize,
}

impl Dda {
    /// Set up stepping from `a` to `b` along dimension `d`
    ///
    /// Endpoints may be in either order. Returns `None` when both endpoints
    /// share the same value of `d`; such an edge has no samples.
    pub fn new(a: &Vertex, b: &Vertex, d: usize) -> Option<Self> {
        if a.get(d) == b.get(d) {
            return None;
        }
        let (a, b) = if a.get(d) > b.get(d) { (b, a) } else { (a, b) };
        let s = (*b - *a).div(b.get(d) - a.get(d));
        let start = a.get(d).ceil();
        let mut p = *a + s * (start - a.get(d));
        p.v[d] = start;
        let n = (b.get(d).ceil() - start).max(0.0) as usize;
        Some(Self { p, s, start, i: 0, n, d })
    }
    /// Number of samples still to be produced
    pub fn remaining(&self) -> usize {
        self.n.saturating_sub(self.i)
    }
    /// All samples have been produced
    pub fn done(&self) -> bool {
        self.i >= self.n
    }
    /// Advance one unit
    pub fn step(&mut self) {
        self.p += self.s;
        self.i += 1;
        // Stepped coordinate stays on the integer grid
        self.p.v[self.d] = self.start + self.i as f64;
    }
}

impl Iterator for Dda {
    type Item = Vertex;
    fn next(&mut self) -> Option<Vertex> {
        if self.done() {
            return None;
        }
        let out = self.p;
        self.step();
        Some(out)
    }
}

/// Signed area test for clockwise winding
///
/// Computes `(p2 - p1) x (p3 - p2)` in screen space; positive values are
/// clockwise with y pointing down
pub fn is_backface(p1: &Vertex, p2: &Vertex, p3: &Vertex) -> bool {
    let (ax, ay) = (p2.x() - p1.x(), p2.y() - p1.y());
    let (bx, by) = (p3.x() - p2.x(), p3.y() - p2.y());
    ax * by - ay * bx > 0.0
}

/// Emit every integer x sample between `a` and `b` on one scanline
fn scan_span<F: FnMut(&Vertex)>(a: &Vertex, b: &Vertex, emit: &mut F) {
    if let Some(dda) = Dda::new(a, b, VX) {
        for frag in dda {
            emit(&frag);
        }
    }
}

/// Walk the short edge `short`, pairing each scanline with the long edge
fn scan_half<F: FnMut(&Vertex)>(short: Option<Dda>, long: &mut Dda, emit: &mut F) {
    let mut short = match short {
        Some(s) => s,
        None => return,
    };
    while ! short.done() {
        scan_span(&short.p, &long.p, emit);
        short.step();
        long.step();
    }
}

/// Scan convert the triangle (`a`,`b`,`c`)
///
/// `emit` is called once per covered integer sample with all attributes
/// interpolated linearly in screen space. Triangles with no vertical
/// extent emit nothing.
pub fn scan_triangle<F: FnMut(&Vertex)>(a: &Vertex, b: &Vertex, c: &Vertex, mut emit: F) {
    let mut v = [*a, *b, *c];
    v.sort_by(|p, q| p.y().partial_cmp(&q.y()).unwrap_or(Ordering::Equal));
    let [top, mid, bot] = v;
    trace!("SCAN TRIANGLE: ({},{}) ({},{}) ({},{})",
           top.x(), top.y(), mid.x(), mid.y(), bot.x(), bot.y());

    let mut long = match Dda::new(&top, &bot, VY) {
        Some(d) => d,
        None => return,
    };
    scan_half(Dda::new(&top, &mid, VY), &mut long, &mut emit);
    scan_half(Dda::new(&mid, &bot, VY), &mut long, &mut emit);
}

/// Integer sample coordinates of a fragment
pub fn sample_xy(frag: &Vertex) -> (i64, i64) {
    (frag.x().round() as i64, frag.y().round() as i64)
}
