//! Vertex transform stage

use crate::attrib::Attributes;
use crate::transform::Transform;
use crate::error::*;

use log::trace;

use std::ops::{Add, AddAssign, Mul, Sub};

/// Screen-space x
pub const VX: usize = 0;
/// Screen-space y
pub const VY: usize = 1;
/// Depth
pub const VZ: usize = 2;
/// Reciprocal of w, or 1 without perspective correction
pub const VW: usize = 3;
/// Red, green, blue, alpha occupy 4 .. 8
pub const VR: usize = 4;
/// Texture s, t occupy 8 .. 10
pub const VS: usize = 8;
/// Number of components carried per vertex
pub const VLEN: usize = 10;

/// Fragment-ready vertex
///
/// Layout: `[x, y, z, 1/w, r, g, b, a, s, t]`. With perspective correction
/// every component from `z` onward has been divided by w. All components are
/// interpolated together, linearly in screen space.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Vertex {
    pub v: [f64; VLEN],
}

impl Vertex {
    pub fn new(v: [f64; VLEN]) -> Self {
        Self { v }
    }
    pub fn x(&self) -> f64 { self.v[VX] }
    pub fn y(&self) -> f64 { self.v[VY] }
    /// Component `d`
    pub fn get(&self, d: usize) -> f64 {
        self.v[d]
    }
    /// Every component divided by `k`
    pub fn div(&self, k: f64) -> Self {
        let mut v = self.v;
        v.iter_mut().for_each(|a| *a /= k);
        Vertex { v }
    }
}

impl Add for Vertex {
    type Output = Vertex;
    fn add(self, rhs: Vertex) -> Vertex {
        let mut v = self.v;
        v.iter_mut().zip(rhs.v.iter()).for_each(|(a, b)| *a += b);
        Vertex { v }
    }
}
impl AddAssign for Vertex {
    fn add_assign(&mut self, rhs: Vertex) {
        *self = *self + rhs;
    }
}
impl Sub for Vertex {
    type Output = Vertex;
    fn sub(self, rhs: Vertex) -> Vertex {
        let mut v = self.v;
        v.iter_mut().zip(rhs.v.iter()).for_each(|(a, b)| *a -= b);
        Vertex { v }
    }
}
impl Mul<f64> for Vertex {
    type Output = Vertex;
    fn mul(self, k: f64) -> Vertex {
        let mut v = self.v;
        v.iter_mut().for_each(|a| *a *= k);
        Vertex { v }
    }
}

/// Largest number of samples a color or depth target may hold
pub const MAX_SAMPLES: usize = 1 << 26;

/// Mapping from clip space [-1,1] to (supersampled) pixel space
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Viewport {
    width: usize,
    height: usize,
    level: usize,
}

impl Viewport {
    /// Viewport over a `width` x `height` canvas with `level` samples per
    /// pixel in each direction
    ///
    /// Fails with `InvalidState` if the sample grid is empty or larger
    /// than [MAX_SAMPLES]
    ///
    /// [MAX_SAMPLES]: constant.MAX_SAMPLES.html
    pub fn new(width: usize, height: usize, level: usize) -> Result<Self> {
        let size = width.checked_mul(level)
            .and_then(|w| height.checked_mul(level).map(|h| (w, h)))
            .and_then(|(w, h)| w.checked_mul(h));
        match size {
            Some(n) if n > 0 && n <= MAX_SAMPLES => Ok(Self { width, height, level }),
            _ => Err(Error::state(format!("{}x{} at level {} exceeds {} samples",
                                          width, height, level, MAX_SAMPLES))),
        }
    }
    /// Map normalized device coordinates to sample coordinates
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        ((x + 1.0) * self.sample_width() as f64 / 2.0,
         (y + 1.0) * self.sample_height() as f64 / 2.0)
    }
    /// Samples across
    pub fn sample_width(&self) -> usize {
        self.width * self.level
    }
    /// Samples down
    pub fn sample_height(&self) -> usize {
        self.height * self.level
    }
}

/// Transform vertex `i` into a fragment-ready [Vertex]
///
/// Fails with `DegenerateGeometry` if w is zero or any resulting component
/// is not finite
///
/// [Vertex]: struct.Vertex.html
pub fn transform_vertex(attrs: &Attributes, i: usize, transform: Option<&Transform>,
                        view: &Viewport, perspective: bool) -> Result<Vertex> {
    let pos = attrs.position(i)?;
    let color = attrs.color(i)?;
    let [s, t] = attrs.texcoord(i)?;

    let pos = match transform {
        Some(m) => m.apply(pos),
        None => pos,
    };
    let w = pos[3];
    if w == 0.0 {
        return Err(Error::DegenerateGeometry { vertex: i });
    }
    let (x, y) = view.map(pos[0] / w, pos[1] / w);
    let rest = [pos[2], 1.0, color[0], color[1], color[2], color[3], s, t];
    let k = if perspective { 1.0 / w } else { 1.0 };

    let mut v = [0.0; VLEN];
    v[VX] = x;
    v[VY] = y;
    for (dst, src) in v[VZ ..].iter_mut().zip(rest.iter()) {
        *dst = src * k;
    }
    if v.iter().any(|c| ! c.is_finite()) {
        return Err(Error::DegenerateGeometry { vertex: i });
    }
    trace!("VERTEX {}: {:?}", i, v);
    Ok(Vertex::new(v))
}
