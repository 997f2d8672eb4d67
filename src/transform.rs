//! 4x4 homogeneous transform

/// Homogeneous 4x4 transform, stored column-major
///
/// Element (row `r`, column `c`) lives at `m[c * 4 + r]`, the same order
/// values are supplied by `uniformMatrix`.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    pub m: [f64; 16],
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity transform
    pub fn new() -> Self {
        let mut m = [0.0; 16];
        m[0] = 1.0;
        m[5] = 1.0;
        m[10] = 1.0;
        m[15] = 1.0;
        Self { m }
    }
    /// Transform from 16 values in column-major order
    pub fn from_column_major(m: [f64; 16]) -> Self {
        Self { m }
    }
    /// Element at row `r`, column `c`
    pub fn at(&self, r: usize, c: usize) -> f64 {
        self.m[c * 4 + r]
    }
    /// Transform a homogeneous point
    pub fn apply(&self, p: [f64; 4]) -> [f64; 4] {
        let mut out = [0.0; 4];
        for (r, v) in out.iter_mut().enumerate() {
            *v = (0 .. 4).map(|c| self.at(r, c) * p[c]).sum();
        }
        out
    }
}
