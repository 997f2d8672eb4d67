//! Vertex attribute storage
//!
//! Attributes are fixed-stride `f64` tuples stored contiguously. Each buffer
//! is replaced wholesale when set again.

use crate::error::*;

/// One fixed-stride attribute array
#[derive(Debug,Clone,PartialEq)]
pub struct AttributeBuffer {
    name: &'static str,
    dim: usize,
    data: Vec<f64>,
    pad: [f64; 4],
}

impl AttributeBuffer {
    /// Create a buffer of `dim` components per vertex
    ///
    /// `dims` is the accepted range of `dim`, `pad` supplies the values of
    /// components beyond `dim` when read back as a 4-vector
    pub fn new(name: &'static str, dim: usize, values: &[f64],
               dims: std::ops::RangeInclusive<usize>, pad: [f64; 4]) -> Result<Self> {
        if ! dims.contains(&dim) {
            return Err(Error::state(format!("{} dimension {} not in {:?}", name, dim, dims)));
        }
        if values.len() % dim != 0 {
            return Err(Error::state(format!("{} has {} values, not a multiple of {}",
                                            name, values.len(), dim)));
        }
        Ok(Self { name, dim, data: values.to_vec(), pad })
    }
    /// Positions; 2 to 4 components, padded with z = 0, w = 1
    pub fn positions(dim: usize, values: &[f64]) -> Result<Self> {
        Self::new("position", dim, values, 2..=4, [0.0, 0.0, 0.0, 1.0])
    }
    /// Colors; 3 or 4 components, padded with alpha = 1
    pub fn colors(dim: usize, values: &[f64]) -> Result<Self> {
        Self::new("color", dim, values, 3..=4, [0.0, 0.0, 0.0, 1.0])
    }
    /// Texture coordinates; always 2 components
    pub fn texcoords(values: &[f64]) -> Result<Self> {
        Self::new("texcoord", 2, values, 2..=2, [0.0; 4])
    }
    /// Components per vertex as given
    pub fn dim(&self) -> usize {
        self.dim
    }
    /// Number of vertices
    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Check that vertices `first .. first + count` all exist
    ///
    /// The error names the first missing vertex
    pub fn check_range(&self, first: usize, count: usize) -> Result<()> {
        check_range(self.name, first, count, self.len())
    }
    /// Read vertex `i` padded out to 4 components
    pub fn get(&self, i: usize) -> Result<[f64; 4]> {
        if i >= self.len() {
            return Err(Error::IndexOutOfRange { buffer: self.name, index: i, len: self.len() });
        }
        let mut out = self.pad;
        let start = i * self.dim;
        out[.. self.dim].copy_from_slice(&self.data[start .. start + self.dim]);
        Ok(out)
    }
}

fn check_range(buffer: &'static str, first: usize, count: usize, len: usize) -> Result<()> {
    if count > 0 && (first >= len || count > len - first) {
        return Err(Error::IndexOutOfRange { buffer, index: first.max(len), len });
    }
    Ok(())
}

/// All buffers loaded by the harness
#[derive(Debug,Clone,Default)]
pub struct Attributes {
    pub positions: Option<AttributeBuffer>,
    pub colors: Option<AttributeBuffer>,
    pub texcoords: Option<AttributeBuffer>,
    pub indices: Option<Vec<usize>>,
}

impl Attributes {
    /// Homogeneous position of vertex `i`
    pub fn position(&self, i: usize) -> Result<[f64; 4]> {
        match self.positions {
            Some(ref p) => p.get(i),
            None => Err(Error::state("no positions loaded")),
        }
    }
    /// Color of vertex `i`, (0,0,0,0) if no colors are loaded
    pub fn color(&self, i: usize) -> Result<[f64; 4]> {
        match self.colors {
            Some(ref c) => c.get(i),
            None => Ok([0.0; 4]),
        }
    }
    /// Texture coordinate of vertex `i`, (0,0) if none are loaded
    pub fn texcoord(&self, i: usize) -> Result<[f64; 2]> {
        match self.texcoords {
            Some(ref t) => t.get(i).map(|v| [v[0], v[1]]),
            None => Ok([0.0; 2]),
        }
    }
    /// Check vertices `first .. first + count` against every loaded buffer
    pub fn check_range(&self, first: usize, count: usize) -> Result<()> {
        let bufs = [&self.positions, &self.colors, &self.texcoords];
        for buf in bufs.iter().filter_map(|b| b.as_ref()) {
            buf.check_range(first, count)?;
        }
        Ok(())
    }
    /// Index buffer entries `offset .. offset + count`
    pub fn elements(&self, count: usize, offset: usize) -> Result<&[usize]> {
        let idx = self.indices.as_ref()
            .ok_or_else(|| Error::state("no elements loaded"))?;
        check_range("elements", offset, count, idx.len())?;
        Ok(idx.get(offset .. offset + count).unwrap_or(&[]))
    }
}
