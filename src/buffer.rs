//! Rendering buffer

use std::ops::Index;
use std::ops::IndexMut;

/// Rendering Buffer
///
/// Contiguous grid of `width * height` elements, each `bpp` values wide.
/// Data is stored as row-major order (C-format). Used with `u8` components
/// for color images and `f64` for depth.
#[derive(Debug,Default,Clone,PartialEq)]
pub struct RenderingBuffer<T = u8> {
    /// Pixel / Component level data of Image
    pub data: Vec<T>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Values per pixel, number of color components for images
    pub bpp: usize,
}

impl<T: Copy> RenderingBuffer<T> {
    /// Create a new buffer of width, height, and bpp with every value set to `init`
    pub fn filled(width: usize, height: usize, bpp: usize, init: T) -> Self {
        RenderingBuffer {
            width, height, bpp, data: vec![init; width * height * bpp]
        }
    }
}

impl RenderingBuffer<u8> {
    /// Create a new buffer of width, height, and bpp
    ///
    /// Data is allocated and zeroed
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        Self::filled(width, height, bpp, 0)
    }
    /// Wrap existing row-major data
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize, bpp: usize) -> Self {
        assert_eq!(data.len(), width * height * bpp);
        RenderingBuffer { data, width, height, bpp }
    }
}

impl<T> RenderingBuffer<T> {
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Buffer contains no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Check if (x,y) lies within the buffer
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
    /// Offset of the first value of pixel (x,y)
    pub fn offset(&self, x: usize, y: usize) -> usize {
        ((y * self.width) + x) * self.bpp
    }
}

impl<T> Index<(usize,usize)> for RenderingBuffer<T> {
    type Output = [T];
    fn index(&self, index: (usize, usize)) -> &[T] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = self.offset(index.0, index.1);
        &self.data[i .. i + self.bpp]
    }
}
impl<T> IndexMut<(usize,usize)> for RenderingBuffer<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [T] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = self.offset(index.0, index.1);
        let n = self.bpp;
        &mut self.data[i .. i + n]
    }
}
