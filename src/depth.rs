//! Depth buffer for hidden surface removal
//!
//! Stores one `f64` depth per sample. Smaller values are nearer; the buffer
//! starts at `+inf` (far plane) so the first fragment at any sample passes.
//!
//! ```
//! use softgl::DepthBuffer;
//!
//! let mut depth = DepthBuffer::new(4, 4);
//! assert!(depth.test_and_update(1, 1, 0.5));   // nearer, drawn
//! assert!(!depth.test_and_update(1, 1, 0.75)); // behind, rejected
//! ```

use crate::buffer::RenderingBuffer;

/// Depth Buffer
#[derive(Debug,Clone,PartialEq)]
pub struct DepthBuffer {
    rbuf: RenderingBuffer<f64>,
}

impl DepthBuffer {
    /// Create a new depth buffer, every sample at the far plane
    pub fn new(width: usize, height: usize) -> Self {
        Self { rbuf: RenderingBuffer::filled(width, height, 1, std::f64::INFINITY) }
    }
    /// Width in samples
    pub fn width(&self) -> usize {
        self.rbuf.width
    }
    /// Height in samples
    pub fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Test and update depth at (x,y)
    ///
    /// Returns `true` if `depth` is strictly nearer than the stored value,
    /// in which case the stored value is replaced. Samples outside of the
    /// buffer always fail.
    #[inline]
    pub fn test_and_update(&mut self, x: usize, y: usize, depth: f64) -> bool {
        if x >= self.rbuf.width || y >= self.rbuf.height {
            return false;
        }
        let z = &mut self.rbuf[(x,y)][0];
        if depth < *z {
            *z = depth;
            true
        } else {
            false
        }
    }
    /// Read depth value at (x,y), `None` if outside of the buffer
    pub fn read(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.rbuf.width || y >= self.rbuf.height {
            return None;
        }
        Some(self.rbuf[(x,y)][0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_initialization() {
        let depth = DepthBuffer::new(8, 6);
        assert_eq!(depth.width(), 8);
        assert_eq!(depth.height(), 6);
        for y in 0 .. 6 {
            for x in 0 .. 8 {
                assert_eq!(depth.read(x, y), Some(std::f64::INFINITY));
            }
        }
    }

    #[test]
    fn depth_test() {
        let mut depth = DepthBuffer::new(10, 10);
        assert!(depth.test_and_update(5, 5, 0.5));
        assert_eq!(depth.read(5, 5), Some(0.5));

        assert!(!depth.test_and_update(5, 5, 0.7));
        assert_eq!(depth.read(5, 5), Some(0.5));

        // Equal depth does not pass
        assert!(!depth.test_and_update(5, 5, 0.5));

        assert!(depth.test_and_update(5, 5, -0.25));
        assert_eq!(depth.read(5, 5), Some(-0.25));
    }

    #[test]
    fn depth_bounds() {
        let mut depth = DepthBuffer::new(10, 10);
        assert!(!depth.test_and_update(10, 0, 0.0));
        assert!(!depth.test_and_update(0, 10, 0.0));
        assert_eq!(depth.read(100, 100), None);
    }

}
