//! Render modes

use crate::color::TransferFunction;
use crate::attrib::Attributes;
use crate::error::*;

/// Per-job render mode switches
///
/// Every switch starts off and, once enabled, stays enabled for the rest
/// of the render job
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Modes {
    /// Depth test against the depth buffer
    pub depth: bool,
    /// Perspective-correct interpolation
    pub perspective: bool,
    /// Discard clockwise triangles
    pub cull: bool,
    /// Composite fragments "over" the destination
    pub blend: bool,
    /// Replace vertex color with the bound texture
    pub texture: bool,
    /// Encoding applied to color before storage
    pub gamma: TransferFunction,
    /// Samples per pixel along each axis
    pub level: usize,
}

impl Default for Modes {
    fn default() -> Self {
        Self {
            depth: false,
            perspective: false,
            cull: false,
            blend: false,
            texture: false,
            gamma: TransferFunction::Linear,
            level: 1,
        }
    }
}

impl Modes {
    /// Supersampling is active, fragments go to the sample buffer
    pub fn supersampled(&self) -> bool {
        self.level > 1
    }
    /// Check modes and loaded buffers are usable for a draw call
    pub fn validate(&self, attrs: &Attributes) -> Result<()> {
        if self.level == 0 {
            return Err(Error::state("supersampling level must be at least 1"));
        }
        if attrs.positions.is_none() {
            return Err(Error::state("draw call without positions"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrib::AttributeBuffer;

    #[test]
    fn defaults_off() {
        let m = Modes::default();
        assert!(!m.depth && !m.perspective && !m.cull && !m.blend && !m.texture);
        assert_eq!(m.gamma, TransferFunction::Linear);
        assert_eq!(m.level, 1);
        assert!(!m.supersampled());
    }

    #[test]
    fn validate() {
        let mut attrs = Attributes::default();
        let mut m = Modes::default();
        assert!(matches!(m.validate(&attrs), Err(Error::InvalidState(_))));
        attrs.positions = Some(AttributeBuffer::positions(2, &[0.0; 6]).unwrap());
        assert!(m.validate(&attrs).is_ok());
        m.level = 0;
        assert!(m.validate(&attrs).is_err());
        m.level = 3;
        assert!(m.supersampled());
    }
}
