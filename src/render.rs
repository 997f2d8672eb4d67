//! Fragment compositing

use crate::color::{Rgba8, Rgba64};
use crate::config::Modes;
use crate::depth::DepthBuffer;
use crate::pixfmt::Pixfmt;
use crate::raster::sample_xy;
use crate::texture::Texture;
use crate::vertex::{Vertex, VZ, VW, VR, VS};

use crate::Pixel;

use log::trace;

/// Fragment Renderer
///
/// Resolves interpolated fragments against the active color target,
/// either the sample buffer or the framebuffer, and optional depth buffer
#[derive(Debug)]
pub struct RenderingFragment<'a> {
    /// Color target
    pub pixf: &'a mut Pixfmt<Rgba8>,
    /// Depth target, same dimensions as `pixf`
    pub depth: Option<&'a mut DepthBuffer>,
    /// Bound texture
    pub texture: Option<&'a Texture>,
    pub modes: Modes,
    /// Fragments written so far
    pub written: usize,
}

impl<'a> RenderingFragment<'a> {
    /// Create a renderer over a color target
    pub fn with_target(pixf: &'a mut Pixfmt<Rgba8>, modes: Modes) -> Self {
        Self { pixf, depth: None, texture: None, modes, written: 0 }
    }
    /// Enable depth testing against `depth`
    pub fn depth(mut self, depth: Option<&'a mut DepthBuffer>) -> Self {
        self.depth = depth;
        self
    }
    /// Sample colors from `texture`
    pub fn texture(mut self, texture: Option<&'a Texture>) -> Self {
        self.texture = texture;
        self
    }
    /// Compositing over the destination is active
    pub fn blending(&self) -> bool {
        let tex_alpha = self.modes.texture && self.texture.map_or(false, |t| t.has_alpha());
        self.modes.blend || tex_alpha
    }
    /// Composite a single fragment
    ///
    /// Returns `true` if the fragment reached the color target
    pub fn render(&mut self, frag: &Vertex) -> bool {
        let (x, y) = sample_xy(frag);
        if ! self.pixf.contains(x, y) {
            return false;
        }
        let (x, y) = (x as usize, y as usize);

        // Undo the divide by w; a no-op when 1/w was carried as 1
        let f = frag.div(frag.get(VW));

        if self.modes.depth {
            if let Some(depth) = self.depth.as_mut() {
                if ! depth.test_and_update(x, y, f.get(VZ)) {
                    return false;
                }
            }
        }

        let color = match self.texture {
            Some(tex) if self.modes.texture => {
                Rgba64::from_trait(tex.sample(f.get(VS), f.get(VS + 1)))
            }
            _ => Rgba64::new(f.get(VR), f.get(VR + 1), f.get(VR + 2), f.get(VR + 3)),
        };
        let color = Rgba8::from_trait(self.modes.gamma.encode_color(color));
        trace!("FRAGMENT: ({},{}) z {} {:?}", x, y, f.get(VZ), color);

        if self.blending() {
            self.pixf.blend_pix((x, y), color);
        } else {
            self.pixf.set((x, y), color);
        }
        self.written += 1;
        true
    }
}
