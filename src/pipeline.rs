//! Render context
//!
//! A [Pipeline] owns every buffer and mode switch of one render job. The
//! harness calls the operations in command order, then [finalize] to get
//! the resolved [Canvas].
//!
//! [Pipeline]: struct.Pipeline.html
//! [finalize]: struct.Pipeline.html#method.finalize
//! [Canvas]: struct.Canvas.html

use crate::attrib::{AttributeBuffer, Attributes};
use crate::color::{Rgba8, TransferFunction};
use crate::config::Modes;
use crate::depth::DepthBuffer;
use crate::error::*;
use crate::pixfmt::Pixfmt;
use crate::ppm;
use crate::raster::{is_backface, scan_triangle};
use crate::render::RenderingFragment;
use crate::resolve::resolve;
use crate::texture::Texture;
use crate::transform::Transform;
use crate::vertex::{transform_vertex, Vertex, Viewport};

use crate::Pixel;
use crate::PixelData;

use log::debug;

use std::path::{Path, PathBuf};

/// Final image and the location it should be written to
#[derive(Debug,Clone,PartialEq)]
pub struct Canvas {
    pub pixf: Pixfmt<Rgba8>,
    pub output: PathBuf,
}

impl Canvas {
    /// Create a transparent canvas
    pub fn new<P: AsRef<Path>>(width: usize, height: usize, output: P) -> Self {
        Self { pixf: Pixfmt::new(width, height), output: output.as_ref().to_path_buf() }
    }
    pub fn width(&self) -> usize {
        self.pixf.width()
    }
    pub fn height(&self) -> usize {
        self.pixf.height()
    }
    /// Write the image to `output`
    pub fn save(&self) -> Result<()> {
        self.save_as(&self.output)
    }
    /// Write the image to `path`, format chosen by extension
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        ppm::write_file(self.pixf.pixeldata(), self.width(), self.height(), path)
    }
}

/// Render pipeline state for a single job
#[derive(Debug,Default)]
pub struct Pipeline {
    canvas: Option<Canvas>,
    attrs: Attributes,
    transform: Option<Transform>,
    modes: Modes,
    texture: Option<Texture>,
    depth: Option<DepthBuffer>,
    samples: Option<Pixfmt<Rgba8>>,
    drawn: bool,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }
    /// Current render modes
    pub fn modes(&self) -> &Modes {
        &self.modes
    }
    /// Loaded vertex data
    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }
    /// Canvas, if initialized
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }
    /// Depth buffer, if allocated
    pub fn depth_buffer(&self) -> Option<&DepthBuffer> {
        self.depth.as_ref()
    }
    /// Sample buffer, if supersampling is active
    pub fn sample_buffer(&self) -> Option<&Pixfmt<Rgba8>> {
        self.samples.as_ref()
    }

    /// Allocate a `width` x `height` transparent framebuffer
    pub fn init_canvas<P: AsRef<Path>>(&mut self, width: usize, height: usize, output: P) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::state(format!("canvas size {}x{}", width, height)));
        }
        if self.drawn {
            return Err(Error::state("canvas replaced after drawing"));
        }
        Viewport::new(width, height, self.modes.level)?;
        debug!("CANVAS: {}x{} {}", width, height, output.as_ref().display());
        self.canvas = Some(Canvas::new(width, height, output));
        self.allocate()
    }
    /// Replace positions, `dim` components per vertex
    pub fn set_positions(&mut self, dim: usize, values: &[f64]) -> Result<()> {
        let buf = AttributeBuffer::positions(dim, values)?;
        debug!("SET POSITIONS: dim {} n {}", dim, buf.len());
        self.attrs.positions = Some(buf);
        Ok(())
    }
    /// Replace colors, `dim` components per vertex
    ///
    /// Four component colors enable blending
    pub fn set_colors(&mut self, dim: usize, values: &[f64]) -> Result<()> {
        let buf = AttributeBuffer::colors(dim, values)?;
        debug!("SET COLORS: dim {} n {}", dim, buf.len());
        if dim == 4 {
            self.modes.blend = true;
        }
        self.attrs.colors = Some(buf);
        Ok(())
    }
    /// Replace texture coordinates
    pub fn set_texcoords(&mut self, values: &[f64]) -> Result<()> {
        let buf = AttributeBuffer::texcoords(values)?;
        debug!("SET TEXCOORDS: n {}", buf.len());
        self.attrs.texcoords = Some(buf);
        Ok(())
    }
    /// Replace the index buffer
    pub fn set_indices(&mut self, values: &[usize]) -> Result<()> {
        debug!("SET ELEMENTS: n {}", values.len());
        self.attrs.indices = Some(values.to_vec());
        Ok(())
    }
    /// Replace the transform, 16 values in column-major order
    pub fn set_transform(&mut self, m: [f64; 16]) {
        debug!("SET TRANSFORM: {:?}", m);
        self.transform = Some(Transform::from_column_major(m));
    }
    pub fn enable_depth_test(&mut self) -> Result<()> {
        debug!("ENABLE DEPTH");
        self.modes.depth = true;
        self.allocate()
    }
    pub fn enable_srgb(&mut self) {
        debug!("ENABLE SRGB");
        self.modes.gamma = TransferFunction::Srgb;
    }
    pub fn enable_perspective_correction(&mut self) {
        debug!("ENABLE PERSPECTIVE");
        self.modes.perspective = true;
    }
    pub fn enable_backface_cull(&mut self) {
        debug!("ENABLE CULL");
        self.modes.cull = true;
    }
    /// Render `level` x `level` samples per pixel
    ///
    /// Changing the level once something has been drawn is an error
    pub fn enable_supersampling(&mut self, level: usize) -> Result<()> {
        if level == 0 {
            return Err(Error::state("supersampling level must be at least 1"));
        }
        if self.drawn && level != self.modes.level {
            return Err(Error::state(format!("supersampling level {} after drawing at level {}",
                                            level, self.modes.level)));
        }
        if let Some(ref c) = self.canvas {
            Viewport::new(c.width(), c.height(), level)?;
        }
        debug!("ENABLE FSAA: level {}", level);
        self.modes.level = level;
        self.allocate()
    }
    /// Load and bind a texture from an image file
    pub fn bind_texture<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let tex = ppm::read_texture(path)?;
        self.bind_texture_image(tex);
        Ok(())
    }
    /// Bind an already decoded texture
    pub fn bind_texture_image(&mut self, tex: Texture) {
        debug!("BIND TEXTURE: {}x{} alpha {}", tex.width(), tex.height(), tex.has_alpha());
        self.texture = Some(tex);
        self.modes.texture = true;
    }

    /// Draw `count / 3` triangles from consecutive vertices starting at `first`
    pub fn draw_arrays(&mut self, first: usize, count: usize) -> Result<()> {
        debug!("DRAW ARRAYS: first {} count {}", first, count);
        self.check_draw(count)?;
        self.attrs.check_range(first, count)?;
        let ids: Vec<usize> = (first .. first + count).collect();
        self.draw(&ids)
    }
    /// Draw `count / 3` triangles from the index buffer starting at `offset`
    pub fn draw_indexed(&mut self, count: usize, offset: usize) -> Result<()> {
        debug!("DRAW ELEMENTS: count {} offset {}", count, offset);
        self.check_draw(count)?;
        let ids = self.attrs.elements(count, offset)?.to_vec();
        self.draw(&ids)
    }

    /// Resolve supersamples and hand back the final image
    pub fn finalize(mut self) -> Result<Canvas> {
        self.allocate()?;
        let Pipeline { canvas, samples, modes, .. } = self;
        let mut canvas = canvas.ok_or_else(|| Error::state("finalize without canvas"))?;
        if modes.supersampled() {
            if let Some(samples) = samples {
                resolve(&samples, modes.level, &mut canvas.pixf);
            }
        }
        Ok(canvas)
    }

    /// Allocate depth and sample buffers at the current resolution
    fn allocate(&mut self) -> Result<()> {
        let (w, h) = match self.canvas {
            Some(ref c) => {
                let view = Viewport::new(c.width(), c.height(), self.modes.level)?;
                (view.sample_width(), view.sample_height())
            }
            None => return Ok(()),
        };
        if self.modes.depth || self.modes.supersampled() {
            match self.depth {
                Some(ref d) if d.width() == w && d.height() == h => {}
                Some(_) if self.drawn => {
                    return Err(Error::state("depth buffer resized after drawing"));
                }
                _ => {
                    debug!("ALLOCATE DEPTH: {}x{}", w, h);
                    self.depth = Some(DepthBuffer::new(w, h));
                }
            }
        }
        if self.modes.supersampled() {
            match self.samples {
                Some(ref s) if s.width() == w && s.height() == h => {}
                Some(_) if self.drawn => {
                    return Err(Error::state("sample buffer resized after drawing"));
                }
                _ => {
                    debug!("ALLOCATE SAMPLES: {}x{}", w, h);
                    self.samples = Some(Pixfmt::new(w, h));
                }
            }
        } else {
            self.samples = None;
        }
        Ok(())
    }

    /// Checks shared by both draw calls, made before any vertex is fetched
    fn check_draw(&self, count: usize) -> Result<()> {
        if count % 3 != 0 {
            return Err(Error::state(format!("vertex count {} not a multiple of 3", count)));
        }
        self.modes.validate(&self.attrs)
    }

    /// Transform every referenced vertex, then rasterize
    ///
    /// Nothing is written unless every vertex is valid
    fn draw(&mut self, ids: &[usize]) -> Result<()> {
        let view = match self.canvas {
            Some(ref c) => Viewport::new(c.width(), c.height(), self.modes.level)?,
            None => return Err(Error::state("draw call before canvas")),
        };
        self.allocate()?;

        let verts = ids.iter()
            .map(|&i| transform_vertex(&self.attrs, i, self.transform.as_ref(),
                                       &view, self.modes.perspective))
            .collect::<Result<Vec<Vertex>>>()?;
        self.drawn = true;

        let Pipeline { canvas, samples, depth, texture, modes, .. } = self;
        let target = match (modes.supersampled(), samples.as_mut(), canvas.as_mut()) {
            (true, Some(s), _) => s,
            (false, _, Some(c)) => &mut c.pixf,
            _ => return Err(Error::state("no color target")),
        };
        let mut ren = RenderingFragment::with_target(target, *modes)
            .depth(depth.as_mut())
            .texture(texture.as_ref());

        let mut culled = 0;
        for tri in verts.chunks(3) {
            if modes.cull && is_backface(&tri[0], &tri[1], &tri[2]) {
                culled += 1;
                continue;
            }
            scan_triangle(&tri[0], &tri[1], &tri[2], |f| { ren.render(f); });
        }
        debug!("DRAW: {} triangles, {} culled, {} fragments written",
               verts.len() / 3, culled, ren.written);
        Ok(())
    }
}
