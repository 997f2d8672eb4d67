
//! Fixed-function software triangle rasterizer
//!
//! How does this work
//!    pipe = Pipeline::default()
//!    pipe.init_canvas(w, h, path)
//!  Attribute Operations
//!    set_positions, set_colors, set_texcoords, set_indices, set_transform
//!  Mode Operations
//!    enable_depth_test, enable_srgb, enable_perspective_correction,
//!    enable_backface_cull, enable_supersampling, bind_texture
//!  Draw Operations
//!    draw_arrays() / draw_indexed()
//!      Modes::validate()
//!      transform_vertex()    -- 'VERTEX'
//!        Transform::apply()
//!        viewport mapping, divide by w
//!      is_backface()
//!      scan_triangle()       -- 'SCAN TRIANGLE'
//!        Dda::new(), Dda::step()
//!     Output: Fragments with x, y and interpolated attributes
//!  Composite Fragments
//!   RenderingFragment::render()
//!     bounds, divide by 1/w
//!     DepthBuffer::test_and_update()
//!     Texture::sample()
//!     TransferFunction::encode()
//!     Pixfmt::blend_pix() or Pixfmt::set()
//!  Finish
//!   finalize()
//!     resolve()              -- 'RESOLVE'
//!   Canvas::save()
//!
//!     use softgl::{Pipeline, Source, Rgba8};
//!
//!     let mut pipe = Pipeline::default();
//!     pipe.init_canvas(10, 10, "triangle.png").unwrap();
//!     pipe.set_positions(2, &[-0.6,-0.6, 0.4,-0.6, -0.6,0.4]).unwrap();
//!     pipe.set_colors(3, &[1.,0.,0., 1.,0.,0., 1.,0.,0.]).unwrap();
//!     pipe.draw_arrays(0, 3).unwrap();
//!     let canvas = pipe.finalize().unwrap();
//!     assert_eq!(canvas.pixf.get((3,3)), Rgba8::new(255,0,0,255));
//!     assert_eq!(canvas.pixf.get((8,8)), Rgba8::new(0,0,0,0));
//!

pub mod error;
pub mod color;
pub mod math;
pub mod buffer;
pub mod pixfmt;
pub mod depth;
pub mod attrib;
pub mod transform;
pub mod vertex;
pub mod raster;
pub mod texture;
pub mod config;
pub mod render;
pub mod resolve;
pub mod pipeline;
pub mod ppm;
pub mod command;

pub use crate::error::*;
pub use crate::color::*;
pub use crate::math::*;
pub use crate::buffer::*;
pub use crate::pixfmt::*;
pub use crate::depth::*;
pub use crate::attrib::*;
pub use crate::transform::*;
pub use crate::vertex::*;
pub use crate::raster::*;
pub use crate::texture::*;
pub use crate::config::*;
pub use crate::render::*;
pub use crate::resolve::*;
pub use crate::pipeline::*;
pub use crate::command::*;

/// Access to Color properties and compoents
pub trait Color: std::fmt::Debug + Copy {
    /// Get red value [0,1] as f64
    fn red(&self) -> f64;
    /// Get green value [0,1] as f64
    fn green(&self) -> f64;
    /// Get blue value [0,1] as f64
    fn blue(&self) -> f64;
    /// Get alpha value [0,1] as f64
    fn alpha(&self) -> f64;
    /// Get red value [0,255] as u8
    fn red8(&self) -> u8;
    /// Get green value [0,255] as u8
    fn green8(&self) -> u8;
    /// Get blue value [0,255] as u8
    fn blue8(&self) -> u8;
    /// Get alpha value [0,255] as u8
    fn alpha8(&self) -> u8;
}

/// Access Pixel source color
pub trait Source {
    fn get(&self, id: (usize, usize)) -> Rgba8;
}

/// Drawing and pixel related routines
pub trait Pixel {
    /// Number of bytes per pixel
    fn bpp() -> usize;
    /// Width of the underlying image in pixels
    fn width(&self) -> usize;
    /// Height of the underlying image in pixels
    fn height(&self) -> usize;
    /// Copy color `c` into pixel at `id`
    fn set<C: Color>(&mut self, id: (usize, usize), c: C);
}

/// Raw access to underlying pixel data
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}
