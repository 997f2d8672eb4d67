//! Pixel Format

use crate::buffer::RenderingBuffer;
use crate::color::*;
use crate::math::blend_over;

use crate::Color;
use crate::Source;
use crate::Pixel;
use crate::PixelData;

use std::marker::PhantomData;

/// Pixel Format Wrapper around raw pixel component data
///
/// `T` selects the layout, [Rgba8] (4 bytes) or [Rgb8] (3 bytes)
///
/// [Rgba8]: ../color/struct.Rgba8.html
/// [Rgb8]: ../color/struct.Rgb8.html
#[derive(Debug,Clone,PartialEq)]
pub struct Pixfmt<T> {
    pub rbuf: RenderingBuffer,
    phantom: PhantomData<T>,
}

impl<T> Pixfmt<T> where Pixfmt<T>: Pixel {
    /// Create new Pixel Format of width * height * bpp
    ///
    /// Allocates memory of width * height * bpp, all components zero
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create pixfmt with 0 width or height");
        }
        Self { rbuf: RenderingBuffer::new(width, height, Self::bpp()),
               phantom: PhantomData
        }
    }
    /// Wrap already decoded row-major pixel data
    pub fn from_raw(data: Vec<u8>, width: usize, height: usize) -> Self {
        Self { rbuf: RenderingBuffer::from_vec(data, width, height, Self::bpp()),
               phantom: PhantomData
        }
    }
    /// Size of Rendering Buffer in bytes; width * height * bpp
    pub fn size(&self) -> usize {
        self.rbuf.len()
    }
    /// Check if (x,y) lies within the image
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.rbuf.contains(x, y)
    }
    /// Copies the [Color] `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the region are igorned
    ///
    ///     use softgl::{Source,Pixfmt,Rgba8};
    ///
    ///     let mut pix = Pixfmt::<Rgba8>::new(1,2);
    ///     let black = Rgba8::black();
    ///     pix.copy_pixel(0,1, black);
    ///     assert_eq!(pix.get((0,0)), Rgba8{r:0, g:0, b:0, a:0});
    ///     assert_eq!(pix.get((0,1)), black);
    ///
    ///     pix.copy_pixel(10,10, black); // Ignored, outside of range
    ///
    /// [Color]: ../trait.Color.html
    pub fn copy_pixel<C: Color>(&mut self, x: i64, y: i64, c: C) {
        if ! self.contains(x, y) {
            return;
        }
        self.set((x as usize, y as usize), c);
    }
}

/// Access Pixeldata from a Pixfmt<T>
///
impl<T> PixelData for Pixfmt<T> {
    fn pixeldata(&self) -> &[u8] {
        & self.rbuf.data
    }
}

impl Source for Pixfmt<Rgba8> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        Rgba8::from_slice(&self.rbuf[id])
    }
}
impl Source for Pixfmt<Rgb8> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        Rgb8::from_slice(&self.rbuf[id]).into()
    }
}

impl Pixel for Pixfmt<Rgba8> {
    fn bpp() -> usize { 4 }
    /// Height of rendering buffer in pixels
    fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Width of rendering buffer in pixels
    fn width(&self) -> usize {
        self.rbuf.width
    }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        let p = &mut self.rbuf[id];
        p[0] = c.red8();
        p[1] = c.green8();
        p[2] = c.blue8();
        p[3] = c.alpha8();
    }
}

impl Pixfmt<Rgba8> {
    /// Composite color `c` over the pixel at `id`
    pub fn blend_pix<C: Color>(&mut self, id: (usize, usize), c: C) {
        let pix0 = self.get(id);
        let pix  = blend_over(&pix0, &Rgba8::from_trait(c));
        self.set(id, pix);
    }
}

impl Pixel for Pixfmt<Rgb8> {
    fn bpp() -> usize { 3 }
    /// Height of rendering buffer in pixels
    fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Width of rendering buffer in pixels
    fn width(&self) -> usize {
        self.rbuf.width
    }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        let p = &mut self.rbuf[id];
        p[0] = c.red8();
        p[1] = c.green8();
        p[2] = c.blue8();
    }
}
