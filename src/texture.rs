//! Texture images

use crate::color::{Rgb8, Rgba8};
use crate::pixfmt::Pixfmt;
use crate::Pixel;
use crate::Source;

/// Read-only decoded texture image
#[derive(Debug,Clone,PartialEq)]
pub enum Texture {
    /// Opaque texture
    Rgb(Pixfmt<Rgb8>),
    /// Texture with an alpha channel
    Rgba(Pixfmt<Rgba8>),
}

impl Texture {
    pub fn width(&self) -> usize {
        match self {
            Texture::Rgb(p) => p.width(),
            Texture::Rgba(p) => p.width(),
        }
    }
    pub fn height(&self) -> usize {
        match self {
            Texture::Rgb(p) => p.height(),
            Texture::Rgba(p) => p.height(),
        }
    }
    /// Texture carries per-texel alpha
    pub fn has_alpha(&self) -> bool {
        matches!(self, Texture::Rgba(_))
    }
    /// Texel holding wrapped coordinate (`s`,`t`)
    ///
    /// Coordinates wrap with a period of 1.0 in both directions, with
    /// (0,0) at the first texel of the first row
    pub fn texel(&self, s: f64, t: f64) -> (usize, usize) {
        let wrap = |v: f64, n: usize| -> usize {
            let i = (v.rem_euclid(1.0) * n as f64).floor() as usize;
            i.min(n - 1)
        };
        (wrap(s, self.width()), wrap(t, self.height()))
    }
    /// Nearest-neighbor sample at (`s`,`t`)
    pub fn sample(&self, s: f64, t: f64) -> Rgba8 {
        let id = self.texel(s, t);
        match self {
            Texture::Rgb(p) => p.get(id),
            Texture::Rgba(p) => p.get(id),
        }
    }
}

impl Source for Texture {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        match self {
            Texture::Rgb(p) => p.get(id),
            Texture::Rgba(p) => p.get(id),
        }
    }
}
