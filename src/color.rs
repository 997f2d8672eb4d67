//! Colors

use crate::Color;

/// Convert an f64 [0,1] component to a u8 [0,255] component
///
/// Values outside of [0,1] are clamped
pub fn cu8(v: f64) -> u8 {
    (v.max(0.0).min(1.0) * 255.0).round() as u8
}

fn color_u8_to_f64(x: u8) -> f64 {
    f64::from(x) / 255.0
}

/// Convert from RGB to sRGB for a single component
///
/// See <https://en.wikipedia.org/wiki/SRGB>
pub fn rgb_to_srgb(x: f64) -> f64 {
    if x <= 0.003_130_8 {
        x * 12.92
    } else {
        1.055 * x.powf(1.0/2.4) - 0.055
    }
}

/// Transfer function applied to color components before storage
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum TransferFunction {
    /// Identity
    Linear,
    /// Piecewise sRGB encoding
    Srgb,
}

impl Default for TransferFunction {
    fn default() -> TransferFunction {
        TransferFunction::Linear
    }
}

impl TransferFunction {
    /// Encode a single linear component
    pub fn encode(&self, x: f64) -> f64 {
        match *self {
            TransferFunction::Linear => x,
            TransferFunction::Srgb   => rgb_to_srgb(x),
        }
    }
    /// Encode red, green and blue of a color; alpha is left alone
    pub fn encode_color(&self, c: Rgba64) -> Rgba64 {
        Rgba64::new(self.encode(c.r), self.encode(c.g), self.encode(c.b), c.a)
    }
}

/// Color as Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Fully transparent (0,0,0,0)
    pub fn transparent() -> Self {
        Self::new(0,0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Create a color from any other [Color]
    ///
    /// [Color]: ../trait.Color.html
    pub fn from_trait<C: Color>(c: C) -> Self {
        Self::new(c.red8(), c.green8(), c.blue8(), c.alpha8())
    }
    /// Create from the first four values of a slice
    pub fn from_slice(p: &[u8]) -> Self {
        Self::new(p[0], p[1], p[2], p[3])
    }
}

impl Color for Rgba8 {
    fn   red(&self) -> f64 { color_u8_to_f64(self.r) }
    fn green(&self) -> f64 { color_u8_to_f64(self.g) }
    fn  blue(&self) -> f64 { color_u8_to_f64(self.b) }
    fn alpha(&self) -> f64 { color_u8_to_f64(self.a) }
    fn alpha8(&self) -> u8 { self.a }
    fn red8(&self) -> u8 { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8 { self.b }
}

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    pub fn from_trait<C: Color>(c: C) -> Self {
        Self::new(c.red8(), c.green8(), c.blue8())
    }
    pub fn from_slice(p: &[u8]) -> Self {
        Self::new(p[0], p[1], p[2])
    }
}

impl Color for Rgb8 {
    fn   red(&self) -> f64 { color_u8_to_f64(self.r) }
    fn green(&self) -> f64 { color_u8_to_f64(self.g) }
    fn  blue(&self) -> f64 { color_u8_to_f64(self.b) }
    fn alpha(&self) -> f64 { 1.0 }
    fn alpha8(&self) -> u8 { 255 }
    fn red8(&self) -> u8   { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8  { self.b }
}

impl From<Rgb8> for Rgba8 {
    fn from(c: Rgb8) -> Rgba8 {
        Rgba8::new( c.r, c.g, c.b, 255 )
    }
}

/// Color as Red, Green, Blue, and Alpha with f64 components
///
/// Components are nominally within [0,1]; conversion to 8-bit clamps
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgba64 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba64 {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
    pub fn from_trait<C: Color>(c: C) -> Self {
        Self::new(c.red(), c.green(), c.blue(), c.alpha())
    }
}

impl Color for Rgba64 {
    fn   red(&self) -> f64 { self.r }
    fn green(&self) -> f64 { self.g }
    fn  blue(&self) -> f64 { self.b }
    fn alpha(&self) -> f64 { self.a }
    fn alpha8(&self) -> u8 { cu8(self.a) }
    fn red8(&self) -> u8   { cu8(self.r) }
    fn green8(&self) -> u8 { cu8(self.g) }
    fn blue8(&self) -> u8  { cu8(self.b) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analytic(c: f64) -> f64 {
        if c <= 0.0031308 {
            12.92 * c
        } else {
            1.055 * c.powf(1.0 / 2.4) - 0.055
        }
    }

    #[test]
    fn srgb_breakpoint() {
        let brk = 0.003_130_8;
        for &x in &[0.0, brk * 0.5, brk - 1e-9, brk, brk + 1e-9, brk * 2.0, 0.5, 1.0] {
            let v = TransferFunction::Srgb.encode(x);
            assert!((v - analytic(x)).abs() < 1e-12, "{} => {} != {}", x, v, analytic(x));
        }
        // Both branches meet near the breakpoint
        let lo = 12.92 * brk;
        let hi = 1.055 * brk.powf(1.0 / 2.4) - 0.055;
        assert!((lo - hi).abs() < 1e-6);
        assert!((TransferFunction::Srgb.encode(1.0) - 1.0).abs() < 1e-12);
        assert_eq!(cu8(TransferFunction::Srgb.encode(1.0)), 255);
    }

    #[test]
    fn linear_is_identity() {
        for &x in &[0.0, 0.25, 0.003, 1.0] {
            assert_eq!(TransferFunction::Linear.encode(x), x);
        }
        let c = Rgba64::new(0.2, 0.4, 0.6, 0.5);
        assert_eq!(TransferFunction::Linear.encode_color(c), c);
        assert_eq!(TransferFunction::Srgb.encode_color(c).a, 0.5);
    }

    #[test]
    fn to_u8() {
        assert_eq!(cu8(0.0), 0);
        assert_eq!(cu8(1.0), 255);
        assert_eq!(cu8(0.5), 128);
        assert_eq!(cu8(-0.5), 0);
        assert_eq!(cu8(7.0), 255);
        let c = Rgba64::new(1.0, 0.0, 0.5, 1.0);
        assert_eq!(Rgba8::from_trait(c), Rgba8::new(255,0,128,255));
        assert_eq!(Rgba8::from(Rgb8::new(1,2,3)), Rgba8::new(1,2,3,255));
    }
}
