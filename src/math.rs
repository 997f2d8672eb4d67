use crate::color::Rgba8;
use crate::Color;

/// Composite the foreground `c` over the background `p`
///
/// Non-premultiplied "over" operator on 8-bit components:
///
/// ```text
/// a' = a_c + a_p (1 - a_c)
/// x' = (a_c x_c + a_p (1 - a_c) x_p) / a'
/// ```
///
/// A fully transparent result is returned as (0,0,0,0)
///
/// see [Alpha Compositing](https://en.wikipedia.org/wiki/Alpha_compositing)
///
///     use softgl::{blend_over, Rgba8};
///
///     let bg = Rgba8::new(0,0,255,255);
///     let fg = Rgba8::new(255,0,0,255);
///     assert_eq!(blend_over(&bg, &fg), fg);
///     assert_eq!(blend_over(&bg, &Rgba8::transparent()), bg);
///
pub fn blend_over<C1: Color, C2: Color>(p: &C1, c: &C2) -> Rgba8 {
    let ac = c.alpha();
    let ap = p.alpha();
    let a = ac + ap * (1.0 - ac);
    if a <= 0.0 {
        return Rgba8::transparent();
    }
    let mix = |xc: u8, xp: u8| -> u8 {
        let v = (ac * f64::from(xc) + ap * (1.0 - ac) * f64::from(xp)) / a;
        v.round().max(0.0).min(255.0) as u8
    };
    Rgba8::new(mix(c.red8(),   p.red8()),
               mix(c.green8(), p.green8()),
               mix(c.blue8(),  p.blue8()),
               (a * 255.0).round().min(255.0) as u8)
}
