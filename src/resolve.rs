//! Supersample resolve

use crate::color::Rgba8;
use crate::pixfmt::Pixfmt;

use crate::Pixel;
use crate::Source;

use log::debug;

/// Box filter `samples` down by `level` in each direction into `pixf`
///
/// Each output pixel is the per-channel mean of its `level x level` block,
/// truncated toward zero. `samples` must be exactly `level` times larger
/// than `pixf` in both directions.
pub fn resolve(samples: &Pixfmt<Rgba8>, level: usize, pixf: &mut Pixfmt<Rgba8>) {
    debug_assert_eq!(samples.width(), pixf.width() * level);
    debug_assert_eq!(samples.height(), pixf.height() * level);
    debug!("RESOLVE: {}x{} level {}", pixf.width(), pixf.height(), level);
    let n = (level * level) as u32;
    for y in 0 .. pixf.height() {
        for x in 0 .. pixf.width() {
            let mut sum = [0u32; 4];
            for sy in 0 .. level {
                for sx in 0 .. level {
                    let p = samples.get((x * level + sx, y * level + sy));
                    sum[0] += u32::from(p.r);
                    sum[1] += u32::from(p.g);
                    sum[2] += u32::from(p.b);
                    sum[3] += u32::from(p.a);
                }
            }
            let avg = Rgba8::new((sum[0] / n) as u8, (sum[1] / n) as u8,
                                 (sum[2] / n) as u8, (sum[3] / n) as u8);
            pixf.set((x, y), avg);
        }
    }
}
