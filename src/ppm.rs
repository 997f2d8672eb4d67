//! Reading and writing of image files
//!
//! Formats are chosen by file extension. Output is always 8-bit RGBA.
//!
use crate::color::{Rgb8, Rgba8};
use crate::error::*;
use crate::pixfmt::Pixfmt;
use crate::texture::Texture;

use log::{debug, warn};

use std::path::Path;

/// Read an image as RGBA, returning the data, width and height
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w as usize, h as usize))
}

/// Read an image as a texture
///
/// Images with an alpha channel keep it; everything else is stored as RGB
pub fn read_texture<P: AsRef<Path>>(filename: P) -> Result<Texture> {
    let path = filename.as_ref();
    let img = image::open(path)
        .map_err(|source| Error::ResourceLoad { path: path.to_path_buf(), source })?;
    let (w, h) = (img.width() as usize, img.height() as usize);
    debug!("TEXTURE: {} {}x{} {:?}", path.display(), w, h, img.color());
    let tex = if img.color().has_alpha() {
        Texture::Rgba(Pixfmt::<Rgba8>::from_raw(img.to_rgba8().into_raw(), w, h))
    } else {
        Texture::Rgb(Pixfmt::<Rgb8>::from_raw(img.to_rgb8().into_raw(), w, h))
    };
    Ok(tex)
}

/// Write RGBA data to `filename`
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<()> {
    image::save_buffer(filename, buf, width as u32, height as u32, image::ColorType::Rgba8)?;
    Ok(())
}

/// Compare two images pixel by pixel
///
/// Differences are logged at `warn` level
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        warn!("image sizes differ: {}x{} {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            warn!("{} [{},{},{}]: {} {}", i, (i/4)%w1, (i/4)/w1, i%4, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
