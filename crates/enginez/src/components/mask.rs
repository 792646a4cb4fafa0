//! Per-pixel collision masks.
//!
//! A mask is a packed 32-bit-per-pixel, row-major surface with the same
//! dimensions as one animation frame. Pixels matching the chroma key at load
//! time are stored with alpha 0; classification only ever looks at RGB.

use glam::UVec2;

use crate::core::geometry::Rgb;
use crate::error::{EngineError, Result};

/// Read access to a pixel classification surface.
///
/// The collision engine only talks to masks through this trait so that any
/// surface (or a test double) can take part in a collision query.
pub trait PixelMask {
    fn size(&self) -> UVec2;

    /// RGB of the pixel at `(x, y)`. Out-of-bounds access is an error.
    fn classify(&self, x: i32, y: i32) -> Result<Rgb>;

    /// Whether the pixel was keyed out as background when the mask was loaded.
    fn is_transparent(&self, x: i32, y: i32) -> Result<bool>;

    fn is_black(&self, x: i32, y: i32) -> Result<bool> {
        Ok(self.classify(x, y)? == Rgb::BLACK)
    }

    fn is_opaque(&self, x: i32, y: i32) -> Result<bool> {
        Ok(!self.is_transparent(x, y)?)
    }
}

/// Owned mask surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    /// `0xRRGGBBAA`, row-major.
    pixels: Vec<u32>,
}

impl Mask {
    /// Build from packed pixels. `pixels.len()` must equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(EngineError::ShapeMismatch {
                expected: UVec2::new(width, height),
                actual: UVec2::new(pixels.len() as u32, 1),
            });
        }
        Ok(Self { width, height, pixels })
    }

    /// Build from an RGB generator, keying out `chroma_key` as transparent.
    pub fn from_fn(
        width: u32,
        height: u32,
        chroma_key: Rgb,
        mut f: impl FnMut(u32, u32) -> Rgb,
    ) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let color = f(x, y);
                let alpha = if color == chroma_key { 0 } else { 0xFF };
                pixels.push(color.pack(alpha));
            }
        }
        Self { width, height, pixels }
    }

    /// A mask filled with a single colour.
    pub fn filled(width: u32, height: u32, color: Rgb, chroma_key: Rgb) -> Self {
        Self::from_fn(width, height, chroma_key, |_, _| color)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw bytes of the surface, as handed to a texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return Err(EngineError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    fn pixel(&self, x: i32, y: i32) -> Result<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }
}

impl PixelMask for Mask {
    fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    fn classify(&self, x: i32, y: i32) -> Result<Rgb> {
        self.pixel(x, y).map(Rgb::unpack)
    }

    fn is_transparent(&self, x: i32, y: i32) -> Result<bool> {
        Ok((self.pixel(x, y)? & 0xFF) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Mask {
        Mask::from_fn(4, 2, Rgb::GREEN, |x, y| {
            if (x + y) % 2 == 0 { Rgb::BLACK } else { Rgb::GREEN }
        })
    }

    #[test]
    fn classify_reads_row_major() {
        let mask = Mask::from_fn(3, 2, Rgb::GREEN, |x, y| Rgb::new(x as u8, y as u8, 7));
        assert_eq!(mask.classify(2, 1).unwrap(), Rgb::new(2, 1, 7));
        assert_eq!(mask.classify(0, 1).unwrap(), Rgb::new(0, 1, 7));
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mask = checker();
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 2)] {
            match mask.classify(x, y) {
                Err(EngineError::OutOfRange { width: 4, height: 2, .. }) => {}
                other => panic!("expected OutOfRange at ({}, {}), got {:?}", x, y, other),
            }
        }
    }

    #[test]
    fn chroma_key_is_transparent_not_black() {
        let mask = checker();
        assert!(mask.is_black(0, 0).unwrap());
        assert!(mask.is_opaque(0, 0).unwrap());
        assert!(!mask.is_black(1, 0).unwrap());
        assert!(mask.is_transparent(1, 0).unwrap());
    }

    #[test]
    fn black_is_exact() {
        let mask = Mask::filled(1, 1, Rgb::new(0, 0, 1), Rgb::GREEN);
        assert!(!mask.is_black(0, 0).unwrap());
        assert!(mask.is_opaque(0, 0).unwrap());
    }

    #[test]
    fn from_pixels_checks_length() {
        assert!(Mask::from_pixels(2, 2, vec![0; 4]).is_ok());
        assert!(matches!(
            Mask::from_pixels(2, 2, vec![0; 3]),
            Err(EngineError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn bytes_cover_every_pixel() {
        assert_eq!(checker().as_bytes().len(), 4 * 2 * 4);
    }
}
