//! Synthesized sprite masks for runs without an asset directory.

use enginez::{AssetSource, EngineError, Mask, Result, Rgb, SheetDescriptor};

/// Cockpit colour: opaque but not black, so it never collides under the
/// default predicate.
pub const COCKPIT: Rgb = Rgb::new(96, 96, 160);

/// Generates a wedge-shaped ship for every sheet it is asked for: a black
/// hull narrowing towards the right edge with a small cockpit, on the chroma
/// key.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSheets;

impl BuiltinSheets {
    pub fn new() -> Self {
        Self
    }

    /// Colour of pixel `(x, y)` of a `width`x`height` ship.
    pub fn ship_pixel(width: u32, height: u32, x: u32, y: u32, chroma_key: Rgb) -> Rgb {
        let (w, h) = (width as i64, height as i64);
        let (x, y) = (x as i64, y as i64);
        // Distance from the centre line, doubled to stay in integers.
        let off = (2 * y + 1 - h).abs();
        // Hull half-height shrinks linearly from h at x = 0 to 0 at x = w.
        if off * w >= h * (w - x) {
            return chroma_key;
        }
        let cockpit = x >= w / 2 && x < w / 2 + w / 8 && off * 4 < h;
        if cockpit {
            COCKPIT
        } else {
            Rgb::BLACK
        }
    }
}

impl AssetSource for BuiltinSheets {
    fn load_mask(&mut self, sheet: &SheetDescriptor, chroma_key: Rgb) -> Result<Mask> {
        let (w, h) = (sheet.frame_width, sheet.frame_height);
        if w == 0 || h == 0 {
            return Err(EngineError::ShapeMismatch {
                expected: sheet.frame_size(),
                actual: sheet.frame_size(),
            });
        }
        log::debug!("builtin sheet for {} ({}x{})", sheet.path, w, h);
        Ok(Mask::from_fn(w, h, chroma_key, |x, y| {
            Self::ship_pixel(w, h, x, y, chroma_key)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enginez::PixelMask;

    fn ship() -> Mask {
        BuiltinSheets::new()
            .load_mask(&SheetDescriptor::default(), Rgb::GREEN)
            .unwrap()
    }

    #[test]
    fn matches_the_sheet_frame() {
        let mask = ship();
        assert_eq!((mask.width(), mask.height()), (128, 64));
    }

    #[test]
    fn hull_is_black_and_corners_are_keyed() {
        let mask = ship();
        assert!(mask.is_black(0, 32).unwrap());
        assert!(mask.is_black(10, 31).unwrap());
        assert!(mask.is_transparent(64, 0).unwrap());
        assert!(mask.is_transparent(127, 0).unwrap());
        assert!(mask.is_transparent(127, 63).unwrap());
        assert!(mask.is_transparent(120, 10).unwrap());
    }

    #[test]
    fn cockpit_is_opaque_but_not_black() {
        let mask = ship();
        assert_eq!(mask.classify(66, 32).unwrap(), COCKPIT);
        assert!(mask.is_opaque(66, 32).unwrap());
        assert!(!mask.is_black(66, 32).unwrap());
    }

    #[test]
    fn empty_frame_is_rejected() {
        let sheet = SheetDescriptor {
            frame_width: 0,
            ..SheetDescriptor::default()
        };
        let err = BuiltinSheets::new().load_mask(&sheet, Rgb::GREEN).unwrap_err();
        assert!(err.is_recoverable());
    }
}
