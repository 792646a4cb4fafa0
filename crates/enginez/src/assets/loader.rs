//! Mask provider: turns sprite sheets into collision masks.

use crate::assets::manifest::SheetDescriptor;
use crate::components::mask::Mask;
use crate::core::geometry::Rgb;
use crate::error::Result;

/// Source of collision masks for sprite sheets.
///
/// A failure here is a per-entity construction failure: the world logs it
/// and aborts that spawn.
pub trait AssetSource {
    /// Load the mask of the first frame of `sheet`, keying out `chroma_key`.
    fn load_mask(&mut self, sheet: &SheetDescriptor, chroma_key: Rgb) -> Result<Mask>;
}

impl<F> AssetSource for F
where
    F: FnMut(&SheetDescriptor, Rgb) -> Result<Mask>,
{
    fn load_mask(&mut self, sheet: &SheetDescriptor, chroma_key: Rgb) -> Result<Mask> {
        self(sheet, chroma_key)
    }
}

#[cfg(feature = "image-loader")]
pub use self::image_loader::{mask_from_image, ImageAssets};

#[cfg(feature = "image-loader")]
mod image_loader {
    use std::path::PathBuf;

    use glam::UVec2;
    use image::RgbaImage;

    use super::AssetSource;
    use crate::assets::manifest::SheetDescriptor;
    use crate::components::mask::Mask;
    use crate::core::geometry::Rgb;
    use crate::error::{EngineError, Result};

    /// Decodes sheets from image files under a root directory.
    #[derive(Debug, Clone)]
    pub struct ImageAssets {
        root: PathBuf,
    }

    impl ImageAssets {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }
    }

    impl AssetSource for ImageAssets {
        fn load_mask(&mut self, sheet: &SheetDescriptor, chroma_key: Rgb) -> Result<Mask> {
            let path = self.root.join(&sheet.path);
            let img = image::open(&path)
                .map_err(|e| EngineError::resource_load(path.clone(), e))?
                .to_rgba8();
            log::debug!(
                "loaded sheet {} ({}x{})",
                path.display(),
                img.width(),
                img.height()
            );
            mask_from_image(&img, sheet, chroma_key)
        }
    }

    /// Cut the first frame out of a decoded sheet.
    ///
    /// Pixels equal to `chroma_key`, or with zero alpha, become transparent.
    /// The sheet must hold `frames` frames side by side.
    pub fn mask_from_image(img: &RgbaImage, sheet: &SheetDescriptor, chroma_key: Rgb) -> Result<Mask> {
        let frame = sheet.frame_size();
        let actual = UVec2::new(img.width(), img.height());
        let Some(strip_width) = frame.x.checked_mul(sheet.frames.max(1)) else {
            return Err(EngineError::ShapeMismatch { expected: UVec2::MAX, actual });
        };
        let needed = UVec2::new(strip_width, frame.y);
        if frame.x == 0 || frame.y == 0 || actual.x < needed.x || actual.y < needed.y {
            return Err(EngineError::ShapeMismatch { expected: needed, actual });
        }

        let mut pixels = Vec::with_capacity(frame.x as usize * frame.y as usize);
        for y in 0..frame.y {
            for x in 0..frame.x {
                let [r, g, b, a] = img.get_pixel(x, y).0;
                let color = Rgb::new(r, g, b);
                let alpha = if a == 0 || color == chroma_key { 0 } else { 0xFF };
                pixels.push(color.pack(alpha));
            }
        }
        Mask::from_pixels(frame.x, frame.y, pixels)
    }
}
