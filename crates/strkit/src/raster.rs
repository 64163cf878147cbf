//! # Text Rendering
//!
//! Render a line of text to PNG bytes.
//!
//! Rendering is a build-dependent capability: with the ``raster`` feature,
//! [`GlyphRasterizer`] draws text with fonts registered by name; without it,
//! only [`UnsupportedRasterizer`] exists, and every render reports
//! [`StrkitError::UnsupportedPlatform`]. Use [`default_rasterizer`] to get
//! whichever this build provides.

use std::sync::Arc;

use crate::errors::{SKResult, StrkitError};

/// The font size, in pixels, used when none is configured.
pub const DEFAULT_FONT_PX: f32 = 25.0;

/// Text to PNG renderer.
pub trait Rasterizer: Send + Sync {
    /// Render the trimmed `text` with the font registered as `font_name`.
    ///
    /// The image is sized to the measured bounds of the text, black on white.
    ///
    /// ## Returns
    /// PNG encoded bytes.
    fn render_png(
        &self,
        text: &str,
        font_name: &str,
    ) -> SKResult<Vec<u8>>;
}

/// A [`Rasterizer`] for builds without rendering support.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRasterizer;

impl Rasterizer for UnsupportedRasterizer {
    fn render_png(
        &self,
        _text: &str,
        _font_name: &str,
    ) -> SKResult<Vec<u8>> {
        Err(StrkitError::UnsupportedPlatform(
            "text rendering requires the `raster` feature",
        ))
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "raster")] {
        /// The best [`Rasterizer`] available in this build.
        ///
        /// A [`GlyphRasterizer`] with no fonts registered.
        pub fn default_rasterizer() -> Arc<dyn Rasterizer> {
            Arc::new(GlyphRasterizer::default())
        }

        #[doc(inline)]
        pub use glyph::GlyphRasterizer;
    } else {
        /// The best [`Rasterizer`] available in this build.
        ///
        /// Always an [`UnsupportedRasterizer`].
        pub fn default_rasterizer() -> Arc<dyn Rasterizer> {
            Arc::new(UnsupportedRasterizer)
        }
    }
}

#[cfg(feature = "raster")]
mod glyph {
    use std::{collections::HashMap, path::Path};

    use ab_glyph::{FontArc, PxScale};
    use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage, codecs::png::PngEncoder};
    use imageproc::drawing::{draw_text_mut, text_size};

    use super::{DEFAULT_FONT_PX, Rasterizer};
    use crate::errors::{SKResult, StrkitError};

    const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const FOREGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

    /// Renders text with `ab_glyph` fonts registered by name.
    #[derive(Clone)]
    pub struct GlyphRasterizer {
        fonts: HashMap<String, FontArc>,
        font_px: f32,
    }

    impl Default for GlyphRasterizer {
        fn default() -> Self {
            Self {
                fonts: HashMap::new(),
                font_px: DEFAULT_FONT_PX,
            }
        }
    }

    impl GlyphRasterizer {
        /// Set the font size, in pixels.
        pub fn with_font_px(
            self,
            font_px: f32,
        ) -> Self {
            Self { font_px, ..self }
        }

        /// The font size, in pixels.
        pub fn font_px(&self) -> f32 {
            self.font_px
        }

        /// The registered font names, sorted.
        pub fn font_names(&self) -> Vec<&str> {
            let mut names: Vec<&str> = self.fonts.keys().map(String::as_str).collect();
            names.sort_unstable();
            names
        }

        /// Register font bytes (`.ttf` or `.otf` data) under `name`.
        ///
        /// Replaces any font already registered under `name`.
        ///
        /// ## Errors
        /// [`StrkitError::InvalidFont`] if `bytes` is not a font.
        pub fn register_font(
            &mut self,
            name: impl Into<String>,
            bytes: Vec<u8>,
        ) -> SKResult<()> {
            let font = FontArc::try_from_vec(bytes).map_err(|e| StrkitError::InvalidFont(e.to_string()))?;
            let name = name.into();
            log::debug!("registered font {name:?}");
            self.fonts.insert(name, font);
            Ok(())
        }

        /// Register the font file at `path` under `name`.
        ///
        /// ## Errors
        /// [`StrkitError::Io`] if the file cannot be read;
        /// [`StrkitError::InvalidFont`] if it is not a font.
        pub fn register_font_file<P: AsRef<Path>>(
            &mut self,
            name: impl Into<String>,
            path: P,
        ) -> SKResult<()> {
            let bytes = std::fs::read(path)?;
            self.register_font(name, bytes)
        }
    }

    impl Rasterizer for GlyphRasterizer {
        fn render_png(
            &self,
            text: &str,
            font_name: &str,
        ) -> SKResult<Vec<u8>> {
            let text = text.trim();
            if text.is_empty() {
                return Err(StrkitError::EmptyText);
            }
            let font = self
                .fonts
                .get(font_name)
                .ok_or_else(|| StrkitError::UnknownFont {
                    name: font_name.to_string(),
                })?;

            let scale = PxScale::from(self.font_px);
            let (width, height) = text_size(scale, font, text);
            let (width, height) = (width.max(1), height.max(1));

            let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);
            draw_text_mut(&mut canvas, FOREGROUND, 0, 0, scale, font, text);

            let mut png = Vec::new();
            PngEncoder::new(&mut png)
                .write_image(canvas.as_raw(), width, height, ExtendedColorType::Rgba8)
                .map_err(|e| StrkitError::Io(std::io::Error::other(e)))?;

            log::debug!("rendered {width}x{height} text image with font {font_name:?}");
            Ok(png)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::testing::{check_is_send, check_is_sync};

    #[test]
    fn test_unsupported_rasterizer() {
        let err = UnsupportedRasterizer
            .render_png("hello", "Arial")
            .unwrap_err();
        assert!(matches!(err, StrkitError::UnsupportedPlatform(_)));
    }

    #[test]
    fn test_default_rasterizer() {
        let rasterizer = default_rasterizer();
        check_is_send(rasterizer.clone());
        check_is_sync(rasterizer.clone());

        let err = rasterizer.render_png("hello", "Arial").unwrap_err();
        if cfg!(feature = "raster") {
            assert!(matches!(err, StrkitError::UnknownFont { .. }));
        } else {
            assert!(matches!(err, StrkitError::UnsupportedPlatform(_)));
        }
    }
}
