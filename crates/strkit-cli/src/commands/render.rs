use std::{io::Write, path::PathBuf};

use strkit::raster::{DEFAULT_FONT_PX, GlyphRasterizer, Rasterizer};

use crate::input_output::{InputArgs, OutputArgs};

const FONT_NAME: &str = "cli";

/// Args for the render command.
#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// The text to render; read from the input when missing.
    text: Option<String>,

    /// Font file (`.ttf` or `.otf`).
    #[arg(long)]
    font: PathBuf,

    /// Font size, in pixels.
    #[arg(long, default_value_t = DEFAULT_FONT_PX)]
    font_px: f32,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl RenderArgs {
    /// Run the render command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let text = match &self.text {
            Some(text) => text.clone(),
            None => self.input.read_to_string()?,
        };

        let mut rasterizer = GlyphRasterizer::default().with_font_px(self.font_px);
        rasterizer.register_font_file(FONT_NAME, &self.font)?;
        let png = rasterizer.render_png(&text, FONT_NAME)?;

        let mut writer = self.output.open_writer()?;
        writer.write_all(&png)?;
        writer.flush()?;
        log::info!("wrote {} byte png", png.len());
        Ok(())
    }
}
