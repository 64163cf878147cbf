use std::io::{BufRead, Write};

pub mod apply;
pub mod codec;
pub mod count;
pub mod hash;
pub mod mask;
pub mod random;
#[cfg(feature = "raster")]
pub mod render;

/// Subcommands for strkit
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Run a pipeline of steps over each input line.
    Apply(apply::ApplyArgs),

    /// Count, or list, the words matching a seek word.
    Count(count::CountArgs),

    /// Mask a window or a band of each input line.
    Mask(mask::MaskArgs),

    /// SHA-256 hex digest of the input.
    Hash(hash::HashArgs),

    /// Generate random strings.
    Random(random::RandomArgs),

    /// Compress the input to DEFLATE + Base64.
    Compress(codec::CompressArgs),

    /// Decompress DEFLATE + Base64 input.
    Decompress(codec::DecompressArgs),

    /// Render text to a PNG image.
    #[cfg(feature = "raster")]
    Render(render::RenderArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Apply(cmd) => cmd.run(),
            Commands::Count(cmd) => cmd.run(),
            Commands::Mask(cmd) => cmd.run(),
            Commands::Hash(cmd) => cmd.run(),
            Commands::Random(cmd) => cmd.run(),
            Commands::Compress(cmd) => cmd.run(),
            Commands::Decompress(cmd) => cmd.run(),
            #[cfg(feature = "raster")]
            Commands::Render(cmd) => cmd.run(),
        }
    }
}

/// Apply `transform` to every line of `reader`, `batch_size` lines at a time.
///
/// Output lines end with `\n`, whatever the input line ending.
pub fn transform_lines(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    transform: &dyn strkit::TextTransform,
    batch_size: usize,
) -> Result<usize, Box<dyn std::error::Error>> {
    let batch_size = batch_size.max(1);
    let mut batch = Vec::with_capacity(batch_size);
    let mut total = 0;

    for line in reader.lines() {
        batch.push(line?);
        if batch.len() == batch_size {
            write_batch(writer, transform, &batch)?;
            total += batch.len();
            batch.clear();
        }
    }
    write_batch(writer, transform, &batch)?;
    total += batch.len();
    writer.flush()?;

    log::debug!("transformed {total} lines");
    Ok(total)
}

fn write_batch(
    writer: &mut dyn Write,
    transform: &dyn strkit::TextTransform,
    batch: &[String],
) -> std::io::Result<()> {
    for line in transform.apply_batch(batch) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
