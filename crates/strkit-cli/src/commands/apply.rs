use strkit::{Pipeline, TextTransform, rayon::ParallelPipeline};

use crate::{
    commands::transform_lines,
    input_output::{InputArgs, OutputArgs},
};

/// Args for the apply command.
#[derive(clap::Args, Debug)]
pub struct ApplyArgs {
    /// Steps separated by "|", e.g. "strip-digits | trim-inside | title:tr-TR".
    pipeline: Pipeline,

    /// Transform each batch in parallel.
    #[arg(long)]
    parallel: bool,

    /// Lines per batch.
    #[arg(long, default_value_t = 1024)]
    batch_size: usize,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl ApplyArgs {
    /// Run the apply command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        log::info!("pipeline: {}", self.pipeline);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let transform: Box<dyn TextTransform> = if self.parallel {
            Box::new(ParallelPipeline::new(self.pipeline.clone()))
        } else {
            Box::new(self.pipeline.clone())
        };

        transform_lines(
            &mut reader,
            &mut writer,
            transform.as_ref(),
            self.batch_size,
        )?;
        Ok(())
    }
}
