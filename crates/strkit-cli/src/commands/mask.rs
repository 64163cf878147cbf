use strkit::{
    BandMask,
    Step,
    masking::DEFAULT_MASK_CHAR,
};

use crate::{
    commands::transform_lines,
    input_output::{InputArgs, OutputArgs},
};

/// Mask shape argument group.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct MaskShapeArgs {
    /// Mask the chars after START, up to START + LENGTH.
    #[arg(long, num_args = 2, value_names = ["START", "LENGTH"])]
    window: Option<Vec<usize>>,

    /// Keep HEAD and TAIL chars, with a block of WIDTH mask chars between.
    #[arg(long, num_args = 3, value_names = ["HEAD", "WIDTH", "TAIL"])]
    band: Option<Vec<usize>>,
}

impl MaskShapeArgs {
    /// The masking step for the selected shape.
    pub fn step(
        &self,
        mask_char: char,
    ) -> Result<Step, Box<dyn std::error::Error>> {
        match (self.window.as_deref(), self.band.as_deref()) {
            (Some(&[start, length]), None) => Ok(Step::MaskWindow { start, length }),
            (None, Some(&[head, width, tail])) => Ok(Step::MaskBand(
                BandMask::new(head, width, tail).with_mask_char(mask_char),
            )),
            _ => Err("expected one of --window START LENGTH or --band HEAD WIDTH TAIL".into()),
        }
    }
}

/// Args for the mask command.
#[derive(clap::Args, Debug)]
pub struct MaskArgs {
    #[command(flatten)]
    shape: MaskShapeArgs,

    /// The band mask char; window masks always use '*'.
    #[arg(long, default_value_t = DEFAULT_MASK_CHAR)]
    mask_char: char,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl MaskArgs {
    /// Run the mask command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let step = self.shape.step(self.mask_char)?;
        log::info!("mask: {step}");

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;
        transform_lines(&mut reader, &mut writer, &step, 1024)?;
        Ok(())
    }
}
