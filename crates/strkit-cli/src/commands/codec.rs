use std::io::Write;

use strkit::codec::{compress, decompress};

use crate::input_output::{InputArgs, OutputArgs};

/// Args for the compress command.
#[derive(clap::Args, Debug)]
pub struct CompressArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CompressArgs {
    /// Run the compress command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let text = self.input.read_to_string()?;
        let encoded = compress(&text)?;

        let mut writer = self.output.open_writer()?;
        writeln!(writer, "{encoded}")?;
        writer.flush()?;
        Ok(())
    }
}

/// Args for the decompress command.
#[derive(clap::Args, Debug)]
pub struct DecompressArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecompressArgs {
    /// Run the decompress command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let encoded = self.input.read_to_string()?;
        let text = decompress(&encoded)?;

        let mut writer = self.output.open_writer()?;
        write!(writer, "{text}")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn path(p: &Path) -> Option<String> {
        Some(p.to_string_lossy().to_string())
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir::TempDir::new("strkit-codec").unwrap();
        let plain = dir.path().join("plain.txt");
        let packed = dir.path().join("packed.txt");
        let unpacked = dir.path().join("unpacked.txt");

        let text = "İstanbul ışık\nline two\n";
        std::fs::write(&plain, text).unwrap();

        CompressArgs {
            input: InputArgs { input: path(&plain) },
            output: OutputArgs {
                output: path(&packed),
            },
        }
        .run()
        .unwrap();

        DecompressArgs {
            input: InputArgs {
                input: path(&packed),
            },
            output: OutputArgs {
                output: path(&unpacked),
            },
        }
        .run()
        .unwrap();

        assert_eq!(std::fs::read_to_string(&unpacked).unwrap(), text);
    }
}
