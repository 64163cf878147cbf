use std::io::{BufRead, Write};

use strkit::digest::sha256_hex;

use crate::input_output::{InputArgs, OutputArgs};

/// Args for the hash command.
#[derive(clap::Args, Debug)]
pub struct HashArgs {
    /// Hash each line on its own, instead of the whole input.
    #[arg(long)]
    lines: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl HashArgs {
    /// Run the hash command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = self.output.open_writer()?;

        if self.lines {
            let reader = self.input.open_reader()?;
            hash_lines(reader, &mut writer)?;
        } else {
            let text = self.input.read_to_string()?;
            writeln!(writer, "{}", sha256_hex(&text))?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn hash_lines(
    reader: impl BufRead,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    for line in reader.lines() {
        writeln!(writer, "{}", sha256_hex(&line?))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_hash_lines() {
        let mut out = Vec::new();
        hash_lines(
            Cursor::new("++a little Bunny raBBit waNdering in a huge Forest\n\n"),
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "9bbdadb281d35bfd90270a06abe0f12ec061957f38a36d8aceefb95630cac6d1\n\
             e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\n"
        );
    }
}
