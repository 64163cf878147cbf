use std::io::Write;

use strkit::random::{DEFAULT_ALPHABET, random_string_in};

use crate::input_output::OutputArgs;

/// Args for the random command.
#[derive(clap::Args, Debug)]
pub struct RandomArgs {
    /// Length of each string, in chars.
    #[arg(default_value_t = 12)]
    length: usize,

    /// How many strings to generate.
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,

    /// The chars to draw from.
    #[arg(long, default_value = DEFAULT_ALPHABET)]
    alphabet: String,

    #[command(flatten)]
    output: OutputArgs,
}

impl RandomArgs {
    /// Run the random command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = self.output.open_writer()?;
        for _ in 0..self.count {
            writeln!(writer, "{}", random_string_in(self.length, &self.alphabet)?)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::{Args, commands::Commands};

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["strkit", "random"]);
        let Commands::Random(random) = args.command else {
            panic!("expected random");
        };
        assert_eq!(random.length, 12);
        assert_eq!(random.count, 1);
        assert_eq!(random.alphabet, super::DEFAULT_ALPHABET);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from(["strkit", "random", "5", "-n", "3", "--alphabet", "ab"]);
        let Commands::Random(random) = args.command else {
            panic!("expected random");
        };
        assert_eq!(random.length, 5);
        assert_eq!(random.count, 3);
        assert_eq!(random.alphabet, "ab");
    }
}
