use std::io::{BufRead, Write};

use strkit::words::{MatchMode, matching_words, try_for_each_contains, try_for_each_exact};

use crate::input_output::{InputArgs, OutputArgs};

/// Args for the count command.
///
/// Each input line is tokenized on its own.
#[derive(clap::Args, Debug)]
pub struct CountArgs {
    /// The word to look for; case is ignored.
    word: String,

    /// "exact" matches whole words; "contains" matches substrings of words.
    #[arg(long, default_value_t = MatchMode::Exact)]
    mode: MatchMode,

    /// Print each matching word instead of the count.
    #[arg(long)]
    list: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CountArgs {
    /// Run the count command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        if self.list {
            list_words(&mut reader, &mut writer, &self.word, self.mode)?;
        } else {
            let total = count_words(&mut reader, &self.word, self.mode)?;
            writeln!(writer, "{total}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn count_words(
    reader: &mut dyn BufRead,
    word: &str,
    mode: MatchMode,
) -> std::io::Result<usize> {
    let mut total = 0;
    for line in reader.lines() {
        total += matching_words(&line?, word, mode).count();
    }
    Ok(total)
}

fn list_words(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    word: &str,
    mode: MatchMode,
) -> std::io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        let emit = |found: &str| writeln!(writer, "{found}");
        match mode {
            MatchMode::Exact => try_for_each_exact(&line, word, emit)?,
            MatchMode::Contains => try_for_each_contains(&line, word, emit)?,
        }
    }
    Ok(())
}
