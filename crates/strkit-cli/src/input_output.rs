use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Read, Write},
    path::Path,
};

/// The path argument naming standard input or output.
pub const STANDARD_IO: &str = "-";

/// The file named by a path argument; `None` and [`STANDARD_IO`] mean stdio.
fn file_path(path: &Option<String>) -> Option<&Path> {
    path.as_deref()
        .filter(|p| *p != STANDARD_IO)
        .map(Path::new)
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, short, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a line reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.input) {
            Some(path) => {
                log::debug!("reading {}", path.display());
                Box::new(BufReader::new(File::open(path)?))
            }
            None => {
                log::debug!("reading stdin");
                Box::new(std::io::stdin().lock())
            }
        })
    }

    /// Read the whole input as one string.
    ///
    /// Fails on invalid UTF-8.
    pub fn read_to_string(&self) -> Result<String, Box<dyn std::error::Error>> {
        let mut text = String::new();
        self.open_reader()?.read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, short, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a buffered writer for the output; callers flush it.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.output) {
            Some(path) => {
                log::debug!("writing {}", path.display());
                Box::new(BufWriter::new(File::create(path)?))
            }
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
