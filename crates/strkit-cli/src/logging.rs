use log::LevelFilter;
use stderrlog::{LogLevelNum, Timestamp};

/// Log level used when no `-v` flag is given.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// More log output, above the default warnings (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// `base` raised one level per `-v`, capped at trace.
    fn level(
        &self,
        base: LevelFilter,
    ) -> LevelFilter {
        LevelFilter::iter()
            .nth(base as usize + self.verbose as usize)
            .unwrap_or(LevelFilter::Trace)
    }

    /// Install the stderr logger, starting from `base`.
    ///
    /// Module names are shown once debug output is on, since several
    /// `strkit` modules log at that level.
    pub fn setup_logging(
        &self,
        base: LevelFilter,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let level = self.level(base);
        let verbosity = match level.to_level() {
            Some(level) => LogLevelNum::from(level),
            None => LogLevelNum::Off,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(verbosity)
            .show_module_names(level >= LevelFilter::Debug)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
