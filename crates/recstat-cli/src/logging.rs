use stderrlog::{LogLevelNum, Timestamp};

/// Module prefix whose records reach stderr; covers the library and this binary.
///
/// Decoder crates such as `image` log on their own; those records are dropped.
const LOG_MODULE: &str = "recstat";

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,

    /// Prefix each message with the module that logged it.
    #[clap(long)]
    pub log_modules: bool,
}

impl LogArgs {
    /// The effective level; each `-v` raises `default` by one step.
    pub fn log_level(
        &self,
        default: u8,
    ) -> LogLevelNum {
        let level = match self.verbose {
            Some(verbose) => default.saturating_add(verbose),
            None => default,
        };

        match level {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .module(LOG_MODULE)
            .quiet(self.quiet)
            .verbosity(self.log_level(default))
            .show_module_names(self.log_modules)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
