use recstat::counting::{CharFrequency, count_label_chars_path};

use crate::logging::LogArgs;

/// Args for the count command.
#[derive(clap::Args, Debug)]
pub struct CountArgs {
    /// Label files, accumulated in order.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl CountArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut freq = CharFrequency::new();
        for path in &self.files {
            count_label_chars_path(path, &mut freq)?;
            println!("after {path}:");
            println!("{freq}");
        }
        log::info!(
            "{} distinct characters, {} total",
            freq.len(),
            freq.total()
        );

        Ok(())
    }
}
