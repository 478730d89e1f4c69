use recstat::labels::{format_max_len, max_label_len_path};

use crate::logging::LogArgs;

/// Args for the max-len command.
#[derive(clap::Args, Debug)]
pub struct MaxLenArgs {
    /// Label files.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl MaxLenArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut max_len = None;
        for path in &self.files {
            let file_max = max_label_len_path(path)?;
            println!("{path}: {}", format_max_len(file_max));
            max_len = max_len.max(file_max);
        }
        println!("max: {}", format_max_len(max_len));

        Ok(())
    }
}
