mod analyze;
mod build_vocab;
mod count;
mod encode;
mod image_sizes;
mod max_len;
mod show_vocab;

/// Subcommands for recstat
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Run the full dataset analysis.
    Analyze(analyze::AnalyzeArgs),

    /// Report the longest label of label files.
    MaxLen(max_len::MaxLenArgs),

    /// Count label characters across label files.
    Count(count::CountArgs),

    /// Build a vocabulary from label files.
    BuildVocab(build_vocab::BuildVocabArgs),

    /// Print, and optionally validate, a vocabulary file.
    ShowVocab(show_vocab::ShowVocabArgs),

    /// Report image size statistics for a directory.
    ImageSizes(image_sizes::ImageSizesArgs),

    /// Encode labels to ids with a vocabulary file.
    Encode(encode::EncodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Analyze(cmd) => cmd.run(),
            Commands::MaxLen(cmd) => cmd.run(),
            Commands::Count(cmd) => cmd.run(),
            Commands::BuildVocab(cmd) => cmd.run(),
            Commands::ShowVocab(cmd) => cmd.run(),
            Commands::ImageSizes(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
        }
    }
}
