use recstat::vocab::{CharVocab, LoadedVocab, io::load_char_vocab_path};

use crate::logging::LogArgs;

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Labels to encode.
    #[arg(required = true)]
    labels: Vec<String>,

    /// Vocabulary file.
    #[arg(long)]
    vocab: String,

    /// Maximum label length; output rows are this plus 2 ids long.
    #[arg(long)]
    max_len: usize,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl EncodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let loaded: LoadedVocab<u32> = load_char_vocab_path(&self.vocab)?;
        let vocab: CharVocab<u32> = loaded.validate()?;

        for label in &self.labels {
            let ids = vocab.encode_label(label, self.max_len)?;
            let row = ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("{row}");
        }

        Ok(())
    }
}
