use recstat::vocab::{LoadedVocab, io::load_char_vocab_path};

use crate::logging::LogArgs;

/// Args for the show-vocab command.
#[derive(clap::Args, Debug)]
pub struct ShowVocabArgs {
    /// Vocabulary file.
    path: String,

    /// Fail unless the ids form a dense bijection with the reserved symbols.
    #[arg(long)]
    validate: bool,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl ShowVocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let loaded: LoadedVocab<u32> = load_char_vocab_path(&self.path)?;

        let mut pairs: Vec<(u32, char)> =
            loaded.id_to_char.iter().map(|(&id, &c)| (id, c)).collect();
        pairs.sort();
        for (id, c) in pairs {
            println!("{c} {id}");
        }

        if self.validate {
            let vocab = loaded.validate()?;
            let reserved = vocab.reserved();
            log::info!(
                "valid vocabulary: {} entries; pad={} start={} end={}",
                vocab.len(),
                reserved.pad,
                reserved.start,
                reserved.end
            );
        }

        Ok(())
    }
}
