use std::io::Write;

use recstat::{
    counting::{CharFrequency, count_label_chars_path},
    vocab::{CharVocab, io::write_char_vocab},
};

use crate::{dataset_args::ReservedArgs, input_output::OutputArgs, logging::LogArgs};

/// Args for the build-vocab command.
#[derive(clap::Args, Debug)]
pub struct BuildVocabArgs {
    /// Label files; ids follow first-seen order across them.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    reserved: ReservedArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl BuildVocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut freq = CharFrequency::new();
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            count_label_chars_path(path, &mut freq)?;
        }

        let vocab: CharVocab<u32> = CharVocab::build(&freq, self.reserved.reserved())?;
        log::info!("Vocabulary Size: {}", vocab.len());

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_char_vocab(&vocab, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
