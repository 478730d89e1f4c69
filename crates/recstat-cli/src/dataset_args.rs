use recstat::{
    dataset::{
        DEFAULT_TRAIN_DIR,
        DEFAULT_TRAIN_LABELS,
        DEFAULT_VALID_DIR,
        DEFAULT_VALID_LABELS,
        DEFAULT_VOCAB_FILE,
        DatasetLayout,
    },
    vocab::{DEFAULT_END_SYMBOL, DEFAULT_PAD_SYMBOL, DEFAULT_START_SYMBOL, ReservedSymbols},
};

/// Dataset layout arg group.
#[derive(clap::Args, Debug)]
pub struct DatasetArgs {
    /// Dataset root directory.
    #[arg(long, default_value = "ICDAR_2015")]
    data_dir: String,

    /// Training image directory, relative to the root.
    #[arg(long, default_value = DEFAULT_TRAIN_DIR)]
    train_dir: String,

    /// Validation image directory, relative to the root.
    #[arg(long, default_value = DEFAULT_VALID_DIR)]
    valid_dir: String,

    /// Training label file, relative to the root.
    #[arg(long, default_value = DEFAULT_TRAIN_LABELS)]
    train_labels: String,

    /// Validation label file, relative to the root.
    #[arg(long, default_value = DEFAULT_VALID_LABELS)]
    valid_labels: String,

    /// Vocabulary output file, relative to the root.
    #[arg(long, default_value = DEFAULT_VOCAB_FILE)]
    vocab_file: String,
}

impl DatasetArgs {
    /// Build the dataset layout.
    pub fn layout(&self) -> DatasetLayout {
        DatasetLayout::new(&self.data_dir)
            .with_train_dir(&self.train_dir)
            .with_valid_dir(&self.valid_dir)
            .with_train_labels(&self.train_labels)
            .with_valid_labels(&self.valid_labels)
            .with_vocab_file(&self.vocab_file)
    }
}

/// Reserved vocabulary symbol arg group.
#[derive(clap::Args, Debug)]
pub struct ReservedArgs {
    /// Padding symbol (id 0).
    #[arg(long, default_value_t = DEFAULT_PAD_SYMBOL)]
    pad: char,

    /// Sequence start symbol (id 1).
    #[arg(long, default_value_t = DEFAULT_START_SYMBOL)]
    start: char,

    /// Sequence end symbol (id 2).
    #[arg(long, default_value_t = DEFAULT_END_SYMBOL)]
    end: char,
}

impl ReservedArgs {
    /// The reserved symbols.
    pub fn reserved(&self) -> ReservedSymbols {
        ReservedSymbols {
            pad: self.pad,
            start: self.start,
            end: self.end,
        }
    }
}
