//! # Dataset Layout and Analysis
//!
//! The expected dataset layout is:
//! ```terminaloutput
//! {ROOT}/
//!   train/          training images
//!   valid/          validation images
//!   train_gt.txt    training labels
//!   valid_gt.txt    validation labels
//!   lbl2id_map.txt  written vocabulary
//! ```

use std::path::{Path, PathBuf};

use crate::{
    counting::{CharFrequency, count_label_chars_path},
    errors::RSResult,
    images::{ImageSizeStats, scan_image_dir},
    labels::{format_max_len, max_label_len_path},
    vocab::{CharVocab, ReservedSymbols, io::save_char_vocab_path},
};

/// The default training image directory name.
pub const DEFAULT_TRAIN_DIR: &str = "train";

/// The default validation image directory name.
pub const DEFAULT_VALID_DIR: &str = "valid";

/// The default training label file name.
pub const DEFAULT_TRAIN_LABELS: &str = "train_gt.txt";

/// The default validation label file name.
pub const DEFAULT_VALID_LABELS: &str = "valid_gt.txt";

/// The default vocabulary file name.
pub const DEFAULT_VOCAB_FILE: &str = "lbl2id_map.txt";

/// File locations of a recognition dataset.
///
/// Entries are relative to `root`, unless absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    /// The dataset root directory.
    pub root: PathBuf,

    /// Training image directory.
    pub train_dir: PathBuf,

    /// Validation image directory.
    pub valid_dir: PathBuf,

    /// Training label file.
    pub train_labels: PathBuf,

    /// Validation label file.
    pub valid_labels: PathBuf,

    /// Vocabulary output file.
    pub vocab_file: PathBuf,
}

impl DatasetLayout {
    /// The default layout under `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            train_dir: DEFAULT_TRAIN_DIR.into(),
            valid_dir: DEFAULT_VALID_DIR.into(),
            train_labels: DEFAULT_TRAIN_LABELS.into(),
            valid_labels: DEFAULT_VALID_LABELS.into(),
            vocab_file: DEFAULT_VOCAB_FILE.into(),
        }
    }

    /// Set the training image directory.
    pub fn with_train_dir<P: Into<PathBuf>>(
        self,
        train_dir: P,
    ) -> Self {
        Self {
            train_dir: train_dir.into(),
            ..self
        }
    }

    /// Set the validation image directory.
    pub fn with_valid_dir<P: Into<PathBuf>>(
        self,
        valid_dir: P,
    ) -> Self {
        Self {
            valid_dir: valid_dir.into(),
            ..self
        }
    }

    /// Set the training label file.
    pub fn with_train_labels<P: Into<PathBuf>>(
        self,
        train_labels: P,
    ) -> Self {
        Self {
            train_labels: train_labels.into(),
            ..self
        }
    }

    /// Set the validation label file.
    pub fn with_valid_labels<P: Into<PathBuf>>(
        self,
        valid_labels: P,
    ) -> Self {
        Self {
            valid_labels: valid_labels.into(),
            ..self
        }
    }

    /// Set the vocabulary output file.
    pub fn with_vocab_file<P: Into<PathBuf>>(
        self,
        vocab_file: P,
    ) -> Self {
        Self {
            vocab_file: vocab_file.into(),
            ..self
        }
    }

    /// Training image directory path.
    pub fn train_dir_path(&self) -> PathBuf {
        self.root.join(&self.train_dir)
    }

    /// Validation image directory path.
    pub fn valid_dir_path(&self) -> PathBuf {
        self.root.join(&self.valid_dir)
    }

    /// Training label file path.
    pub fn train_labels_path(&self) -> PathBuf {
        self.root.join(&self.train_labels)
    }

    /// Validation label file path.
    pub fn valid_labels_path(&self) -> PathBuf {
        self.root.join(&self.valid_labels)
    }

    /// Vocabulary file path.
    pub fn vocab_file_path(&self) -> PathBuf {
        self.root.join(&self.vocab_file)
    }
}

/// Options for [`analyze_dataset`].
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Reserved vocabulary symbols.
    pub reserved: ReservedSymbols,

    /// Write the vocabulary file.
    pub write_vocab: bool,

    /// Scan the training images.
    pub scan_images: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            reserved: ReservedSymbols::default(),
            write_vocab: true,
            scan_images: true,
        }
    }
}

/// Everything [`analyze_dataset`] computes.
#[derive(Debug, Clone)]
pub struct DatasetReport {
    /// Longest label across train and valid; `None` if both are empty.
    pub max_label_len: Option<usize>,

    /// Character counts over the training labels.
    pub train_chars: CharFrequency,

    /// Character counts over training and validation labels.
    pub all_chars: CharFrequency,

    /// The vocabulary built from `all_chars`.
    pub vocab: CharVocab<u32>,

    /// Training image size statistics, when scanned.
    pub image_stats: Option<ImageSizeStats>,
}

/// Run the full analysis over a dataset.
///
/// Steps run in a fixed order: label lengths, character counts (train, then
/// train + valid), vocabulary build and save, training image scan.
pub fn analyze_dataset(
    layout: &DatasetLayout,
    options: &AnalyzeOptions,
) -> RSResult<DatasetReport> {
    let train_labels = layout.train_labels_path();
    let valid_labels = layout.valid_labels_path();

    log::info!("Scanning label lengths");
    let train_max = max_label_len_path(&train_labels)?;
    let valid_max = max_label_len_path(&valid_labels)?;
    let max_label_len = train_max.max(valid_max);
    log::info!(
        "max label length: train={}, valid={}",
        format_max_len(train_max),
        format_max_len(valid_max)
    );

    log::info!("Counting label characters");
    let mut all_chars = CharFrequency::new();
    count_label_chars_path(&train_labels, &mut all_chars)?;
    let train_chars = all_chars.clone();
    count_label_chars_path(&valid_labels, &mut all_chars)?;
    log::info!(
        "distinct characters: train={}, all={}",
        train_chars.len(),
        all_chars.len()
    );

    let vocab = CharVocab::build(&all_chars, options.reserved)?;
    log::info!("Vocabulary size: {}", vocab.len());
    if options.write_vocab {
        let path = layout.vocab_file_path();
        log::info!("Writing vocabulary: {}", path.display());
        save_char_vocab_path(&vocab, &path)?;
    }

    let image_stats = if options.scan_images {
        let dir = layout.train_dir_path();
        log::info!("Scanning images: {}", dir.display());
        Some(scan_image_dir(&dir)?)
    } else {
        None
    };

    Ok(DatasetReport {
        max_label_len,
        train_chars,
        all_chars,
        vocab,
        image_stats,
    })
}
