//! # `recstat` Recognition Dataset Statistics
//!
//! Tools for inspecting a small word-recognition OCR dataset before training:
//!
//! * [`labels`] parses `image_name,"label"` records and finds the longest label.
//! * [`counting`] accumulates per-character frequencies in first-seen order.
//! * [`vocab`] builds, persists, and reloads the character/id vocabulary.
//! * [`images`] folds image heights, widths, and aspect ratios.
//! * [`dataset`] ties the above together over the standard dataset layout.
//!
//! ## Building A Vocabulary
//!
//! ```rust,no_run
//! use recstat::{
//!     counting::{CharFrequency, count_label_chars_path},
//!     vocab::{CharVocab, ReservedSymbols, io::save_char_vocab_path},
//! };
//!
//! fn example() -> recstat::RSResult<()> {
//!     let mut freq = CharFrequency::default();
//!     count_label_chars_path("train_gt.txt", &mut freq)?;
//!     count_label_chars_path("valid_gt.txt", &mut freq)?;
//!
//!     let vocab: CharVocab<u32> = CharVocab::build(&freq, ReservedSymbols::default())?;
//!     save_char_vocab_path(&vocab, "lbl2id_map.txt")?;
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod counting;
pub mod dataset;
pub mod errors;
pub mod images;
pub mod labels;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{RSResult, RecstatError};
#[doc(inline)]
pub use types::TokenType;
