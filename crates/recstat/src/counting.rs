//! # Character Frequency Counting

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    errors::RSResult,
    labels::{LabelReader, LabelRecord},
    types::RSHashMap,
};

/// Per-character occurrence counts, kept in first-seen order.
///
/// Iteration order is the order in which each character was first counted;
/// vocabulary ids are assigned in this order.
#[derive(Debug, Clone, Default)]
pub struct CharFrequency {
    /// Index of each character into `entries`.
    index: RSHashMap<char, usize>,

    /// `(char, count)` in first-seen order.
    entries: Vec<(char, u64)>,
}

impl CharFrequency {
    /// Create an empty frequency map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a single character occurrence.
    pub fn add_char(
        &mut self,
        c: char,
    ) {
        match self.index.get(&c) {
            Some(&idx) => self.entries[idx].1 += 1,
            None => {
                self.index.insert(c, self.entries.len());
                self.entries.push((c, 1));
            }
        }
    }

    /// Count every character of a label.
    pub fn update_from_label(
        &mut self,
        label: &str,
    ) {
        for c in label.chars() {
            self.add_char(c);
        }
    }

    /// Count every character of every label.
    pub fn update_from_labels<I>(
        &mut self,
        labels: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for label in labels {
            self.update_from_label(label.as_ref());
        }
    }

    /// Count the labels of a record stream, stopping at the first error.
    pub fn update_from_records<I>(
        &mut self,
        records: I,
    ) -> RSResult<()>
    where
        I: IntoIterator<Item = RSResult<LabelRecord>>,
    {
        for record in records {
            self.update_from_label(&record?.label);
        }
        Ok(())
    }

    /// The count for a character; zero if never seen.
    pub fn get(
        &self,
        c: char,
    ) -> u64 {
        self.index.get(&c).map_or(0, |&idx| self.entries[idx].1)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no characters have been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of counted character occurrences.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Iterate `(char, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Iterate characters in first-seen order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|&(c, _)| c)
    }

    /// An order-free view of the counts.
    pub fn count_map(&self) -> RSHashMap<char, u64> {
        self.entries.iter().copied().collect()
    }
}

impl fmt::Display for CharFrequency {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (c, n)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c:?}: {n}")?;
        }
        write!(f, "}}")
    }
}

/// Accumulate the characters of a label stream into `freq`.
///
/// May be called repeatedly over several files to count their union.
pub fn count_label_chars<R: BufRead>(
    reader: R,
    freq: &mut CharFrequency,
) -> RSResult<()> {
    freq.update_from_records(LabelReader::new(reader))
}

/// Accumulate the characters of a label file into `freq`.
///
/// See [`count_label_chars`].
pub fn count_label_chars_path<P: AsRef<Path>>(
    path: P,
    freq: &mut CharFrequency,
) -> RSResult<()> {
    let path = path.as_ref();
    log::debug!("counting label characters: {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    count_label_chars(reader, freq)
}
