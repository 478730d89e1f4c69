//! # Character Vocabulary
//!
//! A [`CharVocab`] is a bijection between characters and the dense id range `0..N`.
//!
//! The three [`ReservedSymbols`] always hold ids 0, 1, and 2 (padding,
//! sequence start, sequence end); observed characters follow from id 3 in
//! [`CharFrequency`] first-seen order.
//!
//! See [`io`] for the tab-separated vocab file format.

pub mod io;

use crate::{
    counting::CharFrequency,
    errors::{RSResult, RecstatError},
    types::{RSHashMap, TokenType},
};

/// The default padding symbol.
pub const DEFAULT_PAD_SYMBOL: char = '☯';

/// The default sequence-start symbol.
pub const DEFAULT_START_SYMBOL: char = '■';

/// The default sequence-end symbol.
pub const DEFAULT_END_SYMBOL: char = '□';

/// The number of reserved ids.
pub const NUM_RESERVED: usize = 3;

/// The control symbols occupying ids 0, 1, and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedSymbols {
    /// Padding; id 0.
    pub pad: char,

    /// Sequence start; id 1.
    pub start: char,

    /// Sequence end; id 2.
    pub end: char,
}

impl Default for ReservedSymbols {
    fn default() -> Self {
        Self {
            pad: DEFAULT_PAD_SYMBOL,
            start: DEFAULT_START_SYMBOL,
            end: DEFAULT_END_SYMBOL,
        }
    }
}

impl ReservedSymbols {
    /// The symbols in id order.
    pub fn as_array(&self) -> [char; NUM_RESERVED] {
        [self.pad, self.start, self.end]
    }

    /// Check if `c` is one of the reserved symbols.
    pub fn contains(
        &self,
        c: char,
    ) -> bool {
        self.as_array().contains(&c)
    }

    fn validate(&self) -> RSResult<()> {
        let [pad, start, end] = self.as_array();
        if pad == start || pad == end || start == end {
            return Err(RecstatError::VocabConflict(format!(
                "reserved symbols must be distinct: {self:?}"
            )));
        }
        Ok(())
    }
}

/// A validated character vocabulary.
///
/// Ids are the dense range `0..len()`; the id of a character is its
/// position in assignment order.
#[derive(Debug, Clone, PartialEq)]
pub struct CharVocab<T: TokenType = u32> {
    /// Characters indexed by id.
    chars: Vec<char>,

    /// The inverse of `chars`.
    char_to_id: RSHashMap<char, T>,
}

impl<T: TokenType> CharVocab<T> {
    /// Build a vocabulary from observed character frequencies.
    ///
    /// Reserved symbols take ids 0, 1, 2; every other character takes the next
    /// id in `freq` first-seen order. An observed character equal to a
    /// reserved symbol keeps its reserved id.
    pub fn build(
        freq: &CharFrequency,
        reserved: ReservedSymbols,
    ) -> RSResult<Self> {
        reserved.validate()?;

        let chars = reserved
            .as_array()
            .into_iter()
            .chain(freq.chars().filter(|&c| !reserved.contains(c)));

        let mut vocab = Self {
            chars: Vec::with_capacity(NUM_RESERVED + freq.len()),
            char_to_id: RSHashMap::with_capacity(NUM_RESERVED + freq.len()),
        };
        for c in chars {
            vocab.push(c)?;
        }
        Ok(vocab)
    }

    /// Build a vocabulary from `(char, id)` pairs, in any order.
    ///
    /// The pairs must form a bijection onto `0..N` with `N >= 3`;
    /// the characters at ids 0, 1, 2 become the reserved symbols.
    pub fn try_from_pairs<I>(pairs: I) -> RSResult<Self>
    where
        I: IntoIterator<Item = (char, T)>,
    {
        let mut pairs: Vec<(char, T)> = pairs.into_iter().collect();
        pairs.sort_by_key(|&(_, id)| id);

        let mut vocab = Self {
            chars: Vec::with_capacity(pairs.len()),
            char_to_id: RSHashMap::with_capacity(pairs.len()),
        };
        for (c, id) in pairs {
            let expected = vocab.chars.len();
            let id = id
                .to_usize()
                .ok_or_else(|| RecstatError::TokenOutOfRange(id.to_u64().unwrap_or(u64::MAX)))?;
            if id < expected {
                return Err(RecstatError::VocabConflict(format!(
                    "id {id} is assigned to both {:?} and {c:?}",
                    vocab.chars[id]
                )));
            }
            if id > expected {
                return Err(RecstatError::VocabConflict(format!(
                    "ids are not dense: missing id {expected}"
                )));
            }
            vocab.push(c)?;
        }

        if vocab.len() < NUM_RESERVED {
            return Err(RecstatError::VocabConflict(format!(
                "vocab has {} entries; the {NUM_RESERVED} reserved symbols are missing",
                vocab.len()
            )));
        }
        Ok(vocab)
    }

    fn push(
        &mut self,
        c: char,
    ) -> RSResult<()> {
        let next = self.chars.len();
        let id = T::from_usize(next).ok_or(RecstatError::TokenOutOfRange(next as u64))?;
        if self.char_to_id.insert(c, id).is_some() {
            return Err(RecstatError::VocabConflict(format!(
                "character {c:?} is assigned more than one id"
            )));
        }
        self.chars.push(c);
        Ok(())
    }

    /// The reserved symbols, as held at ids 0, 1, 2.
    pub fn reserved(&self) -> ReservedSymbols {
        ReservedSymbols {
            pad: self.chars[0],
            start: self.chars[1],
            end: self.chars[2],
        }
    }

    /// The number of entries, reserved symbols included.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; a vocab holds at least the reserved symbols.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Look up the id of a character.
    pub fn lookup_id(
        &self,
        c: char,
    ) -> Option<T> {
        self.char_to_id.get(&c).copied()
    }

    /// Look up the character of an id.
    pub fn lookup_char(
        &self,
        id: T,
    ) -> Option<char> {
        id.to_usize().and_then(|idx| self.chars.get(idx).copied())
    }

    /// Iterate `(char, id)` in id order.
    pub fn entries(&self) -> impl Iterator<Item = (char, T)> + '_ {
        self.chars.iter().map(|&c| (c, self.char_to_id[&c]))
    }

    /// Encode a label for a sequence model.
    ///
    /// The result is `[start, ids.., end, pad..]`, always `max_len + 2` long.
    pub fn encode_label(
        &self,
        label: &str,
        max_len: usize,
    ) -> RSResult<Vec<T>> {
        let len = label.chars().count();
        if len > max_len {
            return Err(RecstatError::LabelTooLong { len, max_len });
        }

        let reserved = self.reserved();
        let id_of = |c: char| self.lookup_id(c).ok_or(RecstatError::UnknownChar(c));

        let mut ids = Vec::with_capacity(max_len + 2);
        ids.push(id_of(reserved.start)?);
        for c in label.chars() {
            ids.push(id_of(c)?);
        }
        ids.push(id_of(reserved.end)?);
        ids.resize(max_len + 2, id_of(reserved.pad)?);
        Ok(ids)
    }

    /// Decode an id sequence back into a label.
    ///
    /// Padding and start symbols are skipped; decoding stops at the first end symbol.
    pub fn decode_ids(
        &self,
        ids: &[T],
    ) -> RSResult<String> {
        let reserved = self.reserved();
        let mut label = String::with_capacity(ids.len());
        for &id in ids {
            let c = self
                .lookup_char(id)
                .ok_or_else(|| RecstatError::TokenOutOfRange(id.to_u64().unwrap_or(u64::MAX)))?;
            if c == reserved.end {
                break;
            }
            if c == reserved.pad || c == reserved.start {
                continue;
            }
            label.push(c);
        }
        Ok(label)
    }
}

/// The raw result of loading a vocab file: forward and reverse maps.
///
/// No bijection is enforced; see [`LoadedVocab::validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedVocab<T: TokenType = u32> {
    /// Character to id.
    pub char_to_id: RSHashMap<char, T>,

    /// Id to character.
    pub id_to_char: RSHashMap<T, char>,
}

impl<T: TokenType> LoadedVocab<T> {
    /// Record a `(char, id)` pair; the last pair wins on each key.
    ///
    /// A repeated character moves to its new id, and its stale reverse entry
    /// is dropped. A repeated id points at the new character in the reverse
    /// map, while the earlier character keeps its forward entry.
    pub fn insert(
        &mut self,
        c: char,
        id: T,
    ) {
        if let Some(old_id) = self.char_to_id.insert(c, id)
            && old_id != id
            && self.id_to_char.get(&old_id) == Some(&c)
        {
            self.id_to_char.remove(&old_id);
        }
        self.id_to_char.insert(id, c);
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.char_to_id.len()
    }

    /// Check if nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.char_to_id.is_empty()
    }

    /// Check the loaded pairs form a dense bijection and build a [`CharVocab`].
    pub fn validate(&self) -> RSResult<CharVocab<T>> {
        CharVocab::try_from_pairs(self.char_to_id.iter().map(|(&c, &id)| (c, id)))
    }
}

impl<T: TokenType> From<&CharVocab<T>> for LoadedVocab<T> {
    fn from(vocab: &CharVocab<T>) -> Self {
        let mut loaded = Self::default();
        for (c, id) in vocab.entries() {
            loaded.insert(c, id);
        }
        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq_of(labels: &[&str]) -> CharFrequency {
        let mut freq = CharFrequency::new();
        freq.update_from_labels(labels);
        freq
    }

    fn assert_dense_bijection<T: TokenType>(vocab: &CharVocab<T>) {
        for (idx, (c, id)) in vocab.entries().enumerate() {
            assert_eq!(id.to_usize().unwrap(), idx);
            assert_eq!(vocab.lookup_char(id), Some(c));
            assert_eq!(vocab.lookup_id(c), Some(id));
        }
    }

    #[test]
    fn test_build() {
        let vocab: CharVocab<u32> =
            CharVocab::build(&freq_of(&["hello", "world"]), ReservedSymbols::default()).unwrap();

        assert_eq!(
            vocab.entries().collect::<Vec<_>>(),
            vec![
                ('☯', 0),
                ('■', 1),
                ('□', 2),
                ('h', 3),
                ('e', 4),
                ('l', 5),
                ('o', 6),
                ('w', 7),
                ('r', 8),
                ('d', 9),
            ]
        );
        assert_eq!(vocab.reserved(), ReservedSymbols::default());
        assert_dense_bijection(&vocab);
    }

    #[test]
    fn test_build_empty() {
        let vocab: CharVocab<u16> =
            CharVocab::build(&CharFrequency::new(), ReservedSymbols::default()).unwrap();
        assert_eq!(vocab.len(), NUM_RESERVED);
        assert_dense_bijection(&vocab);
    }

    #[test]
    fn test_build_observed_reserved_symbol() {
        let vocab: CharVocab<u32> =
            CharVocab::build(&freq_of(&["a■b"]), ReservedSymbols::default()).unwrap();

        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.lookup_id('■'), Some(1));
        assert_eq!(vocab.lookup_id('a'), Some(3));
        assert_eq!(vocab.lookup_id('b'), Some(4));
        assert_dense_bijection(&vocab);
    }

    #[test]
    fn test_build_rejects_duplicate_reserved() {
        let reserved = ReservedSymbols {
            pad: 'x',
            start: 'x',
            end: 'y',
        };
        assert!(matches!(
            CharVocab::<u32>::build(&freq_of(&["abc"]), reserved),
            Err(RecstatError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_build_overflow() {
        let labels: String = (0x100..0x200u32).filter_map(char::from_u32).collect();
        let freq = freq_of(&[labels.as_str()]);
        let result = CharVocab::<u8>::build(&freq, ReservedSymbols::default());
        assert!(matches!(result, Err(RecstatError::TokenOutOfRange(256))));
    }

    #[test]
    fn test_try_from_pairs() {
        let vocab: CharVocab<u32> =
            CharVocab::try_from_pairs([('a', 3), ('p', 0), ('e', 2), ('s', 1)]).unwrap();
        assert_eq!(vocab.reserved(), ReservedSymbols {
            pad: 'p',
            start: 's',
            end: 'e',
        });
        assert_eq!(vocab.lookup_id('a'), Some(3));

        assert!(matches!(
            CharVocab::<u32>::try_from_pairs([('a', 0), ('b', 1), ('c', 2), ('d', 2)]),
            Err(RecstatError::VocabConflict(_))
        ));
        assert!(matches!(
            CharVocab::<u32>::try_from_pairs([('a', 0), ('b', 1), ('c', 2), ('a', 3)]),
            Err(RecstatError::VocabConflict(_))
        ));
        assert!(matches!(
            CharVocab::<u32>::try_from_pairs([('a', 0), ('b', 1), ('c', 2), ('d', 4)]),
            Err(RecstatError::VocabConflict(_))
        ));
        assert!(matches!(
            CharVocab::<u32>::try_from_pairs([('a', 0), ('b', 1)]),
            Err(RecstatError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_encode_decode() {
        let vocab: CharVocab<u32> =
            CharVocab::build(&freq_of(&["abc"]), ReservedSymbols::default()).unwrap();

        let ids = vocab.encode_label("cab", 5).unwrap();
        assert_eq!(ids, vec![1, 5, 3, 4, 2, 0, 0]);
        assert_eq!(vocab.decode_ids(&ids).unwrap(), "cab");

        assert_eq!(vocab.encode_label("", 0).unwrap(), vec![1, 2]);

        assert!(matches!(
            vocab.encode_label("abcabc", 5),
            Err(RecstatError::LabelTooLong { len: 6, max_len: 5 })
        ));
        assert!(matches!(
            vocab.encode_label("abz", 5),
            Err(RecstatError::UnknownChar('z'))
        ));
        assert!(vocab.decode_ids(&[1, 99]).is_err());
    }

    #[test]
    fn test_loaded_vocab_last_write_wins() {
        let mut loaded: LoadedVocab<u32> = LoadedVocab::default();
        loaded.insert('a', 3);
        loaded.insert('b', 4);
        loaded.insert('a', 5);

        assert_eq!(loaded.char_to_id.get(&'a'), Some(&5));
        assert_eq!(loaded.id_to_char.get(&5), Some(&'a'));
        assert_eq!(loaded.id_to_char.get(&3), None);
        assert_eq!(loaded.len(), 2);

        loaded.insert('c', 4);
        assert_eq!(loaded.char_to_id.get(&'b'), Some(&4));
        assert_eq!(loaded.char_to_id.get(&'c'), Some(&4));
        assert_eq!(loaded.id_to_char.get(&4), Some(&'c'));

        // Moving 'b' must not drop the reverse entry now owned by 'c'.
        loaded.insert('b', 6);
        assert_eq!(loaded.id_to_char.get(&4), Some(&'c'));
        assert_eq!(loaded.id_to_char.get(&6), Some(&'b'));
    }

    #[test]
    fn test_loaded_vocab_validate() {
        let vocab: CharVocab<u32> =
            CharVocab::build(&freq_of(&["xyz"]), ReservedSymbols::default()).unwrap();
        let loaded = LoadedVocab::from(&vocab);
        assert_eq!(loaded.validate().unwrap(), vocab);

        let mut gappy = loaded.clone();
        gappy.insert('q', 10);
        assert!(gappy.validate().is_err());
    }
}
