//! # Vocabulary IO
//!
//! Vocab files are UTF-8, one entry per line, in id order:
//! ```terminaloutput
//! {CHAR}\t{ID}
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{RSResult, RecstatError},
    types::TokenType,
    vocab::{CharVocab, LoadedVocab},
};

/// Load a [`LoadedVocab`] from a vocab file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_char_vocab_path<T, P>(path: P) -> RSResult<LoadedVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_char_vocab(reader)
}

/// Read a [`LoadedVocab`] from a vocab line reader.
///
/// Duplicate keys overwrite earlier entries: a repeated character takes its
/// last id in both maps; a repeated id maps back to its last character, while
/// every character keeps its own forward entry.
/// Blank lines are skipped.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_char_vocab<T, R>(reader: R) -> RSResult<LoadedVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut vocab = LoadedVocab::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let (c, id) = parse_vocab_line(&line, idx + 1)?;
        vocab.insert(c, id);
    }

    Ok(vocab)
}

fn parse_vocab_line<T: TokenType>(
    line: &str,
    line_no: usize,
) -> RSResult<(char, T)> {
    let parse_err =
        |msg: &str| RecstatError::Parse(format!("vocab line {line_no}: {msg}: {line:?}"));

    let (field, id) = line.split_once('\t').ok_or_else(|| parse_err("missing tab"))?;

    let mut chars = field.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(parse_err("expected exactly one character")),
    };

    let id: u64 = id
        .trim()
        .parse()
        .map_err(|e: core::num::ParseIntError| parse_err(&e.to_string()))?;
    let id = T::from_u64(id).ok_or(RecstatError::TokenOutOfRange(id))?;

    Ok((c, id))
}

/// Save a [`CharVocab`] to a vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_char_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &CharVocab<T>,
    path: P,
) -> RSResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_char_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`CharVocab`] to a [`Write`] writer, in id order.
///
/// Characters which would break the line format (tab, CR, LF) are rejected.
pub fn write_char_vocab<T, W>(
    vocab: &CharVocab<T>,
    writer: &mut W,
) -> RSResult<()>
where
    T: TokenType,
    W: Write,
{
    for (c, id) in vocab.entries() {
        if matches!(c, '\t' | '\r' | '\n') {
            return Err(RecstatError::VocabConflict(format!(
                "character {c:?} cannot be stored in a vocab file"
            )));
        }
        writeln!(writer, "{c}\t{id}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{counting::CharFrequency, vocab::ReservedSymbols};

    fn sample_vocab() -> CharVocab<u32> {
        let mut freq = CharFrequency::new();
        freq.update_from_labels(["Straße", "日本 ,"]);
        CharVocab::build(&freq, ReservedSymbols::default()).unwrap()
    }

    #[test]
    fn test_write_format() {
        let mut freq = CharFrequency::new();
        freq.update_from_label("ab");
        let vocab: CharVocab<u32> = CharVocab::build(&freq, ReservedSymbols::default()).unwrap();

        let mut buf = Vec::new();
        write_char_vocab(&vocab, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "☯\t0\n■\t1\n□\t2\na\t3\nb\t4\n"
        );
    }

    #[test]
    fn test_save_load_char_vocab() {
        let vocab = sample_vocab();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("lbl2id_map.txt");

                save_char_vocab_path(&vocab, &path).expect("Failed to save vocab");

                let loaded: LoadedVocab<u32> =
                    load_char_vocab_path(&path).expect("Failed to load vocab");

                assert_eq!(loaded.len(), vocab.len());
                for (c, id) in vocab.entries() {
                    assert_eq!(loaded.char_to_id.get(&c), Some(&id));
                    assert_eq!(loaded.id_to_char.get(&id), Some(&c));
                }
                assert_eq!(loaded.validate().unwrap(), vocab);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_read_duplicate_char_last_wins() {
        let data = "☯\t0\n■\t1\n□\t2\na\t3\nb\t4\na\t5\n";
        let loaded: LoadedVocab<u32> = read_char_vocab(Cursor::new(data)).unwrap();

        assert_eq!(loaded.char_to_id.get(&'a'), Some(&5));
        assert_eq!(loaded.id_to_char.get(&5), Some(&'a'));
        assert_eq!(loaded.id_to_char.get(&3), None);

        // Id 3 is now missing.
        assert!(loaded.validate().is_err());
    }

    #[test]
    fn test_read_duplicate_id_keeps_forward_entries() {
        let loaded: LoadedVocab<u32> = read_char_vocab(Cursor::new("b\t4\nc\t4\n")).unwrap();

        assert_eq!(loaded.char_to_id.get(&'b'), Some(&4));
        assert_eq!(loaded.char_to_id.get(&'c'), Some(&4));
        assert_eq!(loaded.id_to_char.get(&4), Some(&'c'));
        assert_eq!(loaded.id_to_char.len(), 1);
    }

    #[test]
    fn test_read_duplicate_id_fails_validation() {
        let data = "☯\t0\n■\t1\n□\t2\na\t3\nb\t3\n";
        let loaded: LoadedVocab<u32> = read_char_vocab(Cursor::new(data)).unwrap();
        assert!(matches!(loaded.validate(), Err(RecstatError::VocabConflict(_))));
    }

    #[test]
    fn test_read_whitespace_chars() {
        let data = " \t3\r\n☯\t0\n\n■\t1\n□\t2\n";
        let loaded: LoadedVocab<u32> = read_char_vocab(Cursor::new(data)).unwrap();
        assert_eq!(loaded.char_to_id.get(&' '), Some(&3));
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_read_errors() {
        assert!(matches!(
            read_char_vocab::<u32, _>(Cursor::new("a 3\n")),
            Err(RecstatError::Parse(_))
        ));
        assert!(matches!(
            read_char_vocab::<u32, _>(Cursor::new("ab\t3\n")),
            Err(RecstatError::Parse(_))
        ));
        assert!(matches!(
            read_char_vocab::<u32, _>(Cursor::new("a\tx\n")),
            Err(RecstatError::Parse(_))
        ));
        assert!(matches!(
            read_char_vocab::<u8, _>(Cursor::new("a\t300\n")),
            Err(RecstatError::TokenOutOfRange(300))
        ));
    }

    #[test]
    fn test_write_rejects_tab() {
        let mut freq = CharFrequency::new();
        freq.update_from_label("a\tb");
        let vocab: CharVocab<u32> = CharVocab::build(&freq, ReservedSymbols::default()).unwrap();

        let mut buf = Vec::new();
        assert!(matches!(
            write_char_vocab(&vocab, &mut buf),
            Err(RecstatError::VocabConflict(_))
        ));
    }
}
