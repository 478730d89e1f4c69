//! # Label Records
//!
//! Label files hold one record per line:
//! ```terminaloutput
//! {IMAGE NAME},"{LABEL}"
//! ```
//!
//! The record splits on the first comma, so labels may themselves contain commas.

use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use crate::errors::{RSResult, RecstatError};

/// One parsed line of a label file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRecord {
    /// The image file name.
    pub image_name: String,

    /// The ground-truth label, with the surrounding quotes removed.
    pub label: String,
}

impl LabelRecord {
    /// The label length in characters.
    pub fn label_len(&self) -> usize {
        self.label.chars().count()
    }
}

/// Parse a single label line.
///
/// ## Arguments
/// * `line` - the raw line; trailing whitespace is ignored.
/// * `line_no` - the 1-based line number, used in errors.
pub fn parse_label_line(
    line: &str,
    line_no: usize,
) -> RSResult<LabelRecord> {
    let line = line.trim_end();
    let malformed = |reason: &'static str| RecstatError::MalformedLabel {
        line_no,
        line: line.to_string(),
        reason,
    };

    let (image_name, field) = line.split_once(',').ok_or_else(|| malformed("missing comma"))?;

    let label = field
        .trim()
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .ok_or_else(|| malformed("label is not quoted"))?;

    Ok(LabelRecord {
        image_name: image_name.to_string(),
        label: label.to_string(),
    })
}

/// Iterator over the [`LabelRecord`]s of a label file.
pub struct LabelReader<R: BufRead> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> LabelReader<R> {
    /// Wrap a line reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for LabelReader<R> {
    type Item = RSResult<LabelRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_no += 1;
        let line_no = self.line_no;
        Some(
            line.map_err(RecstatError::from)
                .and_then(|line| parse_label_line(&line, line_no)),
        )
    }
}

/// Open a label file as a [`LabelReader`].
pub fn read_label_records_path<P: AsRef<Path>>(
    path: P
) -> RSResult<LabelReader<BufReader<File>>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(LabelReader::new(reader))
}

/// Find the longest label, in characters, in a label stream.
///
/// ## Returns
/// `None` if the stream holds no records.
pub fn max_label_len<R: BufRead>(reader: R) -> RSResult<Option<usize>> {
    let mut max_len = None;
    for record in LabelReader::new(reader) {
        let len = record?.label_len();
        max_len = max_len.max(Some(len));
    }
    Ok(max_len)
}

/// Find the longest label, in characters, in a label file.
///
/// See [`max_label_len`].
pub fn max_label_len_path<P: AsRef<Path>>(path: P) -> RSResult<Option<usize>> {
    let reader = BufReader::new(File::open(path)?);
    max_label_len(reader)
}

/// Render a max label length the way the reports print it; `-1` for no records.
pub fn format_max_len(max_len: Option<usize>) -> String {
    match max_len {
        Some(len) => len.to_string(),
        None => "-1".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_parse_label_line() {
        let record = parse_label_line("word_1.png,\"Tiredness\"\r\n", 1).unwrap();
        assert_eq!(record.image_name, "word_1.png");
        assert_eq!(record.label, "Tiredness");
        assert_eq!(record.label_len(), 9);

        let record = parse_label_line("word_2.png, \"a,b\"", 2).unwrap();
        assert_eq!(record.label, "a,b");

        let record = parse_label_line("word_3.png,\"\"", 3).unwrap();
        assert_eq!(record.label, "");

        // Only one quote is removed from each side.
        let record = parse_label_line("word_4.png,\"\"x\"\"", 4).unwrap();
        assert_eq!(record.label, "\"x\"");
    }

    #[test]
    fn test_parse_malformed() {
        match parse_label_line("no-comma-here", 7) {
            Err(RecstatError::MalformedLabel { line_no, reason, .. }) => {
                assert_eq!(line_no, 7);
                assert_eq!(reason, "missing comma");
            }
            other => panic!("unexpected: {other:?}"),
        }

        assert!(matches!(
            parse_label_line("img.png,unquoted", 1),
            Err(RecstatError::MalformedLabel { .. })
        ));
        assert!(matches!(
            parse_label_line("img.png,\"", 1),
            Err(RecstatError::MalformedLabel { .. })
        ));
    }

    #[test]
    fn test_max_label_len() {
        let data = "img1,\"AB\"\nimg2,\"ABCDE\"\n";
        assert_eq!(max_label_len(Cursor::new(data)).unwrap(), Some(5));

        assert_eq!(max_label_len(Cursor::new("")).unwrap(), None);
        assert_eq!(format_max_len(None), "-1");
        assert_eq!(format_max_len(Some(5)), "5");

        // Characters, not bytes.
        let data = "img1,\"caf\u{00e9}\"\n";
        assert_eq!(max_label_len(Cursor::new(data)).unwrap(), Some(4));
    }

    #[test]
    fn test_max_label_len_reports_line() {
        let data = "img1,\"AB\"\nbroken\n";
        match max_label_len(Cursor::new(data)) {
            Err(RecstatError::MalformedLabel { line_no, .. }) => assert_eq!(line_no, 2),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_max_label_len_path() {
        tempdir::TempDir::new("labels_test")
            .and_then(|dir| {
                let path = dir.path().join("train_gt.txt");
                std::fs::write(&path, "a.png,\"xyz\"\nb.png,\"q\"\n")?;
                assert_eq!(max_label_len_path(&path).unwrap(), Some(3));

                let records = read_label_records_path(&path)
                    .unwrap()
                    .collect::<RSResult<Vec<_>>>()
                    .unwrap();
                assert_eq!(records.len(), 2);
                assert_eq!(records[1].image_name, "b.png");

                assert!(max_label_len_path(dir.path().join("missing.txt")).is_err());
                Ok(())
            })
            .unwrap();
    }
}
