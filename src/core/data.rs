//! Wide-format CSV loader with zero-allocation float parsing.
//!
//! Layout: a header line naming every column, then one row per category.
//! The first column is the category key, every other column a numeric series.
//!
//! ```text
//! # comments and blank lines are skipped
//! season,red,blue,green
//! 2021,7,3,5
//! 2022,2,2,4
//! ```

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

use crate::core::{
    error::TableError,
    table::{Category, ObservationTable},
};

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    MissingHeader,
    DuplicateHeader(String),
    NoRows,
    BadColumnCount { expected: usize, found: usize },
    BadFloat { column: String, text: String },
    Table(TableError),
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::MissingHeader => {
                write!(f, "expected a header with a category column and at least one series")
            }
            ParseErrorKind::DuplicateHeader(name) => {
                write!(f, "line {}: column `{}` appears twice", self.line, name)
            }
            ParseErrorKind::NoRows => write!(f, "no data rows after the header"),
            ParseErrorKind::BadColumnCount { expected, found } => write!(
                f,
                "line {}: expected {} columns, got {}",
                self.line, expected, found
            ),
            ParseErrorKind::Table(e) => write!(f, "line {}: {}", self.line, e),
            ParseErrorKind::BadFloat { column, text } => {
                write!(
                    f,
                    "line {}: invalid {} value '{}'",
                    self.line, column, text
                )
            }
        }
    }
}
impl Error for ParseCsvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Io(e) => Some(e),
            ParseErrorKind::Table(e) => Some(e),
            _ => None,
        }
    }
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, column: &str) -> Result<f64, ParseCsvError> {
    let bad = || ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat {
            column: column.to_owned(),
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

/// Finite number if it parses as one, text otherwise.
#[inline]
fn parse_category(bytes: &[u8]) -> Category {
    match lexical_core::parse::<f64>(bytes) {
        Ok(v) if v.is_finite() => Category::Number(v),
        _ => Category::Text(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Header names, at least a category key and one series, all distinct.
fn parse_header(buf: &[u8], line: usize) -> Result<Vec<String>, ParseCsvError> {
    let names: Vec<String> = split_fields(buf)
        .map(|f| String::from_utf8_lossy(f).into_owned())
        .collect();
    if names.len() < 2 {
        return Err(ParseCsvError {
            line,
            kind: ParseErrorKind::MissingHeader,
        });
    }
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(ParseCsvError {
                line,
                kind: ParseErrorKind::DuplicateHeader(name.clone()),
            });
        }
    }
    Ok(names)
}

#[inline]
fn split_fields(buf: &[u8]) -> impl Iterator<Item = &[u8]> {
    buf.split(|&b| b == b',').map(trim)
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

pub fn read_csv_fast<R: Read>(src: R) -> Result<ObservationTable, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut header: Option<Vec<String>> = None;
    let mut categories = Vec::<Category>::new();
    let mut columns = Vec::<Vec<f64>>::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if matches!(trim(&buf).first(), None | Some(&b'#')) {
            continue;
        }

        if header.is_none() {
            let names = parse_header(&buf, line_no)?;
            columns = vec![Vec::new(); names.len() - 1];
            header = Some(names);
            continue;
        }
        let names = header.as_deref().unwrap_or_default();

        let found = split_fields(&buf).count();
        if found != names.len() {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount {
                    expected: names.len(),
                    found,
                },
            });
        }

        let mut fields = split_fields(&buf);
        // count checked above, so the first field exists
        if let Some(first) = fields.next() {
            categories.push(parse_category(first));
        }
        for ((field, col), name) in fields.zip(columns.iter_mut()).zip(&names[1..]) {
            col.push(parse_f64(field, line_no, name)?);
        }
    }

    let Some(names) = header else {
        return Err(ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::MissingHeader,
        });
    };
    if categories.is_empty() {
        return Err(ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::NoRows,
        });
    }

    let mut names = names.into_iter();
    let key = names.next().unwrap_or_default();
    let mut table = ObservationTable::new(key, categories);
    for (name, values) in names.zip(columns) {
        table.push_series(name, values).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Table(e),
        })?;
    }
    Ok(table)
}

pub fn read_csv_from_path(path: &str) -> Result<ObservationTable, ParseCsvError> {
    if path == "-" {
        read_csv_fast(std::io::stdin())
    } else {
        use std::fs::File;
        read_csv_fast(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_minus_is_ascii_after_normalising() {
        let mut buf = "x,\u{2212}3.5".as_bytes().to_vec();
        normalize_unicode_minus(&mut buf);
        assert_eq!(buf, b"x,-3.5");
    }

    #[test]
    fn text_and_numeric_categories() {
        assert_eq!(parse_category(b"2021"), Category::Number(2021.0));
        assert_eq!(parse_category(b"Q1"), Category::from("Q1"));
        assert_eq!(parse_category(b"nan"), Category::from("nan"));
    }

    #[test]
    fn fields_are_trimmed() {
        let v: Vec<&[u8]> = split_fields(b" a , b,c ").collect();
        assert_eq!(v, [&b"a"[..], b"b", b"c"]);
    }
}
