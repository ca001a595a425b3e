//! Column, cell and range references in A1 notation
//!
//! All indices are 1-based, matching the spreadsheet convention (column A = 1,
//! row 1 is the first row). Column references arrive from callers either as a
//! numeric index or as letters; [`ColumnRef`] carries that distinction and is
//! resolved to a canonical index once, at the API boundary.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Maximum 1-based column index ("XFD", the Excel limit)
pub const MAX_COL: u32 = 16_384;

/// Maximum 1-based row index (the Excel limit)
pub const MAX_ROW: u32 = 1_048_576;

/// A column reference: either a 1-based numeric index or column letters
///
/// ```rust
/// use sheet_access::ColumnRef;
///
/// assert_eq!(ColumnRef::from(4).resolve().unwrap(), 4);
/// assert_eq!(ColumnRef::from("D").resolve().unwrap(), 4);
/// assert_eq!(ColumnRef::from("AA").resolve().unwrap(), 27);
/// assert!(ColumnRef::from(0).resolve().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    /// 1-based numeric column index
    Index(u32),
    /// Column letters (A = 1, Z = 26, AA = 27, ...)
    Letter(String),
}

impl ColumnRef {
    /// Resolve to the canonical 1-based column index
    pub fn resolve(&self) -> Result<u32> {
        match self {
            ColumnRef::Index(0) => Err(Error::InvalidColumn("0".into())),
            ColumnRef::Index(idx) if *idx > MAX_COL => {
                Err(Error::InvalidColumn(idx.to_string()))
            }
            ColumnRef::Index(idx) => Ok(*idx),
            ColumnRef::Letter(letters) => letters_to_column(letters),
        }
    }
}

impl From<u32> for ColumnRef {
    fn from(index: u32) -> Self {
        ColumnRef::Index(index)
    }
}

// Integer literals default to i32; without this, `cell_value(sheet, 4, 2)`
// would not type-check. Non-positive values map to index 0, which resolve()
// rejects as invalid.
impl From<i32> for ColumnRef {
    fn from(index: i32) -> Self {
        ColumnRef::Index(u32::try_from(index).unwrap_or(0))
    }
}

impl From<&str> for ColumnRef {
    fn from(letters: &str) -> Self {
        ColumnRef::Letter(letters.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(letters: String) -> Self {
        ColumnRef::Letter(letters)
    }
}

impl FromStr for ColumnRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Validate eagerly so FromStr rejects garbage instead of deferring
        letters_to_column(s)?;
        Ok(ColumnRef::Letter(s.to_string()))
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Index(idx) => write!(f, "{}", idx),
            ColumnRef::Letter(letters) => write!(f, "{}", letters),
        }
    }
}

/// Convert column letters to a 1-based index (A = 1, Z = 26, AA = 27, ...)
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidColumn("empty column letters".into()));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumn(letters.to_string()));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        if col > MAX_COL {
            return Err(Error::InvalidColumn(letters.to_string()));
        }
    }

    Ok(col)
}

/// Convert a 1-based column index to letters (1 = A, 26 = Z, 27 = AA, ...)
pub fn column_to_letters(col: u32) -> String {
    let mut result = String::new();
    let mut n = col;

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// A resolved cell reference: 1-based column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    /// 1-based column index
    pub col: u32,
    /// 1-based row index
    pub row: u32,
}

impl CellRef {
    /// Create a new cell reference (both indices 1-based)
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Parse a cell reference from A1-style notation
    ///
    /// Absolute markers (`$B$2`) are accepted and discarded; the crate has
    /// no use for the relative/absolute distinction.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == col_start {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = letters_to_column(&s[col_start..pos])?;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        let row_str = &s[pos..];
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        if row > MAX_ROW {
            return Err(Error::InvalidAddress(format!("row out of bounds in '{}'", s)));
        }

        Ok(Self { col, row })
    }

    /// Format as an A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", column_to_letters(self.col), self.row)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells (e.g. "B8:C9")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRangeRef {
    /// Top-left corner
    pub start: CellRef,
    /// Bottom-right corner
    pub end: CellRef,
}

impl CellRangeRef {
    /// Create a new range, normalizing so `start` is the top-left corner
    pub fn new(a: CellRef, b: CellRef) -> Self {
        Self {
            start: CellRef::new(a.col.min(b.col), a.row.min(b.row)),
            end: CellRef::new(a.col.max(b.col), a.row.max(b.row)),
        }
    }

    /// Create a single-cell range
    pub fn single(cell: CellRef) -> Self {
        Self {
            start: cell,
            end: cell,
        }
    }

    /// Parse a range from `A1:B10` notation; a bare address is a
    /// single-cell range
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(colon_pos) = s.find(':') {
            let start = CellRef::parse(&s[..colon_pos])?;
            let end = CellRef::parse(&s[colon_pos + 1..])?;
            Ok(Self::new(start, end))
        } else {
            Ok(Self::single(CellRef::parse(s)?))
        }
    }

    /// Check whether a 1-based coordinate falls inside this range
    pub fn contains(&self, col: u32, row: u32) -> bool {
        col >= self.start.col && col <= self.end.col && row >= self.start.row && row <= self.end.row
    }

    /// Number of rows spanned
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Number of columns spanned
    pub fn col_count(&self) -> u32 {
        self.end.col - self.start.col + 1
    }

    /// Iterate over all cell references in the range, row by row
    pub fn cells(&self) -> impl Iterator<Item = CellRef> {
        let (start_col, end_col) = (self.start.col, self.end.col);
        (self.start.row..=self.end.row)
            .flat_map(move |row| (start_col..=end_col).map(move |col| CellRef::new(col, row)))
    }

    /// Format as an `A1:B10` string (single-cell ranges collapse to `A1`)
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
        }
    }
}

impl fmt::Display for CellRangeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRangeRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Split a possibly sheet-qualified address into sheet name and range text
///
/// `"Sheet1!$D$7"` yields `(Some("Sheet1"), "$D$7")`; quoted names are
/// unquoted with `''` unescaped to `'`. An address with no `!` separator
/// yields `(None, address)`.
pub fn split_sheet_address(address: &str) -> (Option<String>, &str) {
    let address = address.trim();

    if let Some(rest) = address.strip_prefix('\'') {
        let mut name = String::new();
        let mut skip_next = false;
        for (i, c) in rest.char_indices() {
            if skip_next {
                skip_next = false;
                continue;
            }
            if c == '\'' {
                match rest[i + 1..].chars().next() {
                    Some('\'') => {
                        name.push('\'');
                        skip_next = true;
                    }
                    Some('!') => return (Some(name), &rest[i + 2..]),
                    // Unterminated or misplaced quote: not a sheet qualifier
                    _ => break,
                }
            } else {
                name.push(c);
            }
        }
        (None, address)
    } else if let Some(pos) = address.rfind('!') {
        (Some(address[..pos].to_string()), &address[pos + 1..])
    } else {
        (None, address)
    }
}
