//! A1 references and rectangular ranges
//!
//! Both coordinates are 1-based: `A1` is row 1, column 1. Values outside
//! `1..=MAX_ROWS` and `1..=MAX_COLS` are rejected wherever an address is
//! parsed or checked.

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "C12")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    pub row: u32,
    pub col: u16,
}

impl CellAddress {
    /// Address without bounds checks
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Address whose coordinates lie on the sheet
    pub fn checked(row: u32, col: u16) -> Result<Self> {
        if row == 0 || row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }
        if col == 0 || col > MAX_COLS {
            return Err(Error::ColumnOutOfBounds(u32::from(col), MAX_COLS));
        }
        Ok(Self { row, col })
    }

    /// Parse A1 notation; `$` markers are ignored
    ///
    /// ```
    /// use sheetcraft_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("$AA$10").unwrap();
    /// assert_eq!((addr.row, addr.col), (10, 27));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let reference: String = s.trim().chars().filter(|c| *c != '$').collect();
        let split = reference
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(reference.len());
        let (letters, digits) = reference.split_at(split);

        if letters.is_empty() || digits.is_empty() {
            return Err(Error::InvalidAddress(format!("'{}'", s.trim())));
        }
        let col = column_number(letters)?;
        let row = digits
            .parse::<u32>()
            .map_err(|_| Error::InvalidAddress(format!("bad row number in '{}'", s.trim())))?;

        Self::checked(row, col)
    }
}

/// Column letters to a number: `A` is 1, `AA` is 27
fn column_number(letters: &str) -> Result<u16> {
    let mut col: u32 = 0;
    for c in letters.chars() {
        col = col * 26 + u32::from(c.to_ascii_uppercase() as u8 - b'A') + 1;
        if col > u32::from(MAX_COLS) {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS));
        }
    }
    Ok(col as u16)
}

/// Column number to letters: 1 is `A`, 27 is `AA`
fn column_letters(col: u16) -> String {
    let mut letters = Vec::new();
    let mut n = u32::from(col);
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|b| *b as char).collect()
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letters(self.col), self.row)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells (e.g., "A1:B10"), corners normalized so
/// `start` is top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub start: CellAddress,
    pub end: CellAddress,
}

impl CellRange {
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Range between two (row, column) corners
    pub fn from_indices(first_row: u32, first_col: u16, last_row: u32, last_col: u16) -> Self {
        Self::new(
            CellAddress::new(first_row, first_col),
            CellAddress::new(last_row, last_col),
        )
    }

    /// Parse `A1:B10`, or a single reference as a one-cell range
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().split_once(':') {
            Some((a, b)) => Ok(Self::new(CellAddress::parse(a)?, CellAddress::parse(b)?)),
            None => {
                let addr = CellAddress::parse(s)?;
                Ok(Self::new(addr, addr))
            }
        }
    }

    pub fn is_single_cell(&self) -> bool {
        self.start == self.end
    }

    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.start.row <= other.end.row
            && other.start.row <= self.end.row
            && self.start.col <= other.end.col
            && other.start.col <= self.end.col
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_cell() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_letters() {
        let cases = [(1, "A"), (26, "Z"), (27, "AA"), (702, "ZZ"), (703, "AAA"), (16_384, "XFD")];
        for (col, letters) in cases {
            assert_eq!(column_letters(col), letters);
            assert_eq!(column_number(letters).unwrap(), col);
        }
        assert_eq!(column_number("ab").unwrap(), 28);
        assert!(column_number("XFE").is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(CellAddress::parse("A1").unwrap(), CellAddress::new(1, 1));
        assert_eq!(CellAddress::parse(" $C$7 ").unwrap(), CellAddress::new(7, 3));
        assert_eq!(
            "XFD1048576".parse::<CellAddress>().unwrap(),
            CellAddress::new(1_048_576, 16_384)
        );
        assert_eq!(CellAddress::new(12, 28).to_string(), "AB12");
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "A", "1", "A0", "A1048577", "A1B", "1A"] {
            assert!(CellAddress::parse(bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn test_checked_rejects_zero() {
        assert!(CellAddress::checked(0, 1).is_err());
        assert!(CellAddress::checked(1, 0).is_err());
        assert!(CellAddress::checked(1, MAX_COLS + 1).is_err());
        assert!(CellAddress::checked(1, 1).is_ok());
    }

    #[test]
    fn test_range_normalizes_corners() {
        let range = CellRange::from_indices(3, 4, 1, 2);
        assert_eq!(range.start, CellAddress::new(1, 2));
        assert_eq!(range.end, CellAddress::new(3, 4));
        assert_eq!(range.to_string(), "B1:D3");
        assert_eq!(CellRange::parse("C5").unwrap().to_string(), "C5");
    }

    #[test]
    fn test_range_overlaps() {
        let a: CellRange = "A1:C3".parse().unwrap();
        assert!(a.overlaps(&"C3:D4".parse().unwrap()));
        assert!(!a.overlaps(&"D1:E3".parse().unwrap()));
        assert!(!a.overlaps(&"A4".parse().unwrap()));
    }
}
