//! Per-row record of columns covered by row spans from earlier header rows

use std::collections::{BTreeMap, BTreeSet};

/// Columns reserved in later rows by header cells that span downward
///
/// A ledger belongs to a single page's header pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipLedger {
    rows: BTreeMap<u32, BTreeSet<u16>>,
}

impl SkipLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark columns of a row as taken
    pub fn reserve<I>(&mut self, row: u32, columns: I)
    where
        I: IntoIterator<Item = u16>,
    {
        self.rows.entry(row).or_default().extend(columns);
    }

    /// Reserved columns of a row, ascending
    pub fn consult(&self, row: u32) -> Vec<u16> {
        self.rows
            .get(&row)
            .map(|cols| cols.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Check whether a column of a row is reserved
    pub fn is_reserved(&self, row: u32, col: u16) -> bool {
        self.rows.get(&row).is_some_and(|cols| cols.contains(&col))
    }

    /// First unreserved column at or after `cursor`
    pub fn next_free(&self, row: u32, cursor: u16) -> u16 {
        let Some(reserved) = self.rows.get(&row) else {
            return cursor;
        };
        let mut col = cursor;
        for &taken in reserved.range(cursor..) {
            if taken != col {
                break;
            }
            col += 1;
        }
        col
    }

    /// Check if nothing has been reserved
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
