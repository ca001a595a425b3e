//! # sheet-access
//!
//! Convenience helpers layered over the [`umya_spreadsheet`] object model:
//! default-aware cell reads, defined-name value lookup, used-region bounds,
//! merge-range queries and dissolution, and worksheet-scoped defined-name
//! removal.
//!
//! The crate owns no spreadsheet state. Callers load or build a
//! [`umya_spreadsheet::Spreadsheet`] themselves and pass worksheet or
//! workbook handles into each call. Reads degrade to `None` when the target
//! does not exist; writes and structural mutations fail loudly and leave
//! the handle untouched.
//!
//! Column arguments accept either a 1-based index or column letters
//! ([`ColumnRef`]); rows are always 1-based indices.
//!
//! ## Example
//!
//! ```rust
//! use sheet_access::{cell_value, in_merge_range, set_cell_value, unmerge_contained_cells};
//!
//! let mut book = umya_spreadsheet::new_file();
//! let sheet = book.get_sheet_mut(&0).unwrap();
//!
//! sheet.get_cell_mut("B2").set_value("  Hello !! World !!  ");
//! sheet.add_merge_cells("B8:C9");
//!
//! // Reads trim surrounding whitespace and miss to None
//! assert_eq!(cell_value(sheet, "B", 2).as_deref(), Some("Hello !! World !!"));
//! assert_eq!(cell_value(sheet, 9, 9).unwrap_or_default(), "");
//!
//! // Merge spans are queried per coordinate and dissolved whole
//! assert!(in_merge_range(sheet, 3, 9));
//! unmerge_contained_cells(sheet, 3, 9);
//! assert!(!in_merge_range(sheet, 2, 8));
//!
//! // Writes require an existing cell
//! set_cell_value(sheet, 2, 2, "updated").unwrap();
//! assert!(set_cell_value(sheet, 9, 9, "nope").is_err());
//! ```

pub mod accessor;
pub mod coord;
pub mod error;

// Re-exports for convenience
pub use accessor::{
    cell_value, cell_value_by_name, highest_row_and_column, in_merge_range,
    merge_range_containing, remove_named_ranges_by_sheet, set_cell_value, unmerge_contained_cells,
};
pub use coord::{
    column_to_letters, letters_to_column, split_sheet_address, CellRangeRef, CellRef, ColumnRef,
    MAX_COL, MAX_ROW,
};
pub use error::{Error, Result};
