//! Cell, bounds, merge-range and defined-name accessors
//!
//! Every function here is a thin, per-call delegation into the
//! umya-spreadsheet object model. Nothing is cached and no handle is held
//! between calls; the caller owns the workbook and worksheet.
//!
//! Reads degrade to `None` when the target does not exist; writes and
//! structural mutations fail loudly and leave the sheet untouched.

use umya_spreadsheet::helper::number_format::to_formatted_string;
use umya_spreadsheet::{Cell, NumberingFormat, Spreadsheet, Worksheet};

use crate::coord::{split_sheet_address, CellRangeRef, CellRef, ColumnRef};
use crate::error::{Error, Result};

/// Render a cell's display value: the raw value with its number format
/// applied, when one is set
fn formatted_value(cell: &Cell) -> String {
    let raw = cell.get_value().to_string();
    match cell.get_style().get_number_format() {
        Some(format) if format.get_format_code() != NumberingFormat::FORMAT_GENERAL => {
            to_formatted_string(raw.as_str(), format.get_format_code())
        }
        _ => raw,
    }
}

/// Get a cell's formatted value by column and row
///
/// Returns `None` when no cell exists at the address, including when the
/// column reference is unresolvable or the row is 0. Otherwise the
/// display value with leading/trailing whitespace removed (interior
/// whitespace is preserved). Chain `.unwrap_or(...)` for a default.
///
/// ```rust
/// use sheet_access::cell_value;
///
/// let mut book = umya_spreadsheet::new_file();
/// let sheet = book.get_sheet_mut(&0).unwrap();
/// sheet.get_cell_mut("B2").set_value("  padded  ");
///
/// assert_eq!(cell_value(sheet, 2, 2).as_deref(), Some("padded"));
/// assert_eq!(cell_value(sheet, "B", 2).as_deref(), Some("padded"));
/// assert_eq!(cell_value(sheet, 9, 9), None);
/// ```
pub fn cell_value<C>(sheet: &Worksheet, col: C, row: u32) -> Option<String>
where
    C: Into<ColumnRef>,
{
    let col = col.into().resolve().ok()?;
    if row == 0 {
        return None;
    }

    let cell = sheet.get_cell((col, row))?;
    Some(formatted_value(cell).trim().to_string())
}

/// Get a cell's formatted value through a workbook defined name
///
/// The name is matched case-insensitively against the workbook's defined
/// names. `Ok(None)` when the name does not exist, its address refers to a
/// sheet other than `sheet`, or the resolved address holds no populated
/// cell. For a multi-cell range the top-left cell is read.
///
/// Errors only when the stored address itself cannot be parsed as a cell
/// range (a constant or formula definition, or corrupt address text).
pub fn cell_value_by_name(
    book: &Spreadsheet,
    sheet: &Worksheet,
    name: &str,
) -> Result<Option<String>> {
    let defined = match book
        .get_defined_names()
        .iter()
        .find(|d| d.get_name().eq_ignore_ascii_case(name))
    {
        Some(defined) => defined,
        None => return Ok(None),
    };

    let address = defined.get_address();
    let (owner, range_text) = split_sheet_address(&address);

    if let Some(owner) = owner {
        if owner != sheet.get_name() {
            return Ok(None);
        }
    }

    let range = CellRangeRef::parse(range_text).map_err(|_| Error::NameResolution {
        name: defined.get_name().to_string(),
        address: address.to_string(),
    })?;

    let top_left = range.start;
    Ok(sheet
        .get_cell((top_left.col, top_left.row))
        .map(|cell| formatted_value(cell).trim().to_string()))
}

/// Get the bounds of a worksheet's used region as 1-based indices,
/// column first
///
/// An empty sheet reports `(0, 0)`.
pub fn highest_row_and_column(sheet: &Worksheet) -> (u32, u32) {
    (sheet.get_highest_column(), sheet.get_highest_row())
}

/// Find the merge span containing a coordinate, if any
///
/// Merge spans whose stored range text cannot be parsed are skipped.
pub fn merge_range_containing<C>(sheet: &Worksheet, col: C, row: u32) -> Option<CellRangeRef>
where
    C: Into<ColumnRef>,
{
    let col = col.into().resolve().ok()?;

    sheet.get_merge_cells().iter().find_map(|range| {
        let span = CellRangeRef::parse(&range.get_range()).ok()?;
        span.contains(col, row).then_some(span)
    })
}

/// Check whether a coordinate falls inside any merge span
///
/// This is a pure rectangle test: a coordinate inside a span reports
/// `true` whether or not a cell object exists there (a merged span
/// typically has only its top-left cell populated). Coordinates outside
/// all spans, unresolvable ones included, report `false`.
pub fn in_merge_range<C>(sheet: &Worksheet, col: C, row: u32) -> bool
where
    C: Into<ColumnRef>,
{
    merge_range_containing(sheet, col, row).is_some()
}

/// Remove every workbook defined name whose address refers to the given
/// sheet, returning the number removed
///
/// Names referring to other sheets, and names whose address carries no
/// sheet qualifier, are left intact. Idempotent: a second call removes
/// nothing.
pub fn remove_named_ranges_by_sheet(book: &mut Spreadsheet, sheet_name: &str) -> usize {
    let names = book.get_defined_names_mut();
    let before = names.len();

    names.retain(|defined| {
        let address = defined.get_address();
        let (owner, _) = split_sheet_address(&address);
        owner.as_deref() != Some(sheet_name)
    });

    let removed = before - names.len();
    if removed > 0 {
        log::debug!("removed {removed} defined name(s) bound to sheet '{sheet_name}'");
    }
    removed
}

/// Set a cell's value by column and row
///
/// The target must already exist: writing to an address with no cell is an
/// error and performs no mutation. Numeric and boolean text is stored
/// typed, everything else as a string (the wrapped library's inference).
pub fn set_cell_value<C, V>(sheet: &mut Worksheet, col: C, row: u32, value: V) -> Result<()>
where
    C: Into<ColumnRef>,
    V: Into<String>,
{
    let col = col.into().resolve()?;
    if row == 0 {
        return Err(Error::InvalidAddress(format!(
            "row number must be >= 1, got {}",
            row
        )));
    }

    if sheet.get_cell((col, row)).is_none() {
        return Err(Error::CellNotFound(CellRef::new(col, row).to_a1_string()));
    }

    sheet.get_cell_mut((col, row)).set_value(value);
    Ok(())
}

/// Dissolve the merge span containing a coordinate
///
/// The entire span is removed, not just the addressed cell. Returns `true`
/// when a span was dissolved; a coordinate outside all spans is a no-op
/// returning `false`.
pub fn unmerge_contained_cells<C>(sheet: &mut Worksheet, col: C, row: u32) -> bool
where
    C: Into<ColumnRef>,
{
    let col = match col.into().resolve() {
        Ok(col) => col,
        Err(_) => return false,
    };

    let merges = sheet.get_merge_cells_mut();
    let before = merges.len();

    merges.retain(|range| {
        CellRangeRef::parse(&range.get_range())
            .map(|span| !span.contains(col, row))
            .unwrap_or(true)
    });

    let removed = before - merges.len();
    if removed > 0 {
        let cell = CellRef::new(col, row);
        log::debug!("dissolved {removed} merge span(s) containing {cell}");
        true
    } else {
        false
    }
}
