//! End-to-end tests against a fixture workbook (build -> save -> read -> verify)
//!
//! The fixture mirrors the golden workbook the helper contract is specified
//! against: a handful of labeled cells, one padded string, one
//! number-formatted value, a defined name ("Named_Cell"), a merge span
//! (B8:C9) and a "Last" marker at the bottom-right of the used region.

use pretty_assertions::assert_eq;
use sheet_access::{
    cell_value, cell_value_by_name, highest_row_and_column, in_merge_range,
    merge_range_containing, remove_named_ranges_by_sheet, set_cell_value, unmerge_contained_cells,
};
use umya_spreadsheet::{Spreadsheet, Worksheet};

fn define_name(book: &mut Spreadsheet, name: &str, address: &str) {
    // DefinedName::set_name is crate-private; build the name through the
    // public Worksheet API and move it to the workbook-level list
    let mut scratch = Worksheet::default();
    scratch.add_defined_name(name, address).unwrap();
    let defined = scratch.get_defined_names_mut().pop().unwrap();
    book.get_defined_names_mut().push(defined);
}

/// Build the fixture workbook: sheet "Sheet1" populated through D12, plus
/// an empty second sheet "Data" for scoping tests
fn fixture() -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file();
    book.new_sheet("Data").unwrap();

    let sheet = book.get_sheet_mut(&0).unwrap();
    sheet.get_cell_mut("B2").set_value("A");
    sheet.get_cell_mut("B3").set_value("B");
    sheet.get_cell_mut("B4").set_value("C");
    sheet.get_cell_mut("D2").set_value("  Hello !! World !!  ");
    sheet.get_cell_mut("D5").set_value_number(10000);
    sheet
        .get_cell_mut("D5")
        .get_style_mut()
        .get_number_format_mut()
        .set_format_code("#,##0");
    sheet.get_cell_mut("D7").set_value("Named Cell");
    sheet.add_merge_cells("B8:C9");
    sheet.get_cell_mut("D12").set_value("Last");

    define_name(&mut book, "Named_Cell", "Sheet1!$D$7");
    define_name(&mut book, "Data_Cell", "Data!$A$1");
    book
}

#[test]
fn test_cell_values() {
    let book = fixture();
    let sheet = book.get_sheet(&0).unwrap();

    assert_eq!(cell_value(sheet, 2, 2).as_deref(), Some("A"));
    assert_eq!(cell_value(sheet, 2, 3).as_deref(), Some("B"));
    assert_eq!(cell_value(sheet, 2, 4).as_deref(), Some("C"));

    // Surrounding whitespace trimmed, interior preserved
    assert_eq!(cell_value(sheet, 4, 2).as_deref(), Some("Hello !! World !!"));

    // Number format applied
    assert_eq!(cell_value(sheet, 4, 5).as_deref(), Some("10,000"));

    // Letters and indices are interchangeable
    assert_eq!(cell_value(sheet, "D", 7).as_deref(), Some("Named Cell"));
}

#[test]
fn test_cell_value_defaults_on_miss() {
    let book = fixture();
    let sheet = book.get_sheet(&0).unwrap();

    assert_eq!(cell_value(sheet, 10, 10), None);
    assert_eq!(
        cell_value(sheet, 10, 10).unwrap_or_else(|| "missing".to_string()),
        "missing"
    );
    // A populated cell is never replaced by the default
    assert_eq!(
        cell_value(sheet, 2, 2).unwrap_or_else(|| "missing".to_string()),
        "A"
    );
}

#[test]
fn test_cell_value_by_name() {
    let book = fixture();
    let sheet = book.get_sheet(&0).unwrap();

    assert_eq!(
        cell_value_by_name(&book, sheet, "Named_Cell").unwrap().as_deref(),
        Some("Named Cell")
    );
    assert_eq!(cell_value_by_name(&book, sheet, "No_Such_Name").unwrap(), None);
    // Bound to the other sheet: not resolvable here
    assert_eq!(cell_value_by_name(&book, sheet, "Data_Cell").unwrap(), None);
}

#[test]
fn test_highest_row_and_column() {
    let book = fixture();
    let sheet = book.get_sheet(&0).unwrap();

    assert_eq!(highest_row_and_column(sheet), (4, 12));
    // The corner cell itself is retrievable
    assert_eq!(cell_value(sheet, 4, 12).as_deref(), Some("Last"));
}

#[test]
fn test_in_merge_range() {
    let book = fixture();
    let sheet = book.get_sheet(&0).unwrap();

    assert!(in_merge_range(sheet, 2, 8));
    assert!(in_merge_range(sheet, 3, 9));

    // Neighbors sharing a row or column with the span
    assert!(!in_merge_range(sheet, 1, 8));
    assert!(!in_merge_range(sheet, 1, 9));
    assert!(!in_merge_range(sheet, 4, 8));
    assert!(!in_merge_range(sheet, 2, 10));

    assert_eq!(
        merge_range_containing(sheet, 2, 8).unwrap().to_a1_string(),
        "B8:C9"
    );
}

#[test]
fn test_set_cell_value() {
    let mut book = fixture();
    let sheet = book.get_sheet_mut(&0).unwrap();

    set_cell_value(sheet, 2, 2, "AA").unwrap();
    assert_eq!(cell_value(sheet, 2, 2).as_deref(), Some("AA"));

    // Writing to a nonexistent cell fails and creates nothing
    assert!(set_cell_value(sheet, 6, 6, "x").is_err());
    assert_eq!(cell_value(sheet, 6, 6), None);
}

#[test]
fn test_unmerge_contained_cells() {
    let mut book = fixture();
    let sheet = book.get_sheet_mut(&0).unwrap();

    assert!(unmerge_contained_cells(sheet, 2, 9));
    for row in 8..=9u32 {
        for col in 2..=3u32 {
            assert!(!in_merge_range(sheet, col, row));
        }
    }

    // Second call on the same span: nothing left to dissolve
    assert!(!unmerge_contained_cells(sheet, 2, 9));
}

#[test]
fn test_remove_named_ranges_by_sheet() {
    let mut book = fixture();

    assert_eq!(remove_named_ranges_by_sheet(&mut book, "Sheet1"), 1);
    assert_eq!(remove_named_ranges_by_sheet(&mut book, "Sheet1"), 0);

    // The name bound to the other sheet survived both calls
    let sheet = book.get_sheet_by_name("Data").unwrap();
    let resolved = cell_value_by_name(&book, sheet, "Data_Cell").unwrap();
    // Data!A1 is unpopulated, but the name still resolves against its sheet
    assert_eq!(resolved, None);
    assert_eq!(book.get_defined_names().len(), 1);
}

/// The contract holds across a real xlsx write -> read round trip
#[test]
fn test_xlsx_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.xlsx");

    let book = fixture();
    umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();

    let book2 = umya_spreadsheet::reader::xlsx::read(&path).unwrap();
    let sheet = book2.get_sheet(&0).unwrap();

    assert_eq!(cell_value(sheet, 2, 2).as_deref(), Some("A"));
    assert_eq!(cell_value(sheet, 4, 2).as_deref(), Some("Hello !! World !!"));
    assert_eq!(cell_value(sheet, 4, 5).as_deref(), Some("10,000"));
    assert_eq!(cell_value(sheet, 10, 10), None);

    assert_eq!(
        cell_value_by_name(&book2, sheet, "Named_Cell").unwrap().as_deref(),
        Some("Named Cell")
    );

    assert_eq!(highest_row_and_column(sheet), (4, 12));
    assert_eq!(cell_value(sheet, 4, 12).as_deref(), Some("Last"));

    assert!(in_merge_range(sheet, 2, 8));
    assert!(in_merge_range(sheet, 3, 9));
    assert!(!in_merge_range(sheet, 1, 8));
}
