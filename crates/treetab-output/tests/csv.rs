//! Tests for CSV serialization.

use treetab_output::{
    CsvOptions, CsvSerializer, Delimiter, Table, TextEncoding, csv_to_string, write_csv,
};

fn cells(row: &[&str]) -> Vec<String> {
    row.iter().map(|cell| (*cell).to_string()).collect()
}

fn sample_table() -> Table {
    Table {
        rows: vec![
            cells(&["number", "date", "extra"]),
            cells(&["1", "2020-01-01", ""]),
            cells(&["2", "2020-01-02", "x"]),
        ],
    }
}

#[test]
fn tab_delimited_output() {
    let text = csv_to_string(&sample_table(), Delimiter::Tab).unwrap();
    assert_eq!(
        text,
        "number\tdate\textra\n1\t2020-01-01\t\n2\t2020-01-02\tx\n"
    );
}

#[test]
fn comma_delimited_output() {
    let text = csv_to_string(&sample_table(), Delimiter::Comma).unwrap();
    assert_eq!(text, "number,date,extra\n1,2020-01-01,\n2,2020-01-02,x\n");
}

#[test]
fn cells_containing_the_delimiter_are_quoted() {
    let table = Table {
        rows: vec![cells(&["comment"]), cells(&["good, mostly"])],
    };
    let text = csv_to_string(&table, Delimiter::Comma).unwrap();
    assert_eq!(text, "comment\n\"good, mostly\"\n");
}

#[test]
fn utf8_bytes_through_a_writer() {
    let mut buffer = Vec::new();
    let options = CsvOptions {
        delimiter: Delimiter::Tab,
        encoding: TextEncoding::Utf8,
    };
    write_csv(&sample_table(), &mut buffer, &options).unwrap();
    assert_eq!(
        buffer,
        b"number\tdate\textra\n1\t2020-01-01\t\n2\t2020-01-02\tx\n"
    );
}

#[test]
fn windows_1252_reencodes_non_ascii() {
    let table = Table {
        rows: vec![cells(&["thickness"]), cells(&["350 µm"])],
    };
    let options = CsvOptions {
        delimiter: Delimiter::Tab,
        encoding: TextEncoding::Windows1252,
    };
    let mut buffer = Vec::new();
    write_csv(&table, &mut buffer, &options).unwrap();
    // U+00B5 MICRO SIGN is a single 0xB5 byte in Windows-1252.
    assert_eq!(buffer, b"thickness\n350 \xb5m\n");
}

#[test]
fn serializer_writes_row_by_row() {
    let options = CsvOptions::default();
    let mut serializer = CsvSerializer::new(Vec::new(), options);
    serializer.write_row(&cells(&["a", "b"])).unwrap();
    serializer.write_row(&cells(&["1", "2"])).unwrap();
    let buffer = serializer.finish().unwrap();
    assert_eq!(buffer, b"a\tb\n1\t2\n");
}
