//! Delimited text serialization of the export table.
//!
//! Rows are serialized one at a time through an in-memory record buffer,
//! transcoded, and handed to the underlying writer, so a large export never
//! has to be materialized as one string.

use std::io::Write;

use treetab_model::{Result, TreetabError};

use crate::table::Table;

/// Field delimiter. TAB is the default; it is what spreadsheet tools
/// ingest most reliably.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    #[default]
    Tab,
    Comma,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
        }
    }
}

/// Output text encoding. UTF-8 unless a spreadsheet tool on the receiving
/// end insists on a legacy codepage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Windows1252,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: Delimiter,
    pub encoding: TextEncoding,
}

/// Row-at-a-time CSV writer.
///
/// Each row is rendered into a small record buffer by the `csv` crate,
/// encoded in the target encoding, and written out; the buffer never holds
/// more than one record.
pub struct CsvSerializer<W: Write> {
    writer: W,
    options: CsvOptions,
}

impl<W: Write> CsvSerializer<W> {
    pub fn new(writer: W, options: CsvOptions) -> Self {
        Self { writer, options }
    }

    pub fn write_row(&mut self, row: &[String]) -> Result<()> {
        let record = encode_record(row, self.options.delimiter)?;
        match self.options.encoding {
            TextEncoding::Utf8 => self.writer.write_all(record.as_bytes())?,
            TextEncoding::Windows1252 => {
                let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(&record);
                self.writer.write_all(&bytes)?;
            }
        }
        Ok(())
    }

    pub fn write_rows<'a>(&mut self, rows: impl IntoIterator<Item = &'a [String]>) -> Result<()> {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn encode_record(row: &[String], delimiter: Delimiter) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .from_writer(Vec::new());
    writer
        .write_record(row)
        .map_err(|error| TreetabError::Message(error.to_string()))?;
    let buffer = writer
        .into_inner()
        .map_err(|error| TreetabError::Message(error.to_string()))?;
    String::from_utf8(buffer).map_err(|error| TreetabError::Message(error.to_string()))
}

/// Serialize a whole table to the given writer.
pub fn write_csv<W: Write>(table: &Table, writer: W, options: &CsvOptions) -> Result<()> {
    let mut serializer = CsvSerializer::new(writer, *options);
    serializer.write_rows(table.rows.iter().map(Vec::as_slice))?;
    serializer.finish()?;
    Ok(())
}

/// Serialize a table to an in-memory UTF-8 string. Intended for tests and
/// small previews; the encoding option is ignored.
pub fn csv_to_string(table: &Table, delimiter: Delimiter) -> Result<String> {
    let options = CsvOptions {
        delimiter,
        encoding: TextEncoding::Utf8,
    };
    let buffer = {
        let mut serializer = CsvSerializer::new(Vec::new(), options);
        serializer.write_rows(table.rows.iter().map(Vec::as_slice))?;
        serializer.finish()?
    };
    String::from_utf8(buffer).map_err(|error| TreetabError::Message(error.to_string()))
}
