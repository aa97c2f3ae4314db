//! Delimited text sample tables, one `pk,latitude,longitude` row per sample.
use std::io::Read;

use csv::{ReaderBuilder, Trim};

use crate::error::Result;
use crate::sample::Sample;

/// Read samples from delimited text with a header row.
///
/// Columns are matched by header name (`pk`, `latitude`/`lat`,
/// `longitude`/`lon`/`lng`) and extra columns are ignored. Rows are
/// returned in file order; ordering is validated by the caller.
pub fn read_samples<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Sample>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .from_reader(reader);

    let mut output = Vec::new();
    for result in reader.deserialize() {
        let record: Sample = result?;
        output.push(record);
    }

    Ok(output)
}
