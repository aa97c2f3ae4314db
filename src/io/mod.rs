//! File input and output for sample tables.
//!
//! Inputs are either delimited text with a `pk,latitude,longitude` header
//! or a JSON array of samples. Outputs are JSON arrays.
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::sample::{InterpolatedTable, Sample, SampleTable};

pub mod delimited;
pub mod json;

/// Path that stands for standard output.
pub const STDOUT: &str = "-";

/// Sample file formats, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Delimited,
    Json,
}

impl Format {
    /// `.json` is JSON, `.csv`, `.tsv` and `.txt` are delimited text.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("csv") | Some("tsv") | Some("txt") => Ok(Format::Delimited),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Convert a field delimiter to the single byte the CSV reader expects.
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            Error::Config(format!(
                "delimiter must be a single ASCII character, got {delimiter:?}"
            ))
        })
}

/// Read and validate a sample table from `path`.
///
/// `delimiter` is only used for delimited text; `.tsv` files default to tabs
/// when the delimiter is left at `,`.
pub fn read_samples(path: &Path, delimiter: u8) -> Result<SampleTable> {
    let samples: Vec<Sample> = match Format::from_path(path)? {
        Format::Json => json::read_samples(BufReader::new(File::open(path)?))?,
        Format::Delimited => {
            let is_tsv = path
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case("tsv"));
            let delimiter = if is_tsv && delimiter == b',' {
                b'\t'
            } else {
                delimiter
            };
            delimited::read_samples(File::open(path)?, delimiter)?
        }
    };
    log::debug!("Read {} samples from {}", samples.len(), path.display());

    Ok(SampleTable::new(samples)?)
}

/// Write `table` as a pretty-printed JSON array to `path`, or to standard
/// output when `path` is `-`. Missing parent directories are created.
pub fn write_table(path: &Path, table: &InterpolatedTable) -> Result<()> {
    if path.as_os_str() == STDOUT {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        json::write_table(&mut out, table)?;
        writeln!(out)?;
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    json::write_table(&mut out, table)?;
    out.flush()?;
    log::info!("Wrote {} samples to {}", table.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::{read_samples, write_table, Format};
    use crate::error::Error;
    use crate::sample::{InterpolatedTable, Sample};

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a/b.CSV")).unwrap(), Format::Delimited);
        assert_eq!(Format::from_path(Path::new("b.tsv")).unwrap(), Format::Delimited);
        assert_eq!(Format::from_path(Path::new("b.json")).unwrap(), Format::Json);
        assert!(matches!(
            Format::from_path(Path::new("b.xlsx")),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = assert_fs::TempDir::new().unwrap();
        let input = dir.path().join("route.tsv");
        std::fs::write(
            &input,
            "pk\tlatitude\tlongitude\n0\t48.92583\t4.354597\n1\t48.92286557\t4.35203494\n",
        )
        .unwrap();

        let table = read_samples(&input, b',').unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.latitude()[1], 48.92286557);

        let output = dir.path().join("nested/out/coords.json");
        let out = InterpolatedTable::from_samples(table.to_vec());
        write_table(&output, &out).unwrap();

        let back: Vec<Sample> =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(back, table.to_vec());
    }

    #[test]
    fn test_read_rejects_unsorted_file() {
        let dir = assert_fs::TempDir::new().unwrap();
        let input = dir.path().join("route.csv");
        std::fs::write(&input, "pk,latitude,longitude\n1,0,0\n0,1,1\n").unwrap();

        assert!(matches!(read_samples(&input, b','), Err(Error::Interp(_))));
    }
}
