//! JSON sample tables: an array of `{"pk", "latitude", "longitude"}` objects.
use std::io::{Read, Write};

use crate::error::Result;
use crate::sample::{InterpolatedTable, Sample};

pub fn read_samples<R: Read>(reader: R) -> Result<Vec<Sample>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write `table` as a pretty-printed JSON array, in grid order.
pub fn write_table<W: Write>(writer: W, table: &InterpolatedTable) -> Result<()> {
    serde_json::to_writer_pretty(writer, table)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{read_samples, write_table};
    use crate::sample::{InterpolatedTable, Sample};

    #[test]
    fn test_write_array_of_objects() {
        let table = InterpolatedTable::from_samples(vec![
            Sample::new(0.0, 48.92583, 4.354597),
            Sample::new(0.1, 48.9255, 4.3543),
        ]);
        let mut buf = Vec::new();
        write_table(&mut buf, &table).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["pk"], 0.0);
        assert_eq!(rows[1]["latitude"], 48.9255);
        assert_eq!(rows[1]["longitude"], 4.3543);
        assert_eq!(rows[0].as_object().unwrap().len(), 3);

        // Indented like the reference output
        assert!(String::from_utf8(buf).unwrap().contains("\n  {\n    \"pk\""));
    }

    #[test]
    fn test_read_samples() {
        let data = r#"[{"pk": 2, "latitude": 48.9, "longitude": 4.35}]"#;
        assert_eq!(
            read_samples(data.as_bytes()).unwrap(),
            vec![Sample::new(2.0, 48.9, 4.35)]
        );
        assert!(read_samples(r#"{"pk": 2}"#.as_bytes()).is_err());
    }
}
