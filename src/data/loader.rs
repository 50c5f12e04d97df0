use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Dataset, Record};

/// Field names as they appear in the source files.
pub const PERIOD_FIELD: &str = "column1";
pub const MAXIMUM_FIELD: &str = "column2";

// ---------------------------------------------------------------------------
// Structured failure classes
// ---------------------------------------------------------------------------

/// The ways a data file can be rejected. Any one of these aborts the whole
/// load; there is no partial dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("row {row}: missing field '{field}'")]
    MissingField { row: usize, field: &'static str },
    #[error("row {row}: field '{field}' is not a {expected}")]
    InvalidField {
        row: usize,
        field: &'static str,
        expected: &'static str,
    },
    #[error("expected a top-level array of records")]
    NotAnArray,
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a discharge dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`    – `[{ "column1": "2020", "column2": 5 }, ...]`
/// * `.csv`     – header row with `column1` and `column2` columns
/// * `.parquet` – Utf8 `column1` column, numeric `column2` column
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().ok_or(LoadError::NotAnArray)?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, rec) in rows.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let period = match obj.get(PERIOD_FIELD) {
            None => {
                return Err(LoadError::MissingField {
                    row: i,
                    field: PERIOD_FIELD,
                }
                .into());
            }
            Some(v) => json_to_label(v),
        };

        let maximum = match obj.get(MAXIMUM_FIELD) {
            None => {
                return Err(LoadError::MissingField {
                    row: i,
                    field: MAXIMUM_FIELD,
                }
                .into());
            }
            Some(v) => v.as_f64().ok_or(LoadError::InvalidField {
                row: i,
                field: MAXIMUM_FIELD,
                expected: "number",
            })?,
        };

        records.push(Record { period, maximum });
    }

    Ok(Dataset::from_records(records))
}

/// Period labels are usually strings but the source format does not forbid
/// bare numbers (`{"column1": 2020}`), so render whatever is there.
fn json_to_label(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let period_idx = headers
        .iter()
        .position(|h| h == PERIOD_FIELD)
        .with_context(|| format!("CSV missing '{PERIOD_FIELD}' column"))?;
    let maximum_idx = headers
        .iter()
        .position(|h| h == MAXIMUM_FIELD)
        .with_context(|| format!("CSV missing '{MAXIMUM_FIELD}' column"))?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let period = row
            .get(period_idx)
            .ok_or(LoadError::MissingField {
                row: row_no,
                field: PERIOD_FIELD,
            })?
            .to_string();

        let maximum = row
            .get(maximum_idx)
            .ok_or(LoadError::MissingField {
                row: row_no,
                field: MAXIMUM_FIELD,
            })?
            .trim()
            .parse::<f64>()
            .map_err(|_| LoadError::InvalidField {
                row: row_no,
                field: MAXIMUM_FIELD,
                expected: "number",
            })?;

        records.push(Record { period, maximum });
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Expected schema:
/// - `column1`: Utf8 / LargeUtf8 – period labels
/// - `column2`: Float64, Float32, Int64 or Int32 – maximum flow values
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let period_idx = schema
            .index_of(PERIOD_FIELD)
            .map_err(|_| anyhow::anyhow!("Parquet file missing '{PERIOD_FIELD}' column"))?;
        let maximum_idx = schema
            .index_of(MAXIMUM_FIELD)
            .map_err(|_| anyhow::anyhow!("Parquet file missing '{MAXIMUM_FIELD}' column"))?;

        let period_col = batch.column(period_idx);
        let maximum_col = batch.column(maximum_idx);

        for row in 0..batch.num_rows() {
            let period = extract_label(period_col, row)
                .with_context(|| format!("Row {row}: failed to read '{PERIOD_FIELD}'"))?;
            let maximum = extract_f64(maximum_col, row)
                .with_context(|| format!("Row {row}: failed to read '{MAXIMUM_FIELD}'"))?;
            records.push(Record { period, maximum });
        }
    }

    Ok(Dataset::from_records(records))
}

// -- Parquet / Arrow helpers --

fn extract_label(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null period label");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            use arrow::array::AsArray;
            Ok(col.as_string::<i64>().value(row).to_string())
        }
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null maximum value");
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            Ok(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        other => bail!("Expected numeric column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_json_records_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "data.json",
            r#"[{"column1":"2020","column2":5},{"column1":"2021","column2":9}]"#,
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.periods(), vec!["2020", "2021"]);
        assert_eq!(ds.maxima(), vec![5.0, 9.0]);
    }

    #[test]
    fn empty_json_array_is_a_valid_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "data.json", "[]");

        let ds = load_file(&path).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn missing_maximum_field_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "data.json",
            r#"[{"column1":"2020","column2":5},{"column1":"2021"}]"#,
        );

        let err = load_file(&path).unwrap_err();
        match err.downcast_ref::<LoadError>() {
            Some(LoadError::MissingField { row: 1, field }) => {
                assert_eq!(*field, MAXIMUM_FIELD);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_maximum_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "data.json", r#"[{"column1":"2020","column2":"high"}]"#);

        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::InvalidField { row: 0, .. })
        ));
    }

    #[test]
    fn top_level_object_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "data.json", r#"{"column1":"2020","column2":5}"#);

        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::NotAnArray)
        ));
    }

    #[test]
    fn missing_file_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_file(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "data.xml", "<data/>");

        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::UnsupportedExtension(ext)) if ext == "xml"
        ));
    }

    #[test]
    fn loads_csv_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "data.csv", "column1,column2\n2020,5\n2021,9.5\n");

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.periods(), vec!["2020", "2021"]);
        assert_eq!(ds.maxima(), vec![5.0, 9.5]);
    }

    #[test]
    fn csv_without_maximum_column_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "data.csv", "column1,other\n2020,5\n");

        assert!(load_file(&path).is_err());
    }

    #[test]
    fn loads_parquet_records() {
        use arrow::array::{Float64Array, StringArray};
        use arrow::datatypes::{DataType, Field, Schema};
        use arrow::record_batch::RecordBatch;
        use parquet::arrow::ArrowWriter;

        let schema = Arc::new(Schema::new(vec![
            Field::new(PERIOD_FIELD, DataType::Utf8, false),
            Field::new(MAXIMUM_FIELD, DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["2020", "2021"])),
                Arc::new(Float64Array::from(vec![5.0, 9.0])),
            ],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.parquet");
        let file = fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.periods(), vec!["2020", "2021"]);
        assert_eq!(ds.maxima(), vec![5.0, 9.0]);
    }
}
