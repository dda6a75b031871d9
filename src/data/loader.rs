use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray, StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{
    COL_BOOSTER_CATEGORY, COL_CLASS, COL_LAUNCH_SITE, COL_PAYLOAD_MASS, LaunchDataset,
    LaunchRecord, Outcome,
};
use crate::error::DashError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, the launch columns are located by name
/// * `.json`    – `[{ "Launch Site": "...", "Payload Mass (kg)": 0.0, ... }, ...]`
/// * `.parquet` – flat columns with the same names
///
/// Columns other than the four the dashboard needs are ignored.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => return Err(DashError::UnsupportedFormat(other.to_string()).into()),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    let dataset = LaunchDataset::from_records(records)?;
    log::info!(
        "Loaded {} launches from {} ({} sites, payload {}..{} kg)",
        dataset.len(),
        path.display(),
        dataset.sites().len(),
        dataset.bounds().min,
        dataset.bounds().max
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let position = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| DashError::MissingColumn(name.to_string()))
    };
    let site_idx = position(COL_LAUNCH_SITE)?;
    let payload_idx = position(COL_PAYLOAD_MASS)?;
    let class_idx = position(COL_CLASS)?;
    let booster_idx = position(COL_BOOSTER_CATEGORY)?;

    let mut records = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row_no = idx + 1;
        let row = result.with_context(|| format!("CSV data row {row_no}"))?;
        let cell = |idx: usize| row.get(idx).unwrap_or("").trim();

        let payload = parse_payload(cell(payload_idx), row_no)?;
        let outcome = Outcome::parse_class(cell(class_idx), row_no)?;

        records.push(LaunchRecord::new(
            row_no,
            cell(site_idx),
            payload,
            outcome,
            cell(booster_idx),
        )?);
    }

    Ok(records)
}

fn parse_payload(raw: &str, row: usize) -> Result<f64, DashError> {
    raw.parse::<f64>().map_err(|_| DashError::InvalidPayload {
        row,
        value: raw.to_string(),
    })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "class": 0,
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
///
/// Numbers may also be given as numeric strings. A `null` cell is an empty
/// field; an absent key is a missing column.
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, rec) in rows.iter().enumerate() {
        let row_no = i + 1;
        let obj = rec
            .as_object()
            .with_context(|| format!("Data row {row_no} is not a JSON object"))?;

        let site = json_text(obj, COL_LAUNCH_SITE, row_no)?;
        let booster = json_text(obj, COL_BOOSTER_CATEGORY, row_no)?;
        let payload = json_payload(obj, row_no)?;
        let outcome = json_outcome(obj, row_no)?;

        records.push(LaunchRecord::new(row_no, &site, payload, outcome, &booster)?);
    }

    Ok(records)
}

type JsonObject = serde_json::Map<String, JsonValue>;

/// Look up a cell, separating an absent key from a `null` value.
fn json_cell<'a>(
    obj: &'a JsonObject,
    name: &str,
    row: usize,
) -> Result<&'a JsonValue, DashError> {
    match obj.get(name) {
        None => Err(DashError::MissingColumn(name.to_string())),
        Some(JsonValue::Null) => Err(DashError::EmptyField {
            row,
            column: name.to_string(),
        }),
        Some(v) => Ok(v),
    }
}

fn json_text(obj: &JsonObject, name: &str, row: usize) -> Result<String, DashError> {
    Ok(match json_cell(obj, name, row)? {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn json_payload(obj: &JsonObject, row: usize) -> Result<f64, DashError> {
    match json_cell(obj, COL_PAYLOAD_MASS, row)? {
        JsonValue::Number(n) => n.as_f64().ok_or_else(|| DashError::InvalidPayload {
            row,
            value: n.to_string(),
        }),
        JsonValue::String(s) => parse_payload(s.trim(), row),
        other => Err(DashError::InvalidPayload {
            row,
            value: other.to_string(),
        }),
    }
}

fn json_outcome(obj: &JsonObject, row: usize) -> Result<Outcome, DashError> {
    match json_cell(obj, COL_CLASS, row)? {
        JsonValue::Number(n) => n
            .as_f64()
            .and_then(Outcome::from_f64)
            .ok_or_else(|| DashError::InvalidOutcome {
                row,
                value: n.to_string(),
            }),
        JsonValue::String(s) => Outcome::parse_class(s, row),
        other => Err(DashError::InvalidOutcome {
            row,
            value: other.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file holding the launch table.
///
/// Expected schema:
/// - `Launch Site`, `Booster Version Category`: Utf8 or LargeUtf8
/// - `Payload Mass (kg)`, `class`: Int32, Int64, Float32 or Float64
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let column = |name: &str| {
            schema
                .index_of(name)
                .map(|i| batch.column(i))
                .map_err(|_| DashError::MissingColumn(name.to_string()))
        };
        let site_col = column(COL_LAUNCH_SITE)?;
        let payload_col = column(COL_PAYLOAD_MASS)?;
        let class_col = column(COL_CLASS)?;
        let booster_col = column(COL_BOOSTER_CATEGORY)?;

        for row in 0..batch.num_rows() {
            // Data rows are numbered from 1 and continue across batches.
            let row_no = records.len() + 1;

            for (name, col) in [
                (COL_LAUNCH_SITE, site_col),
                (COL_PAYLOAD_MASS, payload_col),
                (COL_CLASS, class_col),
                (COL_BOOSTER_CATEGORY, booster_col),
            ] {
                if col.is_null(row) {
                    return Err(DashError::EmptyField {
                        row: row_no,
                        column: name.to_string(),
                    }
                    .into());
                }
            }

            let site = extract_string(site_col, row)
                .with_context(|| format!("Data row {row_no}: failed to read '{COL_LAUNCH_SITE}'"))?;
            let booster = extract_string(booster_col, row).with_context(|| {
                format!("Data row {row_no}: failed to read '{COL_BOOSTER_CATEGORY}'")
            })?;
            let payload = extract_f64(payload_col, row).with_context(|| {
                format!("Data row {row_no}: failed to read '{COL_PAYLOAD_MASS}'")
            })?;
            let class = extract_f64(class_col, row)
                .with_context(|| format!("Data row {row_no}: failed to read '{COL_CLASS}'"))?;
            let outcome = Outcome::from_f64(class).ok_or(DashError::InvalidOutcome {
                row: row_no,
                value: class.to_string(),
            })?;

            records.push(LaunchRecord::new(row_no, &site, payload, outcome, &booster)?);
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<LargeStringArray>()
                .context("expected LargeStringArray")?;
            Ok(arr.value(row).to_string())
        }
        other => bail!("Expected Utf8 or LargeUtf8 column, got {other:?}"),
    }
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    let any = col.as_any();
    let value = match col.data_type() {
        DataType::Int32 => any
            .downcast_ref::<Int32Array>()
            .map(|a| a.value(row) as f64),
        DataType::Int64 => any
            .downcast_ref::<Int64Array>()
            .map(|a| a.value(row) as f64),
        DataType::Float32 => any
            .downcast_ref::<Float32Array>()
            .map(|a| a.value(row) as f64),
        DataType::Float64 => any.downcast_ref::<Float64Array>().map(|a| a.value(row)),
        other => bail!("Expected numeric column, got {other:?}"),
    };
    value.context("column array does not match its declared type")
}
