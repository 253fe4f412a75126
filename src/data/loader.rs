use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, Float32Array, Float64Array, LargeStringArray, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use thiserror::Error;

use super::model::{columns, Measurement, WaveDataset};

// ---------------------------------------------------------------------------
// Schema errors
// ---------------------------------------------------------------------------

/// A table that does not carry the measurement schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("column '{column}' row {row}: expected a number, got {found}")]
    NotNumeric {
        column: &'static str,
        row: usize,
        found: DataType,
    },
    #[error("column '{column}' row {row}: expected text, got {found}")]
    NotText {
        column: &'static str,
        row: usize,
        found: DataType,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a measurement table from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – semicolon-delimited text with a header row (the reference
///                deployment format)
/// * `.parquet` – one scalar column per field
/// * `.json`    – records array `[{ "Hm0 SWAN": 1.2, ... }, ...]`
///
/// Any failure here is fatal to the caller: the dashboard cannot start
/// without its table.
pub fn load_file(path: &Path) -> Result<WaveDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<WaveDataset> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .context("opening CSV")?;
    read_csv(reader)
}

/// Parse a semicolon-delimited table from any reader. Header names are
/// checked up front so a missing column fails with its name rather than a
/// per-row deserialization error.
fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<WaveDataset> {
    let headers = reader.headers().context("reading CSV headers")?.clone();
    for col in columns::REQUIRED {
        if !headers.iter().any(|h| h == col) {
            return Err(SchemaError::MissingColumn(col).into());
        }
    }

    let mut measurements = Vec::new();
    for (row_no, result) in reader.deserialize::<Measurement>().enumerate() {
        let m = result.with_context(|| format!("CSV row {row_no}"))?;
        measurements.push(m);
    }
    Ok(WaveDataset::from_measurements(measurements))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (the default `df.to_json(orient='records')`):
/// a top-level array of objects keyed by the wire column names.
fn load_json(path: &Path) -> Result<WaveDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<WaveDataset> {
    let measurements: Vec<Measurement> =
        serde_json::from_str(text).context("parsing JSON records")?;
    Ok(WaveDataset::from_measurements(measurements))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one scalar column per field. Works with files
/// written by both Pandas (`df.to_parquet()`) and Polars
/// (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<WaveDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut measurements = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let column = |name: &'static str| -> Result<&Arc<dyn Array>> {
            let idx = schema
                .index_of(name)
                .map_err(|_| SchemaError::MissingColumn(name))?;
            Ok(batch.column(idx))
        };

        let wind_speed = column(columns::WIND_SPEED)?;
        let wind_dir = column(columns::WIND_DIR)?;
        let hm0 = column(columns::HM0)?;
        let wave_period = column(columns::WAVE_PERIOD)?;
        let wave_dir = column(columns::WAVE_DIR)?;
        let location = column(columns::LOCATION)?;
        let density_wind_speed = column(columns::DENSITY_WIND_SPEED)?;
        let density_wind_dir = column(columns::DENSITY_WIND_DIR)?;
        let density_wave_period = column(columns::DENSITY_WAVE_PERIOD)?;
        let density_wave_dir = column(columns::DENSITY_WAVE_DIR)?;

        for row in 0..batch.num_rows() {
            measurements.push(Measurement {
                wind_speed: f64_at(wind_speed, columns::WIND_SPEED, row)?,
                wind_dir: f64_at(wind_dir, columns::WIND_DIR, row)?,
                hm0: f64_at(hm0, columns::HM0, row)?,
                wave_period: f64_at(wave_period, columns::WAVE_PERIOD, row)?,
                wave_dir: f64_at(wave_dir, columns::WAVE_DIR, row)?,
                location: str_at(location, columns::LOCATION, row)?,
                density_wind_speed: f64_at(density_wind_speed, columns::DENSITY_WIND_SPEED, row)?,
                density_wind_dir: f64_at(density_wind_dir, columns::DENSITY_WIND_DIR, row)?,
                density_wave_period: f64_at(
                    density_wave_period,
                    columns::DENSITY_WAVE_PERIOD,
                    row,
                )?,
                density_wave_dir: f64_at(density_wave_dir, columns::DENSITY_WAVE_DIR, row)?,
            });
        }
    }

    Ok(WaveDataset::from_measurements(measurements))
}

// -- Arrow helpers --

/// Read a scalar float from an Arrow column at the given row.
fn f64_at(col: &Arc<dyn Array>, column: &'static str, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("column '{column}' row {row}: null value");
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            Ok(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            Ok(arr.value(row) as f64)
        }
        other => Err(SchemaError::NotNumeric {
            column,
            row,
            found: other.clone(),
        }
        .into()),
    }
}

/// Read a scalar string from an Arrow column at the given row.
fn str_at(col: &Arc<dyn Array>, column: &'static str, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("column '{column}' row {row}: null value");
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
            let arr = col
                .as_any()
                .downcast_ref::<LargeStringArray>()
                .context("expected LargeStringArray")?;
            Ok(arr.value(row).to_string())
        }
        other => Err(SchemaError::NotText {
            column,
            row,
            found: other.clone(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Wind speed SWAN;Wind direction SWAN;Hm0 SWAN;Tm10 SWAN;Wdir SWAN;location_name;density_Hm0_Uwind;density_Hm0_WindDir;density_Hm0_Tmm10;density_Hm0_WaveDir
8.2;210.0;1.4;4.9;195.0;Utsira;0.021;0.014;0.032;0.018
14.7;245.5;3.1;6.8;238.2;Ekofisk;0.009;0.011;0.007;0.012
";

    fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(text.as_bytes())
    }

    #[test]
    fn csv_rows_parse_into_measurements() {
        let ds = read_csv(csv_reader(SAMPLE_CSV)).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.measurements[0].hm0, 1.4);
        assert_eq!(ds.measurements[0].location, "Utsira");
        assert_eq!(ds.measurements[1].wind_speed, 14.7);
        assert_eq!(ds.measurements[1].density_wave_dir, 0.012);
        assert_eq!(ds.locations, vec!["Utsira", "Ekofisk"]);
    }

    #[test]
    fn csv_missing_column_names_the_column() {
        let truncated = "\
Wind speed SWAN;Wind direction SWAN;Tm10 SWAN;Wdir SWAN;location_name;density_Hm0_Uwind;density_Hm0_WindDir;density_Hm0_Tmm10;density_Hm0_WaveDir
8.2;210.0;4.9;195.0;Utsira;0.021;0.014;0.032;0.018
";
        let err = read_csv(csv_reader(truncated)).unwrap_err();
        assert!(err.to_string().contains("missing required column 'Hm0 SWAN'"));
    }

    #[test]
    fn csv_malformed_value_reports_the_row() {
        let bad = "\
Wind speed SWAN;Wind direction SWAN;Hm0 SWAN;Tm10 SWAN;Wdir SWAN;location_name;density_Hm0_Uwind;density_Hm0_WindDir;density_Hm0_Tmm10;density_Hm0_WaveDir
8.2;210.0;not-a-number;4.9;195.0;Utsira;0.021;0.014;0.032;0.018
";
        let err = read_csv(csv_reader(bad)).unwrap_err();
        assert!(err.to_string().contains("CSV row 0"));
    }

    #[test]
    fn json_records_parse_into_measurements() {
        let text = r#"[
            {
                "Wind speed SWAN": 8.2,
                "Wind direction SWAN": 210.0,
                "Hm0 SWAN": 1.4,
                "Tm10 SWAN": 4.9,
                "Wdir SWAN": 195.0,
                "location_name": "Utsira",
                "density_Hm0_Uwind": 0.021,
                "density_Hm0_WindDir": 0.014,
                "density_Hm0_Tmm10": 0.032,
                "density_Hm0_WaveDir": 0.018
            }
        ]"#;
        let ds = parse_json(text).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.measurements[0].wave_period, 4.9);
        assert_eq!(ds.measurements[0].location, "Utsira");
    }

    #[test]
    fn json_missing_field_is_rejected() {
        let text = r#"[{ "Hm0 SWAN": 1.4, "location_name": "Utsira" }]"#;
        assert!(parse_json(text).is_err());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("waves.xlsx")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }
}
