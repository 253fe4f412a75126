/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .parquet / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → WaveDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ WaveDataset │  Vec<Measurement>, location catalog, column maxima
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  wave-height range + location → row mask
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
