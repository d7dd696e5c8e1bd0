/// Data layer: core types, loading, filtering, sampling and saving.
///
/// Architecture:
/// ```text
///        .csv
///          │
///          ▼
///   ┌──────────┐
///   │  loader  │  parse file → Table
///   └──────────┘
///          │
///          ▼
///   ┌──────────┐
///   │  filter  │  coerce year column, keep [start, end]
///   └──────────┘
///          │
///          ▼
///   ┌──────────┐
///   │  sample  │  seeded draw without replacement
///   └──────────┘
///          │
///          ▼
///   ┌──────────┐
///   │  writer  │  Table → .csv (no index column)
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod sample;
pub mod writer;
