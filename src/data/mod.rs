/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  data.json / .csv / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, source order
///   └──────────┘
///        │
///        ├── periods()  → table column / x-tick labels
///        └── maxima()   → table column / y values
/// ```
pub mod loader;
pub mod model;
