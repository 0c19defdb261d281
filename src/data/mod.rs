/// Data layer: core types, loading, filtering and the derived views.
///
/// Architecture:
/// ```text
///  bundled penguins.csv  /  --data <CSV>
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  DataSource → PenguinDataset (once, at startup)
///   └──────────┘
///        │  Arc<PenguinDataset>
///        ▼
///   ┌──────────┐
///   │  filter   │  species ∈ selected ∧ body_mass_g < threshold → FilteredView
///   └──────────┘
///        │
///        ├──► summary   count / mean bill length / mean bill depth
///        └──► grid      per-column filters and sort for the data table
/// ```

pub mod filter;
pub mod grid;
pub mod loader;
pub mod model;
pub mod summary;
