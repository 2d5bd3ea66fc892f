/// Data layer: core types, loading, normalization, filtering and aggregates.
///
/// Architecture:
/// ```text
///  nepal-trek-data.csv
///        │
///        ▼
///   ┌──────────┐   ┌────────────┐
///   │  loader   │──▶│ normalize  │  messy text → numbers / canonical labels
///   └──────────┘   └────────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ TrekDataset  │  Vec<TrekRecord>, filter domains, cost bounds
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  grade ∧ accommodation ∧ cost window → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  KPIs, counts, box statistics
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod summary;
