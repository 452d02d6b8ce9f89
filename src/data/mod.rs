/// Data layer: log parsing and the types it produces.
///
/// Architecture:
/// ```text
///   benchmark .log
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read file → text
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  comments, headers, rows → LogDocument
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ LogDocument  │  Vec<Section> → Vec<PlottedSeries>
///   └─────────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
