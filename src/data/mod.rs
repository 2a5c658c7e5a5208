/// Data layer: sample types and loading.
///
/// Architecture:
/// ```text
///   datos.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  line → parse_record → Sample (or skip)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ SampleLog │  value / state_a / state_b / value_ref
///   └───────────┘
/// ```

pub mod loader;
pub mod model;
