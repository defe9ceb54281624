//! Data layer: core types, loading, and the intercept helper.
//!
//! Architecture:
//! ```text
//!  x1,x2,...,y  (.csv)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  header → feature/label columns → f64 rows
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ intercept │  optional column of ones in front
//!   └───────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Dataset  │  Array2 features, Array1 labels
//!   └──────────┘
//! ```

pub mod intercept;
pub mod loader;
pub mod model;
