//! Typica — reusable data-transfer schemas and a MongoDB-style
//! filter-to-query builder.
//!
//! ## Crate layout
//! - `core::schema`: request parameters, record metadata, response
//!   envelopes.
//! - `core::query`: the generic boolean accumulator and the Mongo
//!   renderer.
//! - `core::value` / `core::types`: condition values, timestamps,
//!   timezones.
//!
//! The `prelude` module mirrors the surface a request-handling service
//! uses: schemas in, query document out.
//!
//! ```
//! use typica::prelude::*;
//!
//! let query = MongoQueryBuilder::new()
//!     .apply_must(&[SearchFilter::gte("age", 30)])
//!     .render();
//! ```

pub use typica_core as core;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use typica_core::prelude::*;
}

///
/// TESTS
///
