//! Query construction.
//!
//! Accumulation (`boolean`) and rendering (`mongo`) are separate
//! layers: the accumulator is backend-agnostic, and only the renderer
//! knows the Mongo key vocabulary. A second backend would add a sibling
//! renderer over the same accumulator.

pub mod boolean;
pub mod mongo;

pub use boolean::{BooleanClauses, BooleanQuery};
pub use mongo::{MongoQueryBuilder, QueryDocument};
