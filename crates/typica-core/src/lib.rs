//! Core runtime for Typica: schema types, condition values, the boolean
//! accumulator, and the Mongo-style query renderer exported via the
//! `prelude`.
#![warn(unreachable_pub)]

pub mod error;
pub mod obs;
pub mod query;
pub mod schema;
pub mod traits;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Observability and renderer internals stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        error::SchemaError,
        query::{BooleanQuery, MongoQueryBuilder, QueryDocument},
        schema::{
            BaseFilter, BaseMeta, BaseResponse, DataStatus, DynamicFilter, FilterOption,
            MultiFilter, Operator, Order, OrderSpec, PageSpec, PaginatedResponse, Pagination,
            SearchFilter, TimeBound, Timeframe, TimeframeSpec, ValidResponse,
        },
        traits::EnumList,
        types::{Timestamp, timezone},
        value::SearchValue,
    };
}
