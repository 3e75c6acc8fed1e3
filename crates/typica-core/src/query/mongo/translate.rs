//! Condition-to-fragment translation.
//!
//! Pure and stateless: one `SearchFilter` in, at most one fragment out.
//! A condition without a target field yields nothing.

use crate::{schema::enums::Operator, schema::filter::SearchFilter, value::SearchValue};
use serde_json::{Map, Value as Json};

/// `{field: {symbol: value}}`
pub(crate) fn operator_fragment(field: &str, symbol: &str, value: Json) -> Json {
    let mut inner = Map::new();
    inner.insert(symbol.to_string(), value);

    let mut outer = Map::new();
    outer.insert(field.to_string(), Json::Object(inner));

    Json::Object(outer)
}

/// `{field: value}` — implicit equality, no wrapping operator.
fn equality_fragment(field: &str, value: Json) -> Json {
    let mut outer = Map::new();
    outer.insert(field.to_string(), value);

    Json::Object(outer)
}

/// `{field: {"$regex": value, "$options": "i"}}` — matches are always
/// case-insensitive.
fn regex_fragment(field: &str, value: Json) -> Json {
    let mut inner = Map::new();
    inner.insert("$regex".to_string(), value);
    inner.insert("$options".to_string(), Json::String("i".to_string()));

    let mut outer = Map::new();
    outer.insert(field.to_string(), Json::Object(inner));

    Json::Object(outer)
}

/// Translate one condition into its fragment. An absent operator means
/// equality; an absent value compares against null.
#[must_use]
pub fn fragment(filter: &SearchFilter) -> Option<Json> {
    let field = filter.field.as_deref()?;
    let value = filter
        .value
        .as_ref()
        .map_or(Json::Null, SearchValue::to_json);

    let fragment = match filter.op {
        Some(Operator::Unequal) => operator_fragment(field, "$ne", value),
        Some(Operator::Include) => operator_fragment(field, "$in", value),
        Some(Operator::Exclude) => operator_fragment(field, "$nin", value),
        Some(Operator::Gt) => operator_fragment(field, "$gt", value),
        Some(Operator::Gte) => operator_fragment(field, "$gte", value),
        Some(Operator::Lt) => operator_fragment(field, "$lt", value),
        Some(Operator::Lte) => operator_fragment(field, "$lte", value),
        // `$exist` (no trailing `s`) is the downstream wire contract.
        Some(Operator::Exist) => operator_fragment(field, "$exist", Json::from(1)),
        Some(Operator::NotExist) => operator_fragment(field, "$exist", Json::from(0)),
        Some(Operator::Regex) => regex_fragment(field, value),
        None => equality_fragment(field, value),
    };

    Some(fragment)
}
