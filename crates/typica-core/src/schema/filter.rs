use crate::{
    error::SchemaError,
    query::mongo::{MongoQueryBuilder, QueryDocument},
    schema::enums::{FilterOption, Operator, Order},
    types::{Timestamp, timezone},
    value::SearchValue,
};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as Json};
use std::collections::BTreeMap;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_SIZE: u32 = 10;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

///
/// SearchFilter
///
/// One declarative search condition. A filter without a target field is
/// inert: translation drops it without error.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SearchFilter {
    #[serde(default)]
    pub field: Option<String>,

    #[serde(default)]
    pub value: Option<SearchValue>,

    #[serde(default, rename = "opt")]
    pub op: Option<Operator>,
}

impl SearchFilter {
    fn with_op(field: impl Into<String>, value: Option<SearchValue>, op: Option<Operator>) -> Self {
        Self {
            field: Some(field.into()),
            value,
            op,
        }
    }

    /// Implicit-equality condition.
    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<SearchValue>) -> Self {
        Self::with_op(field, Some(value.into()), None)
    }

    #[must_use]
    pub fn ne(field: impl Into<String>, value: impl Into<SearchValue>) -> Self {
        Self::with_op(field, Some(value.into()), Some(Operator::Unequal))
    }

    #[must_use]
    pub fn gt(field: impl Into<String>, value: impl Into<SearchValue>) -> Self {
        Self::with_op(field, Some(value.into()), Some(Operator::Gt))
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: impl Into<SearchValue>) -> Self {
        Self::with_op(field, Some(value.into()), Some(Operator::Gte))
    }

    #[must_use]
    pub fn lt(field: impl Into<String>, value: impl Into<SearchValue>) -> Self {
        Self::with_op(field, Some(value.into()), Some(Operator::Lt))
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: impl Into<SearchValue>) -> Self {
        Self::with_op(field, Some(value.into()), Some(Operator::Lte))
    }

    /// Membership condition; `value` should be one of the list variants.
    #[must_use]
    pub fn include(field: impl Into<String>, value: impl Into<SearchValue>) -> Self {
        Self::with_op(field, Some(value.into()), Some(Operator::Include))
    }

    #[must_use]
    pub fn exclude(field: impl Into<String>, value: impl Into<SearchValue>) -> Self {
        Self::with_op(field, Some(value.into()), Some(Operator::Exclude))
    }

    #[must_use]
    pub fn exists(field: impl Into<String>) -> Self {
        Self::with_op(field, None, Some(Operator::Exist))
    }

    #[must_use]
    pub fn not_exists(field: impl Into<String>) -> Self {
        Self::with_op(field, None, Some(Operator::NotExist))
    }

    /// Case-insensitive pattern condition.
    #[must_use]
    pub fn regex(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::with_op(
            field,
            Some(SearchValue::Text(pattern.into())),
            Some(Operator::Regex),
        )
    }
}

///
/// TimeBound
///
/// Timeframe bounds arrive either as epoch integers or as formatted
/// date text.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TimeBound {
    Int(i64),
    Text(String),
}

impl TimeBound {
    #[must_use]
    pub fn to_json(&self) -> Json {
        match self {
            Self::Int(v) => Json::Number(Number::from(*v)),
            Self::Text(v) => Json::String(v.clone()),
        }
    }
}

impl From<i64> for TimeBound {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for TimeBound {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<&str> for TimeBound {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

///
/// Timeframe
///
/// Inclusive time window on one field. Bounds are independent: each
/// present bound becomes its own query fragment.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Timeframe {
    #[serde(default, rename = "from")]
    pub gte: Option<TimeBound>,

    #[serde(default, rename = "to")]
    pub lte: Option<TimeBound>,

    #[serde(default)]
    pub field: Option<String>,

    #[serde(default, rename = "formatDate")]
    pub format_date: Option<String>,
}

impl Timeframe {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_bound(mut self, bound: impl Into<TimeBound>) -> Self {
        self.gte = Some(bound.into());
        self
    }

    #[must_use]
    pub fn to_bound(mut self, bound: impl Into<TimeBound>) -> Self {
        self.lte = Some(bound.into());
        self
    }

    /// True when neither bound is present; such a timeframe is a no-op.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.gte.is_none() && self.lte.is_none()
    }

    /// Resolve both bounds to epoch milliseconds. Text bounds are parsed
    /// with `formatDate`, falling back to `[year]-[month]-[day]`.
    /// Negative integer bounds clamp at the epoch.
    pub fn bounds_as_millis(
        &self,
    ) -> Result<(Option<Timestamp>, Option<Timestamp>), SchemaError> {
        Ok((
            self.bound_millis(self.gte.as_ref())?,
            self.bound_millis(self.lte.as_ref())?,
        ))
    }

    fn bound_millis(&self, bound: Option<&TimeBound>) -> Result<Option<Timestamp>, SchemaError> {
        match bound {
            None => Ok(None),
            Some(TimeBound::Int(millis)) => Ok(Some(Timestamp::from_millis(
                u64::try_from(*millis).unwrap_or_default(),
            ))),
            Some(TimeBound::Text(text)) => {
                let format = self.format_date.as_deref().unwrap_or("[year]-[month]-[day]");

                Timestamp::parse(text, format).map(Some)
            }
        }
    }
}

///
/// OrderSpec
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrderSpec {
    #[serde(default)]
    pub order: Order,

    #[serde(default, rename = "orderBy")]
    pub order_by: Option<String>,
}

///
/// PageSpec
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageSpec {
    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_size")]
    pub size: u32,
}

impl PageSpec {
    /// Zero-based item offset implied by page and size.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * (self.size as u64)
    }

    /// Both knobs are one-based.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.page < 1 {
            return Err(SchemaError::InvalidPage);
        }
        if self.size < 1 {
            return Err(SchemaError::InvalidSize);
        }

        Ok(())
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
        }
    }
}

///
/// TimeframeSpec
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TimeframeSpec {
    #[serde(default)]
    pub timeframe: Option<Timeframe>,

    #[serde(default = "timezone::default_timezone")]
    pub timezone: String,
}

impl TimeframeSpec {
    pub fn validate(&self) -> Result<(), SchemaError> {
        timezone::validate(&self.timezone).map(|_| ())
    }
}

impl Default for TimeframeSpec {
    fn default() -> Self {
        Self {
            timeframe: None,
            timezone: timezone::default_timezone(),
        }
    }
}

///
/// Composite request schemas
///
/// The original service exposed these as mixin stacks; here each mixin
/// is a flattened component sharing one wire object.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrderedPage {
    #[serde(flatten)]
    pub page: PageSpec,

    #[serde(flatten)]
    pub order: OrderSpec,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct OrderedSearch {
    #[serde(flatten)]
    pub search: SearchFilter,

    #[serde(flatten)]
    pub order: OrderSpec,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MultiFilter {
    #[serde(flatten)]
    pub page: PageSpec,

    #[serde(flatten)]
    pub time: TimeframeSpec,

    #[serde(flatten)]
    pub order: OrderSpec,

    #[serde(default)]
    pub filters: Option<Vec<SearchFilter>>,
}

impl MultiFilter {
    /// Lower the carried filters into a Mongo-style query document:
    /// every condition is a must clause, the timeframe bounds included.
    #[must_use]
    pub fn mongo_query(&self) -> QueryDocument {
        let mut builder = MongoQueryBuilder::new();

        if let Some(filters) = &self.filters {
            builder = builder.apply_must(filters);
        }
        if let Some(timeframe) = &self.time.timeframe {
            builder = builder.apply_timeframe(timeframe);
        }

        builder.render()
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DynamicFilter {
    #[serde(flatten)]
    pub page: PageSpec,

    #[serde(flatten)]
    pub time: TimeframeSpec,

    #[serde(flatten)]
    pub order: OrderSpec,

    #[serde(default)]
    pub filters: Option<BTreeMap<FilterOption, Vec<SearchFilter>>>,
}

impl DynamicFilter {
    /// Lower the grouped filters into a Mongo-style query document,
    /// dispatching each group to its bucket.
    #[must_use]
    pub fn mongo_query(&self) -> QueryDocument {
        let mut builder = MongoQueryBuilder::new();

        if let Some(groups) = &self.filters {
            builder = builder.apply_grouped(groups);
        }
        if let Some(timeframe) = &self.time.timeframe {
            builder = builder.apply_timeframe(timeframe);
        }

        builder.render()
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct BaseFilter {
    #[serde(flatten)]
    pub page: PageSpec,

    #[serde(flatten)]
    pub time: TimeframeSpec,

    #[serde(flatten)]
    pub order: OrderSpec,

    #[serde(flatten)]
    pub search: SearchFilter,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_spec_defaults_and_offset() {
        let spec: PageSpec = serde_json::from_value(json!({})).unwrap();
        assert_eq!(spec, PageSpec { page: 1, size: 10 });
        assert_eq!(spec.offset(), 0);

        let spec = PageSpec { page: 3, size: 25 };
        assert_eq!(spec.offset(), 50);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn page_spec_rejects_zero_size() {
        let spec = PageSpec { page: 1, size: 0 };
        assert_eq!(spec.validate(), Err(SchemaError::InvalidSize));
    }

    #[test]
    fn timeframe_spec_defaults_to_jakarta() {
        let spec: TimeframeSpec = serde_json::from_value(json!({})).unwrap();
        assert_eq!(spec.timezone, "Asia/Jakarta");
        assert!(spec.validate().is_ok());

        let spec: TimeframeSpec =
            serde_json::from_value(json!({ "timezone": "Not/AZone" })).unwrap();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn search_filter_wire_names() {
        let filter: SearchFilter = serde_json::from_value(json!({
            "field": "status",
            "value": ["a", "b"],
            "opt": "include",
        }))
        .unwrap();

        assert_eq!(filter, SearchFilter::include("status", vec!["a", "b"]));
    }

    #[test]
    fn timeframe_wire_aliases() {
        let tf: Timeframe = serde_json::from_value(json!({
            "from": 100,
            "to": "2024-03-01",
            "field": "createdAt",
            "formatDate": "[year]-[month]-[day]",
        }))
        .unwrap();

        assert_eq!(tf.gte, Some(TimeBound::Int(100)));
        assert_eq!(tf.lte, Some(TimeBound::Text("2024-03-01".to_string())));
        assert!(!tf.is_empty());

        let (from, to) = tf.bounds_as_millis().unwrap();
        assert_eq!(from, Some(Timestamp::from_millis(100)));
        assert_eq!(to.unwrap().as_millis() % 86_400_000, 0);
    }

    #[test]
    fn multi_filter_flattens_components() {
        let filter: MultiFilter = serde_json::from_value(json!({
            "page": 2,
            "size": 5,
            "order": "ascending",
            "orderBy": "name",
            "filters": [{ "field": "age", "value": 30, "opt": "gte" }],
        }))
        .unwrap();

        assert_eq!(filter.page.page, 2);
        assert_eq!(filter.order.order, Order::Ascending);
        assert_eq!(filter.order.order_by.as_deref(), Some("name"));
        assert_eq!(filter.time.timezone, "Asia/Jakarta");
        assert_eq!(
            filter.filters,
            Some(vec![SearchFilter::gte("age", 30)])
        );
    }

    #[test]
    fn multi_filter_lowers_to_query_document() {
        let filter: MultiFilter = serde_json::from_value(json!({
            "filters": [{ "field": "age", "value": 30, "opt": "gte" }],
            "timeframe": { "from": 100, "to": 200, "field": "createdAt" },
        }))
        .unwrap();

        let doc = serde_json::Value::Object(filter.mongo_query());
        assert_eq!(
            doc,
            json!({
                "$and": [
                    { "age": { "$gte": 30 } },
                    { "createdAt": { "$gte": 100 } },
                    { "createdAt": { "$lte": 200 } },
                ],
            })
        );
    }

    #[test]
    fn dynamic_filter_groups_dispatch_to_buckets() {
        let filter: DynamicFilter = serde_json::from_value(json!({
            "filters": {
                "must": [{ "field": "age", "value": 30, "opt": "gte" }],
                "should_not": [{ "field": "status", "value": "banned" }],
            },
        }))
        .unwrap();

        let doc = serde_json::Value::Object(filter.mongo_query());
        assert_eq!(
            doc,
            json!({
                "$and": [{ "age": { "$gte": 30 } }],
                "$nor": [{ "status": "banned" }],
            })
        );
    }
}
