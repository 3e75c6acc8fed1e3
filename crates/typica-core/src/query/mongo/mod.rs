mod translate;


pub use translate::fragment;

use crate::{
    obs,
    query::boolean::BooleanQuery,
    schema::enums::FilterOption,
    schema::filter::{SearchFilter, Timeframe},
};
use serde_json::{Map, Value as Json};
use std::collections::BTreeMap;

/// Final Mongo-style query document.
pub type QueryDocument = Map<String, Json>;

///
/// MongoQueryBuilder
///
/// Orchestrates translation of declarative conditions into the boolean
/// accumulator and renders the final query document.
///
/// One builder per query: apply calls accumulate, `render` consumes.
/// Conditions without a target field are dropped silently — upstream
/// schema validation owns structural rejection.
///

#[derive(Clone, Debug, Default)]
pub struct MongoQueryBuilder {
    query: BooleanQuery<Json>,
}

impl MongoQueryBuilder {
    /// Create a new empty query builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: BooleanQuery::new(),
        }
    }

    fn apply(mut self, bucket: FilterOption, filters: &[SearchFilter]) -> Self {
        for filter in filters {
            match translate::fragment(filter) {
                Some(fragment) => {
                    obs::record_fragment();
                    self.query = self.query.push(bucket, fragment);
                }
                None => obs::record_skip(),
            }
        }
        self
    }

    /// Translate `filters` into AND clauses.
    #[must_use]
    pub fn apply_must(self, filters: &[SearchFilter]) -> Self {
        self.apply(FilterOption::Must, filters)
    }

    /// Translate `filters` into NOT clauses.
    #[must_use]
    pub fn apply_must_not(self, filters: &[SearchFilter]) -> Self {
        self.apply(FilterOption::MustNot, filters)
    }

    /// Translate `filters` into OR clauses.
    #[must_use]
    pub fn apply_should(self, filters: &[SearchFilter]) -> Self {
        self.apply(FilterOption::Should, filters)
    }

    /// Translate `filters` into NOR clauses.
    #[must_use]
    pub fn apply_should_not(self, filters: &[SearchFilter]) -> Self {
        self.apply(FilterOption::ShouldNot, filters)
    }

    /// Dispatch grouped filters to their buckets.
    #[must_use]
    pub fn apply_grouped(mut self, groups: &BTreeMap<FilterOption, Vec<SearchFilter>>) -> Self {
        for (bucket, filters) in groups {
            self = self.apply(*bucket, filters);
        }
        self
    }

    /// Translate a timeframe into AND clauses: each present bound is an
    /// independent fragment, never a combined range object. A timeframe
    /// without a target field is a no-op, like any field-less condition.
    #[must_use]
    pub fn apply_timeframe(mut self, timeframe: &Timeframe) -> Self {
        let Some(field) = timeframe.field.as_deref() else {
            return self;
        };

        if let Some(bound) = &timeframe.gte {
            obs::record_fragment();
            self.query = self
                .query
                .must(translate::operator_fragment(field, "$gte", bound.to_json()));
        }
        if let Some(bound) = &timeframe.lte {
            obs::record_fragment();
            self.query = self
                .query
                .must(translate::operator_fragment(field, "$lte", bound.to_json()));
        }

        self
    }

    /// Inject one pre-built key into the output document, bypassing
    /// bucket semantics. Raw keys overwrite rendered bucket keys.
    #[must_use]
    pub fn raw(mut self, key: impl Into<String>, value: Json) -> Self {
        self.query = self.query.merge_raw([(key.into(), value)]);
        self
    }

    /// Shallow-merge a pre-built document into the raw bucket;
    /// last write per key wins.
    #[must_use]
    pub fn merge_raw(mut self, document: QueryDocument) -> Self {
        self.query = self.query.merge_raw(document);
        self
    }

    /// Fold the non-empty buckets into the final query document.
    ///
    /// Should clauses render under `$not` and must-not clauses under
    /// `$or`; consumers of the produced documents rely on this exact
    /// key assignment.
    #[must_use]
    pub fn render(self) -> QueryDocument {
        let clauses = self.query.into_clauses();
        let mut document = QueryDocument::new();

        if !clauses.must.is_empty() {
            document.insert("$and".to_string(), Json::Array(clauses.must));
        }
        if !clauses.should.is_empty() {
            document.insert("$not".to_string(), Json::Array(clauses.should));
        }
        if !clauses.must_not.is_empty() {
            document.insert("$or".to_string(), Json::Array(clauses.must_not));
        }
        if !clauses.should_not.is_empty() {
            document.insert("$nor".to_string(), Json::Array(clauses.should_not));
        }
        for (key, value) in clauses.extra {
            document.insert(key, value);
        }

        obs::record_render();

        document
    }
}
