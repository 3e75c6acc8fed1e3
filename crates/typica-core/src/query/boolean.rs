use crate::schema::enums::FilterOption;
use std::collections::BTreeMap;

///
/// BooleanQuery
///
/// Generic boolean-clause accumulator: four ordered clause buckets plus
/// a raw-key escape hatch merged verbatim at render time. Parameterized
/// over the fragment type so renderers for different backends can share
/// the accumulation logic. Fragments are opaque here; callers are
/// responsible for their shape.
///

#[derive(Clone, Debug)]
pub struct BooleanQuery<F> {
    musts: Vec<F>,
    must_nots: Vec<F>,
    shoulds: Vec<F>,
    should_nots: Vec<F>,
    extra: BTreeMap<String, F>,
}

impl<F> BooleanQuery<F> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            musts: Vec::new(),
            must_nots: Vec::new(),
            shoulds: Vec::new(),
            should_nots: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Append an AND clause.
    #[must_use]
    pub fn must(mut self, fragment: F) -> Self {
        self.musts.push(fragment);
        self
    }

    /// Append a NOT clause.
    #[must_use]
    pub fn must_not(mut self, fragment: F) -> Self {
        self.must_nots.push(fragment);
        self
    }

    /// Append an OR clause.
    #[must_use]
    pub fn should(mut self, fragment: F) -> Self {
        self.shoulds.push(fragment);
        self
    }

    /// Append a NOR clause.
    #[must_use]
    pub fn should_not(mut self, fragment: F) -> Self {
        self.should_nots.push(fragment);
        self
    }

    /// Append into the bucket named by `option`.
    #[must_use]
    pub fn push(self, option: FilterOption, fragment: F) -> Self {
        match option {
            FilterOption::Must => self.must(fragment),
            FilterOption::MustNot => self.must_not(fragment),
            FilterOption::Should => self.should(fragment),
            FilterOption::ShouldNot => self.should_not(fragment),
        }
    }

    /// Merge pre-built keys into the raw bucket; later writes to the
    /// same key win. Raw keys bypass bucket semantics entirely.
    #[must_use]
    pub fn merge_raw<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, F)>,
    {
        for (key, fragment) in entries {
            self.extra.insert(key, fragment);
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.musts.is_empty()
            && self.must_nots.is_empty()
            && self.shoulds.is_empty()
            && self.should_nots.is_empty()
            && self.extra.is_empty()
    }

    /// Hand the accumulated clauses to a renderer. Consuming keeps the
    /// accumulate-then-render lifecycle single-shot.
    #[must_use]
    pub fn into_clauses(self) -> BooleanClauses<F> {
        BooleanClauses {
            must: self.musts,
            must_not: self.must_nots,
            should: self.shoulds,
            should_not: self.should_nots,
            extra: self.extra,
        }
    }
}

impl<F> Default for BooleanQuery<F> {
    fn default() -> Self {
        Self::new()
    }
}

///
/// BooleanClauses
///
/// Immutable handoff between accumulation and rendering. Clause order
/// within each bucket is insertion order.
///

#[derive(Clone, Debug)]
pub struct BooleanClauses<F> {
    pub must: Vec<F>,
    pub must_not: Vec<F>,
    pub should: Vec<F>,
    pub should_not: Vec<F>,
    pub extra: BTreeMap<String, F>,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_preserve_insertion_order() {
        let clauses = BooleanQuery::new()
            .must("a")
            .must("b")
            .should("c")
            .must("d")
            .into_clauses();

        assert_eq!(clauses.must, vec!["a", "b", "d"]);
        assert_eq!(clauses.should, vec!["c"]);
        assert!(clauses.must_not.is_empty());
        assert!(clauses.should_not.is_empty());
    }

    #[test]
    fn push_dispatches_by_option() {
        let clauses = BooleanQuery::new()
            .push(FilterOption::Must, 1)
            .push(FilterOption::MustNot, 2)
            .push(FilterOption::Should, 3)
            .push(FilterOption::ShouldNot, 4)
            .into_clauses();

        assert_eq!(clauses.must, vec![1]);
        assert_eq!(clauses.must_not, vec![2]);
        assert_eq!(clauses.should, vec![3]);
        assert_eq!(clauses.should_not, vec![4]);
    }

    #[test]
    fn merge_raw_is_last_write_wins() {
        let clauses = BooleanQuery::new()
            .merge_raw([("k".to_string(), 1), ("other".to_string(), 2)])
            .merge_raw([("k".to_string(), 3)])
            .into_clauses();

        assert_eq!(clauses.extra.get("k"), Some(&3));
        assert_eq!(clauses.extra.get("other"), Some(&2));
    }

    #[test]
    fn emptiness_covers_every_bucket() {
        let query = BooleanQuery::<u8>::new();
        assert!(query.is_empty());

        let query = BooleanQuery::new().merge_raw([("k".to_string(), 1)]);
        assert!(!query.is_empty());

        let query = BooleanQuery::new().should_not(1);
        assert!(!query.is_empty());
    }
}
