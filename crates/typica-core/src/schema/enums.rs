use crate::traits::EnumList;
use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Operator
///
/// Closed comparison vocabulary for filter conditions. An absent
/// operator means equality; the renderer decides the fragment shape.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum Operator {
    Exclude,
    Exist,
    Gt,
    Gte,
    Include,
    Lt,
    Lte,
    NotExist,
    Regex,
    Unequal,
}

impl EnumList for Operator {
    const ALL: &'static [Self] = &[
        Self::Exclude,
        Self::Exist,
        Self::Gt,
        Self::Gte,
        Self::Include,
        Self::Lt,
        Self::Lte,
        Self::NotExist,
        Self::Regex,
        Self::Unequal,
    ];
}

///
/// Order
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum Order {
    Ascending,
    #[default]
    Descending,
}

impl EnumList for Order {
    const ALL: &'static [Self] = &[Self::Ascending, Self::Descending];
}

///
/// DataStatus
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum DataStatus {
    #[default]
    Active,
    Deleted,
    Inactive,
}

impl EnumList for DataStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Deleted, Self::Inactive];
}

///
/// FilterOption
///
/// Bucket selector for grouped filter payloads. Orderable so grouped
/// maps iterate deterministically.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum FilterOption {
    Must,
    MustNot,
    Should,
    ShouldNot,
}

impl EnumList for FilterOption {
    const ALL: &'static [Self] = &[Self::Must, Self::MustNot, Self::Should, Self::ShouldNot];
}

///
/// TESTS
///
