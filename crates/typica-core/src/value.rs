use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as Json};

///
/// SearchValue
///
/// Closed value union for a single filter condition.
/// Variant order matters for untagged deserialization: integers must be
/// tried before floats, and text lists before int lists.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    TextList(Vec<String>),
    IntList(Vec<i64>),
    Null,
}

impl SearchValue {
    /// True for the list-shaped variants accepted by `$in` / `$nin`.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::TextList(_) | Self::IntList(_))
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Lower into the JSON representation used inside query fragments.
    ///
    /// A non-finite float has no JSON number form and lowers to null.
    #[must_use]
    pub fn to_json(&self) -> Json {
        match self {
            Self::Bool(v) => Json::Bool(*v),
            Self::Int(v) => Json::Number(Number::from(*v)),
            Self::Float(v) => Number::from_f64(*v).map_or(Json::Null, Json::Number),
            Self::Text(v) => Json::String(v.clone()),
            Self::TextList(items) => {
                Json::Array(items.iter().cloned().map(Json::String).collect())
            }
            Self::IntList(items) => Json::Array(
                items
                    .iter()
                    .map(|v| Json::Number(Number::from(*v)))
                    .collect(),
            ),
            Self::Null => Json::Null,
        }
    }
}

impl Default for SearchValue {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for SearchValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for SearchValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for SearchValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for SearchValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for SearchValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for SearchValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<String>> for SearchValue {
    fn from(items: Vec<String>) -> Self {
        Self::TextList(items)
    }
}

impl From<Vec<&str>> for SearchValue {
    fn from(items: Vec<&str>) -> Self {
        Self::TextList(items.into_iter().map(ToString::to_string).collect())
    }
}

impl From<Vec<i64>> for SearchValue {
    fn from(items: Vec<i64>) -> Self {
        Self::IntList(items)
    }
}

///
/// TESTS
///
