use crate::{
    schema::enums::DataStatus,
    types::{Timestamp, timezone},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn new_uuid_string() -> String {
    Uuid::new_v4().to_string()
}

fn default_created_at() -> Option<Timestamp> {
    Some(Timestamp::now())
}

fn default_created_by() -> Option<String> {
    Some(String::new())
}

fn default_timezone() -> Option<String> {
    Some(timezone::default_timezone())
}

fn default_status() -> Option<DataStatus> {
    Some(DataStatus::Active)
}

///
/// IdMeta
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IdMeta {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
}

impl Default for IdMeta {
    fn default() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

///
/// MongoIdMeta
/// `_id` rendition for document stores keyed by string ids.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MongoIdMeta {
    #[serde(rename = "_id", default = "new_uuid_string")]
    pub id: String,
}

impl Default for MongoIdMeta {
    fn default() -> Self {
        Self {
            id: new_uuid_string(),
        }
    }
}

///
/// BaseMeta
///
/// Default lifecycle metadata attached to stored records. All fields
/// are optional on the wire; construction fills the create-time ones.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseMeta {
    #[serde(default = "default_created_at")]
    pub created_at: Option<Timestamp>,

    #[serde(default)]
    pub updated_at: Option<Timestamp>,

    #[serde(default)]
    pub deleted_at: Option<Timestamp>,

    #[serde(default = "default_created_by")]
    pub created_by: Option<String>,

    #[serde(default)]
    pub updated_by: Option<String>,

    #[serde(default)]
    pub deleted_by: Option<String>,

    #[serde(default = "default_timezone")]
    pub timezone: Option<String>,

    #[serde(default = "default_status")]
    pub status: Option<DataStatus>,
}

impl BaseMeta {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Some(DataStatus::Active)
    }
}

impl Default for BaseMeta {
    fn default() -> Self {
        Self {
            created_at: default_created_at(),
            updated_at: None,
            deleted_at: None,
            created_by: default_created_by(),
            updated_by: None,
            deleted_by: None,
            timezone: default_timezone(),
            status: default_status(),
        }
    }
}

///
/// BaseIdMeta
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BaseIdMeta {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    #[serde(flatten)]
    pub meta: BaseMeta,
}

impl Default for BaseIdMeta {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            meta: BaseMeta::default(),
        }
    }
}

///
/// BaseMongoIdMeta
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BaseMongoIdMeta {
    #[serde(rename = "_id", default = "new_uuid_string")]
    pub id: String,

    #[serde(flatten)]
    pub meta: BaseMeta,
}

impl Default for BaseMongoIdMeta {
    fn default() -> Self {
        Self {
            id: new_uuid_string(),
            meta: BaseMeta::default(),
        }
    }
}

///
/// NestedMeta
/// Metadata carried under a `metadata` key instead of inline.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NestedMeta {
    #[serde(default)]
    pub metadata: Option<BaseMeta>,
}

///
/// NestedIdMeta
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NestedIdMeta {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    #[serde(default)]
    pub metadata: Option<BaseMeta>,
}

impl Default for NestedIdMeta {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            metadata: None,
        }
    }
}

///
/// TESTS
///
