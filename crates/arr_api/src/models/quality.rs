use crate::models::presence::present;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single quality tier, e.g. `Bluray-1080p`.
///
/// # Remarks
///
/// Only `id` is modeled; `name`, `source`, `resolution` and `modifier` ride along in `extra`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quality {
    pub id: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of a quality profile's `items` list.
///
/// Entries that represent a group of qualities carry no `quality` object (the key is either
/// missing or `null`); their `name`, `id` and nested `items` are kept in `extra`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QualityProfileItem {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub quality: Option<Option<Quality>>,
    pub allowed: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QualityProfileItem {
    /// The id of the quality tier this item refers to, if it refers to one.
    pub fn quality_id(&self) -> Option<i64> {
        self.quality.as_ref().and_then(Option::as_ref).map(|q| q.id)
    }
}
