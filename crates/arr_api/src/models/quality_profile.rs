use crate::models::presence::present;
use crate::models::quality::QualityProfileItem;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A quality profile as returned by `GET /api/v3/qualityprofile/{id}`.
///
/// Fields that are not edited by arrclone are never interpreted; they are collected into
/// `extra` on the way in and written back unchanged on the way out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QualityProfile {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Option<i64>>,
    pub name: String,
    pub upgrade_allowed: bool,
    pub cutoff: i64,
    pub items: Vec<QualityProfileItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A quality profile that has not been assigned an id yet. This is the request body of
/// `POST /api/v3/qualityprofile`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewQualityProfile {
    pub name: String,
    pub upgrade_allowed: bool,
    pub cutoff: i64,
    pub items: Vec<QualityProfileItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QualityProfile {
    /// The id the server assigned to this profile, if the response carried one.
    pub fn assigned_id(&self) -> Option<i64> {
        self.id.flatten()
    }
}

impl From<QualityProfile> for NewQualityProfile {
    fn from(profile: QualityProfile) -> Self {
        let QualityProfile {
            name,
            upgrade_allowed,
            cutoff,
            items,
            extra,
            ..
        } = profile;
        NewQualityProfile {
            name,
            upgrade_allowed,
            cutoff,
            items,
            extra,
        }
    }
}
