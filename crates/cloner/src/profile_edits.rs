//! The in-memory edits applied to a fetched profile before it is submitted as a new one.

use arrclone_arr_api::models::{NewQualityProfile, QualityProfile, QualityProfileItem};
use serde_json::Value;
use std::ops::RangeInclusive;
use tracing::debug;

pub const DEFAULT_PROFILE_NAME: &str = "1080p+ Upgradable";
pub const DEFAULT_CUTOFF: i64 = 14;
pub const DEFAULT_ALLOWED_QUALITIES: RangeInclusive<i64> = 9..=17;

/// The fields [transform] overwrites.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileEdits {
    pub name: String,
    pub cutoff: i64,
    /// Quality ids that end up `allowed`; every other quality is disallowed.
    pub allowed_qualities: RangeInclusive<i64>,
}

impl Default for ProfileEdits {
    fn default() -> Self {
        ProfileEdits {
            name: String::from(DEFAULT_PROFILE_NAME),
            cutoff: DEFAULT_CUTOFF,
            allowed_qualities: DEFAULT_ALLOWED_QUALITIES,
        }
    }
}

/// Apply `edits` to `profile`: overwrite `name` and `cutoff`, turn upgrades on, and recompute
/// `allowed` on every item from its quality id.
///
/// # Remarks
///
/// The `id` is left alone; see [drop_identifier]. A group item (no quality of its own) is
/// allowed iff any of its member qualities is, and its members follow the group, since a group
/// is allowed or disallowed as a whole. Groups without identifiable members are left untouched.
pub fn transform(mut profile: QualityProfile, edits: &ProfileEdits) -> QualityProfile {
    profile.name = edits.name.clone();
    profile.upgrade_allowed = true;
    profile.cutoff = edits.cutoff;
    for item in profile.items.iter_mut() {
        match item.quality_id() {
            Some(id) => item.allowed = edits.allowed_qualities.contains(&id),
            None => edit_group(item, &edits.allowed_qualities),
        }
    }

    profile
}

fn edit_group(group: &mut QualityProfileItem, allowed_qualities: &RangeInclusive<i64>) {
    let name = group
        .extra
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>")
        .to_string();
    let members = match group.extra.get_mut("items").and_then(Value::as_array_mut) {
        Some(m) => m,
        None => {
            debug!("Leaving quality group \"{}\" untouched; it has no items.", name);
            return;
        }
    };
    let member_ids: Vec<i64> = members
        .iter()
        .filter_map(|m| m.pointer("/quality/id"))
        .filter_map(Value::as_i64)
        .collect();
    if member_ids.is_empty() {
        debug!(
            "Leaving quality group \"{}\" untouched; none of its items has a quality id.",
            name
        );
        return;
    }

    let allowed = member_ids.iter().any(|id| allowed_qualities.contains(id));
    for member in members.iter_mut().filter_map(Value::as_object_mut) {
        if member.contains_key("allowed") {
            member.insert(String::from("allowed"), Value::Bool(allowed));
        }
    }
    group.allowed = allowed;
    debug!(
        "Quality group \"{}\" with qualities {:?} is now allowed: {}.",
        name, member_ids, allowed
    );
}

/// Turn a fetched profile into one that can be created as a new resource. The `id` key is
/// removed entirely, so the server assigns a fresh one.
pub fn drop_identifier(profile: QualityProfile) -> NewQualityProfile {
    NewQualityProfile::from(profile)
}
