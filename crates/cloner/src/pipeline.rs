use crate::debug_copy::persist_debug_copy;
use crate::profile_edits::{drop_identifier, transform, ProfileEdits};
use arrclone_arr_api::models::{NewQualityProfile, QualityProfile};
use arrclone_arr_api::{ArrApiError, QualityProfileApi};
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything [clone_profile] needs to know about one run.
#[derive(Clone, Debug)]
pub struct ClonePlan {
    pub source_profile_id: i64,
    pub edits: ProfileEdits,
    pub debug_copy_path: PathBuf,
    /// Stop after writing the debug copy instead of creating the profile.
    pub dry_run: bool,
}

#[derive(Debug, PartialEq)]
pub enum CloneOutcome {
    /// The profile as stored by the server.
    Created(QualityProfile),
    /// The profile that would have been submitted.
    DryRun(NewQualityProfile),
}

/// Fetch the source profile, edit it, and submit it as a new profile.
///
/// A failure to write the debug copy is logged and otherwise ignored; the copy is always
/// attempted before the profile is submitted.
pub async fn clone_profile<T>(api: &T, plan: &ClonePlan) -> Result<CloneOutcome, ArrApiError>
where
    T: QualityProfileApi + Sync + ?Sized,
{
    info!("Fetching quality profile {}.", plan.source_profile_id);
    let fetched = api.get_quality_profile(plan.source_profile_id).await?;
    info!(
        "Fetched quality profile \"{}\" with {} items.",
        fetched.name,
        fetched.items.len()
    );

    let new_profile = drop_identifier(transform(fetched, &plan.edits));

    match persist_debug_copy(&new_profile, &plan.debug_copy_path) {
        Ok(_) => info!(
            "Wrote the new quality profile to {}.",
            plan.debug_copy_path.display()
        ),
        Err(e) => warn!("Skipping the local copy of the new quality profile: {}", e),
    }

    if plan.dry_run {
        info!(
            "Dry run enabled; not creating quality profile \"{}\".",
            new_profile.name
        );
        return Ok(CloneOutcome::DryRun(new_profile));
    }

    info!("Creating quality profile \"{}\".", new_profile.name);
    let created = api.create_quality_profile(&new_profile).await?;
    match created.assigned_id() {
        Some(id) => info!("Created quality profile \"{}\" with id {}.", created.name, id),
        None => warn!(
            "Created quality profile \"{}\", but the server did not report its id.",
            created.name
        ),
    }

    Ok(CloneOutcome::Created(created))
}
