//! Models of the Radarr/Sonarr v3 quality profile resource.
//! Source: https://github.com/Radarr/Radarr/tree/develop/src/Radarr.Api.V3/Profiles/Quality

mod presence;
mod quality;
mod quality_profile;

pub use quality::{Quality, QualityProfileItem};
pub use quality_profile::{NewQualityProfile, QualityProfile};
