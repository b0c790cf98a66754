//! Clones a quality profile: fetch it, edit a few fields, and submit the result as a new profile.

mod debug_copy;
mod pipeline;
mod profile_edits;

pub use debug_copy::{persist_debug_copy, DebugCopyError};
pub use pipeline::{clone_profile, CloneOutcome, ClonePlan};
pub use profile_edits::{
    drop_identifier, transform, ProfileEdits, DEFAULT_ALLOWED_QUALITIES, DEFAULT_CUTOFF,
    DEFAULT_PROFILE_NAME,
};
