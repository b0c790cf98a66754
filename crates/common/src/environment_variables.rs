//! The list of environment variables used throughout the application.

// Remote Arr instance
pub const BASE_URL: &str = "ARRCLONE_BASE_URL";
pub const API_KEY: &str = "ARRCLONE_API_KEY";
pub const HTTP_TIMEOUT_SECS: &str = "ARRCLONE_HTTP_TIMEOUT_SECS";

// Profile edits
pub const SOURCE_PROFILE_ID: &str = "ARRCLONE_SOURCE_PROFILE_ID";
pub const PROFILE_NAME: &str = "ARRCLONE_PROFILE_NAME";
pub const CUTOFF: &str = "ARRCLONE_CUTOFF";
pub const ALLOWED_QUALITY_MIN: &str = "ARRCLONE_ALLOWED_QUALITY_MIN";
pub const ALLOWED_QUALITY_MAX: &str = "ARRCLONE_ALLOWED_QUALITY_MAX";

// Output
pub const OUTPUT_PATH: &str = "ARRCLONE_OUTPUT_PATH";
pub const DRY_RUN: &str = "ARRCLONE_DRY_RUN";

// Miscellaneous
pub const LOG_FILTER: &str = "ARRCLONE_LOG_FILTER";
