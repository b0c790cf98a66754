use anyhow::{bail, ensure, Context, Result};
use arrclone_arr_api::ArrClientSettings;
use arrclone_cloner::{
    ClonePlan, ProfileEdits, DEFAULT_ALLOWED_QUALITIES, DEFAULT_CUTOFF, DEFAULT_PROFILE_NAME,
};
use arrclone_common::environment::{
    get_optional_env_var,
    variables::{
        ALLOWED_QUALITY_MAX, ALLOWED_QUALITY_MIN, API_KEY, BASE_URL, CUTOFF, DRY_RUN,
        HTTP_TIMEOUT_SECS, OUTPUT_PATH, PROFILE_NAME, SOURCE_PROFILE_ID,
    },
};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;
use url::Url;

const DEFAULT_OUTPUT_PATH: &str = "new_quality_profile.json";

/// Looks up a configuration value by variable name. [Option::None] means "not set".
type Lookup<'a> = &'a dyn Fn(&str) -> Result<Option<String>>;

/// Everything needed for one run of arrclone.
pub struct ClonerSettings {
    pub client: ArrClientSettings,
    pub plan: ClonePlan,
}

/// Read [ClonerSettings] from the process environment.
pub fn settings_from_env() -> Result<ClonerSettings> {
    load_settings(&get_optional_env_var)
}

fn load_settings(lookup: Lookup) -> Result<ClonerSettings> {
    let client = ArrClientSettings {
        base_url: get_base_url(lookup)?.to_string(),
        api_key: required(lookup, API_KEY)?,
        timeout: get_timeout(lookup)?,
    };
    let plan = ClonePlan {
        source_profile_id: parse(lookup, SOURCE_PROFILE_ID)?
            .with_context(|| format!("{} must be set.", SOURCE_PROFILE_ID))?,
        edits: get_profile_edits(lookup)?,
        debug_copy_path: lookup(OUTPUT_PATH)?
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        dry_run: get_dry_run(lookup)?,
    };

    Ok(ClonerSettings { client, plan })
}

fn required(lookup: Lookup, name: &str) -> Result<String> {
    lookup(name)?
        .with_context(|| format!("{} must be set, either directly or via {}_FILE.", name, name))
}

fn parse<T>(lookup: Lookup, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name)? {
        Some(raw) => {
            let value = raw
                .parse::<T>()
                .with_context(|| format!("Failed to parse \"{}\" from {}.", raw, name))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

fn get_base_url(lookup: Lookup) -> Result<Url> {
    let raw = required(lookup, BASE_URL)?;
    let url = Url::parse(&raw).with_context(|| "Parsing of the Arr base URL failed.")?;
    ensure!(
        url.scheme() == "http" || url.scheme() == "https",
        "The Arr base URL must use http or https, not {}.",
        url.scheme()
    );
    info!("Received Arr base URL: {}", without_credentials(&url));
    Ok(url)
}

/// Strip any `user:password@` part so the URL can be logged.
fn without_credentials(url: &Url) -> String {
    let mut shown = url.clone();
    // Only fails for URLs that cannot be a base, which http(s) URLs always can.
    let _ = shown.set_username("");
    let _ = shown.set_password(None);
    shown.to_string()
}

fn get_timeout(lookup: Lookup) -> Result<Option<Duration>> {
    let seconds = parse::<u64>(lookup, HTTP_TIMEOUT_SECS)?;
    if seconds == Some(0) {
        bail!("{} must be greater than zero.", HTTP_TIMEOUT_SECS);
    }
    Ok(seconds.map(Duration::from_secs))
}

fn get_profile_edits(lookup: Lookup) -> Result<ProfileEdits> {
    let min = parse(lookup, ALLOWED_QUALITY_MIN)?.unwrap_or(*DEFAULT_ALLOWED_QUALITIES.start());
    let max = parse(lookup, ALLOWED_QUALITY_MAX)?.unwrap_or(*DEFAULT_ALLOWED_QUALITIES.end());
    ensure!(
        min <= max,
        "{} ({}) must not be greater than {} ({}).",
        ALLOWED_QUALITY_MIN,
        min,
        ALLOWED_QUALITY_MAX,
        max
    );

    Ok(ProfileEdits {
        name: lookup(PROFILE_NAME)?.unwrap_or_else(|| String::from(DEFAULT_PROFILE_NAME)),
        cutoff: parse(lookup, CUTOFF)?.unwrap_or(DEFAULT_CUTOFF),
        allowed_qualities: min..=max,
    })
}

fn get_dry_run(lookup: Lookup) -> Result<bool> {
    let raw = match lookup(DRY_RUN)? {
        Some(s) => s.to_lowercase(),
        None => return Ok(false),
    };
    match raw.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => bail!("Failed to parse \"{}\" from {} as a boolean.", raw, DRY_RUN),
    }
}
