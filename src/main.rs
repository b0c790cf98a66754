mod cloner_initialization;

extern crate dotenv;

use crate::cloner_initialization::settings_from_env;
use anyhow::{Context, Result};
use arrclone_arr_api::ArrClient;
use arrclone_cloner::{clone_profile, CloneOutcome};
use arrclone_common::environment::variables::LOG_FILTER;
use dotenv::dotenv;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Set up logging framework, reading filter configuration from the environment variable
    // or defaulting to info logs and above globally if the filter isn't specified.
    let filter = EnvFilter::try_from_env(LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::INFO.into()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Initializing arrclone...");
    let settings = settings_from_env().context("Failed to read the arrclone configuration.")?;
    let source_profile_id = settings.plan.source_profile_id;
    let client = ArrClient::new(settings.client)?;

    let outcome = clone_profile(&client, &settings.plan)
        .await
        .with_context(|| format!("Failed to clone quality profile {}.", source_profile_id))?;
    match outcome {
        CloneOutcome::Created(profile) => info!("Done. \"{}\" is ready to use.", profile.name),
        CloneOutcome::DryRun(_) => info!(
            "Done. Review {} and unset the dry run flag to create the profile.",
            settings.plan.debug_copy_path.display()
        ),
    }

    Ok(())
}
