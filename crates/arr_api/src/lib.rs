//! Typed access to the quality profile resource of a Radarr/Sonarr v3 API.

mod arr_api_error;
mod client;
pub mod models;

pub use arr_api_error::ArrApiError;
pub use client::{ArrClient, ArrClientSettings, QualityProfileApi};
