//! Helpers shared by the arrclone crates.

pub mod environment;
mod environment_variables;
