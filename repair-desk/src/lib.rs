pub mod commands;
pub mod config;
pub mod logging;
pub mod state;

use crate::config::DeskConfig;
use crate::state::DeskState;
use repair_core::SettingsError;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid shop settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("failed to encode view: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn build_state(config: &DeskConfig) -> Result<DeskState, DeskError> {
    config.shop.validate()?;
    Ok(DeskState::seeded(config.shop.clone()))
}

/// Print the view of `path`, optionally with a search term applied.
pub fn run(config: &DeskConfig, path: &str, query: Option<&str>) -> Result<(), DeskError> {
    let mut state = build_state(config)?;
    if let Some(query) = query {
        if !commands::search(&mut state, path, query) {
            warn!(%path, "page has no search box; query ignored");
        }
    }

    let screen = commands::render(&state, path);
    println!("{}", serde_json::to_string_pretty(&screen)?);
    Ok(())
}

pub fn run_demo(config: &DeskConfig) -> Result<(), DeskError> {
    let mut state = build_state(config)?;

    println!(
        "dashboard:\n{}",
        serde_json::to_string_pretty(&commands::render(&state, "/").page)?
    );

    for (label, actions) in commands::demo_script() {
        let ignored = commands::apply_step(&mut state, actions);
        if ignored > 0 {
            warn!(step = label, ignored, "demo step had no effect");
        } else {
            info!(step = label, "demo step applied");
        }
        println!(
            "{label}:\n{}",
            serde_json::to_string_pretty(&commands::render(&state, "/").page)?
        );
    }

    Ok(())
}
