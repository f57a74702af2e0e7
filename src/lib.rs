//! TruthBot: a chat-style fact-checking demo.
//!
//! Submissions are scored by a keyword heuristic (see [`analysis`]) and the
//! verdicts are threaded into a caller-owned conversation (see [`chat`]).
//! The Tauri desktop shell lives behind the `desktop` feature.

pub mod analysis;
pub mod chat;
pub mod config;
pub mod preprocessing;
pub mod telemetry;

#[cfg(feature = "desktop")]
mod commands;

pub use analysis::{AnalysisError, ClassificationResult, HeuristicClassifier};
pub use chat::{ConversationLog, Orchestrator};
pub use config::AppConfig;

use anyhow::Context;

/// Load configuration and install logging.
pub fn bootstrap() -> anyhow::Result<AppConfig> {
    let config = AppConfig::load().context("loading TruthBot configuration")?;
    telemetry::init(&config.logging);
    Ok(config)
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    if let Err(e) = try_run() {
        tracing::error!(error = ?e, "TruthBot exited with an error");
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "desktop")]
fn try_run() -> anyhow::Result<()> {
    use crate::commands::*;

    let config = bootstrap()?;
    let orchestrator =
        Orchestrator::from_config(&config.analysis).context("building the analysis pipeline")?;

    tracing::info!(
        latency_ms = config.analysis.latency_ms,
        seeded = config.analysis.seed.is_some(),
        "Starting TruthBot"
    );

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(AppState::new(orchestrator))
        .invoke_handler(tauri::generate_handler![
            analyze_submission,
            conversation,
            reset_conversation
        ])
        .run(tauri::generate_context!())
        .context("error while running tauri application")
}
