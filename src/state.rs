use std::sync::Arc;

use tokio::sync::RwLock;

use rosterforge_core::RosterController;

use crate::config::{ExportConfig, ServerConfig, SubmissionConfig};

/// Shared application state.
///
/// The controller behind the lock is the single logical writer for the live
/// roster; handlers take the write half for mutations and the read half for
/// snapshots.
#[derive(Clone, Debug)]
pub struct AppState {
    pub controller: Arc<RwLock<RosterController>>,
    pub http: reqwest::Client,
    pub server_config: ServerConfig,
    pub submission_config: SubmissionConfig,
    pub export_config: ExportConfig,
}

pub fn init_app_state() -> AppState {
    AppState {
        controller: Arc::new(RwLock::new(RosterController::new())),
        http: reqwest::Client::new(),
        server_config: ServerConfig::from_env(),
        submission_config: SubmissionConfig::from_env(),
        export_config: ExportConfig::from_env(),
    }
}
