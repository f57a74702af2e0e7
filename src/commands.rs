use crate::chat::{ChatMessage, ConversationLog, Notification, Orchestrator, TurnReport};
use tauri::{command, State};
use tokio::sync::Mutex;

/// Shared state for the window: the turn pipeline and the one conversation.
pub struct AppState {
    pub orchestrator: Orchestrator,
    pub log: Mutex<ConversationLog>,
}

impl AppState {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator,
            log: Mutex::new(ConversationLog::new()),
        }
    }
}

/// Errors cross the bridge as a serialized `Notification`.
fn notice(notification: &Notification) -> String {
    serde_json::to_string(notification).unwrap_or_else(|_| notification.description.clone())
}

#[command]
pub async fn analyze_submission(
    input: String,
    state: State<'_, AppState>,
) -> Result<TurnReport, String> {
    // The conversation stays locked for the whole turn; a second submission
    // while one is being analyzed is turned away rather than queued.
    let mut log = state
        .log
        .try_lock()
        .map_err(|_| notice(&Notification::busy()))?;

    state
        .orchestrator
        .turn(&mut log, &input)
        .await
        .map_err(|e| notice(&e.notification()))
}

#[command]
pub async fn conversation(state: State<'_, AppState>) -> Result<Vec<ChatMessage>, String> {
    let log = state.log.lock().await;
    Ok(log.messages().to_vec())
}

#[command]
pub async fn reset_conversation(
    state: State<'_, AppState>,
) -> Result<Vec<ChatMessage>, String> {
    let mut log = state.log.lock().await;
    log.reset();
    Ok(log.messages().to_vec())
}
