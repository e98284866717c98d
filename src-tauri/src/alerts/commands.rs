use tauri::State;

use crate::{
    alerts::{AlertCounts, AlertFeedController, AlertFeedSnapshot},
    AppState,
};

async fn controller_from_state(
    state: &State<'_, AppState>,
) -> Result<AlertFeedController, String> {
    state.session.alerts().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_alert_feed(state: State<'_, AppState>) -> Result<AlertFeedSnapshot, String> {
    let controller = controller_from_state(&state).await?;
    Ok(controller.snapshot().await)
}

#[tauri::command]
pub async fn set_alert_filter(
    state: State<'_, AppState>,
    text: String,
) -> Result<AlertFeedSnapshot, String> {
    let controller = controller_from_state(&state).await?;
    Ok(controller.set_filter(text).await)
}

#[tauri::command]
pub async fn get_alert_counts(state: State<'_, AppState>) -> Result<AlertCounts, String> {
    let controller = controller_from_state(&state).await?;
    Ok(controller.counts().await)
}
