use tauri::State;
use tauri_plugin_opener::OpenerExt;

use crate::{
    models::{BroadcastPrompt, BroadcastReceipt, DialRequest, NeighborInput, NeighborRecord, Notice},
    AppState,
};

#[tauri::command]
pub async fn list_neighbors(state: State<'_, AppState>) -> Result<Vec<NeighborRecord>, String> {
    state
        .session
        .with_neighbors(|registry| Ok(registry.neighbors().to_vec()))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn add_neighbor(
    state: State<'_, AppState>,
    input: NeighborInput,
) -> Result<NeighborRecord, String> {
    state
        .session
        .with_neighbors(|registry| registry.add(&input.name, &input.phone, &input.address))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn remove_neighbor(state: State<'_, AppState>, id: i64) -> Result<bool, String> {
    state
        .session
        .with_neighbors(|registry| registry.remove(id))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn call_neighbor(
    state: State<'_, AppState>,
    app_handle: tauri::AppHandle,
    id: i64,
) -> Result<DialRequest, String> {
    let request = state
        .session
        .with_neighbors(|registry| registry.call_neighbor(id))
        .await
        .map_err(|e| e.to_string())?;

    app_handle
        .opener()
        .open_url(&request.uri, None::<&str>)
        .map_err(|e| e.to_string())?;

    Ok(request)
}

#[tauri::command]
pub async fn alert_neighbor(state: State<'_, AppState>, id: i64) -> Result<Notice, String> {
    state
        .session
        .with_neighbors(|registry| registry.alert_one(id))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn request_alert_all(state: State<'_, AppState>) -> Result<BroadcastPrompt, String> {
    state
        .session
        .with_neighbors(|registry| registry.request_alert_all())
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn confirm_alert_all(state: State<'_, AppState>) -> Result<BroadcastReceipt, String> {
    state
        .session
        .with_neighbors(|registry| registry.confirm_alert_all())
        .await
        .map_err(|e| e.to_string())
}
