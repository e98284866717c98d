pub mod alerts;
pub mod config;
pub mod errors;
pub mod events;
pub mod forecast;
pub mod models;
pub mod neighbors;
pub mod safe_zones;
pub mod storage;
pub mod utils;
pub mod views;
pub mod volunteer;

pub use config::PortalConfig;
pub use errors::{PortalError, Result};
pub use views::{View, ViewSession};

#[cfg(feature = "desktop")]
pub use desktop::run;

#[cfg(feature = "desktop")]
pub(crate) use desktop::AppState;

#[cfg(feature = "desktop")]
mod desktop {
    use std::sync::Arc;

    use tauri::{Manager, State};

    use crate::{
        alerts::commands::{get_alert_counts, get_alert_feed, set_alert_filter},
        config::PortalConfig,
        forecast::{self, ForecastSummary},
        models::Notice,
        neighbors::commands::{
            add_neighbor, alert_neighbor, call_neighbor, confirm_alert_all, list_neighbors,
            remove_neighbor, request_alert_all,
        },
        safe_zones::commands::{get_map_center, list_safe_zones, nearest_safe_zone},
        storage::FileStore,
        views::{self, View, ViewLink, ViewSession},
        volunteer::{self, VolunteerForm},
    };

    pub(crate) struct AppState {
        pub(crate) session: Arc<ViewSession>,
    }

    #[tauri::command]
    async fn navigate(state: State<'_, AppState>, path: String) -> Result<View, String> {
        state
            .session
            .activate_path(&path)
            .await
            .map_err(|e| e.to_string())
    }

    #[tauri::command]
    async fn current_view(state: State<'_, AppState>) -> Result<View, String> {
        Ok(state.session.current().await)
    }

    #[tauri::command]
    fn list_views() -> Vec<ViewLink> {
        views::navigation()
    }

    #[tauri::command]
    fn register_volunteer(form: VolunteerForm) -> Result<Notice, String> {
        volunteer::register(&form).map_err(|e| e.to_string())
    }

    #[tauri::command]
    fn get_forecast() -> ForecastSummary {
        forecast::summary()
    }

    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        let config = PortalConfig::from_env();

        // Initialize logging (reads RUST_LOG env var)
        env_logger::Builder::from_default_env()
            .filter_level(if config.debug {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            })
            .init();

        log::info!("SAHARA starting up...");

        tauri::Builder::default()
            .plugin(tauri_plugin_opener::init())
            .setup(move |app| {
                let result = (|| -> anyhow::Result<()> {
                    let data_dir = match config.data_dir.clone() {
                        Some(dir) => dir,
                        None => app
                            .path()
                            .app_data_dir()
                            .map_err(|err| anyhow::anyhow!(err))?,
                    };
                    let store = FileStore::open(&data_dir)?;
                    log::info!("local storage at {}", store.dir().display());

                    let session = ViewSession::new(
                        Arc::new(store),
                        Arc::new(app.handle().clone()),
                        config.alert_interval,
                    );

                    app.manage(AppState {
                        session: Arc::new(session),
                    });

                    Ok(())
                })();

                result.map_err(|err| err.into())
            })
            .on_window_event(|window, event| {
                if let tauri::WindowEvent::Destroyed = event {
                    if let Some(state) = window.try_state::<AppState>() {
                        let session = state.session.clone();
                        tauri::async_runtime::block_on(async move {
                            session.shutdown().await;
                        });
                    }
                }
            })
            .invoke_handler(tauri::generate_handler![
                navigate,
                current_view,
                list_views,
                register_volunteer,
                get_forecast,
                get_alert_feed,
                set_alert_filter,
                get_alert_counts,
                list_neighbors,
                add_neighbor,
                remove_neighbor,
                call_neighbor,
                alert_neighbor,
                request_alert_all,
                confirm_alert_all,
                list_safe_zones,
                get_map_center,
                nearest_safe_zone,
            ])
            .run(tauri::generate_context!())
            .expect("error while running tauri application");
    }
}
