// Module declarations
mod api;
mod shared;
mod system;

use ditto_core::{ClipboardContext, Settings};
use log::{error, info, warn};
use tauri::{Manager, RunEvent, WindowEvent};

use api::commands;
use api::commands::settings::{SettingsState, StartupNotice};
use shared::events::Notification;
use system::{capture, tray, window};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let app = tauri::Builder::default()
        // Must be registered first: a second launch just brings this one forward
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            if let Err(e) = window::restore_from_tray(app) {
                warn!("Failed to focus running instance: {}", e);
            }
        }))
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            let settings = tauri::async_runtime::block_on(Settings::load()).unwrap_or_else(|e| {
                warn!("Failed to load settings, using defaults: {}", e);
                Settings::default()
            });
            info!("Settings: {:?}", settings);

            // History load failures fall back to an empty history
            let (ctx, load_error) = ClipboardContext::load_or_empty(&settings.history_file);
            let notice = load_error.map(|e| Notification::error(e.to_string()));
            info!("Loaded {} clipboard entries", ctx.len());

            if let Some(main) = app.get_webview_window(window::MAIN_WINDOW) {
                if let Err(e) = main.set_theme(window::theme_for(settings.appearance)) {
                    warn!("Failed to apply theme: {}", e);
                }
            }

            tray::build(app)?;

            let capture_task = capture::start(app.handle(), ctx.clone(), settings.poll_interval());

            app.manage(ctx);
            app.manage(capture_task);
            app.manage::<SettingsState>(tokio::sync::Mutex::new(settings));
            app.manage(StartupNotice(notice));
            app.manage(window::ExitGate::default());

            info!("Ditto initialized");
            Ok(())
        })
        .on_window_event(|window, event| {
            // Closing the main window minimizes to the tray instead of quitting
            if let WindowEvent::CloseRequested { api, .. } = event {
                if window.label() == window::MAIN_WINDOW {
                    api.prevent_close();
                    if let Err(e) = window::hide_to_tray(window.app_handle()) {
                        error!("Failed to hide to tray: {}", e);
                    }
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            commands::history::get_history,
            commands::history::search_history,
            commands::history::render_history,
            commands::history::clear_history,
            commands::history::export_history,
            commands::clipboard::clear_clipboard,
            commands::clipboard::copy_selection,
            commands::clipboard::paste_from_clipboard,
            commands::settings::get_settings,
            commands::settings::get_startup_notice,
            commands::settings::toggle_theme,
            commands::window::hide_to_tray,
        ])
        .build(tauri::generate_context!())
        .unwrap_or_else(|e| {
            error!("FATAL: Failed to start Tauri application: {}", e);
            std::process::exit(1);
        });

    app.run(|app_handle, event| {
        // Exits that bypass the tray menu (session end, signals) still save
        if let RunEvent::ExitRequested { api, .. } = &event {
            window::on_exit_requested(app_handle, api);
        }
    });
}
