use tauri::image::Image;
use tauri::menu::{Menu, MenuItem};
use tauri::tray::TrayIconBuilder;
use tauri::{App, AppHandle};

use log::error;

use super::window;

pub const TRAY_ID: &str = "ditto-tray";

const ICON_SIZE: u32 = 64;
const ICON_GREY: [u8; 4] = [128, 128, 128, 255];

/// Flat grey square, drawn at runtime so the tray has no asset dependency
fn tray_icon() -> Image<'static> {
    let rgba = ICON_GREY.repeat((ICON_SIZE * ICON_SIZE) as usize);
    Image::new_owned(rgba, ICON_SIZE, ICON_SIZE)
}

/// Build the tray icon with its Show / Exit menu. It starts hidden and is
/// only shown while the main window is in the tray.
pub fn build(app: &App) -> tauri::Result<()> {
    let show_item = MenuItem::with_id(app, "show", "Show", true, None::<&str>)?;
    let exit_item = MenuItem::with_id(app, "exit", "Exit", true, None::<&str>)?;
    let menu = Menu::with_items(app, &[&show_item, &exit_item])?;

    let tray = TrayIconBuilder::with_id(TRAY_ID)
        .icon(tray_icon())
        .tooltip("Ditto")
        .menu(&menu)
        .on_menu_event(|app, event| match event.id().as_ref() {
            "show" => {
                if let Err(e) = window::restore_from_tray(app) {
                    error!("Failed to restore window: {}", e);
                }
            }
            "exit" => {
                let app_handle = app.clone();
                tauri::async_runtime::spawn(async move {
                    window::exit_application(&app_handle).await;
                });
            }
            _ => {}
        })
        .build(app)?;

    tray.set_visible(false)
}

pub fn set_visible(app: &AppHandle, visible: bool) -> tauri::Result<()> {
    match app.tray_by_id(TRAY_ID) {
        Some(tray) => tray.set_visible(visible),
        None => Ok(()),
    }
}
