//! System tray icon with a menu rebuilt from launcher state.
//!
//! Owns the `!Send` tray icon on the main thread. Every rebuild rediscovers
//! profiles, builds a fresh [`MenuModel`] and swaps it in whole.

use crate::{AppError, AppResult};

use std::{panic::Location, path::PathBuf};

use elm_tray_core::{ElmPaths, MenuEntry, MenuModel, RunState, current_menu, load_icon_image};
use error_location::ErrorLocation;
use tracing::{debug, info, instrument};
use tray_icon::menu::{IsMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const TOOLTIP: &str = "EVE Linux Manager";

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    profiles_root: PathBuf,
}

impl TrayManager {
    /// Create the tray icon with the idle menu.
    #[track_caller]
    #[instrument(skip(paths))]
    pub fn new(paths: &ElmPaths) -> AppResult<Self> {
        let state = RunState::Idle;
        let menu = Self::render(&current_menu(&paths.profiles_root, &state))?;
        let icon = Self::load_icon(paths)?;

        let tray_icon = TrayIconBuilder::new()
            .with_id("elm-tray")
            .with_tooltip(Self::tooltip(&state))
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            profiles_root: paths.profiles_root.clone(),
        })
    }

    /// Rediscover profiles and replace the displayed menu for `state`.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn rebuild(&mut self, state: &RunState) -> AppResult<()> {
        let model = current_menu(&self.profiles_root, state);
        let menu = Self::render(&model)?;

        self.tray_icon.set_menu(Some(Box::new(menu)));

        self.tray_icon
            .set_tooltip(Some(Self::tooltip(state)))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(entries = model.entries.len(), "Menu rebuilt");

        Ok(())
    }

    fn tooltip(state: &RunState) -> String {
        match state {
            RunState::Idle => TOOLTIP.to_string(),
            RunState::Running(None) => format!("{TOOLTIP} - Running"),
            RunState::Running(Some(profile)) => format!("{TOOLTIP} - Running ({profile})"),
        }
    }

    #[track_caller]
    fn render(model: &MenuModel) -> AppResult<Menu> {
        let menu = Menu::new();
        for item in Self::render_entries(&model.entries)? {
            menu.append(item.as_ref()).map_err(|e| AppError::TrayError {
                reason: format!("Failed to add menu item: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }
        Ok(menu)
    }

    /// Leaf ids are the textual [`elm_tray_core::MenuAction`] so a menu event
    /// maps straight back to its action.
    #[track_caller]
    fn render_entries(entries: &[MenuEntry]) -> AppResult<Vec<Box<dyn IsMenuItem>>> {
        let mut items: Vec<Box<dyn IsMenuItem>> = Vec::with_capacity(entries.len());

        for entry in entries {
            match entry {
                MenuEntry::Action { label, action } => {
                    items.push(Box::new(MenuItem::with_id(
                        action.to_string(),
                        label,
                        true,
                        None,
                    )));
                }
                MenuEntry::Group { label, children } => {
                    let submenu = Submenu::new(label, true);
                    for child in Self::render_entries(children)? {
                        submenu
                            .append(child.as_ref())
                            .map_err(|e| AppError::TrayError {
                                reason: format!("Failed to add {} submenu item: {}", label, e),
                                location: ErrorLocation::from(Location::caller()),
                            })?;
                    }
                    items.push(Box::new(submenu));
                }
                MenuEntry::Separator => items.push(Box::new(PredefinedMenuItem::separator())),
            }
        }

        Ok(items)
    }

    /// Convert the on-disk icon (or its generated fallback) for the tray.
    #[track_caller]
    fn load_icon(paths: &ElmPaths) -> AppResult<Icon> {
        let image = load_icon_image(&paths.icon);

        Icon::from_rgba(image.rgba, image.width, image.height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
