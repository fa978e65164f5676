//! ELM Tray Core Library
//!
//! Process lifecycle and menu-state coordination for the EVE Linux Manager
//! status indicator. Everything here is free of tray/GUI types so it can be
//! driven and tested headless.
//!
//! # Example
//!
//! ```no_run
//! use elm_tray_core::{CoreResult, ElmPaths, ProcessSupervisor, RunState, SupervisorEvent};
//!
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() -> CoreResult<()> {
//!     let paths = ElmPaths::from_env()?;
//!     let (events_tx, mut events_rx) = mpsc::channel(32);
//!     let supervisor = ProcessSupervisor::new(&paths.binary, events_tx);
//!
//!     supervisor.launch(None).await?;
//!
//!     while let Some(SupervisorEvent::StateChanged { state, applied }) = events_rx.recv().await {
//!         // Rebuild the menu for `state` here; the process starts after the ack.
//!         applied.ack();
//!         if state == RunState::Idle {
//!             break;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod icon;
mod menu;
mod paths;
mod process;
mod profile;

pub use {
    error::{CoreError, Result as CoreResult},
    icon::{FALLBACK_ICON_SIZE, IconImage, load_icon_image},
    menu::{MenuAction, MenuEntry, MenuModel, OneShotCommand, build_menu, current_menu},
    paths::{ElmPaths, HOME_ENV},
    process::{
        CommandRunner, ProcessSupervisor, RebuildAck, RunState, SupervisorEvent,
        TerminalWrapper,
    },
    profile::{PROFILE_DIR_PREFIX, ProfileName, discover_profiles},
};

#[cfg(test)]
mod tests;
