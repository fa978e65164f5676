use crate::{
    MenuAction, MenuEntry, MenuModel, OneShotCommand, ProfileName, RunState, discover_profiles,
};

use std::path::Path;

use tracing::{instrument, warn};

/// Build the tray menu for the given state and profiles.
///
/// The profile submenu only appears with two or more profiles; a single
/// profile is reachable through the default launch only. The run state is
/// accepted but does not change the menu layout: there is no Stop entry.
pub fn build_menu(_state: &RunState, profiles: &[ProfileName]) -> MenuModel {
    let default_launch = MenuAction::Launch { profile: None };

    let launch = if profiles.len() > 1 {
        let mut children = vec![
            MenuEntry::action("Default", default_launch),
            MenuEntry::Separator,
        ];
        children.extend(profiles.iter().map(|profile| {
            MenuEntry::action(
                profile.as_str(),
                MenuAction::Launch {
                    profile: Some(profile.clone()),
                },
            )
        }));
        MenuEntry::Group {
            label: "Launch".to_string(),
            children,
        }
    } else {
        MenuEntry::action("Launch EVE", default_launch)
    };

    let mut entries = vec![launch, MenuEntry::Separator];
    entries.extend(
        [
            OneShotCommand::Status,
            OneShotCommand::Logs,
            OneShotCommand::Doctor,
            OneShotCommand::Update,
        ]
        .into_iter()
        .map(|cmd| MenuEntry::action(cmd.label(), MenuAction::Command(cmd))),
    );
    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::action(
        OneShotCommand::ConfigEdit.label(),
        MenuAction::Command(OneShotCommand::ConfigEdit),
    ));
    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::action("Quit", MenuAction::Quit));

    MenuModel { entries }
}

/// Rediscover profiles and build the menu for `state`.
///
/// A profiles root that cannot be read is logged and treated as empty so a
/// rebuild always produces a menu.
#[instrument]
pub fn current_menu(profiles_root: &Path, state: &RunState) -> MenuModel {
    let profiles = discover_profiles(profiles_root).unwrap_or_else(|e| {
        warn!(error = ?e, "Profile discovery failed, showing default launch only");
        Vec::new()
    });

    build_menu(state, &profiles)
}
