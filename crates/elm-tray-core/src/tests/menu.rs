use crate::{
    CoreError, MenuAction, MenuEntry, MenuModel, OneShotCommand, ProfileName, RunState,
    build_menu, current_menu,
};

use std::fs;

fn profiles(names: &[&str]) -> Vec<ProfileName> {
    names.iter().copied().map(ProfileName::new).collect()
}

fn labels(entries: &[MenuEntry]) -> Vec<Option<&str>> {
    entries.iter().map(MenuEntry::label).collect()
}

fn trailing_labels() -> Vec<Option<&'static str>> {
    vec![
        None,
        Some("Status"),
        Some("Logs"),
        Some("System Check"),
        Some("Check Updates"),
        None,
        Some("Edit Config"),
        None,
        Some("Quit"),
    ]
}

/// WHAT: Zero or one profile produce a single default launch leaf
/// WHY: The profile submenu only appears when there is a choice to make
#[test]
fn given_at_most_one_profile_when_building_then_single_launch_leaf() {
    for names in [&[][..], &["main"][..]] {
        // Given: Zero or one discovered profile
        let profiles = profiles(names);

        // When: Building the menu
        let menu = build_menu(&RunState::Idle, &profiles);

        // Then: First entry launches the default profile
        assert_eq!(
            menu.entries[0],
            MenuEntry::Action {
                label: "Launch EVE".to_string(),
                action: MenuAction::Launch { profile: None },
            }
        );
        assert_eq!(labels(&menu.entries[1..]), trailing_labels());
    }
}

/// WHAT: Two or more profiles produce a Launch group in sorted order
/// WHY: Each profile must be individually launchable
#[test]
#[allow(clippy::panic)]
fn given_multiple_profiles_when_building_then_launch_group_with_default_first() {
    // Given: Three sorted profiles
    let profiles = profiles(&["alt", "main", "trade"]);

    // When: Building the menu
    let menu = build_menu(&RunState::Idle, &profiles);

    // Then: Launch group holds Default, separator, then one leaf per profile
    let MenuEntry::Group { label, children } = &menu.entries[0] else {
        panic!("expected launch group, got {:?}", menu.entries[0]);
    };
    assert_eq!(label, "Launch");
    assert_eq!(
        labels(children),
        [Some("Default"), None, Some("alt"), Some("main"), Some("trade")]
    );
    assert_eq!(
        children[3],
        MenuEntry::Action {
            label: "main".to_string(),
            action: MenuAction::Launch {
                profile: Some(ProfileName::new("main")),
            },
        }
    );
}

/// WHAT: Run state does not change the menu layout
/// WHY: There is no Stop action; rebuilds on state change keep the same items
#[test]
fn given_running_state_when_building_then_same_menu_as_idle() {
    // Given: Two profiles
    let profiles = profiles(&["alt", "main"]);

    // When: Building for idle and for running
    let idle = build_menu(&RunState::Idle, &profiles);
    let running = build_menu(&RunState::Running(None), &profiles);

    // Then: Menus are identical
    assert_eq!(idle, running);
}

/// WHAT: Two rebuilds without a state change are structurally identical
/// WHY: Rebuild must be idempotent
#[test]
#[allow(clippy::unwrap_used)]
fn given_unchanged_state_when_rebuilding_twice_then_identical_models() {
    // Given: A profiles root with two profiles
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("eve-one")).unwrap();
    fs::create_dir(root.path().join("eve-two")).unwrap();

    // When: Rebuilding twice
    let first = current_menu(root.path(), &RunState::Idle);
    let second = current_menu(root.path(), &RunState::Idle);

    // Then: Both models are equal
    assert_eq!(first, second);
}

/// WHAT: Two eve- directories end up as a sorted Launch group
/// WHY: End-to-end path from filesystem to displayed menu
#[test]
#[allow(clippy::unwrap_used, clippy::panic)]
fn given_red_and_blue_profiles_when_rebuilding_then_full_menu_in_order() {
    // Given: eve-red and eve-blue on disk
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("eve-red")).unwrap();
    fs::create_dir(root.path().join("eve-blue")).unwrap();

    // When: Building the current menu
    let MenuModel { entries } = current_menu(root.path(), &RunState::Idle);

    // Then: Launch group [Default, sep, blue, red] followed by the fixed items
    let MenuEntry::Group { label, children } = &entries[0] else {
        panic!("expected launch group, got {:?}", entries[0]);
    };
    assert_eq!(label, "Launch");
    assert_eq!(
        labels(children),
        [Some("Default"), None, Some("blue"), Some("red")]
    );
    assert_eq!(labels(&entries[1..]), trailing_labels());
}

/// WHAT: An unreadable profiles root still yields a menu
/// WHY: A rebuild must never fail
#[test]
#[allow(clippy::unwrap_used)]
fn given_unreadable_root_when_rebuilding_then_default_launch_only() {
    // Given: A file where the profiles root should be
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("prefixes");
    fs::write(&root, b"").unwrap();

    // When: Building the current menu
    let menu = current_menu(&root, &RunState::Idle);

    // Then: Same as no profiles
    assert_eq!(menu, build_menu(&RunState::Idle, &[]));
}

/// WHAT: Menu actions survive the trip through a menu id
/// WHY: The tray only hands back the id of the selected item
#[test]
#[allow(clippy::unwrap_used)]
fn given_every_action_kind_when_parsing_menu_id_then_same_action() {
    // Given: One action of each kind, including a profile with a colon
    let mut actions = vec![
        MenuAction::Launch { profile: None },
        MenuAction::Launch {
            profile: Some(ProfileName::new("main:2")),
        },
        MenuAction::Quit,
    ];
    actions.extend(OneShotCommand::ALL.into_iter().map(MenuAction::Command));

    for action in actions {
        // When: Formatting and parsing the id
        let parsed: MenuAction = action.to_string().parse().unwrap();

        // Then: The action is unchanged
        assert_eq!(parsed, action);
    }
}

/// WHAT: Unknown menu ids are rejected
/// WHY: Foreign menu events must not trigger an action
#[test]
fn given_unknown_id_when_parsing_then_unknown_menu_action() {
    // Given/When: Parsing an id no action produces
    let result = "stop".parse::<MenuAction>();

    // Then: UnknownMenuAction is returned
    assert!(matches!(result, Err(CoreError::UnknownMenuAction { .. })));
}
