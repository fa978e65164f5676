use crate::ElmPaths;

use std::path::Path;

/// WHAT: All launcher paths derive from the home directory
/// WHY: HOME is the single external input for binary, icon and profiles
#[test]
fn given_home_dir_when_deriving_paths_then_all_paths_under_home() {
    // Given: A home directory
    let home = Path::new("/home/pilot");

    // When: Deriving paths
    let paths = ElmPaths::from_home(home);

    // Then: Each path matches the expected layout
    assert_eq!(paths.binary, Path::new("/home/pilot/.local/bin/elm"));
    assert_eq!(
        paths.icon,
        Path::new("/home/pilot/.local/share/icons/eve-online.png")
    );
    assert_eq!(
        paths.profiles_root,
        Path::new("/home/pilot/.local/share/elm/prefixes")
    );
}

/// WHAT: A home without the elm binary reports it missing
/// WHY: Startup must fail before showing a menu when elm is not installed
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_home_when_checking_binary_then_missing() {
    // Given: An empty home directory
    let home = tempfile::tempdir().unwrap();

    // When: Checking for the managed binary
    let paths = ElmPaths::from_home(home.path());

    // Then: It is reported missing
    assert!(!paths.binary_exists());
}
