use crate::{AppError, check_managed_binary};

use elm_tray_core::ElmPaths;

/// WHAT: Startup check fails when elm is not installed
/// WHY: The launcher must exit before showing a menu it cannot serve
#[test]
#[allow(clippy::unwrap_used, clippy::panic)]
fn given_missing_binary_when_checking_then_managed_binary_missing() {
    // Given: A home without ~/.local/bin/elm
    let home = tempfile::tempdir().unwrap();
    let paths = ElmPaths::from_home(home.path());

    // When: Checking the managed binary
    let result = check_managed_binary(&paths);

    // Then: ManagedBinaryMissing names the expected path
    match result {
        Err(AppError::ManagedBinaryMissing { path, .. }) => assert_eq!(path, paths.binary),
        other => panic!("expected ManagedBinaryMissing, got {:?}", other),
    }
}

/// WHAT: Startup check passes when elm is present
/// WHY: An installed binary is the only startup precondition
#[test]
#[allow(clippy::unwrap_used)]
fn given_installed_binary_when_checking_then_ok() {
    // Given: A home with ~/.local/bin/elm
    let home = tempfile::tempdir().unwrap();
    let paths = ElmPaths::from_home(home.path());
    std::fs::create_dir_all(paths.binary.parent().unwrap()).unwrap();
    std::fs::write(&paths.binary, b"").unwrap();

    // When/Then: The check succeeds
    assert!(check_managed_binary(&paths).is_ok());
}
