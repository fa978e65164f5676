use crate::{CoreError, CoreResult};

use std::{
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;

/// Environment variable every launcher path is derived from.
pub const HOME_ENV: &str = "HOME";

const BINARY_REL: &str = ".local/bin/elm";
const ICON_REL: &str = ".local/share/icons/eve-online.png";
const PROFILES_ROOT_REL: &str = ".local/share/elm/prefixes";

/// Filesystem locations consumed by the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElmPaths {
    /// The managed `elm` binary.
    pub binary: PathBuf,
    /// Tray icon image (optional on disk).
    pub icon: PathBuf,
    /// Directory holding `eve-*` profile prefixes.
    pub profiles_root: PathBuf,
}

impl ElmPaths {
    /// Derive all paths from a home directory.
    pub fn from_home<P: AsRef<Path>>(home: P) -> Self {
        let home = home.as_ref();
        Self {
            binary: home.join(BINARY_REL),
            icon: home.join(ICON_REL),
            profiles_root: home.join(PROFILES_ROOT_REL),
        }
    }

    /// Derive all paths from the `HOME` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::HomeNotSet`] if `HOME` is unset or empty.
    #[track_caller]
    pub fn from_env() -> CoreResult<Self> {
        match std::env::var_os(HOME_ENV) {
            Some(home) if !home.is_empty() => Ok(Self::from_home(home)),
            _ => Err(CoreError::HomeNotSet {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Whether the managed binary is present.
    pub fn binary_exists(&self) -> bool {
        self.binary.exists()
    }
}
