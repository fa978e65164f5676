//! Profile discovery from the prefixes directory.
//!
//! Each `eve-<name>` sub-directory of the profiles root is one profile.

use crate::{CoreError, CoreResult};

use std::{fmt, fs, io::ErrorKind, panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Directory-name prefix marking a profile prefix directory.
pub const PROFILE_DIR_PREFIX: &str = "eve-";

/// Name of a launch profile (directory name with [`PROFILE_DIR_PREFIX`] stripped).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProfileName(String);

impl ProfileName {
    /// Wrap a profile name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProfileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Discover profiles under `base_dir`, sorted ascending.
///
/// A missing directory yields an empty list. Only directories (symlinks to
/// directories included) whose name starts with [`PROFILE_DIR_PREFIX`] count.
///
/// # Errors
///
/// Returns [`CoreError::ProfileScanFailed`] if the directory exists but
/// cannot be read.
#[track_caller]
#[instrument]
pub fn discover_profiles(base_dir: &Path) -> CoreResult<Vec<ProfileName>> {
    let entries = match fs::read_dir(base_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Profiles root does not exist");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(CoreError::ProfileScanFailed {
                path: base_dir.to_path_buf(),
                source,
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    let mut profiles = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CoreError::ProfileScanFailed {
            path: base_dir.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!(entry = ?file_name, "Skipping non UTF-8 entry");
            continue;
        };

        if let Some(profile) = name.strip_prefix(PROFILE_DIR_PREFIX)
            && entry.path().is_dir()
        {
            profiles.push(ProfileName::new(profile));
        }
    }

    profiles.sort();
    debug!(count = profiles.len(), "Profiles discovered");

    Ok(profiles)
}
