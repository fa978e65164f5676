use crate::ProfileName;

use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Launcher core errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The `HOME` environment variable is not set.
    #[error("HOME is not set, cannot locate elm {location}")]
    HomeNotSet {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A launch was requested while the managed application is already running.
    #[error("Launch rejected, already running (profile: {running:?}) {location}")]
    LaunchRejected {
        /// Profile of the run currently in progress (None = default profile).
        running: Option<ProfileName>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Spawning a subprocess failed.
    #[error("Failed to spawn {program:?}: {source} {location}")]
    SpawnFailed {
        /// Program that could not be started.
        program: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Listing the profiles root failed for a reason other than absence.
    #[error("Failed to scan profiles in {path:?}: {source} {location}")]
    ProfileScanFailed {
        /// Directory that was being scanned.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A menu id did not correspond to any known action.
    #[error("Unknown menu action: {id} {location}")]
    UnknownMenuAction {
        /// The unrecognised menu id.
        id: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The state-change event receiver was dropped.
    #[error("Supervisor event channel closed {location}")]
    EventChannelClosed {
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
