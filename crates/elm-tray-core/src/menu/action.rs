use crate::{CoreError, ProfileName};

use std::{fmt, panic::Location, str::FromStr};

use error_location::ErrorLocation;

const LAUNCH_ID: &str = "launch";
const LAUNCH_PROFILE_PREFIX: &str = "launch:";
const QUIT_ID: &str = "quit";

/// Fire-and-forget invocations of the managed binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OneShotCommand {
    /// `elm status`
    Status,
    /// `elm logs`
    Logs,
    /// `elm doctor`
    Doctor,
    /// `elm update`
    Update,
    /// `elm config edit`
    ConfigEdit,
}

impl OneShotCommand {
    /// All commands, in menu order.
    pub const ALL: [OneShotCommand; 5] = [
        OneShotCommand::Status,
        OneShotCommand::Logs,
        OneShotCommand::Doctor,
        OneShotCommand::Update,
        OneShotCommand::ConfigEdit,
    ];

    /// Arguments passed to the managed binary.
    pub fn args(self) -> &'static [&'static str] {
        match self {
            OneShotCommand::Status => &["status"],
            OneShotCommand::Logs => &["logs"],
            OneShotCommand::Doctor => &["doctor"],
            OneShotCommand::Update => &["update"],
            OneShotCommand::ConfigEdit => &["config", "edit"],
        }
    }

    /// Whether output is shown in a terminal that waits for Enter.
    pub fn needs_terminal(self) -> bool {
        !matches!(self, OneShotCommand::ConfigEdit)
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            OneShotCommand::Status => "Status",
            OneShotCommand::Logs => "Logs",
            OneShotCommand::Doctor => "System Check",
            OneShotCommand::Update => "Check Updates",
            OneShotCommand::ConfigEdit => "Edit Config",
        }
    }

    fn menu_id(self) -> &'static str {
        match self {
            OneShotCommand::Status => "status",
            OneShotCommand::Logs => "logs",
            OneShotCommand::Doctor => "doctor",
            OneShotCommand::Update => "update",
            OneShotCommand::ConfigEdit => "config-edit",
        }
    }
}

/// What a menu leaf does when selected.
///
/// Leaves carry data rather than callbacks; a single dispatcher interprets
/// them. The [`fmt::Display`] form is the stable menu id and parses back via
/// [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Start the managed application (None = default profile).
    Launch {
        /// Profile to launch.
        profile: Option<ProfileName>,
    },
    /// Run a one-shot command.
    Command(OneShotCommand),
    /// Stop the indicator.
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::Launch { profile: None } => f.write_str(LAUNCH_ID),
            MenuAction::Launch {
                profile: Some(profile),
            } => write!(f, "{LAUNCH_PROFILE_PREFIX}{profile}"),
            MenuAction::Command(cmd) => f.write_str(cmd.menu_id()),
            MenuAction::Quit => f.write_str(QUIT_ID),
        }
    }
}

impl FromStr for MenuAction {
    type Err = CoreError;

    #[track_caller]
    fn from_str(id: &str) -> Result<Self, Self::Err> {
        if id == LAUNCH_ID {
            return Ok(MenuAction::Launch { profile: None });
        }
        if let Some(profile) = id.strip_prefix(LAUNCH_PROFILE_PREFIX) {
            return Ok(MenuAction::Launch {
                profile: Some(ProfileName::new(profile)),
            });
        }
        if id == QUIT_ID {
            return Ok(MenuAction::Quit);
        }

        OneShotCommand::ALL
            .into_iter()
            .find(|cmd| cmd.menu_id() == id)
            .map(MenuAction::Command)
            .ok_or_else(|| CoreError::UnknownMenuAction {
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
