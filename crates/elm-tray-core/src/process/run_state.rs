use crate::ProfileName;

/// Whether the managed application is running, and under which profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunState {
    /// Nothing is running.
    #[default]
    Idle,
    /// A supervised run is in progress (None = default profile).
    Running(Option<ProfileName>),
}
