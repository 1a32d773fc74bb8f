use thiserror::Error;

/// A setting name coming from the UI that does not name any [`SettingFlag`].
///
/// [`SettingFlag`]: crate::types::SettingFlag
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown setting flag: {0}")]
pub struct UnknownSettingFlag(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown profile field: {0}")]
pub struct UnknownProfileField(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Invalid time of day: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
}
