//! # beseda-shared
//!
//! Types shared by the store and the client shell: identifier newtypes, the
//! closed enumerations of settings and profile fields, the message time
//! source and a few UI constants.

pub mod clock;
pub mod constants;
pub mod error;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use types::{ChatId, MessageId, ProfileField, Sender, SettingFlag};
