//! Valve command — operator-issued desired valve position.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Desired valve position issued by an operator.
///
/// Distinct from the actual position the device reports on each
/// [`Reading`](crate::reading::Reading). There is a single process-wide
/// command shared by all polling devices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValveCommand {
    Open,
    /// The command resets to `close` on every process start.
    #[default]
    Close,
}

impl ValveCommand {
    /// Wire representation (`"open"` / `"close"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for ValveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValveCommand {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "close" => Ok(Self::Close),
            other => Err(ValidationError::UnknownValveCommand(other.to_owned())),
        }
    }
}
