//! Notice placement value object.

use crate::model::NoticeConfigError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Location token for notices placed above the page header.
pub const LOCATION_ABOVE_HEADER: &str = "above_header";
/// Location token for notices placed below the page header.
pub const LOCATION_BELOW_HEADER: &str = "below_header";
/// Location token for notices placed inline with page content.
pub const LOCATION_INLINE: &str = "inline";

/// Where a notice is positioned by the client script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLocation {
    AboveHeader,
    BelowHeader,
    Inline,
}

impl NoticeLocation {
    /// Alias of `BelowHeader`, the host's default notice position.
    pub fn standard() -> Self {
        Self::BelowHeader
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AboveHeader => LOCATION_ABOVE_HEADER,
            Self::BelowHeader => LOCATION_BELOW_HEADER,
            Self::Inline => LOCATION_INLINE,
        }
    }

    pub fn is_above_header(self) -> bool {
        self == Self::AboveHeader
    }

    pub fn is_below_header(self) -> bool {
        self == Self::BelowHeader
    }

    pub fn is_standard(self) -> bool {
        self.is_below_header()
    }

    pub fn is_inline(self) -> bool {
        self == Self::Inline
    }
}

impl FromStr for NoticeLocation {
    type Err = NoticeConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            LOCATION_ABOVE_HEADER => Ok(Self::AboveHeader),
            LOCATION_BELOW_HEADER => Ok(Self::BelowHeader),
            LOCATION_INLINE => Ok(Self::Inline),
            other => Err(NoticeConfigError::InvalidLocation(other.to_string())),
        }
    }
}

impl Display for NoticeLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
