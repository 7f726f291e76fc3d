//! Platform selection

use std::fmt;
use std::str::FromStr;

/// Game platform whose worldstate is polled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// PC (default)
    #[default]
    Pc,
    /// PlayStation 4
    Ps4,
    /// Xbox One
    Xb1,
    /// Nintendo Switch
    Switch,
}

impl Platform {
    /// Path segment used by the worldstate API
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::Ps4 => "ps4",
            Platform::Xb1 => "xb1",
            Platform::Switch => "swi",
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pc" => Ok(Platform::Pc),
            "ps4" => Ok(Platform::Ps4),
            "xb1" => Ok(Platform::Xb1),
            "swi" | "switch" => Ok(Platform::Switch),
            other => Err(format!("unknown platform: {}", other)),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
