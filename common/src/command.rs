use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermostatCommand {
    Up,
    Down,
    PowerSavingOn,
    PowerSavingOff,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty thermostat command")]
    Empty,
    #[error("unknown thermostat command: {0:?}")]
    Unknown(String),
}

impl ThermostatCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::PowerSavingOn => "psm on",
            Self::PowerSavingOff => "psm off",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for ThermostatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThermostatCommand {
    type Err = CommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CommandError::Empty);
        }

        // Collapse inner whitespace so "psm   on" reads like "psm on".
        let lower = trimmed
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();

        let command = match lower.as_str() {
            "up" => Self::Up,
            "down" => Self::Down,
            "reset" => Self::Reset,
            "psm on" | "psm-on" | "power-saving on" => Self::PowerSavingOn,
            "psm off" | "psm-off" | "power-saving off" => Self::PowerSavingOff,
            _ => return Err(CommandError::Unknown(trimmed.to_string())),
        };
        Ok(command)
    }
}
