use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{LOW_USAGE_LIMIT, MEDIUM_USAGE_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUsage {
    #[serde(rename = "low-usage")]
    Low,
    #[serde(rename = "medium-usage")]
    Medium,
    #[serde(rename = "high-usage")]
    High,
}

impl EnergyUsage {
    /// Classifies a temperature. Power-saving mode plays no part.
    pub fn from_temperature(temperature: i32) -> Self {
        if temperature < LOW_USAGE_LIMIT {
            Self::Low
        } else if temperature <= MEDIUM_USAGE_LIMIT {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low-usage",
            Self::Medium => "medium-usage",
            Self::High => "high-usage",
        }
    }
}

impl fmt::Display for EnergyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThermostatStatus {
    pub temperature: i32,
    #[serde(rename = "powerSavingMode")]
    pub power_saving_mode: bool,
    #[serde(rename = "maximumTemperature")]
    pub maximum_temperature: i32,
    #[serde(rename = "energyUsage")]
    pub energy_usage: EnergyUsage,
}
