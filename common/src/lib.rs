pub mod command;
pub mod config;
pub mod thermostat;
pub mod types;

pub use command::{CommandError, ThermostatCommand};
pub use config::{
    DEFAULT_TEMPERATURE, MAX_LIMIT_PSM_OFF, MAX_LIMIT_PSM_ON, MINIMUM_TEMPERATURE,
};
pub use thermostat::Thermostat;
pub use types::{EnergyUsage, ThermostatStatus};
