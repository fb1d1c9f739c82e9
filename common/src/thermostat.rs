use tracing::{debug, trace, warn};

use crate::{
    command::ThermostatCommand,
    config::{maximum_temperature_for, DEFAULT_TEMPERATURE, MAX_LIMIT_PSM_ON, MINIMUM_TEMPERATURE},
    types::{EnergyUsage, ThermostatStatus},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thermostat {
    temperature: i32,
    power_saving_mode: bool,
}

impl Default for Thermostat {
    fn default() -> Self {
        Self::new()
    }
}

impl Thermostat {
    pub fn new() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            power_saving_mode: true,
        }
    }

    pub fn current_temperature(&self) -> i32 {
        self.temperature
    }

    pub fn is_power_saving_mode_on(&self) -> bool {
        self.power_saving_mode
    }

    /// Ceiling for the current power-saving mode.
    pub fn maximum_temperature(&self) -> i32 {
        maximum_temperature_for(self.power_saving_mode)
    }

    /// Also true when the value sits above the ceiling after power saving
    /// was switched back on, so `up` never climbs further from there.
    pub fn is_maximum_temperature(&self) -> bool {
        self.temperature >= self.maximum_temperature()
    }

    pub fn is_minimum_temperature(&self) -> bool {
        self.temperature <= MINIMUM_TEMPERATURE
    }

    pub fn up(&mut self) {
        if self.is_maximum_temperature() {
            debug!(
                temperature = self.temperature,
                limit = self.maximum_temperature(),
                "temperature at maximum, ignoring up"
            );
            return;
        }
        self.temperature += 1;
    }

    pub fn down(&mut self) {
        if self.is_minimum_temperature() {
            debug!(
                temperature = self.temperature,
                limit = MINIMUM_TEMPERATURE,
                "temperature at minimum, ignoring down"
            );
            return;
        }
        self.temperature -= 1;
    }

    pub fn switch_power_saving_mode_off(&mut self) {
        debug!(temperature = self.temperature, "power saving mode off");
        self.power_saving_mode = false;
    }

    /// Leaves the temperature alone even when it is above the power-saving
    /// ceiling; only `down` brings it back.
    pub fn switch_power_saving_mode_on(&mut self) {
        if self.temperature > MAX_LIMIT_PSM_ON {
            warn!(
                temperature = self.temperature,
                limit = MAX_LIMIT_PSM_ON,
                "power saving mode on while above its ceiling"
            );
        } else {
            debug!(temperature = self.temperature, "power saving mode on");
        }
        self.power_saving_mode = true;
    }

    pub fn reset_temperature(&mut self) {
        debug!(from = self.temperature, "temperature reset");
        self.temperature = DEFAULT_TEMPERATURE;
    }

    pub fn energy_usage(&self) -> EnergyUsage {
        EnergyUsage::from_temperature(self.temperature)
    }

    /// Runs a parsed command and reports whether temperature or mode changed.
    pub fn apply(&mut self, command: ThermostatCommand) -> bool {
        let before = self.clone();
        match command {
            ThermostatCommand::Up => self.up(),
            ThermostatCommand::Down => self.down(),
            ThermostatCommand::PowerSavingOn => self.switch_power_saving_mode_on(),
            ThermostatCommand::PowerSavingOff => self.switch_power_saving_mode_off(),
            ThermostatCommand::Reset => self.reset_temperature(),
        }
        let changed = *self != before;
        trace!(
            command = command.as_str(),
            changed,
            temperature = self.temperature,
            "applied command"
        );
        changed
    }

    pub fn status(&self) -> ThermostatStatus {
        ThermostatStatus {
            temperature: self.temperature,
            power_saving_mode: self.power_saving_mode,
            maximum_temperature: self.maximum_temperature(),
            energy_usage: self.energy_usage(),
        }
    }
}
