pub const DEFAULT_TEMPERATURE: i32 = 20;
pub const MINIMUM_TEMPERATURE: i32 = 10;
pub const MAX_LIMIT_PSM_ON: i32 = 25;
pub const MAX_LIMIT_PSM_OFF: i32 = 32;

// Energy usage band edges: below LOW is low usage, above MEDIUM is high usage.
pub const LOW_USAGE_LIMIT: i32 = 18;
pub const MEDIUM_USAGE_LIMIT: i32 = 25;

pub fn maximum_temperature_for(power_saving_mode: bool) -> i32 {
    if power_saving_mode {
        MAX_LIMIT_PSM_ON
    } else {
        MAX_LIMIT_PSM_OFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_saving_lowers_ceiling() {
        assert_eq!(maximum_temperature_for(true), 25);
        assert_eq!(maximum_temperature_for(false), 32);
    }

    #[test]
    fn default_sits_inside_both_bands() {
        assert!((MINIMUM_TEMPERATURE..=MAX_LIMIT_PSM_ON).contains(&DEFAULT_TEMPERATURE));
        assert!((MINIMUM_TEMPERATURE..=MAX_LIMIT_PSM_OFF).contains(&DEFAULT_TEMPERATURE));
    }
}
