//! Thresholds and polling settings

use thermoprobe_protocol::ThresholdKind;

use super::reading::SensorReading;
use crate::config::{
    DEFAULT_HYST_THRESHOLD_C, DEFAULT_OS_THRESHOLD_C, DEFAULT_POLL_INTERVAL_MS,
    MIN_POLL_INTERVAL_MS, THRESHOLD_MAX_C, THRESHOLD_MIN_C,
};

fn clamp_threshold(value_c: i32) -> u8 {
    value_c.clamp(THRESHOLD_MIN_C, THRESHOLD_MAX_C) as u8
}

/// Alert thresholds as last written to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Over-temperature threshold (°C, 0-127)
    pub os_threshold_c: u8,
    /// Hysteresis threshold (°C, 0-127)
    pub hyst_threshold_c: u8,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            os_threshold_c: DEFAULT_OS_THRESHOLD_C,
            hyst_threshold_c: DEFAULT_HYST_THRESHOLD_C,
        }
    }
}

impl SensorConfig {
    /// Create a config, clamping both thresholds into 0-127
    pub fn new(os_threshold_c: i32, hyst_threshold_c: i32) -> Self {
        Self {
            os_threshold_c: clamp_threshold(os_threshold_c),
            hyst_threshold_c: clamp_threshold(hyst_threshold_c),
        }
    }

    /// Threshold for the given register
    pub fn threshold(&self, kind: ThresholdKind) -> u8 {
        match kind {
            ThresholdKind::Overtemp => self.os_threshold_c,
            ThresholdKind::Hysteresis => self.hyst_threshold_c,
        }
    }

    /// Store a threshold, clamping into 0-127
    pub fn set_threshold(&mut self, kind: ThresholdKind, value_c: i32) {
        let value = clamp_threshold(value_c);
        match kind {
            ThresholdKind::Overtemp => self.os_threshold_c = value,
            ThresholdKind::Hysteresis => self.hyst_threshold_c = value,
        }
    }

    /// True when T_hyst <= T_os, the order the comparator needs to release
    pub fn is_ordered(&self) -> bool {
        self.hyst_threshold_c <= self.os_threshold_c
    }
}

/// Result of a poll interval change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IntervalUpdate {
    /// Applied as requested
    Set(u32),
    /// Requested value was below the floor; the floor was applied
    Clamped(u32),
}

/// Periodic polling settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollingState {
    /// Periodic polling active
    pub enabled: bool,
    /// Loop sleep between iterations (ms, >= `MIN_POLL_INTERVAL_MS`)
    interval_ms: u32,
}

impl Default for PollingState {
    fn default() -> Self {
        Self::new(true, DEFAULT_POLL_INTERVAL_MS)
    }
}

impl PollingState {
    /// Create polling settings; the interval is raised to the floor if needed
    pub fn new(enabled: bool, interval_ms: u32) -> Self {
        Self {
            enabled,
            interval_ms: interval_ms.max(MIN_POLL_INTERVAL_MS),
        }
    }

    /// Current interval in milliseconds
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Apply a requested interval
    ///
    /// Returns `None` (and leaves the interval unchanged) when the request
    /// is zero or negative.
    pub fn set_interval(&mut self, requested_ms: i32) -> Option<IntervalUpdate> {
        if requested_ms <= 0 {
            return None;
        }

        let requested = requested_ms as u32;
        if requested < MIN_POLL_INTERVAL_MS {
            self.interval_ms = MIN_POLL_INTERVAL_MS;
            Some(IntervalUpdate::Clamped(MIN_POLL_INTERVAL_MS))
        } else {
            self.interval_ms = requested;
            Some(IntervalUpdate::Set(requested))
        }
    }
}

/// All monitor state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorState {
    /// Thresholds
    pub config: SensorConfig,
    /// Polling settings
    pub polling: PollingState,
    /// Most recent successful reading
    pub last_reading: Option<SensorReading>,
}

impl SensorState {
    /// Create state with no reading yet
    pub fn new(config: SensorConfig, polling: PollingState) -> Self {
        Self {
            config,
            polling,
            last_reading: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_config_clamps() {
        let config = SensorConfig::new(-5, 300);
        assert_eq!(config.os_threshold_c, 0);
        assert_eq!(config.hyst_threshold_c, 127);
    }

    #[test]
    fn test_threshold_accessors() {
        let mut config = SensorConfig::default();
        assert_eq!(config.threshold(ThresholdKind::Overtemp), 80);
        assert_eq!(config.threshold(ThresholdKind::Hysteresis), 75);
        assert!(config.is_ordered());

        config.set_threshold(ThresholdKind::Hysteresis, 90);
        assert_eq!(config.hyst_threshold_c, 90);
        assert!(!config.is_ordered());
    }

    #[test]
    fn test_interval_boundaries() {
        let mut polling = PollingState::new(true, 500);

        assert_eq!(polling.set_interval(0), None);
        assert_eq!(polling.set_interval(-1), None);
        assert_eq!(polling.interval_ms(), 500);

        assert_eq!(polling.set_interval(1), Some(IntervalUpdate::Clamped(10)));
        assert_eq!(polling.interval_ms(), 10);

        assert_eq!(polling.set_interval(9), Some(IntervalUpdate::Clamped(10)));
        assert_eq!(polling.set_interval(10), Some(IntervalUpdate::Set(10)));
        assert_eq!(polling.set_interval(2500), Some(IntervalUpdate::Set(2500)));
        assert_eq!(polling.interval_ms(), 2500);
    }

    #[test]
    fn test_polling_new_applies_floor() {
        assert_eq!(PollingState::new(false, 3).interval_ms(), 10);
        assert!(!PollingState::new(false, 3).enabled);
    }

    proptest! {
        #[test]
        fn prop_interval_rule(start in 10u32..100_000, d in any::<i32>()) {
            let mut polling = PollingState::new(true, start);
            let result = polling.set_interval(d);
            if d <= 0 {
                prop_assert_eq!(result, None);
                prop_assert_eq!(polling.interval_ms(), start);
            } else if d < 10 {
                prop_assert_eq!(result, Some(IntervalUpdate::Clamped(10)));
                prop_assert_eq!(polling.interval_ms(), 10);
            } else {
                prop_assert_eq!(result, Some(IntervalUpdate::Set(d as u32)));
                prop_assert_eq!(polling.interval_ms(), d as u32);
            }
        }

        #[test]
        fn prop_config_always_in_range(os in any::<i32>(), hyst in any::<i32>()) {
            let config = SensorConfig::new(os, hyst);
            prop_assert!(config.os_threshold_c <= 127);
            prop_assert!(config.hyst_threshold_c <= 127);
        }
    }
}
