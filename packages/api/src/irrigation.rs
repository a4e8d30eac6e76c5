//! Sensor snapshot, system settings and pump control.
//!
//! Field names are camelCase on the wire to stay compatible with the dashboard
//! and the ESP8266 firmware that posts readings.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::{sync::Arc, time::Duration};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SensorSnapshot {
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    pub pump_status: bool,
    /// Time the last reading was received, `None` before the first one
    pub timestamp: Option<DateTime<Utc>>,
    pub wifi_connected: bool,
    pub thing_speak_connected: bool,
}

impl Default for SensorSnapshot {
    fn default() -> Self {
        Self {
            temperature: 28.5,
            humidity: 62.0,
            soil_moisture: 35.0,
            pump_status: false,
            timestamp: None,
            wifi_connected: true,
            thing_speak_connected: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub auto_mode: bool,
    /// Soil moisture (%) below which auto mode starts the pump
    pub moisture_threshold: u32,
    /// Minutes the pump runs after an automatic start
    pub irrigation_duration: u32,
    /// Temperature (°C) above which readings are logged as alerts
    pub temperature_alert: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_mode: true,
            moisture_threshold: 30,
            irrigation_duration: 15,
            temperature_alert: 35,
        }
    }
}

/// Partial settings change. Absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub auto_mode: Option<bool>,
    pub moisture_threshold: Option<u32>,
    pub irrigation_duration: Option<u32>,
    pub temperature_alert: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PumpControlError {
    #[error("Cannot control pump manually while auto mode is enabled")]
    AutoModeEnabled,
}

#[derive(Debug, Default)]
struct Inner {
    sensors: SensorSnapshot,
    settings: Settings,
    /// Bumped on every pump transition; an auto-stop only fires if it still
    /// matches the value it was scheduled with.
    pump_generation: u64,
}

impl Inner {
    fn set_pump(&mut self, on: bool) -> u64 {
        self.sensors.pump_status = on;
        self.pump_generation += 1;
        self.pump_generation
    }
}

#[derive(Debug, Default)]
pub struct IrrigationController {
    inner: Mutex<Inner>,
}

impl IrrigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sensors(&self) -> SensorSnapshot {
        self.inner.lock().sensors.clone()
    }

    pub fn settings(&self) -> Settings {
        self.inner.lock().settings.clone()
    }

    pub fn update_settings(&self, update: SettingsUpdate) -> Settings {
        let mut inner = self.inner.lock();
        let settings = &mut inner.settings;
        if let Some(auto_mode) = update.auto_mode {
            settings.auto_mode = auto_mode;
        }
        if let Some(threshold) = update.moisture_threshold {
            settings.moisture_threshold = threshold;
        }
        if let Some(duration) = update.irrigation_duration {
            settings.irrigation_duration = duration;
        }
        if let Some(alert) = update.temperature_alert {
            settings.temperature_alert = alert;
        }
        tracing::info!(?settings, "settings updated");
        settings.clone()
    }

    /// Store a reading and run the auto-irrigation check.
    ///
    /// Returns `true` when this reading started the pump. The pump is stopped
    /// again after `irrigation_duration` minutes unless it was switched in the
    /// meantime.
    pub fn record_reading(self: &Arc<Self>, reading: SensorReading) -> bool {
        let mut inner = self.inner.lock();
        inner.sensors.temperature = reading.temperature;
        inner.sensors.humidity = reading.humidity;
        inner.sensors.soil_moisture = reading.soil_moisture;
        inner.sensors.timestamp = Some(Utc::now());

        if reading.temperature > f64::from(inner.settings.temperature_alert) {
            tracing::warn!(
                temperature = reading.temperature,
                limit = inner.settings.temperature_alert,
                "temperature above alert level"
            );
        }

        let below_threshold = reading.soil_moisture < f64::from(inner.settings.moisture_threshold);
        if !(inner.settings.auto_mode && below_threshold) || inner.sensors.pump_status {
            return false;
        }

        let generation = inner.set_pump(true);
        let minutes = inner.settings.irrigation_duration;
        drop(inner);

        tracing::info!(
            soil_moisture = reading.soil_moisture,
            minutes,
            "auto irrigation started"
        );
        self.schedule_auto_stop(generation, Duration::from_secs(u64::from(minutes) * 60));
        true
    }

    fn schedule_auto_stop(self: &Arc<Self>, generation: u64, after: Duration) {
        let controller = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let mut inner = controller.inner.lock();
            if inner.pump_generation == generation && inner.sensors.pump_status {
                inner.set_pump(false);
                tracing::info!("auto irrigation stopped, duration completed");
            }
        });
    }

    /// Flip the pump manually. Rejected while auto mode is on.
    pub fn toggle_pump(&self) -> Result<bool, PumpControlError> {
        let mut inner = self.inner.lock();
        if inner.settings.auto_mode {
            return Err(PumpControlError::AutoModeEnabled);
        }
        let on = !inner.sensors.pump_status;
        inner.set_pump(on);
        tracing::info!("pump {} manually", if on { "started" } else { "stopped" });
        Ok(on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(soil_moisture: f64) -> SensorReading {
        SensorReading {
            temperature: 30.0,
            humidity: 55.0,
            soil_moisture,
        }
    }

    #[test]
    fn test_initial_state() {
        let controller = IrrigationController::new();
        let sensors = controller.sensors();
        assert_eq!(sensors.temperature, 28.5);
        assert_eq!(sensors.humidity, 62.0);
        assert_eq!(sensors.soil_moisture, 35.0);
        assert!(!sensors.pump_status);
        assert!(sensors.timestamp.is_none());
        assert_eq!(controller.settings(), Settings::default());
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(SensorSnapshot::default()).unwrap();
        assert!(json.get("soilMoisture").is_some());
        assert!(json.get("pumpStatus").is_some());
        assert!(json.get("thingSpeakConnected").is_some());

        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["moistureThreshold"], 30);
        assert_eq!(json["irrigationDuration"], 15);
    }

    #[test]
    fn test_partial_settings_update() {
        let controller = IrrigationController::new();
        let updated = controller.update_settings(SettingsUpdate {
            moisture_threshold: Some(45),
            ..Default::default()
        });
        assert_eq!(updated.moisture_threshold, 45);
        assert!(updated.auto_mode);
        assert_eq!(updated.irrigation_duration, 15);
        assert_eq!(updated.temperature_alert, 35);
        assert_eq!(controller.settings(), updated);
    }

    #[test]
    fn test_toggle_rejected_in_auto_mode() {
        let controller = IrrigationController::new();
        assert_eq!(
            controller.toggle_pump(),
            Err(PumpControlError::AutoModeEnabled)
        );
        assert!(!controller.sensors().pump_status);

        controller.update_settings(SettingsUpdate {
            auto_mode: Some(false),
            ..Default::default()
        });
        assert_eq!(controller.toggle_pump(), Ok(true));
        assert_eq!(controller.toggle_pump(), Ok(false));
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_irrigation_starts_and_stops() {
        let controller = Arc::new(IrrigationController::new());

        assert!(!controller.record_reading(reading(50.0)));
        assert!(!controller.sensors().pump_status);
        assert!(controller.sensors().timestamp.is_some());

        assert!(controller.record_reading(reading(20.0)));
        assert!(controller.sensors().pump_status);
        // already running
        assert!(!controller.record_reading(reading(10.0)));

        tokio::time::sleep(Duration::from_secs(14 * 60)).await;
        assert!(controller.sensors().pump_status);

        tokio::time::sleep(Duration::from_secs(2 * 60)).await;
        assert!(!controller.sensors().pump_status);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_auto_stop_is_ignored() {
        let controller = Arc::new(IrrigationController::new());
        assert!(controller.record_reading(reading(10.0)));

        // switch to manual, stop and restart by hand
        controller.update_settings(SettingsUpdate {
            auto_mode: Some(false),
            ..Default::default()
        });
        assert_eq!(controller.toggle_pump(), Ok(false));
        assert_eq!(controller.toggle_pump(), Ok(true));

        tokio::time::sleep(Duration::from_secs(16 * 60)).await;
        assert!(controller.sensors().pump_status);
    }

    #[test]
    fn test_no_trigger_in_manual_mode() {
        let controller = Arc::new(IrrigationController::new());
        controller.update_settings(SettingsUpdate {
            auto_mode: Some(false),
            ..Default::default()
        });
        assert!(!controller.record_reading(reading(5.0)));
        assert!(!controller.sensors().pump_status);
    }
}
