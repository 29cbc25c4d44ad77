//! Sensors — motion (PIR), ultrasonic distance and climate (DHT).
//!
//! The motion and ultrasonic sensors can be switched on and off from the API;
//! the ultrasonic and climate sensors also receive readings pushed by the
//! controller.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::{Timestamp, advance};

/// Passive infrared motion sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionSensor {
    active: bool,
    last_update: Timestamp,
}

impl MotionSensor {
    /// An inactive sensor, last updated at `ts`.
    #[must_use]
    pub fn inactive(ts: Timestamp) -> Self {
        Self {
            active: false,
            last_update: ts,
        }
    }

    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn last_update(&self) -> Timestamp {
        self.last_update
    }

    pub fn set_active(&mut self, active: bool, ts: Timestamp) {
        self.active = active;
        self.last_update = advance(self.last_update, ts);
    }
}

/// Ultrasonic distance sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UltrasonicSensor {
    active: bool,
    last_update: Timestamp,
    last_distance_cm: Option<f64>,
}

impl UltrasonicSensor {
    /// An inactive sensor with no reading yet.
    #[must_use]
    pub fn inactive(ts: Timestamp) -> Self {
        Self {
            active: false,
            last_update: ts,
            last_distance_cm: None,
        }
    }

    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn last_update(&self) -> Timestamp {
        self.last_update
    }

    #[must_use]
    pub fn last_distance_cm(&self) -> Option<f64> {
        self.last_distance_cm
    }

    pub fn set_active(&mut self, active: bool, ts: Timestamp) {
        self.active = active;
        self.last_update = advance(self.last_update, ts);
    }

    /// Store a distance reading. Leaves `active` untouched.
    pub fn record(&mut self, reading: DistanceReading, ts: Timestamp) {
        self.last_distance_cm = Some(reading.centimeters());
        self.last_update = advance(self.last_update, ts);
    }
}

/// Temperature/humidity sensor. Every field is absent until the first reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClimateSensor {
    temperature: Option<f64>,
    humidity: Option<f64>,
    last_update: Option<Timestamp>,
}

impl ClimateSensor {
    #[must_use]
    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    #[must_use]
    pub fn humidity(&self) -> Option<f64> {
        self.humidity
    }

    #[must_use]
    pub fn last_update(&self) -> Option<Timestamp> {
        self.last_update
    }

    pub fn record(&mut self, reading: ClimateReading, ts: Timestamp) {
        self.temperature = Some(reading.temperature);
        self.humidity = Some(reading.humidity);
        self.last_update = Some(self.last_update.map_or(ts, |prev| advance(prev, ts)));
    }
}

/// A validated distance measurement, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceReading(f64);

impl DistanceReading {
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] for `NaN` or infinite values.
    pub fn new(centimeters: f64) -> Result<Self, ValidationError> {
        finite("distance_cm", centimeters).map(Self)
    }

    #[must_use]
    pub fn centimeters(self) -> f64 {
        self.0
    }
}

/// A validated temperature/humidity pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateReading {
    temperature: f64,
    humidity: f64,
}

impl ClimateReading {
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] naming the first offending field.
    pub fn new(temperature: f64, humidity: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            temperature: finite("temperature", temperature)?,
            humidity: finite("humidity", humidity)?,
        })
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { field })
    }
}
