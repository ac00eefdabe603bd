//! Sensor adapters behind the core's [`SensorReader`] port.
//!
//! Real DHT-style GPIO drivers are an external collaborator; what ships
//! here is a simulated source for development and a disabled source for
//! deployments without hardware.

use async_trait::async_trait;
use roomsense_core::sensor::SensorReader;
use roomsense_core::types::SensorSample;

/// Returns plausible canned indoor readings.
pub struct SimulatedSensor;

#[async_trait]
impl SensorReader for SimulatedSensor {
    async fn read_current(&self) -> Option<SensorSample> {
        Some(SensorSample {
            temperature_c: 21.5,
            humidity: 42.0,
        })
    }
}

/// No sensor attached; every read reports unavailable.
pub struct DisabledSensor;

#[async_trait]
impl SensorReader for DisabledSensor {
    async fn read_current(&self) -> Option<SensorSample> {
        None
    }
}
