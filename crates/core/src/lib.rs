//! Domain logic for the roomsense history query engine.
//!
//! Resolves ambiguous caller time selections into precise UTC windows,
//! projects stored UTC readings into a display timezone, and measures
//! streaks of sustained temperature increase. All IO happens behind the
//! [`store::RecordStore`] and [`sensor::SensorReader`] ports; this crate
//! holds no connections and no shared mutable state.

pub mod error;
pub mod history;
pub mod projection;
pub mod sensor;
pub mod store;
pub mod streak;
pub mod types;
pub mod window;

pub use error::CoreError;
