// Ultrasonic ring calibration and decoding.
//
// Each suffix ring on the device carries a reflector, and one distance
// sensor per ring measures how far the ring has been turned. This crate
// turns those distances into ring positions and then into a `WordForm`
// that `quechua_rings_lang` can translate.
//
// Architecture:
// - `stats.rs`: median, standard deviation, adjacent-difference mean
// - `survey.rs`: `RangeSensor`, `Surveyor`, `RingSurvey`, `Reliability`
// - `calibration.rs`: `RingCalibration`, the two-column calibration file
// - `decoder.rs`: `RingDecoder`, readings -> positions -> `WordForm`
// - `config.rs`: `RingsConfig` (JSON, every field defaulted)
// - `error.rs`: `CalibError`
//
// The GPIO sensor driver lives outside this crate; anything implementing
// `RangeSensor` can be surveyed.

pub mod calibration;
pub mod config;
pub mod decoder;
pub mod error;
pub mod stats;
pub mod survey;

pub use calibration::{CalibrationSet, RingCalibration};
pub use config::RingsConfig;
pub use decoder::RingDecoder;
pub use error::{CalibError, CalibResult};
pub use survey::{
    PositionStats, RangeSensor, Reliability, RingSurvey, Surveyor, calibrate, survey_recorded,
};
