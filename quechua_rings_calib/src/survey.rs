// Ring surveys: from raw samples at each position to a calibration.
//
// For a ring with n positions the operator sets the ring to each position
// in turn while the sensor is sampled. Per position we keep the median
// (the distance) and the population standard deviation (the noise). Then:
//
//   spacing       = mean adjacent difference of the medians
//   zero_distance = median[n / 2] - (n / 2) * spacing
//
// Anchoring at the middle position rather than position 0 keeps a noisy
// first reading from shifting the whole ring.
//
// `Surveyor` drives a live `RangeSensor`; `survey_recorded` does the same
// from samples recorded earlier (the CLI's `survey` subcommand).

use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

use quechua_rings_lang::suffixes::vocabulary;
use quechua_rings_lang::{SLOT_COUNT, Slot};

use crate::calibration::{CalibrationSet, RingCalibration};
use crate::config::RingsConfig;
use crate::error::{CalibError, CalibResult};
use crate::stats::{average_difference, mean, median, std_dev};

/// One distance source per ring. Implemented by the GPIO driver on the
/// device and by scripted sensors in tests.
pub trait RangeSensor {
    /// Distance in cm for `ring`, or `None` if no echo came back in time.
    fn measure_cm(&mut self, ring: usize) -> Option<f32>;
}

/// Median and spread of the samples taken at one ring position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionStats {
    pub median: f32,
    pub std_dev: f32,
}

/// How reliably positions can be told apart, from spacing vs. noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Reliability {
    UsuallyFail,
    SlightlyMoreThanFail,
    MoreOftenThanNot,
    Usually,
    AlmostAlways,
}

impl Reliability {
    /// Grade `spacing` against the mean per-position standard deviation.
    pub fn grade(spacing: f32, noise: f32) -> Self {
        if spacing > 3.0 * noise {
            Reliability::AlmostAlways
        } else if spacing > 2.0 * noise {
            Reliability::Usually
        } else if spacing > noise {
            Reliability::MoreOftenThanNot
        } else if spacing > 0.5 * noise {
            Reliability::SlightlyMoreThanFail
        } else {
            Reliability::UsuallyFail
        }
    }
}

impl fmt::Display for Reliability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Reliability::AlmostAlways => "almost always work",
            Reliability::Usually => "usually work",
            Reliability::MoreOftenThanNot => "work more often than not",
            Reliability::SlightlyMoreThanFail => "work slightly more than fail",
            Reliability::UsuallyFail => "usually fail",
        };
        f.write_str(text)
    }
}

/// Per-position statistics for one ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingSurvey {
    positions: Vec<PositionStats>,
}

impl RingSurvey {
    /// Summarize one sample set per position. Needs at least two positions,
    /// each with at least one sample.
    pub fn from_samples(samples: &[Vec<f32>]) -> CalibResult<Self> {
        if samples.len() < 2 {
            return Err(CalibError::NotEnoughSamples {
                needed: 2,
                got: samples.len(),
            });
        }
        let positions = samples
            .iter()
            .map(|s| {
                Ok(PositionStats {
                    median: median(s)?,
                    std_dev: std_dev(s)?,
                })
            })
            .collect::<CalibResult<Vec<_>>>()?;
        Ok(RingSurvey { positions })
    }

    pub fn positions(&self) -> &[PositionStats] {
        &self.positions
    }

    pub fn medians(&self) -> Vec<f32> {
        self.positions.iter().map(|p| p.median).collect()
    }

    pub fn spacing(&self) -> CalibResult<f32> {
        average_difference(&self.medians())
    }

    /// Mean of the per-position standard deviations.
    pub fn noise(&self) -> CalibResult<f32> {
        let devs: Vec<f32> = self.positions.iter().map(|p| p.std_dev).collect();
        mean(&devs)
    }

    pub fn reliability(&self) -> CalibResult<Reliability> {
        Ok(Reliability::grade(self.spacing()?, self.noise()?))
    }

    /// Calibration anchored at the middle position.
    pub fn calibration(&self) -> CalibResult<RingCalibration> {
        let spacing = self.spacing()?;
        let anchor = self.positions.len() / 2;
        let zero = self.positions[anchor].median - anchor as f32 * spacing;
        RingCalibration::new(zero, spacing)
    }
}

/// Check that recorded samples cover every ring and every position.
fn check_shape(samples: &[Vec<Vec<f32>>]) -> CalibResult<()> {
    if samples.len() < SLOT_COUNT {
        return Err(CalibError::NotEnoughRings {
            needed: SLOT_COUNT,
            found: samples.len(),
        });
    }
    for (slot, ring) in Slot::ALL.into_iter().zip(samples) {
        let expected = vocabulary(slot).len();
        if ring.len() != expected {
            return Err(CalibError::PositionCount {
                ring: slot.index(),
                expected,
                found: ring.len(),
            });
        }
    }
    Ok(())
}

/// Survey every ring from recorded samples, indexed `[ring][position][sample]`.
pub fn survey_recorded(samples: &[Vec<Vec<f32>>]) -> CalibResult<Vec<RingSurvey>> {
    check_shape(samples)?;
    samples[..SLOT_COUNT]
        .iter()
        .map(|ring| RingSurvey::from_samples(ring))
        .collect()
}

/// Build a calibration set from one survey per ring.
pub fn calibrate(surveys: &[RingSurvey]) -> CalibResult<CalibrationSet> {
    let rings = surveys
        .iter()
        .take(SLOT_COUNT)
        .map(RingSurvey::calibration)
        .collect::<CalibResult<Vec<_>>>()?;
    let found = rings.len();
    let rings: [RingCalibration; SLOT_COUNT] =
        rings.try_into().map_err(|_| CalibError::NotEnoughRings {
            needed: SLOT_COUNT,
            found,
        })?;
    Ok(CalibrationSet::new(rings))
}

/// Samples a live sensor for surveys and for the polling loop.
pub struct Surveyor<'a, S: RangeSensor> {
    sensor: &'a mut S,
    points_per_position: usize,
    interval: Duration,
}

impl<'a, S: RangeSensor> Surveyor<'a, S> {
    pub fn new(sensor: &'a mut S, config: &RingsConfig) -> Self {
        Surveyor {
            sensor,
            points_per_position: config.points_per_position,
            interval: Duration::from_millis(config.sample_interval_ms),
        }
    }

    /// One reading from every ring, in slot order.
    pub fn sweep(&mut self) -> [Option<f32>; SLOT_COUNT] {
        std::array::from_fn(|ring| self.sensor.measure_cm(ring))
    }

    /// Take `points_per_position` readings of `ring`. Missed echoes are
    /// skipped rather than recorded.
    pub fn sample(&mut self, ring: usize) -> Vec<f32> {
        let mut samples = Vec::with_capacity(self.points_per_position);
        for i in 0..self.points_per_position {
            match self.sensor.measure_cm(ring) {
                Some(d) => samples.push(d),
                None => warn!(ring, sample = i, "no echo while surveying"),
            }
            if !self.interval.is_zero() {
                std::thread::sleep(self.interval);
            }
        }
        samples
    }

    /// Survey one ring. `set_position` is called before each position is
    /// sampled so the caller can prompt the operator and wait.
    pub fn survey_ring(
        &mut self,
        slot: Slot,
        mut set_position: impl FnMut(usize),
    ) -> CalibResult<RingSurvey> {
        let ring = slot.index();
        let positions = vocabulary(slot).len();
        let mut samples = Vec::with_capacity(positions);
        for p in 0..positions {
            set_position(p);
            samples.push(self.sample(ring));
        }
        let survey = RingSurvey::from_samples(&samples)?;
        info!(ring, reliability = %survey.reliability()?, "ring surveyed");
        Ok(survey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    /// Evenly spaced positions with a little symmetric jitter.
    fn ring_samples(positions: usize, zero: f32, spacing: f32) -> Vec<Vec<f32>> {
        (0..positions)
            .map(|p| {
                let d = zero + spacing * p as f32;
                vec![d - 0.2, d, d + 0.2, d, d - 0.1, d + 0.1, d]
            })
            .collect()
    }

    fn recorded() -> Vec<Vec<Vec<f32>>> {
        Slot::ALL
            .iter()
            .map(|s| ring_samples(vocabulary(*s).len(), 10.0 + s.index() as f32, 3.0))
            .collect()
    }

    #[test]
    fn survey_recovers_calibration() {
        let survey = RingSurvey::from_samples(&ring_samples(4, 12.0, 3.0)).unwrap();
        let cal = survey.calibration().unwrap();
        assert!(close(cal.zero_distance, 12.0), "{cal:?}");
        assert!(close(cal.spacing, 3.0), "{cal:?}");
    }

    #[test]
    fn calibration_anchors_at_middle_position() {
        // Position 0 reads 2 cm long.
        let samples = vec![vec![12.0], vec![13.0], vec![16.0], vec![19.0]];
        let survey = RingSurvey::from_samples(&samples).unwrap();
        let cal = survey.calibration().unwrap();
        // spacing = (19 - 12) / 3, zero = 16 - 2 * spacing
        assert!(close(cal.spacing, 7.0 / 3.0));
        assert!(close(cal.zero_distance, 16.0 - 14.0 / 3.0));
    }

    #[test]
    fn survey_needs_two_positions() {
        assert!(RingSurvey::from_samples(&[vec![1.0, 2.0]]).is_err());
        assert!(RingSurvey::from_samples(&[vec![1.0], vec![]]).is_err());
    }

    #[test]
    fn reversed_ring_cannot_calibrate() {
        let samples = vec![vec![20.0], vec![15.0], vec![10.0]];
        let survey = RingSurvey::from_samples(&samples).unwrap();
        assert!(matches!(
            survey.calibration(),
            Err(CalibError::InvalidSpacing(_))
        ));
    }

    #[test]
    fn reliability_grades() {
        assert_eq!(Reliability::grade(3.1, 1.0), Reliability::AlmostAlways);
        assert_eq!(Reliability::grade(3.0, 1.0), Reliability::Usually);
        assert_eq!(Reliability::grade(1.5, 1.0), Reliability::MoreOftenThanNot);
        assert_eq!(Reliability::grade(0.75, 1.0), Reliability::SlightlyMoreThanFail);
        assert_eq!(Reliability::grade(0.5, 1.0), Reliability::UsuallyFail);
        assert_eq!(Reliability::grade(3.0, 0.0), Reliability::AlmostAlways);
        assert_eq!(Reliability::AlmostAlways.to_string(), "almost always work");
    }

    #[test]
    fn quiet_ring_is_reliable() {
        let survey = RingSurvey::from_samples(&ring_samples(5, 10.0, 3.0)).unwrap();
        assert_eq!(survey.reliability().unwrap(), Reliability::AlmostAlways);
    }

    #[test]
    fn recorded_survey_calibrates_every_ring() {
        let surveys = survey_recorded(&recorded()).unwrap();
        let set = calibrate(&surveys).unwrap();
        for (i, ring) in set.rings().iter().enumerate() {
            assert!(close(ring.zero_distance, 10.0 + i as f32), "ring {i}: {ring:?}");
            assert!(close(ring.spacing, 3.0), "ring {i}: {ring:?}");
        }
    }

    #[test]
    fn recorded_survey_checks_position_counts() {
        let mut samples = recorded();
        samples[3].pop();
        let err = survey_recorded(&samples).unwrap_err();
        assert!(matches!(
            err,
            CalibError::PositionCount {
                ring: 3,
                expected: 7,
                found: 6
            }
        ));
    }

    #[test]
    fn recorded_survey_checks_ring_count() {
        let samples = recorded()[..4].to_vec();
        assert!(matches!(
            survey_recorded(&samples),
            Err(CalibError::NotEnoughRings { found: 4, .. })
        ));
    }

    /// Replays fixed distances per ring, position by position.
    struct ScriptedSensor {
        distance: [f32; SLOT_COUNT],
        misses_left: usize,
        calls: usize,
    }

    impl RangeSensor for ScriptedSensor {
        fn measure_cm(&mut self, ring: usize) -> Option<f32> {
            self.calls += 1;
            if self.misses_left > 0 {
                self.misses_left -= 1;
                return None;
            }
            Some(self.distance[ring])
        }
    }

    fn quick_config() -> RingsConfig {
        RingsConfig {
            points_per_position: 5,
            sample_interval_ms: 0,
            ..Default::default()
        }
    }

    #[test]
    fn sample_skips_missed_echoes() {
        let mut sensor = ScriptedSensor {
            distance: [20.0; SLOT_COUNT],
            misses_left: 2,
            calls: 0,
        };
        let config = quick_config();
        let samples = Surveyor::new(&mut sensor, &config).sample(0);
        assert_eq!(samples, vec![20.0, 20.0, 20.0]);
        assert_eq!(sensor.calls, 5);
    }

    #[test]
    fn sweep_reads_every_ring() {
        let mut sensor = ScriptedSensor {
            distance: [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            misses_left: 1,
            calls: 0,
        };
        let config = quick_config();
        let readings = Surveyor::new(&mut sensor, &config).sweep();
        assert_eq!(
            readings,
            [None, Some(2.0), Some(3.0), Some(4.0), Some(5.0), Some(6.0)]
        );
    }

    #[test]
    fn survey_ring_prompts_each_position() {
        let mut sensor = ScriptedSensor {
            distance: [10.0; SLOT_COUNT],
            misses_left: 0,
            calls: 0,
        };
        let config = quick_config();
        let mut prompted = Vec::new();
        let mut surveyor = Surveyor::new(&mut sensor, &config);
        let survey = surveyor
            .survey_ring(Slot::Phase, |p| prompted.push(p))
            .unwrap();
        assert_eq!(prompted, vec![0, 1, 2]);
        assert_eq!(survey.positions().len(), 3);
        assert_eq!(sensor.calls, 15);
    }
}
