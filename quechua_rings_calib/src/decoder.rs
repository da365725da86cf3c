// Distance readings -> word form.
//
// The console polls one distance per ring on every sweep. Each reading is
// mapped through that ring's calibration to a position, and the position
// indexes the slot's vocabulary (ring order, see `suffixes.rs`).
//
// A reading is dropped when the sensor saw no echo, when it lies outside
// the configured range, or when it decodes past the ring's last position.
// A dropped reading leaves that ring at its previous position, so a
// momentary glitch never blanks a slot. All rings start at position 0.

use tracing::{debug, warn};

use quechua_rings_lang::suffixes::vocabulary;
use quechua_rings_lang::{SLOT_COUNT, Slot, WordForm};

use crate::calibration::CalibrationSet;
use crate::config::RingsConfig;
use crate::error::CalibResult;

/// Stateful decoder for one device.
#[derive(Debug, Clone)]
pub struct RingDecoder {
    config: RingsConfig,
    calibrations: CalibrationSet,
    positions: [usize; SLOT_COUNT],
}

impl RingDecoder {
    pub fn new(calibrations: CalibrationSet, config: &RingsConfig) -> Self {
        RingDecoder {
            config: config.clone(),
            calibrations,
            positions: [0; SLOT_COUNT],
        }
    }

    pub fn root(&self) -> &str {
        &self.config.root
    }

    /// Current position of every ring.
    pub fn positions(&self) -> [usize; SLOT_COUNT] {
        self.positions
    }

    /// Fold one sweep of readings into the ring positions. `None` means the
    /// sensor reported no echo.
    pub fn observe(&mut self, readings: [Option<f32>; SLOT_COUNT]) {
        for (slot, reading) in Slot::ALL.into_iter().zip(readings) {
            let ring = slot.index();
            let Some(distance) = reading else {
                debug!(ring, "no echo");
                continue;
            };
            if !self.config.in_range(distance) {
                warn!(ring, distance, "reading out of sensor range");
                continue;
            }
            let candidates = vocabulary(slot).len();
            match self.calibrations.rings()[ring].position(distance, candidates) {
                Some(p) => self.positions[ring] = p,
                None => debug!(ring, distance, "reading past last position"),
            }
        }
    }

    /// The word form the rings currently spell.
    pub fn word_form(&self) -> CalibResult<WordForm> {
        let mut suffixes = [""; SLOT_COUNT];
        for (slot, out) in Slot::ALL.into_iter().zip(suffixes.iter_mut()) {
            *out = vocabulary(slot)[self.positions[slot.index()]].text;
        }
        Ok(WordForm::new(&self.config.root, suffixes)?)
    }

    /// `observe` then `word_form`.
    pub fn decode(&mut self, readings: [Option<f32>; SLOT_COUNT]) -> CalibResult<WordForm> {
        self.observe(readings);
        self.word_form()
    }
}
