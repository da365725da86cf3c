// Per-ring calibration and the plain-text calibration file.
//
// A ring is described by two numbers: the distance at which position 0
// sits (`zero_distance`) and the distance between adjacent positions
// (`spacing`), both in centimetres. The file holds one ring per line:
//
//   12.480 3.105
//   18.020 3.090
//   ...
//
// written with three decimals. Only the first `SLOT_COUNT` lines are used;
// extra lines are ignored with a warning, blank lines are skipped.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use quechua_rings_lang::SLOT_COUNT;

use crate::error::{CalibError, CalibResult};

/// Distance model for one ring. Deserialization goes through `new`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RingCalibrationFields")]
pub struct RingCalibration {
    /// Sensor distance (cm) of position 0.
    pub zero_distance: f32,
    /// Distance (cm) between adjacent positions. Always > 0.
    pub spacing: f32,
}

impl RingCalibration {
    pub fn new(zero_distance: f32, spacing: f32) -> CalibResult<Self> {
        if !zero_distance.is_finite() {
            return Err(CalibError::InvalidZeroDistance(zero_distance));
        }
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(CalibError::InvalidSpacing(spacing));
        }
        Ok(RingCalibration {
            zero_distance,
            spacing,
        })
    }

    /// Ring position for a distance reading: the first position whose upper
    /// half-spacing boundary reaches the reading. `None` when the reading
    /// lies beyond the last of `positions` positions.
    pub fn position(&self, distance: f32, positions: usize) -> Option<usize> {
        let offset = distance - self.zero_distance;
        (0..positions).find(|&p| (p as f32 + 0.5) * self.spacing >= offset)
    }
}

#[derive(Deserialize)]
struct RingCalibrationFields {
    zero_distance: f32,
    spacing: f32,
}

impl TryFrom<RingCalibrationFields> for RingCalibration {
    type Error = CalibError;

    fn try_from(fields: RingCalibrationFields) -> CalibResult<Self> {
        RingCalibration::new(fields.zero_distance, fields.spacing)
    }
}

/// Calibrations for every ring, in slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationSet {
    rings: [RingCalibration; SLOT_COUNT],
}

impl CalibrationSet {
    pub fn new(rings: [RingCalibration; SLOT_COUNT]) -> Self {
        CalibrationSet { rings }
    }

    pub fn rings(&self) -> &[RingCalibration; SLOT_COUNT] {
        &self.rings
    }

    pub fn ring(&self, index: usize) -> Option<&RingCalibration> {
        self.rings.get(index)
    }

    /// Parse the two-column text format.
    pub fn parse(text: &str) -> CalibResult<Self> {
        let mut rings = Vec::with_capacity(SLOT_COUNT);
        for (i, line) in text.lines().enumerate() {
            let line_no = i + 1;
            if line.trim().is_empty() {
                continue;
            }
            if rings.len() == SLOT_COUNT {
                warn!(line = line_no, "ignoring calibration lines past the last ring");
                break;
            }
            rings.push(parse_line(line, line_no)?);
        }

        let found = rings.len();
        let rings: [RingCalibration; SLOT_COUNT] =
            rings.try_into().map_err(|_| CalibError::NotEnoughRings {
                needed: SLOT_COUNT,
                found,
            })?;
        Ok(CalibrationSet { rings })
    }

    /// Render the two-column text format.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for ring in &self.rings {
            out.push_str(&format!("{:.3} {:.3}\n", ring.zero_distance, ring.spacing));
        }
        out
    }

    pub fn load(path: &Path) -> CalibResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn save(&self, path: &Path) -> CalibResult<()> {
        std::fs::write(path, self.to_text())?;
        Ok(())
    }
}

fn parse_line(line: &str, line_no: usize) -> CalibResult<RingCalibration> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[zero, spacing] = fields.as_slice() else {
        return Err(CalibError::Parse {
            line: line_no,
            reason: format!("expected 2 numbers, found {}", fields.len()),
        });
    };
    let number = |field: &str| {
        field.parse::<f32>().map_err(|e| CalibError::Parse {
            line: line_no,
            reason: format!("'{field}': {e}"),
        })
    };
    RingCalibration::new(number(zero)?, number(spacing)?)
}
