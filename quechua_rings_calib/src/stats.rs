// Descriptive statistics over raw distance samples.
//
// Each ring position is sampled repeatedly; the median is the position's
// distance, and the population standard deviation says how noisy the
// sensor was there. All functions reject empty input instead of returning
// NaN.

use crate::error::{CalibError, CalibResult};

fn require(samples: &[f32], needed: usize) -> CalibResult<()> {
    if samples.len() < needed {
        return Err(CalibError::NotEnoughSamples {
            needed,
            got: samples.len(),
        });
    }
    Ok(())
}

/// Middle value; mean of the two middle values for even lengths.
pub fn median(samples: &[f32]) -> CalibResult<f32> {
    require(samples, 1)?;
    let mut sorted = samples.to_vec();
    sorted.sort_by(f32::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

pub fn mean(samples: &[f32]) -> CalibResult<f32> {
    require(samples, 1)?;
    Ok(samples.iter().sum::<f32>() / samples.len() as f32)
}

/// Population standard deviation (divides by n).
pub fn std_dev(samples: &[f32]) -> CalibResult<f32> {
    let m = mean(samples)?;
    let n = samples.len() as f32;
    let variance = samples.iter().map(|x| (x - m) * (x - m) / n).sum::<f32>();
    Ok(variance.sqrt())
}

/// Mean of the differences between adjacent values.
pub fn average_difference(values: &[f32]) -> CalibResult<f32> {
    require(values, 2)?;
    let total: f32 = values.windows(2).map(|w| w[1] - w[0]).sum();
    Ok(total / (values.len() - 1) as f32)
}
