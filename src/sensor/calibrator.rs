//! Calibration sampling.
//!
//! Collects raw tilt samples over a bounded window and averages them into a
//! zero offset. The window closes after a fixed sample count or a timeout,
//! whichever comes first; timestamps come from the samples themselves so the
//! collector has no hidden clock and always terminates with the stream.

use crate::errors::{AppError, AppResult};
use crate::models::Calibration;
use crate::sensor::TiltSample;

/// Samples to collect before the window closes on its own.
pub const CALIBRATION_SAMPLE_TARGET: usize = 30;

/// Longest a calibration run may wait for its samples.
pub const CALIBRATION_WINDOW_MS: u64 = 5_000;

#[derive(Debug, Clone)]
pub struct CalibratorConfig {
    pub sample_target: usize,
    pub window_ms: u64,
}

impl Default for CalibratorConfig {
    fn default() -> Self {
        Self {
            sample_target: CALIBRATION_SAMPLE_TARGET,
            window_ms: CALIBRATION_WINDOW_MS,
        }
    }
}

/// Accumulates tilt samples for one calibration run.
pub struct Calibrator {
    config: CalibratorConfig,
    started_at_ms: Option<u64>,
    sum: [f64; 3],
    count: usize,
    closed: bool,
}

impl Calibrator {
    pub fn new(config: CalibratorConfig) -> Self {
        Self {
            config,
            started_at_ms: None,
            sum: [0.0; 3],
            count: 0,
            closed: false,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(CalibratorConfig::default())
    }

    /// Feed one sample. Returns `true` once the window is satisfied;
    /// further samples are ignored after that.
    pub fn offer(&mut self, sample: &TiltSample) -> bool {
        if self.closed {
            return true;
        }

        let started = *self.started_at_ms.get_or_insert(sample.timestamp_ms);

        // A sample arriving past the window closes the run without being
        // counted; the stream may stall arbitrarily between samples.
        if sample.timestamp_ms.saturating_sub(started) >= self.config.window_ms {
            self.closed = true;
            return true;
        }

        self.sum[0] += sample.beta;
        self.sum[1] += sample.gamma;
        self.sum[2] += sample.alpha;
        self.count += 1;

        if self.count >= self.config.sample_target {
            self.closed = true;
        }
        self.closed
    }

    pub fn sample_count(&self) -> usize {
        self.count
    }

    /// Close the run and compute the mean offsets.
    ///
    /// Fails with [`AppError::NoSignal`] when no samples arrived: the caller
    /// must keep any previous calibration instead of writing a zero offset.
    pub fn conclude(&self, captured_at: i64) -> AppResult<Calibration> {
        if self.count == 0 {
            return Err(AppError::NoSignal);
        }

        let n = self.count as f64;
        Ok(Calibration {
            x_offset: self.sum[0] / n,
            y_offset: self.sum[1] / n,
            z_offset: self.sum[2] / n,
            captured_at,
        })
    }
}

/// Run a whole calibration pass over an already-collected sample sequence.
pub fn calibrate_from_samples(
    samples: &[TiltSample],
    config: CalibratorConfig,
    captured_at: i64,
) -> AppResult<Calibration> {
    let mut calibrator = Calibrator::new(config);

    for s in samples {
        if calibrator.offer(s) {
            break;
        }
    }

    calibrator.conclude(captured_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(beta: f64, gamma: f64, t: u64) -> TiltSample {
        TiltSample::new(0.0, beta, gamma, t)
    }

    #[test]
    fn mean_of_collected_samples() {
        let samples: Vec<_> = (0..4).map(|i| sample(2.0 + i as f64, -1.0, i * 50)).collect();
        let cal = calibrate_from_samples(&samples, CalibratorConfig::default(), 7).unwrap();

        assert!((cal.x_offset - 3.5).abs() < 1e-9);
        assert!((cal.y_offset + 1.0).abs() < 1e-9);
        assert_eq!(cal.captured_at, 7);
    }

    #[test]
    fn closes_at_sample_target() {
        let mut calibrator = Calibrator::new(CalibratorConfig {
            sample_target: 3,
            window_ms: 5_000,
        });

        assert!(!calibrator.offer(&sample(1.0, 0.0, 0)));
        assert!(!calibrator.offer(&sample(1.0, 0.0, 10)));
        assert!(calibrator.offer(&sample(1.0, 0.0, 20)));

        // Extra samples after the window closed do not skew the mean.
        calibrator.offer(&sample(100.0, 100.0, 30));
        let cal = calibrator.conclude(0).unwrap();
        assert!((cal.x_offset - 1.0).abs() < 1e-9);
    }

    #[test]
    fn closes_at_timeout_without_counting_the_late_sample() {
        let mut calibrator = Calibrator::new(CalibratorConfig {
            sample_target: 30,
            window_ms: 1_000,
        });

        calibrator.offer(&sample(2.0, 2.0, 0));
        assert!(calibrator.offer(&sample(99.0, 99.0, 1_000)));

        assert_eq!(calibrator.sample_count(), 1);
        let cal = calibrator.conclude(0).unwrap();
        assert!((cal.x_offset - 2.0).abs() < 1e-9);
    }

    #[test]
    fn zero_samples_is_an_explicit_failure() {
        let calibrator = Calibrator::with_defaults();
        assert!(matches!(calibrator.conclude(0), Err(AppError::NoSignal)));
    }
}
