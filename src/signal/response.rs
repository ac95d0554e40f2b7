//! FIR magnitude frequency response by zero-padded FFT.
//!
//! Right-padding the impulse response with zeros before transforming
//! interpolates the response between the filter's natural DFT bins without
//! altering it, so the grid density controls resolution, not accuracy. No
//! window is applied: the taps are the signal under analysis, not a
//! captured waveform.

use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D};
use crate::signal::traits::FirResponse1D;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Frequency-grid selection for [`FirResponseKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseGrid {
    /// FFT length is the tap count times this density.
    PerCoeff(usize),
    /// FFT length is fixed to this total point count, which must be at
    /// least the tap count.
    TotalPoints(usize),
}

/// Constructor config for [`FirResponseKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirResponseConfig {
    /// How the FFT length is derived from the tap count.
    pub grid: ResponseGrid,
}

/// Trait-first 1D FIR frequency-response kernel.
///
/// Output bin `i` holds the response magnitude at `i / fft_len`
/// cycles/sample, over the full circle (both spectrum halves).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirResponseKernel {
    grid: ResponseGrid,
}

impl FirResponseKernel {
    /// FFT length (and therefore output length) implied by `num_taps`.
    ///
    /// Fails when a `TotalPoints` grid is shorter than the filter itself,
    /// since zero-padding cannot shrink an impulse response.
    pub fn output_len(&self, num_taps: usize) -> Result<usize, ExecInvariantViolation> {
        match self.grid {
            ResponseGrid::PerCoeff(density) => Ok(num_taps * density),
            ResponseGrid::TotalPoints(total) => {
                if total < num_taps {
                    return Err(ExecInvariantViolation::InvalidState {
                        reason: "total points must be at least the tap count",
                    });
                }
                Ok(total)
            }
        }
    }
}

impl KernelLifecycle for FirResponseKernel {
    type Config = FirResponseConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        match config.grid {
            ResponseGrid::PerCoeff(0) => Err(ConfigError::InvalidArgument {
                arg: "grid",
                reason: "points per coefficient must be > 0",
            }),
            ResponseGrid::TotalPoints(0) => Err(ConfigError::InvalidArgument {
                arg: "grid",
                reason: "total point count must be > 0",
            }),
            _ => Ok(Self { grid: config.grid }),
        }
    }
}

impl FirResponse1D<f64> for FirResponseKernel {
    fn run_into<I, O>(&self, taps: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
        O: Write1D<f64> + ?Sized,
    {
        let taps = taps.read_slice().map_err(ExecInvariantViolation::from)?;
        if taps.is_empty() {
            return Err(ExecInvariantViolation::InvalidState {
                reason: "taps input must be non-empty",
            });
        }
        let fft_len = self.output_len(taps.len())?;
        let out = out.write_slice_mut().map_err(ExecInvariantViolation::from)?;
        if out.len() != fft_len {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected: fft_len,
                got: out.len(),
            });
        }
        let resp = response_impl(taps, fft_len);
        out.copy_from_slice(&resp);
        Ok(())
    }

    fn run_alloc<I>(&self, taps: &I) -> Result<Vec<f64>, ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
    {
        let taps = taps.read_slice().map_err(ExecInvariantViolation::from)?;
        if taps.is_empty() {
            return Err(ExecInvariantViolation::InvalidState {
                reason: "taps input must be non-empty",
            });
        }
        let fft_len = self.output_len(taps.len())?;
        Ok(response_impl(taps, fft_len))
    }
}

fn response_impl(taps: &[f64], fft_len: usize) -> Vec<f64> {
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(fft_len);
    let mut buf = vec![Complex::new(0.0, 0.0); fft_len];
    for (slot, &tap) in buf.iter_mut().zip(taps.iter()) {
        *slot = Complex::new(tap, 0.0);
    }
    fft.process(&mut buf);
    buf.into_iter().map(|c| c.norm()).collect()
}

/// Magnitude response of an FIR filter on a grid of `points_per_coeff`
/// bins per tap.
pub fn fir_response(
    taps: &[f64],
    points_per_coeff: usize,
) -> Result<Vec<f64>, ExecInvariantViolation> {
    let kernel = FirResponseKernel::try_new(FirResponseConfig {
        grid: ResponseGrid::PerCoeff(points_per_coeff),
    })
    .map_err(ExecInvariantViolation::from)?;
    kernel.run_alloc(taps)
}

/// Magnitude response of an FIR filter on a fixed total-point grid.
pub fn fir_response_numpoints(
    taps: &[f64],
    numpoints: usize,
) -> Result<Vec<f64>, ExecInvariantViolation> {
    let kernel = FirResponseKernel::try_new(FirResponseConfig {
        grid: ResponseGrid::TotalPoints(numpoints),
    })
    .map_err(ExecInvariantViolation::from)?;
    kernel.run_alloc(taps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unity_gain_average_peaks_at_dc() {
        let taps = [0.25f64; 4];
        let resp = fir_response_numpoints(&taps, 4).expect("response");
        assert_abs_diff_eq!(resp[0], 1.0, epsilon = 1e-12);
        for &bin in &resp[1..] {
            assert!(bin < 1.0);
        }
    }

    #[test]
    fn dc_bin_equals_tap_sum_for_unnormalized_taps() {
        let taps = [1.0f64; 4];
        let resp = fir_response_numpoints(&taps, 16).expect("response");
        assert_eq!(resp.len(), 16);
        assert_abs_diff_eq!(resp[0], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn per_coeff_grid_sets_the_output_length() {
        let taps = [0.125f64; 8];
        let resp = fir_response(&taps, 32).expect("response");
        assert_eq!(resp.len(), 256);
        // Zero-padding interpolates; the filter's natural bins survive in
        // place, so the DC gain is untouched.
        assert_abs_diff_eq!(resp[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn moving_average_nulls_land_on_the_natural_bins() {
        // A length-M average nulls at multiples of fft_len / M.
        let taps = [0.25f64; 4];
        let resp = fir_response(&taps, 16).expect("response");
        for null in [16, 32, 48] {
            assert_abs_diff_eq!(resp[null], 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn total_points_below_tap_count_fails() {
        let taps = [0.2f64; 5];
        let err = fir_response_numpoints(&taps, 4).expect_err("grid too short");
        assert!(matches!(err, ExecInvariantViolation::InvalidState { .. }));
    }

    #[test]
    fn zero_density_is_rejected_at_construction() {
        assert!(FirResponseKernel::try_new(FirResponseConfig {
            grid: ResponseGrid::PerCoeff(0),
        })
        .is_err());
        assert!(FirResponseKernel::try_new(FirResponseConfig {
            grid: ResponseGrid::TotalPoints(0),
        })
        .is_err());
    }

    #[test]
    fn run_into_checks_output_length() {
        use crate::kernel::KernelLifecycle;

        let kernel = FirResponseKernel::try_new(FirResponseConfig {
            grid: ResponseGrid::PerCoeff(4),
        })
        .expect("valid config");
        let taps = [0.25f64; 4];
        let mut out = [0.0f64; 8];
        let err = kernel.run_into(&taps, &mut out).expect_err("wrong length");
        assert!(matches!(
            err,
            ExecInvariantViolation::LengthMismatch { arg: "out", .. }
        ));
    }

    #[test]
    fn empty_taps_fail_fast() {
        let empty: [f64; 0] = [];
        assert!(fir_response(&empty, 8).is_err());
    }
}
