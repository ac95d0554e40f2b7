//! PSD integration and equivalent noise bandwidth.
//!
//! Integration follows the running-sum-of-squares convention used for
//! total-noise figures of merit: element `k` of the output is the RMS
//! noise accumulated from DC up to (but not including) bin `k + 1`, and
//! the final element is the total integrated noise over the analyzed
//! bandwidth.

use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D};
use crate::signal::traits::PsdIntegrate1D;
use num_traits::{Float, FromPrimitive};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Constructor config for [`PsdIntegrationKernel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PsdIntegrationConfig<F> {
    /// Bandwidth represented by one PSD bin, in the caller's frequency
    /// units.
    pub bandwidth_per_bin: F,
}

/// Trait-first 1D cumulative PSD integration kernel.
///
/// The accumulation is deliberately shifted by one bin: step `k` adds
/// `psd[k - 1]`, not `psd[k]`, so downstream comparisons against
/// closed-form noise bandwidths (e.g. `sqrt(pi/2)` for a one-pole
/// rolloff) land on the conventional values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PsdIntegrationKernel<F> {
    bandwidth_per_bin: F,
}

impl<F> KernelLifecycle for PsdIntegrationKernel<F>
where
    F: Float,
{
    type Config = PsdIntegrationConfig<F>;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        if !config.bandwidth_per_bin.is_finite() || config.bandwidth_per_bin <= F::zero() {
            return Err(ConfigError::InvalidArgument {
                arg: "bandwidth_per_bin",
                reason: "bandwidth per bin must be finite and > 0",
            });
        }
        Ok(Self {
            bandwidth_per_bin: config.bandwidth_per_bin,
        })
    }
}

impl<F> PsdIntegrate1D<F> for PsdIntegrationKernel<F>
where
    F: Float + Copy,
{
    fn run_into<I, O>(&self, psd: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized,
        O: Write1D<F> + ?Sized,
    {
        let psd = psd.read_slice().map_err(ExecInvariantViolation::from)?;
        if psd.is_empty() {
            return Err(ExecInvariantViolation::InvalidState {
                reason: "psd input must be non-empty",
            });
        }
        if psd.iter().any(|v| *v < F::zero()) {
            return Err(ExecInvariantViolation::NumericDomain {
                arg: "psd",
                reason: "magnitude values must be non-negative",
            });
        }
        let out = out.write_slice_mut().map_err(ExecInvariantViolation::from)?;
        if out.len() != psd.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected: psd.len(),
                got: out.len(),
            });
        }

        let bw = self.bandwidth_per_bin;
        let mut acc = psd[0] * psd[0];
        out[0] = (acc * bw).sqrt();
        for k in 1..psd.len() {
            acc = acc + psd[k - 1] * psd[k - 1];
            out[k] = (acc * bw).sqrt();
        }
        Ok(())
    }

    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, psd: &I) -> Result<Vec<F>, ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized,
    {
        let len = psd.read_slice().map_err(ExecInvariantViolation::from)?.len();
        let mut out = alloc::vec![F::zero(); len];
        self.run_into(psd, out.as_mut_slice())?;
        Ok(out)
    }
}

/// Integrate a PSD magnitude curve into a cumulative RMS noise curve.
///
/// The final element is the total integrated noise over the analyzed
/// bandwidth.
#[cfg(feature = "alloc")]
pub fn integrate_psd<F>(psd: &[F], bandwidth_per_bin: F) -> Result<Vec<F>, ExecInvariantViolation>
where
    F: Float + Copy,
{
    let kernel = PsdIntegrationKernel::try_new(PsdIntegrationConfig { bandwidth_per_bin })
        .map_err(ExecInvariantViolation::from)?;
    kernel.run_alloc(psd)
}

/// Equivalent noise bandwidth of an arbitrary magnitude response.
///
/// Computed as `bandwidth_per_bin * sum(response[i]^2)` over the full
/// supplied response.
pub fn arb_enbw<F>(response: &[F], bandwidth_per_bin: F) -> Result<F, ExecInvariantViolation>
where
    F: Float + Copy,
{
    if response.is_empty() {
        return Err(ExecInvariantViolation::InvalidState {
            reason: "response input must be non-empty",
        });
    }
    if !bandwidth_per_bin.is_finite() || bandwidth_per_bin <= F::zero() {
        return Err(ExecInvariantViolation::Config(ConfigError::InvalidArgument {
            arg: "bandwidth_per_bin",
            reason: "bandwidth per bin must be finite and > 0",
        }));
    }
    let sum_sq = response
        .iter()
        .fold(F::zero(), |acc, v| acc + *v * *v);
    Ok(sum_sq * bandwidth_per_bin)
}

/// Equivalent noise bandwidth of an FIR filter, from its taps.
///
/// Closed form `len(taps) * sum(taps^2) / sum(taps)^2`, expressed in bins
/// of the tap-length DFT grid. Invariant under tap scaling, so it applies
/// to unnormalized coefficient tables as read from a file.
pub fn fir_enbw<F>(taps: &[F]) -> Result<F, ExecInvariantViolation>
where
    F: Float + FromPrimitive + Copy,
{
    if taps.is_empty() {
        return Err(ExecInvariantViolation::InvalidState {
            reason: "taps input must be non-empty",
        });
    }
    let sum = taps.iter().fold(F::zero(), |acc, v| acc + *v);
    if sum == F::zero() {
        return Err(ExecInvariantViolation::NumericDomain {
            arg: "taps",
            reason: "tap sum is zero, so the filter has no DC gain to normalize against",
        });
    }
    let sum_sq = taps.iter().fold(F::zero(), |acc, v| acc + *v * *v);
    let len = F::from_usize(taps.len()).expect("tap count conversion");
    Ok(len * sum_sq / (sum * sum))
}
