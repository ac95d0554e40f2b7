//! Trait interfaces for the spectral-analysis capabilities.
//!
//! Each kernel implements one capability with checked `run_into` and
//! alloc-gated `run_alloc` entrypoints.

use crate::kernel::{ExecInvariantViolation, Read1D, Write1D};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use crate::signal::FoldedSpectrum;

#[cfg(feature = "std")]
use rand::Rng;

/// FIR magnitude frequency response estimation.
pub trait FirResponse1D<F> {
    /// Compute the response into a caller-provided output buffer.
    ///
    /// The output length must equal the FFT length implied by the kernel's
    /// grid configuration and the tap count.
    fn run_into<I, O>(&self, taps: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized,
        O: Write1D<F> + ?Sized;

    /// Compute the response and allocate the output.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, taps: &I) -> Result<Vec<F>, ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized;
}

/// Nyquist-zone folding of a one-sided wideband spectrum.
pub trait SpectrumFold1D<F> {
    /// Fold the spectrum and write the per-bin RSS sum into `rss`.
    ///
    /// `rss` must have length `points_per_zone`.
    fn run_into<I, O>(&self, spectrum: &I, rss: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized,
        O: Write1D<F> + ?Sized;

    /// Fold the spectrum, materializing the individual zones as well as
    /// the RSS sum.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, spectrum: &I) -> Result<FoldedSpectrum<F>, ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized;
}

/// Cumulative RSS integration of a PSD magnitude curve.
pub trait PsdIntegrate1D<F> {
    /// Integrate into a caller-provided output buffer of the same length
    /// as the input.
    fn run_into<I, O>(&self, psd: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized,
        O: Write1D<F> + ?Sized;

    /// Integrate and allocate the output curve.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, psd: &I) -> Result<Vec<F>, ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized;
}

/// Time-domain synthesis from a one-sided magnitude spectrum.
///
/// The random source supplying per-bin phase is an explicit argument so
/// callers (and tests) control seeding.
#[cfg(feature = "std")]
pub trait SpectrumSynthesize1D<F> {
    /// Synthesize into a caller-provided output buffer of twice the
    /// spectrum length.
    fn run_into<R, I, O>(
        &self,
        spectrum: &I,
        rng: &mut R,
        out: &mut O,
    ) -> Result<(), ExecInvariantViolation>
    where
        R: Rng + ?Sized,
        I: Read1D<F> + ?Sized,
        O: Write1D<F> + ?Sized;

    /// Synthesize and allocate the output waveform.
    fn run_alloc<R, I>(&self, spectrum: &I, rng: &mut R) -> Result<Vec<F>, ExecInvariantViolation>
    where
        R: Rng + ?Sized,
        I: Read1D<F> + ?Sized;
}
