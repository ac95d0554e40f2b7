//! Time-domain synthesis from a one-sided magnitude spectrum.
//!
//! Builds a double-sided Hermitian-symmetric complex spectrum from the
//! supplied magnitudes, assigns independent uniform-random phase to every
//! bin between DC and Nyquist, and inverse-transforms. The result is one
//! realization of a random process whose expected power spectral density
//! matches the input; reproducibility requires seeding the injected
//! random source.

use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D};
use crate::signal::traits::SpectrumSynthesize1D;
use core::f64::consts::TAU;
use nalgebra::Complex;
use rand::Rng;
use rustfft::FftPlanner;

/// Magnitude placed in the Nyquist bin of the double-sided spectrum.
///
/// The one-sided input covers bins `0..N`, leaving bin `N` unspecified.
/// The historical lab-script convention reuses the DC magnitude there;
/// extending the top of the supplied spectrum is the alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NyquistBin {
    /// Reuse `spectrum[0]`, mirroring the DC bin.
    MirrorDc,
    /// Reuse `spectrum[N - 1]`, extending the last supplied bin.
    LastBin,
}

/// Constructor config for [`SpectrumSynthesisKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Nyquist-bin magnitude policy.
    pub nyquist: NyquistBin,
}

/// Trait-first 1D random-phase waveform synthesis kernel.
///
/// For an input of length `N` the output is a real sequence of length
/// `2N` whose forward-FFT magnitude equals the input spectrum; the random
/// phases cancel out of the magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumSynthesisKernel {
    nyquist: NyquistBin,
}

impl KernelLifecycle for SpectrumSynthesisKernel {
    type Config = SynthesisConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        Ok(Self {
            nyquist: config.nyquist,
        })
    }
}

impl SpectrumSynthesize1D<f64> for SpectrumSynthesisKernel {
    fn run_into<R, I, O>(
        &self,
        spectrum: &I,
        rng: &mut R,
        out: &mut O,
    ) -> Result<(), ExecInvariantViolation>
    where
        R: Rng + ?Sized,
        I: Read1D<f64> + ?Sized,
        O: Write1D<f64> + ?Sized,
    {
        let spectrum = spectrum.read_slice().map_err(ExecInvariantViolation::from)?;
        if spectrum.is_empty() {
            return Err(ExecInvariantViolation::InvalidState {
                reason: "spectrum input must be non-empty",
            });
        }
        let out = out.write_slice_mut().map_err(ExecInvariantViolation::from)?;
        if out.len() != 2 * spectrum.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected: 2 * spectrum.len(),
                got: out.len(),
            });
        }
        let y = synthesize_impl(spectrum, self.nyquist, rng);
        out.copy_from_slice(&y);
        Ok(())
    }

    fn run_alloc<R, I>(&self, spectrum: &I, rng: &mut R) -> Result<Vec<f64>, ExecInvariantViolation>
    where
        R: Rng + ?Sized,
        I: Read1D<f64> + ?Sized,
    {
        let spectrum = spectrum.read_slice().map_err(ExecInvariantViolation::from)?;
        if spectrum.is_empty() {
            return Err(ExecInvariantViolation::InvalidState {
                reason: "spectrum input must be non-empty",
            });
        }
        Ok(synthesize_impl(spectrum, self.nyquist, rng))
    }
}

fn synthesize_impl<R: Rng + ?Sized>(spectrum: &[f64], nyquist: NyquistBin, rng: &mut R) -> Vec<f64> {
    let n = spectrum.len();
    let full_len = 2 * n;

    // DC and Nyquist carry phase 0 so the double-sided spectrum stays
    // exactly conjugate-symmetric and the inverse transform is real.
    let mut buf = vec![Complex::new(0.0, 0.0); full_len];
    buf[0] = Complex::new(spectrum[0], 0.0);
    for k in 1..n {
        let phase = rng.random_range(0.0..TAU);
        buf[k] = Complex::from_polar(spectrum[k], phase);
        buf[full_len - k] = buf[k].conj();
    }
    let nyq_mag = match nyquist {
        NyquistBin::MirrorDc => spectrum[0],
        NyquistBin::LastBin => spectrum[n - 1],
    };
    buf[n] = Complex::new(nyq_mag, 0.0);

    let mut planner = FftPlanner::<f64>::new();
    let ifft = planner.plan_fft_inverse(full_len);
    ifft.process(&mut buf);

    let scale = 1.0 / full_len as f64;
    buf.into_iter().map(|c| c.re * scale).collect()
}

/// Synthesize a real waveform of length `2 * spectrum.len()` whose
/// magnitude spectrum matches the supplied one-sided curve, using the
/// lab-script Nyquist convention ([`NyquistBin::MirrorDc`]).
pub fn synthesize_from_half_spectrum<R: Rng + ?Sized>(
    spectrum: &[f64],
    rng: &mut R,
) -> Result<Vec<f64>, ExecInvariantViolation> {
    let kernel = SpectrumSynthesisKernel::try_new(SynthesisConfig {
        nyquist: NyquistBin::MirrorDc,
    })
    .map_err(ExecInvariantViolation::from)?;
    kernel.run_alloc(spectrum, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rustfft::num_complex::Complex as FftComplex;

    fn forward_magnitudes(x: &[f64]) -> Vec<f64> {
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(x.len());
        let mut buf: Vec<FftComplex<f64>> =
            x.iter().map(|&v| FftComplex::new(v, 0.0)).collect();
        fft.process(&mut buf);
        buf.into_iter().map(|c| c.norm()).collect()
    }

    #[test]
    fn output_magnitude_spectrum_matches_the_request() {
        // Phase cancels out of the magnitude, so this holds for any seed.
        let spectrum: Vec<f64> = (0..256).map(|i| 1.0 + (i as f64 / 64.0)).collect();
        let mut rng = StdRng::seed_from_u64(0x5a17);
        let y = synthesize_from_half_spectrum(&spectrum, &mut rng).expect("synthesize");
        assert_eq!(y.len(), 512);

        let mags = forward_magnitudes(&y);
        for (k, &want) in spectrum.iter().enumerate() {
            assert_abs_diff_eq!(mags[k], want, epsilon = 1e-8);
        }
        // MirrorDc: the Nyquist bin reuses the DC magnitude.
        assert_abs_diff_eq!(mags[256], spectrum[0], epsilon = 1e-8);
    }

    #[test]
    fn last_bin_policy_extends_the_top_of_the_spectrum() {
        use crate::kernel::KernelLifecycle;
        use crate::signal::traits::SpectrumSynthesize1D;

        let spectrum: Vec<f64> = (1..=64).map(|i| i as f64).collect();
        let kernel = SpectrumSynthesisKernel::try_new(SynthesisConfig {
            nyquist: NyquistBin::LastBin,
        })
        .expect("config");
        let mut rng = StdRng::seed_from_u64(7);
        let y = kernel.run_alloc(&spectrum, &mut rng).expect("synthesize");
        let mags = forward_magnitudes(&y);
        assert_abs_diff_eq!(mags[64], 64.0, epsilon = 1e-9);
    }

    #[test]
    fn identical_seeds_reproduce_the_waveform() {
        let spectrum = vec![1.0f64; 128];
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let ya = synthesize_from_half_spectrum(&spectrum, &mut a).expect("synthesize");
        let yb = synthesize_from_half_spectrum(&spectrum, &mut b).expect("synthesize");
        assert_eq!(ya, yb);
    }

    #[test]
    fn flat_spectrum_waveform_has_unit_rms_density() {
        // Parseval: a flat unit magnitude spectrum over all 2N bins puts
        // total time-domain energy at (2N) / (2N)^2 * ... i.e. the RMS of
        // the synthesized sequence is 1/sqrt(2N) per sample scale-wise.
        let n = 1024;
        let spectrum = vec![1.0f64; n];
        let mut rng = StdRng::seed_from_u64(1);
        let y = synthesize_from_half_spectrum(&spectrum, &mut rng).expect("synthesize");
        let energy: f64 = y.iter().map(|v| v * v).sum();
        assert_abs_diff_eq!(energy, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn run_into_checks_output_length() {
        use crate::kernel::KernelLifecycle;
        use crate::signal::traits::SpectrumSynthesize1D;

        let kernel = SpectrumSynthesisKernel::try_new(SynthesisConfig {
            nyquist: NyquistBin::MirrorDc,
        })
        .expect("config");
        let spectrum = [1.0f64; 8];
        let mut out = [0.0f64; 8];
        let mut rng = StdRng::seed_from_u64(3);
        let err = kernel
            .run_into(&spectrum, &mut rng, &mut out)
            .expect_err("wrong length");
        assert!(matches!(
            err,
            ExecInvariantViolation::LengthMismatch { arg: "out", .. }
        ));
    }

    #[test]
    fn empty_spectrum_fails_fast() {
        let empty: [f64; 0] = [];
        let mut rng = StdRng::seed_from_u64(9);
        assert!(synthesize_from_half_spectrum(&empty, &mut rng).is_err());
    }
}
