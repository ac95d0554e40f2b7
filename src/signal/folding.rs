//! Nyquist-zone folding of a wideband noise spectrum.
//!
//! A sampled system observes every Nyquist zone of its input aliased onto
//! baseband, with even-numbered boundaries mirroring the zone in
//! frequency. Folding slices a one-sided wideband magnitude spectrum into
//! `num_zones` segments of `points_per_zone` bins, reverses every other
//! segment, and combines corresponding bins by root-sum-square. Combining
//! by power is the defining choice: physically independent noise
//! contributions add as variances, not amplitudes.

use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D};
use crate::signal::traits::SpectrumFold1D;
use num_traits::Float;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Result bundle for a fold: the individual zones and their RSS sum.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq)]
pub struct FoldedSpectrum<F> {
    /// One sequence of `points_per_zone` bins per zone. Zone 0 is in
    /// forward frequency order; odd zones are mirrored.
    pub zones: Vec<Vec<F>>,
    /// Per-bin root-sum-square across all zones: the aliased noise
    /// density landing at each baseband bin.
    pub rss: Vec<F>,
}

/// Constructor config for [`SpectrumFoldKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldConfig {
    /// Bins per Nyquist zone.
    pub points_per_zone: usize,
    /// Number of zones folded onto baseband.
    pub num_zones: usize,
}

/// Trait-first 1D Nyquist-zone folding kernel.
///
/// The input spectrum must cover at least `points_per_zone * num_zones`
/// bins; a shorter input is an error rather than a silent truncation. Any
/// excess tail beyond the last zone is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumFoldKernel {
    points_per_zone: usize,
    num_zones: usize,
}

impl SpectrumFoldKernel {
    /// Number of input bins consumed by a fold.
    pub fn required_len(&self) -> usize {
        self.points_per_zone * self.num_zones
    }

    /// Map a (zone, offset) pair to its index in the unfolded spectrum,
    /// mirroring odd zones.
    fn source_index(&self, zone: usize, offset: usize) -> usize {
        if zone % 2 == 0 {
            zone * self.points_per_zone + offset
        } else {
            (zone + 1) * self.points_per_zone - 1 - offset
        }
    }
}

impl KernelLifecycle for SpectrumFoldKernel {
    type Config = FoldConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        if config.points_per_zone == 0 {
            return Err(ConfigError::InvalidArgument {
                arg: "points_per_zone",
                reason: "zone width must be > 0",
            });
        }
        if config.num_zones == 0 {
            return Err(ConfigError::InvalidArgument {
                arg: "num_zones",
                reason: "zone count must be > 0",
            });
        }
        Ok(Self {
            points_per_zone: config.points_per_zone,
            num_zones: config.num_zones,
        })
    }
}

impl<F> SpectrumFold1D<F> for SpectrumFoldKernel
where
    F: Float + Copy,
{
    fn run_into<I, O>(&self, spectrum: &I, rss: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized,
        O: Write1D<F> + ?Sized,
    {
        let spectrum = spectrum.read_slice().map_err(ExecInvariantViolation::from)?;
        if spectrum.len() < self.required_len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "spectrum",
                expected: self.required_len(),
                got: spectrum.len(),
            });
        }
        let out = rss.write_slice_mut().map_err(ExecInvariantViolation::from)?;
        if out.len() != self.points_per_zone {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "rss",
                expected: self.points_per_zone,
                got: out.len(),
            });
        }

        for (offset, slot) in out.iter_mut().enumerate() {
            let mut acc = F::zero();
            for zone in 0..self.num_zones {
                let v = spectrum[self.source_index(zone, offset)];
                acc = acc + v * v;
            }
            *slot = acc.sqrt();
        }
        Ok(())
    }

    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, spectrum: &I) -> Result<FoldedSpectrum<F>, ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized,
    {
        let input = spectrum.read_slice().map_err(ExecInvariantViolation::from)?;
        if input.len() < self.required_len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "spectrum",
                expected: self.required_len(),
                got: input.len(),
            });
        }

        let zones: Vec<Vec<F>> = (0..self.num_zones)
            .map(|zone| {
                (0..self.points_per_zone)
                    .map(|offset| input[self.source_index(zone, offset)])
                    .collect()
            })
            .collect();

        let mut rss = alloc::vec![F::zero(); self.points_per_zone];
        self.run_into(spectrum, rss.as_mut_slice())?;
        Ok(FoldedSpectrum { zones, rss })
    }
}

/// Fold a one-sided wideband magnitude spectrum into `num_zones` Nyquist
/// zones of `points_per_zone` bins each.
#[cfg(feature = "alloc")]
pub fn fold_spectrum<F>(
    spectrum: &[F],
    points_per_zone: usize,
    num_zones: usize,
) -> Result<FoldedSpectrum<F>, ExecInvariantViolation>
where
    F: Float + Copy,
{
    let kernel = SpectrumFoldKernel::try_new(FoldConfig {
        points_per_zone,
        num_zones,
    })
    .map_err(ExecInvariantViolation::from)?;
    kernel.run_alloc(spectrum)
}
