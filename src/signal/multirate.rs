//! Zero-stuffing upsample and strict decimation helpers.
//!
//! These are pure index remaps used to prepare arrays for the spectral
//! kernels. Neither applies any filtering: zero-stuffing is a precursor to
//! an interpolation filter, and the decimator drops samples without
//! anti-alias protection, so callers pre-filter when that matters.

use crate::kernel::ConfigError;
use num_traits::Zero;

use alloc::vec::Vec;

/// Upsample by stuffing `factor - 1` zeros after each input sample.
///
/// The output has length `factor * data.len()`, with the original samples
/// at multiples of `factor` and zeros elsewhere.
pub fn upsample_zero_stuff<T>(data: &[T], factor: usize) -> Result<Vec<T>, ConfigError>
where
    T: Zero + Copy,
{
    if factor == 0 {
        return Err(ConfigError::InvalidArgument {
            arg: "factor",
            reason: "upsample factor must be > 0",
        });
    }
    let mut out = alloc::vec![T::zero(); data.len() * factor];
    for (i, &v) in data.iter().enumerate() {
        out[i * factor] = v;
    }
    Ok(out)
}

/// Keep every `factor`-th sample starting at index 0.
///
/// The output has length `data.len() / factor` (floor), so a partial
/// final stride contributes nothing.
pub fn downsample<T>(data: &[T], factor: usize) -> Result<Vec<T>, ConfigError>
where
    T: Copy,
{
    if factor == 0 {
        return Err(ConfigError::InvalidArgument {
            arg: "factor",
            reason: "downsample factor must be > 0",
        });
    }
    let out_len = data.len() / factor;
    Ok((0..out_len).map(|i| data[i * factor]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stuff_places_samples_on_the_stride() {
        let data = [1.0f64, 2.0, 3.0];
        let up = upsample_zero_stuff(&data, 3).expect("upsample");
        assert_eq!(up, vec![1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn downsample_takes_the_floor_length() {
        let data = [0.0f64, 1.0, 2.0, 3.0, 4.0];
        let down = downsample(&data, 2).expect("downsample");
        assert_eq!(down, vec![0.0, 2.0]);
    }

    #[test]
    fn stuff_then_decimate_round_trips() {
        let data = [4.0f64, -1.0, 0.5, 7.0];
        for factor in 1..=5 {
            let up = upsample_zero_stuff(&data, factor).expect("upsample");
            assert_eq!(up.len(), data.len() * factor);
            let down = downsample(&up, factor).expect("downsample");
            assert_eq!(down, data.to_vec());
        }
    }

    #[test]
    fn unit_factor_is_the_identity() {
        let data = [1.0f64, 2.0, 3.0];
        assert_eq!(upsample_zero_stuff(&data, 1).expect("upsample"), data.to_vec());
        assert_eq!(downsample(&data, 1).expect("downsample"), data.to_vec());
    }

    #[test]
    fn zero_factor_fails_fast() {
        let data = [1.0f64];
        assert!(upsample_zero_stuff(&data, 0).is_err());
        assert!(downsample(&data, 0).is_err());
    }

    #[test]
    fn empty_input_passes_through() {
        let empty: [f64; 0] = [];
        assert!(upsample_zero_stuff(&empty, 4).expect("upsample").is_empty());
        assert!(downsample(&empty, 4).expect("downsample").is_empty());
    }
}
