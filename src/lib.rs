#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! Spectral noise-analysis kernels for sampled data systems.
//!
//! `sigchain` collects the numerical transforms that recur when analyzing
//! the noise behavior of a sampled signal chain: estimating an FIR filter's
//! frequency response with a zero-padded FFT, folding a wideband noise
//! spectrum into repeated Nyquist zones to model aliasing, integrating a
//! power-spectral-density curve into total noise, computing equivalent
//! noise bandwidth, and synthesizing a time-domain waveform from a
//! prescribed one-sided magnitude spectrum.
//!
//! Every component is a stateless pure transform over 1D arrays. Each is
//! exposed as a validated kernel struct (constructed through
//! [`kernel::KernelLifecycle`]) implementing a capability trait from
//! [`signal::traits`], plus a free-function convenience wrapper.
//!
//! ```
//! use sigchain::signal::{fir_response_numpoints, integrate_psd};
//!
//! // Magnitude response of a 4-tap moving average on a 16-point grid,
//! // then the cumulative noise seen through it for unit-density noise.
//! let taps = [0.25f64; 4];
//! let resp = fir_response_numpoints(&taps, 16).unwrap();
//! let total = integrate_psd(&resp, 1.0 / 16.0).unwrap();
//! assert_eq!(total.len(), 16);
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod kernel;
pub mod signal;

#[cfg(feature = "std")]
pub mod coeffs;
