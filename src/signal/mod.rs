//! Spectral-analysis components for sampled signal chains.
//!
//! Each component is a stateless pure transform: a validated kernel struct
//! plus a free-function convenience wrapper. Kernels that only accumulate
//! (folding, PSD integration) run without allocating through `run_into`;
//! the FFT-backed kernels (frequency response, waveform synthesis) require
//! `std`.

pub mod traits;

mod folding;
mod noise;

pub use folding::*;
pub use noise::*;

#[cfg(feature = "alloc")]
mod multirate;
#[cfg(feature = "alloc")]
pub use multirate::*;

#[cfg(feature = "std")]
mod response;
#[cfg(feature = "std")]
pub use response::*;

#[cfg(feature = "std")]
mod synthesis;
#[cfg(feature = "std")]
pub use synthesis::*;
