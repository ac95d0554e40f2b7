//! Shared trait-first kernel substrate.
//!
//! Defines the construction-validation lifecycle, the error taxonomy, and
//! the 1D buffer adapters that the spectral kernels in [`crate::signal`]
//! build on.

mod errors;
mod io;
mod lifecycle;

pub use errors::*;
pub use io::*;
pub use lifecycle::*;
