//! # bluefft - preplanned 1-D FFT kernels
//!
//! A one-dimensional FFT engine for complex sequences of any positive
//! length, in `f32` or `f64`. Transforms run through preplanned **kernel**
//! objects that own their twiddle tables and scratch buffers, so a kernel
//! built once can run any number of transforms without allocating.
//!
//! - **Power-of-two lengths**: naturally ordered radix-2 decimation in
//!   time with ping-pong buffering (no bit-reversal pass), forward and
//!   inverse.
//! - **All other lengths**: Bluestein chirp-z convolution over the next
//!   power-of-two extended size, forward only.
//! - **Spectrum helpers**: `fftshift`, `fftfreq`, amplitude extraction
//!   with an overflow-guarded magnitude.
//! - **`no_std` + `alloc`** with scalar math from `libm`; the `std`
//!   feature (default) only adds `std::error::Error` for [`FftError`].
//!
//! ## Example
//!
//! ```
//! use bluefft::{Complex64, FftImpl, Radix2Fft};
//!
//! let mut kernel = Radix2Fft::<f64>::new(8)?;
//! let mut signal: Vec<Complex64> =
//!     (0..8).map(|i| Complex64::new(i as f64, 0.0)).collect();
//! kernel.fft(&mut signal)?;
//! kernel.ifft(&mut signal)?;
//! assert!((signal[3].re - 3.0).abs() < 1e-12);
//! # Ok::<(), bluefft::FftError>(())
//! ```
//!
//! Sizes that are not powers of two go through [`BluesteinFft`], or let
//! [`FftPlanner`] pick and cache the right kernel per length:
//!
//! ```
//! use bluefft::{Complex64, FftPlanner};
//!
//! let mut planner = FftPlanner::<f64>::new();
//! let mut signal = vec![Complex64::new(1.0, 0.0); 12];
//! planner.fft(&mut signal)?;
//! # Ok::<(), bluefft::FftError>(())
//! ```

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Integer helpers for power-of-two bookkeeping.
pub mod bits;
/// Bluestein chirp-z kernel for non-power-of-two lengths.
pub mod bluestein;
/// Radix-2 kernel, the transform driver, and the shared error type.
pub mod fft;
/// Float abstraction, complex arithmetic, guarded magnitude.
pub mod num;
/// Kernel selection and per-size caching.
pub mod planner;
/// Spectrum post-processing utilities.
pub mod spectrum;
/// Twiddle and chirp table construction.
pub mod twiddle;

pub use bluestein::BluesteinFft;
pub use fft::{FftError, FftImpl, Radix2Fft};
pub use num::{hypot, Complex, Complex32, Complex64, Float};
pub use planner::{FftKernel, FftPlanner};
pub use spectrum::{fft_amplitude, fftfreq, fftfreq_into, fftshift};
