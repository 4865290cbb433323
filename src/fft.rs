//! Fast Fourier Transform kernels for power-of-two sizes.
//!
//! The transform is a naturally ordered radix-2 decimation-in-time scheme:
//! instead of a bit-reversal permutation, every pass writes its butterflies
//! into the *other* of two equal-length buffers (ping-pong). With `log₂N`
//! passes the result lands in the caller's buffer either directly or after
//! one up-front copy, decided once at construction from the pass parity.
//!
//! A [`Radix2Fft`] kernel owns the scratch buffer and twiddle table for one
//! size, so repeated transforms allocate nothing.

use alloc::vec;
use alloc::vec::Vec;

use log::debug;

use crate::bits::log2_floor;
use crate::num::{Complex, Float};
use crate::twiddle::fill_twiddles;

/// Errors reported by kernel construction and the transform entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Zero-length transform size or input.
    EmptyInput,
    /// A radix-2 kernel requires a power-of-two size.
    NonPowerOfTwo,
    /// A Bluestein kernel handles only sizes that are not powers of two.
    PowerOfTwo,
    /// Signal length differs from the kernel's configured size.
    MismatchedLengths,
    /// The inverse transform is not available on this kernel.
    UnsupportedInverse,
    /// Argument outside the routine's domain.
    InvalidValue,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::EmptyInput => write!(f, "transform size or input is empty"),
            FftError::NonPowerOfTwo => write!(f, "radix-2 kernel size must be a power of two"),
            FftError::PowerOfTwo => {
                write!(f, "Bluestein kernel size must not be a power of two")
            }
            FftError::MismatchedLengths => {
                write!(f, "signal length does not match the kernel size")
            }
            FftError::UnsupportedInverse => {
                write!(f, "inverse transform is not supported by this kernel")
            }
            FftError::InvalidValue => write!(f, "argument outside the routine's domain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Common surface of the preplanned transform kernels.
///
/// `fft`/`ifft` run in place and borrow the kernel mutably for the duration
/// of the call; the kernel's scratch buffers are private to that call, so
/// exclusive access is exactly the borrow checker's `&mut` rule. The
/// copy-based forms allocate one output buffer and delegate.
pub trait FftImpl<T: Float> {
    /// Transform size the kernel was built for.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// In-place forward transform of a length-`len()` signal.
    fn fft(&mut self, signal: &mut [Complex<T>]) -> Result<(), FftError>;

    /// In-place inverse transform of a length-`len()` spectrum.
    fn ifft(&mut self, spectrum: &mut [Complex<T>]) -> Result<(), FftError>;

    /// Forward transform into a fresh buffer, leaving `input` untouched.
    fn fft_vec(&mut self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out = Vec::from(input);
        self.fft(&mut out)?;
        Ok(out)
    }

    /// Inverse transform into a fresh buffer, leaving `input` untouched.
    fn ifft_vec(&mut self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out = Vec::from(input);
        self.ifft(&mut out)?;
        Ok(out)
    }

    /// Forward transform of a real signal promoted to complex.
    fn fft_real_vec(&mut self, input: &[T]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out: Vec<Complex<T>> = input.iter().map(|&x| Complex::new(x, T::zero())).collect();
        self.fft(&mut out)?;
        Ok(out)
    }

    /// Inverse transform of a real spectrum promoted to complex.
    fn ifft_real_vec(&mut self, input: &[T]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out: Vec<Complex<T>> = input.iter().map(|&x| Complex::new(x, T::zero())).collect();
        self.ifft(&mut out)?;
        Ok(out)
    }
}

/// One decimation-in-time butterfly pass over a source/destination pair.
///
/// Reads `pairs` two-point groups from `src` starting at `start`, combining
/// `src[i]` with `src[i + half]`, and writes sums at stride `out_stride`
/// and twiddled differences `span` slots after each sum. `src` is never
/// written, which is what makes the ping-pong passes safe.
fn butterfly<T: Float>(
    dst: &mut [Complex<T>],
    src: &[Complex<T>],
    twiddles: &[Complex<T>],
    start: usize,
    half: usize,
    pairs: usize,
    out_stride: usize,
    span: usize,
) {
    for k in 0..pairs {
        let xi = start + k * span;
        let yi = start + k * out_stride;
        let a = src[xi];
        let b = src[xi + half];
        dst[yi] = a.add(b);
        dst[yi + span] = a.sub(b).mul(twiddles[k * span]);
    }
}

/// Run all `log₂N` butterfly passes over the buffer pair `(sa, ba)`.
///
/// The first pass reads `sa` and writes `ba`; each later pass flips the
/// roles. With an odd pass count the naturally ordered result is in `ba`,
/// with an even count in `sa`. Callers pick the buffer roles up front so
/// the final pass writes the caller's output (see [`Radix2Fft::fft`]).
pub(crate) fn dit_pingpong<T: Float>(
    sa: &mut [Complex<T>],
    ba: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    half: usize,
) {
    let mut pairs = half;
    let mut span = 1;
    let mut out_stride = 2;
    let mut flip = false;
    while pairs > 0 {
        for start in 0..span {
            if flip {
                butterfly(sa, ba, twiddles, start, half, pairs, out_stride, span);
            } else {
                butterfly(ba, sa, twiddles, start, half, pairs, out_stride, span);
            }
        }
        pairs /= 2;
        span *= 2;
        out_stride *= 2;
        flip = !flip;
    }
}

/// Preplanned radix-2 kernel for one power-of-two size.
///
/// Construction allocates the scratch cache and twiddle table; transforms
/// reuse them, so a kernel held across calls never allocates again.
pub struct Radix2Fft<T: Float> {
    size: usize,
    cache: Vec<Complex<T>>,
    twiddles: Vec<Complex<T>>,
    swapped: bool,
}

impl<T: Float> Radix2Fft<T> {
    /// Build a kernel for transforms of length `size`.
    ///
    /// `size` must be a positive power of two (`1` is accepted and the
    /// transform degenerates to the identity).
    pub fn new(size: usize) -> Result<Self, FftError> {
        if size == 0 {
            return Err(FftError::EmptyInput);
        }
        if size & (size - 1) != 0 {
            return Err(FftError::NonPowerOfTwo);
        }
        let stages = log2_floor(size)?;
        let mut twiddles = vec![Complex::zero(); size / 2];
        fill_twiddles(&mut twiddles);
        debug!("radix-2 kernel: size={size} stages={stages}");
        Ok(Self {
            size,
            cache: vec![Complex::zero(); size],
            twiddles,
            swapped: stages % 2 == 1,
        })
    }

    fn check_len(&self, len: usize) -> Result<(), FftError> {
        if len != self.size {
            return Err(FftError::MismatchedLengths);
        }
        Ok(())
    }
}

impl<T: Float> FftImpl<T> for Radix2Fft<T> {
    fn len(&self) -> usize {
        self.size
    }

    fn fft(&mut self, signal: &mut [Complex<T>]) -> Result<(), FftError> {
        self.check_len(signal.len())?;
        let half = self.size / 2;
        if self.swapped {
            // Odd pass count: seed the scratch buffer so the last pass
            // writes the caller's signal.
            self.cache.copy_from_slice(signal);
            dit_pingpong(&mut self.cache, signal, &self.twiddles, half);
        } else {
            dit_pingpong(signal, &mut self.cache, &self.twiddles, half);
        }
        Ok(())
    }

    fn ifft(&mut self, spectrum: &mut [Complex<T>]) -> Result<(), FftError> {
        self.check_len(spectrum.len())?;
        let half = self.size / 2;
        if self.swapped {
            for (slot, &c) in self.cache.iter_mut().zip(spectrum.iter()) {
                *slot = c.conj();
            }
            dit_pingpong(&mut self.cache, spectrum, &self.twiddles, half);
        } else {
            for c in spectrum.iter_mut() {
                *c = c.conj();
            }
            dit_pingpong(spectrum, &mut self.cache, &self.twiddles, half);
        }
        let scale = T::one() / T::from_usize(self.size);
        for c in spectrum.iter_mut() {
            *c = c.conj().scale(scale);
        }
        Ok(())
    }
}
