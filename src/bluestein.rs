//! Arbitrary-length transforms via the Bluestein chirp-z construction.
//!
//! A DFT of length `N` is rewritten as a circular convolution against the
//! chirp `exp(i·π·n²/N)`, and the convolution is computed with the radix-2
//! engine at the extended power-of-two size `M >= 2(N-1)`. The price is a
//! constant factor of extended-size transforms per call; the payoff is that
//! one code path covers every length.

use alloc::vec;
use alloc::vec::Vec;

use log::debug;

use crate::bits::{log2_floor, next_pow2};
use crate::fft::{dit_pingpong, FftError, FftImpl};
use crate::num::{Complex, Float};
use crate::twiddle::{fill_chirp, fill_twiddles};

/// Forward transform of the full extended buffer, with `scratch` as the
/// ping-pong partner. `swapped` is the precomputed pass parity for the
/// extended size.
fn transform_ext<T: Float>(
    data: &mut [Complex<T>],
    scratch: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    swapped: bool,
) {
    let half = data.len() / 2;
    if swapped {
        scratch.copy_from_slice(data);
        dit_pingpong(scratch, data, twiddles, half);
    } else {
        dit_pingpong(data, scratch, twiddles, half);
    }
}

/// Inverse transform of the full extended buffer: conjugate, forward,
/// conjugate back, divide by the extended size.
fn inverse_ext<T: Float>(
    data: &mut [Complex<T>],
    scratch: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    swapped: bool,
) {
    for c in data.iter_mut() {
        *c = c.conj();
    }
    transform_ext(data, scratch, twiddles, swapped);
    let scale = T::one() / T::from_usize(data.len());
    for c in data.iter_mut() {
        *c = c.conj().scale(scale);
    }
}

/// Preplanned chirp-z kernel for one non-power-of-two size.
///
/// Owns three extended-size scratch buffers, the extended twiddle table,
/// and the chirp table, so transforms after construction are
/// allocation-free. Only the forward direction is implemented; [`Self::ifft`]
/// reports [`FftError::UnsupportedInverse`] without touching the input.
pub struct BluesteinFft<T: Float> {
    size: usize,
    ext_size: usize,
    cache0: Vec<Complex<T>>,
    cache1: Vec<Complex<T>>,
    cache2: Vec<Complex<T>>,
    twiddles: Vec<Complex<T>>,
    chirp: Vec<Complex<T>>,
    swapped: bool,
}

impl<T: Float> BluesteinFft<T> {
    /// Build a kernel for transforms of length `size`.
    ///
    /// `size` must be at least 3 and not a power of two; power-of-two
    /// lengths belong to [`crate::Radix2Fft`].
    pub fn new(size: usize) -> Result<Self, FftError> {
        if size == 0 {
            return Err(FftError::EmptyInput);
        }
        if size & (size - 1) == 0 {
            return Err(FftError::PowerOfTwo);
        }
        let ext_size = next_pow2(2 * (size - 1));
        let stages = log2_floor(ext_size)?;
        let mut twiddles = vec![Complex::zero(); ext_size / 2];
        fill_twiddles(&mut twiddles);
        let mut chirp = vec![Complex::zero(); ext_size];
        fill_chirp(&mut chirp, size);
        debug!("bluestein kernel: size={size} ext_size={ext_size} stages={stages}");
        Ok(Self {
            size,
            ext_size,
            cache0: vec![Complex::zero(); ext_size],
            cache1: vec![Complex::zero(); ext_size],
            cache2: vec![Complex::zero(); ext_size],
            twiddles,
            chirp,
            swapped: stages % 2 == 1,
        })
    }

    /// Extended power-of-two size the convolution runs at.
    pub fn ext_len(&self) -> usize {
        self.ext_size
    }
}

impl<T: Float> FftImpl<T> for BluesteinFft<T> {
    fn len(&self) -> usize {
        self.size
    }

    fn fft(&mut self, signal: &mut [Complex<T>]) -> Result<(), FftError> {
        if signal.len() != self.size {
            return Err(FftError::MismatchedLengths);
        }

        // Spectrum of the circulant chirp.
        self.cache1.copy_from_slice(&self.chirp);
        transform_ext(
            &mut self.cache1,
            &mut self.cache0,
            &self.twiddles,
            self.swapped,
        );

        // Demodulate the input by the chirp and zero-pad. The chirp has
        // unit magnitude, so dividing by it is conjugate multiplication.
        for i in 0..self.size {
            self.cache2[i] = signal[i].mul(self.chirp[i].conj());
        }
        for slot in self.cache2[self.size..].iter_mut() {
            *slot = Complex::zero();
        }
        transform_ext(
            &mut self.cache2,
            &mut self.cache0,
            &self.twiddles,
            self.swapped,
        );

        // Circular convolution in the frequency domain.
        for (acc, &h) in self.cache2.iter_mut().zip(self.cache1.iter()) {
            *acc = acc.mul(h);
        }
        inverse_ext(
            &mut self.cache2,
            &mut self.cache0,
            &self.twiddles,
            self.swapped,
        );

        // Final chirp demodulation back into the caller's buffer.
        for i in 0..self.size {
            signal[i] = self.cache2[i].mul(self.chirp[i].conj());
        }
        Ok(())
    }

    fn ifft(&mut self, _spectrum: &mut [Complex<T>]) -> Result<(), FftError> {
        Err(FftError::UnsupportedInverse)
    }
}

#[cfg(test)]
mod tests {
    use super::BluesteinFft;
    use crate::fft::{FftError, FftImpl};
    use crate::num::Complex64;

    #[test]
    fn construction_gates_on_non_power_of_two() {
        assert!(matches!(
            BluesteinFft::<f64>::new(0),
            Err(FftError::EmptyInput)
        ));
        assert!(matches!(
            BluesteinFft::<f64>::new(1),
            Err(FftError::PowerOfTwo)
        ));
        assert!(matches!(
            BluesteinFft::<f64>::new(2),
            Err(FftError::PowerOfTwo)
        ));
        assert!(matches!(
            BluesteinFft::<f64>::new(8),
            Err(FftError::PowerOfTwo)
        ));
        assert!(BluesteinFft::<f64>::new(3).is_ok());
    }

    #[test]
    fn extended_size_is_first_pow2_covering_twice_len() {
        let kernel = BluesteinFft::<f64>::new(5).unwrap();
        assert_eq!(kernel.ext_len(), 8);
        let kernel = BluesteinFft::<f64>::new(501).unwrap();
        assert_eq!(kernel.ext_len(), 1024);
    }

    #[test]
    fn inverse_is_reported_unsupported_without_mutation() {
        let mut kernel = BluesteinFft::<f64>::new(5).unwrap();
        let mut spectrum = [Complex64::new(1.0, 2.0); 5];
        assert_eq!(kernel.ifft(&mut spectrum), Err(FftError::UnsupportedInverse));
        assert_eq!(spectrum[0], Complex64::new(1.0, 2.0));
    }
}
