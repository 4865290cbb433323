//! Spectrum post-processing: shift, frequency grid, amplitude.

use alloc::vec;
use alloc::vec::Vec;

use crate::fft::FftError;
use crate::num::{Complex, Float};

/// Rotate a sequence in place by `⌊N/2⌋`, moving the zero-frequency bin to
/// the center. Works on real samples and complex bins alike.
///
/// Applying it twice restores an even-length sequence; odd lengths rotate
/// by `2·⌊N/2⌋ mod N` instead.
pub fn fftshift<T: Copy>(data: &mut [T]) {
    let n = data.len();
    let half = n / 2;
    if half == 0 {
        return;
    }
    if n % 2 == 0 {
        for i in 0..half {
            data.swap(i, i + half);
        }
    } else {
        // gcd(⌊N/2⌋, N) = 1 for odd N, so the rotation is one cycle
        // walkable with a single temporary.
        let mut carry = data[0];
        let mut i = 0;
        for _ in 0..n {
            let j = (i + half) % n;
            core::mem::swap(&mut data[j], &mut carry);
            i = j;
        }
    }
}

/// Fill `dest` with the sample-frequency grid for spacing `dt`.
///
/// `Δf = 1/(dt·N)`; the first half counts up from zero, the second half
/// holds the negative frequencies. `dt` is expected to be positive.
pub fn fftfreq_into<T: Float>(dest: &mut [T], dt: T) {
    let n = dest.len();
    if n == 0 {
        return;
    }
    let df = T::one() / (dt * T::from_usize(n));
    let split = if n % 2 == 0 { n / 2 } else { n / 2 + 1 };
    for (i, slot) in dest.iter_mut().enumerate() {
        if i < split {
            *slot = df * T::from_usize(i);
        } else {
            *slot = -df * T::from_usize(n - i);
        }
    }
}

/// Sample-frequency grid for `n` bins at spacing `dt`, as a fresh buffer.
pub fn fftfreq<T: Float>(n: usize, dt: T) -> Vec<T> {
    let mut grid = vec![T::zero(); n];
    fftfreq_into(&mut grid, dt);
    grid
}

/// Amplitude of each spectrum bin scaled by half the output length:
/// `ampl[i] = |spectrum[i]| / ⌊len/2⌋`.
///
/// Magnitudes go through the overflow-guarded [`crate::num::hypot`], so
/// large bins do not overflow and NaN bins stay NaN.
pub fn fft_amplitude<T: Float>(ampl: &mut [T], spectrum: &[Complex<T>]) -> Result<(), FftError> {
    if ampl.len() != spectrum.len() {
        return Err(FftError::MismatchedLengths);
    }
    let norm = T::from_usize(ampl.len() / 2);
    for (slot, &bin) in ampl.iter_mut().zip(spectrum.iter()) {
        *slot = bin.abs() / norm;
    }
    Ok(())
}
