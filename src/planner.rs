//! Size-driven kernel selection and caching.

use alloc::collections::btree_map::{BTreeMap, Entry};

use log::trace;

use crate::bluestein::BluesteinFft;
use crate::fft::{FftError, FftImpl, Radix2Fft};
use crate::num::{Complex, Float};

/// A transform kernel of either kind, chosen by size.
pub enum FftKernel<T: Float> {
    Radix2(Radix2Fft<T>),
    Bluestein(BluesteinFft<T>),
}

impl<T: Float> FftKernel<T> {
    /// Build the kernel appropriate for `size`: radix-2 for powers of two,
    /// Bluestein otherwise.
    pub fn new(size: usize) -> Result<Self, FftError> {
        if size == 0 {
            return Err(FftError::EmptyInput);
        }
        if size & (size - 1) == 0 {
            Ok(FftKernel::Radix2(Radix2Fft::new(size)?))
        } else {
            Ok(FftKernel::Bluestein(BluesteinFft::new(size)?))
        }
    }
}

impl<T: Float> FftImpl<T> for FftKernel<T> {
    fn len(&self) -> usize {
        match self {
            FftKernel::Radix2(k) => k.len(),
            FftKernel::Bluestein(k) => k.len(),
        }
    }

    fn fft(&mut self, signal: &mut [Complex<T>]) -> Result<(), FftError> {
        match self {
            FftKernel::Radix2(k) => k.fft(signal),
            FftKernel::Bluestein(k) => k.fft(signal),
        }
    }

    fn ifft(&mut self, spectrum: &mut [Complex<T>]) -> Result<(), FftError> {
        match self {
            FftKernel::Radix2(k) => k.ifft(spectrum),
            FftKernel::Bluestein(k) => k.ifft(spectrum),
        }
    }
}

/// Kernel cache keyed by transform size.
///
/// Kernels are built on first use and reused afterwards, so a planner held
/// for the lifetime of a processing loop pays each size's setup cost once.
pub struct FftPlanner<T: Float> {
    kernels: BTreeMap<usize, FftKernel<T>>,
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            kernels: BTreeMap::new(),
        }
    }

    /// Number of distinct sizes planned so far.
    pub fn planned_sizes(&self) -> usize {
        self.kernels.len()
    }

    /// The cached kernel for `size`, building it on first request.
    pub fn kernel_for(&mut self, size: usize) -> Result<&mut FftKernel<T>, FftError> {
        match self.kernels.entry(size) {
            Entry::Occupied(hit) => {
                trace!("planner hit: size={size}");
                Ok(hit.into_mut())
            }
            Entry::Vacant(slot) => {
                trace!("planner miss: size={size}");
                Ok(slot.insert(FftKernel::new(size)?))
            }
        }
    }

    /// In-place forward transform using the cached kernel for the signal's
    /// length.
    pub fn fft(&mut self, signal: &mut [Complex<T>]) -> Result<(), FftError> {
        self.kernel_for(signal.len())?.fft(signal)
    }

    /// In-place inverse transform using the cached kernel for the
    /// spectrum's length. Non-power-of-two lengths report
    /// [`FftError::UnsupportedInverse`].
    pub fn ifft(&mut self, spectrum: &mut [Complex<T>]) -> Result<(), FftError> {
        self.kernel_for(spectrum.len())?.ifft(spectrum)
    }
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{FftKernel, FftPlanner};
    use crate::fft::{FftError, FftImpl};
    use crate::num::Complex64;
    use alloc::vec::Vec;

    #[test]
    fn kernel_choice_follows_size_class() {
        assert!(matches!(
            FftKernel::<f64>::new(16),
            Ok(FftKernel::Radix2(_))
        ));
        assert!(matches!(
            FftKernel::<f64>::new(12),
            Ok(FftKernel::Bluestein(_))
        ));
        assert!(matches!(FftKernel::<f64>::new(0), Err(FftError::EmptyInput)));
    }

    #[test]
    fn planner_reuses_kernels_per_size() {
        let mut planner = FftPlanner::<f64>::new();
        let mut a: Vec<Complex64> = (0..8).map(|i| Complex64::new(i as f64, 0.0)).collect();
        let mut b: Vec<Complex64> = (0..12).map(|i| Complex64::new(i as f64, 0.0)).collect();
        planner.fft(&mut a).unwrap();
        planner.fft(&mut b).unwrap();
        planner.fft(&mut a).unwrap();
        assert_eq!(planner.planned_sizes(), 2);
    }
}
